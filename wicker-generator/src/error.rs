use thiserror::Error;

/// Errors raised while reading bean metadata. Reads are fatal per bean: a
/// failed walk emits no descriptor at all.
#[derive(Error, Clone, Eq, PartialEq, Debug)]
pub enum ReadError {
    #[error("No usable constructor for bean {bean} - annotate one with Inject or leave a single non-private constructor")]
    NoConstructor { bean: String },
}
