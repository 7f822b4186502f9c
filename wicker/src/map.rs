//! The runtime bean index. Read-only once the scope is built.

use crate::entry::CandidateEntry;
use fxhash::FxHashMap;
use std::sync::Arc;

/// String key for a `(type, qualifier)` pair.
fn key(type_name: &str, qualifier: Option<&str>) -> String {
    match qualifier {
        Some(qualifier) => format!("{type_name}:{qualifier}"),
        None => type_name.to_string(),
    }
}

/// Indexes every registered entry under each of its assignable type names,
/// both unqualified and (when the bean carries a qualifier) qualified, plus
/// an index by annotation name. Bucket order is registration order, which
/// the emitter aligns with topological build order.
#[derive(Default, Debug)]
pub struct BeanMap {
    by_key: FxHashMap<String, Vec<Arc<CandidateEntry>>>,
    by_annotation: FxHashMap<String, Vec<Arc<CandidateEntry>>>,
}

impl BeanMap {
    pub(crate) fn register(&mut self, entry: CandidateEntry) {
        let entry = Arc::new(entry);
        for type_key in &entry.types {
            self.by_key
                .entry(key(&type_key.name, None))
                .or_default()
                .push(entry.clone());
            if let Some(qualifier) = entry.qualifier.as_deref() {
                self.by_key
                    .entry(key(&type_key.name, Some(qualifier)))
                    .or_default()
                    .push(entry.clone());
            }
        }
        for tag in &entry.annotations {
            self.by_annotation
                .entry(tag.name.clone())
                .or_default()
                .push(entry.clone());
        }
    }

    /// All entries registered under `(type, qualifier)` in insertion order.
    pub fn candidates(&self, type_name: &str, qualifier: Option<&str>) -> &[Arc<CandidateEntry>] {
        self.by_key
            .get(&key(type_name, qualifier))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All entries carrying the annotation, in insertion order.
    pub fn with_annotation(&self, name: &str) -> &[Arc<CandidateEntry>] {
        self.by_annotation
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
