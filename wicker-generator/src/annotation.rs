//! Annotation probing. Annotations are matched by simple name only, so the
//! reader recognizes e.g. `PostConstruct` regardless of which namespace the
//! source declaration imported it from.

/// Marks an injection point (constructor, field or method).
pub const INJECT: &str = "Inject";
/// Carries a qualifier value on a bean or injection site.
pub const NAMED: &str = "Named";
/// Marks an injection site whose dependency may be absent.
pub const NULLABLE: &str = "Nullable";
/// Marks a producer method on a factory bean.
pub const BEAN: &str = "Bean";
/// Marks a factory type.
pub const FACTORY: &str = "Factory";
/// Marks a singleton bean.
pub const SINGLETON: &str = "Singleton";
/// Preferred candidate in single-instance resolution.
pub const PRIMARY: &str = "Primary";
/// Fallback candidate in single-instance resolution.
pub const SECONDARY: &str = "Secondary";
/// Lifecycle hook fired on scope start.
pub const POST_CONSTRUCT: &str = "PostConstruct";
/// Lifecycle hook fired on scope close.
pub const PRE_DESTROY: &str = "PreDestroy";
/// Integer ordering annotation used by priority-sorted list lookups.
pub const PRIORITY: &str = "Priority";

/// An annotation as seen on a source declaration: a simple name and an
/// optional single value (`Named("electric")`, `Priority(100)`).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Annotation {
    pub name: String,
    pub value: Option<String>,
}

impl Annotation {
    /// A value-less marker annotation such as `Inject`.
    pub fn marker(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }
}

pub fn has_annotation(annotations: &[Annotation], name: &str) -> bool {
    annotations.iter().any(|annotation| annotation.name == name)
}

/// The value of the `Named` annotation, if present.
pub fn named_value(annotations: &[Annotation]) -> Option<&str> {
    annotations
        .iter()
        .find(|annotation| annotation.name == NAMED)
        .and_then(|annotation| annotation.value.as_deref())
}

pub fn is_nullable(annotations: &[Annotation]) -> bool {
    has_annotation(annotations, NULLABLE)
}
