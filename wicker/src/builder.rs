//! Scope construction. Generated wiring modules drive a builder:
//! registrations in topological build order, lifecycle entries alongside,
//! then `build()` seals the map into an immutable [BeanScope].

use crate::entry::{AnnotationTag, BeanHandle, BeanPriority, CandidateEntry, TypeKey};
use crate::lifecycle::BeanLifecycle;
use crate::map::BeanMap;
use crate::scope::BeanScope;
use derivative::Derivative;
use std::sync::Arc;
use tracing::debug;

/// One bean registration: the instance, its priority tier, optional
/// qualifier, the assignable types it is indexed under (concrete type
/// first) and the annotations visible at runtime.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct BeanRegistration {
    #[derivative(Debug = "ignore")]
    pub instance: BeanHandle,
    pub priority: BeanPriority,
    pub qualifier: Option<String>,
    pub types: Vec<TypeKey>,
    pub annotations: Vec<AnnotationTag>,
}

impl BeanRegistration {
    pub fn new(instance: BeanHandle) -> Self {
        Self {
            instance,
            priority: BeanPriority::Normal,
            qualifier: None,
            types: Vec::new(),
            annotations: Vec::new(),
        }
    }

    pub fn priority(mut self, priority: BeanPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.qualifier = Some(qualifier.into());
        self
    }

    pub fn type_key(mut self, type_key: TypeKey) -> Self {
        self.types.push(type_key);
        self
    }

    pub fn annotation(mut self, tag: AnnotationTag) -> Self {
        self.annotations.push(tag);
        self
    }
}

/// Builds a [BeanScope] from module registrations.
#[derive(Default)]
pub struct BeanScopeBuilder {
    beans: BeanMap,
    lifecycle: Vec<Arc<dyn BeanLifecycle>>,
}

impl BeanScopeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, registration: BeanRegistration) -> &mut Self {
        debug!(
            "registering bean {:?} priority {:?}",
            registration.types.first().map(|key| key.name.as_str()),
            registration.priority
        );
        self.beans.register(CandidateEntry {
            handle: registration.instance,
            priority: registration.priority,
            qualifier: registration.qualifier,
            types: registration.types,
            annotations: registration.annotations,
        });
        self
    }

    /// Registers an externally supplied instance, typically a test double.
    /// Supplied beans win resolution outright regardless of other
    /// candidates for the same type.
    pub fn supply(&mut self, registration: BeanRegistration) -> &mut Self {
        self.register(registration.priority(BeanPriority::Supplied))
    }

    /// Appends a bean to the ordered lifecycle list driven by
    /// [start](BeanScope::start) and [close](BeanScope::close).
    pub fn register_lifecycle(&mut self, entry: Arc<dyn BeanLifecycle>) -> &mut Self {
        self.lifecycle.push(entry);
        self
    }

    pub fn build(self) -> BeanScope {
        BeanScope::new(self.beans, self.lifecycle)
    }
}
