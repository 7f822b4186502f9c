//! Runtime bean descriptors.
//!
//! Beans are stored as opaque [BeanHandle]s tagged with the canonical type
//! names they satisfy. Retrieval as a concrete type or trait object goes
//! through a [CastFn] the emitter writes per assignable type, so the scope
//! never inspects instance types at runtime.

use crate::error::ScopeError;
use derivative::Derivative;
use std::any::Any;
use std::sync::Arc;

/// Type-erased shared bean instance.
pub type BeanHandle = Arc<dyn Any + Send + Sync>;

/// Converts a handle into a boxed `Arc<T>` for one assignable type. On a
/// mismatched concrete type the handle is returned unchanged.
pub type CastFn = fn(BeanHandle) -> Result<Box<dyn Any>, BeanHandle>;

/// Implemented by generated code for every bean type and bean trait,
/// binding the Rust type to the canonical name it is indexed under.
pub trait BeanContract: 'static {
    const TYPE_NAME: &'static str;
}

/// Resolution tier of a registered bean. `Supplied` beans are externally
/// provided instances (test doubles) and defeat all other candidates.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum BeanPriority {
    Supplied,
    Primary,
    Normal,
    Secondary,
}

/// An annotation carried by a bean into the runtime: name plus the raw
/// value string recorded by the generator. Priority sorting parses the
/// value at sort time.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AnnotationTag {
    pub name: String,
    pub value: Option<String>,
}

impl AnnotationTag {
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

/// One assignable type of a registration: the canonical name the bean is
/// indexed under and the cast used to retrieve it as that type.
#[derive(Derivative, Clone)]
#[derivative(Debug)]
pub struct TypeKey {
    pub name: String,
    #[derivative(Debug = "ignore")]
    pub cast: CastFn,
}

fn concrete_cast<T: Any + Send + Sync>(handle: BeanHandle) -> Result<Box<dyn Any>, BeanHandle> {
    handle.downcast::<T>().map(|p| Box::new(p) as Box<dyn Any>)
}

impl TypeKey {
    pub fn new(name: impl Into<String>, cast: CastFn) -> Self {
        Self {
            name: name.into(),
            cast,
        }
    }

    /// Key for retrieving the bean as its own concrete type.
    pub fn of<T: Any + Send + Sync>(name: impl Into<String>) -> Self {
        Self::new(name, concrete_cast::<T>)
    }
}

/// A wiring candidate: the bean with its priority tier, optional
/// qualifier, assignable types and runtime-visible annotations.
#[derive(Derivative, Clone)]
#[derivative(Debug)]
pub struct CandidateEntry {
    #[derivative(Debug = "ignore")]
    pub handle: BeanHandle,
    pub priority: BeanPriority,
    pub qualifier: Option<String>,
    pub types: Vec<TypeKey>,
    pub annotations: Vec<AnnotationTag>,
}

impl CandidateEntry {
    pub fn is_supplied(&self) -> bool {
        self.priority == BeanPriority::Supplied
    }

    pub fn is_primary(&self) -> bool {
        self.priority == BeanPriority::Primary
    }

    pub fn is_secondary(&self) -> bool {
        self.priority == BeanPriority::Secondary
    }

    /// The concrete type name; registrations list it first.
    pub fn type_name(&self) -> &str {
        self.types.first().map(|key| key.name.as_str()).unwrap_or("")
    }

    pub fn annotation(&self, name: &str) -> Option<&AnnotationTag> {
        self.annotations.iter().find(|tag| tag.name == name)
    }

    fn cast_for(&self, name: &str) -> Option<CastFn> {
        self.types
            .iter()
            .find(|key| key.name == name)
            .map(|key| key.cast)
    }

    /// Retrieves the bean under one of its contracts.
    pub fn bean<T: BeanContract + ?Sized>(&self) -> Result<Arc<T>, ScopeError> {
        let incompatible = || ScopeError::IncompatibleHandle {
            type_key: T::TYPE_NAME.to_string(),
        };
        let cast = self.cast_for(T::TYPE_NAME).ok_or_else(incompatible)?;
        let boxed = (cast)(self.handle.clone()).map_err(|_| incompatible())?;
        boxed
            .downcast::<Arc<T>>()
            .map(|arc| *arc)
            .map_err(|_| incompatible())
    }
}
