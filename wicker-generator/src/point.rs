//! Normalized injection points and the descriptor handed to the emitter.

use crate::element::Visibility;

/// One parameter of an injection constructor or method.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParamPoint {
    pub name: String,
    /// Declared type with any `Provider` wrapper removed.
    pub type_name: String,
    pub qualifier: Option<String>,
    pub nullable: bool,
    /// True when the declaration wrapped the type in `Provider<T>`.
    pub via_provider: bool,
}

/// A field injected after construction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldPoint {
    pub field_name: String,
    pub type_name: String,
    pub qualifier: Option<String>,
    pub nullable: bool,
    pub via_provider: bool,
}

/// A method injected after construction, or a factory producer method.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MethodPoint {
    pub method_name: String,
    pub declaring_type: String,
    pub return_type: Option<String>,
    pub visibility: Visibility,
    /// `Named` value on the method itself; significant for factory methods.
    pub qualifier: Option<String>,
    pub params: Vec<ParamPoint>,
}

/// The single constructor selected for a bean.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConstructorPoint {
    pub declaring_type: String,
    pub visibility: Visibility,
    pub params: Vec<ParamPoint>,
}

/// The reader's complete output for one bean. Produced once at generation
/// time and immutable thereafter; the emitter derives wiring code from it.
///
/// `assignable_types` starts with `base_type` (when present) followed by
/// each non-generic supertype from nearest to furthest. Fields and methods
/// are in base-to-derived execution order; factory methods in collection
/// order.
#[derive(Clone, Debug)]
pub struct BeanDescriptor {
    /// Absent when the bean's own type is generic; such a bean is only
    /// resolvable through its non-generic supertypes.
    pub base_type: Option<String>,
    pub assignable_types: Vec<String>,
    pub implicit_qualifier: Option<String>,
    pub constructor: ConstructorPoint,
    pub inject_fields: Vec<FieldPoint>,
    pub inject_methods: Vec<MethodPoint>,
    pub factory_methods: Vec<MethodPoint>,
    pub post_construct: Option<String>,
    pub pre_destroy: Option<String>,
}
