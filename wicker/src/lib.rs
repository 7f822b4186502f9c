//! The runtime half of the *wicker* dependency injection system.
//!
//! Wiring happens at build time: a generated module knows the topological
//! build order of all beans and feeds a [builder](builder::BeanScopeBuilder)
//! with ready-made instances, their assignable type names and cast
//! functions. The resulting [BeanScope](scope::BeanScope) is an immutable
//! index with a priority-aware resolution ladder and ordered lifecycle -
//! there is no reflection and no runtime type inspection beyond casting a
//! handle back to the type the generator recorded for it.
//!
//! ### Resolving beans
//!
//! ```
//! use std::sync::Arc;
//! use wicker::builder::{BeanRegistration, BeanScopeBuilder};
//! use wicker::entry::{BeanContract, TypeKey};
//!
//! struct Pump;
//!
//! impl BeanContract for Pump {
//!     const TYPE_NAME: &'static str = "example.Pump";
//! }
//!
//! let mut builder = BeanScopeBuilder::new();
//! builder.register(
//!     BeanRegistration::new(Arc::new(Pump)).type_key(TypeKey::of::<Pump>(Pump::TYPE_NAME)),
//! );
//! let scope = builder.build();
//!
//! let pump = scope.get::<Pump>(None).unwrap();
//! assert!(pump.is_some());
//! ```

pub mod builder;
pub mod entry;
pub mod error;
pub mod lifecycle;
pub mod map;
pub mod scope;
