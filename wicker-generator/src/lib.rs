//! The generation-time half of the *wicker* dependency injection system.
//!
//! The annotation-processing driver feeds [element](element) trees into the
//! [BeanReader](bean_reader::BeanReader), which walks a bean type and its
//! entire superclass chain and produces a normalized
//! [BeanDescriptor](point::BeanDescriptor): the chosen constructor, the
//! fields and methods to inject after construction, factory methods,
//! lifecycle hooks, the implicit qualifier inferred from naming convention,
//! and the set of canonical type names the bean is assignable to. The code
//! emitter consumes descriptors and writes the wiring module executed at
//! runtime by the `wicker` crate.
//!
//! ### Reading a bean
//!
//! ```
//! use wicker_generator::annotation::{Annotation, INJECT};
//! use wicker_generator::bean_reader::read_bean;
//! use wicker_generator::element::{
//!     ConstructorElement, ElementStore, ParamElement, TypeElement,
//! };
//!
//! let heater = TypeElement::new("example.Heater");
//! let electric = TypeElement::new("example.ElectricHeater")
//!     .extends("example.Heater")
//!     .with_constructor(
//!         ConstructorElement::new()
//!             .with_annotation(Annotation::marker(INJECT))
//!             .param(ParamElement::new("pump", "example.Pump")),
//!     );
//!
//! let store = ElementStore::new().with(heater);
//! let descriptor = read_bean(&electric, &store).unwrap();
//!
//! assert_eq!(descriptor.implicit_qualifier.as_deref(), Some("electric"));
//! assert_eq!(
//!     descriptor.assignable_types,
//!     ["example.ElectricHeater", "example.Heater"]
//! );
//! ```

pub mod annotation;
pub mod bean_reader;
pub mod collector;
pub mod element;
pub mod error;
pub mod field_reader;
pub mod method_reader;
pub mod point;
pub mod typename;
