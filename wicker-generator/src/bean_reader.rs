//! Walks one bean type and its supertypes, producing a [BeanDescriptor].

use crate::collector::InjectionCollector;
use crate::element::{ElementLookup, TypeElement, ROOT_OBJECT};
use crate::error::ReadError;
use crate::point::BeanDescriptor;
use crate::typename::{is_generic, simple_name, unwrap_provider};
use tracing::debug;

/// Reads the inheritance hierarchy and injection points of one bean type.
///
/// The walk starts at the concrete type and climbs direct superclasses
/// until the root object type. Generic links contribute no assignable type
/// and no injection points, but the walk continues past them into their
/// own supertypes.
pub struct BeanReader<'a> {
    base_type: &'a TypeElement,
    lookup: &'a dyn ElementLookup,
    base_type_raw: Option<String>,
    assignable_types: Vec<String>,
    qualifier_name: Option<String>,
    collector: InjectionCollector<'a>,
}

impl<'a> BeanReader<'a> {
    pub fn new(base_type: &'a TypeElement, lookup: &'a dyn ElementLookup, factory: bool) -> Self {
        Self {
            base_type,
            lookup,
            base_type_raw: None,
            assignable_types: Vec::new(),
            qualifier_name: None,
            collector: InjectionCollector::new(base_type, factory),
        }
    }

    pub fn process(&mut self) {
        debug!("reading bean type {}", self.base_type.qualified_name);
        let base = unwrap_provider(&self.base_type.qualified_name);
        if !is_generic(base) {
            self.base_type_raw = Some(base.to_string());
            self.assignable_types.push(base.to_string());
        }
        // a generic bean keeps its constructor and injection points; it only
        // loses its own entry in the type-keyed indexes
        self.collector.read(self.base_type);
        let lookup = self.lookup;
        if let Some(super_element) = self
            .base_type
            .superclass
            .as_deref()
            .and_then(|name| lookup.type_element(name))
        {
            self.read_qualifier_name(super_element);
            self.add_super_type(super_element);
        }
    }

    /// Naming-convention qualifier: `ElectricHeater extends Heater` implies
    /// the qualifier `electric`.
    fn read_qualifier_name(&mut self, super_element: &TypeElement) {
        let base_name = self.base_type.simple_name();
        let super_name = super_element.simple_name();
        if base_name.len() > super_name.len() && base_name.ends_with(super_name) {
            self.qualifier_name =
                Some(base_name[..base_name.len() - super_name.len()].to_lowercase());
        }
    }

    fn add_super_type(&mut self, element: &TypeElement) {
        if element.qualified_name == ROOT_OBJECT {
            return;
        }
        let unwrapped = unwrap_provider(&element.qualified_name);
        if !is_generic(unwrapped) {
            self.assignable_types.push(unwrapped.to_string());
            self.collector.read(element);
        }
        // skip generic, continue recursion
        let lookup = self.lookup;
        if let Some(next) = element
            .superclass
            .as_deref()
            .and_then(|name| lookup.type_element(name))
        {
            self.add_super_type(next);
        }
    }

    /// Assembles the descriptor, failing when no constructor is selectable.
    pub fn descriptor(self) -> Result<BeanDescriptor, ReadError> {
        let constructor =
            self.collector
                .constructor()
                .cloned()
                .ok_or_else(|| ReadError::NoConstructor {
                    bean: simple_name(&self.base_type.qualified_name).to_string(),
                })?;
        Ok(BeanDescriptor {
            base_type: self.base_type_raw,
            assignable_types: self.assignable_types,
            implicit_qualifier: self.qualifier_name,
            constructor,
            inject_fields: self.collector.inject_fields(),
            inject_methods: self.collector.inject_methods(),
            factory_methods: self.collector.factory_methods(),
            post_construct: self.collector.post_construct().map(str::to_string),
            pre_destroy: self.collector.pre_destroy().map(str::to_string),
        })
    }
}

/// Reads an ordinary bean type.
pub fn read_bean(
    base_type: &TypeElement,
    lookup: &dyn ElementLookup,
) -> Result<BeanDescriptor, ReadError> {
    read(base_type, lookup, false)
}

/// Reads a factory type, collecting its `Bean` producer methods as well.
pub fn read_factory(
    base_type: &TypeElement,
    lookup: &dyn ElementLookup,
) -> Result<BeanDescriptor, ReadError> {
    read(base_type, lookup, true)
}

fn read(
    base_type: &TypeElement,
    lookup: &dyn ElementLookup,
    factory: bool,
) -> Result<BeanDescriptor, ReadError> {
    let mut reader = BeanReader::new(base_type, lookup, factory);
    reader.process();
    reader.descriptor()
}
