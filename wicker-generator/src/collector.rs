//! Accumulates injection points while a bean hierarchy is walked.
//!
//! The walk visits the concrete bean type first and then each superclass in
//! turn, so precedence rules here all lean on most-derived-first ordering:
//! a derived `Inject` method shadows a base method of the same name, and a
//! derived override *without* `Inject` suppresses the base declaration
//! entirely.

use crate::annotation::{has_annotation, BEAN, INJECT, POST_CONSTRUCT, PRE_DESTROY};
use crate::element::{ConstructorElement, FieldElement, MethodElement, TypeElement};
use crate::field_reader::read_field;
use crate::method_reader::{read_constructor, read_method};
use crate::point::{ConstructorPoint, FieldPoint, MethodPoint};
use fxhash::FxHashSet;
use itertools::Itertools;

pub struct InjectionCollector<'a> {
    base_type: &'a TypeElement,
    factory: bool,
    inject_constructor: Option<ConstructorPoint>,
    other_constructors: Vec<ConstructorPoint>,
    factory_methods: Vec<MethodPoint>,
    inject_fields: Vec<FieldPoint>,
    inject_methods: Vec<MethodPoint>,
    method_keys: FxHashSet<String>,
    not_inject_methods: FxHashSet<String>,
    post_construct: Option<String>,
    pre_destroy: Option<String>,
}

impl<'a> InjectionCollector<'a> {
    pub fn new(base_type: &'a TypeElement, factory: bool) -> Self {
        Self {
            base_type,
            factory,
            inject_constructor: None,
            other_constructors: Vec::new(),
            factory_methods: Vec::new(),
            inject_fields: Vec::new(),
            inject_methods: Vec::new(),
            method_keys: FxHashSet::default(),
            not_inject_methods: FxHashSet::default(),
            post_construct: None,
            pre_destroy: None,
        }
    }

    /// Reads the direct declarations of one type in the hierarchy.
    pub fn read(&mut self, type_element: &TypeElement) {
        for constructor in &type_element.constructors {
            self.read_constructor(constructor, type_element);
        }
        for field in &type_element.fields {
            self.read_field(field);
        }
        for method in &type_element.methods {
            self.read_method(method, type_element);
        }
    }

    fn read_field(&mut self, field: &FieldElement) {
        if has_annotation(&field.annotations, INJECT) {
            self.inject_fields.push(read_field(field));
        }
    }

    fn read_constructor(&mut self, constructor: &ConstructorElement, type_element: &TypeElement) {
        if !std::ptr::eq(type_element, self.base_type) {
            // only the concrete type's constructors are candidates
            return;
        }
        let point = read_constructor(constructor, &self.base_type.qualified_name);
        if has_annotation(&constructor.annotations, INJECT) {
            self.inject_constructor = Some(point);
        } else if !point.visibility.is_private() {
            self.other_constructors.push(point);
        }
    }

    fn read_method(&mut self, method: &MethodElement, type_element: &TypeElement) {
        if self.factory && has_annotation(&method.annotations, BEAN) {
            self.factory_methods
                .push(read_method(method, &self.base_type.qualified_name));
        }
        let key = method.name.as_str();
        if has_annotation(&method.annotations, INJECT) && !self.not_inject_methods.contains(key) {
            if !self.method_keys.contains(key) && !method.visibility.is_private() {
                self.method_keys.insert(key.to_string());
                self.inject_methods
                    .push(read_method(method, &type_element.qualified_name));
            }
        } else {
            // an override without Inject suppresses the base declaration
            self.not_inject_methods.insert(key.to_string());
        }
        if self.post_construct.is_none() && has_annotation(&method.annotations, POST_CONSTRUCT) {
            self.post_construct = Some(method.name.clone());
        }
        if self.pre_destroy.is_none() && has_annotation(&method.annotations, PRE_DESTROY) {
            self.pre_destroy = Some(method.name.clone());
        }
    }

    /// Inject fields in base-to-derived execution order.
    pub fn inject_fields(&self) -> Vec<FieldPoint> {
        self.inject_fields.iter().rev().cloned().collect()
    }

    /// Inject methods in base-to-derived execution order.
    pub fn inject_methods(&self) -> Vec<MethodPoint> {
        self.inject_methods.iter().rev().cloned().collect()
    }

    /// Factory methods in collection order.
    pub fn factory_methods(&self) -> Vec<MethodPoint> {
        self.factory_methods.clone()
    }

    pub fn post_construct(&self) -> Option<&str> {
        self.post_construct.as_deref()
    }

    pub fn pre_destroy(&self) -> Option<&str> {
        self.pre_destroy.as_deref()
    }

    /// The chosen constructor: an `Inject` constructor wins, otherwise the
    /// sole non-private constructor, otherwise the sole public one.
    pub fn constructor(&self) -> Option<&ConstructorPoint> {
        if let Some(constructor) = &self.inject_constructor {
            return Some(constructor);
        }
        self.other_constructors.iter().exactly_one().ok().or_else(|| {
            self.other_constructors
                .iter()
                .filter(|constructor| constructor.visibility.is_public())
                .exactly_one()
                .ok()
        })
    }
}
