use wicker_generator::annotation::{
    Annotation, BEAN, INJECT, NAMED, NULLABLE, POST_CONSTRUCT, PRE_DESTROY,
};
use wicker_generator::bean_reader::{read_bean, read_factory};
use wicker_generator::element::{
    ConstructorElement, ElementStore, FieldElement, MethodElement, ParamElement, TypeElement,
    ROOT_OBJECT,
};
use wicker_generator::error::ReadError;
use wicker_generator::typename::is_generic;

fn default_constructor() -> ConstructorElement {
    ConstructorElement::new()
}

#[test]
fn should_infer_implicit_qualifier_from_naming_convention() {
    let heater = TypeElement::new("example.Heater")
        .extends(ROOT_OBJECT)
        .with_constructor(default_constructor());
    let electric = TypeElement::new("example.ElectricHeater")
        .extends("example.Heater")
        .with_constructor(default_constructor());

    let store = ElementStore::new().with(heater);
    let descriptor = read_bean(&electric, &store).unwrap();

    assert_eq!(descriptor.base_type.as_deref(), Some("example.ElectricHeater"));
    assert_eq!(descriptor.implicit_qualifier.as_deref(), Some("electric"));
    assert_eq!(
        descriptor.assignable_types,
        ["example.ElectricHeater", "example.Heater"]
    );
}

#[test]
fn should_not_infer_qualifier_when_names_match_exactly() {
    let heater = TypeElement::new("example.Heater").with_constructor(default_constructor());
    let shadow = TypeElement::new("other.Heater")
        .extends("example.Heater")
        .with_constructor(default_constructor());

    let store = ElementStore::new().with(heater);
    let descriptor = read_bean(&shadow, &store).unwrap();
    assert_eq!(descriptor.implicit_qualifier, None);
}

#[test]
fn should_suppress_base_inject_method_overridden_without_inject() {
    // Base declares two inject methods; Child overrides one of them and
    // drops the annotation. Only the untouched one must survive.
    let base = TypeElement::new("example.Base")
        .with_method(
            MethodElement::new("baseBaseOverride")
                .with_annotation(Annotation::marker(INJECT))
                .param(ParamElement::new("steamer", "example.Steamer")),
        )
        .with_method(
            MethodElement::new("baseBaseMethod")
                .with_annotation(Annotation::marker(INJECT))
                .param(ParamElement::new("steamer", "example.Steamer")),
        );
    let child = TypeElement::new("example.Child")
        .extends("example.Base")
        .with_constructor(default_constructor())
        .with_method(
            MethodElement::new("baseBaseOverride")
                .param(ParamElement::new("steamer", "example.Steamer")),
        );

    let store = ElementStore::new().with(base);
    let descriptor = read_bean(&child, &store).unwrap();

    let names: Vec<_> = descriptor
        .inject_methods
        .iter()
        .map(|method| method.method_name.as_str())
        .collect();
    assert_eq!(names, ["baseBaseMethod"]);
}

#[test]
fn should_take_derived_inject_method_over_base() {
    let base = TypeElement::new("example.Base").with_method(
        MethodElement::new("wire")
            .with_annotation(Annotation::marker(INJECT))
            .param(ParamElement::new("pump", "example.Pump")),
    );
    let child = TypeElement::new("example.Child")
        .extends("example.Base")
        .with_constructor(default_constructor())
        .with_method(
            MethodElement::new("wire")
                .with_annotation(Annotation::marker(INJECT))
                .param(ParamElement::new("pump", "example.Pump")),
        );

    let store = ElementStore::new().with(base);
    let descriptor = read_bean(&child, &store).unwrap();

    assert_eq!(descriptor.inject_methods.len(), 1);
    assert_eq!(descriptor.inject_methods[0].declaring_type, "example.Child");
}

#[test]
fn should_order_injection_points_base_to_derived() {
    let base = TypeElement::new("example.Base")
        .with_field(
            FieldElement::new("baseField", "example.Steamer")
                .with_annotation(Annotation::marker(INJECT)),
        )
        .with_method(
            MethodElement::new("baseWire")
                .with_annotation(Annotation::marker(INJECT))
                .param(ParamElement::new("steamer", "example.Steamer")),
        );
    let child = TypeElement::new("example.Child")
        .extends("example.Base")
        .with_constructor(default_constructor())
        .with_field(
            FieldElement::new("childField", "example.Pump")
                .with_annotation(Annotation::marker(INJECT)),
        )
        .with_method(
            MethodElement::new("childWire")
                .with_annotation(Annotation::marker(INJECT))
                .param(ParamElement::new("pump", "example.Pump")),
        );

    let store = ElementStore::new().with(base);
    let descriptor = read_bean(&child, &store).unwrap();

    let fields: Vec<_> = descriptor
        .inject_fields
        .iter()
        .map(|field| field.field_name.as_str())
        .collect();
    assert_eq!(fields, ["baseField", "childField"]);

    let methods: Vec<_> = descriptor
        .inject_methods
        .iter()
        .map(|method| method.method_name.as_str())
        .collect();
    assert_eq!(methods, ["baseWire", "childWire"]);
}

#[test]
fn should_capture_nullable_field_and_param() {
    let bean = TypeElement::new("example.NoImpUser")
        .with_constructor(default_constructor())
        .with_field(
            FieldElement::new("viaField", "example.NoImpHere")
                .with_annotation(Annotation::marker(INJECT))
                .with_annotation(Annotation::marker(NULLABLE)),
        )
        .with_method(
            MethodElement::new("with")
                .with_annotation(Annotation::marker(INJECT))
                .param(
                    ParamElement::new("viaMethod", "example.NoImpHere")
                        .with_annotation(Annotation::marker(NULLABLE)),
                ),
        );

    let store = ElementStore::new();
    let descriptor = read_bean(&bean, &store).unwrap();

    assert!(descriptor.inject_fields[0].nullable);
    assert!(descriptor.inject_methods[0].params[0].nullable);
}

#[test]
fn should_record_generic_bean_without_base_type() {
    let repository = TypeElement::new("example.Store").with_method(
        MethodElement::new("wire")
            .with_annotation(Annotation::marker(INJECT))
            .param(ParamElement::new("pump", "example.Pump")),
    );
    let bean = TypeElement::new("example.Cache<K, V>")
        .extends("example.Store")
        .with_constructor(default_constructor());

    let store = ElementStore::new().with(repository);
    let descriptor = read_bean(&bean, &store).unwrap();

    // the generic type itself is excluded from type-keyed lookups, but its
    // concrete supertype still contributes
    assert_eq!(descriptor.base_type, None);
    assert_eq!(descriptor.assignable_types, ["example.Store"]);
    assert_eq!(descriptor.inject_methods.len(), 1);
    assert!(descriptor
        .assignable_types
        .iter()
        .all(|name| !is_generic(name)));
}

#[test]
fn should_skip_generic_link_but_continue_walk() {
    let root = TypeElement::new("example.Device").with_field(
        FieldElement::new("pump", "example.Pump").with_annotation(Annotation::marker(INJECT)),
    );
    let generic = TypeElement::new("example.Holder<T>").extends("example.Device");
    let bean = TypeElement::new("example.Widget")
        .extends("example.Holder<T>")
        .with_constructor(default_constructor());

    let store = ElementStore::new().with(root).with(generic);
    let descriptor = read_bean(&bean, &store).unwrap();

    assert_eq!(
        descriptor.assignable_types,
        ["example.Widget", "example.Device"]
    );
    // the generic link contributed nothing, the type beyond it still did
    assert_eq!(descriptor.inject_fields.len(), 1);
}

#[test]
fn should_stop_walk_at_root_object() {
    let base = TypeElement::new("example.Base")
        .extends(ROOT_OBJECT)
        .with_method(
            MethodElement::new("wire")
                .with_annotation(Annotation::marker(INJECT))
                .param(ParamElement::new("pump", "example.Pump")),
        );
    let bean = TypeElement::new("example.Child")
        .extends("example.Base")
        .with_constructor(default_constructor());

    let store = ElementStore::new()
        .with(base)
        .with(TypeElement::new(ROOT_OBJECT));
    let descriptor = read_bean(&bean, &store).unwrap();

    assert!(descriptor
        .assignable_types
        .iter()
        .all(|name| name != ROOT_OBJECT));
    assert_eq!(descriptor.assignable_types[0], "example.Child");
    let mut distinct = descriptor.assignable_types.clone();
    distinct.dedup();
    assert_eq!(distinct, descriptor.assignable_types);
}

#[test]
fn should_unwrap_provider_bean_type() {
    let bean = TypeElement::new("Provider<example.Pump>").with_constructor(default_constructor());

    let store = ElementStore::new();
    let descriptor = read_bean(&bean, &store).unwrap();
    assert_eq!(descriptor.base_type.as_deref(), Some("example.Pump"));
}

#[test]
fn should_fail_without_selectable_constructor() {
    let bean = TypeElement::new("example.Maker");

    let store = ElementStore::new();
    let error = read_bean(&bean, &store).unwrap_err();
    assert_eq!(
        error,
        ReadError::NoConstructor {
            bean: "Maker".to_string()
        }
    );
}

#[test]
fn should_record_lifecycle_hooks() {
    let bean = TypeElement::new("example.Musher")
        .with_constructor(default_constructor())
        .with_method(
            MethodElement::new("init").with_annotation(Annotation::marker(POST_CONSTRUCT)),
        )
        .with_method(
            MethodElement::new("shutdown").with_annotation(Annotation::marker(PRE_DESTROY)),
        );

    let store = ElementStore::new();
    let descriptor = read_bean(&bean, &store).unwrap();
    assert_eq!(descriptor.post_construct.as_deref(), Some("init"));
    assert_eq!(descriptor.pre_destroy.as_deref(), Some("shutdown"));
}

#[test]
fn should_read_factory_methods_with_qualifiers() {
    let factory = TypeElement::new("example.CoffeeWiring")
        .with_constructor(default_constructor())
        .with_method(
            MethodElement::new("buildPump")
                .returns("example.Pump")
                .with_annotation(Annotation::marker(BEAN)),
        )
        .with_method(
            MethodElement::new("buildSparePump")
                .returns("example.Pump")
                .with_annotation(Annotation::marker(BEAN))
                .with_annotation(Annotation::with_value(NAMED, "spare")),
        )
        .with_method(MethodElement::new("helper"));

    let store = ElementStore::new();
    let descriptor = read_factory(&factory, &store).unwrap();

    assert_eq!(descriptor.factory_methods.len(), 2);
    assert_eq!(descriptor.factory_methods[0].method_name, "buildPump");
    assert_eq!(descriptor.factory_methods[0].qualifier, None);
    assert_eq!(
        descriptor.factory_methods[0].return_type.as_deref(),
        Some("example.Pump")
    );
    assert_eq!(
        descriptor.factory_methods[1].qualifier.as_deref(),
        Some("spare")
    );
}
