//! Field injection points.

use crate::annotation::{is_nullable, named_value};
use crate::element::FieldElement;
use crate::point::FieldPoint;
use crate::typename::unwrap_provider;

pub fn read_field(field: &FieldElement) -> FieldPoint {
    let type_name = unwrap_provider(&field.type_name);
    FieldPoint {
        field_name: field.name.clone(),
        type_name: type_name.to_string(),
        qualifier: named_value(&field.annotations).map(str::to_string),
        nullable: is_nullable(&field.annotations),
        via_provider: type_name != field.type_name,
    }
}

#[cfg(test)]
mod tests {
    use crate::annotation::{Annotation, NULLABLE};
    use crate::element::FieldElement;
    use crate::field_reader::read_field;

    #[test]
    fn should_capture_qualifier_and_nullability() {
        let field = FieldElement::new("heater", "example.Heater")
            .with_annotation(Annotation::with_value("Named", "electric"))
            .with_annotation(Annotation::marker(NULLABLE));

        let point = read_field(&field);
        assert_eq!(point.field_name, "heater");
        assert_eq!(point.type_name, "example.Heater");
        assert_eq!(point.qualifier.as_deref(), Some("electric"));
        assert!(point.nullable);
        assert!(!point.via_provider);
    }

    #[test]
    fn should_unwrap_provider_fields() {
        let field = FieldElement::new("pump", "Provider<example.Pump>");

        let point = read_field(&field);
        assert_eq!(point.type_name, "example.Pump");
        assert!(point.via_provider);
    }
}
