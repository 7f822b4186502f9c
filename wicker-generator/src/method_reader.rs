//! Method and constructor signatures as injection points.

use crate::annotation::{is_nullable, named_value};
use crate::element::{ConstructorElement, MethodElement, ParamElement};
use crate::point::{ConstructorPoint, MethodPoint, ParamPoint};
use crate::typename::unwrap_provider;

fn read_param(param: &ParamElement) -> ParamPoint {
    let type_name = unwrap_provider(&param.type_name);
    ParamPoint {
        name: param.name.clone(),
        type_name: type_name.to_string(),
        qualifier: named_value(&param.annotations).map(str::to_string),
        nullable: is_nullable(&param.annotations),
        via_provider: type_name != param.type_name,
    }
}

fn read_params(params: &[ParamElement]) -> Vec<ParamPoint> {
    params.iter().map(read_param).collect()
}

pub fn read_method(method: &MethodElement, declaring_type: &str) -> MethodPoint {
    MethodPoint {
        method_name: method.name.clone(),
        declaring_type: declaring_type.to_string(),
        return_type: method.return_type.clone(),
        visibility: method.visibility,
        qualifier: named_value(&method.annotations).map(str::to_string),
        params: read_params(&method.params),
    }
}

pub fn read_constructor(
    constructor: &ConstructorElement,
    declaring_type: &str,
) -> ConstructorPoint {
    ConstructorPoint {
        declaring_type: declaring_type.to_string(),
        visibility: constructor.visibility,
        params: read_params(&constructor.params),
    }
}
