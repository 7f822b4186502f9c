//! The declaration model the annotation-processing driver feeds into the
//! reader. Elements are plain data: the driver resolves source syntax into
//! these structures, and the reader never looks back at source text.
//!
//! Supertype links are by canonical name and resolved through an
//! [ElementLookup], so a hierarchy can be assembled incrementally and
//! shared between bean walks.

use crate::annotation::Annotation;
use crate::typename;
use fxhash::FxHashMap;

/// Canonical name of the implicit root type. Superclass walks terminate
/// here; the root never contributes assignable types or injection points.
pub const ROOT_OBJECT: &str = "Object";

/// Declaration visibility. Only the public / non-private / private
/// distinction is significant to constructor and method selection.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Visibility {
    Public,
    /// Visible to the surrounding module or package.
    Internal,
    Private,
}

impl Visibility {
    pub fn is_public(self) -> bool {
        matches!(self, Visibility::Public)
    }

    pub fn is_private(self) -> bool {
        matches!(self, Visibility::Private)
    }
}

#[derive(Clone, Debug)]
pub struct ParamElement {
    pub name: String,
    pub type_name: String,
    pub annotations: Vec<Annotation>,
}

impl ParamElement {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            annotations: Vec::new(),
        }
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}

#[derive(Clone, Debug)]
pub struct FieldElement {
    pub name: String,
    pub type_name: String,
    pub annotations: Vec<Annotation>,
}

impl FieldElement {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            annotations: Vec::new(),
        }
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}

#[derive(Clone, Debug)]
pub struct MethodElement {
    pub name: String,
    pub return_type: Option<String>,
    pub visibility: Visibility,
    pub params: Vec<ParamElement>,
    pub annotations: Vec<Annotation>,
}

impl MethodElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: None,
            visibility: Visibility::Public,
            params: Vec::new(),
            annotations: Vec::new(),
        }
    }

    pub fn returns(mut self, type_name: impl Into<String>) -> Self {
        self.return_type = Some(type_name.into());
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn param(mut self, param: ParamElement) -> Self {
        self.params.push(param);
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}

#[derive(Clone, Debug)]
pub struct ConstructorElement {
    pub visibility: Visibility,
    pub params: Vec<ParamElement>,
    pub annotations: Vec<Annotation>,
}

impl ConstructorElement {
    pub fn new() -> Self {
        Self {
            visibility: Visibility::Public,
            params: Vec::new(),
            annotations: Vec::new(),
        }
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn param(mut self, param: ParamElement) -> Self {
        self.params.push(param);
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}

impl Default for ConstructorElement {
    fn default() -> Self {
        Self::new()
    }
}

/// One type declaration: its direct members and the canonical name of its
/// direct supertype. Indirect supertypes are reached through the lookup.
#[derive(Clone, Debug)]
pub struct TypeElement {
    pub qualified_name: String,
    pub superclass: Option<String>,
    pub annotations: Vec<Annotation>,
    pub constructors: Vec<ConstructorElement>,
    pub fields: Vec<FieldElement>,
    pub methods: Vec<MethodElement>,
}

impl TypeElement {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            superclass: None,
            annotations: Vec::new(),
            constructors: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn extends(mut self, superclass: impl Into<String>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_constructor(mut self, constructor: ConstructorElement) -> Self {
        self.constructors.push(constructor);
        self
    }

    pub fn with_field(mut self, field: FieldElement) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_method(mut self, method: MethodElement) -> Self {
        self.methods.push(method);
        self
    }

    pub fn simple_name(&self) -> &str {
        typename::simple_name(&self.qualified_name)
    }
}

/// Resolves canonical names to type elements. This is the seam between the
/// reader and the driver that owns the compilation's element universe.
pub trait ElementLookup {
    fn type_element(&self, qualified_name: &str) -> Option<&TypeElement>;
}

/// Map-backed [ElementLookup]. Types missing from the store simply
/// terminate the walk, matching a supertype outside the compilation unit.
#[derive(Default, Debug)]
pub struct ElementStore {
    types: FxHashMap<String, TypeElement>,
}

impl ElementStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, element: TypeElement) -> Self {
        self.add(element);
        self
    }

    pub fn add(&mut self, element: TypeElement) {
        self.types.insert(element.qualified_name.clone(), element);
    }
}

impl ElementLookup for ElementStore {
    fn type_element(&self, qualified_name: &str) -> Option<&TypeElement> {
        self.types.get(qualified_name)
    }
}
