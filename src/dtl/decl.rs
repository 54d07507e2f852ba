use super::expr::Expr;
use super::stmt::Stmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeDeclKind {
    Class,
    Struct,
    Interface,
    Enum,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodMember {
    pub name: String,
    pub params: Vec<String>,
    pub body: Vec<Stmt>,
    pub is_private: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldMember {
    pub name: String,
    pub value: Option<Expr>,
    pub is_immutable_literal: bool,
    pub is_static: bool,
    pub is_private: bool,
    pub is_read_only: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PropertyMember {
    pub name: String,
    pub is_static: bool,
    pub is_private: bool,
    pub is_read_only: bool,
    pub value: Option<Expr>,
    pub is_immutable_literal: bool,
    pub getter: Option<MethodMember>,
    pub setter: Option<MethodMember>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventMember {
    pub name: String,
    pub is_static: bool,
    pub is_private: bool,
    pub is_read_only: bool,
    pub value: Option<Expr>,
    pub is_immutable_literal: bool,
    pub adder: Option<MethodMember>,
    pub remover: Option<MethodMember>,
}

/// A type declaration (class/struct/interface/enum), modeled as a container
/// that members attach themselves to during their own visits, rather than
/// as a statement emitted linearly — see §4.5 "members attach themselves to
/// `CurType` via side-effecting adds during their own visits".
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDecl {
    pub kind: TypeDeclKind,
    pub name: String,
    pub type_parameters: Vec<String>,
    pub base_types: Vec<String>,
    pub nested_types: Vec<TypeDecl>,
    pub methods: Vec<MethodMember>,
    pub fields: Vec<FieldMember>,
    pub properties: Vec<PropertyMember>,
    pub events: Vec<EventMember>,
    pub static_readonly_assignment_names: Vec<String>,
}

impl TypeDecl {
    pub fn new(kind: TypeDeclKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            type_parameters: Vec::new(),
            base_types: Vec::new(),
            nested_types: Vec::new(),
            methods: Vec::new(),
            fields: Vec::new(),
            properties: Vec::new(),
            events: Vec::new(),
            static_readonly_assignment_names: Vec::new(),
        }
    }

    pub fn add_nested_type(&mut self, nested: TypeDecl) {
        self.nested_types.push(nested);
    }

    pub fn add_method(&mut self, method: MethodMember) {
        self.methods.push(method);
    }

    pub fn add_field(&mut self, field: FieldMember) {
        self.fields.push(field);
    }

    pub fn add_property(&mut self, property: PropertyMember) {
        self.properties.push(property);
    }

    pub fn add_event(&mut self, event: EventMember) {
        self.events.push(event);
    }

    pub fn record_static_readonly_assignment(&mut self, name: impl Into<String>) {
        self.static_readonly_assignment_names.push(name.into());
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NamespaceDecl {
    pub name: String,
    pub types: Vec<TypeDecl>,
}

/// Root of the output tree, carrying the source file path per §4.4.
#[derive(Debug, Clone, PartialEq)]
pub struct CompilationUnit {
    pub file_path: String,
    pub namespaces: Vec<NamespaceDecl>,
    pub types: Vec<TypeDecl>,
    pub statements: Vec<Stmt>,
}

impl CompilationUnit {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            namespaces: Vec::new(),
            types: Vec::new(),
            statements: Vec::new(),
        }
    }
}
