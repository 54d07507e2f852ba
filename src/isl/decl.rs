use crate::base::Span;
use crate::semantic::TypeRef;

use super::expr::{Expr, RefKind};
use super::stmt::{Block, Stmt};
use super::NodeId;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub id: NodeId,
    pub span: Span,
    pub name: String,
    pub ref_kind: RefKind,
    pub declared_type: Option<TypeRef>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeParameterDecl {
    pub id: NodeId,
    pub span: Span,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodDecl {
    pub id: NodeId,
    pub span: Span,
    pub name: String,
    pub is_static: bool,
    pub is_private: bool,
    pub type_parameters: Vec<TypeParameterDecl>,
    pub parameters: Vec<Parameter>,
    pub body: Block,
    pub return_type: Option<TypeRef>,
    /// True for a type's static constructor (`static Foo() { ... }`); used
    /// to decide whether a static-readonly field write may target `this.`
    /// directly instead of going through the readonly-name bookkeeping.
    pub is_static_constructor: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyAccessorKind {
    Get,
    Set,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyAccessor {
    pub id: NodeId,
    pub span: Span,
    pub kind: PropertyAccessorKind,
    pub body: Option<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDecl {
    pub id: NodeId,
    pub span: Span,
    pub name: String,
    pub is_static: bool,
    pub declared_type: Option<TypeRef>,
    pub accessors: Vec<PropertyAccessor>,
    pub expression_body: Option<Expr>,
    pub initializer: Option<Expr>,
    pub is_overridable: bool,
    pub is_interface_implementation: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventAccessorKind {
    Add,
    Remove,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventAccessor {
    pub id: NodeId,
    pub span: Span,
    pub kind: EventAccessorKind,
    pub body: Option<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventDecl {
    pub id: NodeId,
    pub span: Span,
    pub name: String,
    pub is_static: bool,
    pub accessors: Vec<EventAccessor>,
    pub initializer: Option<Expr>,
    pub is_overridable: bool,
    pub is_interface_implementation: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    pub id: NodeId,
    pub span: Span,
    pub name: String,
    pub is_static: bool,
    pub is_private: bool,
    pub is_read_only: bool,
    pub is_const: bool,
    pub initializer: Option<Expr>,
    pub declared_type: Option<TypeRef>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeDeclKind {
    Class,
    Struct,
    Interface,
    Enum,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeMember {
    NestedType(Box<TypeDecl>),
    Method(MethodDecl),
    Field(FieldDecl),
    Property(PropertyDecl),
    Event(EventDecl),
    /// Enum member; lowered the same way as a field.
    EnumValue(FieldDecl),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeDecl {
    pub id: NodeId,
    pub span: Span,
    pub kind: TypeDeclKind,
    pub name: String,
    pub type_parameters: Vec<TypeParameterDecl>,
    pub base_types: Vec<String>,
    pub members: Vec<TypeMember>,
    /// Declared-private flag carried to determine instance method late
    /// binding (§4.9 `GetMethodNameExpression`: a sealed containing type
    /// forces the `internal-method` shape even for overridable methods).
    pub is_sealed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NamespaceDecl {
    pub id: NodeId,
    pub span: Span,
    pub name: String,
    pub types: Vec<TypeDecl>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CompilationUnitMember {
    Namespace(NamespaceDecl),
    Type(TypeDecl),
    TopLevelStatement(Stmt),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompilationUnit {
    pub id: NodeId,
    pub span: Span,
    pub file_path: String,
    pub members: Vec<CompilationUnitMember>,
}
