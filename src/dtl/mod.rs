//! The output syntax tree ("DTL" — a dynamically typed scripting language
//! whose runtime provides only tables, first-class functions, multiple
//! return values, `nil`, and a small keyword set).
//!
//! Pretty-printing this tree to text is out of scope for this crate (see
//! crate-level Non-goals) — it is the transformer's job to *produce* this
//! tree, not to render it.

pub mod adapters;
pub mod decl;
pub mod expr;
pub mod stmt;

pub use adapters::{PropertyAdapter, PropertyCallStyle};
pub use decl::{
    CompilationUnit, EventMember, FieldMember, MethodMember, NamespaceDecl, PropertyMember,
    TypeDecl, TypeDeclKind,
};
pub use expr::{Expr, Literal};
pub use stmt::Stmt;
