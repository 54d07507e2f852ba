use crate::base::Span;

use super::NodeId;

/// A bare identifier. Whether it denotes a local, a static field, a property
/// etc. is decided by the semantic model, keyed on `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierNameExpr {
    pub id: NodeId,
    pub span: Span,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Numeric,
    Character,
    Str,
    Null,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub id: NodeId,
    pub span: Span,
    pub kind: LiteralKind,
    /// Raw source text of the token (e.g. `"42"`, `"'x'"`, `"\"hi\""`).
    /// For `LiteralKind::Character` this is just the character itself.
    pub raw_text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub id: NodeId,
    pub span: Span,
    pub op: String,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

/// Covers `!x`, unary `-x`/`+x`, and `++x`/`x++`/`--x`/`x--`.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub id: NodeId,
    pub span: Span,
    pub op: String,
    pub operand: Box<Expr>,
    pub is_prefix: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParenthesizedExpr {
    pub id: NodeId,
    pub span: Span,
    pub inner: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemberAccessExpr {
    pub id: NodeId,
    pub span: Span,
    pub receiver: Box<Expr>,
    pub name: IdentifierNameExpr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefKind {
    None,
    Ref,
    Out,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub id: NodeId,
    pub span: Span,
    pub expr: Expr,
    pub ref_kind: RefKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvocationExpr {
    pub id: NodeId,
    pub span: Span,
    pub callee: Box<Expr>,
    pub arguments: Vec<Argument>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpr {
    pub id: NodeId,
    pub span: Span,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalExpr {
    pub id: NodeId,
    pub span: Span,
    pub condition: Box<Expr>,
    pub when_true: Box<Expr>,
    pub when_false: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(IdentifierNameExpr),
    Literal(LiteralExpr),
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    Parenthesized(ParenthesizedExpr),
    MemberAccess(MemberAccessExpr),
    Invocation(InvocationExpr),
    Assignment(AssignmentExpr),
    Conditional(ConditionalExpr),
}

impl Expr {
    pub fn id(&self) -> NodeId {
        match self {
            Expr::Identifier(e) => e.id,
            Expr::Literal(e) => e.id,
            Expr::Binary(e) => e.id,
            Expr::Unary(e) => e.id,
            Expr::Parenthesized(e) => e.id,
            Expr::MemberAccess(e) => e.id,
            Expr::Invocation(e) => e.id,
            Expr::Assignment(e) => e.id,
            Expr::Conditional(e) => e.id,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Expr::Identifier(e) => e.span,
            Expr::Literal(e) => e.span,
            Expr::Binary(e) => e.span,
            Expr::Unary(e) => e.span,
            Expr::Parenthesized(e) => e.span,
            Expr::MemberAccess(e) => e.span,
            Expr::Invocation(e) => e.span,
            Expr::Assignment(e) => e.span,
            Expr::Conditional(e) => e.span,
        }
    }
}
