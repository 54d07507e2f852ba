use super::expr::Expr;

/// The DTL statement families from the data model.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    ExpressionStatement(Expr),
    LocalVar {
        name: String,
        init: Option<Expr>,
    },
    /// A multi-name local declaration with no initializers (`local a, b, c`),
    /// produced when an input declaration declares several variables and
    /// none of them have initializers.
    LocalVars(Vec<String>),
    Return(Option<Expr>),
    Break,
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    While {
        condition: Expr,
        body: Box<Stmt>,
    },
    RepeatUntil {
        body: Box<Stmt>,
        condition: Expr,
    },
    ForIn {
        vars: Vec<String>,
        iterable: Expr,
        body: Box<Stmt>,
    },
    Goto(String),
    Labeled {
        label: String,
        statement: Box<Stmt>,
    },
    /// Carries the number of blank source lines to preserve between two
    /// adjacent statements/comments.
    BlankLines(usize),
    ShortComment(String),
    LongComment(String),
    Block(Vec<Stmt>),
    /// A block nested inside another block, used when a lexical input block
    /// must be preserved as its own scope.
    BlockBlock(Vec<Stmt>),
}
