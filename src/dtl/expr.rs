use super::adapters::PropertyAdapter;

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Numeric(String),
    Character(char),
    Str(String),
    Nil,
}

/// The DTL expression families from the data model: identifier-name,
/// literal, binary, prefix-unary, parenthesized, member-access, invocation,
/// assignment, multi-target assignment, line-multiple (chained assignment),
/// property-adapter, internal-method-identifier.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(String),
    Literal(Literal),
    Binary {
        op: String,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    PrefixUnary {
        op: String,
        operand: Box<Expr>,
    },
    Parenthesized(Box<Expr>),
    MemberAccess {
        receiver: Box<Expr>,
        name: String,
        /// True when `name` is a non-static method — drives `:`-style call
        /// syntax at pretty-print time instead of plain `.` field access.
        is_method_call: bool,
    },
    Invocation {
        callee: Box<Expr>,
        arguments: Vec<Expr>,
    },
    Assignment {
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `[targets...] = value`, used to unpack ref/out returns.
    MultiAssignment {
        targets: Vec<Expr>,
        value: Box<Expr>,
    },
    /// A chained assignment unrolled into one `Assignment` per link,
    /// rendered comma-separated in reading order (`a, b, c = v, v, v`).
    LineMultiple(Vec<Expr>),
    /// A mutable adapter standing in for a property/event access until the
    /// assignment or member-access visitor finishes reshaping it.
    PropertyAdapter(PropertyAdapter),
    /// Marks a bare instance-method reference that must have `this`
    /// prepended once it is actually invoked.
    InternalMethodIdentifier(String),
    /// An anonymous function value. The runtime's first-class functions
    /// give the target language this for free; the core only needs it to
    /// express the inner closure `System.Yield<T>` wraps a yield-bearing
    /// method body in (§4.6).
    FunctionLiteral { params: Vec<String>, body: Vec<super::stmt::Stmt> },
}

impl Expr {
    pub fn nil() -> Self {
        Expr::Literal(Literal::Nil)
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Identifier(name.into())
    }

    pub fn this() -> Self {
        Expr::ident("this")
    }
}
