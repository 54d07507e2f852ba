use super::types::TypeRef;

/// The declared-entity kind a [`Symbol`] identifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Local,
    Parameter,
    TypeParameter,
    Label,
    NamedType,
    Field,
    Method,
    Property,
    Event,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accessibility {
    Public,
    Protected,
    Internal,
    Private,
}

/// A constant value attached to a `const` or otherwise compile-time-known
/// field, used to inline literals instead of emitting a member-access node.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstantValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Char(char),
    Str(String),
    Nil,
}

impl std::fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConstantValue::Int(v) => write!(f, "{v}"),
            ConstantValue::Float(v) => write!(f, "{v}"),
            ConstantValue::Bool(v) => write!(f, "{v}"),
            ConstantValue::Char(v) => write!(f, "'{v}'"),
            ConstantValue::Str(v) => write!(f, "\"{v}\""),
            ConstantValue::Nil => write!(f, "nil"),
        }
    }
}

/// Identity of a declared entity, as resolved by the external semantic
/// model. The transformer never constructs these — it only reads the ones
/// handed back by `SemanticModel` queries.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub kind: SymbolKind,
    pub name: String,
    pub containing_type: Option<String>,
    pub is_static: bool,
    pub is_read_only: bool,
    pub accessibility: Accessibility,
    pub constant_value: Option<ConstantValue>,
    pub is_overridable: bool,
    pub is_extension_method: bool,
    /// For a `Property`/`Event` symbol: true when it is backed directly as
    /// a field (auto-property, event field) rather than by user-written
    /// accessor bodies. Ignored for every other `SymbolKind`.
    pub is_field_like: bool,
    /// For an extension method, the un-reduced static method it was
    /// resolved from (`Foo.Bar(receiver, ...)`).
    pub reduced_from: Option<Box<Symbol>>,
    pub returns_void: bool,
    pub type_arguments: Vec<TypeRef>,
    pub parameters: Vec<Symbol>,
}

impl Symbol {
    pub fn has_constant_value(&self) -> bool {
        self.constant_value.is_some()
    }

    pub fn is_private(&self) -> bool {
        self.accessibility == Accessibility::Private
    }

    /// A minimal constructor for the common case (local/parameter/label),
    /// letting tests and simple fixtures skip the full field list.
    pub fn simple(kind: SymbolKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            containing_type: None,
            is_static: false,
            is_read_only: false,
            accessibility: Accessibility::Public,
            constant_value: None,
            is_overridable: false,
            is_extension_method: false,
            is_field_like: false,
            reduced_from: None,
            returns_void: true,
            type_arguments: Vec::new(),
            parameters: Vec::new(),
        }
    }
}
