/// A resolved type reference, as handed back by `SemanticModel::type_of`.
///
/// This is deliberately thin — the transformer never type-checks (see
/// crate-level Non-goals), it only asks three questions of a type: is it a
/// value type with a known zero-value, is it `bool`, and does it carry a
/// single generic argument (for `yield` wrapping).
#[derive(Debug, Clone, PartialEq)]
pub struct TypeRef {
    pub name: String,
    pub is_value_type: bool,
    pub type_arguments: Vec<TypeRef>,
}

const INTEGRAL_NAMES: &[&str] = &[
    "sbyte", "byte", "short", "ushort", "int", "uint", "long", "ulong", "char",
];
const FLOATING_NAMES: &[&str] = &["float", "double", "decimal"];

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_value_type: false,
            type_arguments: Vec::new(),
        }
    }

    pub fn value_type(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_value_type: true,
            type_arguments: Vec::new(),
        }
    }

    pub fn generic(name: impl Into<String>, type_arguments: Vec<TypeRef>) -> Self {
        Self {
            name: name.into(),
            is_value_type: false,
            type_arguments,
        }
    }

    pub fn is_bool(&self) -> bool {
        self.name == "bool"
    }

    /// The literal text for this value type's default, per §4.7
    /// `GetFieldValueExpression`: `0` for integral types, `0.0` for
    /// float/double/decimal, `false` for bool. Returns `None` for value
    /// types without a known predefined default (falls back to
    /// `<TypeName>.default()`).
    pub fn predefined_default_literal(&self) -> Option<&'static str> {
        if !self.is_value_type {
            return None;
        }
        if self.is_bool() {
            return Some("false");
        }
        if INTEGRAL_NAMES.contains(&self.name.as_str()) {
            return Some("0");
        }
        if FLOATING_NAMES.contains(&self.name.as_str()) {
            return Some("0.0");
        }
        None
    }

    /// True when a value of this type can be `nil`/falsey at runtime —
    /// either it is a reference type, or it is the one value type (`bool`)
    /// whose values can themselves be falsey. Drives the ternary boundary
    /// in §4.9.
    pub fn may_be_null_or_false(&self) -> bool {
        !self.is_value_type || self.is_bool()
    }

    /// The single type argument of a generic name (`IEnumerable<int>` →
    /// `int`), used to recover `T` for `System.Yield<T>` wrapping.
    pub fn generic_argument(&self) -> Option<&TypeRef> {
        self.type_arguments.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_defaults_to_zero() {
        assert_eq!(TypeRef::value_type("int").predefined_default_literal(), Some("0"));
    }

    #[test]
    fn floating_defaults_to_zero_point_zero() {
        assert_eq!(
            TypeRef::value_type("double").predefined_default_literal(),
            Some("0.0")
        );
    }

    #[test]
    fn bool_defaults_to_false() {
        assert_eq!(TypeRef::value_type("bool").predefined_default_literal(), Some("false"));
    }

    #[test]
    fn reference_type_has_no_predefined_default() {
        assert_eq!(TypeRef::named("string").predefined_default_literal(), None);
    }

    #[test]
    fn bool_may_be_falsey_despite_being_a_value_type() {
        assert!(TypeRef::value_type("bool").may_be_null_or_false());
        assert!(!TypeRef::value_type("int").may_be_null_or_false());
        assert!(TypeRef::named("string").may_be_null_or_false());
    }
}
