/// The fixed operator remap from §4.3. Everything not listed passes through
/// unchanged (arithmetic and comparison tokens that already make sense in
/// the output runtime).
pub fn map_operator(op: &str) -> String {
    match op {
        "!=" => "~=".to_string(),
        "!" => "not".to_string(),
        "&&" => "and".to_string(),
        "||" => "or".to_string(),
        "??" => "or".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remapped_operators_round_trip() {
        assert_eq!(map_operator("!="), "~=");
        assert_eq!(map_operator("!"), "not");
        assert_eq!(map_operator("&&"), "and");
        assert_eq!(map_operator("||"), "or");
        assert_eq!(map_operator("??"), "or");
    }

    #[test]
    fn unlisted_operators_pass_through() {
        for op in ["+", "-", "*", "/", "==", "<", ">=", ".."] {
            assert_eq!(map_operator(op), op);
        }
    }
}
