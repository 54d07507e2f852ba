use std::collections::HashMap;

use crate::semantic::Symbol;

/// Name remapping for the output tree: `type_map_name`/`method_map_name`
/// let an external table override how an input type or method is spelled in
/// the output, independent of the transformation logic itself.
pub trait MetadataProvider {
    /// The output spelling of a named type, or `None` to fall back to the
    /// symbol's own qualified name.
    fn type_map_name(&self, symbol: &Symbol) -> Option<String>;

    /// The output spelling of a method, or `None` to fall back to the
    /// symbol's own name.
    fn method_map_name(&self, symbol: &Symbol) -> Option<String>;
}

/// The simplest concrete `MetadataProvider`: two flat lookup tables, keyed
/// by the symbol's qualified name (`containing_type::name` for methods,
/// `name` for types).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "metadata-config",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct MapTable {
    #[cfg_attr(feature = "metadata-config", serde(default))]
    pub type_map: HashMap<String, String>,
    #[cfg_attr(feature = "metadata-config", serde(default))]
    pub method_map: HashMap<String, String>,
}

impl MapTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type_mapping(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.type_map.insert(from.into(), to.into());
        self
    }

    pub fn with_method_mapping(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.method_map.insert(from.into(), to.into());
        self
    }

    fn method_key(symbol: &Symbol) -> String {
        match &symbol.containing_type {
            Some(containing) => format!("{containing}::{}", symbol.name),
            None => symbol.name.clone(),
        }
    }
}

impl MetadataProvider for MapTable {
    fn type_map_name(&self, symbol: &Symbol) -> Option<String> {
        self.type_map.get(&symbol.name).cloned()
    }

    fn method_map_name(&self, symbol: &Symbol) -> Option<String> {
        self.method_map
            .get(&Self::method_key(symbol))
            .or_else(|| self.method_map.get(&symbol.name))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantic::SymbolKind;

    fn named_type_symbol(name: &str) -> Symbol {
        Symbol::simple(SymbolKind::NamedType, name)
    }

    #[test]
    fn unmapped_type_falls_through_to_none() {
        let table = MapTable::new();
        assert_eq!(table.type_map_name(&named_type_symbol("int")), None);
    }

    #[test]
    fn mapped_type_is_returned() {
        let table = MapTable::new().with_type_mapping("int", "System.Int32");
        assert_eq!(
            table.type_map_name(&named_type_symbol("int")),
            Some("System.Int32".to_string())
        );
    }

    #[test]
    fn method_lookup_prefers_qualified_key() {
        let mut symbol = Symbol::simple(SymbolKind::Method, "Parse");
        symbol.containing_type = Some("int".to_string());
        let table = MapTable::new().with_method_mapping("int::Parse", "ToNumber");
        assert_eq!(
            table.method_map_name(&symbol),
            Some("ToNumber".to_string())
        );
    }
}
