//! Loads a [`MapTable`] from a YAML document, for the `type_map`/`method_map`
//! configuration the spec describes as "external XML/YAML tables".

use std::path::Path;

use crate::semantic::Symbol;

use super::error::InterchangeError;

use super::{MapTable, MetadataProvider};

/// A `MetadataProvider` backed by a YAML-encoded [`MapTable`].
#[derive(Debug, Clone, Default)]
pub struct YamlMetadataProvider {
    table: MapTable,
}

impl YamlMetadataProvider {
    pub fn from_str(yaml: &str) -> Result<Self, InterchangeError> {
        let table: MapTable =
            serde_yaml::from_str(yaml).map_err(|e| InterchangeError::Yaml(e.to_string()))?;
        Ok(Self { table })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, InterchangeError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_str(&contents)
    }
}

impl MetadataProvider for YamlMetadataProvider {
    fn type_map_name(&self, symbol: &Symbol) -> Option<String> {
        self.table.type_map_name(symbol)
    }

    fn method_map_name(&self, symbol: &Symbol) -> Option<String> {
        self.table.method_map_name(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantic::SymbolKind;

    #[test]
    fn loads_type_and_method_maps_from_yaml() {
        let yaml = r#"
type_map:
  int: System.Int32
method_map:
  "int::Parse": ToNumber
"#;
        let provider = YamlMetadataProvider::from_str(yaml).expect("valid yaml");
        let int_symbol = Symbol::simple(SymbolKind::NamedType, "int");
        assert_eq!(
            provider.type_map_name(&int_symbol),
            Some("System.Int32".to_string())
        );
    }

    #[test]
    fn round_trips_through_a_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("metadata.yaml");
        std::fs::write(&path, "type_map:\n  bool: System.Boolean\nmethod_map: {}\n")
            .expect("write fixture");

        let provider = YamlMetadataProvider::from_file(&path).expect("valid file");
        let bool_symbol = Symbol::simple(SymbolKind::NamedType, "bool");
        assert_eq!(
            provider.type_map_name(&bool_symbol),
            Some("System.Boolean".to_string())
        );
    }
}
