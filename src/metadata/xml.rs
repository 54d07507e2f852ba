//! Loads a [`MapTable`] from the XML half of the spec's "external XML/YAML
//! tables" — a flat `<metadata><type name="..." as="..."/><method .../>
//! </metadata>` document.

use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::semantic::Symbol;

use super::error::InterchangeError;
use super::{MapTable, MetadataProvider};

#[derive(Debug, Clone, Default)]
pub struct XmlMetadataProvider {
    table: MapTable,
}

impl XmlMetadataProvider {
    pub fn from_str(xml: &str) -> Result<Self, InterchangeError> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut table = MapTable::new();
        let mut buf = Vec::new();

        loop {
            match reader
                .read_event_into(&mut buf)
                .map_err(|e| InterchangeError::Xml(e.to_string()))?
            {
                Event::Empty(tag) | Event::Start(tag) => {
                    let tag_name = String::from_utf8_lossy(tag.name().as_ref()).into_owned();
                    let mut name = None;
                    let mut as_name = None;
                    for attr in tag.attributes().flatten() {
                        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
                        let value = attr
                            .unescape_value()
                            .map_err(|e| InterchangeError::Xml(e.to_string()))?
                            .into_owned();
                        match key.as_str() {
                            "name" => name = Some(value),
                            "as" => as_name = Some(value),
                            _ => {}
                        }
                    }
                    if let (Some(name), Some(as_name)) = (name, as_name) {
                        match tag_name.as_str() {
                            "type" => {
                                table.type_map.insert(name, as_name);
                            }
                            "method" => {
                                table.method_map.insert(name, as_name);
                            }
                            _ => {}
                        }
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        Ok(Self { table })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, InterchangeError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_str(&contents)
    }
}

impl MetadataProvider for XmlMetadataProvider {
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
    fn loads_type_and_method_maps_from_xml() {
        let xml = r#"
<metadata>
  <type name="int" as="System.Int32" />
  <method name="int::Parse" as="ToNumber" />
</metadata>
"#;
        let provider = XmlMetadataProvider::from_str(xml).expect("valid xml");
        let int_symbol = Symbol::simple(SymbolKind::NamedType, "int");
        assert_eq!(
            provider.type_map_name(&int_symbol),
            Some("System.Int32".to_string())
        );

        let mut parse_symbol = Symbol::simple(SymbolKind::Method, "Parse");
        parse_symbol.containing_type = Some("int".to_string());
        assert_eq!(
            provider.method_map_name(&parse_symbol),
            Some("ToNumber".to_string())
        );
    }
}
