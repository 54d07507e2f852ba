//! The `MetadataProvider` collaborator: lets external configuration tables
//! override how input types and methods are spelled in the output tree
//! (e.g. `int` → `System.Int32`).

pub mod provider;

#[cfg(feature = "metadata-config")]
pub mod error;
#[cfg(feature = "metadata-config")]
pub mod xml;
#[cfg(feature = "metadata-config")]
pub mod yaml;

pub use provider::{MapTable, MetadataProvider};

#[cfg(feature = "metadata-config")]
pub use error::InterchangeError;
#[cfg(feature = "metadata-config")]
pub use xml::XmlMetadataProvider;
#[cfg(feature = "metadata-config")]
pub use yaml::YamlMetadataProvider;
