//! # islxform
//!
//! The syntax-directed transformation engine at the core of a
//! source-to-source translator: given an input (ISL) syntax tree plus a
//! semantic model, produces a faithful output (DTL) syntax tree for a
//! dynamically typed scripting-language runtime.
//!
//! Lexing/parsing the input, semantic analysis, pretty-printing the output
//! tree to text, CLI wiring, file I/O, and project/build discovery are all
//! external collaborators — this crate owns only the visitor in between.
//!
//! ## Module Structure
//!
//! ```text
//! transform  → the visitor: context stacks, temp minting, expression/
//!              statement/declaration lowering
//!   ↓ consumes
//! isl        → input syntax tree (the `SyntaxTree` collaborator)
//! semantic   → per-node symbol/type resolution (the `SemanticModel`
//!              collaborator)
//! metadata   → type/method name remapping (the `MetadataProvider`
//!              collaborator), plus optional YAML/XML config loading
//!   ↓ produces
//! dtl        → output syntax tree
//!   ↓ built on
//! core       → error taxonomy
//! base       → FileId, Position/Span
//! ```

/// Foundation types: FileId, Position, Span.
pub mod base;

/// Error taxonomy shared across the transformer.
pub mod core;

/// The output ("DTL") syntax tree: expressions, statements, declarations,
/// and the mutable adapter nodes (property-adapter, switch-adapter).
pub mod dtl;

/// The input ("ISL") syntax tree: the `SyntaxTree` collaborator, modeled
/// directly as a closed node family.
pub mod isl;

/// The `MetadataProvider` collaborator: type/method name remapping, with
/// optional YAML/XML table loading behind the `metadata-config` feature.
pub mod metadata;

/// The `SemanticModel` collaborator: per-node symbol/type resolution.
pub mod semantic;

/// The syntax-directed transformer itself: context stacks, temp/identifier
/// minting, operator mapping, and the expression/statement/declaration
/// visitors.
pub mod transform;

/// In-memory `SemanticModel` fake and fixture builders, for this crate's own
/// tests and for the integration suites under `tests/` (enabled there via
/// the `testkit` feature). Not part of a normal build.
#[cfg(any(test, feature = "testkit"))]
pub mod testkit;

// Re-export foundation types.
pub use base::{FileId, Position, Span};

// Re-export the crate's primary entry point.
pub use core::{Diagnostic, TransformError};
pub use transform::Transformer;
