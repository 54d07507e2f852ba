//! The `SemanticModel` collaborator: per-node symbol/type resolution.
//!
//! Lexing, parsing and full semantic analysis are out of scope for this
//! crate (see crate-level Non-goals) — this module only fixes the query
//! surface the transformer needs, as a trait, so it can be driven by a real
//! analyzer or by an in-memory test double.

pub mod model;
pub mod symbol;
pub mod types;

pub use model::SemanticModel;
pub use symbol::{Accessibility, ConstantValue, Symbol, SymbolKind};
pub use types::TypeRef;
