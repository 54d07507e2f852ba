//! Root of the integration-test binary: cargo only auto-discovers files
//! directly under `tests/`, so every per-area suite is pulled in here via
//! `#[path]`, the way a larger cross-cutting test tree has to be wired.
//!
//! Run with `cargo test --features testkit` (or rely on the dev-dependency
//! on this crate in Cargo.toml, which enables it automatically).

#[path = "context/mod.rs"]
mod context;

#[path = "decl/mod.rs"]
mod decl;

#[path = "expr/mod.rs"]
mod expr;

#[path = "stmt/mod.rs"]
mod stmt;
