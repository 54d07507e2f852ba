//! In-memory test doubles for the `SyntaxTree`/`SemanticModel` collaborators,
//! plus the small fixture builders every expression/statement/declaration
//! test otherwise has to hand-roll on its own.
//!
//! Compiled for this crate's own unit tests, and for the integration suites
//! under `tests/` via the `testkit` feature (see the dev-dependency on this
//! crate in `Cargo.toml`) — never part of a normal build.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::base::Span;
use crate::isl::expr::{IdentifierNameExpr, LiteralExpr, LiteralKind};
use crate::isl::{Expr as IslExpr, NodeId};
use crate::metadata::MapTable;
use crate::semantic::{SemanticModel, Symbol, TypeRef};
use crate::transform::Transformer;

/// A span fixtures can reuse when the exact source position doesn't matter.
pub static DUMMY_SPAN: Lazy<Span> = Lazy::new(|| Span::from_coords(1, 0, 1, 1));

/// An empty name-mapping table, shared by fixtures that don't exercise
/// metadata remapping.
pub static DEFAULT_MAP_TABLE: Lazy<MapTable> = Lazy::new(MapTable::new);

/// A `SemanticModel` backed by two fixed node-id-keyed lookup tables —
/// the one fake every `Transformer` test needs, since the transformer
/// never does its own symbol/type resolution.
#[derive(Debug, Default)]
pub struct FixedModel {
    pub(crate) symbols: HashMap<u32, Symbol>,
    pub(crate) types: HashMap<u32, TypeRef>,
}

impl FixedModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_symbol(mut self, node: u32, symbol: Symbol) -> Self {
        self.symbols.insert(node, symbol);
        self
    }

    pub fn with_type(mut self, node: u32, ty: TypeRef) -> Self {
        self.types.insert(node, ty);
        self
    }
}

impl SemanticModel for FixedModel {
    fn symbol_of(&self, node: NodeId) -> Option<Symbol> {
        self.symbols.get(&node.0).cloned()
    }

    fn declared_symbol(&self, node: NodeId) -> Option<Symbol> {
        self.symbols.get(&node.0).cloned()
    }

    fn type_of(&self, node: NodeId) -> Option<TypeRef> {
        self.types.get(&node.0).cloned()
    }
}

/// An `IdentifierNameExpr` fixture at a given source line (column fixed at
/// `0..1`, which is all the transformer ever looks at in a test).
pub fn local_ident(id: u32, name: &str, line: usize) -> IslExpr {
    IslExpr::Identifier(IdentifierNameExpr {
        id: NodeId(id),
        span: Span::from_coords(line, 0, line, 1),
        name: name.to_string(),
    })
}

/// A numeric-literal fixture at a given source line.
pub fn numeric(id: u32, text: &str, line: usize) -> IslExpr {
    IslExpr::Literal(LiteralExpr {
        id: NodeId(id),
        span: Span::from_coords(line, 0, line, 1),
        kind: LiteralKind::Numeric,
        raw_text: text.to_string(),
    })
}

/// A `Symbol::simple(Local, name)` fixture, the shape most local-variable
/// scenarios need.
pub fn local_symbol(name: &str) -> Symbol {
    Symbol::simple(crate::semantic::SymbolKind::Local, name)
}

/// A `Transformer` with one function scope pushed but no block scope yet —
/// the shape statement visitors that push their own block (`lower_block`,
/// `lower_switch`, `lower_do_while`, ...) expect to run in.
pub fn transformer_with_function<'a>(
    semantic: &'a dyn SemanticModel,
    metadata: &'a MapTable,
    pool_size: usize,
) -> Transformer<'a> {
    let mut transformer = Transformer::new(semantic, metadata);
    transformer.stacks.push_function(pool_size, false);
    transformer
}

/// A `Transformer` with one function scope and one block scope already
/// pushed — the shape every expression visitor that emits side-effect
/// statements directly into `CurBlock` expects to run in.
pub fn transformer_in_block<'a>(
    semantic: &'a dyn SemanticModel,
    metadata: &'a MapTable,
    pool_size: usize,
) -> Transformer<'a> {
    let mut transformer = transformer_with_function(semantic, metadata, pool_size);
    transformer.stacks.push_block();
    transformer
}

/// The statements accumulated in the innermost block scope so far, without
/// popping it — lets an integration test inspect what an expression visit
/// emitted as a side effect.
pub fn block_statements(transformer: &mut Transformer<'_>) -> Vec<crate::dtl::Stmt> {
    transformer.stacks.cur_block_mut().statements.clone()
}
