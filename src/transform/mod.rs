//! The syntax-directed transformation engine: walks an input tree and
//! produces an output tree, consulting a [`SemanticModel`] and a
//! [`MetadataProvider`] along the way.
//!
//! One [`Transformer`] corresponds to one compilation unit and is not
//! reentrant — see the crate-level concurrency notes. Context-stack pushes
//! and pops are symmetric around every visit, including error returns,
//! which is why almost every visitor here is written with `?` rather than
//! manual unwinding.

mod context;
mod decl;
mod expr;
mod operators;
mod stmt;
mod temp;

pub use context::{BlockCtx, ContextStacks, FunctionCtx, SwitchCtx};
pub use operators::map_operator;

use crate::base::Span;
use crate::core::TransformError;
use crate::dtl;
use crate::isl;
use crate::isl::NodeId;
use crate::metadata::MetadataProvider;
use crate::semantic::{Symbol, SemanticModel, TypeRef};

/// Pool size used when a caller does not pick one explicitly. Arbitrary but
/// generous for hand-written methods; pick something smaller in tests that
/// want to exercise pool exhaustion.
pub const DEFAULT_TEMP_POOL_SIZE: usize = 16;

pub struct Transformer<'a> {
    semantic: &'a dyn SemanticModel,
    metadata: &'a dyn MetadataProvider,
    // Exposed crate-wide (not just to `super`) so the `testkit` fixtures
    // built at the crate root can prime function/block scopes for callers
    // that only have the public API available.
    pub(crate) stacks: ContextStacks,
    pool_size: usize,
}

impl<'a> Transformer<'a> {
    pub fn new(semantic: &'a dyn SemanticModel, metadata: &'a dyn MetadataProvider) -> Self {
        Self::with_pool_size(semantic, metadata, DEFAULT_TEMP_POOL_SIZE)
    }

    pub fn with_pool_size(
        semantic: &'a dyn SemanticModel,
        metadata: &'a dyn MetadataProvider,
        pool_size: usize,
    ) -> Self {
        Self {
            semantic,
            metadata,
            stacks: ContextStacks::new(),
            pool_size,
        }
    }

    /// Entry point: lowers a whole compilation unit (§4.4).
    pub fn transform_compilation_unit(
        &mut self,
        unit: &isl::CompilationUnit,
    ) -> Result<dtl::CompilationUnit, TransformError> {
        tracing::debug!(
            file = %unit.file_path,
            members = unit.members.len(),
            "transforming compilation unit"
        );
        let mut out = dtl::CompilationUnit::new(unit.file_path.clone());
        for member in &unit.members {
            match member {
                isl::CompilationUnitMember::Namespace(ns) => {
                    let lowered = self.lower_namespace(ns)?;
                    out.namespaces.push(lowered);
                }
                isl::CompilationUnitMember::Type(type_decl) => {
                    let lowered = self.lower_type_decl(type_decl)?;
                    out.types.push(lowered);
                }
                isl::CompilationUnitMember::TopLevelStatement(stmt) => {
                    let lowered = self.lower_stmt(stmt)?;
                    out.statements.push(lowered);
                }
            }
        }
        Ok(out)
    }

    fn symbol_of(&self, node: NodeId, span: Span) -> Result<Symbol, TransformError> {
        self.semantic.symbol_of(node).ok_or_else(|| {
            TransformError::collaborator_failure(
                format!("semantic model returned no symbol for node {node:?}"),
                Some(span),
            )
        })
    }

    fn declared_symbol(&self, node: NodeId, span: Span) -> Result<Symbol, TransformError> {
        self.semantic.declared_symbol(node).ok_or_else(|| {
            TransformError::collaborator_failure(
                format!("semantic model returned no declared symbol for node {node:?}"),
                Some(span),
            )
        })
    }

    fn type_of(&self, node: NodeId, span: Span) -> Result<TypeRef, TransformError> {
        self.semantic.type_of(node).ok_or_else(|| {
            TransformError::collaborator_failure(
                format!("semantic model returned no type for node {node:?}"),
                Some(span),
            )
        })
    }

    fn fresh_temp(&mut self, span: Span) -> Result<String, TransformError> {
        temp::fresh_temp(self.stacks.cur_function_mut(), Some(span))
    }
}
