use crate::isl::NodeId;

use super::{Symbol, TypeRef};

/// Per-node symbol/type resolution, provided by an external analyzer.
///
/// Every method takes a [`NodeId`] rather than a node reference: the
/// transformer only ever needs the answer for the node it is currently
/// visiting, and keying on id keeps this trait decoupled from the concrete
/// input-tree shape in [`crate::isl`].
pub trait SemanticModel {
    /// The symbol a reference node (identifier, member access, invocation
    /// callee) resolves to.
    fn symbol_of(&self, node: NodeId) -> Option<Symbol>;

    /// The symbol a declaration node (method, field, property, event,
    /// parameter, local declarator) introduces.
    fn declared_symbol(&self, node: NodeId) -> Option<Symbol>;

    /// The resolved type of an expression node.
    fn type_of(&self, node: NodeId) -> Option<TypeRef>;
}
