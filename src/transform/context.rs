use std::collections::HashSet;

use crate::dtl::{Stmt, TypeDecl};

/// Per-function bookkeeping: the fixed temp pool and the yield flag set by a
/// `yield` statement visit (consulted when the method visitor finishes the
/// body, see §4.6).
#[derive(Debug)]
pub struct FunctionCtx {
    pool_size: usize,
    temp_index: usize,
    pub has_yield: bool,
    pub is_static_constructor: bool,
}

impl FunctionCtx {
    pub fn new(pool_size: usize, is_static_constructor: bool) -> Self {
        Self {
            pool_size,
            temp_index: 0,
            has_yield: false,
            is_static_constructor,
        }
    }

    pub fn pool_size(&self) -> usize {
        self.pool_size
    }

    /// Index that the *next* `freshTemp()` call would consume, without
    /// consuming it.
    pub fn temp_index(&self) -> usize {
        self.temp_index
    }

    pub fn is_exhausted(&self) -> bool {
        self.temp_index >= self.pool_size
    }

    /// Consume one slot of the pool, returning the name that slot mints.
    /// Caller is expected to have checked `is_exhausted` first.
    pub fn take_temp_name(&mut self) -> String {
        let name = format!("t{}", self.temp_index + 1);
        self.temp_index += 1;
        name
    }
}

/// Per-switch bookkeeping: the subject temp and the synthetic labels
/// requested by `goto case` / `goto default` against this switch (§4.10).
#[derive(Debug, Default)]
pub struct SwitchCtx {
    pub subject_temp: String,
    requested_labels: HashSet<String>,
}

impl SwitchCtx {
    pub fn new(subject_temp: impl Into<String>) -> Self {
        Self {
            subject_temp: subject_temp.into(),
            requested_labels: HashSet::new(),
        }
    }

    /// Acquire (creating if necessary) the synthetic label for a `goto
    /// case <key>`.
    pub fn label_for_case(&mut self, key: &str) -> String {
        let label = format!("label_{key}");
        self.requested_labels.insert(label.clone());
        label
    }

    pub fn label_for_default(&mut self) -> String {
        let label = "label_default".to_string();
        self.requested_labels.insert(label.clone());
        label
    }

    pub fn label_is_requested(&self, label: &str) -> bool {
        self.requested_labels.contains(label)
    }
}

/// Per-block statement accumulator. Expression visitors that must emit a
/// preceding statement (temporaries, expanded increments, multi-assignment
/// for ref/out calls, the falsey-ternary expansion) push directly onto the
/// innermost `BlockCtx` rather than returning anything besides the
/// expression value — see the "Statement emission during expression
/// visits" design note.
#[derive(Debug, Default)]
pub struct BlockCtx {
    pub statements: Vec<Stmt>,
}

impl BlockCtx {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, stmt: Stmt) {
        self.statements.push(stmt);
    }

    pub fn take(self) -> Vec<Stmt> {
        self.statements
    }
}

/// The four scoped stacks from §4.1. A push is always matched by a pop on
/// every return path of the corresponding visit, including error paths —
/// callers are expected to pair `push_*`/`pop_*` inside a scope guard or an
/// explicit `?`-propagating block rather than holding a push across an
/// early return.
#[derive(Debug, Default)]
pub struct ContextStacks {
    types: Vec<TypeDecl>,
    type_sealed: Vec<bool>,
    functions: Vec<FunctionCtx>,
    switches: Vec<SwitchCtx>,
    blocks: Vec<BlockCtx>,
}

impl ContextStacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_type(&mut self, type_decl: TypeDecl, is_sealed: bool) {
        self.types.push(type_decl);
        self.type_sealed.push(is_sealed);
    }

    pub fn pop_type(&mut self) -> TypeDecl {
        self.type_sealed.pop().expect("pop_type on empty type stack");
        self.types.pop().expect("pop_type on empty type stack")
    }

    pub fn cur_type_mut(&mut self) -> &mut TypeDecl {
        self.types.last_mut().expect("CurType queried with no enclosing type")
    }

    pub fn cur_type_is_sealed(&self) -> bool {
        *self
            .type_sealed
            .last()
            .expect("CurType queried with no enclosing type")
    }

    pub fn push_function(&mut self, pool_size: usize, is_static_constructor: bool) {
        self.functions
            .push(FunctionCtx::new(pool_size, is_static_constructor));
    }

    pub fn pop_function(&mut self) -> FunctionCtx {
        self.functions
            .pop()
            .expect("pop_function on empty function stack")
    }

    pub fn cur_function_mut(&mut self) -> &mut FunctionCtx {
        self.functions
            .last_mut()
            .expect("CurFunction queried with no enclosing function")
    }

    pub fn push_switch(&mut self, ctx: SwitchCtx) {
        self.switches.push(ctx);
    }

    pub fn pop_switch(&mut self) -> SwitchCtx {
        self.switches.pop().expect("pop_switch on empty switch stack")
    }

    pub fn cur_switch_mut(&mut self) -> &mut SwitchCtx {
        self.switches
            .last_mut()
            .expect("CurSwitch queried with no enclosing switch")
    }

    pub fn push_block(&mut self) {
        self.blocks.push(BlockCtx::new());
    }

    pub fn pop_block(&mut self) -> BlockCtx {
        self.blocks.pop().expect("pop_block on empty block stack")
    }

    pub fn cur_block_mut(&mut self) -> &mut BlockCtx {
        self.blocks
            .last_mut()
            .expect("CurBlock queried with no enclosing block")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_temp_names_increase_and_report_exhaustion() {
        let mut function = FunctionCtx::new(2, false);
        assert_eq!(function.take_temp_name(), "t1");
        assert_eq!(function.take_temp_name(), "t2");
        assert!(function.is_exhausted());
    }

    #[test]
    fn switch_labels_are_idempotent_per_key() {
        let mut switch = SwitchCtx::new("t1");
        let first = switch.label_for_case("2");
        let second = switch.label_for_case("2");
        assert_eq!(first, second);
        assert!(switch.label_is_requested("label_2"));
        assert!(!switch.label_is_requested("label_3"));
    }

    #[test]
    fn type_stack_push_pop_round_trips() {
        use crate::dtl::TypeDeclKind;
        let mut stacks = ContextStacks::new();
        stacks.push_type(TypeDecl::new(TypeDeclKind::Class, "Car"), false);
        stacks.cur_type_mut().record_static_readonly_assignment("MaxSpeed");
        let popped = stacks.pop_type();
        assert_eq!(popped.static_readonly_assignment_names, vec!["MaxSpeed"]);
    }
}
