use crate::dtl;
use crate::dtl::Expr;
use crate::isl;
use crate::isl::stmt::{
    Block, DoWhileStmt, ForEachStmt, ForStmt, GotoStmt, GotoTarget, IfStmt, LabeledStmt,
    LocalDeclarationStmt, SwitchLabel, SwitchSection, SwitchStmt, WhileStmt,
};
use crate::isl::trivia::CommentTrivia;

use super::context::SwitchCtx;
use super::Transformer;
use crate::core::TransformError;

enum BlockItem<'a> {
    Stmt(&'a isl::Stmt),
    Comment(&'a CommentTrivia),
}

/// The key goto-case uses to find a synthetic label and the key a case
/// section's own labels expose, so the two sides of §4.10 "Goto" agree on
/// which section a forward/backward jump targets.
fn case_label_key(e: &isl::Expr) -> String {
    match e {
        isl::Expr::Literal(lit) => lit.raw_text.clone(),
        other => format!("n{}", other.id().0),
    }
}

impl<'a> Transformer<'a> {
    pub fn lower_stmt(&mut self, stmt: &isl::Stmt) -> Result<dtl::Stmt, TransformError> {
        match stmt {
            isl::Stmt::Block(b) => self.lower_block(b, true),
            isl::Stmt::If(s) => self.lower_if(s),
            isl::Stmt::While(s) => self.lower_while(s),
            isl::Stmt::DoWhile(s) => self.lower_do_while(s),
            isl::Stmt::For(s) => self.lower_for(s),
            isl::Stmt::ForEach(s) => self.lower_for_each(s),
            isl::Stmt::Switch(s) => self.lower_switch(s),
            isl::Stmt::Goto(s) => self.lower_goto(s),
            isl::Stmt::Labeled(s) => self.lower_labeled(s),
            isl::Stmt::Return(s) => {
                let value = match &s.value {
                    Some(e) => Some(self.lower_expr(e)?),
                    None => None,
                };
                Ok(dtl::Stmt::Return(value))
            }
            isl::Stmt::Break(_) => Ok(dtl::Stmt::Break),
            isl::Stmt::Throw(s) => {
                let value = self.lower_expr(&s.value)?;
                Ok(dtl::Stmt::ExpressionStatement(Expr::Invocation {
                    callee: Box::new(Expr::ident("Throw")),
                    arguments: vec![value],
                }))
            }
            isl::Stmt::Expression(s) => {
                let value = self.lower_expr_as_statement(&s.expr)?;
                Ok(dtl::Stmt::ExpressionStatement(value))
            }
            isl::Stmt::LocalDeclaration(s) => self.lower_local_declaration(s),
            isl::Stmt::YieldReturn(s) => {
                self.stacks.cur_function_mut().has_yield = true;
                let value = self.lower_expr(&s.value)?;
                Ok(dtl::Stmt::ExpressionStatement(Expr::Invocation {
                    callee: Box::new(Expr::MemberAccess {
                        receiver: Box::new(Expr::ident("System")),
                        name: "YieldReturn".to_string(),
                        is_method_call: false,
                    }),
                    arguments: vec![value],
                }))
            }
            isl::Stmt::YieldBreak(s) => {
                self.stacks.cur_function_mut().has_yield = true;
                let value = match &s.value {
                    Some(e) => Some(self.lower_expr(e)?),
                    None => None,
                };
                Ok(dtl::Stmt::Return(value))
            }
        }
    }

    /// `VisitBlock` (§4.8): merges comments and statements into source-line
    /// order, emitting blank-lines statements for gaps and wrapping the
    /// result in a block-block when the caller says the parent is itself a
    /// block or switch-section.
    pub fn lower_block(&mut self, block: &Block, wrap_as_block_block: bool) -> Result<dtl::Stmt, TransformError> {
        let mut items: Vec<(usize, usize, BlockItem)> = Vec::with_capacity(
            block.statements.len() + block.comments.len(),
        );
        for s in &block.statements {
            let span = s.span();
            items.push((span.start.line, span.end.line, BlockItem::Stmt(s)));
        }
        for c in &block.comments {
            items.push((c.span.start.line, c.span.end.line, BlockItem::Comment(c)));
        }
        items.sort_by_key(|(start, _, _)| *start);

        self.stacks.push_block();
        let mut prev_end_line: Option<usize> = None;
        for (start_line, end_line, item) in items {
            if let Some(prev) = prev_end_line {
                let gap = start_line.saturating_sub(prev);
                if gap > 1 {
                    self.stacks.cur_block_mut().push(dtl::Stmt::BlankLines(gap - 1));
                }
            }
            match item {
                BlockItem::Stmt(s) => {
                    let lowered = self.lower_stmt(s)?;
                    self.stacks.cur_block_mut().push(lowered);
                }
                BlockItem::Comment(c) => {
                    let node = if c.is_multiline {
                        dtl::Stmt::LongComment(c.text.clone())
                    } else {
                        dtl::Stmt::ShortComment(c.text.clone())
                    };
                    self.stacks.cur_block_mut().push(node);
                }
            }
            prev_end_line = Some(end_line);
        }
        let statements = self.stacks.pop_block().take();
        Ok(if wrap_as_block_block {
            dtl::Stmt::BlockBlock(statements)
        } else {
            dtl::Stmt::Block(statements)
        })
    }

    /// `WriteStatementOrBlock` (§4.10): splice a block body in directly,
    /// otherwise lower the single statement into a fresh one-statement
    /// block.
    fn write_statement_or_block(&mut self, stmt: &isl::Stmt) -> Result<Box<dtl::Stmt>, TransformError> {
        if let isl::Stmt::Block(b) = stmt {
            return Ok(Box::new(self.lower_block(b, false)?));
        }
        self.stacks.push_block();
        let lowered = self.lower_stmt(stmt)?;
        self.stacks.cur_block_mut().push(lowered);
        let stmts = self.stacks.pop_block().take();
        Ok(Box::new(dtl::Stmt::Block(stmts)))
    }

    fn lower_if(&mut self, s: &IfStmt) -> Result<dtl::Stmt, TransformError> {
        let condition = self.lower_expr(&s.condition)?;
        let then_branch = self.write_statement_or_block(&s.then_branch)?;
        let else_branch = match &s.else_branch {
            Some(else_stmt) => Some(self.lower_else(else_stmt)?),
            None => None,
        };
        Ok(dtl::Stmt::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    fn lower_else(&mut self, else_stmt: &isl::Stmt) -> Result<Box<dtl::Stmt>, TransformError> {
        if let isl::Stmt::If(inner) = else_stmt {
            return Ok(Box::new(self.lower_if(inner)?));
        }
        self.write_statement_or_block(else_stmt)
    }

    fn lower_while(&mut self, s: &WhileStmt) -> Result<dtl::Stmt, TransformError> {
        let condition = self.lower_expr(&s.condition)?;
        let body = self.write_statement_or_block(&s.body)?;
        Ok(dtl::Stmt::While { condition, body })
    }

    /// `do { } while (c)` maps to `repeat ... until not (c)`.
    fn lower_do_while(&mut self, s: &DoWhileStmt) -> Result<dtl::Stmt, TransformError> {
        let body = self.write_statement_or_block(&s.body)?;
        let condition = self.lower_expr(&s.condition)?;
        let negated = Expr::PrefixUnary {
            op: "not".to_string(),
            operand: Box::new(Expr::Parenthesized(Box::new(condition))),
        };
        Ok(dtl::Stmt::RepeatUntil {
            body,
            condition: negated,
        })
    }

    fn lower_for_each(&mut self, s: &ForEachStmt) -> Result<dtl::Stmt, TransformError> {
        let iterable = self.lower_expr(&s.iterable)?;
        let body = self.write_statement_or_block(&s.body)?;
        Ok(dtl::Stmt::ForIn {
            vars: vec![s.variable_name.clone()],
            iterable,
            body,
        })
    }

    /// `for` lowers into a nested block: declaration, initializers, then a
    /// `while(condition ?: true)` whose body ends with the incrementors.
    fn lower_for(&mut self, s: &ForStmt) -> Result<dtl::Stmt, TransformError> {
        self.stacks.push_block();

        if let Some(decl) = &s.declaration {
            let lowered = self.lower_local_declaration(decl)?;
            self.stacks.cur_block_mut().push(lowered);
        }
        for init in &s.initializers {
            let lowered = self.lower_expr(init)?;
            self.stacks
                .cur_block_mut()
                .push(dtl::Stmt::ExpressionStatement(lowered));
        }

        let condition = match &s.condition {
            Some(c) => self.lower_expr(c)?,
            None => Expr::ident("true"),
        };

        let body_stmt = self.write_statement_or_block(&s.body)?;
        let mut body_stmts = match *body_stmt {
            dtl::Stmt::Block(v) => v,
            other => vec![other],
        };
        for inc in &s.incrementors {
            let lowered = self.lower_expr(inc)?;
            body_stmts.push(dtl::Stmt::ExpressionStatement(lowered));
        }
        self.stacks.cur_block_mut().push(dtl::Stmt::While {
            condition,
            body: Box::new(dtl::Stmt::Block(body_stmts)),
        });

        let outer = self.stacks.pop_block().take();
        Ok(dtl::Stmt::Block(outer))
    }

    /// `switch` (§4.10): a subject temp, an if/elif chain per case section
    /// combining labels with `or`, the default section passed through
    /// unconditionally, and synthetic labels for any `goto case`/`goto
    /// default` requested against this switch.
    fn lower_switch(&mut self, s: &SwitchStmt) -> Result<dtl::Stmt, TransformError> {
        tracing::trace!(span = ?s.span, sections = s.sections.len(), "lowering switch");
        self.stacks.push_block();
        let temp = self.fresh_temp(s.span)?;
        self.stacks.push_switch(SwitchCtx::new(temp.clone()));

        let subject = self.lower_expr(&s.subject)?;
        self.stacks.cur_block_mut().push(dtl::Stmt::LocalVar {
            name: temp.clone(),
            init: Some(subject),
        });

        let mut rendered_sections = Vec::with_capacity(s.sections.len());
        for section in &s.sections {
            let has_default = section
                .labels
                .iter()
                .any(|l| matches!(l, SwitchLabel::Default));

            let body_stmts = self.lower_switch_section_statements(section)?;
            let label_keys = Self::section_label_keys(section);
            let mut wrapped = dtl::Stmt::Block(body_stmts);
            for key in &label_keys {
                let label = format!("label_{key}");
                if self.stacks.cur_switch_mut().label_is_requested(&label) {
                    wrapped = dtl::Stmt::Labeled {
                        label,
                        statement: Box::new(wrapped),
                    };
                }
            }

            if has_default {
                rendered_sections.push(wrapped);
                continue;
            }

            let mut condition: Option<Expr> = None;
            for label in &section.labels {
                if let SwitchLabel::Case(case_expr) = label {
                    let lowered_label = self.lower_expr(case_expr)?;
                    let cmp = Expr::Binary {
                        op: "==".to_string(),
                        left: Box::new(Expr::ident(temp.clone())),
                        right: Box::new(lowered_label),
                    };
                    condition = Some(match condition {
                        None => cmp,
                        Some(acc) => Expr::Binary {
                            op: "or".to_string(),
                            left: Box::new(acc),
                            right: Box::new(cmp),
                        },
                    });
                }
            }
            let condition = condition.unwrap_or_else(|| Expr::ident("true"));
            rendered_sections.push(dtl::Stmt::If {
                condition,
                then_branch: Box::new(wrapped),
                else_branch: None,
            });
        }

        self.stacks.pop_switch();
        for stmt in rendered_sections {
            self.stacks.cur_block_mut().push(stmt);
        }
        let stmts = self.stacks.pop_block().take();
        Ok(dtl::Stmt::Block(stmts))
    }

    fn lower_switch_section_statements(
        &mut self,
        section: &SwitchSection,
    ) -> Result<Vec<dtl::Stmt>, TransformError> {
        self.stacks.push_block();
        for stmt in &section.statements {
            let lowered = self.lower_stmt(stmt)?;
            self.stacks.cur_block_mut().push(lowered);
        }
        Ok(self.stacks.pop_block().take())
    }

    fn section_label_keys(section: &SwitchSection) -> Vec<String> {
        section
            .labels
            .iter()
            .map(|l| match l {
                SwitchLabel::Case(e) => case_label_key(e),
                SwitchLabel::Default => "default".to_string(),
            })
            .collect()
    }

    fn lower_goto(&mut self, g: &GotoStmt) -> Result<dtl::Stmt, TransformError> {
        match &g.target {
            GotoTarget::Label(name) => Ok(dtl::Stmt::Goto(name.clone())),
            GotoTarget::Case(case_expr) => {
                let key = case_label_key(case_expr);
                let label = self.stacks.cur_switch_mut().label_for_case(&key);
                tracing::trace!(span = ?g.span, %label, "synthesizing goto-case label");
                Ok(dtl::Stmt::Goto(label))
            }
            GotoTarget::Default => {
                let label = self.stacks.cur_switch_mut().label_for_default();
                tracing::trace!(span = ?g.span, %label, "synthesizing goto-default label");
                Ok(dtl::Stmt::Goto(label))
            }
        }
    }

    fn lower_labeled(&mut self, l: &LabeledStmt) -> Result<dtl::Stmt, TransformError> {
        let statement = self.lower_stmt(&l.statement)?;
        Ok(dtl::Stmt::Labeled {
            label: l.label.clone(),
            statement: Box::new(statement),
        })
    }

    /// §4.11: more than one variable with no initializers collapses to a
    /// multi-name declaration; otherwise one declarator per variable.
    fn lower_local_declaration(
        &mut self,
        decl: &LocalDeclarationStmt,
    ) -> Result<dtl::Stmt, TransformError> {
        if decl.declarators.len() > 1 && decl.declarators.iter().all(|d| d.initializer.is_none()) {
            let names = decl.declarators.iter().map(|d| d.name.clone()).collect();
            return Ok(dtl::Stmt::LocalVars(names));
        }
        if decl.declarators.len() == 1 {
            let d = &decl.declarators[0];
            let init = match &d.initializer {
                Some(e) => Some(self.lower_expr(e)?),
                None => None,
            };
            return Ok(dtl::Stmt::LocalVar {
                name: d.name.clone(),
                init,
            });
        }
        let mut stmts = Vec::with_capacity(decl.declarators.len());
        for d in &decl.declarators {
            let init = match &d.initializer {
                Some(e) => Some(self.lower_expr(e)?),
                None => None,
            };
            stmts.push(dtl::Stmt::LocalVar {
                name: d.name.clone(),
                init,
            });
        }
        Ok(dtl::Stmt::Block(stmts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Span;
    use crate::dtl::Literal;
    use crate::isl::NodeId;
    use crate::metadata::MapTable;
    use crate::semantic::{Symbol, SymbolKind};
    use crate::testkit::{local_ident, numeric, FixedModel};
    use std::collections::HashMap;

    fn span_at(line: usize) -> Span {
        Span::from_coords(line, 0, line, 1)
    }

    fn break_stmt(id: u32, line: usize) -> isl::Stmt {
        isl::Stmt::Break(crate::isl::stmt::BreakStmt { id: NodeId(id), span: span_at(line) })
    }

    fn new_transformer<'a>(model: &'a FixedModel, metadata: &'a MapTable) -> Transformer<'a> {
        crate::testkit::transformer_with_function(model, metadata, 16)
    }

    // ---- block + comment interleaving (§4.8, §8 property 2) -----------

    #[test]
    fn comments_and_statements_merge_in_source_line_order_with_blank_lines() {
        let model = FixedModel { symbols: HashMap::new(), types: HashMap::new() };
        let metadata = MapTable::new();
        let mut transformer = new_transformer(&model, &metadata);

        // line 1: comment "first"
        // line 2: break;
        // line 5: break;  (gap of 2 => one blank-lines(2) entry)
        let block = Block {
            id: NodeId(1),
            span: span_at(1),
            statements: vec![break_stmt(2, 2), break_stmt(3, 5)],
            comments: vec![CommentTrivia {
                span: span_at(1),
                is_multiline: false,
                text: " first".to_string(),
            }],
        };

        let lowered = transformer.lower_block(&block, false).unwrap();
        match lowered {
            dtl::Stmt::Block(stmts) => {
                assert_eq!(stmts.len(), 4);
                assert_eq!(stmts[0], dtl::Stmt::ShortComment(" first".to_string()));
                assert_eq!(stmts[1], dtl::Stmt::Break);
                assert_eq!(stmts[2], dtl::Stmt::BlankLines(2));
                assert_eq!(stmts[3], dtl::Stmt::Break);
            }
            other => panic!("expected Block, got {other:?}"),
        }
    }

    #[test]
    fn nested_block_is_wrapped_as_block_block() {
        let model = FixedModel { symbols: HashMap::new(), types: HashMap::new() };
        let metadata = MapTable::new();
        let mut transformer = new_transformer(&model, &metadata);
        let block = Block {
            id: NodeId(1),
            span: span_at(1),
            statements: vec![break_stmt(2, 1)],
            comments: Vec::new(),
        };
        let lowered = transformer.lower_block(&block, true).unwrap();
        assert!(matches!(lowered, dtl::Stmt::BlockBlock(_)));
    }

    // ---- do/while boundary ------------------------------------------------

    #[test]
    fn do_while_true_emits_repeat_until_not_true() {
        let mut symbols = HashMap::new();
        symbols.insert(10, Symbol::simple(SymbolKind::Local, "true"));
        let model = FixedModel { symbols, types: HashMap::new() };
        let metadata = MapTable::new();
        let mut transformer = new_transformer(&model, &metadata);

        let stmt = DoWhileStmt {
            id: NodeId(1),
            span: span_at(1),
            condition: local_ident(10, "true", 1),
            body: Box::new(isl::Stmt::Block(Block {
                id: NodeId(2),
                span: span_at(1),
                statements: Vec::new(),
                comments: Vec::new(),
            })),
        };
        let lowered = transformer.lower_do_while(&stmt).unwrap();
        match lowered {
            dtl::Stmt::RepeatUntil { condition, .. } => {
                assert_eq!(
                    condition,
                    Expr::PrefixUnary {
                        op: "not".to_string(),
                        operand: Box::new(Expr::Parenthesized(Box::new(Expr::ident("true")))),
                    }
                );
            }
            other => panic!("expected RepeatUntil, got {other:?}"),
        }
    }

    // ---- switch / goto (§8 scenario 5) -------------------------------

    #[test]
    fn switch_with_goto_case_and_default_synthesizes_labels() {
        let mut symbols = HashMap::new();
        symbols.insert(20, Symbol::simple(SymbolKind::Local, "x"));
        let model = FixedModel { symbols, types: HashMap::new() };
        let metadata = MapTable::new();
        let mut transformer = new_transformer(&model, &metadata);

        // switch(x) {
        //   case 1: goto case 2;
        //   case 2: break;
        //   default: break;
        // }
        let section_one = SwitchSection {
            id: NodeId(30),
            span: span_at(2),
            labels: vec![SwitchLabel::Case(numeric(31, "1", 2))],
            statements: vec![isl::Stmt::Goto(GotoStmt {
                id: NodeId(32),
                span: span_at(2),
                target: GotoTarget::Case(Box::new(numeric(33, "2", 2))),
            })],
        };
        let section_two = SwitchSection {
            id: NodeId(40),
            span: span_at(3),
            labels: vec![SwitchLabel::Case(numeric(41, "2", 3))],
            statements: vec![break_stmt(42, 3)],
        };
        let section_default = SwitchSection {
            id: NodeId(50),
            span: span_at(4),
            labels: vec![SwitchLabel::Default],
            statements: vec![break_stmt(51, 4)],
        };

        let switch = SwitchStmt {
            id: NodeId(1),
            span: span_at(1),
            subject: local_ident(20, "x", 1),
            sections: vec![section_one, section_two, section_default],
        };

        let lowered = transformer.lower_switch(&switch).unwrap();
        let stmts = match lowered {
            dtl::Stmt::Block(stmts) => stmts,
            other => panic!("expected Block, got {other:?}"),
        };

        // [0] local t1 = x
        assert_eq!(stmts[0], dtl::Stmt::LocalVar { name: "t1".to_string(), init: Some(Expr::ident("x")) });

        // [1] if t1 == 1 { goto label_2 }  (no label wraps section one, it wasn't requested)
        match &stmts[1] {
            dtl::Stmt::If { condition, then_branch, .. } => {
                assert_eq!(
                    *condition,
                    Expr::Binary {
                        op: "==".to_string(),
                        left: Box::new(Expr::ident("t1")),
                        right: Box::new(Expr::Literal(Literal::Numeric("1".to_string()))),
                    }
                );
                match then_branch.as_ref() {
                    dtl::Stmt::Block(inner) => {
                        assert_eq!(inner.len(), 1);
                        assert_eq!(inner[0], dtl::Stmt::Goto("label_2".to_string()));
                    }
                    other => panic!("expected Block, got {other:?}"),
                }
            }
            other => panic!("expected If, got {other:?}"),
        }

        // [2] if t1 == 2 { ::label_2:: break }
        match &stmts[2] {
            dtl::Stmt::If { condition, then_branch, .. } => {
                assert_eq!(
                    *condition,
                    Expr::Binary {
                        op: "==".to_string(),
                        left: Box::new(Expr::ident("t1")),
                        right: Box::new(Expr::Literal(Literal::Numeric("2".to_string()))),
                    }
                );
                match then_branch.as_ref() {
                    dtl::Stmt::Labeled { label, statement } => {
                        assert_eq!(label, "label_2");
                        match statement.as_ref() {
                            dtl::Stmt::Block(inner) => assert_eq!(inner, &vec![dtl::Stmt::Break]),
                            other => panic!("expected Block, got {other:?}"),
                        }
                    }
                    other => panic!("expected Labeled (requested by goto case 2), got {other:?}"),
                }
            }
            other => panic!("expected If, got {other:?}"),
        }

        // [3] default block, unconditional
        assert_eq!(stmts[3], dtl::Stmt::Block(vec![dtl::Stmt::Break]));
    }
}
