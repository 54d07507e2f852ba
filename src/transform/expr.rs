use crate::dtl::{Expr, Literal, PropertyAdapter, PropertyCallStyle};
use crate::isl;
use crate::isl::expr::{
    AssignmentExpr, BinaryExpr, ConditionalExpr, IdentifierNameExpr, InvocationExpr, LiteralExpr,
    LiteralKind, MemberAccessExpr, ParenthesizedExpr, RefKind, UnaryExpr,
};
use crate::semantic::{ConstantValue, Symbol, SymbolKind};

use super::operators::map_operator;
use super::Transformer;
use crate::core::TransformError;

impl<'a> Transformer<'a> {
    /// Lowers an expression used purely for its value (every recursive call
    /// site). Only the direct child of an expression-statement should call
    /// [`Transformer::lower_expr_as_statement`] instead.
    pub fn lower_expr(&mut self, expr: &isl::Expr) -> Result<Expr, TransformError> {
        self.lower_expr_ctx(expr, false)
    }

    /// Lowers the expression that is the whole body of an expression
    /// statement — the one context where unary increments and ref/out
    /// invocations become the statement itself instead of needing a
    /// preceding temp (§4.9).
    pub fn lower_expr_as_statement(&mut self, expr: &isl::Expr) -> Result<Expr, TransformError> {
        self.lower_expr_ctx(expr, true)
    }

    fn lower_expr_ctx(&mut self, expr: &isl::Expr, is_statement_expr: bool) -> Result<Expr, TransformError> {
        match expr {
            isl::Expr::Identifier(e) => self.lower_identifier_name(e, true),
            isl::Expr::Literal(e) => self.lower_literal(e),
            isl::Expr::Binary(e) => self.lower_binary(e),
            isl::Expr::Unary(e) => self.lower_unary(e, is_statement_expr),
            isl::Expr::Parenthesized(e) => self.lower_parenthesized(e),
            isl::Expr::MemberAccess(e) => self.lower_member_access(e),
            isl::Expr::Invocation(e) => self.lower_invocation(e, is_statement_expr),
            isl::Expr::Assignment(e) => self.lower_assignment(e),
            isl::Expr::Conditional(e) => self.lower_conditional(e),
        }
    }

    // ---- identifier-name (§4.9) -------------------------------------

    fn lower_identifier_name(&mut self, e: &IdentifierNameExpr, is_internal: bool) -> Result<Expr, TransformError> {
        self.lower_identifier_name_inner(e, is_internal, false)
    }

    fn lower_identifier_name_as_assignment_target(
        &mut self,
        e: &IdentifierNameExpr,
    ) -> Result<Expr, TransformError> {
        self.lower_identifier_name_inner(e, true, true)
    }

    fn lower_identifier_name_inner(
        &mut self,
        e: &IdentifierNameExpr,
        is_internal: bool,
        is_assignment_target: bool,
    ) -> Result<Expr, TransformError> {
        let symbol = self.symbol_of(e.id, e.span)?;
        match symbol.kind {
            SymbolKind::Local | SymbolKind::Parameter | SymbolKind::TypeParameter | SymbolKind::Label => {
                Ok(Expr::ident(symbol.name))
            }
            SymbolKind::NamedType => Ok(Expr::ident(self.qualified_type_name(&symbol))),
            SymbolKind::Field => self.field_like_identifier(&symbol, is_internal, is_assignment_target),
            SymbolKind::Method => Ok(self.method_name_expression(&symbol, is_internal)),
            SymbolKind::Property | SymbolKind::Event => {
                self.field_or_event_identifier_name(&symbol, is_internal, is_assignment_target)
            }
        }
    }

    fn qualified_type_name(&self, symbol: &Symbol) -> String {
        self.metadata
            .type_map_name(symbol)
            .unwrap_or_else(|| symbol.name.clone())
    }

    fn mapped_method_name(&self, symbol: &Symbol) -> String {
        self.metadata
            .method_map_name(symbol)
            .unwrap_or_else(|| symbol.name.clone())
    }

    fn const_literal_expression(symbol: &Symbol) -> Expr {
        match &symbol.constant_value {
            Some(ConstantValue::Int(v)) => Expr::Literal(Literal::Numeric(v.to_string())),
            Some(ConstantValue::Float(v)) => Expr::Literal(Literal::Numeric(v.to_string())),
            Some(ConstantValue::Bool(v)) => Expr::ident(if *v { "true" } else { "false" }),
            Some(ConstantValue::Char(c)) => Expr::Literal(Literal::Character(*c)),
            Some(ConstantValue::Str(s)) => Expr::Literal(Literal::Str(s.clone())),
            Some(ConstantValue::Nil) | None => Expr::nil(),
        }
    }

    /// Shared field rules, also used by field-like (auto) properties/events.
    fn field_like_identifier(
        &mut self,
        symbol: &Symbol,
        is_internal: bool,
        is_assignment_target: bool,
    ) -> Result<Expr, TransformError> {
        if symbol.is_static {
            if symbol.has_constant_value() {
                return Ok(Self::const_literal_expression(symbol));
            }
            return Ok(self.build_static_field_name(symbol, is_internal, is_assignment_target));
        }
        if is_internal {
            Ok(Expr::MemberAccess {
                receiver: Box::new(Expr::this()),
                name: symbol.name.clone(),
                is_method_call: false,
            })
        } else {
            Ok(Expr::ident(symbol.name.clone()))
        }
    }

    /// `BuildStaticFieldName` (§4.9).
    fn build_static_field_name(
        &mut self,
        symbol: &Symbol,
        is_internal: bool,
        is_assignment_target: bool,
    ) -> Expr {
        if symbol.is_private() {
            return Expr::ident(symbol.name.clone());
        }
        if symbol.is_read_only {
            if is_assignment_target {
                self.stacks
                    .cur_type_mut()
                    .record_static_readonly_assignment(symbol.name.clone());
            }
            return Expr::ident(symbol.name.clone());
        }
        if self.stacks.cur_function_mut().is_static_constructor {
            return Expr::MemberAccess {
                receiver: Box::new(Expr::this()),
                name: symbol.name.clone(),
                is_method_call: false,
            };
        }
        if is_internal {
            Expr::ident(self.qualified_type_name_for_field(symbol))
        } else {
            Expr::ident(symbol.name.clone())
        }
    }

    fn qualified_type_name_for_field(&self, symbol: &Symbol) -> String {
        match &symbol.containing_type {
            Some(containing) => format!("{containing}.{}", symbol.name),
            None => symbol.name.clone(),
        }
    }

    /// `GetMethodNameExpression` (§4.9).
    fn method_name_expression(&mut self, symbol: &Symbol, is_internal: bool) -> Expr {
        let mapped = self.mapped_method_name(symbol);
        if symbol.is_static {
            return Expr::ident(mapped);
        }
        if !is_internal {
            return Expr::ident(mapped);
        }
        if !symbol.is_overridable || self.stacks.cur_type_is_sealed() {
            Expr::InternalMethodIdentifier(mapped)
        } else {
            Expr::MemberAccess {
                receiver: Box::new(Expr::this()),
                name: mapped,
                is_method_call: true,
            }
        }
    }

    /// `VisitFieldOrEventIdentifierName` (§4.9).
    fn field_or_event_identifier_name(
        &mut self,
        symbol: &Symbol,
        is_internal: bool,
        is_assignment_target: bool,
    ) -> Result<Expr, TransformError> {
        if symbol.is_field_like {
            return self.field_like_identifier(symbol, is_internal, is_assignment_target);
        }
        if !is_internal {
            return Ok(Expr::PropertyAdapter(PropertyAdapter::pending(symbol.name.clone())));
        }
        let call_style = if symbol.is_overridable && !self.stacks.cur_type_is_sealed() {
            PropertyCallStyle::MethodCall
        } else {
            PropertyCallStyle::FreeCall
        };
        Ok(Expr::PropertyAdapter(PropertyAdapter::bare(symbol.name.clone(), call_style)))
    }

    // ---- literals -----------------------------------------------------

    fn lower_literal(&self, e: &LiteralExpr) -> Result<Expr, TransformError> {
        match e.kind {
            LiteralKind::Character => {
                let ch = e.raw_text.chars().next().ok_or_else(|| {
                    TransformError::invariant_breach("character literal with empty raw text", Some(e.span))
                })?;
                Ok(Expr::Literal(Literal::Character(ch)))
            }
            LiteralKind::Null => Ok(Expr::nil()),
            LiteralKind::Numeric => Ok(Expr::Literal(Literal::Numeric(e.raw_text.clone()))),
            LiteralKind::Str => Ok(Expr::Literal(Literal::Str(e.raw_text.clone()))),
        }
    }

    // ---- binary / unary / parenthesized --------------------------------

    fn lower_binary(&mut self, e: &BinaryExpr) -> Result<Expr, TransformError> {
        let left = self.lower_expr(&e.left)?;
        let right = self.lower_expr(&e.right)?;
        Ok(Expr::Binary {
            op: map_operator(&e.op),
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    fn lower_parenthesized(&mut self, e: &ParenthesizedExpr) -> Result<Expr, TransformError> {
        let inner = self.lower_expr(&e.inner)?;
        Ok(Expr::Parenthesized(Box::new(inner)))
    }

    /// Unary increments (`++x`/`--x`/`x++`/`x--`) lower to `x = x ± 1`; all
    /// other unary operators are a plain prefix-unary with operator remap.
    fn lower_unary(&mut self, e: &UnaryExpr, is_statement_expr: bool) -> Result<Expr, TransformError> {
        if e.op == "++" || e.op == "--" {
            return self.lower_increment(e, is_statement_expr);
        }
        let operand = self.lower_expr(&e.operand)?;
        Ok(Expr::PrefixUnary {
            op: map_operator(&e.op),
            operand: Box::new(operand),
        })
    }

    fn lower_increment(&mut self, e: &UnaryExpr, is_statement_expr: bool) -> Result<Expr, TransformError> {
        let lhs = self.lower_expr(&e.operand)?;
        let delta = if e.op == "++" { "1" } else { "1" };
        let op = if e.op == "++" { "+" } else { "-" };
        let assignment = Expr::Assignment {
            left: Box::new(lhs.clone()),
            right: Box::new(Expr::Binary {
                op: op.to_string(),
                left: Box::new(lhs.clone()),
                right: Box::new(Expr::Literal(Literal::Numeric(delta.to_string()))),
            }),
        };

        if is_statement_expr {
            return Ok(assignment);
        }

        if e.is_prefix {
            self.stacks
                .cur_block_mut()
                .push(crate::dtl::Stmt::ExpressionStatement(assignment));
            Ok(lhs)
        } else {
            let temp = self.fresh_temp(e.span)?;
            self.stacks.cur_block_mut().push(crate::dtl::Stmt::LocalVar {
                name: temp.clone(),
                init: Some(lhs),
            });
            self.stacks
                .cur_block_mut()
                .push(crate::dtl::Stmt::ExpressionStatement(assignment));
            Ok(Expr::ident(temp))
        }
    }

    // ---- member access (§4.9) ------------------------------------------

    fn lower_member_access(&mut self, e: &MemberAccessExpr) -> Result<Expr, TransformError> {
        let receiver = self.lower_expr(&e.receiver)?;
        let symbol = self.symbol_of(e.name.id, e.span)?;
        match symbol.kind {
            SymbolKind::Field if symbol.has_constant_value() => Ok(Self::const_literal_expression(&symbol)),
            SymbolKind::Field => Ok(Expr::MemberAccess {
                receiver: Box::new(receiver),
                name: symbol.name.clone(),
                is_method_call: false,
            }),
            SymbolKind::Method => {
                let mapped = self.mapped_method_name(&symbol);
                Ok(Expr::MemberAccess {
                    receiver: Box::new(receiver),
                    name: mapped,
                    is_method_call: !symbol.is_static,
                })
            }
            SymbolKind::Property | SymbolKind::Event => {
                let member = self.field_or_event_identifier_name(&symbol, false, false)?;
                match member {
                    Expr::PropertyAdapter(mut adapter) => {
                        adapter.set_receiver(receiver);
                        Ok(Expr::PropertyAdapter(adapter))
                    }
                    other => Ok(other),
                }
            }
            other => Err(TransformError::unsupported_node(
                format!("member access onto symbol kind {other:?}"),
                Some(e.span),
            )),
        }
    }

    // ---- invocation (§4.9) ---------------------------------------------

    fn lower_invocation(&mut self, e: &InvocationExpr, is_statement_expr: bool) -> Result<Expr, TransformError> {
        let callee_symbol = self.callee_symbol(&e.callee)?;
        let mut callee = self.lower_expr(&e.callee)?;

        let mut arguments = Vec::with_capacity(e.arguments.len());
        let mut ref_out_targets = Vec::new();
        for arg in &e.arguments {
            let lowered = self.lower_expr(&arg.expr)?;
            if arg.ref_kind != RefKind::None {
                ref_out_targets.push(lowered.clone());
            }
            arguments.push(lowered);
        }

        if let Some(symbol) = &callee_symbol {
            if symbol.is_extension_method {
                if let Some(reduced_from) = &symbol.reduced_from {
                    let receiver = match &callee {
                        Expr::MemberAccess { receiver, .. } => (**receiver).clone(),
                        other => other.clone(),
                    };
                    let mapped = self.mapped_method_name(reduced_from);
                    let containing = reduced_from
                        .containing_type
                        .clone()
                        .unwrap_or_else(|| reduced_from.name.clone());
                    callee = Expr::MemberAccess {
                        receiver: Box::new(Expr::ident(containing)),
                        name: mapped,
                        is_method_call: false,
                    };
                    arguments.insert(0, receiver);
                }
            }

            if let Expr::InternalMethodIdentifier(name) = &callee {
                callee = Expr::ident(name.clone());
                arguments.insert(0, Expr::this());
            }

            if !symbol.type_arguments.is_empty() {
                let expected_positional = symbol.parameters.len();
                while arguments.len() < expected_positional {
                    arguments.push(Expr::nil());
                }
                for type_argument in &symbol.type_arguments {
                    arguments.push(Expr::ident(self.type_ref_display_name(type_argument)));
                }
            }
        }

        let invocation = Expr::Invocation {
            callee: Box::new(callee),
            arguments,
        };

        if ref_out_targets.is_empty() {
            return Ok(invocation);
        }

        self.lower_ref_out_invocation(invocation, ref_out_targets, &callee_symbol, is_statement_expr, e)
    }

    fn lower_ref_out_invocation(
        &mut self,
        invocation: Expr,
        ref_out_targets: Vec<Expr>,
        callee_symbol: &Option<Symbol>,
        is_statement_expr: bool,
        e: &InvocationExpr,
    ) -> Result<Expr, TransformError> {
        let returns_void = callee_symbol.as_ref().map(|s| s.returns_void).unwrap_or(true);

        if is_statement_expr {
            let mut targets = Vec::with_capacity(ref_out_targets.len() + 1);
            let mut leading_local = None;
            if !returns_void {
                let temp = self.fresh_temp(e.span)?;
                leading_local = Some(temp.clone());
                targets.push(Expr::ident(temp));
            }
            targets.extend(ref_out_targets);
            if let Some(temp) = leading_local {
                self.stacks.cur_block_mut().push(crate::dtl::Stmt::LocalVar {
                    name: temp,
                    init: None,
                });
            }
            return Ok(Expr::MultiAssignment {
                targets,
                value: Box::new(invocation),
            });
        }

        let mut targets = Vec::with_capacity(ref_out_targets.len() + 1);
        let result_temp = self.fresh_temp(e.span)?;
        targets.push(Expr::ident(result_temp.clone()));
        targets.extend(ref_out_targets);
        self.stacks
            .cur_block_mut()
            .push(crate::dtl::Stmt::ExpressionStatement(Expr::MultiAssignment {
                targets,
                value: Box::new(invocation),
            }));
        Ok(Expr::ident(result_temp))
    }

    /// Applies the same `typeMapName` lookup ordinary type identifiers get
    /// to a resolved [`crate::semantic::TypeRef`] — used for generic-method
    /// type-argument padding here and for the `yield` element-type argument
    /// in declaration lowering.
    pub(super) fn type_ref_display_name(&self, type_ref: &crate::semantic::TypeRef) -> String {
        let symbol = TypeRefSymbolAdapter::wrap(type_ref);
        self.metadata
            .type_map_name(&symbol)
            .unwrap_or_else(|| type_ref.name.clone())
    }

    fn callee_symbol(&self, callee: &isl::Expr) -> Result<Option<Symbol>, TransformError> {
        let id = match callee {
            isl::Expr::Identifier(e) => e.id,
            isl::Expr::MemberAccess(e) => e.name.id,
            _ => return Ok(None),
        };
        Ok(self.semantic_symbol_opt(id))
    }

    fn semantic_symbol_opt(&self, id: crate::isl::NodeId) -> Option<Symbol> {
        self.semantic.symbol_of(id)
    }

    // ---- assignment (§4.9) ----------------------------------------------

    fn lower_assignment(&mut self, e: &AssignmentExpr) -> Result<Expr, TransformError> {
        if let isl::Expr::Assignment(inner) = e.right.as_ref() {
            return self.lower_chained_assignment(e, inner);
        }

        let left = self.lower_assignment_target(&e.left)?;
        let right = self.lower_expr(&e.right)?;
        Ok(Self::compose_single_assignment(left, right))
    }

    fn compose_single_assignment(left: Expr, right: Expr) -> Expr {
        match left {
            Expr::PropertyAdapter(mut adapter) => {
                adapter.set_value(right);
                Expr::PropertyAdapter(adapter)
            }
            other => Expr::Assignment {
                left: Box::new(other),
                right: Box::new(right),
            },
        }
    }

    fn lower_assignment_target(&mut self, target: &isl::Expr) -> Result<Expr, TransformError> {
        match target {
            isl::Expr::Identifier(e) => self.lower_identifier_name_as_assignment_target(e),
            other => self.lower_expr(other),
        }
    }

    /// Chained assignment (`a = b = c = …`) unrolled right-to-left into one
    /// link per `=`, then reversed and wrapped as a line-multiple.
    fn lower_chained_assignment(&mut self, outer: &AssignmentExpr) -> Result<Expr, TransformError> {
        tracing::trace!(span = ?outer.span, "unfolding chained assignment");
        let mut targets = Vec::new();
        let target0 = self.lower_assignment_target(&outer.left)?;
        targets.push(target0);
        let mut cursor: &isl::Expr = &outer.right;
        loop {
            match cursor {
                isl::Expr::Assignment(a) => {
                    let target = self.lower_assignment_target(&a.left)?;
                    targets.push(target);
                    cursor = &a.right;
                }
                other => {
                    let value = self.lower_expr(other)?;
                    let mut links = Vec::with_capacity(targets.len());
                    for target in targets.into_iter().rev() {
                        links.push(Self::compose_single_assignment(target, value.clone()));
                    }
                    links.reverse();
                    return Ok(Expr::LineMultiple(links));
                }
            }
        }
    }

    // ---- ternary (§4.9) --------------------------------------------------

    fn lower_conditional(&mut self, e: &ConditionalExpr) -> Result<Expr, TransformError> {
        let may_be_falsey = self
            .semantic
            .type_of(e.when_true.id())
            .map(|ty| ty.may_be_null_or_false())
            .unwrap_or(true);

        let condition = self.lower_expr(&e.condition)?;

        if !may_be_falsey {
            let when_true = self.lower_expr(&e.when_true)?;
            let when_false = self.lower_expr(&e.when_false)?;
            return Ok(Expr::Binary {
                op: "or".to_string(),
                left: Box::new(Expr::Parenthesized(Box::new(Expr::Binary {
                    op: "and".to_string(),
                    left: Box::new(condition),
                    right: Box::new(when_true),
                }))),
                right: Box::new(when_false),
            });
        }

        let temp = self.fresh_temp(e.span)?;
        self.stacks.cur_block_mut().push(crate::dtl::Stmt::LocalVar {
            name: temp.clone(),
            init: None,
        });

        let then_branch = {
            self.stacks.push_block();
            let value = self.lower_expr(&e.when_true)?;
            self.stacks.cur_block_mut().push(crate::dtl::Stmt::ExpressionStatement(
                Expr::Assignment {
                    left: Box::new(Expr::ident(temp.clone())),
                    right: Box::new(value),
                },
            ));
            let stmts = self.stacks.pop_block().take();
            Box::new(crate::dtl::Stmt::Block(stmts))
        };
        let else_branch = {
            self.stacks.push_block();
            let value = self.lower_expr(&e.when_false)?;
            self.stacks.cur_block_mut().push(crate::dtl::Stmt::ExpressionStatement(
                Expr::Assignment {
                    left: Box::new(Expr::ident(temp.clone())),
                    right: Box::new(value),
                },
            ));
            let stmts = self.stacks.pop_block().take();
            Box::new(crate::dtl::Stmt::Block(stmts))
        };

        self.stacks.cur_block_mut().push(crate::dtl::Stmt::If {
            condition,
            then_branch,
            else_branch: Some(else_branch),
        });

        Ok(Expr::ident(temp))
    }
}

/// Adapts a [`crate::semantic::TypeRef`] to the bits of [`Symbol`] that
/// [`MetadataProvider::type_map_name`] looks at, so generic type-argument
/// padding (§4.9 invocation lowering) can reuse the same metadata lookup
/// used for ordinary type names.
struct TypeRefSymbolAdapter;

impl TypeRefSymbolAdapter {
    fn wrap(type_ref: &crate::semantic::TypeRef) -> Symbol {
        Symbol::simple(SymbolKind::NamedType, type_ref.name.clone())
    }
}
