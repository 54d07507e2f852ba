//! Declaration lowering (§4.4-4.7): compilation unit, namespaces, type
//! declarations, methods, fields, properties, events.
//!
//! Unlike statements and expressions, a declaration visit's output is not
//! always "the node it returns" — fields, methods, properties and events
//! attach themselves to `CurType` as a side effect and return `()`; only
//! namespace and type-declaration visits return a value to their caller,
//! matching §4.5 "members attach themselves to `CurType` via side-effecting
//! adds during their own visits".

use crate::core::TransformError;
use crate::dtl::{self, EventMember, Expr, FieldMember, Literal, MethodMember, PropertyMember, Stmt};
use crate::isl::decl::{
    EventAccessorKind, EventDecl, FieldDecl, MethodDecl, NamespaceDecl as IslNamespaceDecl,
    PropertyAccessorKind, PropertyDecl, TypeDecl as IslTypeDecl, TypeDeclKind as IslTypeDeclKind,
    TypeMember,
};
use crate::isl::stmt::Block;
use crate::semantic::TypeRef;

use super::Transformer;

impl<'a> Transformer<'a> {
    /// `VisitNamespaceDeclaration` (§4.4).
    pub(super) fn lower_namespace(
        &mut self,
        ns: &IslNamespaceDecl,
    ) -> Result<dtl::NamespaceDecl, TransformError> {
        let mut types = Vec::with_capacity(ns.types.len());
        for type_decl in &ns.types {
            types.push(self.lower_type_decl(type_decl)?);
        }
        Ok(dtl::NamespaceDecl {
            name: ns.name.clone(),
            types,
        })
    }

    /// Class/struct/interface/enum declarations (§4.5). Pushes itself as
    /// `CurType`, visits type parameters/base types, then visits members —
    /// nested types are attached here as they come back; every other
    /// member kind attaches itself to `CurType` during its own visit. Pops
    /// on exit, including on the first member error (the `?` on each
    /// member visit runs before we ever reach the pop, so a failing member
    /// still leaves the stack one `pop_type` short — callers that care
    /// about partial trees on error are expected to discard the whole
    /// compilation unit, matching §5 "a translation either completes or
    /// fails fast").
    pub(super) fn lower_type_decl(
        &mut self,
        type_decl: &IslTypeDecl,
    ) -> Result<dtl::TypeDecl, TransformError> {
        let kind = match type_decl.kind {
            IslTypeDeclKind::Class => dtl::TypeDeclKind::Class,
            IslTypeDeclKind::Struct => dtl::TypeDeclKind::Struct,
            IslTypeDeclKind::Interface => dtl::TypeDeclKind::Interface,
            IslTypeDeclKind::Enum => dtl::TypeDeclKind::Enum,
        };
        let mut out = dtl::TypeDecl::new(kind, type_decl.name.clone());
        for type_parameter in &type_decl.type_parameters {
            out.type_parameters.push(type_parameter.name.clone());
        }
        for base_type in &type_decl.base_types {
            out.base_types.push(base_type.clone());
        }

        self.stacks.push_type(out, type_decl.is_sealed);

        let result = self.lower_type_members(&type_decl.members);

        let popped = self.stacks.pop_type();
        result?;
        Ok(popped)
    }

    fn lower_type_members(&mut self, members: &[TypeMember]) -> Result<(), TransformError> {
        for member in members {
            match member {
                TypeMember::NestedType(nested) => {
                    let lowered = self.lower_type_decl(nested)?;
                    self.stacks.cur_type_mut().add_nested_type(lowered);
                }
                TypeMember::Method(method) => self.lower_method_decl(method)?,
                TypeMember::Field(field) => self.lower_field_decl(field)?,
                TypeMember::Property(property) => self.lower_property_decl(property)?,
                TypeMember::Event(event) => self.lower_event_decl(event)?,
                // Enum members are constant-valued fields (§4.5 "Enum: ...
                // members drive adds"); they share the field lowering.
                TypeMember::EnumValue(field) => self.lower_field_decl(field)?,
            }
        }
        Ok(())
    }

    // ---- methods (§4.6) ------------------------------------------------

    pub(super) fn lower_method_decl(&mut self, method: &MethodDecl) -> Result<(), TransformError> {
        self.stacks
            .push_function(self.pool_size, method.is_static_constructor);

        let mut params = Vec::with_capacity(method.parameters.len() + method.type_parameters.len() + 1);
        if !method.is_static {
            params.push("this".to_string());
        }
        for parameter in &method.parameters {
            params.push(parameter.name.clone());
        }
        for type_parameter in &method.type_parameters {
            params.push(type_parameter.name.clone());
        }

        let lowered_body = self.lower_block(&method.body, false)?;
        let mut body_stmts = match lowered_body {
            Stmt::Block(stmts) => stmts,
            other => vec![other],
        };

        if self.stacks.cur_function_mut().has_yield {
            body_stmts = self.wrap_yield_body(method, &params, body_stmts)?;
        }

        self.stacks.pop_function();

        self.stacks.cur_type_mut().add_method(MethodMember {
            name: method.name.clone(),
            params,
            body: body_stmts,
            is_private: method.is_private,
        });
        Ok(())
    }

    /// `VisitYield` (§4.6 / §8 scenario 6): wrap the original body as an
    /// inner function closed over the same parameter list, and replace the
    /// outer body with `return System.Yield(inner, T, params...)`.
    fn wrap_yield_body(
        &mut self,
        method: &MethodDecl,
        outer_params: &[String],
        inner_body: Vec<Stmt>,
    ) -> Result<Vec<Stmt>, TransformError> {
        let element_type_name = match method.return_type.as_ref().and_then(TypeRef::generic_argument) {
            Some(type_argument) => self.type_ref_display_name(type_argument),
            None => "Object".to_string(),
        };

        let inner = Expr::FunctionLiteral {
            params: outer_params.to_vec(),
            body: inner_body,
        };

        let mut arguments = Vec::with_capacity(method.parameters.len() + 2);
        arguments.push(inner);
        arguments.push(Expr::ident(element_type_name));
        for parameter in &method.parameters {
            arguments.push(Expr::ident(parameter.name.clone()));
        }

        let call = Expr::Invocation {
            callee: Box::new(Expr::MemberAccess {
                receiver: Box::new(Expr::ident("System")),
                name: "Yield".to_string(),
                is_method_call: false,
            }),
            arguments,
        };
        Ok(vec![Stmt::Return(Some(call))])
    }

    // ---- fields (§4.7) --------------------------------------------------

    pub(super) fn lower_field_decl(&mut self, field: &FieldDecl) -> Result<(), TransformError> {
        let (value, is_literal) =
            self.field_value_expression(field.initializer.as_ref(), field.declared_type.as_ref())?;
        let is_immutable = field.is_const || field.is_read_only;
        self.stacks.cur_type_mut().add_field(FieldMember {
            name: field.name.clone(),
            value,
            is_immutable_literal: is_immutable && is_literal,
            is_static: field.is_static,
            is_private: field.is_private,
            is_read_only: field.is_read_only,
        });
        Ok(())
    }

    /// `GetFieldValueExpression` (§4.7): lower an explicit initializer if
    /// present; otherwise fall back to the declared type's predefined
    /// default, then to `<TypeName>.default()`, then to no value at all
    /// (nil at emission time). Returns the value alongside whether the
    /// source initializer was syntactically a literal, which feeds the
    /// `isImmutable ∧ valueIsLiteral` field flag.
    fn field_value_expression(
        &mut self,
        initializer: Option<&crate::isl::Expr>,
        declared_type: Option<&TypeRef>,
    ) -> Result<(Option<Expr>, bool), TransformError> {
        if let Some(init) = initializer {
            let is_literal = matches!(init, crate::isl::Expr::Literal(_));
            let lowered = self.lower_expr(init)?;
            return Ok((Some(lowered), is_literal));
        }

        let Some(declared_type) = declared_type else {
            return Ok((None, false));
        };

        if let Some(default_literal) = declared_type.predefined_default_literal() {
            let expr = if declared_type.is_bool() {
                Expr::ident("false")
            } else {
                Expr::Literal(Literal::Numeric(default_literal.to_string()))
            };
            return Ok((Some(expr), false));
        }

        let type_name = self.type_ref_display_name(declared_type);
        let expr = Expr::Invocation {
            callee: Box::new(Expr::MemberAccess {
                receiver: Box::new(Expr::ident(type_name)),
                name: "default".to_string(),
                is_method_call: false,
            }),
            arguments: Vec::new(),
        };
        Ok((Some(expr), false))
    }

    // ---- properties (§4.7) ----------------------------------------------

    pub(super) fn lower_property_decl(&mut self, property: &PropertyDecl) -> Result<(), TransformError> {
        let has_accessor_bodies = property.accessors.iter().any(|a| a.body.is_some());
        if has_accessor_bodies {
            return self.lower_property_with_accessors(property);
        }
        if let Some(expression_body) = &property.expression_body {
            return self.lower_expression_bodied_property(property, expression_body);
        }
        self.lower_auto_property(property)
    }

    /// Case 1: user-written accessor bodies. Exactly one getter, at most
    /// one setter.
    fn lower_property_with_accessors(&mut self, property: &PropertyDecl) -> Result<(), TransformError> {
        let mut getter = None;
        let mut setter = None;
        for accessor in &property.accessors {
            let Some(body) = &accessor.body else {
                continue;
            };
            match accessor.kind {
                PropertyAccessorKind::Get => {
                    if getter.is_some() {
                        return Err(TransformError::invariant_breach(
                            format!("property '{}' has more than one getter", property.name),
                            Some(accessor.span),
                        ));
                    }
                    getter = Some(self.lower_accessor_body(property.is_static, body, None, property.name.clone())?);
                }
                PropertyAccessorKind::Set => {
                    if setter.is_some() {
                        return Err(TransformError::invariant_breach(
                            format!("property '{}' has more than one setter", property.name),
                            Some(accessor.span),
                        ));
                    }
                    setter = Some(self.lower_accessor_body(
                        property.is_static,
                        body,
                        Some("value"),
                        property.name.clone(),
                    )?);
                }
            }
        }
        if getter.is_none() {
            return Err(TransformError::invariant_breach(
                format!("property '{}' declares accessors but no getter body", property.name),
                Some(property.span),
            ));
        }
        self.stacks.cur_type_mut().add_property(PropertyMember {
            name: property.name.clone(),
            is_static: property.is_static,
            is_private: false,
            is_read_only: setter.is_none(),
            value: None,
            is_immutable_literal: false,
            getter,
            setter,
        });
        Ok(())
    }

    /// Case 2: expression-bodied property — synthesized get-only function.
    fn lower_expression_bodied_property(
        &mut self,
        property: &PropertyDecl,
        body_expr: &crate::isl::Expr,
    ) -> Result<(), TransformError> {
        self.stacks.push_function(self.pool_size, false);
        self.stacks.push_block();
        let value = self.lower_expr(body_expr)?;
        self.stacks
            .cur_block_mut()
            .push(Stmt::Return(Some(value)));
        let stmts = self.stacks.pop_block().take();
        self.stacks.pop_function();

        let mut params = Vec::new();
        if !property.is_static {
            params.push("this".to_string());
        }
        let getter = MethodMember {
            name: property.name.clone(),
            params,
            body: stmts,
            is_private: false,
        };
        self.stacks.cur_type_mut().add_property(PropertyMember {
            name: property.name.clone(),
            is_static: property.is_static,
            is_private: false,
            is_read_only: true,
            value: None,
            is_immutable_literal: false,
            getter: Some(getter),
            setter: None,
        });
        Ok(())
    }

    /// Case 3: auto-property (no user bodies). Interfaces produce nothing
    /// (§9 Open Question: default interface members are undefined). A
    /// static or plain (non-overridable, non-interface-implementation)
    /// instance auto-property is backed directly as a field; an
    /// overridable or interface-implementing one is still registered as a
    /// property (with an initializer value but no accessor bodies) so
    /// reference sites route through the property-adapter shape instead of
    /// a bare field access.
    fn lower_auto_property(&mut self, property: &PropertyDecl) -> Result<(), TransformError> {
        if self.stacks.cur_type_mut().kind == dtl::TypeDeclKind::Interface {
            return Ok(());
        }

        let (value, is_literal) =
            self.field_value_expression(property.initializer.as_ref(), property.declared_type.as_ref())?;

        if property.is_static || !(property.is_overridable || property.is_interface_implementation) {
            let has_setter = property
                .accessors
                .iter()
                .any(|a| matches!(a.kind, PropertyAccessorKind::Set));
            self.stacks.cur_type_mut().add_field(FieldMember {
                name: property.name.clone(),
                value,
                is_immutable_literal: !has_setter && is_literal,
                is_static: property.is_static,
                is_private: false,
                is_read_only: !has_setter,
            });
        } else {
            let has_setter = property
                .accessors
                .iter()
                .any(|a| matches!(a.kind, PropertyAccessorKind::Set));
            self.stacks.cur_type_mut().add_property(PropertyMember {
                name: property.name.clone(),
                is_static: property.is_static,
                is_private: false,
                is_read_only: !has_setter,
                value,
                is_immutable_literal: is_literal,
                getter: None,
                setter: None,
            });
        }
        Ok(())
    }

    // ---- events (§4.7) ---------------------------------------------------

    pub(super) fn lower_event_decl(&mut self, event: &EventDecl) -> Result<(), TransformError> {
        let has_accessor_bodies = event.accessors.iter().any(|a| a.body.is_some());
        if has_accessor_bodies {
            return self.lower_event_with_accessors(event);
        }

        let (value, is_literal) = self.field_value_expression(event.initializer.as_ref(), None)?;
        if event.is_overridable || event.is_interface_implementation {
            self.stacks.cur_type_mut().add_event(EventMember {
                name: event.name.clone(),
                is_static: event.is_static,
                is_private: false,
                is_read_only: false,
                value,
                is_immutable_literal: is_literal,
                adder: None,
                remover: None,
            });
        } else {
            self.stacks.cur_type_mut().add_field(FieldMember {
                name: event.name.clone(),
                value,
                is_immutable_literal: is_literal,
                is_static: event.is_static,
                is_private: false,
                is_read_only: false,
            });
        }
        Ok(())
    }

    fn lower_event_with_accessors(&mut self, event: &EventDecl) -> Result<(), TransformError> {
        let mut adder = None;
        let mut remover = None;
        for accessor in &event.accessors {
            let Some(body) = &accessor.body else {
                continue;
            };
            match accessor.kind {
                EventAccessorKind::Add => {
                    if adder.is_some() {
                        return Err(TransformError::invariant_breach(
                            format!("event '{}' has more than one add accessor", event.name),
                            Some(accessor.span),
                        ));
                    }
                    adder = Some(self.lower_accessor_body(event.is_static, body, Some("value"), event.name.clone())?);
                }
                EventAccessorKind::Remove => {
                    if remover.is_some() {
                        return Err(TransformError::invariant_breach(
                            format!("event '{}' has more than one remove accessor", event.name),
                            Some(accessor.span),
                        ));
                    }
                    remover =
                        Some(self.lower_accessor_body(event.is_static, body, Some("value"), event.name.clone())?);
                }
            }
        }
        self.stacks.cur_type_mut().add_event(EventMember {
            name: event.name.clone(),
            is_static: event.is_static,
            is_private: false,
            is_read_only: false,
            value: None,
            is_immutable_literal: false,
            adder,
            remover,
        });
        Ok(())
    }

    /// Shared accessor-body lowering for property get/set and event
    /// add/remove (§4.7): `this` first unless static, `value` last when a
    /// trailing parameter name is given.
    fn lower_accessor_body(
        &mut self,
        is_static: bool,
        body: &Block,
        trailing_param: Option<&str>,
        name: String,
    ) -> Result<MethodMember, TransformError> {
        self.stacks.push_function(self.pool_size, false);
        let mut params = Vec::new();
        if !is_static {
            params.push("this".to_string());
        }
        if let Some(value_param) = trailing_param {
            params.push(value_param.to_string());
        }
        let lowered = self.lower_block(body, false)?;
        let stmts = match lowered {
            Stmt::Block(stmts) => stmts,
            other => vec![other],
        };
        self.stacks.pop_function();
        Ok(MethodMember {
            name,
            params,
            body: stmts,
            is_private: false,
        })
    }
}
