use super::expr::Expr;

/// How a property/event adapter renders its final call once resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyCallStyle {
    /// `this.Name(args...)` — late-bound member-call syntax, used for a
    /// bare reference to a non-sealed overridable property/event.
    MethodCall,
    /// `Name(receiver, args...)` — free-function syntax, used for a bare
    /// reference to a sealed/non-overridable property/event, and as the
    /// default shape composed later by a member-access visit.
    FreeCall,
}

/// Adapter node: wraps an identifier that may be used as a property/event
/// get or set. Rewritten in place by the assignment visitor (turns it into
/// a set, appending the RHS as the final argument) and by the member-access
/// visitor (replaces the receiver with the visited left-hand expression).
/// Per the crate's adapter-node design, this is the only DTL variant
/// carrying mutable builder state rather than being built once and frozen.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyAdapter {
    pub identifier: String,
    pub is_get: bool,
    pub receiver: Box<Expr>,
    pub call_style: PropertyCallStyle,
    pub args: Vec<Expr>,
}

impl PropertyAdapter {
    /// A bare reference resolved eagerly to one of the two "bare" shapes
    /// from §4.9 `VisitFieldOrEventIdentifierName`.
    pub fn bare(identifier: impl Into<String>, call_style: PropertyCallStyle) -> Self {
        Self {
            identifier: identifier.into(),
            is_get: true,
            receiver: Box::new(Expr::this()),
            call_style,
            args: Vec::new(),
        }
    }

    /// A reference reached through member access (`obj.Prop`) — the
    /// receiver starts as `this` and is replaced once the member-access
    /// visitor finishes composing it.
    pub fn pending(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            is_get: true,
            receiver: Box::new(Expr::this()),
            call_style: PropertyCallStyle::FreeCall,
            args: Vec::new(),
        }
    }

    pub fn set_receiver(&mut self, receiver: Expr) {
        self.receiver = Box::new(receiver);
    }

    /// Turns this adapter into a set/add: marks it non-get and appends the
    /// assigned value as the final call argument.
    pub fn set_value(&mut self, value: Expr) {
        self.is_get = false;
        self.args.push(value);
    }

    /// Resolve the adapter into a concrete invocation, consuming it.
    pub fn finalize(self) -> Expr {
        match self.call_style {
            PropertyCallStyle::MethodCall => Expr::Invocation {
                callee: Box::new(Expr::MemberAccess {
                    receiver: self.receiver,
                    name: self.identifier,
                    is_method_call: true,
                }),
                arguments: self.args,
            },
            PropertyCallStyle::FreeCall => {
                let mut arguments = Vec::with_capacity(self.args.len() + 1);
                arguments.push(*self.receiver);
                arguments.extend(self.args);
                Expr::Invocation {
                    callee: Box::new(Expr::ident(self.identifier)),
                    arguments,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_method_call_renders_this_dot_name() {
        let adapter = PropertyAdapter::bare("Speed", PropertyCallStyle::MethodCall);
        let expr = adapter.finalize();
        assert_eq!(
            expr,
            Expr::Invocation {
                callee: Box::new(Expr::MemberAccess {
                    receiver: Box::new(Expr::this()),
                    name: "Speed".to_string(),
                    is_method_call: true,
                }),
                arguments: vec![],
            }
        );
    }

    #[test]
    fn set_value_appends_final_argument() {
        let mut adapter = PropertyAdapter::bare("Speed", PropertyCallStyle::FreeCall);
        adapter.set_value(Expr::Literal(super::super::expr::Literal::Numeric(
            "5".to_string(),
        )));
        assert!(!adapter.is_get);
        let expr = adapter.finalize();
        match expr {
            Expr::Invocation { arguments, .. } => assert_eq!(arguments.len(), 2),
            _ => panic!("expected invocation"),
        }
    }

    #[test]
    fn pending_receiver_is_replaced_by_member_access_visit() {
        let mut adapter = PropertyAdapter::pending("Speed");
        adapter.set_receiver(Expr::ident("car"));
        let expr = adapter.finalize();
        match expr {
            Expr::Invocation { arguments, .. } => {
                assert_eq!(arguments[0], Expr::ident("car"));
            }
            _ => panic!("expected invocation"),
        }
    }
}
