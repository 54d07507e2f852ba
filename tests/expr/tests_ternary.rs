//! The ternary falsey boundary (§4.9 / §8 scenario 3): a `when_true` type
//! that can never be `nil`/`false` at runtime compiles to a plain
//! `(cond and a) or b` shortcut, anything else expands into an
//! if/else assigning a temp.

use islxform::dtl::{Expr as DtlExpr, Literal as DtlLiteral};
use islxform::isl::expr::{ConditionalExpr, LiteralExpr, LiteralKind};
use islxform::isl::{Expr as IslExpr, NodeId};
use islxform::semantic::TypeRef;
use islxform::testkit::{transformer_in_block, FixedModel, DEFAULT_MAP_TABLE, DUMMY_SPAN};
use rstest::rstest;

fn numeric(id: u32, text: &str) -> IslExpr {
    IslExpr::Literal(LiteralExpr {
        id: NodeId(id),
        span: *DUMMY_SPAN,
        kind: LiteralKind::Numeric,
        raw_text: text.to_string(),
    })
}

#[rstest]
#[case(TypeRef::value_type("int"), false)]
#[case(TypeRef::value_type("bool"), true)]
#[case(TypeRef::named("string"), true)]
fn falsey_boundary_picks_expansion_shape(
    #[case] when_true_type: TypeRef,
    #[case] expect_temp_expansion: bool,
) {
    let model = FixedModel::new().with_type(2, when_true_type);
    let metadata = DEFAULT_MAP_TABLE.clone();
    let mut transformer = transformer_in_block(&model, &metadata, 16);

    let expr = IslExpr::Conditional(ConditionalExpr {
        id: NodeId(4),
        span: *DUMMY_SPAN,
        condition: Box::new(numeric(1, "1")),
        when_true: Box::new(numeric(2, "2")),
        when_false: Box::new(numeric(3, "3")),
    });

    let lowered = transformer.lower_expr(&expr).unwrap();
    match lowered {
        DtlExpr::Identifier(name) => {
            assert!(expect_temp_expansion, "got a temp identifier {name:?} for a non-falsey type");
            assert_eq!(name, "t1");
        }
        DtlExpr::Binary { op, .. } => {
            assert!(!expect_temp_expansion, "got an `{op}` shortcut for a falsey-capable type");
            assert_eq!(op, "or");
        }
        other => panic!("unexpected lowering {other:?}"),
    }
}

#[test]
fn non_falsey_shortcut_inlines_both_branches_as_literals() {
    let model = FixedModel::new().with_type(2, TypeRef::value_type("int"));
    let metadata = DEFAULT_MAP_TABLE.clone();
    let mut transformer = transformer_in_block(&model, &metadata, 16);

    let expr = IslExpr::Conditional(ConditionalExpr {
        id: NodeId(4),
        span: *DUMMY_SPAN,
        condition: Box::new(numeric(1, "1")),
        when_true: Box::new(numeric(2, "2")),
        when_false: Box::new(numeric(3, "3")),
    });

    let lowered = transformer.lower_expr(&expr).unwrap();
    assert_eq!(
        lowered,
        DtlExpr::Binary {
            op: "or".to_string(),
            left: Box::new(DtlExpr::Parenthesized(Box::new(DtlExpr::Binary {
                op: "and".to_string(),
                left: Box::new(DtlExpr::Literal(DtlLiteral::Numeric("1".to_string()))),
                right: Box::new(DtlExpr::Literal(DtlLiteral::Numeric("2".to_string()))),
            }))),
            right: Box::new(DtlExpr::Literal(DtlLiteral::Numeric("3".to_string()))),
        }
    );
}
