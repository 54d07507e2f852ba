//! Switch/goto lowering (§4.10 / §8 scenario 5), driven end to end through
//! the public `Transformer::lower_stmt` entry point: a subject temp, an
//! if/elif-or chain per case section, and a synthetic label only for the
//! section a `goto case`/`goto default` actually targets.

use islxform::dtl::Stmt as DtlStmt;
use islxform::isl::expr::{LiteralExpr, LiteralKind};
use islxform::isl::stmt::{
    BreakStmt, GotoStmt, GotoTarget, SwitchLabel, SwitchSection, SwitchStmt,
};
use islxform::isl::{Expr as IslExpr, NodeId, Stmt as IslStmt};
use islxform::testkit::{transformer_with_function, FixedModel, DEFAULT_MAP_TABLE, DUMMY_SPAN};

fn numeric(id: u32, text: &str) -> IslExpr {
    IslExpr::Literal(LiteralExpr {
        id: NodeId(id),
        span: *DUMMY_SPAN,
        kind: LiteralKind::Numeric,
        raw_text: text.to_string(),
    })
}

#[test]
fn goto_case_synthesizes_a_label_only_on_the_targeted_section() {
    let model = FixedModel::new();
    let metadata = DEFAULT_MAP_TABLE.clone();
    let mut transformer = transformer_with_function(&model, &metadata, 16);

    // switch (1) {
    //   case 1: goto case 2;
    //   case 2: break;
    // }
    let switch = IslStmt::Switch(SwitchStmt {
        id: NodeId(1),
        span: *DUMMY_SPAN,
        subject: numeric(2, "1"),
        sections: vec![
            SwitchSection {
                id: NodeId(3),
                span: *DUMMY_SPAN,
                labels: vec![SwitchLabel::Case(numeric(4, "1"))],
                statements: vec![IslStmt::Goto(GotoStmt {
                    id: NodeId(5),
                    span: *DUMMY_SPAN,
                    target: GotoTarget::Case(Box::new(numeric(6, "2"))),
                })],
            },
            SwitchSection {
                id: NodeId(7),
                span: *DUMMY_SPAN,
                labels: vec![SwitchLabel::Case(numeric(8, "2"))],
                statements: vec![IslStmt::Break(BreakStmt { id: NodeId(9), span: *DUMMY_SPAN })],
            },
        ],
    });

    let lowered = transformer.lower_stmt(&switch).unwrap();
    let DtlStmt::Block(stmts) = lowered else {
        panic!("expected a Block, got {lowered:?}");
    };

    // [0] = subject temp, [1] = case-1 if, [2] = case-2 if (labeled, since
    // the first section's `goto case 2` targets it).
    assert_eq!(stmts.len(), 3);
    assert!(matches!(&stmts[0], DtlStmt::LocalVar { name, .. } if name == "t1"));

    let DtlStmt::If { then_branch: case_1_branch, .. } = &stmts[1] else {
        panic!("expected case 1 to lower to an If");
    };
    assert!(matches!(**case_1_branch, DtlStmt::Block(_)));

    let DtlStmt::If { then_branch: case_2_branch, .. } = &stmts[2] else {
        panic!("expected case 2 to lower to an If");
    };
    match &**case_2_branch {
        DtlStmt::Labeled { label, .. } => assert_eq!(label, "label_2"),
        other => panic!("expected case 2's branch to carry the synthesized label, got {other:?}"),
    }
}
