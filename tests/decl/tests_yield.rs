//! `yield` method wrapping (§4.6 / §8 scenario 6), driven end to end
//! through `Transformer::transform_compilation_unit`: the original body
//! becomes an inner closure, and the method body is replaced with a single
//! `return System.Yield(inner, T, params...)`.

use islxform::dtl::{Expr as DtlExpr, Stmt as DtlStmt};
use islxform::isl::decl::{
    CompilationUnitMember, MethodDecl, TypeDecl as IslTypeDecl, TypeDeclKind as IslTypeDeclKind,
    TypeMember,
};
use islxform::isl::expr::{LiteralExpr, LiteralKind};
use islxform::isl::stmt::{Block, YieldReturnStmt};
use islxform::isl::{CompilationUnit, Expr as IslExpr, NodeId};
use islxform::semantic::TypeRef;
use islxform::testkit::{FixedModel, DEFAULT_MAP_TABLE, DUMMY_SPAN};
use islxform::Transformer;

fn numeric(id: u32, text: &str) -> IslExpr {
    IslExpr::Literal(LiteralExpr {
        id: NodeId(id),
        span: *DUMMY_SPAN,
        kind: LiteralKind::Numeric,
        raw_text: text.to_string(),
    })
}

#[test]
fn yield_method_body_becomes_a_single_system_yield_call() {
    let model = FixedModel::new();
    let metadata = DEFAULT_MAP_TABLE.clone();
    let mut transformer = Transformer::new(&model, &metadata);

    let method = MethodDecl {
        id: NodeId(1),
        span: *DUMMY_SPAN,
        name: "Range".to_string(),
        is_static: true,
        is_private: false,
        type_parameters: Vec::new(),
        parameters: Vec::new(),
        body: Block {
            id: NodeId(2),
            span: *DUMMY_SPAN,
            statements: vec![islxform::isl::Stmt::YieldReturn(YieldReturnStmt {
                id: NodeId(3),
                span: *DUMMY_SPAN,
                value: numeric(4, "1"),
            })],
            comments: Vec::new(),
        },
        return_type: Some(TypeRef::generic("IEnumerable", vec![TypeRef::value_type("int")])),
        is_static_constructor: false,
    };

    let type_decl = IslTypeDecl {
        id: NodeId(5),
        span: *DUMMY_SPAN,
        kind: IslTypeDeclKind::Class,
        name: "Gen".to_string(),
        type_parameters: Vec::new(),
        base_types: Vec::new(),
        members: vec![TypeMember::Method(method)],
        is_sealed: false,
    };

    let unit = CompilationUnit {
        id: NodeId(6),
        span: *DUMMY_SPAN,
        file_path: "Gen.cs".to_string(),
        members: vec![CompilationUnitMember::Type(type_decl)],
    };

    let output = transformer.transform_compilation_unit(&unit).unwrap();
    let rendered = &output.types[0].methods[0];
    assert_eq!(rendered.body.len(), 1);

    let DtlStmt::Return(Some(DtlExpr::Invocation { callee, arguments })) = &rendered.body[0] else {
        panic!("expected a single `return System.Yield(...)`, got {:?}", rendered.body[0]);
    };
    assert!(matches!(
        callee.as_ref(),
        DtlExpr::MemberAccess { name, is_method_call: false, .. } if name == "Yield"
    ));
    assert_eq!(arguments.len(), 2);
    assert!(matches!(&arguments[0], DtlExpr::FunctionLiteral { .. }));
    assert_eq!(arguments[1], DtlExpr::ident("int"));
}
