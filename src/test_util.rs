use std::fs;
use std::process;

use failure;

use crate::ast;
use crate::ast::node::AstNode;
use crate::graph;

pub type Expr = ast::Expression<()>;

pub fn render_graph<N, C>(name: &str, node: &N) -> Result<(), failure::Error>
where
    N: AstNode<C> + ?Sized,
{
    if cfg!(feature = "test-render-graphs") {
        let graph = graph::Graph::new(node);

        let dot_path = format!("/tmp/{}.dot", name);
        let img_path = format!("/tmp/{}.svg", name);

        let mut file = fs::File::create(&dot_path)?;
        graph.render(&mut file)?;
        process::Command::new("dot")
            .args(&["-Tsvg", "-o", &img_path, &dot_path])
            .spawn()?
            .wait()?;
    }

    Ok(())
}

pub fn program(classes: Vec<ast::Class<()>>) -> ast::Program<()> {
    ast::Program {
        context: (),
        classes,
    }
}

pub fn class(name: &str, parent: &str, features: Vec<ast::Feature<()>>) -> ast::Class<()> {
    ast::Class {
        context: (),
        name: name.to_owned(),
        parent: parent.to_owned(),
        features,
    }
}

pub fn attribute(name: &str, type_name: &str, initializer: Expr) -> ast::Feature<()> {
    ast::Feature::Attribute(ast::Attribute {
        context: (),
        name: name.to_owned(),
        type_name: type_name.to_owned(),
        initializer,
    })
}

pub fn method(
    name: &str,
    formals: &[(&str, &str)],
    return_type: &str,
    body: Expr,
) -> ast::Feature<()> {
    ast::Feature::Method(ast::Method {
        context: (),
        name: name.to_owned(),
        formals: formals
            .iter()
            .map(|&(name, type_name)| ast::Formal {
                context: (),
                name: name.to_owned(),
                type_name: type_name.to_owned(),
            })
            .collect(),
        return_type: return_type.to_owned(),
        body,
    })
}

pub fn int(value: i32) -> Expr {
    ast::Expression::IntConst(ast::IntConst { context: (), value })
}

pub fn string(value: &str) -> Expr {
    ast::Expression::StringConst(ast::StringConst {
        context: (),
        value: value.to_owned(),
    })
}

pub fn boolean(value: bool) -> Expr {
    ast::Expression::BoolConst(ast::BoolConst { context: (), value })
}

pub fn object(name: &str) -> Expr {
    ast::Expression::Object(ast::Object {
        context: (),
        name: name.to_owned(),
    })
}

pub fn new(type_name: &str) -> Expr {
    ast::Expression::New(ast::New {
        context: (),
        type_name: type_name.to_owned(),
    })
}

pub fn no_expr() -> Expr {
    ast::Expression::NoExpr(ast::NoExpr { context: () })
}

pub fn unary(operand: Expr) -> ast::UnaryOp<()> {
    ast::UnaryOp {
        context: (),
        operand: Box::new(operand),
    }
}

pub fn binary(lhs: Expr, rhs: Expr) -> ast::BinaryOp<()> {
    ast::BinaryOp {
        context: (),
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    }
}

pub fn plus(lhs: Expr, rhs: Expr) -> Expr {
    ast::Expression::Plus(binary(lhs, rhs))
}

pub fn assign(name: &str, value: Expr) -> Expr {
    ast::Expression::Assign(ast::Assign {
        context: (),
        name: name.to_owned(),
        value: Box::new(value),
    })
}

pub fn block(expressions: Vec<Expr>) -> Expr {
    ast::Expression::Block(ast::Block {
        context: (),
        expressions,
    })
}

pub fn if_(condition: Expr, then_branch: Expr, else_branch: Expr) -> Expr {
    ast::Expression::If(ast::If {
        context: (),
        condition: Box::new(condition),
        then_branch: Box::new(then_branch),
        else_branch: Box::new(else_branch),
    })
}

pub fn while_(condition: Expr, body: Expr) -> Expr {
    ast::Expression::While(ast::While {
        context: (),
        condition: Box::new(condition),
        body: Box::new(body),
    })
}

pub fn let_(name: &str, type_name: &str, initializer: Expr, body: Expr) -> Expr {
    ast::Expression::Let(ast::Let {
        context: (),
        name: name.to_owned(),
        type_name: type_name.to_owned(),
        initializer: Box::new(initializer),
        body: Box::new(body),
    })
}

pub fn case(expression: Expr, branches: &[(&str, &str, Expr)]) -> Expr {
    ast::Expression::Case(ast::Case {
        context: (),
        expression: Box::new(expression),
        branches: branches
            .iter()
            .map(|(name, type_name, body)| ast::CaseBranch {
                context: (),
                name: (*name).to_owned(),
                type_name: (*type_name).to_owned(),
                body: body.clone(),
            })
            .collect(),
    })
}

pub fn static_dispatch(object: Expr, type_name: &str, method: &str, arguments: Vec<Expr>) -> Expr {
    ast::Expression::StaticDispatch(ast::StaticDispatch {
        context: (),
        object: Box::new(object),
        type_name: type_name.to_owned(),
        method: method.to_owned(),
        arguments,
    })
}

pub fn dynamic_dispatch(object: Expr, method: &str, arguments: Vec<Expr>) -> Expr {
    ast::Expression::DynamicDispatch(ast::DynamicDispatch {
        context: (),
        object: Box::new(object),
        method: method.to_owned(),
        arguments,
    })
}

/// A program that contains every kind of node at least once.
pub fn every_kind() -> ast::Program<()> {
    let body = block(vec![
        assign("s", string("hello")),
        let_(
            "b",
            "Bool",
            no_expr(),
            if_(
                ast::Expression::Not(unary(boolean(true))),
                ast::Expression::IsVoid(unary(new("Object"))),
                ast::Expression::Complement(unary(int(1))),
            ),
        ),
        while_(
            ast::Expression::LessThan(binary(int(1), int(2))),
            ast::Expression::LessThanEqualTo(binary(int(3), int(4))),
        ),
        ast::Expression::EqualTo(binary(
            ast::Expression::Sub(binary(int(5), int(6))),
            ast::Expression::Mul(binary(int(7), ast::Expression::Div(binary(int(8), int(9))))),
        )),
        case(
            object("s"),
            &[
                ("i", "Int", plus(object("i"), int(1))),
                ("o", "Object", object("o")),
            ],
        ),
        static_dispatch(object("self"), "IO", "out_string", vec![object("s")]),
        dynamic_dispatch(object("self"), "abort", vec![]),
    ]);

    program(vec![class(
        "Main",
        "IO",
        vec![
            attribute("s", "String", no_expr()),
            method("main", &[("x", "Int")], "Object", body),
        ],
    )])
}
