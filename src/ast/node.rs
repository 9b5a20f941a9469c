//! Generic node manipulation of AST nodes.
//!
//! [`NodeRef`] is a borrowed view of any concrete node.  It is what the traversal driver works
//! with: it knows the kind of the node it points at and the node's structural children, in the
//! fixed order the grammar defines.
use std::borrow;
use std::fmt;

use crate::ast;
use crate::ast::visitor::Visitor;
use crate::ast::walk;

/// A COOL AST node.
pub trait AstNode<C> {
    /// Returns a kind-tagged view of this node.
    ///
    /// Capabilities such as [`ast::Feature`] and [`ast::Expression`] resolve to their concrete
    /// variant.
    fn as_node(&self) -> NodeRef<'_, C>;

    /// Returns the kind of this node.
    fn kind(&self) -> ast::Kind {
        self.as_node().kind()
    }

    /// Returns the structural children of this node, in grammar order.
    fn children(&self) -> Vec<NodeRef<'_, C>> {
        self.as_node().children()
    }

    /// Traverses this node and all of its descendants with the specified visitor.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by any of the visitor's hooks; no hook runs after it.
    fn dispatch<V>(&self, visitor: &mut V) -> Result<(), V::Error>
    where
        V: Visitor<C> + ?Sized,
    {
        walk::walk(self.as_node(), visitor)
    }
}

/// A borrowed reference to a node of any kind.
#[derive(Debug)]
pub enum NodeRef<'a, C> {
    /// A program.
    Program(&'a ast::Program<C>),
    /// A class.
    Class(&'a ast::Class<C>),
    /// An attribute.
    Attribute(&'a ast::Attribute<C>),
    /// A method.
    Method(&'a ast::Method<C>),
    /// A formal parameter.
    Formal(&'a ast::Formal<C>),
    /// A string literal.
    StringConst(&'a ast::StringConst<C>),
    /// An integer literal.
    IntConst(&'a ast::IntConst<C>),
    /// A boolean literal.
    BoolConst(&'a ast::BoolConst<C>),
    /// An object instantiation.
    New(&'a ast::New<C>),
    /// A void check.
    IsVoid(&'a ast::UnaryOp<C>),
    /// A case branch.
    CaseBranch(&'a ast::CaseBranch<C>),
    /// An assignment.
    Assign(&'a ast::Assign<C>),
    /// A block.
    Block(&'a ast::Block<C>),
    /// A conditional.
    If(&'a ast::If<C>),
    /// A loop.
    While(&'a ast::While<C>),
    /// An integer complement.
    Complement(&'a ast::UnaryOp<C>),
    /// A `<` comparison.
    LessThan(&'a ast::BinaryOp<C>),
    /// An `=` comparison.
    EqualTo(&'a ast::BinaryOp<C>),
    /// A `<=` comparison.
    LessThanEqualTo(&'a ast::BinaryOp<C>),
    /// An addition.
    Plus(&'a ast::BinaryOp<C>),
    /// A subtraction.
    Sub(&'a ast::BinaryOp<C>),
    /// A multiplication.
    Mul(&'a ast::BinaryOp<C>),
    /// A division.
    Div(&'a ast::BinaryOp<C>),
    /// A boolean negation.
    Not(&'a ast::UnaryOp<C>),
    /// A static dispatch.
    StaticDispatch(&'a ast::StaticDispatch<C>),
    /// A dynamic dispatch.
    DynamicDispatch(&'a ast::DynamicDispatch<C>),
    /// A let binding.
    Let(&'a ast::Let<C>),
    /// A case expression.
    Case(&'a ast::Case<C>),
    /// An identifier reference.
    Object(&'a ast::Object<C>),
    /// An absent expression.
    NoExpr(&'a ast::NoExpr<C>),
}

/// The position a child occupies in its parent.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Slot {
    /// The n-th class of a program.
    Class(usize),
    /// The n-th feature of a class.
    Feature(usize),
    /// The n-th formal parameter of a method.
    Formal(usize),
    /// The initializer of an attribute or let binding.
    Initializer,
    /// The body of a method, loop, let binding or case branch.
    Body,
    /// The operand of a unary operator.
    Operand,
    /// The assigned value.
    Value,
    /// The n-th expression of a block.
    Expression(usize),
    /// The condition of a conditional or loop.
    Condition,
    /// The branch taken when a condition holds.
    Then,
    /// The branch taken when a condition does not hold.
    Else,
    /// The expression inspected by a case expression.
    Scrutinee,
    /// The n-th branch of a case expression.
    Branch(usize),
    /// The left-hand side of a binary operator.
    Lhs,
    /// The right-hand side of a binary operator.
    Rhs,
    /// The receiver of a dispatch.
    Receiver,
    /// The n-th argument of a dispatch.
    Argument(usize),
}

impl<'a, C> NodeRef<'a, C> {
    /// Returns the kind of the referenced node.
    pub fn kind(self) -> ast::Kind {
        match self {
            NodeRef::Program(_) => ast::Kind::Program,
            NodeRef::Class(_) => ast::Kind::Class,
            NodeRef::Attribute(_) => ast::Kind::Attribute,
            NodeRef::Method(_) => ast::Kind::Method,
            NodeRef::Formal(_) => ast::Kind::Formal,
            NodeRef::StringConst(_) => ast::Kind::StringConst,
            NodeRef::IntConst(_) => ast::Kind::IntConst,
            NodeRef::BoolConst(_) => ast::Kind::BoolConst,
            NodeRef::New(_) => ast::Kind::New,
            NodeRef::IsVoid(_) => ast::Kind::IsVoid,
            NodeRef::CaseBranch(_) => ast::Kind::CaseBranch,
            NodeRef::Assign(_) => ast::Kind::Assign,
            NodeRef::Block(_) => ast::Kind::Block,
            NodeRef::If(_) => ast::Kind::If,
            NodeRef::While(_) => ast::Kind::While,
            NodeRef::Complement(_) => ast::Kind::Complement,
            NodeRef::LessThan(_) => ast::Kind::LessThan,
            NodeRef::EqualTo(_) => ast::Kind::EqualTo,
            NodeRef::LessThanEqualTo(_) => ast::Kind::LessThanEqualTo,
            NodeRef::Plus(_) => ast::Kind::Plus,
            NodeRef::Sub(_) => ast::Kind::Sub,
            NodeRef::Mul(_) => ast::Kind::Mul,
            NodeRef::Div(_) => ast::Kind::Div,
            NodeRef::Not(_) => ast::Kind::Not,
            NodeRef::StaticDispatch(_) => ast::Kind::StaticDispatch,
            NodeRef::DynamicDispatch(_) => ast::Kind::DynamicDispatch,
            NodeRef::Let(_) => ast::Kind::Let,
            NodeRef::Case(_) => ast::Kind::Case,
            NodeRef::Object(_) => ast::Kind::Object,
            NodeRef::NoExpr(_) => ast::Kind::NoExpr,
        }
    }

    /// Returns the context of the referenced node.
    pub fn context(self) -> &'a C {
        match self {
            NodeRef::Program(n) => &n.context,
            NodeRef::Class(n) => &n.context,
            NodeRef::Attribute(n) => &n.context,
            NodeRef::Method(n) => &n.context,
            NodeRef::Formal(n) => &n.context,
            NodeRef::StringConst(n) => &n.context,
            NodeRef::IntConst(n) => &n.context,
            NodeRef::BoolConst(n) => &n.context,
            NodeRef::New(n) => &n.context,
            NodeRef::CaseBranch(n) => &n.context,
            NodeRef::Assign(n) => &n.context,
            NodeRef::Block(n) => &n.context,
            NodeRef::If(n) => &n.context,
            NodeRef::While(n) => &n.context,
            NodeRef::StaticDispatch(n) => &n.context,
            NodeRef::DynamicDispatch(n) => &n.context,
            NodeRef::Let(n) => &n.context,
            NodeRef::Case(n) => &n.context,
            NodeRef::Object(n) => &n.context,
            NodeRef::NoExpr(n) => &n.context,
            NodeRef::IsVoid(n) | NodeRef::Complement(n) | NodeRef::Not(n) => &n.context,
            NodeRef::LessThan(n)
            | NodeRef::EqualTo(n)
            | NodeRef::LessThanEqualTo(n)
            | NodeRef::Plus(n)
            | NodeRef::Sub(n)
            | NodeRef::Mul(n)
            | NodeRef::Div(n) => &n.context,
        }
    }

    /// Returns the literal value, identifier or type name that labels the referenced node in
    /// dumps, if it has one.
    ///
    /// String literals are quoted and escaped so that the payload always fits on one line.
    pub fn payload(self) -> Option<borrow::Cow<'a, str>> {
        match self {
            NodeRef::StringConst(n) => Some(format!("{:?}", n.value).into()),
            NodeRef::IntConst(n) => Some(n.value.to_string().into()),
            NodeRef::BoolConst(n) => Some(n.value.to_string().into()),
            NodeRef::Class(n) => Some(n.name.as_str().into()),
            NodeRef::Attribute(n) => Some(n.name.as_str().into()),
            NodeRef::Method(n) => Some(n.name.as_str().into()),
            NodeRef::Formal(n) => Some(n.name.as_str().into()),
            NodeRef::Object(n) => Some(n.name.as_str().into()),
            NodeRef::Assign(n) => Some(n.name.as_str().into()),
            NodeRef::Let(n) => Some(n.name.as_str().into()),
            NodeRef::CaseBranch(n) => Some(n.name.as_str().into()),
            NodeRef::New(n) => Some(n.type_name.as_str().into()),
            NodeRef::StaticDispatch(n) => Some(n.method.as_str().into()),
            NodeRef::DynamicDispatch(n) => Some(n.method.as_str().into()),
            NodeRef::Program(_)
            | NodeRef::IsVoid(_)
            | NodeRef::Block(_)
            | NodeRef::If(_)
            | NodeRef::While(_)
            | NodeRef::Complement(_)
            | NodeRef::LessThan(_)
            | NodeRef::EqualTo(_)
            | NodeRef::LessThanEqualTo(_)
            | NodeRef::Plus(_)
            | NodeRef::Sub(_)
            | NodeRef::Mul(_)
            | NodeRef::Div(_)
            | NodeRef::Not(_)
            | NodeRef::Case(_)
            | NodeRef::NoExpr(_) => None,
        }
    }

    /// Returns the structural children of the referenced node, in grammar order.
    pub fn children(self) -> Vec<NodeRef<'a, C>> {
        self.slots().into_iter().map(|(_, child)| child).collect()
    }

    /// Returns the structural children of the referenced node together with the slot each of
    /// them occupies, in grammar order.
    pub fn slots(self) -> Vec<(Slot, NodeRef<'a, C>)> {
        match self {
            NodeRef::Program(n) => n
                .classes
                .iter()
                .enumerate()
                .map(|(i, c)| (Slot::Class(i), NodeRef::Class(c)))
                .collect(),
            NodeRef::Class(n) => n
                .features
                .iter()
                .enumerate()
                .map(|(i, f)| (Slot::Feature(i), f.as_node()))
                .collect(),
            NodeRef::Attribute(n) => vec![(Slot::Initializer, n.initializer.as_node())],
            NodeRef::Method(n) => {
                let mut slots = n
                    .formals
                    .iter()
                    .enumerate()
                    .map(|(i, f)| (Slot::Formal(i), NodeRef::Formal(f)))
                    .collect::<Vec<_>>();
                slots.push((Slot::Body, n.body.as_node()));
                slots
            }
            NodeRef::Formal(_)
            | NodeRef::StringConst(_)
            | NodeRef::IntConst(_)
            | NodeRef::BoolConst(_)
            | NodeRef::New(_)
            | NodeRef::Object(_)
            | NodeRef::NoExpr(_) => Vec::new(),
            NodeRef::IsVoid(n) | NodeRef::Complement(n) | NodeRef::Not(n) => {
                vec![(Slot::Operand, n.operand.as_node())]
            }
            NodeRef::CaseBranch(n) => vec![(Slot::Body, n.body.as_node())],
            NodeRef::Assign(n) => vec![(Slot::Value, n.value.as_node())],
            NodeRef::Block(n) => n
                .expressions
                .iter()
                .enumerate()
                .map(|(i, e)| (Slot::Expression(i), e.as_node()))
                .collect(),
            NodeRef::If(n) => vec![
                (Slot::Condition, n.condition.as_node()),
                (Slot::Then, n.then_branch.as_node()),
                (Slot::Else, n.else_branch.as_node()),
            ],
            NodeRef::While(n) => vec![
                (Slot::Condition, n.condition.as_node()),
                (Slot::Body, n.body.as_node()),
            ],
            NodeRef::LessThan(n)
            | NodeRef::EqualTo(n)
            | NodeRef::LessThanEqualTo(n)
            | NodeRef::Plus(n)
            | NodeRef::Sub(n)
            | NodeRef::Mul(n)
            | NodeRef::Div(n) => vec![(Slot::Lhs, n.lhs.as_node()), (Slot::Rhs, n.rhs.as_node())],
            NodeRef::StaticDispatch(n) => dispatch_slots(&n.object, &n.arguments),
            NodeRef::DynamicDispatch(n) => dispatch_slots(&n.object, &n.arguments),
            NodeRef::Let(n) => vec![
                (Slot::Initializer, n.initializer.as_node()),
                (Slot::Body, n.body.as_node()),
            ],
            NodeRef::Case(n) => {
                let mut slots = vec![(Slot::Scrutinee, n.expression.as_node())];
                slots.extend(
                    n.branches
                        .iter()
                        .enumerate()
                        .map(|(i, b)| (Slot::Branch(i), NodeRef::CaseBranch(b))),
                );
                slots
            }
        }
    }

    /// Asserts that the referenced node has every child the grammar requires.
    ///
    /// # Panics
    ///
    /// Panics if a required sequence is empty: a program without classes, a block without
    /// expressions or a case without branches.  Such trees can only come from a broken parser.
    pub fn check_shape(self) {
        let missing = match self {
            NodeRef::Program(n) if n.classes.is_empty() => "at least one class",
            NodeRef::Block(n) if n.expressions.is_empty() => "at least one expression",
            NodeRef::Case(n) if n.branches.is_empty() => "at least one branch",
            _ => return,
        };
        panic!("malformed AST: `{}` node requires {}", self.kind(), missing);
    }
}

fn dispatch_slots<'a, C>(
    object: &'a ast::Expression<C>,
    arguments: &'a [ast::Expression<C>],
) -> Vec<(Slot, NodeRef<'a, C>)> {
    let mut slots = Vec::with_capacity(arguments.len() + 1);
    slots.push((Slot::Receiver, object.as_node()));
    slots.extend(
        arguments
            .iter()
            .enumerate()
            .map(|(i, a)| (Slot::Argument(i), a.as_node())),
    );
    slots
}

impl<'a, C> Clone for NodeRef<'a, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, C> Copy for NodeRef<'a, C> {}

impl<'a, C> AstNode<C> for NodeRef<'a, C> {
    fn as_node(&self) -> NodeRef<'_, C> {
        *self
    }
}

macro_rules! impl_ast_node {
    ($($ty:ident),* $(,)*) => {
        $(
            impl<C> AstNode<C> for ast::$ty<C> {
                fn as_node(&self) -> NodeRef<'_, C> {
                    NodeRef::$ty(self)
                }
            }
        )*
    };
}

impl_ast_node!(
    Program,
    Class,
    Attribute,
    Method,
    Formal,
    StringConst,
    IntConst,
    BoolConst,
    New,
    CaseBranch,
    Assign,
    Block,
    If,
    While,
    StaticDispatch,
    DynamicDispatch,
    Let,
    Case,
    Object,
    NoExpr,
);

impl<C> AstNode<C> for ast::Feature<C> {
    fn as_node(&self) -> NodeRef<'_, C> {
        match self {
            ast::Feature::Attribute(f) => NodeRef::Attribute(f),
            ast::Feature::Method(f) => NodeRef::Method(f),
        }
    }
}

impl<C> AstNode<C> for ast::Expression<C> {
    fn as_node(&self) -> NodeRef<'_, C> {
        match self {
            ast::Expression::StringConst(e) => NodeRef::StringConst(e),
            ast::Expression::IntConst(e) => NodeRef::IntConst(e),
            ast::Expression::BoolConst(e) => NodeRef::BoolConst(e),
            ast::Expression::New(e) => NodeRef::New(e),
            ast::Expression::IsVoid(e) => NodeRef::IsVoid(e),
            ast::Expression::Object(e) => NodeRef::Object(e),
            ast::Expression::Assign(e) => NodeRef::Assign(e),
            ast::Expression::Block(e) => NodeRef::Block(e),
            ast::Expression::If(e) => NodeRef::If(e),
            ast::Expression::While(e) => NodeRef::While(e),
            ast::Expression::Let(e) => NodeRef::Let(e),
            ast::Expression::Case(e) => NodeRef::Case(e),
            ast::Expression::Plus(e) => NodeRef::Plus(e),
            ast::Expression::Sub(e) => NodeRef::Sub(e),
            ast::Expression::Mul(e) => NodeRef::Mul(e),
            ast::Expression::Div(e) => NodeRef::Div(e),
            ast::Expression::Complement(e) => NodeRef::Complement(e),
            ast::Expression::Not(e) => NodeRef::Not(e),
            ast::Expression::LessThan(e) => NodeRef::LessThan(e),
            ast::Expression::EqualTo(e) => NodeRef::EqualTo(e),
            ast::Expression::LessThanEqualTo(e) => NodeRef::LessThanEqualTo(e),
            ast::Expression::StaticDispatch(e) => NodeRef::StaticDispatch(e),
            ast::Expression::DynamicDispatch(e) => NodeRef::DynamicDispatch(e),
            ast::Expression::NoExpr(e) => NodeRef::NoExpr(e),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Slot::Class(i) => write!(f, "class {}", i),
            Slot::Feature(i) => write!(f, "feature {}", i),
            Slot::Formal(i) => write!(f, "formal {}", i),
            Slot::Initializer => f.write_str("init"),
            Slot::Body => f.write_str("body"),
            Slot::Operand => f.write_str("operand"),
            Slot::Value => f.write_str("value"),
            Slot::Expression(i) => write!(f, "expr {}", i),
            Slot::Condition => f.write_str("cond"),
            Slot::Then => f.write_str("then"),
            Slot::Else => f.write_str("else"),
            Slot::Scrutinee => f.write_str("scrutinee"),
            Slot::Branch(i) => write!(f, "branch {}", i),
            Slot::Lhs => f.write_str("lhs"),
            Slot::Rhs => f.write_str("rhs"),
            Slot::Receiver => f.write_str("receiver"),
            Slot::Argument(i) => write!(f, "arg {}", i),
        }
    }
}
