//! Abstract syntax tree definitions for COOL.
//!
//! Trees are built bottom-up by a parser and are read-only afterwards.  Every node carries a
//! context of type `C`, which is usually a source span; tests use `()`.
use std::fmt;

pub mod map_context;
pub mod node;
pub mod visitor;
pub mod walk;

#[cfg(test)]
mod tests;

pub use self::node::AstNode;
pub use self::node::NodeRef;
pub use self::node::Slot;
pub use self::visitor::Visitor;

/// Identifies the kind of AST node.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Kind {
    /// A [`Program`] AST node.
    Program,
    /// A [`Class`] AST node.
    Class,
    /// An [`Attribute`] feature.
    Attribute,
    /// A [`Method`] feature.
    Method,
    /// A [`Formal`] method parameter.
    Formal,
    /// A [`StringConst`] expression.
    StringConst,
    /// An [`IntConst`] expression.
    IntConst,
    /// A [`BoolConst`] expression.
    BoolConst,
    /// A [`New`] expression.
    New,
    /// An `isvoid` [`UnaryOp`] expression.
    IsVoid,
    /// A [`CaseBranch`] of a [`Case`] expression.
    CaseBranch,
    /// An [`Assign`] expression.
    Assign,
    /// A [`Block`] expression.
    Block,
    /// An [`If`] expression.
    If,
    /// A [`While`] expression.
    While,
    /// An integer complement (`~`) [`UnaryOp`] expression.
    Complement,
    /// A `<` [`BinaryOp`] expression.
    LessThan,
    /// An `=` [`BinaryOp`] expression.
    EqualTo,
    /// A `<=` [`BinaryOp`] expression.
    LessThanEqualTo,
    /// A `+` [`BinaryOp`] expression.
    Plus,
    /// A `-` [`BinaryOp`] expression.
    Sub,
    /// A `*` [`BinaryOp`] expression.
    Mul,
    /// A `/` [`BinaryOp`] expression.
    Div,
    /// A boolean `not` [`UnaryOp`] expression.
    Not,
    /// A [`StaticDispatch`] expression.
    StaticDispatch,
    /// A [`DynamicDispatch`] expression.
    DynamicDispatch,
    /// A [`Let`] expression.
    Let,
    /// A [`Case`] expression.
    Case,
    /// An [`Object`] reference expression.
    Object,
    /// The [`NoExpr`] sentinel.
    NoExpr,
}

/// A complete COOL program.
#[derive(Clone, Debug, PartialEq)]
pub struct Program<C> {
    /// This node's AST context.
    pub context: C,
    /// The classes of the program, in declaration order.
    pub classes: Vec<Class<C>>,
}

/// A class declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct Class<C> {
    /// This node's AST context.
    pub context: C,
    /// The name of the class.
    pub name: String,
    /// The name of the class this class inherits from; `Object` when not declared.
    pub parent: String,
    /// The features of the class, in declaration order.
    pub features: Vec<Feature<C>>,
}

/// A class feature.
#[derive(Clone, Debug, PartialEq)]
pub enum Feature<C> {
    /// An attribute declaration.
    Attribute(Attribute<C>),
    /// A method declaration.
    Method(Method<C>),
}

/// An attribute declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct Attribute<C> {
    /// This node's AST context.
    pub context: C,
    /// The name of the attribute.
    pub name: String,
    /// The declared type of the attribute.
    pub type_name: String,
    /// The initializer of the attribute; [`Expression::NoExpr`] if there is none.
    pub initializer: Expression<C>,
}

/// A method declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct Method<C> {
    /// This node's AST context.
    pub context: C,
    /// The name of the method.
    pub name: String,
    /// The formal parameters of the method, in declaration order.
    pub formals: Vec<Formal<C>>,
    /// The declared return type of the method.
    pub return_type: String,
    /// The method body.
    pub body: Expression<C>,
}

/// A formal method parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct Formal<C> {
    /// This node's AST context.
    pub context: C,
    /// The name of the parameter.
    pub name: String,
    /// The declared type of the parameter.
    pub type_name: String,
}

/// Any valid expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Expression<C> {
    /// A string literal.
    StringConst(StringConst<C>),
    /// An integer literal.
    IntConst(IntConst<C>),
    /// A boolean literal.
    BoolConst(BoolConst<C>),
    /// Object instantiation.
    New(New<C>),
    /// A void check.
    IsVoid(UnaryOp<C>),
    /// A reference to an identifier.
    Object(Object<C>),
    /// An assignment to an identifier.
    Assign(Assign<C>),
    /// A sequence of expressions.
    Block(Block<C>),
    /// A conditional.
    If(If<C>),
    /// A loop.
    While(While<C>),
    /// A local binding.
    Let(Let<C>),
    /// A type case.
    Case(Case<C>),
    /// Integer addition.
    Plus(BinaryOp<C>),
    /// Integer subtraction.
    Sub(BinaryOp<C>),
    /// Integer multiplication.
    Mul(BinaryOp<C>),
    /// Integer division.
    Div(BinaryOp<C>),
    /// Integer complement.
    Complement(UnaryOp<C>),
    /// Boolean negation.
    Not(UnaryOp<C>),
    /// Integer comparison.
    LessThan(BinaryOp<C>),
    /// Equality.
    EqualTo(BinaryOp<C>),
    /// Integer comparison.
    LessThanEqualTo(BinaryOp<C>),
    /// A method call with an explicit static type.
    StaticDispatch(StaticDispatch<C>),
    /// A method call resolved on the runtime type of the receiver.
    DynamicDispatch(DynamicDispatch<C>),
    /// The absence of an expression.
    NoExpr(NoExpr<C>),
}

/// A string literal.
#[derive(Clone, Debug, PartialEq)]
pub struct StringConst<C> {
    /// This node's AST context.
    pub context: C,
    /// The value of the literal, with escapes already resolved.
    pub value: String,
}

/// An integer literal.
#[derive(Clone, Debug, PartialEq)]
pub struct IntConst<C> {
    /// This node's AST context.
    pub context: C,
    /// The value of the literal.
    pub value: i32,
}

/// A boolean literal.
#[derive(Clone, Debug, PartialEq)]
pub struct BoolConst<C> {
    /// This node's AST context.
    pub context: C,
    /// The value of the literal.
    pub value: bool,
}

/// An object instantiation.
#[derive(Clone, Debug, PartialEq)]
pub struct New<C> {
    /// This node's AST context.
    pub context: C,
    /// The type to instantiate.
    pub type_name: String,
}

/// An expression with one operand; used by `isvoid`, `~` and `not`.
#[derive(Clone, Debug, PartialEq)]
pub struct UnaryOp<C> {
    /// This node's AST context.
    pub context: C,
    /// The operand.
    pub operand: Box<Expression<C>>,
}

/// An expression with two operands; used by the arithmetic and comparison operators.
#[derive(Clone, Debug, PartialEq)]
pub struct BinaryOp<C> {
    /// This node's AST context.
    pub context: C,
    /// The left-hand side operand.
    pub lhs: Box<Expression<C>>,
    /// The right-hand side operand.
    pub rhs: Box<Expression<C>>,
}

/// A reference to an identifier.
#[derive(Clone, Debug, PartialEq)]
pub struct Object<C> {
    /// This node's AST context.
    pub context: C,
    /// The referenced identifier.
    pub name: String,
}

/// An assignment.
#[derive(Clone, Debug, PartialEq)]
pub struct Assign<C> {
    /// This node's AST context.
    pub context: C,
    /// The identifier being assigned to.
    pub name: String,
    /// The assigned value.
    pub value: Box<Expression<C>>,
}

/// A block of expressions; evaluates to its last expression.
#[derive(Clone, Debug, PartialEq)]
pub struct Block<C> {
    /// This node's AST context.
    pub context: C,
    /// The expressions of the block, in source order.  Never empty.
    pub expressions: Vec<Expression<C>>,
}

/// A conditional expression.
#[derive(Clone, Debug, PartialEq)]
pub struct If<C> {
    /// This node's AST context.
    pub context: C,
    /// The condition.
    pub condition: Box<Expression<C>>,
    /// The expression evaluated when the condition holds.
    pub then_branch: Box<Expression<C>>,
    /// The expression evaluated otherwise.
    pub else_branch: Box<Expression<C>>,
}

/// A loop expression.
#[derive(Clone, Debug, PartialEq)]
pub struct While<C> {
    /// This node's AST context.
    pub context: C,
    /// The loop condition.
    pub condition: Box<Expression<C>>,
    /// The loop body.
    pub body: Box<Expression<C>>,
}

/// A single `let` binding; a `let` with several bindings is a chain of nested `Let` nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct Let<C> {
    /// This node's AST context.
    pub context: C,
    /// The bound identifier.
    pub name: String,
    /// The declared type of the binding.
    pub type_name: String,
    /// The initializer; [`Expression::NoExpr`] if the binding is uninitialized.
    pub initializer: Box<Expression<C>>,
    /// The expression in which the binding is in scope.
    pub body: Box<Expression<C>>,
}

/// A type case expression.
#[derive(Clone, Debug, PartialEq)]
pub struct Case<C> {
    /// This node's AST context.
    pub context: C,
    /// The expression whose dynamic type is inspected.
    pub expression: Box<Expression<C>>,
    /// The branches, in source order.  Never empty.
    pub branches: Vec<CaseBranch<C>>,
}

/// A branch of a [`Case`] expression.
#[derive(Clone, Debug, PartialEq)]
pub struct CaseBranch<C> {
    /// This node's AST context.
    pub context: C,
    /// The identifier bound to the scrutinee in this branch.
    pub name: String,
    /// The type this branch matches.
    pub type_name: String,
    /// The branch body.
    pub body: Expression<C>,
}

/// A dispatch with an explicit static type, `obj@Type.method(args)`.
#[derive(Clone, Debug, PartialEq)]
pub struct StaticDispatch<C> {
    /// This node's AST context.
    pub context: C,
    /// The receiver.
    pub object: Box<Expression<C>>,
    /// The class whose method implementation is called.
    pub type_name: String,
    /// The name of the called method.
    pub method: String,
    /// The arguments, in source order.
    pub arguments: Vec<Expression<C>>,
}

/// A dispatch on the dynamic type of the receiver, `obj.method(args)`.
///
/// A bare `method(args)` call is a dynamic dispatch on `self`.
#[derive(Clone, Debug, PartialEq)]
pub struct DynamicDispatch<C> {
    /// This node's AST context.
    pub context: C,
    /// The receiver.
    pub object: Box<Expression<C>>,
    /// The name of the called method.
    pub method: String,
    /// The arguments, in source order.
    pub arguments: Vec<Expression<C>>,
}

/// The absence of an optional expression.
#[derive(Clone, Debug, PartialEq)]
pub struct NoExpr<C> {
    /// This node's AST context.
    pub context: C,
}

impl Kind {
    /// All node kinds, in declaration order.
    pub const ALL: [Kind; 30] = [
        Kind::Program,
        Kind::Class,
        Kind::Attribute,
        Kind::Method,
        Kind::Formal,
        Kind::StringConst,
        Kind::IntConst,
        Kind::BoolConst,
        Kind::New,
        Kind::IsVoid,
        Kind::CaseBranch,
        Kind::Assign,
        Kind::Block,
        Kind::If,
        Kind::While,
        Kind::Complement,
        Kind::LessThan,
        Kind::EqualTo,
        Kind::LessThanEqualTo,
        Kind::Plus,
        Kind::Sub,
        Kind::Mul,
        Kind::Div,
        Kind::Not,
        Kind::StaticDispatch,
        Kind::DynamicDispatch,
        Kind::Let,
        Kind::Case,
        Kind::Object,
        Kind::NoExpr,
    ];

    /// The human-readable label of this kind, as used in AST dumps.
    pub fn label(self) -> &'static str {
        match self {
            Kind::Program => "Program",
            Kind::Class => "Class",
            Kind::Attribute => "Attribute",
            Kind::Method => "Method",
            Kind::Formal => "Formal",
            Kind::StringConst => "StringConst",
            Kind::IntConst => "IntConst",
            Kind::BoolConst => "BoolConst",
            Kind::New => "New",
            Kind::IsVoid => "IsVoid",
            Kind::CaseBranch => "CaseBranch",
            Kind::Assign => "Assign",
            Kind::Block => "Block",
            Kind::If => "If",
            Kind::While => "While",
            Kind::Complement => "Complement",
            Kind::LessThan => "LessThan",
            Kind::EqualTo => "EqualTo",
            Kind::LessThanEqualTo => "LessThanEqualTo",
            Kind::Plus => "Plus",
            Kind::Sub => "Sub",
            Kind::Mul => "Mul",
            Kind::Div => "Div",
            Kind::Not => "Not",
            Kind::StaticDispatch => "StaticDispatch",
            Kind::DynamicDispatch => "DynamicDispatch",
            Kind::Let => "Let",
            Kind::Case => "Case",
            Kind::Object => "Object",
            Kind::NoExpr => "NoExpr",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}
