//! Tools for consuming AST nodes using the visitor pattern.
//!
//! Every operation over a COOL tree (dumping, semantic checks, code generation) is a [`Visitor`].
//! The traversal driver in [`walk`](super::walk) decides the order in which nodes are reached;
//! the visitor only decides what happens at each of the three points the driver offers per node:
//!
//! 1. `pre_visit_*` runs before the children.  Returning `Ok(true)` means the visitor handled the
//!    node on its own: the children are not traversed and neither `visit_*` nor `post_visit_*`
//!    runs for the node.
//! 2. `visit_*` runs after all children have been traversed.
//! 3. `post_visit_*` runs right after `visit_*`.
//!
//! `visit_*` must be implemented for every kind, so that adding a node kind breaks every visitor
//! at compile time.  The `pre_visit_*` and `post_visit_*` hooks default to [`pre_visit_node`] and
//! [`post_visit_node`], which do nothing unless overridden.
//!
//! [`pre_visit_node`]: Visitor::pre_visit_node
//! [`post_visit_node`]: Visitor::post_visit_node
use crate::ast;
use crate::ast::node::NodeRef;

/// A visitor for AST nodes.
pub trait Visitor<C> {
    /// The error type that aborts a traversal.
    type Error;

    /// Called before visiting any node, unless the corresponding `pre_visit_*` method is
    /// overridden.
    fn pre_visit_node(&mut self, _node: NodeRef<'_, C>) -> Result<bool, Self::Error> {
        Ok(false)
    }

    /// Called after visiting any node, unless the corresponding `post_visit_*` method is
    /// overridden.
    fn post_visit_node(&mut self, _node: NodeRef<'_, C>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called before visiting the children of a program; returns whether it was handled.
    fn pre_visit_program(&mut self, program: &ast::Program<C>) -> Result<bool, Self::Error> {
        self.pre_visit_node(NodeRef::Program(program))
    }
    /// Called after the children of a program were visited.
    fn visit_program(&mut self, program: &ast::Program<C>) -> Result<(), Self::Error>;
    /// Called after [`visit_program`](Visitor::visit_program).
    fn post_visit_program(&mut self, program: &ast::Program<C>) -> Result<(), Self::Error> {
        self.post_visit_node(NodeRef::Program(program))
    }

    /// Called before visiting the children of a class; returns whether it was handled.
    fn pre_visit_class(&mut self, class: &ast::Class<C>) -> Result<bool, Self::Error> {
        self.pre_visit_node(NodeRef::Class(class))
    }
    /// Called after the children of a class were visited.
    fn visit_class(&mut self, class: &ast::Class<C>) -> Result<(), Self::Error>;
    /// Called after [`visit_class`](Visitor::visit_class).
    fn post_visit_class(&mut self, class: &ast::Class<C>) -> Result<(), Self::Error> {
        self.post_visit_node(NodeRef::Class(class))
    }

    /// Called before visiting the children of an attribute; returns whether it was handled.
    fn pre_visit_attribute(&mut self, attribute: &ast::Attribute<C>) -> Result<bool, Self::Error> {
        self.pre_visit_node(NodeRef::Attribute(attribute))
    }
    /// Called after the children of an attribute were visited.
    fn visit_attribute(&mut self, attribute: &ast::Attribute<C>) -> Result<(), Self::Error>;
    /// Called after [`visit_attribute`](Visitor::visit_attribute).
    fn post_visit_attribute(&mut self, attribute: &ast::Attribute<C>) -> Result<(), Self::Error> {
        self.post_visit_node(NodeRef::Attribute(attribute))
    }

    /// Called before visiting the children of a method; returns whether it was handled.
    fn pre_visit_method(&mut self, method: &ast::Method<C>) -> Result<bool, Self::Error> {
        self.pre_visit_node(NodeRef::Method(method))
    }
    /// Called after the children of a method were visited.
    fn visit_method(&mut self, method: &ast::Method<C>) -> Result<(), Self::Error>;
    /// Called after [`visit_method`](Visitor::visit_method).
    fn post_visit_method(&mut self, method: &ast::Method<C>) -> Result<(), Self::Error> {
        self.post_visit_node(NodeRef::Method(method))
    }

    /// Called before visiting the children of a formal parameter; returns whether it was handled.
    fn pre_visit_formal(&mut self, formal: &ast::Formal<C>) -> Result<bool, Self::Error> {
        self.pre_visit_node(NodeRef::Formal(formal))
    }
    /// Called after the children of a formal parameter were visited.
    fn visit_formal(&mut self, formal: &ast::Formal<C>) -> Result<(), Self::Error>;
    /// Called after [`visit_formal`](Visitor::visit_formal).
    fn post_visit_formal(&mut self, formal: &ast::Formal<C>) -> Result<(), Self::Error> {
        self.post_visit_node(NodeRef::Formal(formal))
    }

    /// Called before visiting the children of a string literal; returns whether it was handled.
    fn pre_visit_string_const(
        &mut self,
        string: &ast::StringConst<C>,
    ) -> Result<bool, Self::Error> {
        self.pre_visit_node(NodeRef::StringConst(string))
    }
    /// Called after the children of a string literal were visited.
    fn visit_string_const(&mut self, string: &ast::StringConst<C>) -> Result<(), Self::Error>;
    /// Called after [`visit_string_const`](Visitor::visit_string_const).
    fn post_visit_string_const(&mut self, string: &ast::StringConst<C>) -> Result<(), Self::Error> {
        self.post_visit_node(NodeRef::StringConst(string))
    }

    /// Called before visiting the children of an integer literal; returns whether it was handled.
    fn pre_visit_int_const(&mut self, int: &ast::IntConst<C>) -> Result<bool, Self::Error> {
        self.pre_visit_node(NodeRef::IntConst(int))
    }
    /// Called after the children of an integer literal were visited.
    fn visit_int_const(&mut self, int: &ast::IntConst<C>) -> Result<(), Self::Error>;
    /// Called after [`visit_int_const`](Visitor::visit_int_const).
    fn post_visit_int_const(&mut self, int: &ast::IntConst<C>) -> Result<(), Self::Error> {
        self.post_visit_node(NodeRef::IntConst(int))
    }

    /// Called before visiting the children of a boolean literal; returns whether it was handled.
    fn pre_visit_bool_const(&mut self, boolean: &ast::BoolConst<C>) -> Result<bool, Self::Error> {
        self.pre_visit_node(NodeRef::BoolConst(boolean))
    }
    /// Called after the children of a boolean literal were visited.
    fn visit_bool_const(&mut self, boolean: &ast::BoolConst<C>) -> Result<(), Self::Error>;
    /// Called after [`visit_bool_const`](Visitor::visit_bool_const).
    fn post_visit_bool_const(&mut self, boolean: &ast::BoolConst<C>) -> Result<(), Self::Error> {
        self.post_visit_node(NodeRef::BoolConst(boolean))
    }

    /// Called before visiting the children of a `new` expression; returns whether it was handled.
    fn pre_visit_new(&mut self, new: &ast::New<C>) -> Result<bool, Self::Error> {
        self.pre_visit_node(NodeRef::New(new))
    }
    /// Called after the children of a `new` expression were visited.
    fn visit_new(&mut self, new: &ast::New<C>) -> Result<(), Self::Error>;
    /// Called after [`visit_new`](Visitor::visit_new).
    fn post_visit_new(&mut self, new: &ast::New<C>) -> Result<(), Self::Error> {
        self.post_visit_node(NodeRef::New(new))
    }

    /// Called before visiting the children of an `isvoid` check; returns whether it was handled.
    fn pre_visit_is_void(&mut self, is_void: &ast::UnaryOp<C>) -> Result<bool, Self::Error> {
        self.pre_visit_node(NodeRef::IsVoid(is_void))
    }
    /// Called after the children of an `isvoid` check were visited.
    fn visit_is_void(&mut self, is_void: &ast::UnaryOp<C>) -> Result<(), Self::Error>;
    /// Called after [`visit_is_void`](Visitor::visit_is_void).
    fn post_visit_is_void(&mut self, is_void: &ast::UnaryOp<C>) -> Result<(), Self::Error> {
        self.post_visit_node(NodeRef::IsVoid(is_void))
    }

    /// Called before visiting the children of a case branch; returns whether it was handled.
    fn pre_visit_case_branch(&mut self, branch: &ast::CaseBranch<C>) -> Result<bool, Self::Error> {
        self.pre_visit_node(NodeRef::CaseBranch(branch))
    }
    /// Called after the children of a case branch were visited.
    fn visit_case_branch(&mut self, branch: &ast::CaseBranch<C>) -> Result<(), Self::Error>;
    /// Called after [`visit_case_branch`](Visitor::visit_case_branch).
    fn post_visit_case_branch(&mut self, branch: &ast::CaseBranch<C>) -> Result<(), Self::Error> {
        self.post_visit_node(NodeRef::CaseBranch(branch))
    }

    /// Called before visiting the children of an assignment; returns whether it was handled.
    fn pre_visit_assign(&mut self, assign: &ast::Assign<C>) -> Result<bool, Self::Error> {
        self.pre_visit_node(NodeRef::Assign(assign))
    }
    /// Called after the children of an assignment were visited.
    fn visit_assign(&mut self, assign: &ast::Assign<C>) -> Result<(), Self::Error>;
    /// Called after [`visit_assign`](Visitor::visit_assign).
    fn post_visit_assign(&mut self, assign: &ast::Assign<C>) -> Result<(), Self::Error> {
        self.post_visit_node(NodeRef::Assign(assign))
    }

    /// Called before visiting the children of a block; returns whether it was handled.
    fn pre_visit_block(&mut self, block: &ast::Block<C>) -> Result<bool, Self::Error> {
        self.pre_visit_node(NodeRef::Block(block))
    }
    /// Called after the children of a block were visited.
    fn visit_block(&mut self, block: &ast::Block<C>) -> Result<(), Self::Error>;
    /// Called after [`visit_block`](Visitor::visit_block).
    fn post_visit_block(&mut self, block: &ast::Block<C>) -> Result<(), Self::Error> {
        self.post_visit_node(NodeRef::Block(block))
    }

    /// Called before visiting the children of a conditional; returns whether it was handled.
    fn pre_visit_if(&mut self, conditional: &ast::If<C>) -> Result<bool, Self::Error> {
        self.pre_visit_node(NodeRef::If(conditional))
    }
    /// Called after the children of a conditional were visited.
    fn visit_if(&mut self, conditional: &ast::If<C>) -> Result<(), Self::Error>;
    /// Called after [`visit_if`](Visitor::visit_if).
    fn post_visit_if(&mut self, conditional: &ast::If<C>) -> Result<(), Self::Error> {
        self.post_visit_node(NodeRef::If(conditional))
    }

    /// Called before visiting the children of a loop; returns whether it was handled.
    fn pre_visit_while(&mut self, looping: &ast::While<C>) -> Result<bool, Self::Error> {
        self.pre_visit_node(NodeRef::While(looping))
    }
    /// Called after the children of a loop were visited.
    fn visit_while(&mut self, looping: &ast::While<C>) -> Result<(), Self::Error>;
    /// Called after [`visit_while`](Visitor::visit_while).
    fn post_visit_while(&mut self, looping: &ast::While<C>) -> Result<(), Self::Error> {
        self.post_visit_node(NodeRef::While(looping))
    }

    /// Called before visiting the children of a `~` complement; returns whether it was handled.
    fn pre_visit_complement(&mut self, complement: &ast::UnaryOp<C>) -> Result<bool, Self::Error> {
        self.pre_visit_node(NodeRef::Complement(complement))
    }
    /// Called after the children of a `~` complement were visited.
    fn visit_complement(&mut self, complement: &ast::UnaryOp<C>) -> Result<(), Self::Error>;
    /// Called after [`visit_complement`](Visitor::visit_complement).
    fn post_visit_complement(&mut self, complement: &ast::UnaryOp<C>) -> Result<(), Self::Error> {
        self.post_visit_node(NodeRef::Complement(complement))
    }

    /// Called before visiting the children of a `<` comparison; returns whether it was handled.
    fn pre_visit_less_than(&mut self, less_than: &ast::BinaryOp<C>) -> Result<bool, Self::Error> {
        self.pre_visit_node(NodeRef::LessThan(less_than))
    }
    /// Called after the children of a `<` comparison were visited.
    fn visit_less_than(&mut self, less_than: &ast::BinaryOp<C>) -> Result<(), Self::Error>;
    /// Called after [`visit_less_than`](Visitor::visit_less_than).
    fn post_visit_less_than(&mut self, less_than: &ast::BinaryOp<C>) -> Result<(), Self::Error> {
        self.post_visit_node(NodeRef::LessThan(less_than))
    }

    /// Called before visiting the children of an `=` comparison; returns whether it was handled.
    fn pre_visit_equal_to(&mut self, equal_to: &ast::BinaryOp<C>) -> Result<bool, Self::Error> {
        self.pre_visit_node(NodeRef::EqualTo(equal_to))
    }
    /// Called after the children of an `=` comparison were visited.
    fn visit_equal_to(&mut self, equal_to: &ast::BinaryOp<C>) -> Result<(), Self::Error>;
    /// Called after [`visit_equal_to`](Visitor::visit_equal_to).
    fn post_visit_equal_to(&mut self, equal_to: &ast::BinaryOp<C>) -> Result<(), Self::Error> {
        self.post_visit_node(NodeRef::EqualTo(equal_to))
    }

    /// Called before visiting the children of a `<=` comparison; returns whether it was handled.
    fn pre_visit_less_than_equal_to(
        &mut self,
        less_than_equal_to: &ast::BinaryOp<C>,
    ) -> Result<bool, Self::Error> {
        self.pre_visit_node(NodeRef::LessThanEqualTo(less_than_equal_to))
    }
    /// Called after the children of a `<=` comparison were visited.
    fn visit_less_than_equal_to(
        &mut self,
        less_than_equal_to: &ast::BinaryOp<C>,
    ) -> Result<(), Self::Error>;
    /// Called after [`visit_less_than_equal_to`](Visitor::visit_less_than_equal_to).
    fn post_visit_less_than_equal_to(
        &mut self,
        less_than_equal_to: &ast::BinaryOp<C>,
    ) -> Result<(), Self::Error> {
        self.post_visit_node(NodeRef::LessThanEqualTo(less_than_equal_to))
    }

    /// Called before visiting the children of an addition; returns whether it was handled.
    fn pre_visit_plus(&mut self, plus: &ast::BinaryOp<C>) -> Result<bool, Self::Error> {
        self.pre_visit_node(NodeRef::Plus(plus))
    }
    /// Called after the children of an addition were visited.
    fn visit_plus(&mut self, plus: &ast::BinaryOp<C>) -> Result<(), Self::Error>;
    /// Called after [`visit_plus`](Visitor::visit_plus).
    fn post_visit_plus(&mut self, plus: &ast::BinaryOp<C>) -> Result<(), Self::Error> {
        self.post_visit_node(NodeRef::Plus(plus))
    }

    /// Called before visiting the children of a subtraction; returns whether it was handled.
    fn pre_visit_sub(&mut self, sub: &ast::BinaryOp<C>) -> Result<bool, Self::Error> {
        self.pre_visit_node(NodeRef::Sub(sub))
    }
    /// Called after the children of a subtraction were visited.
    fn visit_sub(&mut self, sub: &ast::BinaryOp<C>) -> Result<(), Self::Error>;
    /// Called after [`visit_sub`](Visitor::visit_sub).
    fn post_visit_sub(&mut self, sub: &ast::BinaryOp<C>) -> Result<(), Self::Error> {
        self.post_visit_node(NodeRef::Sub(sub))
    }

    /// Called before visiting the children of a multiplication; returns whether it was handled.
    fn pre_visit_mul(&mut self, mul: &ast::BinaryOp<C>) -> Result<bool, Self::Error> {
        self.pre_visit_node(NodeRef::Mul(mul))
    }
    /// Called after the children of a multiplication were visited.
    fn visit_mul(&mut self, mul: &ast::BinaryOp<C>) -> Result<(), Self::Error>;
    /// Called after [`visit_mul`](Visitor::visit_mul).
    fn post_visit_mul(&mut self, mul: &ast::BinaryOp<C>) -> Result<(), Self::Error> {
        self.post_visit_node(NodeRef::Mul(mul))
    }

    /// Called before visiting the children of a division; returns whether it was handled.
    fn pre_visit_div(&mut self, div: &ast::BinaryOp<C>) -> Result<bool, Self::Error> {
        self.pre_visit_node(NodeRef::Div(div))
    }
    /// Called after the children of a division were visited.
    fn visit_div(&mut self, div: &ast::BinaryOp<C>) -> Result<(), Self::Error>;
    /// Called after [`visit_div`](Visitor::visit_div).
    fn post_visit_div(&mut self, div: &ast::BinaryOp<C>) -> Result<(), Self::Error> {
        self.post_visit_node(NodeRef::Div(div))
    }

    /// Called before visiting the children of a boolean negation; returns whether it was handled.
    fn pre_visit_not(&mut self, not: &ast::UnaryOp<C>) -> Result<bool, Self::Error> {
        self.pre_visit_node(NodeRef::Not(not))
    }
    /// Called after the children of a boolean negation were visited.
    fn visit_not(&mut self, not: &ast::UnaryOp<C>) -> Result<(), Self::Error>;
    /// Called after [`visit_not`](Visitor::visit_not).
    fn post_visit_not(&mut self, not: &ast::UnaryOp<C>) -> Result<(), Self::Error> {
        self.post_visit_node(NodeRef::Not(not))
    }

    /// Called before visiting the children of a static dispatch; returns whether it was handled.
    fn pre_visit_static_dispatch(
        &mut self,
        dispatch: &ast::StaticDispatch<C>,
    ) -> Result<bool, Self::Error> {
        self.pre_visit_node(NodeRef::StaticDispatch(dispatch))
    }
    /// Called after the children of a static dispatch were visited.
    fn visit_static_dispatch(
        &mut self,
        dispatch: &ast::StaticDispatch<C>,
    ) -> Result<(), Self::Error>;
    /// Called after [`visit_static_dispatch`](Visitor::visit_static_dispatch).
    fn post_visit_static_dispatch(
        &mut self,
        dispatch: &ast::StaticDispatch<C>,
    ) -> Result<(), Self::Error> {
        self.post_visit_node(NodeRef::StaticDispatch(dispatch))
    }

    /// Called before visiting the children of a dynamic dispatch; returns whether it was handled.
    fn pre_visit_dynamic_dispatch(
        &mut self,
        dispatch: &ast::DynamicDispatch<C>,
    ) -> Result<bool, Self::Error> {
        self.pre_visit_node(NodeRef::DynamicDispatch(dispatch))
    }
    /// Called after the children of a dynamic dispatch were visited.
    fn visit_dynamic_dispatch(
        &mut self,
        dispatch: &ast::DynamicDispatch<C>,
    ) -> Result<(), Self::Error>;
    /// Called after [`visit_dynamic_dispatch`](Visitor::visit_dynamic_dispatch).
    fn post_visit_dynamic_dispatch(
        &mut self,
        dispatch: &ast::DynamicDispatch<C>,
    ) -> Result<(), Self::Error> {
        self.post_visit_node(NodeRef::DynamicDispatch(dispatch))
    }

    /// Called before visiting the children of a let binding; returns whether it was handled.
    fn pre_visit_let(&mut self, binding: &ast::Let<C>) -> Result<bool, Self::Error> {
        self.pre_visit_node(NodeRef::Let(binding))
    }
    /// Called after the children of a let binding were visited.
    fn visit_let(&mut self, binding: &ast::Let<C>) -> Result<(), Self::Error>;
    /// Called after [`visit_let`](Visitor::visit_let).
    fn post_visit_let(&mut self, binding: &ast::Let<C>) -> Result<(), Self::Error> {
        self.post_visit_node(NodeRef::Let(binding))
    }

    /// Called before visiting the children of a case expression; returns whether it was handled.
    fn pre_visit_case(&mut self, case: &ast::Case<C>) -> Result<bool, Self::Error> {
        self.pre_visit_node(NodeRef::Case(case))
    }
    /// Called after the children of a case expression were visited.
    fn visit_case(&mut self, case: &ast::Case<C>) -> Result<(), Self::Error>;
    /// Called after [`visit_case`](Visitor::visit_case).
    fn post_visit_case(&mut self, case: &ast::Case<C>) -> Result<(), Self::Error> {
        self.post_visit_node(NodeRef::Case(case))
    }

    /// Called before visiting the children of an object reference; returns whether it was handled.
    fn pre_visit_object(&mut self, object: &ast::Object<C>) -> Result<bool, Self::Error> {
        self.pre_visit_node(NodeRef::Object(object))
    }
    /// Called after the children of an object reference were visited.
    fn visit_object(&mut self, object: &ast::Object<C>) -> Result<(), Self::Error>;
    /// Called after [`visit_object`](Visitor::visit_object).
    fn post_visit_object(&mut self, object: &ast::Object<C>) -> Result<(), Self::Error> {
        self.post_visit_node(NodeRef::Object(object))
    }

    /// Called before visiting the children of an absent expression; returns whether it was handled.
    fn pre_visit_no_expr(&mut self, no_expr: &ast::NoExpr<C>) -> Result<bool, Self::Error> {
        self.pre_visit_node(NodeRef::NoExpr(no_expr))
    }
    /// Called after the children of an absent expression were visited.
    fn visit_no_expr(&mut self, no_expr: &ast::NoExpr<C>) -> Result<(), Self::Error>;
    /// Called after [`visit_no_expr`](Visitor::visit_no_expr).
    fn post_visit_no_expr(&mut self, no_expr: &ast::NoExpr<C>) -> Result<(), Self::Error> {
        self.post_visit_node(NodeRef::NoExpr(no_expr))
    }
}
