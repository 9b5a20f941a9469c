//! The traversal driver.
//!
//! [`walk`] owns the recursion order, so every traversal of the same tree reaches the nodes in
//! the same sequence no matter which visitor runs.  For each node it:
//!
//! 1. asks `pre_visit_*` whether the visitor handles the node itself, and if so moves on to the
//!    next sibling without touching the children, `visit_*` or `post_visit_*`;
//! 2. walks each child in grammar order;
//! 3. calls `visit_*`;
//! 4. calls `post_visit_*`.
//!
//! The walk uses an explicit stack rather than native recursion, so arbitrarily deep trees
//! cannot overflow the call stack.
use crate::ast::node::NodeRef;
use crate::ast::visitor::Visitor;

enum Step<'a, C> {
    Enter(NodeRef<'a, C>),
    Leave(NodeRef<'a, C>),
}

/// Walks the tree rooted at `root`, calling the hooks of `visitor` for every node.
///
/// # Errors
///
/// Stops at and returns the first error reported by a hook.
///
/// # Panics
///
/// Panics when entering a node that lacks a child the grammar requires; see
/// [`NodeRef::check_shape`].
pub fn walk<C, V>(root: NodeRef<'_, C>, visitor: &mut V) -> Result<(), V::Error>
where
    V: Visitor<C> + ?Sized,
{
    debug!("walking {} tree", root.kind());

    let mut entered = 0usize;
    let mut stack = vec![Step::Enter(root)];

    while let Some(step) = stack.pop() {
        match step {
            Step::Enter(node) => {
                node.check_shape();
                entered += 1;

                if pre_visit(visitor, node)? {
                    trace!("{} handled by its pre-visit hook", node.kind());
                    continue;
                }

                stack.push(Step::Leave(node));
                stack.extend(node.children().into_iter().rev().map(Step::Enter));
            }
            Step::Leave(node) => {
                visit(visitor, node)?;
                post_visit(visitor, node)?;
            }
        }
    }

    debug!("walked {} tree, entered {} nodes", root.kind(), entered);
    Ok(())
}

/// Counts the nodes of the tree rooted at `root`.
pub fn count_nodes<C>(root: NodeRef<'_, C>) -> usize {
    let mut count = 0;
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        count += 1;
        stack.extend(node.children());
    }

    count
}

fn pre_visit<C, V>(visitor: &mut V, node: NodeRef<'_, C>) -> Result<bool, V::Error>
where
    V: Visitor<C> + ?Sized,
{
    match node {
        NodeRef::Program(n) => visitor.pre_visit_program(n),
        NodeRef::Class(n) => visitor.pre_visit_class(n),
        NodeRef::Attribute(n) => visitor.pre_visit_attribute(n),
        NodeRef::Method(n) => visitor.pre_visit_method(n),
        NodeRef::Formal(n) => visitor.pre_visit_formal(n),
        NodeRef::StringConst(n) => visitor.pre_visit_string_const(n),
        NodeRef::IntConst(n) => visitor.pre_visit_int_const(n),
        NodeRef::BoolConst(n) => visitor.pre_visit_bool_const(n),
        NodeRef::New(n) => visitor.pre_visit_new(n),
        NodeRef::IsVoid(n) => visitor.pre_visit_is_void(n),
        NodeRef::CaseBranch(n) => visitor.pre_visit_case_branch(n),
        NodeRef::Assign(n) => visitor.pre_visit_assign(n),
        NodeRef::Block(n) => visitor.pre_visit_block(n),
        NodeRef::If(n) => visitor.pre_visit_if(n),
        NodeRef::While(n) => visitor.pre_visit_while(n),
        NodeRef::Complement(n) => visitor.pre_visit_complement(n),
        NodeRef::LessThan(n) => visitor.pre_visit_less_than(n),
        NodeRef::EqualTo(n) => visitor.pre_visit_equal_to(n),
        NodeRef::LessThanEqualTo(n) => visitor.pre_visit_less_than_equal_to(n),
        NodeRef::Plus(n) => visitor.pre_visit_plus(n),
        NodeRef::Sub(n) => visitor.pre_visit_sub(n),
        NodeRef::Mul(n) => visitor.pre_visit_mul(n),
        NodeRef::Div(n) => visitor.pre_visit_div(n),
        NodeRef::Not(n) => visitor.pre_visit_not(n),
        NodeRef::StaticDispatch(n) => visitor.pre_visit_static_dispatch(n),
        NodeRef::DynamicDispatch(n) => visitor.pre_visit_dynamic_dispatch(n),
        NodeRef::Let(n) => visitor.pre_visit_let(n),
        NodeRef::Case(n) => visitor.pre_visit_case(n),
        NodeRef::Object(n) => visitor.pre_visit_object(n),
        NodeRef::NoExpr(n) => visitor.pre_visit_no_expr(n),
    }
}

fn visit<C, V>(visitor: &mut V, node: NodeRef<'_, C>) -> Result<(), V::Error>
where
    V: Visitor<C> + ?Sized,
{
    match node {
        NodeRef::Program(n) => visitor.visit_program(n),
        NodeRef::Class(n) => visitor.visit_class(n),
        NodeRef::Attribute(n) => visitor.visit_attribute(n),
        NodeRef::Method(n) => visitor.visit_method(n),
        NodeRef::Formal(n) => visitor.visit_formal(n),
        NodeRef::StringConst(n) => visitor.visit_string_const(n),
        NodeRef::IntConst(n) => visitor.visit_int_const(n),
        NodeRef::BoolConst(n) => visitor.visit_bool_const(n),
        NodeRef::New(n) => visitor.visit_new(n),
        NodeRef::IsVoid(n) => visitor.visit_is_void(n),
        NodeRef::CaseBranch(n) => visitor.visit_case_branch(n),
        NodeRef::Assign(n) => visitor.visit_assign(n),
        NodeRef::Block(n) => visitor.visit_block(n),
        NodeRef::If(n) => visitor.visit_if(n),
        NodeRef::While(n) => visitor.visit_while(n),
        NodeRef::Complement(n) => visitor.visit_complement(n),
        NodeRef::LessThan(n) => visitor.visit_less_than(n),
        NodeRef::EqualTo(n) => visitor.visit_equal_to(n),
        NodeRef::LessThanEqualTo(n) => visitor.visit_less_than_equal_to(n),
        NodeRef::Plus(n) => visitor.visit_plus(n),
        NodeRef::Sub(n) => visitor.visit_sub(n),
        NodeRef::Mul(n) => visitor.visit_mul(n),
        NodeRef::Div(n) => visitor.visit_div(n),
        NodeRef::Not(n) => visitor.visit_not(n),
        NodeRef::StaticDispatch(n) => visitor.visit_static_dispatch(n),
        NodeRef::DynamicDispatch(n) => visitor.visit_dynamic_dispatch(n),
        NodeRef::Let(n) => visitor.visit_let(n),
        NodeRef::Case(n) => visitor.visit_case(n),
        NodeRef::Object(n) => visitor.visit_object(n),
        NodeRef::NoExpr(n) => visitor.visit_no_expr(n),
    }
}

fn post_visit<C, V>(visitor: &mut V, node: NodeRef<'_, C>) -> Result<(), V::Error>
where
    V: Visitor<C> + ?Sized,
{
    match node {
        NodeRef::Program(n) => visitor.post_visit_program(n),
        NodeRef::Class(n) => visitor.post_visit_class(n),
        NodeRef::Attribute(n) => visitor.post_visit_attribute(n),
        NodeRef::Method(n) => visitor.post_visit_method(n),
        NodeRef::Formal(n) => visitor.post_visit_formal(n),
        NodeRef::StringConst(n) => visitor.post_visit_string_const(n),
        NodeRef::IntConst(n) => visitor.post_visit_int_const(n),
        NodeRef::BoolConst(n) => visitor.post_visit_bool_const(n),
        NodeRef::New(n) => visitor.post_visit_new(n),
        NodeRef::IsVoid(n) => visitor.post_visit_is_void(n),
        NodeRef::CaseBranch(n) => visitor.post_visit_case_branch(n),
        NodeRef::Assign(n) => visitor.post_visit_assign(n),
        NodeRef::Block(n) => visitor.post_visit_block(n),
        NodeRef::If(n) => visitor.post_visit_if(n),
        NodeRef::While(n) => visitor.post_visit_while(n),
        NodeRef::Complement(n) => visitor.post_visit_complement(n),
        NodeRef::LessThan(n) => visitor.post_visit_less_than(n),
        NodeRef::EqualTo(n) => visitor.post_visit_equal_to(n),
        NodeRef::LessThanEqualTo(n) => visitor.post_visit_less_than_equal_to(n),
        NodeRef::Plus(n) => visitor.post_visit_plus(n),
        NodeRef::Sub(n) => visitor.post_visit_sub(n),
        NodeRef::Mul(n) => visitor.post_visit_mul(n),
        NodeRef::Div(n) => visitor.post_visit_div(n),
        NodeRef::Not(n) => visitor.post_visit_not(n),
        NodeRef::StaticDispatch(n) => visitor.post_visit_static_dispatch(n),
        NodeRef::DynamicDispatch(n) => visitor.post_visit_dynamic_dispatch(n),
        NodeRef::Let(n) => visitor.post_visit_let(n),
        NodeRef::Case(n) => visitor.post_visit_case(n),
        NodeRef::Object(n) => visitor.post_visit_object(n),
        NodeRef::NoExpr(n) => visitor.post_visit_no_expr(n),
    }
}
