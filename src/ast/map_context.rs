//! AST node context mapping helpers.
//!
//! The mapping function sees the contexts in traversal order: a node's own context first, then
//! the contexts of its children in grammar order.
use crate::ast;

/// A context mapping over some AST node.
pub trait MapContext<C1, C2> {
    /// The output AST node of the mapping, with the new context.
    type Output;

    /// Maps the context of this AST node to a new context of potentially a different type.
    fn map_context<F>(self, mapping: &mut F) -> Self::Output
    where
        F: FnMut(C1) -> C2;
}

fn map_all<C1, C2, A, F>(nodes: Vec<A>, mapping: &mut F) -> Vec<A::Output>
where
    A: MapContext<C1, C2>,
    F: FnMut(C1) -> C2,
{
    nodes.into_iter().map(|n| n.map_context(mapping)).collect()
}

fn map_boxed<C1, C2, F>(
    expression: Box<ast::Expression<C1>>,
    mapping: &mut F,
) -> Box<ast::Expression<C2>>
where
    F: FnMut(C1) -> C2,
{
    Box::new((*expression).map_context(mapping))
}

impl<C1, C2> MapContext<C1, C2> for ast::Program<C1> {
    type Output = ast::Program<C2>;

    fn map_context<F>(self, mapping: &mut F) -> Self::Output
    where
        F: FnMut(C1) -> C2,
    {
        let context = mapping(self.context);
        let classes = map_all(self.classes, mapping);

        ast::Program { context, classes }
    }
}

impl<C1, C2> MapContext<C1, C2> for ast::Class<C1> {
    type Output = ast::Class<C2>;

    fn map_context<F>(self, mapping: &mut F) -> Self::Output
    where
        F: FnMut(C1) -> C2,
    {
        let context = mapping(self.context);
        let name = self.name;
        let parent = self.parent;
        let features = map_all(self.features, mapping);

        ast::Class {
            context,
            name,
            parent,
            features,
        }
    }
}

impl<C1, C2> MapContext<C1, C2> for ast::Feature<C1> {
    type Output = ast::Feature<C2>;

    fn map_context<F>(self, mapping: &mut F) -> Self::Output
    where
        F: FnMut(C1) -> C2,
    {
        match self {
            ast::Feature::Attribute(f) => ast::Feature::Attribute(f.map_context(mapping)),
            ast::Feature::Method(f) => ast::Feature::Method(f.map_context(mapping)),
        }
    }
}

impl<C1, C2> MapContext<C1, C2> for ast::Attribute<C1> {
    type Output = ast::Attribute<C2>;

    fn map_context<F>(self, mapping: &mut F) -> Self::Output
    where
        F: FnMut(C1) -> C2,
    {
        let context = mapping(self.context);
        let name = self.name;
        let type_name = self.type_name;
        let initializer = self.initializer.map_context(mapping);

        ast::Attribute {
            context,
            name,
            type_name,
            initializer,
        }
    }
}

impl<C1, C2> MapContext<C1, C2> for ast::Method<C1> {
    type Output = ast::Method<C2>;

    fn map_context<F>(self, mapping: &mut F) -> Self::Output
    where
        F: FnMut(C1) -> C2,
    {
        let context = mapping(self.context);
        let name = self.name;
        let formals = map_all(self.formals, mapping);
        let return_type = self.return_type;
        let body = self.body.map_context(mapping);

        ast::Method {
            context,
            name,
            formals,
            return_type,
            body,
        }
    }
}

impl<C1, C2> MapContext<C1, C2> for ast::Formal<C1> {
    type Output = ast::Formal<C2>;

    fn map_context<F>(self, mapping: &mut F) -> Self::Output
    where
        F: FnMut(C1) -> C2,
    {
        let context = mapping(self.context);
        let name = self.name;
        let type_name = self.type_name;

        ast::Formal {
            context,
            name,
            type_name,
        }
    }
}

impl<C1, C2> MapContext<C1, C2> for ast::Expression<C1> {
    type Output = ast::Expression<C2>;

    fn map_context<F>(self, mapping: &mut F) -> Self::Output
    where
        F: FnMut(C1) -> C2,
    {
        use crate::ast::Expression as E;

        match self {
            E::StringConst(e) => E::StringConst(e.map_context(mapping)),
            E::IntConst(e) => E::IntConst(e.map_context(mapping)),
            E::BoolConst(e) => E::BoolConst(e.map_context(mapping)),
            E::New(e) => E::New(e.map_context(mapping)),
            E::IsVoid(e) => E::IsVoid(e.map_context(mapping)),
            E::Object(e) => E::Object(e.map_context(mapping)),
            E::Assign(e) => E::Assign(e.map_context(mapping)),
            E::Block(e) => E::Block(e.map_context(mapping)),
            E::If(e) => E::If(e.map_context(mapping)),
            E::While(e) => E::While(e.map_context(mapping)),
            E::Let(e) => E::Let(e.map_context(mapping)),
            E::Case(e) => E::Case(e.map_context(mapping)),
            E::Plus(e) => E::Plus(e.map_context(mapping)),
            E::Sub(e) => E::Sub(e.map_context(mapping)),
            E::Mul(e) => E::Mul(e.map_context(mapping)),
            E::Div(e) => E::Div(e.map_context(mapping)),
            E::Complement(e) => E::Complement(e.map_context(mapping)),
            E::Not(e) => E::Not(e.map_context(mapping)),
            E::LessThan(e) => E::LessThan(e.map_context(mapping)),
            E::EqualTo(e) => E::EqualTo(e.map_context(mapping)),
            E::LessThanEqualTo(e) => E::LessThanEqualTo(e.map_context(mapping)),
            E::StaticDispatch(e) => E::StaticDispatch(e.map_context(mapping)),
            E::DynamicDispatch(e) => E::DynamicDispatch(e.map_context(mapping)),
            E::NoExpr(e) => E::NoExpr(e.map_context(mapping)),
        }
    }
}

impl<C1, C2> MapContext<C1, C2> for ast::StringConst<C1> {
    type Output = ast::StringConst<C2>;

    fn map_context<F>(self, mapping: &mut F) -> Self::Output
    where
        F: FnMut(C1) -> C2,
    {
        let context = mapping(self.context);
        let value = self.value;
        ast::StringConst { context, value }
    }
}

impl<C1, C2> MapContext<C1, C2> for ast::IntConst<C1> {
    type Output = ast::IntConst<C2>;

    fn map_context<F>(self, mapping: &mut F) -> Self::Output
    where
        F: FnMut(C1) -> C2,
    {
        let context = mapping(self.context);
        let value = self.value;
        ast::IntConst { context, value }
    }
}

impl<C1, C2> MapContext<C1, C2> for ast::BoolConst<C1> {
    type Output = ast::BoolConst<C2>;

    fn map_context<F>(self, mapping: &mut F) -> Self::Output
    where
        F: FnMut(C1) -> C2,
    {
        let context = mapping(self.context);
        let value = self.value;
        ast::BoolConst { context, value }
    }
}

impl<C1, C2> MapContext<C1, C2> for ast::New<C1> {
    type Output = ast::New<C2>;

    fn map_context<F>(self, mapping: &mut F) -> Self::Output
    where
        F: FnMut(C1) -> C2,
    {
        let context = mapping(self.context);
        let type_name = self.type_name;
        ast::New { context, type_name }
    }
}

impl<C1, C2> MapContext<C1, C2> for ast::UnaryOp<C1> {
    type Output = ast::UnaryOp<C2>;

    fn map_context<F>(self, mapping: &mut F) -> Self::Output
    where
        F: FnMut(C1) -> C2,
    {
        let context = mapping(self.context);
        let operand = map_boxed(self.operand, mapping);
        ast::UnaryOp { context, operand }
    }
}

impl<C1, C2> MapContext<C1, C2> for ast::BinaryOp<C1> {
    type Output = ast::BinaryOp<C2>;

    fn map_context<F>(self, mapping: &mut F) -> Self::Output
    where
        F: FnMut(C1) -> C2,
    {
        let context = mapping(self.context);
        let lhs = map_boxed(self.lhs, mapping);
        let rhs = map_boxed(self.rhs, mapping);
        ast::BinaryOp { context, lhs, rhs }
    }
}

impl<C1, C2> MapContext<C1, C2> for ast::Object<C1> {
    type Output = ast::Object<C2>;

    fn map_context<F>(self, mapping: &mut F) -> Self::Output
    where
        F: FnMut(C1) -> C2,
    {
        let context = mapping(self.context);
        let name = self.name;
        ast::Object { context, name }
    }
}

impl<C1, C2> MapContext<C1, C2> for ast::Assign<C1> {
    type Output = ast::Assign<C2>;

    fn map_context<F>(self, mapping: &mut F) -> Self::Output
    where
        F: FnMut(C1) -> C2,
    {
        let context = mapping(self.context);
        let name = self.name;
        let value = map_boxed(self.value, mapping);
        ast::Assign {
            context,
            name,
            value,
        }
    }
}

impl<C1, C2> MapContext<C1, C2> for ast::Block<C1> {
    type Output = ast::Block<C2>;

    fn map_context<F>(self, mapping: &mut F) -> Self::Output
    where
        F: FnMut(C1) -> C2,
    {
        let context = mapping(self.context);
        let expressions = map_all(self.expressions, mapping);
        ast::Block {
            context,
            expressions,
        }
    }
}

impl<C1, C2> MapContext<C1, C2> for ast::If<C1> {
    type Output = ast::If<C2>;

    fn map_context<F>(self, mapping: &mut F) -> Self::Output
    where
        F: FnMut(C1) -> C2,
    {
        let context = mapping(self.context);
        let condition = map_boxed(self.condition, mapping);
        let then_branch = map_boxed(self.then_branch, mapping);
        let else_branch = map_boxed(self.else_branch, mapping);
        ast::If {
            context,
            condition,
            then_branch,
            else_branch,
        }
    }
}

impl<C1, C2> MapContext<C1, C2> for ast::While<C1> {
    type Output = ast::While<C2>;

    fn map_context<F>(self, mapping: &mut F) -> Self::Output
    where
        F: FnMut(C1) -> C2,
    {
        let context = mapping(self.context);
        let condition = map_boxed(self.condition, mapping);
        let body = map_boxed(self.body, mapping);
        ast::While {
            context,
            condition,
            body,
        }
    }
}

impl<C1, C2> MapContext<C1, C2> for ast::Let<C1> {
    type Output = ast::Let<C2>;

    fn map_context<F>(self, mapping: &mut F) -> Self::Output
    where
        F: FnMut(C1) -> C2,
    {
        let context = mapping(self.context);
        let name = self.name;
        let type_name = self.type_name;
        let initializer = map_boxed(self.initializer, mapping);
        let body = map_boxed(self.body, mapping);
        ast::Let {
            context,
            name,
            type_name,
            initializer,
            body,
        }
    }
}

impl<C1, C2> MapContext<C1, C2> for ast::Case<C1> {
    type Output = ast::Case<C2>;

    fn map_context<F>(self, mapping: &mut F) -> Self::Output
    where
        F: FnMut(C1) -> C2,
    {
        let context = mapping(self.context);
        let expression = map_boxed(self.expression, mapping);
        let branches = map_all(self.branches, mapping);
        ast::Case {
            context,
            expression,
            branches,
        }
    }
}

impl<C1, C2> MapContext<C1, C2> for ast::CaseBranch<C1> {
    type Output = ast::CaseBranch<C2>;

    fn map_context<F>(self, mapping: &mut F) -> Self::Output
    where
        F: FnMut(C1) -> C2,
    {
        let context = mapping(self.context);
        let name = self.name;
        let type_name = self.type_name;
        let body = self.body.map_context(mapping);
        ast::CaseBranch {
            context,
            name,
            type_name,
            body,
        }
    }
}

impl<C1, C2> MapContext<C1, C2> for ast::StaticDispatch<C1> {
    type Output = ast::StaticDispatch<C2>;

    fn map_context<F>(self, mapping: &mut F) -> Self::Output
    where
        F: FnMut(C1) -> C2,
    {
        let context = mapping(self.context);
        let object = map_boxed(self.object, mapping);
        let type_name = self.type_name;
        let method = self.method;
        let arguments = map_all(self.arguments, mapping);
        ast::StaticDispatch {
            context,
            object,
            type_name,
            method,
            arguments,
        }
    }
}

impl<C1, C2> MapContext<C1, C2> for ast::DynamicDispatch<C1> {
    type Output = ast::DynamicDispatch<C2>;

    fn map_context<F>(self, mapping: &mut F) -> Self::Output
    where
        F: FnMut(C1) -> C2,
    {
        let context = mapping(self.context);
        let object = map_boxed(self.object, mapping);
        let method = self.method;
        let arguments = map_all(self.arguments, mapping);
        ast::DynamicDispatch {
            context,
            object,
            method,
            arguments,
        }
    }
}

impl<C1, C2> MapContext<C1, C2> for ast::NoExpr<C1> {
    type Output = ast::NoExpr<C2>;

    fn map_context<F>(self, mapping: &mut F) -> Self::Output
    where
        F: FnMut(C1) -> C2,
    {
        let context = mapping(self.context);
        ast::NoExpr { context }
    }
}
