//! Graph rendering tools for COOL ASTs.
//!
//! Use this module to inspect the shape of a tree visually.  The graph is built by walking the
//! tree with the standard driver, so node numbers follow traversal order.
use std::borrow;
use std::convert;
use std::io;
use std::vec;

use crate::ast;
use crate::ast::node::AstNode;
use crate::ast::node::NodeRef;
use crate::ast::node::Slot;
use crate::ast::visitor::Visitor;
use crate::ast::walk;
use crate::error;

/// A graph representation of an AST.
#[derive(Clone, Debug)]
pub struct Graph {
    labels: Vec<String>,
    edges: Vec<Edge>,
}

/// A node in the AST graph; the number is the position of the node in traversal order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Node(pub usize);

/// An edge in the AST graph, from a parent to one of its children.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Edge {
    /// The parent node.
    pub source: Node,
    /// The child node.
    pub target: Node,
    /// The slot the child occupies in the parent.
    pub slot: Slot,
}

#[derive(Debug)]
struct GraphBuilder {
    labels: Vec<String>,
    edges: Vec<Edge>,
    open: Vec<(Node, vec::IntoIter<Slot>)>,
}

impl Graph {
    /// Creates a new graph of the tree rooted at `root`.
    pub fn new<N, C>(root: &N) -> Graph
    where
        N: AstNode<C> + ?Sized,
    {
        let root = root.as_node();
        let mut builder = GraphBuilder {
            labels: Vec::with_capacity(walk::count_nodes(root)),
            edges: Vec::new(),
            open: Vec::new(),
        };

        walk::walk(root, &mut builder).unwrap_or_else(|never| match never {});
        debug!(
            "built AST graph with {} nodes and {} edges",
            builder.labels.len(),
            builder.edges.len()
        );

        Graph {
            labels: builder.labels,
            edges: builder.edges,
        }
    }

    /// The number of nodes in this graph.
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// The label of the specified node, if it belongs to this graph.
    pub fn label(&self, node: Node) -> Option<&str> {
        self.labels.get(node.0).map(String::as_str)
    }

    /// The edges of this graph, in traversal order of their target nodes.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Writes this graph in the GraphViz DOT format.
    ///
    /// # Errors
    ///
    /// Fails with [`error::Error::Render`] if `out` rejects data.
    pub fn render<W>(&self, out: &mut W) -> error::Result<()>
    where
        W: io::Write,
    {
        dot::render(self, out).map_err(|cause| error::Error::Render { cause })
    }
}

impl<'a> dot::GraphWalk<'a, Node, Edge> for Graph {
    fn nodes(&'a self) -> borrow::Cow<'a, [Node]> {
        borrow::Cow::Owned((0..self.labels.len()).map(Node).collect())
    }

    fn edges(&'a self) -> borrow::Cow<'a, [Edge]> {
        borrow::Cow::Borrowed(&self.edges)
    }

    fn source(&'a self, edge: &Edge) -> Node {
        edge.source
    }

    fn target(&'a self, edge: &Edge) -> Node {
        edge.target
    }
}

impl<'a> dot::Labeller<'a, Node, Edge> for Graph {
    fn graph_id(&'a self) -> dot::Id<'a> {
        dot::Id::new("ast").unwrap()
    }

    fn node_id(&'a self, n: &Node) -> dot::Id<'a> {
        dot::Id::new(format!("n{}", n.0)).unwrap()
    }

    fn node_label(&'a self, n: &Node) -> dot::LabelText<'a> {
        dot::LabelText::LabelStr(self.labels[n.0].as_str().into())
    }

    fn edge_label(&'a self, e: &Edge) -> dot::LabelText<'a> {
        dot::LabelText::LabelStr(e.slot.to_string().into())
    }
}

impl<C> Visitor<C> for GraphBuilder {
    type Error = convert::Infallible;

    fn pre_visit_node(&mut self, node: NodeRef<'_, C>) -> Result<bool, Self::Error> {
        let id = Node(self.labels.len());

        self.labels.push(match node.payload() {
            Some(payload) => format!("{} {}", node.kind(), payload),
            None => node.kind().to_string(),
        });

        if let Some((parent, slots)) = self.open.last_mut() {
            if let Some(slot) = slots.next() {
                self.edges.push(Edge {
                    source: *parent,
                    target: id,
                    slot,
                });
            }
        }

        let slots = node.slots().into_iter().map(|(slot, _)| slot).collect::<Vec<_>>();
        self.open.push((id, slots.into_iter()));

        Ok(false)
    }

    fn post_visit_node(&mut self, _node: NodeRef<'_, C>) -> Result<(), Self::Error> {
        self.open.pop();
        Ok(())
    }

    fn visit_program(&mut self, _program: &ast::Program<C>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_class(&mut self, _class: &ast::Class<C>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_attribute(&mut self, _attribute: &ast::Attribute<C>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_method(&mut self, _method: &ast::Method<C>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_formal(&mut self, _formal: &ast::Formal<C>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_string_const(&mut self, _string: &ast::StringConst<C>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_int_const(&mut self, _int: &ast::IntConst<C>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_bool_const(&mut self, _boolean: &ast::BoolConst<C>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_new(&mut self, _new: &ast::New<C>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_is_void(&mut self, _is_void: &ast::UnaryOp<C>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_case_branch(&mut self, _branch: &ast::CaseBranch<C>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_assign(&mut self, _assign: &ast::Assign<C>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_block(&mut self, _block: &ast::Block<C>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_if(&mut self, _conditional: &ast::If<C>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_while(&mut self, _looping: &ast::While<C>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_complement(&mut self, _complement: &ast::UnaryOp<C>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_less_than(&mut self, _less_than: &ast::BinaryOp<C>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_equal_to(&mut self, _equal_to: &ast::BinaryOp<C>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_less_than_equal_to(
        &mut self,
        _less_than_equal_to: &ast::BinaryOp<C>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_plus(&mut self, _plus: &ast::BinaryOp<C>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_sub(&mut self, _sub: &ast::BinaryOp<C>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_mul(&mut self, _mul: &ast::BinaryOp<C>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_div(&mut self, _div: &ast::BinaryOp<C>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_not(&mut self, _not: &ast::UnaryOp<C>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_static_dispatch(
        &mut self,
        _dispatch: &ast::StaticDispatch<C>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_dynamic_dispatch(
        &mut self,
        _dispatch: &ast::DynamicDispatch<C>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_let(&mut self, _binding: &ast::Let<C>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_case(&mut self, _case: &ast::Case<C>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_object(&mut self, _object: &ast::Object<C>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_no_expr(&mut self, _no_expr: &ast::NoExpr<C>) -> Result<(), Self::Error> {
        Ok(())
    }
}
