//! Pretty-printing of ASTs as indented text.
//!
//! The printer writes one line per node, in traversal order: the node's kind, followed by its
//! payload (literal value, identifier or type name) if it has one.  Each node is indented one
//! unit deeper than its parent, so the indentation of a line equals the number of ancestors of
//! its node.
//!
//! # Examples
//!
//! ```
//! use cool_ast::ast;
//!
//! let int = |value| Box::new(ast::Expression::IntConst(ast::IntConst { context: (), value }));
//! let sum = ast::Expression::Plus(ast::BinaryOp {
//!     context: (),
//!     lhs: int(1),
//!     rhs: int(2),
//! });
//!
//! assert_eq!(
//!     cool_ast::pretty::to_string(&sum),
//!     "Plus\n  IntConst 1\n  IntConst 2\n"
//! );
//! ```
use std::io;

use crate::ast;
use crate::ast::node::AstNode;
use crate::ast::node::NodeRef;
use crate::ast::visitor::Visitor;
use crate::error;


/// Configuration of a [`PrettyPrinter`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// The string written once per level of depth in front of each line.
    pub indent: String,
}

/// A visitor that dumps an AST as indented text.
///
/// A printer tracks the depth of the node it is currently writing, so an instance must not be
/// shared between traversals that run at the same time.
#[derive(Debug)]
pub struct PrettyPrinter<W> {
    out: W,
    depth: usize,
    config: Config,
}

/// Writes the tree rooted at `node` to `out`.
///
/// # Errors
///
/// Fails with [`error::Error::Write`] if `out` rejects data.
pub fn print<N, C, W>(node: &N, out: &mut W) -> error::Result<()>
where
    N: AstNode<C> + ?Sized,
    W: io::Write,
{
    let mut printer = PrettyPrinter::new(out);
    node.dispatch(&mut printer)
}

/// Renders the tree rooted at `node` to a string.
pub fn to_string<N, C>(node: &N) -> String
where
    N: AstNode<C> + ?Sized,
{
    let mut output = Vec::new();
    print(node, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            indent: "  ".to_owned(),
        }
    }
}

impl<W> PrettyPrinter<W>
where
    W: io::Write,
{
    /// Creates a printer writing to `out` with the default configuration.
    pub fn new(out: W) -> Self {
        PrettyPrinter::with_config(out, Config::default())
    }

    /// Creates a printer writing to `out` with the specified configuration.
    pub fn with_config(out: W, config: Config) -> Self {
        debug!("creating pretty printer with indent {:?}", config.indent);
        let depth = 0;
        PrettyPrinter { out, depth, config }
    }

    /// The depth of the next line this printer will write.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Consumes this printer, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line<C>(&mut self, node: NodeRef<'_, C>) -> io::Result<()> {
        for _ in 0..self.depth {
            self.out.write_all(self.config.indent.as_bytes())?;
        }

        match node.payload() {
            Some(payload) => writeln!(self.out, "{} {}", node.kind(), payload),
            None => writeln!(self.out, "{}", node.kind()),
        }
    }
}

impl<C, W> Visitor<C> for PrettyPrinter<W>
where
    W: io::Write,
{
    type Error = error::Error;

    fn pre_visit_node(&mut self, node: NodeRef<'_, C>) -> error::Result<bool> {
        let kind = node.kind();
        self.write_line(node)
            .map_err(|cause| error::Error::Write { kind, cause })?;
        self.depth += 1;
        Ok(false)
    }

    fn post_visit_node(&mut self, _node: NodeRef<'_, C>) -> error::Result<()> {
        self.depth -= 1;
        Ok(())
    }

    fn visit_program(&mut self, _program: &ast::Program<C>) -> error::Result<()> {
        Ok(())
    }

    fn visit_class(&mut self, _class: &ast::Class<C>) -> error::Result<()> {
        Ok(())
    }

    fn visit_attribute(&mut self, _attribute: &ast::Attribute<C>) -> error::Result<()> {
        Ok(())
    }

    fn visit_method(&mut self, _method: &ast::Method<C>) -> error::Result<()> {
        Ok(())
    }

    fn visit_formal(&mut self, _formal: &ast::Formal<C>) -> error::Result<()> {
        Ok(())
    }

    fn visit_string_const(&mut self, _string: &ast::StringConst<C>) -> error::Result<()> {
        Ok(())
    }

    fn visit_int_const(&mut self, _int: &ast::IntConst<C>) -> error::Result<()> {
        Ok(())
    }

    fn visit_bool_const(&mut self, _boolean: &ast::BoolConst<C>) -> error::Result<()> {
        Ok(())
    }

    fn visit_new(&mut self, _new: &ast::New<C>) -> error::Result<()> {
        Ok(())
    }

    fn visit_is_void(&mut self, _is_void: &ast::UnaryOp<C>) -> error::Result<()> {
        Ok(())
    }

    fn visit_case_branch(&mut self, _branch: &ast::CaseBranch<C>) -> error::Result<()> {
        Ok(())
    }

    fn visit_assign(&mut self, _assign: &ast::Assign<C>) -> error::Result<()> {
        Ok(())
    }

    fn visit_block(&mut self, _block: &ast::Block<C>) -> error::Result<()> {
        Ok(())
    }

    fn visit_if(&mut self, _conditional: &ast::If<C>) -> error::Result<()> {
        Ok(())
    }

    fn visit_while(&mut self, _looping: &ast::While<C>) -> error::Result<()> {
        Ok(())
    }

    fn visit_complement(&mut self, _complement: &ast::UnaryOp<C>) -> error::Result<()> {
        Ok(())
    }

    fn visit_less_than(&mut self, _less_than: &ast::BinaryOp<C>) -> error::Result<()> {
        Ok(())
    }

    fn visit_equal_to(&mut self, _equal_to: &ast::BinaryOp<C>) -> error::Result<()> {
        Ok(())
    }

    fn visit_less_than_equal_to(
        &mut self,
        _less_than_equal_to: &ast::BinaryOp<C>,
    ) -> error::Result<()> {
        Ok(())
    }

    fn visit_plus(&mut self, _plus: &ast::BinaryOp<C>) -> error::Result<()> {
        Ok(())
    }

    fn visit_sub(&mut self, _sub: &ast::BinaryOp<C>) -> error::Result<()> {
        Ok(())
    }

    fn visit_mul(&mut self, _mul: &ast::BinaryOp<C>) -> error::Result<()> {
        Ok(())
    }

    fn visit_div(&mut self, _div: &ast::BinaryOp<C>) -> error::Result<()> {
        Ok(())
    }

    fn visit_not(&mut self, _not: &ast::UnaryOp<C>) -> error::Result<()> {
        Ok(())
    }

    fn visit_static_dispatch(&mut self, _dispatch: &ast::StaticDispatch<C>) -> error::Result<()> {
        Ok(())
    }

    fn visit_dynamic_dispatch(&mut self, _dispatch: &ast::DynamicDispatch<C>) -> error::Result<()> {
        Ok(())
    }

    fn visit_let(&mut self, _binding: &ast::Let<C>) -> error::Result<()> {
        Ok(())
    }

    fn visit_case(&mut self, _case: &ast::Case<C>) -> error::Result<()> {
        Ok(())
    }

    fn visit_object(&mut self, _object: &ast::Object<C>) -> error::Result<()> {
        Ok(())
    }

    fn visit_no_expr(&mut self, _no_expr: &ast::NoExpr<C>) -> error::Result<()> {
        Ok(())
    }
}
