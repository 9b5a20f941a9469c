//! Common error types and utilities.
use std::io;
use std::result;

use crate::ast;

/// An error that occurs while a visitor in this crate consumes an AST.
#[derive(Debug, Fail)]
pub enum Error {
    /// The output sink rejected data while a node was being written.
    #[fail(display = "failed to write {} node", kind)]
    Write {
        /// The kind of the node that was being processed.
        kind: ast::Kind,
        /// The underlying I/O failure.
        #[cause]
        cause: io::Error,
    },
    /// Rendering a graph representation failed.
    #[fail(display = "failed to render AST graph")]
    Render {
        /// The underlying I/O failure.
        #[cause]
        cause: io::Error,
    },
}

/// A convenience result wrapper for the [`Error`] type.
pub type Result<A> = result::Result<A, Error>;

impl Error {
    /// The kind of the node being processed when this error occurred, if any.
    pub fn kind(&self) -> Option<ast::Kind> {
        match *self {
            Error::Write { kind, .. } => Some(kind),
            Error::Render { .. } => None,
        }
    }
}
