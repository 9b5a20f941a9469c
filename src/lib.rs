//! The abstract syntax tree of a COOL compiler front end, and the visitor framework that every
//! pass over it is built on.
//!
//! A parser builds a [`ast::Program`] bottom-up; after that the tree is read-only.  Passes such as
//! dumping, semantic checking or code generation implement [`ast::Visitor`] and are driven over
//! the tree by [`ast::AstNode::dispatch`], which fixes the order in which nodes are reached.
//!
//! # Examples
//!
//! ```
//! use cool_ast::ast;
//!
//! let class = ast::Class {
//!     context: (),
//!     name: "Main".to_owned(),
//!     parent: "IO".to_owned(),
//!     features: vec![ast::Feature::Attribute(ast::Attribute {
//!         context: (),
//!         name: "x".to_owned(),
//!         type_name: "Int".to_owned(),
//!         initializer: ast::Expression::NoExpr(ast::NoExpr { context: () }),
//!     })],
//! };
//!
//! let program = ast::Program {
//!     context: (),
//!     classes: vec![class],
//! };
//!
//! assert_eq!(
//!     cool_ast::pretty::to_string(&program),
//!     "Program\n  Class Main\n    Attribute x\n      NoExpr\n"
//! );
//! ```
#![deny(nonstandard_style)]
#![warn(
    unused,
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]
#![cfg_attr(feature = "cargo-clippy", deny(clippy::all))]

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;

pub mod ast;
pub mod error;
pub mod graph;
pub mod pretty;

#[cfg(test)]
mod test_util;

pub use crate::error::Error;
pub use crate::error::Result;
