//! Syntax tree for chemical-formula notation.
//!
//! This crate defines the nodes a parsed formula is made of, along with
//! span bookkeeping and a visitor for walking the tree.

pub mod ast;
pub mod visit;

// Re-export commonly used types
pub use ast::{CountNode, CountOverflowError, FormulaNode, GroupNode, ItemNode, UnitNode};
pub use visit::{Span, VisitResult, Visitor};
