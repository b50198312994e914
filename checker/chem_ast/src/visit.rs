//! Span bookkeeping and a visitor for traversing a parsed formula.
//!
//! Implement [`Visitor`] to walk the tree; the default methods recurse via
//! the `walk_*` helpers and do nothing else, so an implementation only
//! overrides the nodes it cares about.

use crate::ast::{CountNode, FormulaNode, GroupNode, ItemNode, UnitNode};
use chem_lexer::token::Token;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A half-open byte range in the input, with the line and column of its
/// first byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: u32,
    pub column: u32,
}

impl Span {
    /// Span covering a single token.
    pub fn of_token(token: &Token) -> Self {
        Span {
            start: token.location.offset,
            end: token.location.offset + token.lexeme.len(),
            line: token.location.line as u32,
            column: token.location.column as u32,
        }
    }

    /// Smallest span covering both `a` and `b`. Position information is
    /// taken from the earlier of the two.
    pub fn merge(a: Span, b: Span) -> Self {
        let (first, _) = if a.start <= b.start { (a, b) } else { (b, a) };
        Span {
            start: a.start.min(b.start),
            end: a.end.max(b.end),
            line: first.line,
            column: first.column,
        }
    }
}

/// The result type for visitor operations.
pub type VisitResult<T = ()> = Result<T, VisitError>;

/// An error that can occur during tree traversal.
#[derive(Debug, thiserror::Error)]
pub enum VisitError {
    /// An error with a custom message.
    #[error("{0}")]
    Custom(String),
}

impl VisitError {
    /// Creates a new custom error with the given message.
    pub fn custom<T: Into<String>>(msg: T) -> Self {
        VisitError::Custom(msg.into())
    }
}

/// A visitor for traversing a formula tree.
pub trait Visitor {
    fn visit_formula(&mut self, node: &FormulaNode) -> VisitResult {
        walk_formula(self, node)
    }

    fn visit_item(&mut self, node: &ItemNode) -> VisitResult {
        walk_item(self, node)
    }

    fn visit_unit(&mut self, node: &UnitNode) -> VisitResult {
        walk_unit(self, node)
    }

    fn visit_group(&mut self, node: &GroupNode) -> VisitResult {
        walk_group(self, node)
    }

    fn visit_count(&mut self, _node: &CountNode) -> VisitResult {
        Ok(())
    }
}

/// Visit every item of a formula in source order.
pub fn walk_formula<V: Visitor + ?Sized>(visitor: &mut V, node: &FormulaNode) -> VisitResult {
    for item in &node.items {
        visitor.visit_item(item)?;
    }
    Ok(())
}

/// Dispatch an item to the unit or group visit method.
pub fn walk_item<V: Visitor + ?Sized>(visitor: &mut V, node: &ItemNode) -> VisitResult {
    match node {
        ItemNode::Unit(unit) => visitor.visit_unit(unit),
        ItemNode::Group(group) => visitor.visit_group(group),
    }
}

/// Visit a unit's count, if it has one.
pub fn walk_unit<V: Visitor + ?Sized>(visitor: &mut V, node: &UnitNode) -> VisitResult {
    if let Some(count) = &node.count {
        visitor.visit_count(count)?;
    }
    Ok(())
}

/// Visit a group's interior items, then its count.
pub fn walk_group<V: Visitor + ?Sized>(visitor: &mut V, node: &GroupNode) -> VisitResult {
    for item in &node.items {
        visitor.visit_item(item)?;
    }
    visitor.visit_count(&node.count)
}
