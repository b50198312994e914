// AST definitions for chemical-formula notation. A formula is a sequence
// of element units and counted groups; groups nest arbitrarily deep.

use crate::visit::Span;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A count suffix as written in the formula, e.g. the `12` in `(OH)12`.
///
/// The digits are kept verbatim. Legal counts are a single digit 2-9 or a
/// number of 10 and up with no leading zero; the parser only constructs
/// `CountNode`s for legal counts.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CountNode {
    pub digits: String,
    pub span: Span,
}

/// A count whose digits do not fit in a `u64`.
///
/// The grammar puts no upper bound on counts, so a syntactically valid
/// formula can still carry a count too large to use as a number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("count `{digits}` does not fit in 64 bits")]
pub struct CountOverflowError {
    /// The digits exactly as written.
    pub digits: String,
}

impl CountNode {
    /// Numeric value of the count.
    pub fn value(&self) -> Result<u64, CountOverflowError> {
        self.digits.parse::<u64>().map_err(|_| CountOverflowError {
            digits: self.digits.clone(),
        })
    }
}

/// One element symbol with its optional count: `O`, `H2`, `Uuo128`.
///
/// An absent count means a count of one; writing `1` out is not legal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnitNode {
    pub symbol: String,
    pub count: Option<CountNode>,
    pub span: Span,
}

/// A parenthesized sub-formula with its count: `(NaCl)2`, `((OH2)3Pr)4`.
///
/// The count is not optional. A group with nothing to multiply is invalid,
/// and the type keeps that rule out of reach of constructing code.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GroupNode {
    pub items: Vec<ItemNode>,
    pub count: CountNode,
    pub span: Span,
}

/// One building block of a formula.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ItemNode {
    Unit(UnitNode),
    Group(GroupNode),
}

impl ItemNode {
    /// The span this item covers.
    pub fn span(&self) -> Span {
        match self {
            ItemNode::Unit(unit) => unit.span,
            ItemNode::Group(group) => group.span,
        }
    }
}

/// A whole formula: one or more items, no separators.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormulaNode {
    pub items: Vec<ItemNode>,
    pub span: Span,
}

impl FormulaNode {
    /// True when no group appears anywhere in the tree. Groups only ever
    /// nest inside other groups, so checking the top level is enough.
    pub fn is_group_free(&self) -> bool {
        self.items
            .iter()
            .all(|item| !matches!(item, ItemNode::Group(_)))
    }
}
