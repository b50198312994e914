use chem_ast::ast::{FormulaNode, GroupNode, UnitNode};
use chem_ast::visit::{walk_group, VisitResult, Visitor};
use chem_lexer::lexer::Lexer;
use chem_lexer::token::Token;
use chem_parser::parser::{
    ensure_usable, parse_formula_with_diagnostics, render_snippet, TokenSlice,
};
use serde::Serialize;

/// Structural tallies for a parsed formula.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct FormulaStats {
    /// Number of element units written in the formula.
    pub units: usize,
    /// Number of parenthesized groups.
    pub groups: usize,
    /// Deepest group nesting; 0 for a group-free formula.
    pub max_depth: usize,
    /// Element units after multiplying out unit and group counts, e.g. 9
    /// for `(H2O)3`. `None` when the arithmetic leaves u64.
    pub expanded_units: Option<u64>,
}

/// Outcome of checking one formula string.
#[derive(Debug, Serialize)]
pub struct FormulaReport {
    /// The input as given.
    pub formula: String,
    /// The grammar's verdict.
    pub valid: bool,
    /// Guard rejection: absent, empty, or whitespace-bearing input.
    /// Distinct from a grammar problem, which is an ordinary `valid: false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Rendered parse diagnostic for grammar problems.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<FormulaStats>,
    /// The parsed tree, when the formula is valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ast: Option<FormulaNode>,
}

/// Walks a formula tree tallying units, groups, nesting depth, and the
/// multiplied-out unit total.
struct StatsCollector {
    stats: FormulaStats,
    depth: usize,
    // Product of the counts of every enclosing group; None after overflow
    scale: Option<u64>,
}

impl StatsCollector {
    fn new() -> Self {
        StatsCollector {
            stats: FormulaStats {
                expanded_units: Some(0),
                ..FormulaStats::default()
            },
            depth: 0,
            scale: Some(1),
        }
    }
}

impl Visitor for StatsCollector {
    fn visit_unit(&mut self, node: &UnitNode) -> VisitResult {
        self.stats.units += 1;
        let per_unit = match &node.count {
            Some(count) => count.value().ok(),
            None => Some(1),
        };
        self.stats.expanded_units = match (self.stats.expanded_units, self.scale, per_unit) {
            (Some(total), Some(scale), Some(per)) => {
                scale.checked_mul(per).and_then(|n| total.checked_add(n))
            }
            _ => None,
        };
        Ok(())
    }

    fn visit_group(&mut self, node: &GroupNode) -> VisitResult {
        self.stats.groups += 1;
        self.depth += 1;
        self.stats.max_depth = self.stats.max_depth.max(self.depth);

        let saved_scale = self.scale;
        self.scale = match (self.scale, node.count.value().ok()) {
            (Some(scale), Some(count)) => scale.checked_mul(count),
            _ => None,
        };
        walk_group(self, node)?;
        self.scale = saved_scale;
        self.depth -= 1;
        Ok(())
    }
}

/// Compute structural tallies for a parsed formula.
pub fn formula_stats(formula: &FormulaNode) -> FormulaStats {
    let mut collector = StatsCollector::new();
    // The collector never errors; traversal is total
    collector
        .visit_formula(formula)
        .expect("stats traversal is infallible");
    collector.stats
}

/// Check one formula string and build a report.
///
/// Guard violations surface in `error`; grammar problems surface as
/// `valid: false` with a rendered snippet in `diagnostic`.
pub fn check_formula(formula: Option<&str>) -> FormulaReport {
    let display = formula.unwrap_or_default().to_string();
    let source = match ensure_usable(formula) {
        Ok(source) => source,
        Err(err) => {
            return FormulaReport {
                formula: display,
                valid: false,
                error: Some(err.to_string()),
                diagnostic: None,
                stats: None,
                ast: None,
            }
        }
    };

    let tokens: Vec<Token> = Lexer::new(source).collect();
    match parse_formula_with_diagnostics(TokenSlice::new(&tokens)) {
        Ok(ast) => FormulaReport {
            formula: display,
            valid: true,
            error: None,
            diagnostic: None,
            stats: Some(formula_stats(&ast)),
            ast: Some(ast),
        },
        Err(diag) => FormulaReport {
            formula: display,
            valid: false,
            error: None,
            diagnostic: Some(render_snippet(&diag, source)),
            stats: None,
            ast: None,
        },
    }
}
