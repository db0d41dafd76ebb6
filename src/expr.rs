//! The expression model
//!
//! Immutable AST for propositional formulas. Every operation here builds new
//! nodes; nothing mutates in place, so trees can be shared freely (including
//! across threads).
//!
//! Two equality notions are exposed: positional equality (`==`, derived) and
//! bag equality ([`Expression::same`]), which treats an operator's terms as an
//! unordered multiset.

use crate::error::{Error, Result};
use crate::op::OperatorKind;
use crate::table::TruthTable;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// A variable-name → truth-value mapping supplied at evaluation time
pub type Assignment = HashMap<String, bool>;

/// A propositional formula
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expression {
    /// The constants true/false
    Literal(bool),

    /// A named variable; case-sensitive
    Var(String),

    /// Negation of exactly one sub-expression
    Not(Box<Expression>),

    /// A variadic or strictly-binary connective applied to ordered terms
    Operation {
        kind: OperatorKind,
        terms: Vec<Expression>,
    },
}

/// The constant true
pub const TRUE: Expression = Expression::Literal(true);

/// The constant false
pub const FALSE: Expression = Expression::Literal(false);

impl Expression {
    pub fn literal(value: bool) -> Expression {
        Expression::Literal(value)
    }

    pub fn var(name: impl Into<String>) -> Expression {
        Expression::Var(name.into())
    }

    pub fn not(term: Expression) -> Expression {
        Expression::Not(Box::new(term))
    }

    /// Build an n-ary operation, enforcing the kind's arity range.
    ///
    /// Non-associative kinds require exactly 2 terms; associative kinds
    /// require at least 2.
    pub fn nary(kind: OperatorKind, terms: Vec<Expression>) -> Result<Expression> {
        let given = terms.len();
        if given < kind.min_terms() || kind.max_terms().is_some_and(|max| given > max) {
            return Err(Error::arity(kind, given));
        }
        Ok(Expression::Operation { kind, terms })
    }

    /// Build an operation whose term count is correct by construction
    /// (parser folding, rewrite rules).
    pub(crate) fn nary_unchecked(kind: OperatorKind, terms: Vec<Expression>) -> Expression {
        debug_assert!(terms.len() >= kind.min_terms());
        debug_assert!(kind.max_terms().is_none_or(|max| terms.len() <= max));
        Expression::Operation { kind, terms }
    }

    /// All variable names in the subtree, deduplicated, in ascending
    /// lexical order. This is the canonical column order for truth tables.
    pub fn get_names(&self) -> Vec<String> {
        let mut names = BTreeSet::new();
        self.collect_names(&mut names);
        names.into_iter().collect()
    }

    fn collect_names(&self, names: &mut BTreeSet<String>) {
        match self {
            Expression::Literal(_) => {}
            Expression::Var(name) => {
                names.insert(name.clone());
            }
            Expression::Not(term) => term.collect_names(names),
            Expression::Operation { terms, .. } => {
                for term in terms {
                    term.collect_names(names);
                }
            }
        }
    }

    /// Evaluate under an assignment. Terms of an n-ary node are evaluated
    /// left to right and the operator's binary rule is left-folded over
    /// them; for the non-commutative rules (Xor, Biconditional with more
    /// than two terms) that fold order is the defined semantics.
    pub fn evaluate(&self, assignment: &Assignment) -> Result<bool> {
        match self {
            Expression::Literal(value) => Ok(*value),
            Expression::Var(name) => assignment
                .get(name)
                .copied()
                .ok_or_else(|| Error::UnboundVariable(name.clone())),
            Expression::Not(term) => Ok(!term.evaluate(assignment)?),
            Expression::Operation { kind, terms } => {
                let mut acc = None;
                for term in terms {
                    let value = term.evaluate(assignment)?;
                    acc = Some(match acc {
                        None => value,
                        Some(prev) => kind.apply(prev, value),
                    });
                }
                // operation nodes always carry at least two terms
                Ok(acc.unwrap_or_default())
            }
        }
    }

    /// Bag (multiset) structural equality: same kind and term count, with
    /// every term matched against a remaining term of the other side
    /// regardless of order.
    pub fn same(&self, other: &Expression) -> bool {
        match (self, other) {
            (Expression::Literal(a), Expression::Literal(b)) => a == b,
            (Expression::Var(a), Expression::Var(b)) => a == b,
            (Expression::Not(a), Expression::Not(b)) => a.same(b),
            (
                Expression::Operation { kind: ka, terms: ta },
                Expression::Operation { kind: kb, terms: tb },
            ) => {
                if ka != kb || ta.len() != tb.len() {
                    return false;
                }
                let mut remaining: Vec<&Expression> = tb.iter().collect();
                for term in ta {
                    match remaining.iter().position(|candidate| term.same(candidate)) {
                        Some(index) => {
                            remaining.swap_remove(index);
                        }
                        None => return false,
                    }
                }
                true
            }
            _ => false,
        }
    }

    /// True iff every row of the truth table evaluates to true
    pub fn is_tautology(&self) -> Result<bool> {
        Ok(TruthTable::new(self)?.values().all(|value| value))
    }

    /// True iff no row of the truth table evaluates to true
    pub fn is_contradiction(&self) -> Result<bool> {
        Ok(!TruthTable::new(self)?.values().any(|value| value))
    }

    /// Logical equivalence: the biconditional of the two formulas is a
    /// tautology. Compare against text by parsing it first.
    pub fn equivalent_to(&self, other: &Expression) -> Result<bool> {
        Expression::nary_unchecked(
            OperatorKind::Biconditional,
            vec![self.clone(), other.clone()],
        )
        .is_tautology()
    }
}

/// Whether a child needs no brackets when rendered under `parent`.
/// `parent` is `None` for a `Not` parent.
fn flat(child: &Expression, parent: Option<OperatorKind>) -> bool {
    match child {
        Expression::Literal(_) | Expression::Var(_) | Expression::Not(_) => true,
        Expression::Operation { kind: child_kind, .. } => match parent {
            None => false,
            Some(parent_kind) => {
                (parent_kind == *child_kind && parent_kind.associative())
                    || parent_kind.precedence() > child_kind.precedence()
            }
        },
    }
}

fn fmt_child(
    f: &mut std::fmt::Formatter<'_>,
    child: &Expression,
    parent: Option<OperatorKind>,
) -> std::fmt::Result {
    if flat(child, parent) {
        write!(f, "{child}")
    } else {
        write!(f, "({child})")
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Literal(true) => f.write_str("T"),
            Expression::Literal(false) => f.write_str("F"),
            Expression::Var(name) => f.write_str(name),
            Expression::Not(term) => {
                f.write_str("~")?;
                fmt_child(f, term, None)
            }
            Expression::Operation { kind, terms } => {
                for (index, term) in terms.iter().enumerate() {
                    if index > 0 {
                        write!(f, " {} ", kind.symbol())?;
                    }
                    fmt_child(f, term, Some(*kind))?;
                }
                Ok(())
            }
        }
    }
}
