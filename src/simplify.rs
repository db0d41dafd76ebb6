//! Rewrite-rule simplifier
//!
//! A fixed, ordered table of pure rewrite rules. Each rule either returns
//! an equivalent simpler expression or returns its input unchanged to
//! signal "does not apply" (detected by positional equality). One call to
//! [`simplify`] performs exactly one rewrite: the first rule that changes
//! the root wins; if none applies, the first sub-term whose simplification
//! differs is substituted; if nothing anywhere changes, the expression is
//! already in normal form.
//!
//! Distributive-law rewriting is deliberately not in the table, so the
//! normal form makes no DNF/CNF claim.

use crate::expr::Expression;
use crate::op::OperatorKind;

type Rule = fn(&Expression) -> Expression;

const RULES: &[Rule] = &[
    absorb_constants,
    double_negation,
    negated_literal,
    expand_conditional,
    expand_biconditional,
    unfold_nand_nor,
    distribute_not,
];

/// Perform one simplification step, or return the input unchanged if it
/// is already in normal form
pub fn simplify(expr: &Expression) -> Expression {
    for rule in RULES {
        let next = rule(expr);
        if next != *expr {
            return next;
        }
    }

    // no rule applies at the root: rewrite the first sub-term that changes
    match expr {
        Expression::Not(term) => {
            let next = simplify(term);
            if next != **term {
                return Expression::not(next);
            }
        }
        Expression::Operation { kind, terms } => {
            for (index, term) in terms.iter().enumerate() {
                let next = simplify(term);
                if next != *term {
                    let mut rebuilt = terms.clone();
                    rebuilt[index] = next;
                    return Expression::nary_unchecked(*kind, rebuilt);
                }
            }
        }
        Expression::Literal(_) | Expression::Var(_) => {}
    }
    expr.clone()
}

/// Apply [`simplify`] to a fixpoint, returning every intermediate form,
/// the original included
pub fn simplification_steps(expr: &Expression) -> Vec<Expression> {
    let mut current = expr.clone();
    let mut steps = vec![current.clone()];
    loop {
        let next = simplify(&current);
        if next == current {
            return steps;
        }
        steps.push(next.clone());
        current = next;
    }
}

/// An And with a false term collapses to false and sheds true terms;
/// symmetrically for Or with true/false swapped
fn absorb_constants(expr: &Expression) -> Expression {
    let Expression::Operation { kind, terms } = expr else {
        return expr.clone();
    };
    let absorbing = match kind {
        OperatorKind::And => false,
        OperatorKind::Or => true,
        _ => return expr.clone(),
    };

    if terms.contains(&Expression::Literal(absorbing)) {
        return Expression::Literal(absorbing);
    }
    let mut rest: Vec<Expression> = terms
        .iter()
        .filter(|term| **term != Expression::Literal(!absorbing))
        .cloned()
        .collect();
    if rest.len() == terms.len() {
        return expr.clone();
    }
    match rest.len() {
        0 => Expression::Literal(!absorbing),
        1 => rest.remove(0),
        _ => Expression::nary_unchecked(*kind, rest),
    }
}

/// `~~x` → `x`
fn double_negation(expr: &Expression) -> Expression {
    if let Expression::Not(term) = expr {
        if let Expression::Not(inner) = &**term {
            return (**inner).clone();
        }
    }
    expr.clone()
}

/// `~T` → `F`, `~F` → `T`
fn negated_literal(expr: &Expression) -> Expression {
    if let Expression::Not(term) = expr {
        if let Expression::Literal(value) = **term {
            return Expression::Literal(!value);
        }
    }
    expr.clone()
}

/// `p -> q` → `~p v q`
fn expand_conditional(expr: &Expression) -> Expression {
    if let Expression::Operation {
        kind: OperatorKind::Conditional,
        terms,
    } = expr
    {
        if let [p, q] = terms.as_slice() {
            return Expression::nary_unchecked(
                OperatorKind::Or,
                vec![Expression::not(p.clone()), q.clone()],
            );
        }
    }
    expr.clone()
}

/// `p <-> q` → `(p -> q) ^ (q -> p)`; longer chains are first left-paired
/// into nested binary biconditionals
fn expand_biconditional(expr: &Expression) -> Expression {
    let Expression::Operation {
        kind: OperatorKind::Biconditional,
        terms,
    } = expr
    else {
        return expr.clone();
    };
    match terms.as_slice() {
        [p, q] => {
            let forward =
                Expression::nary_unchecked(OperatorKind::Conditional, vec![p.clone(), q.clone()]);
            let backward =
                Expression::nary_unchecked(OperatorKind::Conditional, vec![q.clone(), p.clone()]);
            Expression::nary_unchecked(OperatorKind::And, vec![forward, backward])
        }
        [first, rest @ ..] => rest.iter().fold(first.clone(), |acc, term| {
            Expression::nary_unchecked(OperatorKind::Biconditional, vec![acc, term.clone()])
        }),
        [] => expr.clone(),
    }
}

/// `p NAND q` → `~(p ^ q)`; `p NOR q` → `~(p v q)`
fn unfold_nand_nor(expr: &Expression) -> Expression {
    if let Expression::Operation { kind, terms } = expr {
        let unfolded = match kind {
            OperatorKind::Nand => OperatorKind::And,
            OperatorKind::Nor => OperatorKind::Or,
            _ => return expr.clone(),
        };
        return Expression::not(Expression::nary_unchecked(unfolded, terms.clone()));
    }
    expr.clone()
}

/// De Morgan: `~(p ^ q)` → `~p v ~q`, `~(p v q)` → `~p ^ ~q`
fn distribute_not(expr: &Expression) -> Expression {
    if let Expression::Not(term) = expr {
        if let Expression::Operation { kind, terms } = &**term {
            let dual = match kind {
                OperatorKind::And => OperatorKind::Or,
                OperatorKind::Or => OperatorKind::And,
                _ => return expr.clone(),
            };
            let negated = terms
                .iter()
                .map(|inner| Expression::not(inner.clone()))
                .collect();
            return Expression::nary_unchecked(dual, negated);
        }
    }
    expr.clone()
}
