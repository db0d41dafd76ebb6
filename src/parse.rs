//! Recursive-descent parser
//!
//! Precedence-climbing over an immutable token slice with an index cursor.
//! Repeated uses of an associative operator accumulate into one flat n-ary
//! node instead of nested binary nodes; a tighter-binding operator is parsed
//! as a bounded sub-chain and spliced back in as a single term; at equal
//! precedence, a different operator closes the current chain and the folded
//! node becomes the first term of the new one (left-associative grouping).
//!
//! Binary-only operators (`NAND`, `NOR`, `->`) never enter the accumulator:
//! they are built immediately as binary nodes, and `p -> q -> r` nests to
//! the right as `p -> (q -> r)`.

use crate::error::{Error, Result};
use crate::expr::Expression;
use crate::op::{OperatorKind, Registry};
use crate::token::{is_identifier, tokenize};

const TERM_EXPECTED: &str = "a variable, a constant, `~`, or `(`";
const OPERATION_EXPECTED: &str = "an operation or end of input";

/// Parse a formula with the default operator registry
pub fn parse(source: &str) -> Result<Expression> {
    parse_with(&Registry::default(), source)
}

/// Parse a formula against a caller-supplied operator registry
pub fn parse_with(registry: &Registry, source: &str) -> Result<Expression> {
    let tokens = tokenize(source);
    Parser::new(registry, &tokens).parse()
}

/// Token-slice parser; one instance per (sub-)expression
pub struct Parser<'a> {
    registry: &'a Registry,
    tokens: &'a [String],
    pos: usize,
}

impl<'a> Parser<'a> {
    pub fn new(registry: &'a Registry, tokens: &'a [String]) -> Parser<'a> {
        Parser {
            registry,
            tokens,
            pos: 0,
        }
    }

    /// Parse the whole token slice as one expression
    pub fn parse(mut self) -> Result<Expression> {
        let first = self.term()?;
        self.chain(first, None)
    }

    fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.pos).map(String::as_str)
    }

    fn bump(&mut self) -> Option<&'a str> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Read one term: a constant, a variable, a negation, or a
    /// parenthesized sub-expression
    fn term(&mut self) -> Result<Expression> {
        let Some(token) = self.bump() else {
            return Err(Error::syntax(TERM_EXPECTED, None));
        };

        match token {
            "T" => Ok(Expression::Literal(true)),
            "F" => Ok(Expression::Literal(false)),
            "~" | "\u{ac}" => Ok(Expression::not(self.term()?)),
            "(" => {
                let start = self.pos;
                let mut depth = 1usize;
                while let Some(next) = self.bump() {
                    match next {
                        "(" => depth += 1,
                        ")" => {
                            depth -= 1;
                            if depth == 0 {
                                let inner = &self.tokens[start..self.pos - 1];
                                return Parser::new(self.registry, inner).parse();
                            }
                        }
                        _ => {}
                    }
                }
                Err(Error::syntax("`)`", None))
            }
            _ if is_identifier(token) => Ok(Expression::var(token)),
            _ => Err(Error::syntax(TERM_EXPECTED, Some(token))),
        }
    }

    /// Continue parsing the operator chain whose first term is `first`.
    ///
    /// `limit` is an exclusive precedence bound: an operator at or above
    /// it ends this chain without being consumed, so the caller can see it.
    fn chain(&mut self, first: Expression, limit: Option<u8>) -> Result<Expression> {
        let mut kind: Option<OperatorKind> = None;
        let mut terms: Vec<Expression> = Vec::new();
        let mut pending = first;

        loop {
            let Some(token) = self.peek() else {
                return finish(kind, terms, pending);
            };
            let Some(op) = self.registry.resolve(token) else {
                return Err(Error::syntax(OPERATION_EXPECTED, Some(token)));
            };
            if limit.is_some_and(|bound| op.precedence() >= bound) {
                return finish(kind, terms, pending);
            }

            match kind {
                Some(current) if op.precedence() < current.precedence() => {
                    // a tighter operator continues inside the pending term
                    pending = self.chain(pending, Some(current.precedence()))?;
                }
                Some(current) if op == current => {
                    self.bump();
                    terms.push(pending);
                    pending = self.term()?;
                }
                Some(current) => {
                    // looser, or same precedence but a different kind:
                    // close the chain and reprocess the operator with the
                    // folded node as the new first term
                    terms.push(pending);
                    pending = Expression::nary(current, std::mem::take(&mut terms))?;
                    kind = None;
                }
                None if op.associative() => {
                    self.bump();
                    kind = Some(op);
                    terms.push(pending);
                    pending = self.term()?;
                }
                None => {
                    self.bump();
                    let rhs = self.nonassoc_rhs(op)?;
                    pending = Expression::nary(op, vec![pending, rhs])?;
                }
            }
        }
    }

    /// Right-hand side of a binary-only operator: everything that binds
    /// tighter, plus right-nesting for a repeated use of the same operator
    fn nonassoc_rhs(&mut self, op: OperatorKind) -> Result<Expression> {
        let first = self.term()?;
        let mut rhs = self.chain(first, Some(op.precedence()))?;
        if self.peek().and_then(|token| self.registry.resolve(token)) == Some(op) {
            self.bump();
            let rest = self.nonassoc_rhs(op)?;
            rhs = Expression::nary(op, vec![rhs, rest])?;
        }
        Ok(rhs)
    }
}

fn finish(
    kind: Option<OperatorKind>,
    mut terms: Vec<Expression>,
    pending: Expression,
) -> Result<Expression> {
    match kind {
        None => Ok(pending),
        Some(kind) => {
            terms.push(pending);
            Expression::nary(kind, terms)
        }
    }
}
