//! Logical arguments
//!
//! An argument is a list of premises and a conclusion. It is valid when
//! the premises, taken together, entail the conclusion, i.e. when
//! `premises -> conclusion` is a tautology.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::expr::Expression;
use crate::op::OperatorKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    pub premises: Vec<Expression>,
    pub conclusion: Expression,
}

impl Argument {
    pub fn new(premises: Vec<Expression>, conclusion: Expression) -> Self {
        Argument {
            premises,
            conclusion,
        }
    }

    /// Whether the conclusion follows from the premises on every
    /// assignment. With no premises this asks whether the conclusion is
    /// itself a tautology.
    pub fn is_valid(&self) -> Result<bool> {
        let premise = match self.premises.as_slice() {
            [] => return self.conclusion.is_tautology(),
            [single] => single.clone(),
            _ => Expression::nary_unchecked(OperatorKind::And, self.premises.clone()),
        };
        Expression::nary_unchecked(
            OperatorKind::Conditional,
            vec![premise, self.conclusion.clone()],
        )
        .is_tautology()
    }
}
