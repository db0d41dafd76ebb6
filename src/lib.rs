// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # proplogic — propositional logic toolkit
//!
//! Parse, evaluate, compare, and simplify propositional-logic
//! expressions.
//!
//! Expressions are built from variables, the constants `T` and `F`,
//! negation (`~`), and n-ary operations over a fixed set of connectives
//! (and, or, xor, nand, nor, conditional, biconditional). The parser
//! accepts a configurable table of operator spellings, so `p ^ q`,
//! `p AND q`, and `p ∧ q` all mean the same thing.
//!
//! ## Quick Start
//!
//! ```
//! use proplogic::{parse, TruthTable};
//!
//! let expr = parse("p ^ q -> r")?;
//! assert_eq!(expr.to_string(), "p ^ q -> r");
//!
//! // three variables, eight rows, first row all-true
//! let table = TruthTable::new(&expr)?;
//! assert_eq!(table.rows().len(), 8);
//!
//! // semantic checks run over the whole table
//! assert!(parse("p v ~p")?.is_tautology()?);
//! assert!(parse("p -> q")?.equivalent_to(&parse("~p v q")?)?);
//! # Ok::<(), proplogic::Error>(())
//! ```

pub mod argument;
pub mod error;
pub mod expr;
pub mod op;
pub mod parse;
pub mod simplify;
pub mod table;
pub mod token;

pub use argument::Argument;
pub use error::{Error, Result};
pub use expr::{Assignment, Expression, FALSE, TRUE};
pub use op::{OperatorKind, Registry};
pub use parse::{parse, parse_with};
pub use simplify::{simplification_steps, simplify};
pub use table::{TruthTable, TruthTableRow, DEFAULT_VARIABLE_LIMIT};
pub use token::tokenize;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
