//! Operator kinds and the textual operator registry
//!
//! Connectives are a closed enum with static dispatch for display symbol,
//! precedence, arity bounds, associativity, and the binary evaluation rule.
//! Textual aliases live in [`Registry`], an explicitly constructed immutable
//! table that callers own and the parser borrows — alternate operator sets
//! are just alternate registries.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A logical connective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatorKind {
    And,
    Or,
    Xor,
    Nand,
    Nor,
    Conditional,
    Biconditional,
}

impl OperatorKind {
    /// Every kind, in display order
    pub const ALL: [OperatorKind; 7] = [
        OperatorKind::And,
        OperatorKind::Or,
        OperatorKind::Xor,
        OperatorKind::Nand,
        OperatorKind::Nor,
        OperatorKind::Conditional,
        OperatorKind::Biconditional,
    ];

    /// Canonical display symbol
    pub fn symbol(self) -> &'static str {
        match self {
            OperatorKind::And => "^",
            OperatorKind::Or => "v",
            OperatorKind::Xor => "XOR",
            OperatorKind::Nand => "NAND",
            OperatorKind::Nor => "NOR",
            OperatorKind::Conditional => "->",
            OperatorKind::Biconditional => "<->",
        }
    }

    /// Binding strength; lower binds tighter
    pub fn precedence(self) -> u8 {
        match self {
            OperatorKind::And
            | OperatorKind::Or
            | OperatorKind::Xor
            | OperatorKind::Nand
            | OperatorKind::Nor => 1,
            OperatorKind::Conditional | OperatorKind::Biconditional => 2,
        }
    }

    /// Whether repeated uses collapse into one flat n-ary node
    pub fn associative(self) -> bool {
        !matches!(
            self,
            OperatorKind::Nand | OperatorKind::Nor | OperatorKind::Conditional
        )
    }

    /// Minimum number of terms
    pub fn min_terms(self) -> usize {
        2
    }

    /// Maximum number of terms; `None` means unbounded
    pub fn max_terms(self) -> Option<usize> {
        if self.associative() {
            None
        } else {
            Some(2)
        }
    }

    /// The binary evaluation rule; n-ary nodes left-fold this
    pub fn apply(self, p: bool, q: bool) -> bool {
        match self {
            OperatorKind::And => p && q,
            OperatorKind::Or => p || q,
            OperatorKind::Xor => p != q,
            OperatorKind::Nand => !(p && q),
            OperatorKind::Nor => !(p || q),
            OperatorKind::Conditional => !p || q,
            OperatorKind::Biconditional => p == q,
        }
    }
}

impl std::fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Case-insensitive alias → kind table
///
/// `Registry::default()` carries the standard alias set; an empty or
/// customized table can be built with [`Registry::new`] and
/// [`Registry::insert`].
#[derive(Debug, Clone)]
pub struct Registry {
    aliases: HashMap<String, OperatorKind>,
}

impl Registry {
    /// An empty registry with no aliases
    pub fn new() -> Registry {
        Registry {
            aliases: HashMap::new(),
        }
    }

    /// Register an alias for a kind (case-insensitive)
    pub fn insert(&mut self, alias: &str, kind: OperatorKind) {
        self.aliases.insert(alias.to_uppercase(), kind);
    }

    /// Look up a token; unknown tokens yield `None` and become the
    /// caller's parse failure
    pub fn resolve(&self, token: &str) -> Option<OperatorKind> {
        self.aliases.get(&token.to_uppercase()).copied()
    }
}

impl Default for Registry {
    fn default() -> Registry {
        let mut registry = Registry::new();
        for (kind, aliases) in [
            (OperatorKind::And, &["^", "AND", "\u{2227}"][..]),
            (OperatorKind::Or, &["v", "OR", "\u{2228}"][..]),
            (OperatorKind::Xor, &["XOR", "\u{2295}"][..]),
            (OperatorKind::Nand, &["|", "NAND", "\u{2191}"][..]),
            (OperatorKind::Nor, &["NOR", "\u{2193}"][..]),
            (
                OperatorKind::Conditional,
                &["->", "-->", "=>", "==>", "\u{2192}"][..],
            ),
            (
                OperatorKind::Biconditional,
                &["<->", "<-->", "<=>", "<==>", "=", "eq", "XNOR", "\u{2194}"][..],
            ),
        ] {
            for alias in aliases {
                registry.insert(alias, kind);
            }
        }
        registry
    }
}
