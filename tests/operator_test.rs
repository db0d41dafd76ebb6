//! Data-driven checks of every connective's truth function

use proplogic::{parse, OperatorKind, TruthTable};
use rstest::rstest;

// Each case lists the output column for inputs (T,T), (T,F), (F,T), (F,F)
#[rstest]
#[case("p ^ q", [true, false, false, false])]
#[case("p v q", [true, true, true, false])]
#[case("p XOR q", [false, true, true, false])]
#[case("p NAND q", [false, true, true, true])]
#[case("p NOR q", [false, false, false, true])]
#[case("p -> q", [true, false, true, true])]
#[case("p <-> q", [true, false, false, true])]
fn test_binary_truth_functions(#[case] source: &str, #[case] expected: [bool; 4]) {
    let table = TruthTable::new(&parse(source).unwrap()).unwrap();
    let values: Vec<bool> = table.values().collect();
    assert_eq!(values, expected, "{source}");
}

#[rstest]
#[case(OperatorKind::And, "^")]
#[case(OperatorKind::Or, "v")]
#[case(OperatorKind::Xor, "XOR")]
#[case(OperatorKind::Nand, "NAND")]
#[case(OperatorKind::Nor, "NOR")]
#[case(OperatorKind::Conditional, "->")]
#[case(OperatorKind::Biconditional, "<->")]
fn test_display_symbols(#[case] kind: OperatorKind, #[case] symbol: &str) {
    assert_eq!(kind.to_string(), symbol);
}

#[rstest]
#[case("p AND q", "p ^ q")]
#[case("p ∧ q", "p ^ q")]
#[case("p OR q", "p v q")]
#[case("p ⊕ q", "p XOR q")]
#[case("p | q", "p NAND q")]
#[case("p => q", "p -> q")]
#[case("p --> q", "p -> q")]
#[case("p = q", "p <-> q")]
#[case("p XNOR q", "p <-> q")]
#[case("p eq q", "p <-> q")]
fn test_aliases_normalize_on_display(#[case] source: &str, #[case] canonical: &str) {
    assert_eq!(parse(source).unwrap().to_string(), canonical);
}

#[rstest]
#[case("and")]
#[case(" AnD ")]
#[case("xnor")]
fn test_alias_lookup_is_case_insensitive(#[case] raw: &str) {
    let registry = proplogic::Registry::default();
    assert!(registry.resolve(raw.trim()).is_some());
}
