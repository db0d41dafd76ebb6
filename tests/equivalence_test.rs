//! Semantic comparisons: tautology, contradiction, equivalence, bag
//! equality, and argument validity

use proplogic::{parse, Argument, Expression};
use rstest::rstest;

fn p(source: &str) -> Expression {
    parse(source).unwrap()
}

#[rstest]
#[case("p v ~p")]
#[case("p -> p")]
#[case("(p ^ q) -> p")]
#[case("T")]
#[case("((p -> q) ^ p) -> q")]
fn test_tautologies(#[case] source: &str) {
    assert_eq!(p(source).is_tautology(), Ok(true), "{source}");
}

#[rstest]
#[case("p ^ ~p")]
#[case("F")]
#[case("(p <-> q) ^ (p XOR q)")]
fn test_contradictions(#[case] source: &str) {
    assert_eq!(p(source).is_contradiction(), Ok(true), "{source}");
}

#[test]
fn test_contingency_is_neither() {
    let expr = p("p -> q");
    assert_eq!(expr.is_tautology(), Ok(false));
    assert_eq!(expr.is_contradiction(), Ok(false));
}

#[rstest]
#[case("p -> q", "~p v q")]
#[case("~(p ^ q)", "~p v ~q")]
#[case("~(p v q)", "~p ^ ~q")]
#[case("p <-> q", "(p -> q) ^ (q -> p)")]
#[case("p XOR q", "~(p <-> q)")]
#[case("p ^ q", "q ^ p")]
fn test_equivalent_pairs(#[case] left: &str, #[case] right: &str) {
    assert_eq!(p(left).equivalent_to(&p(right)), Ok(true), "{left} / {right}");
}

#[test]
fn test_inequivalent_pair() {
    assert_eq!(p("p -> q").equivalent_to(&p("q -> p")), Ok(false));
}

#[test]
fn test_equivalence_spans_different_variable_sets() {
    // both sides range over the union of names
    assert_eq!(p("p ^ T").equivalent_to(&p("p v F")), Ok(true));
    assert_eq!(p("p").equivalent_to(&p("q")), Ok(false));
}

#[test]
fn test_same_ignores_term_order_at_every_level() {
    assert!(p("p ^ q ^ r").same(&p("r ^ p ^ q")));
    assert!(p("(p v q) ^ r").same(&p("r ^ (q v p)")));

    // positional equality does not
    assert_ne!(p("p ^ q"), p("q ^ p"));

    // bag equality still needs matching multiplicities
    assert!(!p("p ^ p ^ q").same(&p("p ^ q ^ q")));
    assert!(!p("p ^ q").same(&p("p v q")));
}

#[test]
fn test_argument_validity() {
    // modus tollens
    let argument = Argument::new(vec![p("p -> q"), p("~q")], p("~p"));
    assert_eq!(argument.is_valid(), Ok(true));

    // denying the antecedent
    let argument = Argument::new(vec![p("p -> q"), p("~p")], p("~q"));
    assert_eq!(argument.is_valid(), Ok(false));

    // hypothetical syllogism
    let argument = Argument::new(vec![p("p -> q"), p("q -> r")], p("p -> r"));
    assert_eq!(argument.is_valid(), Ok(true));
}

#[test]
fn test_wide_comparisons_are_uncapped() {
    // equivalence ranges over the union of names; the display cap does
    // not apply to semantic checks
    let left = p("a ^ b ^ c");
    let right = p("d ^ e ^ a");
    assert_eq!(left.equivalent_to(&right), Ok(false));
    assert_eq!(p("a ^ b ^ c ^ d ^ e").is_contradiction(), Ok(false));
}
