//! Golden vector integration tests.
//!
//! These tests verify the complete pipeline from formula text to truth table.

use veritas_core::{
    build_truth_table, build_truth_table_with_limits, evaluate, extract_variables,
    generate_assignments, notation, Assignment, Classification, Limits, ParseError, Variable,
};

fn v(name: char) -> Variable {
    Variable::new(name).expect("valid variable name")
}

/// Build an assignment from `(name, value)` pairs.
fn assign(pairs: &[(char, bool)]) -> Assignment {
    pairs.iter().map(|&(name, value)| (v(name), value)).collect()
}

/// Test case: Modus ponens
///
/// ((P → Q) ∧ P) → Q holds under every assignment.
#[test]
fn test_modus_ponens() {
    let table = build_truth_table("((P → Q) ∧ P) → Q").unwrap();
    assert_eq!(table.len(), 4);
    assert!(table.iter().all(|row| row.value));
    assert_eq!(table.classification(), Classification::Tautology);
}

/// Test: the full table of (P ∧ Q) ∨ ¬P, row by row.
#[test]
fn test_mixed_connectives_table() {
    let table = build_truth_table("(P ∧ Q) ∨ ¬P").unwrap();

    // (P, Q) -> expected
    let expected = [
        ((false, false), true),
        ((false, true), true),
        ((true, false), false),
        ((true, true), true),
    ];

    assert_eq!(table.len(), expected.len());
    for (row, ((p, q), value)) in table.iter().zip(expected) {
        assert_eq!(row.assignment.get(v('P')), Some(p));
        assert_eq!(row.assignment.get(v('Q')), Some(q));
        assert_eq!(row.value, value, "Failed for P={}, Q={}", p, q);
    }
}

/// Test: every row of a three-variable table matches the binary
/// counting layout over the variables in first-appearance order.
#[test]
fn test_row_layout_three_variables() {
    let table = build_truth_table("R ∨ P → Q").unwrap();
    let order = [v('R'), v('P'), v('Q')];
    assert_eq!(table.variables().as_slice(), &order);
    assert_eq!(table.len(), 8);

    for (i, row) in table.iter().enumerate() {
        for (k, &var) in order.iter().enumerate() {
            let bit = (i >> (2 - k)) & 1 == 1;
            assert_eq!(row.assignment.get(var), Some(bit), "row {}", i);
        }
        let expected = evaluate("R ∨ P → Q", &row.assignment).unwrap();
        assert_eq!(row.value, expected);
    }
}

/// Test: table rows agree with single-assignment evaluation.
#[test]
fn test_table_agrees_with_evaluate() {
    let formula = "(A ↔ B) → ¬(C ∧ ¬A) ∨ D";
    let table = build_truth_table(formula).unwrap();
    assert_eq!(table.len(), 16);

    for row in &table {
        assert_eq!(evaluate(formula, &row.assignment), Ok(row.value));
    }
}

/// Test: 2^n rows for n = 0..=6.
#[test]
fn test_row_counts() {
    let formulas = ["", "P", "P ∧ Q", "P ∧ Q ∧ R", "A B C D", "A B C D E", "A B C D E F"];
    for (n, formula) in formulas.iter().enumerate() {
        let vars = extract_variables(formula);
        assert_eq!(vars.len(), n);
        assert_eq!(generate_assignments(&vars).len(), 1 << n);
    }

    for n in 1..=6usize {
        let formula = ('A'..='Z')
            .take(n)
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ∨ ");
        assert_eq!(build_truth_table(&formula).unwrap().len(), 1 << n);
    }
}

/// Test: Q ∧ P lists Q first.
#[test]
fn test_first_appearance_order() {
    let vars: Vec<char> = extract_variables("Q ∧ P").iter().map(|v| v.name()).collect();
    assert_eq!(vars, vec!['Q', 'P']);
}

/// Test: single-assignment checks.
#[test]
fn test_single_assignment_vectors() {
    assert_eq!(evaluate("P ∧ Q", &assign(&[('P', true), ('Q', true)])), Ok(true));
    assert_eq!(evaluate("P ∧ Q", &assign(&[('P', true), ('Q', false)])), Ok(false));
    assert_eq!(evaluate("P ∨ Q", &assign(&[('P', false), ('Q', false)])), Ok(false));
    assert_eq!(evaluate("¬P", &assign(&[('P', true)])), Ok(false));
    assert_eq!(
        evaluate("(P ∧ Q) ∨ ¬P", &assign(&[('P', false), ('Q', false)])),
        Ok(true)
    );
}

/// Test: failures abort with a ParseError.
#[test]
fn test_error_vectors() {
    assert!(evaluate("P ∧", &assign(&[('P', true)])).is_err());
    assert!(matches!(
        evaluate("P ∧ Q", &assign(&[('P', true)])),
        Err(ParseError::UnboundVariable { name: 'Q', .. })
    ));
    assert_eq!(build_truth_table(""), Err(ParseError::EmptyFormula));
    assert!(build_truth_table("P ∧ ∧ Q").is_err());
    assert!(build_truth_table(")P(").is_err());
}

/// Test: an identifier-heavy input is rejected before enumeration.
#[test]
fn test_variable_guard() {
    let formula = "A B C D E F G H I J K L M N O P Q R S T U V W X Y Z";
    assert_eq!(
        build_truth_table(formula),
        Err(ParseError::TooManyVariables { count: 26, max: 12 })
    );
    assert_eq!(
        build_truth_table_with_limits("A ∧ B ∧ C", &Limits::strict().with_max_variables(2)),
        Err(ParseError::TooManyVariables { count: 3, max: 2 })
    );
}

/// Test: formulas without variables.
///
/// Only identifiers that are variable names count, so a formula made
/// of other identifiers still has one row, which then fails to evaluate.
#[test]
fn test_no_variables() {
    assert_eq!(generate_assignments(&extract_variables("x")).count(), 1);
    assert!(matches!(
        build_truth_table("x"),
        Err(ParseError::UnknownSymbol { position: 0, .. })
    ));
}

/// Test: ASCII notation feeds the same engine.
#[test]
fn test_ascii_notation() {
    let formula = notation::from_ascii("(P -> Q) <-> (~P | Q)");
    let table = build_truth_table(&formula).unwrap();
    assert!(table.is_tautology());

    let bindings = Assignment::parse_bindings("P=1,Q=0").unwrap();
    assert_eq!(evaluate(&notation::from_ascii("P & !Q"), &bindings), Ok(true));
}

/// Test: De Morgan's laws as biconditionals.
#[test]
fn test_de_morgan() {
    for formula in ["¬(P ∧ Q) ↔ ¬P ∨ ¬Q", "¬(P ∨ Q) ↔ ¬P ∧ ¬Q"] {
        assert_eq!(
            build_truth_table(formula).unwrap().classification(),
            Classification::Tautology,
            "{}",
            formula
        );
    }
}
