//! Truth-table assembly.

use log::{debug, trace};

use crate::assignment::{generate_assignments, Assignment};
use crate::error::ParseError;
use crate::eval::evaluate_tokens;
use crate::limits::Limits;
use crate::logging::targets;
use crate::token::tokenize;
use crate::variable::VariableSet;

/// One row of a truth table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTableRow {
    /// Values of every formula variable, in column order.
    pub assignment: Assignment,
    /// Value of the formula under `assignment`.
    pub value: bool,
}

/// How a formula behaves across all of its rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// True in every row.
    Tautology,
    /// False in every row.
    Contradiction,
    /// True in some rows and false in others.
    Contingent,
}

/// The complete truth table of a formula.
///
/// Rows are in enumeration order: the last variable toggles fastest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    formula: String,
    variables: VariableSet,
    rows: Vec<TruthTableRow>,
}

impl TruthTable {
    /// The formula text this table was built from.
    pub fn formula(&self) -> &str {
        &self.formula
    }

    /// The variables, in column order.
    pub fn variables(&self) -> &VariableSet {
        &self.variables
    }

    /// All rows.
    pub fn rows(&self) -> &[TruthTableRow] {
        &self.rows
    }

    /// Number of rows (`2^n` for `n` variables).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always `false`: even a formula without variables has one row.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over rows in enumeration order.
    pub fn iter(&self) -> std::slice::Iter<'_, TruthTableRow> {
        self.rows.iter()
    }

    /// Rows in which the formula is true.
    pub fn satisfying_rows(&self) -> impl Iterator<Item = &TruthTableRow> {
        self.rows.iter().filter(|row| row.value)
    }

    /// Classify the formula by its column of results.
    pub fn classification(&self) -> Classification {
        let true_count = self.satisfying_rows().count();
        if true_count == self.rows.len() {
            Classification::Tautology
        } else if true_count == 0 {
            Classification::Contradiction
        } else {
            Classification::Contingent
        }
    }

    /// Check if the formula is true under every assignment.
    pub fn is_tautology(&self) -> bool {
        self.classification() == Classification::Tautology
    }
}

impl<'a> IntoIterator for &'a TruthTable {
    type Item = &'a TruthTableRow;
    type IntoIter = std::slice::Iter<'a, TruthTableRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Build the truth table of `formula` with default limits.
///
/// # Errors
///
/// Fails with the first [`ParseError`] raised by any row, or if the
/// formula has more variables than allowed. No partial table is returned.
pub fn build_truth_table(formula: &str) -> Result<TruthTable, ParseError> {
    build_truth_table_with_limits(formula, &Limits::default())
}

/// Build the truth table of `formula` with custom limits.
pub fn build_truth_table_with_limits(
    formula: &str,
    limits: &Limits,
) -> Result<TruthTable, ParseError> {
    let tokens = tokenize(formula);
    let variables = VariableSet::from_tokens(&tokens);

    if variables.len() > limits.max_variables {
        debug!(
            target: targets::TABLE,
            "rejecting {} variables (max {})",
            variables.len(),
            limits.max_variables
        );
        return Err(ParseError::TooManyVariables {
            count: variables.len(),
            max: limits.max_variables,
        });
    }

    let assignments = generate_assignments(&variables);
    debug!(
        target: targets::TABLE,
        "building {} rows over {} variables",
        assignments.len(),
        variables.len()
    );

    let rows = assignments
        .map(|assignment| {
            let value = evaluate_tokens(&tokens, &assignment, limits)?;
            trace!(target: targets::TABLE, "{assignment} -> {value}");
            Ok(TruthTableRow { assignment, value })
        })
        .collect::<Result<Vec<_>, ParseError>>()?;

    Ok(TruthTable {
        formula: formula.to_string(),
        variables,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variable::Variable;

    fn values(table: &TruthTable) -> Vec<bool> {
        table.iter().map(|row| row.value).collect()
    }

    #[test]
    fn test_and_table() {
        let table = build_truth_table("P ∧ Q").unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(values(&table), vec![false, false, false, true]);
    }

    #[test]
    fn test_column_order_follows_formula() {
        let table = build_truth_table("Q ∧ ¬P").unwrap();
        let columns: Vec<char> = table.variables().iter().map(Variable::name).collect();
        assert_eq!(columns, vec!['Q', 'P']);
        // (Q, P): FF FT TF TT
        assert_eq!(values(&table), vec![false, false, true, false]);
    }

    #[test]
    fn test_empty_formula_fails() {
        assert_eq!(build_truth_table(""), Err(ParseError::EmptyFormula));
    }

    #[test]
    fn test_grammar_error_fails_whole_table() {
        assert!(matches!(
            build_truth_table("P ∧ (Q"),
            Err(ParseError::UnexpectedEnd { .. })
        ));
    }

    #[test]
    fn test_unknown_symbol_fails() {
        assert!(matches!(
            build_truth_table("P ∨ foo"),
            Err(ParseError::UnknownSymbol { .. })
        ));
    }

    #[test]
    fn test_too_many_variables() {
        let limits = Limits::default().with_max_variables(2);
        assert_eq!(
            build_truth_table_with_limits("P ∧ Q ∧ R", &limits),
            Err(ParseError::TooManyVariables { count: 3, max: 2 })
        );
        assert!(build_truth_table_with_limits("P ∧ Q ∧ P", &limits).is_ok());
    }

    #[test]
    fn test_classification() {
        assert_eq!(
            build_truth_table("P ∨ ¬P").unwrap().classification(),
            Classification::Tautology
        );
        assert_eq!(
            build_truth_table("P ∧ ¬P").unwrap().classification(),
            Classification::Contradiction
        );
        assert_eq!(
            build_truth_table("P → Q").unwrap().classification(),
            Classification::Contingent
        );
        assert!(build_truth_table("(P → Q) ↔ (¬Q → ¬P)")
            .unwrap()
            .is_tautology());
    }

    #[test]
    fn test_satisfying_rows() {
        let table = build_truth_table("P ∧ Q").unwrap();
        let satisfying: Vec<&TruthTableRow> = table.satisfying_rows().collect();
        assert_eq!(satisfying.len(), 1);
        assert_eq!(satisfying[0].assignment.to_string(), "P=T, Q=T");
    }

    #[test]
    fn test_formula_is_kept() {
        let table = build_truth_table("¬P").unwrap();
        assert_eq!(table.formula(), "¬P");
        assert!(!table.is_empty());
    }
}
