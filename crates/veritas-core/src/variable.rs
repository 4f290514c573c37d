//! Propositional variables and their discovery in a formula.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::token::{tokenize, Token};

/// A propositional variable, named by a single uppercase ASCII letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable(char);

impl Variable {
    /// Create a variable, or `None` if `name` is not `A`..=`Z`.
    pub fn new(name: char) -> Option<Variable> {
        name.is_ascii_uppercase().then_some(Variable(name))
    }

    /// Parse an identifier token's text as a variable name.
    pub fn from_identifier(identifier: &str) -> Option<Variable> {
        let mut chars = identifier.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Variable::new(c),
            _ => None,
        }
    }

    /// The letter naming this variable.
    pub fn name(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Variable {
    type Error = ParseError;

    fn try_from(name: char) -> Result<Self, Self::Error> {
        Variable::new(name).ok_or_else(|| ParseError::UnknownSymbol {
            symbol: name.to_string(),
            position: 0,
        })
    }
}

impl FromStr for Variable {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Variable::from_identifier(trimmed).ok_or_else(|| ParseError::UnknownSymbol {
            symbol: trimmed.to_string(),
            position: 0,
        })
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The distinct variables of a formula, in order of first appearance.
///
/// This order fixes both the column order of a truth table and the bit
/// each variable takes during enumeration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableSet {
    vars: Vec<Variable>,
}

impl VariableSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the variables named by identifier tokens.
    ///
    /// Identifiers that are not valid variable names are skipped.
    pub fn from_tokens(tokens: &[Token]) -> Self {
        tokens
            .iter()
            .filter_map(Token::as_identifier)
            .filter_map(Variable::from_identifier)
            .collect()
    }

    /// Add a variable. Returns `false` if it was already present.
    pub fn insert(&mut self, var: Variable) -> bool {
        if self.vars.contains(&var) {
            return false;
        }
        self.vars.push(var);
        true
    }

    /// Check if the set contains `var`.
    pub fn contains(&self, var: Variable) -> bool {
        self.vars.contains(&var)
    }

    /// Position of `var` in first-appearance order.
    pub fn index_of(&self, var: Variable) -> Option<usize> {
        self.vars.iter().position(|&v| v == var)
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterate in first-appearance order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Variable> + '_ {
        self.vars.iter().copied()
    }

    /// The variables as a slice.
    pub fn as_slice(&self) -> &[Variable] {
        &self.vars
    }
}

impl FromIterator<Variable> for VariableSet {
    fn from_iter<I: IntoIterator<Item = Variable>>(iter: I) -> Self {
        let mut set = VariableSet::new();
        for var in iter {
            set.insert(var);
        }
        set
    }
}

impl<'a> IntoIterator for &'a VariableSet {
    type Item = Variable;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Variable>>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.iter().copied()
    }
}

/// Collect the distinct variables of `formula` in first-appearance order.
///
/// The result is not sorted: `Q ∧ P` yields `[Q, P]`.
pub fn extract_variables(formula: &str) -> VariableSet {
    VariableSet::from_tokens(&tokenize(formula))
}
