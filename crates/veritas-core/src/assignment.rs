//! Truth assignments and their enumeration.

use std::fmt;

use crate::error::ParseError;
use crate::variable::{Variable, VariableSet};

/// A mapping from variables to truth values.
///
/// Entries keep insertion order, so an assignment produced by
/// [`generate_assignments`] lists its variables in the same order as
/// the [`VariableSet`] it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    entries: Vec<(Variable, bool)>,
}

impl Assignment {
    /// Create an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value of `var`, returning its previous value.
    pub fn insert(&mut self, var: Variable, value: bool) -> Option<bool> {
        match self.entries.iter_mut().find(|(v, _)| *v == var) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((var, value));
                None
            }
        }
    }

    /// The value of `var`, if assigned.
    pub fn get(&self, var: Variable) -> Option<bool> {
        self.entries
            .iter()
            .find(|(v, _)| *v == var)
            .map(|&(_, value)| value)
    }

    /// Check if `var` has a value.
    pub fn contains(&self, var: Variable) -> bool {
        self.get(var).is_some()
    }

    /// Number of assigned variables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is assigned.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(variable, value)` pairs in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Variable, bool)> + '_ {
        self.entries.iter().copied()
    }

    /// Parse comma-separated bindings such as `P=T, Q=0`.
    ///
    /// Values may be `T`/`F`, `1`/`0` or `true`/`false`, in any case.
    /// Error positions refer to the index of the offending binding.
    pub fn parse_bindings(input: &str) -> Result<Assignment, ParseError> {
        let mut assignment = Assignment::new();
        for (position, binding) in input.split(',').enumerate() {
            let binding = binding.trim();
            if binding.is_empty() {
                continue;
            }
            let (name, value) =
                binding
                    .split_once('=')
                    .ok_or_else(|| ParseError::UnexpectedToken {
                        position,
                        found: binding.to_string(),
                    })?;
            let var = Variable::from_identifier(name.trim()).ok_or_else(|| {
                ParseError::UnknownSymbol {
                    symbol: name.trim().to_string(),
                    position,
                }
            })?;
            let value = parse_truth_value(value.trim()).ok_or_else(|| {
                ParseError::UnknownSymbol {
                    symbol: value.trim().to_string(),
                    position,
                }
            })?;
            assignment.insert(var, value);
        }
        Ok(assignment)
    }
}

fn parse_truth_value(text: &str) -> Option<bool> {
    match text.to_ascii_lowercase().as_str() {
        "t" | "1" | "true" => Some(true),
        "f" | "0" | "false" => Some(false),
        _ => None,
    }
}

impl FromIterator<(Variable, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (Variable, bool)>>(iter: I) -> Self {
        let mut assignment = Assignment::new();
        for (var, value) in iter {
            assignment.insert(var, value);
        }
        assignment
    }
}

impl<const N: usize> From<[(Variable, bool); N]> for Assignment {
    fn from(pairs: [(Variable, bool); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (var, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{var}={}", if *value { 'T' } else { 'F' })?;
        }
        Ok(())
    }
}

/// Iterator over every assignment of a variable set.
///
/// Row `i` sets the `k`-th of `n` variables to `true` iff bit `n - 1 - k`
/// of `i` is set: the last-listed variable toggles fastest.
#[derive(Debug, Clone)]
pub struct Assignments {
    vars: Vec<Variable>,
    next: u64,
    total: u64,
}

impl Assignments {
    fn assignment_at(&self, index: u64) -> Assignment {
        let n = self.vars.len();
        self.vars
            .iter()
            .enumerate()
            .map(|(k, &var)| (var, (index >> (n - 1 - k)) & 1 == 1))
            .collect()
    }
}

impl Iterator for Assignments {
    type Item = Assignment;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total {
            return None;
        }
        let assignment = self.assignment_at(self.next);
        self.next += 1;
        Some(assignment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.total - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Assignments {}

/// Enumerate all `2^n` assignments of `variables` in binary counting order.
///
/// With no variables this yields exactly one, empty, assignment.
pub fn generate_assignments(variables: &VariableSet) -> Assignments {
    // At most 26 variables exist, so the count always fits.
    Assignments {
        vars: variables.as_slice().to_vec(),
        next: 0,
        total: 1u64 << variables.len(),
    }
}
