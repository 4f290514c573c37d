//! Resource limits for formula evaluation.

/// Resource limits applied while evaluating formulas.
///
/// A truth table over `n` variables has `2^n` rows, so an input that
/// happens to mention many distinct letters can request far more work
/// than intended. These limits bound that work, along with the
/// recursion depth of the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of distinct variables in a truth table.
    pub max_variables: usize,
    /// Maximum nesting depth of negations and parentheses.
    pub max_depth: usize,
    /// Maximum number of tokens in a formula.
    pub max_tokens: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_variables: 12,
            max_depth: 64,
            max_tokens: 1024,
        }
    }
}

impl Limits {
    /// Create limits with custom values.
    pub fn new(max_variables: usize, max_depth: usize, max_tokens: usize) -> Self {
        Self {
            max_variables,
            max_depth,
            max_tokens,
        }
    }

    /// Permissive limits: every uppercase letter may be a variable.
    pub fn permissive() -> Self {
        Self {
            max_variables: 26,
            max_depth: 256,
            max_tokens: 16384,
        }
    }

    /// Strict limits for untrusted input.
    pub fn strict() -> Self {
        Self {
            max_variables: 8,
            max_depth: 16,
            max_tokens: 256,
        }
    }

    /// Return these limits with a different variable bound.
    pub fn with_max_variables(self, max_variables: usize) -> Self {
        Self {
            max_variables,
            ..self
        }
    }
}
