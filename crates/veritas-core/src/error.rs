//! Error type for formula tokenization, evaluation and table assembly.

use thiserror::Error;

/// Errors that can occur while evaluating a formula or building its
/// truth table.
///
/// Lexical, syntactic and lookup failures all share this one type.
/// Positions are token indices into the sequence produced by
/// [`tokenize`](crate::tokenize).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The formula contained no tokens at all.
    #[error("empty formula")]
    EmptyFormula,

    /// A token appeared where the grammar does not allow it.
    #[error("unexpected token `{found}` at position {position}")]
    UnexpectedToken { position: usize, found: String },

    /// Input ended while the grammar still required a token.
    #[error("unexpected end of formula, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    /// A complete expression was followed by further tokens.
    #[error("trailing token `{found}` at position {position}")]
    TrailingInput { position: usize, found: String },

    /// A variable has no entry in the supplied assignment.
    #[error("variable {name} at position {position} has no assigned value")]
    UnboundVariable { name: char, position: usize },

    /// An identifier that is not a valid variable name.
    #[error("unknown symbol `{symbol}` at position {position}")]
    UnknownSymbol { symbol: String, position: usize },

    /// Too many distinct variables to enumerate.
    #[error("formula has {count} variables, maximum is {max}")]
    TooManyVariables { count: usize, max: usize },

    /// Nesting of negations and parentheses is too deep.
    #[error("maximum nesting depth exceeded ({0})")]
    MaxDepthExceeded(usize),

    /// The formula has too many tokens.
    #[error("maximum token count exceeded ({0})")]
    MaxTokensExceeded(usize),
}

impl ParseError {
    /// Token index of the offending token, if the error refers to one.
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::UnexpectedToken { position, .. }
            | ParseError::TrailingInput { position, .. }
            | ParseError::UnboundVariable { position, .. }
            | ParseError::UnknownSymbol { position, .. } => Some(*position),
            _ => None,
        }
    }
}
