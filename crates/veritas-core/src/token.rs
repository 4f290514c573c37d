//! Token vocabulary and tokenizer for propositional formulas.
//!
//! The vocabulary is closed: five connectives, two parentheses, and
//! identifiers. Identifiers are whatever runs of characters sit between
//! connectives, parentheses and whitespace; deciding whether an
//! identifier names a variable is left to the evaluator.

use std::fmt;

use log::trace;

use crate::logging::targets;

/// Logical connective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connective {
    /// Negation: ¬A
    Not,
    /// Conjunction: A ∧ B
    And,
    /// Disjunction: A ∨ B
    Or,
    /// Material implication: A → B
    Implies,
    /// Biconditional: A ↔ B
    Iff,
}

impl Connective {
    /// All connectives, from loosest to tightest binding.
    pub const ALL: [Connective; 5] = [
        Connective::Iff,
        Connective::Implies,
        Connective::Or,
        Connective::And,
        Connective::Not,
    ];

    /// The symbol this connective is written with.
    pub fn symbol(self) -> char {
        match self {
            Connective::Not => '¬',
            Connective::And => '∧',
            Connective::Or => '∨',
            Connective::Implies => '→',
            Connective::Iff => '↔',
        }
    }

    /// Look up the connective written with `c`.
    pub fn from_symbol(c: char) -> Option<Connective> {
        match c {
            '¬' => Some(Connective::Not),
            '∧' => Some(Connective::And),
            '∨' => Some(Connective::Or),
            '→' => Some(Connective::Implies),
            '↔' => Some(Connective::Iff),
            _ => None,
        }
    }

    /// Binding strength. Higher binds tighter.
    pub fn binding(self) -> u8 {
        match self {
            Connective::Iff => 0,
            Connective::Implies => 1,
            Connective::Or => 2,
            Connective::And => 3,
            Connective::Not => 4,
        }
    }

    /// Check if this connective takes two operands.
    pub fn is_binary(self) -> bool {
        !matches!(self, Connective::Not)
    }

    /// Apply this connective to two operands.
    ///
    /// Negation ignores `rhs`.
    #[inline]
    pub fn apply(self, lhs: bool, rhs: bool) -> bool {
        match self {
            Connective::Not => !lhs,
            Connective::And => lhs && rhs,
            Connective::Or => lhs || rhs,
            Connective::Implies => !lhs || rhs,
            Connective::Iff => lhs == rhs,
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A lexical token of a formula.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// An identifier. Not yet checked to be a valid variable name.
    Variable(String),
    /// A connective symbol.
    Operator(Connective),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

impl Token {
    /// Convert to a connective if this is an operator token.
    pub fn as_connective(&self) -> Option<Connective> {
        match self {
            Token::Operator(op) => Some(*op),
            _ => None,
        }
    }

    /// The identifier text, if this is a variable token.
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Token::Variable(name) => Some(name),
            _ => None,
        }
    }

    fn from_symbol(c: char) -> Option<Token> {
        match c {
            '(' => Some(Token::LeftParen),
            ')' => Some(Token::RightParen),
            _ => Connective::from_symbol(c).map(Token::Operator),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Variable(name) => write!(f, "{name}"),
            Token::Operator(op) => write!(f, "{op}"),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
        }
    }
}

/// Split a formula into tokens, left to right.
///
/// Connectives and parentheses are single-character tokens and end the
/// identifier being accumulated. Whitespace also ends it and is dropped.
/// Every other character extends the current identifier.
pub fn tokenize(formula: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut buffer = String::new();

    for c in formula.chars() {
        if let Some(token) = Token::from_symbol(c) {
            flush(&mut buffer, &mut tokens);
            tokens.push(token);
        } else if c.is_whitespace() {
            flush(&mut buffer, &mut tokens);
        } else {
            buffer.push(c);
        }
    }
    flush(&mut buffer, &mut tokens);

    trace!(target: targets::TOKENIZE, "{} tokens from {formula:?}", tokens.len());
    tokens
}

fn flush(buffer: &mut String, tokens: &mut Vec<Token>) {
    if !buffer.is_empty() {
        tokens.push(Token::Variable(std::mem::take(buffer)));
    }
}
