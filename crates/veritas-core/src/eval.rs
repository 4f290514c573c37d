//! Recursive-descent evaluator for propositional formulas.
//!
//! Grammar, loosest binding first:
//!
//! ```text
//! iff     := implies (↔ implies)*
//! implies := or (→ implies)?
//! or      := and (∨ and)*
//! and     := not (∧ not)*
//! not     := ¬ not | atom
//! atom    := variable | ( iff )
//! ```
//!
//! Each rule returns the truth value of the text it matched; no syntax
//! tree is built. Both operands of every connective are always parsed,
//! so a grammar error is reported even where the value is already known.

use log::{debug, trace};

use crate::assignment::Assignment;
use crate::error::ParseError;
use crate::limits::Limits;
use crate::logging::targets;
use crate::token::{tokenize, Connective, Token};
use crate::variable::Variable;

/// Evaluate `formula` under `assignment` with default limits.
///
/// # Errors
///
/// Returns an error if:
/// - The formula is empty or violates the grammar
/// - An identifier is not a variable name
/// - A variable has no value in `assignment`
pub fn evaluate(formula: &str, assignment: &Assignment) -> Result<bool, ParseError> {
    evaluate_with_limits(formula, assignment, &Limits::default())
}

/// Evaluate `formula` under `assignment` with custom limits.
pub fn evaluate_with_limits(
    formula: &str,
    assignment: &Assignment,
    limits: &Limits,
) -> Result<bool, ParseError> {
    evaluate_tokens(&tokenize(formula), assignment, limits)
}

/// Evaluate an already tokenized formula.
///
/// Lets callers that evaluate one formula many times tokenize it once.
pub fn evaluate_tokens(
    tokens: &[Token],
    assignment: &Assignment,
    limits: &Limits,
) -> Result<bool, ParseError> {
    let result = Evaluator::new(tokens, assignment, limits).run();
    if let Err(err) = &result {
        debug!(target: targets::EVALUATE, "evaluation failed: {err}");
    }
    result
}

/// Cursor over a token slice, evaluating as it parses.
struct Evaluator<'a> {
    tokens: &'a [Token],
    pos: usize,
    assignment: &'a Assignment,
    limits: &'a Limits,
    depth: usize,
}

impl<'a> Evaluator<'a> {
    fn new(tokens: &'a [Token], assignment: &'a Assignment, limits: &'a Limits) -> Self {
        Self {
            tokens,
            pos: 0,
            assignment,
            limits,
            depth: 0,
        }
    }

    fn run(mut self) -> Result<bool, ParseError> {
        if self.tokens.is_empty() {
            return Err(ParseError::EmptyFormula);
        }
        if self.tokens.len() > self.limits.max_tokens {
            return Err(ParseError::MaxTokensExceeded(self.limits.max_tokens));
        }

        let value = self.biconditional()?;

        if let Some(token) = self.peek() {
            return Err(ParseError::TrailingInput {
                position: self.pos,
                found: token.to_string(),
            });
        }

        trace!(target: targets::EVALUATE, "{} tokens -> {value}", self.tokens.len());
        Ok(value)
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Consume the next token if it is the connective `op`.
    fn eat(&mut self, op: Connective) -> bool {
        if self.peek().and_then(Token::as_connective) == Some(op) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Run `rule` one nesting level deeper.
    fn nested<T>(
        &mut self,
        rule: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= self.limits.max_depth {
            return Err(ParseError::MaxDepthExceeded(self.limits.max_depth));
        }
        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    fn biconditional(&mut self) -> Result<bool, ParseError> {
        let mut value = self.implication()?;
        while self.eat(Connective::Iff) {
            let rhs = self.implication()?;
            value = Connective::Iff.apply(value, rhs);
        }
        Ok(value)
    }

    // Right-associative: P → Q → R reads as P → (Q → R).
    fn implication(&mut self) -> Result<bool, ParseError> {
        let lhs = self.disjunction()?;
        if self.eat(Connective::Implies) {
            let rhs = self.nested(Self::implication)?;
            return Ok(Connective::Implies.apply(lhs, rhs));
        }
        Ok(lhs)
    }

    fn disjunction(&mut self) -> Result<bool, ParseError> {
        let mut value = self.conjunction()?;
        while self.eat(Connective::Or) {
            let rhs = self.conjunction()?;
            value = Connective::Or.apply(value, rhs);
        }
        Ok(value)
    }

    fn conjunction(&mut self) -> Result<bool, ParseError> {
        let mut value = self.negation()?;
        while self.eat(Connective::And) {
            let rhs = self.negation()?;
            value = Connective::And.apply(value, rhs);
        }
        Ok(value)
    }

    fn negation(&mut self) -> Result<bool, ParseError> {
        if self.eat(Connective::Not) {
            let value = self.nested(Self::negation)?;
            return Ok(!value);
        }
        self.atom()
    }

    fn atom(&mut self) -> Result<bool, ParseError> {
        let position = self.pos;
        let token = self.peek().ok_or(ParseError::UnexpectedEnd {
            expected: "variable or `(`",
        })?;
        self.pos += 1;

        match token {
            Token::Variable(name) => self.lookup(name, position),
            Token::LeftParen => {
                let value = self.nested(Self::biconditional)?;
                match self.peek() {
                    Some(Token::RightParen) => {
                        self.pos += 1;
                        Ok(value)
                    }
                    Some(other) => Err(ParseError::UnexpectedToken {
                        position: self.pos,
                        found: other.to_string(),
                    }),
                    None => Err(ParseError::UnexpectedEnd { expected: "`)`" }),
                }
            }
            Token::Operator(_) | Token::RightParen => Err(ParseError::UnexpectedToken {
                position,
                found: token.to_string(),
            }),
        }
    }

    fn lookup(&self, name: &str, position: usize) -> Result<bool, ParseError> {
        let var = Variable::from_identifier(name).ok_or_else(|| ParseError::UnknownSymbol {
            symbol: name.to_string(),
            position,
        })?;
        self.assignment
            .get(var)
            .ok_or(ParseError::UnboundVariable {
                name: var.name(),
                position,
            })
    }
}
