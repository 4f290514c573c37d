//! Veritas: propositional formula evaluation and truth tables.
//!
//! Formulas are written over single uppercase letters with the
//! connectives `¬ ∧ ∨ → ↔` and parentheses. Binding strength, loosest
//! first, is `↔`, `→`, `∨`, `∧`, `¬`.
//!
//! # Overview
//!
//! The crate exposes two entry points:
//!
//! - [`build_truth_table`] enumerates every assignment of the formula's
//!   variables and evaluates the formula under each
//! - [`evaluate`] checks a single assignment
//!
//! Both are pure, synchronous functions. Every failure is a [`ParseError`].
//!
//! # Example
//!
//! ```
//! use veritas_core::{build_truth_table, Classification};
//!
//! let table = build_truth_table("Q ∧ P").unwrap();
//!
//! // Columns follow first appearance, and the last column toggles fastest.
//! let columns: Vec<char> = table.variables().iter().map(|v| v.name()).collect();
//! assert_eq!(columns, vec!['Q', 'P']);
//! assert_eq!(table.len(), 4);
//! assert!(table.rows()[3].value);
//! assert_eq!(table.classification(), Classification::Contingent);
//! ```
//!
//! Evaluating one assignment:
//!
//! ```
//! use veritas_core::{evaluate, Assignment, ParseError, Variable};
//!
//! let p = Variable::new('P').unwrap();
//! let q = Variable::new('Q').unwrap();
//!
//! let assignment = Assignment::from([(p, false), (q, false)]);
//! assert_eq!(evaluate("(P ∧ Q) ∨ ¬P", &assignment), Ok(true));
//!
//! // Every variable needs a value.
//! let partial = Assignment::from([(p, true)]);
//! assert!(matches!(
//!     evaluate("P ∧ Q", &partial),
//!     Err(ParseError::UnboundVariable { name: 'Q', .. })
//! ));
//! ```

pub mod assignment;
pub mod error;
pub mod eval;
pub mod limits;
pub mod logging;
pub mod notation;
pub mod table;
pub mod token;
pub mod variable;

pub use assignment::{generate_assignments, Assignment, Assignments};
pub use error::ParseError;
pub use eval::{evaluate, evaluate_tokens, evaluate_with_limits};
pub use limits::Limits;
pub use table::{
    build_truth_table, build_truth_table_with_limits, Classification, TruthTable, TruthTableRow,
};
pub use token::{tokenize, Connective, Token};
pub use variable::{extract_variables, Variable, VariableSet};
