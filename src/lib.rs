//! # exprparse - Parser Combinators for Arithmetic Expressions
//!
//! `exprparse` turns a textual arithmetic/relational expression into an
//! in-memory expression tree. It is built in three layers, each only
//! calling the one below it:
//!
//! 1. **Combinators** (`parser`) - a generic [`BoxedParser`] over `&str`
//!    with sequencing, alternation, optional and repetition.
//! 2. **Lexical parsers** - whitespace runs, digits, signed decimal
//!    numbers and identifiers.
//! 3. **Grammar** - an operator-precedence parser from relational
//!    comparisons down to parenthesized primaries.
//!
//! ## Pipeline Flow
//!
//! ```text
//! Source Code (&str)
//!     ↓
//! [Grammar rule] → ParseResult<Expression> (value + unconsumed suffix)
//!     ↓
//! [Consumer] → evaluation / compilation (not part of this crate)
//! ```
//!
//! ## Key Design Decisions
//!
//! ### Failure is a value
//! A parse attempt never returns `Err` and never panics on bad input. It
//! produces a [`ParseResult`] that either succeeded or failed, together
//! with the input that is left. Sequences backtrack completely on failure
//! and alternatives always restart from the same input.
//!
//! ### Precedence levels
//! From loosest to tightest: relational (`== != < > <= >=`), additive
//! (`+ -`), multiplicative (`* / %`), exponentiation (`**`, right
//! associative), unary sign, and primary (variable, literal,
//! parenthesized expression). Whitespace is only allowed around binary
//! operators and inside parentheses.
//!
//! ### Exact numbers
//! Literals are [`rust_decimal::Decimal`] values, so `0.1` stays `0.1`.
//!
//! ## Module Structure
//!
//! - [`ast`] - Expression tree definitions
//! - [`parser`] - Combinators, lexical parsers and grammar rules
//! - [`fmt`] - Rendering trees back into source text
//! - [`error`] - Errors of the [`parse_expression`] convenience entry point
//!
//! ## Example
//!
//! ```
//! use exprparse::ast::{BinOpKind, Expression};
//! use exprparse::parser::{Parser, expression};
//!
//! let result = expression().parse("1 - 2 - 3 rest");
//! assert!(result.succeeded());
//! assert_eq!(result.remaining(), " rest");
//!
//! let tree = result.into_value().unwrap();
//! assert!(matches!(tree, Expression::BinaryOp(ref op) if op.op == BinOpKind::Sub));
//! assert_eq!(tree.to_string(), "1 - 2 - 3");
//! ```

pub mod ast;
pub mod error;
pub mod fmt;
pub mod parser;

use log::{debug, trace};

pub use ast::Expression;
pub use error::ParseError;
pub use parser::{BoxedParser, ParseResult, Parser};

/// Parse a complete expression.
///
/// Leading and trailing whitespace is ignored; anything else left over
/// after the expression is an error.
pub fn parse_expression(input: &str) -> Result<Expression, ParseError> {
    debug!("parsing expression {input:?}");

    let padded = parser::white_spaces() * parser::expression() - parser::white_spaces();
    let (value, remaining) = padded.parse(input).into_parts();
    trace!("unconsumed input: {remaining:?}");

    match value {
        Some(expression) if remaining.is_empty() => {
            debug!("parsed {expression}");
            Ok(expression)
        }
        Some(parsed) => Err(ParseError::TrailingInput {
            parsed,
            remaining: remaining.to_string(),
        }),
        None => Err(ParseError::Invalid {
            input: input.to_string(),
        }),
    }
}
