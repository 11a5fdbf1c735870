use thiserror::Error;

use crate::ast::Expression;

/// Why [`parse_expression`](crate::parse_expression) rejected its input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No expression could be read at all
    #[error("invalid expression: {input:?}")]
    Invalid { input: String },

    /// An expression was read, but input was left over after it
    #[error("unexpected input after `{parsed}`: {remaining:?}")]
    TrailingInput { parsed: Expression, remaining: String },
}
