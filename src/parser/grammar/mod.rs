//! Grammar for arithmetic and relational expressions
//!
//! This module contains the parsing rules organized by layer:
//! - `literal`: lexical parsers (whitespace, digits, numbers, identifiers)
//! - `expression`: the precedence levels that build an [`Expression`] tree
//!
//! [`Expression`]: crate::ast::Expression

mod expression;
mod literal;

pub use expression::{
    additive_expr, exponential_expr, expression, literal, multiplicative_expr, primary_expr,
    relational_expr, unary_expr, variable,
};
pub use literal::{digit, identifier, non_digit, number, white_spaces};
