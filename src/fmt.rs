//! Pretty printing for expression trees
//!
//! Trees are rendered back into the surface syntax with only the
//! parentheses the grammar needs, so parsing the output gives the same
//! tree again. Negative constants are printed with their sign and read
//! back as a negation of the positive constant.

use std::fmt::{self, Display};

use crate::ast::expression::{BinOpKind, BinaryOp, Expression};

/// `-` applies to a primary expression only
const UNARY_PRECEDENCE: u8 = 5;
const PRIMARY_PRECEDENCE: u8 = 6;

impl Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_expression(self, f, 0)
    }
}

impl Display for BinOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

fn format_expression(
    expr: &Expression,
    f: &mut fmt::Formatter<'_>,
    parent_prec: u8,
) -> fmt::Result {
    match expr {
        Expression::Constant(value) => write!(f, "{value}"),
        Expression::Variable(name) => f.write_str(name),
        Expression::Negate(operand) => {
            parenthesize(f, UNARY_PRECEDENCE < parent_prec, |f| {
                f.write_str("-")?;
                format_expression(operand, f, PRIMARY_PRECEDENCE)
            })
        }
        Expression::BinaryOp(binop) => format_binary_op(binop, f, parent_prec),
    }
}

fn format_binary_op(
    binop: &BinaryOp,
    f: &mut fmt::Formatter<'_>,
    parent_prec: u8,
) -> fmt::Result {
    let op_prec = binop.op.precedence();
    let (left_prec, right_prec) = if binop.op.is_right_associative() {
        (op_prec + 1, op_prec)
    } else {
        (op_prec, op_prec + 1)
    };

    parenthesize(f, op_prec < parent_prec, |f| {
        format_expression(&binop.left, f, left_prec)?;
        write!(f, " {} ", binop.op)?;
        format_expression(&binop.right, f, right_prec)
    })
}

fn parenthesize<F>(f: &mut fmt::Formatter<'_>, needs_parens: bool, body: F) -> fmt::Result
where
    F: FnOnce(&mut fmt::Formatter<'_>) -> fmt::Result,
{
    if needs_parens {
        f.write_str("(")?;
    }
    body(f)?;
    if needs_parens {
        f.write_str(")")?;
    }
    Ok(())
}
