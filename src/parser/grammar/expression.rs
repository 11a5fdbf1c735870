//! Expression parsers, from the loosest binding level to the tightest
//!
//! ```text
//! relational     := additive (ws rel_op ws additive)*
//! additive       := multiplicative (ws ("+" | "-") ws multiplicative)*
//! multiplicative := exponential (ws ("*" | "/" | "%") ws exponential)*
//! exponential    := unary ws "**" ws exponential | unary
//! unary          := "-" primary | "+"? primary
//! primary        := variable | literal | "(" ws relational ws ")"
//! ```

use crate::ast::expression::{BinOpKind, Expression};

use crate::parser::combinators::{BoxedParser, char_of, lazy, string_of};
use crate::parser::state::Parser;

use super::literal::{identifier, number, white_spaces};

type Rule = fn() -> BoxedParser<Expression>;
type OperatorRule = fn() -> BoxedParser<&'static str>;

/// One `operator operand` link of a left-associative level, parsed
/// right-recursively and folded into a tree afterwards.
struct OperatorChain {
    symbol: &'static str,
    operand: Expression,
    next: Option<Box<OperatorChain>>,
}

/// Only symbols produced by the operator rules below ever reach this.
fn operator_kind(symbol: &str) -> BinOpKind {
    match BinOpKind::from_symbol(symbol) {
        Some(kind) => kind,
        None => unreachable!("grammar produced unknown operator {symbol:?}"),
    }
}

fn fold_chain(first: Expression, chain: Option<Box<OperatorChain>>) -> Expression {
    let mut acc = first;
    let mut link = chain;

    while let Some(current) = link {
        let OperatorChain {
            symbol,
            operand,
            next,
        } = *current;
        acc = Expression::binary(operator_kind(symbol), acc, operand);
        link = next;
    }

    acc
}

/// chain := (ws operator ws operand chain)?
fn operator_chain(
    operator: OperatorRule,
    operand: Rule,
) -> BoxedParser<Option<Box<OperatorChain>>> {
    BoxedParser::new(move |input: &str| {
        let link = white_spaces() * operator() - white_spaces() + operand();

        link.bind(
            move |_| operator_chain(operator, operand),
            |(symbol, operand), next| {
                Box::new(OperatorChain {
                    symbol,
                    operand,
                    next,
                })
            },
        )
        .optional()
        .parse(input)
    })
}

fn left_associative(operator: OperatorRule, operand: Rule) -> BoxedParser<Expression> {
    operand().bind(move |_| operator_chain(operator, operand), fold_chain)
}

/// rel_op := "==" | "!=" | "<=" | ">=" | "<" | ">"
fn relational_operator() -> BoxedParser<&'static str> {
    // Two-character operators first so "<=" is not read as "<"
    string_of("==") | string_of("!=") | string_of("<=") | string_of(">=") | string_of("<")
        | string_of(">")
}

fn additive_operator() -> BoxedParser<&'static str> {
    string_of("+") | string_of("-")
}

fn multiplicative_operator() -> BoxedParser<&'static str> {
    string_of("*") | string_of("/") | string_of("%")
}

/// expression := relational
pub fn expression() -> BoxedParser<Expression> {
    relational_expr()
}

/// relational := additive (ws rel_op ws additive)*
pub fn relational_expr() -> BoxedParser<Expression> {
    left_associative(relational_operator, additive_expr)
}

/// additive := multiplicative (ws ("+" | "-") ws multiplicative)*
pub fn additive_expr() -> BoxedParser<Expression> {
    left_associative(additive_operator, multiplicative_expr)
}

/// multiplicative := exponential (ws ("*" | "/" | "%") ws exponential)*
pub fn multiplicative_expr() -> BoxedParser<Expression> {
    left_associative(multiplicative_operator, exponential_expr)
}

/// exponential := unary ws "**" ws exponential | unary
///
/// Right-associative: the exponent recurses into this rule again.
pub fn exponential_expr() -> BoxedParser<Expression> {
    let power = unary_expr() - white_spaces() - string_of("**") - white_spaces()
        + lazy(exponential_expr);

    power.map(|(base, exponent)| Expression::binary(BinOpKind::Pow, base, exponent))
        | unary_expr()
}

/// unary := "-" primary | "+"? primary
pub fn unary_expr() -> BoxedParser<Expression> {
    let negated = char_of('-') * primary_expr() >> Expression::negate;
    let signed = char_of('+').optional() * primary_expr();

    negated | signed
}

/// primary := variable | literal | "(" ws relational ws ")"
pub fn primary_expr() -> BoxedParser<Expression> {
    let parenthesized = char_of('(') * white_spaces() * lazy(relational_expr) - white_spaces()
        - char_of(')');

    // Variables before literals; the two cannot overlap today, but the
    // order is part of the grammar.
    variable() | literal() | parenthesized
}

/// variable := identifier
pub fn variable() -> BoxedParser<Expression> {
    identifier() >> Expression::Variable
}

/// literal := number
pub fn literal() -> BoxedParser<Expression> {
    number() >> Expression::Constant
}
