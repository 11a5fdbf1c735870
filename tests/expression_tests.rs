//! Tests for the expression grammar

use std::str::FromStr;

use exprparse::ast::{BinOpKind, Expression};
use exprparse::parser::{
    ParseResult, Parser, exponential_expr, expression, literal, primary_expr, relational_expr,
    unary_expr, variable,
};
use exprparse::{ParseError, parse_expression};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;

fn num(text: &str) -> Expression {
    Expression::constant(Decimal::from_str(text).expect("valid decimal in test"))
}

fn var(name: &str) -> Expression {
    Expression::variable(name)
}

fn bin(op: BinOpKind, left: Expression, right: Expression) -> Expression {
    Expression::binary(op, left, right)
}

fn neg(operand: Expression) -> Expression {
    Expression::negate(operand)
}

/// Parse with the top-level rule, expecting the whole input to be used
fn parse_all(input: &str) -> Expression {
    let result = expression().parse(input);
    assert_eq!(result.remaining(), "", "leftover input for {input:?}");
    result.into_value().expect("expression should parse")
}

#[test]
fn variable_cases() {
    assert_eq!(variable().parse("abc"), ParseResult::succeed(var("abc"), ""));
    assert_eq!(variable().parse("a0_b1"), ParseResult::succeed(var("a0_b1"), ""));
    assert_eq!(variable().parse("_private"), ParseResult::succeed(var("_private"), ""));
    assert_eq!(variable().parse("abc+def"), ParseResult::succeed(var("abc"), "+def"));
    assert_eq!(variable().parse("0abc"), ParseResult::fail("0abc"));
    assert_eq!(variable().parse("+abc"), ParseResult::fail("+abc"));
    assert_eq!(variable().parse("-abc"), ParseResult::fail("-abc"));
    assert_eq!(variable().parse(""), ParseResult::fail(""));
}

#[test]
fn literal_cases() {
    assert_eq!(literal().parse("123abc"), ParseResult::succeed(num("123"), "abc"));
    assert_eq!(literal().parse("123.45abc"), ParseResult::succeed(num("123.45"), "abc"));
    assert_eq!(literal().parse("+123.45abc"), ParseResult::succeed(num("123.45"), "abc"));
    assert_eq!(literal().parse("-123.45abc"), ParseResult::succeed(num("-123.45"), "abc"));
    assert_eq!(literal().parse("abc"), ParseResult::fail("abc"));
}

#[test]
fn primary_cases() {
    assert_eq!(primary_expr().parse("123.45abc"), ParseResult::succeed(num("123.45"), "abc"));
    assert_eq!(primary_expr().parse("_private"), ParseResult::succeed(var("_private"), ""));
    assert_eq!(primary_expr().parse("abc+def"), ParseResult::succeed(var("abc"), "+def"));
    assert_eq!(primary_expr().parse("+abc"), ParseResult::fail("+abc"));
    assert_eq!(primary_expr().parse("-abc"), ParseResult::fail("-abc"));
}

#[test]
fn primary_parenthesized_expression() {
    assert_eq!(
        primary_expr().parse("( a + 1 )*2"),
        ParseResult::succeed(bin(BinOpKind::Add, var("a"), num("1")), "*2")
    );
    assert_eq!(primary_expr().parse("(a + 1"), ParseResult::fail("(a + 1"));
    assert_eq!(primary_expr().parse("()"), ParseResult::fail("()"));
}

#[test]
fn unary_cases() {
    assert_eq!(unary_expr().parse("123.45abc"), ParseResult::succeed(num("123.45"), "abc"));
    assert_eq!(unary_expr().parse("_private"), ParseResult::succeed(var("_private"), ""));
    assert_eq!(unary_expr().parse("abc+def"), ParseResult::succeed(var("abc"), "+def"));
    assert_eq!(unary_expr().parse("+abc"), ParseResult::succeed(var("abc"), ""));
    assert_eq!(unary_expr().parse("-abc"), ParseResult::succeed(neg(var("abc")), ""));
    assert_eq!(unary_expr().parse("-5"), ParseResult::succeed(neg(num("5")), ""));
    assert_eq!(unary_expr().parse("-(a)"), ParseResult::succeed(neg(var("a")), ""));
    assert_eq!(unary_expr().parse("- a"), ParseResult::fail("- a"));
}

#[test]
fn exponential_cases() {
    assert_eq!(
        exponential_expr().parse("abc ** 123.4"),
        ParseResult::succeed(bin(BinOpKind::Pow, var("abc"), num("123.4")), "")
    );
    assert_eq!(exponential_expr().parse("_private"), ParseResult::succeed(var("_private"), ""));
    assert_eq!(exponential_expr().parse("-abc"), ParseResult::succeed(neg(var("abc")), ""));
}

#[test]
fn exponentiation_is_right_associative() {
    assert_eq!(
        exponential_expr().parse("abc ** 123.4 ** 5.6"),
        ParseResult::succeed(
            bin(
                BinOpKind::Pow,
                var("abc"),
                bin(BinOpKind::Pow, num("123.4"), num("5.6")),
            ),
            ""
        )
    );
}

#[test]
fn dangling_power_operator_is_left_unconsumed() {
    assert_eq!(exponential_expr().parse("2 ** "), ParseResult::succeed(num("2"), " ** "));
    assert_eq!(expression().parse("2 ** "), ParseResult::succeed(num("2"), " ** "));
}

#[test]
fn relational_single_comparison() {
    assert_eq!(
        relational_expr().parse("abc == 123.4"),
        ParseResult::succeed(bin(BinOpKind::Eq, var("abc"), num("123.4")), "")
    );
}

#[test]
fn every_relational_operator() {
    let cases = [
        ("a == b", BinOpKind::Eq),
        ("a != b", BinOpKind::NotEq),
        ("a < b", BinOpKind::Lt),
        ("a > b", BinOpKind::Gt),
        ("a <= b", BinOpKind::LtEq),
        ("a >= b", BinOpKind::GtEq),
        ("a<=b", BinOpKind::LtEq),
    ];

    for (input, op) in cases {
        assert_eq!(parse_all(input), bin(op, var("a"), var("b")), "input {input:?}");
    }
}

#[test]
fn subtraction_is_left_associative() {
    assert_eq!(
        parse_all("1 - 2 - 3"),
        bin(
            BinOpKind::Sub,
            bin(BinOpKind::Sub, num("1"), num("2")),
            num("3")
        )
    );
}

#[test]
fn multiplicative_operators_are_left_associative() {
    assert_eq!(
        parse_all("a / b * c % d"),
        bin(
            BinOpKind::Mod,
            bin(
                BinOpKind::Mul,
                bin(BinOpKind::Div, var("a"), var("b")),
                var("c")
            ),
            var("d")
        )
    );
}

#[test]
fn comparisons_chain_to_the_left() {
    assert_eq!(
        parse_all("a < b == c"),
        bin(
            BinOpKind::Eq,
            bin(BinOpKind::Lt, var("a"), var("b")),
            var("c")
        )
    );
}

#[test]
fn precedence_levels_nest() {
    assert_eq!(
        parse_all("a + b * c ** d >= e - f"),
        bin(
            BinOpKind::GtEq,
            bin(
                BinOpKind::Add,
                var("a"),
                bin(
                    BinOpKind::Mul,
                    var("b"),
                    bin(BinOpKind::Pow, var("c"), var("d"))
                )
            ),
            bin(BinOpKind::Sub, var("e"), var("f"))
        )
    );
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(
        parse_all("(1 + 2) * 3"),
        bin(
            BinOpKind::Mul,
            bin(BinOpKind::Add, num("1"), num("2")),
            num("3")
        )
    );
    assert_eq!(
        parse_all("((x))"),
        var("x")
    );
    assert_eq!(
        parse_all("(a ** b) ** c"),
        bin(
            BinOpKind::Pow,
            bin(BinOpKind::Pow, var("a"), var("b")),
            var("c")
        )
    );
}

#[test]
fn unary_minus_binds_tighter_than_power() {
    assert_eq!(
        parse_all("-a ** 2"),
        bin(BinOpKind::Pow, neg(var("a")), num("2"))
    );
    assert_eq!(
        parse_all("2 ** -a"),
        bin(BinOpKind::Pow, num("2"), neg(var("a")))
    );
}

#[test]
fn whitespace_around_operators_is_optional() {
    assert_eq!(parse_all("1+2*3"), parse_all("1 + 2 * 3"));
    assert_eq!(parse_all("a\t-\nb"), bin(BinOpKind::Sub, var("a"), var("b")));
    assert_eq!(
        parse_all("1 -2"),
        bin(BinOpKind::Sub, num("1"), num("2"))
    );
}

#[test]
fn trailing_input_is_returned() {
    assert_eq!(
        expression().parse("a + b )"),
        ParseResult::succeed(bin(BinOpKind::Add, var("a"), var("b")), " )")
    );
    assert_eq!(
        expression().parse("a +"),
        ParseResult::succeed(var("a"), " +")
    );
}

#[test]
fn total_failure_returns_original_input() {
    for input in ["", "+", "*a", ")", "(a", "  a"] {
        assert_eq!(expression().parse(input), ParseResult::fail(input), "input {input:?}");
    }
}

#[test]
fn remaining_is_always_a_suffix() {
    let inputs = ["a + b", "1 - ", "(a ** b", "x <= y >= z", "-", "foo bar", "3.14.15"];

    for input in inputs {
        let result = expression().parse(input);
        assert!(input.ends_with(result.remaining()), "input {input:?}");
        assert!(result.remaining().len() <= input.len());
    }
}

#[test]
fn long_fraction_stays_one_literal() {
    let result = expression().parse("x == 1.00000000000000000000000000001");
    assert_eq!(result.remaining(), "");
    assert_eq!(
        result.into_value(),
        Some(bin(BinOpKind::Eq, var("x"), num("1")))
    );
}

#[test]
fn parse_expression_accepts_surrounding_whitespace() {
    assert_eq!(
        parse_expression("  x * 2\n"),
        Ok(bin(BinOpKind::Mul, var("x"), num("2")))
    );
}

#[test]
fn parse_expression_reports_errors() {
    assert_eq!(
        parse_expression("1 + 2 )"),
        Err(ParseError::TrailingInput {
            parsed: bin(BinOpKind::Add, num("1"), num("2")),
            remaining: ")".to_string()
        })
    );
    assert_eq!(
        parse_expression("x < 1 y").unwrap_err().to_string(),
        "unexpected input after `x < 1`: \"y\""
    );
    assert_eq!(
        parse_expression("?"),
        Err(ParseError::Invalid {
            input: "?".to_string()
        })
    );
    assert_eq!(
        parse_expression("").unwrap_err().to_string(),
        "invalid expression: \"\""
    );
}

#[test]
fn display_output_parses_back_to_the_same_tree() {
    let sources = [
        "a + b * c",
        "(a + b) * c",
        "a - (b - c)",
        "a ** b ** c",
        "(a ** b) ** c",
        "-(a + b) % 3.50",
        "-a ** -b",
        "(x == 1) != (y < 2)",
        "a <= b + (c >= d)",
    ];

    for source in sources {
        let tree = parse_all(source);
        let printed = tree.to_string();
        assert_eq!(parse_all(&printed), tree, "printed {printed:?} from {source:?}");
    }
}

#[test]
fn display_is_minimal() {
    assert_eq!(parse_all("((a)) + (b * c)").to_string(), "a + b * c");
    assert_eq!(parse_all("(a - b) - c").to_string(), "a - b - c");
}

#[test]
fn nested_parentheses() {
    // Each level is parsed twice by the power/unary alternative, so keep
    // the depth modest
    let depth = 12;
    let source = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(parse_all(&source), var("x"));
}

#[test]
fn variables_of_parsed_expression() {
    let tree = parse_all("rate * (base + rate) - bonus");
    assert_eq!(tree.variables(), vec!["rate", "base", "bonus"]);
}
