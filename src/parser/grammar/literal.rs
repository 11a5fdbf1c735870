//! Lexical parsers: whitespace, numbers and identifiers

use std::iter;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::parser::combinators::{BoxedParser, char_of, char_where};

/// ws := whitespace*
///
/// Always succeeds; the value is the matched run, possibly empty.
pub fn white_spaces() -> BoxedParser<String> {
    char_where(char::is_whitespace)
        .many()
        .map(|spaces| spaces.into_iter().collect())
}

/// digit := "0" ..= "9"
pub fn digit() -> BoxedParser<char> {
    char_where(|c| c.is_ascii_digit())
}

/// non_digit := letter | "_"
pub fn non_digit() -> BoxedParser<char> {
    char_where(|c| c.is_ascii_alphabetic() || c == '_')
}

/// unsigned_integer := digit+
///
/// Integers too large for a `Decimal` are rejected.
fn unsigned_integer() -> BoxedParser<Decimal> {
    digit()
        .at_least_one()
        .try_map(|digits| Decimal::from_str_exact(&digits.into_iter().collect::<String>()).ok())
}

/// unsigned_decimal := digit* "." digit+
///
/// Fractional digits beyond `Decimal`'s precision are rounded; an integer
/// part out of range is rejected.
fn unsigned_decimal() -> BoxedParser<Decimal> {
    (digit().many() - char_of('.') + digit().at_least_one()).try_map(|(integer, fraction)| {
        let mut text: String = integer.into_iter().collect();
        if text.is_empty() {
            text.push('0');
        }
        text.push('.');
        text.extend(fraction);
        Decimal::from_str(&text).ok()
    })
}

/// unsigned_number := unsigned_decimal | unsigned_integer
///
/// The decimal form goes first, otherwise "3.14" would stop after "3".
fn unsigned_number() -> BoxedParser<Decimal> {
    unsigned_decimal() | unsigned_integer()
}

/// number := "+"? unsigned_number | "-" unsigned_number
pub fn number() -> BoxedParser<Decimal> {
    let positive = char_of('+').optional() * unsigned_number();
    let negative = char_of('-') * unsigned_number() >> |n: Decimal| -n;

    positive | negative
}

/// identifier := non_digit (digit | non_digit)*
pub fn identifier() -> BoxedParser<String> {
    (non_digit() + (digit() | non_digit()).many())
        .map(|(head, tail)| iter::once(head).chain(tail).collect())
}
