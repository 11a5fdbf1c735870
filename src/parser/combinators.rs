use std::ops::{Add, BitOr, Mul, Shr, Sub};
use std::sync::Arc;

use super::state::{ParseResult, Parser};

type ParserFn<T> = Arc<dyn Fn(&str) -> ParseResult<'_, T> + Send + Sync>;

// === Boxed Parser for type erasure ===

/// A reusable, stateless parser producing values of type `T`.
///
/// Cloning is cheap (the underlying closure is shared) and a parser may be
/// used from several threads at once.
pub struct BoxedParser<T> {
    parser: ParserFn<T>,
}

impl<T> Clone for BoxedParser<T> {
    fn clone(&self) -> Self {
        BoxedParser {
            parser: Arc::clone(&self.parser),
        }
    }
}

impl<T: 'static> BoxedParser<T> {
    pub fn new<F>(parser: F) -> Self
    where
        F: Fn(&str) -> ParseResult<'_, T> + Send + Sync + 'static,
    {
        BoxedParser {
            parser: Arc::new(parser),
        }
    }

    /// Succeed with `value` without consuming anything.
    pub fn pure(value: T) -> Self
    where
        T: Clone + Send + Sync,
    {
        BoxedParser::new(move |input: &str| ParseResult::succeed(value.clone(), input))
    }

    /// Fail without consuming anything.
    pub fn failure() -> Self {
        BoxedParser::new(|input: &str| ParseResult::fail(input))
    }
}

impl<T> Parser<T> for BoxedParser<T> {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a, T> {
        (self.parser)(input)
    }
}

// === Combinators as methods ===

impl<T: 'static> BoxedParser<T> {
    /// Map: transform the value of a successful parse
    pub fn map<U: 'static, F>(self, f: F) -> BoxedParser<U>
    where
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        BoxedParser::new(move |input: &str| match self.parse(input).into_parts() {
            (Some(value), remaining) => ParseResult::succeed(f(value), remaining),
            (None, remaining) => ParseResult::fail(remaining),
        })
    }

    /// Like `map`, but `f` may reject the value. A rejection fails at the
    /// original input.
    pub fn try_map<U: 'static, F>(self, f: F) -> BoxedParser<U>
    where
        F: Fn(T) -> Option<U> + Send + Sync + 'static,
    {
        BoxedParser::new(move |input: &str| match self.parse(input).into_parts() {
            (Some(value), remaining) => match f(value) {
                Some(mapped) => ParseResult::succeed(mapped, remaining),
                None => ParseResult::fail(input),
            },
            (None, remaining) => ParseResult::fail(remaining),
        })
    }

    /// Sequence with a data dependency: parse self, build the next parser
    /// from its value, parse that, then combine both values.
    ///
    /// If either step fails the whole sequence fails at the original input,
    /// discarding anything the first step consumed.
    pub fn bind<U: 'static, V: 'static, N, C>(self, next: N, combine: C) -> BoxedParser<V>
    where
        N: Fn(&T) -> BoxedParser<U> + Send + Sync + 'static,
        C: Fn(T, U) -> V + Send + Sync + 'static,
    {
        BoxedParser::new(move |input: &str| {
            let (first, rest) = self.parse(input).into_parts();
            let Some(first) = first else {
                return ParseResult::fail(input);
            };

            match next(&first).parse(rest).into_parts() {
                (Some(second), rest) => ParseResult::succeed(combine(first, second), rest),
                (None, _) => ParseResult::fail(input),
            }
        })
    }

    /// Sequence: parse self then other, return (T, U)
    pub fn seq<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<(T, U)> {
        self.bind(move |_| other.clone(), |a, b| (a, b))
    }

    /// Keep left: parse self then other, discard other's result
    pub fn skip<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<T> {
        self.bind(move |_| other.clone(), |a, _| a)
    }

    /// Keep right: parse self then other, discard self's result
    pub fn skip_left<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<U> {
        self.bind(move |_| other.clone(), |_, b| b)
    }

    /// Choice: try self, if it fails try other on the same input
    pub fn or_else(self, other: BoxedParser<T>) -> BoxedParser<T> {
        BoxedParser::new(move |input: &str| {
            let result = self.parse(input);
            if result.succeeded() {
                result
            } else {
                other.parse(input)
            }
        })
    }

    /// Optional: parse zero or one. Never consumes on failure.
    pub fn optional(self) -> BoxedParser<Option<T>> {
        BoxedParser::new(move |input: &str| match self.parse(input).into_parts() {
            (Some(value), remaining) => ParseResult::succeed(Some(value), remaining),
            (None, _) => ParseResult::succeed(None, input),
        })
    }

    /// Parse zero or more occurrences.
    ///
    /// Stops at the first failure or at the first success that consumed
    /// nothing, so a zero-width parser cannot loop forever.
    pub fn many(self) -> BoxedParser<Vec<T>> {
        BoxedParser::new(move |input: &str| {
            let mut values = Vec::new();
            let mut rest = input;

            loop {
                match self.parse(rest).into_parts() {
                    (Some(value), remaining) if remaining.len() != rest.len() => {
                        values.push(value);
                        rest = remaining;
                    }
                    _ => break,
                }
            }

            ParseResult::succeed(values, rest)
        })
    }

    /// Parse one or more occurrences
    pub fn at_least_one(self) -> BoxedParser<Vec<T>> {
        let rest = self.clone().many();
        self.bind(move |_| rest.clone(), |first, mut rest| {
            rest.insert(0, first);
            rest
        })
    }
}

// === Operator Overloading ===

/// `+` for sequence: A + B -> (A, B)
impl<T: 'static, U: 'static> Add<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<(T, U)>;

    fn add(self, rhs: BoxedParser<U>) -> Self::Output {
        self.seq(rhs)
    }
}

/// `-` for keep left: A - B -> A (parse B, discard result)
impl<T: 'static, U: 'static> Sub<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<T>;

    fn sub(self, rhs: BoxedParser<U>) -> Self::Output {
        self.skip(rhs)
    }
}

/// `*` for keep right: A * B -> B (parse A, discard result)
impl<T: 'static, U: 'static> Mul<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<U>;

    fn mul(self, rhs: BoxedParser<U>) -> Self::Output {
        self.skip_left(rhs)
    }
}

/// `|` for choice: A | B -> A or B
impl<T: 'static> BitOr<BoxedParser<T>> for BoxedParser<T> {
    type Output = BoxedParser<T>;

    fn bitor(self, rhs: BoxedParser<T>) -> Self::Output {
        self.or_else(rhs)
    }
}

/// `>>` for map: A >> fn -> B
impl<T: 'static, U: 'static, F> Shr<F> for BoxedParser<T>
where
    F: Fn(T) -> U + Send + Sync + 'static,
{
    type Output = BoxedParser<U>;

    fn shr(self, f: F) -> Self::Output {
        self.map(f)
    }
}

/// Defer building a parser until it is run. Recursive grammar rules go
/// through this so that constructing a rule does not recurse forever.
pub fn lazy<T: 'static>(rule: fn() -> BoxedParser<T>) -> BoxedParser<T> {
    BoxedParser::new(move |input: &str| rule().parse(input))
}

// === Primitive Parsers ===

/// Exactly the character `expected`.
pub fn char_of(expected: char) -> BoxedParser<char> {
    char_where(move |c| c == expected)
}

/// One character satisfying `predicate`. Fails on empty input.
pub fn char_where<F>(predicate: F) -> BoxedParser<char>
where
    F: Fn(char) -> bool + Send + Sync + 'static,
{
    BoxedParser::new(move |input: &str| {
        let mut chars = input.chars();
        match chars.next() {
            Some(c) if predicate(c) => ParseResult::succeed(c, chars.as_str()),
            _ => ParseResult::fail(input),
        }
    })
}

/// The literal `expected`, yielded back as the value.
pub fn string_of(expected: &'static str) -> BoxedParser<&'static str> {
    BoxedParser::new(move |input: &str| match input.strip_prefix(expected) {
        Some(rest) => ParseResult::succeed(expected, rest),
        None => ParseResult::fail(input),
    })
}
