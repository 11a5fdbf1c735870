/// Outcome of a single parse attempt.
///
/// A result either carries a value (success) or nothing (failure), and in
/// both cases the part of the input that was not consumed. `remaining` is
/// always a suffix of the text the parser was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult<'a, T> {
    succeeded: bool,
    value: Option<T>,
    remaining: &'a str,
}

impl<'a, T> ParseResult<'a, T> {
    pub fn succeed(value: T, remaining: &'a str) -> Self {
        Self {
            succeeded: true,
            value: Some(value),
            remaining,
        }
    }

    /// A failure; `remaining` is where backtracking resumes.
    pub fn fail(remaining: &'a str) -> Self {
        Self {
            succeeded: false,
            value: None,
            remaining,
        }
    }

    pub fn succeeded(&self) -> bool {
        self.succeeded
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn remaining(&self) -> &'a str {
        self.remaining
    }

    pub fn into_value(self) -> Option<T> {
        self.value
    }

    pub fn into_parts(self) -> (Option<T>, &'a str) {
        (self.value, self.remaining)
    }
}

pub trait Parser<T> {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a, T>;
}

impl<T, F: Fn(&str) -> ParseResult<'_, T>> Parser<T> for F {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a, T> {
        self(input)
    }
}
