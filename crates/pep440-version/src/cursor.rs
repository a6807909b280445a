use std::str::Chars;

/// A [`Cursor`] over a version string.
///
/// Cloning a cursor is cheap and is how the parser checkpoints before consuming an optional
/// separator that may have to be given back.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    input: &'a str,
    chars: Chars<'a>,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Convert from `&str`.
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.chars(),
            pos: 0,
        }
    }

    /// Returns the current byte position of the cursor.
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// Returns everything that was consumed so far.
    pub(crate) fn consumed(&self) -> &'a str {
        &self.input[..self.pos]
    }

    /// Returns everything that has not been consumed yet.
    pub(crate) fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Returns a slice over the input string.
    pub(crate) fn slice(&self, start: usize, len: usize) -> &'a str {
        &self.input[start..start + len]
    }

    /// Whether the whole input has been consumed.
    pub(crate) fn at_end(&self) -> bool {
        self.pos == self.input.len()
    }

    /// Peeks the next character from the input stream without consuming it.
    pub(crate) fn peek_char(&self) -> Option<char> {
        self.chars.clone().next()
    }

    /// Peeks the character after the next one without consuming anything.
    pub(crate) fn peek_second_char(&self) -> Option<char> {
        let mut chars = self.chars.clone();
        chars.next();
        chars.next()
    }

    /// Returns the next character from the input stream and consumes it.
    pub(crate) fn next(&mut self) -> Option<char> {
        let char = self.chars.next()?;
        self.pos += char.len_utf8();
        Some(char)
    }

    /// Eats the next character from the input stream if it matches the given token.
    pub(crate) fn eat_char(&mut self, token: char) -> bool {
        if self.peek_char() == Some(token) {
            self.next();
            true
        } else {
            false
        }
    }

    /// Eats the next character if it satisfies the condition, returning it.
    pub(crate) fn eat_if(&mut self, condition: impl Fn(char) -> bool) -> Option<char> {
        let char = self.peek_char()?;
        if condition(char) {
            self.next();
            Some(char)
        } else {
            None
        }
    }

    /// Eats `keyword` if the input continues with it, ignoring ASCII case.
    pub(crate) fn eat_keyword(&mut self, keyword: &str) -> bool {
        let Some(candidate) = self.remaining().get(..keyword.len()) else {
            return false;
        };
        if !candidate.eq_ignore_ascii_case(keyword) {
            return false;
        }
        for _ in 0..keyword.len() {
            self.next();
        }
        true
    }

    /// Eats the first of `keywords` the input continues with and returns it as written in the
    /// input, together with the value it is paired with. Callers order `keywords` longest first
    /// so that e.g. `preview` wins over `pre`.
    pub(crate) fn eat_any_keyword<T: Copy>(
        &mut self,
        keywords: &[(&str, T)],
    ) -> Option<(&'a str, T)> {
        let start = self.pos;
        keywords
            .iter()
            .find(|(keyword, _)| self.eat_keyword(keyword))
            .map(|(keyword, value)| (self.slice(start, keyword.len()), *value))
    }

    /// Consumes characters from the cursor as long as the condition is met.
    pub(crate) fn take_while(&mut self, condition: impl Fn(char) -> bool) -> (usize, usize) {
        let start = self.pos();
        let mut len = 0;
        while let Some(char) = self.peek_char() {
            if !condition(char) {
                break;
            }

            self.next();
            len += char.len_utf8();
        }
        (start, len)
    }
}
