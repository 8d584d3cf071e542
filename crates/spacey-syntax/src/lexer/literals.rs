// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Literal matchers: numbers, strings, regular expressions and template
//! characters.

use super::Scanner;
use super::scanner::{is_id_continue, is_line_terminator};

impl<'a> Scanner<'a> {
    /// Matches a numeric literal.
    ///
    /// Accepts `0x`/`0o`/`0b` integers, decimals with an optional fraction and
    /// exponent (`1.`, `.5`, `1e-3`), `_` separators between digits and a
    /// BigInt `n` suffix on integers.
    pub fn numeric_literal(&self, pos: usize) -> Option<usize> {
        let rest = self.rest(pos);
        let mut chars = rest.chars();
        let first = chars.next()?;
        let second = chars.next();

        if first == '0' {
            let radix = match second {
                Some('x' | 'X') => Some(16),
                Some('o' | 'O') => Some(8),
                Some('b' | 'B') => Some(2),
                _ => None,
            };
            if let Some(radix) = radix {
                let end = self.digits(pos + 2, radix)?;
                return Some(self.bigint_suffix(end));
            }
        }

        let end = if first == '.' {
            self.digits(pos + 1, 10)?
        } else {
            let int_end = self.digits(pos, 10)?;
            if self.peek(int_end) == Some('.') {
                self.digits(int_end + 1, 10).unwrap_or(int_end + 1)
            } else if self.peek(int_end) == Some('n') {
                return Some(int_end + 1);
            } else {
                int_end
            }
        };
        Some(self.exponent(end).unwrap_or(end))
    }

    fn digits(&self, pos: usize, radix: u32) -> Option<usize> {
        let mut end = pos;
        let mut last_was_digit = false;
        for ch in self.rest(pos).chars() {
            if ch.is_digit(radix) {
                last_was_digit = true;
            } else if ch == '_' && last_was_digit {
                last_was_digit = false;
            } else {
                break;
            }
            end += 1;
        }
        // a trailing separator is not part of the number
        if !last_was_digit && end > pos {
            end -= 1;
        }
        (end > pos).then_some(end)
    }

    fn exponent(&self, pos: usize) -> Option<usize> {
        let rest = self.rest(pos);
        let tail = rest.strip_prefix(['e', 'E'])?;
        let sign = usize::from(tail.starts_with(['+', '-']));
        self.digits(pos + 1 + sign, 10)
    }

    fn bigint_suffix(&self, pos: usize) -> usize {
        if self.peek(pos) == Some('n') {
            pos + 1
        } else {
            pos
        }
    }

    /// Matches a single or double quoted string literal.
    pub fn string_literal(&self, pos: usize) -> Option<usize> {
        let quote = self.peek(pos).filter(|&ch| ch == '"' || ch == '\'')?;
        let mut iter = self.rest(pos + 1).char_indices();
        while let Some((idx, ch)) = iter.next() {
            match ch {
                '\\' => {
                    let (_, escaped) = iter.next()?;
                    // `\` CR LF is a single line continuation
                    if escaped == '\r' && self.rest(pos + 1 + idx + 2).starts_with('\n') {
                        iter.next();
                    }
                }
                c if c == quote => return Some(pos + 1 + idx + 1),
                c if is_line_terminator(c) => return None,
                _ => {}
            }
        }
        None
    }

    /// Matches a regular expression literal, body and flags.
    pub fn regular_expression(&self, pos: usize) -> Option<usize> {
        let rest = self.rest(pos);
        let body = rest.strip_prefix('/')?;
        if body.starts_with(['*', '/']) {
            return None;
        }
        let mut iter = body.char_indices();
        let mut in_class = false;
        let body_end = loop {
            let (idx, ch) = iter.next()?;
            match ch {
                c if is_line_terminator(c) => return None,
                '\\' => match iter.next() {
                    Some((_, c)) if !is_line_terminator(c) => {}
                    _ => return None,
                },
                '[' => in_class = true,
                ']' => in_class = false,
                '/' if !in_class => break idx,
                _ => {}
            }
        };
        if body_end == 0 {
            return None;
        }
        let flags_start = pos + 1 + body_end + 1;
        Some(self.skip_while(flags_start, is_id_continue))
    }

    /// Matches the longest run of template characters, stopping before a
    /// backtick or `${`.
    pub fn template_characters(&self, pos: usize) -> Option<usize> {
        let rest = self.rest(pos);
        let mut iter = rest.char_indices().peekable();
        let mut end = 0;
        while let Some((idx, ch)) = iter.next() {
            match ch {
                '`' => break,
                '$' if matches!(iter.peek(), Some((_, '{'))) => break,
                '\\' => match iter.next() {
                    Some((next_idx, next)) => {
                        end = next_idx + next.len_utf8();
                        continue;
                    }
                    None => return None,
                },
                _ => {}
            }
            end = idx + ch.len_utf8();
        }
        (end > 0).then_some(pos + end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(src: &str) -> Option<&str> {
        Scanner::new(src).numeric_literal(0).map(|end| &src[..end])
    }

    fn string(src: &str) -> Option<&str> {
        Scanner::new(src).string_literal(0).map(|end| &src[..end])
    }

    fn regex(src: &str) -> Option<&str> {
        Scanner::new(src).regular_expression(0).map(|end| &src[..end])
    }

    #[test]
    fn test_decimal_numbers() {
        assert_eq!(number("42;"), Some("42"));
        assert_eq!(number("3.14)"), Some("3.14"));
        assert_eq!(number(".5"), Some(".5"));
        assert_eq!(number("1."), Some("1."));
        assert_eq!(number("1e10"), Some("1e10"));
        assert_eq!(number("2.5E-3"), Some("2.5E-3"));
        assert_eq!(number("1e"), Some("1"));
        assert_eq!(number("."), None);
    }

    #[test]
    fn test_radix_numbers() {
        assert_eq!(number("0xFF"), Some("0xFF"));
        assert_eq!(number("0o17"), Some("0o17"));
        assert_eq!(number("0b1010"), Some("0b1010"));
        assert_eq!(number("0b102"), Some("0b10"));
    }

    #[test]
    fn test_separators_and_bigint() {
        assert_eq!(number("1_000_000"), Some("1_000_000"));
        assert_eq!(number("1_"), Some("1"));
        assert_eq!(number("123n"), Some("123n"));
        assert_eq!(number("0xFFn"), Some("0xFFn"));
    }

    #[test]
    fn test_strings() {
        assert_eq!(string(r#""hello" + x"#), Some(r#""hello""#));
        assert_eq!(string(r"'it\'s'"), Some(r"'it\'s'"));
        assert_eq!(string("'a\\\nb'"), Some("'a\\\nb'"));
        assert_eq!(string("'a\\\r\nb'"), Some("'a\\\r\nb'"));
        assert_eq!(string("'open\n'"), None);
        assert_eq!(string("\"open"), None);
    }

    #[test]
    fn test_regular_expressions() {
        assert_eq!(regex("/ab+c/gi.test(s)"), Some("/ab+c/gi"));
        assert_eq!(regex(r"/[/]/"), Some(r"/[/]/"));
        assert_eq!(regex(r"/a\/b/"), Some(r"/a\/b/"));
        assert_eq!(regex("//"), None);
        assert_eq!(regex("/*a*/"), None);
        assert_eq!(regex("/a\n/"), None);
    }

    #[test]
    fn test_template_characters() {
        let scanner = Scanner::new("abc${x}`");
        assert_eq!(scanner.template_characters(0), Some(3));
        let scanner = Scanner::new("a$b\\`c\nd`");
        assert_eq!(scanner.template_characters(0), Some(8));
        let scanner = Scanner::new("`");
        assert_eq!(scanner.template_characters(0), None);
    }
}
