// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Punctuator table.
//!
//! Each punctuator is a literal text plus a zero-width `nextNot` guard: the
//! characters that must not follow it for the match to count. The guards keep
//! a short operator from matching the prefix of a longer one.
//!
//! | Token | Guard |
//! |-------|-------|
//! | `<` `>` | not before `=` |
//! | `+` `-` | not before itself or `=` |
//! | `*` | not before `*` or `=` |
//! | `&` `\|` | not before itself or `=` |
//! | `=` | not before `=` or `>` |
//! | `!` `==` `!=` `/` `%` `^` `**` | not before `=` |
//! | `<<` | not before `<` or `=` |
//! | `>>` | not before `>` or `=` |
//! | `>>>` | not before `=` |

use super::TokenKind;

/// A punctuator's literal text and its lookahead guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Punctuator {
    /// Token kind produced on a match
    pub kind: TokenKind,
    /// Literal text
    pub text: &'static str,
    /// Characters that must not directly follow the text
    pub not_followed_by: &'static [char],
}

impl Punctuator {
    const fn new(kind: TokenKind, text: &'static str, not_followed_by: &'static [char]) -> Self {
        Self {
            kind,
            text,
            not_followed_by,
        }
    }

    /// Returns the length of the match at the start of `rest`, if any.
    pub fn match_at(&self, rest: &str) -> Option<usize> {
        let tail = rest.strip_prefix(self.text)?;
        match tail.chars().next() {
            Some(ch) if self.not_followed_by.contains(&ch) => None,
            _ => Some(self.text.len()),
        }
    }
}

/// All punctuators, longest text first.
pub const PUNCTUATORS: &[Punctuator] = &[
    Punctuator::new(TokenKind::UnsignedRightShiftEqual, ">>>=", &[]),
    Punctuator::new(TokenKind::StrictEqual, "===", &[]),
    Punctuator::new(TokenKind::StrictNotEqual, "!==", &[]),
    Punctuator::new(TokenKind::UnsignedRightShift, ">>>", &['=']),
    Punctuator::new(TokenKind::LeftShiftEqual, "<<=", &[]),
    Punctuator::new(TokenKind::RightShiftEqual, ">>=", &[]),
    Punctuator::new(TokenKind::StarStarEqual, "**=", &[]),
    Punctuator::new(TokenKind::Ellipsis, "...", &[]),
    Punctuator::new(TokenKind::EqualEqual, "==", &['=']),
    Punctuator::new(TokenKind::NotEqual, "!=", &['=']),
    Punctuator::new(TokenKind::LessThanEqual, "<=", &[]),
    Punctuator::new(TokenKind::GreaterThanEqual, ">=", &[]),
    Punctuator::new(TokenKind::LeftShift, "<<", &['<', '=']),
    Punctuator::new(TokenKind::RightShift, ">>", &['>', '=']),
    Punctuator::new(TokenKind::StarStar, "**", &['=']),
    Punctuator::new(TokenKind::PlusPlus, "++", &[]),
    Punctuator::new(TokenKind::MinusMinus, "--", &[]),
    Punctuator::new(TokenKind::AmpersandAmpersand, "&&", &[]),
    Punctuator::new(TokenKind::PipePipe, "||", &[]),
    Punctuator::new(TokenKind::PlusEqual, "+=", &[]),
    Punctuator::new(TokenKind::MinusEqual, "-=", &[]),
    Punctuator::new(TokenKind::StarEqual, "*=", &[]),
    Punctuator::new(TokenKind::SlashEqual, "/=", &[]),
    Punctuator::new(TokenKind::PercentEqual, "%=", &[]),
    Punctuator::new(TokenKind::AmpersandEqual, "&=", &[]),
    Punctuator::new(TokenKind::PipeEqual, "|=", &[]),
    Punctuator::new(TokenKind::CaretEqual, "^=", &[]),
    Punctuator::new(TokenKind::Arrow, "=>", &[]),
    Punctuator::new(TokenKind::DollarLeftBrace, "${", &[]),
    Punctuator::new(TokenKind::LeftBrace, "{", &[]),
    Punctuator::new(TokenKind::RightBrace, "}", &[]),
    Punctuator::new(TokenKind::LeftParen, "(", &[]),
    Punctuator::new(TokenKind::RightParen, ")", &[]),
    Punctuator::new(TokenKind::LeftBracket, "[", &[]),
    Punctuator::new(TokenKind::RightBracket, "]", &[]),
    Punctuator::new(TokenKind::Dot, ".", &[]),
    Punctuator::new(TokenKind::Semicolon, ";", &[]),
    Punctuator::new(TokenKind::Comma, ",", &[]),
    Punctuator::new(TokenKind::LessThan, "<", &['=']),
    Punctuator::new(TokenKind::GreaterThan, ">", &['=']),
    Punctuator::new(TokenKind::Plus, "+", &['+', '=']),
    Punctuator::new(TokenKind::Minus, "-", &['-', '=']),
    Punctuator::new(TokenKind::Star, "*", &['*', '=']),
    Punctuator::new(TokenKind::Slash, "/", &['=']),
    Punctuator::new(TokenKind::Percent, "%", &['=']),
    Punctuator::new(TokenKind::Ampersand, "&", &['&', '=']),
    Punctuator::new(TokenKind::Pipe, "|", &['|', '=']),
    Punctuator::new(TokenKind::Caret, "^", &['=']),
    Punctuator::new(TokenKind::Bang, "!", &['=']),
    Punctuator::new(TokenKind::Tilde, "~", &[]),
    Punctuator::new(TokenKind::Question, "?", &[]),
    Punctuator::new(TokenKind::Colon, ":", &[]),
    Punctuator::new(TokenKind::Equal, "=", &['=', '>']),
    Punctuator::new(TokenKind::At, "@", &[]),
    Punctuator::new(TokenKind::Backtick, "`", &[]),
];

/// Looks up the punctuator for a token kind.
pub fn punctuator(kind: TokenKind) -> Option<&'static Punctuator> {
    PUNCTUATORS.iter().find(|p| p.kind == kind)
}

/// Returns the longest punctuator matching at the start of `rest`.
pub fn longest_match(rest: &str) -> Option<(TokenKind, usize)> {
    PUNCTUATORS
        .iter()
        .find_map(|p| p.match_at(rest).map(|len| (p.kind, len)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_single(src: &str) -> Option<TokenKind> {
        longest_match(src).map(|(kind, _)| kind)
    }

    fn matches(kind: TokenKind, src: &str) -> bool {
        punctuator(kind).and_then(|p| p.match_at(src)).is_some()
    }

    #[test]
    fn test_plus_operators() {
        assert_eq!(scan_single("+"), Some(TokenKind::Plus));
        assert_eq!(scan_single("++"), Some(TokenKind::PlusPlus));
        assert_eq!(scan_single("+="), Some(TokenKind::PlusEqual));
    }

    #[test]
    fn test_shift_operators() {
        assert_eq!(scan_single("<<"), Some(TokenKind::LeftShift));
        assert_eq!(scan_single("<<="), Some(TokenKind::LeftShiftEqual));
        assert_eq!(scan_single(">>>"), Some(TokenKind::UnsignedRightShift));
        assert_eq!(scan_single(">>>="), Some(TokenKind::UnsignedRightShiftEqual));
    }

    #[test]
    fn test_equal_operators() {
        assert_eq!(scan_single("="), Some(TokenKind::Equal));
        assert_eq!(scan_single("=="), Some(TokenKind::EqualEqual));
        assert_eq!(scan_single("==="), Some(TokenKind::StrictEqual));
        assert_eq!(scan_single("=>"), Some(TokenKind::Arrow));
    }

    #[test]
    fn test_guards_reject_prefixes() {
        assert!(!matches(TokenKind::Ampersand, "&&"));
        assert!(!matches(TokenKind::Ampersand, "&="));
        assert!(!matches(TokenKind::Equal, "=="));
        assert!(!matches(TokenKind::Equal, "=>"));
        assert!(!matches(TokenKind::Bang, "!="));
        assert!(!matches(TokenKind::LessThan, "<="));
        assert!(!matches(TokenKind::Plus, "++"));
        assert!(!matches(TokenKind::EqualEqual, "==="));
    }

    #[test]
    fn test_guards_allow_unrelated_followers() {
        assert!(matches(TokenKind::LessThan, "<<"));
        assert!(matches(TokenKind::GreaterThan, ">>"));
        assert!(matches(TokenKind::Bang, "!!x"));
        assert!(matches(TokenKind::Slash, "/>"));
    }

    #[test]
    fn test_every_kind_has_one_entry() {
        for p in PUNCTUATORS {
            assert_eq!(punctuator(p.kind), Some(p));
        }
    }
}
