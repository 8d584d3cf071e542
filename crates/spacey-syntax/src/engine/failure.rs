// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Furthest-failure bookkeeping.

use std::fmt;

use crate::lexer::TokenKind;

/// Something the grammar tried to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expected {
    /// A terminal of a given kind
    Token(TokenKind),
    /// A contextual word such as `of` or `type`
    Word(&'static str),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Token(kind) => write!(f, "{}", kind),
            Expected::Word(word) => write!(f, "`{}`", word),
        }
    }
}

/// The furthest offset at which a terminal failed and what was expected
/// there.
#[derive(Debug, Clone, Default)]
pub struct FailureTracker {
    furthest: Option<usize>,
    expected: Vec<Expected>,
}

impl FailureTracker {
    /// Records a failed terminal at `offset`.
    pub fn record(&mut self, offset: usize, expected: Expected) {
        match self.furthest {
            Some(furthest) if offset < furthest => {}
            Some(furthest) if offset == furthest => {
                if !self.expected.contains(&expected) {
                    self.expected.push(expected);
                }
            }
            _ => {
                self.furthest = Some(offset);
                self.expected.clear();
                self.expected.push(expected);
            }
        }
    }

    /// The furthest failure offset, if any terminal failed at all.
    pub fn furthest(&self) -> Option<usize> {
        self.furthest
    }

    /// What was expected at the furthest offset, in the order first tried.
    pub fn expected(&self) -> &[Expected] {
        &self.expected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_only_furthest() {
        let mut tracker = FailureTracker::default();
        tracker.record(2, Expected::Token(TokenKind::Semicolon));
        tracker.record(5, Expected::Token(TokenKind::Identifier));
        tracker.record(3, Expected::Token(TokenKind::RightParen));
        assert_eq!(tracker.furthest(), Some(5));
        assert_eq!(tracker.expected(), &[Expected::Token(TokenKind::Identifier)]);
    }

    #[test]
    fn test_deduplicates_at_same_offset() {
        let mut tracker = FailureTracker::default();
        tracker.record(1, Expected::Word("of"));
        tracker.record(1, Expected::Token(TokenKind::In));
        tracker.record(1, Expected::Word("of"));
        assert_eq!(tracker.expected().len(), 2);
        assert_eq!(tracker.expected()[0].to_string(), "`of`");
    }
}
