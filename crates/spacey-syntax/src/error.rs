// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Parse failures.
//!
//! A parse either produces a whole tree or exactly one [`ParseError`].
//! Lines are 1-based and columns 0-based, as everywhere else in the crate.

use thiserror::Error;

use crate::engine::Parser;
use crate::lexer::LineIndex;
use crate::tree::Kind;

/// Result type for parsing
pub type Result<T> = std::result::Result<T, ParseError>;

/// Why a source text could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No terminal of the language starts at the failure position
    #[error("Lexical error at {line}:{column}: unexpected {found}")]
    Lexical {
        /// Line of the failure
        line: usize,
        /// Column of the failure
        column: usize,
        /// The offending character, or `end of input`
        found: String,
    },

    /// Every alternative failed
    #[error("Parse error at {line}:{column}: expected {}{}", .expected.join(", "), after(.last_matched))]
    Grammar {
        /// Line of the furthest failure
        line: usize,
        /// Column of the furthest failure
        column: usize,
        /// Terminals tried at that position
        expected: Vec<String>,
        /// The last construct that did match
        last_matched: Option<Kind>,
    },

    /// The start rule matched but input remains
    #[error("Unexpected input at {line}:{column}{}", after(.last_matched))]
    TrailingInput {
        /// Line where the unparsed input starts
        line: usize,
        /// Column where the unparsed input starts
        column: usize,
        /// The last construct that did match
        last_matched: Option<Kind>,
    },
}

fn after(last_matched: &Option<Kind>) -> String {
    match last_matched {
        Some(kind) => format!(" (after {:?})", kind),
        None => String::new(),
    }
}

impl ParseError {
    /// 1-based line of the failure.
    pub fn line(&self) -> usize {
        match self {
            ParseError::Lexical { line, .. }
            | ParseError::Grammar { line, .. }
            | ParseError::TrailingInput { line, .. } => *line,
        }
    }

    /// 0-based column of the failure.
    pub fn column(&self) -> usize {
        match self {
            ParseError::Lexical { column, .. }
            | ParseError::Grammar { column, .. }
            | ParseError::TrailingInput { column, .. } => *column,
        }
    }

    /// The kind of the last node that matched before the failure.
    pub fn last_matched(&self) -> Option<Kind> {
        match self {
            ParseError::Lexical { .. } => None,
            ParseError::Grammar { last_matched, .. }
            | ParseError::TrailingInput { last_matched, .. } => *last_matched,
        }
    }
}

/// Builds the error for a parse that stopped at `stop`.
///
/// The reported offset is the furthest terminal failure when it lies past
/// `stop`, otherwise `stop` itself.
pub(crate) fn from_failure(p: &Parser<'_>, stop: usize) -> ParseError {
    let source = p.source();
    let furthest = p.failures().furthest().unwrap_or(stop);
    let at = furthest.max(stop);
    let position = LineIndex::new(source).position(source, at);
    let (line, column) = (position.line, position.column);
    let last_matched = p.last_matched();

    if !p.scanner().recognizes_terminal(at) {
        let found = source[at..]
            .chars()
            .next()
            .map_or_else(|| "end of input".to_string(), |ch| format!("{:?}", ch));
        return ParseError::Lexical {
            line,
            column,
            found,
        };
    }
    if furthest > stop {
        let expected = p
            .failures()
            .expected()
            .iter()
            .map(|e| e.to_string())
            .collect();
        return ParseError::Grammar {
            line,
            column,
            expected,
            last_matched,
        };
    }
    ParseError::TrailingInput {
        line,
        column,
        last_matched,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let err = ParseError::Grammar {
            line: 2,
            column: 4,
            expected: vec!["`;`".to_string()],
            last_matched: Some(Kind::IdentifierReference),
        };
        assert_eq!(err.line(), 2);
        assert_eq!(err.column(), 4);
        assert_eq!(err.last_matched(), Some(Kind::IdentifierReference));
    }

    #[test]
    fn test_display() {
        let err = ParseError::TrailingInput {
            line: 1,
            column: 2,
            last_matched: None,
        };
        assert_eq!(err.to_string(), "Unexpected input at 1:2");

        let err = ParseError::Lexical {
            line: 3,
            column: 0,
            found: "'#'".to_string(),
        };
        assert_eq!(err.to_string(), "Lexical error at 3:0: unexpected '#'");
    }
}
