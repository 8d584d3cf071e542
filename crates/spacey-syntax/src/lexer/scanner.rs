// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Terminal matchers over a byte cursor.
//!
//! The scanner never runs ahead of the grammar. Every method takes a cursor
//! and reports where a match of one particular terminal would end, so the
//! grammar decides what is expected at each position (a `/` in operand
//! position is a regular expression, in operator position a division).

use super::{Position, Span, TokenKind, TriviaKind, operators};

const BOM: char = '\u{FEFF}';

/// Matches terminals and trivia against a source text.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'a> {
    source: &'a str,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self { source }
    }

    /// The scanned source.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Returns true when `pos` is at the end of the source.
    pub fn is_at_end(&self, pos: usize) -> bool {
        pos >= self.source.len()
    }

    pub(super) fn rest(&self, pos: usize) -> &'a str {
        self.source.get(pos..).unwrap_or("")
    }

    pub(super) fn peek(&self, pos: usize) -> Option<char> {
        self.rest(pos).chars().next()
    }

    // Trivia

    /// Skips whitespace, line terminators and comments.
    pub fn skip_spacing(&self, mut pos: usize) -> usize {
        loop {
            let start = pos;
            pos = self.skip_while(pos, |ch| is_whitespace(ch) || is_line_terminator(ch));
            if let Some(end) = self.comment(pos) {
                pos = end;
            }
            if pos == start {
                return pos;
            }
        }
    }

    /// Skips whitespace and comments that contain no line terminator.
    pub fn skip_spacing_no_line_break(&self, mut pos: usize) -> usize {
        loop {
            let start = pos;
            pos = self.skip_while(pos, is_whitespace);
            if let Some(end) = self.single_line_comment(pos) {
                pos = end;
            } else if let Some(end) = self.multi_line_comment(pos) {
                if !self.source[pos..end].contains(is_line_terminator) {
                    pos = end;
                }
            }
            if pos == start {
                return pos;
            }
        }
    }

    /// Skips whitespace and line terminators only, comments are left alone.
    pub fn skip_blanks(&self, pos: usize) -> usize {
        self.skip_while(pos, |ch| is_whitespace(ch) || is_line_terminator(ch))
    }

    /// Returns true when a line terminator or a multi-line comment starts at
    /// `pos`.
    pub fn starts_line_break(&self, pos: usize) -> bool {
        self.peek(pos).is_some_and(is_line_terminator) || self.multi_line_comment(pos).is_some()
    }

    /// Matches a single line terminator sequence (`\r\n` counts as one).
    pub fn line_terminator_sequence(&self, pos: usize) -> Option<usize> {
        let rest = self.rest(pos);
        if rest.starts_with("\r\n") {
            return Some(pos + 2);
        }
        match rest.chars().next() {
            Some(ch) if is_line_terminator(ch) => Some(pos + ch.len_utf8()),
            _ => None,
        }
    }

    /// Matches any comment.
    pub fn comment(&self, pos: usize) -> Option<usize> {
        self.single_line_comment(pos)
            .or_else(|| self.multi_line_comment(pos))
    }

    fn single_line_comment(&self, pos: usize) -> Option<usize> {
        let rest = self.rest(pos);
        let body = if rest.starts_with("//") {
            pos + 2
        } else if rest.starts_with("<!--") {
            pos + 4
        } else {
            return None;
        };
        Some(self.skip_while(body, |ch| !is_line_terminator(ch)))
    }

    fn multi_line_comment(&self, pos: usize) -> Option<usize> {
        let rest = self.rest(pos);
        if !rest.starts_with("/*") {
            return None;
        }
        rest[2..].find("*/").map(|idx| pos + 2 + idx + 2)
    }

    /// Splits a stretch of already-skipped spacing into trivia pieces: one per
    /// comment and one per whitespace run.
    pub fn trivia_pieces(&self, start: usize, end: usize) -> Vec<(TriviaKind, Span)> {
        let mut pieces = Vec::new();
        let mut pos = start;
        while pos < end {
            if let Some(comment_end) = self.comment(pos).filter(|&e| e <= end) {
                pieces.push((TriviaKind::Comment, Span::new(pos, comment_end)));
                pos = comment_end;
                continue;
            }
            let run_end = self
                .skip_while(pos, |ch| is_whitespace(ch) || is_line_terminator(ch))
                .min(end);
            // Anything the spacing rules skipped is either a comment or blank,
            // so a zero-length run only happens on text we do not recognise.
            let run_end = if run_end == pos {
                pos + self.peek(pos).map_or(1, char::len_utf8)
            } else {
                run_end
            };
            match pieces.last_mut() {
                Some((TriviaKind::Whitespace, span)) if span.end == pos => span.end = run_end,
                _ => pieces.push((TriviaKind::Whitespace, Span::new(pos, run_end))),
            }
            pos = run_end;
        }
        pieces
    }

    // Words and punctuation

    /// Matches a punctuator, honouring its `nextNot` guard.
    pub fn punctuator(&self, pos: usize, kind: TokenKind) -> Option<usize> {
        let punct = operators::punctuator(kind)?;
        punct.match_at(self.rest(pos)).map(|len| pos + len)
    }

    /// Matches a reserved word not followed by an identifier part.
    pub fn keyword(&self, pos: usize, kind: TokenKind) -> Option<usize> {
        self.word(pos, kind.keyword_text()?)
    }

    /// Matches a fixed word not followed by an identifier part.
    pub fn word(&self, pos: usize, text: &str) -> Option<usize> {
        let tail = self.rest(pos).strip_prefix(text)?;
        match tail.chars().next() {
            Some(ch) if is_id_continue(ch) || ch == '\\' => None,
            _ => Some(pos + text.len()),
        }
    }

    /// Matches any identifier name, reserved words included.
    pub fn identifier_name(&self, pos: usize) -> Option<usize> {
        let mut end = self.identifier_char(pos, is_id_start)?;
        while let Some(next) = self.identifier_char(end, is_id_continue) {
            end = next;
        }
        Some(end)
    }

    /// Matches an identifier that is not a reserved word.
    pub fn identifier(&self, pos: usize) -> Option<usize> {
        let end = self.identifier_name(pos)?;
        if TokenKind::from_keyword(&self.source[pos..end]).is_some() {
            None
        } else {
            Some(end)
        }
    }

    fn identifier_char(&self, pos: usize, accept: fn(char) -> bool) -> Option<usize> {
        let ch = self.peek(pos)?;
        if ch == '\\' {
            return self.unicode_escape(pos);
        }
        accept(ch).then(|| pos + ch.len_utf8())
    }

    /// Matches `\uXXXX` or `\u{X...}`.
    pub(super) fn unicode_escape(&self, pos: usize) -> Option<usize> {
        let rest = self.rest(pos).strip_prefix("\\u")?;
        if let Some(braced) = rest.strip_prefix('{') {
            let digits = braced.chars().take_while(|c| c.is_ascii_hexdigit()).count();
            if digits == 0 || !braced[digits..].starts_with('}') {
                return None;
            }
            return Some(pos + 3 + digits + 1);
        }
        let hex = rest.get(..4)?;
        hex.chars()
            .all(|c| c.is_ascii_hexdigit())
            .then_some(pos + 6)
    }

    /// Matches a `#!` line. The grammar only asks for one at the start of a
    /// script body.
    pub fn shebang(&self, pos: usize) -> Option<usize> {
        if !self.rest(pos).starts_with("#!") {
            return None;
        }
        Some(self.skip_while(pos + 2, |ch| ch != '\n' && ch != '\r'))
    }

    /// Returns true when some terminal can start at `pos`. Used to tell a
    /// lexical failure from a grammar failure.
    pub fn recognizes_terminal(&self, pos: usize) -> bool {
        self.is_at_end(pos)
            || self.identifier_name(pos).is_some()
            || self.numeric_literal(pos).is_some()
            || self.string_literal(pos).is_some()
            || self.regular_expression(pos).is_some()
            || operators::longest_match(self.rest(pos)).is_some()
    }

    pub(super) fn skip_while(&self, pos: usize, accept: impl Fn(char) -> bool) -> usize {
        let rest = self.rest(pos);
        let len = rest
            .char_indices()
            .find(|&(_, ch)| !accept(ch))
            .map_or(rest.len(), |(idx, _)| idx);
        pos + len
    }
}

/// Maps byte offsets to line/column positions.
///
/// A byte-order mark at offset 0 does not count as a column, so the first
/// line's columns are shifted down by one.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
    has_bom: bool,
}

impl LineIndex {
    /// Indexes the line starts of `source`.
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        let mut chars = source.char_indices().peekable();
        while let Some((idx, ch)) = chars.next() {
            if ch == '\r' && matches!(chars.peek(), Some((_, '\n'))) {
                continue;
            }
            if is_line_terminator(ch) {
                line_starts.push(idx + ch.len_utf8());
            }
        }
        Self {
            line_starts,
            has_bom: source.starts_with(BOM),
        }
    }

    /// Resolves the position of a byte offset.
    pub fn position(&self, source: &str, offset: usize) -> Position {
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let line_start = self.line_starts[line - 1];
        let mut column = source
            .get(line_start..offset)
            .map_or(0, |text| text.chars().count());
        if line == 1 && self.has_bom && offset > 0 {
            column -= 1;
        }
        Position { line, column }
    }
}

/// Checks if a character is JavaScript whitespace.
pub fn is_whitespace(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\u{000B}'
            | '\u{000C}'
            | ' '
            | '\u{00A0}'
            | BOM
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// Checks if a character is a line terminator.
pub fn is_line_terminator(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Checks if a character can start an identifier.
pub fn is_id_start(ch: char) -> bool {
    ch == '_' || ch == '$' || unicode_xid::UnicodeXID::is_xid_start(ch)
}

/// Checks if a character can continue an identifier.
pub fn is_id_continue(ch: char) -> bool {
    ch == '_'
        || ch == '$'
        || ch == '\u{200C}'
        || ch == '\u{200D}'
        || unicode_xid::UnicodeXID::is_xid_continue(ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_skips_comments() {
        let scanner = Scanner::new("  // line\n /* block */ x");
        assert_eq!(scanner.skip_spacing(0), 23);
    }

    #[test]
    fn test_spacing_no_line_break_stops_at_newline() {
        let scanner = Scanner::new(" /* a */ // b\nx");
        assert_eq!(scanner.skip_spacing_no_line_break(0), 13);
        assert!(scanner.starts_line_break(13));

        let scanner = Scanner::new(" /* a\n */ x");
        assert_eq!(scanner.skip_spacing_no_line_break(0), 1);
        assert!(scanner.starts_line_break(1));
    }

    #[test]
    fn test_unterminated_block_comment_is_not_spacing() {
        let scanner = Scanner::new("/* open");
        assert_eq!(scanner.skip_spacing(0), 0);
    }

    #[test]
    fn test_keywords_need_word_boundary() {
        let scanner = Scanner::new("letx let");
        assert_eq!(scanner.word(0, "let"), None);
        assert_eq!(scanner.word(5, "let"), Some(8));
        let scanner = Scanner::new("iffy if(");
        assert_eq!(scanner.keyword(0, TokenKind::If), None);
        assert_eq!(scanner.keyword(5, TokenKind::If), Some(7));
    }

    #[test]
    fn test_identifiers() {
        let scanner = Scanner::new("foo _bar $baz \\u0061bc if");
        assert_eq!(scanner.identifier(0), Some(3));
        assert_eq!(scanner.identifier(4), Some(8));
        assert_eq!(scanner.identifier(9), Some(13));
        assert_eq!(scanner.identifier(14), Some(22));
        assert_eq!(scanner.identifier(23), None);
        assert_eq!(scanner.identifier_name(23), Some(25));
    }

    #[test]
    fn test_unicode_identifier() {
        let scanner = Scanner::new("café = 1");
        assert_eq!(scanner.identifier(0), Some("café".len()));
    }

    #[test]
    fn test_line_terminator_sequence() {
        let scanner = Scanner::new("\r\n\n");
        assert_eq!(scanner.line_terminator_sequence(0), Some(2));
        assert_eq!(scanner.line_terminator_sequence(2), Some(3));
        assert_eq!(scanner.line_terminator_sequence(3), None);
    }

    #[test]
    fn test_trivia_pieces() {
        let source = " \n/* a */  // b\n";
        let scanner = Scanner::new(source);
        let pieces = scanner.trivia_pieces(0, source.len());
        let kinds: Vec<_> = pieces.iter().map(|(kind, _)| *kind).collect();
        assert_eq!(
            kinds,
            vec![
                TriviaKind::Whitespace,
                TriviaKind::Comment,
                TriviaKind::Whitespace,
                TriviaKind::Comment,
                TriviaKind::Whitespace,
            ]
        );
        assert_eq!(pieces[1].1, Span::new(2, 9));
    }

    #[test]
    fn test_shebang_line() {
        let scanner = Scanner::new("#!/usr/bin/env node\nx");
        assert_eq!(scanner.shebang(0), Some(19));
        assert_eq!(scanner.shebang(1), None);

        let scanner = Scanner::new("<script>#!/bin/node\r\n</script>");
        assert_eq!(scanner.shebang(8), Some(19));
        assert_eq!(scanner.shebang(0), None);
    }

    #[test]
    fn test_line_index_positions() {
        let source = "a\r\nbc\nd";
        let index = LineIndex::new(source);
        assert_eq!(index.position(source, 0), Position { line: 1, column: 0 });
        assert_eq!(index.position(source, 4), Position { line: 2, column: 1 });
        assert_eq!(index.position(source, 6), Position { line: 3, column: 0 });
    }

    #[test]
    fn test_line_index_bom_shifts_first_line() {
        let source = "\u{FEFF}ab\nc";
        let index = LineIndex::new(source);
        assert_eq!(index.position(source, 3), Position { line: 1, column: 0 });
        assert_eq!(index.position(source, 4), Position { line: 1, column: 1 });
        assert_eq!(index.position(source, 6), Position { line: 2, column: 0 });
    }

    #[test]
    fn test_recognizes_terminal() {
        let scanner = Scanner::new("\"open #");
        assert!(!scanner.recognizes_terminal(0));
        assert!(!scanner.recognizes_terminal(6));
        assert!(scanner.recognizes_terminal(7));
    }
}
