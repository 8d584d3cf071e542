// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! PEG rule engine.
//!
//! A [`Parser`] holds everything mutable about one parse: the byte cursor,
//! the raw tree arenas, the memo table and the failure tracker. Grammar rules
//! are plain functions of type [`Rule`] and combine through the methods
//! below:
//!
//! | Primitive | Meaning |
//! |-----------|---------|
//! | [`token`](Parser::token) | skip spacing, match one terminal |
//! | [`sequence`](Parser::sequence) | run a closure, rewind on failure |
//! | [`first_of`](Parser::first_of) | ordered choice, first success wins |
//! | [`optional`](Parser::optional) | zero or one |
//! | [`zero_or_more`](Parser::zero_or_more) / [`one_or_more`](Parser::one_or_more) | greedy repetition |
//! | [`next`](Parser::next) / [`next_not`](Parser::next_not) | zero-width lookahead |
//!
//! A checkpoint is just the cursor. Nodes built by an abandoned alternative
//! stay in the arena and are dropped when the tree is finished.

mod failure;

use rustc_hash::FxHashMap;
use tracing::trace;

pub use failure::{Expected, FailureTracker};

use crate::lexer::{Scanner, TokenKind};
use crate::tree::{Child, Kind, NodeId, TokenId, TreeBuilder};

/// A grammar rule.
pub type Rule<T> = fn(&mut Parser<'_>) -> Option<T>;

/// Grammar parameters that change what a rule accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Context {
    /// `in` is not a relational operator (for-loop heads)
    pub no_in: bool,
    /// The next assignment expression may not be an arrow function
    pub no_arrow: bool,
}

/// Rules whose results are memoized per position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoRule {
    /// Comma-separated expression
    Expression,
    /// Assignment expression
    Assignment,
    /// Left-hand-side expression
    LeftHandSide,
    /// Flow type, tried as a function type and again as a parenthesised one
    FlowType,
}

type MemoKey = (MemoRule, usize, Context);

/// The state of one parse.
pub struct Parser<'src> {
    scanner: Scanner<'src>,
    pos: usize,
    ctx: Context,
    builder: TreeBuilder<'src>,
    memo: FxHashMap<MemoKey, Option<(NodeId, usize)>>,
    failures: FailureTracker,
    lookahead: u32,
}

impl<'src> Parser<'src> {
    /// Creates a parser positioned at the start of `source`.
    pub fn new(source: &'src str) -> Self {
        Self {
            scanner: Scanner::new(source),
            pos: 0,
            ctx: Context::default(),
            builder: TreeBuilder::new(source),
            memo: FxHashMap::default(),
            failures: FailureTracker::default(),
            lookahead: 0,
        }
    }

    /// The source being parsed.
    pub fn source(&self) -> &'src str {
        self.scanner.source()
    }

    /// The scanner over the source.
    pub fn scanner(&self) -> &Scanner<'src> {
        &self.scanner
    }

    /// Current cursor.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Moves the cursor back to a checkpoint.
    pub fn reset(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// The active grammar parameters.
    pub fn context(&self) -> Context {
        self.ctx
    }

    /// The failure tracker.
    pub fn failures(&self) -> &FailureTracker {
        &self.failures
    }

    /// Mutable access to the raw arenas.
    pub fn builder(&mut self) -> &mut TreeBuilder<'src> {
        &mut self.builder
    }

    /// Consumes the parser and returns its arenas.
    pub fn into_builder(self) -> TreeBuilder<'src> {
        self.builder
    }

    /// Records a node.
    pub fn node(&mut self, kind: Kind, children: Vec<Child>) -> NodeId {
        self.builder.push_node(kind, children)
    }

    /// Number of entries in the memo table.
    pub fn memo_len(&self) -> usize {
        self.memo.len()
    }

    /// Kind of the node that reached furthest so far.
    pub fn last_matched(&self) -> Option<Kind> {
        self.builder.last_matched()
    }

    /// The raw character at the cursor, spacing not skipped.
    pub fn peek_char(&self) -> Option<char> {
        self.source()[self.pos..].chars().next()
    }

    // Terminals

    /// Skips spacing and matches one terminal of `kind`.
    pub fn token(&mut self, kind: TokenKind) -> Option<TokenId> {
        let start = self.scanner.skip_spacing(self.pos);
        self.terminal(start, kind)
    }

    /// Matches one terminal of `kind` right at the cursor, with no spacing
    /// before it.
    pub fn raw_token(&mut self, kind: TokenKind) -> Option<TokenId> {
        self.terminal(self.pos, kind)
    }

    /// Skips whitespace and line terminators but not comments, then matches a
    /// terminal. Used between Vue sections, where `<!--` opens markup.
    pub fn blank_token(&mut self, kind: TokenKind) -> Option<TokenId> {
        let start = self.scanner.skip_blanks(self.pos);
        self.terminal(start, kind)
    }

    /// Matches the first terminal of `kinds` that fits.
    pub fn any_token(&mut self, kinds: &[TokenKind]) -> Option<TokenId> {
        kinds.iter().find_map(|&kind| self.token(kind))
    }

    /// Matches an identifier spelled exactly `text` (a contextual keyword).
    pub fn word(&mut self, text: &'static str) -> Option<TokenId> {
        let start = self.scanner.skip_spacing(self.pos);
        match self.scanner.word(start, text) {
            Some(end) => Some(self.accept(TokenKind::Identifier, start, end)),
            None => {
                self.fail(start, Expected::Word(text));
                None
            }
        }
    }

    /// Matches any identifier name, reserved words included.
    pub fn identifier_name(&mut self) -> Option<TokenId> {
        let start = self.scanner.skip_spacing(self.pos);
        match self.scanner.identifier_name(start) {
            Some(end) => Some(self.accept(TokenKind::Identifier, start, end)),
            None => {
                self.fail(start, Expected::Token(TokenKind::Identifier));
                None
            }
        }
    }

    /// Matches a lower-case JSX tag name.
    pub fn jsx_html_tag_name(&mut self) -> Option<TokenId> {
        let start = self.scanner.skip_spacing(self.pos);
        match self.scanner.jsx_html_tag_name(start) {
            Some(end) => Some(self.accept(TokenKind::JsxIdentifier, start, end)),
            None => {
                self.fail(start, Expected::Token(TokenKind::JsxIdentifier));
                None
            }
        }
    }

    fn terminal(&mut self, start: usize, kind: TokenKind) -> Option<TokenId> {
        match self.match_terminal(start, kind) {
            Some(end) => Some(self.accept(kind, start, end)),
            None => {
                self.fail(start, Expected::Token(kind));
                None
            }
        }
    }

    fn match_terminal(&self, at: usize, kind: TokenKind) -> Option<usize> {
        let s = &self.scanner;
        match kind {
            TokenKind::Identifier => s.identifier(at),
            TokenKind::NumericLiteral => s.numeric_literal(at),
            TokenKind::StringLiteral => s.string_literal(at),
            TokenKind::RegularExpression => s.regular_expression(at),
            TokenKind::TemplateCharacters => s.template_characters(at),
            TokenKind::JsxText => s.jsx_text(at),
            TokenKind::JsxIdentifier => s.jsx_identifier(at),
            TokenKind::Shebang => s.shebang(at),
            TokenKind::VueScriptStart => s.vue_script_start(at),
            TokenKind::VueScriptEnd => s.vue_script_end(at),
            TokenKind::VueSection => s.vue_section(at),
            TokenKind::Eof => s.is_at_end(at).then_some(at),
            k if k.is_keyword() => s.keyword(at, k),
            k => s.punctuator(at, k),
        }
    }

    fn accept(&mut self, kind: TokenKind, start: usize, end: usize) -> TokenId {
        self.pos = end;
        self.builder.push_token(kind, start, end)
    }

    fn fail(&mut self, at: usize, expected: Expected) {
        if self.lookahead == 0 {
            self.failures.record(at, expected);
        }
    }

    // Line-break sensitive checks

    /// True when no line terminator (or comment containing one) separates the
    /// cursor from the next token.
    pub fn no_line_break(&self) -> bool {
        let at = self.scanner.skip_spacing_no_line_break(self.pos);
        !self.scanner.starts_line_break(at)
    }

    /// True when a line break follows the cursor, once whitespace and
    /// single-line comments are skipped.
    pub fn line_break_ahead(&self) -> bool {
        !self.no_line_break()
    }

    /// True when only spacing remains.
    pub fn at_end(&self) -> bool {
        self.scanner.is_at_end(self.scanner.skip_spacing(self.pos))
    }

    /// Offset of the next token, spacing skipped.
    pub fn spacing_end(&self) -> usize {
        self.scanner.skip_spacing(self.pos)
    }

    // Combinators

    /// Runs `f` and rewinds the cursor if it fails.
    pub fn sequence<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let start = self.pos;
        let result = f(self);
        if result.is_none() {
            self.pos = start;
        }
        result
    }

    /// Ordered choice: the first alternative that succeeds wins.
    pub fn first_of<T>(&mut self, alternatives: &[Rule<T>]) -> Option<T> {
        alternatives
            .iter()
            .find_map(|alternative| self.sequence(|p| alternative(p)))
    }

    /// Zero or one.
    pub fn optional<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        self.sequence(f)
    }

    /// Zero or more, greedy. Stops when `f` fails or makes no progress.
    pub fn zero_or_more<T>(&mut self, mut f: impl FnMut(&mut Self) -> Option<T>) -> Vec<T> {
        let mut items = Vec::new();
        loop {
            let start = self.pos;
            match self.sequence(&mut f) {
                Some(item) if self.pos > start => items.push(item),
                Some(_) => {
                    self.pos = start;
                    break;
                }
                None => break,
            }
        }
        items
    }

    /// One or more, greedy.
    pub fn one_or_more<T>(&mut self, f: impl FnMut(&mut Self) -> Option<T>) -> Option<Vec<T>> {
        let items = self.zero_or_more(f);
        (!items.is_empty()).then_some(items)
    }

    /// Positive lookahead. Never moves the cursor.
    pub fn next<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> bool {
        let start = self.pos;
        self.lookahead += 1;
        let matched = f(self).is_some();
        self.lookahead -= 1;
        self.pos = start;
        matched
    }

    /// Negative lookahead. Never moves the cursor.
    pub fn next_not<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> bool {
        !self.next(f)
    }

    /// Runs `f` with other grammar parameters, restoring them afterwards.
    pub fn with_context<T>(
        &mut self,
        ctx: Context,
        f: impl FnOnce(&mut Self) -> Option<T>,
    ) -> Option<T> {
        let saved = std::mem::replace(&mut self.ctx, ctx);
        let result = self.sequence(f);
        self.ctx = saved;
        result
    }

    /// Runs `f` with default parameters, as inside brackets or a function
    /// body.
    pub fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        self.with_context(Context::default(), f)
    }

    /// Clears `no_arrow` and returns whether it was set. Only the outermost
    /// assignment expression of a conditional branch sees the flag.
    pub fn take_no_arrow(&mut self) -> bool {
        std::mem::take(&mut self.ctx.no_arrow)
    }

    /// Runs a rule through the memo table, keyed by rule, position and
    /// context.
    pub fn memoized(&mut self, rule: MemoRule, f: Rule<NodeId>) -> Option<NodeId> {
        let key = (rule, self.pos, self.ctx);
        if let Some(&entry) = self.memo.get(&key) {
            trace!(?rule, pos = self.pos, hit = entry.is_some(), "memo hit");
            return entry.map(|(node, end)| {
                self.pos = end;
                node
            });
        }
        let result = self.sequence(|p| f(p));
        self.memo.insert(key, result.map(|node| (node, self.pos)));
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_skips_spacing() {
        let mut p = Parser::new("  /* c */ return");
        assert!(p.token(TokenKind::Return).is_some());
        assert_eq!(p.pos(), 16);
        assert!(p.at_end());
    }

    #[test]
    fn test_failed_token_records_furthest() {
        let mut p = Parser::new("a  b");
        assert!(p.token(TokenKind::Identifier).is_some());
        assert!(p.token(TokenKind::Semicolon).is_none());
        assert_eq!(p.pos(), 1);
        assert_eq!(p.failures().furthest(), Some(3));
        assert_eq!(
            p.failures().expected(),
            &[Expected::Token(TokenKind::Semicolon)]
        );
    }

    #[test]
    fn test_sequence_rewinds() {
        let mut p = Parser::new("a b");
        let result = p.sequence(|p| {
            p.token(TokenKind::Identifier)?;
            p.token(TokenKind::Comma)
        });
        assert!(result.is_none());
        assert_eq!(p.pos(), 0);
    }

    #[test]
    fn test_first_of_is_ordered() {
        fn id(p: &mut Parser<'_>) -> Option<TokenKind> {
            p.token(TokenKind::Identifier).map(|_| TokenKind::Identifier)
        }
        fn word(p: &mut Parser<'_>) -> Option<TokenKind> {
            p.word("of").map(|_| TokenKind::Eof)
        }
        let mut p = Parser::new("of");
        assert_eq!(p.first_of(&[id, word]), Some(TokenKind::Identifier));
        let mut p = Parser::new("of");
        assert_eq!(p.first_of(&[word, id]), Some(TokenKind::Eof));
    }

    #[test]
    fn test_zero_or_more_and_lookahead() {
        let mut p = Parser::new("a, b, c;");
        let items = p.zero_or_more(|p| {
            let id = p.token(TokenKind::Identifier)?;
            p.optional(|p| p.token(TokenKind::Comma));
            Some(id)
        });
        assert_eq!(items.len(), 3);
        assert!(p.next(|p| p.token(TokenKind::Semicolon)));
        assert!(p.next_not(|p| p.token(TokenKind::Comma)));
        assert_eq!(p.pos(), 7);
    }

    #[test]
    fn test_lookahead_does_not_record_failures() {
        let mut p = Parser::new("x");
        assert!(p.next_not(|p| p.token(TokenKind::Semicolon)));
        assert_eq!(p.failures().furthest(), None);
    }

    #[test]
    fn test_no_line_break() {
        let mut p = Parser::new("a /* c */ b\nc");
        p.token(TokenKind::Identifier);
        assert!(p.no_line_break());
        p.token(TokenKind::Identifier);
        assert!(p.line_break_ahead());
    }

    #[test]
    fn test_memoized_replays_result() {
        fn ident(p: &mut Parser<'_>) -> Option<NodeId> {
            let t = p.token(TokenKind::Identifier)?;
            Some(p.node(Kind::IdentifierReference, vec![Child::Token(t)]))
        }
        let mut p = Parser::new("abc def");
        let first = p.memoized(MemoRule::LeftHandSide, ident);
        let end = p.pos();
        p.reset(0);
        let second = p.memoized(MemoRule::LeftHandSide, ident);
        assert_eq!(first, second);
        assert_eq!(p.pos(), end);
        assert_eq!(p.memo_len(), 1);
    }

    #[test]
    fn test_context_is_restored() {
        let mut p = Parser::new("x");
        let ctx = Context {
            no_in: true,
            no_arrow: false,
        };
        p.with_context(ctx, |p| {
            assert!(p.context().no_in);
            p.nested(|p| {
                assert!(!p.context().no_in);
                Some(())
            })
        });
        assert_eq!(p.context(), Context::default());
    }
}
