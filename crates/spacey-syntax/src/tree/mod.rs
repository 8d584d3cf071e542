// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Concrete syntax tree.
//!
//! A [`Tree`] owns two arenas: nodes and tokens. Nodes refer to their
//! children by index, children are kept in source order, and tokens are
//! stored in stream order. Every byte of the source belongs either to a
//! token or to the trivia of the token that follows it.

mod builder;
mod kind;
mod visit;

use std::fmt::{self, Write as _};

pub use builder::TreeBuilder;
pub use kind::Kind;
pub use visit::{Visitor, walk};

use crate::lexer::{Position, Span, Token, TokenKind};

/// Index of a node in its tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// The arena index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Index of a token in its tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId(pub(crate) u32);

impl TokenId {
    /// The arena index, which is also the position in the token stream.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A child of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Child {
    /// An inner node
    Node(NodeId),
    /// A token leaf
    Token(TokenId),
}

impl Child {
    /// Returns the node id if this child is a node.
    pub fn as_node(self) -> Option<NodeId> {
        match self {
            Child::Node(id) => Some(id),
            Child::Token(_) => None,
        }
    }

    /// Returns the token id if this child is a token.
    pub fn as_token(self) -> Option<TokenId> {
        match self {
            Child::Token(id) => Some(id),
            Child::Node(_) => None,
        }
    }
}

impl From<NodeId> for Child {
    fn from(id: NodeId) -> Self {
        Child::Node(id)
    }
}

impl From<TokenId> for Child {
    fn from(id: TokenId) -> Self {
        Child::Token(id)
    }
}

/// Anything that can be appended to a child list.
pub(crate) trait ExtendChildren {
    fn extend_children(self, out: &mut Vec<Child>);
}

impl ExtendChildren for Child {
    fn extend_children(self, out: &mut Vec<Child>) {
        out.push(self);
    }
}

impl ExtendChildren for NodeId {
    fn extend_children(self, out: &mut Vec<Child>) {
        out.push(Child::Node(self));
    }
}

impl ExtendChildren for TokenId {
    fn extend_children(self, out: &mut Vec<Child>) {
        out.push(Child::Token(self));
    }
}

impl<T: ExtendChildren> ExtendChildren for Option<T> {
    fn extend_children(self, out: &mut Vec<Child>) {
        if let Some(child) = self {
            child.extend_children(out);
        }
    }
}

impl<T: ExtendChildren> ExtendChildren for Vec<T> {
    fn extend_children(self, out: &mut Vec<Child>) {
        for child in self {
            child.extend_children(out);
        }
    }
}

/// Builds a `Vec<Child>` from node ids, token ids, options and vectors.
macro_rules! children {
    ($($child:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut out: Vec<$crate::tree::Child> = Vec::new();
        $( $crate::tree::ExtendChildren::extend_children($child, &mut out); )*
        out
    }};
}
pub(crate) use children;

/// A node of the final tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Syntactic kind
    pub kind: Kind,
    /// Children in source order
    pub children: Vec<Child>,
    /// Enclosing node, `None` for the root
    pub parent: Option<NodeId>,
}

/// Elements interleaved with separator tokens.
///
/// `separators.len()` is either `elements.len() - 1`, or `elements.len()`
/// when the list ends with a trailing separator. An empty list has no
/// separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatedList<T> {
    /// The elements
    pub elements: Vec<T>,
    /// The separator tokens
    pub separators: Vec<TokenId>,
}

impl<T> SeparatedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            separators: Vec::new(),
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns true if the last separator is not followed by an element.
    pub fn has_trailing_separator(&self) -> bool {
        !self.separators.is_empty() && self.separators.len() == self.elements.len()
    }

    /// Iterates over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T> Default for SeparatedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ExtendChildren> SeparatedList<T> {
    /// Interleaves elements and separators into a child list.
    pub(crate) fn flatten(self) -> Vec<Child> {
        let mut out = Vec::with_capacity(self.elements.len() + self.separators.len());
        let mut separators = self.separators.into_iter();
        for element in self.elements {
            element.extend_children(&mut out);
            if let Some(sep) = separators.next() {
                out.push(Child::Token(sep));
            }
        }
        out
    }
}

/// An immutable concrete syntax tree borrowing its source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<'src> {
    source: &'src str,
    tokens: Vec<Token<'src>>,
    nodes: Vec<Node>,
    root: NodeId,
}

impl<'src> Tree<'src> {
    /// The parsed source text.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// The root node (`Script` or `VueScript`).
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// All nodes, root first, in pre-order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All tokens in stream order. The last one is the end-of-file token.
    pub fn tokens(&self) -> &[Token<'src>] {
        &self.tokens
    }

    /// Looks up a node.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Looks up a token.
    pub fn token(&self, id: TokenId) -> &Token<'src> {
        &self.tokens[id.index()]
    }

    /// The kind of a node.
    pub fn kind(&self, id: NodeId) -> Kind {
        self.node(id).kind
    }

    /// The children of a node.
    pub fn children(&self, id: NodeId) -> &[Child] {
        &self.node(id).children
    }

    /// The parent of a node.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Child nodes only, tokens skipped.
    pub fn child_nodes(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id).iter().filter_map(|c| c.as_node())
    }

    /// Child tokens only, nodes skipped.
    pub fn child_tokens(&self, id: NodeId) -> impl Iterator<Item = &Token<'src>> + '_ {
        self.children(id)
            .iter()
            .filter_map(|c| c.as_token())
            .map(move |t| self.token(t))
    }

    /// The first token leaf under a node.
    pub fn first_token(&self, id: NodeId) -> Option<TokenId> {
        self.children(id).iter().find_map(|child| match *child {
            Child::Token(t) => Some(t),
            Child::Node(n) => self.first_token(n),
        })
    }

    /// The last token leaf under a node.
    pub fn last_token(&self, id: NodeId) -> Option<TokenId> {
        self.children(id).iter().rev().find_map(|child| match *child {
            Child::Token(t) => Some(t),
            Child::Node(n) => self.last_token(n),
        })
    }

    /// Byte span from the first to the last token of a node, trivia excluded.
    pub fn span(&self, id: NodeId) -> Span {
        match (self.first_token(id), self.last_token(id)) {
            (Some(first), Some(last)) => self.token(first).span().cover(self.token(last).span()),
            _ => Span::default(),
        }
    }

    /// Position of the first token of a node.
    pub fn position(&self, id: NodeId) -> Position {
        self.first_token(id)
            .map_or(Position { line: 1, column: 0 }, |t| self.token(t).position)
    }

    /// Source text of a node, trivia before the first token excluded.
    pub fn text(&self, id: NodeId) -> &'src str {
        let span = self.span(id);
        &self.source[span.start..span.end]
    }

    /// Reads a list-shaped node as a separated list.
    ///
    /// Leading and trailing tokens other than `,` and `;` (brackets, keywords)
    /// are skipped. In between, each separator closes a slot and an empty slot
    /// is `None`, so `[ , a]` yields `[None, Some(a)]`.
    pub fn separated_list(&self, id: NodeId) -> SeparatedList<Option<NodeId>> {
        let children = self.children(id);
        let is_delimiter = |child: &Child| match *child {
            Child::Token(t) => !is_separator(self.token(t).kind),
            Child::Node(_) => false,
        };
        let start = children
            .iter()
            .position(|c| !is_delimiter(c))
            .unwrap_or(children.len());
        let end = children
            .iter()
            .rposition(|c| !is_delimiter(c))
            .map_or(start, |idx| idx + 1);

        let mut list = SeparatedList::new();
        let mut slot = None;
        for child in children.get(start..end).unwrap_or(&[]) {
            match *child {
                Child::Token(t) => {
                    list.elements.push(slot.take());
                    list.separators.push(t);
                }
                Child::Node(n) => slot = Some(n),
            }
        }
        if slot.is_some() {
            list.elements.push(slot);
        }
        list
    }

    /// Renders a node as an S-expression: `(Kind child ...)`, tokens as their
    /// text. The end-of-file token is omitted.
    pub fn to_sexp(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_sexp(id, &mut out);
        out
    }

    fn write_sexp(&self, id: NodeId, out: &mut String) {
        let _ = write!(out, "({:?}", self.kind(id));
        for child in self.children(id) {
            match *child {
                Child::Node(n) => {
                    out.push(' ');
                    self.write_sexp(n, out);
                }
                Child::Token(t) => {
                    let token = self.token(t);
                    if !token.is_eof() {
                        out.push(' ');
                        out.push_str(token.text);
                    }
                }
            }
        }
        out.push(')');
    }

    /// Reassembles the source from trivia and token texts.
    pub fn reconstruct(&self) -> String {
        let mut out = String::with_capacity(self.source.len());
        for token in &self.tokens {
            for trivia in &token.trivia {
                out.push_str(trivia.text);
            }
            out.push_str(token.text);
        }
        out
    }
}

impl fmt::Display for Tree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sexp(self.root))
    }
}

fn is_separator(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::Comma | TokenKind::Semicolon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_interleaves_separators() {
        let list = SeparatedList {
            elements: vec![NodeId(0), NodeId(1)],
            separators: vec![TokenId(5), TokenId(6)],
        };
        assert!(list.has_trailing_separator());
        assert_eq!(
            list.flatten(),
            vec![
                Child::Node(NodeId(0)),
                Child::Token(TokenId(5)),
                Child::Node(NodeId(1)),
                Child::Token(TokenId(6)),
            ]
        );
    }

    #[test]
    fn test_flatten_skips_elisions() {
        let list = SeparatedList {
            elements: vec![None, Some(NodeId(3))],
            separators: vec![TokenId(1)],
        };
        assert!(!list.has_trailing_separator());
        assert_eq!(
            list.flatten(),
            vec![Child::Token(TokenId(1)), Child::Node(NodeId(3))]
        );
    }

    #[test]
    fn test_children_macro() {
        let none: Option<TokenId> = None;
        let out = children![TokenId(0), none, Some(NodeId(2)), vec![TokenId(3)]];
        assert_eq!(
            out,
            vec![
                Child::Token(TokenId(0)),
                Child::Node(NodeId(2)),
                Child::Token(TokenId(3)),
            ]
        );
    }
}
