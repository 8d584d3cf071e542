// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Raw arenas filled during a parse, and the pass that turns them into a
//! [`Tree`].
//!
//! Both arenas are append-only while the grammar runs. Backtracking leaves
//! abandoned nodes and tokens behind, and they are dropped by [`finish`],
//! which only keeps what is reachable from the root.
//!
//! [`finish`]: TreeBuilder::finish

use tracing::debug;

use super::{Child, Kind, Node, NodeId, TokenId, Tree};
use crate::lexer::{LineIndex, Scanner, Token, TokenKind, Trivia};

#[derive(Debug, Clone, Copy)]
struct RawToken {
    kind: TokenKind,
    start: usize,
    end: usize,
}

#[derive(Debug, Clone)]
struct RawNode {
    kind: Kind,
    children: Vec<Child>,
    end: usize,
}

/// Arena of raw tokens and nodes for one parse.
#[derive(Debug)]
pub struct TreeBuilder<'src> {
    source: &'src str,
    tokens: Vec<RawToken>,
    nodes: Vec<RawNode>,
    last_matched: Option<(usize, Kind)>,
}

impl<'src> TreeBuilder<'src> {
    /// Creates an empty builder over `source`.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            tokens: Vec::new(),
            nodes: Vec::new(),
            last_matched: None,
        }
    }

    /// Records a token covering `start..end`.
    pub fn push_token(&mut self, kind: TokenKind, start: usize, end: usize) -> TokenId {
        let id = TokenId(self.tokens.len() as u32);
        self.tokens.push(RawToken { kind, start, end });
        id
    }

    /// Records a node. Children must be given in source order.
    pub fn push_node(&mut self, kind: Kind, children: Vec<Child>) -> NodeId {
        let end = children.last().map_or(0, |child| self.child_end(*child));
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(RawNode {
            kind,
            children,
            end,
        });
        match self.last_matched {
            Some((furthest, _)) if furthest > end => {}
            _ => self.last_matched = Some((end, kind)),
        }
        id
    }

    fn child_end(&self, child: Child) -> usize {
        match child {
            Child::Token(t) => self.tokens[t.index()].end,
            Child::Node(n) => self.nodes[n.index()].end,
        }
    }

    /// Kind of a raw token.
    pub fn token_kind(&self, id: TokenId) -> TokenKind {
        self.tokens[id.index()].kind
    }

    /// Source text of a raw token.
    pub fn token_text(&self, id: TokenId) -> &'src str {
        let token = self.tokens[id.index()];
        &self.source[token.start..token.end]
    }

    /// Kind of a raw node.
    pub fn node_kind(&self, id: NodeId) -> Kind {
        self.nodes[id.index()].kind
    }

    /// Children of a raw node.
    pub fn node_children(&self, id: NodeId) -> &[Child] {
        &self.nodes[id.index()].children
    }

    /// The kind of the node that ends furthest into the source. Ties go to the
    /// node built last, which is the outermost one.
    pub fn last_matched(&self) -> Option<Kind> {
        self.last_matched.map(|(_, kind)| kind)
    }

    /// Number of raw nodes, garbage included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Materializes the tree reachable from `root`.
    ///
    /// Nodes are renumbered in pre-order and tokens in stream order. Each
    /// token gets its line/column and the trivia found in the gap since the
    /// previous token.
    pub fn finish(self, root: NodeId) -> Tree<'src> {
        let mut node_map: Vec<Option<NodeId>> = vec![None; self.nodes.len()];
        let mut order: Vec<NodeId> = Vec::new();
        let mut parents: Vec<Option<NodeId>> = Vec::new();

        // (raw id, new parent)
        let mut stack = vec![(root, None)];
        while let Some((raw, parent)) = stack.pop() {
            let id = NodeId(order.len() as u32);
            node_map[raw.index()] = Some(id);
            order.push(raw);
            parents.push(parent);
            for child in self.nodes[raw.index()].children.iter().rev() {
                if let Child::Node(n) = child {
                    stack.push((*n, Some(id)));
                }
            }
        }

        // Leaves in depth-first order are the tokens in stream order.
        let mut token_map: Vec<Option<TokenId>> = vec![None; self.tokens.len()];
        let mut raw_tokens: Vec<RawToken> = Vec::new();
        let mut leaves = vec![Child::Node(root)];
        while let Some(child) = leaves.pop() {
            match child {
                Child::Token(t) => {
                    token_map[t.index()] = Some(TokenId(raw_tokens.len() as u32));
                    raw_tokens.push(self.tokens[t.index()]);
                }
                Child::Node(n) => leaves.extend(self.nodes[n.index()].children.iter().rev()),
            }
        }
        debug_assert!(raw_tokens.windows(2).all(|w| w[0].end <= w[1].start));

        let nodes = order
            .iter()
            .zip(parents)
            .map(|(raw, parent)| {
                let raw = &self.nodes[raw.index()];
                let children = raw
                    .children
                    .iter()
                    .filter_map(|child| match *child {
                        Child::Node(n) => node_map[n.index()].map(Child::Node),
                        Child::Token(t) => token_map[t.index()].map(Child::Token),
                    })
                    .collect();
                Node {
                    kind: raw.kind,
                    children,
                    parent,
                }
            })
            .collect::<Vec<_>>();

        let tokens = self.materialize(&raw_tokens);
        debug!(
            raw_nodes = self.nodes.len(),
            nodes = nodes.len(),
            tokens = tokens.len(),
            "tree finished"
        );
        Tree {
            source: self.source,
            tokens,
            nodes,
            root: NodeId(0),
        }
    }

    fn materialize(&self, raw: &[RawToken]) -> Vec<Token<'src>> {
        let scanner = Scanner::new(self.source);
        let lines = LineIndex::new(self.source);
        let mut previous_end = 0;
        let mut tokens = Vec::with_capacity(raw.len());
        for token in raw {
            let trivia = scanner
                .trivia_pieces(previous_end, token.start)
                .into_iter()
                .map(|(kind, span)| Trivia {
                    kind,
                    text: &self.source[span.start..span.end],
                    offset: span.start,
                    position: lines.position(self.source, span.start),
                })
                .collect();
            tokens.push(Token {
                kind: token.kind,
                text: &self.source[token.start..token.end],
                offset: token.start,
                position: lines.position(self.source, token.start),
                trivia,
            });
            previous_end = token.end;
        }
        tokens
    }
}
