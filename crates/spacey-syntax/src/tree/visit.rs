// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Depth-first traversal of a [`Tree`].

use super::{Child, NodeId, Tree};
use crate::lexer::Token;

/// Callbacks for [`walk`]. All methods default to doing nothing.
pub trait Visitor<'src> {
    /// Called before the children of a node.
    fn enter_node(&mut self, _tree: &Tree<'src>, _node: NodeId) {}

    /// Called after the children of a node.
    fn leave_node(&mut self, _tree: &Tree<'src>, _node: NodeId) {}

    /// Called for each token leaf, in stream order.
    fn visit_token(&mut self, _tree: &Tree<'src>, _token: &Token<'src>) {}
}

enum Step {
    Enter(NodeId),
    Leave(NodeId),
    Token(usize),
}

/// Walks the whole tree depth-first, in source order.
pub fn walk<'src, V: Visitor<'src>>(tree: &Tree<'src>, visitor: &mut V) {
    let mut stack = vec![Step::Enter(tree.root())];
    while let Some(step) = stack.pop() {
        match step {
            Step::Enter(id) => {
                visitor.enter_node(tree, id);
                stack.push(Step::Leave(id));
                for child in tree.children(id).iter().rev() {
                    stack.push(match *child {
                        Child::Node(n) => Step::Enter(n),
                        Child::Token(t) => Step::Token(t.index()),
                    });
                }
            }
            Step::Leave(id) => visitor.leave_node(tree, id),
            Step::Token(idx) => visitor.visit_token(tree, &tree.tokens()[idx]),
        }
    }
}
