// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! The JavaScript, JSX, Flow and Vue grammar.
//!
//! Every nonterminal is a function over a [`Parser`]. Alternatives are
//! tried in the order written, and that order is part of the grammar: an
//! earlier alternative shadows a later one whenever both match.
//!
//! ## Structure
//!
//! - `lexical` - end of statement (ASI), names and literals
//! - `expressions` - the precedence chain down to primary expressions
//! - `patterns` - parameters, binding and assignment patterns
//! - `statements` - statement dispatch
//! - `declarations` - functions, classes, decorators, import/export
//! - `jsx` - JSX elements
//! - `flow` - Flow types and declarations
//! - `vue` - the top level of Vue single-file components

mod declarations;
mod expressions;
mod flow;
mod jsx;
mod lexical;
mod patterns;
mod statements;
mod vue;

use crate::engine::Parser;
use crate::lexer::TokenKind;
use crate::tree::{Child, Kind, NodeId, SeparatedList, children};

/// Start rule for scripts and modules: `shebang? module-body?`.
pub fn script(p: &mut Parser<'_>) -> Vec<Child> {
    let shebang = p.optional(|p| p.token(TokenKind::Shebang));
    let body = p.optional(module_body);
    children![shebang, body]
}

/// Start rule for Vue files: script elements and opaque sections.
pub fn vue_script(p: &mut Parser<'_>) -> Vec<Child> {
    vue::items(p)
}

pub(crate) fn module_body(p: &mut Parser<'_>) -> Option<NodeId> {
    let items = p.one_or_more(module_item)?;
    Some(p.node(Kind::ModuleBody, children![items]))
}

pub(crate) fn module_item(p: &mut Parser<'_>) -> Option<NodeId> {
    p.first_of(&[
        declarations::import_declaration,
        declarations::export_declaration,
        statements::statement,
    ])
}

/// Whether a separated list may end with a separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Trailing {
    Allow,
    Forbid,
}

/// `(element (separator element)*)? separator?`
///
/// A separator that is not followed by an element is kept only when
/// trailing separators are allowed, otherwise the cursor is left before it.
pub(crate) fn separated_list(
    p: &mut Parser<'_>,
    mut element: impl FnMut(&mut Parser<'_>) -> Option<NodeId>,
    separators: &[TokenKind],
    trailing: Trailing,
) -> SeparatedList<NodeId> {
    let mut list = SeparatedList::new();
    let Some(first) = p.sequence(&mut element) else {
        return list;
    };
    list.elements.push(first);
    loop {
        let before = p.pos();
        let Some(separator) = p.any_token(separators) else {
            break;
        };
        match p.sequence(&mut element) {
            Some(next) => {
                list.separators.push(separator);
                list.elements.push(next);
            }
            None => {
                if trailing == Trailing::Allow {
                    list.separators.push(separator);
                } else {
                    p.reset(before);
                }
                break;
            }
        }
    }
    list
}

/// Array-shaped list where a comma with no element before it is an elision:
/// `[ , , a , , ]` has elements `[None, None, Some(a), None]` and four commas.
pub(crate) fn elision_list(
    p: &mut Parser<'_>,
    mut element: impl FnMut(&mut Parser<'_>) -> Option<NodeId>,
) -> SeparatedList<Option<NodeId>> {
    let mut list = SeparatedList::new();
    let mut pending = None;
    loop {
        if let Some(comma) = p.token(TokenKind::Comma) {
            list.elements.push(pending.take());
            list.separators.push(comma);
            continue;
        }
        if pending.is_none() {
            if let Some(item) = p.sequence(&mut element) {
                pending = Some(item);
                continue;
            }
        }
        break;
    }
    if pending.is_some() {
        list.elements.push(pending);
    }
    list
}
