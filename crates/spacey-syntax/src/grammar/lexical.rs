// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Statement ends, names and literals.

use crate::engine::Parser;
use crate::lexer::TokenKind;
use crate::tree::{Kind, NodeId, TokenId, children};

/// End of statement. Succeeds on `;`, or with no token before a line
/// break, a `}`, the end of a Vue script element, or the end of input.
pub(crate) fn eos(p: &mut Parser<'_>) -> Option<Option<TokenId>> {
    if let Some(semi) = p.token(TokenKind::Semicolon) {
        return Some(Some(semi));
    }
    implicit_end(p).then_some(None)
}

/// End of statement where the `;` itself may not follow a line break.
/// After `return`, `break` and `continue` a line break always ends the
/// statement.
pub(crate) fn eos_no_lb(p: &mut Parser<'_>) -> Option<Option<TokenId>> {
    if p.no_line_break() {
        if let Some(semi) = p.token(TokenKind::Semicolon) {
            return Some(Some(semi));
        }
    }
    implicit_end(p).then_some(None)
}

fn implicit_end(p: &mut Parser<'_>) -> bool {
    p.line_break_ahead()
        || p.at_end()
        || p.next(|p| p.token(TokenKind::RightBrace))
        || p.next(|p| p.token(TokenKind::VueScriptEnd))
}

fn name(p: &mut Parser<'_>, kind: Kind, tokens: &[TokenKind]) -> Option<NodeId> {
    let token = p.any_token(tokens)?;
    Some(p.node(kind, children![token]))
}

pub(crate) fn identifier_reference(p: &mut Parser<'_>) -> Option<NodeId> {
    name(
        p,
        Kind::IdentifierReference,
        &[TokenKind::Identifier, TokenKind::Yield, TokenKind::Await],
    )
}

pub(crate) fn binding_identifier(p: &mut Parser<'_>) -> Option<NodeId> {
    name(
        p,
        Kind::BindingIdentifier,
        &[TokenKind::Identifier, TokenKind::Yield, TokenKind::Await],
    )
}

pub(crate) fn label_identifier(p: &mut Parser<'_>) -> Option<NodeId> {
    name(p, Kind::LabelIdentifier, &[TokenKind::Identifier])
}

/// Any identifier name, reserved words included, as after `.`.
pub(crate) fn identifier_name(p: &mut Parser<'_>) -> Option<NodeId> {
    let token = p.identifier_name()?;
    Some(p.node(Kind::IdentifierName, children![token]))
}

pub(crate) fn string_literal(p: &mut Parser<'_>) -> Option<NodeId> {
    name(p, Kind::StringLiteral, &[TokenKind::StringLiteral])
}

pub(crate) fn numeric_literal(p: &mut Parser<'_>) -> Option<NodeId> {
    name(p, Kind::NumericLiteral, &[TokenKind::NumericLiteral])
}

pub(crate) fn literal(p: &mut Parser<'_>) -> Option<NodeId> {
    p.first_of(&[
        numeric_literal,
        string_literal,
        |p| name(p, Kind::BooleanLiteral, &[TokenKind::True, TokenKind::False]),
        |p| name(p, Kind::NullLiteral, &[TokenKind::Null]),
        |p| name(p, Kind::RegularExpressionLiteral, &[TokenKind::RegularExpression]),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eos_variants() {
        let mut p = Parser::new(" ;");
        assert!(matches!(eos(&mut p), Some(Some(_))));

        let mut p = Parser::new("  \n x");
        assert_eq!(eos(&mut p), Some(None));
        assert_eq!(p.pos(), 0);

        let mut p = Parser::new(" }");
        assert_eq!(eos(&mut p), Some(None));

        let mut p = Parser::new("   ");
        assert_eq!(eos(&mut p), Some(None));

        let mut p = Parser::new(" x");
        assert_eq!(eos(&mut p), None);
    }

    #[test]
    fn test_eos_no_lb_leaves_semicolon_after_break() {
        let mut p = Parser::new("\n;");
        assert_eq!(eos_no_lb(&mut p), Some(None));
        assert_eq!(p.pos(), 0);
    }

    #[test]
    fn test_identifier_reference_accepts_yield() {
        let mut p = Parser::new("yield");
        assert!(identifier_reference(&mut p).is_some());
        let mut p = Parser::new("if");
        assert!(identifier_reference(&mut p).is_none());
        let mut p = Parser::new("if");
        assert!(identifier_name(&mut p).is_some());
    }

    #[test]
    fn test_literal_kinds() {
        for (source, kind) in [
            ("1e3", Kind::NumericLiteral),
            ("'s'", Kind::StringLiteral),
            ("false", Kind::BooleanLiteral),
            ("null", Kind::NullLiteral),
            ("/a+/g", Kind::RegularExpressionLiteral),
        ] {
            let mut p = Parser::new(source);
            let node = literal(&mut p).unwrap();
            assert_eq!(p.builder().node_kind(node), kind, "{}", source);
        }
    }
}
