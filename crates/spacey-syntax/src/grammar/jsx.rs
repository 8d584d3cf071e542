// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! JSX elements, tried as the last primary expression.

use super::expressions::{assignment_expression, this_expression};
use super::lexical::{identifier_name, identifier_reference, string_literal};
use crate::engine::Parser;
use crate::factory::{self, Suffix};
use crate::lexer::TokenKind;
use crate::tree::{Child, Kind, NodeId, children};

pub(crate) fn element(p: &mut Parser<'_>) -> Option<NodeId> {
    p.first_of(&[self_closing_element, standard_element, short_fragment])
}

/// `<name attrs />`
fn self_closing_element(p: &mut Parser<'_>) -> Option<NodeId> {
    let open = p.token(TokenKind::LessThan)?;
    let name = element_name(p)?;
    let attributes = p.zero_or_more(attribute);
    let slash = p.token(TokenKind::Slash)?;
    let close = p.token(TokenKind::GreaterThan)?;
    Some(p.node(
        Kind::JsxSelfClosingElement,
        children![open, name, attributes, slash, close],
    ))
}

fn standard_element(p: &mut Parser<'_>) -> Option<NodeId> {
    let opening = opening_element(p)?;
    let content = p.zero_or_more(child);
    let closing = closing_element(p)?;
    Some(p.node(
        Kind::JsxStandardElement,
        children![opening, content, closing],
    ))
}

fn opening_element(p: &mut Parser<'_>) -> Option<NodeId> {
    let open = p.token(TokenKind::LessThan)?;
    let name = element_name(p)?;
    let attributes = p.zero_or_more(attribute);
    let close = p.token(TokenKind::GreaterThan)?;
    Some(p.node(
        Kind::JsxOpeningElement,
        children![open, name, attributes, close],
    ))
}

fn closing_element(p: &mut Parser<'_>) -> Option<NodeId> {
    let open = p.token(TokenKind::LessThan)?;
    let slash = p.token(TokenKind::Slash)?;
    let name = element_name(p)?;
    let close = p.token(TokenKind::GreaterThan)?;
    Some(p.node(Kind::JsxClosingElement, children![open, slash, name, close]))
}

/// `<> children </>`
fn short_fragment(p: &mut Parser<'_>) -> Option<NodeId> {
    let open = p.token(TokenKind::LessThan)?;
    let open_end = p.token(TokenKind::GreaterThan)?;
    let opening = p.node(Kind::JsxEmptyOpeningElement, children![open, open_end]);
    let content = p.zero_or_more(child);
    let close = p.token(TokenKind::LessThan)?;
    let slash = p.token(TokenKind::Slash)?;
    let close_end = p.token(TokenKind::GreaterThan)?;
    let closing = p.node(
        Kind::JsxEmptyClosingElement,
        children![close, slash, close_end],
    );
    Some(p.node(
        Kind::JsxShortFragmentElement,
        children![opening, content, closing],
    ))
}

// Names

fn element_name(p: &mut Parser<'_>) -> Option<NodeId> {
    p.first_of(&[
        member_name,
        html_tag,
        this_expression,
        |p| whole_word(p, identifier_reference),
        jsx_identifier,
    ])
}

/// `this.a.b`, `Foo.Bar`
fn member_name(p: &mut Parser<'_>) -> Option<NodeId> {
    let head = p.first_of(&[this_expression, identifier_reference])?;
    let parts = p.one_or_more(|p| {
        let dot = p.token(TokenKind::Dot)?;
        let name = identifier_name(p)?;
        Some(Suffix::Dot(dot, name))
    })?;
    Some(factory::member_chain(p.builder(), head, parts))
}

fn html_tag(p: &mut Parser<'_>) -> Option<NodeId> {
    whole_word(p, |p| {
        let token = p.jsx_html_tag_name()?;
        Some(p.node(Kind::JsxHtmlTag, children![token]))
    })
}

/// Runs `rule`, failing when the name it matched continues with a dash,
/// as in `<font-face>`.
fn whole_word(p: &mut Parser<'_>, rule: impl FnOnce(&mut Parser<'_>) -> Option<NodeId>) -> Option<NodeId> {
    p.sequence(|p| {
        let node = rule(p)?;
        (p.peek_char() != Some('-')).then_some(node)
    })
}

fn jsx_identifier(p: &mut Parser<'_>) -> Option<NodeId> {
    let token = p.token(TokenKind::JsxIdentifier)?;
    Some(p.node(Kind::JsxIdentifier, children![token]))
}

// Attributes

fn attribute(p: &mut Parser<'_>) -> Option<NodeId> {
    p.first_of(&[standard_attribute, spread_attribute, jsx_identifier])
}

/// `name=value`
fn standard_attribute(p: &mut Parser<'_>) -> Option<NodeId> {
    let name = jsx_identifier(p)?;
    let eq = p.token(TokenKind::Equal)?;
    let value = p.first_of(&[string_literal, expression_container, element])?;
    Some(p.node(Kind::JsxAttribute, children![name, eq, value]))
}

/// `{...props}`
fn spread_attribute(p: &mut Parser<'_>) -> Option<NodeId> {
    let open = p.token(TokenKind::LeftBrace)?;
    let dots = p.token(TokenKind::Ellipsis)?;
    let value = p.nested(assignment_expression)?;
    let close = p.token(TokenKind::RightBrace)?;
    Some(p.node(
        Kind::JsxSpreadAttribute,
        children![open, dots, value, close],
    ))
}

fn expression_container(p: &mut Parser<'_>) -> Option<NodeId> {
    let open = p.token(TokenKind::LeftBrace)?;
    let value = p.nested(assignment_expression)?;
    let close = p.token(TokenKind::RightBrace)?;
    Some(p.node(Kind::JsxJavascriptExpression, children![open, value, close]))
}

// Children

fn child(p: &mut Parser<'_>) -> Option<NodeId> {
    p.first_of(&[text, element, child_expression])
}

/// Text runs directly after the previous token, so its leading whitespace
/// stays part of the text.
fn text(p: &mut Parser<'_>) -> Option<NodeId> {
    let token = p.raw_token(TokenKind::JsxText)?;
    Some(p.node(Kind::JsxText, children![token]))
}

/// `{expr}` or the empty `{}` (which may hold only a comment).
fn child_expression(p: &mut Parser<'_>) -> Option<NodeId> {
    let open = p.token(TokenKind::LeftBrace)?;
    let value = p.optional(|p| p.nested(assignment_expression));
    let close = p.token(TokenKind::RightBrace)?;
    let parts: Vec<Child> = children![open, value, close];
    Some(p.node(Kind::JsxJavascriptExpression, parts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Rule;

    fn sexp(source: &str, rule: Rule<NodeId>) -> String {
        let mut p = Parser::new(source);
        let node = rule(&mut p).unwrap_or_else(|| panic!("no match: {}", source));
        assert!(p.at_end(), "unconsumed input in {:?}", source);
        let tree = p.into_builder().finish(node);
        tree.to_sexp(tree.root())
    }

    #[test]
    fn test_self_closing_element() {
        assert_eq!(
            sexp("<br />", element),
            "(JsxSelfClosingElement < (JsxHtmlTag br) / >)"
        );
    }

    #[test]
    fn test_standard_element_with_text() {
        assert_eq!(
            sexp("<p>hello {name}</p>", element),
            "(JsxStandardElement (JsxOpeningElement < (JsxHtmlTag p) >) (JsxText hello ) \
             (JsxJavascriptExpression { (IdentifierReference name) }) \
             (JsxClosingElement < / (JsxHtmlTag p) >))"
        );
    }

    #[test]
    fn test_element_names() {
        assert!(sexp("<Foo />", element).contains("(IdentifierReference Foo)"));
        assert!(sexp("<this.props.Item />", element).contains(
            "(DotMemberExpression (DotMemberExpression (ThisExpression this) . (IdentifierName props)) . (IdentifierName Item))"
        ));
        assert!(sexp("<font-face />", element).contains("(JsxIdentifier font-face)"));
    }

    #[test]
    fn test_attributes() {
        let out = sexp(r#"<a href="x" disabled {...rest} onClick={f} />"#, element);
        assert!(out.contains("(JsxAttribute (JsxIdentifier href) = (StringLiteral \"x\"))"));
        assert!(out.contains("(JsxIdentifier disabled)"));
        assert!(out.contains("(JsxSpreadAttribute { ... (IdentifierReference rest) })"));
        assert!(out.contains(
            "(JsxAttribute (JsxIdentifier onClick) = (JsxJavascriptExpression { (IdentifierReference f) }))"
        ));
    }

    #[test]
    fn test_nested_elements_and_empty_expression() {
        let out = sexp("<ul>\n  <li>{}</li>\n</ul>", element);
        assert!(out.contains("(JsxJavascriptExpression { })"));
        assert!(out.contains("(JsxStandardElement (JsxOpeningElement < (JsxHtmlTag li) >)"));
    }

    #[test]
    fn test_short_fragment() {
        assert_eq!(
            sexp("<>a</>", element),
            "(JsxShortFragmentElement (JsxEmptyOpeningElement < >) (JsxText a) (JsxEmptyClosingElement < / >))"
        );
    }
}
