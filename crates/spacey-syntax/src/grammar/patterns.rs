// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Parameters, binding patterns and assignment patterns.

use super::expressions::{assignment_expression, left_hand_side, property_name};
use super::lexical::{binding_identifier, identifier_reference};
use super::{Trailing, elision_list, flow, separated_list};
use crate::engine::Parser;
use crate::factory::{self, ParameterShape};
use crate::lexer::TokenKind;
use crate::tree::{Kind, NodeId, SeparatedList, TokenId, children};

/// A name or a destructuring pattern.
pub(crate) fn binding_target(p: &mut Parser<'_>) -> Option<NodeId> {
    p.first_of(&[object_binding_pattern, array_binding_pattern, binding_identifier])
}

/// `target (?)? (: Type)? (= assign)?`
///
/// The `?` marker is only accepted on function parameters.
pub(crate) fn binding_element(p: &mut Parser<'_>, allow_optional: bool) -> Option<NodeId> {
    let target = binding_target(p)?;
    let typed = p.optional(|p| {
        let question = if allow_optional {
            p.optional(|p| p.token(TokenKind::Question))
        } else {
            None
        };
        let annotation = p.optional(flow::type_annotation);
        if question.is_none() && annotation.is_none() {
            return None;
        }
        Some(p.node(
            Kind::TypedBindingElement,
            children![target, question, annotation],
        ))
    });
    let element = typed.unwrap_or(target);
    match initializer(p) {
        Some((eq, value)) => Some(p.node(
            Kind::InitializedBindingElement,
            children![element, eq, value],
        )),
        None => Some(element),
    }
}

fn initializer(p: &mut Parser<'_>) -> Option<(TokenId, NodeId)> {
    p.optional(|p| {
        let eq = p.token(TokenKind::Equal)?;
        let value = assignment_expression(p)?;
        Some((eq, value))
    })
}

fn parameter(p: &mut Parser<'_>) -> Option<NodeId> {
    binding_element(p, true)
}

fn declarator(p: &mut Parser<'_>) -> Option<NodeId> {
    binding_element(p, false)
}

/// `...target (: Type)?`
pub(crate) fn rest_element(p: &mut Parser<'_>) -> Option<NodeId> {
    let dots = p.token(TokenKind::Ellipsis)?;
    let target = binding_target(p)?;
    let annotation = p.optional(flow::type_annotation);
    Some(p.node(Kind::RestElement, children![dots, target, annotation]))
}

/// `( params )`, in any of the three clause shapes.
pub(crate) fn formal_parameters(p: &mut Parser<'_>) -> Option<NodeId> {
    let open = p.token(TokenKind::LeftParen)?;
    let shape = p.nested(|p| p.first_of(&[list_and_rest, plain_list, rest_only]))?;
    let close = p.token(TokenKind::RightParen)?;
    Some(factory::formal_parameters(p.builder(), open, shape, close))
}

fn list_and_rest(p: &mut Parser<'_>) -> Option<ParameterShape> {
    let list = separated_list(p, parameter, &[TokenKind::Comma], Trailing::Forbid);
    if list.is_empty() {
        return None;
    }
    let comma = p.token(TokenKind::Comma)?;
    let rest = rest_element(p)?;
    Some(ParameterShape::ListAndRest(list, comma, rest))
}

fn plain_list(p: &mut Parser<'_>) -> Option<ParameterShape> {
    let list = separated_list(p, parameter, &[TokenKind::Comma], Trailing::Allow);
    (!list.is_empty()).then_some(ParameterShape::List(list))
}

fn rest_only(p: &mut Parser<'_>) -> Option<ParameterShape> {
    Some(ParameterShape::Rest(p.optional(rest_element)))
}

/// Variable declarators: `a = 1, { b } = c`.
pub(crate) fn declarators(p: &mut Parser<'_>) -> Option<SeparatedList<NodeId>> {
    let list = separated_list(p, declarator, &[TokenKind::Comma], Trailing::Forbid);
    (!list.is_empty()).then_some(list)
}

// Binding patterns

fn object_binding_pattern(p: &mut Parser<'_>) -> Option<NodeId> {
    let open = p.token(TokenKind::LeftBrace)?;
    let list = p.nested(|p| {
        Some(separated_list(
            p,
            binding_property,
            &[TokenKind::Comma],
            Trailing::Allow,
        ))
    })?;
    let close = p.token(TokenKind::RightBrace)?;
    Some(factory::separated(
        p.builder(),
        Kind::ObjectBindingPattern,
        Some(open),
        list,
        Some(close),
    ))
}

fn binding_property(p: &mut Parser<'_>) -> Option<NodeId> {
    p.first_of(&[rest_element, binding_pair, declarator])
}

fn binding_pair(p: &mut Parser<'_>) -> Option<NodeId> {
    let name = property_name(p)?;
    let colon = p.token(TokenKind::Colon)?;
    let value = declarator(p)?;
    Some(p.node(Kind::BindingProperty, children![name, colon, value]))
}

fn array_binding_pattern(p: &mut Parser<'_>) -> Option<NodeId> {
    let open = p.token(TokenKind::LeftBracket)?;
    let list = p.nested(|p| {
        Some(elision_list(p, |p| p.first_of(&[rest_element, declarator])))
    })?;
    let close = p.token(TokenKind::RightBracket)?;
    Some(factory::array_like(
        p.builder(),
        Kind::ArrayBindingPattern,
        open,
        list,
        close,
    ))
}

// Assignment patterns

fn assignment_target(p: &mut Parser<'_>) -> Option<NodeId> {
    p.first_of(&[
        array_assignment_pattern,
        object_assignment_pattern,
        left_hand_side,
    ])
}

fn assignment_element(p: &mut Parser<'_>) -> Option<NodeId> {
    p.first_of(&[assignment_rest, assignment_default])
}

fn assignment_rest(p: &mut Parser<'_>) -> Option<NodeId> {
    let dots = p.token(TokenKind::Ellipsis)?;
    let target = assignment_target(p)?;
    Some(p.node(Kind::AssignmentPatternRestElement, children![dots, target]))
}

fn assignment_default(p: &mut Parser<'_>) -> Option<NodeId> {
    let target = assignment_target(p)?;
    with_default(p, target)
}

fn with_default(p: &mut Parser<'_>, target: NodeId) -> Option<NodeId> {
    match initializer(p) {
        Some((eq, value)) => Some(p.node(
            Kind::AssignmentPatternDefaultElement,
            children![target, eq, value],
        )),
        None => Some(target),
    }
}

/// `[a, , ...b] = c` on the left of `=`.
pub(crate) fn array_assignment_pattern(p: &mut Parser<'_>) -> Option<NodeId> {
    let open = p.token(TokenKind::LeftBracket)?;
    let list = p.nested(|p| Some(elision_list(p, assignment_element)))?;
    let close = p.token(TokenKind::RightBracket)?;
    Some(factory::array_like(
        p.builder(),
        Kind::ArrayAssignmentPattern,
        open,
        list,
        close,
    ))
}

/// `{a, b: c, d = 1, ...e} = f` on the left of `=`.
pub(crate) fn object_assignment_pattern(p: &mut Parser<'_>) -> Option<NodeId> {
    let open = p.token(TokenKind::LeftBrace)?;
    let list = p.nested(|p| {
        Some(separated_list(
            p,
            |p| p.first_of(&[assignment_rest, assignment_pair, shorthand_element]),
            &[TokenKind::Comma],
            Trailing::Allow,
        ))
    })?;
    let close = p.token(TokenKind::RightBrace)?;
    Some(factory::separated(
        p.builder(),
        Kind::ObjectAssignmentPattern,
        Some(open),
        list,
        Some(close),
    ))
}

fn assignment_pair(p: &mut Parser<'_>) -> Option<NodeId> {
    let name = property_name(p)?;
    let colon = p.token(TokenKind::Colon)?;
    let element = assignment_default(p)?;
    Some(p.node(
        Kind::ObjectAssignmentPatternPairElement,
        children![name, colon, element],
    ))
}

fn shorthand_element(p: &mut Parser<'_>) -> Option<NodeId> {
    let name = identifier_reference(p)?;
    with_default(p, name)
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
    fn test_parameter_shapes() {
        assert_eq!(
            sexp("(a, b = 1, ...c)", formal_parameters),
            "(FormalParameterList ( (BindingIdentifier a) , (InitializedBindingElement \
             (BindingIdentifier b) = (NumericLiteral 1)) , (RestElement ... (BindingIdentifier c)) ))"
        );
        assert_eq!(sexp("()", formal_parameters), "(FormalParameterList ( ))");
        assert_eq!(
            sexp("(a,)", formal_parameters),
            "(FormalParameterList ( (BindingIdentifier a) , ))"
        );
        assert_eq!(
            sexp("(...rest)", formal_parameters),
            "(FormalParameterList ( (RestElement ... (BindingIdentifier rest)) ))"
        );
    }

    #[test]
    fn test_typed_optional_parameter() {
        let out = sexp("(x?: number)", formal_parameters);
        assert!(out.contains("(TypedBindingElement (BindingIdentifier x) ? (TypeAnnotation"));
    }

    #[test]
    fn test_binding_patterns() {
        let out = sexp("{ a, b: [c, , d], ...e }", binding_target);
        assert!(out.starts_with("(ObjectBindingPattern {"));
        assert!(out.contains("(BindingProperty (IdentifierName b) : (ArrayBindingPattern [ (BindingIdentifier c) , , (BindingIdentifier d) ])"));
        assert!(out.contains("(RestElement ... (BindingIdentifier e))"));
    }

    #[test]
    fn test_object_assignment_pattern() {
        let out = sexp("{ a, b: c.d, e = 1, ...f }", object_assignment_pattern);
        assert!(out.contains("(ObjectAssignmentPatternPairElement (IdentifierName b) :"));
        assert!(out.contains(
            "(AssignmentPatternDefaultElement (IdentifierReference e) = (NumericLiteral 1))"
        ));
        assert!(out.contains("(AssignmentPatternRestElement ... (IdentifierReference f))"));
    }

    #[test]
    fn test_array_assignment_pattern_elisions() {
        assert_eq!(
            sexp("[, a]", array_assignment_pattern),
            "(ArrayAssignmentPattern [ , (IdentifierReference a) ])"
        );
    }
}
