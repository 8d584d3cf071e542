// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Expressions, from the comma operator down to primary expressions.

use super::lexical::{self, identifier_reference};
use super::{Trailing, declarations, elision_list, flow, jsx, patterns, separated_list};
use crate::engine::{Context, MemoRule, Parser};
use crate::factory::{self, Suffix};
use crate::lexer::TokenKind;
use crate::tree::{Child, Kind, NodeId, TokenId, children};

const ASSIGNMENT_OPERATORS: &[TokenKind] = &[
    TokenKind::Equal,
    TokenKind::StarEqual,
    TokenKind::StarStarEqual,
    TokenKind::SlashEqual,
    TokenKind::PercentEqual,
    TokenKind::PlusEqual,
    TokenKind::MinusEqual,
    TokenKind::LeftShiftEqual,
    TokenKind::RightShiftEqual,
    TokenKind::UnsignedRightShiftEqual,
    TokenKind::AmpersandEqual,
    TokenKind::CaretEqual,
    TokenKind::PipeEqual,
];

const PREFIX_OPERATORS: &[TokenKind] = &[
    TokenKind::Delete,
    TokenKind::Void,
    TokenKind::Typeof,
    TokenKind::PlusPlus,
    TokenKind::MinusMinus,
    TokenKind::Plus,
    TokenKind::Minus,
    TokenKind::Tilde,
    TokenKind::Bang,
    TokenKind::Await,
];

const RELATIONAL_OPERATORS: &[TokenKind] = &[
    TokenKind::LessThanEqual,
    TokenKind::GreaterThanEqual,
    TokenKind::LessThan,
    TokenKind::GreaterThan,
    TokenKind::Instanceof,
    TokenKind::In,
];

/// `assign (, assign)*`
pub(crate) fn expression(p: &mut Parser<'_>) -> Option<NodeId> {
    p.memoized(MemoRule::Expression, |p| {
        let first = assignment_expression(p)?;
        let rest = p.zero_or_more(|p| {
            let comma = p.token(TokenKind::Comma)?;
            let next = assignment_expression(p)?;
            Some((comma, next))
        });
        factory::binary_chain(p.builder(), first, rest)
    })
}

pub(crate) fn assignment_expression(p: &mut Parser<'_>) -> Option<NodeId> {
    p.memoized(MemoRule::Assignment, assignment_body)
}

fn assignment_body(p: &mut Parser<'_>) -> Option<NodeId> {
    let no_arrow = p.take_no_arrow();
    let assigned = p.first_of(&[pattern_assignment, operator_assignment, yield_expression]);
    if assigned.is_some() {
        return assigned;
    }
    if !no_arrow {
        if let Some(arrow) = p.sequence(arrow_function) {
            return Some(arrow);
        }
    }
    p.sequence(|p| {
        let expr = conditional_expression(p)?;
        p.next_not(|p| p.token(TokenKind::Arrow)).then_some(expr)
    })
}

fn pattern_assignment(p: &mut Parser<'_>) -> Option<NodeId> {
    let target = patterns::array_assignment_pattern(p)?;
    let op = p.token(TokenKind::Equal)?;
    let value = assignment_expression(p)?;
    factory::assignment(p.builder(), target, op, value)
}

fn operator_assignment(p: &mut Parser<'_>) -> Option<NodeId> {
    let target = p.first_of(&[patterns::object_assignment_pattern, left_hand_side])?;
    let op = p.any_token(ASSIGNMENT_OPERATORS)?;
    let value = assignment_expression(p)?;
    factory::assignment(p.builder(), target, op, value)
}

fn yield_expression(p: &mut Parser<'_>) -> Option<NodeId> {
    let keyword = p.token(TokenKind::Yield)?;
    let operand = p.optional(|p| {
        if !p.no_line_break() {
            return None;
        }
        let star = p.optional(|p| p.token(TokenKind::Star));
        let value = assignment_expression(p)?;
        Some((star, value))
    });
    let (star, value) = operand.unzip();
    Some(p.node(Kind::YieldExpression, children![keyword, star.flatten(), value]))
}

// Arrow functions

fn arrow_function(p: &mut Parser<'_>) -> Option<NodeId> {
    p.first_of(&[async_arrow, |p| arrow_rest(p, None)])
}

fn async_arrow(p: &mut Parser<'_>) -> Option<NodeId> {
    let keyword = p.word("async")?;
    if !p.no_line_break() {
        return None;
    }
    arrow_rest(p, Some(keyword))
}

fn arrow_rest(p: &mut Parser<'_>, keyword: Option<TokenId>) -> Option<NodeId> {
    let head = p.first_of(&[arrow_identifier_parameter, arrow_parameter_clause])?;
    if !p.no_line_break() {
        return None;
    }
    let arrow = p.token(TokenKind::Arrow)?;
    let body = p.first_of(&[declarations::function_body, concise_body])?;
    Some(p.node(Kind::ArrowFunction, children![keyword, head, arrow, body]))
}

fn arrow_identifier_parameter(p: &mut Parser<'_>) -> Option<Vec<Child>> {
    let name = lexical::binding_identifier(p)?;
    Some(children![name])
}

fn arrow_parameter_clause(p: &mut Parser<'_>) -> Option<Vec<Child>> {
    let generics = p.optional(flow::generic_parameter_clause);
    let params = patterns::formal_parameters(p)?;
    let return_type = p.optional(flow::type_annotation);
    Some(children![generics, params, return_type])
}

fn concise_body(p: &mut Parser<'_>) -> Option<NodeId> {
    if !p.next_not(|p| p.token(TokenKind::LeftBrace)) {
        return None;
    }
    assignment_expression(p)
}

// Conditional and binary operators

fn conditional_expression(p: &mut Parser<'_>) -> Option<NodeId> {
    let test = logical_or(p)?;
    let branches = p.optional(|p| {
        let question = p.token(TokenKind::Question)?;
        let consequent = p.first_of(&[consequent, consequent_without_arrow])?;
        let colon = p.token(TokenKind::Colon)?;
        let alternate = assignment_expression(p)?;
        Some(children![question, consequent, colon, alternate])
    });
    match branches {
        Some(branches) => {
            let mut nodes = children![test];
            nodes.extend(branches);
            Some(p.node(Kind::ConditionalExpression, nodes))
        }
        None => Some(test),
    }
}

fn consequent(p: &mut Parser<'_>) -> Option<NodeId> {
    let expr = p.nested(assignment_expression)?;
    p.next(|p| p.token(TokenKind::Colon)).then_some(expr)
}

/// `a ? (x): y => z` only parses once the consequent may not be an arrow.
fn consequent_without_arrow(p: &mut Parser<'_>) -> Option<NodeId> {
    let ctx = Context {
        no_in: false,
        no_arrow: true,
    };
    p.with_context(ctx, assignment_expression)
}

fn binary_level(
    p: &mut Parser<'_>,
    operand: fn(&mut Parser<'_>) -> Option<NodeId>,
    operators: &[TokenKind],
) -> Option<NodeId> {
    let first = operand(p)?;
    let rest = p.zero_or_more(|p| {
        let op = p.any_token(operators)?;
        let right = operand(p)?;
        Some((op, right))
    });
    factory::binary_chain(p.builder(), first, rest)
}

fn logical_or(p: &mut Parser<'_>) -> Option<NodeId> {
    binary_level(p, logical_and, &[TokenKind::PipePipe])
}

fn logical_and(p: &mut Parser<'_>) -> Option<NodeId> {
    binary_level(p, bitwise_or, &[TokenKind::AmpersandAmpersand])
}

fn bitwise_or(p: &mut Parser<'_>) -> Option<NodeId> {
    binary_level(p, bitwise_xor, &[TokenKind::Pipe])
}

fn bitwise_xor(p: &mut Parser<'_>) -> Option<NodeId> {
    binary_level(p, bitwise_and, &[TokenKind::Caret])
}

fn bitwise_and(p: &mut Parser<'_>) -> Option<NodeId> {
    binary_level(p, equality, &[TokenKind::Ampersand])
}

fn equality(p: &mut Parser<'_>) -> Option<NodeId> {
    binary_level(
        p,
        relational,
        &[
            TokenKind::StrictEqual,
            TokenKind::StrictNotEqual,
            TokenKind::EqualEqual,
            TokenKind::NotEqual,
        ],
    )
}

fn relational(p: &mut Parser<'_>) -> Option<NodeId> {
    let operators = if p.context().no_in {
        &RELATIONAL_OPERATORS[..RELATIONAL_OPERATORS.len() - 1]
    } else {
        RELATIONAL_OPERATORS
    };
    binary_level(p, shift, operators)
}

fn shift(p: &mut Parser<'_>) -> Option<NodeId> {
    binary_level(
        p,
        additive,
        &[
            TokenKind::UnsignedRightShift,
            TokenKind::LeftShift,
            TokenKind::RightShift,
        ],
    )
}

fn additive(p: &mut Parser<'_>) -> Option<NodeId> {
    binary_level(p, multiplicative, &[TokenKind::Plus, TokenKind::Minus])
}

fn multiplicative(p: &mut Parser<'_>) -> Option<NodeId> {
    binary_level(
        p,
        exponentiation,
        &[TokenKind::Star, TokenKind::Slash, TokenKind::Percent],
    )
}

fn exponentiation(p: &mut Parser<'_>) -> Option<NodeId> {
    let first = unary(p)?;
    let rest = p.zero_or_more(|p| {
        let op = p.token(TokenKind::StarStar)?;
        let right = unary(p)?;
        Some((op, right))
    });
    Some(factory::exponent_chain(p.builder(), first, rest))
}

fn unary(p: &mut Parser<'_>) -> Option<NodeId> {
    p.first_of(&[prefix_operation, postfix])
}

fn prefix_operation(p: &mut Parser<'_>) -> Option<NodeId> {
    let op = p.any_token(PREFIX_OPERATORS)?;
    let operand = unary(p)?;
    factory::prefix(p.builder(), op, operand)
}

fn postfix(p: &mut Parser<'_>) -> Option<NodeId> {
    let operand = left_hand_side(p)?;
    let op = p.optional(|p| {
        if !p.no_line_break() {
            return None;
        }
        p.any_token(&[TokenKind::PlusPlus, TokenKind::MinusMinus])
    });
    match op {
        Some(op) => factory::postfix(p.builder(), operand, op),
        None => Some(operand),
    }
}

// Left-hand-side expressions

pub(crate) fn left_hand_side(p: &mut Parser<'_>) -> Option<NodeId> {
    p.memoized(MemoRule::LeftHandSide, |p| {
        let head = member_expression(p)?;
        let Some(call) = p.optional(call_arguments) else {
            return Some(head);
        };
        let mut suffixes = vec![call];
        suffixes.extend(p.zero_or_more(call_suffix));
        Some(factory::member_chain(p.builder(), head, suffixes))
    })
}

fn call_suffix(p: &mut Parser<'_>) -> Option<Suffix> {
    p.first_of(&[call_arguments, dot_suffix, bracket_suffix, template_suffix])
}

fn call_arguments(p: &mut Parser<'_>) -> Option<Suffix> {
    let type_args = p.optional(flow::type_arguments);
    let args = arguments(p)?;
    Some(Suffix::Arguments(type_args, args))
}

fn member_expression(p: &mut Parser<'_>) -> Option<NodeId> {
    let head = p.first_of(&[new_target, new_expression, super_expression, primary])?;
    let suffixes = p.zero_or_more(member_suffix);
    Some(factory::member_chain(p.builder(), head, suffixes))
}

fn member_suffix(p: &mut Parser<'_>) -> Option<Suffix> {
    p.first_of(&[dot_suffix, bracket_suffix, template_suffix])
}

fn dot_suffix(p: &mut Parser<'_>) -> Option<Suffix> {
    let dot = p.token(TokenKind::Dot)?;
    let name = lexical::identifier_name(p)?;
    Some(Suffix::Dot(dot, name))
}

fn bracket_suffix(p: &mut Parser<'_>) -> Option<Suffix> {
    let open = p.token(TokenKind::LeftBracket)?;
    let index = p.nested(expression)?;
    let close = p.token(TokenKind::RightBracket)?;
    Some(Suffix::Bracket(open, index, close))
}

fn template_suffix(p: &mut Parser<'_>) -> Option<Suffix> {
    template_literal(p).map(Suffix::Template)
}

fn new_target(p: &mut Parser<'_>) -> Option<NodeId> {
    let new = p.token(TokenKind::New)?;
    let dot = p.token(TokenKind::Dot)?;
    let target = p.word("target")?;
    Some(p.node(Kind::NewTarget, children![new, dot, target]))
}

fn new_expression(p: &mut Parser<'_>) -> Option<NodeId> {
    let new = p.token(TokenKind::New)?;
    let callee = member_expression(p)?;
    let type_args = p.optional(flow::type_arguments);
    let args = p.optional(arguments);
    Some(p.node(Kind::NewExpression, children![new, callee, type_args, args]))
}

fn super_expression(p: &mut Parser<'_>) -> Option<NodeId> {
    let keyword = p.token(TokenKind::Super)?;
    Some(p.node(Kind::SuperExpression, children![keyword]))
}

/// `( (spread | assign) (, (spread | assign))* ,? )`
pub(crate) fn arguments(p: &mut Parser<'_>) -> Option<NodeId> {
    let open = p.token(TokenKind::LeftParen)?;
    let list = p.nested(|p| Some(separated_list(p, element, &[TokenKind::Comma], Trailing::Allow)))?;
    let close = p.token(TokenKind::RightParen)?;
    Some(factory::separated(
        p.builder(),
        Kind::ArgumentList,
        Some(open),
        list,
        Some(close),
    ))
}

// Primary expressions

fn primary(p: &mut Parser<'_>) -> Option<NodeId> {
    p.first_of(&[
        this_expression,
        declarations::function_expression,
        declarations::class_expression,
        lexical::literal,
        identifier_reference,
        array_literal,
        object_literal,
        type_cast,
        parenthesised_expression,
        template_literal,
        jsx::element,
    ])
}

pub(crate) fn this_expression(p: &mut Parser<'_>) -> Option<NodeId> {
    let keyword = p.token(TokenKind::This)?;
    Some(p.node(Kind::ThisExpression, children![keyword]))
}

fn element(p: &mut Parser<'_>) -> Option<NodeId> {
    p.first_of(&[spread_element, assignment_expression])
}

fn spread_element(p: &mut Parser<'_>) -> Option<NodeId> {
    let dots = p.token(TokenKind::Ellipsis)?;
    let value = assignment_expression(p)?;
    Some(p.node(Kind::SpreadElement, children![dots, value]))
}

fn array_literal(p: &mut Parser<'_>) -> Option<NodeId> {
    let open = p.token(TokenKind::LeftBracket)?;
    let list = p.nested(|p| Some(elision_list(p, element)))?;
    let close = p.token(TokenKind::RightBracket)?;
    Some(factory::array_like(
        p.builder(),
        Kind::ArrayLiteral,
        open,
        list,
        close,
    ))
}

fn object_literal(p: &mut Parser<'_>) -> Option<NodeId> {
    let open = p.token(TokenKind::LeftBrace)?;
    let list = p.nested(|p| {
        Some(separated_list(
            p,
            property_definition,
            &[TokenKind::Comma],
            Trailing::Allow,
        ))
    })?;
    let close = p.token(TokenKind::RightBrace)?;
    Some(factory::separated(
        p.builder(),
        Kind::ObjectLiteral,
        Some(open),
        list,
        Some(close),
    ))
}

fn property_definition(p: &mut Parser<'_>) -> Option<NodeId> {
    p.first_of(&[
        spread_element,
        pair_property,
        |p| declarations::method_definition(p, Vec::new()),
        identifier_reference,
    ])
}

fn pair_property(p: &mut Parser<'_>) -> Option<NodeId> {
    let name = property_name(p)?;
    let colon = p.token(TokenKind::Colon)?;
    let value = assignment_expression(p)?;
    Some(p.node(Kind::PairProperty, children![name, colon, value]))
}

pub(crate) fn property_name(p: &mut Parser<'_>) -> Option<NodeId> {
    p.first_of(&[
        lexical::identifier_name,
        lexical::string_literal,
        lexical::numeric_literal,
        computed_property_name,
    ])
}

fn computed_property_name(p: &mut Parser<'_>) -> Option<NodeId> {
    let open = p.token(TokenKind::LeftBracket)?;
    let name = p.nested(assignment_expression)?;
    let close = p.token(TokenKind::RightBracket)?;
    Some(p.node(Kind::ComputedPropertyName, children![open, name, close]))
}

/// `(expr: Type)`
fn type_cast(p: &mut Parser<'_>) -> Option<NodeId> {
    let open = p.token(TokenKind::LeftParen)?;
    let (expr, annotation) = p.nested(|p| {
        let expr = expression(p)?;
        let annotation = flow::type_annotation(p)?;
        Some((expr, annotation))
    })?;
    let close = p.token(TokenKind::RightParen)?;
    Some(p.node(Kind::TypeCast, children![open, expr, annotation, close]))
}

fn parenthesised_expression(p: &mut Parser<'_>) -> Option<NodeId> {
    let open = p.token(TokenKind::LeftParen)?;
    let expr = p.nested(expression)?;
    let close = p.token(TokenKind::RightParen)?;
    Some(p.node(Kind::ParenthesisedExpression, children![open, expr, close]))
}

// Templates

pub(crate) fn template_literal(p: &mut Parser<'_>) -> Option<NodeId> {
    let open = p.token(TokenKind::Backtick)?;
    let parts = p.zero_or_more(|p| p.first_of(&[template_characters, template_expression]));
    let close = p.raw_token(TokenKind::Backtick)?;
    Some(p.node(Kind::TemplateLiteral, children![open, parts, close]))
}

fn template_characters(p: &mut Parser<'_>) -> Option<NodeId> {
    let text = p.raw_token(TokenKind::TemplateCharacters)?;
    Some(p.node(Kind::TemplateCharacters, children![text]))
}

fn template_expression(p: &mut Parser<'_>) -> Option<NodeId> {
    let open = p.raw_token(TokenKind::DollarLeftBrace)?;
    let expr = p.nested(expression)?;
    let close = p.token(TokenKind::RightBrace)?;
    Some(p.node(Kind::TemplateExpression, children![open, expr, close]))
}
