// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Node construction helpers.
//!
//! The grammar hands matched pieces to these functions, which decide node
//! kinds and child layout. Lookahead and spacing never reach this module:
//! only tokens and sub-nodes do.

use crate::lexer::TokenKind;
use crate::tree::{Child, Kind, NodeId, SeparatedList, TokenId, TreeBuilder, children};

/// Node kind of a binary operator.
pub fn binary_kind(operator: TokenKind) -> Option<Kind> {
    let kind = match operator {
        TokenKind::StarStar => Kind::Exponent,
        TokenKind::Star => Kind::Multiply,
        TokenKind::Slash => Kind::Divide,
        TokenKind::Percent => Kind::Remainder,
        TokenKind::Plus => Kind::Plus,
        TokenKind::Minus => Kind::Minus,
        TokenKind::LeftShift => Kind::LeftShift,
        TokenKind::RightShift => Kind::RightShift,
        TokenKind::UnsignedRightShift => Kind::UnsignedRightShift,
        TokenKind::LessThan => Kind::LessThan,
        TokenKind::GreaterThan => Kind::GreaterThan,
        TokenKind::LessThanEqual => Kind::LessThanOrEqualTo,
        TokenKind::GreaterThanEqual => Kind::GreaterThanOrEqualTo,
        TokenKind::Instanceof => Kind::Instanceof,
        TokenKind::In => Kind::RelationalIn,
        TokenKind::EqualEqual => Kind::EqualTo,
        TokenKind::NotEqual => Kind::NotEqualTo,
        TokenKind::StrictEqual => Kind::StrictEqualTo,
        TokenKind::StrictNotEqual => Kind::StrictNotEqualTo,
        TokenKind::Ampersand => Kind::BitwiseAnd,
        TokenKind::Caret => Kind::BitwiseXor,
        TokenKind::Pipe => Kind::BitwiseOr,
        TokenKind::AmpersandAmpersand => Kind::ConditionalAnd,
        TokenKind::PipePipe => Kind::ConditionalOr,
        TokenKind::Comma => Kind::CommaExpression,
        _ => return None,
    };
    Some(kind)
}

/// Node kind of a prefix operator.
pub fn prefix_kind(operator: TokenKind) -> Option<Kind> {
    let kind = match operator {
        TokenKind::PlusPlus => Kind::PrefixIncrement,
        TokenKind::MinusMinus => Kind::PrefixDecrement,
        TokenKind::Plus => Kind::UnaryPlus,
        TokenKind::Minus => Kind::UnaryMinus,
        TokenKind::Tilde => Kind::BitwiseComplement,
        TokenKind::Bang => Kind::LogicalComplement,
        TokenKind::Delete => Kind::Delete,
        TokenKind::Void => Kind::Void,
        TokenKind::Typeof => Kind::Typeof,
        TokenKind::Await => Kind::Await,
        _ => return None,
    };
    Some(kind)
}

/// Node kind of a postfix operator.
pub fn postfix_kind(operator: TokenKind) -> Option<Kind> {
    match operator {
        TokenKind::PlusPlus => Some(Kind::PostfixIncrement),
        TokenKind::MinusMinus => Some(Kind::PostfixDecrement),
        _ => None,
    }
}

/// Node kind of an assignment operator.
pub fn assignment_kind(operator: TokenKind) -> Option<Kind> {
    let kind = match operator {
        TokenKind::Equal => Kind::Assignment,
        TokenKind::StarEqual => Kind::MultiplyAssignment,
        TokenKind::StarStarEqual => Kind::ExponentAssignment,
        TokenKind::SlashEqual => Kind::DivideAssignment,
        TokenKind::PercentEqual => Kind::RemainderAssignment,
        TokenKind::PlusEqual => Kind::PlusAssignment,
        TokenKind::MinusEqual => Kind::MinusAssignment,
        TokenKind::LeftShiftEqual => Kind::LeftShiftAssignment,
        TokenKind::RightShiftEqual => Kind::RightShiftAssignment,
        TokenKind::UnsignedRightShiftEqual => Kind::UnsignedRightShiftAssignment,
        TokenKind::AmpersandEqual => Kind::AndAssignment,
        TokenKind::CaretEqual => Kind::XorAssignment,
        TokenKind::PipeEqual => Kind::OrAssignment,
        _ => return None,
    };
    Some(kind)
}

/// Looks up the node kind for the operator token `op`. An operator the
/// grammar accepts but the table lacks fails the rule instead of building a
/// node of the wrong kind.
fn operator_kind(
    b: &TreeBuilder<'_>,
    op: TokenId,
    table: fn(TokenKind) -> Option<Kind>,
) -> Option<Kind> {
    let operator = b.token_kind(op);
    let kind = table(operator);
    debug_assert!(kind.is_some(), "no node kind for operator {:?}", operator);
    kind
}

/// Folds `first (op operand)*` to the left: `a - b - c` is `(a - b) - c`.
pub fn binary_chain(
    b: &mut TreeBuilder<'_>,
    first: NodeId,
    rest: Vec<(TokenId, NodeId)>,
) -> Option<NodeId> {
    rest.into_iter().try_fold(first, |left, (op, right)| {
        let kind = operator_kind(b, op, binary_kind)?;
        Some(b.push_node(kind, children![left, op, right]))
    })
}

/// Folds `first (** operand)*` from the rightmost operand backward:
/// `a ** b ** c` is `a ** (b ** c)`.
pub fn exponent_chain(
    b: &mut TreeBuilder<'_>,
    first: NodeId,
    rest: Vec<(TokenId, NodeId)>,
) -> NodeId {
    let mut operands = vec![first];
    let mut operators = Vec::with_capacity(rest.len());
    for (op, operand) in rest {
        operators.push(op);
        operands.push(operand);
    }
    let mut right = operands.pop().unwrap_or(first);
    while let (Some(op), Some(left)) = (operators.pop(), operands.pop()) {
        right = b.push_node(Kind::Exponent, children![left, op, right]);
    }
    right
}

/// Builds a prefix operator node.
pub fn prefix(b: &mut TreeBuilder<'_>, op: TokenId, operand: NodeId) -> Option<NodeId> {
    let kind = operator_kind(b, op, prefix_kind)?;
    Some(b.push_node(kind, children![op, operand]))
}

/// Builds a postfix `++`/`--` node.
pub fn postfix(b: &mut TreeBuilder<'_>, operand: NodeId, op: TokenId) -> Option<NodeId> {
    let kind = operator_kind(b, op, postfix_kind)?;
    Some(b.push_node(kind, children![operand, op]))
}

/// Builds an assignment node, its kind chosen by the operator.
pub fn assignment(
    b: &mut TreeBuilder<'_>,
    target: NodeId,
    op: TokenId,
    value: NodeId,
) -> Option<NodeId> {
    let kind = operator_kind(b, op, assignment_kind)?;
    Some(b.push_node(kind, children![target, op, value]))
}

/// A suffix of a member or call chain.
#[derive(Debug, Clone)]
pub enum Suffix {
    /// `.name`
    Dot(TokenId, NodeId),
    /// `[expr]`
    Bracket(TokenId, NodeId, TokenId),
    /// A template literal, making a tagged template
    Template(NodeId),
    /// Optional type arguments, then an argument list
    Arguments(Option<NodeId>, NodeId),
}

/// Folds suffixes onto a head expression, innermost first.
pub fn member_chain(b: &mut TreeBuilder<'_>, head: NodeId, suffixes: Vec<Suffix>) -> NodeId {
    suffixes.into_iter().fold(head, |object, suffix| match suffix {
        Suffix::Dot(dot, name) => b.push_node(Kind::DotMemberExpression, children![object, dot, name]),
        Suffix::Bracket(open, expr, close) => b.push_node(
            Kind::BracketMemberExpression,
            children![object, open, expr, close],
        ),
        Suffix::Template(template) => b.push_node(Kind::TaggedTemplate, children![object, template]),
        Suffix::Arguments(type_args, args) => {
            b.push_node(Kind::CallExpression, children![object, type_args, args])
        }
    })
}

/// The three shapes a formal parameter clause can take.
#[derive(Debug, Clone)]
pub enum ParameterShape {
    /// `(a, b,)`, trailing comma optional
    List(SeparatedList<NodeId>),
    /// `(a, b, ...c)`
    ListAndRest(SeparatedList<NodeId>, TokenId, NodeId),
    /// `(...c)` or `()`
    Rest(Option<NodeId>),
}

/// Normalizes a parameter clause into one `FormalParameterList` whose
/// children are `(`, the parameters interleaved with commas, and `)`.
pub fn formal_parameters(
    b: &mut TreeBuilder<'_>,
    open: TokenId,
    shape: ParameterShape,
    close: TokenId,
) -> NodeId {
    let list = match shape {
        ParameterShape::List(list) => list,
        ParameterShape::ListAndRest(mut list, comma, rest) => {
            list.separators.push(comma);
            list.elements.push(rest);
            list
        }
        ParameterShape::Rest(rest) => SeparatedList {
            elements: rest.into_iter().collect(),
            separators: Vec::new(),
        },
    };
    separated(b, Kind::FormalParameterList, Some(open), list, Some(close))
}

/// Classifies a variable declaration by its leading keyword.
pub fn variable_declaration(
    b: &mut TreeBuilder<'_>,
    keyword: TokenId,
    declarators: SeparatedList<NodeId>,
) -> NodeId {
    let kind = match b.token_text(keyword) {
        "let" => Kind::LetDeclaration,
        "const" => Kind::ConstDeclaration,
        _ => Kind::VarDeclaration,
    };
    let mut children = children![keyword];
    children.extend(declarators.flatten());
    b.push_node(kind, children)
}

/// Builds a list node: optional opening token, interleaved elements and
/// separators, optional closing token.
pub fn separated(
    b: &mut TreeBuilder<'_>,
    kind: Kind,
    open: Option<TokenId>,
    list: SeparatedList<NodeId>,
    close: Option<TokenId>,
) -> NodeId {
    let mut children: Vec<Child> = children![open];
    children.extend(list.flatten());
    children.extend(children![close]);
    b.push_node(kind, children)
}

/// Builds an array-shaped node where `None` elements are elisions.
pub fn array_like(
    b: &mut TreeBuilder<'_>,
    kind: Kind,
    open: TokenId,
    list: SeparatedList<Option<NodeId>>,
    close: TokenId,
) -> NodeId {
    let mut children = children![open];
    children.extend(list.flatten());
    children.push(Child::Token(close));
    b.push_node(kind, children)
}
