// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Statements.

use super::expressions::{assignment_expression, expression, left_hand_side};
use super::lexical::{eos, eos_no_lb, label_identifier};
use super::{declarations, flow, patterns};
use crate::engine::{Context, Parser};
use crate::factory;
use crate::lexer::TokenKind;
use crate::tree::{Child, Kind, NodeId, TokenId, children};

const NO_IN: Context = Context {
    no_in: true,
    no_arrow: false,
};

pub(crate) fn statement(p: &mut Parser<'_>) -> Option<NodeId> {
    p.first_of(&[
        block,
        variable_statement,
        empty_statement,
        labelled_statement,
        declarations::class_declaration,
        flow::flow_declaration,
        expression_statement,
        if_statement,
        iteration_statement,
        continue_statement,
        break_statement,
        return_statement,
        with_statement,
        switch_statement,
        throw_statement,
        try_statement,
        debugger_statement,
        declarations::function_declaration,
    ])
}

/// `{ statement* }`
pub(crate) fn block(p: &mut Parser<'_>) -> Option<NodeId> {
    let open = p.token(TokenKind::LeftBrace)?;
    let body = p.nested(|p| Some(p.zero_or_more(statement)))?;
    let close = p.token(TokenKind::RightBrace)?;
    Some(p.node(Kind::Block, children![open, body, close]))
}

fn var_keyword(p: &mut Parser<'_>) -> Option<TokenId> {
    p.first_of(&[
        |p| p.token(TokenKind::Var),
        |p| p.word("let"),
        |p| p.token(TokenKind::Const),
    ])
}

/// `var|let|const declarator (, declarator)*`, without the statement end.
pub(crate) fn variable_declaration(p: &mut Parser<'_>) -> Option<NodeId> {
    let keyword = var_keyword(p)?;
    let declarators = patterns::declarators(p)?;
    Some(factory::variable_declaration(p.builder(), keyword, declarators))
}

pub(crate) fn variable_statement(p: &mut Parser<'_>) -> Option<NodeId> {
    let declaration = variable_declaration(p)?;
    let end = eos(p)?;
    Some(p.node(Kind::VariableStatement, children![declaration, end]))
}

fn empty_statement(p: &mut Parser<'_>) -> Option<NodeId> {
    let semi = p.token(TokenKind::Semicolon)?;
    Some(p.node(Kind::EmptyStatement, children![semi]))
}

fn labelled_statement(p: &mut Parser<'_>) -> Option<NodeId> {
    let label = label_identifier(p)?;
    let colon = p.token(TokenKind::Colon)?;
    let body = statement(p)?;
    Some(p.node(Kind::LabelledStatement, children![label, colon, body]))
}

// Expression statements may not start like a block, a function or class
// declaration, or a `let [` declaration.

fn starts_block(p: &mut Parser<'_>) -> Option<()> {
    p.token(TokenKind::LeftBrace).map(|_| ())
}

fn starts_function(p: &mut Parser<'_>) -> Option<()> {
    p.token(TokenKind::Function).map(|_| ())
}

fn starts_async_function(p: &mut Parser<'_>) -> Option<()> {
    p.word("async")?;
    if !p.no_line_break() {
        return None;
    }
    p.token(TokenKind::Function).map(|_| ())
}

fn starts_class(p: &mut Parser<'_>) -> Option<()> {
    p.token(TokenKind::Class).map(|_| ())
}

fn starts_let_bracket(p: &mut Parser<'_>) -> Option<()> {
    p.word("let")?;
    p.token(TokenKind::LeftBracket).map(|_| ())
}

fn expression_statement(p: &mut Parser<'_>) -> Option<NodeId> {
    let excluded = p.next(|p| {
        p.first_of(&[
            starts_block,
            starts_function,
            starts_async_function,
            starts_class,
            starts_let_bracket,
        ])
    });
    if excluded {
        return None;
    }
    let expr = expression(p)?;
    let end = eos(p)?;
    Some(p.node(Kind::ExpressionStatement, children![expr, end]))
}

fn parenthesised_condition(p: &mut Parser<'_>) -> Option<Vec<Child>> {
    let open = p.token(TokenKind::LeftParen)?;
    let test = p.nested(expression)?;
    let close = p.token(TokenKind::RightParen)?;
    Some(children![open, test, close])
}

fn if_statement(p: &mut Parser<'_>) -> Option<NodeId> {
    let keyword = p.token(TokenKind::If)?;
    let condition = parenthesised_condition(p)?;
    let consequent = statement(p)?;
    let alternate = p.optional(|p| {
        let keyword = p.token(TokenKind::Else)?;
        let body = statement(p)?;
        Some(p.node(Kind::ElseClause, children![keyword, body]))
    });
    Some(p.node(
        Kind::IfStatement,
        children![keyword, condition, consequent, alternate],
    ))
}

// Iteration

fn iteration_statement(p: &mut Parser<'_>) -> Option<NodeId> {
    p.first_of(&[
        do_while_statement,
        while_statement,
        for_in_statement,
        for_of_statement,
        for_statement,
    ])
}

fn do_while_statement(p: &mut Parser<'_>) -> Option<NodeId> {
    let keyword = p.token(TokenKind::Do)?;
    let body = statement(p)?;
    let while_keyword = p.token(TokenKind::While)?;
    let condition = parenthesised_condition(p)?;
    let end = p.optional(eos).flatten();
    Some(p.node(
        Kind::DoWhileStatement,
        children![keyword, body, while_keyword, condition, end],
    ))
}

fn while_statement(p: &mut Parser<'_>) -> Option<NodeId> {
    let keyword = p.token(TokenKind::While)?;
    let condition = parenthesised_condition(p)?;
    let body = statement(p)?;
    Some(p.node(Kind::WhileStatement, children![keyword, condition, body]))
}

fn for_in_statement(p: &mut Parser<'_>) -> Option<NodeId> {
    let keyword = p.token(TokenKind::For)?;
    let open = p.token(TokenKind::LeftParen)?;
    let head = p.nested(|p| {
        p.first_of(&[
            |p| p.with_context(NO_IN, variable_declaration),
            |p| {
                if p.next(starts_let_bracket) {
                    return None;
                }
                left_hand_side(p)
            },
        ])
    })?;
    let in_keyword = p.token(TokenKind::In)?;
    let object = p.nested(expression)?;
    let close = p.token(TokenKind::RightParen)?;
    let body = statement(p)?;
    Some(p.node(
        Kind::ForInStatement,
        children![keyword, open, head, in_keyword, object, close, body],
    ))
}

fn for_of_statement(p: &mut Parser<'_>) -> Option<NodeId> {
    let keyword = p.token(TokenKind::For)?;
    let await_keyword = p.optional(|p| p.token(TokenKind::Await));
    let open = p.token(TokenKind::LeftParen)?;
    let head = p.nested(|p| {
        p.first_of(&[variable_declaration, |p| {
            if p.next(|p| p.word("let")) {
                return None;
            }
            left_hand_side(p)
        }])
    })?;
    let of = p.word("of")?;
    let iterable = p.nested(assignment_expression)?;
    let close = p.token(TokenKind::RightParen)?;
    let body = statement(p)?;
    Some(p.node(
        Kind::ForOfStatement,
        children![keyword, await_keyword, open, head, of, iterable, close, body],
    ))
}

fn for_statement(p: &mut Parser<'_>) -> Option<NodeId> {
    let keyword = p.token(TokenKind::For)?;
    let open = p.token(TokenKind::LeftParen)?;
    let init = p.optional(|p| {
        p.with_context(NO_IN, |p| {
            p.first_of(&[variable_declaration, |p| {
                if p.next(starts_let_bracket) {
                    return None;
                }
                expression(p)
            }])
        })
    });
    let first_semi = p.token(TokenKind::Semicolon)?;
    let test = p.optional(|p| p.nested(expression));
    let second_semi = p.token(TokenKind::Semicolon)?;
    let update = p.optional(|p| p.nested(expression));
    let close = p.token(TokenKind::RightParen)?;
    let body = statement(p)?;
    Some(p.node(
        Kind::ForStatement,
        children![
            keyword,
            open,
            init,
            first_semi,
            test,
            second_semi,
            update,
            close,
            body
        ],
    ))
}

// Jumps

/// The rest of `break` or `continue`: a statement end, or a label on the
/// same line and then a statement end.
fn jump_tail(p: &mut Parser<'_>) -> Option<Vec<Child>> {
    if let Some(end) = p.optional(eos_no_lb) {
        return Some(children![end]);
    }
    if !p.no_line_break() {
        return None;
    }
    let label = label_identifier(p)?;
    let end = eos(p)?;
    Some(children![label, end])
}

fn continue_statement(p: &mut Parser<'_>) -> Option<NodeId> {
    let keyword = p.token(TokenKind::Continue)?;
    let tail = jump_tail(p)?;
    Some(p.node(Kind::ContinueStatement, children![keyword, tail]))
}

fn break_statement(p: &mut Parser<'_>) -> Option<NodeId> {
    let keyword = p.token(TokenKind::Break)?;
    let tail = jump_tail(p)?;
    Some(p.node(Kind::BreakStatement, children![keyword, tail]))
}

fn return_statement(p: &mut Parser<'_>) -> Option<NodeId> {
    let keyword = p.token(TokenKind::Return)?;
    if let Some(end) = p.optional(eos_no_lb) {
        return Some(p.node(Kind::ReturnStatement, children![keyword, end]));
    }
    let argument = expression(p)?;
    let end = eos(p)?;
    Some(p.node(Kind::ReturnStatement, children![keyword, argument, end]))
}

fn with_statement(p: &mut Parser<'_>) -> Option<NodeId> {
    let keyword = p.token(TokenKind::With)?;
    let object = parenthesised_condition(p)?;
    let body = statement(p)?;
    Some(p.node(Kind::WithStatement, children![keyword, object, body]))
}

fn switch_statement(p: &mut Parser<'_>) -> Option<NodeId> {
    let keyword = p.token(TokenKind::Switch)?;
    let discriminant = parenthesised_condition(p)?;
    let open = p.token(TokenKind::LeftBrace)?;
    let clauses = p.nested(|p| Some(p.zero_or_more(|p| p.first_of(&[case_clause, default_clause]))))?;
    let close = p.token(TokenKind::RightBrace)?;
    Some(p.node(
        Kind::SwitchStatement,
        children![keyword, discriminant, open, clauses, close],
    ))
}

fn case_clause(p: &mut Parser<'_>) -> Option<NodeId> {
    let keyword = p.token(TokenKind::Case)?;
    let test = expression(p)?;
    let colon = p.token(TokenKind::Colon)?;
    let body = p.zero_or_more(statement);
    Some(p.node(Kind::CaseClause, children![keyword, test, colon, body]))
}

fn default_clause(p: &mut Parser<'_>) -> Option<NodeId> {
    let keyword = p.token(TokenKind::Default)?;
    let colon = p.token(TokenKind::Colon)?;
    let body = p.zero_or_more(statement);
    Some(p.node(Kind::DefaultClause, children![keyword, colon, body]))
}

fn throw_statement(p: &mut Parser<'_>) -> Option<NodeId> {
    let keyword = p.token(TokenKind::Throw)?;
    if !p.no_line_break() {
        return None;
    }
    let argument = expression(p)?;
    let end = eos(p)?;
    Some(p.node(Kind::ThrowStatement, children![keyword, argument, end]))
}

fn try_statement(p: &mut Parser<'_>) -> Option<NodeId> {
    let keyword = p.token(TokenKind::Try)?;
    let body = block(p)?;
    let handlers = p.first_of(&[
        |p| {
            let catch = catch_block(p)?;
            let finally = p.optional(finally_block);
            Some(children![catch, finally])
        },
        |p| finally_block(p).map(|finally| children![finally]),
    ])?;
    Some(p.node(Kind::TryStatement, children![keyword, body, handlers]))
}

fn catch_block(p: &mut Parser<'_>) -> Option<NodeId> {
    let keyword = p.token(TokenKind::Catch)?;
    let parameter = p.optional(|p| {
        let open = p.token(TokenKind::LeftParen)?;
        let target = p.nested(patterns::binding_target)?;
        let annotation = p.optional(flow::type_annotation);
        let close = p.token(TokenKind::RightParen)?;
        Some(children![open, target, annotation, close])
    });
    let body = block(p)?;
    Some(p.node(Kind::CatchBlock, children![keyword, parameter, body]))
}

fn finally_block(p: &mut Parser<'_>) -> Option<NodeId> {
    let keyword = p.token(TokenKind::Finally)?;
    let body = block(p)?;
    Some(p.node(Kind::FinallyBlock, children![keyword, body]))
}

fn debugger_statement(p: &mut Parser<'_>) -> Option<NodeId> {
    let keyword = p.token(TokenKind::Debugger)?;
    let end = eos(p)?;
    Some(p.node(Kind::DebuggerStatement, children![keyword, end]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statements(source: &str) -> Vec<String> {
        let mut p = Parser::new(source);
        let items = p.zero_or_more(statement);
        assert!(p.at_end(), "unconsumed input in {:?}", source);
        let root = p.node(Kind::ModuleBody, children![items]);
        let tree = p.into_builder().finish(root);
        tree.child_nodes(tree.root())
            .map(|id| tree.to_sexp(id))
            .collect()
    }

    #[test]
    fn test_do_while_needs_no_terminator() {
        let out = statements("do x(); while (a) y()");
        assert_eq!(out.len(), 2);
        assert!(out[0].starts_with("(DoWhileStatement do"));
        assert!(out[0].ends_with("while ( (IdentifierReference a) ))"));
        assert!(out[1].starts_with("(ExpressionStatement"));

        let out = statements("do ; while (a);");
        assert_eq!(out.len(), 1);
        assert!(out[0].ends_with(") ;)"));
    }

    #[test]
    fn test_return_then_newline() {
        assert_eq!(
            statements("return\na"),
            vec![
                "(ReturnStatement return)".to_string(),
                "(ExpressionStatement (IdentifierReference a))".to_string(),
            ]
        );
    }

    #[test]
    fn test_newline_separates_statements() {
        assert_eq!(statements("a\nb").len(), 2);
        assert_eq!(statements("a;b;").len(), 2);
    }

    #[test]
    fn test_block_with_implicit_end() {
        assert_eq!(
            statements("{ a\n }"),
            vec!["(Block { (ExpressionStatement (IdentifierReference a)) })".to_string()]
        );
    }

    #[test]
    fn test_variable_statement_kinds() {
        let out = statements("var a = 1, b; let c; const d = 2;");
        assert!(out[0].starts_with("(VariableStatement (VarDeclaration var"));
        assert!(out[1].starts_with("(VariableStatement (LetDeclaration let"));
        assert!(out[2].starts_with("(VariableStatement (ConstDeclaration const"));
    }

    #[test]
    fn test_let_as_identifier() {
        let out = statements("let = 1;");
        assert!(out[0].starts_with("(ExpressionStatement (Assignment"));
    }

    #[test]
    fn test_for_variants() {
        let out = statements(
            "for (var i = 0; i < n; i++) {}\n\
             for (k in o) ;\n\
             for (const v of list) {}\n\
             for await (x of xs) {}\n\
             for (;;) break",
        );
        assert!(out[0].starts_with("(ForStatement"));
        assert!(out[1].starts_with("(ForInStatement"));
        assert!(out[2].starts_with("(ForOfStatement"));
        assert!(out[3].starts_with("(ForOfStatement for await"));
        assert!(out[4].starts_with("(ForStatement for ( ; ; )"));
    }

    #[test]
    fn test_for_head_excludes_in() {
        let out = statements("for (var a = b in c) ;");
        assert_eq!(out.len(), 1);
        assert!(out[0].starts_with("(ForInStatement"));
    }

    #[test]
    fn test_jump_statements() {
        let out = statements("outer: while (x) { continue outer; break\nouter }");
        assert!(out[0].starts_with("(LabelledStatement (LabelIdentifier outer) :"));
        assert!(out[0].contains("(ContinueStatement continue (LabelIdentifier outer) ;)"));
        assert!(out[0].contains("(BreakStatement break) (ExpressionStatement (IdentifierReference outer))"));
    }

    #[test]
    fn test_try_switch_throw() {
        let out = statements(
            "try { a() } catch (e) { throw e } finally {}\n\
             switch (x) { case 1: y(); default: }",
        );
        assert!(out[0].contains("(CatchBlock catch ( (BindingIdentifier e) )"));
        assert!(out[0].contains("(FinallyBlock finally (Block { }))"));
        assert!(out[1].contains("(CaseClause case (NumericLiteral 1) :"));
        assert!(out[1].contains("(DefaultClause default :)"));
    }

    #[test]
    fn test_throw_requires_same_line() {
        let mut p = Parser::new("throw\na");
        assert!(statement(&mut p).is_none());
    }

    #[test]
    fn test_if_else() {
        let out = statements("if (a) b; else c;");
        assert!(out[0].contains("(ElseClause else (ExpressionStatement (IdentifierReference c) ;))"));
    }
}
