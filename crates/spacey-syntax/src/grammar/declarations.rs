// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Functions, classes, decorators and module declarations.

use super::expressions::{arguments, assignment_expression, left_hand_side, property_name};
use super::lexical::{self, binding_identifier, eos, identifier_reference, string_literal};
use super::statements::{block, variable_statement};
use super::{Trailing, flow, patterns, separated_list};
use crate::engine::Parser;
use crate::factory;
use crate::lexer::TokenKind;
use crate::tree::{Child, Kind, NodeId, TokenId, children};

/// `@name(.name)* arguments?`
pub(crate) fn decorator(p: &mut Parser<'_>) -> Option<NodeId> {
    let at = p.token(TokenKind::At)?;
    let head = identifier_reference(p)?;
    let mut parts = children![at, head];
    for (dot, name) in p.zero_or_more(|p| {
        let dot = p.token(TokenKind::Dot)?;
        let name = lexical::identifier_name(p)?;
        Some((dot, name))
    }) {
        parts.extend(children![dot, name]);
    }
    let args = p.optional(arguments);
    parts.extend(children![args]);
    Some(p.node(Kind::Decorator, parts))
}

// Functions

/// A function body is a block with fresh grammar parameters.
pub(crate) fn function_body(p: &mut Parser<'_>) -> Option<NodeId> {
    block(p)
}

/// `async? function *? name? <T>? (params) (: Type)? { body }`
fn function(
    p: &mut Parser<'_>,
    plain: Kind,
    generator: Kind,
    name_required: bool,
) -> Option<NodeId> {
    let async_keyword = p.optional(|p| {
        let keyword = p.word("async")?;
        p.no_line_break().then_some(keyword)
    });
    let keyword = p.token(TokenKind::Function)?;
    let star = p.optional(|p| p.token(TokenKind::Star));
    let name = if name_required {
        Some(binding_identifier(p)?)
    } else {
        p.optional(binding_identifier)
    };
    let generics = p.optional(flow::generic_parameter_clause);
    let params = patterns::formal_parameters(p)?;
    let return_type = p.optional(flow::type_annotation);
    let body = function_body(p)?;
    let kind = if star.is_some() { generator } else { plain };
    Some(p.node(
        kind,
        children![
            async_keyword,
            keyword,
            star,
            name,
            generics,
            params,
            return_type,
            body
        ],
    ))
}

pub(crate) fn function_declaration(p: &mut Parser<'_>) -> Option<NodeId> {
    function(
        p,
        Kind::FunctionDeclaration,
        Kind::GeneratorDeclaration,
        true,
    )
}

pub(crate) fn function_expression(p: &mut Parser<'_>) -> Option<NodeId> {
    function(
        p,
        Kind::FunctionExpression,
        Kind::GeneratorExpression,
        false,
    )
}

fn anonymous_function_declaration(p: &mut Parser<'_>) -> Option<NodeId> {
    function(
        p,
        Kind::FunctionDeclaration,
        Kind::GeneratorDeclaration,
        false,
    )
}

// Classes

fn class(p: &mut Parser<'_>, kind: Kind, name_required: bool) -> Option<NodeId> {
    let decorators = p.zero_or_more(decorator);
    let keyword = p.token(TokenKind::Class)?;
    let name = if name_required {
        Some(binding_identifier(p)?)
    } else {
        p.optional(binding_identifier)
    };
    let generics = p.optional(flow::generic_parameter_clause);
    let heritage = p.optional(extends_clause);
    let implements = p.optional(flow::implements_clause);
    let open = p.token(TokenKind::LeftBrace)?;
    let members = p.nested(|p| Some(p.zero_or_more(class_element)))?;
    let close = p.token(TokenKind::RightBrace)?;
    Some(p.node(
        kind,
        children![
            decorators, keyword, name, generics, heritage, implements, open, members, close
        ],
    ))
}

pub(crate) fn class_declaration(p: &mut Parser<'_>) -> Option<NodeId> {
    class(p, Kind::ClassDeclaration, true)
}

pub(crate) fn class_expression(p: &mut Parser<'_>) -> Option<NodeId> {
    class(p, Kind::ClassExpression, false)
}

fn anonymous_class_declaration(p: &mut Parser<'_>) -> Option<NodeId> {
    class(p, Kind::ClassDeclaration, false)
}

fn extends_clause(p: &mut Parser<'_>) -> Option<NodeId> {
    let keyword = p.token(TokenKind::Extends)?;
    let superclass = left_hand_side(p)?;
    let type_args = p.optional(flow::type_arguments);
    Some(p.node(
        Kind::ExtendsClause,
        children![keyword, superclass, type_args],
    ))
}

fn class_element(p: &mut Parser<'_>) -> Option<Child> {
    p.first_of(&[
        |p| method_element(p).map(Child::Node),
        |p| field_element(p).map(Child::Node),
        |p| p.token(TokenKind::Semicolon).map(Child::Token),
    ])
}

/// Decorators and `static`, shared by methods and fields.
fn member_prefix(p: &mut Parser<'_>) -> Vec<Child> {
    let decorators = p.zero_or_more(decorator);
    let modifier = p.optional(|p| modifier(p, "static"));
    children![decorators, modifier]
}

/// A contextual keyword used as a modifier, so not followed by something
/// that would make it the member name itself.
fn modifier(p: &mut Parser<'_>, word: &'static str) -> Option<TokenId> {
    let keyword = p.word(word)?;
    let is_name = p.next(|p| {
        p.any_token(&[
            TokenKind::LeftParen,
            TokenKind::Equal,
            TokenKind::Semicolon,
            TokenKind::Colon,
            TokenKind::RightBrace,
            TokenKind::LessThan,
            TokenKind::Comma,
        ])
    });
    (!is_name).then_some(keyword)
}

fn method_element(p: &mut Parser<'_>) -> Option<NodeId> {
    let prefix = member_prefix(p);
    method_definition(p, prefix)
}

/// A method in a class body or an object literal. `prefix` holds whatever
/// came before it (decorators, `static`).
pub(crate) fn method_definition(p: &mut Parser<'_>, mut prefix: Vec<Child>) -> Option<NodeId> {
    let kind = if let Some(get) = p.optional(|p| modifier(p, "get")) {
        prefix.push(get.into());
        Kind::GetMethod
    } else if let Some(set) = p.optional(|p| modifier(p, "set")) {
        prefix.push(set.into());
        Kind::SetMethod
    } else {
        let async_keyword = p.optional(|p| {
            let keyword = modifier(p, "async")?;
            p.no_line_break().then_some(keyword)
        });
        let star = p.optional(|p| p.token(TokenKind::Star));
        prefix.extend(children![async_keyword, star]);
        if star.is_some() {
            Kind::GeneratorMethod
        } else {
            Kind::Method
        }
    };
    let name = property_name(p)?;
    let generics = p.optional(flow::generic_parameter_clause);
    let params = patterns::formal_parameters(p)?;
    let return_type = p.optional(flow::type_annotation);
    let body = function_body(p)?;
    prefix.extend(children![name, generics, params, return_type, body]);
    Some(p.node(kind, prefix))
}

fn field_element(p: &mut Parser<'_>) -> Option<NodeId> {
    let mut parts = member_prefix(p);
    let name = property_name(p)?;
    let annotation = p.optional(flow::type_annotation);
    let value = p.optional(|p| {
        let eq = p.token(TokenKind::Equal)?;
        let value = p.nested(assignment_expression)?;
        Some(children![eq, value])
    });
    let end = eos(p)?;
    parts.extend(children![name, annotation, value, end]);
    Some(p.node(Kind::FieldDeclaration, parts))
}

// Imports

pub(crate) fn import_declaration(p: &mut Parser<'_>) -> Option<NodeId> {
    p.first_of(&[typed_import, plain_import, import_module])
}

/// `import type {A} from 'm'` and `import typeof B from 'm'`
fn typed_import(p: &mut Parser<'_>) -> Option<NodeId> {
    let keyword = p.token(TokenKind::Import)?;
    let flavor = p.first_of(&[|p| p.word("type"), |p| p.token(TokenKind::Typeof)])?;
    let clause = import_clause(p)?;
    let from = from_clause(p)?;
    let end = eos(p)?;
    Some(p.node(
        Kind::ImportDeclaration,
        children![keyword, flavor, clause, from, end],
    ))
}

fn plain_import(p: &mut Parser<'_>) -> Option<NodeId> {
    let keyword = p.token(TokenKind::Import)?;
    let clause = import_clause(p)?;
    let from = from_clause(p)?;
    let end = eos(p)?;
    Some(p.node(
        Kind::ImportDeclaration,
        children![keyword, clause, from, end],
    ))
}

/// `import 'module';`
fn import_module(p: &mut Parser<'_>) -> Option<NodeId> {
    let keyword = p.token(TokenKind::Import)?;
    let source = string_literal(p)?;
    let end = eos(p)?;
    Some(p.node(
        Kind::ImportModuleDeclaration,
        children![keyword, source, end],
    ))
}

fn import_clause(p: &mut Parser<'_>) -> Option<NodeId> {
    let parts = p.first_of(&[
        |p| namespace_import(p).map(|n| children![n]),
        |p| named_imports(p).map(|n| children![n]),
        |p| {
            let default = binding_identifier(p)?;
            let comma = p.token(TokenKind::Comma)?;
            let rest = p.first_of(&[namespace_import, named_imports])?;
            Some(children![default, comma, rest])
        },
        |p| binding_identifier(p).map(|n| children![n]),
    ])?;
    Some(p.node(Kind::ImportClause, parts))
}

fn namespace_import(p: &mut Parser<'_>) -> Option<NodeId> {
    let star = p.token(TokenKind::Star)?;
    let as_keyword = p.word("as")?;
    let name = binding_identifier(p)?;
    Some(p.node(Kind::NamespaceImport, children![star, as_keyword, name]))
}

fn named_imports(p: &mut Parser<'_>) -> Option<NodeId> {
    let open = p.token(TokenKind::LeftBrace)?;
    let list = p.nested(|p| {
        Some(separated_list(
            p,
            import_specifier,
            &[TokenKind::Comma],
            Trailing::Allow,
        ))
    })?;
    let close = p.token(TokenKind::RightBrace)?;
    Some(factory::separated(
        p.builder(),
        Kind::NamedImports,
        Some(open),
        list,
        Some(close),
    ))
}

/// `name`, `name as local`, or either with a Flow `type`/`typeof` marker.
fn import_specifier(p: &mut Parser<'_>) -> Option<NodeId> {
    let flavor = p.optional(|p| {
        let flavor = p.first_of(&[|p| p.word("type"), |p| p.token(TokenKind::Typeof)])?;
        p.next(|p| p.identifier_name()).then_some(flavor)
    });
    let parts = p.first_of(&[
        |p| {
            let imported = lexical::identifier_name(p)?;
            let as_keyword = p.word("as")?;
            let local = binding_identifier(p)?;
            Some(children![imported, as_keyword, local])
        },
        |p| binding_identifier(p).map(|n| children![n]),
    ])?;
    let mut children = children![flavor];
    children.extend(parts);
    Some(p.node(Kind::ImportSpecifier, children))
}

fn from_clause(p: &mut Parser<'_>) -> Option<NodeId> {
    let keyword = p.word("from")?;
    let source = string_literal(p)?;
    Some(p.node(Kind::FromClause, children![keyword, source]))
}

// Exports

pub(crate) fn export_declaration(p: &mut Parser<'_>) -> Option<NodeId> {
    p.first_of(&[
        export_default,
        export_namespace,
        export_list,
        export_default_binding,
        export_flow,
        export_named_declaration,
    ])
}

fn export_default(p: &mut Parser<'_>) -> Option<NodeId> {
    let export = p.token(TokenKind::Export)?;
    let default = p.token(TokenKind::Default)?;
    let value = p.first_of(&[
        |p| anonymous_function_declaration(p).map(|n| children![n]),
        |p| anonymous_class_declaration(p).map(|n| children![n]),
        |p| {
            let value = assignment_expression(p)?;
            let end = eos(p)?;
            Some(children![value, end])
        },
    ])?;
    let mut parts = children![export, default];
    parts.extend(value);
    Some(p.node(Kind::DefaultExportDeclaration, parts))
}

/// `export * (as name)? from 'm'`
fn export_namespace(p: &mut Parser<'_>) -> Option<NodeId> {
    let export = p.token(TokenKind::Export)?;
    let star = p.token(TokenKind::Star)?;
    let alias = p.optional(|p| {
        let as_keyword = p.word("as")?;
        let name = lexical::identifier_name(p)?;
        Some(children![as_keyword, name])
    });
    let from = from_clause(p)?;
    let end = eos(p)?;
    Some(p.node(
        Kind::NamespaceExportDeclaration,
        children![export, star, alias, from, end],
    ))
}

/// `export {a, b as c} (from 'm')?`
fn export_list(p: &mut Parser<'_>) -> Option<NodeId> {
    let export = p.token(TokenKind::Export)?;
    let clause = export_clause(p)?;
    let from = p.optional(from_clause);
    let end = eos(p)?;
    Some(p.node(
        Kind::NamedExportDeclaration,
        children![export, clause, from, end],
    ))
}

fn export_clause(p: &mut Parser<'_>) -> Option<NodeId> {
    let open = p.token(TokenKind::LeftBrace)?;
    let list = p.nested(|p| {
        Some(separated_list(
            p,
            export_specifier,
            &[TokenKind::Comma],
            Trailing::Allow,
        ))
    })?;
    let close = p.token(TokenKind::RightBrace)?;
    Some(factory::separated(
        p.builder(),
        Kind::ExportClause,
        Some(open),
        list,
        Some(close),
    ))
}

fn export_specifier(p: &mut Parser<'_>) -> Option<NodeId> {
    let local = lexical::identifier_name(p)?;
    let alias = p.optional(|p| {
        let as_keyword = p.word("as")?;
        let exported = lexical::identifier_name(p)?;
        Some(children![as_keyword, exported])
    });
    Some(p.node(Kind::ExportSpecifier, children![local, alias]))
}

/// `export v from 'm'`, `export v, * as ns from 'm'`, `export v, {a} from 'm'`
fn export_default_binding(p: &mut Parser<'_>) -> Option<NodeId> {
    let export = p.token(TokenKind::Export)?;
    let binding = p.first_of(&[
        |p| {
            let name = identifier_reference(p)?;
            let comma = p.token(TokenKind::Comma)?;
            let star = p.token(TokenKind::Star)?;
            let as_keyword = p.word("as")?;
            let alias = lexical::identifier_name(p)?;
            Some(p.node(
                Kind::ExportDefaultBindingWithNamespaceExport,
                children![name, comma, star, as_keyword, alias],
            ))
        },
        |p| {
            let name = identifier_reference(p)?;
            let comma = p.token(TokenKind::Comma)?;
            let clause = export_clause(p)?;
            Some(p.node(
                Kind::ExportDefaultBindingWithExportList,
                children![name, comma, clause],
            ))
        },
        |p| {
            let name = identifier_reference(p)?;
            if !p.next(|p| p.word("from")) {
                return None;
            }
            Some(p.node(Kind::ExportDefaultBinding, children![name]))
        },
    ])?;
    let from = from_clause(p)?;
    let end = eos(p)?;
    Some(p.node(
        Kind::NamedExportDeclaration,
        children![export, binding, from, end],
    ))
}

/// `export type A = B`, `export opaque type`, `export interface`,
/// `export type {A} from 'm'`
fn export_flow(p: &mut Parser<'_>) -> Option<NodeId> {
    let export = p.token(TokenKind::Export)?;
    let declaration = p.first_of(&[
        |p| flow::type_alias(p).map(|n| children![n]),
        |p| flow::opaque_type(p).map(|n| children![n]),
        |p| flow::interface_declaration(p).map(|n| children![n]),
        |p| {
            let keyword = p.word("type")?;
            let clause = export_clause(p)?;
            let from = p.optional(from_clause);
            let end = eos(p)?;
            Some(children![keyword, clause, from, end])
        },
    ])?;
    let mut parts = children![export];
    parts.extend(declaration);
    Some(p.node(Kind::NamedExportDeclaration, parts))
}

fn export_named_declaration(p: &mut Parser<'_>) -> Option<NodeId> {
    let export = p.token(TokenKind::Export)?;
    let declaration = p.first_of(&[variable_statement, function_declaration, class_declaration])?;
    Some(p.node(
        Kind::NamedExportDeclaration,
        children![export, declaration],
    ))
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
    fn test_function_kinds() {
        assert!(sexp("function f() {}", function_declaration).starts_with("(FunctionDeclaration function"));
        assert!(sexp("function* g() {}", function_declaration).starts_with("(GeneratorDeclaration function *"));
        assert!(sexp("async function h() {}", function_declaration).starts_with("(FunctionDeclaration async function"));
        assert!(sexp("function () {}", function_expression).starts_with("(FunctionExpression function (FormalParameterList"));
    }

    #[test]
    fn test_function_with_flow_signature() {
        let out = sexp("function id<T>(x: T): T { return x }", function_declaration);
        assert!(out.contains("(GenericParameterClause <"));
        assert!(out.contains("(TypedBindingElement (BindingIdentifier x) (TypeAnnotation"));
    }

    #[test]
    fn test_class_members() {
        let out = sexp(
            "@dec class A extends B { static x = 1; get y() {} set y(v) {} async *z() {} static() {} ; w: number }",
            class_declaration,
        );
        assert!(out.starts_with("(ClassDeclaration (Decorator @ (IdentifierReference dec)) class"));
        assert!(out.contains("(ExtendsClause extends (IdentifierReference B))"));
        assert!(out.contains("(FieldDeclaration static (IdentifierName x) = (NumericLiteral 1) ;)"));
        assert!(out.contains("(GetMethod get (IdentifierName y)"));
        assert!(out.contains("(SetMethod set (IdentifierName y)"));
        assert!(out.contains("(GeneratorMethod async * (IdentifierName z)"));
        assert!(out.contains("(Method (IdentifierName static)"));
        assert!(out.contains("(FieldDeclaration (IdentifierName w) (TypeAnnotation"));
    }

    #[test]
    fn test_decorator_with_path_and_arguments() {
        assert_eq!(
            sexp("@a.b(1)", decorator),
            "(Decorator @ (IdentifierReference a) . (IdentifierName b) (ArgumentList ( (NumericLiteral 1) )))"
        );
    }

    #[test]
    fn test_import_forms() {
        assert!(sexp("import a from 'm';", import_declaration).contains("(ImportClause (BindingIdentifier a))"));
        assert!(sexp("import * as ns from 'm'", import_declaration).contains("(NamespaceImport * as (BindingIdentifier ns))"));
        assert!(sexp("import a, { b as c, d } from 'm'", import_declaration).contains("(NamedImports {"));
        assert!(sexp("import 'm';", import_declaration).starts_with("(ImportModuleDeclaration import (StringLiteral 'm')"));
        assert!(sexp("import type { T } from 'm'", import_declaration).starts_with("(ImportDeclaration import type"));
        assert!(sexp("import type from 'm'", import_declaration).contains("(ImportClause (BindingIdentifier type))"));
    }

    #[test]
    fn test_export_forms() {
        for (source, kind) in [
            ("export default function () {}", "(DefaultExportDeclaration"),
            ("export default a + b;", "(DefaultExportDeclaration"),
            ("export * from 'm';", "(NamespaceExportDeclaration"),
            ("export * as ns from 'm';", "(NamespaceExportDeclaration"),
            ("export { a, b as c };", "(NamedExportDeclaration export (ExportClause"),
            ("export v from 'm';", "(NamedExportDeclaration export (ExportDefaultBinding"),
            ("export v, * as ns from 'm';", "(NamedExportDeclaration export (ExportDefaultBindingWithNamespaceExport"),
            ("export v, { a } from 'm';", "(NamedExportDeclaration export (ExportDefaultBindingWithExportList"),
            ("export type A = number;", "(NamedExportDeclaration export (TypeAlias"),
            ("export const x = 1;", "(NamedExportDeclaration export (VariableStatement"),
            ("export class C {}", "(NamedExportDeclaration export (ClassDeclaration"),
        ] {
            let out = sexp(source, export_declaration);
            assert!(out.starts_with(kind), "{} gave {}", source, out);
        }
    }
}
