// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Flow type annotations and declarations.
//!
//! Type grammar, loosest binding first:
//!
//! ```text
//! type         = function-type | union
//! union        = '|'? intersection ('|' intersection)*
//! intersection = '&'? prefix ('&' prefix)*
//! prefix       = '?' prefix | postfix
//! postfix      = primary ('[' ']')*
//! ```
//!
//! A function type is also a primary type, so `A | (b) => B => c` as an
//! arrow return type reads `A | ((b) => B)` before the arrow's `=>`.

use super::lexical::{self, binding_identifier, eos, string_literal};
use super::statements::variable_statement;
use super::{Trailing, module_item, patterns, separated_list};
use crate::engine::{MemoRule, Parser};
use crate::factory;
use crate::lexer::TokenKind;
use crate::tree::{Child, Kind, NodeId, TokenId, children};

/// `: Type`
pub(crate) fn type_annotation(p: &mut Parser<'_>) -> Option<NodeId> {
    let colon = p.token(TokenKind::Colon)?;
    let ty = flow_type(p)?;
    Some(p.node(Kind::TypeAnnotation, children![colon, ty]))
}

pub(crate) fn flow_type(p: &mut Parser<'_>) -> Option<NodeId> {
    p.memoized(MemoRule::FlowType, |p| p.first_of(&[function_type, union_type]))
}

/// `<T>? (params) => Type`
fn function_type(p: &mut Parser<'_>) -> Option<NodeId> {
    let generics = p.optional(generic_parameter_clause);
    let params = function_type_parameters(p)?;
    let arrow = p.token(TokenKind::Arrow)?;
    let ret = flow_type(p)?;
    Some(p.node(
        Kind::FunctionType,
        children![generics, params, arrow, ret],
    ))
}

fn function_type_parameters(p: &mut Parser<'_>) -> Option<NodeId> {
    let open = p.token(TokenKind::LeftParen)?;
    let list = p.nested(|p| {
        Some(separated_list(
            p,
            function_type_parameter,
            &[TokenKind::Comma],
            Trailing::Allow,
        ))
    })?;
    let close = p.token(TokenKind::RightParen)?;
    Some(factory::separated(
        p.builder(),
        Kind::FunctionTypeParameterClause,
        Some(open),
        list,
        Some(close),
    ))
}

fn function_type_parameter(p: &mut Parser<'_>) -> Option<NodeId> {
    let rest = p.optional(|p| p.token(TokenKind::Ellipsis));
    let parts = p.first_of(&[named_parameter, |p| flow_type(p).map(|ty| children![ty])])?;
    let mut children = children![rest];
    children.extend(parts);
    Some(p.node(Kind::FunctionTypeParameter, children))
}

fn named_parameter(p: &mut Parser<'_>) -> Option<Vec<Child>> {
    let name = p.identifier_name()?;
    let question = p.optional(|p| p.token(TokenKind::Question));
    let colon = p.token(TokenKind::Colon)?;
    let ty = flow_type(p)?;
    Some(children![name, question, colon, ty])
}

/// Folds `lead? first (op operand)*` into one node of `kind`, or returns the
/// single operand unchanged.
fn type_chain(
    p: &mut Parser<'_>,
    kind: Kind,
    operator: TokenKind,
    operand: fn(&mut Parser<'_>) -> Option<NodeId>,
) -> Option<NodeId> {
    let lead = p.optional(|p| p.token(operator));
    let first = operand(p)?;
    let rest = p.zero_or_more(|p| {
        let op = p.token(operator)?;
        let next = operand(p)?;
        Some(children![op, next])
    });
    if lead.is_none() && rest.is_empty() {
        return Some(first);
    }
    let mut children = children![lead, first];
    children.extend(rest.into_iter().flatten());
    Some(p.node(kind, children))
}

fn union_type(p: &mut Parser<'_>) -> Option<NodeId> {
    type_chain(p, Kind::UnionType, TokenKind::Pipe, intersection_type)
}

fn intersection_type(p: &mut Parser<'_>) -> Option<NodeId> {
    type_chain(p, Kind::IntersectionType, TokenKind::Ampersand, prefix_type)
}

fn prefix_type(p: &mut Parser<'_>) -> Option<NodeId> {
    if let Some(question) = p.optional(|p| p.token(TokenKind::Question)) {
        let inner = prefix_type(p)?;
        return Some(p.node(Kind::OptionalType, children![question, inner]));
    }
    let mut ty = primary_type(p)?;
    for (open, close) in p.zero_or_more(|p| {
        let open = p.token(TokenKind::LeftBracket)?;
        let close = p.token(TokenKind::RightBracket)?;
        Some((open, close))
    }) {
        ty = p.node(Kind::ArrayType, children![ty, open, close]);
    }
    Some(ty)
}

fn primary_type(p: &mut Parser<'_>) -> Option<NodeId> {
    p.first_of(&[
        function_type,
        object_type,
        tuple_type,
        parenthesised_type,
        typeof_type,
        literal_type,
        keyword_type,
        named_type,
    ])
}

fn parenthesised_type(p: &mut Parser<'_>) -> Option<NodeId> {
    let open = p.token(TokenKind::LeftParen)?;
    let ty = p.nested(flow_type)?;
    let close = p.token(TokenKind::RightParen)?;
    Some(p.node(Kind::ParenthesisedType, children![open, ty, close]))
}

fn tuple_type(p: &mut Parser<'_>) -> Option<NodeId> {
    let open = p.token(TokenKind::LeftBracket)?;
    let list = p.nested(|p| Some(separated_list(p, flow_type, &[TokenKind::Comma], Trailing::Allow)))?;
    let close = p.token(TokenKind::RightBracket)?;
    Some(factory::separated(
        p.builder(),
        Kind::TupleType,
        Some(open),
        list,
        Some(close),
    ))
}

fn typeof_type(p: &mut Parser<'_>) -> Option<NodeId> {
    let keyword = p.token(TokenKind::Typeof)?;
    let target = qualified_name(p)?;
    Some(p.node(Kind::TypeofType, children![keyword, target]))
}

fn literal_type(p: &mut Parser<'_>) -> Option<NodeId> {
    let tokens = p.first_of(&[
        |p| p.token(TokenKind::StringLiteral).map(|t| children![t]),
        |p| {
            let minus = p.optional(|p| p.token(TokenKind::Minus));
            let number = p.token(TokenKind::NumericLiteral)?;
            Some(children![minus, number])
        },
        |p| p.any_token(&[TokenKind::True, TokenKind::False]).map(|t| children![t]),
    ])?;
    Some(p.node(Kind::LiteralType, tokens))
}

/// `*`, `void` and `null`, which are not identifiers.
fn keyword_type(p: &mut Parser<'_>) -> Option<NodeId> {
    let token = p.any_token(&[TokenKind::Star, TokenKind::Void, TokenKind::Null])?;
    Some(p.node(Kind::SimpleType, children![token]))
}

/// `A`, `A.B.C`
fn qualified_name(p: &mut Parser<'_>) -> Option<NodeId> {
    let head = p.token(TokenKind::Identifier)?;
    let mut name = p.node(Kind::SimpleType, children![head]);
    for (dot, part) in p.zero_or_more(|p| {
        let dot = p.token(TokenKind::Dot)?;
        let part = p.identifier_name()?;
        Some((dot, part))
    }) {
        name = p.node(Kind::NamespacedType, children![name, dot, part]);
    }
    Some(name)
}

/// A possibly qualified name with optional type arguments: `Map<K, V>`.
fn named_type(p: &mut Parser<'_>) -> Option<NodeId> {
    let name = qualified_name(p)?;
    match p.optional(type_arguments) {
        Some(args) => Some(p.node(Kind::GenericType, children![name, args])),
        None => Some(name),
    }
}

/// `<A, B>`
pub(crate) fn type_arguments(p: &mut Parser<'_>) -> Option<NodeId> {
    let open = p.token(TokenKind::LessThan)?;
    let list = p.nested(|p| Some(separated_list(p, flow_type, &[TokenKind::Comma], Trailing::Allow)))?;
    let close = p.token(TokenKind::GreaterThan)?;
    Some(factory::separated(
        p.builder(),
        Kind::TypeArguments,
        Some(open),
        list,
        Some(close),
    ))
}

/// `<+T: Bound = Default, U>`
pub(crate) fn generic_parameter_clause(p: &mut Parser<'_>) -> Option<NodeId> {
    let open = p.token(TokenKind::LessThan)?;
    let list = p.nested(|p| {
        Some(separated_list(
            p,
            generic_parameter,
            &[TokenKind::Comma],
            Trailing::Allow,
        ))
    })?;
    if list.is_empty() {
        return None;
    }
    let close = p.token(TokenKind::GreaterThan)?;
    Some(factory::separated(
        p.builder(),
        Kind::GenericParameterClause,
        Some(open),
        list,
        Some(close),
    ))
}

fn variance(p: &mut Parser<'_>) -> Option<TokenId> {
    p.any_token(&[TokenKind::Plus, TokenKind::Minus])
}

fn generic_parameter(p: &mut Parser<'_>) -> Option<NodeId> {
    let sigil = p.optional(variance);
    let name = binding_identifier(p)?;
    let bound = p.optional(type_annotation);
    let default = p.optional(|p| {
        let eq = p.token(TokenKind::Equal)?;
        let ty = flow_type(p)?;
        Some(children![eq, ty])
    });
    Some(p.node(
        Kind::GenericParameter,
        children![sigil, name, bound, default],
    ))
}

/// `implements A, B<C>`
pub(crate) fn implements_clause(p: &mut Parser<'_>) -> Option<NodeId> {
    let keyword = p.word("implements")?;
    let list = separated_list(p, named_type, &[TokenKind::Comma], Trailing::Forbid);
    if list.is_empty() {
        return None;
    }
    let mut children = children![keyword];
    children.extend(list.flatten());
    Some(p.node(Kind::ImplementsClause, children))
}

// Object types

/// `{ a: A, b?: B }` and the exact form `{| a: A |}`
fn object_type(p: &mut Parser<'_>) -> Option<NodeId> {
    let open = p.token(TokenKind::LeftBrace)?;
    if let Some(bars) = p.optional(|p| p.token(TokenKind::PipePipe)) {
        let close = p.token(TokenKind::RightBrace)?;
        return Some(p.node(Kind::ObjectType, children![open, bars, close]));
    }
    let open_bar = p.optional(|p| p.token(TokenKind::Pipe));
    let list = p.nested(|p| {
        Some(separated_list(
            p,
            object_type_member,
            &[TokenKind::Comma, TokenKind::Semicolon],
            Trailing::Allow,
        ))
    })?;
    let close_bar = p.optional(|p| p.token(TokenKind::Pipe));
    let close = p.token(TokenKind::RightBrace)?;
    let mut children = children![open, open_bar];
    children.extend(list.flatten());
    children.extend(children![close_bar, close]);
    Some(p.node(Kind::ObjectType, children))
}

fn object_type_member(p: &mut Parser<'_>) -> Option<NodeId> {
    p.first_of(&[
        object_type_spread,
        object_type_indexer,
        call_property,
        object_type_method,
        object_type_property,
    ])
}

fn object_type_spread(p: &mut Parser<'_>) -> Option<NodeId> {
    let dots = p.token(TokenKind::Ellipsis)?;
    let ty = flow_type(p)?;
    Some(p.node(Kind::ObjectTypeSpread, children![dots, ty]))
}

/// `+[K]: V`, `[name: K]: V`
fn object_type_indexer(p: &mut Parser<'_>) -> Option<NodeId> {
    let sigil = p.optional(variance);
    let open = p.token(TokenKind::LeftBracket)?;
    let key_name = p.optional(|p| {
        let name = lexical::identifier_name(p)?;
        let colon = p.token(TokenKind::Colon)?;
        Some(children![name, colon])
    });
    let key = flow_type(p)?;
    let close = p.token(TokenKind::RightBracket)?;
    let colon = p.token(TokenKind::Colon)?;
    let value = flow_type(p)?;
    Some(p.node(
        Kind::ObjectTypeIndexer,
        children![sigil, open, key_name, key, close, colon, value],
    ))
}

/// `<T>(x: T): R`, a callable object type.
fn call_property(p: &mut Parser<'_>) -> Option<NodeId> {
    let signature = method_signature(p)?;
    Some(p.node(Kind::ObjectTypeMethod, signature))
}

fn method_signature(p: &mut Parser<'_>) -> Option<Vec<Child>> {
    let generics = p.optional(generic_parameter_clause);
    let params = function_type_parameters(p)?;
    let colon = p.token(TokenKind::Colon)?;
    let ret = flow_type(p)?;
    Some(children![generics, params, colon, ret])
}

fn property_key(p: &mut Parser<'_>) -> Option<NodeId> {
    p.first_of(&[lexical::identifier_name, string_literal])
}

/// `static? key<T>(params): R`
fn object_type_method(p: &mut Parser<'_>) -> Option<NodeId> {
    let modifier = p.optional(|p| {
        let keyword = p.word("static")?;
        p.next(property_key).then_some(keyword)
    });
    let key = property_key(p)?;
    let signature = method_signature(p)?;
    let mut children = children![modifier, key];
    children.extend(signature);
    Some(p.node(Kind::ObjectTypeMethod, children))
}

/// `+key?: Type`
fn object_type_property(p: &mut Parser<'_>) -> Option<NodeId> {
    let sigil = p.optional(variance);
    let key = property_key(p)?;
    let question = p.optional(|p| p.token(TokenKind::Question));
    let colon = p.token(TokenKind::Colon)?;
    let ty = flow_type(p)?;
    Some(p.node(
        Kind::ObjectTypeProperty,
        children![sigil, key, question, colon, ty],
    ))
}

// Declarations

pub(crate) fn flow_declaration(p: &mut Parser<'_>) -> Option<NodeId> {
    p.first_of(&[
        type_alias,
        opaque_type,
        interface_declaration,
        declare_statement,
    ])
}

/// `type A<T> = Type;`
pub(crate) fn type_alias(p: &mut Parser<'_>) -> Option<NodeId> {
    let keyword = p.word("type")?;
    let name = binding_identifier(p)?;
    let generics = p.optional(generic_parameter_clause);
    let eq = p.token(TokenKind::Equal)?;
    let ty = flow_type(p)?;
    let end = eos(p)?;
    Some(p.node(
        Kind::TypeAlias,
        children![keyword, name, generics, eq, ty, end],
    ))
}

/// `opaque type A: Super = Type;`, the right-hand side optional in
/// declarations.
pub(crate) fn opaque_type(p: &mut Parser<'_>) -> Option<NodeId> {
    let opaque = p.word("opaque")?;
    let keyword = p.word("type")?;
    let name = binding_identifier(p)?;
    let generics = p.optional(generic_parameter_clause);
    let supertype = p.optional(type_annotation);
    let value = p.optional(|p| {
        let eq = p.token(TokenKind::Equal)?;
        let ty = flow_type(p)?;
        Some(children![eq, ty])
    });
    let end = eos(p)?;
    Some(p.node(
        Kind::OpaqueTypeAlias,
        children![opaque, keyword, name, generics, supertype, value, end],
    ))
}

/// `interface I<T> extends J, K { ... }`
pub(crate) fn interface_declaration(p: &mut Parser<'_>) -> Option<NodeId> {
    let keyword = p.word("interface")?;
    let name = binding_identifier(p)?;
    let generics = p.optional(generic_parameter_clause);
    let extends = p.optional(|p| type_list_clause(p, |p| p.token(TokenKind::Extends)));
    let body = object_type(p)?;
    Some(p.node(
        Kind::InterfaceDeclaration,
        children![keyword, name, generics, extends, body],
    ))
}

/// `keyword A, B<C>` as an `ExtendsClause`.
fn type_list_clause(
    p: &mut Parser<'_>,
    keyword: impl FnOnce(&mut Parser<'_>) -> Option<TokenId>,
) -> Option<NodeId> {
    let keyword = keyword(p)?;
    let list = separated_list(p, named_type, &[TokenKind::Comma], Trailing::Forbid);
    if list.is_empty() {
        return None;
    }
    let mut children = children![keyword];
    children.extend(list.flatten());
    Some(p.node(Kind::ExtendsClause, children))
}

/// `declare ...`
fn declare_statement(p: &mut Parser<'_>) -> Option<NodeId> {
    let declare = p.word("declare")?;
    if !p.no_line_break() {
        return None;
    }
    let declaration = p.first_of(&[
        variable_statement,
        declare_function,
        declare_class,
        module_exports,
        declare_module,
        declare_export,
        type_alias,
        opaque_type,
        interface_declaration,
    ])?;
    Some(p.node(
        Kind::DeclareStatement,
        children![declare, declaration],
    ))
}

/// `function f<T>(x: T): R;`
fn declare_function(p: &mut Parser<'_>) -> Option<NodeId> {
    let keyword = p.token(TokenKind::Function)?;
    let name = binding_identifier(p)?;
    let generics = p.optional(generic_parameter_clause);
    let params = patterns::formal_parameters(p)?;
    let ret = type_annotation(p)?;
    let end = eos(p)?;
    Some(p.node(
        Kind::FunctionSignature,
        children![keyword, name, generics, params, ret, end],
    ))
}

/// `class A<T> extends B mixins C implements D { ... }`
fn declare_class(p: &mut Parser<'_>) -> Option<NodeId> {
    let keyword = p.token(TokenKind::Class)?;
    let name = binding_identifier(p)?;
    let generics = p.optional(generic_parameter_clause);
    let extends = p.optional(|p| type_list_clause(p, |p| p.token(TokenKind::Extends)));
    let mixins = p.optional(|p| type_list_clause(p, |p| p.word("mixins")));
    let implements = p.optional(implements_clause);
    let body = object_type(p)?;
    Some(p.node(
        Kind::DeclareClass,
        children![keyword, name, generics, extends, mixins, implements, body],
    ))
}

/// `module.exports: Type;`
fn module_exports(p: &mut Parser<'_>) -> Option<NodeId> {
    let module = p.word("module")?;
    let dot = p.token(TokenKind::Dot)?;
    let exports = p.word("exports")?;
    let ty = type_annotation(p)?;
    let end = eos(p)?;
    Some(p.node(
        Kind::ModuleExports,
        children![module, dot, exports, ty, end],
    ))
}

/// `module 'name' { ... }`
fn declare_module(p: &mut Parser<'_>) -> Option<NodeId> {
    let module = p.word("module")?;
    let name = p.first_of(&[string_literal, binding_identifier])?;
    let open = p.token(TokenKind::LeftBrace)?;
    let body = p.nested(|p| Some(p.zero_or_more(module_item)))?;
    let close = p.token(TokenKind::RightBrace)?;
    Some(p.node(
        Kind::DeclareModule,
        children![module, name, open, body, close],
    ))
}

/// `export default? (function | class | var | type ... | Type;)`
fn declare_export(p: &mut Parser<'_>) -> Option<NodeId> {
    let export = p.token(TokenKind::Export)?;
    let default = p.optional(|p| p.token(TokenKind::Default));
    let declaration = p.first_of(&[
        declare_function,
        declare_class,
        variable_statement,
        type_alias,
        opaque_type,
        interface_declaration,
    ]);
    let rest = match declaration {
        Some(declaration) => children![declaration],
        None => {
            let ty = flow_type(p)?;
            let end = eos(p)?;
            children![ty, end]
        }
    };
    let mut children = children![export, default];
    children.extend(rest);
    Some(p.node(Kind::DeclareExport, children))
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
    fn test_simple_and_generic_types() {
        assert_eq!(sexp("number", flow_type), "(SimpleType number)");
        assert_eq!(
            sexp("Map<K, V[]>", flow_type),
            "(GenericType (SimpleType Map) (TypeArguments < (SimpleType K) , \
             (ArrayType (SimpleType V) [ ]) >))"
        );
        assert_eq!(
            sexp("A.B", flow_type),
            "(NamespacedType (SimpleType A) . B)"
        );
    }

    #[test]
    fn test_deep_parentheses_reuse_memoized_types() {
        let depth = 30;
        let source = format!("{}number{}", "(".repeat(depth), ")".repeat(depth));
        let mut p = Parser::new(&source);
        let node = flow_type(&mut p).unwrap();
        assert!(p.at_end());
        assert!(p.memo_len() <= 2 * depth + 2);
        let tree = p.into_builder().finish(node);
        assert!(tree.to_sexp(tree.root()).starts_with("(ParenthesisedType ( (ParenthesisedType"));
    }

    #[test]
    fn test_nested_type_arguments_split_shift() {
        assert!(sexp("Array<Array<T>>", flow_type).ends_with(">)) >))"));
    }

    #[test]
    fn test_union_and_intersection() {
        assert_eq!(
            sexp("| A | B & C", flow_type),
            "(UnionType | (SimpleType A) | (IntersectionType (SimpleType B) & (SimpleType C)))"
        );
        assert_eq!(sexp("?string", flow_type), "(OptionalType ? (SimpleType string))");
    }

    #[test]
    fn test_literal_and_keyword_types() {
        assert_eq!(sexp("'a'", flow_type), "(LiteralType 'a')");
        assert_eq!(sexp("-1", flow_type), "(LiteralType - 1)");
        assert_eq!(sexp("void", flow_type), "(SimpleType void)");
        assert_eq!(sexp("typeof x", flow_type), "(TypeofType typeof (SimpleType x))");
    }

    #[test]
    fn test_function_type() {
        assert_eq!(
            sexp("(x: number, ...rest: Array<string>) => void", flow_type),
            "(FunctionType (FunctionTypeParameterClause ( (FunctionTypeParameter x : (SimpleType number)) , \
             (FunctionTypeParameter ... rest : (GenericType (SimpleType Array) (TypeArguments < (SimpleType string) >))) )) \
             => (SimpleType void))"
        );
    }

    #[test]
    fn test_function_type_inside_union() {
        let out = sexp("A | (b) => B", flow_type);
        assert!(out.starts_with("(UnionType (SimpleType A) | (FunctionType"));
    }

    #[test]
    fn test_object_types() {
        let out = sexp(
            "{| +a: number, b?: string; [k: string]: mixed, m(x: T): void, (): void, ...Rest |}",
            flow_type,
        );
        assert!(out.starts_with("(ObjectType { |"));
        assert!(out.contains("(ObjectTypeProperty + (IdentifierName a) : (SimpleType number))"));
        assert!(out.contains("(ObjectTypeProperty (IdentifierName b) ? :"));
        assert!(out.contains("(ObjectTypeIndexer [ (IdentifierName k) : (SimpleType string) ] :"));
        assert!(out.contains("(ObjectTypeMethod (IdentifierName m)"));
        assert!(out.contains("(ObjectTypeMethod (FunctionTypeParameterClause ( )) :"));
        assert!(out.contains("(ObjectTypeSpread ... (SimpleType Rest))"));
        assert!(out.ends_with("| })"));
        assert_eq!(sexp("{||}", flow_type), "(ObjectType { || })");
    }

    #[test]
    fn test_declarations() {
        assert!(sexp("type A<T> = Array<T>;", flow_declaration).starts_with("(TypeAlias type (BindingIdentifier A) (GenericParameterClause"));
        assert!(sexp("opaque type Id: string = string;", flow_declaration).starts_with("(OpaqueTypeAlias opaque type"));
        assert!(sexp("interface I extends J { x: number }", flow_declaration).contains("(ExtendsClause extends (SimpleType J))"));
        assert!(sexp("declare var x: number;", flow_declaration).starts_with("(DeclareStatement declare (VariableStatement"));
        assert!(sexp("declare function f(x: number): string;", flow_declaration).contains("(FunctionSignature function"));
        assert!(sexp("declare class A extends B mixins C { }", flow_declaration).contains("(DeclareClass class"));
        assert!(sexp("declare module.exports: { foo: number };", flow_declaration).contains("(ModuleExports module . exports"));
        assert!(sexp("declare module 'm' { declare var x: number; }", flow_declaration).contains("(DeclareModule module (StringLiteral 'm') {"));
        assert!(sexp("declare export default class A {}", flow_declaration).contains("(DeclareExport export default (DeclareClass"));
    }

    #[test]
    fn test_generic_parameters_with_variance_and_default() {
        assert_eq!(
            sexp("<+T: Base = Default>", generic_parameter_clause),
            "(GenericParameterClause < (GenericParameter + (BindingIdentifier T) \
             (TypeAnnotation : (SimpleType Base)) = (SimpleType Default)) >)"
        );
    }
}
