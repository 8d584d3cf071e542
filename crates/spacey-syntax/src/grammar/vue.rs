// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Top level of a Vue single-file component.
//!
//! Only `<script>` bodies are parsed. `<template>`, `<style>` and custom
//! blocks each become one opaque [`TokenKind::VueSection`] token.

use super::module_body;
use crate::engine::Parser;
use crate::lexer::TokenKind;
use crate::tree::{Child, Kind, children};

pub(super) fn items(p: &mut Parser<'_>) -> Vec<Child> {
    p.zero_or_more(|p| p.first_of(&[script_element, section]))
}

/// `<script ...> shebang? module-body? </script>`
fn script_element(p: &mut Parser<'_>) -> Option<Child> {
    let start = p.blank_token(TokenKind::VueScriptStart)?;
    let shebang = p.optional(|p| p.token(TokenKind::Shebang));
    let body = p.optional(module_body);
    let end = p.token(TokenKind::VueScriptEnd)?;
    let node = p.node(
        Kind::VueScriptElement,
        children![start, shebang, body, end],
    );
    Some(Child::Node(node))
}

fn section(p: &mut Parser<'_>) -> Option<Child> {
    p.blank_token(TokenKind::VueSection).map(Child::Token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sexp(source: &str) -> String {
        let mut p = Parser::new(source);
        let items = items(&mut p);
        assert!(p.at_end(), "unconsumed input in {:?}", source);
        let root = p.node(Kind::VueScript, items);
        let tree = p.into_builder().finish(root);
        tree.to_sexp(tree.root())
    }

    #[test]
    fn test_sections_around_script() {
        let out = sexp(
            "<template>\n  <div>{{ msg }}</div>\n</template>\n\
             <script>\nexport default { data() { return {} } }\n</script>\n\
             <style scoped>\n.a { color: red }\n</style>\n",
        );
        assert!(out.starts_with("(VueScript <template>"));
        assert!(out.contains("(VueScriptElement <script> (ModuleBody (DefaultExportDeclaration"));
        assert!(out.contains("</script>)"));
        assert!(out.ends_with("</style>)"));
    }

    #[test]
    fn test_empty_script() {
        assert_eq!(
            sexp("<script lang=\"js\"></script>"),
            "(VueScript (VueScriptElement <script lang=\"js\"> </script>))"
        );
    }

    #[test]
    fn test_html_comment_section() {
        assert_eq!(
            sexp("<!-- note -->\n<script>a</script>"),
            "(VueScript <!-- note --> (VueScriptElement <script> (ModuleBody \
             (ExpressionStatement (IdentifierReference a))) </script>))"
        );
    }

    #[test]
    fn test_shebang_after_script_tag() {
        assert_eq!(
            sexp("<script>#!/usr/bin/env node\na</script>"),
            "(VueScript (VueScriptElement <script> #!/usr/bin/env node (ModuleBody \
             (ExpressionStatement (IdentifierReference a))) </script>))"
        );
    }
}
