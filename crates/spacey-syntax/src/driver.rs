// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Public entry point: pick a start rule, parse, finish the tree.

use tracing::{debug, debug_span};

use crate::engine::Parser;
use crate::error::{self, ParseError};
use crate::grammar;
use crate::lexer::TokenKind;
use crate::tree::{Kind, Tree, children};

/// Which grammar rule the whole input must match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StartRule {
    /// A script or module, with an optional leading shebang
    #[default]
    Script,
    /// A Vue single-file component
    VueScript,
}

/// Parses source texts against one start rule.
///
/// A driver holds no state between parses, so one value can be shared
/// freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserDriver {
    start: StartRule,
}

impl ParserDriver {
    /// Creates a driver for `start`.
    pub fn new(start: StartRule) -> Self {
        Self { start }
    }

    /// The start rule this driver parses with.
    pub fn start_rule(&self) -> StartRule {
        self.start
    }

    /// Parses `source` into a tree, or reports the single failure.
    ///
    /// The whole input must be consumed: the tree's root ends with the
    /// end-of-input token, which carries any trailing trivia.
    pub fn parse<'src>(&self, source: &'src str) -> Result<Tree<'src>, ParseError> {
        let span = debug_span!("parse", start = ?self.start, len = source.len());
        let _enter = span.enter();

        let mut p = Parser::new(source);
        let body = match self.start {
            StartRule::Script => grammar::script(&mut p),
            StartRule::VueScript => grammar::vue_script(&mut p),
        };
        let stop = p.spacing_end();
        let Some(eof) = p.token(TokenKind::Eof) else {
            let err = error::from_failure(&p, stop);
            debug!(%err, "parse failed");
            return Err(err);
        };

        let kind = match self.start {
            StartRule::Script => Kind::Script,
            StartRule::VueScript => Kind::VueScript,
        };
        let mut parts = body;
        parts.extend(children![eof]);
        let root = p.node(kind, parts);
        debug!(
            memo_entries = p.memo_len(),
            raw_nodes = p.builder().node_count(),
            "grammar matched"
        );

        let tree = p.into_builder().finish(root);
        debug!(
            nodes = tree.nodes().len(),
            tokens = tree.tokens().len(),
            "tree finished"
        );
        Ok(tree)
    }
}

/// Parses `source` with the given start rule.
pub fn parse(source: &str, start: StartRule) -> Result<Tree<'_>, ParseError> {
    ParserDriver::new(start).parse(source)
}

/// Parses a script or module.
pub fn parse_script(source: &str) -> Result<Tree<'_>, ParseError> {
    parse(source, StartRule::Script)
}

/// Parses a Vue single-file component.
pub fn parse_vue(source: &str) -> Result<Tree<'_>, ParseError> {
    parse(source, StartRule::VueScript)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_kinds() {
        let tree = parse_script("a;").unwrap();
        assert_eq!(tree.kind(tree.root()), Kind::Script);
        let tree = parse_vue("<script>a</script>").unwrap();
        assert_eq!(tree.kind(tree.root()), Kind::VueScript);
    }

    #[test]
    fn test_empty_input() {
        let tree = parse_script("").unwrap();
        assert_eq!(tree.to_sexp(tree.root()), "(Script)");
        assert_eq!(tree.tokens().len(), 1);
    }

    #[test]
    fn test_comments_only() {
        let tree = parse_script("// nothing\n/* here */").unwrap();
        assert_eq!(tree.reconstruct(), "// nothing\n/* here */");
    }

    #[test]
    fn test_shebang() {
        let tree = parse_script("#!/usr/bin/env node\nrun();").unwrap();
        let sexp = tree.to_sexp(tree.root());
        assert!(sexp.starts_with("(Script #!/usr/bin/env node (ModuleBody"));
    }

    #[test]
    fn test_trailing_input() {
        let err = parse_script("a; }").unwrap_err();
        assert!(matches!(err, ParseError::TrailingInput { line: 1, column: 3, .. }));
    }

    #[test]
    fn test_lexical_error() {
        let err = parse_script("a = 'open").unwrap_err();
        assert!(matches!(err, ParseError::Lexical { line: 1, column: 4, .. }));
    }

    #[test]
    fn test_grammar_error_position() {
        let err = parse_script("1 +").unwrap_err();
        assert!(matches!(err, ParseError::Grammar { .. }));
        assert_eq!((err.line(), err.column()), (1, 3));
    }

    #[test]
    fn test_driver_is_reusable() {
        let driver = ParserDriver::new(StartRule::Script);
        assert_eq!(driver.start_rule(), StartRule::Script);
        let a = driver.parse("x = 1").unwrap();
        let b = driver.parse("x = 1").unwrap();
        assert_eq!(a.to_sexp(a.root()), b.to_sexp(b.root()));
    }
}
