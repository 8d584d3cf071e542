// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! # spacey-syntax
//!
//! A lossless parser for JavaScript and its dialects.
//!
//! ## Overview
//!
//! This crate turns source text into a concrete syntax tree:
//! - ECMAScript 5 and 2015+ scripts and modules
//! - JSX elements
//! - Flow type annotations and declarations
//! - Class and member decorators
//! - The `<script>` sections of Vue single-file components
//!
//! Every byte of the input is kept. Tokens carry their line/column and the
//! whitespace and comments before them, so the source can be rebuilt from
//! the tree exactly.
//!
//! The parser is a scannerless PEG: grammar rules are functions over a
//! [`engine::Parser`] and the lexer is consulted one terminal at a time.
//!
//! ## Quick Start
//!
//! ```rust
//! use spacey_syntax::{Kind, parse_script};
//!
//! let tree = parse_script("let answer = 6 * 7;").unwrap();
//! assert_eq!(tree.kind(tree.root()), Kind::Script);
//! assert_eq!(tree.reconstruct(), "let answer = 6 * 7;");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod driver;
pub mod engine;
pub mod error;
pub mod factory;
pub mod lexer;
pub mod tree;

mod grammar;

#[cfg(any(feature = "parallel", feature = "async"))]
pub mod batch;

pub use driver::{ParserDriver, StartRule, parse, parse_script, parse_vue};
pub use error::ParseError;
pub use lexer::{Position, Span, Token, TokenKind};
pub use tree::{Kind, NodeId, Tree};
