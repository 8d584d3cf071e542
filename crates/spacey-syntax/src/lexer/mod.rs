// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Lexical layer of the scannerless parser.
//!
//! There is no token stream. The grammar asks the [`Scanner`] whether a given
//! terminal matches at a byte cursor, so context decides what a character
//! means.
//!
//! ## Structure
//!
//! - `scanner.rs` - `Scanner` cursor matchers, spacing rules and `LineIndex`
//! - `token.rs` - `Token`, `TokenKind` and `Trivia` definitions
//! - `literals` - numeric, string, regex and template matchers
//! - `markup` - JSX text/names and Vue sections
//! - `operators` - the punctuator table with its `nextNot` guards
//!
//! ## Usage
//!
//! ```rust
//! use spacey_syntax::lexer::{Scanner, TokenKind};
//!
//! let scanner = Scanner::new("  return x;");
//! let start = scanner.skip_spacing(0);
//! assert_eq!(scanner.keyword(start, TokenKind::Return), Some(8));
//! ```

mod scanner;
mod token;

pub mod literals;
pub mod markup;
pub mod operators;

pub use operators::Punctuator;
pub use scanner::{
    LineIndex, Scanner, is_id_continue, is_id_start, is_line_terminator, is_whitespace,
};
pub use token::{Position, Span, Token, TokenKind, Trivia, TriviaKind};
