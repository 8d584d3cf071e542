// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Token and trivia definitions.

use std::fmt;

/// A span in the source code, as byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if this span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the smallest span covering both `self` and `other`.
    pub fn cover(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }
}

/// A line/column position. Lines are 1-based, columns 0-based and counted
/// in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// 1-based line
    pub line: usize,
    /// 0-based column
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The two flavours of trivia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriviaKind {
    /// A run of whitespace and line terminators
    Whitespace,
    /// A `//`, `<!--` or `/* */` comment
    Comment,
}

/// Text skipped before a token. Owned by the token that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trivia<'src> {
    /// Whitespace or comment
    pub kind: TriviaKind,
    /// The exact source text
    pub text: &'src str,
    /// Byte offset of the first character
    pub offset: usize,
    /// Position of the first character
    pub position: Position,
}

impl Trivia<'_> {
    /// Returns true if this trivia is a comment.
    pub fn is_comment(&self) -> bool {
        self.kind == TriviaKind::Comment
    }
}

/// A token of the final tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'src> {
    /// The kind of token
    pub kind: TokenKind,
    /// The exact source text (empty for end of file)
    pub text: &'src str,
    /// Byte offset of the first character
    pub offset: usize,
    /// Position of the first character
    pub position: Position,
    /// Comments and whitespace preceding this token
    pub trivia: Vec<Trivia<'src>>,
}

impl Token<'_> {
    /// Returns the byte span of the token text, trivia excluded.
    pub fn span(&self) -> Span {
        Span::new(self.offset, self.offset + self.text.len())
    }

    /// Returns true for the synthetic end-of-file token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// 1-based line of the token.
    pub fn line(&self) -> usize {
        self.position.line
    }

    /// 0-based column of the token.
    pub fn column(&self) -> usize {
        self.position.column
    }

    /// Iterates over the comments attached to this token.
    pub fn comments(&self) -> impl Iterator<Item = &Trivia<'_>> {
        self.trivia.iter().filter(|t| t.is_comment())
    }
}

/// The different kinds of tokens.
///
/// Keywords and punctuators carry no payload, their text is fixed. Contextual
/// words such as `async`, `of` or `type` are plain identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Literals and names
    /// Identifier or contextual keyword
    Identifier,
    /// Numeric literal
    NumericLiteral,
    /// String literal
    StringLiteral,
    /// Regular expression literal
    RegularExpression,
    /// Run of template literal characters
    TemplateCharacters,
    /// Text between JSX tags
    JsxText,
    /// JSX attribute or tag name (`[-\w]+`)
    JsxIdentifier,
    /// `#!` line at the start of a script body
    Shebang,
    /// `<script ...>` start tag of a Vue file
    VueScriptStart,
    /// `</script>` end tag of a Vue file
    VueScriptEnd,
    /// Opaque top-level section of a Vue file
    VueSection,

    // Reserved words
    Await,
    Break,
    Case,
    Catch,
    Class,
    Const,
    Continue,
    Debugger,
    Default,
    Delete,
    Do,
    Else,
    Enum,
    Export,
    Extends,
    False,
    Finally,
    For,
    Function,
    If,
    Import,
    In,
    Instanceof,
    New,
    Null,
    Return,
    Super,
    Switch,
    This,
    Throw,
    True,
    Try,
    Typeof,
    Var,
    Void,
    While,
    With,
    Yield,

    // Punctuation
    /// {
    LeftBrace,
    /// }
    RightBrace,
    /// (
    LeftParen,
    /// )
    RightParen,
    /// [
    LeftBracket,
    /// ]
    RightBracket,
    /// .
    Dot,
    /// ...
    Ellipsis,
    /// ;
    Semicolon,
    /// ,
    Comma,
    /// <
    LessThan,
    /// >
    GreaterThan,
    /// <=
    LessThanEqual,
    /// >=
    GreaterThanEqual,
    /// ==
    EqualEqual,
    /// !=
    NotEqual,
    /// ===
    StrictEqual,
    /// !==
    StrictNotEqual,
    /// +
    Plus,
    /// -
    Minus,
    /// *
    Star,
    /// /
    Slash,
    /// %
    Percent,
    /// **
    StarStar,
    /// ++
    PlusPlus,
    /// --
    MinusMinus,
    /// <<
    LeftShift,
    /// >>
    RightShift,
    /// >>>
    UnsignedRightShift,
    /// &
    Ampersand,
    /// |
    Pipe,
    /// ^
    Caret,
    /// !
    Bang,
    /// ~
    Tilde,
    /// &&
    AmpersandAmpersand,
    /// ||
    PipePipe,
    /// ?
    Question,
    /// :
    Colon,
    /// =
    Equal,
    /// +=
    PlusEqual,
    /// -=
    MinusEqual,
    /// *=
    StarEqual,
    /// /=
    SlashEqual,
    /// %=
    PercentEqual,
    /// **=
    StarStarEqual,
    /// <<=
    LeftShiftEqual,
    /// >>=
    RightShiftEqual,
    /// >>>=
    UnsignedRightShiftEqual,
    /// &=
    AmpersandEqual,
    /// |=
    PipeEqual,
    /// ^=
    CaretEqual,
    /// =>
    Arrow,
    /// @
    At,
    /// `
    Backtick,
    /// ${
    DollarLeftBrace,

    // Special
    /// End of file
    Eof,
}

impl TokenKind {
    /// Looks up a reserved word.
    pub fn from_keyword(word: &str) -> Option<TokenKind> {
        let kind = match word {
            "await" => TokenKind::Await,
            "break" => TokenKind::Break,
            "case" => TokenKind::Case,
            "catch" => TokenKind::Catch,
            "class" => TokenKind::Class,
            "const" => TokenKind::Const,
            "continue" => TokenKind::Continue,
            "debugger" => TokenKind::Debugger,
            "default" => TokenKind::Default,
            "delete" => TokenKind::Delete,
            "do" => TokenKind::Do,
            "else" => TokenKind::Else,
            "enum" => TokenKind::Enum,
            "export" => TokenKind::Export,
            "extends" => TokenKind::Extends,
            "false" => TokenKind::False,
            "finally" => TokenKind::Finally,
            "for" => TokenKind::For,
            "function" => TokenKind::Function,
            "if" => TokenKind::If,
            "import" => TokenKind::Import,
            "in" => TokenKind::In,
            "instanceof" => TokenKind::Instanceof,
            "new" => TokenKind::New,
            "null" => TokenKind::Null,
            "return" => TokenKind::Return,
            "super" => TokenKind::Super,
            "switch" => TokenKind::Switch,
            "this" => TokenKind::This,
            "throw" => TokenKind::Throw,
            "true" => TokenKind::True,
            "try" => TokenKind::Try,
            "typeof" => TokenKind::Typeof,
            "var" => TokenKind::Var,
            "void" => TokenKind::Void,
            "while" => TokenKind::While,
            "with" => TokenKind::With,
            "yield" => TokenKind::Yield,
            _ => return None,
        };
        Some(kind)
    }

    /// The fixed text of a reserved word, if this is one.
    pub fn keyword_text(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Await => "await",
            TokenKind::Break => "break",
            TokenKind::Case => "case",
            TokenKind::Catch => "catch",
            TokenKind::Class => "class",
            TokenKind::Const => "const",
            TokenKind::Continue => "continue",
            TokenKind::Debugger => "debugger",
            TokenKind::Default => "default",
            TokenKind::Delete => "delete",
            TokenKind::Do => "do",
            TokenKind::Else => "else",
            TokenKind::Enum => "enum",
            TokenKind::Export => "export",
            TokenKind::Extends => "extends",
            TokenKind::False => "false",
            TokenKind::Finally => "finally",
            TokenKind::For => "for",
            TokenKind::Function => "function",
            TokenKind::If => "if",
            TokenKind::Import => "import",
            TokenKind::In => "in",
            TokenKind::Instanceof => "instanceof",
            TokenKind::New => "new",
            TokenKind::Null => "null",
            TokenKind::Return => "return",
            TokenKind::Super => "super",
            TokenKind::Switch => "switch",
            TokenKind::This => "this",
            TokenKind::Throw => "throw",
            TokenKind::True => "true",
            TokenKind::Try => "try",
            TokenKind::Typeof => "typeof",
            TokenKind::Var => "var",
            TokenKind::Void => "void",
            TokenKind::While => "while",
            TokenKind::With => "with",
            TokenKind::Yield => "yield",
            _ => return None,
        };
        Some(text)
    }

    /// Returns true if this token is a reserved word.
    pub fn is_keyword(self) -> bool {
        self.keyword_text().is_some()
    }

    /// Returns true if this token is a punctuator.
    pub fn is_punctuator(self) -> bool {
        super::operators::punctuator(self).is_some()
    }

    /// Returns true if this token is a literal.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::NumericLiteral
                | TokenKind::StringLiteral
                | TokenKind::RegularExpression
                | TokenKind::TemplateCharacters
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Null
        )
    }

    /// A short human-readable description, used in error messages.
    pub fn describe(self) -> String {
        if let Some(text) = self.keyword_text() {
            return format!("`{}`", text);
        }
        if let Some(punct) = super::operators::punctuator(self) {
            return format!("`{}`", punct.text);
        }
        let name = match self {
            TokenKind::Identifier => "identifier",
            TokenKind::NumericLiteral => "numeric literal",
            TokenKind::StringLiteral => "string literal",
            TokenKind::RegularExpression => "regular expression",
            TokenKind::TemplateCharacters => "template characters",
            TokenKind::JsxText => "JSX text",
            TokenKind::JsxIdentifier => "JSX identifier",
            TokenKind::Shebang => "shebang",
            TokenKind::VueScriptStart => "`<script>`",
            TokenKind::VueScriptEnd => "`</script>`",
            TokenKind::VueSection => "Vue section",
            _ => "end of file",
        };
        name.to_string()
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup_round_trips() {
        for word in ["if", "yield", "instanceof", "null"] {
            let kind = TokenKind::from_keyword(word).unwrap();
            assert_eq!(kind.keyword_text(), Some(word));
            assert!(kind.is_keyword());
        }
    }

    #[test]
    fn test_contextual_words_are_not_reserved() {
        for word in ["let", "async", "of", "static", "type", "get"] {
            assert!(TokenKind::from_keyword(word).is_none(), "{word}");
        }
    }

    #[test]
    fn test_describe() {
        assert_eq!(TokenKind::Semicolon.describe(), "`;`");
        assert_eq!(TokenKind::Return.describe(), "`return`");
        assert_eq!(TokenKind::Identifier.describe(), "identifier");
    }

    #[test]
    fn test_span_cover() {
        let span = Span::new(4, 6).cover(Span::new(1, 5));
        assert_eq!(span, Span::new(1, 6));
        assert_eq!(span.len(), 5);
    }
}
