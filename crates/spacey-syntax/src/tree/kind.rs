// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Syntactic node kinds.

use std::fmt;

/// The kind of a tree node.
///
/// Token leaves are not listed here, they carry a
/// [`TokenKind`](crate::lexer::TokenKind) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    // Roots
    /// A plain script or module
    Script,
    /// Import, export and statement items of a script
    ModuleBody,
    /// A Vue single-file component
    VueScript,
    /// `<script> ... </script>` inside a Vue file
    VueScriptElement,

    // Statements
    /// `{ ... }`
    Block,
    /// `var|let|const ... ;`
    VariableStatement,
    /// `var a, b`
    VarDeclaration,
    /// `let a, b`
    LetDeclaration,
    /// `const a = 1`
    ConstDeclaration,
    /// `;`
    EmptyStatement,
    /// `label: statement`
    LabelledStatement,
    /// An expression followed by end of statement
    ExpressionStatement,
    /// `if (...) ... else ...`
    IfStatement,
    /// `else ...`
    ElseClause,
    /// `do ... while (...)`
    DoWhileStatement,
    /// `while (...) ...`
    WhileStatement,
    /// `for (a in b) ...`
    ForInStatement,
    /// `for (a of b) ...`
    ForOfStatement,
    /// `for (;;) ...`
    ForStatement,
    /// `continue label;`
    ContinueStatement,
    /// `break label;`
    BreakStatement,
    /// `return expr;`
    ReturnStatement,
    /// `with (...) ...`
    WithStatement,
    /// `switch (...) { ... }`
    SwitchStatement,
    /// `case expr: ...`
    CaseClause,
    /// `default: ...`
    DefaultClause,
    /// `throw expr;`
    ThrowStatement,
    /// `try ... catch ... finally ...`
    TryStatement,
    /// `catch (e) { ... }`
    CatchBlock,
    /// `finally { ... }`
    FinallyBlock,
    /// `debugger;`
    DebuggerStatement,
    /// `function f() {}`
    FunctionDeclaration,
    /// `function* g() {}`
    GeneratorDeclaration,
    /// `class C {}`
    ClassDeclaration,

    // Names
    /// A name read as an expression
    IdentifierReference,
    /// A name that introduces a binding
    BindingIdentifier,
    /// A label of a labelled statement, `break` or `continue`
    LabelIdentifier,
    /// A property name, keywords allowed
    IdentifierName,

    // Literals
    /// `42`, `0xFF`, `1n`
    NumericLiteral,
    /// `'text'`
    StringLiteral,
    /// `true` or `false`
    BooleanLiteral,
    /// `null`
    NullLiteral,
    /// `/re/g`
    RegularExpressionLiteral,
    /// `[a, , b]`
    ArrayLiteral,
    /// `{ a: 1 }`
    ObjectLiteral,
    /// `` `a${b}c` ``
    TemplateLiteral,
    /// Raw characters of a template literal
    TemplateCharacters,
    /// `${ expr }` inside a template literal
    TemplateExpression,

    // Primary and member expressions
    /// `this`
    ThisExpression,
    /// `super`
    SuperExpression,
    /// `( expr )`
    ParenthesisedExpression,
    /// `...expr` in arrays and arguments
    SpreadElement,
    /// `key: value`
    PairProperty,
    /// `[expr]` as a property name
    ComputedPropertyName,
    /// `a.b`
    DotMemberExpression,
    /// `a[b]`
    BracketMemberExpression,
    /// `a(b)`
    CallExpression,
    /// `(a, b)` call arguments
    ArgumentList,
    /// `new A(b)`
    NewExpression,
    /// `new.target`
    NewTarget,
    /// ``tag`text` ``
    TaggedTemplate,

    // Unary
    /// `a++`
    PostfixIncrement,
    /// `a--`
    PostfixDecrement,
    /// `++a`
    PrefixIncrement,
    /// `--a`
    PrefixDecrement,
    /// `+a`
    UnaryPlus,
    /// `-a`
    UnaryMinus,
    /// `~a`
    BitwiseComplement,
    /// `!a`
    LogicalComplement,
    /// `delete a`
    Delete,
    /// `void a`
    Void,
    /// `typeof a`
    Typeof,
    /// `await a`
    Await,

    // Binary
    /// `a ** b`
    Exponent,
    /// `a * b`
    Multiply,
    /// `a / b`
    Divide,
    /// `a % b`
    Remainder,
    /// `a + b`
    Plus,
    /// `a - b`
    Minus,
    /// `a << b`
    LeftShift,
    /// `a >> b`
    RightShift,
    /// `a >>> b`
    UnsignedRightShift,
    /// `a < b`
    LessThan,
    /// `a > b`
    GreaterThan,
    /// `a <= b`
    LessThanOrEqualTo,
    /// `a >= b`
    GreaterThanOrEqualTo,
    /// `a instanceof b`
    Instanceof,
    /// `a in b`
    RelationalIn,
    /// `a == b`
    EqualTo,
    /// `a != b`
    NotEqualTo,
    /// `a === b`
    StrictEqualTo,
    /// `a !== b`
    StrictNotEqualTo,
    /// `a & b`
    BitwiseAnd,
    /// `a ^ b`
    BitwiseXor,
    /// `a | b`
    BitwiseOr,
    /// `a && b`
    ConditionalAnd,
    /// `a || b`
    ConditionalOr,
    /// `a, b`
    CommaExpression,
    /// `a ? b : c`
    ConditionalExpression,

    // Assignment
    /// `a = b`
    Assignment,
    /// `a *= b`
    MultiplyAssignment,
    /// `a **= b`
    ExponentAssignment,
    /// `a /= b`
    DivideAssignment,
    /// `a %= b`
    RemainderAssignment,
    /// `a += b`
    PlusAssignment,
    /// `a -= b`
    MinusAssignment,
    /// `a <<= b`
    LeftShiftAssignment,
    /// `a >>= b`
    RightShiftAssignment,
    /// `a >>>= b`
    UnsignedRightShiftAssignment,
    /// `a &= b`
    AndAssignment,
    /// `a ^= b`
    XorAssignment,
    /// `a |= b`
    OrAssignment,
    /// `[a, b] = ...` target
    ArrayAssignmentPattern,
    /// `{a, b: c} = ...` target
    ObjectAssignmentPattern,
    /// `key: target` in an object assignment pattern
    ObjectAssignmentPatternPairElement,
    /// `target = default` in an assignment pattern
    AssignmentPatternDefaultElement,
    /// `...target` in an assignment pattern
    AssignmentPatternRestElement,

    // Functions
    /// `yield expr`
    YieldExpression,
    /// `(a) => b`
    ArrowFunction,
    /// `function () {}`
    FunctionExpression,
    /// `function* () {}`
    GeneratorExpression,
    /// `(a, b = 1, ...c)`
    FormalParameterList,
    /// `...rest` binding
    RestElement,
    /// `a = 1` binding with initializer
    InitializedBindingElement,
    /// `{ a, b: c }` binding
    ObjectBindingPattern,
    /// `[a, , b]` binding
    ArrayBindingPattern,
    /// `key: binding` in an object binding pattern
    BindingProperty,

    // Classes
    /// `class {}` as an expression
    ClassExpression,
    /// `extends Base`
    ExtendsClause,
    /// `m() {}`
    Method,
    /// `*m() {}`
    GeneratorMethod,
    /// `get m() {}`
    GetMethod,
    /// `set m(v) {}`
    SetMethod,
    /// `x = 1;` class field
    FieldDeclaration,
    /// `@dec(args)`
    Decorator,

    // Modules
    /// `import a from 'm';`
    ImportDeclaration,
    /// `import 'm';`
    ImportModuleDeclaration,
    /// The bindings of an import declaration
    ImportClause,
    /// `{ a, b as c }` in an import
    NamedImports,
    /// `a as b` in an import list
    ImportSpecifier,
    /// `* as ns`
    NamespaceImport,
    /// `from 'm'`
    FromClause,
    /// `export default expr;`
    DefaultExportDeclaration,
    /// `export { a };` or `export var a;`
    NamedExportDeclaration,
    /// `export * from 'm';`
    NamespaceExportDeclaration,
    /// `{ a, b as c }` in an export
    ExportClause,
    /// `a as b` in an export list
    ExportSpecifier,
    /// `export v from 'm';`
    ExportDefaultBinding,
    /// `export v, * as ns from 'm';`
    ExportDefaultBindingWithNamespaceExport,
    /// `export v, { a } from 'm';`
    ExportDefaultBindingWithExportList,

    // JSX
    /// `<a />`
    JsxSelfClosingElement,
    /// `<a> ... </a>`
    JsxStandardElement,
    /// `<> ... </>`
    JsxShortFragmentElement,
    /// `<a b>`
    JsxOpeningElement,
    /// `</a>`
    JsxClosingElement,
    /// `<>`
    JsxEmptyOpeningElement,
    /// `</>`
    JsxEmptyClosingElement,
    /// Text between tags
    JsxText,
    /// Lower-case tag name
    JsxHtmlTag,
    /// Dashed attribute or tag name
    JsxIdentifier,
    /// `{ expr }`
    JsxJavascriptExpression,
    /// `name="value"`
    JsxAttribute,
    /// `{...props}`
    JsxSpreadAttribute,

    // Flow
    /// `: Type`
    TypeAnnotation,
    /// `number`, `Foo`, `*`
    SimpleType,
    /// `?T`
    OptionalType,
    /// `A | B`
    UnionType,
    /// `A & B`
    IntersectionType,
    /// `(a: A) => R`
    FunctionType,
    /// `(a: A, ...b: B)` of a function type
    FunctionTypeParameterClause,
    /// `a?: A` of a function type
    FunctionTypeParameter,
    /// `T[]`
    ArrayType,
    /// `A<B>`
    GenericType,
    /// `<A, B>` as arguments
    TypeArguments,
    /// `<T: X = Y>`
    GenericParameterClause,
    /// `+T: X = Y`
    GenericParameter,
    /// `{ a: A }` or `{| a: A |}`
    ObjectType,
    /// `a?: A` inside an object type
    ObjectTypeProperty,
    /// `[K]: V` inside an object type
    ObjectTypeIndexer,
    /// `m(a: A): R` or `(a: A): R` inside an object type
    ObjectTypeMethod,
    /// `...T` inside an object type
    ObjectTypeSpread,
    /// `[A, B]`
    TupleType,
    /// `'a'`, `1`, `true` as types
    LiteralType,
    /// `typeof x`
    TypeofType,
    /// `(T)`
    ParenthesisedType,
    /// `A.B`
    NamespacedType,
    /// `type A = B;`
    TypeAlias,
    /// `opaque type A: S = B;`
    OpaqueTypeAlias,
    /// `interface I { ... }`
    InterfaceDeclaration,
    /// `declare ...`
    DeclareStatement,
    /// `class C { ... }` after `declare`
    DeclareClass,
    /// `export ...` after `declare`
    DeclareExport,
    /// `module M { ... }` after `declare`
    DeclareModule,
    /// `module.exports: T` after `declare`
    ModuleExports,
    /// `function f(a: A): R` without a body
    FunctionSignature,
    /// `(expr: T)`
    TypeCast,
    /// `implements A, B`
    ImplementsClause,
    /// `a?: T` binding with annotation
    TypedBindingElement,
}

impl Kind {
    /// Returns true for the binary operator kinds.
    pub fn is_binary(self) -> bool {
        use Kind::*;
        matches!(
            self,
            Exponent
                | Multiply
                | Divide
                | Remainder
                | Plus
                | Minus
                | LeftShift
                | RightShift
                | UnsignedRightShift
                | LessThan
                | GreaterThan
                | LessThanOrEqualTo
                | GreaterThanOrEqualTo
                | Instanceof
                | RelationalIn
                | EqualTo
                | NotEqualTo
                | StrictEqualTo
                | StrictNotEqualTo
                | BitwiseAnd
                | BitwiseXor
                | BitwiseOr
                | ConditionalAnd
                | ConditionalOr
                | CommaExpression
        )
    }

    /// Returns true for the assignment operator kinds.
    pub fn is_assignment(self) -> bool {
        use Kind::*;
        matches!(
            self,
            Assignment
                | MultiplyAssignment
                | ExponentAssignment
                | DivideAssignment
                | RemainderAssignment
                | PlusAssignment
                | MinusAssignment
                | LeftShiftAssignment
                | RightShiftAssignment
                | UnsignedRightShiftAssignment
                | AndAssignment
                | XorAssignment
                | OrAssignment
        )
    }

    /// Returns true for statement kinds, declarations included.
    pub fn is_statement(self) -> bool {
        use Kind::*;
        matches!(
            self,
            Block
                | VariableStatement
                | EmptyStatement
                | LabelledStatement
                | ExpressionStatement
                | IfStatement
                | DoWhileStatement
                | WhileStatement
                | ForInStatement
                | ForOfStatement
                | ForStatement
                | ContinueStatement
                | BreakStatement
                | ReturnStatement
                | WithStatement
                | SwitchStatement
                | ThrowStatement
                | TryStatement
                | DebuggerStatement
                | FunctionDeclaration
                | GeneratorDeclaration
                | ClassDeclaration
                | TypeAlias
                | OpaqueTypeAlias
                | InterfaceDeclaration
                | DeclareStatement
        )
    }

    /// Returns true for Flow type kinds.
    pub fn is_flow_type(self) -> bool {
        use Kind::*;
        matches!(
            self,
            SimpleType
                | OptionalType
                | UnionType
                | IntersectionType
                | FunctionType
                | ArrayType
                | GenericType
                | ObjectType
                | TupleType
                | LiteralType
                | TypeofType
                | ParenthesisedType
                | NamespacedType
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
