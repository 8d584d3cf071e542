//! JSX, Flow, decorators and Vue files through the public entry points.

use spacey_syntax::tree::{Visitor, walk};
use spacey_syntax::{Kind, NodeId, ParseError, TokenKind, Tree, parse_script, parse_vue};

#[derive(Default)]
struct KindCounter {
    kinds: Vec<Kind>,
}

impl<'src> Visitor<'src> for KindCounter {
    fn enter_node(&mut self, tree: &Tree<'src>, node: NodeId) {
        self.kinds.push(tree.kind(node));
    }
}

fn kinds(tree: &Tree<'_>) -> Vec<Kind> {
    let mut counter = KindCounter::default();
    walk(tree, &mut counter);
    counter.kinds
}

fn count(tree: &Tree<'_>, kind: Kind) -> usize {
    kinds(tree).into_iter().filter(|k| *k == kind).count()
}

fn sexp(source: &str) -> String {
    let tree = parse_script(source).unwrap_or_else(|e| panic!("{}: {}", source, e));
    tree.to_sexp(tree.root())
}

#[test]
fn test_generic_call_versus_comparison() {
    assert!(sexp("f<T>(x);").contains(
        "(CallExpression (IdentifierReference f) (TypeArguments < (SimpleType T) >) (ArgumentList ( (IdentifierReference x) )))"
    ));
    let tree = parse_script("a < b;").unwrap();
    assert_eq!(count(&tree, Kind::CallExpression), 0);
    assert_eq!(count(&tree, Kind::TypeArguments), 0);
}

#[test]
fn test_jsx_in_expressions() {
    let tree = parse_script("render(<List items={xs}>\n  {xs.map(x => <Item key={x} />)}\n</List>);").unwrap();
    assert_eq!(count(&tree, Kind::JsxStandardElement), 1);
    assert_eq!(count(&tree, Kind::JsxSelfClosingElement), 1);
    assert_eq!(count(&tree, Kind::ArrowFunction), 1);
    assert_eq!(count(&tree, Kind::JsxText), 2);
}

#[test]
fn test_type_cast_versus_parenthesis() {
    assert!(sexp("(x: number);").contains("(TypeCast ( (IdentifierReference x) (TypeAnnotation : (SimpleType number)) ))"));
    assert!(sexp("(x);").contains("(ParenthesisedExpression ( (IdentifierReference x) ))"));
}

#[test]
fn test_let_disambiguation() {
    assert!(sexp("let [a] = b;").contains("(VariableStatement (LetDeclaration let"));
    assert!(sexp("let = 1;").contains("(ExpressionStatement (Assignment (IdentifierReference let)"));
    assert!(sexp("let.x;").contains("(DotMemberExpression (IdentifierReference let)"));
}

#[test]
fn test_flow_annotated_function() {
    let out = sexp("function f<T>(x: ?T, y?: string = 'a', ...rest: Array<T>): Promise<T> {}");
    assert!(out.contains("(TypeAnnotation : (OptionalType ? (SimpleType T)))"));
    assert!(out.contains("(InitializedBindingElement (TypedBindingElement (BindingIdentifier y) ?"));
    assert!(out.contains("(RestElement ... (BindingIdentifier rest) (TypeAnnotation"));
    assert!(out.contains("(GenericType (SimpleType Promise)"));
}

#[test]
fn test_flow_declarations() {
    let tree = parse_script(
        "type Props = { +name: string, age?: number };\n\
         opaque type Token = string;\n\
         interface Shape { area(): number }\n\
         declare function f(x: number): void;\n\
         export type { Props };\n",
    )
    .unwrap();
    assert_eq!(count(&tree, Kind::TypeAlias), 1);
    assert_eq!(count(&tree, Kind::OpaqueTypeAlias), 1);
    assert_eq!(count(&tree, Kind::InterfaceDeclaration), 1);
    assert_eq!(count(&tree, Kind::DeclareStatement), 1);
}

#[test]
fn test_arrow_return_type() {
    let tree = parse_script("const f = (a: number): string => String(a);").unwrap();
    assert_eq!(count(&tree, Kind::ArrowFunction), 1);
    assert_eq!(count(&tree, Kind::TypeAnnotation), 2);
}

#[test]
fn test_decorated_class() {
    let tree = parse_script("@a.b(1) @c class X { @d m() {} }").unwrap();
    assert_eq!(count(&tree, Kind::Decorator), 3);
    assert_eq!(count(&tree, Kind::ClassDeclaration), 1);
}

#[test]
fn test_vue_file() {
    let tree = parse_vue(
        "<template>\n  <div :class=\"{ a: b }\">{{ msg }}</div>\n</template>\n\
         <script>\nimport x from './x'\nexport default { data() { return { msg: x } } }\n</script>\n\
         <i18n>{\"en\": {}}</i18n>\n",
    )
    .unwrap();
    assert_eq!(tree.kind(tree.root()), Kind::VueScript);
    assert_eq!(count(&tree, Kind::VueScriptElement), 1);
    assert_eq!(count(&tree, Kind::ImportDeclaration), 1);
}

#[test]
fn test_vue_script_with_shebang() {
    let source = "<template><p/></template>\n<script>#!/usr/bin/env node\nrun()\n</script>\n";
    let tree = parse_vue(source).unwrap();
    let shebang = tree
        .tokens()
        .iter()
        .find(|t| t.kind == TokenKind::Shebang)
        .unwrap();
    assert_eq!(shebang.text, "#!/usr/bin/env node");
    assert_eq!((shebang.position.line, shebang.position.column), (2, 8));
    assert_eq!(count(&tree, Kind::CallExpression), 1);
    assert_eq!(tree.reconstruct(), source);
}

#[test]
fn test_vue_error_position_is_file_relative() {
    let err = parse_vue("<template></template>\n<script>\nlet = ;\n</script>\n").unwrap_err();
    assert!(matches!(err, ParseError::Grammar { .. }));
    assert_eq!(err.line(), 3);
}
