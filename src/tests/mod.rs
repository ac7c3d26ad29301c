#[cfg(test)]
mod rendering_tests {
    use crate::renderer::*;
    use crate::source::*;

    fn render_with<C: Clone>(file: &SourceFile, types: &dyn TypeInference, visitor: &Visitor<C>) -> (String, Vec<Unsupported>) {
        let output = SnippetRenderer.render(file, types, visitor);
        (output.tree.render(), output.unsupported)
    }

    fn render(file: &SourceFile) -> (String, Vec<Unsupported>) {
        render_with(file, &NoTypeInfo, &Visitor::default_visitor())
    }

    // `f(<arg>)` where the argument node is built by the closure
    fn call_with_argument(
        text: &str,
        build_argument: impl FnOnce(&mut TreeBuilder) -> NodeId,
    ) -> (SourceFile, NodeId, NodeId) {
        let mut b = SourceFile::builder(text);
        let callee = b.leaf(SyntaxKind::Identifier, (0, 1), "f");
        let argument = build_argument(&mut b);
        let call = b.push(SyntaxKind::CallExpression, (0, text.len()), None, vec![callee, argument]);
        (b.finish(call).unwrap(), call, argument)
    }

    fn object_literal(b: &mut TreeBuilder) -> NodeId {
        b.push(SyntaxKind::ObjectLiteralExpression, (2, 4), None, vec![])
    }

    fn bucket_props() -> TypeInfo {
        TypeInfo::Interface {
            name: "BucketProps".to_string(),
            properties: vec![],
            methods: vec![],
            index_signature: false,
        }
    }

    #[test]
    fn test_string_literal_is_quoted_and_escaped() {
        let mut b = SourceFile::builder(r#"'he said "hi"'"#);
        let id = b.leaf(SyntaxKind::StringLiteral, (0, 14), r#"he said "hi""#);
        let file = b.finish(id).unwrap();

        let (text, unsupported) = render(&file);
        assert_eq!(text, r#""he said \"hi\"""#);
        assert!(unsupported.is_empty());
    }

    #[test]
    fn test_strict_equality_becomes_generic_equality() {
        let mut b = SourceFile::builder("a === b");
        let a = b.leaf(SyntaxKind::Identifier, (0, 1), "a");
        let op = b.push(SyntaxKind::Token, (2, 5), None, vec![]);
        let rhs = b.leaf(SyntaxKind::Identifier, (6, 7), "b");
        let bin = b.push(SyntaxKind::BinaryExpression, (0, 7), None, vec![a, op, rhs]);
        let file = b.finish(bin).unwrap();

        assert_eq!(render(&file).0, "a == b");
    }

    #[test]
    fn test_operator_translation_override() {
        let mut b = SourceFile::builder("-a / b");
        let minus = b.push(SyntaxKind::Token, (0, 1), None, vec![]);
        let a = b.leaf(SyntaxKind::Identifier, (1, 2), "a");
        let neg = b.push(SyntaxKind::PrefixUnaryExpression, (0, 2), None, vec![minus, a]);
        let op = b.push(SyntaxKind::Token, (3, 4), None, vec![]);
        let rhs = b.leaf(SyntaxKind::Identifier, (5, 6), "b");
        let bin = b.push(SyntaxKind::BinaryExpression, (0, 6), None, vec![neg, op, rhs]);
        let file = b.finish(bin).unwrap();

        assert_eq!(render(&file).0, "-a / b");

        let integer_division = Visitor::default_visitor().with_hooks(|hooks| {
            hooks.translate_binary_operator = |op| match op {
                "/" => "//".to_string(),
                other => renders::translate_binary_operator(other),
            };
            hooks.translate_unary_operator = |op| match op {
                "!" => "not ".to_string(),
                other => other.to_string(),
            };
        });
        assert_eq!(render_with(&file, &NoTypeInfo, &integer_division).0, "-a // b");
    }

    #[test]
    fn test_console_log_routes_to_print_statement() {
        let text = r#"console.log("hi")"#;
        let mut b = SourceFile::builder(text);
        let console = b.leaf(SyntaxKind::Identifier, (0, 7), "console");
        let log = b.leaf(SyntaxKind::Identifier, (8, 11), "log");
        let callee = b.push(SyntaxKind::PropertyAccessExpression, (0, 11), None, vec![console, log]);
        let hi = b.leaf(SyntaxKind::StringLiteral, (12, 16), "hi");
        let call = b.push(SyntaxKind::CallExpression, (0, 17), None, vec![callee, hi]);
        let file = b.finish(call).unwrap();

        assert_eq!(render(&file).0, r#"<PRINT>("hi")"#);

        let python = Visitor::default_visitor().with_hooks(|hooks| {
            hooks.print_statement = |args, ctx| {
                OTree::from_head(vec!["print(".into(), (ctx.hooks().argument_list)(args, ctx).into(), ")".into()])
            };
        });
        assert_eq!(render_with(&file, &NoTypeInfo, &python).0, r#"print("hi")"#);
    }

    #[test]
    fn test_regular_call_joins_arguments() {
        let text = "obj.run(1, x)";
        let mut b = SourceFile::builder(text);
        let obj = b.leaf(SyntaxKind::Identifier, (0, 3), "obj");
        let run = b.leaf(SyntaxKind::Identifier, (4, 7), "run");
        let callee = b.push(SyntaxKind::PropertyAccessExpression, (0, 7), None, vec![obj, run]);
        let one = b.push(SyntaxKind::NumericLiteral, (8, 9), None, vec![]);
        let x = b.leaf(SyntaxKind::Identifier, (11, 12), "x");
        let call = b.push(SyntaxKind::CallExpression, (0, 13), None, vec![callee, one, x]);
        let file = b.finish(call).unwrap();

        assert_eq!(render(&file).0, "obj.run(1, x)");
    }

    #[test]
    fn test_super_call_has_its_own_override_point() {
        let mut b = SourceFile::builder("super(a)");
        let callee = b.push(SyntaxKind::SuperKeyword, (0, 5), None, vec![]);
        let a = b.leaf(SyntaxKind::Identifier, (6, 7), "a");
        let call = b.push(SyntaxKind::CallExpression, (0, 8), None, vec![callee, a]);
        let file = b.finish(call).unwrap();

        assert_eq!(render(&file).0, "super(a)");

        let java = Visitor::default_visitor().with_hooks(|hooks| {
            hooks.super_call_expression = |node, ctx| {
                let args: Vec<Node<'_>> = node.children().into_iter().skip(1).collect();
                OTree::from_head(vec!["super.init(".into(), (ctx.hooks().argument_list)(&args, ctx).into(), ")".into()])
            };
        });
        assert_eq!(render_with(&file, &NoTypeInfo, &java).0, "super.init(a)");
    }

    #[test]
    fn test_unhandled_kind_reports_exactly_once() {
        let text = "class Foo { x = 1; }";
        let mut b = SourceFile::builder(text);
        let name = b.leaf(SyntaxKind::Identifier, (6, 9), "Foo");
        let x = b.leaf(SyntaxKind::Identifier, (12, 13), "x");
        let one = b.push(SyntaxKind::NumericLiteral, (16, 17), None, vec![]);
        let prop = b.push(SyntaxKind::PropertyDeclaration, (12, 18), None, vec![x, one]);
        let class = b.push(SyntaxKind::ClassDeclaration, (0, 20), None, vec![name, prop]);
        let root = b.push(SyntaxKind::SourceFile, (0, 20), None, vec![class]);
        let file = b.finish(root).unwrap();

        let (text, unsupported) = render(&file);
        assert_eq!(text, "<ClassDeclaration class Foo { x = 1; }>");
        assert_eq!(unsupported.len(), 1);
        assert_eq!(unsupported[0].node, class);
        assert_eq!(unsupported[0].kind, SyntaxKind::ClassDeclaration);
        assert_eq!(unsupported[0].language, "default");
        assert_eq!(unsupported[0].position, Position { line: 1, column: 1 });
    }

    #[test]
    fn test_every_unhandled_kind_gets_a_placeholder() {
        let kinds = [
            SyntaxKind::InterfaceDeclaration,
            SyntaxKind::PropertySignature,
            SyntaxKind::ForOfStatement,
            SyntaxKind::TemplateExpression,
            SyntaxKind::AsExpression,
            SyntaxKind::SpreadElement,
            SyntaxKind::SpreadAssignment,
            SyntaxKind::VariableDeclaration,
            SyntaxKind::ImportDeclaration,
            SyntaxKind::ArrowFunction,
        ];
        for kind in kinds {
            let mut b = SourceFile::builder("xyz");
            let id = b.push(kind, (0, 3), None, vec![]);
            let file = b.finish(id).unwrap();
            let (text, unsupported) = render(&file);

            assert_eq!(text, format!("<{} xyz>", kind));
            assert_eq!(unsupported.len(), 1, "{}", kind);
            assert_eq!(unsupported[0].kind, kind);
        }
    }

    #[test]
    fn test_overridden_kind_is_not_reported() {
        let mut b = SourceFile::builder("xyz");
        let id = b.push(SyntaxKind::ClassDeclaration, (0, 3), None, vec![]);
        let file = b.finish(id).unwrap();
        let visitor = Visitor::default_visitor()
            .with_handler(SyntaxKind::ClassDeclaration, |_, _| OTree::text("class Xyz:"));

        let (text, unsupported) = render_with(&file, &NoTypeInfo, &visitor);
        assert_eq!(text, "class Xyz:");
        assert!(unsupported.is_empty());
    }

    #[test]
    fn test_block_breaks_between_overridden_statements() {
        let text = "{\nclass A {}\nclass B {}\n}";
        let mut b = SourceFile::builder(text);
        let a = b.push(SyntaxKind::ClassDeclaration, (2, 12), None, vec![]);
        let bee = b.push(SyntaxKind::ClassDeclaration, (13, 23), None, vec![]);
        let block = b.push(SyntaxKind::Block, (0, 25), None, vec![a, bee]);
        let file = b.finish(block).unwrap();
        let visitor = Visitor::default_visitor()
            .with_handler(SyntaxKind::ClassDeclaration, |node, ctx| OTree::text(ctx.text_of(node)));

        let (text, unsupported) = render_with(&file, &NoTypeInfo, &visitor);
        assert_eq!(text, "{\n    class A {}\n    class B {}\n}");
        assert!(unsupported.is_empty());
    }

    #[test]
    fn test_unexpected_child_layout_falls_back() {
        let mut b = SourceFile::builder("(a b)");
        let a = b.leaf(SyntaxKind::Identifier, (1, 2), "a");
        let rhs = b.leaf(SyntaxKind::Identifier, (3, 4), "b");
        let paren = b.push(SyntaxKind::ParenthesizedExpression, (0, 5), None, vec![a, rhs]);
        let file = b.finish(paren).unwrap();

        let (text, unsupported) = render(&file);
        assert_eq!(text, "<ParenthesizedExpression (a b)>");
        assert_eq!(unsupported.len(), 1);

        let mut b = SourceFile::builder("a b;");
        let a = b.leaf(SyntaxKind::Identifier, (0, 1), "a");
        let rhs = b.leaf(SyntaxKind::Identifier, (2, 3), "b");
        let stmt = b.push(SyntaxKind::ExpressionStatement, (0, 4), None, vec![a, rhs]);
        let file = b.finish(stmt).unwrap();

        let (text, unsupported) = render(&file);
        assert_eq!(text, "<ExpressionStatement a b;>");
        assert_eq!(unsupported[0].kind, SyntaxKind::ExpressionStatement);
    }

    #[test]
    fn test_removed_handler_falls_back() {
        let mut b = SourceFile::builder("a");
        let id = b.leaf(SyntaxKind::Identifier, (0, 1), "a");
        let file = b.finish(id).unwrap();
        let visitor = Visitor::default_visitor().without_handler(SyntaxKind::Identifier);

        let (text, unsupported) = render_with(&file, &NoTypeInfo, &visitor);
        assert_eq!(text, "<Identifier a>");
        assert_eq!(unsupported.len(), 1);
    }

    #[test]
    fn test_block_indents_statements() {
        let text = "{ return x; f(); }";
        let mut b = SourceFile::builder(text);
        let x = b.leaf(SyntaxKind::Identifier, (9, 10), "x");
        let ret = b.push(SyntaxKind::ReturnStatement, (2, 11), None, vec![x]);
        let f = b.leaf(SyntaxKind::Identifier, (12, 13), "f");
        let call = b.push(SyntaxKind::CallExpression, (12, 15), None, vec![f]);
        let stmt = b.push(SyntaxKind::ExpressionStatement, (12, 16), None, vec![call]);
        let block = b.push(SyntaxKind::Block, (0, 18), None, vec![ret, stmt]);
        let file = b.finish(block).unwrap();

        assert_eq!(render(&file).0, "{\n    return x\n    f()\n}");

        let two = Visitor::default_visitor().with_indent_width(2);
        assert_eq!(render_with(&file, &NoTypeInfo, &two).0, "{\n  return x\n  f()\n}");
    }

    #[test]
    fn test_bare_return_and_array_literal() {
        let text = "return; [1, 2];";
        let mut b = SourceFile::builder(text);
        let ret = b.push(SyntaxKind::ReturnStatement, (0, 7), None, vec![]);
        let one = b.push(SyntaxKind::NumericLiteral, (9, 10), None, vec![]);
        let two = b.push(SyntaxKind::NumericLiteral, (12, 13), None, vec![]);
        let array = b.push(SyntaxKind::ArrayLiteralExpression, (8, 14), None, vec![one, two]);
        let stmt = b.push(SyntaxKind::ExpressionStatement, (8, 15), None, vec![array]);
        let root = b.push(SyntaxKind::SourceFile, (0, 15), None, vec![ret, stmt]);
        let file = b.finish(root).unwrap();

        assert_eq!(render(&file).0, "return\n[1, 2]");
    }

    #[test]
    fn test_new_and_parenthesized_expressions() {
        let text = "new Bucket((a))";
        let mut b = SourceFile::builder(text);
        let bucket = b.leaf(SyntaxKind::Identifier, (4, 10), "Bucket");
        let a = b.leaf(SyntaxKind::Identifier, (12, 13), "a");
        let paren = b.push(SyntaxKind::ParenthesizedExpression, (11, 14), None, vec![a]);
        let new = b.push(SyntaxKind::NewExpression, (0, 15), None, vec![bucket, paren]);
        let file = b.finish(new).unwrap();

        let output = SnippetRenderer.render(&file, &NoTypeInfo, &Visitor::default_visitor());
        assert_eq!(output.tree.render(), "new Bucket((a))");
        assert!(output.tree.can_break_line());
    }

    #[test]
    fn test_unknown_object_literal_routes_to_unknown_renderer() {
        let (file, _, literal) = call_with_argument("f({})", object_literal);

        let (text, unsupported) = render(&file);
        assert_eq!(text, "f(<ObjectLiteralExpression {}>)");
        assert_eq!(unsupported.len(), 1);
        assert_eq!(unsupported[0].node, literal);

        let visitor = Visitor::default_visitor().with_hooks(|hooks| {
            hooks.unknown_type_object_literal = |_, _| OTree::text("UNKNOWN");
            hooks.key_value_object_literal = |_, _| OTree::text("MAP");
            hooks.known_struct_object_literal = |_, _, _| OTree::text("STRUCT");
        });
        let (text, unsupported) = render_with(&file, &NoTypeInfo, &visitor);
        assert_eq!(text, "f(UNKNOWN)");
        assert!(unsupported.is_empty());
    }

    #[test]
    fn test_object_literal_classification_by_type() {
        let (file, call, literal) = call_with_argument("f({})", object_literal);
        let visitor = Visitor::default_visitor().with_hooks(|hooks| {
            hooks.unknown_type_object_literal = |_, _| OTree::text("UNKNOWN");
            hooks.key_value_object_literal = |_, _| OTree::text("MAP");
            hooks.known_struct_object_literal =
                |_, ty, _| OTree::text(format!("STRUCT {}", ty.name().unwrap_or("?")));
        });

        // `any` without a resolvable call is a guess, not a declaration
        let unresolved = StaticTypes::new().with_type(literal, TypeInfo::Any);
        assert_eq!(render_with(&file, &unresolved, &visitor).0, "f(UNKNOWN)");

        let resolved = StaticTypes::new()
            .with_type(literal, TypeInfo::Any)
            .with_signature(call, Signature::default());
        assert_eq!(render_with(&file, &resolved, &visitor).0, "f(MAP)");

        let record = StaticTypes::new().with_type(literal, bucket_props());
        assert_eq!(render_with(&file, &record, &visitor).0, "f(STRUCT BucketProps)");

        let map = StaticTypes::new().with_type(
            literal,
            TypeInfo::Map {
                value: Box::new(TypeInfo::Any),
            },
        );
        assert_eq!(render_with(&file, &map, &visitor).0, "f(MAP)");
    }

    #[test]
    fn test_enclosing_call_is_found_through_nesting() {
        // f([{}]) -- the literal sits inside an array argument
        let mut b = SourceFile::builder("f([{}])");
        let callee = b.leaf(SyntaxKind::Identifier, (0, 1), "f");
        let literal = b.push(SyntaxKind::ObjectLiteralExpression, (3, 5), None, vec![]);
        let array = b.push(SyntaxKind::ArrayLiteralExpression, (2, 6), None, vec![literal]);
        let call = b.push(SyntaxKind::CallExpression, (0, 7), None, vec![callee, array]);
        let file = b.finish(call).unwrap();

        let found = find_enclosing_call(file.node(literal).unwrap()).map(|n| n.id());
        assert_eq!(found, Some(call));
        assert_eq!(find_enclosing_call(file.node(call).unwrap()), None);
    }

    #[test]
    fn test_masking_ellipsis_in_argument_list() {
        let (file, _, _) = call_with_argument("f(void '...')", |b| {
            let payload = b.leaf(SyntaxKind::StringLiteral, (7, 12), "...");
            b.push(SyntaxKind::VoidExpression, (2, 12), None, vec![payload])
        });

        let (text, unsupported) = render(&file);
        assert_eq!(text, "f(...)");
        assert!(unsupported.is_empty());
    }

    #[test]
    fn test_masking_block_and_hidden_payloads() {
        let text = "{ void 'block'; void 'nope'; }";
        let mut b = SourceFile::builder(text);
        let block_payload = b.leaf(SyntaxKind::StringLiteral, (7, 14), "block");
        let block_void = b.push(SyntaxKind::VoidExpression, (2, 14), None, vec![block_payload]);
        let stmt1 = b.push(SyntaxKind::ExpressionStatement, (2, 15), None, vec![block_void]);
        let hidden_payload = b.leaf(SyntaxKind::StringLiteral, (21, 27), "nope");
        let hidden_void = b.push(SyntaxKind::VoidExpression, (16, 27), None, vec![hidden_payload]);
        let stmt2 = b.push(SyntaxKind::ExpressionStatement, (16, 28), None, vec![hidden_void]);
        let block = b.push(SyntaxKind::Block, (0, 30), None, vec![stmt1, stmt2]);
        let file = b.finish(block).unwrap();

        let (text, unsupported) = render(&file);
        assert_eq!(text, "{\n    // ...\n}");
        assert!(unsupported.is_empty());

        let hidden = file.node(hidden_void).unwrap();
        let reporter = UnsupportedReporter::new();
        let visitor = Visitor::default_visitor();
        let ctx = RenderContext::new(&file, &NoTypeInfo, &reporter, &visitor);
        assert!(ctx.convert(hidden).is_empty());
    }

    #[test]
    fn test_comment_hook_receives_sentinel_offset() {
        let text = "f();\n  void 'block';";
        let mut b = SourceFile::builder(text);
        let f = b.leaf(SyntaxKind::Identifier, (0, 1), "f");
        let call = b.push(SyntaxKind::CallExpression, (0, 3), None, vec![f]);
        let stmt1 = b.push(SyntaxKind::ExpressionStatement, (0, 4), None, vec![call]);
        let payload = b.leaf(SyntaxKind::StringLiteral, (12, 19), "block");
        let void = b.push(SyntaxKind::VoidExpression, (7, 19), None, vec![payload]);
        let stmt2 = b.push(SyntaxKind::ExpressionStatement, (7, 20), None, vec![void]);
        let root = b.push(SyntaxKind::SourceFile, (0, 20), None, vec![stmt1, stmt2]);
        let file = b.finish(root).unwrap();

        assert_eq!(render(&file).0, "f()\n// ...");

        let positioned = Visitor::default_visitor().with_hooks(|hooks| {
            hooks.comment_range = |comment, ctx| {
                let following = ctx.text_at(Span::new(comment.pos, comment.pos + 4));
                OTree::from_head(vec![
                    Fragment::LineBreak,
                    format!("# {} (offset {}, {})", comment.text, comment.pos, following).into(),
                ])
            };
        });
        assert_eq!(
            render_with(&file, &NoTypeInfo, &positioned).0,
            "f()\n# ... (offset 7, void)"
        );
    }

    #[test]
    fn test_non_masking_void_is_unsupported() {
        let mut b = SourceFile::builder("void 0");
        let zero = b.push(SyntaxKind::NumericLiteral, (5, 6), None, vec![]);
        let void = b.push(SyntaxKind::VoidExpression, (0, 6), None, vec![zero]);
        let file = b.finish(void).unwrap();

        let (text, unsupported) = render(&file);
        assert_eq!(text, "<VoidExpression void 0>");
        assert_eq!(unsupported.len(), 1);
    }

    #[test]
    fn test_convert_all_preserves_order() {
        let mut b = SourceFile::builder("a 'b' 3");
        let a = b.leaf(SyntaxKind::Identifier, (0, 1), "a");
        let s = b.leaf(SyntaxKind::StringLiteral, (2, 5), "b");
        let n = b.push(SyntaxKind::NumericLiteral, (6, 7), None, vec![]);
        let root = b.push(SyntaxKind::SourceFile, (0, 7), None, vec![a, s, n]);
        let file = b.finish(root).unwrap();

        let reporter = UnsupportedReporter::new();
        let visitor = Visitor::default_visitor();
        let ctx = RenderContext::new(&file, &NoTypeInfo, &reporter, &visitor);
        let rendered: Vec<String> = ctx
            .convert_all(&file.root().children())
            .iter()
            .map(OTree::render)
            .collect();
        assert_eq!(rendered, vec!["a", "\"b\"", "3"]);
    }

    #[test]
    fn test_context_lookups() {
        let mut b = SourceFile::builder("x\n  y");
        let x = b.leaf(SyntaxKind::Identifier, (0, 1), "x");
        let y = b.leaf(SyntaxKind::Identifier, (4, 5), "y");
        let root = b.push(SyntaxKind::SourceFile, (0, 5), None, vec![x, y]);
        let file = b.finish(root).unwrap();

        let reporter = UnsupportedReporter::new();
        let visitor = Visitor::default_visitor();
        let ctx = RenderContext::new(&file, &NoTypeInfo, &reporter, &visitor);
        assert_eq!(ctx.text_of(file.node(y).unwrap()), "y");
        assert_eq!(ctx.text_at(Span::new(0, 3)), "x\n ");
        assert_eq!(ctx.position_of(file.node(y).unwrap()), Position { line: 2, column: 3 });
        assert_eq!(ctx.language(), "default");
        assert!(ctx.inferred_type_of_expression(file.node(x).unwrap()).is_none());

        ctx.report_unsupported(file.node(x).unwrap(), "python");
        let entries = reporter.snapshot();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].language, "python");
    }
}

#[cfg(test)]
mod context_tests {
    use crate::renderer::*;
    use crate::source::*;

    #[derive(Debug, Clone, PartialEq, Default)]
    struct ClassScope {
        class_name: Option<String>,
        depth: usize,
    }

    fn merge_scope(old: &ClassScope, update: &ClassScope) -> ClassScope {
        ClassScope {
            class_name: update.class_name.clone().or_else(|| old.class_name.clone()),
            depth: old.depth + update.depth,
        }
    }

    fn class_declaration(node: Node<'_>, ctx: &RenderContext<'_, ClassScope>) -> OTree {
        let children = node.children();
        let Some((name, members)) = children.split_first() else {
            return (ctx.hooks().not_implemented)(node, ctx);
        };
        let name = name.value().unwrap_or("Anonymous");
        let inner = ctx.update_context(&ClassScope {
            class_name: Some(name.to_string()),
            depth: 1,
        });

        OTree::from_head(vec![format!("class {} {{", name).into()])
            .with_children(StatementList.lay_out(inner.convert_all(members)))
            .with_indent(inner.indent_width())
            .with_suffix("\n}")
            .breakable()
    }

    fn this_keyword(_node: Node<'_>, ctx: &RenderContext<'_, ClassScope>) -> OTree {
        match &ctx.state().class_name {
            Some(name) => OTree::text(format!("{}@{}", name, ctx.state().depth)),
            None => OTree::text("this"),
        }
    }

    fn scoped_visitor() -> Visitor<ClassScope> {
        Visitor::baseline("scoped", ClassScope::default(), merge_scope)
            .with_handler(SyntaxKind::ClassDeclaration, class_declaration)
            .with_handler(SyntaxKind::ThisKeyword, this_keyword)
    }

    #[test]
    fn test_merge_of_default_with_itself_is_default() {
        let visitor = scoped_visitor();
        let default = visitor.default_context().clone();
        assert_eq!(visitor.merge_context(&default, &default), default);
    }

    #[test]
    fn test_scoped_context_does_not_leak_to_siblings() {
        let text = "class Foo { this; }\nthis;";
        let mut b = SourceFile::builder(text);
        let name = b.leaf(SyntaxKind::Identifier, (6, 9), "Foo");
        let inner_this = b.push(SyntaxKind::ThisKeyword, (12, 16), None, vec![]);
        let inner_stmt = b.push(SyntaxKind::ExpressionStatement, (12, 17), None, vec![inner_this]);
        let class = b.push(SyntaxKind::ClassDeclaration, (0, 19), None, vec![name, inner_stmt]);
        let outer_this = b.push(SyntaxKind::ThisKeyword, (20, 24), None, vec![]);
        let outer_stmt = b.push(SyntaxKind::ExpressionStatement, (20, 25), None, vec![outer_this]);
        let root = b.push(SyntaxKind::SourceFile, (0, 25), None, vec![class, outer_stmt]);
        let file = b.finish(root).unwrap();

        let output = SnippetRenderer.render(&file, &NoTypeInfo, &scoped_visitor());
        assert_eq!(output.to_text(), "class Foo {\n    Foo@1\n}\nthis\n");
        assert!(output.is_complete());
    }

    #[test]
    fn test_update_context_leaves_parent_untouched() {
        let mut b = SourceFile::builder("x");
        let id = b.leaf(SyntaxKind::Identifier, (0, 1), "x");
        let file = b.finish(id).unwrap();

        let visitor = scoped_visitor();
        let reporter = UnsupportedReporter::new();
        let outer = RenderContext::new(&file, &NoTypeInfo, &reporter, &visitor);
        let inner = outer.update_context(&ClassScope {
            class_name: Some("A".to_string()),
            depth: 2,
        });
        let innermost = inner.update_context(&ClassScope::default());

        assert_eq!(outer.state(), &ClassScope::default());
        assert_eq!(inner.state().depth, 2);
        assert_eq!(innermost.state().class_name.as_deref(), Some("A"));
        assert_eq!(innermost.state().depth, 2);
    }

    #[test]
    fn test_concrete_table_is_a_copy() {
        let base = Visitor::default_visitor();
        let concrete = base
            .clone()
            .with_language("python")
            .with_handler(SyntaxKind::Block, |_, _| OTree::text("pass"));

        assert_eq!(base.language(), "default");
        assert_eq!(concrete.language(), "python");

        let mut b = SourceFile::builder("{}");
        let id = b.push(SyntaxKind::Block, (0, 2), None, vec![]);
        let file = b.finish(id).unwrap();
        assert_eq!(SnippetRenderer.render(&file, &NoTypeInfo, &base).tree.render(), "{\n}");
        assert_eq!(SnippetRenderer.render(&file, &NoTypeInfo, &concrete).tree.render(), "pass");
    }

    #[test]
    fn test_visitor_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Visitor<()>>();
        assert_send_sync::<Visitor<ClassScope>>();
    }
}
