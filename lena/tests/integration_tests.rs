use lena::{transpile, transpile_with, BlockStyle, Error};
use lena_codegen::CodegenOptions;

fn js(source: &str) -> String {
    match transpile(source) {
        Ok(code) => code,
        Err(err) => panic!("failed to transpile {:?}: {:?}", source, err),
    }
}

fn syntax_errors(source: &str) -> Vec<String> {
    match transpile(source) {
        Err(Error::Syntax(errors)) => errors,
        other => panic!("expected syntax errors, got {:?}", other),
    }
}

#[test]
fn statements() {
    assert_eq!(js("let x = 5;"), "let x = 5;\n");
    assert_eq!(js("return 5;"), "return 5;\n");
    assert_eq!(js("1 + 2 * 3"), "(1 + (2 * 3))\n");
    assert_eq!(js("-5"), "(-5)\n");
    assert_eq!(js("!true"), "(!true)\n");
}

#[test]
fn arrays() {
    assert_eq!(js("let a = [1, 2]; a[0];"), "let a = [1, 2];\na[0]\n");
}

#[test]
fn hashes_keep_source_order() {
    assert_eq!(
        js(r#"let h = {"z": 1, "a": [2], 3: fn(x) { x }};"#),
        "let h = {\"z\": 1, \"a\": [2], 3: function(x) {\nx\n}};\n"
    );
}

mod puts {
    use super::*;

    #[test]
    fn rewritten_as_call_statement() {
        assert_eq!(js("puts(1);"), "console.log(1)\n");
        assert_eq!(
            js(r#"puts("hello", 1 + 2);"#),
            "console.log(\"hello\", (1 + 2))\n"
        );
    }

    #[test]
    fn bare_reference_is_kept() {
        assert_eq!(js("let puts = 1; puts;"), "let puts = 1;\nputs\n");
    }

    #[test]
    fn value_positions_are_kept() {
        assert_eq!(js("let x = puts(1);"), "let x = puts(1);\n");
        assert_eq!(js("f(puts(1));"), "f(puts(1))\n");
    }

    #[test]
    fn inside_function_body() {
        assert_eq!(
            js("let lobby = fn(something) {puts(something);};"),
            "let lobby = function(something) {\nconsole.log(something)\n};\n"
        );
    }
}

mod functions {
    use super::*;

    #[test]
    fn function_literal_and_call() {
        assert_eq!(
            js("let add = fn(a, b) { a + b; }; add(1, 2);"),
            "let add = function(a, b) {\n(a + b)\n};\nadd(1, 2)\n"
        );
    }

    #[test]
    fn higher_order_function() {
        assert_eq!(
            js("let twice = fn(f, v) { return f(f(v)); }; twice(fn(x) { x * 2 }, 10);"),
            "let twice = function(f, v) {\nreturn f(f(v));\n};\ntwice(function(x) {\n(x * 2)\n}, 10)\n"
        );
    }

    #[test]
    fn whole_program() {
        let source = r#"let todo = ["this is task 1", "this is task 2"];
        puts(todo);
        let lobby = fn(something) {puts(something);};
        lobby(todo[1]);"#;
        assert_eq!(
            js(source),
            "let todo = [\"this is task 1\", \"this is task 2\"];\n\
             console.log(todo)\n\
             let lobby = function(something) {\nconsole.log(something)\n};\n\
             lobby(todo[1])\n"
        );
    }
}

mod blocks {
    use super::*;

    #[test]
    fn only_last_statement_by_default() {
        assert_eq!(js("if (true) { 1; 2; }"), "if (true) {\n2\n}\n");
    }

    #[test]
    fn all_statements_when_configured() {
        let options = CodegenOptions {
            block_style: BlockStyle::AllStatements,
        };
        assert_eq!(
            transpile_with("if (true) { puts(1); 2; } else { 3 }", &options).unwrap(),
            "if (true) {\nconsole.log(1)\n2\n} else {\n3\n}\n"
        );
    }
}

mod errors {
    use super::*;

    #[test]
    fn no_code_on_syntax_error() {
        assert_eq!(
            syntax_errors("let = 5;"),
            vec![
                "expected next token to be IDENT, got = instead",
                "no prefix parse function for = found",
            ]
        );
    }

    #[test]
    fn every_error_is_reported() {
        assert_eq!(syntax_errors("let x 1; let y = ;").len(), 2);
    }

    #[test]
    fn illegal_characters() {
        assert_eq!(
            syntax_errors("let x = 1 # 2;"),
            vec!["no prefix parse function for ILLEGAL found"]
        );
    }

    #[test]
    fn deeply_nested_expressions() {
        let errors = syntax_errors(&format!("{}1", "-".repeat(10_000)));
        assert_eq!(errors[0], "expression nested too deeply");

        let errors = syntax_errors(&format!("fn() {{ {} }}", "fn() { ".repeat(10_000)));
        assert_eq!(errors[0], "expression nested too deeply");

        let errors = syntax_errors(&format!("x{}", "[0]".repeat(10_000)));
        assert_eq!(errors[0], "expression nested too deeply");
    }

    #[test]
    fn nesting_below_the_limit() {
        let code = js(&format!("{}1", "-".repeat(200)));
        assert!(code.starts_with("(-(-"));
        assert!(code.ends_with("1))\n"));
    }

    #[test]
    fn error_display() {
        let err = transpile("let = 5;").unwrap_err();
        assert_eq!(err.to_string(), "found 2 syntax error(s)");
    }
}
