use std::fs;

use monkey::{eval_source, interpret, interpreter::environment::Environment, parse_source};
use walkdir::WalkDir;

/// Evaluates a script in a fresh environment and returns the inspected
/// form of its final value.
fn eval_to(src: &str) -> String {
    let env = Environment::root();
    match eval_source(src, &env) {
        Ok(value) => value.to_string(),
        Err(e) => panic!("Script failed: {e}\nSource: {src}"),
    }
}

/// Evaluates a script expected to fail and returns the error message.
fn eval_error(src: &str) -> String {
    let env = Environment::root();
    match eval_source(src, &env) {
        Ok(value) => {
            panic!("Script succeeded with '{value}' but was expected to fail\nSource: {src}")
        },
        Err(e) => e.to_string(),
    }
}

/// Parses a script and returns its canonical re-printed form.
fn reprint(src: &str) -> String {
    match parse_source(src) {
        Ok(program) => program.to_string(),
        Err(errors) => panic!("Script failed to parse: {errors:?}\nSource: {src}"),
    }
}

#[test]
fn integer_arithmetic_and_precedence() {
    assert_eq!(eval_to("5 + 5 * 2;"), "15");
    assert_eq!(eval_to("(5 + 5) * 2;"), "20");
    assert_eq!(eval_to("-50 + 100 + -50;"), "0");
    assert_eq!(eval_to("2 * 2 * 2 * 2 * 2;"), "32");
    assert_eq!(eval_to("50 / 2 * 2 + 10;"), "60");
    assert_eq!(eval_to("3 * (3 * 3) + 10;"), "37");
    assert_eq!(eval_to("(5 + 10 * 2 + 15 / 3) * 2 + -10;"), "50");
}

#[test]
fn booleans_and_comparisons() {
    assert_eq!(eval_to("true;"), "true");
    assert_eq!(eval_to("false;"), "false");
    assert_eq!(eval_to("1 < 2;"), "true");
    assert_eq!(eval_to("1 > 2;"), "false");
    assert_eq!(eval_to("1 == 1;"), "true");
    assert_eq!(eval_to("1 != 2;"), "true");
    assert_eq!(eval_to("true == true;"), "true");
    assert_eq!(eval_to("false == false;"), "true");
    assert_eq!(eval_to("true != false;"), "true");
    assert_eq!(eval_to("(1 < 2) == true;"), "true");
    assert_eq!(eval_to("(1 > 2) == true;"), "false");
}

#[test]
fn bang_operator_follows_truthiness() {
    assert_eq!(eval_to("!true;"), "false");
    assert_eq!(eval_to("!false;"), "true");
    assert_eq!(eval_to("!!true;"), "true");
    // Everything except false and null is truthy, including zero, the
    // empty string and empty containers.
    assert_eq!(eval_to("!5;"), "false");
    assert_eq!(eval_to("!!5;"), "true");
    assert_eq!(eval_to("!!0;"), "true");
    assert_eq!(eval_to("!!\"\";"), "true");
    assert_eq!(eval_to("!![];"), "true");
    assert_eq!(eval_to("!if (false) { 1 };"), "true");
}

#[test]
fn null_is_a_canonical_singleton() {
    let src = "let a = if (false) { 1 }; let b = if (false) { 2 }; a == b;";
    assert_eq!(eval_to(src), "true");
}

#[test]
fn if_else_expressions() {
    assert_eq!(eval_to("if (1 < 2) { 10 } else { 20 };"), "10");
    assert_eq!(eval_to("if (1 > 2) { 10 } else { 20 };"), "20");
    assert_eq!(eval_to("if (false) { 10 };"), "null");
    assert_eq!(eval_to("if (1) { 10 };"), "10");
    assert_eq!(eval_to("if (true) { 1; 2; 3 };"), "3");
}

#[test]
fn return_unwinds_to_the_function_boundary() {
    assert_eq!(eval_to("9; return 2 * 5; 9;"), "10");
    assert_eq!(eval_to("if (10 > 1) { if (10 > 1) { return 10; } return 1; };"), "10");

    let src = "let f = fn() { if (true) { return 1; } return 2; }; f() + 10;";
    assert_eq!(eval_to(src), "11");

    assert_eq!(eval_to("let f = fn() { return; }; f();"), "null");
}

#[test]
fn let_bindings_and_lookup() {
    assert_eq!(eval_to("let a = 5; a;"), "5");
    assert_eq!(eval_to("let a = 5; let b = a; b;"), "5");
    assert_eq!(eval_to("let a = 5; let b = a; let c = a + b + 5; c;"), "15");
    // A let statement yields its bound value.
    assert_eq!(eval_to("let a = 2 + 3;"), "5");
}

#[test]
fn functions_and_calls() {
    assert_eq!(eval_to("let identity = fn(x) { x; }; identity(5);"), "5");
    assert_eq!(eval_to("let double = fn(x) { x * 2; }; double(5);"), "10");
    assert_eq!(eval_to("let add = fn(x, y) { x + y; }; add(5, add(5, 5));"), "15");
    assert_eq!(eval_to("fn(x) { x; }(5);"), "5");
    assert_eq!(eval_to("let c = fn(x) { fn(y) { x + y; }; }; c(10)(32);"), "42");
}

#[test]
fn closures_capture_their_defining_scope() {
    let src = "let newAdder = fn(x) { fn(y) { x + y; }; }; \
               let addTwo = newAdder(2); \
               addTwo(3);";
    assert_eq!(eval_to(src), "5");

    // The body sees the captured environment, not the caller's.
    let src = "let x = 5; \
               let f = fn() { x; }; \
               let g = fn() { let x = 10; f(); }; \
               g();";
    assert_eq!(eval_to(src), "5");
}

#[test]
fn recursion_through_the_binding_environment() {
    let src = "let fact = fn(n) { if (n < 2) { return 1; } n * fact(n - 1); }; fact(5);";
    assert_eq!(eval_to(src), "120");
}

#[test]
fn call_scopes_do_not_leak() {
    assert_eq!(eval_to("let x = 5; let f = fn() { let x = 10; x; }; f() + x;"), "15");
    assert_eq!(eval_error("let f = fn() { let inner = 1; }; f(); inner;"),
               "identifier not defined: inner");
}

#[test]
fn string_concatenation_and_equality() {
    assert_eq!(eval_to("\"Hello\" + \", \" + \"World\";"), "Hello, World");
    assert_eq!(eval_to("\"a\" == \"a\";"), "true");
    assert_eq!(eval_to("\"a\" == \"b\";"), "false");
}

#[test]
fn arrays_and_indexing() {
    assert_eq!(eval_to("[1, 2 * 2, 3 + 3];"), "[1, 4, 6]");
    assert_eq!(eval_to("[1, 2 * 2, 3 + 3][2];"), "6");
    assert_eq!(eval_to("let xs = [1, 2]; xs[0] + xs[1];"), "3");
    assert_eq!(eval_to("[1, 2, 3][1 + 1];"), "3");
}

#[test]
fn array_index_out_of_range_is_an_error() {
    assert_eq!(eval_error("[1, 2, 3][3];"), "array index out of range: 3");
    assert_eq!(eval_error("[1][-1];"), "array index out of range: -1");
}

#[test]
fn array_identity_comparison() {
    assert_eq!(eval_to("let a = [1]; let b = a; a == b;"), "true");
    assert_eq!(eval_to("let a = [1]; let b = [1]; a == b;"), "false");
    assert_eq!(eval_to("let f = fn(x) { x; }; f == f;"), "true");
}

#[test]
fn len_and_append() {
    assert_eq!(eval_to("len([1, 2, 3]);"), "3");
    assert_eq!(eval_to("len(\"hello\");"), "5");
    assert_eq!(eval_to("len(\"\");"), "0");
    assert_eq!(eval_to("append([1, 2], 3);"), "[1, 2, 3]");

    // len(append(a, x)) == len(a) + 1, and the input array is untouched.
    assert_eq!(eval_to("let a = [1, 2]; len(append(a, 3)) == len(a) + 1;"), "true");
    assert_eq!(eval_to("let a = [1]; let b = append(a, 2); len(a);"), "1");
}

#[test]
fn first_last_rest() {
    assert_eq!(eval_to("first([1, 2, 3]);"), "1");
    assert_eq!(eval_to("last([1, 2, 3]);"), "3");
    assert_eq!(eval_to("rest([1, 2, 3]);"), "[2, 3]");
    assert_eq!(eval_to("first([]);"), "null");
    assert_eq!(eval_to("last([]);"), "null");
    assert_eq!(eval_to("rest([]);"), "null");
    assert_eq!(eval_to("rest(rest([1, 2, 3]));"), "[3]");
}

#[test]
fn builtins_are_first_class_values() {
    assert_eq!(eval_to("let f = len; f([1, 2]);"), "2");
    assert_eq!(eval_to("len;"), "builtin function len");
    // A user binding shadows the builtin of the same name.
    assert_eq!(eval_to("let len = 5; len;"), "5");
}

#[test]
fn builtin_argument_violations() {
    assert_eq!(eval_error("len(1);"), "builtin error: len is not defined for 1");
    assert_eq!(eval_error("len(\"a\", \"b\");"),
               "builtin error: wrong number of arguments to len: got 2, want 1");
    assert_eq!(eval_error("append(1, 2);"),
               "builtin error: append expects an array, found 1");
    assert_eq!(eval_error("first(\"abc\");"),
               "builtin error: first expects an array, found abc");
}

#[test]
fn hash_literals_and_lookup() {
    assert_eq!(eval_to("{1: \"a\", \"b\": 2, true: false}[\"b\"];"), "2");
    assert_eq!(eval_to("{1: \"a\", \"b\": 2, true: false}[1];"), "a");
    assert_eq!(eval_to("{1: \"a\", \"b\": 2, true: false}[true];"), "false");
    assert_eq!(eval_to("{1 + 1: 2}[2];"), "2");
    assert_eq!(eval_to("{}[0];"), "null");
    assert_eq!(eval_to("{1: 2}[2];"), "null");
}

#[test]
fn hash_duplicate_keys_overwrite_in_order() {
    assert_eq!(eval_to("{\"a\": 1, \"a\": 2}[\"a\"];"), "2");
}

#[test]
fn hash_rendering_is_stable() {
    // Booleans sort before integers, integers before strings.
    assert_eq!(eval_to("{2: \"b\", 1: \"a\", true: 3};"), "{true: 3, 1: a, 2: b}");
}

#[test]
fn unhashable_keys_are_errors() {
    assert_eq!(eval_error("{1: 2}[[1]];"), "unhashable key: [1]");
    assert_eq!(eval_error("{[1]: 2};"), "unhashable key: [1]");
    assert_eq!(eval_error("{1: 2}[fn(x) { x }];"), "unhashable key: fn(x) { x }");
}

#[test]
fn type_mismatch_errors() {
    assert_eq!(eval_error("5 + true;"), "type mismatch: 5 + true");
    assert_eq!(eval_error("5 + true; 5;"), "type mismatch: 5 + true");
    assert_eq!(eval_error("\"a\" + 1;"), "type mismatch: a + 1");
    assert_eq!(eval_error("5[0];"), "type mismatch: 5 [] 0");
    assert_eq!(eval_error("[1][\"a\"];"), "type mismatch: [1] [] a");
}

#[test]
fn unknown_operator_errors() {
    assert_eq!(eval_error("-true;"), "unknown operator: -true");
    assert_eq!(eval_error("true + false;"), "unknown operator: true + false");
    assert_eq!(eval_error("true < false;"), "unknown operator: true < false");
    assert_eq!(eval_error("\"a\" - \"b\";"), "unknown operator: a - b");
    assert_eq!(eval_error("\"a\" != \"b\";"), "unknown operator: a != b");
}

#[test]
fn unbound_identifiers_are_errors() {
    assert_eq!(eval_error("foobar;"), "identifier not defined: foobar");
    assert_eq!(eval_error("let a = foobar;"), "identifier not defined: foobar");
}

#[test]
fn calling_a_non_function_is_an_error() {
    assert_eq!(eval_error("5(3);"), "not a function: 5");
    assert_eq!(eval_error("\"f\"();"), "not a function: f");
}

#[test]
fn empty_program_evaluates_to_null() {
    assert_eq!(eval_to(""), "null");
}

#[test]
fn function_values_reprint_their_literal() {
    assert_eq!(eval_to("fn(x) { x; };"), "fn(x) { x }");
    assert_eq!(eval_to("fn(x, y) { x + y; };"), "fn(x, y) { (x + y) }");
}

#[test]
fn canonical_reprinting() {
    assert_eq!(reprint("-a * b"), "((-a) * b)");
    assert_eq!(reprint("a + b * c + d / e - f"), "(((a + (b * c)) + (d / e)) - f)");
    assert_eq!(reprint("!-a"), "(!(-a))");
    assert_eq!(reprint("a + b + c"), "((a + b) + c)");
    assert_eq!(reprint("5 < 4 != 3 > 4"), "((5 < 4) != (3 > 4))");
    assert_eq!(reprint("2 / (5 + 5)"), "(2 / (5 + 5))");
    assert_eq!(reprint("3 + 4; -5 * 5"), "(3 + 4) ((-5) * 5)");
    assert_eq!(reprint("add(a, b, 1, 2 * 3)"), "add(a, b, 1, (2 * 3))");
    assert_eq!(reprint("a * [1, 2, 3, 4][b * c] * d"), "((a * ([1, 2, 3, 4][(b * c)])) * d)");
    assert_eq!(reprint("let x = 1 + 2;"), "let x = (1 + 2);");
}

#[test]
fn parse_errors_are_collected_not_raised() {
    let errors = parse_source("let x 5;").unwrap_err();
    assert_eq!(errors[0].to_string(), "expected next token to be =, got INT instead");

    let errors = parse_source("let = 5;").unwrap_err();
    assert_eq!(errors[0].to_string(), "expected next token to be IDENT, got = instead");

    // Parsing resumes at the next statement boundary, so both statements
    // report.
    let errors = parse_source("let x 5; let = 10;").unwrap_err();
    assert_eq!(errors.len(), 2);
}

#[test]
fn illegal_characters_surface_as_parse_errors() {
    let errors = parse_source("let x = 5 @ 5;").unwrap_err();
    assert!(!errors.is_empty());
}

#[test]
fn persistent_environment_behaves_like_a_repl() {
    let env = Environment::root();

    eval_source("let counter = 10;", &env).unwrap();
    eval_source("let bump = fn(x) { x + 1 };", &env).unwrap();

    let value = eval_source("bump(counter) + 4;", &env).unwrap();
    assert_eq!(value.to_string(), "15");
}

#[test]
fn demo_scripts_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "monkey"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = interpret(&content, false) {
            panic!("Demo script {path:?} failed:\nError: {e}");
        }
    }

    assert!(count > 0, "No demo scripts found in demos/");
}
