use std::fs::{self};

use pretty_assertions::assert_eq;
use vilang::{
    ErrorKind, RunOutput, Value,
    interpreter::{evaluator::core::Interpreter, lexer::tokenize, parser::parse},
    run,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_dsl_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = run(&code) {
                panic!("Example {} in {:?} failed:\n{}\nError: {:?}", i + 1, path, code, e);
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

fn extract_dsl_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```vilang") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn output_of(src: &str) -> Vec<String> {
    match run(src) {
        Ok(RunOutput { output, .. }) => output,
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn error_kind_of(src: &str) -> ErrorKind {
    match run(src) {
        Ok(_) => panic!("Script succeeded but was expected to fail"),
        Err(e) => e.kind(),
    }
}

#[test]
fn addition_of_variables() {
    assert_eq!(output_of("gán a = 10\ngán b = 20\nin (a + b)"), vec!["30"]);
}

#[test]
fn string_concatenation() {
    assert_eq!(output_of("gán s = \"Xin \" + \"chào\"\nin (s)"), vec!["Xin chào"]);
}

#[test]
fn precedence_and_associativity() {
    assert_eq!(output_of("gán x = 5\ngán y = 3\nin ((x + y) * 2 - 1)"), vec!["15"]);
    assert_eq!(output_of("in (10 - 4 - 3)"), vec!["3"]);
    assert_eq!(output_of("in (24 / 4 / 2)"), vec!["3"]);
    assert_eq!(output_of("in (2 + 3 * 4)"), vec!["14"]);
}

#[test]
fn if_else_picks_one_branch() {
    assert_eq!(output_of("nếu (1 == 1) { in (\"a\") } khác { in (\"b\") }"), vec!["a"]);
    assert_eq!(output_of("nếu (1 == 2) { in (\"a\") } khác { in (\"b\") }"), vec!["b"]);
    assert_eq!(output_of("nếu (1 == 2) { in (\"a\") }"), Vec::<String>::new());
}

#[test]
fn undefined_variable_is_runtime_error() {
    let error = run("in (x)").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Runtime);
    assert!(error.message().contains('x'));
    assert_eq!(error.line(), 1);
    assert_eq!(error.column(), Some(5));
}

#[test]
fn division_by_zero_is_runtime_error() {
    let error = run("gán z = 5 / 0").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Runtime);
    assert_eq!(error.message(), "division by zero");
}

#[test]
fn runs_are_deterministic() {
    let source = "gán a = 1\ngán b = a + \"x\"\nnếu (b != a) { in (b) }\ngán c = a * 2";

    assert_eq!(run(source), run(source));
}

#[test]
fn equality_across_kinds_is_false() {
    assert_eq!(output_of("in (1 == \"1\")"), vec!["sai"]);
    assert_eq!(output_of("in (đúng == 1)"), vec!["sai"]);
    assert_eq!(output_of("in (\"a\" != 1)"), vec!["đúng"]);
}

#[test]
fn bindings_snapshot_holds_final_values() {
    let result = run("gán a = 1\ngán a = a + 1\ngán t = \"x\"\ngán b = đúng").unwrap();

    assert_eq!(result.bindings.len(), 3);
    assert_eq!(result.bindings["a"], Value::Number(2.0));
    assert_eq!(result.bindings["t"], Value::from("x"));
    assert_eq!(result.bindings["b"], Value::Bool(true));
}

#[test]
fn assignments_in_branches_are_visible_afterwards() {
    let result = run("nếu (đúng) {\n  gán x = 1\n}\nin (x)").unwrap();

    assert_eq!(result.output, vec!["1"]);
    assert_eq!(result.bindings["x"], Value::Number(1.0));
}

#[test]
fn failure_discards_partial_output() {
    let source = "in (1)\nin (y)\nin (2)";

    let error = run(source).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Runtime);
    assert_eq!(error.line(), 2);

    // The output is only reachable when driving the interpreter directly.
    let program = parse(&tokenize(source).unwrap()).unwrap();
    let mut interpreter = Interpreter::new();
    assert!(interpreter.interpret(&program).is_err());
    assert_eq!(interpreter.output(), ["1".to_string()]);
}

#[test]
fn else_body_may_open_on_a_later_line() {
    assert_eq!(output_of("nếu (sai) { in (1) }\nkhác\n{ in (2) }"), vec!["2"]);
}

#[test]
fn decomposed_keywords_run() {
    let result = run("ga\u{301}n to\u{302}\u{309}ng = 2\nin (tổng)").unwrap();

    assert_eq!(result.output, vec!["2"]);
    assert_eq!(result.bindings.keys().collect::<Vec<_>>(), vec!["tổng"]);
}

#[test]
fn long_operator_chains_evaluate() {
    let source = format!("in (1{})", " + 1".repeat(50_000));

    assert_eq!(output_of(&source), vec!["50001"]);
}

#[test]
fn long_chains_of_mixed_operators_evaluate() {
    let source = format!("gán x = 0{}\nin (x)", " + 2 * 3 - 1".repeat(20_000));

    assert_eq!(output_of(&source), vec!["100000"]);
}

#[test]
fn deeply_nested_parentheses() {
    let depth = 5_000;
    let source = format!("in ({}7{})", "(".repeat(depth), ")".repeat(depth));

    assert_eq!(output_of(&source), vec!["7"]);
}

#[test]
fn deeply_nested_negation() {
    let source = format!("in ({}2)", "-".repeat(10_001));

    assert_eq!(output_of(&source), vec!["-2"]);
}

#[test]
fn deeply_nested_conditionals() {
    let depth = 2_000;
    let source = format!("{}in (1){}", "nếu (đúng) {\n".repeat(depth), "\n}".repeat(depth));

    assert_eq!(output_of(&source), vec!["1"]);
}

#[test]
fn deep_nesting_error_is_reported() {
    let depth = 5_000;
    let source = format!("in ({}x{})", "(".repeat(depth), ")".repeat(depth));

    let error = run(&source).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Runtime);
    assert_eq!(error.column(), Some(depth + 5));
}

#[test]
fn syntax_errors_are_reported_before_running() {
    assert_eq!(error_kind_of("in (1)\nin (2"), ErrorKind::Syntax);
    assert_eq!(error_kind_of("gán = 1"), ErrorKind::Syntax);
    assert_eq!(error_kind_of("in (\"mở"), ErrorKind::Syntax);
    assert_eq!(error_kind_of("nếu (đúng) { in (1)"), ErrorKind::Syntax);
    assert_eq!(error_kind_of("lặp (đúng) { }"), ErrorKind::Syntax);
}

#[test]
fn error_display_includes_kind_and_location() {
    let error = run("gán a = 1\ngán b = a - \"x\"").unwrap_err();

    assert_eq!(error.to_string(),
               "Runtime error at line 2, column 11: operands must be numbers for '-'");
}

#[test]
fn independent_runs_can_share_threads() {
    let handles: Vec<_> =
        (0..4).map(|i| {
                  std::thread::spawn(move || run(&format!("gán n = {i}\nin (n * 2)")).unwrap())
              })
              .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.join().unwrap();
        assert_eq!(result.output, vec![(i * 2).to_string()]);
    }
}

#[test]
fn test_script_file() {
    let script = fs::read_to_string("tests/example.vi").expect("missing file");

    assert_eq!(output_of(&script), vec!["tổng = 30", "đúng ba mươi", "31"]);
}
