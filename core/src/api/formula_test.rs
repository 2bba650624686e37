use std::io::Cursor;

use super::*;
use crate::api::ErrorKind;
use crate::parser::Span;
use crate::test_utils::init_test_logging;
use pretty_assertions::assert_eq;

#[test]
fn test_new_compiles_eagerly() {
    let formula = Formula::new("2+3*4").unwrap();
    assert_eq!(formula.source(), "2+3*4");
    assert_eq!(formula.to_string(), "2+3*4");
    assert_eq!(formula.postfix().len(), 5);
    assert_eq!(formula.eval(&()), Ok(14.0));
}

#[test]
fn test_compile_errors_carry_the_source() {
    let err = Formula::new("2+$3").unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotSupportedCharacter('$'));
    assert_eq!(err.span, Some(Span::new(2, 3)));
    assert_eq!(err.input, "2+$3");
}

#[test]
fn test_runtime_errors_carry_the_source() {
    let formula = Formula::new("1/x").unwrap();
    let err = formula.eval(&[("x", 0.0)]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::DividedByZero);
    assert_eq!(err.input, "1/x");
}

#[test]
fn test_default_is_empty() {
    let formula = Formula::default();
    assert!(formula.is_empty());
    assert_eq!(formula.source(), "");
    assert_eq!(formula.eval(&()).unwrap_err().kind, ErrorKind::EmptyString);
    assert_eq!(formula.check(), Ok(()));
}

#[test]
fn test_variables_are_distinct_and_sorted() {
    let formula = Formula::new("y + x * y - a").unwrap();
    let names: Vec<_> = formula.variables().iter().map(String::as_str).collect();
    assert_eq!(names, ["a", "x", "y"]);
}

#[test]
fn test_user_constant_shadows_builtin() {
    let mut formula = Formula::new("pi * 2").unwrap();
    formula.define_constant("pi", 3.0);
    assert_eq!(formula.eval(&()), Ok(6.0));

    formula.define_constant("pi", 4.0);
    assert_eq!(formula.eval(&()), Ok(8.0));
}

#[test]
fn test_user_function_shadows_builtin() {
    init_test_logging();

    let mut formula = Formula::new("sin(1)").unwrap();
    formula.define_function("sin", |x| x * 10.0);
    assert_eq!(formula.eval(&()), Ok(10.0));
}

#[test]
fn test_reassignment_keeps_user_definitions() {
    let mut formula = Formula::new("k * x").unwrap();
    formula.define_constant("k", 3.0);
    formula.define_function("double", |x| 2.0 * x);

    formula.assign("double(k) + 1").unwrap();
    assert_eq!(formula.source(), "double(k) + 1");
    assert_eq!(formula.eval(&()), Ok(7.0));
    assert!(formula.variables().contains("k"));
    assert!(!formula.variables().contains("x"));
}

#[test]
fn test_failed_reassignment_leaves_formula_untouched() {
    let mut formula = Formula::new("x + 1").unwrap();
    let before = formula.postfix().to_vec();

    let err = formula.assign("x + ?").unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotSupportedCharacter('?'));
    assert_eq!(formula.source(), "x + 1");
    assert_eq!(formula.postfix(), before.as_slice());
    assert_eq!(formula.eval(&[("x", 1.0)]), Ok(2.0));
}

#[test]
fn test_clear_drops_everything() {
    let mut formula = Formula::new("k").unwrap();
    formula.define_constant("k", 1.0);
    formula.define_function("f", |x| x);
    formula.clear();

    assert!(formula.is_empty());
    assert_eq!(formula.source(), "");
    assert!(formula.variables().is_empty());

    formula.assign("k + f(1)").unwrap();
    assert_eq!(
        formula.eval(&()).unwrap_err().kind,
        ErrorKind::NotDefinedVariable("k".to_string())
    );
    assert_eq!(
        formula.check().unwrap_err().kind,
        ErrorKind::NotDefinedFunction("f".to_string())
    );
}

#[test]
fn test_positional_bindings_skip_user_constants() {
    let mut formula = Formula::new("x+y").unwrap();
    assert_eq!(formula.positional_bindings(&[10.0]), [("x", 10.0)]);
    assert_eq!(
        formula.eval_positional(&[10.0]).unwrap_err().kind,
        ErrorKind::NotDefinedVariable("y".to_string())
    );

    formula.define_constant("x", 1.0);
    assert_eq!(formula.positional_bindings(&[10.0]), [("y", 10.0)]);
    assert_eq!(formula.eval_positional(&[10.0]), Ok(11.0));
}

#[test]
fn test_positional_extra_values_are_ignored() {
    let formula = Formula::new("b - a").unwrap();
    assert_eq!(formula.eval_positional(&[1.0, 5.0, 100.0]), Ok(4.0));
}

#[test]
fn test_eval_with_overrides_options_for_one_call() {
    let formula = Formula::new("sin(pi)").unwrap();
    let raw = formula
        .eval_with(
            EvalOptionsOverride {
                snap_to_zero: Some(false),
                ..Default::default()
            },
            &(),
        )
        .unwrap();
    assert!(raw != 0.0);
    assert_eq!(formula.eval(&()), Ok(0.0));
}

#[test]
fn test_with_options_sets_defaults() {
    let options = EvalOptions {
        snap_to_zero: false,
        ..Default::default()
    };
    let mut formula = Formula::with_options(options.clone(), "1").unwrap();
    assert_eq!(formula.options(), &options);

    formula.set_options(EvalOptions::default());
    assert!(formula.options().snap_to_zero);
}

#[test]
fn test_check_accepts_builtins_and_user_functions() {
    let mut formula = Formula::new("sqrt(x) + g(x)").unwrap();
    assert_eq!(
        formula.check().unwrap_err().kind,
        ErrorKind::NotDefinedFunction("g".to_string())
    );
    formula.define_function("g", |x| x + 1.0);
    assert_eq!(formula.check(), Ok(()));
}

#[test]
fn test_check_reports_missing_operands() {
    let formula = Formula::new("2+").unwrap();
    assert_eq!(
        formula.check().unwrap_err().kind,
        ErrorKind::NotEnoughOperands("+".to_string())
    );
}

#[test]
fn test_from_str_checks() {
    let formula: Formula = "2*x".parse().unwrap();
    assert_eq!(formula.eval(&[("x", 4.0)]), Ok(8.0));

    let err = "2*".parse::<Formula>().unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotEnoughOperands("*".to_string()));
    assert_eq!(err.input, "2*");
}

#[test]
fn test_prompt_reads_one_line() {
    let mut reader = Cursor::new("x^2\nignored\n");
    let mut writer = Vec::new();
    let formula = Formula::prompt("f(x) = ", &mut reader, &mut writer).unwrap();

    assert_eq!(writer, b"f(x) = ");
    assert_eq!(formula.source(), "x^2");
    assert_eq!(formula.eval(&[("x", 3.0)]), Ok(9.0));
}

#[test]
fn test_prompt_reports_formula_errors() {
    let mut reader = Cursor::new("2 + &\r\n");
    let mut writer = Vec::new();
    let err = Formula::prompt("> ", &mut reader, &mut writer).unwrap_err();
    assert!(matches!(
        err,
        PromptError::Formula(Error {
            kind: ErrorKind::NotSupportedCharacter('&'),
            ..
        })
    ));
}

#[test]
fn test_clones_share_nothing_mutable() {
    let mut original = Formula::new("k").unwrap();
    original.define_constant("k", 1.0);
    let copy = original.clone();
    original.define_constant("k", 2.0);

    assert_eq!(copy.eval(&()), Ok(1.0));
    assert_eq!(original.eval(&()), Ok(2.0));
}

#[test]
fn test_debug_lists_function_names() {
    let mut formula = Formula::new("f(1)").unwrap();
    formula.define_function("f", |x| x);
    let debug = format!("{:?}", formula);
    assert!(debug.contains("source: \"f(1)\""));
    assert!(debug.contains("\"f\""));
}
