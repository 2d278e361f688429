//! End-to-end programs through the public API.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use stimpl_eval::{
    buffer_handler, evaluate, run, Environment, ErrorCategory, EvalErrorKind, Expr, Interpreter,
    Name, RuntimeType, Value,
};

fn capture(program: &Expr) -> (Result<stimpl_eval::Evaluated, stimpl_eval::EvalError>, String) {
    let handler = buffer_handler();
    let interp = Interpreter::builder().print_handler(handler.clone()).build();
    let result = interp.run(program);
    (result, handler.get_output())
}

#[test]
fn run_starts_from_empty_environment() {
    let done = run(&Expr::program(vec![Expr::int(1)])).unwrap();
    assert!(done.env.is_empty());
    let (value, ty, env) = done.into_parts();
    assert_eq!((value, ty), (Some(Value::int(1)), RuntimeType::Integer));
    assert!(env.ptr_eq(&Environment::empty()));
}

#[test]
fn evaluate_uses_supplied_environment() {
    let env = Environment::empty().extend(
        Name::from("greeting"),
        Some(Value::string("hi")),
        RuntimeType::String,
    );
    let done = evaluate(
        &Expr::add(Expr::var("greeting"), Expr::string(" there")),
        env,
    )
    .unwrap();
    assert_eq!(done.value, Some(Value::string("hi there")));
}

#[test]
fn factorial_loop() {
    // n = 10; acc = 1; while (n > 0) { acc = acc * n; n = n - 1 }; acc
    let program = Expr::program(vec![
        Expr::assign("n", Expr::int(10)),
        Expr::assign("acc", Expr::int(1)),
        Expr::while_loop(
            Expr::greater_than(Expr::var("n"), Expr::int(0)),
            Expr::sequence(vec![
                Expr::assign("acc", Expr::multiply(Expr::var("acc"), Expr::var("n"))),
                Expr::assign("n", Expr::subtract(Expr::var("n"), Expr::int(1))),
            ]),
        ),
        Expr::var("acc"),
    ]);
    let (result, _) = capture(&program);
    assert_eq!(result.unwrap().value, Some(Value::int(3_628_800)));
}

#[test]
fn fizzbuzz_prints_in_order() {
    // Prints i, or "fizz" when i is a multiple of 3, for i in 1..=6.
    let multiple_of_three = Expr::equal(
        Expr::multiply(
            Expr::divide(Expr::var("i"), Expr::int(3)),
            Expr::int(3),
        ),
        Expr::var("i"),
    );
    let program = Expr::program(vec![
        Expr::assign("i", Expr::int(1)),
        Expr::while_loop(
            Expr::less_equal(Expr::var("i"), Expr::int(6)),
            Expr::sequence(vec![
                Expr::if_then_else(
                    multiple_of_three,
                    Expr::print(Expr::string("fizz")),
                    Expr::print(Expr::var("i")),
                ),
                Expr::assign("i", Expr::add(Expr::var("i"), Expr::int(1))),
            ]),
        ),
    ]);
    let (result, output) = capture(&program);
    result.unwrap();
    assert_eq!(output, "1\n2\nfizz\n4\n5\nfizz\n");
}

#[test]
fn string_building_loop() {
    let program = Expr::program(vec![
        Expr::assign("s", Expr::string("")),
        Expr::assign("k", Expr::int(0)),
        Expr::while_loop(
            Expr::not_equal(Expr::var("k"), Expr::int(3)),
            Expr::sequence(vec![
                Expr::assign("s", Expr::add(Expr::var("s"), Expr::string("ab"))),
                Expr::assign("k", Expr::add(Expr::var("k"), Expr::int(1))),
            ]),
        ),
        Expr::print(Expr::var("s")),
    ]);
    let (result, output) = capture(&program);
    let done = result.unwrap();
    assert_eq!(output, "ababab\n");
    assert_eq!(done.ty, RuntimeType::String);
}

#[test]
fn logic_combines_comparisons() {
    let program = Expr::program(vec![
        Expr::assign("x", Expr::float(2.5)),
        Expr::and(
            Expr::greater_equal(Expr::var("x"), Expr::float(2.0)),
            Expr::or(
                Expr::less_than(Expr::var("x"), Expr::float(0.0)),
                Expr::not(Expr::equal(Expr::var("x"), Expr::float(3.0))),
            ),
        ),
    ]);
    let (result, _) = capture(&program);
    assert_eq!(result.unwrap().value, Some(Value::Bool(true)));
}

#[test]
fn type_fault_inside_loop_stops_program() {
    let program = Expr::program(vec![
        Expr::assign("i", Expr::int(0)),
        Expr::while_loop(
            Expr::less_than(Expr::var("i"), Expr::int(3)),
            Expr::sequence(vec![
                Expr::print(Expr::var("i")),
                Expr::assign("i", Expr::add(Expr::var("i"), Expr::int(1))),
                Expr::if_then_else(
                    Expr::equal(Expr::var("i"), Expr::int(2)),
                    Expr::assign("i", Expr::float(2.0)),
                    Expr::unit(),
                ),
            ]),
        ),
    ]);
    let (result, output) = capture(&program);
    let err = result.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::TypeFault);
    assert_eq!(
        err.kind,
        EvalErrorKind::AssignmentTypeMismatch {
            name: Name::from("i"),
            existing: RuntimeType::Integer,
            assigned: RuntimeType::FloatingPoint,
        }
    );
    assert_eq!(output, "0\n1\n");
}

#[test]
fn errors_display_their_message() {
    let (result, _) = capture(&Expr::add(Expr::int(1), Expr::string("a")));
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "mismatched types for Add: Integer and String");
    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert!(boxed.to_string().contains("Integer"));
}
