use ast::ast::{Expr, FnDef, Op, Program, Type};

pub const NAMES: &[&str] = &["greet", "fib", "sum", "parity", "divide"];

pub fn find(name: &str) -> Option<Program> {
    match name {
        "greet" => Some(greet()),
        "fib" => Some(fib()),
        "sum" => Some(sum()),
        "parity" => Some(parity()),
        "divide" => Some(divide()),
        _ => None,
    }
}

/// Asks for a name and greets it.
fn greet() -> Program {
    let main = Expr::let_in(
        "_",
        Expr::print(Expr::string("What is your name?")),
        Expr::let_in(
            "name",
            Expr::GetInput,
            Expr::print(Expr::concat(vec![
                Expr::string("Hello, "),
                Expr::var("name"),
                Expr::string("!"),
            ])),
        ),
    );
    Program::new(vec![], main)
}

fn fib_def() -> FnDef {
    let n = || Expr::var("n");
    FnDef::new(
        "fib",
        &[("n", Type::Int)],
        Type::Int,
        Expr::if_then_else(
            Expr::binop(n(), Op::Lt, Expr::int(2)),
            n(),
            Expr::binop(
                Expr::call("fib", vec![Expr::binop(n(), Op::Sub, Expr::int(1))]),
                Op::Add,
                Expr::call("fib", vec![Expr::binop(n(), Op::Sub, Expr::int(2))]),
            ),
        ),
    )
}

/// Reads `n` and prints the `n`th Fibonacci number.
fn fib() -> Program {
    let main = Expr::let_in(
        "n",
        Expr::cast(Type::Int, Expr::GetInput),
        Expr::print(Expr::concat(vec![
            Expr::string("fib("),
            Expr::cast(Type::String, Expr::var("n")),
            Expr::string(") = "),
            Expr::cast(Type::String, Expr::call("fib", vec![Expr::var("n")])),
        ])),
    );
    Program::new(vec![fib_def()], main)
}

/// Sums numbers read one per line until an empty line.
fn sum() -> Program {
    let loop_body = Expr::let_in(
        "line",
        Expr::GetInput,
        Expr::if_then_else(
            Expr::binop(Expr::var("line"), Op::Eq, Expr::string("")),
            Expr::var("acc"),
            Expr::call(
                "sum_from",
                vec![Expr::binop(
                    Expr::var("acc"),
                    Op::Add,
                    Expr::cast(Type::Int, Expr::var("line")),
                )],
            ),
        ),
    );
    let sum_from = FnDef::new("sum_from", &[("acc", Type::Int)], Type::Int, loop_body);
    Program::new(vec![sum_from], Expr::call("sum_from", vec![Expr::int(0)]))
}

fn parity_def(name: &str, base: bool, other: &str) -> FnDef {
    FnDef::new(
        name,
        &[("n", Type::Int)],
        Type::Bool,
        Expr::if_then_else(
            Expr::binop(Expr::var("n"), Op::Eq, Expr::int(0)),
            Expr::bool(base),
            Expr::call(other, vec![Expr::binop(Expr::var("n"), Op::Sub, Expr::int(1))]),
        ),
    )
}

/// Reads a non-negative number and reports whether it is even.
fn parity() -> Program {
    let main = Expr::cast(
        Type::String,
        Expr::call("even", vec![Expr::cast(Type::Int, Expr::GetInput)]),
    );
    Program::new(
        vec![parity_def("even", true, "odd"), parity_def("odd", false, "even")],
        main,
    )
}

/// Reads two numbers and prints their quotient and remainder.
fn divide() -> Program {
    let read_int = || Expr::cast(Type::Int, Expr::GetInput);
    let show = |e: Expr| Expr::cast(Type::String, e);
    let main = Expr::let_in(
        "a",
        read_int(),
        Expr::let_in(
            "b",
            read_int(),
            Expr::print(Expr::concat(vec![
                show(Expr::binop(Expr::var("a"), Op::Div, Expr::var("b"))),
                Expr::string(" remainder "),
                show(Expr::binop(Expr::var("a"), Op::Mod, Expr::var("b"))),
            ])),
        ),
    );
    Program::new(vec![], main)
}

#[cfg(test)]
mod tests {
    use eval::{Interpreter, RunTimeError, Value};

    use super::*;

    fn run(name: &str, input: &str) -> (Result<Value, RunTimeError>, String) {
        let p = find(name).unwrap();
        typechecker::typecheck(&p).unwrap();
        let mut out = Vec::new();
        let res = Interpreter::new(input.as_bytes(), &mut out).eval_program(&p);
        (res, String::from_utf8(out).unwrap())
    }

    #[test]
    fn every_demo_typechecks() {
        for name in NAMES {
            assert!(typechecker::typecheck(&find(name).unwrap()).is_ok(), "{}", name);
        }
        assert!(find("nope").is_none());
    }

    #[test]
    fn greet() {
        let (res, out) = run("greet", "Ada\n");
        assert_eq!(res.unwrap(), Value::Unit);
        assert_eq!(out, "What is your name?\nHello, Ada!\n");
    }

    #[test]
    fn fib() {
        let (_, out) = run("fib", "12\n");
        assert_eq!(out, "fib(12) = 144\n");
        let (res, _) = run("fib", "twelve\n");
        assert!(matches!(res, Err(RunTimeError::CastFailure { .. })));
    }

    #[test]
    fn sum() {
        let (res, _) = run("sum", "1\n2\n-10\n\n");
        assert_eq!(res.unwrap(), Value::Int(-7));
        let (res, _) = run("sum", "1\n2\n");
        assert!(matches!(res, Err(RunTimeError::EndOfInput)));
    }

    #[test]
    fn parity() {
        assert_eq!(run("parity", "7\n").0.unwrap(), Value::String("false".to_string()));
        assert_eq!(run("parity", "10\n").0.unwrap(), Value::String("true".to_string()));
    }

    #[test]
    fn divide() {
        let (_, out) = run("divide", "17\n5\n");
        assert_eq!(out, "3 remainder 2\n");
        let (res, _) = run("divide", "17\n0\n");
        assert!(matches!(res, Err(RunTimeError::DivisionByZero)));
    }
}
