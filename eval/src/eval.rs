use std::io::{BufRead, Write};

use ast::ast::{Expr, FunctionTable, IntType, Op, Program, Type};
use ast::env::Env;
use log::{debug, info};

use crate::cast::cast;
use crate::error::RunTimeError;
use crate::value::Value;
use crate::RTResult;

/// Tree-walking evaluator. `GetInput` reads lines from `input`, `Print` writes lines to `output`.
pub struct Interpreter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Interpreter<R, W> {
    pub fn new(input: R, output: W) -> Interpreter<R, W> {
        Interpreter { input, output }
    }

    pub fn eval_program(&mut self, program: &Program) -> RTResult<Value> {
        let functions = program.function_table();
        self.eval_expr(&functions, &Env::empty(), &program.main)
    }

    pub fn eval_expr(
        &mut self,
        functions: &FunctionTable,
        env: &Env<Value>,
        expr: &Expr,
    ) -> RTResult<Value> {
        match expr {
            Expr::Literal(l) => Ok(Value::from(l)),
            Expr::Var(name) => Ok(env.lookup(name)?.clone()),
            Expr::BinOp(l, op, r) => {
                let lv = self.eval_expr(functions, env, l)?;
                let rv = self.eval_expr(functions, env, r)?;
                eval_binop(*op, lv, rv)
            }
            Expr::Not(e) => {
                let b = expect_bool(self.eval_expr(functions, env, e)?)?;
                Ok(Value::Bool(!b))
            }
            Expr::Let(binder, bound, continuation) => {
                let v = self.eval_expr(functions, env, bound)?;
                let new_env = env.extended(binder.as_str(), v);
                self.eval_expr(functions, &new_env, continuation)
            }
            Expr::If(test, ethen, eelse) => {
                if expect_bool(self.eval_expr(functions, env, test)?)? {
                    self.eval_expr(functions, env, ethen)
                } else {
                    self.eval_expr(functions, env, eelse)
                }
            }
            Expr::Call(name, args) => {
                let def = functions
                    .get(name.as_str())
                    .ok_or_else(|| RunTimeError::UndefinedFunction(name.clone()))?;
                if def.params.len() != args.len() {
                    return Err(RunTimeError::ArityMismatch {
                        name: name.clone(),
                        expected: def.params.len(),
                        actual: args.len(),
                    });
                }
                let arg_values = args
                    .iter()
                    .map(|arg| self.eval_expr(functions, env, arg))
                    .collect::<RTResult<Vec<_>>>()?;
                info!("Calling {} with {:?}", name, arg_values);
                // The callee starts from an empty scope, the same one it was checked in.
                let call_env = def
                    .params
                    .iter()
                    .zip(arg_values)
                    .fold(Env::empty(), |call_env, ((param, _), v)| {
                        call_env.extended(param.as_str(), v)
                    });
                self.eval_expr(functions, &call_env, &def.body)
            }
            Expr::Concat(es) => {
                let mut result = String::new();
                for e in es {
                    result.push_str(&expect_string(self.eval_expr(functions, env, e)?)?);
                }
                Ok(Value::String(result))
            }
            Expr::Print(e) => {
                let s = expect_string(self.eval_expr(functions, env, e)?)?;
                writeln!(self.output, "{}", s)?;
                self.output.flush()?;
                Ok(Value::Unit)
            }
            Expr::GetInput => Ok(Value::String(self.read_line()?)),
            Expr::Cast(target, e) => {
                let v = self.eval_expr(functions, env, e)?;
                cast(v, target)
            }
        }
    }

    fn read_line(&mut self) -> RTResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(RunTimeError::EndOfInput);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        debug!("Read input line {:?}", line);
        Ok(line)
    }
}

fn eval_binop(op: Op, lv: Value, rv: Value) -> RTResult<Value> {
    debug!("Applying {} to {} and {}", op, lv, rv);
    Ok(match op {
        Op::Add => Value::Int(expect_int(lv)?.wrapping_add(expect_int(rv)?)),
        Op::Sub => Value::Int(expect_int(lv)?.wrapping_sub(expect_int(rv)?)),
        Op::Mul => Value::Int(expect_int(lv)?.wrapping_mul(expect_int(rv)?)),
        Op::Div => {
            let (l, r) = (expect_int(lv)?, expect_int(rv)?);
            if r == 0 {
                return Err(RunTimeError::DivisionByZero);
            }
            Value::Int(l.wrapping_div(r))
        }
        Op::Mod => {
            let (l, r) = (expect_int(lv)?, expect_int(rv)?);
            if r == 0 {
                return Err(RunTimeError::ModuloByZero);
            }
            Value::Int(l.wrapping_rem(r))
        }
        Op::Gt => Value::Bool(expect_int(lv)? > expect_int(rv)?),
        Op::Lt => Value::Bool(expect_int(lv)? < expect_int(rv)?),
        Op::Eq => Value::Bool(lv == rv),
        Op::And => {
            let (l, r) = (expect_bool(lv)?, expect_bool(rv)?);
            Value::Bool(l && r)
        }
        Op::Or => {
            let (l, r) = (expect_bool(lv)?, expect_bool(rv)?);
            Value::Bool(l || r)
        }
    })
}

fn expect_int(v: Value) -> RTResult<IntType> {
    match v {
        Value::Int(i) => Ok(i),
        found => Err(RunTimeError::TypeError {
            expected: Type::Int,
            found,
        }),
    }
}

fn expect_bool(v: Value) -> RTResult<bool> {
    match v {
        Value::Bool(b) => Ok(b),
        found => Err(RunTimeError::TypeError {
            expected: Type::Bool,
            found,
        }),
    }
}

fn expect_string(v: Value) -> RTResult<String> {
    match v {
        Value::String(s) => Ok(s),
        found => Err(RunTimeError::TypeError {
            expected: Type::String,
            found,
        }),
    }
}
