use std::collections::hash_map::Entry;

use ast::ast::{Expr, FnDef, FunctionTable, Op, Program, Type};
use ast::env::Env;
use log::{debug, info};

use crate::error::TypingError;
use crate::TCResult;

pub(crate) fn typecheck_program(program: &Program) -> TCResult<Type> {
    let functions = declare_functions(program)?;
    for def in &program.functions {
        check_function(&functions, def)?;
    }
    let main_type = infer_type(&functions, &Env::empty(), &program.main)?;
    info!("Main expression has type {}", main_type);
    Ok(main_type)
}

/// Builds the function table, rejecting a name that is defined twice.
pub fn declare_functions(program: &Program) -> TCResult<FunctionTable<'_>> {
    let mut functions = FunctionTable::new();
    for def in &program.functions {
        match functions.entry(def.name.as_str()) {
            Entry::Occupied(_) => return Err(TypingError::MultipleDefinitions(def.name.clone())),
            Entry::Vacant(slot) => {
                slot.insert(def);
            }
        }
    }
    Ok(functions)
}

/// Checks a body against its signature. The body sees its parameters and nothing else.
pub fn check_function(functions: &FunctionTable, def: &FnDef) -> TCResult<()> {
    info!("Typechecking function {}", def.name);
    let env = def
        .params
        .iter()
        .fold(Env::empty(), |env, (name, t)| env.extended(name.as_str(), *t));
    let body_type = infer_type(functions, &env, &def.body)?;
    types_match(&def.return_type, &body_type)
}

fn types_match(expected: &Type, actual: &Type) -> TCResult<()> {
    if expected == actual {
        return Ok(());
    }
    Err(TypingError::TypeMismatch {
        expected: *expected,
        actual: *actual,
    })
}

pub fn infer_type(functions: &FunctionTable, env: &Env<Type>, e: &Expr) -> TCResult<Type> {
    match e {
        Expr::Literal(l) => Ok(l.type_of()),
        Expr::Var(name) => Ok(*env.lookup(name)?),
        Expr::BinOp(l, op, r) => {
            let l_type = infer_type(functions, env, l)?;
            let r_type = infer_type(functions, env, r)?;
            match op {
                Op::Add | Op::Sub | Op::Mul | Op::Div | Op::Mod => {
                    types_match(&Type::Int, &l_type)?;
                    types_match(&Type::Int, &r_type)?;
                    Ok(Type::Int)
                }
                Op::Gt | Op::Lt => {
                    types_match(&Type::Int, &l_type)?;
                    types_match(&Type::Int, &r_type)?;
                    Ok(Type::Bool)
                }
                Op::Eq => {
                    types_match(&l_type, &r_type)?;
                    Ok(Type::Bool)
                }
                Op::And | Op::Or => {
                    types_match(&Type::Bool, &l_type)?;
                    types_match(&Type::Bool, &r_type)?;
                    Ok(Type::Bool)
                }
            }
        }
        Expr::Not(e) => {
            let t = infer_type(functions, env, e)?;
            types_match(&Type::Bool, &t)?;
            Ok(Type::Bool)
        }
        Expr::Let(binder, bound, continuation) => {
            let bound_type = infer_type(functions, env, bound)?;
            let new_env = env.extended(binder.as_str(), bound_type);
            infer_type(functions, &new_env, continuation)
        }
        Expr::If(test, ethen, eelse) => {
            let test_type = infer_type(functions, env, test)?;
            types_match(&Type::Bool, &test_type)?;
            let then_type = infer_type(functions, env, ethen)?;
            let else_type = infer_type(functions, env, eelse)?;
            types_match(&then_type, &else_type)?;
            Ok(then_type)
        }
        Expr::Call(name, args) => {
            let def = functions
                .get(name.as_str())
                .ok_or_else(|| TypingError::UndefinedFunction(name.clone()))?;
            if def.params.len() != args.len() {
                return Err(TypingError::ArityMismatch {
                    name: name.clone(),
                    expected: def.params.len(),
                    actual: args.len(),
                });
            }
            for ((_, param_type), arg) in def.params.iter().zip(args) {
                let arg_type = infer_type(functions, env, arg)?;
                types_match(param_type, &arg_type)?;
            }
            Ok(def.return_type)
        }
        Expr::Concat(es) => {
            for e in es {
                let t = infer_type(functions, env, e)?;
                types_match(&Type::String, &t)?;
            }
            Ok(Type::String)
        }
        Expr::Print(e) => {
            let t = infer_type(functions, env, e)?;
            types_match(&Type::String, &t)?;
            Ok(Type::Unit)
        }
        Expr::GetInput => Ok(Type::String),
        Expr::Cast(target, e) => {
            // Only the operand is checked; whether the conversion succeeds is a runtime matter.
            let from = infer_type(functions, env, e)?;
            debug!("Trusting cast from {} to {}", from, target);
            Ok(*target)
        }
    }
}
