use std::collections::HashMap;

pub type IntType = i32;

/// Name -> definition lookup shared by the checker and the evaluator.
pub type FunctionTable<'p> = HashMap<&'p str, &'p FnDef>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Int,
    Bool,
    String,
    Unit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(IntType),
    Bool(bool),
    String(String),
    Unit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Gt,
    Lt,
    Eq,
    And,
    Or,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal),
    Var(String),
    BinOp(Box<Expr>, Op, Box<Expr>),
    Not(Box<Expr>),
    /// `let binder = bound in continuation`
    Let(String, Box<Expr>, Box<Expr>),
    If(Box<Expr>, Box<Expr>, Box<Expr>),
    Call(String, Vec<Expr>),
    Concat(Vec<Expr>),
    Print(Box<Expr>),
    GetInput,
    Cast(Type, Box<Expr>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FnDef {
    pub name: String,
    pub params: Vec<(String, Type)>,
    pub return_type: Type,
    pub body: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub functions: Vec<FnDef>,
    pub main: Expr,
}

impl FnDef {
    pub fn new(name: &str, params: &[(&str, Type)], return_type: Type, body: Expr) -> FnDef {
        FnDef {
            name: name.to_string(),
            params: params
                .iter()
                .map(|(p, t)| (p.to_string(), *t))
                .collect(),
            return_type,
            body,
        }
    }
}

impl Program {
    pub fn new(functions: Vec<FnDef>, main: Expr) -> Program {
        Program { functions, main }
    }

    /// Builds the lookup table. A later definition of a name replaces an earlier one.
    pub fn function_table(&self) -> FunctionTable<'_> {
        self.functions
            .iter()
            .map(|def| (def.name.as_str(), def))
            .collect()
    }
}

impl Expr {
    pub fn int(v: IntType) -> Expr {
        Expr::Literal(Literal::Int(v))
    }

    pub fn bool(v: bool) -> Expr {
        Expr::Literal(Literal::Bool(v))
    }

    pub fn string(s: &str) -> Expr {
        Expr::Literal(Literal::String(s.to_string()))
    }

    pub fn unit() -> Expr {
        Expr::Literal(Literal::Unit)
    }

    pub fn var(name: &str) -> Expr {
        Expr::Var(name.to_string())
    }

    pub fn binop(l: Expr, op: Op, r: Expr) -> Expr {
        Expr::BinOp(Box::new(l), op, Box::new(r))
    }

    pub fn not(e: Expr) -> Expr {
        Expr::Not(Box::new(e))
    }

    pub fn let_in(binder: &str, bound: Expr, continuation: Expr) -> Expr {
        Expr::Let(binder.to_string(), Box::new(bound), Box::new(continuation))
    }

    pub fn if_then_else(test: Expr, ethen: Expr, eelse: Expr) -> Expr {
        Expr::If(Box::new(test), Box::new(ethen), Box::new(eelse))
    }

    pub fn call(name: &str, args: Vec<Expr>) -> Expr {
        Expr::Call(name.to_string(), args)
    }

    pub fn concat(es: Vec<Expr>) -> Expr {
        Expr::Concat(es)
    }

    pub fn print(e: Expr) -> Expr {
        Expr::Print(Box::new(e))
    }

    pub fn cast(t: Type, e: Expr) -> Expr {
        Expr::Cast(t, Box::new(e))
    }
}

impl Literal {
    pub fn type_of(&self) -> Type {
        match self {
            Literal::Int(_) => Type::Int,
            Literal::Bool(_) => Type::Bool,
            Literal::String(_) => Type::String,
            Literal::Unit => Type::Unit,
        }
    }
}
