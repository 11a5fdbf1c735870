use rust_decimal::Decimal;

/// Expression tree produced by the grammar.
///
/// Leaves are exact decimal constants and named variable references;
/// inner nodes are negations and binary operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    Constant(Decimal),
    Variable(String),
    Negate(Box<Expression>),
    BinaryOp(BinaryOp),
}

/// Binary operator kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
}

/// Binary operation expression
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BinaryOp {
    pub op: BinOpKind,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

impl Expression {
    pub fn constant(value: Decimal) -> Self {
        Expression::Constant(value)
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Expression::Variable(name.into())
    }

    pub fn negate(operand: Expression) -> Self {
        Expression::Negate(Box::new(operand))
    }

    pub fn binary(op: BinOpKind, left: Expression, right: Expression) -> Self {
        Expression::BinaryOp(BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Names of all referenced variables, without duplicates, in the order
    /// they first appear (left to right).
    pub fn variables(&self) -> Vec<&str> {
        let mut names = Vec::new();
        collect_variables(self, &mut names);
        names
    }
}

fn collect_variables<'a>(expr: &'a Expression, names: &mut Vec<&'a str>) {
    match expr {
        Expression::Constant(_) => {}
        Expression::Variable(name) => {
            if !names.contains(&name.as_str()) {
                names.push(name.as_str());
            }
        }
        Expression::Negate(operand) => collect_variables(operand, names),
        Expression::BinaryOp(binop) => {
            collect_variables(&binop.left, names);
            collect_variables(&binop.right, names);
        }
    }
}

impl BinOpKind {
    pub const ALL: [BinOpKind; 12] = [
        BinOpKind::Add,
        BinOpKind::Sub,
        BinOpKind::Mul,
        BinOpKind::Div,
        BinOpKind::Mod,
        BinOpKind::Pow,
        BinOpKind::Eq,
        BinOpKind::NotEq,
        BinOpKind::Lt,
        BinOpKind::Gt,
        BinOpKind::LtEq,
        BinOpKind::GtEq,
    ];

    /// Source spelling of the operator
    pub fn symbol(self) -> &'static str {
        match self {
            BinOpKind::Add => "+",
            BinOpKind::Sub => "-",
            BinOpKind::Mul => "*",
            BinOpKind::Div => "/",
            BinOpKind::Mod => "%",
            BinOpKind::Pow => "**",
            BinOpKind::Eq => "==",
            BinOpKind::NotEq => "!=",
            BinOpKind::Lt => "<",
            BinOpKind::Gt => ">",
            BinOpKind::LtEq => "<=",
            BinOpKind::GtEq => ">=",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<BinOpKind> {
        BinOpKind::ALL.into_iter().find(|kind| kind.symbol() == symbol)
    }

    /// Binding strength; higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            BinOpKind::Eq
            | BinOpKind::NotEq
            | BinOpKind::Lt
            | BinOpKind::Gt
            | BinOpKind::LtEq
            | BinOpKind::GtEq => 1,
            BinOpKind::Add | BinOpKind::Sub => 2,
            BinOpKind::Mul | BinOpKind::Div | BinOpKind::Mod => 3,
            BinOpKind::Pow => 4,
        }
    }

    pub fn is_right_associative(self) -> bool {
        self == BinOpKind::Pow
    }
}
