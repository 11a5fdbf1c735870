pub mod expression;

pub use expression::{BinOpKind, BinaryOp, Expression};
