// src/operator.rs
//
// 四則演算の種類

use crate::error::FractionError;
use std::fmt;
use std::str::FromStr;

/// 分数同士の二項演算
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// 文字列セレクタ名
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// 名前から演算を引く。未知の名前は `None`
    pub fn lookup(name: &str) -> Option<Operation> {
        Operation::ALL.into_iter().find(|op| op.name() == name)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Operation {
    type Err = FractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::lookup(s).ok_or_else(|| FractionError::UnknownOperation(s.to_string()))
    }
}
