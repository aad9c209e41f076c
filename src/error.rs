// src/error.rs
//
// 分数ライブラリのエラー型定義
// 構築時（文字列の解析）と演算時（ゼロ除算など）のエラーを統一的に管理

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FractionError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FractionError {
    /// 区切り文字（`/` または空白）が見つからない
    #[error("Malformed input: expected the form a/b, got '{0}'")]
    MalformedInput(String),
    /// 整数として解釈できない部分がある
    #[error("Invalid numeral: '{0}'")]
    InvalidNumeral(String),
    #[error("Division by zero")]
    DivisionByZero,
    /// 空の列に対する GCD
    #[error("Empty input")]
    EmptyInput,
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl FractionError {
    pub fn malformed(text: &str) -> Self {
        FractionError::MalformedInput(text.to_string())
    }

    pub fn invalid_numeral(segment: &str) -> Self {
        FractionError::InvalidNumeral(segment.to_string())
    }
}
