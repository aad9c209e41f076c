// src/types/mod.rs
//
// 有理数の2つの表現
//
// | 表現          | 内部表現                     | 表示     |
// |---------------|------------------------------|----------|
// | Fraction      | numerator / denominator      | 9/2      |
// | MixedFraction | whole + numerator / denom.   | 4 1/2    |
//
// 両者は仮分数 ⇔ 帯分数の変換で相互に行き来できる。
// 整数はすべて BigInt（任意精度）。

pub mod display;
pub mod fraction;
pub mod json;
pub mod mixed_fraction;

use crate::error::{FractionError, Result};
use num_bigint::BigInt;
use std::str::FromStr;

/// `"N/D"` を `/` の位置で分割する
pub(crate) fn split_fraction(text: &str) -> Result<(&str, &str)> {
    text.split_once('/')
        .ok_or_else(|| FractionError::malformed(text))
}

/// 符号付き整数リテラルを読む（前後の空白は許容）
///
/// 受け付けるのは `[+-]?[0-9]+` のみ。`BigInt::from_str` が許す `_` 区切りは拒否する。
pub(crate) fn parse_integer(segment: &str) -> Result<BigInt> {
    let literal = segment.trim();
    let digits = literal.strip_prefix(['+', '-']).unwrap_or(literal);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FractionError::invalid_numeral(segment));
    }
    BigInt::from_str(literal).map_err(|_| FractionError::invalid_numeral(segment))
}
