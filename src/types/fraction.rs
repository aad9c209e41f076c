// src/types/fraction.rs

use super::mixed_fraction::MixedFraction;
use super::{parse_integer, split_fraction};
use crate::error::{FractionError, Result};
use crate::gcd::pairwise_gcd;
use crate::lcm::array_lcm;
use crate::operator::Operation;
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{Signed, ToPrimitive, Zero};
use tracing::{debug, trace};

/// 分数 `numerator/denominator`
///
/// 分母は常に 0 以外。約分と符号の正規化は `to_simplest_form` を通したときだけ行われ、
/// 演算結果も `simplify = false` なら約分されないまま返る。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fraction {
    pub(crate) numerator: BigInt,
    pub(crate) denominator: BigInt,
}

impl Fraction {
    pub fn new(numerator: BigInt, denominator: BigInt) -> Result<Self> {
        if denominator.is_zero() {
            return Err(FractionError::DivisionByZero);
        }
        Ok(Fraction { numerator, denominator })
    }

    /// `"N/D"` 形式の文字列から生成
    pub fn parse(text: &str) -> Result<Self> {
        let (numerator, denominator) = split_fraction(text)?;
        Fraction::new(parse_integer(numerator)?, parse_integer(denominator)?)
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numerator, self.denominator)
    }

    /// 約分せずに `"N/D"` を返す
    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    // ========================================================================
    // 変換
    // ========================================================================

    /// 帯分数へ変換（ゼロ方向への切り捨て除算）
    ///
    /// 商が整数部、余りが分子になる。余りの符号は分子と同じ。
    pub fn to_mixed_fraction(&self) -> MixedFraction {
        let (quotient, remainder) = self.numerator.div_rem(&self.denominator);
        MixedFraction {
            whole: quotient,
            numerator: remainder,
            denominator: self.denominator.clone(),
        }
    }

    /// 最も近い f64 へ変換
    ///
    /// 整数除算してから変換するのではなく、浮動小数点として除算する（1/2 は 0.5）。
    pub fn to_decimal(&self) -> f64 {
        let (numerator, denominator) = if self.denominator.is_negative() {
            (-&self.numerator, -&self.denominator)
        } else {
            (self.numerator.clone(), self.denominator.clone())
        };
        // BigInt の比では to_f64 は常に Some（範囲外は ±inf か 0 に丸まる）
        Ratio::new_raw(numerator, denominator)
            .to_f64()
            .unwrap_or_default()
    }

    pub fn to_percentage(&self) -> f64 {
        self.to_decimal() * 100.0
    }

    /// 既約分数（分母は正）
    pub fn to_simplest_form(&self) -> Fraction {
        let gcd = pairwise_gcd(&self.numerator.abs(), &self.denominator.abs());
        let mut numerator = &self.numerator / &gcd;
        let mut denominator = &self.denominator / &gcd;
        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }
        trace!(from = %self, %numerator, %denominator, "simplified");
        Fraction { numerator, denominator }
    }

    /// 逆数。分子が 0 の場合はゼロ除算
    pub fn reciprocal(&self) -> Result<Fraction> {
        Fraction::new(self.denominator.clone(), self.numerator.clone())
    }

    fn simplify_if(self, simplify: bool) -> Fraction {
        if simplify {
            self.to_simplest_form()
        } else {
            self
        }
    }

    // ========================================================================
    // 分類
    // ========================================================================

    /// 真分数: |分子| < |分母|
    pub fn is_proper(&self) -> bool {
        self.numerator.abs() < self.denominator.abs()
    }

    pub fn is_improper(&self) -> bool {
        !self.is_proper()
    }

    /// 同分母かどうか
    pub fn is_like(a: &Fraction, b: &Fraction) -> bool {
        a.denominator == b.denominator
    }

    pub fn is_unlike(a: &Fraction, b: &Fraction) -> bool {
        a.denominator != b.denominator
    }

    /// 表現によらない値としての等価判定: a/b == c/d ⇔ a*d == c*b
    pub fn value_eq(&self, other: &Fraction) -> bool {
        &self.numerator * &other.denominator == &other.numerator * &self.denominator
    }

    // ========================================================================
    // 四則演算
    // ========================================================================

    /// 加算（約分あり）
    pub fn add(&self, other: &Fraction) -> Fraction {
        self.add_with(other, true)
    }

    /// 加算: 分母の最小公倍数で通分する
    pub fn add_with(&self, other: &Fraction, simplify: bool) -> Fraction {
        let (left, right, lcm) = self.scale_to_common(other);
        Fraction {
            numerator: left + right,
            denominator: lcm,
        }
        .simplify_if(simplify)
    }

    /// 減算（約分あり）
    pub fn subtract(&self, other: &Fraction) -> Fraction {
        self.subtract_with(other, true)
    }

    pub fn subtract_with(&self, other: &Fraction, simplify: bool) -> Fraction {
        let (left, right, lcm) = self.scale_to_common(other);
        Fraction {
            numerator: left - right,
            denominator: lcm,
        }
        .simplify_if(simplify)
    }

    /// 乗算（約分あり）
    pub fn multiply(&self, other: &Fraction) -> Fraction {
        self.multiply_with(other, true)
    }

    pub fn multiply_with(&self, other: &Fraction, simplify: bool) -> Fraction {
        Fraction {
            numerator: &self.numerator * &other.numerator,
            denominator: &self.denominator * &other.denominator,
        }
        .simplify_if(simplify)
    }

    /// 除算（約分あり）
    pub fn divide(&self, other: &Fraction) -> Result<Fraction> {
        self.divide_with(other, true)
    }

    /// 除算: 逆数との乗算
    pub fn divide_with(&self, other: &Fraction, simplify: bool) -> Result<Fraction> {
        let reciprocal = other.reciprocal()?;
        Ok(self.multiply_with(&reciprocal, simplify))
    }

    /// 演算の種類で振り分ける
    pub fn operation(
        a: &Fraction,
        b: &Fraction,
        operation: Operation,
        simplify: bool,
    ) -> Result<Fraction> {
        debug!(%a, %b, %operation, simplify, "fraction operation");
        match operation {
            Operation::Add => Ok(a.add_with(b, simplify)),
            Operation::Subtract => Ok(a.subtract_with(b, simplify)),
            Operation::Multiply => Ok(a.multiply_with(b, simplify)),
            Operation::Divide => a.divide_with(b, simplify),
        }
    }

    /// 名前（"add", "subtract", "multiply", "divide"）で振り分ける
    ///
    /// 未知の名前はエラーではなく `Ok(None)`。
    pub fn operation_named(
        a: &Fraction,
        b: &Fraction,
        name: &str,
        simplify: bool,
    ) -> Result<Option<Fraction>> {
        match Operation::lookup(name) {
            Some(operation) => Fraction::operation(a, b, operation, simplify).map(Some),
            None => {
                debug!(name, "unknown fraction operation");
                Ok(None)
            }
        }
    }

    /// 両方の分子を分母の LCM に合わせて拡大する
    fn scale_to_common(&self, other: &Fraction) -> (BigInt, BigInt, BigInt) {
        let lcm = array_lcm(&[self.denominator.clone(), other.denominator.clone()]);
        let left = &self.numerator * (&lcm / &self.denominator);
        let right = &other.numerator * (&lcm / &other.denominator);
        (left, right, lcm)
    }
}

#[cfg(test)]
mod tests;
