// src/types/mixed_fraction.rs
//
// 帯分数 `W N/D`
//
// 演算はすべて仮分数に変換して Fraction に委譲し、結果を帯分数に戻す。

use super::fraction::Fraction;
use super::{parse_integer, split_fraction};
use crate::error::{FractionError, Result};
use crate::operator::Operation;
use num_bigint::BigInt;
use num_traits::Zero;
use tracing::debug;

/// 帯分数（整数部 + 分数部）
///
/// 分数部が真分数であることは保証しない。
/// `to_simplest_form` も分数部を約分するだけで、整数部への繰り上げは行わない。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MixedFraction {
    pub(crate) whole: BigInt,
    pub(crate) numerator: BigInt,
    pub(crate) denominator: BigInt,
}

impl MixedFraction {
    pub fn new(whole: BigInt, numerator: BigInt, denominator: BigInt) -> Result<Self> {
        if denominator.is_zero() {
            return Err(FractionError::DivisionByZero);
        }
        Ok(MixedFraction {
            whole,
            numerator,
            denominator,
        })
    }

    /// 整数部と `"N/D"` 形式の分数部から生成
    pub fn parse(whole: BigInt, fraction: &str) -> Result<Self> {
        let (numerator, denominator) = split_fraction(fraction)?;
        MixedFraction::new(whole, parse_integer(numerator)?, parse_integer(denominator)?)
    }

    /// `"W N/D"` 形式の文字列から生成
    pub fn parse_text(text: &str) -> Result<Self> {
        let (whole, fraction) = text
            .trim()
            .split_once(char::is_whitespace)
            .ok_or_else(|| FractionError::malformed(text))?;
        MixedFraction::parse(parse_integer(whole)?, fraction.trim_start())
    }

    pub fn whole(&self) -> &BigInt {
        &self.whole
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    /// 仮分数へ変換: (W*D + N) / D
    pub fn to_improper_fraction(&self) -> Fraction {
        Fraction {
            numerator: &self.whole * &self.denominator + &self.numerator,
            denominator: self.denominator.clone(),
        }
    }

    pub fn to_decimal(&self) -> f64 {
        self.to_improper_fraction().to_decimal()
    }

    pub fn to_percentage(&self) -> f64 {
        self.to_improper_fraction().to_percentage()
    }

    /// 分数部だけを既約にする（整数部はそのまま）
    pub fn to_simplest_form(&self) -> MixedFraction {
        let fraction = Fraction {
            numerator: self.numerator.clone(),
            denominator: self.denominator.clone(),
        }
        .to_simplest_form();
        let (numerator, denominator) = fraction.into_parts();
        MixedFraction {
            whole: self.whole.clone(),
            numerator,
            denominator,
        }
    }

    fn simplify_if(self, simplify: bool) -> MixedFraction {
        if simplify {
            self.to_simplest_form()
        } else {
            self
        }
    }

    /// 表現によらない値としての等価判定
    pub fn value_eq(&self, other: &MixedFraction) -> bool {
        self.to_improper_fraction()
            .value_eq(&other.to_improper_fraction())
    }

    // ========================================================================
    // 四則演算（仮分数に変換して委譲）
    // ========================================================================
    //
    // 仮分数での演算は常に約分する。simplify は帯分数に戻した後の約分だけを制御する。

    pub fn add(&self, other: &MixedFraction) -> MixedFraction {
        self.add_with(other, true)
    }

    pub fn add_with(&self, other: &MixedFraction, simplify: bool) -> MixedFraction {
        self.to_improper_fraction()
            .add(&other.to_improper_fraction())
            .to_mixed_fraction()
            .simplify_if(simplify)
    }

    pub fn subtract(&self, other: &MixedFraction) -> MixedFraction {
        self.subtract_with(other, true)
    }

    pub fn subtract_with(&self, other: &MixedFraction, simplify: bool) -> MixedFraction {
        self.to_improper_fraction()
            .subtract(&other.to_improper_fraction())
            .to_mixed_fraction()
            .simplify_if(simplify)
    }

    pub fn multiply(&self, other: &MixedFraction) -> MixedFraction {
        self.multiply_with(other, true)
    }

    pub fn multiply_with(&self, other: &MixedFraction, simplify: bool) -> MixedFraction {
        self.to_improper_fraction()
            .multiply(&other.to_improper_fraction())
            .to_mixed_fraction()
            .simplify_if(simplify)
    }

    pub fn divide(&self, other: &MixedFraction) -> Result<MixedFraction> {
        self.divide_with(other, true)
    }

    pub fn divide_with(&self, other: &MixedFraction, simplify: bool) -> Result<MixedFraction> {
        let quotient = self
            .to_improper_fraction()
            .divide(&other.to_improper_fraction())?;
        Ok(quotient.to_mixed_fraction().simplify_if(simplify))
    }

    pub fn operation(
        a: &MixedFraction,
        b: &MixedFraction,
        operation: Operation,
        simplify: bool,
    ) -> Result<MixedFraction> {
        debug!(%a, %b, %operation, simplify, "mixed fraction operation");
        match operation {
            Operation::Add => Ok(a.add_with(b, simplify)),
            Operation::Subtract => Ok(a.subtract_with(b, simplify)),
            Operation::Multiply => Ok(a.multiply_with(b, simplify)),
            Operation::Divide => a.divide_with(b, simplify),
        }
    }

    /// 未知の名前は `Ok(None)`
    pub fn operation_named(
        a: &MixedFraction,
        b: &MixedFraction,
        name: &str,
        simplify: bool,
    ) -> Result<Option<MixedFraction>> {
        match Operation::lookup(name) {
            Some(operation) => MixedFraction::operation(a, b, operation, simplify).map(Some),
            None => {
                debug!(name, "unknown mixed fraction operation");
                Ok(None)
            }
        }
    }
}

impl From<&Fraction> for MixedFraction {
    fn from(fraction: &Fraction) -> Self {
        fraction.to_mixed_fraction()
    }
}

impl From<&MixedFraction> for Fraction {
    fn from(mixed: &MixedFraction) -> Self {
        mixed.to_improper_fraction()
    }
}
