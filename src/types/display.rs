// src/types/display.rs
//
// 分数の文字列表現
//
// 表示は約分しない: Fraction は "N/D"、MixedFraction は "W N/D"。
// FromStr はこの表示形式をそのまま読み戻す。

use super::fraction::Fraction;
use super::mixed_fraction::MixedFraction;
use crate::error::FractionError;
use std::fmt;
use std::str::FromStr;

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl fmt::Display for MixedFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}/{}", self.whole, self.numerator, self.denominator)
    }
}

impl FromStr for Fraction {
    type Err = FractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Fraction::parse(s)
    }
}

impl FromStr for MixedFraction {
    type Err = FractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MixedFraction::parse_text(s)
    }
}
