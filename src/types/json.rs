// src/types/json.rs
//
// serde 対応と JSON 要約
//
// Fraction / MixedFraction は表示形式の文字列としてシリアライズする。
// 任意精度の整数を JSON の数値に押し込むと精度が落ちるため。

use super::fraction::Fraction;
use super::mixed_fraction::MixedFraction;
use crate::error::{FractionError, Result};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for Fraction {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Fraction {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Fraction::parse(&text).map_err(de::Error::custom)
    }
}

impl Serialize for MixedFraction {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MixedFraction {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        MixedFraction::parse_text(&text).map_err(de::Error::custom)
    }
}

/// 1つの分数についての各種表現をまとめたもの
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FractionSummary {
    pub fraction: Fraction,
    pub simplest: Fraction,
    pub mixed: MixedFraction,
    pub decimal: f64,
    pub percentage: f64,
    pub proper: bool,
}

impl FractionSummary {
    pub fn of(fraction: &Fraction) -> Self {
        FractionSummary {
            fraction: fraction.clone(),
            simplest: fraction.to_simplest_form(),
            mixed: fraction.to_mixed_fraction(),
            decimal: fraction.to_decimal(),
            percentage: fraction.to_percentage(),
            proper: fraction.is_proper(),
        }
    }
}

pub fn to_json(fraction: &Fraction) -> Result<String> {
    serde_json::to_string(&FractionSummary::of(fraction))
        .map_err(|e| FractionError::Serialization(e.to_string()))
}
