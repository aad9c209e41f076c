// src/gcd.rs
//
// 最大公約数（GCD / HCF）
// ユークリッドの互除法による2数のGCDと、配列全体への畳み込み

use crate::error::{FractionError, Result};
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

/// 2数の最大公約数
///
/// `gcd(a, b) = b` (a == 0), それ以外は `gcd(b mod a, a)`。
/// 剰余は切り捨て除算の符号規則に従うため、途中の値は負になり得る。
/// 結果は常に絶対値で返す。
pub fn pairwise_gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let mut a = a.clone();
    let mut b = b.clone();
    while !a.is_zero() {
        let r = &b % &a;
        b = a;
        a = r;
    }
    b.abs()
}

/// 配列の最大公約数
///
/// 途中で 1 に達した時点で打ち切る（1 は吸収元）。
pub fn array_gcd(values: &[BigInt]) -> Result<BigInt> {
    let (first, rest) = values.split_first().ok_or(FractionError::EmptyInput)?;
    let mut result = first.abs();
    for value in rest {
        if result.is_one() {
            break;
        }
        result = pairwise_gcd(value, &result);
    }
    Ok(result)
}
