// src/lib.rs
//
// 任意精度整数による正確な分数演算
//
// Fraction（仮分数）と MixedFraction（帯分数）の2表現を持ち、
// 四則演算・約分・相互変換・小数/百分率への変換を提供する。

pub mod error;
pub mod gcd;
pub mod lcm;
pub mod operator;
pub mod types;
pub mod wasm_api;

pub use error::{FractionError, Result};
pub use gcd::{array_gcd, pairwise_gcd};
pub use lcm::array_lcm;
pub use operator::Operation;
pub use types::fraction::Fraction;
pub use types::json::FractionSummary;
pub use types::mixed_fraction::MixedFraction;
