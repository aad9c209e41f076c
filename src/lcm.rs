// src/lcm.rs
//
// 最小公倍数（LCM）
// 試し割りによる計算。GCD を使う `a*b/gcd(a,b)` ではなく、
// 除数 2, 3, 4, ... で全要素を順に割っていき、割れた除数を積み上げる。

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use tracing::trace;

/// 配列の最小公倍数
///
/// - 0 を含む場合は 0 を返す（未定義扱いにはしない）
/// - 負の要素は絶対値で扱う
/// - 空の配列は 1
pub fn array_lcm(values: &[BigInt]) -> BigInt {
    let mut elements = values.to_vec();
    let mut lcm = BigInt::one();
    let mut divisor = BigInt::from(2);

    loop {
        let mut done = 0usize;
        let mut divisible = false;

        for element in elements.iter_mut() {
            if element.is_zero() {
                trace!("lcm: zero element, result is 0");
                return BigInt::zero();
            }
            if element.is_negative() {
                *element = -&*element;
            }
            if element.is_one() {
                done += 1;
            }
            if (&*element % &divisor).is_zero() {
                divisible = true;
                *element /= &divisor;
            }
        }

        #[cfg(feature = "trace-lcm")]
        trace!(%divisor, divisible, done, ?elements, "lcm sweep");

        if divisible {
            lcm *= &divisor;
        } else {
            // 除数の2乗が残りのどの要素よりも大きければ、1 以外の残りはすべて素数
            if done < elements.len() && remaining_are_prime(&elements, &divisor) {
                lcm *= product_of_distinct(&elements);
                break;
            }
            divisor += 1;
        }

        if done == elements.len() {
            break;
        }
    }

    trace!(%lcm, "lcm computed");
    lcm
}

fn remaining_are_prime(elements: &[BigInt], divisor: &BigInt) -> bool {
    let square = divisor * divisor;
    elements.iter().all(|e| *e < square)
}

fn product_of_distinct(elements: &[BigInt]) -> BigInt {
    let mut seen: Vec<&BigInt> = Vec::new();
    for e in elements.iter().filter(|e| !e.is_one()) {
        if !seen.contains(&e) {
            seen.push(e);
        }
    }
    seen.into_iter().product()
}
