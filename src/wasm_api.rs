// src/wasm_api.rs
//
// JavaScript 向けのバインディング
//
// 入出力はすべて表示形式の文字列。エラーはメッセージ文字列として返す。
// 未知の演算名は例外ではなく undefined（None）になる。

use crate::types::fraction::Fraction;
use crate::types::json;
use crate::types::mixed_fraction::MixedFraction;
use wasm_bindgen::prelude::*;

fn parse_fraction(text: &str) -> Result<Fraction, String> {
    Fraction::parse(text).map_err(|e| e.to_string())
}

fn parse_mixed(text: &str) -> Result<MixedFraction, String> {
    MixedFraction::parse_text(text).map_err(|e| e.to_string())
}

/// 分数同士の演算: `fraction_operation("1/2", "1/3", "add", true)` → `"5/6"`
#[wasm_bindgen]
pub fn fraction_operation(
    a: &str,
    b: &str,
    operation: &str,
    simplify: bool,
) -> Result<Option<String>, String> {
    let a = parse_fraction(a)?;
    let b = parse_fraction(b)?;
    Fraction::operation_named(&a, &b, operation, simplify)
        .map(|result| result.map(|f| f.render()))
        .map_err(|e| e.to_string())
}

/// 帯分数同士の演算: `mixed_fraction_operation("4 1/2", "1 1/3", "add", true)` → `"5 5/6"`
#[wasm_bindgen]
pub fn mixed_fraction_operation(
    a: &str,
    b: &str,
    operation: &str,
    simplify: bool,
) -> Result<Option<String>, String> {
    let a = parse_mixed(a)?;
    let b = parse_mixed(b)?;
    MixedFraction::operation_named(&a, &b, operation, simplify)
        .map(|result| result.map(|m| m.render()))
        .map_err(|e| e.to_string())
}

#[wasm_bindgen]
pub fn simplify_fraction(text: &str) -> Result<String, String> {
    Ok(parse_fraction(text)?.to_simplest_form().render())
}

#[wasm_bindgen]
pub fn fraction_to_mixed(text: &str) -> Result<String, String> {
    Ok(parse_fraction(text)?.to_mixed_fraction().render())
}

#[wasm_bindgen]
pub fn mixed_to_improper(text: &str) -> Result<String, String> {
    Ok(parse_mixed(text)?.to_improper_fraction().render())
}

#[wasm_bindgen]
pub fn fraction_to_decimal(text: &str) -> Result<f64, String> {
    Ok(parse_fraction(text)?.to_decimal())
}

#[wasm_bindgen]
pub fn fraction_to_percentage(text: &str) -> Result<f64, String> {
    Ok(parse_fraction(text)?.to_percentage())
}

/// 各種表現をまとめた JSON 文字列
#[wasm_bindgen]
pub fn describe_fraction(text: &str) -> Result<String, String> {
    let fraction = parse_fraction(text)?;
    json::to_json(&fraction).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_operation() {
        assert_eq!(fraction_operation("1/2", "1/3", "add", true), Ok(Some("5/6".to_string())));
        assert_eq!(fraction_operation("1/2", "1/3", "add", false), Ok(Some("5/6".to_string())));
        assert_eq!(fraction_operation("1/2", "1/3", "pow", true), Ok(None));
    }

    #[test]
    fn test_fraction_operation_errors() {
        assert_eq!(
            fraction_operation("1/2", "0/3", "divide", true),
            Err("Division by zero".to_string())
        );
        assert_eq!(
            fraction_operation("12", "1/3", "add", true),
            Err("Malformed input: expected the form a/b, got '12'".to_string())
        );
    }

    #[test]
    fn test_mixed_fraction_operation() {
        assert_eq!(
            mixed_fraction_operation("4 1/2", "1 1/3", "add", true),
            Ok(Some("5 5/6".to_string()))
        );
        assert_eq!(mixed_fraction_operation("4 1/2", "1 1/3", "mod", true), Ok(None));
    }

    #[test]
    fn test_conversions() {
        assert_eq!(simplify_fraction("10/-4"), Ok("-5/2".to_string()));
        assert_eq!(fraction_to_mixed("9/2"), Ok("4 1/2".to_string()));
        assert_eq!(mixed_to_improper("1 1/2"), Ok("3/2".to_string()));
        assert_eq!(fraction_to_decimal("1/2"), Ok(0.5));
        assert_eq!(fraction_to_percentage("1/8"), Ok(12.5));
    }

    #[test]
    fn test_describe_fraction() {
        let text = describe_fraction("1/2").unwrap();
        assert!(text.contains("\"simplest\":\"1/2\""));
        assert!(text.contains("\"proper\":true"));
        assert!(describe_fraction("1/0").is_err());
    }
}
