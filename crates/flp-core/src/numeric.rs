//! 地區格式數值解析

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::{FlpError, Result};

/// 解析地區格式的十進位字串
///
/// 輸入表中的頻率與單位成本可能以小數逗號表示（例如 `"1,5"`），
/// 解析前先正規化為小數點。無法解析的值必須回報錯誤，
/// 不得默默變成 0。
pub fn parse_locale_decimal(raw: &str) -> Result<Decimal> {
    let normalized = raw.trim().replace(',', ".");
    Decimal::from_str(&normalized).map_err(|_| FlpError::MalformedNumber(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_comma() {
        // 小數逗號正規化為小數點
        assert_eq!(parse_locale_decimal("1,5").unwrap(), Decimal::new(15, 1));
        assert_eq!(parse_locale_decimal("0,25").unwrap(), Decimal::new(25, 2));
    }

    #[test]
    fn test_parse_decimal_point() {
        assert_eq!(parse_locale_decimal("2.75").unwrap(), Decimal::new(275, 2));
        assert_eq!(parse_locale_decimal("10").unwrap(), Decimal::from(10));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_locale_decimal(" 3,0 ").unwrap(), Decimal::from(3));
    }

    #[test]
    fn test_malformed_value_fails() {
        // 非數值必須回報錯誤，不能變成 0
        let err = parse_locale_decimal("abc").unwrap_err();
        assert!(matches!(err, FlpError::MalformedNumber(v) if v == "abc"));
    }

    #[test]
    fn test_empty_value_fails() {
        assert!(matches!(
            parse_locale_decimal(""),
            Err(FlpError::MalformedNumber(_))
        ));
    }
}
