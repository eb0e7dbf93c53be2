use crate::errors::{CrmError, Result};

/// 非负小整数的取值上限
pub const POSITIVE_SMALL_MAX: i32 = 32767;

/// 必填字段不能为空白
pub fn validate_required(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CrmError::validation(format!("{field} 不能为空")));
    }
    Ok(())
}

/// 按字符数校验最大长度（与 VARCHAR(n) 语义一致）
pub fn validate_max_chars(field: &str, value: &str, max: usize) -> Result<()> {
    let len = value.chars().count();
    if len > max {
        return Err(CrmError::validation(format!(
            "{field} 长度为 {len}，超过上限 {max}"
        )));
    }
    Ok(())
}

/// 必填且有长度上限的字符串字段
pub fn validate_char_field(field: &str, value: &str, max: usize) -> Result<()> {
    validate_required(field, value)?;
    validate_max_chars(field, value, max)
}

pub fn validate_optional_char_field(field: &str, value: Option<&str>, max: usize) -> Result<()> {
    match value {
        Some(v) => validate_max_chars(field, v, max),
        None => Ok(()),
    }
}

/// 非负小整数：0 ..= 32767
pub fn validate_positive_small(field: &str, value: i32) -> Result<()> {
    if !(0..=POSITIVE_SMALL_MAX).contains(&value) {
        return Err(CrmError::validation(format!(
            "{field} 必须在 0 到 {POSITIVE_SMALL_MAX} 之间，实际为 {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert!(validate_required("qq", "12345").is_ok());
        assert!(validate_required("qq", "   ").is_err());
    }

    #[test]
    fn test_max_chars_counts_characters() {
        // 32 个汉字在字节上远超 32，但按字符数合法
        let name = "测".repeat(32);
        assert!(validate_max_chars("name", &name, 32).is_ok());
        let err = validate_max_chars("name", &"测".repeat(33), 32).unwrap_err();
        assert_eq!(err.code(), "E006");
    }

    #[test]
    fn test_optional_char_field() {
        assert!(validate_optional_char_field("phone", None, 64).is_ok());
        assert!(validate_optional_char_field("phone", Some(""), 64).is_ok());
        assert!(validate_optional_char_field("phone", Some(&"1".repeat(65)), 64).is_err());
    }

    #[test]
    fn test_positive_small() {
        assert!(validate_positive_small("price", 0).is_ok());
        assert!(validate_positive_small("price", 32767).is_ok());
        assert!(validate_positive_small("price", -1).is_err());
        assert!(validate_positive_small("price", 32768).is_err());
    }
}
