use crate::utils::error::{DemoError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DemoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(DemoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_ordered_pair<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    start: T,
    end: T,
) -> Result<()> {
    if start > end {
        return Err(DemoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("[{}, {}]", start, end),
            reason: "Start must not be greater than end".to_string(),
        });
    }
    Ok(())
}

pub fn validate_max_len(field_name: &str, len: usize, max_len: usize) -> Result<()> {
    if len > max_len {
        return Err(DemoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: len.to_string(),
            reason: format!("At most {} entries are allowed", max_len),
        });
    }
    Ok(())
}
