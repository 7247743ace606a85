use crate::domain::ports::Console;
use crate::utils::error::{DemoError, Result};
use chrono::NaiveDateTime;
use rand::Rng;
use std::fmt::Write;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 32 位元整數加法，溢位時以二補數環繞
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

pub fn checked_add(a: i32, b: i32) -> Result<i32> {
    a.checked_add(b).ok_or_else(|| DemoError::OverflowError {
        operation: format!("add({}, {})", a, b),
    })
}

pub fn multiply(x: f64, y: f64) -> f64 {
    x * y
}

pub fn greet(name: &str) -> String {
    format!("Hello, {}!", name)
}

/// 每個元素後面都接一個空白，包括最後一個
pub fn format_vector(values: &[i32]) -> String {
    let mut line = String::with_capacity(values.len() * 4);
    for value in values {
        // 寫入 String 不會失敗
        let _ = write!(line, "{} ", value);
    }
    line
}

pub fn print_vector<C: Console + ?Sized>(console: &mut C, values: &[i32]) -> Result<()> {
    console.write_line(&format_vector(values))
}

pub fn is_even(n: i32) -> bool {
    n % 2 == 0
}

/// 回傳 [start, end] 之間的隨機整數（含兩端）
pub fn random_in_range<R: Rng + ?Sized>(rng: &mut R, start: i32, end: i32) -> Result<i32> {
    if start > end {
        return Err(DemoError::InvalidRangeError { start, end });
    }
    Ok(rng.gen_range(start..=end))
}

pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}
