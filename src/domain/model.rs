use crate::core::ops;
use crate::utils::error::{DemoError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    name: String,
    age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn introduce(&self) -> String {
        format!("My name is {} and I am {} years old.", self.name, self.age)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    pub fn add(&self, a: i32, b: i32) -> i32 {
        ops::add(a, b)
    }

    pub fn multiply(&self, x: f64, y: f64) -> f64 {
        ops::multiply(x, y)
    }

    pub fn sqrt(&self, x: f64) -> Result<f64> {
        // NaN 也視為無效輸入
        if x.is_nan() || x < 0.0 {
            return Err(DemoError::DomainError {
                operation: "sqrt".to_string(),
                value: x,
            });
        }
        Ok(x.sqrt())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterOp {
    Increment,
    Decrement,
}

/// 計數器：從 0 開始，每次只增減 1；溢位時回傳錯誤且不改變數值
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    count: i32,
}

impl Counter {
    pub fn new() -> Self {
        Self { count: 0 }
    }

    pub fn increment(&mut self) -> Result<()> {
        self.count = self
            .count
            .checked_add(1)
            .ok_or_else(|| DemoError::OverflowError {
                operation: "counter increment".to_string(),
            })?;
        Ok(())
    }

    pub fn decrement(&mut self) -> Result<()> {
        self.count = self
            .count
            .checked_sub(1)
            .ok_or_else(|| DemoError::OverflowError {
                operation: "counter decrement".to_string(),
            })?;
        Ok(())
    }

    pub fn apply(&mut self, op: CounterOp) -> Result<()> {
        match op {
            CounterOp::Increment => self.increment(),
            CounterOp::Decrement => self.decrement(),
        }
    }

    pub fn count(&self) -> i32 {
        self.count
    }
}
