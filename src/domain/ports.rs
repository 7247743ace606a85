use crate::utils::error::Result;
use chrono::NaiveDateTime;

/// demo 輸出的目的地（stdout 或測試用緩衝區）
pub trait Console {
    fn write_line(&mut self, line: &str) -> Result<()>;
}

pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}
