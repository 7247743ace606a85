pub mod format;
pub mod ops;
pub mod runner;

pub use crate::domain::model::{Calculator, Counter, CounterOp, Person};
pub use crate::domain::ports::{Clock, Console};
pub use crate::utils::error::Result;
