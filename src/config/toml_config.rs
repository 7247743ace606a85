use crate::domain::model::CounterOp;
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MAX_PERSON_AGE: u32 = 150;
pub const MAX_COUNTER_STEPS: usize = 10_000;

/// demo 腳本：每個區段都可省略，預設值即原始 demo 的輸入
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub greeting: GreetingConfig,
    pub arithmetic: ArithmeticConfig,
    pub vector: VectorConfig,
    pub parity: ParityConfig,
    pub person: PersonConfig,
    pub calculator: CalculatorConfig,
    pub counter: CounterConfig,
    pub extras: ExtrasConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GreetingConfig {
    pub name: String,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            name: "World".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArithmeticConfig {
    pub add: [i32; 2],
    pub multiply: [f64; 2],
}

impl Default for ArithmeticConfig {
    fn default() -> Self {
        Self {
            add: [3, 4],
            multiply: [2.5, 4.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorConfig {
    pub numbers: Vec<i32>,
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self {
            numbers: vec![1, 2, 3, 4, 5],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParityConfig {
    pub number: i32,
}

impl Default for ParityConfig {
    fn default() -> Self {
        Self { number: 4 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonConfig {
    pub name: String,
    pub age: u32,
}

impl Default for PersonConfig {
    fn default() -> Self {
        Self {
            name: "Alice".to_string(),
            age: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub add: [i32; 2],
    pub sqrt: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            add: [10, 20],
            sqrt: 16.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub steps: Vec<CounterOp>,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            steps: vec![
                CounterOp::Increment,
                CounterOp::Increment,
                CounterOp::Decrement,
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtrasConfig {
    pub enabled: bool,
    pub random_range: [i32; 2],
    pub seed: Option<u64>,
}

impl Default for ExtrasConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            random_range: [1, 10],
            seed: None,
        }
    }
}

impl DemoConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DemoError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DEMO_NAME})，找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DemoError::ConfigParseError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("person.name", &self.person.name)?;
        validation::validate_range("person.age", self.person.age, 0, MAX_PERSON_AGE)?;
        validation::validate_max_len("counter.steps", self.counter.steps.len(), MAX_COUNTER_STEPS)?;

        if self.extras.enabled {
            let [start, end] = self.extras.random_range;
            validation::validate_ordered_pair("extras.random_range", start, end)?;
        }

        Ok(())
    }
}
