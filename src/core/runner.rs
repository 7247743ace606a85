use crate::config::toml_config::DemoConfig;
use crate::core::format::{format_number, yes_no};
use crate::core::ops;
use crate::domain::model::{Calculator, Counter, Person};
use crate::domain::ports::{Clock, Console};
use crate::utils::error::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoLine {
    pub label: String,
    pub text: String,
}

impl DemoLine {
    fn new(label: &str, text: String) -> Self {
        Self {
            label: label.to_string(),
            text,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DemoReport {
    pub lines: Vec<DemoLine>,
}

impl DemoReport {
    pub fn transcript(&self) -> Vec<&str> {
        self.lines.iter().map(|line| line.text.as_str()).collect()
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|line| line.label == label)
            .map(|line| line.text.as_str())
    }
}

pub struct DemoEngine<C: Console, K: Clock> {
    config: DemoConfig,
    console: C,
    clock: K,
}

impl<C: Console, K: Clock> DemoEngine<C, K> {
    pub fn new(config: DemoConfig, console: C, clock: K) -> Self {
        Self {
            config,
            console,
            clock,
        }
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// 依序執行 demo，並把結果寫到 console
    pub fn run(&mut self, format: OutputFormat) -> Result<DemoReport> {
        tracing::info!("Starting demo run ({:?} output)", format);

        let report = self.build_report()?;

        match format {
            OutputFormat::Text => {
                for line in &report.lines {
                    self.console.write_line(&line.text)?;
                }
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&report)?;
                self.console.write_line(&json)?;
            }
        }

        tracing::info!("✅ Demo finished with {} lines", report.lines.len());
        Ok(report)
    }

    pub fn build_report(&self) -> Result<DemoReport> {
        let config = &self.config;
        let mut lines = Vec::new();

        lines.push(DemoLine::new("greeting", ops::greet(&config.greeting.name)));

        let [a, b] = config.arithmetic.add;
        lines.push(DemoLine::new("add", format!("Add: {}", ops::add(a, b))));

        let [x, y] = config.arithmetic.multiply;
        lines.push(DemoLine::new(
            "multiply",
            format!("Multiply: {}", format_number(ops::multiply(x, y))),
        ));

        if config.extras.enabled {
            tracing::debug!("Extras enabled, seed: {:?}", config.extras.seed);
            lines.extend(self.random_and_time_lines()?);
        }

        lines.push(DemoLine::new(
            "vector",
            ops::format_vector(&config.vector.numbers),
        ));

        let n = config.parity.number;
        lines.push(DemoLine::new(
            "parity",
            format!("Is {} even? {}", n, yes_no(ops::is_even(n))),
        ));

        let person = Person::new(config.person.name.clone(), config.person.age);
        lines.push(DemoLine::new("person", person.introduce()));

        let calc = Calculator::new();
        let [a, b] = config.calculator.add;
        lines.push(DemoLine::new(
            "calculator_add",
            format!("Calculator Add: {}", calc.add(a, b)),
        ));

        if config.extras.enabled {
            let sqrt = calc.sqrt(config.calculator.sqrt)?;
            lines.push(DemoLine::new(
                "calculator_sqrt",
                format!("Calculator Sqrt: {}", format_number(sqrt)),
            ));
        }

        let mut counter = Counter::new();
        for step in &config.counter.steps {
            counter.apply(*step)?;
        }
        tracing::debug!(
            "Applied {} counter steps, count = {}",
            config.counter.steps.len(),
            counter.count()
        );
        lines.push(DemoLine::new(
            "counter",
            format!("Counter value: {}", counter.count()),
        ));

        Ok(DemoReport { lines })
    }

    // 隨機數與時間緊接在 Multiply 之後輸出
    fn random_and_time_lines(&self) -> Result<Vec<DemoLine>> {
        let extras = &self.config.extras;
        let mut rng = match extras.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let [start, end] = extras.random_range;
        let number = ops::random_in_range(&mut rng, start, end)?;

        Ok(vec![
            DemoLine::new(
                "random",
                format!("Random number between {} and {}: {}", start, end, number),
            ),
            DemoLine::new(
                "time",
                format!("Current time: {}", ops::format_timestamp(self.clock.now())),
            ),
        ])
    }
}
