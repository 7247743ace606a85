pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use super::toml_config::DemoConfig;
    use crate::core::runner::OutputFormat;
    use crate::utils::error::Result;
    use crate::utils::validation::Validate;
    use clap::Parser;
    use serde::{Deserialize, Serialize};
    use std::path::PathBuf;

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "small-demo")]
    #[command(about = "Runs the scripted arithmetic, greeting and counter demo")]
    pub struct CliConfig {
        /// Path to a TOML demo script (defaults reproduce the built-in demo)
        #[arg(short, long)]
        pub config: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        pub format: OutputFormat,

        /// Also print the random number, current time and square root lines
        #[arg(long)]
        pub extras: bool,

        /// Seed for the random number line
        #[arg(long)]
        pub seed: Option<u64>,

        /// Override the greeting name
        #[arg(long)]
        pub name: Option<String>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON")]
        pub log_json: bool,
    }

    impl CliConfig {
        /// 載入腳本並套用命令列覆蓋設定
        pub fn load_demo_config(&self) -> Result<DemoConfig> {
            let mut config = match &self.config {
                Some(path) => {
                    tracing::info!("📁 Loading demo script from: {}", path.display());
                    DemoConfig::from_file(path)?
                }
                None => DemoConfig::default(),
            };

            if let Some(name) = &self.name {
                config.greeting.name = name.clone();
                tracing::info!("🔧 Greeting name overridden to: {}", name);
            }
            if self.extras {
                config.extras.enabled = true;
            }
            if let Some(seed) = self.seed {
                config.extras.seed = Some(seed);
                tracing::info!("🔧 Random seed overridden to: {}", seed);
            }
            if seed_is_ignored(&config) {
                tracing::warn!(
                    "⚠️ A random seed is set but extras are disabled; pass --extras to use it"
                );
            }

            config.validate()?;
            Ok(config)
        }
    }

    /// seed 只在 extras 啟用時才會被使用
    pub(crate) fn seed_is_ignored(config: &DemoConfig) -> bool {
        config.extras.seed.is_some() && !config.extras.enabled
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::io::Write;

        #[test]
        fn test_defaults() {
            let cli = CliConfig::parse_from(["small-demo"]);
            assert_eq!(cli.format, OutputFormat::Text);
            assert!(!cli.extras);
            assert_eq!(cli.load_demo_config().unwrap(), DemoConfig::default());
        }

        #[test]
        fn test_overrides() {
            let cli = CliConfig::parse_from([
                "small-demo",
                "--name",
                "Ferris",
                "--extras",
                "--seed",
                "99",
                "--format",
                "json",
            ]);
            assert_eq!(cli.format, OutputFormat::Json);

            let config = cli.load_demo_config().unwrap();
            assert_eq!(config.greeting.name, "Ferris");
            assert!(config.extras.enabled);
            assert_eq!(config.extras.seed, Some(99));
        }

        #[test]
        fn test_seed_without_extras_is_flagged() {
            let cli = CliConfig::parse_from(["small-demo", "--seed", "5"]);
            let config = cli.load_demo_config().unwrap();
            assert!(!config.extras.enabled);
            assert_eq!(config.extras.seed, Some(5));
            assert!(seed_is_ignored(&config));

            let cli = CliConfig::parse_from(["small-demo", "--seed", "5", "--extras"]);
            let config = cli.load_demo_config().unwrap();
            assert!(!seed_is_ignored(&config));
            assert!(!seed_is_ignored(&DemoConfig::default()));
        }

        #[test]
        fn test_script_file_is_validated() {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            writeln!(file, "[person]\nname = \"\"").unwrap();

            let cli = CliConfig::parse_from([
                "small-demo".to_string(),
                "--config".to_string(),
                file.path().display().to_string(),
            ]);
            assert!(cli.load_demo_config().is_err());
        }
    }
}
