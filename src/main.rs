use clap::Parser;
use small_demo::utils::error::ErrorSeverity;
use small_demo::utils::logger;
use small_demo::{CliConfig, DemoEngine, StdoutConsole, SystemClock};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting small-demo CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let result = config.load_demo_config().and_then(|demo_config| {
        let mut engine = DemoEngine::new(demo_config, StdoutConsole::stdout(), SystemClock);
        engine.run(config.format)
    });

    if let Err(e) = result {
        tracing::error!(
            "❌ Demo failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}
