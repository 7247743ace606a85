use anyhow::Result;
use small_demo::adapters::console::WriterConsole;
use small_demo::{BufferConsole, DemoConfig, DemoEngine, FixedClock, OutputFormat};

const DEFAULT_TRANSCRIPT: &str = "Hello, World!
Add: 7
Multiply: 10
1 2 3 4 5 
Is 4 even? Yes
My name is Alice and I am 30 years old.
Calculator Add: 30
Counter value: 1
";

/// 預設腳本的輸出必須與原始 demo 完全一致
#[test]
fn test_default_run_matches_transcript() -> Result<()> {
    let console = WriterConsole::new(Vec::new());
    let mut engine = DemoEngine::new(DemoConfig::default(), console, FixedClock::epoch());
    engine.run(OutputFormat::Text)?;

    let output = String::from_utf8(engine.into_console().into_inner())?;
    assert_eq!(output, DEFAULT_TRANSCRIPT);
    Ok(())
}

#[test]
fn test_json_report_contains_every_step() -> Result<()> {
    let mut config = DemoConfig::default();
    config.extras.enabled = true;
    config.extras.seed = Some(3);

    let mut engine = DemoEngine::new(config, BufferConsole::new(), FixedClock::epoch());
    engine.run(OutputFormat::Json)?;

    let console = engine.into_console();
    let value: serde_json::Value = serde_json::from_str(&console.lines()[0])?;
    let labels: Vec<&str> = value["lines"]
        .as_array()
        .expect("lines array")
        .iter()
        .filter_map(|line| line["label"].as_str())
        .collect();

    assert_eq!(
        labels,
        vec![
            "greeting",
            "add",
            "multiply",
            "random",
            "time",
            "vector",
            "parity",
            "person",
            "calculator_add",
            "calculator_sqrt",
            "counter",
        ]
    );
    Ok(())
}

#[test]
fn test_decrement_script_goes_negative() -> Result<()> {
    let script = format!(
        "[counter]\nsteps = [{}]\n",
        vec!["\"decrement\""; 3].join(", ")
    );
    let config = DemoConfig::from_toml_str(&script)?;

    let mut engine = DemoEngine::new(config, BufferConsole::new(), FixedClock::epoch());
    let report = engine.run(OutputFormat::Text)?;
    assert_eq!(report.get("counter"), Some("Counter value: -3"));
    Ok(())
}

#[test]
fn test_disabled_extras_keep_the_plain_transcript() -> Result<()> {
    let mut config = DemoConfig::default();
    config.extras.seed = Some(11);

    let mut engine = DemoEngine::new(config, BufferConsole::new(), FixedClock::epoch());
    let report = engine.run(OutputFormat::Text)?;
    assert_eq!(report.transcript().join("\n") + "\n", DEFAULT_TRANSCRIPT);
    Ok(())
}
