use appflow_domain::config::LoggingConfig;
use appflow_logger::Logger;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn config_directory_enables_json_file_logging() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");
    let config = LoggingConfig {
        console: false,
        directory: Some(log_dir.clone()),
        json: true,
        max_files: 3,
        ..LoggingConfig::default()
    };

    let logger = Logger::from_config("appflow-file", &config, false)?;
    assert!(logger.writes_to_file());

    tracing::info!(resources = 3, "Template formatted");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(&log_file)?;
    let line = contents.lines().find(|line| line.contains("Template formatted")).unwrap();
    assert!(line.starts_with('{'), "file lines should be JSON: {line}");
    assert!(line.contains("\"resources\":3"));

    Ok(())
}
