use appflow_logger::{LevelFilter, Logger};

#[test]
fn console_only_logger_writes_no_file() {
    let logger = Logger::builder()
        .name("appflow-console")
        .console(true)
        .level(LevelFilter::WARN)
        .init()
        .expect("logger should initialize");

    assert!(!logger.writes_to_file(), "console-only logger should not attach a file writer");
}
