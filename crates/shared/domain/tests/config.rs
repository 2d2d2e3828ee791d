use appflow_domain::config::{AppConfig, LoggingConfig, SynthConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(logging.console);
    assert!(logging.directory.is_none());
    assert_eq!(logging.max_files, 10);

    let synth = SynthConfig::default();
    assert!(synth.validate);
    assert!(synth.pretty);
    assert!(synth.description.is_none());
}

#[test]
fn app_config_deserializes_partial_sections() {
    let raw = json!({
        "logging": { "level": "debug", "directory": "/tmp/appflow-logs" },
        "synth": { "pretty": false }
    });

    let cfg: AppConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.logging.level, "debug");
    assert_eq!(cfg.logging.directory, Some(std::path::PathBuf::from("/tmp/appflow-logs")));
    assert!(cfg.logging.console);
    assert!(!cfg.synth.pretty);
    assert!(cfg.synth.validate);
}

#[test]
fn app_config_clones_on_write() {
    let shared = AppConfig::default();
    let mut local = shared.clone();
    local.synth.description = Some("mine".to_owned());

    assert!(shared.synth.description.is_none());
    assert_eq!(local.synth.description.as_deref(), Some("mine"));
}
