use std::path::PathBuf;
use todo_cli_rs::config::Config;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.data_file, PathBuf::from("tasks.json"));
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    config.data_file = PathBuf::new();
    assert!(config.validate().is_err());
}
