use std::env;
use std::fs;
use std::sync::Mutex;
use todo_cli_rs::config::Config;

// Mutex to ensure environment variable tests don't run in parallel
static ENV_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_load_config_from_yaml() {
    let yaml_content = r#"
data_file: "my_tasks.json"
"#;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todo_test.yaml");
    fs::write(&path, yaml_content).unwrap();

    let stem = dir.path().join("todo_test");
    let config = Config::from_file(stem.to_str().unwrap()).unwrap();

    assert_eq!(config.data_file.to_str().unwrap(), "my_tasks.json");
}

#[test]
fn test_load_config_from_toml() {
    let toml_content = r#"
data_file = "other_tasks.json"
"#;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todo_test.toml");
    fs::write(&path, toml_content).unwrap();

    let stem = dir.path().join("todo_test");
    let config = Config::from_file(stem.to_str().unwrap()).unwrap();

    assert_eq!(config.data_file.to_str().unwrap(), "other_tasks.json");
}

#[test]
fn test_load_config_from_env() {
    let _lock = ENV_MUTEX.lock().unwrap();

    env::set_var("TODO_CLI_DATA_FILE", "env_tasks.json");

    let config = Config::from_env().unwrap();
    assert_eq!(config.data_file.to_str().unwrap(), "env_tasks.json");

    env::remove_var("TODO_CLI_DATA_FILE");
}

#[test]
fn test_from_env_without_variables_fails() {
    let _lock = ENV_MUTEX.lock().unwrap();

    env::remove_var("TODO_CLI_DATA_FILE");
    assert!(Config::from_env().is_err());
}

#[test]
fn test_from_file_missing_file_fails() {
    assert!(Config::from_file("definitely_not_here_42").is_err());
}

#[test]
fn test_resolve_data_file_override_skips_config_loading() {
    let _lock = ENV_MUTEX.lock().unwrap();

    // A config file that cannot deserialize into Config
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("todo_broken.yaml");
    fs::write(&config_path, "not_a_known_key: 1\n").unwrap();
    env::set_var("TODO_CLI_CONFIG", &config_path);

    // Without an override the broken config is a hard error
    assert!(Config::resolve_data_file(None).is_err());

    // An explicit path wins without touching the config at all
    let override_path = dir.path().join("my_tasks.json");
    let resolved = Config::resolve_data_file(Some(override_path.clone())).unwrap();
    assert_eq!(resolved, override_path);

    env::remove_var("TODO_CLI_CONFIG");
}
