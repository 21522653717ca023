use bucketlist::config::{BucketConfig, Config};

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(config.ui.insert_enabled);
    assert_eq!(config.ui.input_placeholder, "Do something...");
    assert_eq!(config.ui.input_width, 14);
    assert_eq!(config.ui.input_color, "#5533ff");
    assert_eq!(config.ui.default_bucket, "work");
    assert!(!config.logging.enabled);
    assert_eq!(config.bucket_names(), vec!["work", "academic", "personal"]);
}

#[test]
fn test_default_seed_tasks() {
    let config = Config::default();
    let work = config.bucket("work").unwrap();
    assert_eq!(work.key, 'w');
    assert_eq!(work.color, "#0000ff");
    assert_eq!(work.tasks, vec!["Buy carrots", "Buy celery", "Buy kohlrabi"]);
    assert_eq!(config.bucket("academic").unwrap().tasks, vec!["Buy carrots"]);
    assert_eq!(config.bucket("personal").unwrap().tasks, vec!["Buy kohlrabi"]);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Invalid input width should fail
    config.ui.input_width = 0;
    assert!(config.validate().is_err());

    // Reset and test unknown default bucket
    config.ui.input_width = 20;
    config.ui.default_bucket = "garden".to_string();
    assert!(config.validate().is_err());

    // Reset and test invalid input color
    config.ui.default_bucket = "work".to_string();
    config.ui.input_color = "purple".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_bucket_validation() {
    let bucket = |name: &str, key: char, color: &str| BucketConfig {
        name: name.to_string(),
        key,
        color: color.to_string(),
        tasks: Vec::new(),
    };

    let mut config = Config::default();
    config.buckets.push(bucket("work", 'x', "#000000"));
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("duplicate bucket name"));

    let mut config = Config::default();
    config.buckets.push(bucket("travel", 'w', "#000000"));
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.buckets.push(bucket("travel", 'q', "#000000"));
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("reserved"));

    let mut config = Config::default();
    config.buckets.push(bucket("travel", 't', "#00000"));
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.buckets.push(bucket("travel", 't', "#+1+2+3"));
    let err = config.validate().unwrap_err();
    assert!(format!("{:#}", err).contains("invalid hex digits"));

    let mut config = Config::default();
    config.buckets.clear();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("default_bucket = \"work\""));
    assert!(toml_str.contains("[[buckets]]"));
    assert!(toml_str.contains("name = \"academic\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[ui]
input_width = 30

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.ui.input_width, 30);
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert_eq!(config.ui.default_bucket, "work");
    assert!(config.ui.insert_enabled);
    assert_eq!(config.buckets.len(), 3);
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.ui.default_bucket, default_config.ui.default_bucket);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
    assert_eq!(config.bucket_names(), default_config.bucket_names());
}

#[test]
fn test_load_from_file_rejects_invalid_config() {
    let temp_dir = std::env::temp_dir().join("bucketlist_test_invalid_config");
    let _ = std::fs::remove_dir_all(&temp_dir);
    std::fs::create_dir_all(&temp_dir).unwrap();

    let path = temp_dir.join("config.toml");
    std::fs::write(&path, "[ui]\ndefault_bucket = \"nowhere\"\n").unwrap();
    assert!(Config::load_from_file(&path).is_err());

    std::fs::write(&path, "[ui\n").unwrap();
    let err = Config::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));

    let _ = std::fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    // Create a temporary path that doesn't exist
    let temp_dir = std::env::temp_dir().join("bucketlist_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    // Generate config should create the directory structure
    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());
    assert!(config_path.exists());

    // Verify the file contains expected content and loads back
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# Bucketlist Configuration File"));
    let loaded = Config::load_from_file(&config_path).unwrap();
    assert_eq!(loaded.bucket_names(), Config::default().bucket_names());

    // Clean up
    let _ = fs::remove_dir_all(&temp_dir);
}
