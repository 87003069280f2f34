use tempfile::TempDir;
use yit::config::LoaderConfig;

#[test]
fn test_config_defaults() {
    let config = LoaderConfig::default();

    assert!(config.resolve_tags);
    assert_eq!(config.max_input_bytes, 104_857_600); // 100MB
}

#[test]
fn test_serialize_default_config() {
    let config = LoaderConfig::default();
    let toml_str = toml::to_string(&config).expect("Failed to serialize config");

    assert!(toml_str.contains("resolve_tags = true"));
    assert!(toml_str.contains("max_input_bytes = 104857600"));
}

#[test]
fn test_partial_config_uses_defaults() {
    let config = LoaderConfig::from_toml_str("max_input_bytes = 1024").unwrap();

    assert!(config.resolve_tags);
    assert_eq!(config.max_input_bytes, 1024);
}

#[test]
fn test_empty_config_is_default() {
    let config = LoaderConfig::from_toml_str("").unwrap();
    assert_eq!(config, LoaderConfig::default());
}

#[test]
fn test_save_and_load_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("yit.toml");

    let config = LoaderConfig {
        resolve_tags: false,
        max_input_bytes: 4096,
    };
    config.save(&path).unwrap();

    assert_eq!(LoaderConfig::load(&path), config);
}

#[test]
fn test_load_missing_file_falls_back_to_default() {
    let temp_dir = TempDir::new().unwrap();
    let config = LoaderConfig::load(temp_dir.path().join("absent.toml"));
    assert_eq!(config, LoaderConfig::default());
}

#[test]
fn test_load_invalid_file_falls_back_to_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.toml");
    std::fs::write(&path, "resolve_tags = \"maybe\"").unwrap();

    assert_eq!(LoaderConfig::load(&path), LoaderConfig::default());
}
