use critterdex_core::AppConfig;

#[test]
fn test_load_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let config = AppConfig::load(&path).unwrap();

    assert_eq!(config.api.base_url, "https://pokeapi.co/api/v2");
    assert_eq!(config.api.catalog_page_size, 2000);
    assert_eq!(config.api.locale, "es");
    assert_eq!(config.search.min_query_len, 2);
    assert_eq!(config.search.debounce_ms, 250);
}

#[test]
fn test_save_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = AppConfig::default();
    config.api.locale = "en".to_string();
    config.search.min_query_len = 3;
    config.save(&path).unwrap();

    let loaded = AppConfig::load(&path).unwrap();
    assert_eq!(loaded.api.locale, "en");
    assert_eq!(loaded.search.min_query_len, 3);
    assert_eq!(loaded.api.base_url, config.api.base_url);
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[api]\nlocale = \"en\"\n").unwrap();

    let config = AppConfig::load(&path).unwrap();

    assert_eq!(config.api.locale, "en");
    assert_eq!(config.api.catalog_page_size, 2000);
    assert_eq!(config.search.min_query_len, 2);
}

#[test]
fn test_invalid_toml_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[api\nlocale=").unwrap();

    assert!(AppConfig::load(&path).is_err());
}

#[test]
fn test_validate_flags_bad_values() {
    let mut config = AppConfig::default();
    config.api.base_url = String::new();
    config.api.catalog_page_size = 0;
    config.search.min_query_len = 0;

    let errors = config.validate();

    assert_eq!(errors.len(), 3);
    assert!(errors.iter().any(|e| e.contains("base_url")));
    assert!(errors.iter().any(|e| e.contains("catalog_page_size")));
    assert!(errors.iter().any(|e| e.contains("min_query_len")));
}

#[test]
fn test_validate_accepts_defaults() {
    assert!(AppConfig::default().validate().is_empty());
}
