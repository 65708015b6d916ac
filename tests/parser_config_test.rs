use confirmd::presentation::{ParserConfig, ParserConfigError};

#[test]
fn given_valid_config_when_loaded_then_fields_are_populated() {
    let raw = r#"
model = "qwen3:4b"
start_page = 1
prompt_template = "Extract transactions from: {pdf_text}"
"#;
    let config = ParserConfig::from_toml(raw).unwrap();
    assert_eq!(config.model, "qwen3:4b");
    assert_eq!(config.start_page, 1);
    assert!(config.prompt_template.contains("{pdf_text}"));
}

#[test]
fn given_config_without_start_page_when_loaded_then_it_defaults_to_zero() {
    let raw = r#"
model = "qwen3:4b"
prompt_template = "Extract: {pdf_text}"
"#;
    let config = ParserConfig::from_toml(raw).unwrap();
    assert_eq!(config.start_page, 0);
}

#[test]
fn given_template_without_placeholder_when_loaded_then_error() {
    let raw = r#"
model = "qwen3:4b"
prompt_template = "Extract transactions from the page."
"#;
    let error = ParserConfig::from_toml(raw).unwrap_err();
    assert!(matches!(error, ParserConfigError::MissingPlaceholder));
}

#[test]
fn given_malformed_toml_when_loaded_then_parse_error() {
    let error = ParserConfig::from_toml("model = ").unwrap_err();
    assert!(matches!(error, ParserConfigError::Parse(_)));
}

#[test]
fn given_missing_file_when_loaded_then_io_error() {
    let error = ParserConfig::load("/nonexistent/broker.toml").unwrap_err();
    assert!(matches!(error, ParserConfigError::Io(_)));
}

#[test]
fn given_shipped_broker_configs_when_loaded_then_they_validate() {
    for name in ["robinhood", "fidelity"] {
        let path = format!("{}/configs/{}.toml", env!("CARGO_MANIFEST_DIR"), name);
        let config = ParserConfig::load(&path)
            .unwrap_or_else(|e| panic!("config {} should load: {}", name, e));
        assert!(!config.model.is_empty());
    }
}
