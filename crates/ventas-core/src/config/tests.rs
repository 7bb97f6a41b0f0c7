use super::*;

#[test]
fn test_general_config_defaults() {
    let cfg = GeneralConfig::default();
    assert_eq!(cfg.name, "ventas");
    assert_eq!(cfg.log_level, "info");
}

#[test]
fn test_empty_toml_uses_defaults() {
    let cfg: Config = toml::from_str("").unwrap();
    assert_eq!(cfg.ventas.log_level, "info");
    assert!(cfg.intent.is_empty());
}

#[test]
fn test_intent_config_from_toml() {
    let toml_str = r#"
        [ventas]
        log_level = "debug"

        [intent]
        extra_phrases = ["refresca el tablero"]
        extra_negations = ["ni se te ocurra"]
        extra_short_words = ["refresca"]
    "#;
    let cfg: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(cfg.ventas.log_level, "debug");
    assert_eq!(cfg.ventas.name, "ventas");
    assert_eq!(cfg.intent.extra_phrases, vec!["refresca el tablero"]);
    assert_eq!(cfg.intent.extra_negations, vec!["ni se te ocurra"]);
    assert_eq!(cfg.intent.extra_short_words, vec!["refresca"]);
    assert!(!cfg.intent.is_empty());
}

#[test]
fn test_intent_config_partial_section() {
    let toml_str = r#"
        [intent]
        extra_negations = ["espera"]
    "#;
    let cfg: Config = toml::from_str(toml_str).unwrap();
    assert!(cfg.intent.extra_phrases.is_empty());
    assert_eq!(cfg.intent.extra_negations, vec!["espera"]);
}

#[test]
fn test_load_missing_file_returns_defaults() {
    let cfg = load("/nonexistent/__ventas_test__/config.toml").unwrap();
    assert_eq!(cfg.ventas.name, "ventas");
    assert!(cfg.intent.is_empty());
}

#[test]
fn test_load_reads_file() {
    let tmp = std::env::temp_dir().join("__ventas_test_config_load__.toml");
    std::fs::write(&tmp, "[intent]\nextra_phrases = [\"recalcula kpis\"]\n").unwrap();

    let cfg = load(tmp.to_str().unwrap()).unwrap();
    assert_eq!(cfg.intent.extra_phrases, vec!["recalcula kpis"]);

    let _ = std::fs::remove_file(&tmp);
}

#[test]
fn test_load_rejects_invalid_toml() {
    let tmp = std::env::temp_dir().join("__ventas_test_config_invalid__.toml");
    std::fs::write(&tmp, "[intent\nextra_phrases = 3").unwrap();

    let err = load(tmp.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, VentasError::Config(_)));
    assert!(err.to_string().contains("failed to parse config"));

    let _ = std::fs::remove_file(&tmp);
}

#[test]
fn test_shellexpand_leaves_plain_paths() {
    assert_eq!(shellexpand("/etc/ventas.toml"), "/etc/ventas.toml");
    assert_eq!(shellexpand("config.toml"), "config.toml");
}
