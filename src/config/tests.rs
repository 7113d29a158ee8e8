//! Tests for config functionality.

use crate::config::{Config, DEFAULT_ENTRY_KIND, FlagTemplate};
use crate::error::PrompterError;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn expect_config_error(yaml: &str) -> String {
    match Config::from_yaml(yaml) {
        Err(PrompterError::ConfigError(msg)) => msg,
        other => panic!("expected ConfigError, got {:?}", other),
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.prompts_dir, "prompts");
    assert_eq!(config.entry_kind, DEFAULT_ENTRY_KIND);
    assert!(config.templates.is_empty());
    assert!(config.validate().is_ok());
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();

    // Should use all defaults
    assert_eq!(config.prompts_dir, "prompts");
    assert_eq!(config.entry_kind, "symbol");
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
prompts_dir: templates
entry_kind: root
templates:
  - flag_name: root
    var_name: system_prompt
    template: system_prompt.md
  - flag_name: symbol
    var_name: beginning
    template: agents/{agent_name}/beginning.md
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.prompts_dir, "templates");
    assert_eq!(config.entry_kind, "root");
    assert_eq!(
        config.templates,
        vec![
            FlagTemplate::new("root", "system_prompt", "system_prompt.md"),
            FlagTemplate::new("symbol", "beginning", "agents/{agent_name}/beginning.md"),
        ]
    );

    let map = config.template_map().unwrap();
    assert_eq!(
        map.lookup("symbol", "beginning").unwrap().as_str(),
        "agents/{agent_name}/beginning.md"
    );
}

#[test]
fn test_field_aliases() {
    let yaml = r#"
templates:
  - kind: symbol
    variable: footer
    pattern: shared/footer.md
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(
        config.templates,
        vec![FlagTemplate::new("symbol", "footer", "shared/footer.md")]
    );
}

#[test]
fn test_unknown_fields_ignored() {
    let yaml = r#"
prompts_dir: p
future_option: true
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.prompts_dir, "p");
}

#[test]
fn test_invalid_yaml() {
    let msg = expect_config_error("templates: [unclosed");
    assert!(msg.contains("failed to parse config YAML"));
}

#[test]
fn test_duplicate_mapping_rejected() {
    let yaml = r#"
templates:
  - flag_name: symbol
    var_name: main
    template: a.md
  - flag_name: symbol
    var_name: main
    template: b.md
"#;
    let msg = expect_config_error(yaml);
    assert!(msg.contains("duplicate template mapping for flag '@__symbol__:main'"));
}

#[test]
fn test_parameter_kind_cannot_be_mapped() {
    let yaml = r#"
templates:
  - flag_name: parameter
    var_name: name
    template: name.md
"#;
    let msg = expect_config_error(yaml);
    assert!(msg.contains("cannot be mapped"));
}

#[test]
fn test_parameter_entry_kind_rejected() {
    let msg = expect_config_error("entry_kind: parameter");
    assert!(msg.contains("entry_kind"));
}

#[test]
fn test_invalid_names_rejected() {
    let yaml = r#"
templates:
  - flag_name: sym-bol
    var_name: main
    template: a.md
"#;
    let msg = expect_config_error(yaml);
    assert!(msg.contains("flag_name 'sym-bol'"));
}

#[test]
fn test_invalid_pattern_rejected() {
    let yaml = r#"
templates:
  - flag_name: symbol
    var_name: main
    template: "agents/{agent_name.md"
"#;
    let msg = expect_config_error(yaml);
    assert!(msg.contains("invalid template"));
}

#[test]
fn test_yaml_roundtrip_preserves_templates() {
    let config = Config {
        templates: vec![FlagTemplate::new("symbol", "main", "main.md")],
        ..Default::default()
    };
    let parsed = Config::from_yaml(&config.to_yaml().unwrap()).unwrap();
    assert_eq!(parsed.templates, config.templates);
}

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("prompter.yaml");
    std::fs::write(
        &path,
        "templates:\n  - flag_name: symbol\n    var_name: main\n    template: main.md\n",
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.templates.len(), 1);
}

#[test]
fn test_load_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = Config::load(temp_dir.path().join("nope.yaml")).unwrap_err();
    assert!(matches!(err, PrompterError::ConfigError(ref msg) if msg.contains("failed to read")));
}

#[test]
fn test_prompts_root_relative_to_config() {
    let config = Config::default();
    assert_eq!(
        config.prompts_root("/work/project/prompter.yaml"),
        PathBuf::from("/work/project/prompts")
    );
    assert_eq!(
        config.prompts_root("prompter.yaml"),
        PathBuf::from("prompts")
    );
}

#[test]
fn test_prompts_root_absolute() {
    let config = Config {
        prompts_dir: "/srv/prompts".to_string(),
        ..Default::default()
    };
    assert_eq!(
        config.prompts_root("/anywhere/prompter.yaml"),
        Path::new("/srv/prompts")
    );
}
