use std::path::PathBuf;

use crane::config::{ConfigFlags, ThemeMode, load_config_flags, parse_flag_tokens};

#[test]
fn test_config_file_parsing_ignores_comments_and_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".cranerc");
    let content = r#"
# comment
--no-number

--theme light

--log-file=crane.log
"#;
    std::fs::write(&path, content).unwrap();

    let flags = load_config_flags(&path).unwrap();
    assert!(flags.no_number);
    assert!(!flags.no_syntax);
    assert_eq!(flags.theme, Some(ThemeMode::Light));
    assert_eq!(flags.log_file, Some(PathBuf::from("crane.log")));
}

#[test]
fn test_cli_flags_override_file_flags() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".cranerc");
    let content = "--no-number\n--theme light\n--log-file file.log\n";
    std::fs::write(&path, content).unwrap();

    let file_flags = load_config_flags(&path).unwrap();
    let cli_args = vec![
        "crane".to_string(),
        "--theme".to_string(),
        "dark".to_string(),
        "--no-syntax".to_string(),
    ];
    let cli_flags = parse_flag_tokens(&cli_args);

    let effective = file_flags.union(&cli_flags);
    assert!(effective.no_number, "file flags should remain enabled");
    assert!(effective.no_syntax, "cli flags should be applied");
    assert_eq!(effective.theme, Some(ThemeMode::Dark), "cli should override theme");
    assert_eq!(
        effective.log_file,
        Some(PathBuf::from("file.log")),
        "file config should be preserved when CLI does not override"
    );
}

#[test]
fn test_parse_flag_tokens_handles_equals_syntax() {
    let args = vec![
        "crane".to_string(),
        "--theme=dark".to_string(),
        "--log-file=crane.log".to_string(),
    ];
    let flags = parse_flag_tokens(&args);
    assert_eq!(flags.theme, Some(ThemeMode::Dark));
    assert_eq!(flags.log_file, Some(PathBuf::from("crane.log")));
}

#[test]
fn test_config_union_merges_booleans() {
    let file = ConfigFlags {
        no_syntax: true,
        ..ConfigFlags::default()
    };
    let cli = ConfigFlags {
        no_number: true,
        ..ConfigFlags::default()
    };
    let merged = file.union(&cli);
    assert!(merged.no_syntax);
    assert!(merged.no_number);
}
