//! Launch arguments and secrets.

use std::io::Write;

use clap::Parser;
use travel_cocreator::config::{load_secrets, ConfigError, LaunchArgs};

#[test]
fn defaults_match_lab_layout() {
    let args = LaunchArgs::try_parse_from(["travel-cocreator"]).expect("parse");
    assert_eq!(args.group_tag(), None);
    assert_eq!(args.model, "gpt-4o");
    assert_eq!(args.data.to_str(), Some("travel_data.json"));
    assert_eq!(args.secrets.to_str(), Some(".streamlit/secrets.toml"));
    assert_eq!(args.logo.to_str(), Some("Fitlab.png"));
}

#[test]
fn group_comes_from_query_when_flag_absent() {
    let args = LaunchArgs::try_parse_from(["travel-cocreator", "--query", "group=S2_Seren"])
        .expect("parse");
    assert_eq!(args.group_tag().as_deref(), Some("S2_Seren"));
}

#[test]
fn encoded_query_group_is_decoded() {
    let args = LaunchArgs::try_parse_from(["travel-cocreator", "--query", "?group=S2%5FPop"])
        .expect("parse");
    assert_eq!(args.group_tag().as_deref(), Some("S2_Pop"));
}

#[test]
fn explicit_group_wins_over_query() {
    let args = LaunchArgs::try_parse_from([
        "travel-cocreator",
        "--group",
        "S1_Basic",
        "--query",
        "group=S2_Seren",
    ])
    .expect("parse");
    assert_eq!(args.group_tag().as_deref(), Some("S1_Basic"));
}

#[test]
fn env_value_takes_precedence() {
    let dir = tempfile::tempdir().expect("tempdir");
    let secrets = load_secrets(&dir.path().join("secrets.toml"), Some("sk-env".to_string()))
        .expect("secrets");
    assert_eq!(secrets.api_key(), "sk-env");
}

#[test]
fn key_is_read_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    writeln!(file, r#"OPENAI_API_KEY = "sk-file""#).expect("write");

    let secrets = load_secrets(file.path(), None).expect("secrets");
    assert_eq!(secrets.api_key(), "sk-file");
    assert!(!format!("{secrets:?}").contains("sk-file"));
}

#[test]
fn missing_file_is_configuration_missing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = load_secrets(&dir.path().join("secrets.toml"), None).expect_err("missing");
    assert!(matches!(err, ConfigError::Missing { .. }));

    let text = err.dialog_text();
    assert!(text.starts_with("The chatbot cannot start."));
    assert!(text.contains("OPENAI_API_KEY"));
    assert!(text.contains("secrets.toml"));
}

#[test]
fn blank_key_counts_as_missing() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    writeln!(file, r#"OPENAI_API_KEY = "  ""#).expect("write");

    let err = load_secrets(file.path(), Some(String::new())).expect_err("missing");
    assert!(matches!(err, ConfigError::Missing { .. }));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    writeln!(file, "OPENAI_API_KEY = ").expect("write");

    let err = load_secrets(file.path(), None).expect_err("parse");
    assert!(matches!(err, ConfigError::Parse { .. }));
}
