// potpie-core/tests/config_integration_tests.rs
use anyhow::Result;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use potpie_core::config::PotpieConfig;
use potpie_core::{FormatContext, PotpieError, TransformKind};

#[test]
fn test_load_from_file() -> Result<()> {
    let yaml_content = r#"
transform: extend
format: po
seed: 42
validate: true
target_nplurals: 3
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let config = PotpieConfig::load_from_file(file.path())?;
    assert_eq!(config.transform, TransformKind::Extend);
    assert_eq!(config.format_for(Path::new("strings.json")), FormatContext::Po);
    assert_eq!(config.seed, Some(42));
    assert!(config.validate);
    // Omitted fields fall back to their defaults.
    assert_eq!(config.source_nplurals, 2);
    assert_eq!(config.target_nplurals, 3);
    Ok(())
}

#[test]
fn test_unknown_field_is_rejected() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"transfrom: brackets\n")?;
    let err = PotpieConfig::load_from_file(file.path()).unwrap_err();
    match err {
        PotpieError::Config(msg) => assert!(msg.contains("transfrom"), "unexpected message: {}", msg),
        other => panic!("expected a config error, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let err = PotpieConfig::load_from_file("/definitely/not/here/potpie.yaml").unwrap_err();
    assert!(matches!(err, PotpieError::IoError(_)));
}
