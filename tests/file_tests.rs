mod common;

use common::{TestResult, single_rule};
use std::fs;
use ysld::{StyleParser, YsldError};

#[test]
fn test_parse_file() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("roads.json");
    fs::write(
        &path,
        r#"{"name": "roads", "rules": [{"filter": "${type = 'highway'}", "scale": [0, 50000]}]}"#,
    )?;

    let outcome = ysld::parse_file(&StyleParser::new(), &path)?;
    assert_eq!(outcome.document.name.as_deref(), Some("roads"));
    let rule = single_rule(&outcome);
    assert_eq!(rule.max_scale_denominator, 50000.0);
    assert!(rule.filter.is_some());
    Ok(())
}

#[test]
fn test_parse_file_errors() -> TestResult {
    let dir = tempfile::tempdir()?;
    let missing = ysld::parse_file(&StyleParser::new(), dir.path().join("absent.json"));
    assert!(matches!(missing, Err(YsldError::Io(_))));

    let path = dir.path().join("broken.json");
    fs::write(&path, "{\"rules\": ")?;
    let broken = ysld::parse_file(&StyleParser::new(), &path);
    assert!(matches!(broken, Err(YsldError::Parse(ysld::ParseError::Json(_)))));
    Ok(())
}
