use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");
    let out = run(cmd)?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("Created .msglintrc.json"));
    assert!(test.root().join(".msglintrc.json").exists());

    let content = test.read_file(".msglintrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert!(parsed["includes"].is_array());
    assert_eq!(parsed["sourceRoot"], "./");
    assert_eq!(parsed["ignoreTestFiles"], true);
    assert!(parsed["ignoreAttributes"].is_array());
    assert!(content.contains("\n  \""), "Config should use 2-space indentation");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".msglintrc.json", "{}")?;

    let mut cmd = test.command();
    cmd.arg("init");
    let out = run(cmd)?;

    assert_eq!(out.code, Some(1));
    assert!(out.stderr.contains(".msglintrc.json already exists"));
    assert_eq!(test.read_file(".msglintrc.json")?, "{}");

    Ok(())
}
