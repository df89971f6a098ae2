use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::Value;
use tempfile::TempDir;

mod tools;

/// Test fixture for MCP integration tests
///
/// Manages a temporary project with its own `.git` so config discovery
/// never escapes the fixture.
pub struct McpTestFixture {
    _temp_dir: TempDir,
    project_root: PathBuf,
}

impl McpTestFixture {
    /// Create an empty test project
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_root = temp_dir.path().canonicalize()?;
        fs::create_dir(project_root.join(".git"))?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
        })
    }

    /// Create a test project with the given source files
    ///
    /// # Example
    /// ```ignore
    /// let fixture = McpTestFixture::with_sources(&[
    ///     ("src/app.tsx", "<p>Hello</p>;"),
    /// ])?;
    /// ```
    pub fn with_sources(files: &[(&str, &str)]) -> Result<Self> {
        let fixture = Self::new()?;
        for (path, content) in files {
            fixture.write_source(path, content)?;
        }
        Ok(fixture)
    }

    /// Write a JS/TS source file relative to the project root
    pub fn write_source(&self, relative_path: &str, content: &str) -> Result<()> {
        let path = self.project_root.join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)
            .with_context(|| format!("Failed to write source file: {}", path.display()))?;
        Ok(())
    }

    /// Write a .msglintrc.json config file
    pub fn write_config(&self, content: &Value) -> Result<()> {
        let path = self.project_root.join(".msglintrc.json");
        let json_str = serde_json::to_string_pretty(content)?;
        fs::write(&path, format!("{}\n", json_str))?;
        Ok(())
    }

    /// Get the project root path as a string (for MCP parameters)
    pub fn root(&self) -> String {
        self.project_root.to_string_lossy().to_string()
    }

    /// Get the project root path as a Path reference
    pub fn root_path(&self) -> &Path {
        &self.project_root
    }
}

// ============================================================================
// Fixture Generators
// ============================================================================

/// One file per rule, plus a file that is clean
pub fn fixture_with_each_rule() -> Result<McpTestFixture> {
    McpTestFixture::with_sources(&[
        (
            "src/greeting.ts",
            "export const greet = (user) => t`Hello ${user.name}`;\n",
        ),
        (
            "src/search.tsx",
            "export const Search = () => <input placeholder=\"Search\" />;\n",
        ),
        ("src/title.tsx", "export const Title = () => <h1>Welcome</h1>;\n"),
        (
            "src/clean.tsx",
            "export const Clean = ({ name }) => <Trans>Hello {name}</Trans>;\n",
        ),
    ])
}

/// `count` files, each with one unlocalized text
pub fn fixture_with_many_issues(count: usize) -> Result<McpTestFixture> {
    let fixture = McpTestFixture::new()?;
    for i in 0..count {
        fixture.write_source(
            &format!("src/page_{:02}.tsx", i),
            &format!("export const Page = () => <p>Page number {}</p>;\n", i),
        )?;
    }
    Ok(fixture)
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert pagination fields in a scan result
pub fn assert_pagination(
    result: &Value,
    expected_offset: usize,
    expected_limit: usize,
    expected_has_more: bool,
) {
    let pagination = &result["pagination"];
    assert_eq!(
        pagination["offset"].as_u64().unwrap(),
        expected_offset as u64,
        "Pagination offset mismatch"
    );
    assert_eq!(
        pagination["limit"].as_u64().unwrap(),
        expected_limit as u64,
        "Pagination limit mismatch"
    );
    assert_eq!(
        pagination["hasMore"].as_bool().unwrap(),
        expected_has_more,
        "Pagination hasMore mismatch"
    );
}

/// Extract JSON value from a successful CallToolResult
///
/// Panics if the result indicates an error or cannot be parsed
pub fn extract_tool_result_json(result: &rmcp::model::CallToolResult) -> Value {
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }

    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );

    let content_item = &result.content[0];
    let text_content = content_item
        .as_text()
        .expect("Tool result content should be text");

    serde_json::from_str(&text_content.text).expect("Tool result should be valid JSON")
}
