use msglint::mcp::{MsglintMcpServer, types::GetConfigParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json};

// ============================================================================
// get_config tests
// ============================================================================

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = MsglintMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], false);
    assert_eq!(json_result["config"]["sourceRoot"], "./");
    assert_eq!(json_result["config"]["ignoreTestFiles"], true);
    assert!(json_result["config"]["includes"].is_array());
    assert!(
        json_result["config"]["ignoreAttributes"]
            .as_array()
            .unwrap()
            .contains(&json!("className"))
    );
}

#[tokio::test]
async fn test_get_config_from_msglintrc() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "sourceRoot": "./web",
            "ignoreTexts": ["GitHub"],
            "ignoreAttributes": ["variant"]
        }))
        .unwrap();

    let server = MsglintMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["sourceRoot"], "./web");
    assert_eq!(json_result["config"]["ignoreTexts"], json!(["GitHub"]));
    assert_eq!(json_result["config"]["ignoreAttributes"], json!(["variant"]));
    // Unspecified fields keep their defaults
    assert_eq!(json_result["config"]["ignoreTestFiles"], true);
}

#[tokio::test]
async fn test_get_config_invalid_file_is_an_error() {
    let fixture = McpTestFixture::new().unwrap();
    std::fs::write(fixture.root_path().join(".msglintrc.json"), "{ not json").unwrap();

    let server = MsglintMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let err = server.get_config(params).await.unwrap_err();
    assert!(err.message.contains("Failed to load config"));
}
