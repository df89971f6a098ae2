use msglint::mcp::{MsglintMcpServer, types::ScanMessagesParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::{Value, json};

use crate::{
    McpTestFixture, assert_pagination, extract_tool_result_json, fixture_with_each_rule,
    fixture_with_many_issues,
};

async fn scan(fixture: &McpTestFixture, limit: Option<u32>, offset: Option<u32>) -> Value {
    let server = MsglintMcpServer::new();
    let params = Parameters(ScanMessagesParams {
        project_root_path: fixture.root(),
        limit,
        offset,
    });
    let result = server.scan_messages(params).await.unwrap();
    extract_tool_result_json(&result)
}

// ============================================================================
// scan_messages tests
// ============================================================================

#[tokio::test]
async fn test_scan_messages_reports_each_rule() {
    let fixture = fixture_with_each_rule().unwrap();

    let result = scan(&fixture, None, None).await;

    assert_eq!(result["totalCount"], 3);
    assert_eq!(result["totalFileCount"], 3);
    assert_eq!(result["sourceFilesChecked"], 4);

    let items = result["items"].as_array().unwrap();
    let rules: Vec<&str> = items.iter().map(|i| i["rule"].as_str().unwrap()).collect();
    // Sorted by file path: greeting.ts, search.tsx, title.tsx
    assert_eq!(
        rules,
        vec![
            "message-expression",
            "unlocalized-attribute",
            "unlocalized-text"
        ]
    );

    let expression = &items[0];
    assert_eq!(expression["severity"], "error");
    assert_eq!(expression["line"], 1);
    assert_eq!(expression["col"], 33);
    assert_eq!(
        expression["message"],
        "Should be ${variable}, not ${object.property} or ${my_function()}"
    );
    assert_eq!(
        expression["sourceLine"],
        "export const greet = (user) => t`Hello ${user.name}`;"
    );
    assert!(expression["filePath"].as_str().unwrap().ends_with("greeting.ts"));

    let attribute = &items[1];
    assert_eq!(attribute["severity"], "warning");
    assert_eq!(attribute["message"], "Search");
    assert_eq!(attribute["details"], "in `placeholder` of <input>");

    assert_eq!(items[2]["message"], "Welcome");
    assert!(items[2]["hint"].as_str().unwrap().contains("<Trans>"));
}

#[tokio::test]
async fn test_scan_messages_clean_project() {
    let fixture = McpTestFixture::with_sources(&[(
        "src/app.tsx",
        "export const App = ({ name }) => <Trans>Hello {name}</Trans>;\n",
    )])
    .unwrap();

    let result = scan(&fixture, None, None).await;

    assert_eq!(result["totalCount"], 0);
    assert_eq!(result["items"], json!([]));
    assert_pagination(&result, 0, 20, false);
}

#[tokio::test]
async fn test_scan_messages_parse_error_has_no_position() {
    let fixture = McpTestFixture::with_sources(&[("src/broken.tsx", "export const = ;\n")]).unwrap();

    let result = scan(&fixture, None, None).await;

    assert_eq!(result["totalCount"], 1);
    let item = &result["items"][0];
    assert_eq!(item["rule"], "parse-error");
    assert!(item.get("line").is_none());
    assert!(item.get("sourceLine").is_none());
}

#[tokio::test]
async fn test_scan_messages_respects_config() {
    let fixture = fixture_with_each_rule().unwrap();
    fixture
        .write_config(&json!({
            "ignoreTexts": ["Welcome"],
            "ignoreAttributes": ["placeholder"]
        }))
        .unwrap();

    let result = scan(&fixture, None, None).await;

    assert_eq!(result["totalCount"], 1);
    assert_eq!(result["items"][0]["rule"], "message-expression");
}

#[tokio::test]
async fn test_scan_messages_pagination() {
    let fixture = fixture_with_many_issues(5).unwrap();

    let first = scan(&fixture, Some(2), None).await;
    assert_eq!(first["totalCount"], 5);
    assert_eq!(first["items"].as_array().unwrap().len(), 2);
    assert_pagination(&first, 0, 2, true);

    let last = scan(&fixture, Some(2), Some(4)).await;
    assert_eq!(last["items"].as_array().unwrap().len(), 1);
    assert_eq!(last["items"][0]["message"], "Page number 4");
    assert_pagination(&last, 4, 2, false);

    let past_end = scan(&fixture, Some(2), Some(10)).await;
    assert_eq!(past_end["items"], json!([]));
    assert_pagination(&past_end, 10, 2, false);
}

#[tokio::test]
async fn test_scan_messages_limit_is_capped() {
    let fixture = fixture_with_many_issues(1).unwrap();

    let result = scan(&fixture, Some(500), None).await;

    assert_pagination(&result, 0, 100, false);
}
