use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::{
    config::load_config,
    core::CheckContext,
    issues::{Issue, Rule},
};

use super::types::{
    ConfigDto, ConfigValues, GetConfigParams, IssueItem, Pagination, ScanMessagesParams,
    ScanMessagesResult,
};

const DEFAULT_LIMIT: usize = 20;
const MAX_LIMIT: usize = 100;

const ALL_RULES: &[Rule] = &[
    Rule::MessageExpression,
    Rule::UnlocalizedAttribute,
    Rule::UnlocalizedText,
];

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[derive(Clone)]
pub struct MsglintMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for MsglintMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl MsglintMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get the effective msglint configuration
    #[tool(description = "Get the effective msglint configuration for a project.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        json_result(&ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        })
    }

    /// Scan a project for message and localization issues
    #[tool(
        description = "Scan JS/TS/JSX sources for message templates with complex expressions, untranslated attributes and bare JSX text. Returns a paginated list of issues sorted by file and line."
    )]
    pub async fn scan_messages(
        &self,
        params: Parameters<ScanMessagesParams>,
    ) -> Result<CallToolResult, McpError> {
        let ScanMessagesParams {
            project_root_path,
            limit,
            offset,
        } = params.0;
        let limit = limit
            .map(|v| v as usize)
            .unwrap_or(DEFAULT_LIMIT)
            .min(MAX_LIMIT);
        let offset = offset.map(|v| v as usize).unwrap_or(0);

        let ctx = CheckContext::new(Some(Path::new(&project_root_path)), false)
            .map_err(|e| McpError::internal_error(format!("Failed to initialize: {}", e), None))?;

        let mut issues = ctx.check(ALL_RULES);
        issues.extend(ctx.parse_errors().iter().cloned().map(Issue::ParseError));
        issues.sort();

        let total_count = issues.len();
        let total_file_count = issues
            .iter()
            .map(Issue::file_path)
            .collect::<BTreeSet<_>>()
            .len();

        let items: Vec<IssueItem> = issues
            .iter()
            .skip(offset)
            .take(limit)
            .map(IssueItem::from)
            .collect();
        let has_more = offset + items.len() < total_count;

        json_result(&ScanMessagesResult {
            total_count,
            total_file_count,
            source_files_checked: ctx.files.len(),
            items,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        })
    }
}

#[tool_handler]
impl ServerHandler for MsglintMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "msglint MCP helps AI agents fix i18n message-authoring mistakes in Lingui projects.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. scan_messages - List issues (paginated)\n\n\
                 Rules:\n\
                 - message-expression: inside t`...`, msg`...` or defineMessage`...`, replace \
                 ${object.property} and ${fn()} with a plain ${variable}\n\
                 - unlocalized-attribute: translate user-visible attributes such as placeholder or alt\n\
                 - unlocalized-text: wrap JSX text in <Trans>"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = MsglintMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
