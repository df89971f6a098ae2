use std::sync::Arc;

use anyhow::{Result, anyhow};
use swc_common::{FileName, Globals, SourceMap, comments::SingleThreadedComments};
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

use crate::core::{directives::DisableContext, tree::SyntaxTree, tree::TreeBuilder};

/// A parsed source file, detached from swc types so it can cross threads.
#[derive(Debug, Clone)]
pub struct ParsedSource {
    pub tree: SyntaxTree,
    /// Original source text, used to show the offending line in reports.
    pub source: String,
    /// Suppression directives found in the file's comments.
    pub disable_context: DisableContext,
}

impl ParsedSource {
    /// Get the 1-based source line, or an empty string if out of range.
    pub fn source_line(&self, line: usize) -> &str {
        line.checked_sub(1)
            .and_then(|index| self.source.lines().nth(index))
            .unwrap_or_default()
    }
}

/// Parse JSX/TSX source code string into an arena syntax tree.
///
/// Accepts a shared SourceMap for thread-safe parallel parsing.
pub fn parse_jsx_source(
    code: String,
    file_path: &str,
    source_map: Arc<SourceMap>,
) -> Result<ParsedSource> {
    use swc_common::GLOBALS;

    // Wrap in GLOBALS.set() for thread safety
    GLOBALS.set(&Globals::new(), || {
        let source_file =
            source_map.new_source_file(FileName::Real(file_path.into()).into(), code.clone());

        let syntax = Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        });

        let comments = SingleThreadedComments::default();
        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), Some(&comments));

        let module = parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse {}: {}", file_path, e.kind().msg()))?;

        let tree = TreeBuilder::new(&source_map).build(&module);

        // Directives must be read before SingleThreadedComments drops
        let disable_context = DisableContext::from_comments(&comments, &source_map);

        Ok(ParsedSource {
            tree,
            source: code,
            disable_context,
        })
    })
}

/// Parse with a fresh SourceMap. Convenient for single files and tests.
pub fn parse_source(code: &str, file_path: &str) -> Result<ParsedSource> {
    parse_jsx_source(code.to_string(), file_path, Arc::new(SourceMap::default()))
}
