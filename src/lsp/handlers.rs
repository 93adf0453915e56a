use std::collections::HashMap;

use anyhow::{anyhow, Context};
use serde_json::Value;
use tower_lsp::jsonrpc::{Error as LspError, Result as LspResult};
use tower_lsp::lsp_types::*;

use crate::core::Problem;
use crate::lsp::backend::Backend;
use crate::lsp::conversion::{from_lsp_range, to_lsp_diagnostic};
use crate::lsp::edit::TextEditCollector;
use crate::validation::{check_all, check_in_range, sort_by_range};

/// Command that applies one problem's fix to a document
pub const APPLY_FIX_COMMAND: &str = "rstStyle.applyFix";

/// Arguments of [`APPLY_FIX_COMMAND`]: `[uri, version, problem]`
#[derive(Debug, Clone, PartialEq)]
pub struct ApplyFixArgs {
    pub uri: Url,
    /// Document version the problem was computed against
    pub version: i32,
    pub problem: Problem,
}

impl ApplyFixArgs {
    pub fn to_arguments(&self) -> anyhow::Result<Vec<Value>> {
        Ok(vec![
            serde_json::to_value(&self.uri)?,
            Value::from(self.version),
            serde_json::to_value(&self.problem).context("Failed to serialize problem")?,
        ])
    }

    pub fn from_arguments(arguments: Vec<Value>) -> anyhow::Result<Self> {
        let [uri, version, problem]: [Value; 3] = arguments
            .try_into()
            .map_err(|args: Vec<Value>| anyhow!("expected 3 arguments, got {}", args.len()))?;

        Ok(Self {
            uri: serde_json::from_value(uri).context("Invalid document uri")?,
            version: serde_json::from_value(version).context("Invalid document version")?,
            problem: serde_json::from_value(problem).context("Invalid problem")?,
        })
    }
}

/// Trait for handling diagnostics
#[tower_lsp::async_trait]
pub trait HandleDiagnostics {
    async fn publish_diagnostics(&self, uri: Url);
    async fn publish_all_diagnostics(&self);
    async fn clear_diagnostics(&self, uri: Url);
}

/// Trait for handling code action requests
#[tower_lsp::async_trait]
pub trait HandleCodeAction {
    async fn handle_code_action(
        &self,
        params: CodeActionParams,
    ) -> LspResult<Option<CodeActionResponse>>;
}

/// Trait for handling workspace commands
#[tower_lsp::async_trait]
pub trait HandleExecuteCommand {
    async fn handle_execute_command(&self, params: ExecuteCommandParams)
        -> LspResult<Option<Value>>;
}

#[tower_lsp::async_trait]
impl HandleDiagnostics for Backend {
    /// Check the stored text and publish the result for its version
    async fn publish_diagnostics(&self, uri: Url) {
        let docs = self.documents.lock().await;
        let doc_state = match docs.get(&uri) {
            Some(state) => state.clone(),
            None => return,
        };
        drop(docs);

        let diagnostics = if doc_state.is_rst(&uri) {
            let registry = self.registry.read().await;
            let mut problems = check_all(&doc_state.content, &registry);
            sort_by_range(&mut problems);
            problems.iter().map(to_lsp_diagnostic).collect()
        } else {
            Vec::new()
        };

        self.client
            .publish_diagnostics(uri, diagnostics, Some(doc_state.version))
            .await;
    }

    async fn publish_all_diagnostics(&self) {
        let uris: Vec<Url> = self.documents.lock().await.keys().cloned().collect();
        for uri in uris {
            self.publish_diagnostics(uri).await;
        }
    }

    async fn clear_diagnostics(&self, uri: Url) {
        self.client.publish_diagnostics(uri, Vec::new(), None).await;
    }
}

#[tower_lsp::async_trait]
impl HandleCodeAction for Backend {
    async fn handle_code_action(
        &self,
        params: CodeActionParams,
    ) -> LspResult<Option<CodeActionResponse>> {
        if let Some(only) = &params.context.only {
            if !only.contains(&CodeActionKind::QUICKFIX) {
                return Ok(None);
            }
        }

        let uri = params.text_document.uri;
        let doc_state = match self.documents.lock().await.get(&uri) {
            Some(state) => state.clone(),
            None => return Ok(None),
        };

        if !doc_state.is_rst(&uri) {
            return Ok(None);
        }

        let problems = {
            let registry = self.registry.read().await;
            check_in_range(&doc_state.content, &registry, from_lsp_range(params.range))
        };

        let actions = problems
            .into_iter()
            .filter(Problem::is_fixable)
            .filter_map(|problem| fix_action(&uri, doc_state.version, problem))
            .collect();

        Ok(Some(actions))
    }
}

fn fix_action(uri: &Url, version: i32, problem: Problem) -> Option<CodeActionOrCommand> {
    let title = format!("Fix: {}", problem.message);
    let diagnostic = to_lsp_diagnostic(&problem);

    let args = ApplyFixArgs {
        uri: uri.clone(),
        version,
        problem,
    };
    let arguments = match args.to_arguments() {
        Ok(arguments) => arguments,
        Err(e) => {
            log::warn!("Skipping code action '{}': {:#}", title, e);
            return None;
        }
    };

    Some(CodeActionOrCommand::CodeAction(CodeAction {
        title: title.clone(),
        kind: Some(CodeActionKind::QUICKFIX),
        diagnostics: Some(vec![diagnostic]),
        command: Some(Command {
            title,
            command: APPLY_FIX_COMMAND.to_string(),
            arguments: Some(arguments),
        }),
        ..Default::default()
    }))
}

#[tower_lsp::async_trait]
impl HandleExecuteCommand for Backend {
    async fn handle_execute_command(
        &self,
        params: ExecuteCommandParams,
    ) -> LspResult<Option<Value>> {
        if params.command != APPLY_FIX_COMMAND {
            return Err(LspError::invalid_params(format!(
                "Unknown command: {}",
                params.command
            )));
        }

        let args = match ApplyFixArgs::from_arguments(params.arguments) {
            Ok(args) => args,
            Err(e) => {
                log::warn!("Ignoring malformed {} call: {:#}", APPLY_FIX_COMMAND, e);
                return Ok(None);
            }
        };

        let current_version = self
            .documents
            .lock()
            .await
            .get(&args.uri)
            .map(|state| state.version);

        match current_version {
            None => {
                log::warn!("Cannot apply fix, document is not open: {}", args.uri);
                return Ok(None);
            }
            Some(version) if version != args.version => {
                // The problem's positions belong to an older text
                log::warn!(
                    "Refusing stale fix for {}: computed for version {}, document is at {}",
                    args.uri,
                    args.version,
                    version
                );
            }
            Some(_) => match &args.problem.fix {
                Some(fix) => {
                    let mut collector = TextEditCollector::new();
                    fix.apply(&mut collector);

                    let edit = WorkspaceEdit {
                        changes: Some(HashMap::from([(
                            args.uri.clone(),
                            collector.into_edits(),
                        )])),
                        ..Default::default()
                    };

                    match self.client.apply_edit(edit).await {
                        Ok(response) if response.applied => {
                            log::debug!("Applied {} fix to {}", args.problem.rule_id, args.uri);
                        }
                        Ok(response) => {
                            log::warn!(
                                "Client rejected fix for {}: {}",
                                args.uri,
                                response.failure_reason.unwrap_or_default()
                            );
                        }
                        Err(e) => {
                            log::warn!("workspace/applyEdit failed for {}: {}", args.uri, e);
                        }
                    }
                }
                None => {
                    log::warn!("Problem {} carries no fix", args.problem.rule_id);
                }
            },
        }

        self.publish_diagnostics(args.uri).await;
        Ok(None)
    }
}
