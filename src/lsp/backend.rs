use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

use crate::lsp::document::DocumentState;
use crate::lsp::handlers::{
    HandleCodeAction, HandleDiagnostics, HandleExecuteCommand, APPLY_FIX_COMMAND,
};
use crate::settings::{SettingsEvent, SettingsWatcher};
use crate::validation::RuleRegistry;
use crate::Config;

/// The main LSP backend that holds state and implements the Language Server Protocol
#[derive(Clone)]
pub struct Backend {
    pub client: Client,
    pub documents: Arc<Mutex<HashMap<Url, DocumentState>>>,
    pub registry: Arc<RwLock<RuleRegistry>>,
    pub config: Arc<Mutex<Config>>,
    watcher: Arc<Mutex<Option<SettingsWatcher>>>,
}

impl Backend {
    pub fn new(client: Client, config: Config) -> Self {
        let registry = RuleRegistry::new(&config.load_settings());

        Self {
            client,
            documents: Arc::new(Mutex::new(HashMap::new())),
            registry: Arc::new(RwLock::new(registry)),
            config: Arc::new(Mutex::new(config)),
            watcher: Arc::new(Mutex::new(None)),
        }
    }

    /// Re-read every settings file and rebuild the rule registry
    pub async fn reload_settings(&self) {
        let settings = self.config.lock().await.load_settings();
        let registry = RuleRegistry::new(&settings);
        log::debug!("Rule registry rebuilt: {:?}", registry);
        *self.registry.write().await = registry;
    }

    /// Watch the settings files; any change reloads settings and re-publishes diagnostics
    async fn start_settings_watcher(&self) {
        let paths: Vec<PathBuf> = self
            .config
            .lock()
            .await
            .settings_sources()
            .into_iter()
            .map(|source| source.path)
            .collect();

        let (watcher, mut rx) = match SettingsWatcher::start(&paths) {
            Ok(started) => started,
            Err(e) => {
                self.client
                    .log_message(
                        MessageType::WARNING,
                        format!("Settings file watching unavailable: {}", e),
                    )
                    .await;
                return;
            }
        };

        log::debug!("Watching settings in {:?}", watcher.watched_dirs());
        *self.watcher.lock().await = Some(watcher);

        let backend = self.clone();
        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                match event {
                    SettingsEvent::SettingsFileChanged(path) => {
                        backend
                            .client
                            .log_message(
                                MessageType::INFO,
                                format!("Settings file changed: {}", path.display()),
                            )
                            .await;

                        backend.reload_settings().await;
                        backend.publish_all_diagnostics().await;
                    }
                    SettingsEvent::WatcherError(e) => {
                        backend
                            .client
                            .log_message(
                                MessageType::ERROR,
                                format!("Settings file watcher error: {}", e),
                            )
                            .await;
                    }
                }
            }
        });
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(
        &self,
        params: InitializeParams,
    ) -> tower_lsp::jsonrpc::Result<InitializeResult> {
        #[allow(deprecated)]
        let root_uri = params
            .workspace_folders
            .as_ref()
            .and_then(|folders| folders.first())
            .map(|folder| folder.uri.clone())
            .or(params.root_uri);

        if let Some(root) = root_uri.and_then(|uri| uri.to_file_path().ok()) {
            log::info!("Workspace root: {}", root.display());
            self.config.lock().await.set_workspace_root(root);
        }
        self.reload_settings().await;

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                code_action_provider: Some(CodeActionProviderCapability::Options(
                    CodeActionOptions {
                        code_action_kinds: Some(vec![CodeActionKind::QUICKFIX]),
                        ..Default::default()
                    },
                )),
                execute_command_provider: Some(ExecuteCommandOptions {
                    commands: vec![APPLY_FIX_COMMAND.to_string()],
                    ..Default::default()
                }),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "rst-style-ls".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.start_settings_watcher().await;
        self.client
            .log_message(MessageType::INFO, "rst-style-language-server initialized")
            .await;
    }

    async fn shutdown(&self) -> tower_lsp::jsonrpc::Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let document = params.text_document;
        let uri = document.uri.clone();
        let doc_state = DocumentState::new(document.text, document.version, document.language_id);

        let mut docs = self.documents.lock().await;
        docs.insert(uri.clone(), doc_state);
        drop(docs); // Release the lock before calling publish_diagnostics

        self.publish_diagnostics(uri).await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri.clone();
        let version = params.text_document.version;
        if let Some(change) = params.content_changes.into_iter().last() {
            let mut docs = self.documents.lock().await;
            let language_id = docs
                .get(&uri)
                .map(|state| state.language_id.clone())
                .unwrap_or_default();
            docs.insert(
                uri.clone(),
                DocumentState::new(change.text, version, language_id),
            );
            drop(docs); // Release the lock before calling publish_diagnostics

            self.publish_diagnostics(uri).await;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        self.documents.lock().await.remove(&uri);
        self.clear_diagnostics(uri).await;
    }

    async fn code_action(
        &self,
        params: CodeActionParams,
    ) -> tower_lsp::jsonrpc::Result<Option<CodeActionResponse>> {
        self.handle_code_action(params).await
    }

    async fn execute_command(
        &self,
        params: ExecuteCommandParams,
    ) -> tower_lsp::jsonrpc::Result<Option<serde_json::Value>> {
        self.handle_execute_command(params).await
    }
}
