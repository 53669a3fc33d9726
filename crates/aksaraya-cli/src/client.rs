//! CLI error types and the per-invocation context.

use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;
use std::time::Duration;

use aksaraya_client::config::ClientConfig;
use aksaraya_client::{ClientError, FallbackMessage, SessionStore};
use anyhow::anyhow;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue};

use crate::cli::Cli;
use crate::session_file::{FilePersistence, default_session_path};
use crate::transport::HttpCatalogApi;

pub(crate) const HEADER_REQUEST_ID: &str = "x-request-id";

/// CLI-level error type to distinguish validation from operational failures.
#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }

    /// Map a client error, preferring `fallback` over generic status text.
    pub(crate) fn from_client(err: &ClientError, fallback: FallbackMessage) -> Self {
        match err {
            ClientError::Validation { reason, .. } => Self::validation(*reason),
            ClientError::Config { field, reason } => Self::validation(format!("{field}: {reason}")),
            ClientError::Unauthenticated => {
                Self::validation("not logged in; run `aksaraya login` first")
            }
            ClientError::Status {
                status: 400 | 401 | 403 | 409 | 422,
                ..
            } => Self::validation(err.user_message(fallback.default_text())),
            ClientError::Status {
                operation,
                status,
                message,
            } => {
                let message = message
                    .as_deref()
                    .filter(|text| !text.trim().is_empty())
                    .unwrap_or_else(|| fallback.default_text());
                Self::failure(anyhow!("{operation}: {message} (status {status})"))
            }
            ClientError::Transport { operation, detail } => {
                Self::failure(anyhow!("request for {operation} failed: {detail}"))
            }
            ClientError::Decode { operation, detail } => Self::failure(anyhow!(
                "response for {operation} could not be decoded: {detail}"
            )),
            ClientError::Storage { operation, detail } => {
                Self::failure(anyhow!("session storage {operation} failed: {detail}"))
            }
        }
    }
}

impl From<ClientError> for CliError {
    fn from(err: ClientError) -> Self {
        Self::from_client(&err, FallbackMessage::Unknown)
    }
}

impl Display for CliError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("cli error")
    }
}

impl std::error::Error for CliError {}

/// Application context passed to command handlers.
pub(crate) struct AppContext {
    pub(crate) api: HttpCatalogApi,
    pub(crate) config: ClientConfig,
    pub(crate) session_file: PathBuf,
}

impl AppContext {
    /// Build the HTTP client and validated configuration from CLI flags.
    pub(crate) fn from_cli(cli: &Cli, trace_id: &str) -> CliResult<Self> {
        let config = ClientConfig::new(cli.api_url.as_str()).map_err(CliError::from)?;

        let mut default_headers = HeaderMap::new();
        let request_id = HeaderValue::from_str(trace_id).map_err(|_| {
            CliError::failure(anyhow!("trace identifier contains invalid characters"))
        })?;
        default_headers.insert(HEADER_REQUEST_ID, request_id);

        let client = Client::builder()
            .timeout(Duration::from_secs(cli.timeout))
            .default_headers(default_headers)
            .build()
            .map_err(|err| CliError::failure(anyhow!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            api: HttpCatalogApi::new(client, &config),
            config,
            session_file: cli.session_file.clone().unwrap_or_else(default_session_path),
        })
    }

    /// Session rebuilt from the session file.
    pub(crate) fn session(&self) -> SessionStore<FilePersistence> {
        SessionStore::restore(FilePersistence::new(self.session_file.clone()))
    }
}

/// Parse the API URL provided to the CLI.
pub(crate) fn parse_url(input: &str) -> Result<url::Url, String> {
    input
        .parse::<url::Url>()
        .map_err(|err| format!("invalid URL '{input}': {err}"))
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::Path;

    use aksaraya_client::SessionPersistence;
    use aksaraya_client::SessionSnapshot;
    use aksaraya_client::config::ClientConfig;
    use aksaraya_api_models::User;
    use httpmock::MockServer;
    use reqwest::Client;

    use super::AppContext;
    use crate::session_file::FilePersistence;
    use crate::transport::HttpCatalogApi;

    /// Context pointing at `server` with its session file under `dir`.
    pub(crate) fn context_with(server: &MockServer, dir: &Path) -> AppContext {
        let config = ClientConfig::new(&server.base_url()).expect("valid base URL");
        AppContext {
            api: HttpCatalogApi::new(Client::new(), &config),
            config,
            session_file: dir.join("session.json"),
        }
    }

    /// Context with `user` already logged in under `token`.
    pub(crate) fn signed_in_context(
        server: &MockServer,
        dir: &Path,
        user: User,
        token: &str,
    ) -> AppContext {
        let ctx = context_with(server, dir);
        FilePersistence::new(ctx.session_file.clone())
            .save(&SessionSnapshot {
                token: Some(token.to_string()),
                user: Some(user),
            })
            .expect("seed session");
        ctx
    }
}
