//! # Console Command Handling
//!
//! Turns one input line into one output line.
//!
//! ## Line Protocol
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  in:  {"kind":"login","userName":"alice","role":"admin"}                │
//! │  out: {"ok":true,"result":{"kind":"session","data":{...}}}              │
//! │                                                                         │
//! │  in:  {"kind":"addProduct","name":"X","priceCents":-1,"category":"Y"}   │
//! │  out: {"ok":false,"error":{"code":"VALIDATION_ERROR","message":"..."}}  │
//! │                                                                         │
//! │  in:  (blank) or  # comment                                             │
//! │  out: nothing                                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use shopfront_core::{CartStore, CatalogStore, Command, Coordinator, Outcome, SessionStore};
use tracing::debug;

use crate::config::ConsoleConfig;
use crate::error::ApiError;

/// One response line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    pub ok: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Outcome>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

impl Response {
    pub fn success(outcome: Outcome) -> Self {
        Response {
            ok: true,
            result: Some(outcome),
            error: None,
        }
    }

    pub fn failure(error: ApiError) -> Self {
        Response {
            ok: false,
            result: None,
            error: Some(error),
        }
    }
}

impl From<Result<Outcome, ApiError>> for Response {
    fn from(result: Result<Outcome, ApiError>) -> Self {
        match result {
            Ok(outcome) => Response::success(outcome),
            Err(error) => Response::failure(error),
        }
    }
}

/// Console session: one coordinator, fed line by line.
#[derive(Debug)]
pub struct Console {
    coordinator: Coordinator,
    echo_commands: bool,
}

impl Console {
    /// Builds the stores described by the config.
    pub fn new(config: &ConsoleConfig) -> Self {
        let catalog = if config.seed_catalog {
            CatalogStore::seeded()
        } else {
            CatalogStore::new()
        };

        Console {
            coordinator: Coordinator::new(SessionStore::new(), catalog, CartStore::new()),
            echo_commands: config.echo_commands,
        }
    }

    /// Handles one input line.
    ///
    /// Returns `Ok(None)` for blank and `#` comment lines. Command failures
    /// are encoded in the response; only encoding itself can fail.
    pub fn handle_line(&mut self, line: &str) -> Result<Option<String>, serde_json::Error> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        if self.echo_commands {
            debug!(line, "Received command line");
        }

        let response = self.execute(line);
        serde_json::to_string(&response).map(Some)
    }

    /// Decodes and dispatches one command.
    pub fn execute(&mut self, line: &str) -> Response {
        let result = serde_json::from_str::<Command>(line)
            .map_err(ApiError::from)
            .and_then(|command| self.coordinator.dispatch(command).map_err(ApiError::from));
        Response::from(result)
    }
}
