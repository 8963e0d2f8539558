//! Process-wide client, for applications that want one shared instance.
//!
//! Install the client once during startup; it is never replaced. Code that
//! can take a [`LexofficeClient`] parameter should do that instead.
//!
//! ```no_run
//! use lexoffice_rs::client::global;
//! use lexoffice_rs::LexofficeClient;
//!
//! # fn main() -> lexoffice_rs::Result<()> {
//! global::install(LexofficeClient::from_env()?)?;
//!
//! let client = global::global().expect("installed above");
//! assert!(client.is_access_token_valid());
//! # Ok(())
//! # }
//! ```

use std::sync::OnceLock;

use super::http::LexofficeClient;
use crate::{Error, Result};

static CLIENT: OnceLock<LexofficeClient> = OnceLock::new();

/// Set the process-wide client.
///
/// # Errors
///
/// Returns [`Error::Config`] if a client was already installed.
pub fn install(client: LexofficeClient) -> Result<()> {
    CLIENT
        .set(client)
        .map_err(|_| Error::Config("global lexoffice client is already installed".to_string()))?;
    tracing::debug!("global lexoffice client installed");
    Ok(())
}

/// The process-wide client, if one was installed.
pub fn global() -> Option<&'static LexofficeClient> {
    CLIENT.get()
}
