//! Credentials for the lexoffice API.
//!
//! lexoffice uses a single long-lived API key per organization, sent as a
//! bearer token. There is no session or refresh flow; the only thing the
//! client can do locally is check that the key looks like one.
//!
//! ```
//! use lexoffice_rs::AccessToken;
//!
//! let token = AccessToken::new("not-a-real-key");
//! assert!(!token.is_well_formed());
//! ```

mod token;

pub use token::{AccessToken, TOKEN_LENGTH};
