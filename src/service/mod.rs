//! Service connection module
//!
//! # Module Structure
//!
//! - [`transport`] - Authenticated session wrapper issuing verb calls
//! - [`http`] - Verb/status table, logging and error display helpers
//!
//! # Example
//!
//! ```ignore
//! use rfwalk::service::Transport;
//!
//! async fn example() -> rfwalk::Result<()> {
//!     let transport = Transport::new("https://bmc.example.com", None)?;
//!     transport.set_token("session-token").await;
//!     let root = transport.get("").await?;
//!     Ok(())
//! }
//! ```

pub mod http;
pub mod transport;

pub use http::{format_error, Verb, DEFAULT_SERVICE_ROOT, USER_AGENT};
pub use transport::{Transport, AUTH_TOKEN_HEADER};
