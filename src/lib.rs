//! rfwalk
//!
//! Typed client for Redfish and Swordfish management services. A
//! [`Transport`] talks to one service; resources fetched through it decode
//! into typed values that resolve their links to other resources on demand.
//!
//! ```ignore
//! use rfwalk::redfish::ServiceRoot;
//! use rfwalk::Transport;
//!
//! async fn walk() -> rfwalk::Result<()> {
//!     let transport = Transport::new("https://bmc.example.com", None)?;
//!     transport.set_token("session-token").await;
//!
//!     let root = ServiceRoot::connect(&transport).await?;
//!     for system in root.systems().await? {
//!         for storage in system.storage().await? {
//!             for drive in storage.drives().await? {
//!                 println!("{} {:?}", drive.entity.id, drive.capacity_bytes);
//!             }
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod common;
pub mod error;
pub mod redfish;
pub mod service;
pub mod swordfish;

pub use common::Resource;
pub use error::{Error, Result};
pub use service::Transport;
