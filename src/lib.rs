//! # wowapi - World of Warcraft community API client
//!
//! A blocking Rust client for the region-partitioned WoW community API.
//! It resolves regions and locales, builds localized request URLs, optionally
//! signs requests with an application key, and decodes responses into typed
//! records.
//!
//! ## Features
//!
//! - Region table with aliases (`"US"` or `"United States"`, ...) and locale validation
//! - One typed getter per resource: achievements, auction data, battle pets,
//!   challenge leaderboards, character profiles
//! - Optional HMAC-SHA1 request signing (`Authorization: BNET <key>:<signature>`)
//! - Deterministic, percent-encoded query strings
//! - Configurable timeouts and host override
//!
//! ## Basic Usage
//!
//! ```no_run
//! use wowapi::{ApiClient, CharacterField};
//!
//! fn main() -> Result<(), wowapi::WowError> {
//!     // Empty locale selects the region default (en_GB for Europe)
//!     let client = ApiClient::new("EU", "")?;
//!
//!     let achievement = client.get_achievement(2144)?;
//!     println!("{} ({} points)", achievement.title, achievement.points);
//!
//!     let character = client.get_character_with_fields(
//!         "Argent Dawn",
//!         "Tomé",
//!         &[CharacterField::Guild, CharacterField::Titles],
//!     )?;
//!     println!("{} level {}", character.name, character.level);
//!     Ok(())
//! }
//! ```
//!
//! ## Authentication
//!
//! ```no_run
//! use wowapi::ApiClient;
//!
//! let client = ApiClient::new("US", "en_US")?
//!     .with_credentials("public-key", "shared-secret");
//! let challenges = client.get_challenges("")?;
//! # Ok::<(), wowapi::WowError>(())
//! ```

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod region;
pub mod rest;
pub mod signer;
pub mod time;

// Re-export main types for convenience
pub use client::Config;
pub use endpoints::{validate_character_fields, CharacterField};
pub use error::{Result, WowError};
pub use models::*;
pub use region::Region;
pub use rest::{params, ApiClient, Params};
pub use signer::{Credentials, SignatureMode};
pub use time::Timestamp;
