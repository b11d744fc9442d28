//! Typed client for the OneSignal push notification REST API.
//!
//! # Overview
//! `Client` holds the base URL, the app id and up to two credentials, and
//! runs every call through one pipeline: build an `HttpRequest`, send it
//! through a `Transport`, decode the `HttpResponse` into a typed value or an
//! `ApiError`. The resource wrappers (`Apps`, `Players`, `Notifications`)
//! only pick a path, a body and a credential kind.
//!
//! # Design
//! - `Client` is immutable after construction apart from the pluggable
//!   transport and debug flag, and is shared by reference.
//! - `AuthKind` selects the app key or the user key per request.
//! - Each wrapper operation has a pure `build_*` counterpart, so hosts that
//!   own their HTTP stack can call `Client::decode` on their own responses.
//! - Nothing is retried.
//!
//! ```no_run
//! use onesignal_core::{Client, ClientOptions, NotificationRequest};
//!
//! # fn main() -> onesignal_core::Result<()> {
//! let client = Client::new(ClientOptions::from_env())?;
//! let request = NotificationRequest {
//!     contents: Some([("en".to_string(), "Hello".to_string())].into_iter().collect()),
//!     included_segments: Some(vec!["Subscribed Users".to_string()]),
//!     ..NotificationRequest::default()
//! };
//! let created = client.notifications().create(&request)?.into_result()?;
//! println!("sent {} to {} recipients", created.id, created.recipients);
//! # Ok(())
//! # }
//! ```

pub mod apps;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod notifications;
mod path;
pub mod players;
#[cfg(feature = "ureq")]
pub mod transport;
pub mod types;

pub use apps::Apps;
pub use auth::AuthKind;
pub use client::{Client, Reply, NO_BODY};
pub use config::{ClientOptions, DEFAULT_BASE_URL};
pub use error::{ApiError, Result};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use notifications::Notifications;
pub use players::Players;
#[cfg(feature = "ureq")]
pub use transport::UreqTransport;
pub use types::*;
