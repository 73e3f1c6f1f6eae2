//! Synchronous client for the dog.ceo image API.
//!
//! # Overview
//! One method per endpoint: random images, images by breed or sub-breed,
//! and the breed and sub-breed listings. Every call is a single GET whose
//! JSON reply is an envelope `{"status": ..., "message": ...}`; a non-success
//! status becomes `DogApiError::Api` carrying the service's message.
//!
//! # Design
//! - `DogClient` is stateless: a base URL plus a `Transport`.
//! - Requests are built (`build`) and replies parsed (`parse_*`) without
//!   I/O; only the `Transport` touches the network. `UreqTransport` is the
//!   default.
//! - Payloads decode straight into `String`, `Vec<String>` or `BreedMap`.
//!
//! ```no_run
//! let client = dogapi::DogClient::new();
//! let url = client.random_image_by_breed("hound")?;
//! println!("{url}");
//! # Ok::<(), dogapi::DogApiError>(())
//! ```

pub mod client;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::{DogClient, DEFAULT_BASE_URL};
pub use endpoint::Endpoint;
pub use error::{DogApiError, Result};
pub use http::{HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport, DEFAULT_BODY_LIMIT};
pub use types::BreedMap;
