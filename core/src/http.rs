//! HTTP request and response described as plain data.
//!
//! # Design
//! The client builds an `HttpRequest` and parses an `HttpResponse` without
//! touching the network; a `Transport` sits in between and is the only part
//! that does I/O. Every call is a bodiless GET, so the request carries no
//! method, headers, or body.

/// A GET request described as plain data.
///
/// Built by `DogClient::build`. `path` is relative to the base URL and is
/// kept separately so tests can assert on it without knowing the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub path: String,
    pub url: String,
}

/// A fully read HTTP response.
///
/// `status` is the HTTP status code. The client logs it but never branches
/// on it: the envelope's own `status` field decides success. `body` is kept
/// as raw bytes; text validity is the JSON decoder's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}
