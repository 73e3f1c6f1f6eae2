//! Stateless client for the dog image API.
//!
//! # Design
//! `DogClient` holds only a `base_url` and a `Transport`, and carries no
//! mutable state between calls. Every operation is `build` (endpoint to
//! `HttpRequest`), `send` (one GET through the transport) and a `parse_*`
//! method for the reply's payload shape. `build` and `parse_*` are public and
//! free of I/O, so a caller with its own HTTP stack can drive them directly.

use tracing::debug;

use crate::endpoint::Endpoint;
use crate::error::{DogApiError, Result};
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};
use crate::types::{decode_envelope, BreedMap};

/// Base URL of the public dog.ceo API.
pub const DEFAULT_BASE_URL: &str = "https://dog.ceo/api";

/// Synchronous, stateless client for the dog image API.
#[derive(Debug, Clone)]
pub struct DogClient<T = UreqTransport> {
    base_url: String,
    transport: T,
}

impl DogClient {
    /// Client for the public API using a default ureq agent.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client for another deployment of the same API, e.g. a local mock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self::with_transport(base_url, UreqTransport::new())
    }
}

impl Default for DogClient {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> DogClient<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build(&self, endpoint: Endpoint<'_>) -> HttpRequest {
        let path = endpoint.path();
        HttpRequest {
            url: format!("{}/{path}", self.base_url),
            path,
        }
    }

    /// The shared request primitive: one GET, body read in full.
    pub fn send(&self, request: &HttpRequest) -> Result<HttpResponse> {
        debug!(url = %request.url, "GET");
        self.transport.get(&request.url)
    }

    pub fn parse_image(&self, response: HttpResponse) -> Result<String> {
        decode_envelope(&response.body)
    }

    pub fn parse_images(&self, response: HttpResponse) -> Result<Vec<String>> {
        decode_envelope(&response.body)
    }

    pub fn parse_breeds(&self, response: HttpResponse) -> Result<BreedMap> {
        decode_envelope(&response.body)
    }

    /// Like `parse_images`, but an empty list is `EmptySubBreeds`.
    pub fn parse_sub_breeds(&self, response: HttpResponse) -> Result<Vec<String>> {
        let sub_breeds: Vec<String> = decode_envelope(&response.body)?;
        if sub_breeds.is_empty() {
            return Err(DogApiError::EmptySubBreeds);
        }
        Ok(sub_breeds)
    }

    fn fetch(&self, endpoint: Endpoint<'_>) -> Result<HttpResponse> {
        self.send(&self.build(endpoint))
    }

    /// A random image from the whole collection.
    pub fn random_image(&self) -> Result<String> {
        let response = self.fetch(Endpoint::RandomImage)?;
        self.parse_image(response)
    }

    /// `count` random images from the whole collection. The service returns
    /// at most 50; larger counts are sent unchanged.
    pub fn multiple_random_images(&self, count: u32) -> Result<Vec<String>> {
        let response = self.fetch(Endpoint::MultipleRandomImages { count })?;
        self.parse_images(response)
    }

    /// A random image of `breed`, e.g. `"hound"`.
    pub fn random_image_by_breed(&self, breed: &str) -> Result<String> {
        let response = self.fetch(Endpoint::RandomImageByBreed { breed })?;
        self.parse_image(response)
    }

    pub fn multiple_random_images_by_breed(&self, breed: &str, count: u32) -> Result<Vec<String>> {
        let response = self.fetch(Endpoint::MultipleRandomImagesByBreed { breed, count })?;
        self.parse_images(response)
    }

    /// Every image of `breed`.
    pub fn images_by_breed(&self, breed: &str) -> Result<Vec<String>> {
        let response = self.fetch(Endpoint::ImagesByBreed { breed })?;
        self.parse_images(response)
    }

    /// A random image of a sub-breed, e.g. `("hound", "afghan")`.
    pub fn random_image_by_sub_breed(&self, breed: &str, sub_breed: &str) -> Result<String> {
        let response = self.fetch(Endpoint::RandomImageBySubBreed { breed, sub_breed })?;
        self.parse_image(response)
    }

    pub fn multiple_random_images_by_sub_breed(
        &self,
        breed: &str,
        sub_breed: &str,
        count: u32,
    ) -> Result<Vec<String>> {
        let response = self.fetch(Endpoint::MultipleRandomImagesBySubBreed {
            breed,
            sub_breed,
            count,
        })?;
        self.parse_images(response)
    }

    pub fn images_by_sub_breed(&self, breed: &str, sub_breed: &str) -> Result<Vec<String>> {
        let response = self.fetch(Endpoint::ImagesBySubBreed { breed, sub_breed })?;
        self.parse_images(response)
    }

    /// Every breed, mapped to its sub-breeds (empty for breeds without any).
    pub fn breeds_list(&self) -> Result<BreedMap> {
        let response = self.fetch(Endpoint::BreedsList)?;
        self.parse_breeds(response)
    }

    /// Sub-breeds of `breed`. Fails with `EmptySubBreeds` when it has none.
    pub fn sub_breeds_list(&self, breed: &str) -> Result<Vec<String>> {
        let response = self.fetch(Endpoint::SubBreedsList { breed })?;
        self.parse_sub_breeds(response)
    }
}
