use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::debug;

/// The live service never returns more images than this per request.
pub const MAX_IMAGES: usize = 50;

const IMAGES_PER_COLLECTION: usize = 3;

const SAMPLE_BREEDS: &[(&str, &[&str])] = &[
    ("akita", &[]),
    ("hound", &["afghan", "basset", "english"]),
    ("pug", &[]),
    ("retriever", &["curly", "golden"]),
];

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub message: T,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
}

#[derive(Clone, Debug, Default)]
pub struct Breed {
    /// Images filed directly under the breed (breeds without sub-breeds).
    pub images: Vec<String>,
    pub sub_breeds: BTreeMap<String, Vec<String>>,
}

impl Breed {
    /// All images of the breed, including those of its sub-breeds.
    pub fn all_images(&self) -> Vec<String> {
        self.images
            .iter()
            .chain(self.sub_breeds.values().flatten())
            .cloned()
            .collect()
    }
}

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    pub breeds: BTreeMap<String, Breed>,
}

impl Catalog {
    /// A small fixed catalog shaped like the live one.
    pub fn sample() -> Self {
        let breeds = SAMPLE_BREEDS
            .iter()
            .map(|(name, subs)| {
                let breed = if subs.is_empty() {
                    Breed {
                        images: image_urls(name),
                        sub_breeds: BTreeMap::new(),
                    }
                } else {
                    Breed {
                        images: Vec::new(),
                        sub_breeds: subs
                            .iter()
                            .map(|sub| (sub.to_string(), image_urls(&format!("{name}-{sub}"))))
                            .collect(),
                    }
                };
                (name.to_string(), breed)
            })
            .collect();
        Self { breeds }
    }

    pub fn breed_list(&self) -> BTreeMap<String, Vec<String>> {
        self.breeds
            .iter()
            .map(|(name, breed)| (name.clone(), breed.sub_breeds.keys().cloned().collect()))
            .collect()
    }

    pub fn all_images(&self) -> Vec<String> {
        self.breeds.values().flat_map(Breed::all_images).collect()
    }

    pub fn breed(&self, name: &str) -> Result<&Breed, ApiError> {
        self.breeds.get(name).ok_or(ApiError::BreedNotFound)
    }

    pub fn sub_breed_images(&self, breed: &str, sub_breed: &str) -> Result<&[String], ApiError> {
        self.breed(breed)?
            .sub_breeds
            .get(sub_breed)
            .map(Vec::as_slice)
            .ok_or(ApiError::SubBreedNotFound)
    }
}

fn image_urls(dir: &str) -> Vec<String> {
    (1..=IMAGES_PER_COLLECTION)
        .map(|n| format!("https://images.dog.ceo/breeds/{dir}/n0000000{n}.jpg"))
        .collect()
}

/// Failures reported the way the live service does: HTTP 404 and an
/// `"error"` envelope.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiError {
    BreedNotFound,
    SubBreedNotFound,
}

impl ApiError {
    pub fn message(self) -> &'static str {
        match self {
            ApiError::BreedNotFound => "Breed not found (main breed does not exist)",
            ApiError::SubBreedNotFound => "Breed not found (sub breed does not exist)",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let envelope = Envelope {
            message: self.message(),
            status: "error".to_string(),
            code: Some(StatusCode::NOT_FOUND.as_u16()),
        };
        (StatusCode::NOT_FOUND, Json(envelope)).into_response()
    }
}

/// Catalog plus the cursor that stands in for randomness: picks walk the
/// pool round-robin, so replies are deterministic per server instance.
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
    cursor: Arc<AtomicUsize>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            cursor: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn pick(&self, pool: &[String], count: usize) -> Vec<String> {
        if pool.is_empty() {
            return Vec::new();
        }
        let count = count.min(MAX_IMAGES);
        let start = self.cursor.fetch_add(count, Ordering::Relaxed);
        (0..count)
            .map(|i| pool[(start + i) % pool.len()].clone())
            .collect()
    }

    fn pick_one(&self, pool: &[String]) -> String {
        self.pick(pool, 1).pop().unwrap_or_default()
    }
}

type Reply<T> = Result<Json<Envelope<T>>, ApiError>;

fn success<T>(message: T) -> Json<Envelope<T>> {
    Json(Envelope {
        message,
        status: "success".to_string(),
        code: None,
    })
}

pub fn app() -> Router {
    app_with(Catalog::sample())
}

pub fn app_with(catalog: Catalog) -> Router {
    Router::new()
        .route("/api/breeds/image/random", get(random_image))
        .route("/api/breeds/image/random/{count}", get(random_images))
        .route("/api/breeds/list/all", get(list_all))
        .route("/api/breed/{breed}/images", get(breed_images))
        .route("/api/breed/{breed}/images/random", get(breed_random_image))
        .route("/api/breed/{breed}/images/random/{count}", get(breed_random_images))
        .route("/api/breed/{breed}/list", get(list_sub_breeds))
        .route("/api/breed/{breed}/{sub_breed}/images", get(sub_breed_images))
        .route(
            "/api/breed/{breed}/{sub_breed}/images/random",
            get(sub_breed_random_image),
        )
        .route(
            "/api/breed/{breed}/{sub_breed}/images/random/{count}",
            get(sub_breed_random_images),
        )
        .with_state(AppState::new(catalog))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn random_image(State(state): State<AppState>) -> Json<Envelope<String>> {
    success(state.pick_one(&state.catalog.all_images()))
}

async fn random_images(
    State(state): State<AppState>,
    Path(count): Path<usize>,
) -> Json<Envelope<Vec<String>>> {
    success(state.pick(&state.catalog.all_images(), count))
}

async fn list_all(State(state): State<AppState>) -> Json<Envelope<BTreeMap<String, Vec<String>>>> {
    success(state.catalog.breed_list())
}

fn breed_pool(state: &AppState, breed: &str) -> Result<Vec<String>, ApiError> {
    state
        .catalog
        .breed(breed)
        .map(Breed::all_images)
        .inspect_err(|_| debug!(%breed, "unknown breed"))
}

fn sub_breed_pool(state: &AppState, breed: &str, sub_breed: &str) -> Result<Vec<String>, ApiError> {
    state
        .catalog
        .sub_breed_images(breed, sub_breed)
        .map(<[String]>::to_vec)
        .inspect_err(|e| debug!(%breed, %sub_breed, ?e, "unknown sub-breed"))
}

async fn breed_images(State(state): State<AppState>, Path(breed): Path<String>) -> Reply<Vec<String>> {
    Ok(success(breed_pool(&state, &breed)?))
}

async fn breed_random_image(State(state): State<AppState>, Path(breed): Path<String>) -> Reply<String> {
    let pool = breed_pool(&state, &breed)?;
    Ok(success(state.pick_one(&pool)))
}

async fn breed_random_images(
    State(state): State<AppState>,
    Path((breed, count)): Path<(String, usize)>,
) -> Reply<Vec<String>> {
    let pool = breed_pool(&state, &breed)?;
    Ok(success(state.pick(&pool, count)))
}

async fn list_sub_breeds(State(state): State<AppState>, Path(breed): Path<String>) -> Reply<Vec<String>> {
    let breed = state.catalog.breed(&breed)?;
    Ok(success(breed.sub_breeds.keys().cloned().collect()))
}

async fn sub_breed_images(
    State(state): State<AppState>,
    Path((breed, sub_breed)): Path<(String, String)>,
) -> Reply<Vec<String>> {
    Ok(success(sub_breed_pool(&state, &breed, &sub_breed)?))
}

async fn sub_breed_random_image(
    State(state): State<AppState>,
    Path((breed, sub_breed)): Path<(String, String)>,
) -> Reply<String> {
    let pool = sub_breed_pool(&state, &breed, &sub_breed)?;
    Ok(success(state.pick_one(&pool)))
}

async fn sub_breed_random_images(
    State(state): State<AppState>,
    Path((breed, sub_breed, count)): Path<(String, String, usize)>,
) -> Reply<Vec<String>> {
    let pool = sub_breed_pool(&state, &breed, &sub_breed)?;
    Ok(success(state.pick(&pool, count)))
}
