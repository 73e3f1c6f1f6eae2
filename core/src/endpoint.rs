//! Endpoint path templates.
//!
//! Breed and sub-breed names are trimmed of surrounding whitespace and
//! otherwise interpolated as-is. Nothing is percent-encoded: callers supply
//! URL-safe names. Counts are written verbatim, including values above the
//! service's own limit of 50.

/// One variant per supported API endpoint, carrying the caller's arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    RandomImage,
    MultipleRandomImages { count: u32 },
    RandomImageByBreed { breed: &'a str },
    MultipleRandomImagesByBreed { breed: &'a str, count: u32 },
    ImagesByBreed { breed: &'a str },
    RandomImageBySubBreed { breed: &'a str, sub_breed: &'a str },
    MultipleRandomImagesBySubBreed { breed: &'a str, sub_breed: &'a str, count: u32 },
    ImagesBySubBreed { breed: &'a str, sub_breed: &'a str },
    BreedsList,
    SubBreedsList { breed: &'a str },
}

impl Endpoint<'_> {
    /// Render the path relative to the API base URL, without a leading `/`.
    pub fn path(&self) -> String {
        match *self {
            Endpoint::RandomImage => "breeds/image/random".to_string(),
            Endpoint::MultipleRandomImages { count } => format!("breeds/image/random/{count}"),
            Endpoint::RandomImageByBreed { breed } => {
                format!("breed/{}/images/random", breed.trim())
            }
            Endpoint::MultipleRandomImagesByBreed { breed, count } => {
                format!("breed/{}/images/random/{count}", breed.trim())
            }
            Endpoint::ImagesByBreed { breed } => format!("breed/{}/images", breed.trim()),
            Endpoint::RandomImageBySubBreed { breed, sub_breed } => {
                format!("breed/{}/{}/images/random", breed.trim(), sub_breed.trim())
            }
            Endpoint::MultipleRandomImagesBySubBreed { breed, sub_breed, count } => format!(
                "breed/{}/{}/images/random/{count}",
                breed.trim(),
                sub_breed.trim()
            ),
            Endpoint::ImagesBySubBreed { breed, sub_breed } => {
                format!("breed/{}/{}/images", breed.trim(), sub_breed.trim())
            }
            Endpoint::BreedsList => "breeds/list/all".to_string(),
            Endpoint::SubBreedsList { breed } => format!("breed/{}/list", breed.trim()),
        }
    }
}
