//! Slug allocation with collision retry.

use rand::Rng;
use tracing::{debug, warn};

use spinhub_core::error::AppError;
use spinhub_core::result::AppResult;
use spinhub_core::traits::SlugDirectory;
use spinhub_core::types::Slug;

use super::slugify::slugify;

/// Attempts before giving up on a name.
const MAX_ATTEMPTS: usize = 10;

/// Length of the random base used when a name slugifies to nothing.
const RANDOM_BASE_LEN: usize = 8;

/// Length of the random suffix appended on collision.
const SUFFIX_LEN: usize = 4;

const SUFFIX_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Allocates unique slugs by probing a [`SlugDirectory`].
#[derive(Debug, Clone)]
pub struct SlugGenerator;

impl SlugGenerator {
    /// Creates a new slug generator.
    pub fn new() -> Self {
        Self
    }

    /// Derives a unique slug for a display name.
    ///
    /// The base is the slugified name, or a random lowercase string when
    /// the name has no usable characters. On collision a fresh `-xxxx`
    /// suffix is drawn from the base and the directory probed again.
    /// Exhausting the attempt limit is a conflict error, not a silent
    /// duplicate.
    pub async fn allocate(&self, name: &str, directory: &dyn SlugDirectory) -> AppResult<Slug> {
        let mut base = slugify(name);
        if base.is_empty() {
            base = random_lowercase(RANDOM_BASE_LEN);
            debug!(name, base = %base, "Name has no slug characters; using a random base");
        }

        let mut candidate = base.clone();
        for attempt in 0..MAX_ATTEMPTS {
            if !directory.slug_exists(&candidate).await? {
                debug!(slug = %candidate, attempt, "Allocated slug");
                return Slug::new(candidate);
            }
            candidate = format!("{base}-{}", random_suffix(SUFFIX_LEN));
        }

        warn!(name, base = %base, "Exhausted slug allocation attempts");
        Err(AppError::conflict(format!(
            "Could not allocate a unique slug for '{name}' after {MAX_ATTEMPTS} attempts"
        )))
    }
}

impl Default for SlugGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Draws `len` random lowercase letters.
fn random_lowercase(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
}

/// Draws `len` random characters from the suffix charset.
fn random_suffix(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| SUFFIX_CHARSET[rng.gen_range(0..SUFFIX_CHARSET.len())] as char)
        .collect()
}
