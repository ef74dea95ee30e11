//! Object storage seam
//!
//! The core produces an encoded image buffer; storing it is the hosting
//! service's job. [`Uploader`] is the contract that service implements, and
//! [`object_key`] generates the random key names uploads are stored under.
//! Randomness is injected so key naming is seedable in tests.

use rand::distributions::Alphanumeric;
use rand::Rng;
use thiserror::Error;

/// Error reported by an [`Uploader`] implementation.
#[derive(Error, Debug)]
#[error("upload failed: {reason}")]
pub struct UploadError {
  /// Human-readable failure description
  pub reason: String,
}

/// Stores encoded image buffers and hands back their object keys.
pub trait Uploader {
  /// Stores `bytes` and returns the object key it is retrievable under.
  fn upload(&mut self, bytes: &[u8]) -> Result<String, UploadError>;
}

const KEY_LEN: usize = 16;

/// Generates a random object key: 16 ASCII alphanumerics plus an extension.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let key = storecard::object_key(&mut rng, "png");
/// assert_eq!(key.len(), 20);
/// assert!(key.ends_with(".png"));
/// ```
pub fn object_key(rng: &mut impl Rng, extension: &str) -> String {
  let mut key = String::with_capacity(KEY_LEN + 1 + extension.len());
  for _ in 0..KEY_LEN {
    key.push(rng.sample(Alphanumeric) as char);
  }
  key.push('.');
  key.push_str(extension);
  key
}
