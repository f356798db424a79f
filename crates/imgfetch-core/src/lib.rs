//! imgfetch Core - Image Fetcher
//!
//! Downloads images over HTTP, keeps only responses that declare an
//! `image/*` content type, and skips content already saved in the same run.

mod error;
mod fetcher;
mod filename;
mod hashes;
pub mod report;
mod storage;

pub use error::*;
pub use fetcher::*;
pub use filename::*;
pub use hashes::*;
pub use storage::*;
