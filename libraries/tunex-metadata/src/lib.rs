//! TuneX Metadata
//!
//! Duration probing for uploaded audio files.
//!
//! Uploads are restricted to MP3 and WAV; the duration is derived from the
//! audio container's properties, never trusted from the client.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! assert!(tunex_metadata::supported_extension("take-five.mp3").is_some());
//! assert!(tunex_metadata::supported_extension("cover.png").is_none());
//!
//! let seconds = tunex_metadata::read_duration_seconds(Path::new("/music/take-five.mp3"))?;
//! # Ok(())
//! # }
//! ```

mod error;
mod probe;

pub use error::{MetadataError, Result};
pub use probe::{read_duration_seconds, supported_extension, SUPPORTED_EXTENSIONS};
