/// Duration probing implementation using lofty
use crate::error::{MetadataError, Result};
use lofty::AudioFile;
use std::path::Path;

/// File extensions accepted for upload
pub const SUPPORTED_EXTENSIONS: [&str; 2] = ["mp3", "wav"];

/// Return the lowercased extension if the filename names a supported format
pub fn supported_extension(filename: &str) -> Option<String> {
    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())?
        .to_ascii_lowercase();

    SUPPORTED_EXTENSIONS.contains(&ext.as_str()).then_some(ext)
}

/// Read the duration, in whole seconds, from the container's properties
pub fn read_duration_seconds(path: &Path) -> Result<u64> {
    if !path.exists() {
        return Err(MetadataError::FileNotFound(path.display().to_string()));
    }

    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    if supported_extension(filename).is_none() {
        return Err(MetadataError::UnsupportedFormat(
            path.display().to_string(),
        ));
    }

    let tagged_file = lofty::read_from_path(path)?;

    Ok(tagged_file.properties().duration().as_secs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_mp3_and_wav_case_insensitively() {
        assert_eq!(supported_extension("song.mp3"), Some("mp3".to_string()));
        assert_eq!(supported_extension("Take.Five.WAV"), Some("wav".to_string()));
    }

    #[test]
    fn rejects_other_extensions() {
        assert_eq!(supported_extension("song.ogg"), None);
        assert_eq!(supported_extension("song.flac"), None);
        assert_eq!(supported_extension("noextension"), None);
    }

    #[test]
    fn nonexistent_file_returns_error() {
        let err = read_duration_seconds(Path::new("/no/such/file.mp3")).unwrap_err();
        assert!(matches!(err, MetadataError::FileNotFound(_)));
    }

    #[test]
    fn unsupported_format_is_rejected_before_probing() {
        // The extension gate runs on the path itself, so the file need not parse
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cover.png");
        std::fs::write(&path, b"not audio").unwrap();

        let err = read_duration_seconds(&path).unwrap_err();
        assert!(matches!(err, MetadataError::UnsupportedFormat(_)));
    }
}
