use std::fs;
use std::path::Path;

use crate::shared::image_source::{ImageOrigin, ImageSource, SourceError};

/// Loads an image file as-is; the bytes are not decoded or validated here.
pub fn read_image_file(path: &Path) -> Result<ImageSource, SourceError> {
    let bytes = fs::read(path).map_err(|e| SourceError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    log::debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(ImageSource::new(bytes, ImageOrigin::File(path.to_path_buf())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_bytes_and_records_origin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("face.jpg");
        fs::write(&path, b"jpeg bytes").unwrap();

        let src = read_image_file(&path).unwrap();
        assert_eq!(src.bytes(), b"jpeg bytes");
        assert_eq!(src.origin(), &ImageOrigin::File(path));
    }

    #[test]
    fn test_missing_file_returns_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_image_file(&dir.path().join("absent.jpg"));
        assert!(matches!(result, Err(SourceError::Read { .. })));
    }

    #[test]
    fn test_empty_file_yields_empty_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.jpg");
        fs::write(&path, b"").unwrap();
        assert!(read_image_file(&path).unwrap().is_empty());
    }
}
