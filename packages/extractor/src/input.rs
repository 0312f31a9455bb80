//! Input acquisition: file or stdin, with transparent gzip decompression.
//!
//! Baseline distribution files come gzip-compressed; a `.gz` extension
//! selects decompression, anything else is read as plain text.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;

use crate::error::Result;

/// Read the whole input into a string.
///
/// # Arguments
/// * `path` - Input file, or `None` to read stdin
///
/// # Returns
/// The decompressed XML text
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => read_file(path),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Read a file, decompressing when the name ends in `.gz`.
fn read_file(path: &Path) -> Result<String> {
    let mut text = String::new();

    if path.extension().is_some_and(|ext| ext == "gz") {
        tracing::debug!(path = %path.display(), "reading gzip-compressed input");
        GzDecoder::new(File::open(path)?).read_to_string(&mut text)?;
    } else {
        File::open(path)?.read_to_string(&mut text)?;
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    const SAMPLE: &str = "<PubmedArticleSet></PubmedArticleSet>";

    #[test]
    fn test_read_plain_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("articles.xml");
        std::fs::write(&path, SAMPLE).unwrap();

        assert_eq!(read_input(Some(&path)).unwrap(), SAMPLE);
    }

    #[test]
    fn test_read_gzip_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("articles.xml.gz");

        let file = File::create(&path).unwrap();
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder.write_all(SAMPLE.as_bytes()).unwrap();
        encoder.finish().unwrap();

        assert_eq!(read_input(Some(&path)).unwrap(), SAMPLE);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.xml");

        assert!(read_input(Some(&path)).is_err());
    }
}
