use std::io;
use std::path::PathBuf;

/// Resolves a user- or model-supplied path string to its canonical absolute
/// form (symlinks and `.`/`..` resolved). The canonical path is what the
/// session uses as a deduplication key, so two spellings of the same file
/// collapse to one context entry. Fails if the path does not exist.
pub fn normalize_path(raw: &str) -> io::Result<PathBuf> {
    std::fs::canonicalize(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn different_spellings_normalize_identically() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("a.txt"), "x").unwrap();

        let plain = dir.path().join("a.txt");
        let dotted = dir.path().join("./a.txt");
        let via_parent = dir.path().join("sub/../a.txt");

        let canonical = normalize_path(plain.to_str().unwrap()).unwrap();
        assert_eq!(canonical, normalize_path(dotted.to_str().unwrap()).unwrap());
        assert_eq!(
            canonical,
            normalize_path(via_parent.to_str().unwrap()).unwrap()
        );
    }

    #[test]
    fn missing_path_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.txt");
        assert!(normalize_path(missing.to_str().unwrap()).is_err());
    }
}
