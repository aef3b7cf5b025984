use crate::app::errors::{Error, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Creates (or truncates) the trace log.
pub fn create(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).map_err(|source| Error::LogOpen {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufWriter::new(file))
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    #[test]
    fn truncates_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.txt");
        std::fs::write(&path, b"old contents").unwrap();

        let mut log = create(&path).unwrap();
        log.write_all(b"a \n").unwrap();
        drop(log);

        assert_eq!(b"a \n".to_vec(), std::fs::read(&path).unwrap());
    }

    #[test]
    fn missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("trace.txt");
        match create(&path) {
            Err(Error::LogOpen { path: p, .. }) => assert_eq!(path, p),
            _ => panic!("LogOpen expected"),
        }
    }
}
