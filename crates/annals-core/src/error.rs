use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced while loading the events data file.
///
/// A load failure is terminal for that attempt: callers report it once and
/// continue with an empty dataset. There is no retry path.
#[derive(Debug, Error)]
pub enum Error {
    /// The data file could not be read from disk.
    #[error("failed to read events data from {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data file is not a valid JSON array of event records.
    #[error("failed to parse events data from {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_names_the_path() {
        let err = Error::Read {
            path: PathBuf::from("/tmp/missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("/tmp/missing.json"));
    }
}
