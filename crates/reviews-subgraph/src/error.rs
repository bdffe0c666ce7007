use std::path::PathBuf;

/// Errors loading review fixtures.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("reading review fixtures {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing review fixtures {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
