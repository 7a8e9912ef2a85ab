use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DevError {
    #[error("{what} not found at {}", path.display())]
    MissingPath {
        what: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("file watch failed: {0}")]
    Watch(#[from] notify::Error),
    #[error("cannot listen on {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("build command is empty")]
    EmptyBuildCommand,
}
