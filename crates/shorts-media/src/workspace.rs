//! Per-request temporary workspaces.

use std::path::Path;
use tempfile::TempDir;

use crate::error::MediaResult;

/// Directory name prefix for request workspaces.
const WORKSPACE_PREFIX: &str = "ytshorts_";

/// An ephemeral directory owned by a single request.
///
/// Holds the downloaded source and the rendered clip. The directory is
/// removed when the guard drops; removal errors are swallowed. For streamed
/// responses the guard is moved into the body stream so cleanup runs only
/// after the last chunk has been sent (or the client disconnects).
#[derive(Debug)]
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Create a fresh workspace under the system temp directory.
    pub fn create() -> MediaResult<Self> {
        let dir = tempfile::Builder::new().prefix(WORKSPACE_PREFIX).tempdir()?;
        Ok(Self { dir })
    }

    /// Path of the workspace directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
