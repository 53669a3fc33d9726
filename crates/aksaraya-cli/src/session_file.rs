//! JSON file persistence for the CLI login session.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use aksaraya_client::{ClientError, ClientResult, SessionPersistence, SessionSnapshot};

const SESSION_DIR: &str = ".config/aksaraya";
const SESSION_FILE: &str = "session.json";

/// Session snapshot stored as pretty JSON at a fixed path.
#[derive(Debug, Clone)]
pub(crate) struct FilePersistence {
    path: PathBuf,
}

impl FilePersistence {
    pub(crate) const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

fn storage_error(operation: &'static str, err: impl std::fmt::Display) -> ClientError {
    ClientError::Storage {
        operation,
        detail: err.to_string(),
    }
}

impl SessionPersistence for FilePersistence {
    fn load(&self) -> ClientResult<SessionSnapshot> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Ok(SessionSnapshot::default());
            }
            Err(err) => return Err(storage_error("read", err)),
        };
        serde_json::from_str(&raw).map_err(|err| storage_error("decode", err))
    }

    fn save(&self, snapshot: &SessionSnapshot) -> ClientResult<()> {
        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| storage_error("create_dir", err))?;
        }
        let json =
            serde_json::to_string_pretty(snapshot).map_err(|err| storage_error("encode", err))?;
        let mut file = open_private(&self.path).map_err(|err| storage_error("open", err))?;
        restrict_permissions(&self.path)?;
        file.write_all(json.as_bytes())
            .map_err(|err| storage_error("write", err))
    }

    fn clear(&self) -> ClientResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(storage_error("remove", err)),
        }
    }
}

/// Open `path` for writing; a newly created file is owner-only from the start.
fn open_private(path: &Path) -> std::io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    options.open(path)
}

/// Tighten a file that existed before with wider permissions.
#[cfg(unix)]
fn restrict_permissions(path: &Path) -> ClientResult<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
        .map_err(|err| storage_error("chmod", err))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> ClientResult<()> {
    Ok(())
}

/// `$HOME/.config/aksaraya/session.json`, or `session.json` in the working directory.
pub(crate) fn default_session_path() -> PathBuf {
    std::env::var_os("HOME").map_or_else(
        || PathBuf::from(SESSION_FILE),
        |home| PathBuf::from(home).join(SESSION_DIR).join(SESSION_FILE),
    )
}
