//! # File I/O Module
//!
//! Handles session file operations with safety features:
//! - **Atomic saves**: Write to .tmp, sync, rename to prevent corruption
//! - **File locking**: Prevent concurrent edits on shared drives
//! - **Version validation**: Ensure schema compatibility
//!
//! ## File Format
//!
//! Sessions are saved as `.cts` (Centrum session) files containing JSON.
//! Lock files use the `.cts.lock` extension with metadata about who holds
//! the lock.
//!
//! ## Example
//!
//! ```rust,no_run
//! use stat_core::file_io::{save_session, load_session, FileLock};
//! use stat_core::session::Session;
//! use std::path::Path;
//!
//! let session = Session::new("Analyst", "Survey");
//! let path = Path::new("survey.cts");
//!
//! // Acquire lock before saving
//! let lock = FileLock::acquire(path, "analyst@lab.example")?;
//!
//! // Save with atomic write
//! save_session(&session, path)?;
//!
//! // Lock is released when dropped
//! drop(lock);
//! # Ok::<(), stat_core::errors::StatError>(())
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::errors::{StatError, StatResult};
use crate::session::{Session, SCHEMA_VERSION};

/// Lock file metadata stored in .cts.lock files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockInfo {
    /// User identifier (email or username)
    pub user_id: String,
    /// Machine name where lock was acquired
    pub machine: String,
    /// Process ID that holds the lock
    pub pid: u32,
    /// When the lock was acquired
    pub locked_at: DateTime<Utc>,
}

impl LockInfo {
    /// Create new lock info for the current process
    pub fn new(user_id: impl Into<String>) -> Self {
        LockInfo {
            user_id: user_id.into(),
            machine: hostname().unwrap_or_else(|| "unknown".to_string()),
            pid: std::process::id(),
            locked_at: Utc::now(),
        }
    }
}

fn hostname() -> Option<String> {
    #[cfg(windows)]
    {
        std::env::var("COMPUTERNAME").ok()
    }
    #[cfg(not(windows))]
    {
        std::env::var("HOSTNAME")
            .ok()
            .or_else(|| std::env::var("HOST").ok())
    }
}

/// File lock guard that releases the lock when dropped.
///
/// Uses both:
/// 1. OS-level file locking (via fs2) for process safety
/// 2. .lock file with metadata for user visibility
pub struct FileLock {
    session_path: PathBuf,
    lock_path: PathBuf,
    /// The underlying file handle (keeps the OS lock alive)
    _lock_file: File,
    /// Lock metadata
    pub info: LockInfo,
}

impl FileLock {
    /// Acquire an exclusive lock on a session file.
    ///
    /// # Returns
    ///
    /// * `Ok(FileLock)` - Lock acquired successfully
    /// * `Err(StatError::FileLocked)` - Another process holds the lock
    pub fn acquire(path: &Path, user_id: impl Into<String>) -> StatResult<Self> {
        let lock_path = lock_path_for(path);
        let info = LockInfo::new(user_id);

        // An existing, non-stale lock file means someone else is editing
        if lock_path.exists() {
            if let Ok(existing) = read_lock_info(&lock_path) {
                if !is_lock_stale(&existing) {
                    return Err(StatError::file_locked(
                        path.display().to_string(),
                        format!("{} ({})", existing.user_id, existing.machine),
                        existing.locked_at.to_rfc3339(),
                    ));
                }
            }
        }

        let mut lock_file = OpenOptions::new()
            .write(true)
            .read(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .map_err(|e| {
                StatError::file_error("create lock", lock_path.display().to_string(), e.to_string())
            })?;

        lock_file.try_lock_exclusive().map_err(|_| {
            StatError::file_locked(
                path.display().to_string(),
                "another process".to_string(),
                "unknown".to_string(),
            )
        })?;

        let lock_json =
            serde_json::to_string_pretty(&info).map_err(|e| StatError::SerializationError {
                reason: e.to_string(),
            })?;

        lock_file.write_all(lock_json.as_bytes()).map_err(|e| {
            StatError::file_error("write lock", lock_path.display().to_string(), e.to_string())
        })?;
        lock_file.sync_all().map_err(|e| {
            StatError::file_error("sync lock", lock_path.display().to_string(), e.to_string())
        })?;

        Ok(FileLock {
            session_path: path.to_path_buf(),
            lock_path,
            _lock_file: lock_file,
            info,
        })
    }

    /// Check if a file is locked without acquiring the lock.
    ///
    /// Returns `Some(LockInfo)` if locked, `None` if available.
    pub fn check(path: &Path) -> Option<LockInfo> {
        let lock_path = lock_path_for(path);
        if !lock_path.exists() {
            return None;
        }
        match read_lock_info(&lock_path) {
            Ok(info) if !is_lock_stale(&info) => Some(info),
            _ => None,
        }
    }

    /// Get the path to the session file
    pub fn session_path(&self) -> &Path {
        &self.session_path
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // OS lock releases with the handle; the sidecar file needs cleanup
        let _ = fs::remove_file(&self.lock_path);
    }
}

fn lock_path_for(session_path: &Path) -> PathBuf {
    let mut lock_path = session_path.to_path_buf();
    let extension = lock_path
        .extension()
        .map(|e| format!("{}.lock", e.to_string_lossy()))
        .unwrap_or_else(|| "lock".to_string());
    lock_path.set_extension(extension);
    lock_path
}

fn read_lock_info(lock_path: &Path) -> StatResult<LockInfo> {
    let mut contents = String::new();
    File::open(lock_path)
        .and_then(|mut f| f.read_to_string(&mut contents))
        .map_err(|e| {
            StatError::file_error("read lock", lock_path.display().to_string(), e.to_string())
        })?;

    serde_json::from_str(&contents).map_err(|e| StatError::SerializationError {
        reason: e.to_string(),
    })
}

/// A lock is stale when its process is gone (same machine) or it is more
/// than 24 hours old.
fn is_lock_stale(info: &LockInfo) -> bool {
    if let Some(our_machine) = hostname() {
        if info.machine == our_machine {
            #[cfg(unix)]
            {
                if fs::metadata(format!("/proc/{}", info.pid)).is_err() {
                    return true;
                }
            }
            #[cfg(windows)]
            {
                use std::process::Command;
                let output = Command::new("tasklist")
                    .args(["/FI", &format!("PID eq {}", info.pid), "/NH"])
                    .output();
                if let Ok(output) = output {
                    let stdout = String::from_utf8_lossy(&output.stdout);
                    if stdout.contains("No tasks") || !stdout.contains(&info.pid.to_string()) {
                        return true;
                    }
                }
            }
        }
    }

    Utc::now() - info.locked_at > chrono::Duration::hours(24)
}

/// Save a session to a file with atomic write semantics.
///
/// The save process:
/// 1. Serialize session to JSON
/// 2. Write to a temporary file (.tmp)
/// 3. Sync to disk (fsync)
/// 4. Rename .tmp to .cts (atomic on most filesystems)
///
/// This prevents corruption if the process is interrupted during write.
pub fn save_session(session: &Session, path: &Path) -> StatResult<()> {
    let json =
        serde_json::to_string_pretty(session).map_err(|e| StatError::SerializationError {
            reason: e.to_string(),
        })?;

    let tmp_path = path.with_extension("cts.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        StatError::file_error(
            "create temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        )
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        StatError::file_error(
            "write temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        )
    })?;

    tmp_file.sync_all().map_err(|e| {
        StatError::file_error(
            "sync temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        )
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        StatError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Load a session from a file.
///
/// # Returns
///
/// * `Ok(Session)` - Successfully loaded session
/// * `Err(StatError::VersionMismatch)` - File version is incompatible
/// * `Err(StatError::SerializationError)` - Invalid JSON
/// * `Err(StatError::FileError)` - I/O error
pub fn load_session(path: &Path) -> StatResult<Session> {
    let mut contents = String::new();
    File::open(path)
        .and_then(|mut f| f.read_to_string(&mut contents))
        .map_err(|e| StatError::file_error("open", path.display().to_string(), e.to_string()))?;

    let session: Session =
        serde_json::from_str(&contents).map_err(|e| StatError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    validate_version(&session.meta.version)?;

    Ok(session)
}

/// Load a session, returning whether it's read-only due to a lock.
///
/// # Returns
///
/// * `Ok((Session, None))` - Loaded successfully, no lock
/// * `Ok((Session, Some(LockInfo)))` - Loaded, but another user has the lock
/// * `Err(_)` - Failed to load
pub fn load_session_with_lock_check(path: &Path) -> StatResult<(Session, Option<LockInfo>)> {
    let session = load_session(path)?;
    let lock_info = FileLock::check(path);
    Ok((session, lock_info))
}

/// Validate that a file version is compatible with the current schema.
///
/// Major version must match; within 0.x, files written by a newer minor
/// version are rejected.
fn validate_version(file_version: &str) -> StatResult<()> {
    let parse = |v: &str| -> Vec<u32> { v.split('.').filter_map(|p| p.parse().ok()).collect() };
    let file_parts = parse(file_version);
    let current_parts = parse(SCHEMA_VERSION);

    let mismatch = || StatError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }
    if current_parts[0] == 0
        && file_parts.len() > 1
        && current_parts.len() > 1
        && file_parts[1] > current_parts[1]
    {
        return Err(mismatch());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;

    fn temp_session_path(name: &str) -> PathBuf {
        temp_dir().join(format!("centrum_test_{}.cts", name))
    }

    #[test]
    fn test_lock_path_generation() {
        let session_path = Path::new("/path/to/session.cts");
        let lock_path = lock_path_for(session_path);
        assert_eq!(lock_path, Path::new("/path/to/session.cts.lock"));
    }

    #[test]
    fn test_lock_info_creation() {
        let info = LockInfo::new("test@example.com");
        assert_eq!(info.user_id, "test@example.com");
        assert!(info.pid > 0);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        use crate::session::Dataset;

        let path = temp_session_path("roundtrip");

        let mut session = Session::new("Test Analyst", "Roundtrip");
        session.add_dataset(Dataset::new("Trial 1", "1, 2, 3"));
        save_session(&session, &path).unwrap();

        let loaded = load_session(&path).unwrap();
        assert_eq!(loaded.meta.analyst, "Test Analyst");
        assert_eq!(loaded.meta.title, "Roundtrip");
        assert_eq!(loaded.dataset_count(), 1);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let path = temp_session_path("atomic");
        let tmp_path = path.with_extension("cts.tmp");

        let session = Session::new("Test", "Atomic");
        save_session(&session, &path).unwrap();

        assert!(!tmp_path.exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_file_lock_acquire_and_release() {
        let path = temp_session_path("lock_test");
        File::create(&path).unwrap();

        let lock = FileLock::acquire(&path, "test@example.com").unwrap();
        assert_eq!(lock.info.user_id, "test@example.com");
        assert_eq!(lock.session_path(), path.as_path());

        let lock_path = lock_path_for(&path);
        assert!(lock_path.exists());

        drop(lock);
        assert!(!lock_path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.0").is_ok());
        assert!(validate_version("0.1.5").is_ok());

        // Different major should fail
        assert!(validate_version("1.0.0").is_err());

        // Newer minor (in 0.x) should fail
        assert!(validate_version("0.2.0").is_err());
    }

    #[test]
    fn test_load_with_lock_check() {
        let path = temp_session_path("lock_check");

        let session = Session::new("Test", "Lock check");
        save_session(&session, &path).unwrap();

        let (loaded, lock_info) = load_session_with_lock_check(&path).unwrap();
        assert_eq!(loaded.meta.title, "Lock check");
        assert!(lock_info.is_none());

        let _ = fs::remove_file(&path);
    }
}
