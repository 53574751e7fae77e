//! Periodic snapshot persistence and startup restore.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, error, info, warn};

use crate::domain::entities::RedirectionRecord;
use crate::domain::repositories::{RedirectionMap, RedirectionStore};

/// Errors raised while reading or writing snapshot files.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot file {path} is not accessible: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("snapshot file {path} is malformed: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("snapshot task failed: {0}")]
    Task(String),
}

/// What happens when a periodic save fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveFailurePolicy {
    /// Log the failure and try again on the next tick.
    #[default]
    Continue,
    /// Stop the periodic task and hand the error to the caller.
    Abort,
}

/// Result of [`SnapshotManager::restore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// The file could not be opened; the store was left untouched.
    Missing,
    /// The file exists but holds no data; the store was left untouched.
    Empty,
    /// The store was replaced with this many entries.
    Restored(usize),
}

/// On-disk shape of a record: `{"OriginalURL": "...", "Hits": 3}`.
#[derive(Debug, Serialize, Deserialize)]
struct StoredRecord {
    #[serde(rename = "OriginalURL")]
    original_url: String,
    #[serde(rename = "Hits", default)]
    hits: u64,
}

impl From<RedirectionRecord> for StoredRecord {
    fn from(record: RedirectionRecord) -> Self {
        Self {
            original_url: record.original_url,
            hits: record.hits,
        }
    }
}

impl From<StoredRecord> for RedirectionRecord {
    fn from(stored: StoredRecord) -> Self {
        RedirectionRecord::with_hits(stored.original_url, stored.hits)
    }
}

/// Saves and restores the state of a [`RedirectionStore`].
///
/// The manager keeps no copy of the data; it only reads a full
/// [`RedirectionStore::enumerate`] view and writes a full
/// [`RedirectionStore::replace_all`] view.
#[derive(Debug, Clone)]
pub struct SnapshotManager {
    path: PathBuf,
    interval: Duration,
    failure_policy: SaveFailurePolicy,
}

/// Shortest accepted save interval; smaller values are raised to it.
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

impl SnapshotManager {
    /// Creates a manager writing to `path` every `interval`.
    ///
    /// An `interval` below [`MIN_INTERVAL`] (including zero) is raised to
    /// [`MIN_INTERVAL`].
    pub fn new(path: impl Into<PathBuf>, interval: Duration) -> Self {
        Self {
            path: path.into(),
            interval: interval.max(MIN_INTERVAL),
            failure_policy: SaveFailurePolicy::default(),
        }
    }

    pub fn with_failure_policy(mut self, policy: SaveFailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Restores `store` from the snapshot file.
    ///
    /// # Behavior
    ///
    /// - Unreadable or missing file: logged, store untouched, `Ok(Missing)`
    /// - Zero-byte file (or a JSON `null`): store untouched, `Ok(Empty)`
    /// - Valid JSON: store replaced, `Ok(Restored(n))`
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Parse`] if the contents are not a valid
    /// snapshot; the store is left untouched.
    pub fn restore<S>(&self, store: &S) -> Result<RestoreOutcome, SnapshotError>
    where
        S: RedirectionStore + ?Sized,
    {
        let bytes = match read_file(&self.path) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Snapshot file not readable, starting from empty store"
                );
                return Ok(RestoreOutcome::Missing);
            }
        };

        if bytes.is_empty() {
            debug!(path = %self.path.display(), "Snapshot file is empty");
            return Ok(RestoreOutcome::Empty);
        }

        let parsed: Option<HashMap<String, StoredRecord>> =
            serde_json::from_slice(&bytes).map_err(|source| SnapshotError::Parse {
                path: self.path.clone(),
                source,
            })?;

        let Some(parsed) = parsed else {
            return Ok(RestoreOutcome::Empty);
        };

        let mapping: RedirectionMap = parsed
            .into_iter()
            .map(|(id, stored)| (id, stored.into()))
            .collect();
        let count = mapping.len();

        store.replace_all(mapping);
        info!(path = %self.path.display(), entries = count, "Snapshot restored");

        Ok(RestoreOutcome::Restored(count))
    }

    /// Writes the current contents of `store` to the snapshot file,
    /// overwriting any previous snapshot.
    ///
    /// Data goes to `<path>.tmp` first and is renamed over `path` once fully
    /// synced, so a failed save leaves the previous snapshot in place.
    ///
    /// Returns the number of entries written.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Io`] if the file cannot be opened or written.
    pub fn save_once<S>(&self, store: &S) -> Result<usize, SnapshotError>
    where
        S: RedirectionStore + ?Sized,
    {
        let data: BTreeMap<String, StoredRecord> = store
            .enumerate()
            .into_iter()
            .map(|(id, record)| (id, record.into()))
            .collect();

        let tmp = self.tmp_path();
        let result = write_json(&tmp, &data).and_then(|()| fs::rename(&tmp, &self.path));

        if let Err(e) = result {
            let _ = fs::remove_file(&tmp);
            return Err(self.io_error(e));
        }

        Ok(data.len())
    }

    /// Runs [`Self::save_once`] on the blocking thread pool.
    pub async fn flush<S>(&self, store: Arc<S>) -> Result<usize, SnapshotError>
    where
        S: RedirectionStore + ?Sized + 'static,
    {
        let manager = self.clone();
        tokio::task::spawn_blocking(move || manager.save_once(store.as_ref()))
            .await
            .map_err(|e| SnapshotError::Task(e.to_string()))?
    }

    /// Saves `store` on every interval tick until `cancel` turns `true`
    /// or its sender is dropped.
    ///
    /// No save is started once the cancel signal has been observed; a save
    /// already running is allowed to finish.
    ///
    /// # Errors
    ///
    /// With [`SaveFailurePolicy::Abort`], returns the first save error.
    /// With [`SaveFailurePolicy::Continue`] errors are logged and the loop
    /// keeps going.
    pub async fn run_periodic<S>(
        &self,
        store: Arc<S>,
        mut cancel: watch::Receiver<bool>,
    ) -> Result<(), SnapshotError>
    where
        S: RedirectionStore + ?Sized + 'static,
    {
        let mut ticker = tokio::time::interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            if *cancel.borrow() {
                break;
            }

            tokio::select! {
                biased;

                changed = cancel.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
                _ = ticker.tick() => {
                    match self.flush(store.clone()).await {
                        Ok(entries) => debug!(entries, "Snapshot saved"),
                        Err(e) => match self.failure_policy {
                            SaveFailurePolicy::Continue => {
                                error!(error = %e, "Failed to save snapshot");
                            }
                            SaveFailurePolicy::Abort => {
                                error!(error = %e, "Failed to save snapshot, stopping snapshot task");
                                return Err(e);
                            }
                        },
                    }
                }
            }
        }

        info!("Snapshot task stopped");
        Ok(())
    }

    /// Spawns [`Self::run_periodic`] on the tokio runtime.
    pub fn spawn_periodic<S>(&self, store: Arc<S>) -> SnapshotTask
    where
        S: RedirectionStore + ?Sized + 'static,
    {
        let (cancel_tx, cancel_rx) = watch::channel(false);
        let manager = self.clone();

        let handle = tokio::spawn(async move { manager.run_periodic(store, cancel_rx).await });

        SnapshotTask {
            cancel: cancel_tx,
            handle,
        }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn io_error(&self, source: io::Error) -> SnapshotError {
        SnapshotError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

/// Handle to a running periodic snapshot task.
pub struct SnapshotTask {
    cancel: watch::Sender<bool>,
    handle: JoinHandle<Result<(), SnapshotError>>,
}

impl SnapshotTask {
    /// Waits until the task exits on its own, which only happens on a save
    /// error under [`SaveFailurePolicy::Abort`].
    pub async fn wait(&mut self) -> Result<(), SnapshotError> {
        (&mut self.handle)
            .await
            .map_err(|e| SnapshotError::Task(e.to_string()))?
    }

    /// Signals the task to stop and waits for it to return.
    pub async fn shutdown(self) -> Result<(), SnapshotError> {
        let _ = self.cancel.send(true);
        self.handle
            .await
            .map_err(|e| SnapshotError::Task(e.to_string()))?
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

fn write_json(path: &Path, data: &BTreeMap<String, StoredRecord>) -> io::Result<()> {
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, data)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    writer.get_ref().sync_all()
}

fn read_file(path: &Path) -> io::Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(bytes)
}
