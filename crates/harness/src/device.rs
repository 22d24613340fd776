use std::path::{Path, PathBuf};
use std::rc::Rc;

use scorekeeper_core::ManualClock;
use scorekeeper_engine::Session;
use scorekeeper_storage::SqliteBlobStore;
use tempfile::TempDir;

/// Starting wall clock for test devices, mid-November 2023.
pub const START_MS: i64 = 1_700_000_000_000;

/// A simulated watch: a session over an on-disk store that can be restarted
/// to check what survives a process exit.
pub struct TestDevice {
    pub session: Session<SqliteBlobStore>,
    clock: Rc<ManualClock>,
    path: PathBuf,
    _dir: TempDir,
}

impl TestDevice {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("scorekeeper.db");
        let clock = Rc::new(ManualClock::new(START_MS));
        let session = open_session(&path, &clock)?;
        Ok(Self {
            session,
            clock,
            path,
            _dir: dir,
        })
    }

    /// Drop the running session and boot a new one from the same database.
    pub fn restart(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.session = open_session(&self.path, &self.clock)?;
        Ok(())
    }

    pub fn clock(&self) -> &ManualClock {
        &self.clock
    }

    pub fn db_path(&self) -> &Path {
        &self.path
    }
}

fn open_session(
    path: &Path,
    clock: &Rc<ManualClock>,
) -> Result<Session<SqliteBlobStore>, Box<dyn std::error::Error>> {
    let store = SqliteBlobStore::open(path)?;
    Ok(Session::with_clock(store, Box::new(Rc::clone(clock))))
}
