use std::path::Path;

use rusqlite::Connection;

use crate::error::StorageError;
use crate::traits::BlobStore;

/// Blob store over a single SQLite table. Every value is stored with its
/// BLAKE3 digest and checked on read.
pub struct SqliteBlobStore {
    conn: Connection,
}

impl SqliteBlobStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let conn = Connection::open(path)?;
        crate::schema::init_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        crate::schema::init_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    pub fn schema_version(&self) -> Result<i32, StorageError> {
        let version = self
            .conn
            .query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))?;
        Ok(version)
    }
}

fn checksum(value: &str) -> [u8; 32] {
    *blake3::hash(value.as_bytes()).as_bytes()
}

impl BlobStore for SqliteBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut stmt = self
            .conn
            .prepare("SELECT value, checksum FROM blobs WHERE key = ?1")?;
        let mut rows = stmt.query_map(rusqlite::params![key], |row| {
            let value: String = row.get(0)?;
            let digest: Vec<u8> = row.get(1)?;
            Ok((value, digest))
        })?;

        match rows.next() {
            Some(Ok((value, digest))) => {
                if digest.as_slice() != checksum(&value).as_slice() {
                    return Err(StorageError::ChecksumMismatch {
                        key: key.to_string(),
                    });
                }
                Ok(Some(value))
            }
            Some(Err(e)) => Err(StorageError::Sqlite(e)),
            None => Ok(None),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO blobs (key, value, checksum) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, checksum = excluded.checksum, updated_at = excluded.updated_at",
            rusqlite::params![key, value, checksum(value).as_slice()],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.conn
            .execute("DELETE FROM blobs WHERE key = ?1", rusqlite::params![key])?;
        Ok(())
    }
}
