//! Filesystem storage for the file-backed database.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use chrono::Utc;
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};

use fauna_core::Result;
use fauna_core::error::{Error, ExternalCallError, ProtocolError};
use fauna_core::{CollectionName, RecordRef, UserData};

fn map_io(err: std::io::Error) -> Error {
    ExternalCallError::Storage {
        message: format!("IO error: {}", err),
    }
    .into()
}

fn map_json(err: serde_json::Error) -> Error {
    ExternalCallError::Storage {
        message: format!("corrupt document: {}", err),
    }
    .into()
}

/// A document as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredDocument {
    /// Decimal document id.
    pub id: String,
    /// Write timestamp in microseconds.
    pub ts: i64,
    /// Application attributes.
    pub data: UserData,
    /// Password hash (bcrypt), if the document has credentials.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
}

/// Filesystem-backed storage for a local database.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a new file store at the given root directory.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Get the database directory.
    fn db_dir(&self) -> PathBuf {
        self.root.join("db")
    }

    /// Get the directory holding one collection's documents.
    fn collection_dir(&self, collection: &CollectionName) -> PathBuf {
        self.db_dir().join("collections").join(collection.as_str())
    }

    /// Get the path for a specific document.
    fn document_path(&self, collection: &CollectionName, id: &str) -> PathBuf {
        self.collection_dir(collection).join(format!("{}.json", id))
    }

    /// Get the write lock file path.
    fn lock_path(&self) -> PathBuf {
        self.db_dir().join("write.lock")
    }

    /// Generate a new document id from the clock.
    pub fn generate_id(&self) -> String {
        Utc::now().timestamp_micros().max(1).to_string()
    }

    /// Run `f` while holding the exclusive write lock.
    fn with_write_lock<T>(&self, f: impl FnOnce() -> Result<T>) -> Result<T> {
        let lock_path = self.lock_path();

        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent).map_err(map_io)?;
        }

        let lock_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(map_io)?;

        lock_file.lock_exclusive().map_err(map_io)?;
        let result = f();
        lock_file.unlock().map_err(map_io)?;

        result
    }

    // ========================================================================
    // Document Operations
    // ========================================================================

    /// Insert a document with a fresh id.
    ///
    /// When `unique_field` is set and the new data carries that field, no other
    /// document in the collection may hold the same value.
    #[instrument(skip(self, data, password_hash))]
    pub fn insert_document(
        &self,
        collection: &CollectionName,
        data: &UserData,
        password_hash: Option<&str>,
        unique_field: Option<&str>,
    ) -> Result<StoredDocument> {
        self.with_write_lock(|| {
            if let Some(field) = unique_field
                && let Some(value) = data.get(field)
            {
                self.ensure_unique(collection, field, value)?;
            }

            let mut id = self.generate_id();
            while self.document_path(collection, &id).exists() {
                id = next_id(&id);
            }

            let document = StoredDocument {
                id,
                ts: Utc::now().timestamp_micros(),
                data: data.clone(),
                password_hash: password_hash.map(str::to_string),
            };

            let path = self.document_path(collection, &document.id);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(map_io)?;
            }

            let content = serde_json::to_string_pretty(&document).map_err(map_json)?;
            let temp_path = path.with_extension("tmp");
            fs::write(&temp_path, &content).map_err(map_io)?;
            fs::rename(&temp_path, &path).map_err(map_io)?;

            debug!(collection = %collection, id = %document.id, "Inserted document");

            Ok(document)
        })
    }

    /// Read a document by reference.
    pub fn get_document(&self, reference: &RecordRef) -> Result<Option<StoredDocument>> {
        let path = self.document_path(reference.collection(), reference.id());

        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path).map_err(map_io)?;
        let document = serde_json::from_str(&content).map_err(map_json)?;

        Ok(Some(document))
    }

    /// Read every document in a collection, ordered by id.
    pub fn list_documents(&self, collection: &CollectionName) -> Result<Vec<StoredDocument>> {
        let dir = self.collection_dir(collection);

        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut entries: Vec<_> = fs::read_dir(&dir)
            .map_err(map_io)?
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "json"))
            .collect();

        entries.sort_by_key(|e| e.file_name());

        let mut documents = Vec::with_capacity(entries.len());
        for entry in entries {
            let content = fs::read_to_string(entry.path()).map_err(map_io)?;
            documents.push(serde_json::from_str(&content).map_err(map_json)?);
        }

        Ok(documents)
    }

    fn ensure_unique(&self, collection: &CollectionName, field: &str, value: &Value) -> Result<()> {
        let taken = self
            .list_documents(collection)?
            .iter()
            .any(|doc| doc.data.get(field) == Some(value));

        if taken {
            debug!(collection = %collection, field, "Unique field already taken");
            return Err(ProtocolError::conflict("document is not unique.").into());
        }

        Ok(())
    }
}

/// The id after `id`, used when the clock hands out an id that is taken.
fn next_id(id: &str) -> String {
    id.parse::<u64>()
        .map(|n| n.saturating_add(1))
        .unwrap_or(1)
        .to_string()
}
