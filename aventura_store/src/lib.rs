//! JSON-backed session store shared by the adventure runtime.
//!
//! Each key holds one whole document (the character roster, the friend list,
//! the inventory, the visited-location log). Writes replace the document for
//! that key; reads of a key that was never written produce the empty default
//! instead of an error, so callers never observe a torn or partial document.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

/// Session key for the playable character roster.
pub const CHARACTERS_KEY: &str = "personajes";
/// Session key for the list of befriended animals.
pub const FRIENDS_KEY: &str = "amigos";
/// Session key for the carried inventory.
pub const INVENTORY_KEY: &str = "objetos";
/// Session key for the ordered log of visited locations.
pub const VISITED_KEY: &str = "lugaresVisitados";

/// One stack of a carried item as persisted under [`INVENTORY_KEY`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryEntry {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
}

impl InventoryEntry {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        InventoryEntry {
            name: name.into(),
            quantity,
        }
    }
}

/// Simplified stand-in for the browser-local storage the game saves into.
#[derive(Debug, Default, Clone)]
pub struct SessionStore {
    documents: BTreeMap<String, Value>,
    dirty: bool,
    backing_path: Option<PathBuf>,
}

impl SessionStore {
    pub fn from_json_file(path: Option<&Path>) -> Result<Self> {
        let mut store = SessionStore {
            documents: BTreeMap::new(),
            dirty: false,
            backing_path: path.map(|p| p.to_path_buf()),
        };
        if let Some(p) = path {
            if p.exists() {
                let raw = fs::read_to_string(p)
                    .with_context(|| format!("failed to read session store: {}", p.display()))?;
                match serde_json::from_str::<BTreeMap<String, Value>>(&raw) {
                    Ok(documents) => store.documents = documents,
                    Err(err) => {
                        log::warn!(
                            "session store at {} is not a JSON object ({err}); starting empty",
                            p.display()
                        );
                    }
                }
            }
        }
        Ok(store)
    }

    /// Returns the document saved under `key`, or the empty default when the
    /// key was never written or no longer matches the expected shape.
    pub fn get<T>(&self, key: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        let Some(document) = self.documents.get(key) else {
            return T::default();
        };
        match serde_json::from_value(document.clone()) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("session document '{key}' has an unexpected shape ({err}); using the empty default");
                T::default()
            }
        }
    }

    /// Replaces the whole document under `key`.
    pub fn save<T: Serialize>(&mut self, key: impl Into<String>, value: &T) {
        let key = key.into();
        let document =
            serde_json::to_value(value).expect("session documents serialize to plain JSON");
        let needs_write = match self.documents.get(&key) {
            Some(existing) => existing != &document,
            None => true,
        };
        if needs_write {
            self.documents.insert(key, document);
            self.dirty = true;
        }
    }

    /// Reports whether `key` was ever written, even to an empty document.
    pub fn contains(&self, key: &str) -> bool {
        self.documents.contains_key(key)
    }

    pub fn set_backing_path(&mut self, path: PathBuf) {
        self.backing_path = Some(path);
    }

    pub fn backing_path(&self) -> Option<&Path> {
        self.backing_path.as_deref()
    }

    /// Writes every document back to the backing file, if one is configured.
    pub fn flush(&mut self) -> Result<()> {
        let Some(path) = self.backing_path.as_ref() else {
            // No configured backing file; treat as successful no-op.
            self.dirty = false;
            return Ok(());
        };

        if !self.dirty {
            return Ok(());
        }

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create session directory: {}", parent.display())
                })?;
            }
        }

        let serialized = serde_json::to_string_pretty(&self.documents)
            .with_context(|| format!("failed to serialize session store: {}", path.display()))?;
        fs::write(path, serialized)
            .with_context(|| format!("failed to write session store: {}", path.display()))?;
        self.dirty = false;
        Ok(())
    }

    pub fn flush_to_path(&self, path: &Path) -> Result<()> {
        let mut snapshot = self.clone();
        snapshot.set_backing_path(path.to_path_buf());
        snapshot.flush()
    }
}
