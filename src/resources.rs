use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};
use crate::tables::DOMAIN;

pub const CARD_FILENAME: &str = "wheel-of-the-year-card.js";
pub const MODULE_RESOURCE: &str = "module";
pub const STORAGE_KEY: &str = "lovelace_resources";
pub const STORAGE_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceItem {
    pub id: String,
    #[serde(rename = "type")]
    pub res_type: String,
    pub url: String,
    /// Fields written by the host that this crate does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResourceItem {
    pub fn new(id: impl Into<String>, res_type: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            res_type: res_type.into(),
            url: url.into(),
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    Created(String),
    Updated(String),
    Unchanged,
}

pub trait ResourceRegistry {
    fn items(&self) -> Result<Vec<ResourceItem>>;
    fn create(&mut self, res_type: &str, url: &str) -> Result<ResourceItem>;
    fn update(&mut self, id: &str, res_type: &str, url: &str) -> Result<()>;
}

pub fn card_url() -> String {
    format!("/{DOMAIN}/{CARD_FILENAME}")
}

pub fn versioned_card_url(version: &str) -> String {
    format!("{}?v={}", card_url(), version)
}

pub fn resource_id(url: &str) -> String {
    let digest = Sha256::digest(url.as_bytes());
    hex::encode(&digest[..8])
}

/// Adds the card to the registry, or bumps a stale version of it.
pub fn register_card<R: ResourceRegistry + ?Sized>(
    registry: &mut R,
    version: &str,
) -> Result<Registration> {
    let url = versioned_card_url(version);
    let items = registry.items()?;

    match items.iter().find(|item| item.url.contains(DOMAIN)) {
        Some(existing) if existing.url.ends_with(version) => {
            log::debug!("card resource {} already at version {}", existing.id, version);
            Ok(Registration::Unchanged)
        }
        Some(existing) => {
            registry.update(&existing.id, MODULE_RESOURCE, &url)?;
            log::info!("updated card resource {} to {}", existing.id, url);
            Ok(Registration::Updated(existing.id.clone()))
        }
        None => {
            let created = registry.create(MODULE_RESOURCE, &url)?;
            log::info!("registered card resource {} at {}", created.id, url);
            Ok(Registration::Created(created.id))
        }
    }
}

/// Registration failures never abort startup.
pub fn register_card_or_warn<R: ResourceRegistry + ?Sized>(
    registry: &mut R,
    version: &str,
) -> Option<Registration> {
    match register_card(registry, version) {
        Ok(outcome) => Some(outcome),
        Err(e) => {
            log::warn!("could not register dashboard card: {e}");
            None
        }
    }
}

// ── In-memory registry ──

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryRegistry {
    pub items: Vec<ResourceItem>,
}

fn update_in(items: &mut [ResourceItem], id: &str, res_type: &str, url: &str) -> Result<()> {
    let item = items
        .iter_mut()
        .find(|item| item.id == id)
        .ok_or_else(|| Error::Registry(format!("no resource with id {id}")))?;
    item.res_type = res_type.to_string();
    item.url = url.to_string();
    Ok(())
}

fn create_in(items: &mut Vec<ResourceItem>, res_type: &str, url: &str) -> Result<ResourceItem> {
    let id = resource_id(url);
    if items.iter().any(|item| item.id == id) {
        return Err(Error::Registry(format!("resource id {id} already exists")));
    }
    let item = ResourceItem::new(id, res_type, url);
    items.push(item.clone());
    Ok(item)
}

impl ResourceRegistry for MemoryRegistry {
    fn items(&self) -> Result<Vec<ResourceItem>> {
        Ok(self.items.clone())
    }

    fn create(&mut self, res_type: &str, url: &str) -> Result<ResourceItem> {
        create_in(&mut self.items, res_type, url)
    }

    fn update(&mut self, id: &str, res_type: &str, url: &str) -> Result<()> {
        update_in(&mut self.items, id, res_type, url)
    }
}

// ── Storage file registry ──

// The file belongs to the host; unknown keys are carried through a rewrite untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct StorageData {
    #[serde(default)]
    items: Vec<ResourceItem>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct StorageFile {
    version: u32,
    key: String,
    data: StorageData,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Default for StorageFile {
    fn default() -> Self {
        Self {
            version: STORAGE_VERSION,
            key: STORAGE_KEY.to_string(),
            data: StorageData::default(),
            extra: Map::new(),
        }
    }
}

/// Read-modify-write over a JSON storage file. A missing file is an empty registry.
#[derive(Debug, Clone)]
pub struct JsonFileRegistry {
    path: PathBuf,
}

impl JsonFileRegistry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<StorageFile> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let file: StorageFile = serde_json::from_str(&raw)?;
                if file.key != STORAGE_KEY {
                    return Err(Error::Registry(format!(
                        "{} holds {:?}, not {STORAGE_KEY}",
                        self.path.display(),
                        file.key
                    )));
                }
                Ok(file)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(StorageFile::default()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, file: &StorageFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, serde_json::to_string_pretty(file)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl ResourceRegistry for JsonFileRegistry {
    fn items(&self) -> Result<Vec<ResourceItem>> {
        Ok(self.load()?.data.items)
    }

    fn create(&mut self, res_type: &str, url: &str) -> Result<ResourceItem> {
        let mut file = self.load()?;
        let item = create_in(&mut file.data.items, res_type, url)?;
        self.save(&file)?;
        Ok(item)
    }

    fn update(&mut self, id: &str, res_type: &str, url: &str) -> Result<()> {
        let mut file = self.load()?;
        update_in(&mut file.data.items, id, res_type, url)?;
        self.save(&file)
    }
}
