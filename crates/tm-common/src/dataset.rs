use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::info;

use crate::{Client, Gig, Talent};

pub const TALENTS_FILE: &str = "talents.json";
pub const CLIENTS_FILE: &str = "clients.json";
pub const GIGS_FILE: &str = "gigs.json";

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// 起動時に一度だけ読み込む静的な名簿（読み取り専用）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub talents: Vec<Talent>,
    pub clients: Vec<Client>,
    pub gigs: Vec<Gig>,
}

impl Dataset {
    pub fn new(talents: Vec<Talent>, clients: Vec<Client>, gigs: Vec<Gig>) -> Self {
        Self {
            talents,
            clients,
            gigs,
        }
    }

    /// `<dir>/talents.json`, `<dir>/clients.json`, `<dir>/gigs.json` を読み込む
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let dir = dir.as_ref();
        let dataset = Self {
            talents: read_json(&dir.join(TALENTS_FILE))?,
            clients: read_json(&dir.join(CLIENTS_FILE))?,
            gigs: read_json(&dir.join(GIGS_FILE))?,
        };

        info!(
            dir = %dir.display(),
            talents = dataset.talents.len(),
            clients = dataset.clients.len(),
            gigs = dataset.gigs.len(),
            "dataset loaded"
        );

        Ok(dataset)
    }

    pub fn gig(&self, id: &str) -> Option<&Gig> {
        self.gigs.iter().find(|gig| gig.id == id)
    }

    pub fn client(&self, id: &str) -> Option<&Client> {
        self.clients.iter().find(|client| client.id == id)
    }

    pub fn client_for_gig(&self, gig: &Gig) -> Option<&Client> {
        self.client(&gig.client_id)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DatasetError> {
    let raw = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| DatasetError::Json {
        path: path.to_path_buf(),
        source,
    })
}
