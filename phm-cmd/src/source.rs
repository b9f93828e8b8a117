//! Where the CLI reads the three documents from.
//!
//! Paths inside the source mirror the deployed site: `press_data.json`,
//! `scripts/elections.json` and `updated_map.json`.

use anyhow::Context;
use phm_db::DatasetStore;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const PRESS_PATH: &str = "press_data.json";
pub const ELECTIONS_PATH: &str = "scripts/elections.json";
pub const GEOMETRY_PATH: &str = "updated_map.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Directory on disk
    Local(PathBuf),
    /// Base URL, without a trailing slash
    Remote(String),
}

impl FromStr for DataSource {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            anyhow::bail!("data source must not be empty");
        }
        if s.starts_with("http://") || s.starts_with("https://") {
            Ok(DataSource::Remote(s.trim_end_matches('/').to_string()))
        } else {
            Ok(DataSource::Local(PathBuf::from(s)))
        }
    }
}

impl DataSource {
    /// Location of one document within the source.
    pub fn locate(&self, path: &str) -> String {
        match self {
            DataSource::Local(dir) => dir.join(path).display().to_string(),
            DataSource::Remote(base) => format!("{}/{}", base, path),
        }
    }

    /// Load all three documents concurrently and build the store.
    /// Fails on the first document that cannot be read.
    pub async fn load(&self) -> anyhow::Result<DatasetStore> {
        let (press, elections, geometry) = match self {
            DataSource::Local(_) => tokio::try_join!(
                read_file(self.locate(PRESS_PATH)),
                read_file(self.locate(ELECTIONS_PATH)),
                read_file(self.locate(GEOMETRY_PATH)),
            )?,
            DataSource::Remote(_) => {
                let client = reqwest::Client::builder()
                    .timeout(Duration::from_secs(60))
                    .build()?;
                tokio::try_join!(
                    fetch(&client, self.locate(PRESS_PATH)),
                    fetch(&client, self.locate(ELECTIONS_PATH)),
                    fetch(&client, self.locate(GEOMETRY_PATH)),
                )?
            }
        };
        DatasetStore::from_bytes(&press, &elections, &geometry)
    }
}

async fn read_file(path: String) -> anyhow::Result<Vec<u8>> {
    let bytes = tokio::fs::read(&path)
        .await
        .with_context(|| format!("failed to read {}", path))?;
    log::info!("Read {} ({} bytes)", path, bytes.len());
    Ok(bytes)
}

async fn fetch(client: &reqwest::Client, url: String) -> anyhow::Result<Vec<u8>> {
    let response = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("request for {} failed", url))?;
    if !response.status().is_success() {
        anyhow::bail!("HTTP error! Status: {} ({})", response.status(), url);
    }
    let bytes = response.bytes().await?;
    log::info!("Fetched {} ({} bytes)", url, bytes.len());
    Ok(bytes.to_vec())
}
