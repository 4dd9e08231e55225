// src/loader.rs

use crate::domain::{Company, Directory, Listing};
use crate::errors::LoadFailure;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use std::sync::mpsc::{self, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Where the two dataset files are fetched from.
pub trait DataSource: Send + Sync {
    /// Raw bytes of the document at `path`, relative to the source root.
    fn fetch(&self, path: &str) -> Result<Vec<u8>, LoadFailure>;

    fn describe(&self) -> String;
}

/// Reads datasets from a directory on disk.
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DataSource for FsSource {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, LoadFailure> {
        let full = self.root.join(path);
        std::fs::read(&full).map_err(|e| LoadFailure::new(format!("{}: {e}", full.display())))
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

/// Fetches datasets over HTTP, relative to a base URL.
#[derive(Debug, Clone)]
pub struct HttpSource {
    base: Url,
    client: Client,
}

impl HttpSource {
    pub fn new(mut base: Url) -> Result<Self, reqwest::Error> {
        // Relative joins treat the last segment as a file unless the path
        // ends in a slash.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self { base, client })
    }

    /// Absolute URL of the dataset at `path`.
    pub fn url_for(&self, path: &str) -> Result<Url, LoadFailure> {
        self.base
            .join(path)
            .map_err(|e| LoadFailure::new(format!("{path}: {e}")))
    }
}

impl DataSource for HttpSource {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, LoadFailure> {
        let url = self.url_for(path)?;

        let bytes = self
            .client
            .get(url.clone())
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.bytes())
            .map_err(|e| LoadFailure::new(format!("{url}: {e}")))?;

        Ok(bytes.to_vec())
    }

    fn describe(&self) -> String {
        self.base.to_string()
    }
}

/// Relative locations of the two datasets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub companies: String,
    pub listings: String,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            companies: "data/companies.json".to_string(),
            listings: "data/listings.json".to_string(),
        }
    }
}

enum Loaded {
    Companies(Vec<Company>),
    Listings(Vec<Listing>),
}

/// Fetches and parses both datasets at once, one worker thread each.
///
/// Succeeds only when both arrive and parse. The first failure is returned
/// as soon as it is seen, without waiting for the other worker.
pub fn load_directory(source: Arc<dyn DataSource>, paths: &DataPaths) -> Result<Directory, LoadFailure> {
    info!(source = %source.describe(), "loading directory data");

    let (tx, rx) = mpsc::channel();
    spawn_fetch(Arc::clone(&source), paths.companies.clone(), tx.clone(), Loaded::Companies)?;
    spawn_fetch(source, paths.listings.clone(), tx, Loaded::Listings)?;

    let mut companies = None;
    let mut listings = None;
    for _ in 0..2 {
        match rx.recv() {
            Ok(Ok(Loaded::Companies(c))) => companies = Some(c),
            Ok(Ok(Loaded::Listings(l))) => listings = Some(l),
            Ok(Err(e)) => return Err(e),
            Err(_) => return Err(LoadFailure::new("loader worker exited without a result")),
        }
    }

    match (companies, listings) {
        (Some(companies), Some(listings)) => {
            info!(
                companies = companies.len(),
                listings = listings.len(),
                "directory data loaded"
            );
            Ok(Directory::new(companies, listings))
        }
        _ => Err(LoadFailure::new("dataset delivered twice")),
    }
}

fn spawn_fetch<T>(
    source: Arc<dyn DataSource>,
    path: String,
    tx: Sender<Result<Loaded, LoadFailure>>,
    wrap: fn(Vec<T>) -> Loaded,
) -> Result<(), LoadFailure>
where
    T: DeserializeOwned + 'static,
{
    thread::Builder::new()
        .name(format!("load:{path}"))
        .spawn(move || {
            let result = fetch_json::<T>(source.as_ref(), &path).map(wrap);
            // The receiver is gone once a failure has been reported.
            let _ = tx.send(result);
        })
        .map(|_| ())
        .map_err(|e| LoadFailure::new(format!("failed to spawn loader: {e}")))
}

fn fetch_json<T: DeserializeOwned>(source: &dyn DataSource, path: &str) -> Result<Vec<T>, LoadFailure> {
    let bytes = source.fetch(path)?;
    debug!(path, bytes = bytes.len(), "fetched dataset");
    serde_json::from_slice(&bytes).map_err(|e| LoadFailure::new(format!("{path}: {e}")))
}
