use std::path::{Component, Path, PathBuf};

use log::{debug, warn};
use serde_json::Value;

// ── Types ─────────────────────────────────────────────

/// Why a load failed. Never surfaced past the loader except as `Loaded::Failed`.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
    Network(String),
    Status(u16),
    Parse(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Network(e) => write!(f, "network error: {}", e),
            LoadError::Status(code) => write!(f, "HTTP {}", code),
            LoadError::Parse(e) => write!(f, "invalid JSON: {}", e),
        }
    }
}

impl std::error::Error for LoadError {}

/// Outcome of a data load.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Loaded<T> {
    #[default]
    NotAttempted,
    Ready(T),
    Failed(LoadError),
}

impl<T> Loaded<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Loaded::Ready(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Loaded::Failed(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Loaded<U> {
        match self {
            Loaded::NotAttempted => Loaded::NotAttempted,
            Loaded::Ready(v) => Loaded::Ready(f(v)),
            Loaded::Failed(e) => Loaded::Failed(e),
        }
    }
}

/// Raw response from a fetcher: status code plus body bytes.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Source of data files. Implementations must bypass any response cache.
pub trait Fetch: Send + Sync {
    fn fetch(&self, path: &str) -> Result<FetchResponse, LoadError>;
}

// ── HTTP ──────────────────────────────────────────────

/// Fetches data files relative to a base URL.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
    base: url::Url,
}

impl HttpFetcher {
    pub fn new(base: &str) -> Result<Self, LoadError> {
        // No timeout: a hung request only delays population.
        Self::with_builder(base, reqwest::blocking::Client::builder().timeout(None::<std::time::Duration>))
    }

    fn with_builder(base: &str, builder: reqwest::blocking::ClientBuilder) -> Result<Self, LoadError> {
        let mut base =
            url::Url::parse(base).map_err(|e| LoadError::Network(format!("bad base URL: {}", e)))?;
        if !base.path().ends_with('/') {
            let p = format!("{}/", base.path());
            base.set_path(&p);
        }
        let client = builder
            .build()
            .map_err(|e| LoadError::Network(format!("HTTP client error: {}", e)))?;
        Ok(HttpFetcher { client, base })
    }

    pub fn resolve(&self, path: &str) -> Result<url::Url, LoadError> {
        self.base
            .join(path)
            .map_err(|e| LoadError::Network(format!("bad path {}: {}", path, e)))
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, path: &str) -> Result<FetchResponse, LoadError> {
        let url = self.resolve(path)?;
        let resp = self
            .client
            .get(url)
            .header("Cache-Control", "no-cache")
            .header("Pragma", "no-cache")
            .send()
            .map_err(|e| LoadError::Network(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp
            .bytes()
            .map_err(|e| LoadError::Network(e.to_string()))?
            .to_vec();
        Ok(FetchResponse { status, body })
    }
}

// ── Local files ───────────────────────────────────────

/// Reads data files from a site directory, mapping missing files to 404.
pub struct FileFetcher {
    root: PathBuf,
}

impl FileFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FileFetcher { root: root.into() }
    }

    /// Resolve a relative path under the root. Absolute paths and `..`
    /// segments are rejected.
    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let rel = Path::new(path.trim_start_matches("./"));
        if rel
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return None;
        }
        Some(self.root.join(rel))
    }
}

impl Fetch for FileFetcher {
    fn fetch(&self, path: &str) -> Result<FetchResponse, LoadError> {
        let full = match self.resolve(path) {
            Some(p) => p,
            None => return Ok(FetchResponse { status: 404, body: Vec::new() }),
        };
        match std::fs::read(&full) {
            Ok(body) => Ok(FetchResponse { status: 200, body }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(FetchResponse { status: 404, body: Vec::new() })
            }
            Err(e) => Err(LoadError::Network(format!("{}: {}", full.display(), e))),
        }
    }
}

// ── Loader ────────────────────────────────────────────

/// Fetch-or-fail JSON loader. Never returns an error to its caller.
pub struct DataLoader {
    fetcher: Box<dyn Fetch>,
}

impl DataLoader {
    pub fn new(fetcher: Box<dyn Fetch>) -> Self {
        DataLoader { fetcher }
    }

    pub fn load(&self, path: &str) -> Loaded<Value> {
        match self.try_load(path) {
            Ok(v) => {
                debug!("Loaded {}", path);
                Loaded::Ready(v)
            }
            Err(e) => {
                warn!("Failed to load {}: {}", path, e);
                Loaded::Failed(e)
            }
        }
    }

    fn try_load(&self, path: &str) -> Result<Value, LoadError> {
        let resp = self.fetcher.fetch(path)?;
        if !resp.is_success() {
            return Err(LoadError::Status(resp.status));
        }
        serde_json::from_slice(&resp.body).map_err(|e| LoadError::Parse(e.to_string()))
    }
}
