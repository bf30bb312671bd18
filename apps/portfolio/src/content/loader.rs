//! Fetches the site's JSON documents.
//!
//! A load never fails the caller: transport errors, non-success statuses and
//! unparseable bodies all collapse to `None` with a warning, and the section
//! backed by that document simply stays empty.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

pub const RESUME_PATH: &str = "data/resume.json";
pub const PROJECTS_PATH: &str = "data/projects.json";
pub const BLOG_PATH: &str = "data/blog.json";
pub const ABOUT_PATH: &str = "data/about.json";
pub const SERVICES_PATH: &str = "data/services.json";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path escapes content root: {0}")]
    InvalidPath(String),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where the JSON documents come from. Swapped at startup via config.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, LoadError>;

    /// Human-readable origin for logs.
    fn describe(&self) -> String;
}

/// Reads documents from a directory on local disk.
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, LoadError> {
        let relative = Path::new(path.trim_start_matches("./"));
        let safe = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
        if !safe {
            return Err(LoadError::InvalidPath(path.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl ContentSource for DirSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, LoadError> {
        let full = self.resolve(path)?;
        Ok(tokio::fs::read(full).await?)
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

/// Fetches documents over HTTP relative to a base URL.
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    /// Builds its own client with no request timeout: a slow document delays
    /// only its own section, and a failed one is final for that page load.
    pub fn new(base_url: impl Into<String>) -> Result<Self, LoadError> {
        Ok(Self {
            client: Client::builder().build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ContentSource for HttpSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, LoadError> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches("./"));
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }
        Ok(response.bytes().await?.to_vec())
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}

/// Fetches and parses one document. Returns `None` on any failure.
pub async fn load_json(source: &dyn ContentSource, path: &str) -> Option<Value> {
    let parsed = match source.fetch(path).await {
        Ok(bytes) => serde_json::from_slice::<Value>(&bytes).map_err(LoadError::Parse),
        Err(e) => Err(e),
    };

    match parsed {
        Ok(value) => {
            debug!("Loaded {path} from {}", source.describe());
            Some(value)
        }
        Err(e) => {
            warn!("Could not load {path}: {e}");
            None
        }
    }
}

/// The raw result of one page load: one slot per document.
#[derive(Debug, Clone, Default)]
pub struct LoadedContent {
    pub resume: Option<Value>,
    pub projects: Option<Value>,
    pub blog: Option<Value>,
    pub about: Option<Value>,
    pub services: Option<Value>,
}

/// Loads all five documents concurrently. A slow or failing document only
/// affects its own slot.
pub async fn load_all(source: &dyn ContentSource) -> LoadedContent {
    let (resume, projects, blog, about, services) = tokio::join!(
        load_json(source, RESUME_PATH),
        load_json(source, PROJECTS_PATH),
        load_json(source, BLOG_PATH),
        load_json(source, ABOUT_PATH),
        load_json(source, SERVICES_PATH),
    );

    LoadedContent {
        resume,
        projects,
        blog,
        about,
        services,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::get, Json, Router};
    use serde_json::json;

    fn write(dir: &Path, rel: &str, body: &str) {
        let path = dir.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, body).unwrap();
    }

    #[tokio::test]
    async fn test_dir_source_loads_and_isolates_failures() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), PROJECTS_PATH, r#"[{"id": "a"}]"#);
        write(dir.path(), BLOG_PATH, "{ not json");

        let source = DirSource::new(dir.path());
        let loaded = load_all(&source).await;

        assert_eq!(loaded.projects, Some(json!([{"id": "a"}])));
        assert!(loaded.blog.is_none(), "malformed body must load as None");
        assert!(loaded.resume.is_none(), "missing file must load as None");
    }

    #[tokio::test]
    async fn test_dir_source_rejects_parent_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirSource::new(dir.path());
        let err = source.fetch("../secret.json").await.unwrap_err();
        assert!(matches!(err, LoadError::InvalidPath(_)));
    }

    #[tokio::test]
    async fn test_http_404_yields_none_without_touching_other_loads() {
        let app = Router::new().route(
            "/data/about.json",
            get(|| async { Json(json!({"aboutText": ["hi"]})) }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let source = HttpSource::new(format!("http://{addr}/")).unwrap();
        let blog = source.fetch(BLOG_PATH).await;
        assert!(matches!(blog, Err(LoadError::Status(404))));

        let loaded = load_all(&source).await;
        assert!(loaded.blog.is_none());
        assert_eq!(loaded.about, Some(json!({"aboutText": ["hi"]})));
    }

    #[tokio::test]
    async fn test_slow_document_still_loads_alongside_fast_ones() {
        let app = Router::new()
            .route(
                "/data/resume.json",
                get(|| async {
                    tokio::time::sleep(std::time::Duration::from_millis(1500)).await;
                    Json(json!({"experience": []}))
                }),
            )
            .route("/data/blog.json", get(|| async { Json(json!([])) }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let source = HttpSource::new(format!("http://{addr}")).unwrap();
        let loaded = load_all(&source).await;
        assert_eq!(loaded.resume, Some(json!({"experience": []})));
        assert_eq!(loaded.blog, Some(json!([])));
        assert!(loaded.projects.is_none());
    }
}
