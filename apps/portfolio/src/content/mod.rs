// Content layer: the five JSON documents, how they are fetched, and the typed
// records the renderers consume.

pub mod loader;
pub mod models;

use serde_json::Value;

pub use loader::{load_all, ContentSource, DirSource, HttpSource, LoadedContent};

use models::{decode_list, About, BlogPost, BusinessService, Project, Resume};

/// Typed content for one page load. `None` means "render nothing here".
#[derive(Debug, Clone, Default)]
pub struct SiteContent {
    pub resume: Option<Resume>,
    pub projects: Option<Vec<Project>>,
    pub blog: Option<Vec<BlogPost>>,
    pub about: Option<About>,
    pub services: Option<Vec<BusinessService>>,
}

impl SiteContent {
    pub fn decode(loaded: &LoadedContent) -> Self {
        Self {
            resume: loaded.resume.as_ref().and_then(decode_object),
            projects: loaded.projects.as_ref().and_then(decode_list),
            blog: loaded.blog.as_ref().and_then(decode_list),
            about: loaded.about.as_ref().and_then(decode_object),
            services: loaded.services.as_ref().and_then(decode_list),
        }
    }
}

fn decode_object<T: serde::de::DeserializeOwned>(value: &Value) -> Option<T> {
    if !value.is_object() {
        return None;
    }
    serde_json::from_value(value.clone()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_keeps_sections_independent() {
        let loaded = LoadedContent {
            projects: Some(json!({"not": "an array"})),
            blog: Some(json!([{"title": "Hello"}])),
            about: Some(json!(["wrong shape"])),
            ..Default::default()
        };
        let content = SiteContent::decode(&loaded);
        assert!(content.projects.is_none());
        assert!(content.about.is_none());
        assert!(content.resume.is_none());
        assert_eq!(content.blog.unwrap()[0].title, "Hello");
    }
}
