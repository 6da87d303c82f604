//! Walks a source tree and applies the collapse passes to every page.

use std::fs;
use std::path::Path;

use log::{debug, info};
use walkdir::WalkDir;

use crate::collapse::Collapser;
use crate::config::Config;
use crate::dom;
use crate::storage::{JsonFileStore, StateStore};
use crate::utils::error::{BoxResult, CollapsifyError};

/// Summary of one processing run
#[derive(Debug, Default)]
pub struct ProcessStats {
    /// Pages transformed and written
    pub pages: usize,
}

/// Process every `.html` page under the configured source directory into
/// the destination directory.
pub fn process_site(config: &Config) -> BoxResult<ProcessStats> {
    let store = match &config.state_file {
        Some(path) => Some(
            JsonFileStore::open(path)
                .map_err(|e| CollapsifyError::Store(format!("{}: {}", path.display(), e)))?,
        ),
        None => None,
    };
    let store_ref: Option<&dyn StateStore> = store.as_ref().map(|s| s as &dyn StateStore);

    let mut stats = ProcessStats::default();
    for entry in WalkDir::new(&config.source)
        .follow_links(true)
        .into_iter()
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if !path.is_file() || path.extension().map_or(true, |ext| ext != "html") {
            continue;
        }
        let rel = path.strip_prefix(&config.source).unwrap_or(path);
        process_page(config, path, rel, store_ref)?;
        stats.pages += 1;
    }

    info!(
        "Processed {} page(s) into {}",
        stats.pages,
        config.destination.display()
    );
    Ok(stats)
}

fn process_page(
    config: &Config,
    path: &Path,
    rel: &Path,
    store: Option<&dyn StateStore>,
) -> BoxResult<()> {
    debug!("Processing {}", path.display());
    let html = fs::read_to_string(path)?;
    let root = dom::parse_document(&html);

    // fresh collapser per page: one allocator per document pass
    let mut collapser = Collapser::new(config.collapse_options())
        .with_page_url(page_url(&config.base_url, rel));
    if let Some(store) = store {
        collapser = collapser.with_store(store);
    }

    collapser.add_collapsible_sections(&root);
    if config.lists {
        collapser.add_collapsible_lists(&root);
    }

    let html = dom::serialize(&root)
        .map_err(|e| CollapsifyError::Document(format!("{}: {}", path.display(), e)))?;
    let out = config.destination.join(rel);
    if let Some(parent) = out.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&out, html)?;
    Ok(())
}

/// Absolute URL for a page: the base URL plus the percent-encoded relative
/// path.
pub fn page_url(base_url: &str, rel: &Path) -> String {
    let mut url = base_url.trim_end_matches('/').to_string();
    for component in rel.components() {
        let segment = component.as_os_str().to_string_lossy();
        url.push('/');
        url.push_str(&urlencoding::encode(&segment));
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_url_joins_and_encodes() {
        assert_eq!(
            page_url("https://docs.example/", Path::new("guide.html")),
            "https://docs.example/guide.html"
        );
        assert_eq!(
            page_url("https://docs.example", Path::new("docs/getting started.html")),
            "https://docs.example/docs/getting%20started.html"
        );
        assert_eq!(page_url("", Path::new("index.html")), "/index.html");
    }

    #[test]
    fn test_process_site_transforms_pages() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("site");
        let destination = dir.path().join("out");
        fs::create_dir_all(source.join("docs")).unwrap();
        fs::write(
            source.join("index.html"),
            "<html><body><h1>Intro</h1><p>Hello</p></body></html>",
        )
        .unwrap();
        fs::write(
            source.join("docs/guide.html"),
            "<html><body><h2>Guide</h2><ul><li>One</li></ul></body></html>",
        )
        .unwrap();
        fs::write(source.join("notes.txt"), "not html").unwrap();

        let config = Config {
            source: source.clone(),
            destination: destination.clone(),
            base_url: "https://docs.example".to_string(),
            ..Config::default()
        };
        let stats = process_site(&config).unwrap();
        assert_eq!(stats.pages, 2);

        let index = fs::read_to_string(destination.join("index.html")).unwrap();
        assert!(index.contains("collapse-button"));
        assert!(index.contains("id=\"intro-section\""));

        let guide = fs::read_to_string(destination.join("docs/guide.html")).unwrap();
        assert!(guide.contains("id=\"guide-section\""));
        assert!(guide.contains("collapse-ellipsis"));
        assert!(!destination.join("notes.txt").exists());
    }

    #[test]
    fn test_process_site_honors_persisted_state() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("site");
        let destination = dir.path().join("out");
        let state_file = dir.path().join("state.json");
        fs::create_dir_all(&source).unwrap();
        fs::write(
            source.join("index.html"),
            "<html><body><h1>Intro</h1><p>Hello</p></body></html>",
        )
        .unwrap();
        fs::write(
            &state_file,
            "{\"https://docs.example/index.html#intro-section\": \"false\"}",
        )
        .unwrap();

        let config = Config {
            source: source.clone(),
            destination: destination.clone(),
            base_url: "https://docs.example".to_string(),
            state_file: Some(state_file),
            ..Config::default()
        };
        process_site(&config).unwrap();

        let index = fs::read_to_string(destination.join("index.html")).unwrap();
        assert!(index.contains("aria-expanded=\"false\""));
        // the collapsed section keeps its collapse class but not the
        // visible marker
        assert!(index.contains("class=\"collapse\""));
        assert!(!index.contains("class=\"collapse in\""));
    }

    #[test]
    fn test_missing_state_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("site");
        fs::create_dir_all(&source).unwrap();
        fs::write(source.join("index.html"), "<html><body><h1>A</h1></body></html>").unwrap();

        let config = Config {
            source,
            destination: dir.path().join("out"),
            state_file: Some(dir.path().join("state.json")),
            ..Config::default()
        };
        let stats = process_site(&config).unwrap();
        assert_eq!(stats.pages, 1);
    }
}
