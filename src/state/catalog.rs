/// Project catalog: what the showcase displays
///
/// A catalog holds an optional profile (greeting, bio, principles), a list of
/// services, and the projects, each with localized text, tags, optional links
/// and an ordered list of image references. It can come from a JSON file,
/// from a folder of images, or from the bundled demo showcase.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::i18n::Localized;

/// File extensions picked up when scanning a folder
const IMAGE_EXTENSIONS: [&str; 6] = ["webp", "png", "jpg", "jpeg", "gif", "bmp"];

/// Bundled showcase used when no catalog is configured
const DEMO_CATALOG: &str = include_str!("../../assets/showcase.json");

/// Directory the bundled showcase's image references are relative to
const DEMO_ASSETS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets");

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to scan folder: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("no images found under {0}")]
    NoImages(PathBuf),
}

/// A single showcase entry
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Project {
    pub title: Localized,
    #[serde(default)]
    pub description: Localized,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_demo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

/// The person behind the showcase, shown above the services
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Profile {
    #[serde(default)]
    pub greeting: Localized,
    pub name: Localized,
    #[serde(default)]
    pub role: Localized,
    /// Short paragraphs under the name
    #[serde(default)]
    pub bio: Vec<Localized>,
    #[serde(default)]
    pub about: Localized,
    #[serde(default)]
    pub principles: Vec<Localized>,
}

/// One offered service
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Service {
    pub title: Localized,
    #[serde(default)]
    pub description: Localized,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<Service>,
    pub projects: Vec<Project>,
}

impl Catalog {
    /// Parse a catalog from JSON text. Image references are left as written.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a catalog file, resolving relative image paths against its directory
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut catalog = Self::from_json(&json)?;
        if let Some(base) = path.parent() {
            catalog.resolve_images(base);
        }

        log::info!(
            "Loaded catalog {} ({} projects)",
            path.display(),
            catalog.projects.len()
        );
        Ok(catalog)
    }

    /// The bundled four-project showcase, images resolved under `assets/`
    pub fn demo() -> Self {
        match Self::from_json(DEMO_CATALOG) {
            Ok(mut catalog) => {
                catalog.resolve_images(Path::new(DEMO_ASSETS));
                catalog
            }
            Err(e) => {
                log::error!("Bundled showcase is invalid: {}", e);
                Self::default()
            }
        }
    }

    /// Build a catalog from a folder of images.
    ///
    /// Every direct sub-directory containing images becomes a project named
    /// after the directory; images sitting in `dir` itself form a project
    /// named after `dir`. Images are ordered by file name.
    pub fn scan_folder(dir: &Path) -> Result<Self, CatalogError> {
        log::info!("Scanning folder: {}", dir.display());

        let mut groups: BTreeMap<PathBuf, Vec<PathBuf>> = BTreeMap::new();

        for entry in WalkDir::new(dir).min_depth(1).max_depth(2).follow_links(true) {
            let entry = entry?;
            let path = entry.path();

            if !entry.file_type().is_file() || !is_image(path) {
                continue;
            }

            let group = path.parent().unwrap_or(dir).to_path_buf();
            groups.entry(group).or_default().push(path.to_path_buf());
        }

        if groups.is_empty() {
            return Err(CatalogError::NoImages(dir.to_path_buf()));
        }

        let projects = groups
            .into_iter()
            .map(|(folder, mut images)| {
                images.sort();
                Project {
                    title: Localized::untranslated(folder_title(&folder)),
                    description: Localized::default(),
                    tags: Vec::new(),
                    live_demo: None,
                    github: None,
                    images: images
                        .iter()
                        .map(|p| p.to_string_lossy().to_string())
                        .collect(),
                }
            })
            .collect::<Vec<_>>();

        log::info!("Found {} projects in {}", projects.len(), dir.display());
        Ok(Self {
            profile: None,
            services: Vec::new(),
            projects,
        })
    }

    fn resolve_images(&mut self, base: &Path) {
        for project in &mut self.projects {
            for image in &mut project.images {
                if is_remote(image) || Path::new(image.as_str()).is_absolute() {
                    continue;
                }
                *image = base.join(image.as_str()).to_string_lossy().to_string();
            }
        }
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

fn is_remote(reference: &str) -> bool {
    reference.contains("://")
}

/// "weather-moments" -> "weather moments"
fn folder_title(folder: &Path) -> String {
    folder
        .file_name()
        .map(|name| name.to_string_lossy().replace(['-', '_'], " "))
        .unwrap_or_else(|| folder.display().to_string())
}
