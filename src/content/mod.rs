// SPDX-License-Identifier: MPL-2.0
//! Portfolio content: profile, projects, skills, experience and contact.
//!
//! Content is plain TOML. A built-in portfolio ships inside the binary
//! (`assets/content/`); `--content <file>` replaces it with a file on disk.
//! Image and resume references inside the content are relative to the
//! content's root: the embedded asset folder, or the directory holding the
//! content file.
//!
//! # Example
//!
//! ```toml
//! [profile]
//! name = "Sam Carter"
//! role = "Backend Developer"
//! tagline = "Building reliable services"
//! resume = "resume.pdf"
//!
//! [about]
//! text = "..."
//!
//! [[projects]]
//! title = "Inventory API"
//! description = "..."
//! tech = ["Rust", "PostgreSQL"]
//! images = ["shots/inventory-1.png", "shots/inventory-2.png"]
//! ```

use crate::domain::gallery::{Gallery, ImageRef, ImageSet};
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name of the built-in portfolio inside the embedded assets.
pub const PORTFOLIO_FILE: &str = "portfolio.toml";

#[derive(RustEmbed)]
#[folder = "assets/content/"]
struct BuiltinAssets;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub tagline: String,
    /// Resume document, relative to the content root.
    #[serde(default)]
    pub resume: Option<String>,
}

impl Profile {
    /// Up to two uppercase initials for the avatar.
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    /// Source repository, shown as text.
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Project {
    #[must_use]
    pub fn image_refs(&self) -> Vec<ImageRef> {
        self.images.iter().map(ImageRef::new).collect()
    }

    /// The project's gallery, or `None` when it has no images.
    #[must_use]
    pub fn gallery(&self) -> Option<Gallery> {
        ImageSet::new(self.image_refs()).map(|images| Gallery::new(self.title.clone(), images))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills {
    #[serde(default)]
    pub technical: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub soft: Vec<String>,
}

impl Skills {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.technical.is_empty() && self.tools.is_empty() && self.soft.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub period: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    #[serde(default)]
    pub field: String,
    pub institution: String,
    #[serde(default)]
    pub period: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// The whole portfolio document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default)]
    pub about: About,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Skills,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub contact: Contact,
}

impl Portfolio {
    /// Parses a portfolio document. `origin` only labels errors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Content`] when the TOML is malformed or misses a
    /// required field.
    pub fn parse(text: &str, origin: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|err| Error::Content {
            path: origin.to_path_buf(),
            message: err.message().to_string(),
        })
    }
}

/// Where relative references inside the content resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentRoot {
    /// Assets compiled into the binary.
    Builtin,
    /// Directory containing a user-supplied content file.
    Directory(PathBuf),
}

impl ContentRoot {
    /// Reads the bytes behind a content reference.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the reference does not exist.
    pub fn read(&self, reference: &str) -> Result<Vec<u8>> {
        match self {
            ContentRoot::Builtin => BuiltinAssets::get(reference)
                .map(|file| file.data.into_owned())
                .ok_or_else(|| {
                    Error::Io(io::Error::new(
                        io::ErrorKind::NotFound,
                        format!("no built-in asset named '{reference}'"),
                    ))
                }),
            ContentRoot::Directory(dir) => Ok(fs::read(dir.join(reference))?),
        }
    }

    /// Async variant of [`read`](Self::read) for background tasks.
    ///
    /// Directory references go through `tokio::fs` so the executor thread
    /// never blocks on disk I/O; built-in assets are already in memory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the reference does not exist.
    pub async fn read_async(&self, reference: &str) -> Result<Vec<u8>> {
        match self {
            ContentRoot::Builtin => self.read(reference),
            ContentRoot::Directory(dir) => Ok(tokio::fs::read(dir.join(reference)).await?),
        }
    }

    /// File name to suggest when saving `reference` elsewhere.
    #[must_use]
    pub fn file_name(reference: &str) -> String {
        Path::new(reference)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(reference)
            .to_string()
    }
}

/// Loaded portfolio plus the root its references resolve against.
#[derive(Debug, Clone)]
pub struct Content {
    pub portfolio: Portfolio,
    pub root: ContentRoot,
}

impl Content {
    /// The portfolio compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded document is broken, which the
    /// test suite rules out.
    pub fn builtin() -> Result<Self> {
        let bytes = ContentRoot::Builtin.read(PORTFOLIO_FILE)?;
        let text = String::from_utf8_lossy(&bytes);
        let portfolio = Portfolio::parse(&text, Path::new(PORTFOLIO_FILE))?;
        Ok(Self {
            portfolio,
            root: ContentRoot::Builtin,
        })
    }

    /// Loads a content file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::Content`] if it cannot be parsed.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let portfolio = Portfolio::parse(&text, path)?;
        let dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Ok(Self {
            portfolio,
            root: ContentRoot::Directory(dir),
        })
    }

    /// Loads the content to display, falling back to the built-in portfolio.
    ///
    /// Returns an optional warning key when `path` was given but could not
    /// be used.
    #[must_use]
    pub fn load(path: Option<&Path>) -> (Self, Option<String>) {
        let mut warning = None;
        if let Some(path) = path {
            match Self::from_path(path) {
                Ok(content) => {
                    tracing::info!(path = %path.display(), "loaded portfolio content");
                    return (content, None);
                }
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "falling back to built-in content");
                    warning = Some("notification-content-load-error".to_string());
                }
            }
        }

        match Self::builtin() {
            Ok(content) => (content, warning),
            Err(error) => {
                tracing::warn!(%error, "built-in content is unusable");
                (
                    Self {
                        portfolio: Portfolio::default(),
                        root: ContentRoot::Builtin,
                    },
                    Some("notification-content-load-error".to_string()),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const MINIMAL: &str = r#"
[profile]
name = "Sam Carter"
role = "Backend Developer"
"#;

    #[test]
    fn builtin_content_parses_and_has_projects() {
        let content = Content::builtin().expect("built-in content");
        assert!(!content.portfolio.profile.name.is_empty());
        assert!(!content.portfolio.projects.is_empty());
        assert_eq!(content.root, ContentRoot::Builtin);
    }

    #[test]
    fn builtin_images_and_resume_exist() {
        let content = Content::builtin().expect("built-in content");
        for project in &content.portfolio.projects {
            for image in &project.images {
                assert!(
                    content.root.read(image).is_ok(),
                    "missing built-in image {image}"
                );
            }
        }
        if let Some(resume) = &content.portfolio.profile.resume {
            assert!(content.root.read(resume).is_ok());
        }
    }

    #[test]
    fn builtin_has_a_project_without_images() {
        let content = Content::builtin().expect("built-in content");
        assert!(content
            .portfolio
            .projects
            .iter()
            .any(|project| project.gallery().is_none()));
    }

    #[test]
    fn minimal_document_uses_defaults() {
        let portfolio = Portfolio::parse(MINIMAL, Path::new("inline")).expect("parse");
        assert_eq!(portfolio.profile.initials(), "SC");
        assert!(portfolio.projects.is_empty());
        assert!(portfolio.skills.is_empty());
        assert_eq!(portfolio.contact, Contact::default());
    }

    #[test]
    fn missing_profile_is_a_content_error() {
        let err = Portfolio::parse("[about]\ntext = \"hi\"\n", Path::new("broken.toml"))
            .expect_err("profile is required");
        match err {
            Error::Content { path, .. } => assert_eq!(path, PathBuf::from("broken.toml")),
            other => panic!("expected content error, got {other:?}"),
        }
    }

    #[test]
    fn project_gallery_keeps_image_order() {
        let project = Project {
            title: "Demo".into(),
            images: vec!["b.png".into(), "a.png".into()],
            ..Project::default()
        };
        let gallery = project.gallery().expect("gallery");
        assert_eq!(gallery.title, "Demo");
        assert_eq!(gallery.images.get(0).map(ImageRef::as_str), Some("b.png"));
    }

    #[test]
    fn file_content_resolves_relative_to_its_directory() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("folio.toml");
        fs::write(&path, MINIMAL).expect("write content");
        fs::write(dir.path().join("shot.png"), b"bytes").expect("write image");

        let content = Content::from_path(&path).expect("load");
        assert_eq!(content.root, ContentRoot::Directory(dir.path().to_path_buf()));
        assert_eq!(content.root.read("shot.png").expect("read"), b"bytes");
    }

    #[test]
    fn unreadable_override_falls_back_to_builtin() {
        let dir = tempdir().expect("temp dir");
        let (content, warning) = Content::load(Some(&dir.path().join("missing.toml")));
        assert_eq!(content.root, ContentRoot::Builtin);
        assert_eq!(
            warning.as_deref(),
            Some("notification-content-load-error")
        );
    }

    #[test]
    fn no_override_loads_builtin_silently() {
        let (content, warning) = Content::load(None);
        assert_eq!(content.root, ContentRoot::Builtin);
        assert!(warning.is_none());
    }

    #[test]
    fn missing_builtin_asset_is_io_error() {
        assert!(matches!(
            ContentRoot::Builtin.read("nope.png"),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn file_name_strips_directories() {
        assert_eq!(ContentRoot::file_name("docs/resume.pdf"), "resume.pdf");
        assert_eq!(ContentRoot::file_name("resume.pdf"), "resume.pdf");
    }

    #[tokio::test]
    async fn async_read_resolves_against_directory() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join("cv.pdf"), b"%PDF").expect("write asset");
        let root = ContentRoot::Directory(dir.path().to_path_buf());

        assert_eq!(root.read_async("cv.pdf").await.expect("asset reads"), b"%PDF");
        assert!(matches!(
            root.read_async("absent.pdf").await,
            Err(Error::Io(_))
        ));
    }

    #[tokio::test]
    async fn async_read_serves_builtin_assets() {
        let bytes = ContentRoot::Builtin
            .read_async(PORTFOLIO_FILE)
            .await
            .expect("built-in portfolio");
        assert!(!bytes.is_empty());
    }
}
