//! Bundled sample galleries.
//!
//! A gallery root holds two directories, `contents/` and `styles/`, each
//! with a handful of ready-to-use images so the tool works out of the box
//! without hunting for inputs. Listing is tolerant: a missing directory is
//! an empty gallery, not an error.

use std::path::{Path, PathBuf};

use image::RgbImage;
use tracing::debug;

use crate::error::{Error, Result};
use crate::io::decode::open_image;
use crate::types::ImageRole;

pub const CONTENT_DIR: &str = "contents";
pub const STYLE_DIR: &str = "styles";

const SAMPLE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

#[derive(Debug, Clone)]
pub struct SampleGallery {
    root: PathBuf,
}

impl SampleGallery {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn dir_for(&self, role: ImageRole) -> PathBuf {
        match role {
            ImageRole::Content => self.root.join(CONTENT_DIR),
            ImageRole::Style => self.root.join(STYLE_DIR),
        }
    }

    /// Sorted file names of the samples available for `role`.
    pub fn list(&self, role: ImageRole) -> Result<Vec<String>> {
        let dir = self.dir_for(role);
        if !dir.is_dir() {
            debug!("Sample directory {:?} does not exist; empty gallery", dir);
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();
            let is_image = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| SAMPLE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
                .unwrap_or(false);
            if path.is_file() && is_image {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    /// Full path of a named sample, verifying it exists.
    pub fn path(&self, role: ImageRole, name: &str) -> Result<PathBuf> {
        let path = self.dir_for(role).join(name);
        if !path.is_file() {
            return Err(Error::UnknownSample {
                role,
                name: name.to_string(),
            });
        }
        Ok(path)
    }

    /// Decode a named sample to RGB.
    pub fn load(&self, role: ImageRole, name: &str) -> Result<RgbImage> {
        open_image(&self.path(role, name)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use tempfile::tempdir;

    fn seed_gallery(root: &Path) {
        for (dir, names) in [
            (CONTENT_DIR, &["content_1.jpg", "content_2.png"][..]),
            (STYLE_DIR, &["style_1.jpg"][..]),
        ] {
            let d = root.join(dir);
            std::fs::create_dir_all(&d).unwrap();
            for name in names {
                let img = RgbImage::from_pixel(8, 8, Rgb([50, 60, 70]));
                img.save(d.join(name)).unwrap();
            }
            // Non-image clutter must not show up in listings.
            std::fs::write(d.join("notes.txt"), "ignore me").unwrap();
        }
    }

    #[test]
    fn lists_sorted_image_files_only() {
        let dir = tempdir().unwrap();
        seed_gallery(dir.path());
        let gallery = SampleGallery::new(dir.path());

        assert_eq!(
            gallery.list(ImageRole::Content).unwrap(),
            vec!["content_1.jpg", "content_2.png"]
        );
        assert_eq!(gallery.list(ImageRole::Style).unwrap(), vec!["style_1.jpg"]);
    }

    #[test]
    fn missing_directory_is_an_empty_gallery() {
        let dir = tempdir().unwrap();
        let gallery = SampleGallery::new(dir.path());
        assert!(gallery.list(ImageRole::Style).unwrap().is_empty());
    }

    #[test]
    fn unknown_sample_is_a_tagged_error() {
        let dir = tempdir().unwrap();
        seed_gallery(dir.path());
        let gallery = SampleGallery::new(dir.path());

        let err = gallery.path(ImageRole::Style, "nope.jpg").unwrap_err();
        assert!(matches!(err, Error::UnknownSample { .. }));
    }

    #[test]
    fn loads_a_sample_to_rgb() {
        let dir = tempdir().unwrap();
        seed_gallery(dir.path());
        let gallery = SampleGallery::new(dir.path());

        let img = gallery.load(ImageRole::Content, "content_2.png").unwrap();
        assert_eq!(img.dimensions(), (8, 8));
        assert_eq!(img.get_pixel(0, 0).0, [50, 60, 70]);
    }
}
