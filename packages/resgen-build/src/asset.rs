//! Discovered asset references and their category classification.

/// File extensions claimed by the raster image generator.
const IMAGE_EXTENSIONS: &[&str] = &["bmp", "gif", "ico", "jpeg", "jpg", "png", "webp"];

/// File extensions claimed by the vector graphics generator.
const VECTOR_EXTENSIONS: &[&str] = &["svg"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Image,
    Vector,
    Other,
}

/// One discovered file, identified by its project-relative path.
///
/// Paths always use forward slashes and never end in a separator, so the
/// derived ordering is stable across platforms.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct AssetRef {
    path: String,
}

impl AssetRef {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into().replace('\\', "/");
        Self {
            path: path.trim_end_matches('/').to_string(),
        }
    }

    /// The original project-relative path, preserved verbatim for emission.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// File name without its final extension. `archive.tar.gz` keeps `archive.tar`.
    pub fn stem(&self) -> &str {
        let name = self.file_name();
        match name.rfind('.') {
            Some(i) if i > 0 => &name[..i],
            _ => name,
        }
    }

    pub fn extension(&self) -> Option<&str> {
        let name = self.file_name();
        match name.rfind('.') {
            Some(i) if i > 0 => Some(&name[i + 1..]),
            _ => None,
        }
    }

    /// Directory segments above the file, in order.
    pub fn dir_segments(&self) -> impl Iterator<Item = &str> {
        let end = self.path.rfind('/').unwrap_or(0);
        self.path[..end].split('/').filter(|s| !s.is_empty())
    }

    pub fn category(&self) -> Category {
        let Some(ext) = self.extension() else {
            return Category::Other;
        };
        let ext = ext.to_ascii_lowercase();
        if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            Category::Image
        } else if VECTOR_EXTENSIONS.contains(&ext.as_str()) {
            Category::Vector
        } else {
            Category::Other
        }
    }
}
