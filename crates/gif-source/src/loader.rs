//! Entry points that go straight from GIF input to an assembled animation.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use gifmake_animation_core::{assemble_with, Assembly, AssemblyOptions};
use gifmake_common::config::AppConfig;
use gifmake_common::error::{GifmakeError, GifmakeResult};

use crate::source::{FrameImage, GifFrameSource};

/// An assembled GIF animation.
pub type GifAssembly = Assembly<Arc<FrameImage>>;

const GIF_EXTENSION: &str = "gif";

/// Assemble an animation from GIF bytes.
pub fn animation_from_gif_data(
    data: &[u8],
    options: &AssemblyOptions,
) -> GifmakeResult<GifAssembly> {
    let source = GifFrameSource::from_bytes(data)?;
    Ok(assemble_with(&source, options))
}

/// Assemble an animation from a GIF file.
pub fn animation_from_gif_path(
    path: &Path,
    options: &AssemblyOptions,
) -> GifmakeResult<GifAssembly> {
    let source = GifFrameSource::from_path(path)?;
    Ok(assemble_with(&source, options))
}

/// Assemble an animation from a named GIF in an asset directory.
pub fn animation_from_gif_name(
    bundle: &AssetBundle,
    name: &str,
    options: &AssemblyOptions,
) -> GifmakeResult<GifAssembly> {
    let source = bundle.open(name)?;
    Ok(assemble_with(&source, options))
}

/// A directory of GIF assets addressed by name (`<root>/<name>.gif`).
#[derive(Debug, Clone)]
pub struct AssetBundle {
    root: PathBuf,
}

impl AssetBundle {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The asset directory from application config.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.assets_dir.clone())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the asset called `name`, if it exists.
    pub fn resolve(&self, name: &str) -> GifmakeResult<PathBuf> {
        let not_found = || GifmakeError::AssetNotFound {
            name: name.to_string(),
            dir: self.root.clone(),
        };

        // Names are single path components.
        if name.is_empty() || name.contains(['/', '\\']) || name == ".." {
            return Err(not_found());
        }

        let path = self.root.join(format!("{name}.{GIF_EXTENSION}"));
        if path.is_file() {
            Ok(path)
        } else {
            Err(not_found())
        }
    }

    /// Decode the asset called `name`.
    pub fn open(&self, name: &str) -> GifmakeResult<GifFrameSource> {
        let path = self.resolve(name)?;
        tracing::debug!(name, path = %path.display(), "Opening asset");
        GifFrameSource::from_path(&path)
    }

    /// Names of every GIF in the bundle, sorted.
    pub fn names(&self) -> GifmakeResult<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let path = entry?.path();
            let is_gif = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(GIF_EXTENSION));
            if !is_gif {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_rejects_paths() {
        let bundle = AssetBundle::new(std::env::temp_dir());
        for name in ["", "..", "nested/anim", "..\\anim"] {
            assert!(matches!(
                bundle.resolve(name),
                Err(GifmakeError::AssetNotFound { .. })
            ));
        }
    }

    #[test]
    fn test_missing_asset() {
        let bundle = AssetBundle::new(std::env::temp_dir().join("gifmake_no_such_bundle"));
        let err = bundle.open("wave").unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Asset 'wave' not found in {}", bundle.root().display())
        );
    }
}
