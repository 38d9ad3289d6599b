//! Filesystem-based asset source for the crown glyph and other assets.

use gpui::{AssetSource, SharedString};
use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;

/// Looks for assets next to the executable, then in the working directory
pub struct FileAssets {
    roots: Vec<PathBuf>,
}

impl FileAssets {
    pub fn new() -> Self {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()));
        let cwd = std::env::current_dir().ok();
        let roots: Vec<PathBuf> = exe_dir.into_iter().chain(cwd).collect();
        log::debug!("Asset roots: {:?}", roots);
        Self { roots }
    }
}

impl Default for FileAssets {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetSource for FileAssets {
    fn load(&self, path: &str) -> gpui::Result<Option<Cow<'static, [u8]>>> {
        for root in &self.roots {
            if let Ok(data) = fs::read(root.join(path)) {
                return Ok(Some(Cow::Owned(data)));
            }
        }
        log::warn!("Asset not found: {}", path);
        Ok(None)
    }

    fn list(&self, path: &str) -> gpui::Result<Vec<SharedString>> {
        let mut results = Vec::new();

        for root in &self.roots {
            if let Ok(entries) = fs::read_dir(root.join(path)) {
                for entry in entries.flatten() {
                    if let Some(name) = entry.file_name().to_str() {
                        results.push(SharedString::from(name.to_string()));
                    }
                }
                break;
            }
        }
        Ok(results)
    }
}
