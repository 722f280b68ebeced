//! File-backed best-score store.
//!
//! The best score lives in a single file named after the persistence key
//! (`cloudJumpBest`), holding the value as a decimal string. Reads never fail:
//! a missing or unreadable file is a best of 0. Writes go through a temporary
//! file and a rename so a crash mid-write cannot leave a truncated value.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, warn};

pub use cloud_jump_core as core;
pub use cloud_jump_types as types;

use crate::core::store::{format_best, try_parse_best};
use crate::core::BestScoreStore;
use crate::types::BEST_SCORE_KEY;

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform data directory (see [`default_path`]).
    pub fn open_default() -> Self {
        Self::new(default_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_raw(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => {
                Err(err).with_context(|| format!("read best score from {}", self.path.display()))
            }
        }
    }
}

impl BestScoreStore for FileStore {
    fn load(&mut self) -> u32 {
        match self.read_raw() {
            Ok(Some(raw)) => match try_parse_best(&raw) {
                Some(best) => best,
                None => {
                    if !raw.trim().is_empty() {
                        warn!(
                            "ignoring malformed best score {:?} in {}",
                            raw.trim(),
                            self.path.display()
                        );
                    }
                    0
                }
            },
            Ok(None) => {
                debug!("no best score at {}", self.path.display());
                0
            }
            Err(err) => {
                warn!("{:#}", err);
                0
            }
        }
    }

    fn save(&mut self, best: u32) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("create data directory {}", dir.display()))?;
        }

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, format_best(best))
            .with_context(|| format!("write best score to {}", tmp.display()))?;
        fs::rename(&tmp, &self.path).with_context(|| {
            format!(
                "move {} into place at {}",
                tmp.display(),
                self.path.display()
            )
        })?;
        Ok(())
    }
}

/// Where the best score is kept when no explicit path is configured.
///
/// `$XDG_DATA_HOME/cloud-jump/cloudJumpBest`, then
/// `$HOME/.local/share/cloud-jump/cloudJumpBest`, then `./cloudJumpBest`.
pub fn default_path() -> PathBuf {
    resolve_default_path(
        std::env::var_os("XDG_DATA_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

fn resolve_default_path(xdg_data_home: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    let non_empty = |p: &PathBuf| !p.as_os_str().is_empty();
    if let Some(dir) = xdg_data_home.filter(non_empty) {
        return dir.join("cloud-jump").join(BEST_SCORE_KEY);
    }
    if let Some(home) = home.filter(non_empty) {
        return home
            .join(".local")
            .join("share")
            .join("cloud-jump")
            .join(BEST_SCORE_KEY);
    }
    PathBuf::from(BEST_SCORE_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir(tag: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        std::env::temp_dir().join(format!("cloud_jump_store_{tag}_{nanos}"))
    }

    #[test]
    fn missing_file_loads_zero() {
        let dir = unique_temp_dir("missing");
        let mut store = FileStore::new(dir.join(BEST_SCORE_KEY));
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn save_creates_directories_and_writes_decimal() {
        let dir = unique_temp_dir("save");
        let path = dir.join("nested").join(BEST_SCORE_KEY);
        let mut store = FileStore::new(&path);

        store.save(200).expect("save best");
        assert_eq!(fs::read_to_string(&path).unwrap(), "200");
        assert_eq!(store.load(), 200);
        assert!(!path.with_extension("tmp").exists());

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn malformed_file_loads_zero() {
        let dir = unique_temp_dir("malformed");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(BEST_SCORE_KEY);
        fs::write(&path, "not a number").unwrap();

        assert_eq!(FileStore::new(&path).load(), 0);

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn zero_spellings_load_zero() {
        let dir = unique_temp_dir("zeros");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(BEST_SCORE_KEY);

        for raw in ["0", "00", "0.0", " 0\n"] {
            assert_eq!(try_parse_best(raw), Some(0), "{raw:?}");
            fs::write(&path, raw).unwrap();
            assert_eq!(FileStore::new(&path).load(), 0, "{raw:?}");
        }
        assert_eq!(try_parse_best("not a number"), None);

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn directory_in_place_of_file_loads_zero() {
        let dir = unique_temp_dir("isdir");
        fs::create_dir_all(&dir).unwrap();
        assert_eq!(FileStore::new(&dir).load(), 0);
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn default_path_prefers_xdg_then_home() {
        assert_eq!(
            resolve_default_path(Some("/xdg".into()), Some("/home/u".into())),
            PathBuf::from("/xdg/cloud-jump/cloudJumpBest")
        );
        assert_eq!(
            resolve_default_path(Some("".into()), Some("/home/u".into())),
            PathBuf::from("/home/u/.local/share/cloud-jump/cloudJumpBest")
        );
        assert_eq!(
            resolve_default_path(None, None),
            PathBuf::from("cloudJumpBest")
        );
    }
}
