//! In-memory index of the Templates directory
//!
//! The index is built by a single scan, one level deep:
//!
//! ```text
//! ~/Templates/
//! ├── shell/
//! │   ├── script.sh
//! │   └── Makefile
//! └── web/
//!     └── index.html
//! ```
//!
//! Categories and entries are kept sorted by name; lookups walk categories
//! in that same order and the first match wins.

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::TfcError;
use crate::probe::{FileTypeProbe, UNKNOWN_TYPE};
use crate::sanitize::clean_name;

/// One template file inside a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub filename: String,
    pub detected_type: String,
    pub path: PathBuf,
}

/// A first-level directory of the templates root
#[derive(Debug, Clone, Default)]
pub struct Category {
    pub name: String,
    pub path: PathBuf,
    pub entries: BTreeMap<String, Entry>,
}

impl Category {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Result of a successful copy
#[derive(Debug, Clone)]
pub struct CopyOutcome {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub bytes: u64,
}

/// Category name -> filename -> entry
#[derive(Debug, Clone)]
pub struct TemplateIndex {
    root: PathBuf,
    categories: BTreeMap<String, Category>,
}

impl TemplateIndex {
    /// Scan `root` and classify every template with `probe`
    pub fn build(root: impl AsRef<Path>, probe: &dyn FileTypeProbe) -> Result<Self, TfcError> {
        let root = root.as_ref().to_path_buf();
        if !root.exists() {
            return Err(TfcError::TemplatesFolderMissing { path: root });
        }
        if !root.is_dir() {
            return Err(TfcError::NotADirectory { path: root });
        }

        let mut categories = BTreeMap::new();
        for dir in list_children(&root)? {
            if !dir.file_type().is_dir() {
                debug!("Skipping non-directory {}", dir.path().display());
                continue;
            }
            let category = scan_category(&dir, probe)?;
            categories.insert(category.name.clone(), category);
        }

        let index = Self { root, categories };
        info!(
            "Indexed {} templates in {} categories under {}",
            index.template_count(),
            index.len(),
            index.root.display()
        );
        Ok(index)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Categories in iteration order
    pub fn categories(&self) -> impl ExactSizeIterator<Item = &Category> {
        self.categories.values()
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    pub fn contains_category(&self, name: &str) -> bool {
        self.categories.contains_key(name)
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn template_count(&self) -> usize {
        self.categories.values().map(Category::len).sum()
    }

    /// First entry named `filename`, searching categories in order
    pub fn find(&self, filename: &str) -> Option<&Entry> {
        self.categories.values().find_map(|c| c.entries.get(filename))
    }

    /// Copy template `tpl` into `dest_dir` under the cleaned form of `name`
    ///
    /// Never overwrites: an existing destination is an error and is left
    /// untouched. A partially written destination is removed on failure.
    pub fn copy(&self, tpl: &str, name: &str, dest_dir: &Path) -> Result<CopyOutcome, TfcError> {
        let clean = clean_name(name);
        if clean.is_empty() {
            return Err(TfcError::InvalidName { raw: name.to_string() });
        }

        let entry = self
            .find(tpl)
            .ok_or_else(|| TfcError::TemplateNotFound { name: tpl.to_string() })?;

        if !dest_dir.is_dir() {
            return Err(TfcError::DestinationDirMissing {
                path: dest_dir.to_path_buf(),
            });
        }

        let src = entry.path.clone();
        let dest = dest_dir.join(&clean);
        let copy_failed = |source: io::Error| TfcError::CopyFailed {
            src: src.clone(),
            dest: dest.clone(),
            source,
        };

        let mut reader = File::open(&src).map_err(copy_failed)?;
        let mut writer = match OpenOptions::new().write(true).create_new(true).open(&dest) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Err(TfcError::DestinationAlreadyExists {
                    name: clean,
                    path: dest,
                });
            }
            Err(e) => return Err(copy_failed(e)),
        };

        let bytes = match io::copy(&mut reader, &mut writer).and_then(|n| writer.sync_all().map(|_| n)) {
            Ok(n) => n,
            Err(e) => {
                drop(writer);
                if let Err(rm) = fs::remove_file(&dest) {
                    warn!("Failed to remove partial copy {}: {}", dest.display(), rm);
                }
                return Err(copy_failed(e));
            }
        };

        info!("Copied {} -> {} ({} bytes)", src.display(), dest.display(), bytes);
        Ok(CopyOutcome {
            source: src,
            destination: dest,
            bytes,
        })
    }
}

/// Immediate children of `dir`, sorted by file name
///
/// Only failing to read `dir` itself is an error; unreadable children such
/// as dangling symlinks are logged and skipped.
fn list_children(dir: &Path) -> Result<Vec<DirEntry>, TfcError> {
    let mut children = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        match entry {
            Ok(entry) => children.push(entry),
            Err(source) if source.depth() == 0 => {
                return Err(TfcError::Scan {
                    path: dir.to_path_buf(),
                    source,
                });
            }
            Err(e) => warn!("Skipping unreadable entry in {}: {}", dir.display(), e),
        }
    }
    Ok(children)
}

fn scan_category(dir: &DirEntry, probe: &dyn FileTypeProbe) -> Result<Category, TfcError> {
    let mut category = Category {
        name: dir.file_name().to_string_lossy().to_string(),
        path: dir.path().to_path_buf(),
        entries: BTreeMap::new(),
    };

    for file in list_children(dir.path())? {
        if !file.file_type().is_file() {
            debug!("Skipping non-file {}", file.path().display());
            continue;
        }

        let filename = file.file_name().to_string_lossy().to_string();
        let path = file.path().to_path_buf();
        let detected_type = detect_type(probe, &path);
        category.entries.insert(
            filename.clone(),
            Entry {
                filename,
                detected_type,
                path,
            },
        );
    }

    debug!("Category {}: {} templates", category.name, category.len());
    Ok(category)
}

fn detect_type(probe: &dyn FileTypeProbe, path: &Path) -> String {
    match probe.probe(path) {
        Ok(label) => label,
        Err(e) => {
            let err = TfcError::FileTypeProbeFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            };
            warn!("{}", err);
            UNKNOWN_TYPE.to_string()
        }
    }
}
