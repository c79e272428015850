//! Local draft persistence
//!
//! One JSON file per `"namespace:year"` key under the drafts directory. A
//! draft that cannot be read, fails to parse, or was written by another
//! format version is logged and reported as absent; it never blocks loading
//! a plan.

use std::path::{Path, PathBuf};

use crate::error::PlannerResult;
use crate::models::{validate_sections, PlanDraft};

use super::file_io::{read_json_optional, remove_if_exists, write_json_atomic};

/// Reads and writes plan drafts for one namespace
#[derive(Debug, Clone)]
pub struct DraftStore {
    dir: PathBuf,
    namespace: String,
}

impl DraftStore {
    pub fn new(dir: impl Into<PathBuf>, namespace: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Key a draft for `year` is stored under
    pub fn key(&self, year: i32) -> String {
        PlanDraft::key(&self.namespace, year)
    }

    /// File backing the draft for `year`
    pub fn path_for(&self, year: i32) -> PathBuf {
        self.dir.join(format!("{}.json", file_stem(&self.key(year))))
    }

    /// Load the draft for `year`, if a usable one exists
    pub fn load(&self, year: i32) -> Option<PlanDraft> {
        let path = self.path_for(year);
        let key = self.key(year);

        let draft: PlanDraft = match read_json_optional(&path) {
            Ok(Some(draft)) => draft,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(%key, error = %e, "ignoring unreadable draft");
                return None;
            }
        };

        if !draft.is_current_version() {
            tracing::warn!(%key, version = draft.version, "ignoring draft with unsupported version");
            return None;
        }

        if draft.year != year {
            tracing::warn!(%key, stored_year = draft.year, "ignoring draft stored for another year");
            return None;
        }

        if let Err(e) = validate_sections(&draft.sections) {
            tracing::warn!(%key, error = %e, "ignoring draft with invalid sections");
            return None;
        }

        tracing::debug!(%key, sections = draft.sections.len(), "loaded draft");
        Some(draft)
    }

    /// Persist a draft under its year's key
    pub fn save(&self, draft: &PlanDraft) -> PlannerResult<()> {
        let path = self.path_for(draft.year);
        write_json_atomic(&path, draft)?;
        tracing::debug!(key = %self.key(draft.year), "saved draft");
        Ok(())
    }

    /// Delete the draft for `year`; returns whether one existed
    pub fn clear(&self, year: i32) -> PlannerResult<bool> {
        remove_if_exists(self.path_for(year))
    }

    /// Years with a stored draft in this namespace, ascending
    pub fn years(&self) -> PlannerResult<Vec<i32>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let prefix = format!("{}_", file_stem(&self.namespace));
        let mut years: Vec<i32> = std::fs::read_dir(&self.dir)?
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| year_from_file(&entry.path(), &prefix))
            .collect();
        years.sort_unstable();
        Ok(years)
    }
}

/// Map a draft key onto a portable file stem
///
/// The mapping is injective: `:` becomes `_`, ASCII letters, digits and `-`
/// are kept, and every other byte is written as `%XX`.
fn file_stem(key: &str) -> String {
    let mut stem = String::with_capacity(key.len());
    for c in key.chars() {
        match c {
            ':' => stem.push('_'),
            c if c.is_ascii_alphanumeric() || c == '-' => stem.push(c),
            c => {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).bytes() {
                    stem.push_str(&format!("%{:02X}", byte));
                }
            }
        }
    }
    stem
}

fn year_from_file(path: &Path, prefix: &str) -> Option<i32> {
    if path.extension()? != "json" {
        return None;
    }
    path.file_stem()?
        .to_str()?
        .strip_prefix(prefix)?
        .parse()
        .ok()
}
