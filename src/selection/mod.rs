//! Project shortlist ("selection") store.
//!
//! An ordered, duplicate-free list of project ids the user marked as of
//! interest, mirrored to durable storage on every mutation. The review
//! panel's open/closed flag lives here too but is session-scoped only.

use tracing::debug;

use crate::content::{Project, Snapshot};
use crate::error::Result;
use crate::storage::Database;

/// Durable storage key owned by this store.
pub const SELECTION_KEY: &str = "selection";

pub struct SelectionStore<'a> {
    db: &'a Database,
    items: Vec<i64>,
    panel_open: bool,
}

impl<'a> SelectionStore<'a> {
    /// Rehydrate from durable storage.
    ///
    /// Malformed persisted data degrades to an empty list (warned, never
    /// fatal); duplicate ids collapse to their first occurrence.
    pub fn load(db: &'a Database) -> Result<Self> {
        let raw: Vec<i64> = db.get_json_or_default(SELECTION_KEY)?;
        let mut items = Vec::with_capacity(raw.len());
        for id in raw {
            if !items.contains(&id) {
                items.push(id);
            }
        }
        Ok(Self {
            db,
            items,
            panel_open: false,
        })
    }

    /// Add a project to the shortlist; idempotent.
    ///
    /// Opens the review panel either way. Returns whether the id was newly
    /// inserted; storage is rewritten only on an actual mutation.
    pub fn add(&mut self, project: &Project) -> Result<bool> {
        let inserted = if self.contains(project.id) {
            false
        } else {
            self.items.push(project.id);
            self.persist()?;
            debug!(project_id = project.id, "project added to selection");
            true
        };
        self.open();
        Ok(inserted)
    }

    /// Remove a project id; no-op when absent, order of the rest preserved.
    pub fn remove(&mut self, project_id: i64) -> Result<bool> {
        let before = self.items.len();
        self.items.retain(|id| *id != project_id);
        let removed = self.items.len() != before;
        if removed {
            self.persist()?;
            debug!(project_id, "project removed from selection");
        }
        Ok(removed)
    }

    /// Drop the whole shortlist.
    pub fn clear(&mut self) -> Result<()> {
        if !self.items.is_empty() {
            self.items.clear();
            self.persist()?;
        }
        Ok(())
    }

    /// Pure membership query.
    #[must_use]
    pub fn contains(&self, project_id: i64) -> bool {
        self.items.contains(&project_id)
    }

    /// Selected ids in insertion order.
    #[must_use]
    pub fn ids(&self) -> &[i64] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn open(&mut self) {
        self.panel_open = true;
    }

    pub fn close(&mut self) {
        self.panel_open = false;
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.panel_open
    }

    /// Resolve selected ids against a snapshot, in selection order.
    ///
    /// Ids without a matching project (e.g. selected against a remote
    /// snapshot, rendered against the static one) are skipped.
    #[must_use]
    pub fn resolve<'s>(&self, snapshot: &'s Snapshot) -> Vec<&'s Project> {
        self.items
            .iter()
            .filter_map(|id| snapshot.project(*id))
            .collect()
    }

    fn persist(&self) -> Result<()> {
        self.db.set_json(SELECTION_KEY, &self.items)
    }
}

impl std::fmt::Debug for SelectionStore<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionStore")
            .field("items", &self.items)
            .field("panel_open", &self.panel_open)
            .finish()
    }
}
