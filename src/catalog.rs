//! The catalog store: an ordered list of book records kept in sync with a
//! [`KeyValueStore`] snapshot, plus the active category filter.
//!
//! Every mutation writes the full snapshot through before returning; a failed
//! write leaves the in-memory catalog as it was before the call. Listeners
//! registered with [`CatalogStore::on_change`] are told about each successful
//! change and receive a read-only [`CatalogView`] to redraw from.

use anyhow::Context as _;

use crate::collation::compare_titles;
use crate::filter::Filter;
use crate::record::BookRecord;
use crate::storage::{KeyValueStore, SNAPSHOT_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Loaded,
    Added,
    Removed,
    Sorted(SortOrder),
    FilterChanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(Change, CatalogView<'_>)>;

/// Borrowed projection of the catalog for rendering.
#[derive(Debug, Clone, Copy)]
pub struct CatalogView<'a> {
    records: &'a [BookRecord],
    filter: &'a Filter,
}

impl<'a> CatalogView<'a> {
    pub fn new(records: &'a [BookRecord], filter: &'a Filter) -> Self {
        Self { records, filter }
    }

    pub fn records(&self) -> &'a [BookRecord] {
        self.records
    }

    pub fn filter(&self) -> &'a Filter {
        self.filter
    }

    /// Records matching the filter, in catalog order.
    pub fn visible_records(&self) -> Vec<&'a BookRecord> {
        let filter = self.filter;
        self.records
            .iter()
            .filter(|record| filter.matches(record))
            .collect()
    }
}

pub struct CatalogStore<S> {
    storage: S,
    records: Vec<BookRecord>,
    filter: Filter,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl<S: KeyValueStore> CatalogStore<S> {
    /// Creates an empty store. Call [`CatalogStore::load`] to read the snapshot.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            records: Vec::new(),
            filter: Filter::All,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Replaces the in-memory catalog with the persisted snapshot.
    ///
    /// An absent or unparsable snapshot yields an empty catalog; only a failure
    /// to read from the backing store is returned as an error.
    pub fn load(&mut self) -> anyhow::Result<()> {
        let raw = self
            .storage
            .get(SNAPSHOT_KEY)
            .context("read catalog snapshot")?;

        self.records = match raw {
            None => {
                tracing::debug!(key = SNAPSHOT_KEY, "no catalog snapshot; starting empty");
                Vec::new()
            }
            Some(raw) => match serde_json::from_str::<Vec<BookRecord>>(&raw) {
                Ok(records) => records,
                Err(err) => {
                    tracing::warn!(key = SNAPSHOT_KEY, %err, "discarding malformed catalog snapshot");
                    Vec::new()
                }
            },
        };
        self.filter = Filter::All;

        tracing::info!(books = self.records.len(), "catalog loaded");
        self.notify(Change::Loaded);
        Ok(())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Direct access to the backing store. Writes made here bypass the catalog.
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Releases listeners and hands back the backing store.
    pub fn dispose(self) -> S {
        tracing::debug!(listeners = self.listeners.len(), "catalog disposed");
        self.storage
    }

    /// Appends a new book. Returns `Ok(None)` without touching the catalog when
    /// the title or author is blank.
    pub fn add(
        &mut self,
        title: &str,
        author: &str,
        category: &str,
    ) -> anyhow::Result<Option<BookRecord>> {
        let Some(record) = BookRecord::new(title, author, category) else {
            tracing::debug!("rejected book with blank title or author");
            return Ok(None);
        };

        self.records.push(record.clone());
        if let Err(err) = self.persist() {
            self.records.pop();
            return Err(err);
        }
        tracing::info!(title = %record.title, author = %record.author, category = %record.category, "book added");
        self.notify(Change::Added);
        Ok(Some(record))
    }

    /// Deletes the first record structurally equal to `record`.
    /// Returns `Ok(false)` when there is no such record.
    pub fn remove(&mut self, record: &BookRecord) -> anyhow::Result<bool> {
        let Some(idx) = self.records.iter().position(|r| r == record) else {
            return Ok(false);
        };

        let removed = self.records.remove(idx);
        if let Err(err) = self.persist() {
            self.records.insert(idx, removed);
            return Err(err);
        }
        tracing::info!(title = %record.title, author = %record.author, "book removed");
        self.notify(Change::Removed);
        Ok(true)
    }

    pub fn sort_ascending(&mut self) -> anyhow::Result<()> {
        self.sort(SortOrder::Ascending)
    }

    pub fn sort_descending(&mut self) -> anyhow::Result<()> {
        self.sort(SortOrder::Descending)
    }

    /// Stable sort by title, ignoring case and accents.
    pub fn sort(&mut self, order: SortOrder) -> anyhow::Result<()> {
        let previous = self.records.clone();
        match order {
            SortOrder::Ascending => self
                .records
                .sort_by(|a, b| compare_titles(&a.title, &b.title)),
            SortOrder::Descending => self
                .records
                .sort_by(|a, b| compare_titles(&b.title, &a.title)),
        }
        if let Err(err) = self.persist() {
            self.records = previous;
            return Err(err);
        }
        tracing::debug!(?order, "catalog sorted");
        self.notify(Change::Sorted(order));
        Ok(())
    }

    pub fn set_filter(&mut self, filter: Filter) {
        tracing::debug!(%filter, "filter changed");
        self.filter = filter;
        self.notify(Change::FilterChanged);
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn records(&self) -> &[BookRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn view(&self) -> CatalogView<'_> {
        CatalogView::new(&self.records, &self.filter)
    }

    pub fn visible_records(&self) -> Vec<&BookRecord> {
        self.view().visible_records()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.category.as_str()) {
                seen.push(&record.category);
            }
        }
        seen
    }

    pub fn on_change<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(Change, CatalogView<'_>) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn persist(&mut self) -> anyhow::Result<()> {
        let snapshot = serde_json::to_string(&self.records).context("serialize catalog")?;
        self.storage
            .set(SNAPSHOT_KEY, &snapshot)
            .context("persist catalog snapshot")
    }

    fn notify(&mut self, change: Change) {
        let view = CatalogView::new(&self.records, &self.filter);
        for (_, listener) in &mut self.listeners {
            listener(change, view);
        }
    }
}

impl<S> std::fmt::Debug for CatalogStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogStore")
            .field("records", &self.records)
            .field("filter", &self.filter)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
