use crate::endpoints::{
    EntryId, EntryKind, FilterCriteria,
    categories::ListCategories,
    entries::{CreateEntry, DeleteEntry, ListEntries, NewEntry, UpdateEntry},
    reports::{GetSummary, ListCategoryTotals},
};

pub struct EntryRepository {
    kind: EntryKind,
}

impl EntryRepository {
    pub fn new(kind: EntryKind) -> Self {
        Self { kind }
    }

    pub fn list(&self, filter: FilterCriteria) -> ListEntries {
        ListEntries::new(self.kind).filter(filter)
    }

    pub fn create(&self, entry: NewEntry) -> CreateEntry {
        CreateEntry::new(self.kind, entry)
    }

    pub fn update(&self, id: EntryId, entry: NewEntry) -> UpdateEntry {
        UpdateEntry::new(self.kind, id, entry)
    }

    pub fn delete(&self, id: EntryId) -> DeleteEntry {
        DeleteEntry::new(self.kind, id)
    }
}

pub struct ReportRepository;

impl ReportRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn summary(&self, filter: FilterCriteria) -> GetSummary {
        GetSummary::new().filter(filter)
    }

    pub fn by_category(&self, kind: EntryKind, filter: FilterCriteria) -> ListCategoryTotals {
        ListCategoryTotals::new(kind).filter(filter)
    }
}

impl Default for ReportRepository {
    fn default() -> Self {
        Self::new()
    }
}

pub struct CategoryRepository;

impl CategoryRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn list(&self) -> ListCategories {
        ListCategories::new()
    }
}

impl Default for CategoryRepository {
    fn default() -> Self {
        Self::new()
    }
}
