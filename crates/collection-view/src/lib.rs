//! Collection View Controller
//!
//! Fetch-filter-paginate-mutate state shared by every list view:
//! a collection is loaded in full, sorted once by creation time
//! (newest first), filtered by an optional calendar date, sliced
//! into fixed-size pages, and patched in place after confirmed
//! mutations.

use chrono::{DateTime, NaiveDate, Utc};
use leptos::prelude::*;

/// Items per page in the admin lead tables
pub const ADMIN_PAGE_SIZE: usize = 20;
/// Items per page in the property listings
pub const LISTING_PAGE_SIZE: usize = 10;

/// A record that can be managed by the controller
pub trait CollectionItem {
    /// Backend-assigned identifier, unique within one snapshot
    fn id(&self) -> &str;
    /// Creation time, the only sort key
    fn created_at(&self) -> DateTime<Utc>;
}

/// Sort newest first. Applied once after load; filtering never reorders.
pub fn sort_newest_first<T: CollectionItem>(items: &mut [T]) {
    items.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
}

/// Keep items whose UTC calendar date matches `date`; `None` keeps everything
pub fn filter_by_date<T: CollectionItem + Clone>(items: &[T], date: Option<NaiveDate>) -> Vec<T> {
    match date {
        None => items.to_vec(),
        Some(d) => items
            .iter()
            .filter(|item| item.created_at().date_naive() == d)
            .cloned()
            .collect(),
    }
}

/// Page count at `page_size`; an empty collection still counts as one page
/// (the view shows its no-results state instead of a pager)
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size).max(1)
}

/// Constrain a 1-based page number to `[1, total]`
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, total.max(1))
}

/// The 1-based page slice; the last page may be short
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(items.len());
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// Replace the item with a matching id, keeping its position.
/// Returns false when no item matched.
pub fn patch_item<T: CollectionItem>(items: &mut [T], updated: T) -> bool {
    match items.iter_mut().find(|item| item.id() == updated.id()) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

/// Remove the item with a matching id; all other items keep their
/// relative order. Returns false when no item matched.
pub fn remove_item<T: CollectionItem>(items: &mut Vec<T>, id: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}

/// Plain controller state. All transitions live here so they can be
/// exercised without a reactive runtime.
#[derive(Clone, Debug)]
pub struct CollectionState<T> {
    items: Vec<T>,
    date_filter: Option<NaiveDate>,
    page: usize,
    page_size: usize,
}

impl<T: CollectionItem + Clone> CollectionState<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            date_filter: None,
            page: 1,
            page_size,
        }
    }

    /// Store a freshly fetched snapshot: sort newest first, reset to page 1
    pub fn load_done(&mut self, mut items: Vec<T>) {
        sort_newest_first(&mut items);
        self.items = items;
        self.page = 1;
    }

    /// Any filter change resets the current page to 1, so a stale page
    /// number can never point past the end of the newly filtered list
    pub fn set_date_filter(&mut self, date: Option<NaiveDate>) {
        self.date_filter = date;
        self.page = 1;
    }

    pub fn date_filter(&self) -> Option<NaiveDate> {
        self.date_filter
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = clamp_page(page, self.total_pages());
    }

    pub fn current_page(&self) -> usize {
        clamp_page(self.page, self.total_pages())
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn filtered(&self) -> Vec<T> {
        filter_by_date(&self.items, self.date_filter)
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered().len()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered_len(), self.page_size)
    }

    /// The rows the current page shows
    pub fn visible(&self) -> Vec<T> {
        let filtered = self.filtered();
        page_slice(&filtered, self.current_page(), self.page_size).to_vec()
    }

    /// Reconcile a confirmed update into the snapshot
    pub fn apply_patch(&mut self, updated: T) -> bool {
        patch_item(&mut self.items, updated)
    }

    /// Reconcile a confirmed delete into the snapshot
    pub fn apply_remove(&mut self, id: &str) -> bool {
        remove_item(&mut self.items, id)
    }
}

/// Reactive handle over [`CollectionState`] for Leptos views
pub struct CollectionSignal<T: Send + Sync + 'static>(RwSignal<CollectionState<T>>);

impl<T: Send + Sync + 'static> Clone for CollectionSignal<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for CollectionSignal<T> {}

impl<T> CollectionSignal<T>
where
    T: CollectionItem + Clone + Send + Sync + 'static,
{
    pub fn new(page_size: usize) -> Self {
        Self(RwSignal::new(CollectionState::new(page_size)))
    }

    pub fn load_done(&self, items: Vec<T>) {
        self.0.update(|s| s.load_done(items));
    }

    pub fn set_date_filter(&self, date: Option<NaiveDate>) {
        self.0.update(|s| s.set_date_filter(date));
    }

    pub fn set_page(&self, page: usize) {
        self.0.update(|s| s.set_page(page));
    }

    pub fn apply_patch(&self, updated: T) {
        self.0.update(|s| {
            s.apply_patch(updated);
        });
    }

    pub fn apply_remove(&self, id: &str) {
        self.0.update(|s| {
            s.apply_remove(id);
        });
    }

    pub fn visible(&self) -> Vec<T> {
        self.0.read().visible()
    }

    pub fn filtered_len(&self) -> usize {
        self.0.read().filtered_len()
    }

    pub fn total_pages(&self) -> usize {
        self.0.read().total_pages()
    }

    pub fn current_page(&self) -> usize {
        self.0.read().current_page()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        id: String,
        created_at: DateTime<Utc>,
        marked: bool,
    }

    impl CollectionItem for Row {
        fn id(&self) -> &str {
            &self.id
        }
        fn created_at(&self) -> DateTime<Utc> {
            self.created_at
        }
    }

    fn row(id: u32, ts: &str) -> Row {
        Row {
            id: id.to_string(),
            created_at: ts.parse().expect("test timestamp"),
            marked: false,
        }
    }

    fn rows(n: usize) -> Vec<Row> {
        // Distinct ascending timestamps so sort order is deterministic
        (0..n)
            .map(|i| Row {
                id: i.to_string(),
                created_at: Utc
                    .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
                    .unwrap()
                    + chrono::Duration::minutes(i as i64),
                marked: false,
            })
            .collect()
    }

    #[test]
    fn sort_is_newest_first() {
        let mut items = vec![row(1, "2024-01-02T10:00:00Z"), row(2, "2024-01-01T10:00:00Z")];
        sort_newest_first(&mut items);
        assert_eq!(items[0].id, "1");
        assert_eq!(items[1].id, "2");
    }

    #[test]
    fn filtering_never_reorders() {
        let mut items = rows(30);
        sort_newest_first(&mut items);
        let filtered = filter_by_date(&items, Some("2024-01-01".parse().unwrap()));
        let mut refiltered = filtered.clone();
        sort_newest_first(&mut refiltered);
        assert_eq!(filtered, refiltered);
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let items = rows(7);
        assert_eq!(filter_by_date(&items, None), items);
    }

    #[test]
    fn paging_is_a_lossless_partition() {
        let mut items = rows(45);
        sort_newest_first(&mut items);
        let total = total_pages(items.len(), ADMIN_PAGE_SIZE);
        let mut rebuilt = Vec::new();
        for page in 1..=total {
            rebuilt.extend_from_slice(page_slice(&items, page, ADMIN_PAGE_SIZE));
        }
        assert_eq!(rebuilt, items);
    }

    #[test]
    fn forty_five_items_make_three_admin_pages() {
        let items = rows(45);
        assert_eq!(total_pages(items.len(), ADMIN_PAGE_SIZE), 3);
        assert_eq!(page_slice(&items, 1, ADMIN_PAGE_SIZE).len(), 20);
        assert_eq!(page_slice(&items, 2, ADMIN_PAGE_SIZE).len(), 20);
        assert_eq!(page_slice(&items, 3, ADMIN_PAGE_SIZE).len(), 5);
    }

    #[test]
    fn empty_collection_counts_as_one_page() {
        assert_eq!(total_pages(0, ADMIN_PAGE_SIZE), 1);
        let empty: Vec<Row> = Vec::new();
        assert!(page_slice(&empty, 1, ADMIN_PAGE_SIZE).is_empty());
    }

    #[test]
    fn page_is_clamped_to_valid_range() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(99, 3), 3);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(5, 0), 1);
    }

    #[test]
    fn patch_replaces_exactly_one_item_in_place() {
        let mut items = vec![row(1, "2024-01-02T10:00:00Z"), row(2, "2024-01-01T10:00:00Z")];
        let mut updated = items[1].clone();
        updated.marked = true;
        assert!(patch_item(&mut items, updated));
        assert_eq!(items[0].id, "1");
        assert!(items[1].marked);
        assert!(!patch_item(&mut items, row(9, "2024-01-01T10:00:00Z")));
    }

    #[test]
    fn mark_round_trip_restores_the_flag() {
        let mut items = vec![row(1, "2024-01-02T10:00:00Z")];
        let before = items[0].marked;
        let mut on = items[0].clone();
        on.marked = true;
        patch_item(&mut items, on);
        let mut off = items[0].clone();
        off.marked = false;
        patch_item(&mut items, off);
        assert_eq!(items[0].marked, before);
    }

    #[test]
    fn remove_takes_one_item_and_keeps_order() {
        let mut items = rows(5);
        assert!(remove_item(&mut items, "2"));
        assert_eq!(items.len(), 4);
        let ids: Vec<&str> = items.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["0", "1", "3", "4"]);
        assert!(!remove_item(&mut items, "2"));
        assert_eq!(items.len(), 4);
    }

    #[test]
    fn load_sorts_and_date_filter_selects_by_calendar_day() {
        let mut state = CollectionState::new(ADMIN_PAGE_SIZE);
        state.load_done(vec![
            row(2, "2024-01-01T09:30:00Z"),
            row(1, "2024-01-02T08:00:00Z"),
        ]);
        let ids: Vec<&str> = state.items().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);

        state.set_date_filter(Some("2024-01-01".parse().unwrap()));
        let visible = state.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "2");
        assert_eq!(state.total_pages(), 1);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn filter_change_resets_the_page() {
        let mut state = CollectionState::new(ADMIN_PAGE_SIZE);
        state.load_done(rows(45));
        state.set_page(3);
        assert_eq!(state.current_page(), 3);
        state.set_date_filter(Some("2024-01-01".parse().unwrap()));
        assert_eq!(state.current_page(), 1);
        state.set_page(2);
        state.set_date_filter(None);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn failed_delete_leaves_the_snapshot_untouched() {
        // Confirmed-only reconciliation: the controller is only told about
        // deletes the server acknowledged, so a failed request changes nothing.
        let mut state = CollectionState::new(ADMIN_PAGE_SIZE);
        state.load_done(rows(25));
        let before = state.items().to_vec();
        state.set_page(2);
        let page_before = state.visible();
        // no apply_remove call for the failed request
        assert_eq!(state.items(), &before[..]);
        assert_eq!(state.visible(), page_before);
    }

    #[test]
    fn remove_on_last_page_clamps_the_page() {
        let mut state = CollectionState::new(ADMIN_PAGE_SIZE);
        state.load_done(rows(21));
        state.set_page(2);
        assert_eq!(state.visible().len(), 1);
        let id = state.visible()[0].id.clone();
        state.apply_remove(&id);
        assert_eq!(state.total_pages(), 1);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.visible().len(), 20);
    }
}
