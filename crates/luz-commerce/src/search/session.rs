//! Catalog browsing state and its reconciliation.
//!
//! State is an immutable snapshot. [`reduce`] folds a user action into a
//! new snapshot and [`reconcile`] clamps the cursor against the recomputed
//! result. [`CatalogSession`] wires both to a catalog for callers that want
//! a single owner of the mutable pair.

use crate::catalog::{Catalog, Product};
use crate::ids::SessionId;
use crate::search::{
    distinct_scents, parse_price_bound, query, BoundKind, FilterSpec, PageMode, Pagination,
    Paginator, ScentFilter, TypeFilter,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Filter specification plus page cursor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogState {
    pub filter: FilterSpec,
    /// 1-based page cursor.
    pub page: usize,
}

impl CatalogState {
    pub fn new(filter: FilterSpec) -> Self {
        Self { filter, page: 1 }
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new(FilterSpec::default())
    }
}

/// A user interaction with the catalog controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogAction {
    SetSearch(String),
    SetType(TypeFilter),
    SetScent(ScentFilter),
    SetMinPrice(Option<i64>),
    SetMaxPrice(Option<i64>),
    /// Reset every filter to its default.
    ClearFilters,
    /// Next page, or reveal one more page in cumulative mode.
    NextPage,
    PrevPage,
    GoToPage(usize),
}

impl CatalogAction {
    /// Action for raw text typed into the minimum price field.
    pub fn min_price_input(raw: &str) -> Self {
        CatalogAction::SetMinPrice(parse_price_bound(raw, BoundKind::Min))
    }

    /// Action for raw text typed into the maximum price field.
    pub fn max_price_input(raw: &str) -> Self {
        CatalogAction::SetMaxPrice(parse_price_bound(raw, BoundKind::Max))
    }
}

/// Apply `action` to `state`.
///
/// `filtered_len` is the result length under `state.filter`; it bounds
/// page navigation. Any change to the filter puts the cursor back on 1.
pub fn reduce(
    state: &CatalogState,
    action: CatalogAction,
    pager: &Paginator,
    filtered_len: usize,
) -> CatalogState {
    let mut filter = state.filter.clone();
    let total_pages = pager.total_pages(filtered_len);

    let page = match action {
        CatalogAction::SetSearch(text) => {
            filter.search_text = text;
            state.page
        }
        CatalogAction::SetType(t) => {
            filter.type_filter = t;
            state.page
        }
        CatalogAction::SetScent(s) => {
            filter.scent_filter = s;
            state.page
        }
        CatalogAction::SetMinPrice(min) => {
            filter.min_price = min;
            state.page
        }
        CatalogAction::SetMaxPrice(max) => {
            filter.max_price = max;
            state.page
        }
        CatalogAction::ClearFilters => {
            filter = FilterSpec::default();
            state.page
        }
        CatalogAction::NextPage => (state.page + 1).min(total_pages),
        CatalogAction::PrevPage => match pager.mode {
            PageMode::Discrete => state.page.saturating_sub(1).max(1),
            PageMode::Cumulative => state.page,
        },
        CatalogAction::GoToPage(page) => page.clamp(1, total_pages),
    };

    if filter != state.filter {
        return CatalogState::new(filter);
    }
    CatalogState { filter, page }
}

/// Clamp the cursor after the result was recomputed.
///
/// In discrete mode a cursor past the last page snaps back to 1. In
/// cumulative mode the cursor is kept; the visible slice caps itself.
pub fn reconcile(state: CatalogState, filtered_len: usize, pager: &Paginator) -> CatalogState {
    let total_pages = pager.total_pages(filtered_len);
    match pager.mode {
        PageMode::Discrete if state.page > total_pages || state.page == 0 => {
            tracing::debug!(page = state.page, total_pages, "clamping page cursor");
            CatalogState { page: 1, ..state }
        }
        PageMode::Cumulative if state.page == 0 => CatalogState { page: 1, ..state },
        _ => state,
    }
}

/// What the catalog grid shows for one state snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView<'a> {
    /// Products visible at the cursor.
    pub items: Vec<&'a Product>,
    pub pagination: Pagination,
    pub filter: &'a FilterSpec,
}

impl CatalogView<'_> {
    /// The "no more products" state of the load-more button.
    pub fn is_exhausted(&self) -> bool {
        !self.pagination.has_next
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Owns the catalog, the memoized scent options and the current state.
#[derive(Debug, Clone)]
pub struct CatalogSession {
    id: SessionId,
    catalog: Arc<Catalog>,
    scents: Arc<[ScentFilter]>,
    pager: Paginator,
    state: CatalogState,
    filtered_len: usize,
}

impl CatalogSession {
    pub fn new(catalog: Arc<Catalog>, pager: Paginator) -> Self {
        let scents: Arc<[ScentFilter]> = distinct_scents(catalog.products()).into();
        let filtered_len = catalog.len();
        Self {
            id: SessionId::generate(),
            catalog,
            scents,
            pager,
            state: CatalogState::default(),
            filtered_len,
        }
    }

    /// Start from an existing snapshot (e.g., decoded from a URL).
    pub fn with_state(mut self, state: CatalogState) -> Self {
        self.filtered_len = query(self.catalog.products(), &state.filter).len();
        self.state = reconcile(state, self.filtered_len, &self.pager);
        self
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn paginator(&self) -> &Paginator {
        &self.pager
    }

    /// Scent select options, computed once per session.
    pub fn scent_options(&self) -> &[ScentFilter] {
        &self.scents
    }

    /// Apply a user action and reconcile the cursor.
    pub fn dispatch(&mut self, action: CatalogAction) -> &CatalogState {
        let next = reduce(&self.state, action, &self.pager, self.filtered_len);
        if next.filter != self.state.filter {
            self.filtered_len = query(self.catalog.products(), &next.filter).len();
        }
        self.state = reconcile(next, self.filtered_len, &self.pager);
        tracing::debug!(
            session = %self.id,
            page = self.state.page,
            matched = self.filtered_len,
            "catalog state updated"
        );
        &self.state
    }

    /// Number of products matching the current filter.
    pub fn matched(&self) -> usize {
        self.filtered_len
    }

    /// Recompute the visible products for the current state.
    pub fn view(&self) -> CatalogView<'_> {
        let filtered = query(self.catalog.products(), &self.state.filter);
        let items = self.pager.slice(&filtered, self.state.page).to_vec();
        CatalogView {
            items,
            pagination: self.pager.pagination(filtered.len(), self.state.page),
            filter: &self.state.filter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductType;

    fn session(mode: PageMode, page_size: usize) -> CatalogSession {
        let catalog = Arc::new(Catalog::builtin().unwrap());
        CatalogSession::new(catalog, Paginator::new(mode, page_size))
    }

    #[test]
    fn test_filter_change_resets_page() {
        let pager = Paginator::discrete(2);
        let state = CatalogState {
            filter: FilterSpec::default(),
            page: 3,
        };
        let next = reduce(&state, CatalogAction::SetSearch("vela".into()), &pager, 6);
        assert_eq!(next.page, 1);
        assert_eq!(next.filter.search_text, "vela");
    }

    #[test]
    fn test_same_filter_value_keeps_page() {
        let pager = Paginator::discrete(2);
        let state = CatalogState {
            filter: FilterSpec::default(),
            page: 2,
        };
        let next = reduce(&state, CatalogAction::SetType(TypeFilter::All), &pager, 6);
        assert_eq!(next.page, 2);
    }

    #[test]
    fn test_next_and_prev_are_bounded() {
        let pager = Paginator::discrete(6);
        let state = CatalogState::default();
        let next = reduce(&state, CatalogAction::NextPage, &pager, 13);
        assert_eq!(next.page, 2);
        let last = reduce(&CatalogState { page: 3, ..next.clone() }, CatalogAction::NextPage, &pager, 13);
        assert_eq!(last.page, 3);
        let first = reduce(&state, CatalogAction::PrevPage, &pager, 13);
        assert_eq!(first.page, 1);
        let jump = reduce(&state, CatalogAction::GoToPage(99), &pager, 13);
        assert_eq!(jump.page, 3);
    }

    #[test]
    fn test_prev_is_ignored_in_cumulative_mode() {
        let pager = Paginator::cumulative(6);
        let state = CatalogState {
            filter: FilterSpec::default(),
            page: 2,
        };
        assert_eq!(reduce(&state, CatalogAction::PrevPage, &pager, 13).page, 2);
    }

    #[test]
    fn test_reconcile_clamps_discrete_page() {
        let pager = Paginator::discrete(6);
        let state = CatalogState {
            filter: FilterSpec::default(),
            page: 3,
        };
        assert_eq!(pager.total_pages(13), 3);
        assert_eq!(reconcile(state.clone(), 13, &pager).page, 3);

        let clamped = reconcile(state, 4, &pager);
        assert_eq!(clamped.page, 1);
        assert_eq!(pager.total_pages(4), 1);
    }

    #[test]
    fn test_reconcile_leaves_cumulative_cursor() {
        let pager = Paginator::cumulative(6);
        let state = CatalogState {
            filter: FilterSpec::default(),
            page: 3,
        };
        assert_eq!(reconcile(state, 4, &pager).page, 3);
    }

    #[test]
    fn test_session_dispatch_and_view() {
        let mut s = session(PageMode::Discrete, 2);
        assert_eq!(s.view().items.len(), 2);
        assert_eq!(s.view().pagination.total_pages, 3);

        s.dispatch(CatalogAction::NextPage);
        s.dispatch(CatalogAction::NextPage);
        assert_eq!(s.state().page, 3);
        assert_eq!(s.view().items[0].slug.as_str(), "vela-personalizada");

        s.dispatch(CatalogAction::SetType(TypeFilter::Only(ProductType::Aromatherapy)));
        assert_eq!(s.state().page, 1);
        assert_eq!(s.matched(), 3);
        assert_eq!(s.view().pagination.total_pages, 2);
    }

    #[test]
    fn test_session_cumulative_load_more() {
        let mut s = session(PageMode::Cumulative, 4);
        assert_eq!(s.view().items.len(), 4);
        assert!(!s.view().is_exhausted());

        s.dispatch(CatalogAction::NextPage);
        let view = s.view();
        assert_eq!(view.items.len(), 6);
        assert!(view.is_exhausted());
    }

    #[test]
    fn test_session_invalid_price_text_is_unbounded() {
        let mut s = session(PageMode::Discrete, 6);
        s.dispatch(CatalogAction::min_price_input("50000"));
        assert_eq!(s.matched(), 4);
        s.dispatch(CatalogAction::min_price_input("cincuenta"));
        assert_eq!(s.state().filter.min_price, None);
        assert_eq!(s.matched(), 6);
    }

    #[test]
    fn test_session_decimal_and_negative_max() {
        let mut s = session(PageMode::Discrete, 6);
        s.dispatch(CatalogAction::max_price_input("45000.5"));
        assert_eq!(s.state().filter.max_price, Some(45000));
        assert_eq!(s.matched(), 1);
        assert_eq!(s.view().items[0].slug.as_str(), "vela-citronela");

        s.dispatch(CatalogAction::max_price_input("-1"));
        assert_eq!(s.state().filter.max_price, Some(-1));
        assert_eq!(s.matched(), 0);
        assert!(s.view().is_empty());
    }

    #[test]
    fn test_session_decimal_min_rounds_up() {
        let mut s = session(PageMode::Discrete, 6);
        s.dispatch(CatalogAction::min_price_input("74999.01"));
        assert_eq!(s.state().filter.min_price, Some(75000));
        assert_eq!(s.matched(), 1);
    }

    #[test]
    fn test_session_empty_result() {
        let mut s = session(PageMode::Discrete, 6);
        s.dispatch(CatalogAction::SetSearch("no existe".into()));
        let view = s.view();
        assert!(view.is_empty());
        assert_eq!(view.pagination.total_pages, 1);
        assert_eq!(view.pagination.page, 1);
    }

    #[test]
    fn test_session_scent_options_memoized() {
        let s = session(PageMode::Discrete, 6);
        assert_eq!(s.scent_options()[0], ScentFilter::All);
        let cloned = s.clone();
        assert!(std::ptr::eq(
            s.scent_options().as_ptr(),
            cloned.scent_options().as_ptr()
        ));
    }

    #[test]
    fn test_restored_cumulative_cursor_at_max() {
        let state = CatalogState {
            filter: FilterSpec::default(),
            page: usize::MAX,
        };
        let s = session(PageMode::Cumulative, 6).with_state(state);
        assert_eq!(s.state().page, usize::MAX);

        let view = s.view();
        assert_eq!(view.items.len(), 6);
        assert_eq!(view.pagination.start_item(), 1);
        assert_eq!(view.pagination.end_item(), 6);
        assert!(view.is_exhausted());
    }

    #[test]
    fn test_session_with_state_reconciles() {
        let state = CatalogState {
            filter: FilterSpec::new().with_search("lavanda"),
            page: 4,
        };
        let s = session(PageMode::Discrete, 6).with_state(state);
        assert_eq!(s.state().page, 1);
        assert_eq!(s.matched(), 1);
    }
}
