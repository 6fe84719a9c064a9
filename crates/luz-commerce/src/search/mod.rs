//! Search module.
//!
//! Filter specification, the query engine, pagination and the catalog
//! session reconciler.

mod facets;
mod filter;
mod query;
mod results;
mod session;

pub use facets::{distinct_scents, type_options};
pub use filter::{parse_price_bound, BoundKind, Filter, FilterSpec, ScentFilter, TypeFilter, ALL_LABEL};
pub use query::query;
pub use results::{
    has_more, total_pages, visible_slice, PageMode, Pagination, Paginator, DEFAULT_PAGE_SIZE,
};
pub use session::{reconcile, reduce, CatalogAction, CatalogSession, CatalogState, CatalogView};
