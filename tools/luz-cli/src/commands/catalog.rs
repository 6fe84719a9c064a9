//! Catalog browsing commands.

use anyhow::{anyhow, bail, Result};
use luz_commerce::search::{
    type_options, CatalogAction, CatalogSession, PageMode, Paginator, ScentFilter, TypeFilter,
};
use luz_storefront::Route;

use super::CatalogArgs;
use crate::context::Context;
use crate::output::{format_price, promo_badge, truncate};

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let store = ctx.storefront()?;

    let mode = match args.mode.as_deref() {
        Some(raw) => raw.parse::<PageMode>()?,
        None => ctx.config.catalog.mode,
    };
    let page_size = args.page_size.unwrap_or(ctx.config.catalog.page_size);
    if page_size == 0 {
        bail!("--page-size must be at least 1");
    }

    let mut session = store.session_with(Paginator::new(mode, page_size));
    for action in actions(&args, ctx)? {
        session.dispatch(action);
    }

    let requested = args.page.max(1);
    if session.state().page != requested {
        ctx.output.warn(&format!(
            "Page {} is out of range; showing page {}",
            requested,
            session.state().page
        ));
    }

    log_view(&session, ctx);
    let view = session.view();

    if ctx.output.is_json() {
        ctx.output.json(&view);
        return Ok(());
    }

    ctx.output.header(Route::Catalog.title());
    if !view.filter.is_default() {
        print_filter(&session, ctx);
    }

    if view.is_empty() {
        ctx.output.info("No products match these filters.");
        return Ok(());
    }

    let currency = store.settings().currency;
    let name_width = ctx.output.term_width().saturating_sub(60).clamp(20, 40);
    ctx.output.line("");
    ctx.output
        .table_row(&["SLUG", "NAME", "TYPE", "PRICE"], &[22, name_width, 14, 10]);
    for product in &view.items {
        let mut price = format_price(
            product.nominal_price(currency),
            product.effective_price(currency),
        );
        if let Some(promo) = &product.promo {
            price = format!("{} {}", price, promo_badge(&promo.label));
        }
        let name = truncate(&product.name, name_width);
        ctx.output.table_row(
            &[
                product.slug.as_str(),
                &name,
                product.product_type.label(),
                &price,
            ],
            &[22, name_width, 14, 10],
        );
    }

    let p = &view.pagination;
    ctx.output.line("");
    ctx.output.info(&format!(
        "Showing {}-{} of {} · page {}/{} ({})",
        p.start_item(),
        p.end_item(),
        p.total,
        p.page,
        p.total_pages,
        p.mode
    ));
    if p.has_next {
        let hint = match p.mode {
            PageMode::Discrete => "next page",
            PageMode::Cumulative => "load more",
        };
        ctx.output.info(&format!("{}: --page {}", hint, p.page + 1));
    }

    Ok(())
}

/// Run the scents command.
pub fn run_scents(ctx: &Context) -> Result<()> {
    let store = ctx.storefront()?;
    let session = store.session();
    let options: Vec<String> = session
        .scent_options()
        .iter()
        .map(ToString::to_string)
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&options);
        return Ok(());
    }

    ctx.output.header("Scent notes");
    for option in &options {
        ctx.output.list_item(option);
    }
    Ok(())
}

/// Translate command-line filters into session actions, in form order.
fn actions(args: &CatalogArgs, ctx: &Context) -> Result<Vec<CatalogAction>> {
    let mut actions = Vec::new();

    if let Some(text) = &args.search {
        actions.push(CatalogAction::SetSearch(text.clone()));
    }
    if let Some(raw) = &args.product_type {
        let filter = TypeFilter::parse(raw).ok_or_else(|| {
            let options: Vec<String> = type_options().iter().map(ToString::to_string).collect();
            anyhow!("Unknown category '{}'. Options: {}", raw, options.join(", "))
        })?;
        actions.push(CatalogAction::SetType(filter));
    }
    if let Some(raw) = &args.scent {
        actions.push(CatalogAction::SetScent(ScentFilter::parse(raw)));
    }
    if let Some(raw) = &args.min {
        let action = CatalogAction::min_price_input(raw);
        warn_ignored_bound(&action, "--min", raw, ctx);
        actions.push(action);
    }
    if let Some(raw) = &args.max {
        let action = CatalogAction::max_price_input(raw);
        warn_ignored_bound(&action, "--max", raw, ctx);
        actions.push(action);
    }
    if args.page > 1 {
        actions.push(CatalogAction::GoToPage(args.page));
    }

    Ok(actions)
}

fn warn_ignored_bound(action: &CatalogAction, flag: &str, raw: &str, ctx: &Context) {
    let unset = matches!(
        action,
        CatalogAction::SetMinPrice(None) | CatalogAction::SetMaxPrice(None)
    );
    if unset && !raw.trim().is_empty() {
        ctx.output
            .warn(&format!("Ignoring {} '{}': not a number", flag, raw));
    }
}

fn print_filter(session: &CatalogSession, ctx: &Context) {
    let filter = &session.state().filter;
    if !filter.search_text.trim().is_empty() {
        ctx.output.kv("search", filter.search_text.trim());
    }
    if !filter.type_filter.is_all() {
        ctx.output.kv("type", &filter.type_filter.to_string());
    }
    if !filter.scent_filter.is_all() {
        ctx.output.kv("scent", &filter.scent_filter.to_string());
    }
    if let Some(min) = filter.min_price {
        ctx.output.kv("min", &min.to_string());
    }
    if let Some(max) = filter.max_price {
        ctx.output.kv("max", &max.to_string());
    }
}

fn log_view(session: &CatalogSession, ctx: &Context) {
    let state = session.state();
    ctx.logger(session.id(), &Route::Catalog)
        .info_builder("catalog viewed")
        .field("search", state.filter.search_text.trim())
        .field("type", state.filter.type_filter.to_string())
        .field("scent", state.filter.scent_filter.to_string())
        .field_u64("matched", session.matched() as u64)
        .field_u64("page", state.page as u64)
        .emit();
}
