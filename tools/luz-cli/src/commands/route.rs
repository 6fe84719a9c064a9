//! Route resolution command.

use anyhow::{Context as _, Result};
use luz_storefront::{LandingOptions, Page, ProductDetail, Route};
use serde::Serialize;

use super::RouteArgs;
use crate::context::Context;

#[derive(Serialize)]
struct Resolved<'a> {
    path: String,
    route: &'a Route,
    page: &'a Page,
}

/// Run the route command.
pub fn run(args: RouteArgs, ctx: &Context) -> Result<()> {
    let route: Route = args
        .path
        .parse()
        .with_context(|| format!("Cannot resolve '{}'", args.path))?;
    let store = ctx.storefront()?;
    let page = store.page(&route, LandingOptions::default());

    if ctx.output.is_json() {
        ctx.output.json(&Resolved {
            path: route.path(),
            route: &route,
            page: &page,
        });
        return Ok(());
    }

    ctx.output.header(&page.title());
    ctx.output.kv("route", route.title());
    ctx.output.kv("path", &route.path());

    match &page {
        Page::Home(landing) => {
            ctx.output.kv("slogan", &landing.slogan);
            ctx.output.kv("promotions", &landing.promotions.len().to_string());
        }
        Page::Catalog(catalog) => {
            ctx.output.kv("products", &catalog.total_products.to_string());
            ctx.output.kv("page size", &catalog.page_size.to_string());
            ctx.output.kv("types", &catalog.type_options.join(", "));
            ctx.output.kv("scents", &catalog.scent_options.len().to_string());
        }
        Page::Product(ProductDetail::Found(view)) => {
            ctx.output.kv("type", &view.type_label);
            ctx.output.link("buy", &view.purchase_link);
        }
        Page::Product(ProductDetail::NotFound(missing)) => {
            ctx.output.warn(&missing.message);
            ctx.output.kv("back to", &missing.catalog_path);
        }
        Page::Benefits(content) => {
            for benefit in &content.benefits {
                ctx.output
                    .list_item(&format!("{}: {}", benefit.title, benefit.description));
            }
        }
        Page::Testimonials(content) => {
            for t in &content.testimonials {
                ctx.output.list_item(&format!("\"{}\" ({})", t.quote, t.author_name));
            }
        }
        Page::Story(content) => {
            for paragraph in &content.paragraphs {
                ctx.output.line("");
                ctx.output.line(&format!("  {}", paragraph));
            }
            ctx.output.line("");
            ctx.output
                .link(&content.cta_text, &store.settings().target.link(&content.cta_message));
        }
        Page::Contact(contact) => {
            let kinds: Vec<&str> = contact.kinds.iter().map(|k| k.label()).collect();
            ctx.output.kv("kinds", &kinds.join(", "));
            ctx.output.kv("email", &contact.email);
            ctx.output.link("whatsapp", &contact.whatsapp_url);
            ctx.output.link("more info", &contact.info_link);
        }
        Page::NotFound { path, home_path } => {
            ctx.output.warn(&format!("Nothing lives at {}", path));
            ctx.output.kv("home", home_path);
        }
    }
    Ok(())
}
