//! Product detail and purchase link commands.

use anyhow::{Context as _, Result};
use luz_commerce::outbound::product_message;
use luz_observability::SessionId;
use luz_storefront::{ProductDetail, Route};
use serde::Serialize;

use super::{BuyArgs, ProductArgs};
use crate::context::Context;
use crate::output::{format_price, promo_badge};

/// Run the product command.
pub fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let store = ctx.storefront()?;
    let detail = store.detail(&args.slug);

    if ctx.output.is_json() {
        ctx.output.json(&detail);
        return Ok(());
    }

    let view = match detail {
        ProductDetail::Found(view) => view,
        ProductDetail::NotFound(missing) => {
            ctx.output.header(&missing.title);
            ctx.output.warn(&missing.message);
            ctx.output
                .info(&format!("Browse the catalog: luz route {}", missing.catalog_path));
            return Ok(());
        }
    };

    ctx.output.header(&view.name);
    if let Some(label) = &view.promo_label {
        ctx.output.line(&format!("  {}", promo_badge(label)));
    }
    ctx.output.kv(
        "details",
        &format!(
            "{} • {} ml • {} h",
            view.type_label, view.capacity_ml, view.burn_time_hours
        ),
    );
    ctx.output.kv(
        "price",
        &format_price(view.nominal_price, view.effective_price),
    );
    if let Some(until) = view.promo_until {
        ctx.output.kv("promo until", &until.format("%Y-%m-%d").to_string());
    }
    ctx.output.kv("scent notes", &view.scent_notes.join(", "));

    let mut traits = Vec::new();
    if view.is_natural {
        traits.push("natural");
    }
    if view.is_massage_safe {
        traits.push("massage safe");
    }
    if !traits.is_empty() {
        ctx.output.kv("traits", &traits.join(", "));
    }

    ctx.output.line("");
    ctx.output.line(&format!("  {}", view.description));

    if !view.ingredients.is_empty() {
        ctx.output.header("Ingredientes");
        for ingredient in &view.ingredients {
            ctx.output.list_item(ingredient);
        }
    }

    ctx.output.line("");
    ctx.output.link("Comprar por WhatsApp", &view.purchase_link);
    Ok(())
}

#[derive(Serialize)]
struct Purchase<'a> {
    slug: &'a str,
    message: String,
    link: String,
}

/// Run the buy command.
pub fn run_buy(args: BuyArgs, ctx: &Context) -> Result<()> {
    let store = ctx.storefront()?;
    let product = store
        .catalog()
        .require(&args.slug)
        .with_context(|| format!("Cannot build a purchase link for '{}'", args.slug))?;

    let settings = store.settings();
    let message = product_message(product, settings.currency);
    let link = settings.target.link(&message);

    ctx.logger(&SessionId::generate(), &Route::Product(product.slug.clone()))
        .info_builder("purchase link built")
        .field("slug", product.slug.as_str())
        .field_bool("promo", product.has_promo())
        .emit();

    if ctx.output.is_json() {
        ctx.output.json(&Purchase {
            slug: product.slug.as_str(),
            message,
            link,
        });
        return Ok(());
    }

    if args.message_only {
        println!("{}", message);
        return Ok(());
    }

    ctx.output.header(&product.name);
    for line in message.lines() {
        ctx.output.line(&format!("  {}", line));
    }
    ctx.output.line("");
    println!("{}", link);
    Ok(())
}
