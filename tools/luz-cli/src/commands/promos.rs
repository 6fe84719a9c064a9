//! Promotions listing.

use anyhow::Result;
use chrono::Local;
use luz_storefront::ProductCard;

use super::{parse_date, PromosArgs};
use crate::context::Context;
use crate::output::{format_price, promo_badge};

/// Run the promos command.
pub fn run(args: PromosArgs, ctx: &Context) -> Result<()> {
    let store = ctx.storefront()?;
    let settings = store.settings();

    let on = match (&args.on, args.active) {
        (Some(raw), _) => Some(parse_date(raw)?),
        (None, true) => Some(Local::now().date_naive()),
        (None, false) => None,
    };

    let cards: Vec<ProductCard> = store
        .catalog()
        .promotions()
        .into_iter()
        .filter(|p| match (on, &p.promo) {
            (Some(date), Some(promo)) => promo.is_active_on(date),
            _ => true,
        })
        .map(|p| ProductCard::new(p, &settings.target, settings.currency))
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&cards);
        return Ok(());
    }

    ctx.output.header("Promociones");
    if cards.is_empty() {
        ctx.output.info("No promotions are running.");
        return Ok(());
    }

    for card in &cards {
        ctx.output.line("");
        let label = card.promo_label.as_deref().unwrap_or_default();
        ctx.output
            .line(&format!("  {} {}", card.name, promo_badge(label)));
        ctx.output.kv(
            "price",
            &format_price(card.nominal_price, card.effective_price),
        );
        if let Some(until) = card.promo_until {
            ctx.output.kv("until", &until.format("%Y-%m-%d").to_string());
        }
        ctx.output.link("Lo quiero", &card.purchase_link);
    }
    Ok(())
}
