//! Landing page command.

use anyhow::Result;
use luz_storefront::content::slogan_tick;
use luz_storefront::{LandingOptions, FEATURED_COUNT};

use super::{parse_date, HomeArgs};
use crate::context::Context;
use crate::output::{format_price, promo_badge};

/// Run the home command.
pub fn run(args: HomeArgs, ctx: &Context) -> Result<()> {
    let store = ctx.storefront()?;
    let options = LandingOptions {
        tick: args.elapsed_ms.map_or(args.tick, slogan_tick),
        today: args.on.as_deref().map(parse_date).transpose()?,
        featured: FEATURED_COUNT,
    };
    let page = store.landing(options);

    if ctx.output.is_json() {
        ctx.output.json(&page);
        return Ok(());
    }

    ctx.output.line(&format!("  {}", page.hero.badge));
    ctx.output
        .header(&format!("{} {}", page.hero.headline, page.hero.highlight));
    ctx.output.line(&format!("  {}", page.hero.subheadline));
    ctx.output.line("");
    ctx.output.line(&format!("  ✨ {}", page.slogan));
    ctx.output.line("");
    ctx.output.link(&page.hero.buy_cta_text, &page.buy_link);
    ctx.output.kv(&page.hero.catalog_cta_text, &page.catalog_path);

    ctx.output.header("Destacados");
    for card in &page.featured {
        ctx.output.list_item(&format!("{} ({})", card.name, card.detail_path));
    }

    if !page.promotions.is_empty() {
        ctx.output.header("Promociones");
        for card in &page.promotions {
            let label = card.promo_label.as_deref().unwrap_or_default();
            ctx.output.list_item(&format!(
                "{} {} {}",
                card.name,
                promo_badge(label),
                format_price(card.nominal_price, card.effective_price)
            ));
        }
    }

    ctx.output.header(&page.cta.headline);
    ctx.output.line(&format!("  {}", page.cta.subheadline));
    ctx.output.link(&page.cta.cta_text, &page.cta_link);
    Ok(())
}
