//! Landing page: hero, rotating slogan, featured products and promotions.

use chrono::NaiveDate;
use luz_commerce::catalog::{Catalog, Product};
use luz_commerce::outbound::{product_message, Greeting, MessagingTarget};
use luz_commerce::{Currency, Money};
use serde::Serialize;

use crate::content::{slogan_at, CtaContent, HeroContent};
use crate::Route;

/// Products shown in the hero mockup.
pub const FEATURED_COUNT: usize = 3;

/// A product tile with its purchase link.
#[derive(Debug, Clone, Serialize)]
pub struct ProductCard {
    pub slug: String,
    pub name: String,
    pub type_label: String,
    pub description: String,
    pub color: Option<String>,
    pub nominal_price: Money,
    pub effective_price: Money,
    pub promo_label: Option<String>,
    pub promo_until: Option<NaiveDate>,
    pub detail_path: String,
    pub purchase_link: String,
}

impl ProductCard {
    pub fn new(product: &Product, target: &MessagingTarget, currency: Currency) -> Self {
        Self {
            slug: product.slug.to_string(),
            name: product.name.clone(),
            type_label: product.product_type.label().to_string(),
            description: product.description.clone(),
            color: product.color.clone(),
            nominal_price: product.nominal_price(currency),
            effective_price: product.effective_price(currency),
            promo_label: product.promo.as_ref().map(|p| p.label.clone()),
            promo_until: product.promo.as_ref().and_then(|p| p.until),
            detail_path: Route::Product(product.slug.clone()).path(),
            purchase_link: target.link(&product_message(product, currency)),
        }
    }
}

/// Knobs for building the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandingOptions {
    /// Slogan rotations elapsed.
    pub tick: usize,
    /// When set, promotions that ended before this date are hidden.
    pub today: Option<NaiveDate>,
    pub featured: usize,
}

impl Default for LandingOptions {
    fn default() -> Self {
        Self {
            tick: 0,
            today: None,
            featured: FEATURED_COUNT,
        }
    }
}

/// The home page model.
#[derive(Debug, Clone, Serialize)]
pub struct LandingPage {
    pub hero: HeroContent,
    pub slogan: String,
    pub buy_link: String,
    pub catalog_path: String,
    pub featured: Vec<ProductCard>,
    pub promotions: Vec<ProductCard>,
    pub cta: CtaContent,
    pub cta_link: String,
    pub floating_link: String,
}

impl LandingPage {
    pub fn build(
        catalog: &Catalog,
        target: &MessagingTarget,
        currency: Currency,
        options: LandingOptions,
    ) -> Self {
        let hero = HeroContent::default();
        let cta = CtaContent::default();

        let featured = catalog
            .featured(options.featured)
            .iter()
            .map(|p| ProductCard::new(p, target, currency))
            .collect();

        let promotions: Vec<ProductCard> = catalog
            .promotions()
            .into_iter()
            .filter(|p| match (options.today, &p.promo) {
                (Some(today), Some(promo)) => promo.is_active_on(today),
                _ => true,
            })
            .map(|p| ProductCard::new(p, target, currency))
            .collect();

        tracing::debug!(
            tick = options.tick,
            promotions = promotions.len(),
            "landing page built"
        );

        Self {
            buy_link: target.link(&hero.buy_message),
            cta_link: target.link(&cta.cta_message),
            floating_link: target.link(Greeting::Floating.text()),
            slogan: slogan_at(options.tick).to_string(),
            catalog_path: Route::Catalog.path(),
            hero,
            featured,
            promotions,
            cta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use luz_commerce::outbound::decode_message;

    fn build(options: LandingOptions) -> LandingPage {
        LandingPage::build(
            &Catalog::builtin().unwrap(),
            &MessagingTarget::default(),
            Currency::COP,
            options,
        )
    }

    #[test]
    fn test_landing_defaults() {
        let page = build(LandingOptions::default());
        assert_eq!(page.slogan, "Encendé tu ritual de calma");
        assert_eq!(page.featured.len(), 3);
        assert_eq!(page.featured[0].detail_path, "/catalogo/vela-lavanda");

        let promos: Vec<&str> = page.promotions.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(
            promos,
            vec!["vela-lavanda", "vela-citronela", "vela-personalizada"]
        );
        assert_eq!(page.promotions[1].effective_price.display(), "$22.500");
    }

    #[test]
    fn test_landing_slogan_follows_tick() {
        let page = build(LandingOptions {
            tick: 7,
            ..Default::default()
        });
        assert_eq!(page.slogan, slogan_at(2));
    }

    #[test]
    fn test_expired_promotions_hidden_with_date() {
        let page = build(LandingOptions {
            today: NaiveDate::from_ymd_opt(2025, 9, 20),
            ..Default::default()
        });
        let promos: Vec<&str> = page.promotions.iter().map(|c| c.slug.as_str()).collect();
        // Lavanda ended on 2025-09-15; citronela has no end date.
        assert_eq!(promos, vec!["vela-citronela", "vela-personalizada"]);
    }

    #[test]
    fn test_landing_links_carry_greetings() {
        let page = build(LandingOptions::default());
        assert_eq!(
            decode_message(&page.cta_link).as_deref(),
            Some(Greeting::Order.text())
        );
        assert_eq!(
            decode_message(&page.floating_link).as_deref(),
            Some(Greeting::Floating.text())
        );
        assert!(decode_message(&page.promotions[0].purchase_link)
            .unwrap()
            .contains("*Vela de Lavanda Provenzal*"));
    }
}
