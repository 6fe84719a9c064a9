//! Pre-filled message templates.

use crate::catalog::Product;
use crate::money::Currency;

/// Purchase request for a product.
///
/// Always quotes the nominal price, even while a promo is running.
pub fn product_message(product: &Product, currency: Currency) -> String {
    format!(
        "Hello, I'm interested in *{name}* (type: {kind}).\n\
         Capacity: {capacity} ml\n\
         Duration: {hours} h\n\
         Price: {price}\n\
         Can we arrange purchase and delivery?",
        name = product.name,
        kind = product.product_type,
        capacity = product.capacity_ml,
        hours = product.burn_time_hours,
        price = product.nominal_price(currency),
    )
}

/// Fixed openers used by the site's generic WhatsApp buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Greeting {
    /// Header button asking for information.
    Info,
    /// Hero "buy now" button.
    BuyNow,
    /// Brand story page.
    Story,
    /// Closing call to action.
    Order,
    /// Floating button on every page.
    Floating,
}

impl Greeting {
    pub fn text(&self) -> &'static str {
        match self {
            Greeting::Info => "Hola, quiero más información de Luz de Nuit ✨",
            Greeting::BuyNow => "Hola, quiero comprar una vela ✨",
            Greeting::Story => "Hola, me encantó la historia de Luz de Nuit y quiero comprar ✨",
            Greeting::Order => "Hola, quiero hacer mi pedido con Luz de Nuit ✨",
            Greeting::Floating => "Hola, vengo del portafolio web y quiero comprar ✨",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Promo};

    #[test]
    fn test_product_message_layout() {
        let catalog = Catalog::builtin().unwrap();
        let p = catalog.get("vela-vainilla").unwrap();
        assert_eq!(
            product_message(p, Currency::COP),
            "Hello, I'm interested in *Vela de Vainilla Bourbon* (type: Decorativa).\n\
             Capacity: 240 ml\n\
             Duration: 40 h\n\
             Price: $52.000\n\
             Can we arrange purchase and delivery?"
        );
    }

    #[test]
    fn test_product_message_uses_nominal_price() {
        let catalog = Catalog::builtin().unwrap();
        let p = catalog.get("vela-lavanda").unwrap();
        assert_eq!(p.promo.as_ref().map(|p| p.discount_percent), Some(10));

        let msg = product_message(p, Currency::COP);
        assert!(msg.contains("Vela de Lavanda Provenzal"));
        assert!(msg.contains("48.000"));
        assert!(!msg.contains("43.200"));
        assert!(msg.contains("(type: Aromaterapia)"));
    }

    #[test]
    fn test_product_message_is_deterministic() {
        let catalog = Catalog::builtin().unwrap();
        let mut p = catalog.get("vela-citronela").unwrap().clone();
        let first = product_message(&p, Currency::USD);
        assert_eq!(first, product_message(&p, Currency::USD));
        assert!(first.contains("Price: $45,000"));

        p.promo = Some(Promo::new("-99%", 99));
        assert_eq!(first, product_message(&p, Currency::USD));
    }

    #[test]
    fn test_greetings() {
        assert!(Greeting::Order.text().contains("pedido"));
        assert_ne!(Greeting::Info.text(), Greeting::Floating.text());
    }
}
