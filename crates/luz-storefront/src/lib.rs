//! Site layer of the Luz de Nuit storefront.
//!
//! Maps routes to page models built from the catalog and the marketing
//! copy. Rendering is left to the caller.
//!
//! # Example
//!
//! ```rust
//! use luz_storefront::{Page, Route, Storefront, StoreSettings};
//!
//! let store = Storefront::builtin(StoreSettings::default()).unwrap();
//! match store.page(&Route::parse("/catalogo/vela-lavanda"), Default::default()) {
//!     Page::Product(detail) => assert!(detail.is_found()),
//!     other => panic!("unexpected page {:?}", other.title()),
//! }
//! ```

pub mod content;
mod detail;
mod error;
mod landing;
mod page;
mod route;

pub use detail::{NotFoundView, ProductDetail, ProductView};
pub use error::StorefrontError;
pub use landing::{LandingOptions, LandingPage, ProductCard, FEATURED_COUNT};
pub use page::{CatalogPage, ContactPage, Page};
pub use route::Route;

use std::sync::Arc;

use luz_commerce::catalog::Catalog;
use luz_commerce::contact::{contact_email, contact_message, ContactForm, PqrsKind};
use luz_commerce::outbound::{Greeting, MessagingTarget};
use luz_commerce::search::{CatalogSession, Paginator};
use luz_commerce::Currency;
use serde::{Deserialize, Serialize};

use content::{BenefitsContent, StoryContent, TestimonialsContent};

/// Store-wide settings shared by every page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSettings {
    pub name: String,
    pub target: MessagingTarget,
    pub currency: Currency,
    pub contact_email: String,
    pub paginator: Paginator,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            name: "Luz de Nuit".to_string(),
            target: MessagingTarget::default(),
            currency: Currency::COP,
            contact_email: "hola@luzdenuit.co".to_string(),
            paginator: Paginator::default(),
        }
    }
}

/// Links that hand a PQRS request off to WhatsApp or the mail client.
#[derive(Debug, Clone, Serialize)]
pub struct ContactLinks {
    pub message: String,
    pub whatsapp: String,
    pub mailto: String,
}

/// The catalog plus settings; builds every page.
#[derive(Debug, Clone)]
pub struct Storefront {
    catalog: Arc<Catalog>,
    settings: StoreSettings,
}

impl Storefront {
    pub fn new(catalog: Arc<Catalog>, settings: StoreSettings) -> Self {
        Self { catalog, settings }
    }

    /// Storefront over the embedded seed catalog.
    pub fn builtin(settings: StoreSettings) -> Result<Self, StorefrontError> {
        Ok(Self::new(Arc::new(Catalog::builtin()?), settings))
    }

    /// Storefront over a catalog in JSON form.
    pub fn from_json(json: &str, settings: StoreSettings) -> Result<Self, StorefrontError> {
        Ok(Self::new(Arc::new(Catalog::from_json(json)?), settings))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    /// A fresh browsing session sharing this storefront's catalog.
    pub fn session(&self) -> CatalogSession {
        self.session_with(self.settings.paginator)
    }

    /// Like [`Storefront::session`] with a different page policy.
    pub fn session_with(&self, paginator: Paginator) -> CatalogSession {
        CatalogSession::new(Arc::clone(&self.catalog), paginator)
    }

    pub fn greeting_link(&self, greeting: Greeting) -> String {
        self.settings.target.link(greeting.text())
    }

    pub fn landing(&self, options: LandingOptions) -> LandingPage {
        LandingPage::build(
            &self.catalog,
            &self.settings.target,
            self.settings.currency,
            options,
        )
    }

    pub fn detail(&self, slug: &str) -> ProductDetail {
        ProductDetail::resolve(
            &self.catalog,
            slug,
            &self.settings.target,
            self.settings.currency,
        )
    }

    pub fn contact_links(&self, form: &ContactForm) -> ContactLinks {
        let message = contact_message(form);
        ContactLinks {
            whatsapp: self.settings.target.link(&message),
            mailto: contact_email(form).mailto(&self.settings.contact_email),
            message,
        }
    }

    /// Build the page model for `route`.
    pub fn page(&self, route: &Route, options: LandingOptions) -> Page {
        match route {
            Route::Home => Page::Home(Box::new(self.landing(options))),
            Route::Catalog => {
                let session = self.session();
                Page::Catalog(CatalogPage::new(
                    self.catalog.len(),
                    session.paginator().page_size,
                    session.scent_options(),
                ))
            }
            Route::Product(slug) => Page::Product(self.detail(slug.as_str())),
            Route::Benefits => Page::Benefits(BenefitsContent::default()),
            Route::Testimonials => Page::Testimonials(TestimonialsContent::default()),
            Route::Story => Page::Story(StoryContent::default()),
            Route::Contact => Page::Contact(ContactPage {
                kinds: PqrsKind::ALL.to_vec(),
                email: self.settings.contact_email.clone(),
                whatsapp_url: self.settings.target.base_url(),
                info_link: self.greeting_link(Greeting::Info),
            }),
            Route::NotFound(path) => Page::not_found(path),
        }
    }
}
