//! Page models, one per route.

use luz_commerce::contact::PqrsKind;
use luz_commerce::search::{type_options, ScentFilter};
use serde::Serialize;

use crate::content::{BenefitsContent, StoryContent, TestimonialsContent};
use crate::{LandingPage, ProductDetail, Route};

/// Catalog entry point: what the filter selects can offer.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogPage {
    pub total_products: usize,
    pub page_size: usize,
    pub type_options: Vec<String>,
    pub scent_options: Vec<String>,
}

impl CatalogPage {
    pub fn new(total_products: usize, page_size: usize, scents: &[ScentFilter]) -> Self {
        Self {
            total_products,
            page_size,
            type_options: type_options().iter().map(ToString::to_string).collect(),
            scent_options: scents.iter().map(ToString::to_string).collect(),
        }
    }
}

/// PQRS form and where its messages go.
#[derive(Debug, Clone, Serialize)]
pub struct ContactPage {
    pub kinds: Vec<PqrsKind>,
    pub email: String,
    pub whatsapp_url: String,
    /// Header "more information" button.
    pub info_link: String,
}

/// A rendered route.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "page", content = "data", rename_all = "snake_case")]
pub enum Page {
    Home(Box<LandingPage>),
    Catalog(CatalogPage),
    Product(ProductDetail),
    Benefits(BenefitsContent),
    Testimonials(TestimonialsContent),
    Story(StoryContent),
    Contact(ContactPage),
    NotFound { path: String, home_path: String },
}

impl Page {
    pub fn not_found(path: &str) -> Self {
        Page::NotFound {
            path: path.to_string(),
            home_path: Route::Home.path(),
        }
    }

    /// Heading for terminal and log output.
    pub fn title(&self) -> String {
        match self {
            Page::Home(landing) => landing.hero.headline.clone(),
            Page::Catalog(_) => Route::Catalog.title().to_string(),
            Page::Product(ProductDetail::Found(view)) => view.name.clone(),
            Page::Product(ProductDetail::NotFound(view)) => view.title.clone(),
            Page::Benefits(content) => content.section_title.clone(),
            Page::Testimonials(content) => content.section_title.clone(),
            Page::Story(content) => content.section_title.clone(),
            Page::Contact(_) => Route::Contact.title().to_string(),
            Page::NotFound { .. } => Route::NotFound(String::new()).title().to_string(),
        }
    }
}
