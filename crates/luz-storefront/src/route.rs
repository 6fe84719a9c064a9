//! Site routes.
//!
//! ```text
//! /                   -> Home
//! /catalogo           -> Catalog
//! /catalogo/{slug}    -> Product
//! /beneficios         -> Benefits
//! /testimonios        -> Testimonials
//! /historia           -> Story
//! /contacto           -> Contact
//! anything else       -> NotFound
//! ```

use luz_commerce::Slug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::StorefrontError;

const CATALOG_SEGMENT: &str = "catalogo";

/// A resolved site location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(tag = "route", content = "param", rename_all = "snake_case")]
pub enum Route {
    #[default]
    Home,
    Catalog,
    Product(Slug),
    Benefits,
    Testimonials,
    Story,
    Contact,
    /// Unknown location, keeping the normalized path.
    NotFound(String),
}

impl Route {
    /// Pages listed in the header and footer navigation.
    pub const NAV: [Route; 6] = [
        Route::Home,
        Route::Catalog,
        Route::Benefits,
        Route::Testimonials,
        Route::Story,
        Route::Contact,
    ];

    /// Resolve a path. A query string, a fragment and a trailing slash are
    /// ignored; a missing leading slash is tolerated.
    pub fn parse(path: &str) -> Route {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            [CATALOG_SEGMENT] => Route::Catalog,
            [CATALOG_SEGMENT, slug] => match urlencoding::decode(slug) {
                Ok(decoded) => Route::Product(Slug::new(decoded.into_owned())),
                Err(_) => Route::NotFound(normalized(&segments)),
            },
            ["beneficios"] => Route::Benefits,
            ["testimonios"] => Route::Testimonials,
            ["historia"] => Route::Story,
            ["contacto"] => Route::Contact,
            _ => {
                tracing::debug!(path, "no route matched");
                Route::NotFound(normalized(&segments))
            }
        }
    }

    /// Canonical path of this route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Catalog => format!("/{}", CATALOG_SEGMENT),
            Route::Product(slug) => {
                format!("/{}/{}", CATALOG_SEGMENT, urlencoding::encode(slug.as_str()))
            }
            Route::Benefits => "/beneficios".to_string(),
            Route::Testimonials => "/testimonios".to_string(),
            Route::Story => "/historia".to_string(),
            Route::Contact => "/contacto".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Navigation label.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Inicio",
            Route::Catalog => "Catálogo",
            Route::Product(_) => "Producto",
            Route::Benefits => "Beneficios",
            Route::Testimonials => "Testimonios",
            Route::Story => "Historia",
            Route::Contact => "Contacto",
            Route::NotFound(_) => "Página no encontrada",
        }
    }

    pub fn product(slug: impl Into<Slug>) -> Self {
        Route::Product(slug.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Route::NotFound(_))
    }
}

fn normalized(segments: &[&str]) -> String {
    format!("/{}", segments.join("/"))
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = StorefrontError;

    /// Strict variant of [`Route::parse`]: the input must be an absolute path.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.trim_start().starts_with('/') {
            return Err(StorefrontError::InvalidPath(s.to_string()));
        }
        Ok(Route::parse(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_static_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/catalogo"), Route::Catalog);
        assert_eq!(Route::parse("/beneficios/"), Route::Benefits);
        assert_eq!(Route::parse("/testimonios?utm=ig"), Route::Testimonials);
        assert_eq!(Route::parse("historia"), Route::Story);
        assert_eq!(Route::parse("/contacto#form"), Route::Contact);
    }

    #[test]
    fn test_parse_product() {
        assert_eq!(
            Route::parse("/catalogo/vela-lavanda/"),
            Route::product("vela-lavanda")
        );
        assert_eq!(
            Route::parse("/catalogo/vela%20especial"),
            Route::product("vela especial")
        );
    }

    #[test]
    fn test_parse_not_found() {
        assert_eq!(Route::parse("/tienda"), Route::NotFound("/tienda".into()));
        assert_eq!(
            Route::parse("/catalogo/a/b"),
            Route::NotFound("/catalogo/a/b".into())
        );
        assert!(Route::parse("//beneficios//extra").is_not_found());
    }

    #[test]
    fn test_paths_round_trip() {
        for route in Route::NAV {
            assert_eq!(Route::parse(&route.path()), route);
        }
        let product = Route::product("vela especial");
        assert_eq!(product.path(), "/catalogo/vela%20especial");
        assert_eq!(Route::parse(&product.path()), product);
    }

    #[test]
    fn test_from_str_requires_absolute_path() {
        assert_eq!("/historia".parse::<Route>().unwrap(), Route::Story);
        assert!(matches!(
            "historia".parse::<Route>(),
            Err(StorefrontError::InvalidPath(_))
        ));
    }
}
