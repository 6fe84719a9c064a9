//! Marketing copy for the landing and informational pages.

use luz_commerce::outbound::Greeting;
use serde::{Deserialize, Serialize};

/// Rotating hero slogans, in display order.
pub const SLOGANS: [&str; 5] = [
    "Encendé tu ritual de calma",
    "Diseñadas para el momento perfecto",
    "Aromas que abrazan tu espacio",
    "Regala presencia, regala Luz de Nuit",
    "Bienestar en cada chispa",
];

/// Milliseconds each slogan stays on screen.
pub const SLOGAN_INTERVAL_MS: u64 = 3800;

/// Slogan shown after `tick` rotations; wraps around.
pub fn slogan_at(tick: usize) -> &'static str {
    SLOGANS[tick % SLOGANS.len()]
}

/// Rotations completed after `elapsed_ms` on the page.
pub fn slogan_tick(elapsed_ms: u64) -> usize {
    usize::try_from(elapsed_ms / SLOGAN_INTERVAL_MS).unwrap_or(usize::MAX)
}

/// Hero banner copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroContent {
    pub badge: String,
    pub headline: String,
    pub highlight: String,
    pub subheadline: String,
    pub catalog_cta_text: String,
    pub buy_cta_text: String,
    /// Pre-filled message of the buy button.
    pub buy_message: String,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            badge: "Nuevo • Portafolio Digital".to_string(),
            headline: "Velas artesanales para".to_string(),
            highlight: "momentos memorables".to_string(),
            subheadline: "En Luz de Nuit creamos velas con propósito: bienestar, belleza y aroma natural en piezas minimalistas. Encendé la calma y transformá tu espacio.".to_string(),
            catalog_cta_text: "Ver catálogo".to_string(),
            buy_cta_text: "Comprar ahora".to_string(),
            buy_message: Greeting::BuyNow.text().to_string(),
        }
    }
}

/// One benefit card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Benefit {
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl Benefit {
    pub fn new(icon: &str, title: &str, description: &str) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// Benefits page content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenefitsContent {
    pub section_title: String,
    pub section_subtitle: String,
    pub benefits: Vec<Benefit>,
}

impl Default for BenefitsContent {
    fn default() -> Self {
        Self {
            section_title: "Beneficios de nuestras velas".to_string(),
            section_subtitle: "Bienestar real en piezas minimalistas y elegantes".to_string(),
            benefits: vec![
                Benefit::new(
                    "flame",
                    "Combustión limpia",
                    "Cera vegetal y mecha de algodón para una llama estable y menos hollín.",
                ),
                Benefit::new(
                    "leaf",
                    "Aromas naturales",
                    "Aceites esenciales y fragancias grado cosmético, seleccionados con cuidado.",
                ),
                Benefit::new(
                    "heart",
                    "Hechas a mano",
                    "Cada vela se vierte artesanalmente en pequeños lotes para garantizar calidad.",
                ),
                Benefit::new(
                    "sparkles",
                    "Diseño minimalista",
                    "Estética elegante que combina con cualquier espacio y ocasión.",
                ),
            ],
        }
    }
}

/// A customer testimonial.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author_name: String,
}

impl Testimonial {
    pub fn new(quote: &str, name: &str) -> Self {
        Self {
            quote: quote.to_string(),
            author_name: name.to_string(),
        }
    }
}

/// Testimonials page content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestimonialsContent {
    pub section_title: String,
    pub section_subtitle: String,
    pub testimonials: Vec<Testimonial>,
}

impl Default for TestimonialsContent {
    fn default() -> Self {
        Self {
            section_title: "Testimonios".to_string(),
            section_subtitle: "Lo que dicen quienes ya encendieron su ritual".to_string(),
            testimonials: vec![
                Testimonial::new(
                    "La vela de lavanda me cambió las noches. Aroma suave, dura mucho y la presentación es preciosa.",
                    "Camila R.",
                ),
                Testimonial::new(
                    "Regalé una personalizada y fue un éxito. El detalle de la etiqueta con el nombre ¡maravilloso!",
                    "Daniel M.",
                ),
                Testimonial::new(
                    "La de masaje es perfecta para relajarnos después del trabajo. Textura cálida y delicada con la piel.",
                    "Laura S.",
                ),
            ],
        }
    }
}

/// Brand story page content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryContent {
    pub section_title: String,
    pub paragraphs: Vec<String>,
    pub cta_text: String,
    pub cta_message: String,
}

impl Default for StoryContent {
    fn default() -> Self {
        Self {
            section_title: "Quién soy • Historia de la marca".to_string(),
            paragraphs: vec![
                "Soy la creadora de Luz de Nuit, una marca nacida de la búsqueda de calma en lo cotidiano. Empecé a verter velas en casa, explorando mezclas naturales y un diseño minimalista que se sintiera elegante y cercano. Hoy, cada vela que producimos mantiene esa esencia: calidad artesanal, ingredientes confiables y una estética que abraza tus espacios sin sobrecargarlos.".to_string(),
                "Creemos en el poder de los pequeños rituales. Encender una vela puede marcar el inicio de un momento: leer, meditar, compartir o simplemente respirar. Gracias por permitirnos acompañarte en esos instantes.".to_string(),
            ],
            cta_text: "Quiero la mía".to_string(),
            cta_message: Greeting::Story.text().to_string(),
        }
    }
}

/// Closing call to action shown under every page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CtaContent {
    pub headline: String,
    pub subheadline: String,
    pub cta_text: String,
    pub cta_message: String,
}

impl Default for CtaContent {
    fn default() -> Self {
        Self {
            headline: "¿Listx para encender tu ritual?".to_string(),
            subheadline: "Escribinos por WhatsApp para personalizar tu pedido o comprar de inmediato.".to_string(),
            cta_text: "Comprar por WhatsApp".to_string(),
            cta_message: Greeting::Order.text().to_string(),
        }
    }
}
