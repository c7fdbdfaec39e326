//! Startup asset loading
//!
//! Fonts and the cover image are optional: a missing file degrades to the
//! built-in font or the placeholder art, and the failure is logged.

use macroquad::prelude::*;

/// The fonts the player draws with. `None` falls back to macroquad's
/// built-in font.
pub struct Fonts {
    /// Body text
    pub main: Option<Font>,
    /// Headers and track titles
    pub medium: Option<Font>,
    /// The app title
    pub title: Option<Font>,
    /// Lucide icon glyphs
    pub icons: Option<Font>,
}

async fn load_font(path: &str) -> Option<Font> {
    match load_ttf_font(path).await {
        Ok(font) => {
            println!("Loaded font {}", path);
            Some(font)
        }
        Err(e) => {
            eprintln!("Failed to load font {}: {}, using built-in font", path, e);
            None
        }
    }
}

/// Load every font the player uses; missing files degrade individually
pub async fn load_fonts() -> Fonts {
    Fonts {
        main: load_font("assets/fonts/Manrope-Regular.ttf").await,
        medium: load_font("assets/fonts/Manrope-Medium.ttf").await,
        title: load_font("assets/fonts/Manrope-ExtraBold.ttf").await,
        icons: load_font("assets/fonts/lucide.ttf").await,
    }
}

/// Load the album-art texture. Returns `None` on any decode failure; the
/// layout then draws the flat placeholder square instead.
pub fn load_cover_texture(path: &str) -> Option<Texture2D> {
    match image::open(path) {
        Ok(img) => {
            let rgba = img.to_rgba8();
            let (width, height) = rgba.dimensions();
            let texture = Texture2D::from_rgba8(width as u16, height as u16, &rgba);
            texture.set_filter(FilterMode::Linear);
            println!("Loaded cover art {}", path);
            Some(texture)
        }
        Err(e) => {
            eprintln!("Failed to load cover art {}: {}", path, e);
            None
        }
    }
}
