//! Font registration for plot text
//! 
//! Text is drawn through plotters' `ab_glyph` backend, which only knows
//! fonts registered at runtime. Without one, figures are drawn unlabeled.

use plotters::style::{register_font, FontStyle};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Family name plot text is requested under
pub const FONT_FAMILY: &str = "sans-serif";

const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

static FONT_READY: OnceLock<bool> = OnceLock::new();

/// Register a font for [`FONT_FAMILY`] once per process
/// 
/// # Returns
/// Whether text can be drawn
pub fn ensure_fonts(preferred: Option<&Path>) -> bool {
    *FONT_READY.get_or_init(|| {
        let found = preferred
            .map(Path::to_path_buf)
            .into_iter()
            .chain(SYSTEM_FONTS.iter().map(PathBuf::from))
            .find(|path| try_register(path));
        
        if found.is_none() {
            warn!("No usable font found; figures will be drawn without labels");
        }
        found.is_some()
    })
}

fn try_register(path: &Path) -> bool {
    let Ok(bytes) = std::fs::read(path) else {
        return false;
    };
    
    // Registered fonts must outlive every chart
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    match register_font(FONT_FAMILY, FontStyle::Normal, bytes) {
        Ok(()) => {
            debug!(path = %path.display(), "registered plot font");
            true
        }
        Err(_) => {
            debug!(path = %path.display(), "not a usable font");
            false
        }
    }
}
