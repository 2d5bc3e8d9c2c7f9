//! Headless-Chrome rendering core for slideshot.
//!
//! Turns an HTML string into a fixed-size PNG bitmap by driving a
//! dedicated headless Chrome process: one launch per render, no pooling,
//! no state carried between calls.
//!
//! # Example
//!
//! ```no_run
//! use slideshot_core::{render_html, RenderOptions};
//!
//! # fn main() -> Result<(), slideshot_core::RenderError> {
//! let slide = render_html("<html><body><h1>Slide 1</h1></body></html>", &RenderOptions::default())?;
//! assert_eq!((slide.width, slide.height), (1080, 1350));
//! std::fs::write("slide.png", &slide.png).unwrap();
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

pub mod error;
mod chrome;

pub use chrome::render_html;
pub use error::{RenderError, Result};

/// Viewport dimensions in logical (CSS) pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        // 4:5 Instagram carousel slide
        Self {
            width: 1080,
            height: 1350,
        }
    }
}

/// Options for a single render.
///
/// The defaults produce a carousel slide: 1080×1350 viewport captured at
/// 2× device scale (2160×2700 physical pixels). Callers override fields
/// struct-update style:
///
/// ```
/// use slideshot_core::{RenderOptions, Viewport};
///
/// let opts = RenderOptions {
///     viewport: Viewport { width: 1200, height: 630 },
///     ..Default::default()
/// };
/// assert_eq!(opts.scale, 2.0);
/// ```
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Viewport size in logical pixels.
    pub viewport: Viewport,
    /// Device scale factor applied at capture time.
    pub scale: f64,
    /// Cap on waiting for the content to finish loading.
    pub load_timeout: Duration,
    /// Settle window after the load event, standing in for network idle.
    pub settle_delay: Duration,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            scale: 2.0,
            load_timeout: Duration::from_secs(30),
            settle_delay: Duration::from_millis(500),
        }
    }
}

/// A rendered slide.
///
/// `width`/`height` are the logical viewport dimensions; the PNG itself is
/// `width * scale` by `height * scale` physical pixels.
#[derive(Debug, Clone)]
pub struct Slide {
    /// Raw PNG bytes.
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub scale: f64,
}

impl Slide {
    /// Physical pixel width of the captured bitmap.
    pub fn physical_width(&self) -> u32 {
        (self.width as f64 * self.scale) as u32
    }

    /// Physical pixel height of the captured bitmap.
    pub fn physical_height(&self) -> u32 {
        (self.height as f64 * self.scale) as u32
    }

    /// Consume the slide and return the PNG as a base64 string.
    pub fn into_base64(self) -> String {
        STANDARD.encode(self.png)
    }
}
