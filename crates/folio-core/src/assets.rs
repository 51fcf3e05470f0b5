use std::io::Read;
use std::time::Duration;

use image::{DynamicImage, Rgb, RgbImage, Rgba};

use crate::layout::MAX_IMAGE_EDGE_PX;

/// Fetch timeout per image. One blocking fetch per card; there is no pool
/// and no retry.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Outcome of an image fetch. Absence of an image is a normal result the
/// layout engine turns into a placeholder, never an error.
#[derive(Debug, Clone)]
pub enum FetchedImage {
    Image(RgbImage),
    Unavailable,
}

impl FetchedImage {
    pub fn is_available(&self) -> bool {
        matches!(self, FetchedImage::Image(_))
    }
}

/// Trait for image retrieval backends.
pub trait ImageFetcher {
    /// Retrieve and decode the image at `url`. Every failure mode maps to
    /// `FetchedImage::Unavailable`.
    fn fetch(&self, url: &str) -> FetchedImage;

    /// Name of this fetch backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// HTTP fetcher with a bounded per-request timeout.
pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl HttpFetcher {
    pub fn new() -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(FETCH_TIMEOUT)
            .build();
        HttpFetcher { agent }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> FetchedImage {
        let url = url.trim();
        if url.is_empty() {
            return FetchedImage::Unavailable;
        }

        // ureq treats non-2xx status as Err, so one match covers network
        // errors, timeouts, and bad status alike.
        let response = match self.agent.get(url).call() {
            Ok(r) => r,
            Err(e) => {
                log::debug!("image fetch failed for {url}: {e}");
                return FetchedImage::Unavailable;
            }
        };

        let mut bytes = Vec::new();
        if let Err(e) = response.into_reader().read_to_end(&mut bytes) {
            log::debug!("image read failed for {url}: {e}");
            return FetchedImage::Unavailable;
        }

        match image::load_from_memory(&bytes) {
            Ok(img) => FetchedImage::Image(prepare_image(img)),
            Err(e) => {
                log::debug!("image decode failed for {url}: {e}");
                FetchedImage::Unavailable
            }
        }
    }

    fn backend_name(&self) -> &str {
        "http"
    }
}

/// Bound the image to the maximum pixel edge and flatten it to RGB.
///
/// Downscaling keeps the output PDF small; `thumbnail` preserves aspect
/// ratio and never upscales.
pub fn prepare_image(img: DynamicImage) -> RgbImage {
    let (w, h) = (img.width(), img.height());
    let img = if w.max(h) > MAX_IMAGE_EDGE_PX {
        img.thumbnail(MAX_IMAGE_EDGE_PX, MAX_IMAGE_EDGE_PX)
    } else {
        img
    };
    flatten_to_rgb(&img)
}

/// Composite any alpha channel against a white background.
///
/// PDF image XObjects here carry no soft mask, so transparent PNG regions
/// would otherwise come out black.
fn flatten_to_rgb(img: &DynamicImage) -> RgbImage {
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();
    let mut rgb = RgbImage::new(w, h);
    for (x, y, pixel) in rgba.enumerate_pixels() {
        let Rgba([r, g, b, a]) = *pixel;
        let alpha = a as f32 / 255.0;
        let bg = 255.0;
        let out = [
            (r as f32 * alpha + bg * (1.0 - alpha)) as u8,
            (g as f32 * alpha + bg * (1.0 - alpha)) as u8,
            (b as f32 * alpha + bg * (1.0 - alpha)) as u8,
        ];
        rgb.put_pixel(x, y, Rgb(out));
    }
    rgb
}
