//! PDF drawing for the catalog grid: printpdf layer API, built-in Helvetica.
//!
//! All geometry comes from the constants in the parent module; coordinates
//! there are measured from the top of the page and converted to PDF space
//! (origin bottom-left) only at draw time.

use std::io::BufWriter;

use image::RgbImage;
use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color, ColorBits, ColorSpace, Image, ImageTransform, ImageXObject,
    IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Point, Polygon, Px, Rgb,
};

use super::{
    plan_cards, wrap_name, CardSlot, CARD_HEIGHT_MM, CARD_PADDING_MM, CARD_WIDTH_MM,
    IMAGE_HEIGHT_MM, MARGIN_MM, NAME_MAX_LINES, NAME_WRAP_CHARS, PAGE_HEIGHT_MM, PAGE_WIDTH_MM,
};
use crate::assets::{FetchedImage, ImageFetcher};
use crate::error::FolioError;
use crate::model::{CatalogOptions, Product};

const HEADING_PT: f32 = 18.0;
const NAME_PT: f32 = 10.0;
const PRICE_PT: f32 = 10.0;
/// Vertical advance between wrapped name lines.
const NAME_LINE_MM: f32 = 4.0;
const CARD_CORNER_MM: f32 = 2.0;
const PRICE_TAG_H_MM: f32 = 6.0;
/// Helvetica average glyph width, as a fraction of the point size. Good
/// enough for centering and tag sizing with built-in (non-embedded) fonts.
const GLYPH_WIDTH_FACTOR: f32 = 0.5;
const PT_TO_MM: f32 = 0.3528;

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

/// Render one catalog document and return the finished PDF bytes.
///
/// Images are fetched one at a time while drawing, and each is dropped as
/// soon as its card is on the page. A fetch that comes back `Unavailable`
/// degrades to a placeholder rectangle; nothing aborts generation.
pub fn render_catalog(
    products: &[Product],
    options: &CatalogOptions,
    fetcher: &dyn ImageFetcher,
) -> Result<Vec<u8>, FolioError> {
    let heading = options.heading.trim();
    if heading.is_empty() {
        return Err(FolioError::EmptyHeading);
    }

    let plan = plan_cards(products.len());
    log::debug!(
        "rendering {} card(s) over {} page(s) via {} fetcher",
        products.len(),
        plan.page_count,
        fetcher.backend_name()
    );

    let (doc, page1, layer1) = PdfDocument::new(
        heading,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );

    let fonts = Fonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| FolioError::Render(e.to_string()))?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| FolioError::Render(e.to_string()))?,
    };

    // One layer per page, heading redrawn on each. The document always has
    // a first page even before any card lands on it.
    let mut layers: Vec<PdfLayerReference> = vec![doc.get_page(page1).get_layer(layer1)];
    for _ in 1..plan.page_count {
        let (page, layer) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
        layers.push(doc.get_page(page).get_layer(layer));
    }
    for layer in &layers {
        draw_heading(layer, heading, &fonts.bold);
    }

    for (product, slot) in products.iter().zip(&plan.slots) {
        let layer = &layers[slot.page];
        draw_card(layer, product, slot, options.show_price, fetcher, &fonts);
    }

    let mut writer = BufWriter::new(Vec::new());
    doc.save(&mut writer)
        .map_err(|e| FolioError::Render(e.to_string()))?;
    writer
        .into_inner()
        .map_err(|e| FolioError::Render(e.to_string()))
}

fn draw_heading(layer: &PdfLayerReference, heading: &str, bold: &IndirectFontRef) {
    let text_width_mm = heading.chars().count() as f32 * HEADING_PT * GLYPH_WIDTH_FACTOR * PT_TO_MM;
    let x = ((PAGE_WIDTH_MM - text_width_mm) / 2.0).max(MARGIN_MM);
    let baseline = from_top(MARGIN_MM + HEADING_PT * PT_TO_MM);
    layer.set_fill_color(black());
    layer.use_text(heading, HEADING_PT, Mm(x), Mm(baseline), bold);
}

/// Draw one complete card: boundary, image (or placeholder), wrapped name,
/// and the optional price tag.
fn draw_card(
    layer: &PdfLayerReference,
    product: &Product,
    slot: &CardSlot,
    show_price: bool,
    fetcher: &dyn ImageFetcher,
    fonts: &Fonts,
) {
    let x = slot.x;
    let y = slot.y;

    // Card boundary
    layer.set_outline_color(Color::Rgb(Rgb::new(0.7, 0.7, 0.7, None)));
    layer.set_outline_thickness(0.5);
    draw_rounded_rect(
        layer,
        x,
        y,
        CARD_WIDTH_MM,
        CARD_HEIGHT_MM,
        CARD_CORNER_MM,
        PaintMode::Stroke,
    );

    // Image slot, inset from the boundary. The fetched pixels live only for
    // the duration of this call.
    let img_x = x + CARD_PADDING_MM;
    let img_y = y + CARD_PADDING_MM;
    let img_w = CARD_WIDTH_MM - 2.0 * CARD_PADDING_MM;
    let img_h = IMAGE_HEIGHT_MM - 2.0 * CARD_PADDING_MM;
    match fetcher.fetch(&product.image_url) {
        FetchedImage::Image(rgb) => embed_image(layer, rgb, img_x, img_y, img_w, img_h),
        FetchedImage::Unavailable => draw_placeholder(layer, img_x, img_y, img_w, img_h),
    }

    // Name, word-wrapped to the card's character budget
    layer.set_fill_color(black());
    let text_x = x + CARD_PADDING_MM;
    let mut baseline = y + IMAGE_HEIGHT_MM + NAME_LINE_MM;
    for line in wrap_name(&product.name, NAME_WRAP_CHARS, NAME_MAX_LINES) {
        layer.use_text(line, NAME_PT, Mm(text_x), Mm(from_top(baseline)), &fonts.regular);
        baseline += NAME_LINE_MM;
    }

    if show_price && product.has_price() {
        let price = product.price.as_deref().unwrap_or("").trim();
        draw_price_tag(layer, price, x, y, fonts);
    }
}

/// Filled rounded tag at the bottom of the card with the price in bold
/// white. "Rs." rather than the rupee sign: built-in Helvetica is
/// WinAnsi-encoded and has no rupee glyph.
fn draw_price_tag(layer: &PdfLayerReference, price: &str, card_x: f32, card_y: f32, fonts: &Fonts) {
    let label = format!("Rs. {price}");
    let text_width_mm = label.chars().count() as f32 * PRICE_PT * GLYPH_WIDTH_FACTOR * PT_TO_MM;
    let tag_w = (text_width_mm + 2.0 * CARD_PADDING_MM).min(CARD_WIDTH_MM - 2.0 * CARD_PADDING_MM);
    let tag_x = card_x + CARD_PADDING_MM;
    let tag_y = card_y + CARD_HEIGHT_MM - PRICE_TAG_H_MM - CARD_PADDING_MM;

    layer.set_fill_color(Color::Rgb(Rgb::new(0.0, 0.45, 0.25, None)));
    draw_rounded_rect(layer, tag_x, tag_y, tag_w, PRICE_TAG_H_MM, 1.5, PaintMode::Fill);

    layer.set_fill_color(Color::Rgb(Rgb::new(1.0, 1.0, 1.0, None)));
    layer.use_text(
        label.as_str(),
        PRICE_PT,
        Mm(tag_x + CARD_PADDING_MM),
        Mm(from_top(tag_y + PRICE_TAG_H_MM - 1.8)),
        &fonts.bold,
    );
    layer.set_fill_color(black());
}

/// Aspect-fit the image into the slot and center the remainder.
fn embed_image(layer: &PdfLayerReference, rgb: RgbImage, x: f32, y: f32, max_w: f32, max_h: f32) {
    let (width_px, height_px) = rgb.dimensions();
    if width_px == 0 || height_px == 0 {
        draw_placeholder(layer, x, y, max_w, max_h);
        return;
    }

    let aspect = width_px as f32 / height_px as f32;
    let (w_mm, h_mm) = if max_w / max_h > aspect {
        (max_h * aspect, max_h)
    } else {
        (max_w, max_w / aspect)
    };
    let draw_x = x + (max_w - w_mm) / 2.0;
    let draw_y = y + (max_h - h_mm) / 2.0;

    let image = Image::from(ImageXObject {
        width: Px(width_px as usize),
        height: Px(height_px as usize),
        color_space: ColorSpace::Rgb,
        bits_per_component: ColorBits::Bit8,
        interpolate: true,
        image_data: rgb.into_raw(),
        image_filter: None,
        clipping_bbox: None,
        smask: None,
    });

    // Physical size is steered through dpi: pixels per inch of target width
    let dpi = width_px as f32 / (w_mm / 25.4);
    image.add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(draw_x)),
            translate_y: Some(Mm(from_top(draw_y + h_mm))),
            dpi: Some(dpi),
            ..Default::default()
        },
    );
}

/// Blank rectangle standing in for an unavailable image, same footprint as
/// the image slot so the grid stays aligned.
fn draw_placeholder(layer: &PdfLayerReference, x: f32, y: f32, w: f32, h: f32) {
    layer.set_outline_color(Color::Rgb(Rgb::new(0.8, 0.8, 0.8, None)));
    layer.set_outline_thickness(0.4);
    let points = vec![
        (point(x, y), false),
        (point(x + w, y), false),
        (point(x + w, y + h), false),
        (point(x, y + h), false),
    ];
    layer.add_polygon(Polygon {
        rings: vec![points],
        mode: PaintMode::Stroke,
        winding_order: WindingOrder::NonZero,
    });
}

/// Rounded rectangle outline/fill with uniform corner radius, the quarter
/// circles approximated by line segments.
fn draw_rounded_rect(
    layer: &PdfLayerReference,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    radius: f32,
    mode: PaintMode,
) {
    let r = radius.min(w / 2.0).min(h / 2.0);
    let segments = 8;
    let pi = std::f32::consts::PI;

    let mut points: Vec<(Point, bool)> = Vec::new();
    let arc = |points: &mut Vec<(Point, bool)>, cx: f32, cy: f32, start: f32, end: f32| {
        for i in 0..=segments {
            let t = i as f32 / segments as f32;
            let angle = start + t * (end - start);
            points.push((point(cx + r * angle.cos(), cy + r * angle.sin()), false));
        }
    };

    // Clockwise in from-top coordinates, starting after the top-left corner.
    // Arc angles are expressed in the from-top frame too (y grows downward).
    points.push((point(x + r, y), false));
    points.push((point(x + w - r, y), false));
    arc(&mut points, x + w - r, y + r, -pi / 2.0, 0.0);
    points.push((point(x + w, y + h - r), false));
    arc(&mut points, x + w - r, y + h - r, 0.0, pi / 2.0);
    points.push((point(x + r, y + h), false));
    arc(&mut points, x + r, y + h - r, pi / 2.0, pi);
    points.push((point(x, y + r), false));
    arc(&mut points, x + r, y + r, pi, 3.0 * pi / 2.0);

    layer.add_polygon(Polygon {
        rings: vec![points],
        mode,
        winding_order: WindingOrder::NonZero,
    });
}

/// Point in PDF space from a from-top coordinate pair.
fn point(x: f32, y_from_top: f32) -> Point {
    Point::new(Mm(x), Mm(from_top(y_from_top)))
}

/// Convert a from-top y coordinate to PDF space.
fn from_top(y_mm: f32) -> f32 {
    PAGE_HEIGHT_MM - y_mm
}

fn black() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None))
}
