//! PDF output for a laid-out [`CardPage`].

use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Pt, Rect,
};
use thiserror::Error;

use crate::layout::{CardPage, Element, Font, Rgb};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("QR code: {0}")]
    Qr(#[from] qrcode::types::QrError),
    #[error("PDF: {0}")]
    Pdf(String),
}

impl From<printpdf::Error> for RenderError {
    fn from(e: printpdf::Error) -> Self {
        RenderError::Pdf(e.to_string())
    }
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl Fonts {
    fn get(&self, font: Font) -> &IndirectFontRef {
        match font {
            Font::Regular => &self.regular,
            Font::Bold => &self.bold,
        }
    }
}

fn color(rgb: Rgb) -> Color {
    let Rgb(r, g, b) = rgb;
    Color::Rgb(printpdf::Rgb::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        None,
    ))
}

/// Page coordinates are top-down; PDF's are bottom-up.
fn mm(points: f32) -> Mm {
    Mm::from(Pt(points))
}

fn fill(layer: &PdfLayerReference, page_height: f32, x: f32, y: f32, w: f32, h: f32, rgb: Rgb) {
    layer.set_fill_color(color(rgb));
    let bottom = page_height - y - h;
    layer.add_rect(
        Rect::new(mm(x), mm(bottom), mm(x + w), mm(bottom + h)).with_mode(PaintMode::Fill),
    );
}

/// Render `page` into a single-page PDF document.
pub fn to_pdf(page: &CardPage, title: &str) -> Result<Vec<u8>, RenderError> {
    let (doc, page_index, layer_index) =
        PdfDocument::new(title, mm(page.width), mm(page.height), "Card");
    let fonts = Fonts {
        regular: doc.add_builtin_font(BuiltinFont::Helvetica)?,
        bold: doc.add_builtin_font(BuiltinFont::HelveticaBold)?,
    };
    let layer = doc.get_page(page_index).get_layer(layer_index);

    for element in &page.elements {
        match element {
            Element::Fill {
                x,
                y,
                width,
                height,
                color,
            } => fill(&layer, page.height, *x, *y, *width, *height, *color),
            Element::Text {
                x,
                y,
                size,
                font,
                color: rgb,
                text,
            } => {
                layer.set_fill_color(color(*rgb));
                layer.use_text(text.as_str(), *size, mm(*x), mm(page.height - y), fonts.get(*font));
            }
            Element::Qr { x, y, size, matrix } => {
                let module = size / matrix.width().max(1) as f32;
                for (col, row) in matrix.dark_modules() {
                    fill(
                        &layer,
                        page.height,
                        x + col as f32 * module,
                        y + row as f32 * module,
                        module,
                        module,
                        Rgb::BLACK,
                    );
                }
            }
        }
    }

    Ok(doc.save_to_bytes()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{PAGE_HEIGHT, PAGE_WIDTH};
    use crate::QrMatrix;

    #[test]
    fn writes_a_pdf_document() {
        let page = CardPage {
            width: PAGE_WIDTH,
            height: PAGE_HEIGHT,
            elements: vec![
                Element::Fill {
                    x: 10.0,
                    y: 10.0,
                    width: 100.0,
                    height: 40.0,
                    color: Rgb(0x05, 0x96, 0x69),
                },
                Element::Text {
                    x: 20.0,
                    y: 36.0,
                    size: 16.0,
                    font: Font::Bold,
                    color: Rgb::WHITE,
                    text: "ID CARD".into(),
                },
                Element::Qr {
                    x: 10.0,
                    y: 60.0,
                    size: 56.0,
                    matrix: QrMatrix::encode("EMP001").unwrap(),
                },
            ],
        };
        let bytes = to_pdf(&page, "ID Card EMP001").unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn points_convert_to_millimetres() {
        let a4 = mm(PAGE_WIDTH);
        assert!((a4.0 - 210.0).abs() < 0.1);
    }
}
