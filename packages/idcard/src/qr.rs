//! Verification QR code printed on the card and previewed on screen.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use qrcode::{Color, QrCode};

use crate::render::RenderError;

/// Modules of white border around the symbol.
pub const QUIET_ZONE: usize = 2;
/// Edge length of the on-screen preview.
pub const PREVIEW_PX: usize = 200;

/// `<portal>?id=<number>&name=<name>`; only the name is percent-encoded.
pub fn payload(portal_url: &str, id_card_number: &str, full_name: &str) -> String {
    format!(
        "{portal_url}?id={id_card_number}&name={}",
        encode_component(full_name)
    )
}

/// Percent-encode everything but `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
pub fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Square grid of dark/light modules, without quiet zone.
#[derive(Clone, Debug, PartialEq)]
pub struct QrMatrix {
    width: usize,
    dark: Vec<bool>,
}

impl QrMatrix {
    pub fn encode(payload: &str) -> Result<Self, RenderError> {
        let code = QrCode::new(payload.as_bytes())?;
        Ok(Self {
            width: code.width(),
            dark: code
                .to_colors()
                .into_iter()
                .map(|c| c == Color::Dark)
                .collect(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.width && self.dark[y * self.width + x]
    }

    /// Coordinates of every dark module, row by row.
    pub fn dark_modules(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.dark
            .iter()
            .enumerate()
            .filter(|(_, dark)| **dark)
            .map(|(i, _)| (i % self.width, i / self.width))
    }

    /// Black-on-white SVG, quiet zone included.
    pub fn to_svg(&self) -> String {
        let side = self.width + 2 * QUIET_ZONE;
        let mut path = String::new();
        for (x, y) in self.dark_modules() {
            path.push_str(&format!("M{},{}h1v1h-1z", x + QUIET_ZONE, y + QUIET_ZONE));
        }
        format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{px}" height="{px}" "#,
                r#"viewBox="0 0 {side} {side}" shape-rendering="crispEdges">"#,
                r##"<rect width="{side}" height="{side}" fill="#ffffff"/>"##,
                r##"<path d="{path}" fill="#000000"/></svg>"##
            ),
            px = PREVIEW_PX,
            side = side,
            path = path
        )
    }

    /// `data:image/svg+xml;base64,...` for an `img` tag.
    pub fn to_data_url(&self) -> String {
        format!("data:image/svg+xml;base64,{}", STANDARD.encode(self.to_svg()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_like_uri_components() {
        assert_eq!(encode_component("John Smith"), "John%20Smith");
        assert_eq!(encode_component("O'Neil (Jr.)"), "O'Neil%20(Jr.)");
        assert_eq!(encode_component("a&b=c/d"), "a%26b%3Dc%2Fd");
        assert_eq!(encode_component("José"), "Jos%C3%A9");
    }

    #[test]
    fn payload_points_at_portal() {
        assert_eq!(
            payload("https://employes.my-choice.co.in", "EMP007", "Anna Bell"),
            "https://employes.my-choice.co.in?id=EMP007&name=Anna%20Bell"
        );
        assert_eq!(
            payload("https://employes.my-choice.co.in", "EMP 8/A", "Ø"),
            "https://employes.my-choice.co.in?id=EMP 8/A&name=%C3%98"
        );
    }

    #[test]
    fn matrix_has_finder_corners() {
        let matrix = QrMatrix::encode("https://employes.my-choice.co.in?id=EMP001&name=John%20Smith")
            .unwrap();
        let w = matrix.width();
        assert!(w >= 21);
        assert!(matrix.is_dark(0, 0));
        assert!(matrix.is_dark(w - 1, 0));
        assert!(matrix.is_dark(0, w - 1));
        assert!(!matrix.is_dark(w, 0));
        assert!(matrix.dark_modules().count() > 0);
    }

    #[test]
    fn svg_preview_is_a_data_url() {
        let matrix = QrMatrix::encode("EMP001").unwrap();
        let svg = matrix.to_svg();
        let side = matrix.width() + 4;
        assert!(svg.contains(&format!("viewBox=\"0 0 {side} {side}\"")));
        assert!(svg.contains("width=\"200\""));
        assert!(matrix.to_data_url().starts_with("data:image/svg+xml;base64,"));
    }
}
