//! Card geometry.
//!
//! Coordinates are PDF points measured from the top-left corner of an A4
//! page; text `y` is the baseline. The front sits on the left, the back on
//! the right.

use crate::merge::CardData;
use crate::qr::QrMatrix;

pub const PAGE_WIDTH: f32 = 595.28;
pub const PAGE_HEIGHT: f32 = 841.89;
pub const CARD_WIDTH: f32 = 240.0;
pub const CARD_HEIGHT: f32 = 320.0;
const PAGE_PADDING: f32 = 15.0;
const HEADER_HEIGHT: f32 = 40.0;
const FOOTER_HEIGHT: f32 = 26.0;
const INSET: f32 = 15.0;

pub const TERMS: &str = "This card is the property of MyChoice and must be returned upon \
termination of employment. Unauthorized use is prohibited. Report loss immediately to HR \
department.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(0xff, 0xff, 0xff);
    pub const BLACK: Rgb = Rgb(0x00, 0x00, 0x00);
    const PAGE: Rgb = Rgb(0xf0, 0xf4, 0xf8);
    const BORDER: Rgb = Rgb(0xcb, 0xd5, 0xe1);
    const BRAND: Rgb = Rgb(0x05, 0x96, 0x69);
    const INK: Rgb = Rgb(0x1e, 0x29, 0x3b);
    const MUTED: Rgb = Rgb(0x64, 0x74, 0x8b);
    const PANEL: Rgb = Rgb(0xf1, 0xf5, 0xf9);
    const PHOTO: Rgb = Rgb(0xf8, 0xfa, 0xfc);
    const MINT: Rgb = Rgb(0xec, 0xfd, 0xf5);
    const NOTE: Rgb = Rgb(0xfe, 0xfc, 0xe8);
    const NOTE_TITLE: Rgb = Rgb(0xa1, 0x62, 0x07);
    const NOTE_INK: Rgb = Rgb(0x45, 0x1a, 0x03);
    const FOOTER_INK: Rgb = Rgb(0xe0, 0xe7, 0xff);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Font {
    Regular,
    Bold,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Fill {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgb,
    },
    Text {
        x: f32,
        y: f32,
        size: f32,
        font: Font,
        color: Rgb,
        text: String,
    },
    Qr {
        x: f32,
        y: f32,
        size: f32,
        matrix: QrMatrix,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardPage {
    pub width: f32,
    pub height: f32,
    pub elements: Vec<Element>,
}

impl CardPage {
    /// Every string drawn on the page, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().filter_map(|e| match e {
            Element::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Rough Helvetica advance width; good enough for centring short labels.
pub fn text_width(text: &str, size: f32, font: Font) -> f32 {
    let em = match font {
        Font::Regular => 0.52,
        Font::Bold => 0.56,
    };
    text.chars().count() as f32 * size * em
}

/// Greedy word wrap at `max_chars` per line.
pub fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > max_chars {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

struct Canvas {
    elements: Vec<Element>,
}

impl Canvas {
    fn fill(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb) {
        self.elements.push(Element::Fill {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn text(&mut self, x: f32, y: f32, size: f32, font: Font, color: Rgb, text: impl Into<String>) {
        self.elements.push(Element::Text {
            x,
            y,
            size,
            font,
            color,
            text: text.into(),
        });
    }

    /// Centre `text` horizontally within `[left, left + width]`.
    fn centered(&mut self, left: f32, width: f32, y: f32, size: f32, font: Font, color: Rgb, text: &str) {
        let x = left + ((width - text_width(text, size, font)) / 2.0).max(0.0);
        self.text(x, y, size, font, color, text);
    }

    fn card_frame(&mut self, left: f32, top: f32, helpline: &str) {
        self.fill(left - 1.0, top - 1.0, CARD_WIDTH + 2.0, CARD_HEIGHT + 2.0, Rgb::BORDER);
        self.fill(left, top, CARD_WIDTH, CARD_HEIGHT, Rgb::WHITE);
        self.fill(left, top, CARD_WIDTH, HEADER_HEIGHT, Rgb::BRAND);
        self.centered(left, CARD_WIDTH, top + 26.0, 16.0, Font::Bold, Rgb::WHITE, "ID CARD");

        let footer_top = top + CARD_HEIGHT - FOOTER_HEIGHT;
        self.fill(left, footer_top, CARD_WIDTH, FOOTER_HEIGHT, Rgb::BRAND);
        self.centered(
            left,
            CARD_WIDTH,
            footer_top + 16.0,
            7.0,
            Font::Bold,
            Rgb::FOOTER_INK,
            &format!("Contact: {helpline}"),
        );
    }

    /// `label` in brand colour with its value at `value_x`.
    fn row(&mut self, left: f32, value_x: f32, y: f32, size: f32, label: &str, value: &str) {
        self.text(left, y, size, Font::Bold, Rgb::BRAND, label);
        self.text(value_x, y, size, Font::Regular, Rgb::INK, value);
    }
}

/// Lay out front and back of one card on an A4 page.
pub fn card_page(data: &CardData, qr: &QrMatrix) -> CardPage {
    let mut canvas = Canvas {
        elements: Vec::new(),
    };
    canvas.fill(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT, Rgb::PAGE);

    let gap = (PAGE_WIDTH - 2.0 * CARD_WIDTH) / 4.0;
    let top = PAGE_PADDING;
    front(&mut canvas, data, qr, gap, top);
    back(&mut canvas, data, gap * 3.0 + CARD_WIDTH, top);

    CardPage {
        width: PAGE_WIDTH,
        height: PAGE_HEIGHT,
        elements: canvas.elements,
    }
}

fn front(canvas: &mut Canvas, data: &CardData, qr: &QrMatrix, left: f32, top: f32) {
    canvas.card_frame(left, top, &data.helpline);
    let x = left + INSET;

    // Photo frame with initials; the picture itself is shown on screen only.
    canvas.fill(x, top + 52.0, 52.0, 62.0, Rgb::BORDER);
    canvas.fill(x + 1.0, top + 53.0, 50.0, 60.0, Rgb::PHOTO);
    canvas.centered(x, 52.0, top + 89.0, 16.0, Font::Bold, Rgb::BRAND, &data.initials);

    let badge = format!("ID: {}", data.id_card_number);
    canvas.fill(x - 4.0, top + 120.0, 60.0, 12.0, Rgb::BRAND);
    canvas.centered(x - 4.0, 60.0, top + 129.0, 7.0, Font::Bold, Rgb::WHITE, &badge);

    let name_x = x + 63.0;
    let name_width = left + CARD_WIDTH - INSET - name_x;
    let mut y = top + 70.0;
    let max_chars = (name_width / (14.0 * 0.56)) as usize;
    for line in wrap(&data.full_name, max_chars.max(1)).into_iter().take(2) {
        canvas.text(name_x, y, 14.0, Font::Bold, Rgb::INK, line);
        y += 16.0;
    }
    canvas.text(name_x, y, 9.0, Font::Bold, Rgb::BRAND, data.designation.as_str());

    let rows = [
        ("TYPE:", &data.employee_type),
        ("DEPT:", &data.department),
        ("BLOOD:", &data.blood_group),
        ("DOB:", &data.date_of_birth),
        ("JOIN DATE:", &data.date_of_joining),
    ];
    let mut y = top + 152.0;
    for (label, value) in rows {
        canvas.row(x, x + 55.0, y, 8.0, label, value);
        y += 15.0;
    }

    let box_top = top + 224.0;
    canvas.fill(x, box_top, CARD_WIDTH - 2.0 * INSET, 64.0, Rgb::PANEL);
    canvas.text(x + 8.0, box_top + 16.0, 9.0, Font::Bold, Rgb::BRAND, "Contact");
    canvas.text(x + 8.0, box_top + 30.0, 8.0, Font::Regular, Rgb::INK, data.mobile_number.as_str());
    canvas.text(x + 8.0, box_top + 44.0, 7.0, Font::Regular, Rgb::MUTED, data.email.as_str());

    let qr_size = 56.0;
    let qr_x = left + CARD_WIDTH - INSET - qr_size - 4.0;
    canvas.fill(qr_x - 2.0, box_top + 2.0, qr_size + 4.0, qr_size + 4.0, Rgb::WHITE);
    canvas.elements.push(Element::Qr {
        x: qr_x,
        y: box_top + 4.0,
        size: qr_size,
        matrix: qr.clone(),
    });
}

fn back(canvas: &mut Canvas, data: &CardData, left: f32, top: f32) {
    canvas.card_frame(left, top, &data.helpline);
    let x = left + INSET;
    let inner = CARD_WIDTH - 2.0 * INSET;

    canvas.centered(
        left,
        CARD_WIDTH,
        top + 58.0,
        8.0,
        Font::Regular,
        Rgb::MUTED,
        &format!("Property of {}. Return if found.", data.company),
    );

    canvas.fill(x, top + 68.0, inner, 62.0, Rgb::NOTE);
    canvas.text(x + 7.0, top + 81.0, 8.0, Font::Bold, Rgb::NOTE_TITLE, "Terms & Conditions");
    let terms = TERMS.replace("MyChoice", &data.company);
    let mut y = top + 92.0;
    for line in wrap(&terms, 62) {
        canvas.text(x + 7.0, y, 6.0, Font::Regular, Rgb::NOTE_INK, line);
        y += 8.0;
    }

    canvas.text(x, top + 148.0, 10.0, Font::Bold, Rgb::BRAND, "Employee Address");
    let mut y = top + 160.0;
    for line in &data.address {
        canvas.text(x, y, 7.0, Font::Regular, Rgb::INK, line.as_str());
        y += 10.0;
    }

    canvas.text(x, top + 200.0, 10.0, Font::Bold, Rgb::BRAND, "Contact Information");
    canvas.row(x, x + 45.0, top + 212.0, 7.0, "Email:", &data.email);
    canvas.row(x, x + 45.0, top + 222.0, 7.0, "Phone:", &data.mobile_number);

    canvas.fill(x, top + 234.0, inner, 50.0, Rgb::MINT);
    canvas.text(x + 7.0, top + 247.0, 8.0, Font::Bold, Rgb::BRAND, "Emergency Details");
    canvas.row(x + 7.0, x + 67.0, top + 260.0, 7.0, "Blood Group:", &data.blood_group);
    canvas.row(x + 7.0, x + 67.0, top + 274.0, 7.0, "Employee ID:", &data.id_card_number);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> CardData {
        CardData {
            id_card_number: "EMP001".into(),
            full_name: "John Smith".into(),
            initials: "JS".into(),
            designation: "Software Engineer".into(),
            department: "Engineering".into(),
            employee_type: "FULL TIME".into(),
            blood_group: "A+".into(),
            date_of_birth: "15/05/1990".into(),
            date_of_joining: "15/01/2023".into(),
            mobile_number: "+1-555-0123".into(),
            email: "john.smith@company.com".into(),
            address: [
                "123 Main Street".into(),
                "New York, NY 10001".into(),
                "USA".into(),
            ],
            picture_url: String::new(),
            company: "MyChoice".into(),
            helpline: "+91-03345013784".into(),
            qr_payload: "https://employes.my-choice.co.in?id=EMP001&name=John%20Smith".into(),
        }
    }

    fn page() -> CardPage {
        let data = data();
        let qr = QrMatrix::encode(&data.qr_payload).unwrap();
        card_page(&data, &qr)
    }

    #[test]
    fn both_sides_carry_header_and_footer() {
        let page = page();
        let texts: Vec<&str> = page.texts().collect();
        assert_eq!(texts.iter().filter(|t| **t == "ID CARD").count(), 2);
        assert_eq!(
            texts.iter().filter(|t| **t == "Contact: +91-03345013784").count(),
            2
        );
    }

    #[test]
    fn front_prints_identity() {
        let page = page();
        let texts: Vec<&str> = page.texts().collect();
        for expected in [
            "ID: EMP001",
            "John Smith",
            "Software Engineer",
            "TYPE:",
            "FULL TIME",
            "DEPT:",
            "JOIN DATE:",
            "15/01/2023",
            "Contact",
        ] {
            assert!(texts.contains(&expected), "missing {expected}");
        }
        assert_eq!(
            page.elements.iter().filter(|e| matches!(e, Element::Qr { .. })).count(),
            1
        );
    }

    #[test]
    fn back_prints_terms_and_details() {
        let page = page();
        let texts: Vec<&str> = page.texts().collect();
        for expected in [
            "Property of MyChoice. Return if found.",
            "Terms & Conditions",
            "Employee Address",
            "New York, NY 10001",
            "Contact Information",
            "Email:",
            "Emergency Details",
            "Blood Group:",
            "Employee ID:",
        ] {
            assert!(texts.contains(&expected), "missing {expected}");
        }
        let terms: String = texts
            .iter()
            .skip_while(|t| **t != "Terms & Conditions")
            .skip(1)
            .take_while(|t| **t != "Employee Address")
            .copied()
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(terms, TERMS);
    }

    #[test]
    fn cards_fit_on_the_page() {
        let page = page();
        for element in &page.elements {
            if let Element::Fill { x, y, width, height, .. } = element {
                assert!(*x >= 0.0 && x + width <= PAGE_WIDTH + 0.01);
                assert!(*y >= 0.0 && y + height <= PAGE_HEIGHT + 0.01);
            }
        }
    }

    #[test]
    fn wrap_respects_width() {
        assert_eq!(wrap("aa bb cc", 5), vec!["aa bb", "cc"]);
        assert_eq!(wrap("", 5), Vec::<String>::new());
        assert_eq!(wrap("longword", 3), vec!["longword"]);
    }
}
