//! One-page PDF result card.
//!
//! Output is a plain PDF 1.4 document with a single A4 page, the standard
//! Helvetica fonts, and an uncompressed content stream.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::result::{format_score, OverallResult};

pub const FILE_NAME: &str = "Result_Card_Examinie.pdf";

const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;

/// Details the student types in before viewing the result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalDetails {
    pub name: String,
    pub father_name: String,
    pub age: String,
    pub class_name: String,
    pub email: String,
    pub number: String,
}

impl PersonalDetails {
    pub fn rows(&self) -> [(&'static str, &str); 6] {
        [
            ("Name", &self.name),
            ("Father Name", &self.father_name),
            ("Age", &self.age),
            ("Class", &self.class_name),
            ("Email", &self.email),
            ("Number", &self.number),
        ]
    }
}

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}

/// Escapes a string for a PDF literal. Characters outside Latin-1 become `?`.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '(' | ')' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            '\n' | '\r' | '\t' => out.push(' '),
            c if (c as u32) < 0x20 => {}
            c if (c as u32) < 0x7f => out.push(c),
            c if (0xa0..=0xff).contains(&(c as u32)) => {
                out.push_str(&format!("\\{:03o}", c as u32));
            }
            _ => out.push('?'),
        }
    }
    out
}

#[derive(Default)]
struct Canvas {
    ops: String,
}

impl Canvas {
    fn fill_rgb(&mut self, rgb: (f32, f32, f32)) -> &mut Self {
        self.ops
            .push_str(&format!("{:.3} {:.3} {:.3} rg\n", rgb.0, rgb.1, rgb.2));
        self
    }

    fn stroke_rgb(&mut self, rgb: (f32, f32, f32)) -> &mut Self {
        self.ops
            .push_str(&format!("{:.3} {:.3} {:.3} RG\n", rgb.0, rgb.1, rgb.2));
        self
    }

    /// Rectangle with its top-left corner at `(x, top)`, in top-down coordinates.
    fn rect(&mut self, x: f32, top: f32, w: f32, h: f32, op: &str) -> &mut Self {
        self.ops.push_str(&format!(
            "{x:.1} {:.1} {w:.1} {h:.1} re {op}\n",
            PAGE_HEIGHT - top - h
        ));
        self
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, width: f32) -> &mut Self {
        self.ops.push_str(&format!(
            "{width:.1} w {x1:.1} {:.1} m {x2:.1} {:.1} l S\n",
            PAGE_HEIGHT - y1,
            PAGE_HEIGHT - y2
        ));
        self
    }

    /// Text baseline at `(x, y)`, top-down. `bold` picks `/F2`.
    fn text(&mut self, x: f32, y: f32, size: f32, bold: bool, text: &str) -> &mut Self {
        let font = if bold { "F2" } else { "F1" };
        self.ops.push_str(&format!(
            "BT /{font} {size:.1} Tf {x:.1} {:.1} Td ({}) Tj ET\n",
            PAGE_HEIGHT - y,
            escape(text)
        ));
        self
    }
}

const DARK: (f32, f32, f32) = (0.102, 0.0, 0.4);
const CYAN: (f32, f32, f32) = (0.0, 1.0, 0.969);
const PINK: (f32, f32, f32) = (1.0, 0.0, 0.918);
const LIGHT: (f32, f32, f32) = (0.878, 0.878, 1.0);
const INK: (f32, f32, f32) = (0.1, 0.1, 0.15);

fn draw_card(details: &PersonalDetails, overall: &OverallResult) -> String {
    let mut c = Canvas::default();

    c.fill_rgb(DARK).rect(0.0, 0.0, PAGE_WIDTH, 230.0, "f");
    c.fill_rgb(CYAN)
        .text(40.0, 50.0, 26.0, true, "Examinie Result Card");
    c.fill_rgb(LIGHT).text(40.0, 80.0, 15.0, true, "Personal Details");

    let mut y = 104.0;
    for (label, value) in details.rows() {
        c.fill_rgb(PINK).text(40.0, y, 12.0, false, &format!("{label}:"));
        c.fill_rgb(LIGHT).text(140.0, y, 12.0, false, or_dash(value));
        y += 20.0;
    }

    y = 260.0;
    c.stroke_rgb(CYAN).line(40.0, y, 555.0, y, 2.0);
    y += 30.0;
    c.fill_rgb(INK).text(40.0, y, 16.0, true, "Exam Result Summary");
    y += 16.0;

    let rows = [
        ("Field".to_string(), "Value".to_string()),
        ("Result ID".to_string(), or_dash(&overall.result_id).to_string()),
        ("Total Marks".to_string(), format_score(overall.total_marks)),
        ("Obtained Marks".to_string(), format_score(overall.obtained_marks)),
        ("Percentage".to_string(), format!("{}%", format_score(overall.percentage))),
        ("Grade".to_string(), or_dash(&overall.grade).to_string()),
    ];
    let row_height = 28.0;
    for (i, (field, value)) in rows.iter().enumerate() {
        let header = i == 0;
        let fill = if header { CYAN } else if i % 2 == 0 { LIGHT } else { (1.0, 1.0, 1.0) };
        c.fill_rgb(fill).rect(40.0, y, 515.0, row_height, "f");
        c.stroke_rgb(DARK).rect(40.0, y, 515.0, row_height, "S");
        c.line(220.0, y, 220.0, y + row_height, 1.0);
        c.fill_rgb(if header { DARK } else { INK });
        c.text(50.0, y + 19.0, 12.0, header, field);
        c.text(230.0, y + 19.0, 12.0, header, value);
        y += row_height;
    }

    y += 50.0;
    c.stroke_rgb(PINK).rect(395.0, y, 160.0, 60.0, "S");
    c.fill_rgb(PINK)
        .text(410.0, y + 27.0, 13.0, true, "EXAMINIE")
        .text(410.0, y + 45.0, 9.0, false, "Verified result");
    c.fill_rgb(INK).text(
        40.0,
        PAGE_HEIGHT - 40.0,
        9.0,
        false,
        "This card is generated from your exam result and carries no signature.",
    );

    c.ops
}

/// Serialises the result card as a complete PDF file.
pub fn render_result_card(details: &PersonalDetails, overall: &OverallResult) -> Vec<u8> {
    let content = draw_card(details, overall);
    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH} {PAGE_HEIGHT}] \
             /Resources << /Font << /F1 4 0 R /F2 5 0 R >> >> /Contents 6 0 R >>"
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold /Encoding /WinAnsiEncoding >>"
            .to_string(),
        format!(
            "<< /Length {} >>\nstream\n{}endstream",
            content.len(),
            content
        ),
    ];

    let mut out = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.push_str(&format!("{} 0 obj\n{}\nendobj\n", i + 1, body));
    }

    let xref = out.len();
    out.push_str(&format!("xref\n0 {}\n", objects.len() + 1));
    out.push_str("0000000000 65535 f \n");
    for offset in offsets {
        out.push_str(&format!("{offset:010} 00000 n \n"));
    }
    out.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref}\n%%EOF\n",
        objects.len() + 1
    ));
    out.into_bytes()
}

/// `data:` URL suitable for an anchor's `href`.
pub fn pdf_data_url(bytes: &[u8]) -> String {
    format!("data:application/pdf;base64,{}", STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overall() -> OverallResult {
        OverallResult {
            result_id: "res-9".into(),
            exam_title: "Generated Exam".into(),
            total_marks: 50.0,
            obtained_marks: 42.0,
            grade: "A".into(),
            percentage: 84.0,
        }
    }

    #[test]
    fn card_is_a_well_formed_pdf() {
        let bytes = render_result_card(&PersonalDetails::default(), &overall());
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("%PDF-1.4\n"));
        assert!(text.ends_with("%%EOF\n"));

        let startxref: usize = text
            .rsplit("startxref\n")
            .next()
            .and_then(|tail| tail.lines().next())
            .unwrap()
            .parse()
            .unwrap();
        assert!(text[startxref..].starts_with("xref\n0 7\n"));

        let first_offset: usize = text[startxref..].lines().nth(3).unwrap()[..10]
            .parse()
            .unwrap();
        assert!(text[first_offset..].starts_with("1 0 obj"));
    }

    #[test]
    fn stream_length_matches_content() {
        let text =
            String::from_utf8(render_result_card(&PersonalDetails::default(), &overall())).unwrap();
        let start = text.find("/Length ").unwrap() + "/Length ".len();
        let len: usize = text[start..].split_whitespace().next().unwrap().parse().unwrap();
        let body_start = text.find("stream\n").unwrap() + "stream\n".len();
        assert_eq!(&text[body_start + len..body_start + len + 9], "endstream");
    }

    #[test]
    fn blanks_become_dashes_and_text_is_escaped() {
        let details = PersonalDetails {
            name: "Ada (Lovelace)".into(),
            ..Default::default()
        };
        let text = String::from_utf8(render_result_card(&details, &overall())).unwrap();
        assert!(text.contains(r"(Ada \(Lovelace\)) Tj"));
        assert!(text.contains("(-) Tj"));
        assert!(text.contains("(84%) Tj"));
        assert!(text.contains("(res-9) Tj"));
    }

    #[test]
    fn non_ascii_is_octal_or_replaced() {
        assert_eq!(escape("café"), r"caf\351");
        assert_eq!(escape("名"), "?");
    }

    #[test]
    fn data_url_prefix() {
        assert!(pdf_data_url(b"%PDF").starts_with("data:application/pdf;base64,JVBERg"));
    }
}
