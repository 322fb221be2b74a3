//! Paginated transcript layout
//!
//! Lays a conversation out on fixed-size pages in a monospaced font. The
//! result is a list of draw operations per page, measured in millimetres
//! from the top-left corner, which `pdf::render_pdf` turns into a file.

use super::text::{format_time, message_header};
use crate::types::Message;
use chrono::{DateTime, TimeZone, Utc};
use std::fmt::Display;

pub const DOCUMENT_TITLE: &str = "Gopher Archive Transcript";

const PT_TO_MM: f32 = 0.352_778;
/// Advance width of a Courier glyph, in em.
const MONOSPACE_ADVANCE: f32 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    /// Body font size in points
    pub font_size: f32,
    pub title_font_size: f32,
    pub line_height: f32,
    /// Vertical space after each message block
    pub message_gap: f32,
}

impl Default for PageGeometry {
    /// A4 portrait
    fn default() -> Self {
        Self {
            width: 210.0,
            height: 297.0,
            margin: 20.0,
            font_size: 10.0,
            title_font_size: 16.0,
            line_height: 5.0,
            message_gap: 5.0,
        }
    }
}

impl PageGeometry {
    pub fn printable_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    /// Lowest baseline anything may be written at.
    pub fn bottom_limit(&self) -> f32 {
        self.height - self.margin
    }

    /// How many body glyphs fit on one line.
    pub fn chars_per_line(&self) -> usize {
        let glyph = self.font_size * MONOSPACE_ADVANCE * PT_TO_MM;
        ((self.printable_width() / glyph).floor() as usize).max(1)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        x: f32,
        y: f32,
        size: f32,
        bold: bool,
        text: String,
    },
    Rule {
        x1: f32,
        x2: f32,
        y: f32,
    },
}

impl DrawOp {
    pub fn y(&self) -> f32 {
        match self {
            DrawOp::Text { y, .. } | DrawOp::Rule { y, .. } => *y,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentLayout {
    pub geometry: PageGeometry,
    pub pages: Vec<Page>,
}

/// Split a line into alternating runs of whitespace and non-whitespace.
fn runs(line: &str) -> Vec<(bool, &str)> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut in_space = None;
    for (idx, ch) in line.char_indices() {
        let space = ch.is_whitespace();
        match in_space {
            Some(prev) if prev != space => {
                out.push((prev, &line[start..idx]));
                start = idx;
            }
            _ => {}
        }
        in_space = Some(space);
    }
    if let Some(space) = in_space {
        out.push((space, &line[start..]));
    }
    out
}

/// Wrap `text` to at most `width` characters per line. Explicit newlines,
/// indentation and inner spacing are kept; lines only break at whitespace
/// (which is dropped at the break), and words longer than a line are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for raw in text.split('\n') {
        let raw = raw.trim_end_matches('\r').replace('\t', "    ");
        let mut current = String::new();
        let mut current_len = 0usize;
        let mut pending = "";

        for (is_space, token) in runs(&raw) {
            if is_space {
                pending = token;
                continue;
            }

            let gap = std::mem::take(&mut pending);
            let gap_len = gap.chars().count();
            let mut chars: Vec<char> = token.chars().collect();

            if current_len + gap_len + chars.len() <= width {
                current.push_str(gap);
                current.extend(chars);
                current_len += gap_len + token.chars().count();
                continue;
            }

            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
            }
            while chars.len() > width {
                let rest = chars.split_off(width);
                lines.push(chars.into_iter().collect());
                chars = rest;
            }
            current_len = chars.len();
            current = chars.into_iter().collect();
        }

        lines.push(current);
    }

    lines
}

struct Cursor {
    geometry: PageGeometry,
    pages: Vec<Page>,
    y: f32,
}

impl Cursor {
    fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            pages: vec![Page::default()],
            y: geometry.margin,
        }
    }

    /// Start a new page if a line at the cursor would cross the bottom margin.
    fn ensure_room(&mut self) {
        if self.y + self.geometry.line_height > self.geometry.bottom_limit() {
            self.pages.push(Page::default());
            self.y = self.geometry.margin;
        }
    }

    fn push(&mut self, op: DrawOp) {
        if let Some(page) = self.pages.last_mut() {
            page.ops.push(op);
        }
    }

    fn line(&mut self, text: String, size: f32, bold: bool) {
        self.ensure_room();
        let op = DrawOp::Text {
            x: self.geometry.margin,
            y: self.y,
            size,
            bold,
            text,
        };
        self.push(op);
        self.y += self.geometry.line_height;
    }

    fn rule(&mut self) {
        self.ensure_room();
        let op = DrawOp::Rule {
            x1: self.geometry.margin,
            x2: self.geometry.width - self.geometry.margin,
            y: self.y,
        };
        self.push(op);
        self.y += self.geometry.line_height;
    }

    fn gap(&mut self, amount: f32) {
        self.y += amount;
    }
}

/// Lay out the whole transcript.
pub fn layout_document<Tz>(
    messages: &[Message],
    tz: &Tz,
    generated_at: DateTime<Utc>,
    geometry: &PageGeometry,
) -> DocumentLayout
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut cursor = Cursor::new(*geometry);
    let width = geometry.chars_per_line();

    cursor.line(DOCUMENT_TITLE.to_string(), geometry.title_font_size, true);
    cursor.gap(geometry.line_height);
    let generated = format!(
        "Generated: {} {}",
        generated_at.with_timezone(tz).format("%Y-%m-%d"),
        format_time(&generated_at, tz)
    );
    cursor.line(generated, geometry.font_size, false);
    cursor.rule();

    for message in messages {
        cursor.line(message_header(message, tz), geometry.font_size, true);
        for line in wrap_text(&message.content, width) {
            cursor.line(line, geometry.font_size, false);
        }
        cursor.gap(geometry.message_gap);
    }

    tracing::debug!(
        messages = messages.len(),
        pages = cursor.pages.len(),
        "Laid out transcript document"
    );

    DocumentLayout {
        geometry: *geometry,
        pages: cursor.pages,
    }
}
