//! Fixed-coordinate layout for the synthetic resume.
//!
//! A single vertical cursor starts one margin below the top edge and moves
//! down by a fixed advance after each line. Headers advance more than body
//! lines. There is no pagination: lines past the bottom margin are still
//! placed (and will be clipped by viewers).
#![cfg_attr(not(feature = "render"), allow(dead_code))]

use tracing::warn;

use crate::models::ResumeFixture;

// ────────────────────────────────────────────────────────────────────────────
// Page geometry
// ────────────────────────────────────────────────────────────────────────────

/// US letter, in PDF points.
pub const PAGE_WIDTH_PT: f32 = 612.0;
pub const PAGE_HEIGHT_PT: f32 = 792.0;
pub const MARGIN_PT: f32 = 50.0;

const BULLET: &str = "\u{2022}";

// ────────────────────────────────────────────────────────────────────────────
// Line styles
// ────────────────────────────────────────────────────────────────────────────

/// The two standard-14 faces the resume uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    Helvetica,
    HelveticaBold,
}

impl Font {
    /// PostScript base font name.
    pub fn base_name(self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Resource name used in the page's font dictionary.
    pub fn resource_name(self) -> &'static str {
        match self {
            Font::Helvetica => "F1",
            Font::HelveticaBold => "F2",
        }
    }
}

/// Font, size, and cursor advance for one kind of line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub font: Font,
    pub size_pt: f32,
    /// Distance the cursor moves down after this line.
    pub advance_pt: f32,
}

impl LineStyle {
    const fn new(font: Font, size_pt: f32, advance_pt: f32) -> Self {
        Self {
            font,
            size_pt,
            advance_pt,
        }
    }

    /// Same face and size, different advance. Used for the last line of a
    /// block, which leaves extra room before the next section.
    const fn then(self, advance_pt: f32) -> Self {
        Self { advance_pt, ..self }
    }
}

pub const NAME: LineStyle = LineStyle::new(Font::HelveticaBold, 16.0, 30.0);
pub const BODY: LineStyle = LineStyle::new(Font::Helvetica, 12.0, 20.0);
pub const SECTION: LineStyle = LineStyle::new(Font::HelveticaBold, 14.0, 20.0);
pub const ROLE: LineStyle = LineStyle::new(Font::HelveticaBold, 12.0, 15.0);
pub const BULLET_LINE: LineStyle = LineStyle::new(Font::Helvetica, 10.0, 15.0);

const SECTION_GAP_PT: f32 = 40.0;
const LIST_ADVANCE_PT: f32 = 15.0;
const ENTRY_GAP_PT: f32 = 30.0;

// ────────────────────────────────────────────────────────────────────────────
// Placement
// ────────────────────────────────────────────────────────────────────────────

/// A line of text anchored at its baseline origin.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub font: Font,
    pub size_pt: f32,
    pub x: f32,
    pub y: f32,
}

struct Cursor {
    y: f32,
    lines: Vec<PlacedLine>,
}

impl Cursor {
    fn new() -> Self {
        Self {
            y: PAGE_HEIGHT_PT - MARGIN_PT,
            lines: Vec::new(),
        }
    }

    fn draw(&mut self, text: impl Into<String>, style: LineStyle) {
        self.lines.push(PlacedLine {
            text: text.into(),
            font: style.font,
            size_pt: style.size_pt,
            x: MARGIN_PT,
            y: self.y,
        });
        self.y -= style.advance_pt;
    }

    /// Draws `items` one per line; the last one advances by `last_advance`.
    fn draw_block(&mut self, items: &[String], style: LineStyle, last_advance: f32) {
        let n = items.len();
        for (i, item) in items.iter().enumerate() {
            let style = if i + 1 == n { style.then(last_advance) } else { style };
            self.draw(item.as_str(), style);
        }
    }
}

/// Lays the fixture out top to bottom on a single page.
pub fn layout_resume(fixture: &ResumeFixture) -> Vec<PlacedLine> {
    let mut cursor = Cursor::new();

    cursor.draw(fixture.name.as_str(), NAME);
    cursor.draw(fixture.title.as_str(), BODY);
    cursor.draw(format!("Email: {}", fixture.email), BODY);
    cursor.draw(format!("Phone: {}", fixture.phone), BODY.then(SECTION_GAP_PT));

    cursor.draw("SKILLS", SECTION);
    cursor.draw(fixture.skills_line(), BODY.then(SECTION_GAP_PT));

    cursor.draw("EDUCATION", SECTION);
    cursor.draw_block(
        &fixture.education,
        BODY.then(LIST_ADVANCE_PT),
        SECTION_GAP_PT,
    );

    cursor.draw("EXPERIENCE", SECTION);
    for entry in &fixture.experience {
        cursor.draw(entry.role.as_str(), ROLE);
        let bullets: Vec<String> = entry
            .bullets
            .iter()
            .map(|b| format!("{BULLET} {b}"))
            .collect();
        cursor.draw_block(&bullets, BULLET_LINE, ENTRY_GAP_PT);
    }

    let lines = cursor.lines;
    if let Some(lowest) = lines.last().filter(|l| l.y < MARGIN_PT) {
        warn!(
            "Resume overflows the page: last line at y={} is below the {}pt margin",
            lowest.y, MARGIN_PT
        );
    }
    lines
}
