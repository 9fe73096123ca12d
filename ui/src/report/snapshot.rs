//! Pure snapshot builders behind the PNG export: an SVG document for the web
//! canvas path and a bitmap renderer for the native path. Both mirror the
//! on-screen render policy (error banner, placeholder, or cards).

use super::{card_entries, skipped_note, ReportState};

pub const BASE_WIDTH: u32 = 960;
pub const EXPORT_SCALE: u32 = 2;

const MARGIN: u32 = 48;
const HEADER_HEIGHT: u32 = 128;
const CARD_GAP: u32 = 24;
const ROW_HEIGHT: u32 = 26;

const FONT: &str = "Inter, sans-serif";

pub fn svg_snapshot(state: &ReportState, range_label: &str) -> (String, u32, u32) {
    let entries = state.report.as_ref().map(card_entries).unwrap_or_default();

    let mut height = HEADER_HEIGHT;
    for entry in &entries {
        height += card_height(entry.rows.len(), entry.skipped) + CARD_GAP;
    }
    let height = (height + MARGIN).max(320);

    let mut svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{BASE_WIDTH}' height='{height}' viewBox='0 0 {BASE_WIDTH} {height}'>\n"
    );
    svg.push_str(&format!(
        "  <rect width='{BASE_WIDTH}' height='{height}' fill='#efefef'/>\n"
    ));
    svg.push_str(&format!(
        "  <text x='{MARGIN}' y='64' fill='#1c1c28' font-family='{FONT}' font-size='30' font-weight='700'>Govscope Governance Report</text>\n"
    ));
    svg.push_str(&format!(
        "  <text x='{MARGIN}' y='96' fill='#5a5a68' font-family='{FONT}' font-size='18'>{}</text>\n",
        xml_escape(range_label)
    ));

    if let Some(message) = state.error.as_ref() {
        svg.push_str(&format!(
            "  <text x='{MARGIN}' y='180' fill='red' font-family='{FONT}' font-size='22' font-weight='600'>{}</text>\n",
            xml_escape(message)
        ));
    } else if entries.is_empty() {
        svg.push_str(&format!(
            "  <text x='{MARGIN}' y='180' fill='#1c1c28' font-family='{FONT}' font-size='22' font-weight='500'>Nothing here</text>\n"
        ));
    }

    let card_width = BASE_WIDTH - 2 * MARGIN;
    let mut top = HEADER_HEIGHT;
    for entry in &entries {
        let card_h = card_height(entry.rows.len(), entry.skipped);
        svg.push_str(&format!(
            "  <rect x='{MARGIN}' y='{top}' width='{card_width}' height='{card_h}' rx='12' fill='#ffffff' stroke='#d9d9e3'/>\n"
        ));
        svg.push_str(&format!(
            "  <text x='{x}' y='{y}' fill='#1c1c28' font-family='{FONT}' font-size='20' font-weight='600'>{title}</text>\n",
            x = MARGIN + 24,
            y = top + 36,
            title = xml_escape(&entry.title)
        ));

        let mut row_y = top + 68;
        for row in &entry.rows {
            svg.push_str(&format!(
                "  <text x='{x}' y='{row_y}' fill='#1c1c28' font-family='{FONT}' font-size='15'>#{id} {title}</text>\n",
                x = MARGIN + 24,
                id = xml_escape(&row.proposal_id),
                title = xml_escape(&row.title)
            ));
            svg.push_str(&format!(
                "  <text x='{x}' y='{row_y}' fill='{color}' font-family='{FONT}' font-size='15' font-weight='600' text-anchor='end'>{label}</text>\n",
                x = BASE_WIDTH - MARGIN - 24,
                color = row.vote_color,
                label = row.vote_label
            ));
            row_y += ROW_HEIGHT;
        }

        if let Some(note) = skipped_note(entry.skipped) {
            svg.push_str(&format!(
                "  <text x='{x}' y='{row_y}' fill='#8a8a96' font-family='{FONT}' font-size='13'>{}</text>\n",
                xml_escape(&note),
                x = MARGIN + 24,
            ));
        }

        top += card_h + CARD_GAP;
    }

    svg.push_str("</svg>\n");
    (svg, BASE_WIDTH, height)
}

fn card_height(rows: usize, skipped: usize) -> u32 {
    let note = if skipped > 0 { 22 } else { 0 };
    56 + rows as u32 * ROW_HEIGHT + note + 12
}

pub fn xml_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&apos;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}

// Bitmap path. The native build has no DOM to rasterize, so the report is
// laid out as colored text lines and drawn with a 5x7 pixel font.

pub const INK: [u8; 4] = [28, 28, 40, 255];
pub const MUTED: [u8; 4] = [90, 90, 104, 255];
pub const BACKDROP: [u8; 4] = [239, 239, 239, 255];

pub fn rgba_for(css: &str) -> [u8; 4] {
    match css {
        "green" => [46, 125, 50, 255],
        "indianred" => [205, 92, 92, 255],
        "red" => [211, 47, 47, 255],
        "gray" => [117, 117, 117, 255],
        _ => [117, 117, 117, 255],
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub text: String,
    pub color: [u8; 4],
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SnapshotLine {
    pub segments: Vec<Segment>,
}

impl SnapshotLine {
    fn new(text: impl Into<String>, color: [u8; 4]) -> Self {
        Self {
            segments: vec![Segment {
                text: text.into(),
                color,
            }],
        }
    }

    fn push(mut self, text: impl Into<String>, color: [u8; 4]) -> Self {
        self.segments.push(Segment {
            text: text.into(),
            color,
        });
        self
    }
}

pub fn snapshot_lines(state: &ReportState, range_label: &str) -> Vec<SnapshotLine> {
    let mut lines = vec![
        SnapshotLine::new("Govscope Governance Report", INK),
        SnapshotLine::new(range_label, MUTED),
        SnapshotLine::default(),
    ];

    if let Some(message) = state.error.as_ref() {
        lines.push(SnapshotLine::new(message, rgba_for("red")));
        return lines;
    }

    let entries = state.report.as_ref().map(card_entries).unwrap_or_default();
    if entries.is_empty() {
        lines.push(SnapshotLine::new("Nothing here", INK));
        return lines;
    }

    for entry in entries {
        lines.push(SnapshotLine::new(&entry.title, INK));
        for row in &entry.rows {
            lines.push(
                SnapshotLine::new(format!("#{} {}", row.proposal_id, row.title), INK)
                    .push(row.vote_label, rgba_for(row.vote_color)),
            );
        }
        if let Some(note) = skipped_note(entry.skipped) {
            lines.push(SnapshotLine::new(note, MUTED));
        }
        lines.push(SnapshotLine::default());
    }

    lines
}

/// RGBA raster the native export encodes to PNG.
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pixels: Vec<u8>,
}

impl Bitmap {
    pub fn filled(width: u32, height: u32, color: [u8; 4]) -> Self {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for _ in 0..width * height {
            pixels.extend_from_slice(&color);
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    fn put(&mut self, x: u32, y: u32, color: [u8; 4]) {
        if x < self.width && y < self.height {
            let offset = ((y * self.width + x) * 4) as usize;
            self.pixels[offset..offset + 4].copy_from_slice(&color);
        }
    }

    fn get(&self, x: u32, y: u32) -> [u8; 4] {
        let offset = ((y * self.width + x) * 4) as usize;
        [
            self.pixels[offset],
            self.pixels[offset + 1],
            self.pixels[offset + 2],
            self.pixels[offset + 3],
        ]
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }
}

const LINE_HEIGHT: u32 = 18;
const BITMAP_MARGIN: u32 = 48;
const SEGMENT_GAP: u32 = 14;

pub fn render_bitmap(state: &ReportState, range_label: &str) -> Bitmap {
    let lines = snapshot_lines(state, range_label);
    let height = (2 * BITMAP_MARGIN + lines.len() as u32 * LINE_HEIGHT).max(320);
    let mut bitmap = Bitmap::filled(BASE_WIDTH, height, BACKDROP);

    let mut y = BITMAP_MARGIN;
    for line in &lines {
        let mut x = BITMAP_MARGIN;
        for segment in &line.segments {
            x = draw_text(&mut bitmap, x, y, &segment.text, segment.color);
            x += SEGMENT_GAP;
        }
        y += LINE_HEIGHT;
    }

    bitmap
}

/// Nearest-neighbor upscale; the export ships at 2x.
pub fn upscale(source: &Bitmap, factor: u32) -> Bitmap {
    let width = source.width * factor;
    let height = source.height * factor;
    let mut scaled = Bitmap::filled(width, height, BACKDROP);
    for y in 0..height {
        for x in 0..width {
            scaled.put(x, y, source.get(x / factor, y / factor));
        }
    }
    scaled
}

fn draw_text(bitmap: &mut Bitmap, mut x: u32, top: u32, text: &str, color: [u8; 4]) -> u32 {
    for ch in text.to_ascii_uppercase().chars() {
        if ch == ' ' {
            x = x.saturating_add(6);
            continue;
        }
        let Some(pattern) = glyph_rows(ch) else {
            x = x.saturating_add(6);
            continue;
        };
        for (row_idx, row) in pattern.iter().enumerate() {
            for (col_idx, pixel) in row.chars().enumerate() {
                if pixel != ' ' {
                    bitmap.put(x + col_idx as u32, top + row_idx as u32, color);
                }
            }
        }
        x = x.saturating_add(pattern[0].len() as u32 + 2);
    }
    x
}

type Glyph = [&'static str; 7];

static GLYPHS: &[(char, Glyph)] = &[
    ('A', ["  #  ", " # # ", "#   #", "#####", "#   #", "#   #", "#   #"]),
    ('B', ["#### ", "#   #", "#   #", "#### ", "#   #", "#   #", "#### "]),
    ('C', [" ### ", "#   #", "#    ", "#    ", "#    ", "#   #", " ### "]),
    ('D', ["#### ", "#   #", "#   #", "#   #", "#   #", "#   #", "#### "]),
    ('E', ["#####", "#    ", "#    ", "#### ", "#    ", "#    ", "#####"]),
    ('F', ["#####", "#    ", "#    ", "#### ", "#    ", "#    ", "#    "]),
    ('G', [" ### ", "#   #", "#    ", "# ###", "#   #", "#   #", " ### "]),
    ('H', ["#   #", "#   #", "#   #", "#####", "#   #", "#   #", "#   #"]),
    ('I', [" ### ", "  #  ", "  #  ", "  #  ", "  #  ", "  #  ", " ### "]),
    ('J', ["  ###", "   # ", "   # ", "   # ", "#  # ", "#  # ", " ##  "]),
    ('K', ["#   #", "#  # ", "# #  ", "##   ", "# #  ", "#  # ", "#   #"]),
    ('L', ["#    ", "#    ", "#    ", "#    ", "#    ", "#    ", "#####"]),
    ('M', ["#   #", "## ##", "# # #", "# # #", "#   #", "#   #", "#   #"]),
    ('N', ["#   #", "##  #", "# # #", "#  ##", "#   #", "#   #", "#   #"]),
    ('O', [" ### ", "#   #", "#   #", "#   #", "#   #", "#   #", " ### "]),
    ('P', ["#### ", "#   #", "#   #", "#### ", "#    ", "#    ", "#    "]),
    ('Q', [" ### ", "#   #", "#   #", "#   #", "# # #", "#  # ", " ## #"]),
    ('R', ["#### ", "#   #", "#   #", "#### ", "# #  ", "#  # ", "#   #"]),
    ('S', [" ####", "#    ", "#    ", " ### ", "    #", "    #", "#### "]),
    ('T', ["#####", "  #  ", "  #  ", "  #  ", "  #  ", "  #  ", "  #  "]),
    ('U', ["#   #", "#   #", "#   #", "#   #", "#   #", "#   #", " ### "]),
    ('V', ["#   #", "#   #", "#   #", "#   #", " # # ", " # # ", "  #  "]),
    ('W', ["#   #", "#   #", "#   #", "# # #", "# # #", "## ##", "#   #"]),
    ('X', ["#   #", "#   #", " # # ", "  #  ", " # # ", "#   #", "#   #"]),
    ('Y', ["#   #", "#   #", " # # ", "  #  ", "  #  ", "  #  ", "  #  "]),
    ('Z', ["#####", "    #", "   # ", "  #  ", " #   ", "#    ", "#####"]),
    ('0', [" ### ", "#   #", "#  ##", "# # #", "##  #", "#   #", " ### "]),
    ('1', ["  #  ", " ##  ", "# #  ", "  #  ", "  #  ", "  #  ", "#####"]),
    ('2', [" ### ", "#   #", "    #", "   # ", "  #  ", " #   ", "#####"]),
    ('3', [" ### ", "#   #", "    #", " ### ", "    #", "#   #", " ### "]),
    ('4', ["   # ", "  ## ", " # # ", "#  # ", "#####", "   # ", "   # "]),
    ('5', ["#####", "#    ", "#    ", "#### ", "    #", "#   #", " ### "]),
    ('6', [" ### ", "#   #", "#    ", "#### ", "#   #", "#   #", " ### "]),
    ('7', ["#####", "    #", "   # ", "  #  ", "  #  ", "  #  ", "  #  "]),
    ('8', [" ### ", "#   #", "#   #", " ### ", "#   #", "#   #", " ### "]),
    ('9', [" ### ", "#   #", "#   #", " ####", "    #", "#   #", " ### "]),
    ('#', [" # # ", "#####", " # # ", " # # ", " # # ", "#####", " # # "]),
    ('-', ["     ", "     ", "     ", " ### ", "     ", "     ", "     "]),
    ('.', ["     ", "     ", "     ", "     ", "     ", " ### ", " ### "]),
    ('/', ["    #", "   # ", "   # ", "  #  ", " #   ", "#    ", "#    "]),
    (':', ["     ", "  ## ", "  ## ", "     ", "  ## ", "  ## ", "     "]),
];

fn glyph_rows(ch: char) -> Option<&'static Glyph> {
    GLYPHS
        .iter()
        .find(|(glyph, _)| *glyph == ch)
        .map(|(_, rows)| rows)
}
