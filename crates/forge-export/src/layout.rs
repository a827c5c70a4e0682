//! Story-to-page layout.
//!
//! A [`Story`] is a flat sequence of [`Block`]s with explicit page breaks.
//! [`paginate`] places every break-delimited group on exactly one page,
//! shrinking the type scale of a group that would overflow.

use tracing::{debug, warn};

use crate::metrics::{self, Line};
use crate::styles::{Align, FontWeight, PageGeometry, Rgb, StylePalette, TextStyle};

/// Each overflow retry multiplies the type scale by this factor.
const SHRINK_STEP: f32 = 0.9;
/// Smallest type scale a page may shrink to before content is clipped.
const MIN_FIT: f32 = 0.3;
/// Shown at the bottom of a page whose content had to be clipped.
const CLIPPED_NOTICE: &str = "Some content was omitted to fit this page.";

/// One unit of story content.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Section banner, e.g. "Section 4: Market Analysis".
    Banner(String),
    Title(String),
    Subheading(String),
    Paragraph(String),
    Bullet(String),
    /// Placeholder shown in place of missing optional content.
    Notice(String),
    /// Two-column bordered table of label/value rows.
    KeyValue(Vec<(String, String)>),
    Separator,
    /// Vertical gap in print points; scaled with the palette.
    Spacer(f32),
    Closing(String),
    PageBreak,
}

/// An ordered stream of blocks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Story {
    blocks: Vec<Block>,
}

impl Story {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn page_break(&mut self) {
        self.blocks.push(Block::PageBreak);
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Blocks grouped by page. A trailing break does not open an empty page.
    pub fn pages(&self) -> Vec<&[Block]> {
        let mut groups: Vec<&[Block]> = self
            .blocks
            .split(|b| matches!(b, Block::PageBreak))
            .collect();
        if groups.last().is_some_and(|g| g.is_empty()) {
            groups.pop();
        }
        groups
    }
}

// ── Laid-out output ──────────────────────────────────────────────────────────

/// A run of text set in one font at one position. `y` is the baseline,
/// measured from the bottom of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub weight: FontWeight,
    pub color: Rgb,
    /// Extra space added to every space character (justification).
    pub word_spacing: f32,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text(TextRun),
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgb,
    },
    StrokeRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgb,
        line_width: f32,
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        color: Rgb,
        line_width: f32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub background: Rgb,
    /// Type scale the page was set at; below 1.0 when shrunk to fit.
    pub fit_scale: f32,
    /// True when content was dropped because it could not fit even at the
    /// minimum scale.
    pub clipped: bool,
    pub ops: Vec<DrawOp>,
}

impl Page {
    /// All text on the page in drawing order, one run per line.
    pub fn text(&self) -> String {
        self.text_runs()
            .map(|run| run.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text(run) => Some(run),
            _ => None,
        })
    }

    /// Whether any single text run on the page contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.text_runs().any(|run| run.text.contains(needle))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutDocument {
    pub geometry: PageGeometry,
    pub width: f32,
    pub height: f32,
    pub pages: Vec<Page>,
}

// ── Pagination ───────────────────────────────────────────────────────────────

/// Usable area of a page.
#[derive(Debug, Clone, Copy)]
struct Frame {
    left: f32,
    top: f32,
    bottom: f32,
    width: f32,
}

/// Lay out `story` with the palette and page size of `geometry`.
pub fn paginate(story: &Story, geometry: PageGeometry) -> LaidOutDocument {
    let (width, height) = geometry.page_size();
    let margins = geometry.margins();
    let frame = Frame {
        left: margins.left,
        top: height - margins.top,
        bottom: margins.bottom,
        width: width - margins.left - margins.right,
    };
    let palette = geometry.palette();

    let pages = story
        .pages()
        .into_iter()
        .enumerate()
        .map(|(index, blocks)| {
            let background = palette.backgrounds[index % palette.backgrounds.len()];
            fit_page(index, blocks, &palette, frame, background)
        })
        .collect();

    LaidOutDocument {
        geometry,
        width,
        height,
        pages,
    }
}

fn fit_page(
    index: usize,
    blocks: &[Block],
    base: &StylePalette,
    frame: Frame,
    background: Rgb,
) -> Page {
    let mut fit = 1.0_f32;
    loop {
        let palette = if fit < 1.0 { base.scaled(fit) } else { base.clone() };
        let placed = place_blocks(blocks, &palette, frame);
        let lowest = placed.iter().map(|p| p.bottom).fold(frame.top, f32::min);

        if lowest >= frame.bottom {
            if fit < 1.0 {
                debug!(page = index + 1, fit, "page shrunk to fit");
            }
            return Page {
                background,
                fit_scale: fit,
                clipped: false,
                ops: placed.into_iter().flat_map(|p| p.ops).collect(),
            };
        }

        if fit <= MIN_FIT {
            return clip_page(index, blocks, &palette, frame, &placed, background, fit);
        }

        fit = (fit * SHRINK_STEP).max(MIN_FIT);
    }
}

/// Paragraphs and bullets may be dropped when a page is clipped. Headings,
/// placeholders and key/value rows always stay.
fn droppable(block: &Block) -> bool {
    matches!(block, Block::Paragraph(_) | Block::Bullet(_))
}

/// Fit `blocks` at the minimum scale by dropping flowing text once the page
/// is full, keeping every required block and reserving room for the notice.
fn clip_page(
    index: usize,
    blocks: &[Block],
    palette: &StylePalette,
    frame: Frame,
    placed: &[Placed],
    background: Rgb,
    fit: f32,
) -> Page {
    let notice = palette.notice;
    let floor = frame.bottom + notice.leading;

    // Block heights do not depend on where the block starts.
    let heights: Vec<f32> = placed
        .iter()
        .scan(frame.top, |top, p| {
            let height = *top - p.bottom;
            *top = p.bottom;
            Some(height)
        })
        .collect();
    let required: f32 = blocks
        .iter()
        .zip(&heights)
        .filter(|(block, _)| !droppable(block))
        .map(|(_, height)| height)
        .sum();

    let mut budget = frame.top - floor - required;
    let mut full = false;
    let kept: Vec<Block> = blocks
        .iter()
        .zip(&heights)
        .filter(|(block, height)| {
            if !droppable(block) {
                return true;
            }
            if !full && **height <= budget {
                budget -= **height;
                return true;
            }
            full = true;
            false
        })
        .map(|(block, _)| block.clone())
        .collect();

    // Required blocks alone may still overrun; cut those at the floor.
    let replaced = place_blocks(&kept, palette, frame);
    let shown = replaced.iter().take_while(|p| p.bottom >= floor).count();
    warn!(
        page = index + 1,
        kept_blocks = shown,
        total_blocks = blocks.len(),
        "page content does not fit at minimum scale; clipping"
    );

    let mut ops: Vec<DrawOp> = replaced.into_iter().take(shown).flat_map(|p| p.ops).collect();
    ops.push(DrawOp::Text(TextRun {
        x: frame.left,
        y: frame.bottom,
        size: notice.size,
        weight: notice.weight,
        color: notice.color,
        word_spacing: 0.0,
        text: CLIPPED_NOTICE.to_string(),
    }));
    Page {
        background,
        fit_scale: fit,
        clipped: true,
        ops,
    }
}

/// Draw operations for one block and the lowest y they reach.
struct Placed {
    ops: Vec<DrawOp>,
    bottom: f32,
}

fn place_blocks(blocks: &[Block], palette: &StylePalette, frame: Frame) -> Vec<Placed> {
    let mut cursor = frame.top;
    let mut placed = Vec::with_capacity(blocks.len());
    let scale = palette.body.size / StylePalette::print().body.size;

    for block in blocks {
        let mut ops = Vec::new();
        match block {
            Block::Banner(text) => cursor = set_text(&mut ops, text, &palette.banner, frame, cursor),
            Block::Title(text) => cursor = set_text(&mut ops, text, &palette.title, frame, cursor),
            Block::Subheading(text) => {
                cursor = set_text(&mut ops, text, &palette.subheading, frame, cursor)
            }
            Block::Paragraph(text) => cursor = set_text(&mut ops, text, &palette.body, frame, cursor),
            Block::Bullet(text) => {
                let bulleted = format!("\u{2022} {text}");
                cursor = set_text(&mut ops, &bulleted, &palette.bullet, frame, cursor)
            }
            Block::Notice(text) => cursor = set_text(&mut ops, text, &palette.notice, frame, cursor),
            Block::Closing(text) => {
                cursor = set_text(&mut ops, text, &palette.closing, frame, cursor)
            }
            Block::KeyValue(rows) => cursor = set_table(&mut ops, rows, palette, frame, cursor),
            Block::Separator => {
                let style = &palette.separator;
                let y = cursor - style.size / 2.0;
                let inset = frame.width * 0.2;
                ops.push(DrawOp::Line {
                    from: (frame.left + inset, y),
                    to: (frame.left + frame.width - inset, y),
                    color: style.color,
                    line_width: palette.separator_rule,
                });
                cursor -= style.size + style.space_after;
            }
            Block::Spacer(points) => cursor -= points * scale,
            Block::PageBreak => {}
        }
        placed.push(Placed { ops, bottom: cursor });
    }
    placed
}

/// Set a paragraph of lightly marked text; returns the new cursor.
fn set_text(ops: &mut Vec<DrawOp>, text: &str, style: &TextStyle, frame: Frame, cursor: f32) -> f32 {
    let left = frame.left + style.indent;
    let width = frame.width - style.indent;
    let mut cursor = cursor;

    for hard_line in text.split('\n') {
        let words = metrics::parse_words(hard_line, style.weight);
        if words.is_empty() {
            cursor -= style.leading / 2.0;
            continue;
        }
        let lines = metrics::wrap(words, style.size, width);
        let count = lines.len();
        for (i, line) in lines.into_iter().enumerate() {
            cursor -= style.leading;
            let baseline = cursor + style.leading - style.size;
            let last = i + 1 == count;
            set_line(ops, line, style, left, width, baseline, last);
        }
    }

    cursor - style.space_after
}

fn set_line(
    ops: &mut Vec<DrawOp>,
    line: Line,
    style: &TextStyle,
    left: f32,
    width: f32,
    baseline: f32,
    last: bool,
) {
    let gaps = line.words.len().saturating_sub(1);
    let (start, extra) = match style.align {
        Align::Left => (left, 0.0),
        Align::Center => (left + (width - line.width).max(0.0) / 2.0, 0.0),
        Align::Justify if !last && gaps > 0 => (left, (width - line.width).max(0.0) / gaps as f32),
        Align::Justify => (left, 0.0),
    };

    let mut x = start;
    let mut run: Option<TextRun> = None;
    for (i, word) in line.words.into_iter().enumerate() {
        if i > 0 {
            x += metrics::text_width(" ", run_weight(run.as_ref(), style), style.size) + extra;
        }
        let word_width = metrics::text_width(&word.text, word.weight, style.size);
        match run.as_mut() {
            Some(current) if current.weight == word.weight => {
                current.text.push(' ');
                current.text.push_str(&word.text);
            }
            _ => {
                if let Some(done) = run.take() {
                    ops.push(DrawOp::Text(done));
                }
                run = Some(TextRun {
                    x,
                    y: baseline,
                    size: style.size,
                    weight: word.weight,
                    color: style.color,
                    word_spacing: extra,
                    text: word.text,
                });
            }
        }
        x += word_width;
    }
    if let Some(done) = run {
        ops.push(DrawOp::Text(done));
    }
}

fn run_weight(run: Option<&TextRun>, style: &TextStyle) -> FontWeight {
    run.map_or(style.weight, |r| r.weight)
}

fn set_table(
    ops: &mut Vec<DrawOp>,
    rows: &[(String, String)],
    palette: &StylePalette,
    frame: Frame,
    cursor: f32,
) -> f32 {
    let table = palette.table;
    let base = palette.key_value;
    let label_style = TextStyle {
        weight: FontWeight::Bold,
        align: Align::Left,
        ..base
    };
    let value_style = TextStyle {
        weight: FontWeight::Regular,
        align: Align::Left,
        ..base
    };

    let label_width = frame.width * table.label_ratio;
    let value_width = frame.width - label_width;
    let text_inset = table.padding;
    let mut cursor = cursor;

    for (label, value) in rows {
        let label_lines = cell_lines(label, &label_style, label_width - 2.0 * text_inset);
        let value_lines = cell_lines(value, &value_style, value_width - 2.0 * text_inset);
        let line_count = label_lines.len().max(value_lines.len()).max(1);
        let row_height = line_count as f32 * base.leading + 2.0 * table.padding;
        let row_bottom = cursor - row_height;

        ops.push(DrawOp::FillRect {
            x: frame.left,
            y: row_bottom,
            width: label_width,
            height: row_height,
            color: table.label_fill,
        });
        for (x, w) in [(frame.left, label_width), (frame.left + label_width, value_width)] {
            ops.push(DrawOp::StrokeRect {
                x,
                y: row_bottom,
                width: w,
                height: row_height,
                color: table.grid_color,
                line_width: table.grid_width,
            });
        }

        let top = cursor - table.padding;
        for (column_left, column_width, lines, style) in [
            (frame.left, label_width, label_lines, &label_style),
            (frame.left + label_width, value_width, value_lines, &value_style),
        ] {
            for (i, line) in lines.into_iter().enumerate() {
                let baseline = top - (i as f32 + 1.0) * style.leading + style.leading - style.size;
                set_line(
                    ops,
                    line,
                    style,
                    column_left + text_inset,
                    column_width - 2.0 * text_inset,
                    baseline,
                    true,
                );
            }
        }

        cursor = row_bottom;
    }

    cursor - table.space_after
}

fn cell_lines(text: &str, style: &TextStyle, width: f32) -> Vec<Line> {
    text.split('\n')
        .flat_map(|hard_line| {
            let words = metrics::parse_words(hard_line, style.weight);
            metrics::wrap(words, style.size, width)
        })
        .collect()
}
