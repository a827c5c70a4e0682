use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str, TextStr};

use crate::layout::{DrawOp, LaidOutDocument, Page, TextRun};
use crate::metrics;
use crate::styles::{FontWeight, Rgb};

const REGULAR: Name<'static> = Name(b"F1");
const BOLD: Name<'static> = Name(b"F2");
const PRODUCER: &str = "Game Concept Forge";

/// Serialize a laid-out document to PDF bytes.
///
/// Uses the base-14 Helvetica faces with WinAnsi encoding, so no fonts are
/// embedded. No creation date or random ID is written, which keeps output
/// byte-identical for identical input.
pub fn generate_pdf(document: &LaidOutDocument, title: &str) -> Vec<u8> {
    let mut alloc = Ref::new(1);
    let catalog_id = alloc.bump();
    let tree_id = alloc.bump();
    let regular_id = alloc.bump();
    let bold_id = alloc.bump();
    let info_id = alloc.bump();
    let page_ids: Vec<(Ref, Ref)> = document
        .pages
        .iter()
        .map(|_| (alloc.bump(), alloc.bump()))
        .collect();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(tree_id);
    pdf.pages(tree_id)
        .kids(page_ids.iter().map(|(page_id, _)| *page_id))
        .count(page_ids.len() as i32);

    for (font_id, weight) in [(regular_id, FontWeight::Regular), (bold_id, FontWeight::Bold)] {
        pdf.type1_font(font_id)
            .base_font(Name(metrics::base_font(weight)))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
    }

    let media_box = Rect::new(0.0, 0.0, document.width, document.height);
    for (page, &(page_id, content_id)) in document.pages.iter().zip(&page_ids) {
        let mut writer = pdf.page(page_id);
        writer.media_box(media_box);
        writer.parent(tree_id);
        writer.contents(content_id);
        writer
            .resources()
            .fonts()
            .pair(REGULAR, regular_id)
            .pair(BOLD, bold_id);
        writer.finish();

        let content = page_content(page, document.width, document.height);
        pdf.stream(content_id, &content);
    }

    pdf.document_info(info_id)
        .title(TextStr(title))
        .producer(TextStr(PRODUCER));

    pdf.finish()
}

fn page_content(page: &Page, width: f32, height: f32) -> Vec<u8> {
    let mut content = Content::new();
    content.save_state();

    set_fill(&mut content, page.background);
    content.rect(0.0, 0.0, width, height);
    content.fill_nonzero();

    for op in &page.ops {
        match op {
            DrawOp::Text(run) => show_text(&mut content, run),
            DrawOp::FillRect {
                x,
                y,
                width,
                height,
                color,
            } => {
                set_fill(&mut content, *color);
                content.rect(*x, *y, *width, *height);
                content.fill_nonzero();
            }
            DrawOp::StrokeRect {
                x,
                y,
                width,
                height,
                color,
                line_width,
            } => {
                set_stroke(&mut content, *color);
                content.set_line_width(*line_width);
                content.rect(*x, *y, *width, *height);
                content.stroke();
            }
            DrawOp::Line {
                from,
                to,
                color,
                line_width,
            } => {
                set_stroke(&mut content, *color);
                content.set_line_width(*line_width);
                content.move_to(from.0, from.1);
                content.line_to(to.0, to.1);
                content.stroke();
            }
        }
    }

    content.restore_state();
    content.finish()
}

fn show_text(content: &mut Content, run: &TextRun) {
    let font = match run.weight {
        FontWeight::Regular => REGULAR,
        FontWeight::Bold => BOLD,
    };
    let encoded = metrics::encode(&run.text);

    set_fill(content, run.color);
    content.begin_text();
    content.set_font(font, run.size);
    content.set_word_spacing(run.word_spacing);
    content.set_text_matrix([1.0, 0.0, 0.0, 1.0, run.x, run.y]);
    content.show(Str(encoded.as_slice()));
    content.end_text();
}

fn set_fill(content: &mut Content, color: Rgb) {
    content.set_fill_rgb(color.0, color.1, color.2);
}

fn set_stroke(content: &mut Content, color: Rgb) {
    content.set_stroke_rgb(color.0, color.1, color.2);
}
