//! Font metrics and text encoding for the standard Helvetica faces.
//!
//! The renderer only uses the PDF base-14 Helvetica and Helvetica-Bold
//! fonts, so no font program is embedded. Text is encoded as WinAnsi;
//! characters outside that code page become `?`.

use crate::styles::FontWeight;

/// Advance widths (1/1000 em) for ASCII 0x20..=0x7E, Helvetica.
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0..?
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // P.._
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // `..o
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // p..~
];

/// Advance widths (1/1000 em) for ASCII 0x20..=0x7E, Helvetica-Bold.
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // 0..?
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // P.._
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // `..o
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // p..~
];

/// PostScript name of the face used for `weight`.
pub fn base_font(weight: FontWeight) -> &'static [u8] {
    match weight {
        FontWeight::Regular => b"Helvetica",
        FontWeight::Bold => b"Helvetica-Bold",
    }
}

/// Map a character to its WinAnsi code, if it has one.
pub fn win_ansi(c: char) -> Option<u8> {
    let code = c as u32;
    match code {
        0x20..=0x7e | 0xa0..=0xff => Some(code as u8),
        _ => match c {
            '€' => Some(0x80),
            '‚' => Some(0x82),
            'ƒ' => Some(0x83),
            '„' => Some(0x84),
            '…' => Some(0x85),
            '†' => Some(0x86),
            '‡' => Some(0x87),
            'ˆ' => Some(0x88),
            '‰' => Some(0x89),
            'Š' => Some(0x8a),
            '‹' => Some(0x8b),
            'Œ' => Some(0x8c),
            'Ž' => Some(0x8e),
            '‘' => Some(0x91),
            '’' => Some(0x92),
            '“' => Some(0x93),
            '”' => Some(0x94),
            '•' => Some(0x95),
            '–' => Some(0x96),
            '—' => Some(0x97),
            '˜' => Some(0x98),
            '™' => Some(0x99),
            'š' => Some(0x9a),
            '›' => Some(0x9b),
            'œ' => Some(0x9c),
            'ž' => Some(0x9e),
            'Ÿ' => Some(0x9f),
            _ => None,
        },
    }
}

/// Encode text for a WinAnsi content stream. Control characters collapse
/// to spaces; anything else without a code point becomes `?`.
pub fn encode(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            if c.is_control() {
                b' '
            } else {
                win_ansi(c).unwrap_or(b'?')
            }
        })
        .collect()
}

/// Advance width of one encoded byte, in 1/1000 em.
fn byte_width(byte: u8, weight: FontWeight) -> u16 {
    let table = match weight {
        FontWeight::Regular => &HELVETICA,
        FontWeight::Bold => &HELVETICA_BOLD,
    };
    match byte {
        0x20..=0x7e => table[(byte - 0x20) as usize],
        0x95 => 350,
        0x85 | 0x89 | 0x97 => 1000,
        0x91 | 0x92 | 0x82 => 222,
        0x93 | 0x94 | 0x84 => 333,
        0x96 => 556,
        0xa0 => 278,
        _ => match weight {
            FontWeight::Regular => 556,
            FontWeight::Bold => 611,
        },
    }
}

/// Width of `text` in points when set in `weight` at `size`.
pub fn text_width(text: &str, weight: FontWeight, size: f32) -> f32 {
    let units: u32 = encode(text)
        .into_iter()
        .map(|b| u32::from(byte_width(b, weight)))
        .sum();
    units as f32 * size / 1000.0
}

// ── Light markup and wrapping ────────────────────────────────────────────────

/// A word with the weight it should be set in.
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pub text: String,
    pub weight: FontWeight,
}

/// A wrapped line: words in order plus their natural width (single spaces
/// between words).
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub words: Vec<Word>,
    pub width: f32,
}

/// Split one line of lightly marked text into words.
///
/// `**bold**` switches the weight; an unmatched `**` is kept literally.
/// `base` is the weight of unmarked text.
pub fn parse_words(text: &str, base: FontWeight) -> Vec<Word> {
    let mut words = Vec::new();
    let mut remaining = text;

    while let Some(start) = remaining.find("**") {
        let after_start = &remaining[start + 2..];
        let Some(end) = after_start.find("**") else {
            break;
        };
        push_words(&mut words, &remaining[..start], base);
        push_words(&mut words, &after_start[..end], FontWeight::Bold);
        remaining = &after_start[end + 2..];
    }

    push_words(&mut words, remaining, base);
    words
}

fn push_words(words: &mut Vec<Word>, segment: &str, weight: FontWeight) {
    words.extend(segment.split_whitespace().map(|w| Word {
        text: w.to_string(),
        weight,
    }));
}

/// Greedy line breaking. Words wider than `max_width` are split by
/// character so nothing runs off the page.
pub fn wrap(words: Vec<Word>, size: f32, max_width: f32) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut current: Vec<Word> = Vec::new();
    let mut width = 0.0_f32;

    for word in words.into_iter().flat_map(|w| split_long_word(w, size, max_width)) {
        let word_width = text_width(&word.text, word.weight, size);
        let gap = match current.last() {
            Some(prev) => text_width(" ", prev.weight, size),
            None => 0.0,
        };

        if !current.is_empty() && width + gap + word_width > max_width {
            lines.push(Line {
                words: std::mem::take(&mut current),
                width,
            });
            width = word_width;
        } else {
            width += gap + word_width;
        }
        current.push(word);
    }

    if !current.is_empty() {
        lines.push(Line {
            words: current,
            width,
        });
    }
    lines
}

fn split_long_word(word: Word, size: f32, max_width: f32) -> Vec<Word> {
    if text_width(&word.text, word.weight, size) <= max_width {
        return vec![word];
    }

    let mut pieces = Vec::new();
    let mut piece = String::new();
    for c in word.text.chars() {
        piece.push(c);
        if piece.chars().count() > 1 && text_width(&piece, word.weight, size) > max_width {
            piece.pop();
            pieces.push(Word {
                text: std::mem::take(&mut piece),
                weight: word.weight,
            });
            piece.push(c);
        }
    }
    if !piece.is_empty() {
        pieces.push(Word {
            text: piece,
            weight: word.weight,
        });
    }
    pieces
}
