use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ExportError;

/// Linear scale applied to every size, spacing and margin on widescreen
/// slides relative to the print palette.
pub const WIDESCREEN_SCALE: f32 = 2.4;

/// Target medium for the rendered deck.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageGeometry {
    /// A4 portrait.
    #[default]
    Print,
    /// 16:9 slide, 1920 × 1080 pt.
    Widescreen,
}

impl PageGeometry {
    /// Page width and height in points.
    pub fn page_size(&self) -> (f32, f32) {
        match self {
            PageGeometry::Print => (595.28, 841.89),
            PageGeometry::Widescreen => (1920.0, 1080.0),
        }
    }

    pub fn scale(&self) -> f32 {
        match self {
            PageGeometry::Print => 1.0,
            PageGeometry::Widescreen => WIDESCREEN_SCALE,
        }
    }

    pub fn margins(&self) -> Margins {
        Margins::PRINT.scaled(self.scale())
    }

    pub fn palette(&self) -> StylePalette {
        StylePalette::print().scaled(self.scale())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PageGeometry::Print => "print",
            PageGeometry::Widescreen => "widescreen",
        }
    }
}

impl fmt::Display for PageGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageGeometry {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "print" | "a4" => Ok(PageGeometry::Print),
            "widescreen" | "slide" | "16:9" => Ok(PageGeometry::Widescreen),
            _ => Err(ExportError::UnknownGeometry(s.to_string())),
        }
    }
}

/// Page margins in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    const PRINT: Margins = Margins {
        top: 33.0,
        right: 42.0,
        bottom: 33.0,
        left: 42.0,
    };

    fn scaled(self, factor: f32) -> Margins {
        Margins {
            top: self.top * factor,
            right: self.right * factor,
            bottom: self.bottom * factor,
            left: self.left * factor,
        }
    }
}

/// RGB colour with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb(pub f32, pub f32, pub f32);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0.0, 0.0, 0.0);

    pub const fn hex(value: u32) -> Rgb {
        Rgb(
            ((value >> 16) & 0xff) as f32 / 255.0,
            ((value >> 8) & 0xff) as f32 / 255.0,
            (value & 0xff) as f32 / 255.0,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Justify,
}

/// One paragraph style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub leading: f32,
    pub space_after: f32,
    pub indent: f32,
    pub weight: FontWeight,
    pub align: Align,
    pub color: Rgb,
}

impl TextStyle {
    const fn new(size: f32, space_after: f32) -> Self {
        TextStyle {
            size,
            leading: size * 1.2,
            space_after,
            indent: 0.0,
            weight: FontWeight::Regular,
            align: Align::Left,
            color: Rgb::BLACK,
        }
    }

    const fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    const fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    const fn color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    const fn indent(mut self, indent: f32) -> Self {
        self.indent = indent;
        self
    }

    pub fn scaled(&self, factor: f32) -> TextStyle {
        TextStyle {
            size: self.size * factor,
            leading: self.leading * factor,
            space_after: self.space_after * factor,
            indent: self.indent * factor,
            ..*self
        }
    }
}

/// Border and fill settings for key/value tables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableStyle {
    pub label_fill: Rgb,
    pub grid_color: Rgb,
    pub grid_width: f32,
    pub padding: f32,
    /// Share of the frame width taken by the label column.
    pub label_ratio: f32,
    pub space_after: f32,
}

/// The complete set of styles used on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct StylePalette {
    pub title: TextStyle,
    pub banner: TextStyle,
    pub subheading: TextStyle,
    pub body: TextStyle,
    pub bullet: TextStyle,
    pub notice: TextStyle,
    pub key_value: TextStyle,
    pub separator: TextStyle,
    pub closing: TextStyle,
    pub table: TableStyle,
    pub separator_rule: f32,
    /// Page tints, cycled per page.
    pub backgrounds: [Rgb; 4],
}

impl StylePalette {
    /// Palette for print pages; widescreen is this scaled by
    /// [`WIDESCREEN_SCALE`].
    pub fn print() -> Self {
        StylePalette {
            title: TextStyle::new(25.0, 16.7)
                .bold()
                .align(Align::Center)
                .color(Rgb::hex(0x0d47a1)),
            banner: TextStyle::new(18.3, 12.5)
                .bold()
                .align(Align::Center)
                .color(Rgb::hex(0x1565c0)),
            subheading: TextStyle::new(13.3, 8.3)
                .bold()
                .align(Align::Center)
                .color(Rgb::hex(0x1976d2)),
            body: TextStyle::new(11.7, 7.5).align(Align::Justify),
            bullet: TextStyle::new(10.8, 5.0).indent(16.7),
            notice: TextStyle::new(10.8, 5.0)
                .indent(16.7)
                .color(Rgb::hex(0x757575)),
            key_value: TextStyle::new(11.7, 0.0),
            separator: TextStyle::new(7.5, 8.3).color(Rgb::hex(0xbdbdbd)),
            closing: TextStyle::new(11.7, 7.5)
                .bold()
                .align(Align::Center)
                .color(Rgb::hex(0xbdbdbd)),
            table: TableStyle {
                label_fill: Rgb::hex(0xbbdefb),
                grid_color: Rgb::hex(0x90caf9),
                grid_width: 0.8,
                padding: 5.0,
                label_ratio: 1.0 / 3.0,
                space_after: 12.5,
            },
            separator_rule: 0.8,
            backgrounds: [
                Rgb::hex(0xf5f5f5),
                Rgb::hex(0xe3f2fd),
                Rgb::hex(0xf3e5f5),
                Rgb::hex(0xe8f5e9),
            ],
        }
    }

    pub fn scaled(&self, factor: f32) -> StylePalette {
        StylePalette {
            title: self.title.scaled(factor),
            banner: self.banner.scaled(factor),
            subheading: self.subheading.scaled(factor),
            body: self.body.scaled(factor),
            bullet: self.bullet.scaled(factor),
            notice: self.notice.scaled(factor),
            key_value: self.key_value.scaled(factor),
            separator: self.separator.scaled(factor),
            closing: self.closing.scaled(factor),
            table: TableStyle {
                grid_width: self.table.grid_width * factor,
                padding: self.table.padding * factor,
                space_after: self.table.space_after * factor,
                ..self.table
            },
            separator_rule: self.separator_rule * factor,
            backgrounds: self.backgrounds,
        }
    }
}
