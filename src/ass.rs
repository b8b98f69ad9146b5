use std::time::Duration;

pub const ASS_HEADER: &str = "[Script Info]
ScriptType: v4.00+
PlayResX: 1920
PlayResY: 1080

[V4+ Styles]
Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding
Style: Default,Arial,20,&H00FFFFFF,&H0000FFFF,&H00000000,&H00000000,0,0,0,0,100,100,0,0,1,0,0,7,0,0,0,0

[Events]
Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text";

/// An 8-bit RGBA pixel. Alpha 0 is fully transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const TRANSPARENT: Pixel = Pixel { r: 0, g: 0, b: 0, a: 0 };

    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Fully transparent pixels are equivalent regardless of their RGB channels.
    pub fn is_run_equivalent(&self, other: &Pixel) -> bool {
        if self.is_transparent() {
            return other.is_transparent();
        }
        self == other
    }
}

impl From<image::Rgba<u8>> for Pixel {
    fn from(px: image::Rgba<u8>) -> Self {
        let [r, g, b, a] = px.0;
        Self::new(r, g, b, a)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub(crate) length: usize,
    pub(crate) color: Pixel,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Row {
    pub(crate) index: usize,
    pub(crate) origin_column: usize,
    pub(crate) runs: Vec<Run>,
}

#[derive(Debug)]
pub struct ConversionParams {
    pub(crate) layer: i32,
    pub(crate) start_time: Duration,
    pub(crate) end_time: Duration,
    pub(crate) origin: (i64, i64),
    pub(crate) text_prefix: String,
    pub(crate) text_suffix: String,
    pub(crate) with_header: bool,
}
