use crate::ass::{Pixel, Row, Run};
use crate::error::ConvertError;

/// Splits one row of pixels into maximal runs of run-equivalent colour.
///
/// Leading transparent pixels are skipped and recorded as the origin column;
/// a trailing transparent block is never emitted. Returns `None` when the row
/// has no visible pixels at all.
pub fn encode_row(index: usize, pixels: &[Pixel]) -> Option<Row> {
    let mut runs = Vec::new();
    let mut block_start = None;
    let mut block_color = Pixel::TRANSPARENT;
    let mut origin_column = 0;

    for (col, pixel) in pixels.iter().enumerate() {
        if pixel.is_run_equivalent(&block_color) {
            continue;
        }

        match block_start {
            Some(start) => runs.push(Run {
                length: col - start,
                color: block_color,
            }),
            None => origin_column = col,
        }

        block_start = Some(col);
        block_color = *pixel;
    }

    if let Some(start) = block_start {
        if !block_color.is_transparent() {
            runs.push(Run {
                length: pixels.len() - start,
                color: block_color,
            });
        }
    }

    if runs.is_empty() {
        None
    } else {
        Some(Row {
            index,
            origin_column,
            runs,
        })
    }
}

/// Lazily encodes decoded pixel rows, top to bottom.
///
/// Rows without visible pixels are skipped. A row whose length differs from
/// `width` aborts the stream with [`ConvertError::WidthMismatch`].
pub fn rows<I>(width: usize, source: I) -> impl Iterator<Item = Result<Row, ConvertError>>
where
    I: IntoIterator,
    I::Item: AsRef<[Pixel]>,
{
    source
        .into_iter()
        .enumerate()
        .filter_map(move |(index, pixels)| {
            let pixels = pixels.as_ref();
            if pixels.len() != width {
                return Some(Err(ConvertError::WidthMismatch {
                    row: index,
                    expected: width,
                    actual: pixels.len(),
                }));
            }
            encode_row(index, pixels).map(Ok)
        })
}
