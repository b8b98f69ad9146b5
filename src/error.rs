use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("{0}")]
    Format(String),
    #[error("Failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Row {row} has {actual} pixels, but the image is {expected} pixels wide")]
    WidthMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },
}
