use thiserror::Error;
use tesseract::TesseractError;

#[derive(Error, Debug)]
pub enum OcrError {
    #[error("Image file not found: {0}")]
    ImageNotFound(String),
    #[error(transparent)]
    DecodeError(#[from] image::ImageError),
    #[error(transparent)]
    TesseractError(#[from] TesseractError),
    #[error("No text found in image")]
    NoText,
}
