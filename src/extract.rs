use std::path::Path;

use crate::errors::OcrError;
use crate::ocr;

pub fn extract_text(image_path: &str) -> Result<String, OcrError> {
    // check the file exists before handing it to the decoder
    if !Path::new(image_path).exists() {
        return Err(OcrError::ImageNotFound(image_path.to_owned()));
    }

    let image = image::open(image_path)?;
    let raw_text = ocr::recognize(&image, ocr::DEFAULT_LANG)?;
    cleanup(&raw_text)
}

fn cleanup(raw_text: &str) -> Result<String, OcrError> {
    let text = raw_text.trim();
    if text.is_empty() {
        return Err(OcrError::NoText);
    }
    Ok(text.to_owned())
}
