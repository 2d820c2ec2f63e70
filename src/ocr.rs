use image::DynamicImage;
use tesseract::{Tesseract, TesseractError};

pub const DEFAULT_LANG: &str = "eng";

pub fn recognize(image: &DynamicImage, lang: &str) -> Result<String, TesseractError> {
    let frame = image.to_rgb8();
    let width = frame.width() as i32;
    let height = frame.height() as i32;

    let tes = Tesseract::new(None, Some(lang))?;

    let mut ttes = tes.set_frame(frame.as_raw(), width, height, 3, width * 3)?;
    let result_text = ttes.get_text()?;
    Ok(result_text)
}
