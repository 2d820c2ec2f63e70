use clap::{arg, command, error::ErrorKind};

mod errors;
mod extract;
mod ocr;

fn main() {
    let matches = command!()
        .arg(
            arg!(<image_path> "path of the image file to read")
        )
        .try_get_matches()
        .unwrap_or_else(|e| match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                println!("Usage: ocr-helper <image_path>");
                std::process::exit(1);
            }
        });

    let image_path = matches.get_one::<String>("image_path").expect("image path must input");

    match extract::extract_text(image_path) {
        Ok(text) => println!("{}", text),
        Err(e) => println!("ERROR: {}", e),
    }
}
