mod ocr;
mod words;

pub use ocr::{OcrEngine, OcrError, OcrOutput, PlainTextEngine};
pub use words::{WordFilter, extract_words};
