mod page_text;
mod pdf_extractor;

pub use page_text::normalize_page_text;
pub use pdf_extractor::PdfTextExtractor;
