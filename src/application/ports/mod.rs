mod model_client;
mod output_writer;
mod parsing_strategy;
mod text_extractor;

pub use model_client::{ModelClient, ModelClientError};
pub use output_writer::{OutputWriter, OutputWriterError};
pub use parsing_strategy::{ParseError, ParsingStrategy};
pub use text_extractor::{TextExtractor, TextExtractorError};
