pub mod llm;
pub mod observability;
pub mod output;
pub mod pdf;
