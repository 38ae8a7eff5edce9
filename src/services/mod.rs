//! Services module
//!
//! Business logic built on top of the generation gateway.

pub mod extraction;
pub mod file_reader;

pub use extraction::{
    ExtractionService, InformationExtractor, client_questions_format, extract_from_file,
};
pub use file_reader::FileReader;
