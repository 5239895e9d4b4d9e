pub mod response_parser;
pub mod result_writer;
pub mod sample_writer;
pub mod source_matcher;

pub use response_parser::extract;
pub use result_writer::ResultWriter;
pub use sample_writer::create_sample_input;
pub use source_matcher::match_source;
