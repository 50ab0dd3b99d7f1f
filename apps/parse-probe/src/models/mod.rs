pub mod parse_result;
pub mod resume;

pub use parse_result::{ParseResponse, ParsingResult};
pub use resume::ResumeFixture;
