pub mod answer;
pub mod loaders;
pub mod outcome;
pub mod query;
pub mod record;
pub mod verdict;

pub use answer::{CitationTitles, ExtractedAnswer, NO_TITLES_FOUND};
pub use loaders::{load_queries, parse_queries, parse_workbook, InputTable};
pub use outcome::{RequestOutcome, StatusCode};
pub use query::Query;
pub use record::{ResultRecord, RunSummary};
pub use verdict::MatchVerdict;
