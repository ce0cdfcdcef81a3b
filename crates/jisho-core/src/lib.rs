pub mod batch;
pub mod collection;
pub mod error;
pub mod fill;
pub mod mapper;
pub mod memory;
pub mod preprocess;
pub mod record;
pub mod report;

pub use batch::{BatchEngine, BatchOutcome, BatchRequest};
pub use collection::CollectionStore;
pub use error::{AutofillError, CollectionError};
pub use fill::{FillOutcome, fill_record};
pub use memory::MemoryCollection;
pub use preprocess::{DefaultPreprocessor, NfkcPreprocessor, Preprocessor, parse_terms, preprocessor};
pub use record::Record;
pub use report::BatchReport;
