pub mod batch;
pub mod classifier;

pub use batch::{classify_csv, BatchSummary};
pub use classifier::{classify, Classifier, Thresholds};
