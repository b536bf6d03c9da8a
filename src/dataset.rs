//! Struct `Dataset` represents a batch of labeled categorical entries.

// Provides the entry struct.
pub(crate) mod entry;
// Provides the dataset struct and its indexes.
pub(crate) mod dataset_struct;

// Provides a struct that reads a delimited file.
pub(crate) mod dataset_reader;


pub use entry::Entry;
pub use dataset_struct::Dataset;
pub use dataset_reader::DatasetReader;
