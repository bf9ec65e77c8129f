/// Data model for FileAgent reports.
///
/// Re-exports the per-request file snapshot and size formatting helpers.
pub mod file_descriptor;
pub mod size;

pub use file_descriptor::{file_name_of, FileDescriptor};
