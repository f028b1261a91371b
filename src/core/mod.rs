//! Import-to-records pipeline: serial decoding, row normalization, daily merge.

pub mod decoder;
pub mod normalizer;
pub mod reconciler;

pub use decoder::{DecodeError, excel_serial_to_datetime};
pub use normalizer::{NormalizedImport, normalize_json};
pub use reconciler::reconcile;
