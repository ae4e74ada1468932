pub mod dto;

pub use dto::{DatabaseStats, SourceKind};
