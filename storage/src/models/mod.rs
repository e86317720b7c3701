mod content_kind;
mod correlation_record;

pub use content_kind::ContentKind;
pub use correlation_record::CorrelationRecord;
pub(crate) use correlation_record::CorrelationRow;
