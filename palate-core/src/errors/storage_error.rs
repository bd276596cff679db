/// Durable-storage errors. Feedback writes surface these; profile reads
/// degrade to defaults instead of failing.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("write failed for {record}: {reason}")]
    WriteFailed { record: String, reason: String },

    #[error("read failed for {record}: {reason}")]
    ReadFailed { record: String, reason: String },

    #[error("serialization failed for {record}: {reason}")]
    SerializationFailed { record: String, reason: String },
}
