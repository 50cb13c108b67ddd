/// Lead identifiers are server-assigned, time-ordered UUIDs (v7).
pub type LeadId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
