use chrono::{DateTime, Duration, Utc};
use std::fs::Metadata;
use std::io;

/// Timestamp taken from an article file's metadata.
///
/// On Unix this is the status-change time (`ctime`); elsewhere the
/// modification time. It is read on every load and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStamp {
    changed_at: DateTime<Utc>,
}

impl FileStamp {
    pub fn new(changed_at: DateTime<Utc>) -> Self {
        Self { changed_at }
    }

    #[cfg(unix)]
    pub fn from_metadata(meta: &Metadata) -> io::Result<Self> {
        use std::os::unix::fs::MetadataExt;

        let nanos = u32::try_from(meta.ctime_nsec()).unwrap_or(0);
        DateTime::from_timestamp(meta.ctime(), nanos)
            .map(Self::new)
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "ctime out of range"))
    }

    #[cfg(not(unix))]
    pub fn from_metadata(meta: &Metadata) -> io::Result<Self> {
        Ok(Self::new(DateTime::<Utc>::from(meta.modified()?)))
    }

    pub fn changed_at(&self) -> DateTime<Utc> {
        self.changed_at
    }

    /// Milliseconds since the Unix epoch, rounded to the nearest millisecond.
    pub fn millis(&self) -> i64 {
        (self.changed_at + Duration::microseconds(500)).timestamp_millis()
    }
}
