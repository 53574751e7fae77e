//! Redirection record entity.

/// The value stored for a short identifier.
///
/// `original_url` is fixed when the identifier is minted; only `hits`
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RedirectionRecord {
    pub original_url: String,
    pub hits: u64,
}

impl RedirectionRecord {
    /// Creates a fresh record with a zero hit count.
    pub fn new(original_url: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            hits: 0,
        }
    }

    /// Creates a record with an explicit hit count, e.g. when restoring.
    pub fn with_hits(original_url: impl Into<String>, hits: u64) -> Self {
        Self {
            original_url: original_url.into(),
            hits,
        }
    }
}

/// One row of the mapping listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub hash: String,
    pub original_url: String,
    pub hits: u64,
}

impl ListEntry {
    pub fn from_record(hash: String, record: RedirectionRecord) -> Self {
        Self {
            hash,
            original_url: record.original_url,
            hits: record.hits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_starts_with_zero_hits() {
        let record = RedirectionRecord::new("https://example.com");

        assert_eq!(record.original_url, "https://example.com");
        assert_eq!(record.hits, 0);
    }

    #[test]
    fn test_record_with_hits() {
        let record = RedirectionRecord::with_hits("https://example.com", 7);
        assert_eq!(record.hits, 7);
    }

    #[test]
    fn test_list_entry_from_record() {
        let entry = ListEntry::from_record(
            "246f633".to_string(),
            RedirectionRecord::with_hits("https://www.example.com/page", 3),
        );

        assert_eq!(entry.hash, "246f633");
        assert_eq!(entry.original_url, "https://www.example.com/page");
        assert_eq!(entry.hits, 3);
    }
}
