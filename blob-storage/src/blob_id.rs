use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use crate::error::BlobStoreError;

/// Identifier of a stored blob. Doubles as its file name inside a store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BlobId(Uuid);

impl BlobId {
    /// Returns a fresh random (v4) identifier. Collisions are not checked.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl FromStr for BlobId {
    type Err = BlobStoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::try_parse(s)
            .map(Self)
            .map_err(|source| BlobStoreError::MalformedId { input: s.to_string(), source })
    }
}

// Always the lowercase hyphenated form, whatever form was parsed.
impl fmt::Display for BlobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_hyphenated())
    }
}
