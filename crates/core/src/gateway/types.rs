use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of the account a purchase is charged to.
///
/// Always positive. Whether the account exists is the collaborators' concern.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "i64", into = "i64")]
pub struct AccountId(u64);

impl AccountId {
    /// Returns `None` unless `raw` is a positive integer.
    pub fn new(raw: i64) -> Option<Self> {
        u64::try_from(raw).ok().filter(|id| *id > 0).map(Self)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for AccountId {
    type Error = String;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        Self::new(raw).ok_or_else(|| format!("account id must be positive, got {}", raw))
    }
}

impl From<AccountId> for i64 {
    fn from(account: AccountId) -> Self {
        // Constructed from an i64, so this never saturates
        i64::try_from(account.0).unwrap_or(i64::MAX)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
