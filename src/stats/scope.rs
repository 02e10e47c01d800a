//! Analysis scope: one sender or the whole group.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ChatlensError, Result};
use crate::record::{GROUP_NOTIFICATION, MessageRecord};

/// Selector value meaning "every record".
pub const GROUP_SCOPE: &str = "Group";

/// Which records a statistic looks at.
///
/// Parses from the selector strings produced by [`user_options`]:
/// `"Group"` is the whole chat, anything else is a sender name.
///
/// ```rust
/// use chatlens::stats::Scope;
///
/// assert_eq!("Group".parse::<Scope>().unwrap(), Scope::Group);
/// assert_eq!("Alice".parse::<Scope>().unwrap(), Scope::user("Alice"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Scope {
    /// All records.
    #[default]
    Group,
    /// Records whose sender equals the name exactly.
    User(String),
}

impl Scope {
    /// Creates a single-user scope.
    pub fn user(name: impl Into<String>) -> Self {
        Scope::User(name.into())
    }

    /// Returns `true` for the whole-group scope.
    pub fn is_group(&self) -> bool {
        matches!(self, Scope::Group)
    }

    /// Returns `true` if `record` belongs to this scope.
    pub fn matches(&self, record: &MessageRecord) -> bool {
        match self {
            Scope::Group => true,
            Scope::User(name) => record.sender() == Some(name.as_str()),
        }
    }

    /// Iterates over the records in this scope, in their original order.
    pub fn select<'a>(
        &'a self,
        records: &'a [MessageRecord],
    ) -> impl Iterator<Item = &'a MessageRecord> + 'a {
        records.iter().filter(move |r| self.matches(r))
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Group => f.write_str(GROUP_SCOPE),
            Scope::User(name) => f.write_str(name),
        }
    }
}

impl FromStr for Scope {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(if s == GROUP_SCOPE {
            Scope::Group
        } else {
            Scope::User(s.to_string())
        })
    }
}

impl Serialize for Scope {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Scope {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap_or_default())
    }
}

/// Returns the selector options: `"Group"` followed by every distinct sender,
/// sorted, without the group-notification sentinel.
pub fn user_options(records: &[MessageRecord]) -> Vec<String> {
    let senders: BTreeSet<&str> = records
        .iter()
        .filter_map(MessageRecord::sender)
        .filter(|s| *s != GROUP_NOTIFICATION)
        .collect();

    std::iter::once(GROUP_SCOPE.to_string())
        .chain(senders.into_iter().map(str::to_string))
        .collect()
}

/// Resolves a selector string against the records.
///
/// # Errors
///
/// Returns [`ChatlensError::UnknownUser`] if `name` is neither `"Group"` nor a
/// sender in `records`.
pub fn resolve_scope(records: &[MessageRecord], name: &str) -> Result<Scope> {
    let options = user_options(records);
    if options.iter().any(|o| o == name) {
        Ok(name.parse().unwrap_or_default())
    } else {
        Err(ChatlensError::unknown_user(name, options))
    }
}
