// Closed set of tracked stat columns. Parsing is the allow-list: a name that
// does not parse never reaches the repository.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Requested stat is not one of the tracked columns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid stat name: {0:?}")]
pub struct InvalidStatName(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatName {
    ActiveMembers,
    TotalMembers,
    MembersOnline,
    GuestsOnline,
    TotalOnline,
    TotalThreads,
    TotalPosts,
}

impl StatName {
    pub const ALL: [StatName; 7] = [
        StatName::ActiveMembers,
        StatName::TotalMembers,
        StatName::MembersOnline,
        StatName::GuestsOnline,
        StatName::TotalOnline,
        StatName::TotalThreads,
        StatName::TotalPosts,
    ];

    /// Column name in bot_stats. Fixed strings only; a stat name is never
    /// built from request input.
    pub fn column(self) -> &'static str {
        match self {
            StatName::ActiveMembers => "active_members",
            StatName::TotalMembers => "total_members",
            StatName::MembersOnline => "members_online",
            StatName::GuestsOnline => "guests_online",
            StatName::TotalOnline => "total_online",
            StatName::TotalThreads => "total_threads",
            StatName::TotalPosts => "total_posts",
        }
    }
}

impl FromStr for StatName {
    type Err = InvalidStatName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active_members" => Ok(StatName::ActiveMembers),
            "total_members" => Ok(StatName::TotalMembers),
            "members_online" => Ok(StatName::MembersOnline),
            "guests_online" => Ok(StatName::GuestsOnline),
            "total_online" => Ok(StatName::TotalOnline),
            "total_threads" => Ok(StatName::TotalThreads),
            "total_posts" => Ok(StatName::TotalPosts),
            other => Err(InvalidStatName(other.to_string())),
        }
    }
}

impl fmt::Display for StatName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}
