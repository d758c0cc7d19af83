use chrono::NaiveDateTime;

use super::StatName;

/// One raw stats row for a bot: a UTC calendar timestamp (second precision)
/// plus every tracked counter at that moment. Immutable once read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub created_at: NaiveDateTime,
    pub active_members: i64,
    pub total_members: i64,
    pub members_online: i64,
    pub guests_online: i64,
    pub total_online: i64,
    pub total_threads: i64,
    pub total_posts: i64,
}

impl Sample {
    /// Reading for one stat. The enum match is the only path from a stat name
    /// to a column value.
    pub fn value_of(&self, stat: StatName) -> i64 {
        match stat {
            StatName::ActiveMembers => self.active_members,
            StatName::TotalMembers => self.total_members,
            StatName::MembersOnline => self.members_online,
            StatName::GuestsOnline => self.guests_online,
            StatName::TotalOnline => self.total_online,
            StatName::TotalThreads => self.total_threads,
            StatName::TotalPosts => self.total_posts,
        }
    }
}
