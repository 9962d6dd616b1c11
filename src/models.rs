//! Typed records shared by the comment and team-member operations, plus the
//! fabricated placeholders used for interactive experimentation.
//!
//! All other payloads pass through as `serde_json::Value` or whatever type the
//! caller chooses to deserialize into.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Timestamp layout used by the v2.1 API, e.g. `2014-07-15 16:40:00`.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A comment attached to an email, note or task.
#[allow(clippy::struct_field_names)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Comment {
    #[serde(default)]
    pub comment_id: u64,
    pub body: String,
    pub owner_user_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created_utc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_updated_utc: Option<String>,
}

/// Body of a new comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct NewComment {
    pub body: String,
    pub owner_user_id: u64,
}

/// Membership of a user (or nested team) in a team.
#[allow(clippy::struct_field_names)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct TeamMember {
    pub permission_id: u64,
    pub team_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_user_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_team_id: Option<u64>,
}

/// Placeholder comment stamped with the current UTC time. Never sent anywhere.
#[must_use]
pub fn sample_comment() -> Comment {
    let now = Utc::now().format(DATE_FORMAT).to_string();
    Comment {
        comment_id: 0,
        body: "This is a comment.".to_string(),
        owner_user_id: 1,
        date_created_utc: Some(now.clone()),
        date_updated_utc: Some(now),
    }
}

/// Placeholder team membership. Never sent anywhere.
#[must_use]
pub const fn sample_team_member() -> TeamMember {
    TeamMember {
        permission_id: 1,
        team_id: 1,
        member_user_id: Some(1),
        member_team_id: Some(1),
    }
}
