//! Presentation Mapping
//!
//! The single place where schema-less [`ResourceRecord`]s become typed
//! display rows. Every fallback the dashboard shows for a missing field
//! lives here, so renderers never touch raw fields or scatter
//! `field-or-default` logic.

use chrono::{DateTime, NaiveDate};

use crate::endpoint::Resource;
use crate::record::ResourceRecord;

const DESCRIPTION_LIMIT: usize = 50;

/// A fitness activity as displayed in the activities table.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRow {
    pub name: String,
    pub description: String,
    pub duration: String,
    pub calories: String,
    pub date: String,
}

impl ActivityRow {
    pub fn from_record(record: &ResourceRecord) -> Self {
        Self {
            name: first_text(record, &["name", "title"]).unwrap_or("Activity").to_string(),
            description: record
                .text("description")
                .map(truncate)
                .unwrap_or_else(|| "No description".to_string()),
            duration: record
                .number("duration")
                .map(|n| format!("{} min", fmt_num(n)))
                .unwrap_or_else(|| "N/A".to_string()),
            calories: record
                .number("calories_burned")
                .map(|n| format!("{} cal", fmt_num(n)))
                .unwrap_or_else(|| "N/A".to_string()),
            date: record
                .text("date")
                .map(fmt_date)
                .unwrap_or_else(|| "N/A".to_string()),
        }
    }

    fn columns(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.description.clone(),
            self.duration.clone(),
            self.calories.clone(),
            self.date.clone(),
        ]
    }
}

/// One ranked entry in the leaderboard table.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardRow {
    pub user: String,
    pub team: Option<String>,
    pub points: i64,
    pub activities: i64,
    pub calories: i64,
}

impl LeaderboardRow {
    pub fn from_record(record: &ResourceRecord) -> Self {
        Self {
            user: first_text(record, &["user_name", "username", "name"])
                .unwrap_or("Unknown User")
                .to_string(),
            team: record.text("team_name").map(str::to_string),
            points: first_count(record, &["points", "score"]),
            activities: first_count(record, &["total_activities", "activities_count"]),
            calories: first_count(record, &["total_calories", "calories_burned"]),
        }
    }

    /// Avatar initial, uppercased; "U" when no usable name exists.
    pub fn initial(&self) -> char {
        initial_of(&self.user)
    }

    fn columns(&self) -> Vec<String> {
        vec![
            self.user.clone(),
            self.team.clone().unwrap_or_default(),
            self.points.to_string(),
            self.activities.to_string(),
            self.calories.to_string(),
        ]
    }
}

/// A team card.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamRow {
    pub name: String,
    pub description: String,
    pub members: i64,
}

impl TeamRow {
    pub fn from_record(record: &ResourceRecord) -> Self {
        let members = record
            .number("members_count")
            .map(|n| n as i64)
            .or_else(|| record.list_len("members").map(|n| n as i64))
            .unwrap_or(0);
        Self {
            name: first_text(record, &["name", "team_name"]).unwrap_or("Team").to_string(),
            description: record
                .text("description")
                .map(str::to_string)
                .unwrap_or_else(|| "No description available".to_string()),
            members,
        }
    }

    fn columns(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.description.clone(),
            self.members.to_string(),
        ]
    }
}

/// A user profile card.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRow {
    pub display_name: String,
    pub username: String,
    pub email: Option<String>,
}

impl UserRow {
    pub fn from_record(record: &ResourceRecord) -> Self {
        let display_name = match (record.text("first_name"), record.text("last_name")) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            _ => first_text(record, &["username", "name"])
                .unwrap_or("Unknown User")
                .to_string(),
        };
        Self {
            display_name,
            username: record.text("username").unwrap_or("unknown").to_string(),
            email: record.text("email").map(str::to_string),
        }
    }

    pub fn initial(&self) -> char {
        initial_of(&self.display_name)
    }

    fn columns(&self) -> Vec<String> {
        vec![
            self.display_name.clone(),
            format!("@{}", self.username),
            self.email.clone().unwrap_or_default(),
        ]
    }
}

/// A suggested workout card.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutRow {
    pub name: String,
    pub description: String,
    pub duration: String,
    pub difficulty: String,
    pub calories_target: String,
    pub exercises: String,
}

impl WorkoutRow {
    pub fn from_record(record: &ResourceRecord) -> Self {
        Self {
            name: first_text(record, &["name", "title"]).unwrap_or("Workout").to_string(),
            description: record
                .text("description")
                .map(truncate)
                .unwrap_or_else(|| "No description available".to_string()),
            duration: format!("{} min", record.number("duration").map(fmt_num).unwrap_or_else(|| "30".into())),
            difficulty: record.text("difficulty").unwrap_or("Medium").to_string(),
            calories_target: record
                .number("calories_target")
                .map(fmt_num)
                .unwrap_or_else(|| "250".to_string()),
            exercises: record
                .number("exercises_count")
                .map(fmt_num)
                .unwrap_or_else(|| "8".to_string()),
        }
    }

    fn columns(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.description.clone(),
            self.duration.clone(),
            self.difficulty.clone(),
            self.calories_target.clone(),
            self.exercises.clone(),
        ]
    }
}

/// Empty-collection message, per the renderer contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyState {
    pub heading: &'static str,
    pub detail: &'static str,
}

pub fn empty_state(resource: Resource) -> EmptyState {
    match resource {
        Resource::Activities => EmptyState {
            heading: "No activities found!",
            detail: "Start tracking your fitness journey today.",
        },
        Resource::Leaderboard => EmptyState {
            heading: "No leaderboard data available!",
            detail: "Start competing with other users to see rankings here.",
        },
        Resource::Teams => EmptyState {
            heading: "No teams found!",
            detail: "Be the first to create a team and start competing!",
        },
        Resource::Users => EmptyState {
            heading: "No users found!",
            detail: "Be the first to join our fitness community.",
        },
        Resource::Workouts => EmptyState {
            heading: "No workouts available!",
            detail: "Our AI is generating personalized workouts based on your fitness profile.",
        },
    }
}

/// Column headers for a resource's table.
pub fn table_headers(resource: Resource) -> &'static [&'static str] {
    match resource {
        Resource::Activities => &["Activity", "Description", "Duration", "Calories", "Date"],
        Resource::Leaderboard => &["User", "Team", "Points", "Activities", "Total Calories"],
        Resource::Teams => &["Team", "Description", "Members"],
        Resource::Users => &["User", "Username", "Email"],
        Resource::Workouts => &["Workout", "Description", "Duration", "Difficulty", "Calories", "Exercises"],
    }
}

/// One record rendered as its resource's table columns.
pub fn table_row(resource: Resource, record: &ResourceRecord) -> Vec<String> {
    match resource {
        Resource::Activities => ActivityRow::from_record(record).columns(),
        Resource::Leaderboard => LeaderboardRow::from_record(record).columns(),
        Resource::Teams => TeamRow::from_record(record).columns(),
        Resource::Users => UserRow::from_record(record).columns(),
        Resource::Workouts => WorkoutRow::from_record(record).columns(),
    }
}

fn first_text<'a>(record: &'a ResourceRecord, fields: &[&str]) -> Option<&'a str> {
    fields.iter().find_map(|f| record.text(f))
}

fn first_count(record: &ResourceRecord, fields: &[&str]) -> i64 {
    fields
        .iter()
        .find_map(|f| record.number(f))
        .map(|n| n as i64)
        .unwrap_or(0)
}

fn initial_of(name: &str) -> char {
    name.chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('U')
}

fn truncate(text: &str) -> String {
    if text.chars().count() > DESCRIPTION_LIMIT {
        let cut: String = text.chars().take(DESCRIPTION_LIMIT).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}

/// Render a JSON number without a trailing `.0`.
fn fmt_num(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// Dates arrive as ISO 8601 timestamps or bare dates; anything else is
/// shown untouched.
fn fmt_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%b %-d, %Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%b %-d, %Y").to_string();
    }
    raw.to_string()
}
