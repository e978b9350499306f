use serde::{Deserialize, Serialize};

use crate::shared::UserId;

/// The signed-in user as seen by the rest of the app (forum authorship).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

impl User {
    pub fn new(id: UserId, name: String) -> Self {
        Self { id, name }
    }
}

/// Subjects offered by the profile form.
pub const SUBJECTS: &[&str] = &[
    "Calculus", "LADE", "BEE", "QSP", "Physics", "PEM", "PPS", "PDA", "PP",
];

pub const STREAMS: &[&str] = &["B.Tech", "MBATech"];

pub const BRANCHES: &[&str] = &[
    "CE",
    "Data Science",
    "AI",
    "IT",
    "Civil",
    "Mechanical",
    "CSBS",
];

pub const YEARS: &[&str] = &["I", "II", "III", "IV", "V"];
