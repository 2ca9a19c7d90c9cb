// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

//! Feedback record and its table mapping

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

/// A persisted feedback submission.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Feedback {
    /// Assigned by the database on insert, never reused
    pub id: i64,
    pub name: Option<String>,
    pub rating: i32,
    pub message: Option<String>,
}

/// Create payload. Any `id` sent by the client is dropped here.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct NewFeedback {
    #[serde(default)]
    pub name: Option<String>,
    /// Missing or null rating is stored as 0
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub rating: i32,
    #[serde(default)]
    pub message: Option<String>,
}

impl NewFeedback {
    pub fn new(name: impl Into<String>, rating: i32, message: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            rating,
            message: Some(message.into()),
        }
    }

    /// Attach the identity the store assigned
    pub fn into_feedback(self, id: i64) -> Feedback {
        Feedback {
            id,
            name: self.name,
            rating: self.rating,
            message: self.message,
        }
    }
}

impl<'r> FromRow<'r, SqliteRow> for Feedback {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            rating: row.try_get("rating")?,
            message: row.try_get("message")?,
        })
    }
}
