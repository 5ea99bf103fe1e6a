//! Guide types

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// Guide identifier
pub type GuideId = i64;

/// Maximum guide title length, in characters
pub const MAX_TITLE_LEN: usize = 100;

/// Maximum guide content length, in characters
pub const MAX_CONTENT_LEN: usize = 144;

/// A short written guide
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guide {
    /// Row identifier
    pub id: GuideId,
    /// Title, at most `MAX_TITLE_LEN` characters
    pub title: String,
    /// Body, at most `MAX_CONTENT_LEN` characters
    pub content: String,
}

/// Replacement title and content for an existing guide
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateGuide {
    /// New title
    pub title: String,
    /// New content
    pub content: String,
}

impl UpdateGuide {
    /// Check the input against the column limits
    pub fn validate(&self) -> Result<()> {
        if self.title.chars().count() > MAX_TITLE_LEN {
            return Err(CoreError::invalid_input(format!(
                "title must be at most {MAX_TITLE_LEN} characters"
            )));
        }

        if self.content.chars().count() > MAX_CONTENT_LEN {
            return Err(CoreError::invalid_input(format!(
                "content must be at most {MAX_CONTENT_LEN} characters"
            )));
        }

        Ok(())
    }
}
