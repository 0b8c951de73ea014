//! Work experience entries.

use serde::{Deserialize, Serialize};

/// A single job in the work history.
///
/// Entries are displayed in the order they appear in the resume data file;
/// the application never sorts them. By convention `image_index` 1 belongs
/// to the most recent position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    /// Employer name.
    pub company: String,
    /// Job title.
    pub title: String,
    /// Office location (free text).
    pub location: String,
    /// Employment period (free text, e.g. "Aug. 2021 - Present").
    pub period: String,
    /// Ordinal used to locate the company logo file (1 = most recent).
    pub image_index: u32,
    /// Bullet points describing the role, in display order.
    #[serde(default)]
    pub responsibilities: Vec<String>,
    /// Company logo as a base64 data URI, attached after loading.
    /// Not part of the data file and excluded from API output.
    #[serde(skip)]
    pub logo: String,
}
