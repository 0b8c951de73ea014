//! Education entries.

use serde::{Deserialize, Serialize};

/// A single degree or program in the education history.
///
/// Entries are displayed in the order they appear in the resume data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    /// School or university name.
    pub institution: String,
    /// Degree earned.
    pub degree: String,
    /// Campus location (free text).
    pub location: String,
    /// Attendance period (free text).
    pub period: String,
    /// Ordinal used to locate the institution logo file.
    pub image_index: u32,
    /// Optional detail bullet points (coursework, honors). May be empty,
    /// in which case the rendered card carries no bullet list.
    #[serde(default)]
    pub details: Vec<String>,
    /// Institution logo as a base64 data URI, attached after loading.
    #[serde(skip)]
    pub logo: String,
}
