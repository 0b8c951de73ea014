//! Personal information shown in the page header.

use serde::{Deserialize, Serialize};

/// Contact details and summary for the person the resume describes.
///
/// Singleton: exactly one instance is loaded from the resume data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    /// Full name.
    pub name: String,
    /// Current city.
    pub location: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number (free text, displayed verbatim).
    pub phone: String,
    /// LinkedIn handle without a scheme (e.g. "linkedin.com/in/jane").
    /// The `https://` prefix is added at render time.
    pub linkedin: String,
    /// Professional summary paragraph.
    pub summary: String,
}
