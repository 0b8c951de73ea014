//! The fully loaded resume.

use serde::{Deserialize, Serialize};

use super::{EducationEntry, ExperienceEntry, PersonalInfo, PortfolioLink, SkillCategory};

/// Everything the page needs, loaded once at startup and immutable after.
///
/// The serde shape of this struct doubles as the schema of the resume data
/// file: `personal`, `experience`, `education` and `portfolios` come straight
/// from `resume.json`. Skills are loaded from the separate skills document,
/// and the profile photo is attached as an encoded data URI, so both are
/// skipped during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resume {
    /// Header contact block.
    pub personal: PersonalInfo,
    /// Work history in display order.
    pub experience: Vec<ExperienceEntry>,
    /// Education history in display order.
    pub education: Vec<EducationEntry>,
    /// Portfolio links in display order.
    #[serde(default)]
    pub portfolios: Vec<PortfolioLink>,
    /// Skill categories in skills-document order.
    #[serde(skip_deserializing)]
    pub skills: Vec<SkillCategory>,
    /// Profile photo as a base64 data URI. Excluded from API output.
    #[serde(skip)]
    pub profile_photo: String,
}
