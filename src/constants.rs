//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the on-disk layout of the
//! resume data and image assets.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "cvserve";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "cvserve";

/// Subdirectory of the content root holding the JSON data files.
pub const DATA_DIR: &str = "data";

/// Resume data file (personal info, experience, education, portfolio links).
pub const RESUME_FILE: &str = "resume.json";

/// Skills document file (category -> skill -> score).
pub const SKILLS_FILE: &str = "skills.json";

/// Subdirectory of the content root holding the JPEG image assets.
pub const IMAGES_DIR: &str = "assets/images";

/// Profile photo filename. Required asset: loading aborts if it is missing.
pub const PROFILE_IMAGE: &str = "profile.jpeg";

/// Shared placeholder logo. Required asset: substituted for any missing
/// per-entry logo, so it must itself exist.
pub const FALLBACK_LOGO: &str = "nologo.jpeg";

/// Filename prefix for experience entry logos (`experience1.jpeg`, ...).
pub const EXPERIENCE_LOGO_PREFIX: &str = "experience";

/// Filename prefix for education entry logos (`education1.jpeg`, ...).
pub const EDUCATION_LOGO_PREFIX: &str = "education";

/// CDN URL for the Plotly.js bundle referenced from the rendered page.
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";
