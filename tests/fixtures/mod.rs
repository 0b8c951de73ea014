//! Shared fixtures for integration tests.
//!
//! Builds a minimal content root (JSON data files plus image assets) inside
//! a temporary directory. The JPEG fixtures are marker bytes only; nothing
//! in the loader decodes image data.

use std::fs;
use std::path::Path;

/// Start/end markers of a JPEG stream, enough for encoding fixtures.
pub const TINY_JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xD9];

/// Placeholder logo bytes, distinct from [`TINY_JPEG`] so tests can tell a
/// specific logo from the fallback by their encoded form.
pub const FALLBACK_JPEG: &[u8] = &[0xFF, 0xD8, 0x00, 0xFF, 0xD9];

/// Resume data fixture: two jobs, two degrees (one without details), one
/// portfolio link. The second job and second degree point at logo indexes
/// that have no image file, so they resolve to the fallback.
pub fn sample_resume_json() -> &'static str {
    r#"{
  "personal": {
    "name": "Jane Doe",
    "location": "Berlin",
    "email": "jane@example.com",
    "phone": "+49 30 1234",
    "linkedin": "linkedin.com/in/janedoe",
    "summary": "Data person."
  },
  "experience": [
    {
      "company": "Acme",
      "title": "Engineer",
      "location": "Springfield",
      "period": "2020 - Present",
      "image_index": 1,
      "responsibilities": ["Built things", "Shipped things"]
    },
    {
      "company": "Zenith",
      "title": "Analyst",
      "location": "Shelbyville",
      "period": "2016 - 2020",
      "image_index": 9,
      "responsibilities": ["Analyzed things"]
    }
  ],
  "education": [
    {
      "institution": "State University",
      "degree": "BSc Computing",
      "location": "Springfield",
      "period": "2012 - 2016",
      "image_index": 1,
      "details": ["Coursework: Algorithms"]
    },
    {
      "institution": "Night School",
      "degree": "Certificate",
      "location": "Springfield",
      "period": "2011",
      "image_index": 7,
      "details": []
    }
  ],
  "portfolios": [
    {"label": "Blog", "url": "medium.com/@jane"}
  ]
}"#
}

/// Skills fixture: three categories, the last with a single skill.
pub fn sample_skills_json() -> &'static str {
    r#"{
  "Analytics": {"Python": 90, "SQL": 85, "A/B Testing": 75},
  "Engineering": {"Data Pipelines": 80, "Machine Learning & AI": 70},
  "Tools": {"Tableau": 95}
}"#
}

/// Writes the complete sample content root under `root`.
pub fn write_sample_root(root: &Path) {
    let data_dir = root.join("data");
    let images_dir = root.join("assets/images");
    fs::create_dir_all(&data_dir).expect("Failed to create data dir");
    fs::create_dir_all(&images_dir).expect("Failed to create images dir");

    fs::write(data_dir.join("resume.json"), sample_resume_json())
        .expect("Failed to write resume.json");
    fs::write(data_dir.join("skills.json"), sample_skills_json())
        .expect("Failed to write skills.json");

    fs::write(images_dir.join("profile.jpeg"), TINY_JPEG).expect("Failed to write profile photo");
    fs::write(images_dir.join("nologo.jpeg"), FALLBACK_JPEG)
        .expect("Failed to write fallback logo");
    fs::write(images_dir.join("experience1.jpeg"), TINY_JPEG)
        .expect("Failed to write experience logo");
    fs::write(images_dir.join("education1.jpeg"), TINY_JPEG)
        .expect("Failed to write education logo");
}
