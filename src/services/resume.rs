//! Resume loading and validation.
//!
//! This service reads the two JSON data files, validates the skills document,
//! and attaches every image as an encoded data URI. It runs exactly once at
//! startup; any failure here is fatal and the error chain names the file that
//! caused it.

use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::constants::{
    DATA_DIR, EDUCATION_LOGO_PREFIX, EXPERIENCE_LOGO_PREFIX, FALLBACK_LOGO, IMAGES_DIR,
    PROFILE_IMAGE, RESUME_FILE, SKILLS_FILE,
};
use crate::models::{Resume, Skill, SkillCategory, MAX_SCORE};
use crate::services::images;

/// Service that assembles a [`Resume`] from a content root directory.
pub struct ResumeService;

impl ResumeService {
    /// Loads the complete resume from a content root.
    ///
    /// The root must contain `data/resume.json`, `data/skills.json`, and an
    /// `assets/images/` directory with at least the profile photo and the
    /// shared placeholder logo. Per-entry logo files are optional; a missing
    /// one silently resolves to the placeholder.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending path if either JSON file is
    /// missing or malformed, a skills category is empty, a score is out of
    /// range, or a required image is missing.
    pub fn load(root: &Path) -> Result<Resume> {
        let data_dir = root.join(DATA_DIR);
        let images_dir = root.join(IMAGES_DIR);

        let mut resume = Self::load_resume_file(&data_dir.join(RESUME_FILE))?;
        resume.skills = Self::load_skills_file(&data_dir.join(SKILLS_FILE))?;

        // The placeholder must exist even when every entry has its own logo,
        // since any entry may resolve to it.
        let fallback = images_dir.join(FALLBACK_LOGO);
        if !fallback.exists() {
            bail!("Required placeholder logo missing: {}", fallback.display());
        }

        resume.profile_photo = images::encode_data_uri(&images_dir.join(PROFILE_IMAGE))
            .context("Profile photo is a required asset")?;

        for entry in &mut resume.experience {
            let path = images::resolve_logo(&images_dir, EXPERIENCE_LOGO_PREFIX, entry.image_index);
            entry.logo = images::encode_data_uri(&path)?;
        }
        for entry in &mut resume.education {
            let path = images::resolve_logo(&images_dir, EDUCATION_LOGO_PREFIX, entry.image_index);
            entry.logo = images::encode_data_uri(&path)?;
        }

        Ok(resume)
    }

    /// Reads and parses the resume data file.
    fn load_resume_file(path: &Path) -> Result<Resume> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read resume data file: {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse resume data file: {}", path.display()))
    }

    /// Reads, parses, and validates the skills document.
    fn load_skills_file(path: &Path) -> Result<Vec<SkillCategory>> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read skills file: {}", path.display()))?;

        let document: Value = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse skills file: {}", path.display()))?;

        Self::skills_from_document(&document)
            .with_context(|| format!("Invalid skills file: {}", path.display()))
    }

    /// Converts the skills document into ordered categories.
    ///
    /// The document is an object mapping category names to objects mapping
    /// skill names to integer scores. Key order in the document is preserved
    /// in the returned categories and their skills.
    fn skills_from_document(document: &Value) -> Result<Vec<SkillCategory>> {
        let categories = document
            .as_object()
            .context("skills document must be a JSON object of categories")?;

        let mut result = Vec::with_capacity(categories.len());
        for (name, value) in categories {
            let entries = value.as_object().with_context(|| {
                format!("category \"{name}\" must be an object mapping skills to scores")
            })?;
            if entries.is_empty() {
                bail!("category \"{name}\" has no skills");
            }

            let mut skills = Vec::with_capacity(entries.len());
            for (skill, score) in entries {
                let score = score.as_u64().with_context(|| {
                    format!("score for \"{skill}\" in \"{name}\" must be a non-negative integer")
                })?;
                if score > u64::from(MAX_SCORE) {
                    bail!("score for \"{skill}\" in \"{name}\" exceeds {MAX_SCORE}");
                }
                skills.push(Skill {
                    name: skill.clone(),
                    score: score as u32,
                });
            }

            result.push(SkillCategory {
                name: name.clone(),
                skills,
            });
        }

        Ok(result)
    }
}
