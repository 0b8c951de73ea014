//! Experience and education card rendering.
//!
//! Cards are emitted in catalog order; no sorting, filtering, or
//! deduplication happens here.

use std::fmt::Write as _;

use super::escape_html;
use crate::models::{EducationEntry, ExperienceEntry};

/// Renders the "Experience" section with one card per entry.
#[must_use]
pub fn render_experience_section(entries: &[ExperienceEntry]) -> String {
    let mut output = String::from("<section class=\"experience\">\n<h2>Experience</h2>\n");
    for entry in entries {
        output.push_str(&render_entry_card(
            &entry.logo,
            &entry.title,
            &entry.company,
            &entry.location,
            &entry.period,
            &entry.responsibilities,
        ));
    }
    output.push_str("</section>\n");
    output
}

/// Renders the "Education" section with one card per entry.
#[must_use]
pub fn render_education_section(entries: &[EducationEntry]) -> String {
    let mut output = String::from("<section class=\"education\">\n<h2>Education</h2>\n");
    for entry in entries {
        output.push_str(&render_entry_card(
            &entry.logo,
            &entry.institution,
            &entry.degree,
            &entry.location,
            &entry.period,
            &entry.details,
        ));
    }
    output.push_str("</section>\n");
    output
}

/// Renders one card shared by both list sections.
///
/// An empty bullet list renders no `<ul>` element at all.
fn render_entry_card(
    logo_uri: &str,
    heading: &str,
    subheading: &str,
    location: &str,
    period: &str,
    bullets: &[String],
) -> String {
    let mut output = String::new();

    output.push_str("<article class=\"card entry\">\n");
    let _ = writeln!(
        output,
        "  <img class=\"entry-logo\" src=\"{}\" alt=\"{} logo\">",
        logo_uri,
        escape_html(subheading)
    );
    output.push_str("  <div class=\"entry-body\">\n");
    let _ = writeln!(output, "    <h3>{}</h3>", escape_html(heading));
    let _ = writeln!(output, "    <h4>{}</h4>", escape_html(subheading));
    let _ = writeln!(
        output,
        "    <p class=\"entry-meta\">{} | {}</p>",
        escape_html(location),
        escape_html(period)
    );

    if !bullets.is_empty() {
        output.push_str("    <ul>\n");
        for bullet in bullets {
            let _ = writeln!(output, "      <li>{}</li>", escape_html(bullet));
        }
        output.push_str("    </ul>\n");
    }

    output.push_str("  </div>\n");
    output.push_str("</article>\n");

    output
}
