//! Profile header rendering.

use std::fmt::Write as _;

use super::escape_html;
use crate::models::PersonalInfo;

/// Renders the header card: photo, name, contact line, and summary.
///
/// The LinkedIn handle is stored scheme-less and gets its `https://` prefix
/// here.
#[must_use]
pub fn render_profile_header(personal: &PersonalInfo, photo_uri: &str) -> String {
    let mut output = String::new();

    output.push_str("<header class=\"card profile\">\n");
    let _ = writeln!(
        output,
        "  <img class=\"profile-photo\" src=\"{}\" alt=\"Portrait of {}\">",
        photo_uri,
        escape_html(&personal.name)
    );
    output.push_str("  <div class=\"profile-details\">\n");
    let _ = writeln!(output, "    <h1>{}</h1>", escape_html(&personal.name));
    let _ = writeln!(
        output,
        "    <p class=\"contact-line\"><span>{}</span> | <span>{}</span> | <span>{}</span> | \
         <a href=\"https://{}\" target=\"_blank\" rel=\"noopener\">LinkedIn</a></p>",
        escape_html(&personal.location),
        escape_html(&personal.email),
        escape_html(&personal.phone),
        escape_html(&personal.linkedin)
    );
    let _ = writeln!(
        output,
        "    <p class=\"summary\">{}</p>",
        escape_html(&personal.summary)
    );
    output.push_str("  </div>\n");
    output.push_str("</header>\n");

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_personal() -> PersonalInfo {
        PersonalInfo {
            name: "Jane Doe".to_string(),
            location: "Berlin".to_string(),
            email: "jane@example.com".to_string(),
            phone: "+49 30 1234".to_string(),
            linkedin: "linkedin.com/in/janedoe".to_string(),
            summary: "Data person.".to_string(),
        }
    }

    #[test]
    fn test_header_contains_contact_fields() {
        let html = render_profile_header(&sample_personal(), "data:image/jpeg;base64,AAAA");

        assert!(html.contains("<h1>Jane Doe</h1>"));
        assert!(html.contains("Berlin"));
        assert!(html.contains("jane@example.com"));
        assert!(html.contains("+49 30 1234"));
        assert!(html.contains("href=\"https://linkedin.com/in/janedoe\""));
        assert!(html.contains("src=\"data:image/jpeg;base64,AAAA\""));
        assert!(html.contains("Data person."));
    }

    #[test]
    fn test_header_escapes_text() {
        let mut personal = sample_personal();
        personal.name = "Jane <script> Doe".to_string();
        personal.summary = "Data & things".to_string();

        let html = render_profile_header(&personal, "data:image/jpeg;base64,AAAA");

        assert!(html.contains("Jane &lt;script&gt; Doe"));
        assert!(html.contains("Data &amp; things"));
        assert!(!html.contains("<script>"));
    }
}
