//! Full-page assembly.
//!
//! Composes the section generators into one self-contained HTML document:
//! all images are inline data URIs and the chart data is embedded as JSON,
//! so the only external reference is the Plotly.js bundle.

use std::fmt::Write as _;

use serde_json::Value;

use super::{
    cards, escape_html, header,
    radar::{build_series, plotly_figure},
};
use crate::constants::PLOTLY_CDN;
use crate::models::{PortfolioLink, Resume, SkillCategory};

/// How the stylesheet reaches the document.
#[derive(Debug, Clone, Copy)]
pub enum Stylesheet<'a> {
    /// `<link>` to a served path (the development server).
    Linked(&'a str),
    /// `<style>` block with the given CSS (standalone export).
    Inline(&'a str),
}

/// Renders the complete resume page.
///
/// Section order is fixed: header card, then a two-column body (left:
/// experience and education; right: skill charts and portfolio links), then
/// the footer. Every list follows catalog order.
#[must_use]
pub fn render_page(resume: &Resume, title_suffix: &str, stylesheet: Stylesheet<'_>) -> String {
    let mut output = String::new();

    output.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    output.push_str("<meta charset=\"utf-8\">\n");
    output.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    let _ = writeln!(
        output,
        "<title>{} - {}</title>",
        escape_html(&resume.personal.name),
        escape_html(title_suffix)
    );
    match stylesheet {
        Stylesheet::Linked(href) => {
            let _ = writeln!(output, "<link rel=\"stylesheet\" href=\"{href}\">");
        }
        Stylesheet::Inline(css) => {
            let _ = writeln!(output, "<style>\n{css}\n</style>");
        }
    }
    let _ = writeln!(output, "<script src=\"{PLOTLY_CDN}\"></script>");
    output.push_str("</head>\n<body>\n<main class=\"container\">\n");

    output.push_str(&header::render_profile_header(
        &resume.personal,
        &resume.profile_photo,
    ));

    output.push_str("<div class=\"columns\">\n<div class=\"column-main\">\n");
    output.push_str(&cards::render_experience_section(&resume.experience));
    output.push_str(&cards::render_education_section(&resume.education));
    output.push_str("</div>\n<div class=\"column-side\">\n");
    output.push_str(&render_skills_section(&resume.skills));
    output.push_str(&render_portfolio_section(&resume.portfolios));
    output.push_str("</div>\n</div>\n");

    output.push_str("<footer>\n<hr>\n<p>Created with Rust, Axum and Plotly</p>\n</footer>\n");
    output.push_str("</main>\n");

    output.push_str(&render_radar_script(&resume.skills));
    output.push_str("</body>\n</html>\n");

    output
}

/// Renders the "Skills" section: one chart container per category.
fn render_skills_section(categories: &[SkillCategory]) -> String {
    let mut output = String::from("<section class=\"skills\">\n<h2>Skills</h2>\n");
    output.push_str("<div class=\"card chart-stack\">\n");
    for index in 0..categories.len() {
        let _ = writeln!(output, "  <div id=\"radar-{index}\" class=\"radar-chart\"></div>");
    }
    output.push_str("</div>\n</section>\n");
    output
}

/// Renders the "Portfolios" section as a labelled link list.
fn render_portfolio_section(links: &[PortfolioLink]) -> String {
    let mut output = String::from("<section class=\"portfolios\">\n<h2>Portfolios</h2>\n");
    output.push_str("<div class=\"card\">\n");
    for link in links {
        let _ = writeln!(
            output,
            "  <p class=\"portfolio-link\"><span>{}</span> \
             <a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a></p>",
            escape_html(&link.label),
            escape_html(&link.href()),
            escape_html(&link.url)
        );
    }
    output.push_str("</div>\n</section>\n");
    output
}

/// Renders the script block that instantiates one Plotly chart per category.
fn render_radar_script(categories: &[SkillCategory]) -> String {
    let figures: Vec<Value> = categories
        .iter()
        .map(|category| plotly_figure(&build_series(category)))
        .collect();

    // Serializing plain values cannot fail; fall back to no charts if it
    // somehow does rather than panicking in a handler.
    let json = serde_json::to_string(&figures).unwrap_or_else(|_| "[]".to_string());
    // "</" would end the script element early if it appeared in a label.
    let json = json.replace("</", "<\\/");

    format!(
        "<script>\nconst radarFigures = {json};\nradarFigures.forEach((figure, index) => {{\n  \
         Plotly.newPlot(`radar-${{index}}`, figure.data, figure.layout, figure.config);\n}});\n</script>\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EducationEntry, ExperienceEntry, PersonalInfo, Skill};

    fn sample_resume() -> Resume {
        Resume {
            personal: PersonalInfo {
                name: "Jane Doe".to_string(),
                location: "Berlin".to_string(),
                email: "jane@example.com".to_string(),
                phone: "+49 30 1234".to_string(),
                linkedin: "linkedin.com/in/janedoe".to_string(),
                summary: "Data person.".to_string(),
            },
            experience: vec![ExperienceEntry {
                company: "Acme".to_string(),
                title: "Engineer".to_string(),
                location: "Springfield".to_string(),
                period: "2020 - Present".to_string(),
                image_index: 1,
                responsibilities: vec!["Built things".to_string()],
                logo: "data:image/jpeg;base64,BBBB".to_string(),
            }],
            education: vec![EducationEntry {
                institution: "State University".to_string(),
                degree: "BSc Computing".to_string(),
                location: "Springfield".to_string(),
                period: "2012 - 2016".to_string(),
                image_index: 1,
                details: vec![],
                logo: "data:image/jpeg;base64,CCCC".to_string(),
            }],
            portfolios: vec![PortfolioLink {
                label: "Blog".to_string(),
                url: "medium.com/@jane".to_string(),
            }],
            skills: vec![
                SkillCategory {
                    name: "Analytics".to_string(),
                    skills: vec![
                        Skill {
                            name: "Python".to_string(),
                            score: 90,
                        },
                        Skill {
                            name: "SQL".to_string(),
                            score: 85,
                        },
                    ],
                },
                SkillCategory {
                    name: "Engineering".to_string(),
                    skills: vec![Skill {
                        name: "Rust".to_string(),
                        score: 70,
                    }],
                },
            ],
            profile_photo: "data:image/jpeg;base64,AAAA".to_string(),
        }
    }

    #[test]
    fn test_page_contains_every_section_in_order() {
        let html = render_page(
            &sample_resume(),
            "Interactive Resume",
            Stylesheet::Linked("/static/style.css"),
        );

        assert!(html.contains("<title>Jane Doe - Interactive Resume</title>"));

        let header = html.find("<h1>Jane Doe</h1>").unwrap();
        let experience = html.find("<h2>Experience</h2>").unwrap();
        let education = html.find("<h2>Education</h2>").unwrap();
        let skills = html.find("<h2>Skills</h2>").unwrap();
        let portfolios = html.find("<h2>Portfolios</h2>").unwrap();
        let footer = html.find("<footer>").unwrap();
        assert!(header < experience);
        assert!(experience < education);
        assert!(skills < portfolios);
        assert!(portfolios < footer);
    }

    #[test]
    fn test_page_has_one_chart_container_per_category() {
        let html = render_page(
            &sample_resume(),
            "Interactive Resume",
            Stylesheet::Linked("/static/style.css"),
        );

        assert!(html.contains("id=\"radar-0\""));
        assert!(html.contains("id=\"radar-1\""));
        assert!(!html.contains("id=\"radar-2\""));
        assert!(html.contains("const radarFigures ="));
        assert!(html.contains("scatterpolar"));
    }

    #[test]
    fn test_page_links_portfolio_with_https() {
        let html = render_page(
            &sample_resume(),
            "Interactive Resume",
            Stylesheet::Linked("/static/style.css"),
        );

        assert!(html.contains("href=\"https://medium.com/@jane\""));
    }

    #[test]
    fn test_linked_vs_inline_stylesheet() {
        let resume = sample_resume();

        let linked = render_page(&resume, "Resume", Stylesheet::Linked("/static/style.css"));
        assert!(linked.contains("<link rel=\"stylesheet\" href=\"/static/style.css\">"));

        let inline = render_page(&resume, "Resume", Stylesheet::Inline("body { margin: 0; }"));
        assert!(inline.contains("<style>\nbody { margin: 0; }\n</style>"));
        assert!(!inline.contains("<link rel=\"stylesheet\""));
    }

    #[test]
    fn test_script_json_cannot_terminate_script_element() {
        let mut resume = sample_resume();
        resume.skills[0].skills[0].name = "</script><script>alert(1)".to_string();

        let html = render_page(&resume, "Resume", Stylesheet::Linked("/static/style.css"));
        assert!(!html.contains("</script><script>alert(1)"));
    }
}
