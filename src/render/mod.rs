//! Markup rendering for portfolio content.
//!
//! Every function here is pure: it takes a content entity and returns the
//! markup fragment for it. Inserting fragments into a page is the job of
//! [`crate::skeleton`].

pub mod cards;
pub mod social;

use crate::content::Portfolio;

pub use cards::{experience_entry, project_card, skill_card};
pub use social::{contact_social_link, footer_social_link};

/// All fragments produced from one portfolio, keyed by the container that
/// receives them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fragments {
    /// Inner markup of `skillsGrid`
    pub skills: String,
    /// Inner markup of `projectsGrid`
    pub projects: String,
    /// Inner markup of `experienceTimeline`
    pub experience: String,
    /// Inner markup of `contactSocials`
    pub contact_socials: String,
    /// Inner markup of `footerSocials`
    pub footer_socials: String,
}

/// Render every collection in list order. Nothing is sorted, filtered or
/// deduplicated.
pub fn render_fragments(portfolio: &Portfolio) -> Fragments {
    let skills = portfolio
        .skills
        .iter()
        .enumerate()
        .map(|(i, g)| skill_card(i, g))
        .collect();
    let projects = portfolio
        .projects
        .iter()
        .enumerate()
        .map(|(i, p)| project_card(i, p))
        .collect();
    let experience = portfolio
        .experience
        .iter()
        .enumerate()
        .map(|(i, e)| experience_entry(i, e))
        .collect();
    let socials = &portfolio.contact.socials;

    Fragments {
        skills,
        projects,
        experience,
        contact_socials: socials.iter().map(contact_social_link).collect(),
        footer_socials: socials.iter().map(footer_social_link).collect(),
    }
}

/// Escape text for use in element content or a quoted attribute value.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `transition-delay` value for the n-th card with a per-card step in
/// hundredths of a second.
fn stagger(index: usize, step_centis: usize) -> String {
    let centis = index * step_centis;
    let secs = format!("{}.{:02}", centis / 100, centis % 100);
    let trimmed = secs.trim_end_matches('0').trim_end_matches('.');
    format!("{}s", trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_handles_markup_characters() {
        assert_eq!(escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
        assert_eq!(escape("Sass/SCSS"), "Sass/SCSS");
    }

    #[test]
    fn stagger_formats_like_css() {
        assert_eq!(stagger(0, 10), "0s");
        assert_eq!(stagger(1, 10), "0.1s");
        assert_eq!(stagger(3, 15), "0.45s");
        assert_eq!(stagger(10, 10), "1s");
    }

    #[test]
    fn sample_fragments_keep_counts() {
        let p = Portfolio::sample();
        let f = render_fragments(&p);
        assert_eq!(f.skills.matches("skills__card ").count(), 4);
        assert_eq!(f.projects.matches("<article").count(), 4);
        assert!(f.experience.is_empty());
        assert_eq!(f.contact_socials.matches("class=\"social-link\"").count(), 6);
        assert_eq!(f.footer_socials.matches("footer__social-link").count(), 6);
    }
}
