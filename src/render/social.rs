//! Social links, rendered once in the contact block and once in the footer

use super::escape;
use crate::content::Social;
use crate::icons::icon_markup;

/// Contact-section link: icon plus visible name.
pub fn contact_social_link(social: &Social) -> String {
    format!(
        r#"<a href="{url}" class="social-link" target="_blank" rel="noopener noreferrer" aria-label="{name}">{icon}<span class="social-link__text">{name}</span></a>"#,
        url = escape(&social.url),
        name = escape(&social.name),
        icon = icon_markup(&social.icon_key),
    ) + "\n"
}

/// Footer link: icon only, name kept for screen readers.
pub fn footer_social_link(social: &Social) -> String {
    format!(
        r#"<a href="{url}" class="footer__social-link" target="_blank" rel="noopener noreferrer" aria-label="{name}">{icon}</a>"#,
        url = escape(&social.url),
        name = escape(&social.name),
        icon = icon_markup(&social.icon_key),
    ) + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn social(key: &str) -> Social {
        Social {
            name: "GitHub".into(),
            url: "https://github.com/ana".into(),
            icon_key: key.into(),
        }
    }

    #[test]
    fn contact_link_shows_icon_and_name() {
        let html = contact_social_link(&social("github"));
        assert!(html.contains("<svg"));
        assert!(html.contains(r#"<span class="social-link__text">GitHub</span>"#));
        assert!(html.contains(r#"aria-label="GitHub""#));
    }

    #[test]
    fn unknown_icon_leaves_icon_area_empty() {
        let html = footer_social_link(&social("myspace"));
        assert!(!html.contains("<svg"));
        assert!(html.contains(r#"aria-label="GitHub"></a>"#));
    }
}
