//! Card fragments for skills, projects and experience entries

use super::{escape, stagger};
use crate::content::{ExperienceEntry, Project, SkillGroup};

const LIVE_ICON: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/><polyline points="15 3 21 3 21 9"/><line x1="10" y1="14" x2="21" y2="3"/></svg>"#;

const SOURCE_ICON: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22"/></svg>"#;

/// One skill card: category heading plus one tag per skill.
pub fn skill_card(index: usize, group: &SkillGroup) -> String {
    let tags: String = group
        .items
        .iter()
        .map(|s| format!(r#"<span class="skills__tag">{}</span>"#, escape(s)))
        .collect();

    format!(
        concat!(
            r#"<div class="skills__card reveal-up" style="transition-delay: {delay}">"#,
            r#"<h3 class="skills__category">{category}</h3>"#,
            r#"<div class="skills__items">{tags}</div>"#,
            "</div>\n"
        ),
        delay = stagger(index, 10),
        category = escape(&group.category),
        tags = tags,
    )
}

/// One project card. The "Live Demo" link is only emitted when the project
/// has a live URL; the "Source" link always is.
pub fn project_card(index: usize, project: &Project) -> String {
    let tech: String = project
        .tech
        .iter()
        .map(|t| format!(r#"<span class="project-card__tech-tag">{}</span>"#, escape(t)))
        .collect();

    let live = project
        .links
        .live
        .as_deref()
        .map(|url| link(url, LIVE_ICON, "Live Demo"))
        .unwrap_or_default();
    let source = link(&project.links.source, SOURCE_ICON, "Source");

    format!(
        concat!(
            r#"<article class="project-card reveal-up" data-category="{category}" style="transition-delay: {delay}">"#,
            r#"<div class="project-card__header">"#,
            r#"<h3 class="project-card__title">{title}</h3>"#,
            r#"<span class="project-card__category">{category}</span>"#,
            "</div>",
            r#"<p class="project-card__description">{description}</p>"#,
            r#"<div class="project-card__tech">{tech}</div>"#,
            r#"<div class="project-card__links">{live}{source}</div>"#,
            "</article>\n"
        ),
        category = escape(&project.category),
        delay = stagger(index, 10),
        title = escape(&project.title),
        description = escape(&project.description),
        tech = tech,
        live = live,
        source = source,
    )
}

fn link(url: &str, icon: &str, label: &str) -> String {
    format!(
        r#"<a href="{}" class="project-card__link" target="_blank" rel="noopener noreferrer">{}{}</a>"#,
        escape(url),
        icon,
        label
    )
}

/// One timeline node. A single-string description becomes one bullet.
pub fn experience_entry(index: usize, entry: &ExperienceEntry) -> String {
    let bullets: String = entry
        .description
        .bullets()
        .into_iter()
        .map(|b| format!("<li>{}</li>", escape(b)))
        .collect();
    let location = entry
        .location
        .as_deref()
        .map(|l| format!(r#"<span class="experience__location">{}</span>"#, escape(l)))
        .unwrap_or_default();

    format!(
        concat!(
            r#"<div class="experience__entry reveal-up" style="transition-delay: {delay}">"#,
            r#"<div class="experience__marker"></div>"#,
            r#"<div class="experience__content">"#,
            r#"<div class="experience__header">"#,
            r#"<h3 class="experience__role">{role}</h3>"#,
            r#"<span class="experience__period">{period}</span>"#,
            "</div>",
            r#"<div class="experience__company"><span>{company}</span>{location}</div>"#,
            r#"<ul class="experience__description">{bullets}</ul>"#,
            "</div>",
            "</div>\n"
        ),
        delay = stagger(index, 15),
        role = escape(&entry.role),
        period = escape(&entry.period),
        company = escape(&entry.company),
        location = location,
        bullets = bullets,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Description, ProjectLinks};
    use scraper::{Html, Selector};

    fn count(fragment: &str, css: &str) -> usize {
        let doc = Html::parse_fragment(fragment);
        let sel = Selector::parse(css).unwrap();
        doc.select(&sel).count()
    }

    fn project(live: Option<&str>) -> Project {
        Project {
            title: "Code RAG".into(),
            description: "Search <code>".into(),
            tech: vec!["Python".into(), "FAISS".into()],
            category: "AI".into(),
            links: ProjectLinks {
                live: live.map(str::to_string),
                source: "https://github.com/x/y".into(),
            },
        }
    }

    #[test]
    fn skill_card_has_one_tag_per_item() {
        let g = SkillGroup {
            category: "Backend".into(),
            items: vec!["Rust".into(), "SQL".into(), "gRPC".into()],
        };
        let html = skill_card(2, &g);
        assert_eq!(count(&html, ".skills__card"), 1);
        assert_eq!(count(&html, ".skills__tag"), 3);
        assert!(html.contains("transition-delay: 0.2s"));
    }

    #[test]
    fn live_link_only_when_present() {
        let with = project_card(0, &project(Some("https://demo.example")));
        let without = project_card(0, &project(None));
        assert_eq!(count(&with, ".project-card__link"), 2);
        assert!(with.contains("Live Demo"));
        assert_eq!(count(&without, ".project-card__link"), 1);
        assert!(!without.contains("Live Demo"));
        assert!(without.contains("Source"));
    }

    #[test]
    fn project_card_carries_category_and_escapes_text() {
        let html = project_card(1, &project(None));
        assert_eq!(count(&html, r#"article[data-category="AI"]"#), 1);
        assert_eq!(count(&html, ".project-card__tech-tag"), 2);
        assert!(html.contains("Search &lt;code&gt;"));
    }

    #[test]
    fn experience_bullets_follow_description_shape() {
        let mut e = ExperienceEntry {
            role: "Engineer".into(),
            company: "Acme".into(),
            location: None,
            period: "2020 - 2023".into(),
            description: Description::Single("Built things".into()),
        };
        let single = experience_entry(0, &e);
        assert_eq!(count(&single, ".experience__description li"), 1);
        assert_eq!(count(&single, ".experience__location"), 0);

        e.description = Description::Bullets(vec!["a".into(), "b".into(), "c".into()]);
        e.location = Some("Cairo".into());
        let many = experience_entry(1, &e);
        assert_eq!(count(&many, ".experience__description li"), 3);
        assert_eq!(count(&many, ".experience__location"), 1);
        assert!(many.contains("transition-delay: 0.15s"));
    }
}
