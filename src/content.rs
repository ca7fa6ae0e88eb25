//! Content store: the portfolio record rendered into the page.
//!
//! A [`Portfolio`] is built once (from a TOML or JSON file, or from
//! [`Portfolio::sample`]) and then only read. Nothing is looked up by key;
//! every collection is iterated in the order it was written.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::icons::IconKey;
use crate::{Error, Result};

/// The complete portfolio record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub owner: Owner,
    pub contact: Contact,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
}

/// Owner profile shown in the hero and about sections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub socials: Vec<Social>,
}

/// A social profile link. `icon_key` selects the icon; unknown keys render
/// without one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Social {
    pub name: String,
    pub url: String,
    #[serde(alias = "iconKey")]
    pub icon_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    /// Must match a filter value of the page for the project to be reachable
    /// under anything but "all"
    pub category: String,
    pub links: ProjectLinks,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live: Option<String>,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub description: Description,
}

/// Experience description: one paragraph or a list of bullet points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Single(String),
    Bullets(Vec<String>),
}

impl Default for Description {
    fn default() -> Self {
        Description::Bullets(Vec::new())
    }
}

impl Description {
    /// Bullet items in display order; a single string is one bullet.
    pub fn bullets(&self) -> Vec<&str> {
        match self {
            Description::Single(s) => vec![s.as_str()],
            Description::Bullets(items) => items.iter().map(String::as_str).collect(),
        }
    }
}

/// A non-fatal problem found by [`Portfolio::check`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentWarning {
    /// A social entry references an icon that does not exist
    UnknownIcon { social: String, key: String },
    /// A project category no filter control selects
    UnfilteredCategory { project: String, category: String },
    /// A link that does not parse as an absolute URL
    InvalidUrl { field: String, url: String },
}

impl fmt::Display for ContentWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentWarning::UnknownIcon { social, key } => {
                write!(f, "social `{}` uses unknown icon key `{}`", social, key)
            }
            ContentWarning::UnfilteredCategory { project, category } => write!(
                f,
                "project `{}` has category `{}` which no filter selects",
                project, category
            ),
            ContentWarning::InvalidUrl { field, url } => {
                write!(f, "{} is not a valid URL: `{}`", field, url)
            }
        }
    }
}

impl Portfolio {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load a portfolio from disk, choosing the format by file extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::ConfigError(format!("failed to read {}: {}", path.display(), e))
        })?;
        let parsed = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&text),
            Some("json") => Self::from_json_str(&text),
            other => {
                return Err(Error::ConfigError(format!(
                    "unsupported content format {:?} for {}",
                    other.unwrap_or(""),
                    path.display()
                )))
            }
        };
        parsed.map_err(|e| match e {
            Error::ConfigError(msg) => Error::ConfigError(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Other(e.to_string()))
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Distinct project categories in first-seen order
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for p in &self.projects {
            if !out.contains(&p.category.as_str()) {
                out.push(&p.category);
            }
        }
        out
    }

    /// Report content that would render silently wrong: unknown icons,
    /// categories outside `filters`, and links that are not absolute URLs.
    ///
    /// An empty `filters` slice skips the category check.
    pub fn check(&self, filters: &[String]) -> Vec<ContentWarning> {
        let mut warnings = Vec::new();

        for social in &self.contact.socials {
            if social.icon_key.parse::<IconKey>().is_err() {
                warnings.push(ContentWarning::UnknownIcon {
                    social: social.name.clone(),
                    key: social.icon_key.clone(),
                });
            }
            check_url(&mut warnings, format!("socials.{}.url", social.name), &social.url);
        }

        for project in &self.projects {
            if !filters.is_empty() && !filters.iter().any(|f| f == &project.category) {
                warnings.push(ContentWarning::UnfilteredCategory {
                    project: project.title.clone(),
                    category: project.category.clone(),
                });
            }
            if let Some(live) = &project.links.live {
                check_url(&mut warnings, format!("projects.{}.links.live", project.title), live);
            }
            check_url(
                &mut warnings,
                format!("projects.{}.links.source", project.title),
                &project.links.source,
            );
        }

        warnings
    }

    /// The sample portfolio used when no content file is given.
    pub fn sample() -> Self {
        let socials = [
            ("GitHub", "https://github.com/mido1732002003", "github"),
            ("LinkedIn", "https://linkedin.com/in/yourusername", "linkedin"),
            ("Facebook", "https://facebook.com/yourusername", "facebook"),
            ("Instagram", "https://instagram.com/yourusername", "instagram"),
            ("WhatsApp", "https://wa.me/yourphonenumber", "whatsapp"),
            ("Telegram", "https://t.me/yourusername", "telegram"),
        ]
        .into_iter()
        .map(|(name, url, key)| Social {
            name: name.into(),
            url: url.into(),
            icon_key: key.into(),
        })
        .collect();

        Portfolio {
            owner: Owner {
                name: "Mohamed Abdallah".into(),
                role: "Full Stack & AI Engineer".into(),
                tagline: "Building intelligent digital solutions that bridge creativity and technology.".into(),
                location: "Your City, Country".into(),
                summary: "I'm a passionate full-stack developer and AI engineer with expertise in crafting \
                          modern web applications and intelligent systems. I specialize in creating responsive, \
                          performant, and user-centric solutions using cutting-edge technologies. My focus is on \
                          combining traditional software development with AI capabilities to build innovative products."
                    .into(),
            },
            contact: Contact {
                email: "your.email@example.com".into(),
                phone: "+1 (555) 000-0000".into(),
                socials,
            },
            skills: vec![
                group("Frontend", &["HTML5", "CSS3", "JavaScript (ES6+)", "TypeScript", "React", "Vue.js", "Sass/SCSS", "Tailwind CSS", "Framer Motion"]),
                group("Backend", &["Node.js", "Express.js", "Python", "Django", "FastAPI", "PostgreSQL", "MongoDB", "REST APIs", "GraphQL"]),
                group("AI & Machine Learning", &["LangChain", "Mistral AI", "OpenAI API", "RAG Systems", "ChromaDB", "FAISS", "Computer Vision", "NLP", "Embeddings"]),
                group("Tools & Workflow", &["Git", "Docker", "AWS", "Vercel", "Railway", "Figma", "Jest", "CI/CD", "Agile/Scrum"]),
            ],
            projects: vec![
                project(
                    "AI Customer Support Chatbot",
                    "A modern customer support chatbot with RAG architecture. Features a React chat UI, Mistral AI \
                     integration for intelligent responses, and source citations showing which documents were used \
                     for each answer.",
                    &["React", "Node.js", "Express", "Mistral AI", "RAG"],
                    Some("https://ai-chatbot-production-16af.up.railway.app/"),
                    "https://github.com/mido1732002003/AI-chatbot",
                ),
                project(
                    "Face Recognition Service",
                    "1:N face identification system with multi-face enrollment, quality filtering, and optional \
                     liveness detection. Uses FAISS for vector indexing with GPU support and includes a web UI for \
                     easy management.",
                    &["Python", "FastAPI", "PostgreSQL", "FAISS", "InsightFace"],
                    None,
                    "https://github.com/mido1732002003/face-recognition-service",
                ),
                project(
                    "Code RAG",
                    "Intelligent code search and understanding tool with hybrid keyword and semantic search. \
                     AST-based code chunking for better context, supports Python, JavaScript, TypeScript, Java, \
                     C++ and more.",
                    &["Python", "FastAPI", "ChromaDB", "Mistral AI", "HTMX"],
                    None,
                    "https://github.com/mido1732002003/code-rag",
                ),
                project(
                    "Image Caption Generator",
                    "An intelligent application that generates descriptive captions for images using the \
                     Qwen3-VL-30B-A3B-Instruct model. Features a modern UI and seamless integration with Hugging \
                     Face for state-of-the-art vision-language capabilities.",
                    &["Python", "Hugging Face", "Qwen3-VL", "Railway", "Vercel"],
                    Some("https://reasonable-success-production-c17a.up.railway.app/"),
                    "https://github.com/mido1732002003/ICG",
                ),
            ],
            experience: Vec::new(),
        }
    }
}

fn check_url(warnings: &mut Vec<ContentWarning>, field: String, raw: &str) {
    if url::Url::parse(raw).is_err() {
        warnings.push(ContentWarning::InvalidUrl {
            field,
            url: raw.to_string(),
        });
    }
}

fn group(category: &str, items: &[&str]) -> SkillGroup {
    SkillGroup {
        category: category.into(),
        items: items.iter().map(|s| s.to_string()).collect(),
    }
}

fn project(title: &str, description: &str, tech: &[&str], live: Option<&str>, source: &str) -> Project {
    Project {
        title: title.into(),
        description: description.into(),
        tech: tech.iter().map(|s| s.to_string()).collect(),
        category: "AI".into(),
        links: ProjectLinks {
            live: live.map(str::to_string),
            source: source.into(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_toml_fills_missing_text_with_empty() {
        let text = r#"
            [owner]
            name = "Ada"

            [contact]
            email = "ada@example.com"

            [[experience]]
            company = "Engines Ltd"
        "#;
        let p = Portfolio::from_toml_str(text).unwrap();
        assert_eq!(p.owner.name, "Ada");
        assert_eq!(p.owner.location, "");
        assert_eq!(p.owner.summary, "");
        assert_eq!(p.contact.phone, "");
        assert!(p.contact.socials.is_empty());
        assert_eq!(p.experience[0].role, "");
        assert!(p.experience[0].description.bullets().is_empty());
    }

    #[test]
    fn sample_matches_expected_shape() {
        let p = Portfolio::sample();
        assert_eq!(p.contact.socials.len(), 6);
        assert_eq!(p.skills.len(), 4);
        assert!(p.skills.iter().all(|g| g.items.len() == 9));
        assert_eq!(p.projects.len(), 4);
        assert!(p.experience.is_empty());
        assert_eq!(p.categories(), vec!["AI"]);
    }

    #[test]
    fn sample_passes_checks() {
        let filters = vec!["all".to_string(), "AI".to_string()];
        assert!(Portfolio::sample().check(&filters).is_empty());
    }

    #[test]
    fn description_accepts_string_or_list() {
        let json = r#"[
            {"role":"R","company":"C","period":"P","description":"one"},
            {"role":"R","company":"C","location":"L","period":"P","description":["a","b","c"]}
        ]"#;
        let entries: Vec<ExperienceEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries[0].description.bullets(), vec!["one"]);
        assert_eq!(entries[1].description.bullets().len(), 3);
        assert_eq!(entries[1].location.as_deref(), Some("L"));
    }

    #[test]
    fn toml_accepts_missing_optionals_and_camel_icon_key() {
        let src = r#"
            [owner]
            name = "Ana"
            role = "Dev"
            tagline = "t"
            location = "here"
            summary = "s"

            [contact]
            email = "ana@x.com"
            phone = "1"
            socials = [{ name = "GitHub", url = "https://github.com/ana", iconKey = "github" }]

            [[projects]]
            title = "P"
            description = "d"
            category = "Web"
            links = { source = "https://github.com/ana/p" }
        "#;
        let p = Portfolio::from_toml_str(src).unwrap();
        assert_eq!(p.contact.socials[0].icon_key, "github");
        assert!(p.projects[0].links.live.is_none());
        assert!(p.projects[0].tech.is_empty());
        assert!(p.skills.is_empty());
        assert!(p.experience.is_empty());
    }

    #[test]
    fn check_reports_each_problem() {
        let mut p = Portfolio::sample();
        p.contact.socials[0].icon_key = "myspace".into();
        p.projects[1].category = "Ai".into();
        p.projects[2].links.source = "not a url".into();

        let filters = vec!["all".to_string(), "AI".to_string()];
        let warnings = p.check(&filters);
        assert_eq!(warnings.len(), 3);
        assert!(matches!(&warnings[0], ContentWarning::UnknownIcon { key, .. } if key == "myspace"));
        assert!(matches!(&warnings[1], ContentWarning::UnfilteredCategory { category, .. } if category == "Ai"));
        assert!(matches!(&warnings[2], ContentWarning::InvalidUrl { url, .. } if url == "not a url"));
    }

    #[test]
    fn load_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.yaml");
        std::fs::write(&path, "owner: {}").unwrap();
        let err = Portfolio::load(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn toml_output_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.toml");
        std::fs::write(&path, Portfolio::sample().to_toml_string().unwrap()).unwrap();
        assert_eq!(Portfolio::load(&path).unwrap(), Portfolio::sample());
    }
}
