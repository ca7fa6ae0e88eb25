//! Site build: content store in, finished page out.
//!
//! A build is one linear pass: check the content, make sure the skeleton has
//! every container, render the fragments, fill the containers and write the
//! page. The page is only written once every step succeeded.

use std::path::{Path, PathBuf};

use chrono::Datelike;
use sha2::{Digest, Sha256};

use crate::content::{ContentWarning, Portfolio};
use crate::render::render_fragments;
use crate::skeleton::Skeleton;
use crate::{Error, Result};

/// Ids the skeleton must provide for a build to succeed
pub const REQUIRED_CONTAINERS: &[&str] = &[
    "heroName",
    "heroRole",
    "heroTagline",
    "aboutSummary",
    "contactEmail",
    "skillsGrid",
    "projectsGrid",
    "experienceTimeline",
    "contactSocials",
    "footerSocials",
    "footerYear",
];

/// Configuration for a site build
///
/// Every field maps onto a `folio build` flag. The defaults build the sample
/// portfolio into the built-in skeleton.
///
/// ```
/// let cfg = folio::BuildConfig::default();
/// assert!(cfg.content.is_none());
/// assert_eq!(cfg.output, std::path::PathBuf::from("dist/index.html"));
/// ```
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Portfolio file (`.toml` or `.json`); `None` uses the sample portfolio
    pub content: Option<PathBuf>,
    /// Page skeleton; `None` uses the built-in one
    pub skeleton: Option<PathBuf>,
    /// Where the finished page is written
    pub output: PathBuf,
    /// Footer year; `None` uses the current year
    pub year: Option<i32>,
    /// Treat content warnings as errors
    pub strict: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content: None,
            skeleton: None,
            output: PathBuf::from("dist/index.html"),
            year: None,
            strict: false,
        }
    }
}

impl BuildConfig {
    pub fn load_portfolio(&self) -> Result<Portfolio> {
        match &self.content {
            Some(path) => Portfolio::load(path),
            None => Ok(Portfolio::sample()),
        }
    }

    pub fn load_skeleton(&self) -> Result<Skeleton> {
        match &self.skeleton {
            Some(path) => Skeleton::load(path),
            None => Ok(Skeleton::builtin()),
        }
    }

    pub fn resolved_year(&self) -> i32 {
        self.year.unwrap_or_else(|| chrono::Local::now().year())
    }
}

/// Summary of a finished build
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub output: PathBuf,
    pub bytes: usize,
    /// Hex SHA-256 of the written page
    pub digest: String,
    pub skills: usize,
    pub projects: usize,
    pub experience: usize,
    pub socials: usize,
    pub warnings: Vec<ContentWarning>,
}

/// Fill `skeleton` with the rendered `portfolio` and return the page.
pub fn assemble(portfolio: &Portfolio, mut skeleton: Skeleton, year: i32) -> Result<String> {
    skeleton.require(REQUIRED_CONTAINERS)?;

    let owner = &portfolio.owner;
    skeleton.set_text("heroName", &owner.name)?;
    skeleton.set_text("heroRole", &owner.role)?;
    skeleton.set_text("heroTagline", &owner.tagline)?;
    skeleton.set_text("aboutSummary", &owner.summary)?;

    let email = &portfolio.contact.email;
    skeleton.set_attr("contactEmail", "href", &format!("mailto:{}", email))?;
    skeleton.set_text("contactEmail", email)?;

    let fragments = render_fragments(portfolio);
    skeleton.set_inner_html("skillsGrid", &fragments.skills)?;
    skeleton.set_inner_html("projectsGrid", &fragments.projects)?;
    skeleton.set_inner_html("experienceTimeline", &fragments.experience)?;
    skeleton.set_inner_html("contactSocials", &fragments.contact_socials)?;
    skeleton.set_inner_html("footerSocials", &fragments.footer_socials)?;

    skeleton.set_text("footerYear", &year.to_string())?;

    Ok(skeleton.into_html())
}

/// Check `portfolio` against the filter values of `skeleton`, logging each
/// warning.
pub fn check(portfolio: &Portfolio, skeleton: &Skeleton) -> Result<Vec<ContentWarning>> {
    let filters = skeleton.filter_values()?;
    let warnings = portfolio.check(&filters);
    for w in &warnings {
        log::warn!("{}", w);
    }
    Ok(warnings)
}

/// Run a full build as described by `config`.
pub fn build(config: &BuildConfig) -> Result<BuildReport> {
    let portfolio = config.load_portfolio()?;
    let skeleton = config.load_skeleton()?;

    let warnings = check(&portfolio, &skeleton)?;
    if config.strict && !warnings.is_empty() {
        return Err(Error::ContentWarnings(warnings));
    }

    let page = assemble(&portfolio, skeleton, config.resolved_year())?;
    write_page(&config.output, &page)?;

    let report = BuildReport {
        output: config.output.clone(),
        bytes: page.len(),
        digest: digest(&page),
        skills: portfolio.skills.len(),
        projects: portfolio.projects.len(),
        experience: portfolio.experience.len(),
        socials: portfolio.contact.socials.len(),
        warnings,
    };
    log::info!(
        "built {} ({} bytes, sha256 {}): {} skill groups, {} projects, {} experience entries, {} socials",
        report.output.display(),
        report.bytes,
        &report.digest[..12],
        report.skills,
        report.projects,
        report.experience,
        report.socials
    );
    Ok(report)
}

/// Hex SHA-256 of a page
pub fn digest(page: &str) -> String {
    hex::encode(Sha256::digest(page.as_bytes()))
}

fn write_page(path: &Path, page: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, page)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assemble_fills_owner_fields() {
        let page = assemble(&Portfolio::sample(), Skeleton::builtin(), 2026).unwrap();
        assert!(page.contains(r#"id="heroName">Mohamed Abdallah</h1>"#));
        assert!(page.contains(r#"href="mailto:your.email@example.com">your.email@example.com</a>"#));
        assert!(page.contains(r#"<span id="footerYear">2026</span>"#));
        assert!(page.contains("Full Stack &amp; AI Engineer"));
    }

    #[test]
    fn assemble_stops_before_touching_a_skeleton_without_containers() {
        let html = Skeleton::builtin().into_html().replace(r#"id="projectsGrid""#, "");
        let err = assemble(&Portfolio::sample(), Skeleton::new(html), 2026).unwrap_err();
        assert!(matches!(err, Error::MissingContainer(id) if id == "projectsGrid"));
    }

    #[test]
    fn digest_is_stable() {
        let a = assemble(&Portfolio::sample(), Skeleton::builtin(), 2026).unwrap();
        let b = assemble(&Portfolio::sample(), Skeleton::builtin(), 2026).unwrap();
        assert_eq!(digest(&a), digest(&b));
        assert_eq!(digest(&a).len(), 64);
    }

    #[test]
    fn default_config_uses_current_year() {
        let cfg = BuildConfig::default();
        assert!(cfg.resolved_year() >= 2024);
        let cfg = BuildConfig {
            year: Some(1999),
            ..Default::default()
        };
        assert_eq!(cfg.resolved_year(), 1999);
    }
}
