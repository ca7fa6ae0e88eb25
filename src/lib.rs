//! Folio
//!
//! A static portfolio site builder. A single [`Portfolio`] record (owner
//! profile, contact details, skills, projects, experience) is rendered into
//! the containers of a fixed HTML page skeleton, and the page's interactive
//! behaviour can be driven headlessly through a [`PageSession`].
//!
//! # Features
//!
//! - **Typed content**: the portfolio is plain serde data, loaded from TOML or
//!   JSON and never mutated after loading
//! - **Pure rendering**: one `(entity) -> markup` function per entity kind,
//!   followed by a single insertion step
//! - **Headless page model**: navigation highlighting, mobile menu, scroll
//!   reveal, contact form validation and project filtering as explicit state
//!   machines with cancellable timed transitions
//!
//! # Example
//!
//! ```no_run
//! use folio::{BuildConfig, Portfolio, Skeleton};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Render into a string
//! let page = folio::site::assemble(&Portfolio::sample(), Skeleton::builtin(), 2026)?;
//! assert!(page.contains("projectsGrid"));
//!
//! // Or run a whole build to disk
//! let report = folio::build(&BuildConfig {
//!     output: "public/index.html".into(),
//!     ..Default::default()
//! })?;
//! println!("wrote {} bytes", report.bytes);
//! # Ok(())
//! # }
//! ```

pub mod content;
pub mod error;
pub mod icons;
pub mod interact;
pub mod render;
pub mod session;
pub mod site;
pub mod skeleton;

pub use content::{ContentWarning, Description, Portfolio};
pub use error::{Error, Result};
pub use icons::IconKey;
pub use session::{PageSession, SessionConfig};
pub use site::{build, BuildConfig, BuildReport};
pub use skeleton::Skeleton;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_build_config() {
        let config = BuildConfig::default();
        assert!(config.skeleton.is_none());
        assert!(!config.strict);
    }

    #[test]
    fn test_default_session_config() {
        let config = SessionConfig::default();
        assert_eq!(config.show_delay.as_millis(), 150);
        assert_eq!(config.hide_delay.as_millis(), 300);
        assert_eq!(config.success_visible_for.as_secs(), 5);
        assert_eq!(config.reveal.threshold, 0.1);
    }
}
