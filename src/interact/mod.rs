//! Interactive page behaviour as plain state machines.
//!
//! Each component owns the state a browser would keep in element class lists
//! and inline styles, and changes it only in response to explicit events.
//! [`crate::session::PageSession`] wires them to a loaded page and to the
//! timers that drive delayed transitions.

pub mod filter;
pub mod form;
pub mod menu;
pub mod nav;
pub mod reveal;
pub mod scheduler;

pub use filter::{CardStyle, Display, ProjectFilter};
pub use form::{ContactForm, Field, FieldErrors, FormInput, SubmitOutcome};
pub use menu::{MenuState, MobileNav};
pub use nav::{NavHighlighter, PageLayout};
pub use reveal::{RevealObserver, RevealOptions};
pub use scheduler::TransitionScheduler;
