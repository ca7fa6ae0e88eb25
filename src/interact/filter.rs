//! Project category filter

/// Filter value that matches every card
pub const ALL: &str = "all";

/// Delay before shown cards are displayed again
pub const SHOW_DELAY_MS: u64 = 150;
/// Delay before hidden cards are removed from the layout
pub const HIDE_DELAY_MS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    /// No inline display set; the stylesheet decides
    #[default]
    Unset,
    Flex,
    None,
}

/// Inline style of a project card touched by the filter transitions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardStyle {
    pub opacity: f32,
    pub scale: f32,
    pub display: Display,
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            scale: 1.0,
            display: Display::Unset,
        }
    }
}

impl CardStyle {
    /// Whether the card takes part in layout
    pub fn is_displayed(&self) -> bool {
        self.display != Display::None
    }

    fn faded(self) -> Self {
        Self {
            opacity: 0.0,
            scale: 0.8,
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCard {
    pub category: String,
    pub style: CardStyle,
}

/// Whether a card of `category` is shown under `filter`
pub fn matches(filter: &str, category: &str) -> bool {
    filter == ALL || filter == category
}

/// Filter buttons and the project cards they act on.
///
/// Selecting a filter fades every card out immediately and returns the
/// follow-up step for each card; the caller runs those after
/// [`SHOW_DELAY_MS`] or [`HIDE_DELAY_MS`].
#[derive(Debug, Clone)]
pub struct ProjectFilter {
    buttons: Vec<String>,
    active: Option<usize>,
    cards: Vec<ProjectCard>,
}

impl ProjectFilter {
    pub fn new(buttons: Vec<String>, categories: Vec<String>) -> Self {
        let cards = categories
            .into_iter()
            .map(|category| ProjectCard {
                category,
                style: CardStyle::default(),
            })
            .collect();
        Self {
            buttons,
            active: None,
            cards,
        }
    }

    pub fn with_active(mut self, index: Option<usize>) -> Self {
        self.active = index.filter(|i| *i < self.buttons.len());
        self
    }

    pub fn cards(&self) -> &[ProjectCard] {
        &self.cards
    }

    pub fn buttons(&self) -> &[String] {
        &self.buttons
    }

    /// Value of the active filter button
    pub fn active(&self) -> Option<&str> {
        self.active.map(|i| self.buttons[i].as_str())
    }

    /// Select `filter`: move the active marker to its button, fade every card
    /// out and return, per card, whether it ends up shown.
    pub fn select(&mut self, filter: &str) -> Vec<bool> {
        self.active = self.buttons.iter().position(|b| b == filter);
        if self.active.is_none() {
            log::warn!("no filter button for `{}`", filter);
        }
        self.cards
            .iter_mut()
            .map(|card| {
                card.style = card.style.faded();
                matches(filter, &card.category)
            })
            .collect()
    }

    /// Second step for a shown card: displayed and grown back in.
    pub fn finish_show(&mut self, index: usize) {
        if let Some(card) = self.cards.get_mut(index) {
            card.style = CardStyle {
                opacity: 1.0,
                scale: 1.0,
                display: Display::Flex,
            };
        }
    }

    /// Second step for a hidden card: removed from layout.
    pub fn finish_hide(&mut self, index: usize) {
        if let Some(card) = self.cards.get_mut(index) {
            card.style.display = Display::None;
        }
    }
}
