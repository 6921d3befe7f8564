//! Selection state machine
//!
//! A [`Navigator`] owns its host and walks a strict lifecycle:
//! construct, `enable`, `disable`, `destroy`. While enabled it is the only
//! writer of the selection marker and of the scroll container's offset.

use crate::candidates::CandidateSet;
use crate::config::Config;
use crate::direction::{Direction, DirectionResolver};
use crate::host::{CandidateQuery, Host, InputEvents, ListenerId, VisualEffects};
use crate::nearest::next_target;
use crate::scroll::{ScrollOutcome, scroll_to, vertical_direction_towards};

/// Observable lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    Disabled,
    EnabledNoSelection,
    EnabledSelected,
}

pub struct Navigator<H: Host> {
    host: H,
    /// Navigable container; `None` once destroyed
    container: Option<H::Element>,
    scroll_container: Option<H::Element>,
    config: Config,
    resolver: DirectionResolver,
    candidates: CandidateSet<H::Element>,
    selected: Option<H::Element>,
    listener: Option<ListenerId>,
}

impl<H: Host> Navigator<H> {
    /// Create a disabled navigator over `container`
    pub fn new(host: H, container: H::Element, config: Config) -> Self {
        let resolver = DirectionResolver::new(&config.keys);
        Self {
            host,
            container: Some(container),
            scroll_container: None,
            config,
            resolver,
            candidates: CandidateSet::default(),
            selected: None,
            listener: None,
        }
    }

    /// Scroll a different element than the navigable container
    pub fn with_scroll_container(mut self, scroll_container: H::Element) -> Self {
        self.scroll_container = Some(scroll_container);
        self
    }

    pub fn state(&self) -> NavState {
        match (&self.listener, &self.selected) {
            (None, _) => NavState::Disabled,
            (Some(_), None) => NavState::EnabledNoSelection,
            (Some(_), Some(_)) => NavState::EnabledSelected,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.listener.is_some()
    }

    pub fn is_destroyed(&self) -> bool {
        self.container.is_none()
    }

    pub fn selected(&self) -> Option<&H::Element> {
        self.selected.as_ref()
    }

    pub fn candidates(&self) -> &CandidateSet<H::Element> {
        &self.candidates
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Scan for candidates and start listening for keys
    pub fn enable(&mut self) {
        if self.is_enabled() {
            return;
        }
        if self.is_destroyed() {
            log::warn!("enable() called on a destroyed navigator");
            return;
        }
        self.rescan();
        self.listener = Some(self.host.add_key_listener());
        log::debug!("Navigator enabled with {} candidates", self.candidates.len());
    }

    /// Clear the selection and stop listening. Safe to call repeatedly.
    pub fn disable(&mut self) {
        if let Some(selected) = self.selected.take() {
            self.clear_marker(&selected);
        }
        if let Some(listener) = self.listener.take() {
            self.host.remove_key_listener(listener);
            log::debug!("Navigator disabled");
        }
    }

    /// Disable and drop the container references
    pub fn destroy(&mut self) {
        self.disable();
        self.candidates.clear();
        self.scroll_container = None;
        if self.container.take().is_some() {
            log::debug!("Navigator destroyed");
        }
    }

    /// Rebuild the candidate set from the container's current contents
    pub fn rescan(&mut self) {
        let Some(container) = &self.container else {
            return;
        };
        self.candidates =
            CandidateSet::scan(&self.host, container, &self.config.navigation.selector);
    }

    /// Feed a raw key identifier; returns true when the key was consumed
    pub fn handle_key(&mut self, key: &str) -> bool {
        if !self.is_enabled() {
            return false;
        }
        match self.resolver.resolve(key) {
            Some(direction) => {
                self.navigate(direction);
                true
            }
            None => false,
        }
    }

    /// Move the selection one step; returns true when it changed
    pub fn navigate(&mut self, direction: Direction) -> bool {
        if !self.is_enabled() {
            return false;
        }
        let Some(current) = self.selected.clone() else {
            let Some(first) = self.candidates.first().cloned() else {
                log::debug!("No candidates to select");
                return false;
            };
            self.apply_selection(first, None);
            return true;
        };
        match next_target(&self.host, &self.candidates, &current, direction) {
            Some(target) if target != current => {
                self.apply_selection(target, Some(direction));
                true
            }
            _ => {
                log::debug!("Nothing {} of {:?}", direction, current);
                false
            }
        }
    }

    /// Select `el` directly and scroll it into view.
    ///
    /// Without a direction the vertical scroll direction is inferred from
    /// where `el` sits. No-op when disabled or when `el` is already selected.
    pub fn select(&mut self, el: &H::Element, direction: Option<Direction>) -> bool {
        if !self.is_enabled() || self.selected.as_ref() == Some(el) {
            return false;
        }
        let direction = match (direction, self.scroll_target()) {
            (Some(direction), _) => direction,
            (None, Some(container)) => vertical_direction_towards(&self.host, &container, el),
            (None, None) => Direction::Down,
        };
        self.apply_selection(el.clone(), Some(direction));
        true
    }

    fn scroll_target(&self) -> Option<H::Element> {
        self.scroll_container.clone().or_else(|| self.container.clone())
    }

    fn apply_selection(&mut self, el: H::Element, scroll: Option<Direction>) {
        if let Some(previous) = self.selected.take() {
            self.clear_marker(&previous);
        }
        self.apply_marker(&el);
        log::debug!("Selected {:?}", el);
        if let (Some(direction), Some(container)) = (scroll, self.scroll_target()) {
            let outcome = scroll_to(&mut self.host, &container, &el, direction);
            if outcome != ScrollOutcome::None {
                log::debug!("Scrolled {:?}", outcome);
            }
        }
        self.selected = Some(el);
    }

    fn apply_marker(&mut self, el: &H::Element) {
        if self.host.is_text_input(el) {
            self.host.focus(el);
        } else {
            self.host.highlight(el, &self.config.navigation.selected_class);
        }
    }

    fn clear_marker(&mut self, el: &H::Element) {
        if self.host.is_text_input(el) {
            self.host.blur(el);
        } else {
            self.host.unhighlight(el, &self.config.navigation.selected_class);
        }
    }
}

#[cfg(test)]
#[path = "navigator_tests.rs"]
mod navigator_tests;
