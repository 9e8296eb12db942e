//! # Navigation Module
//!
//! The app has three screens reached through a back stack:
//! welcome, then the dial, then settings on top of the dial.
//! Leaving the welcome screen replaces it, so going back from the dial
//! never returns there.

use log::info;

/// A named screen of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Welcome,
    Main,
    Settings,
}

/// Back stack of screens. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Screen>,
}

impl Navigator {
    /// Starts on the welcome screen.
    pub fn new() -> Self {
        Self {
            stack: vec![Screen::Welcome],
        }
    }

    pub fn current(&self) -> Screen {
        // The stack always holds at least the root screen.
        *self.stack.last().unwrap_or(&Screen::Welcome)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Pushes `screen` on top of the current one.
    pub fn navigate(&mut self, screen: Screen) {
        info!("Navigate {:?} -> {:?}", self.current(), screen);
        self.stack.push(screen);
    }

    /// Drops the whole stack and starts again at `screen`.
    pub fn replace_all(&mut self, screen: Screen) {
        info!("Navigate {:?} -> {:?} (clearing back stack)", self.current(), screen);
        self.stack.clear();
        self.stack.push(screen);
    }

    /// Goes back one screen. Refuses to pop the root.
    pub fn pop_back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        let left = self.stack.pop();
        info!("Back from {:?} to {:?}", left, self.current());
        true
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn welcome_is_replaced_by_main() {
        let mut nav = Navigator::new();
        assert_eq!(nav.current(), Screen::Welcome);

        nav.replace_all(Screen::Main);
        assert_eq!(nav.current(), Screen::Main);
        assert_eq!(nav.depth(), 1);
        assert!(!nav.pop_back());
        assert_eq!(nav.current(), Screen::Main);
    }

    #[test]
    fn settings_pops_back_to_main() {
        let mut nav = Navigator::new();
        nav.replace_all(Screen::Main);
        nav.navigate(Screen::Settings);
        assert_eq!(nav.current(), Screen::Settings);
        assert_eq!(nav.depth(), 2);

        assert!(nav.pop_back());
        assert_eq!(nav.current(), Screen::Main);
    }
}
