//! Action Menus
//!
//! Lists of cards each have a dropdown menu, but only one can be open at a
//! time. The list owns a single "open id" instead of a flag per card.

/// Which card's menu is open, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState<K> {
    open: Option<K>,
}

impl<K> Default for MenuState<K> {
    fn default() -> Self {
        Self { open: None }
    }
}

impl<K: PartialEq + Clone> MenuState<K> {
    pub fn is_open(&self, id: &K) -> bool {
        self.open.as_ref() == Some(id)
    }

    pub fn open_id(&self) -> Option<&K> {
        self.open.as_ref()
    }

    /// Open this card's menu (closing any other), or close it if already open
    pub fn toggle(&mut self, id: K) {
        if self.is_open(&id) {
            self.open = None;
        } else {
            self.open = Some(id);
        }
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    /// A pointer press landed somewhere on the page. `clicked_owner` is the
    /// card containing the click target, if any. Clicks inside the card that
    /// owns the open menu keep it open; anything else closes it.
    pub fn dismiss_outside(&mut self, clicked_owner: Option<&K>) {
        if let Some(open) = &self.open {
            if clicked_owner != Some(open) {
                self.open = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_one_menu_open() {
        let mut menu = MenuState::default();
        menu.toggle(1);
        assert!(menu.is_open(&1));

        menu.toggle(2);
        assert!(menu.is_open(&2));
        assert!(!menu.is_open(&1));

        menu.toggle(2);
        assert_eq!(menu.open_id(), None);
    }

    #[test]
    fn test_click_inside_owner_keeps_menu() {
        let mut menu = MenuState::default();
        menu.toggle("a".to_string());
        menu.dismiss_outside(Some(&"a".to_string()));
        assert!(menu.is_open(&"a".to_string()));
    }

    #[test]
    fn test_click_elsewhere_closes_menu() {
        let mut menu = MenuState::default();
        menu.toggle(3);
        menu.dismiss_outside(Some(&4));
        assert!(!menu.is_open(&3));

        menu.toggle(3);
        menu.dismiss_outside(None);
        assert_eq!(menu.open_id(), None);
    }

    #[test]
    fn test_dismiss_with_nothing_open_is_noop() {
        let mut menu: MenuState<u32> = MenuState::default();
        menu.dismiss_outside(Some(&1));
        assert_eq!(menu.open_id(), None);
        menu.close();
        assert_eq!(menu.open_id(), None);
    }
}
