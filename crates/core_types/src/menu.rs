//! Header navigation menu state.
//!
//! The header owns one `MenuState` for its lifetime. Every DOM event the
//! header cares about is translated into a `MenuAction` and folded in with
//! [`MenuState::apply`]. At most one dropdown is open at a time.

/// Viewport width classes the header lays itself out for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Breakpoint {
    /// Below 768px: hamburger button and full-screen overlay.
    Mobile,
    /// 768px up to 1024px: inline links, dropdowns open on click.
    Tablet,
    /// 1024px and wider: inline links, dropdowns open on hover.
    #[default]
    Desktop,
}

impl Breakpoint {
    pub const TABLET_MIN_WIDTH: f64 = 768.0;
    pub const DESKTOP_MIN_WIDTH: f64 = 1024.0;

    /// Classify a viewport width in CSS pixels.
    pub fn from_width(width: f64) -> Self {
        if width < Self::TABLET_MIN_WIDTH {
            Self::Mobile
        } else if width < Self::DESKTOP_MIN_WIDTH {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }

    /// Whether dropdowns should follow pointer hover.
    pub fn opens_on_hover(self) -> bool {
        self == Self::Desktop
    }
}

/// Events that change the header menu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuAction {
    /// Click on a dropdown trigger.
    ToggleDropdown(usize),
    /// Pointer entered a dropdown trigger.
    OpenDropdown(usize),
    /// Pointer left the dropdown.
    CloseDropdown,
    /// Click on the hamburger button.
    ToggleMobile,
    /// Pointer press whose target is outside the header subtree.
    ClickOutside,
    /// A navigation item was chosen.
    SelectItem,
    /// The window was resized to `width` CSS pixels.
    Resize { width: f64 },
    /// Escape key.
    Escape,
}

/// Open/closed flags for the header's dropdowns and mobile overlay.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MenuState {
    /// Index into the navigation links of the open dropdown.
    pub open_dropdown: Option<usize>,
    /// Whether the mobile overlay is shown.
    pub mobile_open: bool,
    /// Last known viewport class.
    pub breakpoint: Breakpoint,
}

impl MenuState {
    /// Initial state for a viewport of the given width.
    pub fn new(width: f64) -> Self {
        Self {
            breakpoint: Breakpoint::from_width(width),
            ..Self::default()
        }
    }

    /// Return the state after `action`.
    pub fn apply(self, action: MenuAction) -> Self {
        match action {
            MenuAction::ToggleDropdown(index) => Self {
                open_dropdown: if self.open_dropdown == Some(index) {
                    None
                } else {
                    Some(index)
                },
                ..self
            },
            MenuAction::OpenDropdown(index) => Self {
                open_dropdown: Some(index),
                ..self
            },
            MenuAction::CloseDropdown => Self {
                open_dropdown: None,
                ..self
            },
            MenuAction::ToggleMobile => {
                if self.mobile_open {
                    self.closed()
                } else {
                    Self {
                        mobile_open: true,
                        ..self
                    }
                }
            }
            MenuAction::ClickOutside | MenuAction::SelectItem | MenuAction::Escape => {
                self.closed()
            }
            MenuAction::Resize { width } => Self {
                breakpoint: Breakpoint::from_width(width),
                ..self.closed()
            },
        }
    }

    /// Action for a click on the trigger of dropdown `index`.
    ///
    /// Where dropdowns follow hover the pointer has already opened it, so a
    /// click keeps it open instead of toggling it shut.
    pub fn trigger_action(&self, index: usize) -> MenuAction {
        if self.breakpoint.opens_on_hover() {
            MenuAction::OpenDropdown(index)
        } else {
            MenuAction::ToggleDropdown(index)
        }
    }

    pub fn is_dropdown_open(&self, index: usize) -> bool {
        self.open_dropdown == Some(index)
    }

    pub fn is_any_open(&self) -> bool {
        self.open_dropdown.is_some() || self.mobile_open
    }

    fn closed(self) -> Self {
        Self {
            open_dropdown: None,
            mobile_open: false,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_open() -> MenuState {
        MenuState::new(500.0)
            .apply(MenuAction::ToggleMobile)
            .apply(MenuAction::ToggleDropdown(2))
    }

    #[test]
    fn test_breakpoints() {
        assert_eq!(Breakpoint::from_width(320.0), Breakpoint::Mobile);
        assert_eq!(Breakpoint::from_width(767.9), Breakpoint::Mobile);
        assert_eq!(Breakpoint::from_width(768.0), Breakpoint::Tablet);
        assert_eq!(Breakpoint::from_width(1023.0), Breakpoint::Tablet);
        assert_eq!(Breakpoint::from_width(1024.0), Breakpoint::Desktop);
        assert!(Breakpoint::Desktop.opens_on_hover());
        assert!(!Breakpoint::Tablet.opens_on_hover());
    }

    #[test]
    fn test_toggle_dropdown() {
        let state = MenuState::default().apply(MenuAction::ToggleDropdown(1));
        assert!(state.is_dropdown_open(1));

        let state = state.apply(MenuAction::ToggleDropdown(1));
        assert!(!state.is_any_open());
    }

    #[test]
    fn test_only_one_dropdown_open() {
        let state = MenuState::default()
            .apply(MenuAction::ToggleDropdown(0))
            .apply(MenuAction::ToggleDropdown(3));

        assert!(!state.is_dropdown_open(0));
        assert!(state.is_dropdown_open(3));
    }

    #[test]
    fn test_click_outside_closes_any_open_dropdown() {
        for index in 0..5 {
            let state = MenuState::default().apply(MenuAction::ToggleDropdown(index));
            assert!(state.is_any_open());

            let state = state.apply(MenuAction::ClickOutside);
            assert!(!state.is_any_open(), "dropdown {index} stayed open");
        }

        assert!(!all_open().apply(MenuAction::ClickOutside).is_any_open());
    }

    #[test]
    fn test_resize_closes_everything() {
        for width in [320.0, 800.0, 1440.0] {
            let state = all_open().apply(MenuAction::Resize { width });
            assert!(!state.is_any_open());
            assert_eq!(state.breakpoint, Breakpoint::from_width(width));
        }
    }

    #[test]
    fn test_select_item_and_escape_close_everything() {
        assert!(!all_open().apply(MenuAction::SelectItem).is_any_open());
        assert!(!all_open().apply(MenuAction::Escape).is_any_open());
    }

    #[test]
    fn test_closing_mobile_overlay_closes_dropdown() {
        let state = all_open();
        assert!(state.mobile_open);
        assert!(state.is_dropdown_open(2));

        let state = state.apply(MenuAction::ToggleMobile);
        assert!(!state.is_any_open());
    }

    #[test]
    fn test_hover_open_and_leave() {
        let state = MenuState::new(1280.0).apply(MenuAction::OpenDropdown(1));
        assert!(state.is_dropdown_open(1));
        assert!(!state.mobile_open);

        let state = state.apply(MenuAction::CloseDropdown);
        assert!(!state.is_any_open());
    }

    #[test]
    fn test_click_after_hover_keeps_dropdown_open() {
        let state = MenuState::new(1280.0).apply(MenuAction::OpenDropdown(1));
        let state = state.apply(state.trigger_action(1));
        assert!(state.is_dropdown_open(1));
    }

    #[test]
    fn test_trigger_toggles_without_hover() {
        let state = MenuState::new(900.0);
        let state = state.apply(state.trigger_action(1));
        assert!(state.is_dropdown_open(1));

        let state = state.apply(state.trigger_action(1));
        assert!(!state.is_any_open());
    }

    #[test]
    fn test_closed_state_is_stable() {
        let state = MenuState::default();
        assert_eq!(state.apply(MenuAction::ClickOutside), state);
        assert_eq!(state.apply(MenuAction::SelectItem), state);
    }
}
