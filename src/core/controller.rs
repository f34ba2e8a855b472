/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// "1": spin every cube
    Digit1,
    /// "2": spin the podium
    Digit2,
    /// "3": spin the world
    Digit3,
    Escape,
}

/// Controller - handles button input states
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;
}

/// Escape held: the app should close.
pub fn quit_requested(controller: &dyn Controller) -> bool {
    controller.is_down(Button::Escape)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_button_hash() {
        let mut set = HashSet::new();
        set.insert(Button::Digit1);
        set.insert(Button::Digit3);
        set.insert(Button::Digit1);

        assert!(set.contains(&Button::Digit1));
        assert!(!set.contains(&Button::Digit2));
        assert_eq!(set.len(), 2);
    }

    struct MockController {
        pressed: Vec<Button>,
    }

    impl Controller for MockController {
        fn is_down(&self, button: Button) -> bool {
            self.pressed.contains(&button)
        }
    }

    #[test]
    fn test_controller_is_down() {
        let controller = MockController {
            pressed: vec![Button::Digit2],
        };

        assert!(controller.is_down(Button::Digit2));
        assert!(!controller.is_down(Button::Digit1));
        assert!(!quit_requested(&controller));
    }

    #[test]
    fn test_quit_requested_by_escape() {
        let controller = MockController {
            pressed: vec![Button::Digit1, Button::Escape],
        };
        assert!(quit_requested(&controller));
    }
}
