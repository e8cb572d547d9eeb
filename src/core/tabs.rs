//! # Tab Controller
//!
//! Buttons and panes are tracked separately, the same way they exist as two
//! independent sets of elements on screen. A button names the pane it
//! targets; activation goes through the button, so a button pointing at a
//! pane that doesn't exist leaves zero panes active.

pub const UPLOAD_TAB: &str = "upload";
pub const DESCRIBE_TAB: &str = "describe";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabButton {
    pub label: String,
    pub target: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabPane {
    pub id: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tabs {
    pub buttons: Vec<TabButton>,
    pub panes: Vec<TabPane>,
}

impl Default for Tabs {
    fn default() -> Self {
        Self::new(&[(UPLOAD_TAB, "Upload Image"), (DESCRIBE_TAB, "Describe Injury")])
    }
}

impl Tabs {
    /// Builds one button and one pane per `(id, label)`; the first is active.
    pub fn new(entries: &[(&str, &str)]) -> Self {
        let buttons = entries
            .iter()
            .enumerate()
            .map(|(i, (id, label))| TabButton {
                label: label.to_string(),
                target: id.to_string(),
                active: i == 0,
            })
            .collect();
        let panes = entries
            .iter()
            .enumerate()
            .map(|(i, (id, _))| TabPane {
                id: id.to_string(),
                active: i == 0,
            })
            .collect();
        Self { buttons, panes }
    }

    /// Deactivates everything, then activates the button at `index` and the
    /// pane it targets. Out-of-range indices are ignored.
    pub fn activate(&mut self, index: usize) {
        let Some(target) = self.buttons.get(index).map(|b| b.target.clone()) else {
            return;
        };

        for button in &mut self.buttons {
            button.active = false;
        }
        self.buttons[index].active = true;

        for pane in &mut self.panes {
            pane.active = pane.id == target;
        }
    }

    /// Activates the first button targeting `id`. Returns false if none does.
    pub fn activate_id(&mut self, id: &str) -> bool {
        match self.buttons.iter().position(|b| b.target == id) {
            Some(index) => {
                self.activate(index);
                true
            }
            None => false,
        }
    }

    /// Cycles to the next (`step = 1`) or previous (`step = -1`) button.
    pub fn cycle(&mut self, step: isize) {
        if self.buttons.is_empty() {
            return;
        }
        let len = self.buttons.len() as isize;
        let current = self.active_button().unwrap_or(0) as isize;
        self.activate((current + step).rem_euclid(len) as usize);
    }

    pub fn active_button(&self) -> Option<usize> {
        self.buttons.iter().position(|b| b.active)
    }

    /// Id of the active pane, or None if no pane is active.
    pub fn active_pane(&self) -> Option<&str> {
        self.panes.iter().find(|p| p.active).map(|p| p.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_counts(tabs: &Tabs) -> (usize, usize) {
        (
            tabs.buttons.iter().filter(|b| b.active).count(),
            tabs.panes.iter().filter(|p| p.active).count(),
        )
    }

    #[test]
    fn test_initial_state_first_pane_active() {
        let tabs = Tabs::default();
        assert_eq!(tabs.active_pane(), Some(UPLOAD_TAB));
        assert_eq!(tabs.active_button(), Some(0));
        assert_eq!(active_counts(&tabs), (1, 1));
    }

    #[test]
    fn test_activate_is_singleton_and_consistent() {
        let mut tabs = Tabs::new(&[("a", "A"), ("b", "B"), ("c", "C")]);
        for index in [2, 0, 1, 1, 2] {
            tabs.activate(index);
            assert_eq!(active_counts(&tabs), (1, 1));
            let button = &tabs.buttons[tabs.active_button().unwrap()];
            assert_eq!(Some(button.target.as_str()), tabs.active_pane());
        }
    }

    #[test]
    fn test_activate_id() {
        let mut tabs = Tabs::default();
        assert!(tabs.activate_id(DESCRIBE_TAB));
        assert_eq!(tabs.active_pane(), Some(DESCRIBE_TAB));
        assert!(!tabs.activate_id("settings"));
        assert_eq!(tabs.active_pane(), Some(DESCRIBE_TAB));
    }

    #[test]
    fn test_button_without_pane_leaves_no_active_pane() {
        let mut tabs = Tabs::default();
        tabs.buttons.push(TabButton {
            label: "Orphan".to_string(),
            target: "missing".to_string(),
            active: false,
        });
        tabs.activate(2);
        assert_eq!(active_counts(&tabs), (1, 0));
        assert_eq!(tabs.active_pane(), None);
    }

    #[test]
    fn test_cycle_wraps() {
        let mut tabs = Tabs::default();
        tabs.cycle(1);
        assert_eq!(tabs.active_pane(), Some(DESCRIBE_TAB));
        tabs.cycle(1);
        assert_eq!(tabs.active_pane(), Some(UPLOAD_TAB));
        tabs.cycle(-1);
        assert_eq!(tabs.active_pane(), Some(DESCRIBE_TAB));
    }

    #[test]
    fn test_out_of_range_index_ignored() {
        let mut tabs = Tabs::default();
        tabs.activate(9);
        assert_eq!(tabs.active_pane(), Some(UPLOAD_TAB));
    }
}
