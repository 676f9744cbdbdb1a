use crate::model::ListItem;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterState {
    Unfiltered,
    /// The user is typing a filter query.
    Filtering,
    /// A query has been accepted and still narrows the list.
    Applied,
}

/// A selectable list that can be narrowed by a typed query.
///
/// Selection indexes refer to the visible (filtered) rows.
#[derive(Debug, Clone)]
pub struct FilterList<T> {
    title: String,
    items: Vec<T>,
    visible: Vec<usize>,
    query: String,
    filter: FilterState,
    state: ListState,
}

impl<T: ListItem> FilterList<T> {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
            visible: Vec::new(),
            query: String::new(),
            filter: FilterState::Unfiltered,
            state: ListState::default(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replaces every item. The current filter is kept and re-applied; the
    /// selection is clamped to what remains visible.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.refilter();
        let selected = match (self.state.selected(), self.visible.len()) {
            (_, 0) => None,
            (Some(i), len) => Some(i.min(len - 1)),
            (None, _) => Some(0),
        };
        self.state.select(selected);
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Rows that pass the filter, in order.
    pub fn visible_items(&self) -> impl Iterator<Item = &T> + '_ {
        self.visible.iter().filter_map(|&i| self.items.get(i))
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn selected(&self) -> Option<&T> {
        self.state
            .selected()
            .and_then(|row| self.visible.get(row))
            .and_then(|&i| self.items.get(i))
    }

    pub fn select_first(&mut self) {
        self.select_row(0);
    }

    pub fn filter_state(&self) -> FilterState {
        self.filter
    }

    pub fn is_filtering(&self) -> bool {
        self.filter == FilterState::Filtering
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Drops the filter entirely and shows every item again.
    pub fn cancel_filter(&mut self) {
        self.query.clear();
        self.filter = FilterState::Unfiltered;
        self.refilter();
        self.select_first();
    }

    /// Applies a key press. Returns true if anything changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return false;
        }

        if self.is_filtering() {
            return match key.code {
                KeyCode::Char(c) => {
                    self.query.push(c);
                    self.refilter();
                    self.select_first();
                    true
                }
                KeyCode::Backspace => {
                    let changed = self.query.pop().is_some();
                    self.refilter();
                    self.select_first();
                    changed
                }
                KeyCode::Enter => {
                    self.filter = if self.query.is_empty() {
                        FilterState::Unfiltered
                    } else {
                        FilterState::Applied
                    };
                    true
                }
                KeyCode::Up => self.move_selection(-1),
                KeyCode::Down => self.move_selection(1),
                _ => false,
            };
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Home | KeyCode::Char('g') => self.select_row(0),
            KeyCode::End | KeyCode::Char('G') => {
                self.select_row(self.visible.len().saturating_sub(1))
            }
            KeyCode::Char('/') => {
                self.query.clear();
                self.filter = FilterState::Filtering;
                self.refilter();
                self.select_first();
                true
            }
            _ => false,
        }
    }

    fn move_selection(&mut self, delta: isize) -> bool {
        let Some(current) = self.state.selected() else {
            return self.select_row(0);
        };
        let target = current.saturating_add_signed(delta);
        self.select_row(target)
    }

    fn select_row(&mut self, row: usize) -> bool {
        let before = self.state.selected();
        let selected = match self.visible.len() {
            0 => None,
            len => Some(row.min(len - 1)),
        };
        self.state.select(selected);
        before != selected
    }

    fn refilter(&mut self) {
        let query = self.query.to_lowercase();
        self.visible = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.filter_value().to_lowercase().contains(&query))
            .map(|(i, _)| i)
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NoteSummary;
    use chrono::Local;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn list_of(names: &[&str]) -> FilterList<NoteSummary> {
        let mut list = FilterList::new("All Notes");
        list.set_items(
            names
                .iter()
                .map(|n| NoteSummary::new(*n, Local::now()))
                .collect(),
        );
        list
    }

    fn selected_name(list: &FilterList<NoteSummary>) -> Option<&str> {
        list.selected().map(|n| n.name.as_str())
    }

    #[test]
    fn first_item_is_selected_after_loading() {
        let list = list_of(&["a", "b"]);
        assert_eq!(selected_name(&list), Some("a"));
    }

    #[test]
    fn empty_list_has_no_selection() {
        let list = list_of(&[]);
        assert!(list.is_empty());
        assert_eq!(selected_name(&list), None);
    }

    #[test]
    fn navigation_is_clamped() {
        let mut list = list_of(&["a", "b", "c"]);
        list.handle_key(key(KeyCode::Up));
        assert_eq!(selected_name(&list), Some("a"));

        list.handle_key(key(KeyCode::Char('j')));
        list.handle_key(key(KeyCode::Down));
        list.handle_key(key(KeyCode::Down));
        assert_eq!(selected_name(&list), Some("c"));

        list.handle_key(key(KeyCode::Home));
        assert_eq!(selected_name(&list), Some("a"));
        list.handle_key(key(KeyCode::End));
        assert_eq!(selected_name(&list), Some("c"));
    }

    #[test]
    fn reloading_clamps_selection() {
        let mut list = list_of(&["a", "b", "c"]);
        list.handle_key(key(KeyCode::End));
        list.set_items(vec![NoteSummary::new("a", Local::now())]);
        assert_eq!(selected_name(&list), Some("a"));
    }

    #[test]
    fn filtering_narrows_case_insensitively() {
        let mut list = list_of(&["Groceries", "ideas.md", "todo.txt"]);
        list.handle_key(key(KeyCode::Char('/')));
        assert!(list.is_filtering());

        for c in "GRO".chars() {
            list.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(list.visible_len(), 1);
        assert_eq!(selected_name(&list), Some("Groceries"));
    }

    #[test]
    fn accepted_filter_persists_and_can_be_cancelled() {
        let mut list = list_of(&["alpha", "beta"]);
        list.handle_key(key(KeyCode::Char('/')));
        list.handle_key(key(KeyCode::Char('b')));
        list.handle_key(key(KeyCode::Enter));
        assert_eq!(list.filter_state(), FilterState::Applied);
        assert!(!list.is_filtering());
        assert_eq!(list.query(), "b");

        // Letters navigate again once the filter is accepted.
        assert!(!list.handle_key(key(KeyCode::Char('j'))));
        assert_eq!(selected_name(&list), Some("beta"));

        list.cancel_filter();
        assert_eq!(list.filter_state(), FilterState::Unfiltered);
        assert_eq!(list.visible_len(), 2);
    }

    #[test]
    fn filter_with_no_match_has_no_selection() {
        let mut list = list_of(&["alpha"]);
        list.handle_key(key(KeyCode::Char('/')));
        list.handle_key(key(KeyCode::Char('z')));
        assert_eq!(list.visible_len(), 0);
        assert_eq!(selected_name(&list), None);

        list.handle_key(key(KeyCode::Backspace));
        assert_eq!(selected_name(&list), Some("alpha"));
    }

    #[test]
    fn control_chords_are_ignored() {
        let mut list = list_of(&["a", "b"]);
        let chord = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::CONTROL);
        assert!(!list.handle_key(chord));
        assert_eq!(selected_name(&list), Some("a"));
    }
}
