//! State the helpers keep across frames, owned by the frame context.

use std::collections::HashMap;

use crate::id::Id;
use crate::widgets::PanelStack;

/// Per-context helper state: open panels and combo filters.
#[derive(Clone, Debug, Default)]
pub struct WidgetState {
    panels: PanelStack,
    filters: HashMap<Id, String>,
}

impl WidgetState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Panels begun and not yet ended.
    #[must_use]
    pub fn panels(&self) -> &PanelStack {
        &self.panels
    }

    pub fn panels_mut(&mut self) -> &mut PanelStack {
        &mut self.panels
    }

    /// Filter text of the combo box `id`, if it has one.
    #[must_use]
    pub fn filter(&self, id: Id) -> Option<&str> {
        self.filters.get(&id).map(String::as_str)
    }

    /// Take the filter text of `id` out for editing. Put it back with
    /// [`store_filter`](Self::store_filter).
    pub fn take_filter(&mut self, id: Id) -> String {
        self.filters.remove(&id).unwrap_or_default()
    }

    pub fn store_filter(&mut self, id: Id, text: String) {
        self.filters.insert(id, text);
    }

    /// Forget every combo filter.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_are_keyed_by_id() {
        let mut state = WidgetState::new();
        state.store_filter(Id(1), "ap".to_string());
        state.store_filter(Id(2), "ba".to_string());
        assert_eq!(state.filter(Id(1)), Some("ap"));
        assert_eq!(state.take_filter(Id(2)), "ba");
        assert_eq!(state.filter(Id(2)), None);
        assert_eq!(state.take_filter(Id(3)), "");
    }

    #[test]
    fn test_clear_filters() {
        let mut state = WidgetState::new();
        state.store_filter(Id(1), "x".to_string());
        state.clear_filters();
        assert_eq!(state.filter(Id(1)), None);
        assert!(state.panels().is_empty());
    }
}
