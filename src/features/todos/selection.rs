use super::extract::CandidateItem;

/// User-adjustable subset of the scanned candidates.
///
/// Pure in-memory state, no I/O. The container does not guard against a
/// submit cycle running concurrently; the orchestrating caller ignores
/// toggle events while one is in flight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    items: Vec<CandidateItem>,
}

impl Selection {
    /// Build a selection over a freshly scanned candidate set
    pub fn from_candidates(items: Vec<CandidateItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CandidateItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Flip `selected` for exactly the item matching `id`.
    ///
    /// Silent no-op when the id is absent: toggle events from the UI can
    /// race a re-scan that already replaced the set.
    pub fn toggle(&mut self, id: &str) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.selected = !item.selected;
        }
    }

    /// The items marked for submission, in extraction order
    pub fn selected_subset(&self) -> Vec<CandidateItem> {
        self.items
            .iter()
            .filter(|item| item.selected)
            .cloned()
            .collect()
    }

    /// Whether submission is permitted at all
    pub fn has_any_selected(&self) -> bool {
        self.items.iter().any(|item| item.selected)
    }

    /// Discard the candidate set (a completed submission cycle ends its life)
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: &str, text: &str) -> CandidateItem {
        CandidateItem {
            id: id.to_string(),
            text: text.to_string(),
            selected: true,
        }
    }

    fn sample() -> Selection {
        Selection::from_candidates(vec![
            candidate("a", "Buy milk"),
            candidate("b", "Pay rent"),
            candidate("c", "Walk dog"),
        ])
    }

    #[test]
    fn test_toggle_flips_exactly_one_item() {
        let mut selection = sample();
        selection.toggle("b");

        assert!(selection.items()[0].selected);
        assert!(!selection.items()[1].selected);
        assert!(selection.items()[2].selected);

        // Everything but the flag is untouched
        assert_eq!(selection.items()[1].id, "b");
        assert_eq!(selection.items()[1].text, "Pay rent");
    }

    #[test]
    fn test_toggle_absent_id_is_a_noop() {
        let mut selection = sample();
        let before = selection.clone();
        selection.toggle("stale-id-from-previous-scan");
        assert_eq!(selection, before);
    }

    #[test]
    fn test_toggle_twice_restores_item() {
        let mut selection = sample();
        let before = selection.clone();
        selection.toggle("a");
        selection.toggle("a");
        assert_eq!(selection, before);
    }

    #[test]
    fn test_selected_subset_preserves_extraction_order() {
        let mut selection = sample();
        selection.toggle("b");

        let subset = selection.selected_subset();
        let ids: Vec<&str> = subset.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_has_any_selected_gates_submission() {
        let mut selection = sample();
        assert!(selection.has_any_selected());

        selection.toggle("a");
        selection.toggle("b");
        selection.toggle("c");
        assert!(!selection.has_any_selected());
        assert!(selection.selected_subset().is_empty());
    }

    #[test]
    fn test_empty_selection() {
        let selection = Selection::default();
        assert!(selection.is_empty());
        assert!(!selection.has_any_selected());
    }
}
