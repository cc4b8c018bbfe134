use crate::model::Note;

/// Presentation state derived from a snapshot: the list to render and the
/// note to open in the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesView {
    pub filtered: Vec<Note>,
    pub selected: Option<Note>,
}

/// Pure derivation of the view from repository state plus UI inputs.
///
/// `filtered` applies the same case-insensitive substring match as the
/// repository's search (blank query keeps everything); `selected` is the
/// note matching `selected_id`, independent of the filter. The consumer
/// calls this whenever any input changes; no state is kept here.
pub fn derive_view(notes: &[Note], query: &str, selected_id: Option<&str>) -> NotesView {
    let q = query.trim().to_lowercase();
    let filtered = if q.is_empty() {
        notes.to_vec()
    } else {
        notes.iter().filter(|n| n.matches(&q)).cloned().collect()
    };
    let selected = selected_id.and_then(|id| notes.iter().find(|n| n.id == id).cloned());
    NotesView { filtered, selected }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: &str, title: &str, tags: &[&str]) -> Note {
        Note {
            id: id.to_string(),
            title: title.to_string(),
            content: String::new(),
            created_at: 0,
            updated_at: 0,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn blank_query_keeps_every_note() {
        let notes = vec![note("a", "First", &[]), note("b", "Second", &[])];
        let view = derive_view(&notes, "  ", None);
        assert_eq!(view.filtered, notes);
        assert_eq!(view.selected, None);
    }

    #[test]
    fn query_filters_like_repository_search() {
        let notes = vec![
            note("a", "Shopping list", &[]),
            note("b", "Recipe", &["food"]),
        ];
        let view = derive_view(&notes, "FOOD", None);
        assert_eq!(view.filtered.len(), 1);
        assert_eq!(view.filtered[0].id, "b");
    }

    #[test]
    fn selection_is_independent_of_the_filter() {
        let notes = vec![
            note("a", "Shopping list", &[]),
            note("b", "Recipe", &["food"]),
        ];
        let view = derive_view(&notes, "food", Some("a"));
        assert_eq!(view.filtered.len(), 1);
        assert_eq!(view.selected.as_ref().map(|n| n.id.as_str()), Some("a"));
    }

    #[test]
    fn unknown_selection_resolves_to_none() {
        let notes = vec![note("a", "First", &[])];
        let view = derive_view(&notes, "", Some("missing"));
        assert_eq!(view.selected, None);
    }
}
