//! Autocomplete suggestion filtering and keyboard selection.
//!
//! Filtering is a plain case-insensitive substring test over the suggestion
//! text; no scoring is involved. An empty query shows a short default slice
//! of the candidates so a focused, empty search box still offers something.

use crate::models::Suggestion;

/// Number of candidates shown when the query is empty.
pub const DEFAULT_SUGGESTION_COUNT: usize = 6;

/// Filter `candidates` by `query`, showing the first
/// [`DEFAULT_SUGGESTION_COUNT`] candidates when the query is empty.
///
/// ```
/// use portfolio_search::models::Suggestion;
/// use portfolio_search::search::filter_suggestions;
///
/// let candidates: Vec<Suggestion> = ["Revenue strategy", "Hotel openings", "Awards"]
///     .into_iter()
///     .map(Suggestion::from)
///     .collect();
///
/// assert_eq!(filter_suggestions("HOTEL", &candidates)[0].text, "Hotel openings");
/// assert_eq!(filter_suggestions("", &candidates).len(), 3);
/// ```
pub fn filter_suggestions(query: &str, candidates: &[Suggestion]) -> Vec<Suggestion> {
    filter_suggestions_with(query, candidates, DEFAULT_SUGGESTION_COUNT)
}

/// Filter `candidates` by `query` with an explicit empty-query slice size.
pub fn filter_suggestions_with(
    query: &str,
    candidates: &[Suggestion],
    default_count: usize,
) -> Vec<Suggestion> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return candidates.iter().take(default_count).cloned().collect();
    }

    candidates
        .iter()
        .filter(|candidate| candidate.text.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// The highlighted row in the suggestion list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Unselected,
    Selected(usize),
}

impl Selection {
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Unselected => None,
            Self::Selected(i) => Some(*i),
        }
    }
}

/// Keys the suggestion list reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
}

/// What the caller should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    /// The highlight moved; re-render
    Moved(Selection),
    /// A suggestion was chosen
    Chosen(Suggestion),
    /// The raw query text should be searched
    Submitted(String),
    /// The list was closed
    Dismissed,
    /// Nothing happened
    Ignored,
}

/// Keyboard selection over the current filtered suggestion list.
///
/// The selection always indexes the *current* filtered list. Arrow keys wrap
/// around its ends, a new query re-filters and clears the selection, and
/// Escape drops focus without touching the selection.
#[derive(Debug, Clone)]
pub struct SuggestionNavigator {
    candidates: Vec<Suggestion>,
    default_count: usize,
    query: String,
    visible: Vec<Suggestion>,
    selection: Selection,
    focused: bool,
}

impl SuggestionNavigator {
    /// Create a navigator over `candidates` with the default empty-query slice.
    pub fn new(candidates: Vec<Suggestion>) -> Self {
        Self::with_default_count(candidates, DEFAULT_SUGGESTION_COUNT)
    }

    pub fn with_default_count(candidates: Vec<Suggestion>, default_count: usize) -> Self {
        let visible = filter_suggestions_with("", &candidates, default_count);
        Self {
            candidates,
            default_count,
            query: String::new(),
            visible,
            selection: Selection::Unselected,
            focused: false,
        }
    }

    /// Replace the query text, re-filter and clear the selection.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.visible = filter_suggestions_with(&self.query, &self.candidates, self.default_count);
        self.selection = Selection::Unselected;
        self.focused = true;
    }

    /// Swap in a new candidate list, e.g. after a locale change.
    ///
    /// The query is kept and re-applied; a selection that no longer fits
    /// the new list is clamped to its last row.
    pub fn replace_candidates(&mut self, candidates: Vec<Suggestion>) {
        self.candidates = candidates;
        self.visible = filter_suggestions_with(&self.query, &self.candidates, self.default_count);
        self.selection = match self.selection {
            Selection::Selected(_) if self.visible.is_empty() => Selection::Unselected,
            Selection::Selected(i) => Selection::Selected(i.min(self.visible.len() - 1)),
            Selection::Unselected => Selection::Unselected,
        };
    }

    /// Mark the input as focused, showing the list.
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Apply a key press.
    pub fn handle_key(&mut self, key: NavKey) -> NavOutcome {
        match key {
            NavKey::ArrowDown => self.step(true),
            NavKey::ArrowUp => self.step(false),
            NavKey::Enter => self.enter(),
            NavKey::Escape => {
                self.focused = false;
                NavOutcome::Dismissed
            }
        }
    }

    fn step(&mut self, forward: bool) -> NavOutcome {
        let len = self.visible.len();
        if len == 0 {
            self.selection = Selection::Unselected;
            return NavOutcome::Ignored;
        }

        let next = match (self.selection, forward) {
            (Selection::Unselected, true) => 0,
            (Selection::Unselected, false) => len - 1,
            (Selection::Selected(i), true) => (i.min(len - 1) + 1) % len,
            (Selection::Selected(i), false) => (i.min(len - 1) + len - 1) % len,
        };

        self.selection = Selection::Selected(next);
        self.focused = true;
        NavOutcome::Moved(self.selection)
    }

    fn enter(&mut self) -> NavOutcome {
        if let Some(chosen) = self.selected().cloned() {
            self.focused = false;
            return NavOutcome::Chosen(chosen);
        }

        if self.query.trim().is_empty() {
            return NavOutcome::Ignored;
        }

        self.focused = false;
        NavOutcome::Submitted(self.query.clone())
    }

    /// The suggestion under the highlight, if any.
    pub fn selected(&self) -> Option<&Suggestion> {
        self.selection.index().and_then(|i| self.visible.get(i))
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The filtered list currently shown.
    pub fn visible(&self) -> &[Suggestion] {
        &self.visible
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(texts: &[&str]) -> Vec<Suggestion> {
        texts.iter().copied().map(Suggestion::from).collect()
    }

    fn texts(list: &[Suggestion]) -> Vec<&str> {
        list.iter().map(|s| s.text.as_str()).collect()
    }

    const SAMPLE: [&str; 8] = [
        "Hotel openings",
        "Revenue management",
        "Luxury hospitality",
        "Guest experience",
        "Hotel awards",
        "Keynote speaking",
        "Asset management",
        "Team leadership",
    ];

    #[test]
    fn test_empty_query_returns_default_slice() {
        let list = candidates(&SAMPLE);
        assert_eq!(texts(&filter_suggestions("", &list)), SAMPLE[..6].to_vec());
        assert_eq!(filter_suggestions("   ", &list).len(), 6);
    }

    #[test]
    fn test_default_slice_shorter_than_count() {
        let list = candidates(&SAMPLE[..2]);
        assert_eq!(filter_suggestions("", &list).len(), 2);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let list = candidates(&SAMPLE);
        assert_eq!(
            texts(&filter_suggestions("MANAGEMENT", &list)),
            vec!["Revenue management", "Asset management"]
        );
        assert!(filter_suggestions("zzz", &list).is_empty());
    }

    #[test]
    fn test_filter_does_not_cap_matches() {
        let list = candidates(&["a1", "a2", "a3", "a4", "a5", "a6", "a7", "a8"]);
        assert_eq!(filter_suggestions("a", &list).len(), 8);
    }

    #[test]
    fn test_custom_default_count() {
        let list = candidates(&SAMPLE);
        assert_eq!(filter_suggestions_with("", &list, 3).len(), 3);
        assert!(filter_suggestions_with("", &list, 0).is_empty());
    }

    #[test]
    fn test_arrow_down_wraps() {
        let mut nav = SuggestionNavigator::new(candidates(&SAMPLE));
        nav.set_query("hotel");
        assert_eq!(nav.visible().len(), 2);

        assert_eq!(nav.handle_key(NavKey::ArrowDown), NavOutcome::Moved(Selection::Selected(0)));
        assert_eq!(nav.handle_key(NavKey::ArrowDown), NavOutcome::Moved(Selection::Selected(1)));
        assert_eq!(nav.handle_key(NavKey::ArrowDown), NavOutcome::Moved(Selection::Selected(0)));
    }

    #[test]
    fn test_arrow_up_wraps() {
        let mut nav = SuggestionNavigator::new(candidates(&SAMPLE));
        nav.set_query("management");

        assert_eq!(nav.handle_key(NavKey::ArrowUp), NavOutcome::Moved(Selection::Selected(1)));
        assert_eq!(nav.handle_key(NavKey::ArrowUp), NavOutcome::Moved(Selection::Selected(0)));
        assert_eq!(nav.handle_key(NavKey::ArrowUp), NavOutcome::Moved(Selection::Selected(1)));
    }

    #[test]
    fn test_new_query_resets_selection() {
        let mut nav = SuggestionNavigator::new(candidates(&SAMPLE));
        nav.set_query("hotel");
        nav.handle_key(NavKey::ArrowDown);
        assert_eq!(nav.selection(), Selection::Selected(0));

        nav.set_query("hotel a");
        assert_eq!(nav.selection(), Selection::Unselected);
        assert_eq!(texts(nav.visible()), vec!["Hotel awards"]);
    }

    #[test]
    fn test_enter_with_selection_chooses_it() {
        let mut nav = SuggestionNavigator::new(candidates(&SAMPLE));
        nav.set_query("hotel");
        nav.handle_key(NavKey::ArrowDown);
        nav.handle_key(NavKey::ArrowDown);

        assert_eq!(
            nav.handle_key(NavKey::Enter),
            NavOutcome::Chosen(Suggestion::new("Hotel awards"))
        );
        assert!(!nav.is_focused());
    }

    #[test]
    fn test_enter_without_selection_submits_query() {
        let mut nav = SuggestionNavigator::new(candidates(&SAMPLE));
        nav.set_query("pre-opening");

        assert_eq!(
            nav.handle_key(NavKey::Enter),
            NavOutcome::Submitted("pre-opening".to_string())
        );
    }

    #[test]
    fn test_enter_with_blank_query_is_ignored() {
        let mut nav = SuggestionNavigator::new(candidates(&SAMPLE));
        nav.set_query("  ");
        assert_eq!(nav.handle_key(NavKey::Enter), NavOutcome::Ignored);
    }

    #[test]
    fn test_escape_keeps_selection() {
        let mut nav = SuggestionNavigator::new(candidates(&SAMPLE));
        nav.set_query("hotel");
        nav.handle_key(NavKey::ArrowUp);
        assert!(nav.is_focused());

        assert_eq!(nav.handle_key(NavKey::Escape), NavOutcome::Dismissed);
        assert!(!nav.is_focused());
        assert_eq!(nav.selection(), Selection::Selected(1));
    }

    #[test]
    fn test_navigation_over_empty_list() {
        let mut nav = SuggestionNavigator::new(candidates(&SAMPLE));
        nav.set_query("zzz");

        assert_eq!(nav.handle_key(NavKey::ArrowDown), NavOutcome::Ignored);
        assert_eq!(nav.handle_key(NavKey::ArrowUp), NavOutcome::Ignored);
        assert_eq!(nav.selection(), Selection::Unselected);
        assert_eq!(nav.handle_key(NavKey::Enter), NavOutcome::Submitted("zzz".to_string()));
    }

    #[test]
    fn test_initial_state_shows_defaults() {
        let mut nav = SuggestionNavigator::new(candidates(&SAMPLE));
        assert_eq!(nav.visible().len(), 6);
        assert!(!nav.is_focused());

        nav.focus();
        assert!(nav.is_focused());
        assert_eq!(nav.handle_key(NavKey::ArrowUp), NavOutcome::Moved(Selection::Selected(5)));
    }

    #[test]
    fn test_replace_candidates_clamps_selection() {
        let mut nav = SuggestionNavigator::new(candidates(&SAMPLE));
        nav.handle_key(NavKey::ArrowUp);
        assert_eq!(nav.selection(), Selection::Selected(5));

        nav.replace_candidates(candidates(&["Hôtel", "Prix"]));
        assert_eq!(nav.selection(), Selection::Selected(1));
        assert_eq!(nav.selected().map(|s| s.text.as_str()), Some("Prix"));

        nav.replace_candidates(Vec::new());
        assert_eq!(nav.selection(), Selection::Unselected);
    }
}
