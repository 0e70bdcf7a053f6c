//! Live type-ahead completion.
//!
//! [`propose`] replaces the field's text with the first candidate that
//! starts with it, keeping the cursor where it was and selecting the
//! suggested suffix so typing continues to override it.

use super::callback::{Reply, TextEditState, TextEvent};

/// Substitute the first candidate that has the current text as a byte
/// prefix (case-sensitive, in the given order).
///
/// Empty text proposes nothing. On a match the cursor is restored and the
/// selection covers `[cursor, len)`; the reply is `Consumed`. Otherwise the
/// state is untouched and the reply is `Ignored`.
pub fn propose<S: AsRef<str>>(state: &mut TextEditState, candidates: &[S]) -> Reply {
    if state.is_empty() {
        return Reply::Ignored;
    }
    let Some(found) = candidates
        .iter()
        .map(AsRef::as_ref)
        .find(|candidate| candidate.starts_with(state.text()))
    else {
        return Reply::Ignored;
    };

    let cursor = state.cursor();
    state.delete_chars(0, state.len());
    state.insert_chars(0, found);
    state.set_cursor(cursor);
    state.set_selection(cursor, state.len());
    Reply::Consumed
}

/// A chainable handler that runs [`propose`] on every `Always` event.
pub fn autocomplete_callback<S: AsRef<str>>(
    candidates: &[S],
) -> impl FnMut(TextEvent<'_>) -> Reply + '_ {
    move |event| match event {
        TextEvent::Always(state) => propose(state, candidates),
        _ => Reply::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_proposes_nothing() {
        let mut state = TextEditState::new("");
        assert_eq!(propose(&mut state, &["apple", "apricot"]), Reply::Ignored);
        assert_eq!(state.text(), "");
        assert!(!state.is_dirty());
    }

    #[test]
    fn test_first_match_in_list_order() {
        let mut state = TextEditState::new("ap");
        assert_eq!(
            propose(&mut state, &["banana", "apple", "apricot"]),
            Reply::Consumed
        );
        assert_eq!(state.text(), "apple");
        assert_eq!(state.cursor(), 2);
        assert_eq!(state.selection(), 2..5);
    }

    #[test]
    fn test_cursor_restored_mid_text() {
        let mut state = TextEditState::new("apr");
        state.set_cursor(1);
        state.clear_selection();
        propose(&mut state, &["apricot"]);
        assert_eq!(state.cursor(), 1);
        assert_eq!(state.selection(), 1..7);
    }

    #[test]
    fn test_no_match_leaves_state() {
        let mut state = TextEditState::new("kiwi");
        assert_eq!(propose(&mut state, &["apple"]), Reply::Ignored);
        assert_eq!(state.text(), "kiwi");
        assert_eq!(state.cursor(), 4);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let mut state = TextEditState::new("Ap");
        assert_eq!(propose(&mut state, &["apple"]), Reply::Ignored);
    }

    #[test]
    fn test_empty_candidate_never_matches_nonempty_text() {
        let mut state = TextEditState::new("a");
        propose(&mut state, &["", "avocado"]);
        assert_eq!(state.text(), "avocado");
    }

    #[test]
    fn test_exact_match_is_idempotent() {
        let mut state = TextEditState::new("ap");
        let candidates = ["apple", "apricot"];
        propose(&mut state, &candidates);
        let once = state.clone();
        propose(&mut state, &candidates);
        assert_eq!(state.text(), once.text());
        assert_eq!(state.cursor(), once.cursor());
        assert_eq!(state.selection(), once.selection());
    }

    #[test]
    fn test_multibyte_prefix() {
        let mut state = TextEditState::new("ca");
        propose(&mut state, &["café"]);
        assert_eq!(state.text(), "café");
        assert_eq!(state.selection(), 2..5);
    }

    #[test]
    fn test_callback_runs_on_always_only() {
        let candidates = vec![String::from("apple")];
        let mut callback = autocomplete_callback(candidates.as_slice());
        let mut state = TextEditState::new("a");
        assert_eq!(callback(TextEvent::Edit(&mut state)), Reply::Ignored);
        assert_eq!(state.text(), "a");
        assert_eq!(callback(TextEvent::Always(&mut state)), Reply::Consumed);
        assert_eq!(state.text(), "apple");
    }
}
