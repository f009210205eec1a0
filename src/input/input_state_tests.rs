use super::*;

#[test]
fn test_new_input_is_empty() {
    let input = InputState::new();
    assert_eq!(input.query(), "");
}

#[test]
fn test_insert_and_clear() {
    let mut input = InputState::new();
    input.insert("cat");
    assert_eq!(input.query(), "cat");

    input.clear();
    assert_eq!(input.query(), "");
    assert_eq!(input.textarea.lines().len(), 1);
}

#[test]
fn test_clear_with_cursor_mid_text() {
    let mut input = InputState::new();
    input.insert("hello");
    input.textarea.move_cursor(tui_textarea::CursorMove::Head);

    input.clear();
    assert_eq!(input.query(), "");
}

#[test]
fn test_insert_flattens_line_breaks() {
    let mut input = InputState::new();
    input.insert("new\nyork\r\n");
    assert_eq!(input.query(), "new york  ");
    assert_eq!(input.textarea.lines().len(), 1);
}
