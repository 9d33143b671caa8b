#[cfg(test)]
mod tests {
    use super::super::text_input::TextInput;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn alt(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT)
    }

    fn input_with(text: &str) -> TextInput {
        let mut input = TextInput::new();
        input.set_text(text.to_string());
        input
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut input = TextInput::new();

        assert!(input.handle_key(key(KeyCode::Char('v'))));
        assert!(input.handle_key(key(KeyCode::Char('a'))));
        assert_eq!(input.text(), "va");
        assert_eq!(input.cursor_position(), 2);

        assert!(input.handle_key(key(KeyCode::Backspace)));
        assert_eq!(input.text(), "v");

        input.set_cursor_position(0);
        assert!(!input.handle_key(key(KeyCode::Backspace)));
        assert_eq!(input.text(), "v");
    }

    #[test]
    fn test_insert_in_middle() {
        let mut input = input_with("vta");
        input.set_cursor_position(1);

        input.handle_key(key(KeyCode::Char('a')));

        assert_eq!(input.text(), "vata");
        assert_eq!(input.cursor_position(), 2);
    }

    #[test]
    fn test_delete_keeps_cursor() {
        let mut input = input_with("pitta");
        input.set_cursor_position(0);

        assert!(input.handle_key(key(KeyCode::Delete)));
        assert_eq!(input.text(), "itta");
        assert_eq!(input.cursor_position(), 0);

        input.set_cursor_position(4);
        assert!(!input.handle_key(key(KeyCode::Delete)));
    }

    #[test]
    fn test_cursor_movement() {
        let mut input = input_with("kapha");

        assert!(!input.handle_key(key(KeyCode::Left)));
        assert_eq!(input.cursor_position(), 4);
        input.handle_key(key(KeyCode::Home));
        assert_eq!(input.cursor_position(), 0);
        input.handle_key(key(KeyCode::Left));
        assert_eq!(input.cursor_position(), 0);
        input.handle_key(key(KeyCode::End));
        assert_eq!(input.cursor_position(), 5);
        input.handle_key(key(KeyCode::Right));
        assert_eq!(input.cursor_position(), 5);
    }

    #[test]
    fn test_emacs_cursor_shortcuts() {
        let mut input = input_with("jwara");

        input.handle_key(ctrl('a'));
        assert_eq!(input.cursor_position(), 0);
        input.handle_key(ctrl('f'));
        assert_eq!(input.cursor_position(), 1);
        input.handle_key(ctrl('e'));
        assert_eq!(input.cursor_position(), 5);
        input.handle_key(ctrl('b'));
        assert_eq!(input.cursor_position(), 4);
        assert_eq!(input.text(), "jwara");
    }

    #[test]
    fn test_word_movement() {
        let mut input = input_with("vata pitta kapha");

        input.handle_key(alt('b'));
        assert_eq!(input.cursor_position(), 11);
        input.handle_key(alt('b'));
        assert_eq!(input.cursor_position(), 5);

        input.set_cursor_position(0);
        input.handle_key(alt('f'));
        assert_eq!(input.cursor_position(), 5);
    }

    #[test]
    fn test_deletion_shortcuts() {
        let mut input = input_with("vata pitta");
        assert!(input.handle_key(ctrl('w')));
        assert_eq!(input.text(), "vata ");

        assert!(input.handle_key(ctrl('h')));
        assert_eq!(input.text(), "vata");

        input.set_cursor_position(2);
        assert!(input.handle_key(ctrl('k')));
        assert_eq!(input.text(), "va");

        assert!(input.handle_key(ctrl('u')));
        assert_eq!(input.text(), "");
        assert!(!input.handle_key(ctrl('u')));

        let mut input = input_with("abc");
        input.set_cursor_position(1);
        assert!(input.handle_key(ctrl('d')));
        assert_eq!(input.text(), "ac");
        assert_eq!(input.cursor_position(), 1);
    }

    #[test]
    fn test_modified_chars_dont_insert() {
        let mut input = TextInput::new();

        assert!(!input.handle_key(ctrl('x')));
        assert!(!input.handle_key(alt('x')));
        assert_eq!(input.text(), "");
    }

    #[test]
    fn test_unicode_editing() {
        let mut input = input_with("ज्वर");
        assert_eq!(input.cursor_position(), 4);

        input.handle_key(key(KeyCode::Backspace));
        assert_eq!(input.text(), "ज्व");

        input.set_cursor_position(1);
        input.handle_key(key(KeyCode::Delete));
        assert_eq!(input.text(), "जव");
    }

    #[test]
    fn test_sync_text_keeps_cursor_when_unchanged() {
        let mut input = input_with("vata");
        input.set_cursor_position(1);

        input.sync_text("vata");
        assert_eq!(input.cursor_position(), 1);

        input.sync_text("pitta");
        assert_eq!(input.cursor_position(), 5);
    }

    #[test]
    fn test_render_cursor_spans() {
        assert_eq!(TextInput::new().render_cursor_spans().len(), 1);

        let input = input_with("vata");
        let spans = input.render_cursor_spans();
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].content, "vata");
        assert_eq!(spans[1].content, " ");

        let mut input = input_with("vata");
        input.set_cursor_position(1);
        let spans = input.render_cursor_spans();
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0].content, "v");
        assert_eq!(spans[1].content, "a");
        assert_eq!(spans[2].content, "ta");
    }
}
