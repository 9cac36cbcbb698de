#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    pub(crate) fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.chars().count(),
        }
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.text
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(offset, _)| offset)
            .unwrap_or(self.text.len())
    }

    pub(crate) fn insert(&mut self, ch: char) {
        let offset = self.byte_offset(self.cursor);
        self.text.insert(offset, ch);
        self.cursor += 1;
    }

    pub(crate) fn insert_str(&mut self, s: &str) {
        let offset = self.byte_offset(self.cursor);
        self.text.insert_str(offset, s);
        self.cursor += s.chars().count();
    }

    pub(crate) fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let offset = self.byte_offset(self.cursor);
        self.text.remove(offset);
    }

    pub(crate) fn delete(&mut self) {
        if self.cursor >= self.text.chars().count() {
            return;
        }
        let offset = self.byte_offset(self.cursor);
        self.text.remove(offset);
    }

    pub(crate) fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub(crate) fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.text.chars().count());
    }

    pub(crate) fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub(crate) fn move_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    pub(crate) fn cursor_line_col(&self) -> (usize, usize) {
        let before = self.text.chars().take(self.cursor);
        let mut line = 0;
        let mut col = 0;
        for ch in before {
            if ch == '\n' {
                line += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        (line, col)
    }
}

pub(crate) fn truncate(s: &str, max: usize) -> String {
    let mut out = s.to_string();
    if out.chars().count() > max {
        out = out.chars().take(max.saturating_sub(3)).collect::<String>() + "...";
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_happen_at_the_cursor() {
        let mut input = TextInput::new("helo");
        input.move_left();
        input.insert('l');
        assert_eq!(input.as_str(), "hello");

        input.move_home();
        input.delete();
        input.insert('j');
        assert_eq!(input.as_str(), "jello");

        input.move_end();
        input.backspace();
        assert_eq!(input.as_str(), "jell");
    }

    #[test]
    fn multi_byte_text_edits_by_char() {
        let mut input = TextInput::new("café");
        input.backspace();
        input.insert_str("é au lait");
        assert_eq!(input.as_str(), "café au lait");
        input.move_home();
        input.backspace();
        assert_eq!(input.as_str(), "café au lait");
    }

    #[test]
    fn cursor_line_col_tracks_newlines() {
        let mut input = TextInput::new("ab\ncde");
        assert_eq!(input.cursor_line_col(), (1, 3));
        input.move_home();
        assert_eq!(input.cursor_line_col(), (0, 0));
        for _ in 0..3 {
            input.move_right();
        }
        assert_eq!(input.cursor_line_col(), (1, 0));
    }

    #[test]
    fn truncate_marks_cut_text() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a long video title", 10), "a long ...");
    }
}
