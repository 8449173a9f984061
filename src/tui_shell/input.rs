#[derive(Debug, Default)]
pub(super) struct Input {
    pub(super) buf: String,
    pub(super) cursor: usize,
}

impl Input {
    pub(super) fn with_text(text: String) -> Self {
        let cursor = text.len();
        Self { buf: text, cursor }
    }

    pub(super) fn insert_char(&mut self, c: char) {
        self.buf.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub(super) fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev = self.buf[..self.cursor]
            .chars()
            .next_back()
            .map(|c| c.len_utf8())
            .unwrap_or(0);
        self.cursor -= prev;
        self.buf.remove(self.cursor);
    }

    pub(super) fn delete(&mut self) {
        if self.cursor >= self.buf.len() {
            return;
        }
        self.buf.remove(self.cursor);
    }

    pub(super) fn move_left(&mut self) {
        let prev = self.buf[..self.cursor]
            .chars()
            .next_back()
            .map(|c| c.len_utf8())
            .unwrap_or(0);
        self.cursor -= prev;
    }

    pub(super) fn move_right(&mut self) {
        let next = self.buf[self.cursor..]
            .chars()
            .next()
            .map(|c| c.len_utf8())
            .unwrap_or(0);
        self.cursor += next;
    }
}

#[cfg(test)]
mod tests {
    use super::Input;

    #[test]
    fn edits_respect_char_boundaries() {
        let mut input = Input::with_text("ab".to_string());
        input.insert_char('é');
        assert_eq!(input.buf, "abé");
        input.move_left();
        input.move_left();
        input.insert_char('x');
        assert_eq!(input.buf, "axbé");
        input.backspace();
        assert_eq!(input.buf, "abé");
        input.delete();
        assert_eq!(input.buf, "aé");
    }
}
