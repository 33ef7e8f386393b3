//! Contact form editing state.

use unicode_segmentation::UnicodeSegmentation;

use crate::ContactField;

/// Text input with a grapheme-aware cursor.
///
/// `cursor` is a byte offset into `value` and always sits on a grapheme
/// boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldInput {
    value: String,
    cursor: usize,
}

impl FieldInput {
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Width in graphemes of the text before the cursor, for caret placement.
    #[must_use]
    pub fn graphemes_before_cursor(&self) -> usize {
        self.value[..self.cursor].graphemes(true).count()
    }

    pub fn insert(&mut self, ch: char) {
        self.value.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    pub fn insert_str(&mut self, text: &str) {
        self.value.insert_str(self.cursor, text);
        self.cursor += text.len();
    }

    pub fn backspace(&mut self) {
        if let Some(start) = self.prev_boundary() {
            self.value.drain(start..self.cursor);
            self.cursor = start;
        }
    }

    pub fn move_left(&mut self) {
        if let Some(start) = self.prev_boundary() {
            self.cursor = start;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(end) = self.next_boundary() {
            self.cursor = end;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.len();
    }

    /// Start of the grapheme immediately before the cursor.
    fn prev_boundary(&self) -> Option<usize> {
        self.value[..self.cursor]
            .grapheme_indices(true)
            .last()
            .map(|(i, _)| i)
    }

    /// End of the grapheme immediately after the cursor.
    fn next_boundary(&self) -> Option<usize> {
        self.value[self.cursor..]
            .graphemes(true)
            .next()
            .map(|g| self.cursor + g.len())
    }
}

/// Editing state for the three-field contact form.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: FieldInput,
    pub email: FieldInput,
    pub message: FieldInput,
    pub focus: ContactField,
}

impl ContactForm {
    #[must_use]
    pub fn field(&self, field: ContactField) -> &FieldInput {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut FieldInput {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    #[must_use]
    pub fn focused(&self) -> &FieldInput {
        self.field(self.focus)
    }

    pub fn focused_mut(&mut self) -> &mut FieldInput {
        self.field_mut(self.focus)
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }
}
