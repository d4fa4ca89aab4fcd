//! Text field widget and the platform-side editing buffer behind it.
//!
//! The widget is controlled: the caller owns the text and receives every edit
//! through `on_change`. The runner keeps one `TextFieldState` per field to
//! track the caret and applies keystrokes to it, then reports the new text.

use std::ops::Range;
use std::rc::Rc;

use aboutme_core::*;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextFieldState {
    pub text: String,
    /// Byte range; empty when there is only a caret.
    pub selection: Range<usize>,
}

impl TextFieldState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Caret as a char boundary of `text`; `selection` is public and may hold
    /// any byte offset.
    pub fn caret_index(&self) -> usize {
        clamp_to_char_boundary(&self.text, self.selection.end)
    }

    /// Replaces the selection (or inserts at the caret).
    pub fn insert_text(&mut self, text: &str) {
        let start = clamp_to_char_boundary(&self.text, self.selection.start.min(self.text.len()));
        let end = clamp_to_char_boundary(&self.text, self.selection.end.min(self.text.len()));
        let (start, end) = (start.min(end), start.max(end));
        self.text.replace_range(start..end, text);
        let caret = start + text.len();
        self.selection = caret..caret;
    }

    /// Deletes the selection, or the grapheme cluster before the caret.
    pub fn delete_backward(&mut self) {
        if self.selection.start != self.selection.end {
            self.insert_text("");
            return;
        }
        let caret = self.caret_index();
        if caret == 0 {
            return;
        }
        let prev = prev_grapheme_boundary(&self.text, caret);
        self.text.replace_range(prev..caret, "");
        self.selection = prev..prev;
    }

    /// Moves the caret by `delta` grapheme clusters.
    pub fn move_cursor(&mut self, delta: isize) {
        let mut pos = self.caret_index();
        if delta < 0 {
            for _ in 0..delta.unsigned_abs() {
                pos = prev_grapheme_boundary(&self.text, pos);
            }
        } else {
            for _ in 0..delta {
                pos = next_grapheme_boundary(&self.text, pos);
            }
        }
        self.selection = pos..pos;
    }

    pub fn select_all(&mut self) {
        self.selection = 0..self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.selection = 0..0;
    }

    /// Adopts the caller's value when it differs from the buffer, e.g. after
    /// state restoration. The caret moves to the end.
    pub fn sync_from(&mut self, value: &str) -> bool {
        if self.text == value {
            return false;
        }
        self.text = value.to_string();
        let end = self.text.len();
        self.selection = end..end;
        true
    }
}

fn prev_grapheme_boundary(s: &str, from: usize) -> usize {
    s[..from]
        .grapheme_indices(true)
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_grapheme_boundary(s: &str, from: usize) -> usize {
    s[from..]
        .graphemes(true)
        .next()
        .map(|g| from + g.len())
        .unwrap_or(s.len())
}

fn clamp_to_char_boundary(s: &str, i: usize) -> usize {
    if i >= s.len() {
        return s.len();
    }
    let mut j = i;
    while j > 0 && !s.is_char_boundary(j) {
        j -= 1;
    }
    j
}

pub fn TextField(
    value: impl Into<String>,
    label: impl Into<String>,
    modifier: Modifier,
    on_change: impl Fn(String) + 'static,
) -> View {
    let label = label.into();
    View::new(
        0,
        ViewKind::TextField {
            value: value.into(),
            label: label.clone(),
            text_color: theme().on_surface,
            on_change: Some(Rc::new(on_change)),
        },
    )
    .modifier(modifier)
    .semantics(Semantics::new(Role::TextField).label(label))
}
