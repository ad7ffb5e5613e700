//! Text Cycler
//!
//! Hands out glyphs one character at a time from a fixed, ordered list of
//! source texts. After the last character of the last text it starts over
//! at the first character of the first text. Restarting early means building
//! a new cycler; there is no reset.

use crate::domain::texts::DEFAULT_TEXTS;

pub struct TextCycler {
    texts: Vec<Vec<char>>,
    text_index: usize,
    char_index: usize,
}

impl TextCycler {
    /// Build a cycler over `texts`. Fails if the list or any entry is empty.
    pub fn new<I, S>(texts: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let texts: Vec<Vec<char>> = texts
            .into_iter()
            .map(|t| t.as_ref().chars().collect())
            .collect();

        if texts.is_empty() {
            return Err("text cycler needs at least one text".to_string());
        }
        if let Some(idx) = texts.iter().position(|t| t.is_empty()) {
            return Err(format!("text {} is empty", idx));
        }

        Ok(Self {
            texts,
            text_index: 0,
            char_index: 0,
        })
    }

    /// Return the character under the cursor and advance it.
    pub fn next_char(&mut self) -> char {
        let ch = self.texts[self.text_index][self.char_index];

        self.char_index += 1;
        if self.char_index >= self.texts[self.text_index].len() {
            self.char_index = 0;
            self.text_index += 1;
            if self.text_index >= self.texts.len() {
                self.text_index = 0;
            }
        }

        ch
    }

    /// `(text_index, char_index)` of the next character to be returned
    pub fn cursor(&self) -> (usize, usize) {
        (self.text_index, self.char_index)
    }

    /// Characters in one full pass over every text
    pub fn cycle_len(&self) -> usize {
        self.texts.iter().map(Vec::len).sum()
    }

    pub fn text_count(&self) -> usize {
        self.texts.len()
    }
}

impl Default for TextCycler {
    /// Cycler over the built-in quotations
    fn default() -> Self {
        Self {
            texts: DEFAULT_TEXTS.iter().map(|t| t.chars().collect()).collect(),
            text_index: 0,
            char_index: 0,
        }
    }
}

/// Endless: `next()` never returns `None`.
impl Iterator for TextCycler {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        Some(self.next_char())
    }
}
