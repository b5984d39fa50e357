/// Converts ascending byte offsets into character offsets in one forward pass.
///
/// Each call only counts the characters between the previous offset and the new one,
/// so converting every match of a scan costs a single walk over the text.
pub(super) struct CharCursor<'a> {
    text: &'a str,
    byte_pos: usize,
    char_pos: usize,
}

impl<'a> CharCursor<'a> {
    pub(super) fn new(text: &'a str) -> Self {
        Self {
            text,
            byte_pos: 0,
            char_pos: 0,
        }
    }

    /// `byte_offset` must lie on a char boundary and never go backwards.
    pub(super) fn advance_to(&mut self, byte_offset: usize) -> usize {
        debug_assert!(byte_offset >= self.byte_pos);
        self.char_pos += self.text[self.byte_pos..byte_offset].chars().count();
        self.byte_pos = byte_offset;
        self.char_pos
    }
}

/// Converts character offsets back into byte offsets.
///
/// Ascending offsets continue from the previous position, so slicing every match of a
/// scan walks the text once. An offset behind the cursor restarts it from the beginning.
pub(super) struct ByteCursor<'a> {
    text: &'a str,
    byte_pos: usize,
    char_pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub(super) fn new(text: &'a str) -> Self {
        Self {
            text,
            byte_pos: 0,
            char_pos: 0,
        }
    }

    /// Byte offset of the character at `char_offset`, clamped to the end of the text.
    pub(super) fn byte_at(&mut self, char_offset: usize) -> usize {
        if char_offset < self.char_pos {
            self.byte_pos = 0;
            self.char_pos = 0;
        }

        let rest = &self.text[self.byte_pos..];
        match rest.char_indices().nth(char_offset - self.char_pos) {
            Some((idx, _)) => {
                self.byte_pos += idx;
                self.char_pos = char_offset;
            }
            None => {
                self.char_pos += rest.chars().count();
                self.byte_pos = self.text.len();
            }
        }
        self.byte_pos
    }

    #[cfg(test)]
    fn position(&self) -> (usize, usize) {
        (self.byte_pos, self.char_pos)
    }
}
