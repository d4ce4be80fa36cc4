//! Menu text grid
//!
//! A character grid for the settings menu. Text is placed at a row and
//! column; one span per row can be underlined to mark the selection.

/// Number of character rows
pub const SCREEN_ROWS: usize = 8;

/// Number of character columns (240 px wide at 10 px per glyph)
pub const SCREEN_COLS: usize = 24;

/// Character grid with one optional underline span per row
#[derive(Clone)]
pub struct Screen {
    /// ASCII cells, space-filled
    cells: [[u8; SCREEN_COLS]; SCREEN_ROWS],
    /// Underlined span per row (start_col, end_col exclusive)
    highlights: [Option<(u8, u8)>; SCREEN_ROWS],
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Blank grid, nothing underlined
    pub fn new() -> Self {
        Self {
            cells: [[b' '; SCREEN_COLS]; SCREEN_ROWS],
            highlights: [None; SCREEN_ROWS],
        }
    }

    /// Blank every cell and drop all underlines
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Write `text` starting at `col`, truncating at the right edge
    ///
    /// Non-ASCII characters are shown as `?`. Returns the column after the
    /// last character written.
    pub fn put(&mut self, row: usize, col: usize, text: &str) -> usize {
        let Some(cells) = self.cells.get_mut(row) else {
            return col;
        };

        let mut end = col;
        for (cell, ch) in cells.iter_mut().skip(col).zip(text.chars()) {
            *cell = if ch.is_ascii() && !ch.is_ascii_control() {
                ch as u8
            } else {
                b'?'
            };
            end += 1;
        }
        end
    }

    /// Replace a whole row
    pub fn set_line(&mut self, row: usize, text: &str) {
        if row < SCREEN_ROWS {
            self.cells[row] = [b' '; SCREEN_COLS];
            self.put(row, 0, text);
        }
    }

    /// Row content without trailing spaces
    pub fn get_line(&self, row: usize) -> Option<&str> {
        let cells = self.cells.get(row)?;
        let len = cells.iter().rposition(|&c| c != b' ').map_or(0, |i| i + 1);
        // Cells only ever hold printable ASCII
        core::str::from_utf8(&cells[..len]).ok()
    }

    /// Underline a span on a row
    pub fn set_highlight(&mut self, row: usize, start_col: u8, end_col: u8) {
        if row < SCREEN_ROWS {
            self.highlights[row] = Some((start_col, end_col));
        }
    }

    /// Underlined span on `row`
    pub fn get_highlight(&self, row: usize) -> Option<(u8, u8)> {
        self.highlights.get(row).copied().flatten()
    }

    /// Rows top to bottom, trailing spaces trimmed
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        (0..SCREEN_ROWS).map(|row| self.get_line(row).unwrap_or(""))
    }

    /// First underlined span as `(row, start_col, end_col)`
    pub fn selection(&self) -> Option<(u8, u8, u8)> {
        self.highlights
            .iter()
            .enumerate()
            .find_map(|(row, h)| h.map(|(start, end)| (row as u8, start, end)))
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[");
        for (i, line) in self.lines().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", line);
        }
        defmt::write!(f, "]");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_and_get() {
        let mut screen = Screen::new();
        assert_eq!(screen.put(1, 4, "hold"), 8);
        assert_eq!(screen.get_line(1), Some("    hold"));
        assert_eq!(screen.get_line(0), Some(""));
        assert_eq!(screen.get_line(SCREEN_ROWS), None);
    }

    #[test]
    fn test_truncates_at_edge() {
        let mut screen = Screen::new();
        screen.set_line(0, "abcdefghijklmnopqrstuvwxyz");
        assert_eq!(screen.get_line(0).map(str::len), Some(SCREEN_COLS));
        assert_eq!(screen.put(0, SCREEN_COLS, "x"), SCREEN_COLS);
    }

    #[test]
    fn test_non_ascii_replaced() {
        let mut screen = Screen::new();
        screen.set_line(2, "Atem\u{fc}bung");
        assert_eq!(screen.get_line(2), Some("Atem?bung"));
    }

    #[test]
    fn test_highlight() {
        let mut screen = Screen::new();
        assert_eq!(screen.selection(), None);

        screen.set_highlight(4, 6, 9);
        assert_eq!(screen.get_highlight(4), Some((6, 9)));
        assert_eq!(screen.selection(), Some((4, 6, 9)));

        screen.clear();
        assert_eq!(screen.selection(), None);
    }
}
