//! Segmented one-time code entered on the email verification page.

/// Number of cells in a verification code
pub const CODE_LENGTH: usize = 6;

/// Fixed-size digit cells of a verification code
///
/// Every filled cell holds a single ASCII digit; writes of anything else
/// are refused and leave the cells unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OtpDigits {
    cells: [Option<char>; CODE_LENGTH],
}

impl OtpDigits {
    /// Create empty cells
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a digit into a cell; returns false if refused
    pub fn set(&mut self, index: usize, ch: char) -> bool {
        if index >= CODE_LENGTH || !ch.is_ascii_digit() {
            return false;
        }
        self.cells[index] = Some(ch);
        true
    }

    /// Empty a single cell
    pub fn clear(&mut self, index: usize) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = None;
        }
    }

    /// Empty every cell
    pub fn clear_all(&mut self) {
        self.cells = [None; CODE_LENGTH];
    }

    /// Content of a cell
    pub fn get(&self, index: usize) -> Option<char> {
        self.cells.get(index).copied().flatten()
    }

    /// Whether a cell is empty (out-of-range cells count as empty)
    pub fn is_empty_at(&self, index: usize) -> bool {
        self.get(index).is_none()
    }

    /// Whether every cell is filled
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of filled cells
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// First empty cell strictly to the right of `index`
    pub fn next_empty_after(&self, index: usize) -> Option<usize> {
        (index + 1..CODE_LENGTH).find(|&i| self.cells[i].is_none())
    }

    /// Concatenated code, only when complete
    pub fn code(&self) -> Option<String> {
        if !self.is_complete() {
            return None;
        }
        Some(self.cells.iter().flatten().collect())
    }

    /// Cells as display strings (empty string for an empty cell)
    pub fn to_strings(&self) -> [String; CODE_LENGTH] {
        std::array::from_fn(|i| self.cells[i].map(String::from).unwrap_or_default())
    }
}
