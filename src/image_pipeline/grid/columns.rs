use tracing::debug;

/// Bijective base-26 label for a 1-based column number: 1 -> "A",
/// 26 -> "Z", 27 -> "AA", 703 -> "AAA".
///
/// Column 0 has no label and yields an empty string.
pub fn column_label(column: u32) -> String {
    let mut letters = Vec::new();
    let mut n = column;
    while n > 0 {
        n -= 1;
        letters.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    letters.reverse();
    // Only ASCII uppercase bytes are pushed above.
    letters.into_iter().map(char::from).collect()
}

/// Precomputed column labels for columns `1..=len`. Immutable once built and
/// shared by reference between workers.
#[derive(Debug, Clone)]
pub struct ColumnLabelTable {
    labels: Vec<String>,
}

impl ColumnLabelTable {
    pub fn new(len: u32) -> Self {
        debug!("Precomputing {} column labels", len);
        Self {
            labels: (1..=len).map(column_label).collect(),
        }
    }

    /// Label for the 1-based `column`, if it lies inside the table.
    pub fn get(&self, column: u32) -> Option<&str> {
        let index = usize::try_from(column).ok()?.checked_sub(1)?;
        self.labels.get(index).map(String::as_str)
    }
}
