//! Transport-agnostic reply keyboard: rows of plain-text buttons shown under the input field.

/// Persistent reply keyboard. Pressing a button sends its label as a normal text message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyKeyboard {
    pub rows: Vec<Vec<String>>,
    /// Ask the client to shrink the keyboard to fit its buttons.
    pub resize: bool,
}

impl ReplyKeyboard {
    /// One button per row, in the given order.
    pub fn single_column<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: labels.into_iter().map(|l| vec![l.into()]).collect(),
            resize: true,
        }
    }

    /// All button labels, row by row.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().flatten().map(String::as_str)
    }
}
