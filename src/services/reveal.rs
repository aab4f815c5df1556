/// Items revealed per step and the floor the cursor never drops below.
pub const PAGE_SIZE: usize = 6;

/// Visible-count cursor over an ordered list ("More" / "Less").
///
/// The cursor itself is not capped at the list length; `visible` slices, so an
/// oversized cursor simply shows everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    cursor: usize,
}

impl Default for Reveal {
    fn default() -> Self {
        Self { cursor: PAGE_SIZE }
    }
}

impl Reveal {
    pub fn at(cursor: usize) -> Self {
        Self {
            cursor: cursor.max(PAGE_SIZE),
        }
    }

    /// Reads the `shown` query value; anything missing or unreadable is the first page.
    pub fn from_query(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.trim().parse::<usize>().ok())
            .map(Self::at)
            .unwrap_or_default()
    }

    pub fn cursor(self) -> usize {
        self.cursor
    }

    pub fn more(self) -> Self {
        Self {
            cursor: self.cursor.saturating_add(PAGE_SIZE),
        }
    }

    pub fn less(self) -> Self {
        Self::at(self.cursor.saturating_sub(PAGE_SIZE))
    }

    pub fn has_more(self, total: usize) -> bool {
        self.cursor < total
    }

    pub fn has_less(self) -> bool {
        self.cursor > PAGE_SIZE
    }

    pub fn visible<T>(self, items: &[T]) -> &[T] {
        &items[..self.cursor.min(items.len())]
    }
}
