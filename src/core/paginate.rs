/// One page of a filtered list.
#[derive(Debug)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub index: usize,
    pub size: usize,
    pub total: usize,
}

/// Slice `items` into the 0-based page `index`. Out-of-range pages are empty.
pub fn paginate<T>(items: &[T], index: usize, size: usize) -> Page<'_, T> {
    let size = size.max(1);
    let start = index.saturating_mul(size).min(items.len());
    let end = start.saturating_add(size).min(items.len());

    Page {
        items: &items[start..end],
        index,
        size,
        total: items.len(),
    }
}

impl<T> Page<'_, T> {
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.size)
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.total_pages()
    }

    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    /// "Showing 11-20 of 42 records"
    pub fn footer(&self) -> String {
        if self.items.is_empty() {
            return format!("Showing 0-0 of {} records", self.total);
        }
        let first = self.index * self.size + 1;
        let last = first + self.items.len() - 1;
        format!("Showing {}-{} of {} records", first, last, self.total)
    }

    /// "2 / 5", never "x / 0"
    pub fn position(&self) -> String {
        format!("{} / {}", self.index + 1, self.total_pages().max(1))
    }

    /// Position with arrows for the directions that still have pages: "« 2 / 5 »".
    pub fn navigation(&self) -> String {
        let prev = if self.has_prev() { "« " } else { "" };
        let next = if self.has_next() { " »" } else { "" };
        format!("{prev}{}{next}", self.position())
    }
}
