use std::ops::Range;

/// Page window over a filtered list; pages are 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
}

/// Number of page buttons shown at once
pub const VISIBLE_PAGES: usize = 5;

impl Pagination {
    /// Clamps `page` into `1..=total_pages`
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total.div_ceil(page_size).max(1);
        Self {
            page: page.clamp(1, total_pages),
            page_size,
            total,
        }
    }

    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.page_size).max(1)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn range(&self) -> Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(self.total);
        let end = (start + self.page_size).min(self.total);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        &items[range.start.min(items.len())..range.end.min(items.len())]
    }

    /// Page numbers around the current one, at most `VISIBLE_PAGES` of them
    pub fn visible_pages(&self) -> Vec<usize> {
        let total_pages = self.total_pages();
        let mut start = self.page.saturating_sub(VISIBLE_PAGES / 2).max(1);
        let end = (start + VISIBLE_PAGES - 1).min(total_pages);
        if end - start < VISIBLE_PAGES - 1 {
            start = end.saturating_sub(VISIBLE_PAGES - 1).max(1);
        }
        (start..=end).collect()
    }

    /// "Mostrando 11-20 de 42 produtos"
    pub fn info_text(&self) -> String {
        let range = self.range();
        let first = if range.is_empty() { 0 } else { range.start + 1 };
        format!("Mostrando {}-{} de {} produtos", first, range.end, self.total)
    }
}

/// "1 produto encontrado" / "3 produtos encontrados"
pub fn count_text(count: usize) -> String {
    if count == 1 {
        "1 produto encontrado".to_string()
    } else {
        format!("{count} produtos encontrados")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_and_info() {
        let items: Vec<u32> = (1..=42).collect();
        let p = Pagination::new(2, 10, items.len());
        assert_eq!(p.slice(&items), &items[10..20]);
        assert_eq!(p.info_text(), "Mostrando 11-20 de 42 produtos");
        assert_eq!(p.total_pages(), 5);

        let last = Pagination::new(5, 10, items.len());
        assert_eq!(last.slice(&items), &[41, 42]);
        assert!(!last.has_next());
    }

    #[test]
    fn test_page_is_clamped() {
        assert_eq!(Pagination::new(9, 10, 15).page, 2);
        assert_eq!(Pagination::new(0, 10, 15).page, 1);
        let empty = Pagination::new(3, 10, 0);
        assert_eq!(empty.page, 1);
        assert_eq!(empty.info_text(), "Mostrando 0-0 de 0 produtos");
    }

    #[test]
    fn test_visible_window() {
        assert_eq!(Pagination::new(1, 10, 200).visible_pages(), vec![1, 2, 3, 4, 5]);
        assert_eq!(Pagination::new(10, 10, 200).visible_pages(), vec![8, 9, 10, 11, 12]);
        assert_eq!(Pagination::new(20, 10, 200).visible_pages(), vec![16, 17, 18, 19, 20]);
        assert_eq!(Pagination::new(2, 10, 30).visible_pages(), vec![1, 2, 3]);
    }

    #[test]
    fn test_count_text() {
        assert_eq!(count_text(1), "1 produto encontrado");
        assert_eq!(count_text(0), "0 produtos encontrados");
    }
}
