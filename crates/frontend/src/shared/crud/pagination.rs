use contracts::shared::paging::{clamp_index, total_pages, PageDescriptor};

/// Controller-held pagination position.
///
/// `total_count` only changes through `absorb`, i.e. from the latest
/// committed list result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    index: usize,
    size: usize,
    total_count: usize,
}

impl Pagination {
    pub fn new(size: usize) -> Self {
        Self {
            index: 1,
            size: size.max(1),
            total_count: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_count, self.size)
    }

    pub fn descriptor(&self) -> PageDescriptor {
        PageDescriptor::new(self.index, self.size, self.total_count)
    }

    pub fn has_prev(&self) -> bool {
        self.descriptor().has_prev()
    }

    pub fn has_next(&self) -> bool {
        self.descriptor().has_next()
    }

    /// "showing X–Y of Z"
    pub fn shown_range(&self) -> Option<(usize, usize)> {
        self.descriptor().shown_range()
    }

    /// Moves to page `n` clamped to `[1, max(total_pages, 1)]`.
    /// Returns whether the index changed.
    pub fn go_to(&mut self, n: usize) -> bool {
        let target = clamp_index(n, self.total_pages());
        let changed = target != self.index;
        self.index = target;
        changed
    }

    /// Changes the page size and returns to the first page.
    /// Returns whether anything changed.
    pub fn set_page_size(&mut self, n: usize) -> bool {
        let n = n.max(1);
        let changed = n != self.size || self.index != 1;
        self.size = n;
        self.index = 1;
        changed
    }

    pub fn reset_index(&mut self) {
        self.index = 1;
    }

    /// Takes counts from a committed page.
    ///
    /// Returns `true` when the current index is beyond the last page and had
    /// to be clamped (the page on screen no longer exists).
    pub fn absorb(&mut self, page: &PageDescriptor) -> bool {
        self.size = page.size.max(1);
        self.total_count = page.total_count;
        let clamped = clamp_index(self.index, self.total_pages());
        let out_of_range = clamped != self.index;
        self.index = clamped;
        out_of_range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_to_clamps_to_last_page() {
        let mut p = Pagination::new(10);
        p.absorb(&PageDescriptor::new(1, 10, 25));
        assert_eq!(p.total_pages(), 3);
        assert!(p.go_to(4));
        assert_eq!(p.index(), 3);
        assert!(!p.go_to(3));
        p.go_to(0);
        assert_eq!(p.index(), 1);
    }

    #[test]
    fn test_go_to_before_first_load() {
        let mut p = Pagination::new(10);
        assert!(!p.go_to(5));
        assert_eq!(p.index(), 1);
    }

    #[test]
    fn test_set_page_size_resets_index() {
        let mut p = Pagination::new(10);
        p.absorb(&PageDescriptor::new(1, 10, 95));
        p.go_to(7);
        assert!(p.set_page_size(25));
        assert_eq!(p.index(), 1);
        assert_eq!(p.size(), 25);
        assert_eq!(p.total_pages(), 4);
    }

    #[test]
    fn test_absorb_reports_out_of_range() {
        let mut p = Pagination::new(10);
        p.absorb(&PageDescriptor::new(1, 10, 21));
        p.go_to(3);
        // last row of page 3 deleted
        assert!(p.absorb(&PageDescriptor::new(3, 10, 20)));
        assert_eq!(p.index(), 2);
    }

    #[test]
    fn test_shown_range() {
        let mut p = Pagination::new(10);
        p.absorb(&PageDescriptor::new(1, 10, 25));
        p.go_to(3);
        assert_eq!(p.shown_range(), Some((21, 25)));
        assert!(p.has_prev());
        assert!(!p.has_next());
    }
}
