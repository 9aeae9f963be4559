//! Page descriptor and list page shared by every paginated endpoint.

use serde::{Deserialize, Serialize};

/// Position of a page inside a collection.
///
/// `index` is 1-based and always within `[1, max(total_pages, 1)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDescriptor {
    pub index: usize,
    pub size: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

/// `ceil(total_count / size)`; a zero size is treated as 1.
pub fn total_pages(total_count: usize, size: usize) -> usize {
    let size = size.max(1);
    total_count.div_ceil(size)
}

/// Clamps a 1-based page index into `[1, max(total_pages, 1)]`.
pub fn clamp_index(index: usize, total_pages: usize) -> usize {
    index.clamp(1, total_pages.max(1))
}

impl PageDescriptor {
    pub fn new(index: usize, size: usize, total_count: usize) -> Self {
        let size = size.max(1);
        let total_pages = total_pages(total_count, size);
        Self {
            index: clamp_index(index, total_pages),
            size,
            total_pages,
            total_count,
        }
    }

    pub fn empty(size: usize) -> Self {
        Self::new(1, size, 0)
    }

    pub fn has_prev(&self) -> bool {
        self.index > 1
    }

    pub fn has_next(&self) -> bool {
        self.index < self.total_pages
    }

    /// 1-based inclusive range of rows on this page, `None` when empty.
    pub fn shown_range(&self) -> Option<(usize, usize)> {
        if self.total_count == 0 {
            return None;
        }
        let first = (self.index - 1) * self.size + 1;
        if first > self.total_count {
            return None;
        }
        let last = (self.index * self.size).min(self.total_count);
        Some((first, last))
    }
}

/// One page of rows in server order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub page: PageDescriptor,
}

impl<T> ListPage<T> {
    pub fn empty(size: usize) -> Self {
        Self {
            items: Vec::new(),
            page: PageDescriptor::empty(size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_is_ceil() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn test_index_is_clamped() {
        let page = PageDescriptor::new(4, 10, 25);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.index, 3);

        let page = PageDescriptor::new(0, 10, 25);
        assert_eq!(page.index, 1);

        let page = PageDescriptor::new(7, 10, 0);
        assert_eq!(page.index, 1);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_shown_range() {
        assert_eq!(PageDescriptor::new(1, 10, 25).shown_range(), Some((1, 10)));
        assert_eq!(PageDescriptor::new(3, 10, 25).shown_range(), Some((21, 25)));
        assert_eq!(PageDescriptor::empty(10).shown_range(), None);
    }

    #[test]
    fn test_prev_next() {
        let page = PageDescriptor::new(2, 10, 25);
        assert!(page.has_prev());
        assert!(page.has_next());
        let last = PageDescriptor::new(3, 10, 25);
        assert!(!last.has_next());
    }
}
