//! A LIFO stack backed by fixed-size pages.
//!
//! Tree traversals in this crate never recurse on the native call stack;
//! they push pending work onto a [`PagedStack`] instead. Storage grows by
//! whole pages, so a deep traversal never pays for copying a large
//! contiguous buffer the way a reallocating `Vec` would.
//!
//! Pages emptied by `pop` are kept and reused by the next pushes. Memory is
//! only released when the stack itself is dropped.

/// Default number of slots per page.
pub const DEFAULT_PAGE_SIZE: usize = 4096;

/// A last-in-first-out container growing in page-sized blocks.
#[derive(Debug, Clone)]
pub struct PagedStack<T> {
    /// Allocated pages. Every page has a capacity of `page_size`.
    pages: Vec<Vec<T>>,
    /// Index of the page holding the top element.
    current: usize,
    /// Number of live elements across all pages.
    size: usize,
    page_size: usize,
}

impl<T> PagedStack<T> {
    /// Create a new stack with the default page size.
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// Create a new stack whose pages hold `page_size` elements each.
    ///
    /// A page size of zero is bumped to one.
    pub fn with_page_size(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        PagedStack {
            pages: vec![Vec::with_capacity(page_size)],
            current: 0,
            size: 0,
            page_size,
        }
    }

    /// Push an element onto the top of the stack.
    pub fn push(&mut self, elem: T) {
        self.reserve(1);
        if self.pages[self.current].len() == self.page_size {
            self.current += 1;
        }
        self.pages[self.current].push(elem);
        self.size += 1;
    }

    /// Push every element of `elems`, in iteration order.
    ///
    /// The last element yielded ends up on top.
    pub fn push_all<I>(&mut self, elems: I)
    where
        I: IntoIterator<Item = T>,
    {
        let iter = elems.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(lower);
        for elem in iter {
            self.push(elem);
        }
    }

    /// Remove and return the top element, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.size == 0 {
            return None;
        }

        let elem = self.pages[self.current].pop();
        self.size -= 1;
        if self.pages[self.current].is_empty() && self.current > 0 {
            self.current -= 1;
        }
        elem
    }

    /// Return a reference to the top element without removing it.
    pub fn peek(&self) -> Option<&T> {
        if self.size == 0 {
            return None;
        }
        self.pages[self.current].last()
    }

    /// Number of elements on the stack.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of elements a single page holds.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages currently allocated, including retained empty ones.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Total number of slots across all allocated pages.
    pub fn capacity(&self) -> usize {
        self.pages.len() * self.page_size
    }

    /// Make room for `additional` more elements, allocating exactly as many
    /// whole pages as the overflow needs. Existing pages are left untouched.
    fn reserve(&mut self, additional: usize) {
        let needed = self.size + additional;
        let capacity = self.capacity();
        if needed <= capacity {
            return;
        }

        let new_pages = (needed - capacity).div_ceil(self.page_size);
        self.pages.reserve(new_pages);
        for _ in 0..new_pages {
            self.pages.push(Vec::with_capacity(self.page_size));
        }
    }
}

impl<T> Default for PagedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for PagedStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push_all(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_lifo() {
        let mut stack = PagedStack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);

        assert_eq!(stack.len(), 3);
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_pop_empty_does_not_underflow() {
        let mut stack: PagedStack<u32> = PagedStack::with_page_size(2);
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.peek(), None);

        stack.push(7);
        assert_eq!(stack.peek(), Some(&7));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_lifo_across_page_boundary() {
        let mut stack = PagedStack::with_page_size(3);
        stack.push_all(0..10);

        assert_eq!(stack.len(), 10);
        assert_eq!(stack.page_count(), 4);

        let popped: Vec<i32> = std::iter::from_fn(|| stack.pop()).collect();
        assert_eq!(popped, (0..10).rev().collect::<Vec<_>>());
    }

    #[test]
    fn test_push_all_allocates_exact_pages() {
        let mut stack = PagedStack::with_page_size(4);
        stack.push_all([1, 2]);
        assert_eq!(stack.page_count(), 1);

        // 2 live + 7 new = 9 elements, capacity 4 → overflow of 5 needs 2 pages.
        stack.push_all(3..10);
        assert_eq!(stack.page_count(), 3);
        assert_eq!(stack.capacity(), 12);
        assert_eq!(stack.peek(), Some(&9));
    }

    #[test]
    fn test_pages_retained_after_pop() {
        let mut stack = PagedStack::with_page_size(2);
        stack.push_all(0..6);
        assert_eq!(stack.page_count(), 3);

        while stack.pop().is_some() {}
        assert_eq!(stack.page_count(), 3);
        assert!(stack.is_empty());

        // Refilling reuses the retained pages.
        stack.push_all(0..6);
        assert_eq!(stack.page_count(), 3);
        assert_eq!(stack.peek(), Some(&5));
    }

    #[test]
    fn test_interleaved_push_pop() {
        let mut stack = PagedStack::with_page_size(2);
        stack.push('a');
        stack.push('b');
        stack.push('c');
        assert_eq!(stack.pop(), Some('c'));
        stack.push('d');
        stack.push('e');
        assert_eq!(stack.len(), 4);
        assert_eq!(stack.pop(), Some('e'));
        assert_eq!(stack.pop(), Some('d'));
        assert_eq!(stack.pop(), Some('b'));
        stack.push('f');
        assert_eq!(stack.pop(), Some('f'));
        assert_eq!(stack.pop(), Some('a'));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_zero_page_size_is_bumped() {
        let mut stack = PagedStack::with_page_size(0);
        assert_eq!(stack.page_size(), 1);
        stack.extend(["x", "y"]);
        assert_eq!(stack.page_count(), 2);
        assert_eq!(stack.pop(), Some("y"));
    }
}
