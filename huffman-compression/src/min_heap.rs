use std::cmp::Ordering;

/// Binary min-heap ordered by a plain comparator function.
///
/// Ties are never resolved by insertion order, so two heaps fed the same
/// elements in any order pop them in the same sequence as long as the
/// comparator is total over those elements.
pub struct MinHeap<T> {
    items: Vec<T>,
    cmp: fn(&T, &T) -> Ordering,
}

impl<T> MinHeap<T> {
    pub fn new(items: Vec<T>, cmp: fn(&T, &T) -> Ordering) -> Self {
        let mut heap = MinHeap { items, cmp };
        let n = heap.items.len();
        for i in (0..n / 2).rev() {
            heap.sift_down(i);
        }
        heap
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    pub fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let smallest = self.items.pop();
        self.sift_down(0);
        smallest
    }

    fn less(&self, a: usize, b: usize) -> bool {
        (self.cmp)(&self.items[a], &self.items[b]) == Ordering::Less
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.less(i, parent) {
                break;
            }
            self.items.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, i: usize) {
        let n = self.items.len();
        let mut smallest = i;
        let left = 2 * i + 1;
        let right = 2 * i + 2;

        if left < n && self.less(left, smallest) {
            smallest = left;
        }

        if right < n && self.less(right, smallest) {
            smallest = right;
        }

        if smallest != i {
            self.items.swap(i, smallest);
            self.sift_down(smallest);
        }
    }
}
