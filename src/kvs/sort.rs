/// The three primitives a comparison sort needs. Collections expose these and
/// [sort] does the rest, so the ordering rule lives with the collection while
/// the algorithm stays generic.
pub trait Sortable {
    fn len(&self) -> usize;

    /// Whether the element at `i` must precede the element at `j`.
    fn less(&self, i: usize, j: usize) -> bool;

    fn swap(&mut self, i: usize, j: usize);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Sorts `data` in place, ascending per its [Sortable::less]. Heapsort keeps
/// this O(n log n) in the worst case. Not stable, which is fine for
/// unique-keyed collections.
pub fn sort<S: Sortable + ?Sized>(data: &mut S) {
    let n = data.len();
    for root in (0..n / 2).rev() {
        sift_down(data, root, n);
    }
    for end in (1..n).rev() {
        data.swap(0, end);
        sift_down(data, 0, end);
    }
}

fn sift_down<S: Sortable + ?Sized>(data: &mut S, mut root: usize, end: usize) {
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            break;
        }
        if child + 1 < end && data.less(child, child + 1) {
            child += 1;
        }
        if !data.less(root, child) {
            break;
        }
        data.swap(root, child);
        root = child;
    }
}
