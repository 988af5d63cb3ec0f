use std::cmp::Ordering;

pub trait KeyComparator<T> {
    fn compare(&self, compare: &T, another: &T) -> Ordering;
}

pub struct I32Comparator {}

impl KeyComparator<i32> for I32Comparator {
    fn compare(&self, compare: &i32, another: &i32) -> Ordering {
        return compare.cmp(another);
    }
}

// inverts the ordering, mostly useful to prove the list follows
// the comparator rather than Ord on the key type
pub struct DescendingI32Comparator {}

impl KeyComparator<i32> for DescendingI32Comparator {
    fn compare(&self, compare: &i32, another: &i32) -> Ordering {
        return another.cmp(compare);
    }
}
