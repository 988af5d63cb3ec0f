use crate::skiplist::skipnode::Link;
use crate::skiplist::SkipList;

// walks the bottom chain, which enumerates every key in order
pub struct SkipIterator<'a, KEY> {
    list: &'a SkipList<KEY>,
    next: Link,
}

impl<'a, KEY> Iterator for SkipIterator<'a, KEY> {
    type Item = &'a KEY;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.next?;
        let node = self.list.arena.node(idx);
        self.next = node.next[0];
        return Some(&node.key);
    }
}

impl<KEY> SkipList<KEY> {
    pub fn iter(&self) -> SkipIterator<'_, KEY> {
        return SkipIterator {
            list: self,
            next: self.head[0],
        };
    }
}

impl<'a, KEY> IntoIterator for &'a SkipList<KEY> {
    type Item = &'a KEY;
    type IntoIter = SkipIterator<'a, KEY>;

    fn into_iter(self) -> Self::IntoIter {
        return self.iter();
    }
}
