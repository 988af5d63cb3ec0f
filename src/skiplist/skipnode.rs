use crate::skiplist::arena::NodeIndex;
use crate::skiplist::MAX_LEVEL;

pub type Link = Option<NodeIndex>;

pub struct SkipNode<KEY> {
    pub key: KEY,
    // drawn once at creation, never changes afterwards
    pub height: usize,
    // fixed row, only the first `height` slots are ever linked
    pub next: [Link; MAX_LEVEL],
}

impl<KEY> SkipNode<KEY> {
    pub fn new(key: KEY, height: usize) -> Self {
        return SkipNode {
            key,
            height,
            next: [None; MAX_LEVEL],
        };
    }
}
