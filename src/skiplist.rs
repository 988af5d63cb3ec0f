use std::cmp::Ordering;
use std::fmt::Display;
use std::sync::Arc;

use crate::comparator::KeyComparator;
use crate::errors::{Error, Result};
use crate::skiplist::arena::{NodeArena, NodeIndex};
use crate::skiplist::coinflipper::{CoinFlipper, CoinFlipperRand};
use crate::skiplist::skipnode::{Link, SkipNode};

mod arena;
mod skipnode;
pub mod coinflipper;
pub mod skipiterator;

// every tower lives in levels 0..height, height never exceeds this.
// 10 covers structures of roughly 2^10 keys before towers saturate.
pub const MAX_LEVEL: usize = 10;

type Comparator<KEY> = Arc<dyn KeyComparator<KEY>>;

#[derive(Debug, PartialEq, Eq)]
pub enum AddResult {
    Added,
    // the key was already stored, nothing changed
    AlreadyPresent,
}

// splice points recorded by one top-to-bottom walk:
// per level, the last node before the target and the first at or past it
struct Descent {
    prev: [Link; MAX_LEVEL],
    curr: [Link; MAX_LEVEL],
    found: Option<NodeIndex>,
}

pub struct SkipList<KEY> {
    // head[level] is the first node whose tower reaches that level
    head: [Link; MAX_LEVEL],
    arena: NodeArena<KEY>,
    coin_flipper: Box<dyn CoinFlipper>,
    key_comparator: Comparator<KEY>,
}

impl<KEY> SkipList<KEY> {
    pub fn new(key_comparator: Comparator<KEY>) -> Self {
        return Self::with_flipper(key_comparator, Box::new(CoinFlipperRand::new()));
    }

    pub fn with_flipper(key_comparator: Comparator<KEY>, coin_flipper: Box<dyn CoinFlipper>) -> Self {
        return SkipList {
            head: [None; MAX_LEVEL],
            arena: NodeArena::new(),
            coin_flipper,
            key_comparator,
        };
    }

    pub fn from_keys(key_comparator: Comparator<KEY>, keys: impl IntoIterator<Item = KEY>) -> Self {
        let mut list = Self::new(key_comparator);
        for key in keys {
            list.add(key);
        }
        return list;
    }

    pub fn is_empty(&self) -> bool {
        return self.head[0].is_none();
    }

    // counted off the bottom chain, where every key appears exactly once
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut next = self.head[0];
        while let Some(idx) = next {
            count += 1;
            next = self.arena.node(idx).next[0];
        }
        return count;
    }

    pub fn search(&self, target: &KEY) -> Option<&KEY> {
        let mut level = self.top_level()?;
        let mut anchor: Link = None;

        loop {
            match self.link_after(anchor, level) {
                Some(idx) => match self.compare(&self.arena.node(idx).key, target) {
                    Ordering::Less => anchor = Some(idx),
                    Ordering::Equal => return Some(&self.arena.node(idx).key),
                    Ordering::Greater => {
                        if level == 0 {
                            return None;
                        }
                        level -= 1;
                    }
                },
                None => {
                    if level == 0 {
                        return None;
                    }
                    level -= 1;
                }
            }
        }
    }

    pub fn contains(&self, target: &KEY) -> bool {
        return self.search(target).is_some();
    }

    pub fn add(&mut self, key: KEY) -> AddResult {
        let walk = self.descend(&key);
        if walk.found.is_some() {
            return AddResult::AlreadyPresent;
        }

        let height = self.choose_height();
        let idx = self.arena.alloc(SkipNode::new(key, height));
        for level in 0..height {
            self.arena.node_mut(idx).next[level] = walk.curr[level];
            match walk.prev[level] {
                Some(before) => self.arena.node_mut(before).next[level] = Some(idx),
                None => self.head[level] = Some(idx),
            }
        }
        return AddResult::Added;
    }

    pub fn erase(&mut self, key: &KEY) -> Result<()> {
        let walk = self.descend(key);
        let target = match walk.found {
            Some(idx) => idx,
            None => return Err(Error::KeyNotFound),
        };

        // the tower occupies levels 0..height, and on each of them the
        // descent stopped exactly at the target node
        let height = self.arena.node(target).height;
        for level in 0..height {
            debug_assert_eq!(walk.curr[level], Some(target));
            let after = self.arena.node(target).next[level];
            match walk.prev[level] {
                Some(before) => self.arena.node_mut(before).next[level] = after,
                None => self.head[level] = after,
            }
        }
        // one slot per key, no matter how many levels the tower spanned
        self.arena.free(target);
        return Ok(());
    }

    pub fn clear(&mut self) -> Result<()> {
        if self.is_empty() {
            return Err(Error::EmptyList);
        }

        let mut released = 0;
        let mut next = self.head[0];
        while let Some(idx) = next {
            next = self.arena.node(idx).next[0];
            self.arena.free(idx);
            released += 1;
        }
        self.head = [None; MAX_LEVEL];

        debug!("cleared skip list, released {} nodes", released);
        return Ok(());
    }

    fn compare(&self, key: &KEY, another: &KEY) -> Ordering {
        return self.key_comparator.compare(key, another);
    }

    fn top_level(&self) -> Option<usize> {
        return (0..MAX_LEVEL).rev().find(|&level| self.head[level].is_some());
    }

    fn link_after(&self, at: Link, level: usize) -> Link {
        return match at {
            Some(idx) => self.arena.node(idx).next[level],
            None => self.head[level],
        };
    }

    fn descend(&self, target: &KEY) -> Descent {
        let mut prev = [None; MAX_LEVEL];
        let mut curr = [None; MAX_LEVEL];
        let mut before: Link = None;

        for level in (0..MAX_LEVEL).rev() {
            let mut next = self.link_after(before, level);
            while let Some(idx) = next {
                if self.compare(&self.arena.node(idx).key, target) != Ordering::Less {
                    break;
                }
                before = Some(idx);
                next = self.arena.node(idx).next[level];
            }
            prev[level] = before;
            curr[level] = next;
        }

        // the bottom chain holds every key, so a hit always shows up there
        let found = curr[0]
            .filter(|&idx| self.compare(&self.arena.node(idx).key, target) == Ordering::Equal);

        return Descent { prev, curr, found };
    }

    fn choose_height(&mut self) -> usize {
        let mut height = 1;
        while height < MAX_LEVEL && self.coin_flipper.flip() {
            height += 1;
        }
        return height;
    }
}

impl<KEY> SkipList<KEY>
where
    KEY: Display,
{
    // one line per populated level, highest first, nil-terminated
    pub fn render_levels(&self) -> Result<String> {
        let top = self.top_level().ok_or(Error::EmptyList)?;

        let mut out = String::new();
        for level in (0..=top).rev() {
            let mut next = self.head[level];
            while let Some(idx) = next {
                let node = self.arena.node(idx);
                out.push_str(&format!("{} -> ", node.key));
                next = node.next[level];
            }
            out.push_str("nil\n");
        }
        return Ok(out);
    }
}
