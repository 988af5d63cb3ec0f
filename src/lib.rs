pub mod skiplist;
pub mod comparator;
pub mod errors;

#[macro_use] extern crate log;
extern crate simplelog;
