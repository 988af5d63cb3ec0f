use std::sync::Arc;

use log::{error, info};
use rand::Rng;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use leaplist::comparator::I32Comparator;
use leaplist::skiplist::SkipList;

const DEMO_KEYS: usize = 10;
const KEY_MODULUS: i32 = 10_000;

fn generate_random_keys(n: usize) -> Vec<i32> {
    let mut rng = rand::thread_rng();
    return (0..n).map(|_| rng.gen_range(0..KEY_MODULUS)).collect();
}

fn print_levels(list: &SkipList<i32>) {
    match list.render_levels() {
        Ok(rendered) => print!("{}", rendered),
        Err(err) => error!("cannot print the skip list: {}", err),
    }
}

fn main() {
    let _ = TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );

    let keys = generate_random_keys(DEMO_KEYS);
    let mut list = SkipList::from_keys(Arc::new(I32Comparator {}), keys);

    info!("size of the skip list: {}", list.len());
    print_levels(&list);

    list.add(123);
    list.add(456);
    info!("size of the skip list: {}", list.len());

    info!("search 123: {:?}", list.search(&123));
    info!("search 456: {:?}", list.search(&456));
    print_levels(&list);

    if let Err(err) = list.erase(&123) {
        error!("remove 123: {}", err);
    }
    if let Err(err) = list.erase(&456) {
        error!("remove 456: {}", err);
    }
    info!("size of the skip list: {}", list.len());
    print_levels(&list);

    if let Err(err) = list.clear() {
        error!("clear: {}", err);
    }
    info!("size of the skip list: {}", list.len());

    // the second clear has nothing left to release
    if let Err(err) = list.clear() {
        error!("clear: {}", err);
    }
}
