//! Builds a small list, looks a key up, deletes another and dumps the
//! levels before and after.
//!
//! Run with `cargo run --example walkthrough`.

use skiplist_kv::{Error, SkipList};

fn main() {
    let mut sl = SkipList::new();
    print!("{}", sl.display_entries());
    println!();

    for (key, value) in [
        (14, "alpha"),
        (23, "beta"),
        (34, "gamma"),
        (42, "delta"),
        (50, "epsilon"),
        (59, "zeta"),
        (66, "eta"),
        (72, "theta"),
        (79, "iota"),
    ] {
        sl.insert(key, value);
    }
    print!("{}", sl.display_keys());

    let key_to_search = 34;
    match sl.lookup(&key_to_search) {
        Ok(value) => println!("\nKey ({key_to_search}) Value: {value}"),
        Err(Error::NotFound) => println!("\nKey {key_to_search} not found"),
        Err(e) => println!("\nLookup failed: {e}"),
    }

    let key_to_delete = 50;
    sl.delete(&key_to_delete);
    println!("\nKey Deleted: {key_to_delete}\n");
    print!("{}", sl.display_keys());
}
