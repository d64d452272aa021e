//! Builds and merges containers of several kinds.
//!
//! Run with `RUST_LOG=terse=trace` to see what the builders copy and skip.

use std::collections::VecDeque;
use terse::collection::*;
use terse::container;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,terse=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let integers = linked_list(Some(&[1, 2, 3]));
    let integers2 = linked_set(Some(&[3, 4, 5]));

    let sources: [Option<&dyn Collection<Item = i32>>; 2] = [Some(&integers), Some(&integers2)];
    let union = linked_set_merged(sources[0], &sources[1..]);
    println!("{:?}", union.iter().collect::<Vec<_>>()); // [1, 2, 3, 4, 5]

    let objects = concurrent_set(Some(&["Hello", "1"]));
    println!("{:?}", objects.snapshot()); // ["Hello", "1"] in either order

    println!("{:?}", hash_set::<String>(None)); // {}

    let strings_with_absent = vec![None, Some("1"), None, Some("2")];
    let deduplicated = linked_set_merged(Some(&strings_with_absent), &[]);
    println!("{deduplicated:?}"); // {None, Some("1"), Some("2")}

    let unordered = hash_set(Some(&["Hello", "World", "3", "2", "1"]));
    let ordered = linked_set(Some(&["A", "B"]));
    let linked = linked_list(Some(&["C", "D"]));
    let indexed = vector(Some(&["E", "F"]));
    let mixed: [Option<&dyn Collection<Item = &str>>; 4] =
        [Some(&unordered), Some(&ordered), Some(&linked), Some(&indexed)];
    let merged: VecDeque<&str> = from_containers(VecDeque::new, mixed[0], &mixed[1..]);
    println!("{merged:?}"); // the five hashed strings, then A to F

    let queue = container![std::collections::BinaryHeap::new; "X", "Y", "Z"];
    println!("{:?}", queue.into_sorted_vec()); // ["X", "Y", "Z"]

    let empty_strings: [&str; 0] = [];
    println!("Expecting false : {}", has_at_least_one(Some(&empty_strings)));
    println!("Expecting false : {}", has_at_least_one(Some(&hash_set::<i32>(None))));
    println!("Expecting true : {}", has_at_least_one(Some(&integers)));

    println!("Expecting true : {}", is_absent_or_empty(Some(&hash_set::<i32>(None))));
    println!("Expecting false : {}", is_absent_or_empty(Some(&integers)));
}
