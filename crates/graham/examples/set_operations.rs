//! Walk through `PointSet` set algebra on three overlapping diagonals.
//!
//! Run: `cargo run -p graham --example set_operations`

use graham::{Point, PointSet};

fn diagonal(range: std::ops::Range<i32>) -> PointSet {
    range.map(|i| Point::new(i, i)).collect()
}

fn yes_no(b: bool) -> &'static str {
    if b {
        "True"
    } else {
        "False"
    }
}

fn main() {
    println!("Initializing 3 sets...");
    let mut set1 = diagonal(0..5);
    let set2 = diagonal(2..7);
    let set3 = diagonal(4..9);

    println!("set1:\n{set1}");
    println!("set2:\n{set2}");
    println!("set3:\n{set3}");

    println!("set1 == set2: {}\n", yes_no(set1 == set2));
    println!("set2 != set3: {}\n", yes_no(set2 != set3));
    println!("set1 - set2:\n{}", &set1 - &set2);
    println!("set2 & set3:\n{}", &set2 & &set3);

    println!("Assigning set3 to set1 (deep copy)");
    set1.assign(&set3);
    println!("set1 == set3: {}", yes_no(set1 == set3));
}
