//! Report Demonstration
//!
//! Walks through the labeled diff API on a small object graph.
#![allow(clippy::unwrap_used, clippy::expect_used)]
//!
//! Key concepts illustrated:
//! 1. Describing a type once as an ordered list of comparers
//! 2. Sequences with per-index paths and length checks
//! 3. Custom comparison functions
//! 4. Structured lines and assertion errors

use labeldiff_core::comparer::{comparable, comparable_option, func, slice, Comparers};
use labeldiff_core::logging_facility::{init, Profile};
use labeldiff_core::{check_diff, diff_lines, render_diff, Mismatch};

#[derive(Debug, Clone, PartialEq)]
struct Item {
    key: String,
    value: String,
}

#[derive(Debug, Clone, PartialEq)]
struct Object {
    id: u32,
    owner: Option<String>,
    weight: f64,
    items: Vec<Item>,
}

fn item(key: &str, value: &str) -> Item {
    Item {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn item_comparers(item: &Item) -> Comparers {
    vec![
        comparable("Key", item.key.clone()),
        comparable("Value", item.value.clone()),
    ]
}

fn object_comparers(obj: &Object) -> Comparers {
    vec![
        comparable("ID", obj.id),
        comparable_option("Owner", obj.owner.clone()),
        func("Weight", obj.weight, |a: &f64, b: &f64| {
            if (a - b).abs() > 0.01 {
                return Err(Mismatch::value(format!("{a} !~ {b}")));
            }
            Ok(())
        }),
        slice("Items", obj.items.clone(), item_comparers),
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init(Profile::from_env());

    println!("=== labeldiff Report Demo ===\n");

    let a = Object {
        id: 1,
        owner: Some("alice".to_string()),
        weight: 1.000,
        items: vec![item("item1", "value1"), item("item2", "value2")],
    };
    let b = Object {
        id: 2,
        owner: None,
        weight: 1.005,
        items: vec![item("item1", "value1"), item("item3", "value3")],
    };

    // ===== Part 1: Rendered report =====
    println!("## Part 1: Report\n");
    println!("{}\n", render_diff(&a, &b, object_comparers));

    // ===== Part 2: Equal values =====
    println!("## Part 2: Equal values\n");
    let same = render_diff(&a, &a.clone(), object_comparers);
    println!("empty report: {}\n", same.is_empty());

    // ===== Part 3: Length mismatch =====
    println!("## Part 3: Length mismatch\n");
    let mut longer = a.clone();
    longer.items.push(item("item4", "value4"));
    println!("{}\n", render_diff(&a, &longer, object_comparers));

    // ===== Part 4: Structured lines =====
    println!("## Part 4: Structured lines\n");
    for line in diff_lines(&a, &b, object_comparers) {
        println!("  path={:<16} description={}", line.path, line.description);
    }
    println!();

    // ===== Part 5: Assertion error =====
    println!("## Part 5: check_diff\n");
    match check_diff(&a, &b, object_comparers) {
        Ok(()) => println!("no difference"),
        Err(err) => println!("{err}\n(code {}, {} lines)", err.code(), err.mismatch_count()),
    }

    println!("\n=== Demo Complete ===");
    Ok(())
}
