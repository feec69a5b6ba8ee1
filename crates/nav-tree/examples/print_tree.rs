//! Load a JSON array of group records and print the resulting menu tree
//!
//! Usage:
//!   cargo run --example print_tree <groups.json>
//!
//! Without a path a small built-in menu is printed.

use std::env;
use std::fs;
use nav_tree::prelude::*;
use nav_tree::{count_nodes, render_forest};

fn sample() -> Vec<GroupRecord> {
    vec![
        GroupRecord::new("main", "Main menu").with_children(["docs", "blog"]),
        GroupRecord::new("docs", "Docs").with_children(["guides"]),
        GroupRecord::new("guides", "Guides"),
        GroupRecord::new("blog", "Blog").with_priority(1),
        GroupRecord::new("footer", "Footer").with_priority(1),
    ]
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let records = match args.get(1) {
        Some(path) => {
            println!("Loading groups: {}", path);
            let text = match fs::read_to_string(path) {
                Ok(text) => text,
                Err(e) => {
                    eprintln!("Error reading {}: {}", path, e);
                    std::process::exit(1);
                }
            };
            match serde_json::from_str::<Vec<GroupRecord>>(&text) {
                Ok(records) => records,
                Err(e) => {
                    eprintln!("Error parsing {}: {}", path, e);
                    std::process::exit(1);
                }
            }
        }
        None => sample(),
    };

    let forest = match build_forest(&records) {
        Ok(forest) => forest,
        Err(e) => {
            eprintln!("Error building tree: {}", e);
            std::process::exit(1);
        }
    };

    println!();
    print!("{}", render_forest(&forest));
    println!();
    println!("Records: {}", records.len());
    println!("Roots:   {}", forest.len());
    println!("Nodes:   {}", count_nodes(&forest));
}
