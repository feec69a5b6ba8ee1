// Command line front end for the navigation menu crates
// Snapshots are read from JSON files; results are printed as text or JSON

pub mod commands;
pub mod snapshot;
