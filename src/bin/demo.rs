//! Builds `{1, 2, 3}`, erases the minimum and prints the new minimum.

use persistent_set::persistent::PersistentSet;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut set = PersistentSet::new();
    set.insert(1);
    set.insert(2);
    set.insert(3);

    if let Err(error) = set.erase(set.begin()) {
        eprintln!("erase failed: {error}");
        return ExitCode::FAILURE;
    }

    match set.begin().get() {
        Some(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("set is empty");
            ExitCode::FAILURE
        }
    }
}
