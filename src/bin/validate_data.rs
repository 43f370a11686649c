//! Verify the whole dataset: every file must read and parse, every entity
//! is validated and reported pass/fail.
//! Run: cargo run --bin validate_data

use std::path::Path;

fn main() {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let data_dir = Path::new(&manifest_dir).join("data");

    match pharos::data::verify_dataset(&data_dir) {
        Ok(report) => {
            println!("{report}");
            if report.passed() {
                println!("all entities valid");
            } else {
                println!("some entities failed validation (see above)");
            }
        }
        Err(err) => {
            eprintln!("data validation failed: {err}");
            std::process::exit(1);
        }
    }
}
