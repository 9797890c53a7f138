//! Load spring settings from a JSON file and report whether they're usable.
//!
//! Missing fields fall back to the defaults.

use spaghetti::SpringSettings;

fn main() {
    let path = std::env::args().nth(1).expect("needs filename");
    let data = std::fs::read_to_string(path).unwrap();
    let settings: SpringSettings = serde_json::from_str(&data).unwrap();
    match settings.validate() {
        Ok(()) => println!("{}", serde_json::to_string_pretty(&settings).unwrap()),
        Err(e) => {
            eprintln!("invalid settings: {}", e);
            std::process::exit(1);
        }
    }
}
