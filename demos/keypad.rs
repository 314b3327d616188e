//! Keypad
//!
//! This example plays the presentation layer: it reads keypad labels from
//! stdin, dispatches them to a calculator store and prints the screen after
//! every key.
//!
//! Key concepts:
//! - The store owns the canonical state; the loop only reads snapshots
//! - Invalid keys are reported, ignored keys are silent no-ops
//! - Transition logging via `RUST_LOG=keypad_calc=debug`
//!
//! Run with: cargo run --example keypad
//! Then type labels separated by spaces, e.g. `5 0 + 2 5 =`

use keypad_calc::calculator::{Action, CalculatorStore};
use keypad_calc::display::{FormatOptions, Screen};
use std::io::{self, BufRead};
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("=== Keypad Calculator ===");
    println!("Keys: 0-9 . + - * / = AC DEL\n");

    let options = FormatOptions::default();
    let mut store = CalculatorStore::calculator();

    for line in io::stdin().lock().lines() {
        for label in line?.split_whitespace() {
            match label.parse::<Action>() {
                Ok(action) => {
                    store.dispatch(action);
                }
                Err(e) => eprintln!("{e}"),
            }
        }
        println!("{}\n", Screen::render(store.state(), &options));
    }

    println!(
        "{} keys dispatched, {} ignored",
        store.dispatched(),
        store.ignored()
    );
    Ok(())
}
