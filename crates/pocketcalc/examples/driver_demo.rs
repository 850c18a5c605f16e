//! Driver Demo
//!
//! Runs the unified verification suite against the bare engine and the
//! terminal front end, then replays a few key sequences in every locale.
//!
//! Run with: cargo run --example driver_demo

use pocketcalc::driver::{run_full_suite, CalculatorDriver, EngineDriver, TuiDriver};
use pocketcalc::format::Locale;

fn main() {
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║         pocketcalc Demo - same checks, every driver          ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    run_full_suite(&mut EngineDriver::new());
    println!("✓ engine driver passes the full suite");
    run_full_suite(&mut TuiDriver::new());
    println!("✓ tui driver passes the full suite");
    println!();

    println!("🧮 Replays:");
    for keys in ["3+4+5=", "2+3*4=", "1234567.89", "8/0=", "50%"] {
        print!("   {keys:<12}");
        for locale in Locale::ALL {
            let mut driver = EngineDriver::with_locale(locale);
            driver.type_keys(keys);
            print!(" │ {:>14}", driver.rendered());
        }
        println!();
    }
}
