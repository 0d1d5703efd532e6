//! Seeded worksheet with an answer key.
//!
//! Run with: `cargo run --example worksheet`
//!
//! Shows the three ways into the library:
//!
//! 1. **Whole worksheet**: `generate_worksheet` with a fixed seed, rendered
//!    as text with the answer key appended.
//! 2. **Single kind**: `generate_problems` for one operator, printing each
//!    problem next to its answer.
//! 3. **Capped retries**: an impossible request fails fast instead of
//!    blocking when a `RetryLimit::Capped` is set.

use arith_drill_gen::{
    generate_problems, generate_worksheet, worksheet, DrillRequest, ProblemKind, RetryLimit,
    WorksheetConfig,
};

fn main() {
    let config = WorksheetConfig { rng_seed: Some(2024), ..WorksheetConfig::default() };
    match generate_worksheet(&config) {
        Ok(sheet) => print!("{}", worksheet::render_text(&sheet, true)),
        Err(e) => eprintln!("worksheet failed: {e}"),
    }

    println!("\n── Division only ──");
    let request = DrillRequest { rng_seed: Some(7), ..DrillRequest::new(ProblemKind::Division, 10) };
    if let Ok(batch) = generate_problems(&request) {
        for p in &batch {
            match p.answer() {
                Some(answer) => println!("{:>8}   → {}", worksheet::problem_line(p), answer),
                None => println!("{:>8}   → ?", worksheet::problem_line(p)),
            }
        }
    }

    println!("\n── Capped retries ──");
    // An addition batch holds five problems, so six distinct ones never appear.
    let impossible = DrillRequest {
        rng_seed: Some(1),
        retry_limit: RetryLimit::Capped(100),
        ..DrillRequest::new(ProblemKind::Addition, 6)
    };
    match generate_problems(&impossible) {
        Ok(_) => println!("unexpectedly succeeded"),
        Err(e) => println!("error: {e}"),
    }
}
