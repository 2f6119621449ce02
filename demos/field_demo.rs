//! Text-mode A* field demo.
//!
//! Run: cargo run --bin field-demo [seed]

use gridpath_demos::{Frame, default_script, run_script, session_rng};
use gridpath_field::{Field, FieldConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let seed = std::env::args().nth(1).map(|s| s.parse::<u64>()).transpose()?;
    let mut rng = session_rng(seed);

    let cfg = FieldConfig::default();
    let mut field = Field::with_config(&cfg)?;
    cfg.barrier_randomizer().place(&mut field, &mut rng);
    field.recompute_if_dirty();
    print_frame(&Frame::capture("start", &field));

    let script = default_script(&field);
    for frame in run_script(&mut field, &script) {
        print_frame(&frame);
    }
    Ok(())
}

fn print_frame(frame: &Frame) {
    println!("== {} ==", frame.label);
    print!("{}", frame.text);
    match frame.steps {
        Some(n) => println!("path: {n} steps\n"),
        None => println!("path: none\n"),
    }
}
