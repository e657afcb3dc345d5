use d6_mechanics::dice::{self, Notation};

pub fn run(notation: &str) -> Result<(), String> {
    let parsed = Notation::parse(notation);
    let range = dice::range(notation);
    println!("  {parsed}: {} to {}", range.min, range.max);
    println!("  (a six on the red die explodes past {})", range.max);
    Ok(())
}
