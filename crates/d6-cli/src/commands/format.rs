use d6_mechanics::Notation;

pub fn run(value: &str) -> Result<(), String> {
    let formatted = match value.trim().parse::<i64>() {
        Ok(steps) => Notation::from_steps(steps).to_string(),
        Err(_) => Notation::format_text(value),
    };
    println!("{formatted}");
    Ok(())
}
