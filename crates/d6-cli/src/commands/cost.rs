use d6_mechanics::step_cost;

pub fn run(steps: i64) -> Result<(), String> {
    let cost = step_cost(steps);
    println!(
        "  {} step{} cost {} Blip{}",
        steps.max(0),
        if steps.max(0) == 1 { "" } else { "s" },
        cost,
        if cost == 1 { "" } else { "s" },
    );
    Ok(())
}
