use d6_mechanics::compose_skill_notation;

pub fn run(
    attribute: &str,
    bonus_dice: i32,
    blips: i32,
    weakened: bool,
    learned: bool,
) -> Result<(), String> {
    println!(
        "{}",
        compose_skill_notation(attribute, bonus_dice, blips, weakened, learned)
    );
    Ok(())
}
