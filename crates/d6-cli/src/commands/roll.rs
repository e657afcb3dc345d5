use colored::Colorize;
use d6_mechanics::dice::{self, DieSource, FixedDice, RollOutcome, Verdict};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub fn run(
    notation: &str,
    target: Option<u32>,
    seed: Option<u64>,
    faces: Option<&str>,
    json: bool,
) -> Result<(), String> {
    let outcome = match (faces, seed) {
        (Some(faces), _) => {
            let mut source = FixedDice::parse(faces).map_err(|e| e.to_string())?;
            roll_with(notation, target, &mut source)
        }
        (None, Some(seed)) => roll_with(notation, target, &mut StdRng::seed_from_u64(seed)),
        (None, None) => roll_with(notation, target, &mut rand::rng()),
    };

    if json {
        let text = serde_json::to_string_pretty(&outcome)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{text}");
        return Ok(());
    }

    print_outcome(&outcome);
    Ok(())
}

fn roll_with(notation: &str, target: Option<u32>, source: &mut impl DieSource) -> RollOutcome {
    match target {
        Some(target) => dice::roll_against(notation, target, source),
        None => dice::roll(notation, source),
    }
}

fn print_outcome(outcome: &RollOutcome) {
    println!("  {}", outcome.notation.bold());

    let others: Vec<String> = outcome.dice.iter().skip(1).map(u32::to_string).collect();
    let red = outcome.red_die().to_string();
    if others.is_empty() {
        println!("  red die:   {}", red.red());
    } else {
        println!("  red die:   {}  others: {}", red.red(), others.join(", "));
    }

    if outcome.exploded() {
        let chain: Vec<String> = outcome.exploding.iter().map(u32::to_string).collect();
        println!("  exploding: {}", chain.join(", "));
    }
    if outcome.modifier > 0 {
        println!("  modifier:  +{}", outcome.modifier);
    }
    println!("  total:     {}", outcome.total.to_string().bold());

    if let Some(target) = outcome.target {
        println!("  target:    {target}");
    }

    let verdict = outcome.verdict();
    match verdict {
        Verdict::CriticalFailure => println!("  {}", verdict.to_string().red().bold()),
        Verdict::Success => println!("  {}", verdict.to_string().green()),
        Verdict::Failure => println!("  {}", verdict.to_string().yellow()),
        Verdict::Unjudged => {}
    }
}
