use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use d6_mechanics::{Character, CharacterContext, CreationPolicy, PointBudget};

pub fn run(
    file: &Path,
    policy: Option<&Path>,
    character: Option<&str>,
    json: bool,
) -> Result<(), String> {
    let policy = match policy {
        Some(path) => CreationPolicy::from_json(&super::read_file(path)?)
            .map_err(|e| format!("{}: {e}", path.display()))?,
        None => CreationPolicy::default(),
    };

    let content = super::read_file(file)?;
    let characters = if content.trim_start().starts_with('[') {
        Character::list_from_json(&content)
    } else {
        Character::from_json(&content).map(|c| vec![c])
    }
    .map_err(|e| format!("{}: {e}", file.display()))?;

    let ctx = CharacterContext::new(policy).with_characters(characters);
    let selected: Vec<&Character> = match character {
        Some(id) => vec![ctx.character(id).map_err(|e| e.to_string())?],
        None => ctx.characters().iter().collect(),
    };

    if selected.is_empty() {
        println!("  No characters found.");
        return Ok(());
    }

    if json {
        let budgets: Vec<_> = selected
            .iter()
            .map(|c| {
                serde_json::json!({
                    "id": c.id,
                    "name": c.name,
                    "budget": PointBudget::evaluate(c, ctx.policy()),
                })
            })
            .collect();
        let text = serde_json::to_string_pretty(&budgets)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{text}");
        return Ok(());
    }

    for c in selected {
        print_budget(c, &ctx)?;
    }
    Ok(())
}

fn print_budget(character: &Character, ctx: &CharacterContext) -> Result<(), String> {
    let policy = ctx.policy();
    let budget = ctx.budget(&character.id).map_err(|e| e.to_string())?;
    let hp = ctx.hit_points(&character.id).map_err(|e| e.to_string())?;

    let name = if character.name.is_empty() {
        character.id.as_str()
    } else {
        character.name.as_str()
    };
    println!("  {} [{}]", name.bold(), hp.to_string().dimmed());

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Points", "Used", "Limit", "Remaining"]);
    for (label, used, limit, remaining) in [
        (
            "Attribute points",
            budget.used_attribute_points,
            policy.max_attribute_points,
            budget.remaining_attribute_points,
        ),
        (
            "Skill points",
            budget.used_skill_points,
            policy.max_skill_points,
            budget.remaining_skill_points,
        ),
        (
            "Blibs",
            budget.used_blibs,
            policy.max_blibs,
            budget.remaining_blibs,
        ),
        (
            "Blips",
            budget.used_blips,
            budget.total_blip_budget,
            budget.remaining_blips,
        ),
    ] {
        table.add_row(vec![
            label.to_string(),
            used.to_string(),
            limit.to_string(),
            remaining.to_string(),
        ]);
    }
    println!("{table}");

    if budget.needs_reduction {
        println!("  {}", "over the limit, needs reduction".red());
    } else if budget.has_remaining_points {
        println!("  {}", "points left to spend".green());
    } else {
        println!("  all points spent");
    }
    println!();
    Ok(())
}
