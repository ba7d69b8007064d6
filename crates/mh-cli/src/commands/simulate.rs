use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use mh_core::{Equipment, Player};
use mh_simulation::{HuntEventKind, Simulation};

use crate::autopilot::Autopilot;

pub fn run(
    config: Option<&Path>,
    ticks: u64,
    seed: Option<u64>,
    max_events: Option<usize>,
    verbose: bool,
    json: bool,
) -> Result<(), String> {
    let mut config = super::load_config(config)?;
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    if let Some(max) = max_events {
        config = config.with_max_events(max);
    }

    let mut sim = Simulation::new(config).map_err(|e| format!("simulation setup failed: {e}"))?;
    let mut pilot = Autopilot::new();
    pilot
        .drive(&mut sim, ticks)
        .map_err(|e| format!("simulation error: {e}"))?;

    if json {
        let out = serde_json::to_string_pretty(sim.state()).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    // Header
    let stats = pilot.stats();
    let seconds = sim.clock().elapsed_ms() as f64 / 1000.0;
    println!(
        "  {} {}",
        "Maple Hunt".bold(),
        format!(
            "({ticks} ticks, seed={}, {}ms/tick)",
            sim.config().seed,
            sim.config().tick_ms
        )
        .dimmed()
    );
    println!(
        "  {} monsters slain, {} swings ({} hits), {} jumps, {} events logged",
        stats.kills,
        stats.swings,
        stats.hits,
        stats.jumps,
        sim.events().len()
    );
    println!(
        "  Gear: {} equipped, {} discarded",
        stats.equipped, stats.discarded
    );
    println!("  Hunt time: {seconds:.1}s");
    println!();

    // Events
    if verbose {
        println!("  {}", "Event Log".bold().underline());
        println!();
        for event in sim.events().events() {
            let tick_label = format!("[tick {:>4}]", event.tick).dimmed();
            let desc = colorize_event(&event.kind, &event.description);
            println!("  {tick_label} {desc}");
        }
        if sim.events().is_empty() {
            println!("  {}", "(no events)".dimmed());
        }
        println!();
    } else {
        let notable: Vec<_> = sim
            .events()
            .events()
            .iter()
            .filter(|e| e.kind.is_notable())
            .collect();
        if !notable.is_empty() {
            println!("  {}", "Notable Events".bold().underline());
            for event in notable {
                let label = match event.kind {
                    HuntEventKind::LevelUp { .. } => "LEVEL".green().bold(),
                    HuntEventKind::PlayerDefeated { .. } => "DOWN ".red().bold(),
                    _ => "GEAR ".cyan().bold(),
                };
                println!("  {label} {}", event.description);
            }
            println!();
        }
    }

    // Hero status table
    println!("  {}", "Hero Status".bold().underline());
    println!();
    let state = sim.state();
    let player = &state.player;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Stat", "Value"]);
    table.add_row(vec!["Level".to_string(), player.level.to_string()]);
    table.add_row(vec!["HP".to_string(), format_hp_bar(player)]);
    table.add_row(vec![
        "EXP".to_string(),
        format!("{}/{}", player.exp, player.exp_to_next),
    ]);
    table.add_row(vec!["Gold".to_string(), player.gold.to_string()]);
    table.add_row(vec![
        "Attack".to_string(),
        player.attack_power().to_string(),
    ]);
    table.add_row(vec![
        "Defense".to_string(),
        player.defense_power().to_string(),
    ]);
    table.add_row(vec!["Weapon".to_string(), gear_label(player.weapon.as_ref())]);
    table.add_row(vec!["Armor".to_string(), gear_label(player.armor.as_ref())]);
    table.add_row(vec![
        "Inventory".to_string(),
        state.inventory.len().to_string(),
    ]);
    table.add_row(vec![
        "Monsters".to_string(),
        state.monsters.len().to_string(),
    ]);
    table.add_row(vec!["Drops".to_string(), state.drops.len().to_string()]);
    println!("{table}");
    println!();

    Ok(())
}

fn colorize_event(kind: &HuntEventKind, description: &str) -> colored::ColoredString {
    match kind {
        HuntEventKind::Welcome => description.bold(),
        HuntEventKind::Swing { .. } => description.normal(),
        HuntEventKind::MonsterSlain { .. } => description.yellow(),
        HuntEventKind::LevelUp { .. } => description.green().bold(),
        HuntEventKind::PlayerDefeated { .. } => description.red().bold(),
        HuntEventKind::Pickup { .. } => description.blue(),
        HuntEventKind::GearLooted { .. } | HuntEventKind::Equipped { .. } => description.cyan(),
        HuntEventKind::Discarded { .. } => description.dimmed(),
    }
}

fn gear_label(item: Option<&Equipment>) -> String {
    item.map_or_else(|| "--".to_string(), ToString::to_string)
}

fn format_hp_bar(player: &Player) -> String {
    let frac = player.hp_fraction();
    let filled = (frac * 10.0).round() as usize;
    let empty = 10_usize.saturating_sub(filled);
    let bar = format!("{}{}", "#".repeat(filled), "-".repeat(empty));
    let label = format!("{}/{}", player.hp, player.max_hp);

    if frac <= 0.25 {
        format!("[{}] {label}", bar.red())
    } else if frac <= 0.5 {
        format!("[{}] {label}", bar.yellow())
    } else {
        format!("[{}] {label}", bar.green())
    }
}
