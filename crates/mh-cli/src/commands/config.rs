use mh_simulation::GameConfig;

pub fn run() -> Result<(), String> {
    let json = serde_json::to_string_pretty(&GameConfig::default()).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}
