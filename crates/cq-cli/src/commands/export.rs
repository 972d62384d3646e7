use std::path::Path;

pub fn run(output: Option<&Path>) -> Result<(), String> {
    let content = cq_core::content::castle_content().map_err(|e| e.to_string())?;
    let json = content.to_json_pretty().map_err(|e| e.to_string())?;

    match output {
        Some(path) => {
            std::fs::write(path, json + "\n")
                .map_err(|e| format!("cannot write {}: {e}", path.display()))?;
            eprintln!("  Wrote {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
