use anyhow::Result;

use syscov_core::{exclusions, format_columns};

/// Print the entry points that are never counted.
pub fn list_exclusions_command(json: bool) -> Result<()> {
    let names = exclusions();

    if json {
        println!("{}", serde_json::to_string_pretty(names)?);
        return Ok(());
    }

    println!("EXCLUDED FUNCTIONS");
    print!("{}", format_columns(names));

    Ok(())
}
