use anyhow::Result;
use colored::Colorize;

use crate::config::ShelfConfig;
use crate::store::seed_records;

pub fn handle_init() -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(".bookshelf.yml");

    if config_path.exists() {
        anyhow::bail!("Project already initialized at {}", config_path.display());
    }

    let config = ShelfConfig::default();
    config.save(&config_path)?;

    let records_path = config.records_path(&cwd);
    seed_records().save(&records_path)?;

    println!(
        "{} catalog project in {}",
        "Initialized".green(),
        cwd.display()
    );
    println!("  Config:  {}", config_path.display());
    println!("  Records: {}", records_path.display());

    Ok(())
}
