//! Interactive configuration of the stored settings.

use anyhow::Result;
use inquire::CustomType;
use weatherbot_core::Config;

pub fn run() -> Result<()> {
    let mut config = Config::load()?;

    config.max_candidates =
        CustomType::<u8>::new("How many location matches should a lookup offer?")
            .with_default(config.max_candidates)
            .with_error_message("Please enter a whole number")
            .prompt()?;

    config.confirm_clicks =
        CustomType::<u32>::new("How many 'check another city' presses confirm a reset?")
            .with_default(config.confirm_clicks)
            .with_error_message("Please enter a whole number")
            .prompt()?;

    config.save()?;
    println!("Saved settings to {}", Config::config_file_path()?.display());

    Ok(())
}
