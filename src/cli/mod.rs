//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the clap
//! argument parsing with the register.

pub mod session;

pub use session::run_session;

use crate::config::{KassaPaths, Settings};
use crate::display::{format_product_list, format_skipped_lines};
use crate::error::KassaResult;
use crate::storage::load_catalog;

/// Print the catalog, optionally with the product list lines that were skipped
pub fn handle_products_command(
    paths: &KassaPaths,
    settings: &Settings,
    show_skipped: bool,
) -> KassaResult<()> {
    let (catalog, skipped) = load_catalog(paths.products_file(), settings.include_seed_products);

    print!(
        "{}",
        format_product_list(catalog.products(), &settings.currency_suffix)
    );

    if show_skipped {
        println!();
        print!("{}", format_skipped_lines(&skipped));
    } else if !skipped.is_empty() {
        println!();
        println!(
            "{} product line(s) skipped. Run with --skipped for details.",
            skipped.len()
        );
    }

    Ok(())
}

/// Print paths and settings
pub fn handle_config_command(paths: &KassaPaths, settings: &Settings) -> KassaResult<()> {
    println!("Kassa Configuration");
    println!("===================");
    println!("Base directory:     {}", paths.base_dir().display());
    println!("Product list:       {}", paths.products_file().display());
    println!("Receipt counter:    {}", paths.receipt_number_file().display());
    println!("Receipts directory: {}", paths.receipts_dir().display());
    println!();
    println!("Settings:");
    println!("  Currency:                 {}", settings.currency_suffix);
    println!("  Receipt prefix:           {}", settings.receipt_prefix);
    println!(
        "  Save counter on checkout: {}",
        if settings.persist_sequence_on_checkout { "Yes" } else { "No" }
    );
    println!(
        "  Built-in products:        {}",
        if settings.include_seed_products { "Yes" } else { "No" }
    );
    Ok(())
}

/// Create directories and write the settings file unless one exists
pub fn handle_init_command(paths: &KassaPaths, settings: &Settings) -> KassaResult<()> {
    println!("Initializing Kassa at: {}", paths.base_dir().display());
    paths.ensure_directories()?;

    if paths.is_initialized() {
        println!(
            "Settings file already exists at {}; leaving it unchanged.",
            paths.settings_file().display()
        );
    } else {
        settings.save(paths)?;
    }

    println!("Initialization complete!");
    println!();
    println!(
        "Add products to {} as '<id> <name> <price> <kilo|st>', one per line.",
        paths.products_file().display()
    );
    Ok(())
}
