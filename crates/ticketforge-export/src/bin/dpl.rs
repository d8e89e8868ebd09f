//! # DPL Export Tool
//!
//! Turns catalog JSON files into the `.dpl` files the redemption counter
//! imports.
//!
//! ## Usage
//! ```bash
//! # Export a product catalog
//! cargo run -p ticketforge-export --bin dpl -- --products catalog.json
//!
//! # Export products and prizes into a specific directory
//! cargo run -p ticketforge-export --bin dpl -- \
//!     --products catalog.json --prizes prizes.json --out ./exports
//!
//! # Print the documents to stdout instead of writing files
//! cargo run -p ticketforge-export --bin dpl -- --products catalog.json --preview
//! ```

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use ticketforge_core::dpl;
use ticketforge_export::{store, DplWriter, ExportError};
use tracing_subscriber::EnvFilter;

/// Initializes structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=ticketforge=trace` - Show trace for ticketforge crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,ticketforge=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn print_help() {
    println!("Ticketforge DPL Export Tool");
    println!();
    println!("Usage: dpl [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -p, --products <PATH>  Product catalog JSON file");
    println!("  -z, --prizes <PATH>    Prize catalog JSON file");
    println!("  -o, --out <DIR>        Output directory (default: .)");
    println!("      --preview          Print documents to stdout, write nothing");
    println!("  -h, --help             Show this help message");
}

fn run() -> Result<(), ExportError> {
    let args: Vec<String> = env::args().collect();

    let mut products_path: Option<PathBuf> = None;
    let mut prizes_path: Option<PathBuf> = None;
    let mut out_dir = PathBuf::from(".");
    let mut preview = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--products" | "-p" => {
                if i + 1 < args.len() {
                    products_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--prizes" | "-z" => {
                if i + 1 < args.len() {
                    prizes_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--out" | "-o" => {
                if i + 1 < args.len() {
                    out_dir = PathBuf::from(&args[i + 1]);
                    i += 1;
                }
            }
            "--preview" => {
                preview = true;
            }
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    if products_path.is_none() && prizes_path.is_none() {
        print_help();
        println!();
        println!("Nothing to do: pass --products and/or --prizes.");
        return Ok(());
    }

    let writer = DplWriter::new(&out_dir);

    if let Some(path) = products_path {
        let catalog = store::load_products(&path)?;
        println!("✓ Loaded {} products from {}", catalog.len(), path.display());

        if preview {
            print!("{}", dpl::product_document(catalog.products()));
        } else {
            let written = writer.write_product_export(&catalog)?;
            println!("✓ Wrote product export: {}", written.display());
        }
    }

    if let Some(path) = prizes_path {
        let catalog = store::load_prizes(&path)?;
        println!("✓ Loaded {} prizes from {}", catalog.len(), path.display());

        if preview {
            print!("{}", dpl::prize_document(catalog.prizes()));
        } else {
            let written = writer.write_prize_export(&catalog)?;
            println!("✓ Wrote prize export: {}", written.display());
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
