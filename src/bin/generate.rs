//! Sprite sheet generator with subcommands
//!
//! Usage:
//!   cargo run --bin generate all                 # Every style
//!   cargo run --bin generate stick               # Stick figure only
//!   cargo run --bin generate pixel --out art/    # Pixel character into art/
//!   cargo run --bin generate layout              # Print frame layout as JSON
//!   cargo run --bin generate --help              # Show help

use anyhow::Result;
use character_sprites::{GeneratorSettings, SUCCESS_MESSAGE, SheetLayout, Style, generate};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let settings = match GeneratorSettings::default().take_output_arg(&mut args) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}\n", e);
            print_help();
            std::process::exit(1);
        }
    };

    let Some(command) = args.first() else {
        print_help();
        std::process::exit(1);
    };

    match command.as_str() {
        "all" => {
            println!("=== Character Sprite Generator ===\n");
            generate::run(&settings)?;
            println!("{}", SUCCESS_MESSAGE);
        }
        "layout" => {
            println!("{}", SheetLayout::standard().to_json()?);
        }
        "--help" | "-h" | "help" => {
            print_help();
        }
        other => match Style::from_name(other) {
            Some(style) => {
                println!("=== {} Sprite Generator ===\n", style);
                let written = generate::run(&settings.only(style))?;
                for path in written {
                    println!("  Created: {}", path.display());
                }
            }
            None => {
                eprintln!("Error: Unknown command '{}'\n", other);
                print_help();
                std::process::exit(1);
            }
        },
    }

    Ok(())
}

fn print_help() {
    println!(
        r#"Sprite Generator - Generate character sprite sheets

USAGE:
    cargo run --bin generate <COMMAND> [--out <DIR>]

COMMANDS:
    all         Generate every style
                Output: <DIR>/stick_figure_character.png
                        <DIR>/pixel_character.png
                        <DIR>/silhouette_character.png

    stick       Generate the stick figure sheet only
    pixel       Generate the pixel character sheet only
    silhouette  Generate the silhouette sheet only

    layout      Print frame positions within a sheet as JSON

    help        Show this help message

OPTIONS:
    -o, --out <DIR>   Output directory (default: sprites)

EXAMPLES:
    cargo run --bin generate all
    cargo run --bin generate silhouette --out assets/characters
"#
    );
}
