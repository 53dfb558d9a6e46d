//! Character sprites - writes every sprite sheet into `sprites/`
//!
//! Takes no arguments. See the `generate` binary for single styles.

use anyhow::Result;
use character_sprites::{GeneratorSettings, SUCCESS_MESSAGE, generate};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    generate::run(&GeneratorSettings::default())?;

    println!("{}", SUCCESS_MESSAGE);
    Ok(())
}
