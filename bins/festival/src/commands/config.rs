//! Effective configuration

use super::Context;
use crate::output::print_json;
use anyhow::Result;

pub fn run(ctx: &Context) -> Result<()> {
    if ctx.json {
        return print_json(&ctx.config.schema);
    }

    match &ctx.config.path {
        Some(path) => println!("# Loaded from {}", path.display()),
        None => println!("# No config file found, showing defaults"),
    }
    print!("{}", ctx.config.to_toml()?);
    Ok(())
}
