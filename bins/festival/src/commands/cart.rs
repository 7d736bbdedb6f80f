//! Cart and theme commands backed by the local store

use super::Context;
use crate::output::{format_count, print_json, Status};
use anyhow::Result;
use clap::Subcommand;
use festival_cart::{checkout, Cart, ThemePreference};
use festival_core::RecordId;
use festival_site::view::format_price;
use owo_colors::OwoColorize;
use std::convert::Infallible;

#[derive(Subcommand)]
pub enum CartAction {
    /// Add a shop item by id
    Add {
        #[arg(value_parser = parse_record_id)]
        id: RecordId,

        /// Units to add
        #[arg(short, long, default_value_t = 1)]
        qty: u32,
    },

    /// Change the quantity of a line (0 removes it)
    Set {
        #[arg(value_parser = parse_record_id)]
        id: RecordId,
        qty: u32,
    },

    /// Remove a line
    Remove {
        #[arg(value_parser = parse_record_id)]
        id: RecordId,
    },

    /// Show the cart
    List,

    /// Empty the cart
    Clear,

    /// Summarise the order (no payment is taken)
    Checkout,
}

/// Integer ids must match numeric fixture ids, so parse through `FromStr`
fn parse_record_id(raw: &str) -> std::result::Result<RecordId, Infallible> {
    raw.parse()
}

pub fn run(ctx: &Context, action: CartAction) -> Result<()> {
    let mut store = ctx.store()?;
    let mut cart = Cart::load(&store);

    match action {
        CartAction::Add { id, qty } => {
            let catalog = ctx.catalog();
            let item = catalog.shop_item(&id)?;
            let title = cart.add(item, qty)?.title.clone();
            cart.save(&mut store)?;
            Status::success(&format!(
                "Added {} x {} ({} in cart)",
                qty,
                title,
                format_count(cart.item_count() as usize, "item", "items")
            ));
        }
        CartAction::Set { id, qty } => {
            cart.set_quantity(&id, qty)?;
            cart.save(&mut store)?;
            Status::success(&format!("Updated {}", id));
        }
        CartAction::Remove { id } => {
            let line = cart.remove(&id)?;
            cart.save(&mut store)?;
            Status::success(&format!("Removed {}", line.title));
        }
        CartAction::List => list(ctx, &cart)?,
        CartAction::Clear => {
            cart.clear();
            cart.save(&mut store)?;
            Status::success("Cart cleared");
        }
        CartAction::Checkout => {
            let summary = checkout(&cart)?;
            if ctx.json {
                return print_json(&summary);
            }
            list(ctx, &cart)?;
            println!();
            Status::info(summary.notice);
        }
    }
    Ok(())
}

fn list(ctx: &Context, cart: &Cart) -> Result<()> {
    if ctx.json {
        return print_json(&serde_json::json!({
            "lines": cart.lines(),
            "item_count": cart.item_count(),
            "total_cents": cart.total(),
        }));
    }

    if cart.is_empty() {
        Status::info("Cart is empty");
        return Ok(());
    }

    Status::header("Cart");
    for line in cart.lines() {
        println!(
            "  {:>3} x {:<32} {:>10}",
            line.quantity,
            line.title,
            format_price(line.subtotal_cents())
        );
    }
    println!(
        "  {:<38} {:>10}",
        format_count(cart.item_count() as usize, "item", "items"),
        format_price(cart.total()).bold().to_string()
    );
    Ok(())
}

pub fn theme(ctx: &Context, toggle: bool) -> Result<()> {
    let mut store = ctx.store()?;
    let mut theme = ThemePreference::load(&store);

    if toggle {
        theme = theme.toggle();
        theme.save(&mut store)?;
    }

    if ctx.json {
        return print_json(&theme);
    }
    println!("{}", theme);
    Ok(())
}
