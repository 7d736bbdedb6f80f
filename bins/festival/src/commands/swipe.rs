//! Swipe simulation against the configured stages

use super::Context;
use crate::output::{print_json, Status};
use anyhow::{bail, Result};
use clap::Args;
use festival_navigator::gesture::release_velocity;
use festival_navigator::{DragOutcome, Navigator, Point};

#[derive(Args)]
pub struct SwipeArgs {
    /// Stage the swipe starts on
    #[arg(short, long, default_value = "home")]
    pub stage: String,

    /// Pointer x at touch start, in px
    #[arg(long, allow_negative_numbers = true)]
    pub from_x: f64,

    /// Pointer x at release, in px
    #[arg(long, allow_negative_numbers = true)]
    pub to_x: f64,

    /// Vertical travel, in px
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub dy: f64,

    /// Gesture duration in milliseconds
    #[arg(short, long, default_value_t = 300.0)]
    pub elapsed: f64,

    /// Viewport width in px
    #[arg(long, default_value_t = 375.0)]
    pub viewport: f64,
}

pub fn run(ctx: &Context, args: &SwipeArgs) -> Result<()> {
    let mut navigator = Navigator::from_config(&ctx.config.schema.navigator)?;
    navigator.set_viewport_width(args.viewport);

    if navigator.go_to_stage(&args.stage, 0.0).is_none()
        && navigator.current_stage() != args.stage
    {
        bail!("Unknown stage '{}'", args.stage);
    }
    navigator.finish_transition();
    let start_stage = navigator.current_stage().to_string();

    let release = Point::new(args.to_x, args.dy);
    navigator.drag_start(Point::new(args.from_x, 0.0), 0.0);
    let frame = navigator.drag_move(release);
    let outcome = navigator.drag_end(release, args.elapsed);
    navigator.finish_transition();

    let delta_x = args.to_x - args.from_x;
    let velocity = release_velocity(delta_x, args.elapsed);

    if ctx.json {
        return print_json(&serde_json::json!({
            "start_stage": start_stage,
            "frame": frame,
            "velocity": velocity,
            "result": outcome,
            "stage": navigator.current_stage(),
        }));
    }

    println!(
        "Drag {:+.0} px over {} ms ({:.2} px/ms)",
        delta_x, args.elapsed, velocity.abs()
    );
    if let Some(frame) = frame {
        println!(
            "Track offset {:.1}%{}",
            frame.offset_percent,
            if frame.damped { " (rubber-band)" } else { "" }
        );
    }

    match outcome {
        DragOutcome::Committed(event) => Status::success(&format!(
            "Moved {} -> {} ({})",
            event.from_stage,
            event.to_stage,
            event.fragment()
        )),
        DragOutcome::SnapBack => Status::info(&format!("Snapped back to {}", start_stage)),
        DragOutcome::Ignored => Status::warning("No drag in progress"),
    }
    Ok(())
}
