// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RoomPlan CLI - room geometry from the command line.
//!
//! Every command prints JSON on stdout; logs go to stderr.
//!
//! # Commands
//!
//! - `boundary` - Outline points for a room shape
//! - `walls` - Visible wall segments (front wall removed)
//! - `anchor` - World anchor of one furniture pose
//! - `canvas` - Outline fitted onto a 2D canvas
//! - `scene <layout.json>` - Full scene summary for a saved layout
//! - `add <layout.json> <type>` - Add a catalog item to a layout
//! - `catalog` - Furniture catalog

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use roomplan_core::{make_item, FurnitureItem, RoomShape, RoomSpec, FURNITURE_CATALOG};
use roomplan_geometry::walls::extract_walls_with_epsilon;
use roomplan_geometry::{
    default_drop_position, fit_items_in_room, generate, to_world_anchor, world_rotation_y,
    PlanViewport, RoomScene, SceneConfig, DEFAULT_CANVAS_PADDING,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

mod types;

use types::{points, LayoutFile, SceneSummary, WallData};

#[derive(Parser, Debug)]
#[command(name = "roomplan", version, about = "Room outline, wall and furniture pose geometry")]
struct Cli {
    /// Plan units per world unit, overriding ROOMPLAN_UNIT_SCALE
    #[arg(long, global = true)]
    unit: Option<f64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the outline of a room
    Boundary(RoomArgs),
    /// Print the visible walls of a room
    Walls(RoomArgs),
    /// Print the world anchor of a furniture pose
    Anchor(AnchorArgs),
    /// Print a room outline in canvas coordinates
    Canvas(CanvasArgs),
    /// Summarize the 3D scene for a saved layout
    Scene {
        layout: PathBuf,
        /// Move items back inside the room box first
        #[arg(long)]
        fit: bool,
    },
    /// Add a catalog item to a layout and print the updated layout
    Add {
        layout: PathBuf,
        /// Catalog type (chair, table, bed, sofa, wardrobe)
        kind: String,
    },
    /// Print the furniture catalog
    Catalog,
}

#[derive(Args, Debug)]
struct RoomArgs {
    #[arg(long, default_value_t = 450.0)]
    width: f64,
    #[arg(long, default_value_t = 320.0)]
    height: f64,
    /// RECT, L, L_REV, U, CIRCLE, OVAL or SEMICIRCLE; anything else is RECT
    #[arg(long, default_value = "RECT")]
    shape: String,
    /// Clamp dimensions into the room editor's range
    #[arg(long)]
    clamp: bool,
}

impl RoomArgs {
    fn spec(&self) -> RoomSpec {
        let spec = RoomSpec::new(self.width, self.height, RoomShape::from_name(&self.shape));
        if self.clamp {
            spec.clamped()
        } else {
            spec
        }
    }
}

#[derive(Args, Debug)]
struct AnchorArgs {
    #[arg(long, default_value_t = 450.0)]
    room_width: f64,
    #[arg(long, default_value_t = 320.0)]
    room_height: f64,
    #[arg(long)]
    x: f64,
    #[arg(long)]
    y: f64,
    #[arg(long)]
    w: f64,
    #[arg(long)]
    h: f64,
    /// Degrees clockwise
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    rotation: f64,
    #[arg(long, default_value_t = 1.0)]
    scale: f64,
    #[arg(long, default_value_t = 0.0)]
    elevation: f64,
}

#[derive(Args, Debug)]
struct CanvasArgs {
    #[command(flatten)]
    room: RoomArgs,
    #[arg(long, default_value_t = 800.0)]
    canvas_width: f64,
    #[arg(long, default_value_t = 600.0)]
    canvas_height: f64,
    #[arg(long, default_value_t = DEFAULT_CANVAS_PADDING)]
    padding: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnchorOutput {
    position: [f64; 3],
    rotation_y: f64,
}

#[derive(Debug, Serialize)]
struct CanvasOutput {
    scale: f64,
    padding: f64,
    polygon: Vec<f64>,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn,roomplan_geometry=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = SceneConfig::from_env();
    if let Some(unit) = cli.unit {
        config.unit_scale = unit;
    }
    config.validate()?;

    run(cli.command, &config)
}

fn run(command: Command, config: &SceneConfig) -> anyhow::Result<()> {
    match command {
        Command::Boundary(args) => {
            let spec = args.spec();
            print_json(&points(&generate(spec.width, spec.height, spec.shape)))
        }
        Command::Walls(args) => {
            let spec = args.spec();
            let boundary = generate(spec.width, spec.height, spec.shape);
            let walls: Vec<WallData> =
                extract_walls_with_epsilon(boundary.points(), config.front_epsilon)
                    .iter()
                    .map(WallData::from)
                    .collect();
            print_json(&walls)
        }
        Command::Anchor(args) => print_json(&anchor(&args, config.unit_scale)),
        Command::Canvas(args) => {
            let spec = args.room.spec();
            let viewport =
                PlanViewport::fit(&spec, args.canvas_width, args.canvas_height, args.padding);
            print_json(&CanvasOutput {
                scale: viewport.scale,
                padding: viewport.padding,
                polygon: viewport.flatten(&generate(spec.width, spec.height, spec.shape)),
            })
        }
        Command::Scene { layout, fit } => {
            let layout = read_layout(&layout)?;
            let spec = layout.room.spec();
            let items = if fit {
                fit_items_in_room(&layout.items, &spec)
            } else {
                layout.items
            };
            let scene = RoomScene::build(&spec, &items, config)
                .with_context(|| format!("building scene for room '{}'", layout.room.name))?;
            print_json(&SceneSummary::new(&layout.room.name, &scene))
        }
        Command::Add { layout, kind } => {
            let mut layout = read_layout(&layout)?;
            let drop = default_drop_position(&layout.room.spec());
            let item = make_item(&kind, drop.x, drop.y)?;
            tracing::info!(id = %item.id, kind = %item.kind, x = drop.x, y = drop.y, "added item");
            layout.items.push(item);
            print_json(&layout)
        }
        Command::Catalog => print_json(&FURNITURE_CATALOG),
    }
}

fn anchor(args: &AnchorArgs, unit: f64) -> AnchorOutput {
    let room = RoomSpec::new(args.room_width, args.room_height, RoomShape::Rect);
    let mut item = FurnitureItem::new("anchor", args.x, args.y, args.w, args.h);
    item.rotation = args.rotation;
    item.scale = args.scale;
    item.elevation = args.elevation;

    let p = to_world_anchor(&item, &room, unit);
    AnchorOutput {
        position: [p.x, p.y, p.z],
        rotation_y: world_rotation_y(&item),
    }
}

fn read_layout(path: &Path) -> anyhow::Result<LayoutFile> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading layout {}", path.display()))?;
    let layout = serde_json::from_str::<LayoutFile>(&text)
        .with_context(|| format!("parsing layout {}", path.display()))?
        .with_clamped_controls();
    tracing::debug!(
        path = %path.display(),
        shape = %layout.room.shape,
        items = layout.items.len(),
        "loaded layout"
    );
    Ok(layout)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_walls_command() {
        let cli = Cli::try_parse_from(["roomplan", "walls", "--width", "600", "--shape", "U"])
            .unwrap();
        match cli.command {
            Command::Walls(args) => {
                let spec = args.spec();
                assert_eq!(spec.width, 600.0);
                assert_eq!(spec.height, 320.0);
                assert_eq!(spec.shape, RoomShape::U);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_clamp_flag() {
        let cli = Cli::try_parse_from([
            "roomplan", "boundary", "--width", "50", "--height", "5000", "--clamp",
        ])
        .unwrap();
        let Command::Boundary(args) = cli.command else {
            panic!("expected boundary command");
        };
        let spec = args.spec();
        assert_eq!((spec.width, spec.height), (200.0, 1200.0));
    }

    #[test]
    fn test_anchor_worked_example() {
        let cli = Cli::try_parse_from([
            "roomplan", "anchor", "--x", "100", "--y", "100", "--w", "60", "--h", "60",
            "--rotation", "90",
        ])
        .unwrap();
        let Command::Anchor(args) = cli.command else {
            panic!("expected anchor command");
        };
        let out = anchor(&args, 100.0);
        assert_relative_eq!(out.position[0], -1.55, epsilon = 1e-9);
        assert_relative_eq!(out.position[1], 0.0);
        assert_relative_eq!(out.position[2], -0.3, epsilon = 1e-9);
        assert_relative_eq!(out.rotation_y, -std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn test_unit_scale_env_is_left_to_scene_config() {
        std::env::set_var("ROOMPLAN_UNIT_SCALE", "not-a-number");
        let cli = Cli::try_parse_from(["roomplan", "catalog"]).unwrap();
        assert_eq!(cli.unit, None);
        assert_eq!(SceneConfig::from_env().unit_scale, 100.0);
        std::env::remove_var("ROOMPLAN_UNIT_SCALE");

        let cli = Cli::try_parse_from(["roomplan", "walls", "--unit", "50"]).unwrap();
        assert_eq!(cli.unit, Some(50.0));
    }

    #[test]
    fn test_unknown_shape_name_is_rect() {
        let args = RoomArgs {
            width: 450.0,
            height: 320.0,
            shape: "HEXAGON".into(),
            clamp: false,
        };
        assert_eq!(args.spec().shape, RoomShape::Rect);
    }
}
