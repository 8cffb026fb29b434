//! Plan a route on an ASCII or generated map and print it.
//!
//! ```text
//! route [MAP_FILE] [--seed N] [--config FILE] [--threshold TYPE] [--max-length N]
//! ```
//!
//! A map file uses the characters read by `TerrainMap::parse` and must mark
//! the start with `S` and the destination with `D`. Without a map file a
//! cave is generated from the seed. Set `RUST_LOG=trace` to watch detours.
//!
//! ```text
//! route demos/maps/fort.txt --config demos/maps/config.json
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use edgewalk_core::Point;
use edgewalk_paths::{MoveType, PathConfig, PathFinder};
use edgewalk_terrain::{CaveRule, TerrainGen, TerrainMap, render_path};
use rand::SeedableRng;
use rand::rngs::StdRng;

const GEN_WIDTH: i32 = 60;
const GEN_HEIGHT: i32 = 20;

#[derive(Parser, Debug)]
#[command(name = "route", version, about = "Plan a route on a tile map")]
struct Args {
    /// ASCII map with `S` and `D` markers. A cave is generated if omitted.
    map: Option<PathBuf>,

    /// Seed for the generated map
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// JSON file with search limits
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Worst cell type the unit will enter
    #[arg(short, long, value_parser = parse_threshold, default_value = "ok")]
    threshold: MoveType,

    /// Command budget, terminator included
    #[arg(short = 'n', long, default_value_t = 300)]
    max_length: usize,
}

fn parse_threshold(s: &str) -> Result<MoveType, String> {
    MoveType::ALL
        .into_iter()
        .find(|mv| mv.to_string() == s)
        .ok_or_else(|| {
            let names: Vec<String> = MoveType::ALL.iter().map(|mv| mv.to_string()).collect();
            format!("expected one of {}", names.join(", "))
        })
}

fn load_config(path: Option<&Path>) -> Result<PathConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&text)?)
        }
        None => Ok(PathConfig::default()),
    }
}

fn load_map(path: &Path) -> Result<(TerrainMap, Point, Point), Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    let parsed = TerrainMap::parse(&text)?;
    let start = parsed.start.ok_or("map has no S marker")?;
    let dest = parsed.destination.ok_or("map has no D marker")?;
    Ok((parsed.map, start, dest))
}

fn generate_map(seed: u64) -> Result<(TerrainMap, Point, Point), Box<dyn std::error::Error>> {
    let mut g = TerrainGen::with_map(
        TerrainMap::new(GEN_WIDTH, GEN_HEIGHT),
        StdRng::seed_from_u64(seed),
    );
    g.cellular_automata_cave(MoveType::No, 0.42, &[CaveRule::default()]);
    g.scatter(MoveType::Destroyable, 0.02);
    let start = g.random_open().ok_or("generated map has no open cell")?;
    let dest = g.random_open().ok_or("generated map has no open cell")?;
    g.clear(&[start, dest]);
    Ok((g.into_map(), start, dest))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    let finder = PathFinder::new(config)?;

    let (map, start, dest) = match &args.map {
        Some(path) => load_map(path)?,
        None => {
            log::info!("generating {GEN_WIDTH}x{GEN_HEIGHT} map with seed {}", args.seed);
            generate_map(args.seed)?
        }
    };

    let path = finder.find_path(&map, start, dest, args.max_length, args.threshold)?;

    let moves: Vec<String> = path.moves().iter().map(|f| f.to_string()).collect();
    println!("from {start} to {dest}");
    println!("moves ({}): {}", path.length(), moves.join(" "));
    println!("cost: {}", path.cost());
    println!("reached: {}", path.is_complete(dest));
    println!();
    println!("{}", render_path(&map, &path, dest));
    Ok(())
}
