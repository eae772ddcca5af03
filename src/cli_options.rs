/*
cli_options.rs

Copyright 2025 Hervé Quatremain

This file is part of Escape Maze.

Escape Maze is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Escape Maze is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Escape Maze. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! These options are intended for developers working on the level generators.
//!
//! # Examples
//!
//! List the first levels with their tier and puzzle kind:
//!
//! ```text
//! $ escapemaze --ls --count 6
//!   0  tier 1  grid_code
//!   1  tier 1  pattern
//!   2  tier 1  slider
//!   3  tier 1  sequence
//!   4  tier 1  riddle
//!   5  tier 1  grid_code
//! ```
//!
//! Print the puzzle of a level, and check an answer:
//!
//! ```text
//! $ escapemaze --level 4
//! {"kind":"riddle","question":"What has hands but cannot clap?","answer":"clock"}
//! $ escapemaze --level 4 --answer '{"type":"text","value":"Clock"}'
//! accepted
//! ```

use clap::Parser;
use log::debug;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use escapemaze::catalog::LevelCatalog;
use escapemaze::difficulty::LevelIndex;
use escapemaze::puzzle::PuzzleDescriptor;
use escapemaze::settings::{ContentPack, GridCodeRule, SeedMode, Settings};
use escapemaze::validator::{Candidate, Verdict};

/// Inspect the Escape Maze levels.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// List the levels
    #[arg(long, default_value_t = false)]
    ls: bool,

    /// Number of levels to list
    #[arg(short, long, requires = "ls")]
    count: Option<u32>,

    /// Level to print
    #[arg(short, long)]
    level: Option<LevelIndex>,

    /// Answer to check for the level, in JSON
    #[arg(short, long, requires = "level")]
    answer: Option<String>,

    /// Regenerate the level this many times before using it
    #[arg(short, long, default_value_t = 0, requires = "level")]
    regenerate: u32,

    /// Settings file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Content pack
    #[arg(value_enum, short, long)]
    pack: Option<ContentPack>,

    /// Base seed for the levels
    #[arg(short, long)]
    seed: Option<u64>,

    /// Use a system random source instead of per-level seeds
    #[arg(long, default_value_t = false)]
    ambient: bool,

    /// Only accept grid-code selections that spell the code
    #[arg(long, default_value_t = false)]
    strict_codes: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Build the settings from the settings file and the command-line options.
fn build_settings(args: &Args) -> Result<Settings, String> {
    let mut settings: Settings = match &args.config {
        Some(path) => Settings::load(path).map_err(|e| format!("{}: {e}", path.display()))?,
        None => Settings::default(),
    };
    if let Some(pack) = args.pack {
        settings.pack = pack;
    }
    if let Some(seed) = args.seed {
        settings.base_seed = seed;
    }
    if args.ambient {
        settings.seed_mode = SeedMode::Ambient;
    }
    if args.strict_codes {
        settings.grid_code_rule = GridCodeRule::PlantedCode;
    }
    debug!("Settings: {settings:?}");
    Ok(settings)
}

/// Parse and process command-line options. Return the process exit code.
pub fn run() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let settings: Settings = match build_settings(&args) {
        Ok(s) => s,
        Err(msg) => {
            eprintln!("Error: {msg}");
            return 1;
        }
    };
    let mut catalog: LevelCatalog = match LevelCatalog::new(settings) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    //
    // List the levels
    //
    if args.ls {
        let count: u32 = args.count.unwrap_or(catalog.count()).min(catalog.count());
        for index in 0..count {
            match (catalog.tier(index), catalog.kind_at(index)) {
                (Ok(tier), Ok(kind)) => println!("{index:>3}  tier {tier}  {kind}"),
                (Err(e), _) | (_, Err(e)) => {
                    eprintln!("Error: {e}");
                    return 1;
                }
            }
        }
        return 0;
    }

    let Some(index) = args.level else {
        eprintln!("Nothing to do. Use --ls or --level, or --help for the list of options.");
        return 2;
    };

    //
    // Print the level, or check the answer
    //
    let mut descriptor: Result<Arc<PuzzleDescriptor>, _> = catalog.level_at(index);
    for _ in 0..args.regenerate {
        descriptor = catalog.regenerate(index);
    }
    let descriptor: Arc<PuzzleDescriptor> = match descriptor {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    let Some(answer) = args.answer else {
        match serde_json::to_string(descriptor.as_ref()) {
            Ok(json) => {
                println!("{json}");
                return 0;
            }
            Err(e) => {
                eprintln!("Error: {e}");
                return 1;
            }
        }
    };

    let candidate: Candidate = match serde_json::from_str(&answer) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Invalid answer {answer}: {e}");
            return 1;
        }
    };
    match catalog.validate(index, &candidate) {
        Ok(Verdict {
            accepted: true, ..
        }) => {
            println!("accepted");
            0
        }
        Ok(Verdict { hint, .. }) => {
            println!("rejected: {}", hint.unwrap_or_default());
            3
        }
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}
