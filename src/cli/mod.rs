//! CLI commands and interface

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "muscle-gen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the built-in muscle presets
    Presets,

    /// Generate a single muscle asset
    Generate {
        /// Preset to start from (e.g. "Biceps")
        #[arg(short, long, conflicts_with_all = ["length", "radius"])]
        preset: Option<String>,

        /// Distance between the two joints (preset mode)
        #[arg(long, default_value = "1.0")]
        joint_distance: f64,

        /// Explicit muscle length
        #[arg(long, requires = "radius")]
        length: Option<f64>,

        /// Explicit belly radius
        #[arg(long, requires = "length")]
        radius: Option<f64>,

        /// Shape exponent of the radius profile
        #[arg(long)]
        exponent: Option<f64>,

        /// Vertices per ring
        #[arg(long)]
        segments: Option<usize>,

        /// Number of ring spans along the axis
        #[arg(long)]
        rings: Option<usize>,

        /// Radial scale of the bulge target at the belly
        #[arg(long)]
        bulge: Option<f64>,

        /// Response kind: FLEXOR, EXTENSOR or DUAL
        #[arg(long)]
        response: Option<String>,

        /// Tendon percentage at each end
        #[arg(long)]
        tendon: Option<f64>,

        /// Output JSON asset path
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output VTU file path
        #[arg(long, value_name = "FILE")]
        vtu: Option<PathBuf>,

        /// Blend weight used for the VTU point positions (0 = rest, 1 = bulged)
        #[arg(long, requires = "vtu")]
        preview_weight: Option<f64>,
    },

    /// Generate every muscle listed in a rig configuration file
    Batch {
        /// Configuration file (JSON)
        #[arg(value_name = "FILE")]
        config: PathBuf,

        /// Output directory (overrides the configuration)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Also write a VTU file per muscle
        #[arg(long)]
        vtu: bool,
    },

    /// Display information about a JSON muscle asset
    Info {
        /// Path to the JSON asset
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}
