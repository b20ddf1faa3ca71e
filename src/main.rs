//! Muscle Gen CLI Application

use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use muscle_gen::config::{MuscleConfig, RigConfig};
use muscle_gen::generator::{generate_batch, generate_muscle, MuscleAsset};
use muscle_gen::io::{read_json_asset, write_asset_vtu, write_json_asset};
use muscle_gen::mesh::{signed_volume, surface_area};
use muscle_gen::preset::builtin_presets;
use muscle_gen::response::ResponseKind;
use std::path::{Path, PathBuf};

mod cli;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Presets => cmd_presets(),
        Commands::Generate {
            preset,
            joint_distance,
            length,
            radius,
            exponent,
            segments,
            rings,
            bulge,
            response,
            tendon,
            output,
            vtu,
            preview_weight,
        } => {
            let response = response
                .map(|r| r.parse::<ResponseKind>())
                .transpose()?;
            let config = MuscleConfig {
                name: None,
                joint_distance: preset.as_ref().map(|_| joint_distance),
                preset,
                length,
                base_radius: radius,
                shape_exponent: exponent,
                radial_segments: segments,
                longitudinal_rings: rings,
                bulge_factor: bulge,
                falloff_exponent: None,
                response,
                tendon_percent: tendon,
                output_file: None,
            };
            cmd_generate(&config, output, vtu, preview_weight)
        }
        Commands::Batch {
            config,
            output,
            vtu,
        } => cmd_batch(&config, output, vtu),
        Commands::Info { input } => cmd_info(&input),
    }
}

fn cmd_presets() -> anyhow::Result<()> {
    println!("\n{}", "=".repeat(60));
    println!("MUSCLE PRESETS");
    println!("{}", "=".repeat(60));
    println!();
    println!(
        "  {:<12} {:>8} {:>8} {:>8}  {}",
        "Name", "Radius", "Length", "Tendon", "Response"
    );
    for preset in builtin_presets() {
        println!(
            "  {:<12} {:>8.2} {:>7.2}x {:>7.0}%  {}",
            preset.name,
            preset.radius,
            preset.length_multiplier,
            preset.tendon_percent,
            preset.response
        );
    }
    println!();
    println!("{}", "=".repeat(60));

    Ok(())
}

fn cmd_generate(
    config: &MuscleConfig,
    output: Option<PathBuf>,
    vtu: Option<PathBuf>,
    preview_weight: Option<f64>,
) -> anyhow::Result<()> {
    let spec = config.to_spec().context("Invalid muscle parameters")?;
    let asset = generate_muscle(&spec)?;

    if output.is_none() && vtu.is_none() {
        print_summary(&asset)?;
        return Ok(());
    }

    if let Some(path) = output {
        write_json_asset(&asset, &path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Wrote {}", path.display());
    }
    if let Some(path) = vtu {
        write_asset_vtu(&asset, &path, preview_weight, None)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}

fn cmd_batch(config_path: &Path, output: Option<PathBuf>, vtu: bool) -> anyhow::Result<()> {
    let config = RigConfig::from_file(config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;
    let output_dir = output.unwrap_or_else(|| PathBuf::from(&config.output_dir));
    std::fs::create_dir_all(&output_dir)?;

    let (specs, stems): (Vec<_>, Vec<_>) = config.outputs()?.into_iter().unzip();
    let assets = generate_batch(&specs)?;

    let progress = ProgressBar::new(assets.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner} [{bar:40}] {pos}/{len} {msg}")?
            .progress_chars("=> "),
    );

    for (stem, asset) in stems.iter().zip(&assets) {
        progress.set_message(asset.name.clone());
        write_json_asset(asset, output_dir.join(format!("{}.json", stem)))?;
        if vtu {
            write_asset_vtu(asset, &output_dir.join(format!("{}.vtu", stem)), None, None)?;
        }
        progress.inc(1);
    }
    progress.finish_with_message("done");

    println!(
        "Generated {} muscles into {}",
        assets.len(),
        output_dir.display()
    );

    Ok(())
}

fn cmd_info(input: &Path) -> anyhow::Result<()> {
    println!("Reading muscle asset: {}", input.display());
    let asset = read_json_asset(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    print_summary(&asset)
}

fn print_summary(asset: &MuscleAsset) -> anyhow::Result<()> {
    let profile = &asset.base.profile;
    let rest_volume = signed_volume(&asset.base.faces, &asset.base.vertices)?;
    let bulged_volume = signed_volume(&asset.base.faces, &asset.bulge.vertices)?;
    let area = surface_area(&asset.base.faces, &asset.base.vertices)?;

    println!("\n{}", "=".repeat(60));
    println!("MUSCLE: {}", asset.name);
    println!("{}", "=".repeat(60));
    println!();
    println!("  Length:         {:.4}", profile.length);
    println!("  Base Radius:    {:.4}", profile.base_radius);
    println!("  Shape Exponent: {:.3}", profile.shape_exponent);
    println!(
        "  Resolution:     {} segments x {} rings",
        profile.radial_segments, profile.longitudinal_rings
    );
    println!();
    println!("  Vertices:       {}", asset.base.num_vertices());
    println!("  Faces:          {}", asset.base.num_faces());
    println!("  Tendon Faces:   {}", asset.tendon_faces.len());
    println!("  Surface Area:   {:.6}", area);
    println!();
    println!("  Bulge Factor:   {:.3}", asset.bulge.bulge_factor);
    println!("  Falloff:        {:.3}", asset.bulge.falloff_exponent);
    println!("  Rest Volume:    {:.6}", rest_volume);
    if rest_volume > 0.0 {
        println!(
            "  Bulged Volume:  {:.6} ({:.1}%)",
            bulged_volume,
            bulged_volume / rest_volume * 100.0
        );
    }
    println!();
    println!(
        "  Response:       {} ({})",
        asset.response,
        asset.response.expression()
    );
    println!();
    println!("{}", "=".repeat(60));

    Ok(())
}
