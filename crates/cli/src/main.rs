#![deny(unsafe_code)]
//! CLI binary for the hueforge palette toolkit.
//!
//! Subcommands:
//! - `generate <scheme>`: build a palette, optionally keeping pinned slots
//! - `contrast <a> <b>`: WCAG contrast ratio and level
//! - `convert <color>`: hex, RGB, HSL and luminance of a color
//! - `replay <json>`: regenerate a palette from a saved recipe
//! - `list`: print available schemes and styles

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use hueforge_core::{
    check_contrast, hex_to_hsl, hex_to_rgb, luminance, regenerate, Palette, PaletteStyle, PinSet,
    Scheme, Seed, DEFAULT_COUNT,
};
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Parser)]
#[command(name = "hueforge", about = "Color palette generator and contrast checker")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a palette.
    Generate {
        /// Scheme name (analogous, monochromatic, complementary, triadic, random).
        scheme: String,

        /// Palette style (seeded, vivid).
        #[arg(long, default_value = "seeded")]
        style: String,

        /// Base color the seeded style builds around.
        #[arg(short, long)]
        base: Option<String>,

        /// Number of colors.
        #[arg(short, long, default_value_t = DEFAULT_COUNT)]
        count: usize,

        /// PRNG seed. Defaults to one taken from the clock.
        #[arg(long)]
        seed: Option<u64>,

        /// Comma-separated slot indices to keep from --previous.
        #[arg(long, value_delimiter = ',')]
        pinned: Vec<usize>,

        /// Comma-separated colors of the palette being regenerated.
        #[arg(long, value_delimiter = ',')]
        previous: Vec<String>,
    },
    /// Check the WCAG contrast between two colors.
    Contrast {
        foreground: String,
        background: String,
    },
    /// Show a color as hex, RGB and HSL.
    Convert { color: String },
    /// Regenerate a palette from a recipe JSON string.
    Replay { recipe: String },
    /// List available schemes and styles.
    List,
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn print_palette(recipe: &Seed, palette: &Palette, json: bool) -> Result<(), CliError> {
    if json {
        let info = serde_json::json!({
            "recipe": recipe,
            "colors": palette,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        for color in palette.iter() {
            println!("{color}");
        }
        eprintln!(
            "{} {} palette, {} colors, seed {}",
            recipe.style.name(),
            recipe.scheme.name(),
            palette.len(),
            recipe.seed
        );
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let schemes = Scheme::list_names();
            let styles = PaletteStyle::list_names();
            if cli.json {
                let info = serde_json::json!({
                    "schemes": schemes,
                    "styles": styles,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Schemes:");
                for name in schemes {
                    println!("  {name}");
                }
                println!("Styles:");
                println!("  {}", styles.join(", "));
            }
        }
        Command::Generate {
            scheme,
            style,
            base,
            count,
            seed,
            pinned,
            previous,
        } => {
            if !pinned.is_empty() && previous.is_empty() {
                return Err(CliError::Input("--pinned requires --previous".into()));
            }
            let seed = seed.unwrap_or_else(|| {
                let s = clock_seed();
                log::info!("using clock seed {s}");
                s
            });
            let recipe = Seed {
                scheme: Scheme::from_name(&scheme)?,
                style: PaletteStyle::from_name(&style)?,
                base,
                count,
                seed,
            };
            let fresh = recipe.generate()?;
            let palette = if pinned.is_empty() {
                fresh
            } else {
                let previous = Palette::new(previous.as_slice())?;
                let pins: PinSet = pinned.into_iter().collect();
                log::debug!("keeping pinned slots {:?}", pins.iter().collect::<Vec<_>>());
                regenerate(&previous, &pins, fresh)
            };
            print_palette(&recipe, &palette, cli.json)?;
        }
        Command::Replay { recipe } => {
            let recipe: Seed = serde_json::from_str(&recipe)
                .map_err(|e| CliError::Input(format!("invalid recipe JSON: {e}")))?;
            let palette = recipe.generate()?;
            print_palette(&recipe, &palette, cli.json)?;
        }
        Command::Contrast {
            foreground,
            background,
        } => {
            let result = check_contrast(&foreground, &background)?;
            if cli.json {
                let info = serde_json::json!({
                    "foreground": foreground,
                    "background": background,
                    "result": result,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                let yes_no = |b: bool| if b { "yes" } else { "no" };
                println!("ratio: {:.2}:1", result.ratio);
                println!("level: {}", result.level);
                println!("AA:    {}", yes_no(result.meets_aa));
                println!("AAA:   {}", yes_no(result.meets_aaa));
            }
        }
        Command::Convert { color } => {
            let rgb = hex_to_rgb(&color)?;
            let hsl = hex_to_hsl(&color)?;
            let lum = luminance(&color)?;
            if cli.json {
                let info = serde_json::json!({
                    "hex": rgb,
                    "rgb": { "r": rgb.r, "g": rgb.g, "b": rgb.b },
                    "hsl": hsl,
                    "luminance": lum,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("hex:       {}", rgb.to_hex());
                println!("rgb:       rgb({}, {}, {})", rgb.r, rgb.g, rgb.b);
                println!("hsl:       hsl({}, {}%, {}%)", hsl.h, hsl.s, hsl.l);
                println!("luminance: {lum:.4}");
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
