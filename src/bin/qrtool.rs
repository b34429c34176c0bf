use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rust_qr_gen::encoder::mask::Penalty;
use rust_qr_gen::tools::{save_png, to_ascii, to_data_url};
use rust_qr_gen::{
    Color, ECLevel, EncodeOptions, MaskPattern, QrEncoder, RenderOptions, config, render,
};
use std::io::{IsTerminal, stderr};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Parser)]
#[command(name = "qrtool", version, about = "QR code generation tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args)]
struct SymbolArgs {
    /// Text to encode
    text: String,
    /// Error correction level (L, M, Q, H)
    #[arg(long, short)]
    level: Option<ECLevel>,
    /// Fixed version (1-40) instead of the smallest that fits
    #[arg(long = "symbol-version")]
    version: Option<u8>,
    /// Fixed mask (0-7) instead of the lowest penalty
    #[arg(long)]
    mask: Option<u8>,
}

#[derive(Subcommand)]
enum Command {
    /// Encode text and write a PNG (or print it as a data URL)
    Generate {
        #[command(flatten)]
        symbol: SymbolArgs,
        /// Output PNG path
        #[arg(long, short, required_unless_present = "data_url")]
        output: Option<PathBuf>,
        /// Print a `data:image/png;base64,...` URL to stdout
        #[arg(long)]
        data_url: bool,
        /// Image side in pixels
        #[arg(long)]
        size: Option<u32>,
        /// Quiet zone in modules
        #[arg(long)]
        margin: Option<u32>,
        /// Dark module color (#RGB, #RRGGBB, ...)
        #[arg(long, default_value = "#000000")]
        dark: Color,
        /// Light module color
        #[arg(long, default_value = "#ffffff")]
        light: Color,
    },
    /// Print the symbol as text
    Print {
        #[command(flatten)]
        symbol: SymbolArgs,
        /// Quiet zone in modules
        #[arg(long)]
        margin: Option<usize>,
    },
    /// Show version, level, mode, mask and the penalty of every mask
    Inspect {
        #[command(flatten)]
        symbol: SymbolArgs,
    },
}

fn main() -> Result<()> {
    init_logger();
    let cli = Cli::parse();

    match cli.command {
        Command::Generate {
            symbol,
            output,
            data_url,
            size,
            margin,
            dark,
            light,
        } => {
            let options = RenderOptions {
                size: size.unwrap_or_else(config::default_size),
                quiet_zone: margin.unwrap_or_else(config::default_margin),
                dark,
                light,
            };
            generate_cmd(&symbol, output, data_url, &options)
        }
        Command::Print { symbol, margin } => print_cmd(&symbol, margin),
        Command::Inspect { symbol } => inspect_cmd(&symbol),
    }
}

fn init_logger() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    tracing_subscriber::fmt()
        .with_writer(stderr)
        .with_ansi(stderr().is_terminal())
        .without_time()
        .compact()
        .with_env_filter(env_filter)
        .init();
}

fn encode_options(args: &SymbolArgs) -> Result<EncodeOptions> {
    let mask = match args.mask {
        Some(bits) => Some(
            MaskPattern::from_bits(bits)
                .with_context(|| format!("mask must be 0-7, got {bits}"))?,
        ),
        None => None,
    };
    Ok(EncodeOptions {
        ec_level: args.level.unwrap_or_else(config::default_ec_level),
        version: args.version,
        mask,
    })
}

fn generate_cmd(
    args: &SymbolArgs,
    output: Option<PathBuf>,
    data_url: bool,
    options: &RenderOptions,
) -> Result<()> {
    let code = QrEncoder::encode(&args.text, &encode_options(args)?)?;
    let image = render(&code.modules, options)?;

    if data_url {
        println!("{}", to_data_url(&image)?);
    }
    if let Some(output) = output {
        save_png(&image, &output)
            .with_context(|| format!("failed to write {}", output.display()))?;
        info!(path = %output.display(), side = image.width(), "wrote png");
        eprintln!(
            "Wrote {} ({}x{}, version {}, level {})",
            output.display(),
            image.width(),
            image.height(),
            code.version,
            code.error_correction
        );
    }
    Ok(())
}

fn print_cmd(args: &SymbolArgs, margin: Option<usize>) -> Result<()> {
    let code = QrEncoder::encode(&args.text, &encode_options(args)?)?;
    let margin = margin.unwrap_or_else(|| config::default_margin() as usize);
    print!("{}", to_ascii(&code.modules, margin));
    Ok(())
}

fn inspect_cmd(args: &SymbolArgs) -> Result<()> {
    let report = QrEncoder::encode_with_report(&args.text, &encode_options(args)?)?;
    let code = &report.code;
    println!("Version: {} ({}x{})", code.version, code.size(), code.size());
    println!("Error correction: {}", code.error_correction);
    println!("Mode: {}", code.mode);
    println!("Mask: {}", code.mask_pattern.index());
    println!("Dark modules: {}", code.modules.count_dark());

    match report.mask_scores {
        Some(scores) => {
            println!("Mask penalties:");
            for (mask, score) in scores.iter().enumerate() {
                let marker = if mask == code.mask_pattern.index() as usize {
                    " <"
                } else {
                    ""
                };
                println!("  {mask}: {score}{marker}");
            }
        }
        None => {
            let penalty = Penalty::evaluate(&code.modules);
            println!(
                "Penalty (forced mask): {} (N1={} N2={} N3={} N4={})",
                penalty.total(),
                penalty.runs,
                penalty.blocks,
                penalty.finder_like,
                penalty.balance
            );
        }
    }
    Ok(())
}
