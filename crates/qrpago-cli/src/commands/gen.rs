//! Gen command - render arbitrary data as a QR image.

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use qrpago_core::qrgen;

/// Arguments for the gen command.
#[derive(Args)]
pub struct GenArgs {
    /// Data to encode
    #[arg(required = true)]
    data: String,

    /// Output image path
    #[arg(short, long, default_value = "qr.png")]
    output: PathBuf,

    /// Pixel size of one QR module
    #[arg(long)]
    module_size: Option<u32>,

    /// Quiet-zone border width, in modules
    #[arg(long)]
    border: Option<u32>,
}

pub fn run(args: GenArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    let mut qr_config = config.qrgen;
    if let Some(size) = args.module_size {
        qr_config.module_size = size;
    }
    if let Some(border) = args.border {
        qr_config.border = border;
    }

    info!("encoding {} bytes", args.data.len());
    let img = qrgen::render(&args.data, &qr_config)?;
    img.save(&args.output)?;

    println!(
        "{} {}",
        style("✔").green(),
        style(format!("QR guardado en {}", args.output.display())).bold()
    );
    Ok(())
}
