//! Decode command - extract payment data from a raw QR payload.

use std::io::Read;

use clap::Args;
use console::style;
use tracing::info;

use qrpago_core::{PaymentParser, Platform, Presenter};

/// Arguments for the decode command.
#[derive(Args)]
pub struct DecodeArgs {
    /// Raw payload text, or '-' to read from stdin
    #[arg(required = true)]
    payload: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Human-readable summary
    Text,
}

pub fn run(args: DecodeArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    let payload = if args.payload == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf.trim_end_matches(['\r', '\n']).to_string()
    } else {
        args.payload
    };

    info!("decoding {} characters of payload", payload.len());
    let parser = PaymentParser::from_config(&config.extraction);
    let result = parser.parse(&payload);

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Text => {
            let presenter = Presenter::new(config.extraction.placeholder.as_str());
            println!("{}", presenter.summary(&result));
            if result.platform == Platform::Unknown {
                eprintln!("{}", style("⚠ red de pago no identificada").yellow());
            }
        }
    }

    Ok(())
}
