use base_rfc::{Base32, Codec, CodecRegistry, Encoding, Padding};
use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "base-rfc")]
#[command(version)]
#[command(about = "Encode and decode RFC 4648 Base16, Base32 (including Crockford) and Base64", long_about = None)]
struct Cli {
    /// Encode using this codec (defaults to the configured default codec)
    #[arg(short = 'e', long, value_name = "CODEC", conflicts_with = "decode")]
    encode: Option<String>,

    /// Decode from this codec
    #[arg(short = 'd', long, value_name = "CODEC")]
    decode: Option<String>,

    /// List available codecs
    #[arg(short, long)]
    list: bool,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// File to process (if not provided, reads from stdin)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let registry = CodecRegistry::load_with_overrides()?;

    if cli.list {
        println!("Available codecs:\n");
        for name in registry.names() {
            if let Some(codec) = registry.get(name) {
                println!("  {:<16} {}", name, describe(codec));
            }
        }
        return Ok(());
    }

    let input = read_input(cli.file.as_ref())?;

    let output = if let Some(name) = &cli.decode {
        let codec = registry.codec(name)?;
        let text = String::from_utf8(input).map_err(|_| "input must be valid UTF-8 for decoding")?;
        codec.try_decode(&text)?
    } else {
        let name = cli
            .encode
            .as_deref()
            .or(registry.settings.default_codec.as_deref())
            .ok_or("no codec given and no default_codec configured; use --encode")?;
        let codec = registry.codec(name)?;
        let mut encoded = codec.encode(&input);
        encoded.push('\n');
        encoded.into_bytes()
    };

    write_output(cli.output.as_ref(), &output)
}

fn read_input(file: Option<&PathBuf>) -> io::Result<Vec<u8>> {
    match file {
        Some(path) => fs::read(path),
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn write_output(path: Option<&PathBuf>, data: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(path) => fs::write(path, data)?,
        None => io::stdout().write_all(data)?,
    }
    Ok(())
}

fn padding_label(padding: Padding) -> &'static str {
    match padding {
        Padding::Required => "padded",
        Padding::Optional => "padding optional",
        Padding::Omitted => "unpadded",
    }
}

fn describe(codec: &Codec) -> String {
    match codec {
        Codec::Base16(base16) => format!("base16  {:?}", base16.case()).to_lowercase(),
        Codec::Base32(Base32::Standard { padding }) => {
            format!("base32  standard, {}", padding_label(*padding))
        }
        Codec::Base32(Base32::Hex { padding }) => {
            format!("base32  extended hex, {}", padding_label(*padding))
        }
        Codec::Base32(Base32::Crockford { check_symbol }) => {
            if *check_symbol {
                "base32  crockford, check symbol".to_string()
            } else {
                "base32  crockford".to_string()
            }
        }
        Codec::Base64(base64) => {
            format!("{:<7} {}", base64.name(), padding_label(base64.padding()))
        }
    }
}
