//! `codec-string` — print WebCodecs codec strings for media streams.
//!
//! ## Usage
//!
//! ```bash
//! # One stream from its codec name and extradata
//! codec-string --codec h264 --extradata 0164001f
//! codec-string --codec vp9 --pix-fmt yuv420p10le --width 3840 --height 2160 --frame-rate 60/1
//!
//! # Stream descriptors as JSON (file or stdin), JSON rows out
//! codec-string --streams streams.json
//! cat streams.json | codec-string --streams -
//!
//! # Logging goes to stderr
//! RUST_LOG=wd_codec_string=trace codec-string --codec hevc --extradata 01016000...
//! ```

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use clap::{ArgGroup, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use wd_codec_string::{stream_codec_string, stream_codec_strings};
use wd_common::{
    parse_hex, CodecId, CodecStringConfig, PixelFormat, Rational, Resolution, StreamParameters,
    VideoFormat,
};

/// Derive WebCodecs/MSE codec strings from codec configuration records
#[derive(Parser, Debug)]
#[command(name = "codec-string", version, about, long_about = None)]
#[command(group(ArgGroup::new("input").required(true).args(["codec", "streams"])))]
struct Cli {
    /// Codec short name (h264, hevc, av1, vp9, aac, opus, ...)
    #[arg(long, value_name = "NAME", value_parser = CodecId::from_str)]
    codec: Option<CodecId>,

    /// Codec configuration record as hex
    #[arg(long, value_name = "HEX", requires = "codec")]
    extradata: Option<String>,

    /// Pixel format, for VP9 (e.g. yuv420p, yuv420p10le)
    #[arg(long, value_name = "PIX_FMT", requires = "codec")]
    pix_fmt: Option<PixelFormat>,

    /// Frame width in pixels, for VP9 level derivation
    #[arg(long, requires_all = ["codec", "height"])]
    width: Option<u32>,

    /// Frame height in pixels, for VP9 level derivation
    #[arg(long, requires_all = ["codec", "width"])]
    height: Option<u32>,

    /// Frame rate as num/den, for VP9 level derivation
    #[arg(long, value_name = "RATE", requires = "codec")]
    frame_rate: Option<Rational>,

    /// Profile already known for the stream
    #[arg(long, requires = "codec")]
    profile: Option<u8>,

    /// Level already known for the stream
    #[arg(long, requires = "codec")]
    level: Option<u8>,

    /// JSON array of stream descriptors ("-" for stdin)
    #[arg(long, value_name = "PATH")]
    streams: Option<PathBuf>,

    /// JSON config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output capacity in bytes (overrides the config file)
    #[arg(long)]
    capacity: Option<usize>,
}

impl Cli {
    /// The single stream described by `--codec` and friends.
    fn stream(&self) -> Result<Option<StreamParameters>> {
        let Some(codec) = self.codec else {
            return Ok(None);
        };

        let extradata = match &self.extradata {
            Some(hex) => parse_hex(hex).context("Invalid --extradata")?,
            None => Vec::new(),
        };

        let format = VideoFormat {
            pixel_format: self.pix_fmt,
            resolution: self.width.zip(self.height).map(|(w, h)| Resolution::new(w, h)),
            profile: self.profile,
            level: self.level,
            ..Default::default()
        };

        let mut stream = StreamParameters::new(codec, &extradata).with_format(format);
        stream.frame_rate = self.frame_rate;
        Ok(Some(stream))
    }

    fn load_config(&self) -> Result<CodecStringConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config '{}'", path.display()))?;
                CodecStringConfig::from_json(&json)
                    .with_context(|| format!("Invalid config '{}'", path.display()))?
            }
            None => CodecStringConfig::default(),
        };
        if let Some(capacity) = self.capacity {
            config = config.with_capacity(capacity);
        }
        config.validate().context("Invalid --capacity")?;
        Ok(config)
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read stream descriptors from stdin")?;
        return Ok(input);
    }
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read stream descriptors '{}'", path.display()))
}

/// Codec strings for a JSON array of stream descriptors, as a JSON array.
fn streams_to_json(json: &str, config: &CodecStringConfig) -> Result<String> {
    let streams = StreamParameters::list_from_json(json).context("Invalid stream descriptors")?;
    debug!("Loaded {} stream descriptors", streams.len());
    let rows = stream_codec_strings(&streams, config);
    Ok(serde_json::to_string_pretty(&rows)?)
}

fn run(cli: &Cli) -> Result<String> {
    let config = cli.load_config()?;

    if let Some(stream) = cli.stream()? {
        return Ok(stream_codec_string(&stream, &config).into_string());
    }
    if let Some(path) = &cli.streams {
        let json = read_input(path)?;
        return streams_to_json(&json, &config);
    }
    bail!("Nothing to do: pass --codec or --streams")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let output = run(&cli)?;
    println!("{output}");
    Ok(())
}
