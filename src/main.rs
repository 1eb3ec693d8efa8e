use std::path::PathBuf;

use anyhow::{Context, bail};
use solarview_rs::display_core::{
    DisplaySession, FrameDescriptor, Instrument, Representation, SeriesLoader, ViewerConfig,
};
use solarview_rs::logger;

use tracing::{error, info};

const USAGE: &str =
    "usage: solarview <width> <height> <u8|u16|i16|f32> <channels> <generic|uset|dslr|tiff> <frame.raw>...";

fn parse_representation(value: &str) -> anyhow::Result<Representation> {
    Ok(match value {
        "u8" => Representation::U8,
        "u16" => Representation::U16,
        "i16" => Representation::I16,
        "f32" => Representation::F32,
        other => bail!("unknown representation '{}'", other),
    })
}

fn parse_instrument(value: &str) -> anyhow::Result<Instrument> {
    Ok(match value {
        "generic" => Instrument::Generic,
        "uset" => Instrument::Uset,
        "dslr" => Instrument::Dslr,
        "tiff" => Instrument::Tiff,
        other => bail!("unknown instrument '{}'", other),
    })
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 6 {
        bail!(USAGE);
    }

    let width = args[0].parse().context("width")?;
    let height = args[1].parse().context("height")?;
    let representation = parse_representation(&args[2])?;
    let channels = args[3].parse().context("channels")?;
    let instrument = parse_instrument(&args[4])?;
    let paths: Vec<PathBuf> = args[5..].iter().map(PathBuf::from).collect();

    let descriptor = FrameDescriptor::new(width, height, channels, representation).with_instrument(instrument);
    let (series, skipped) = SeriesLoader::new(descriptor).load_files(&paths[..]);
    for frame in &skipped {
        error!("Skipping {}: {}", paths[frame.index].display(), frame.error);
    }

    let mut session = DisplaySession::new(series, ViewerConfig::default())
        .context("no usable frame")?;
    session.auto_scale()?;

    for (index, frame) in session.series().frames().iter().enumerate() {
        let stats = frame.statistics();
        info!(
            index,
            min = stats.data_min,
            max = stats.data_max,
            mean = stats.mean,
            std_dev = stats.std_dev,
            median = stats.median,
            low = stats.intensity_low,
            high = stats.intensity_high,
            "Frame statistics"
        );
    }

    info!("Render parameters: {:?}", session.render_parameters()?);
    Ok(())
}
