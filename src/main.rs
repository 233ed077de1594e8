// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use args::Args;
use clap::Parser;
use std::{error::Error, process, time::Instant};
use tracing::{error, info, level_filters::LevelFilter, warn};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter};
use yuv_embed::{
    convert::{image_to_yuyv, load},
    name::OutputName,
    render::Artifacts,
};

mod args;

fn init_tracing(args: &Args) {
    let level = if args.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let name = match args.name {
        Some(name) => name,
        None => OutputName::from_path(&args.input)?,
    };

    let now = Instant::now();
    let img = load(&args.input)?;
    let load_time = now.elapsed();

    let now = Instant::now();
    let yuyv = image_to_yuyv(&img, args.odd_width).inspect_err(|e| {
        if matches!(e, yuv_embed::Error::OddWidth { .. }) {
            warn!("pass --odd-width duplicate to pad the last column");
        }
    })?;
    let convert_time = now.elapsed();

    info!(
        "{} {}x{} -> {} load: {:?} convert: {:?}",
        args.input.display(),
        img.width(),
        img.height(),
        yuyv,
        load_time,
        convert_time,
    );

    let artifacts = Artifacts::new(name, &yuyv);
    artifacts.write(&args.output_dir)?;

    Ok(())
}

fn main() {
    let args = Args::parse();
    init_tracing(&args);

    if let Err(e) = run(args) {
        error!("{e}");
        process::exit(1);
    }
}
