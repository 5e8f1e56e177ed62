use crate::cli::Cli;
use anyhow::Context;
use app_listing_lib::loader::load;
use app_listing_lib::{render_listing, Formatter};
use clap::Parser;
use std::io::{self, Write};

pub fn run() -> anyhow::Result<()> {
    env_logger::init();

    let Cli { path } = Cli::parse();

    let records = load(path.as_deref())?;

    let mut listing = render_listing(&records, &Formatter::default());
    listing.push('\n');

    io::stdout()
        .write_all(listing.as_bytes())
        .context("Failed to write listing to stdout")?;
    log::debug!("Printed {} app descriptions", records.len());

    Ok(())
}
