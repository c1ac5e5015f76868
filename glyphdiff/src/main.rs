//! glyphdiff CLI
//!
//! Reads a concatenated P5 glyph stream and prints one tab-separated line
//! per unordered pair to stdout: `<left>\t<right>\t<score>`, pairs in
//! ascending (left, right) order. Diagnostics go to stderr via the logger,
//! never into the result stream.

use std::io::{self, BufWriter, Write};
use std::ops::ControlFlow;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

/// Score every pair of glyph bitmaps in a concatenated P5 (binary PGM) stream
#[derive(Parser, Debug)]
#[command(name = "glyphdiff", version)]
struct Cli {
    /// Path to the glyph stream
    file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Bad usage is not a run failure: print the message and exit cleanly.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            err.print().context("printing usage")?;
            return Ok(());
        }
    };

    let store = glyphdiff_io::read_glyph_stream(&cli.file)
        .with_context(|| format!("unable to read {}", cli.file.display()))?;
    log::info!("loaded {} images from {}", store.len(), cli.file.display());

    let stdout = io::stdout().lock();
    let mut out = BufWriter::new(stdout);
    let mut write_err: Option<io::Error> = None;
    glyphdiff_core::for_each_pair(&store, |pair| {
        match writeln!(out, "{}\t{}\t{:.6}", pair.left, pair.right, pair.score) {
            Ok(()) => ControlFlow::Continue(()),
            Err(err) => {
                write_err = Some(err);
                ControlFlow::Break(())
            }
        }
    })?;
    if let Some(err) = write_err {
        return Err(err).context("writing pair scores");
    }
    out.flush().context("writing pair scores")?;
    Ok(())
}
