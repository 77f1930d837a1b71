//! Command-line interface for the prepare, render and analyze workflows

use crate::algorithm::builder::{build_automatic, build_manual};
use crate::algorithm::palette::Palette;
use crate::analysis::averager::TileAverager;
use crate::analysis::table::RepresentativeColorTable;
use crate::io::configuration::{
    DEFAULT_BLOCKS_DIR, DEFAULT_PALETTE_FILE, DEFAULT_TABLE_FILE, DEFAULT_TILE_EXTENSION,
};
use crate::io::error::Result;
use crate::io::image::{open_rgba, save_rgba};
use crate::io::store::{JsonFileStore, Store};
use crate::spatial::loader::{CachedTileLoader, DirectoryTileLoader};
use crate::spatial::mosaic::MosaicRenderer;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "blockskin")]
#[command(
    author,
    version,
    about = "Turn pixel-art skins into mosaics of block textures"
)]
/// Command-line arguments for the skin mosaic tool
pub struct Cli {
    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Workflow to run
    #[command(subcommand)]
    pub command: Command,
}

/// The three workflows of the tool
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Write a palette of the skin's colors for editing or review
    Prepare {
        /// Input skin (64x64)
        #[arg(value_name = "SKIN")]
        skin: PathBuf,

        /// Palette file to write
        #[arg(short, long, default_value = DEFAULT_PALETTE_FILE)]
        palette: PathBuf,

        /// Pick the closest block for each color instead of a placeholder
        #[arg(short, long)]
        auto: bool,

        /// Representative color table used by --auto
        #[arg(short, long, default_value = DEFAULT_TABLE_FILE)]
        table: PathBuf,
    },

    /// Render a skin into a block mosaic using an existing palette
    Render {
        /// Input skin (64x64)
        #[arg(value_name = "SKIN")]
        skin: PathBuf,

        /// Output image (1024x1024)
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Palette file to read
        #[arg(short, long, default_value = DEFAULT_PALETTE_FILE)]
        palette: PathBuf,

        /// Directory holding block textures
        #[arg(short, long, default_value = DEFAULT_BLOCKS_DIR)]
        blocks: PathBuf,

        /// File extension of block textures
        #[arg(short, long, default_value = DEFAULT_TILE_EXTENSION)]
        extension: String,

        /// Decode block textures again for every pixel
        #[arg(long)]
        no_cache: bool,
    },

    /// Compute the representative color of every block texture
    Analyze {
        /// Directory holding block textures
        #[arg(short, long, default_value = DEFAULT_BLOCKS_DIR)]
        blocks: PathBuf,

        /// Representative color table to write
        #[arg(short, long, default_value = DEFAULT_TABLE_FILE)]
        table: PathBuf,

        /// File extension of block textures
        #[arg(short, long, default_value = DEFAULT_TILE_EXTENSION)]
        extension: String,
    },
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Runs the workflow selected on the command line
pub struct WorkflowRunner {
    cli: Cli,
}

impl WorkflowRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected workflow to completion
    ///
    /// # Errors
    ///
    /// Returns the first load, lookup or write failure; nothing is retried
    pub fn run(&self) -> Result<()> {
        let start_time = Instant::now();

        match &self.cli.command {
            Command::Prepare {
                skin,
                palette,
                auto,
                table,
            } => Self::prepare(skin, palette, auto.then_some(table.as_path()))?,
            Command::Render {
                skin,
                output,
                palette,
                blocks,
                extension,
                no_cache,
            } => self.render(skin, output, palette, blocks, extension, !no_cache)?,
            Command::Analyze {
                blocks,
                table,
                extension,
            } => self.analyze(blocks, table, extension)?,
        }

        log::info!("Finished in {:.2?}", start_time.elapsed());
        Ok(())
    }

    fn prepare(skin: &Path, palette_path: &Path, table_path: Option<&Path>) -> Result<()> {
        let source = open_rgba(skin)?;

        let palette = if let Some(table_path) = table_path {
            let table = JsonFileStore::<RepresentativeColorTable>::new(table_path).load()?;
            log::info!(
                "Loaded {} block colors from '{}'",
                table.len(),
                table_path.display()
            );
            build_automatic(&source, &table)?
        } else {
            build_manual(&source)?
        };

        JsonFileStore::<Palette>::new(palette_path).save(&palette)?;
        log::info!(
            "Wrote {} palette entries to '{}'",
            palette.len(),
            palette_path.display()
        );
        if table_path.is_none() {
            log::info!("Fill in the block names, then run the render workflow");
        }
        Ok(())
    }

    fn render(
        &self,
        skin: &Path,
        output: &Path,
        palette_path: &Path,
        blocks: &Path,
        extension: &str,
        cache: bool,
    ) -> Result<()> {
        let source = open_rgba(skin)?;
        let palette = JsonFileStore::<Palette>::new(palette_path).load()?;
        let renderer = MosaicRenderer::new().with_progress(self.cli.should_show_progress());
        let mut loader = DirectoryTileLoader::new(blocks, extension);

        let canvas = if cache {
            let mut cached = CachedTileLoader::new(loader);
            let canvas = renderer.render(&source, &palette, &mut cached)?;
            log::debug!("Decoded {} distinct blocks", cached.cached());
            canvas
        } else {
            renderer.render(&source, &palette, &mut loader)?
        };

        save_rgba(&canvas, output)?;
        log::info!("Wrote mosaic to '{}'", output.display());
        Ok(())
    }

    fn analyze(&self, blocks: &Path, table_path: &Path, extension: &str) -> Result<()> {
        let table = TileAverager::new()
            .with_progress(self.cli.should_show_progress())
            .build_table(blocks, extension)?;

        JsonFileStore::<RepresentativeColorTable>::new(table_path).save(&table)?;
        log::info!("Wrote block colors to '{}'", table_path.display());
        Ok(())
    }
}
