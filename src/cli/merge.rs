//! Merge command implementation.
//!
//! Resolves options from flags and the project manifest, then hands off to
//! the library merge.

use std::path::PathBuf;

use clap::Args;

use crate::codec::DecodeOptions;
use crate::error::{Result, TmmError};
use crate::manifest::Manifest;
use crate::merge::merge_tiles;
use crate::output::Printer;
use crate::render::MergeOptions;
use crate::types::RowPolicy;

const DEFAULT_OUT: &str = "tilemap.png";
const DEFAULT_COLUMNS: u32 = 4;

/// Merge multiple image files given by [FILES] to a tilemap
#[derive(Args, Debug)]
pub struct MergeArgs {
    /// Image files to merge, in grid order
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Name of the tilemap output file [default: tilemap.png]
    #[arg(long, short)]
    pub out: Option<PathBuf>,

    /// Number of columns per row [default: 4]
    #[arg(long, short)]
    pub columns: Option<u32>,

    /// Accept truncated or checksum-damaged images
    #[arg(long, short = 'f')]
    pub force_truncated: bool,

    /// Allocate enough rows for every tile instead of flooring the row count
    #[arg(long)]
    pub fit_rows: bool,

    /// Project manifest to read defaults from [default: ./tmm.yaml if present]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print a line for every placed tile
    #[arg(long, short)]
    pub verbose: bool,
}

/// Fully resolved merge settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergePlan {
    pub files: Vec<PathBuf>,
    pub out: PathBuf,
    pub options: MergeOptions,
}

impl MergeArgs {
    /// Combine flags with manifest values. Flags take precedence.
    pub fn plan(&self, manifest: &Manifest) -> MergePlan {
        let out = self
            .out
            .clone()
            .or_else(|| manifest.out.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT));
        let columns = self.columns.or(manifest.columns).unwrap_or(DEFAULT_COLUMNS);
        let allow_truncated = self.force_truncated || manifest.force_truncated.unwrap_or(false);
        let rows = if self.fit_rows {
            RowPolicy::Ceil
        } else {
            manifest.rows.unwrap_or_default()
        };

        MergePlan {
            files: self.files.clone(),
            out,
            options: MergeOptions {
                columns,
                decode: DecodeOptions { allow_truncated },
                rows,
            },
        }
    }

    fn manifest(&self) -> Result<Manifest> {
        if let Some(path) = &self.config {
            return Manifest::load(path);
        }
        let cwd = std::env::current_dir().map_err(|e| TmmError::Io {
            path: PathBuf::from("."),
            message: format!("Failed to read current directory: {}", e),
        })?;
        Manifest::discover(&cwd)
    }
}

pub fn run(args: MergeArgs) -> Result<()> {
    let printer = Printer::new().with_verbose(args.verbose);
    let manifest = args.manifest()?;
    let plan = args.plan(&manifest);

    merge_tiles(&plan.files, &plan.out, &plan.options, &printer)
}
