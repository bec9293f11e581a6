use super::options::{BsOpts, Mode};
use clap::{ArgGroup, Parser};
use log::{info, LevelFilter};

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Burrows-Wheeler and Move-To-Front block transforms",
    long_about = None)]
#[clap(group(ArgGroup::new("mode").multiple(false)))]
pub struct Args {
    /// Filename of file to process (reads stdin when omitted)
    #[clap()]
    filename: Option<String>,

    /// Write the result to this file instead of stdout
    #[clap(short = 'o', long = "output")]
    output: Option<String>,

    /// BWT, then MTF, then frame the block (default)
    #[clap(short = 'z', long = "zip", group = "mode")]
    zip: bool,

    /// Undo --zip
    #[clap(short = 'd', long = "unzip", group = "mode")]
    unzip: bool,

    /// Burrows-Wheeler Transform only; writes a 4 byte first index and the last column
    #[clap(long = "bwt", group = "mode")]
    bwt: bool,

    /// Undo --bwt
    #[clap(long = "unbwt", group = "mode")]
    unbwt: bool,

    /// Move-To-Front encode only
    #[clap(long = "mtf", group = "mode")]
    mtf: bool,

    /// Undo --mtf
    #[clap(long = "unmtf", group = "mode")]
    unmtf: bool,

    /// Largest block accepted, in bytes
    #[clap(short = 'b', long = "block-limit")]
    block_limit: Option<usize>,

    /// Sets verbosity. -v shows very little, -vvvv is chatty
    #[clap(short = 'v', action = clap::ArgAction::Count)]
    v: u8,

    /// Only report errors
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,
}

/// Copy the parsed command line into our options struct.
pub fn init_bs_opts(bs_opts: &mut BsOpts) {
    apply_args(bs_opts, Args::parse());
}

fn apply_args(bs_opts: &mut BsOpts, args: Args) {
    bs_opts.file = args.filename;
    bs_opts.output = args.output;

    // clap lets at most one of these through
    let modes = [
        (args.zip, Mode::Zip),
        (args.unzip, Mode::Unzip),
        (args.bwt, Mode::Bwt),
        (args.unbwt, Mode::Unbwt),
        (args.mtf, Mode::Mtf),
        (args.unmtf, Mode::Unmtf),
    ];
    for (set, mode) in modes {
        if set {
            bs_opts.op_mode = mode
        }
    }

    if let Some(limit) = args.block_limit {
        bs_opts.block_limit = limit
    };

    bs_opts.verbosity = match (args.quiet, args.v) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Warn,
        (false, 1) => LevelFilter::Info,
        (false, 2) => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
}

/// Log the settings in effect. Call after the logger is up.
pub fn report(bs_opts: &BsOpts) {
    info!("---- blocksort Initialization Start ----");
    info!("Verbosity set to {}", bs_opts.verbosity);
    info!("Operational mode set to {}", bs_opts.op_mode);
    match &bs_opts.file {
        Some(s) => info!("Getting input from the file {}", s),
        None => info!("Getting input from stdin"),
    }
    match &bs_opts.output {
        Some(s) => info!("Sending output to the file {}", s),
        None => info!("Sending output to stdout"),
    }
    info!("Block limit set to {} bytes", bs_opts.block_limit);
    info!("---- blocksort Initialization End ----");
}
