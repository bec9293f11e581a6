//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use blocksort::compression::compress_block::process_block;
use blocksort::tools::{
    cli::{init_bs_opts, report},
    data_in::{read_input, write_output},
    options::BsOpts,
};

use log::info;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> Result<(), std::io::Error> {
    let mut options = BsOpts::new();
    init_bs_opts(&mut options);

    // Logs go to stderr, stdout may be carrying the data
    if let Err(e) = TermLogger::init(
        options.verbosity,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Could not start the logger: {}", e);
    }
    report(&options);

    let input = read_input(&options)?;

    // Nothing is written unless the whole block went through
    let output = process_block(&input, &options)?;
    write_output(&options, &output)?;

    info!("Done. {} bytes in, {} bytes out.", input.len(), output.len());
    Ok(())
}
