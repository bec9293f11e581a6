use std::{
    fs::File,
    io::{self, Read, Write},
};

use log::{debug, error};

use super::options::BsOpts;

/// Read the whole input named in bs_opts (stdin when no file is given) as one block.
/// Stops one byte past the block limit so an oversized input is caught without reading all of it.
pub fn read_input(bs_opts: &BsOpts) -> io::Result<Vec<u8>> {
    let limit = (bs_opts.block_limit as u64).saturating_add(FRAME_SLACK);
    let mut buf = Vec::new();
    match &bs_opts.file {
        Some(f) => {
            let f_in = File::open(f).map_err(|e| {
                error!("Cannot read from the file {}", f);
                e
            })?;
            f_in.take(limit).read_to_end(&mut buf)?;
        }
        None => {
            io::stdin().lock().take(limit).read_to_end(&mut buf)?;
        }
    }
    debug!("Read {} bytes of input.", buf.len());
    Ok(buf)
}

/// Room for the frame header on top of the block limit, plus one byte to detect overflow.
const FRAME_SLACK: u64 = 4 + 1;

/// Write the finished block. Only called once the transform succeeded, so a failed block
/// never leaves a partial output file behind.
pub fn write_output(bs_opts: &BsOpts, data: &[u8]) -> io::Result<()> {
    match &bs_opts.output {
        Some(f) => {
            let mut f_out = File::create(f).map_err(|e| {
                error!("Cannot write to the file {}", f);
                e
            })?;
            f_out.write_all(data)?;
            f_out.flush()
        }
        None => {
            let mut out = io::stdout().lock();
            out.write_all(data)?;
            out.flush()
        }
    }
}
