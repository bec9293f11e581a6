use log::{debug, error, info};

use super::frame::{read_frame, write_frame, HEADER_BYTES};
use crate::bwt_algorithms::bwt_sort::{bwt_decode, bwt_encode};
use crate::error::{BlockSortError, Result};
use crate::tools::mtf::{mtf_decode, mtf_encode};
use crate::tools::options::{BsOpts, Mode};

/// Run the operation selected in bs_opts over one in-memory block.
pub fn process_block(data: &[u8], bs_opts: &BsOpts) -> Result<Vec<u8>> {
    info!("{} on a block of {} bytes.", bs_opts.op_mode, data.len());
    let result = match bs_opts.op_mode {
        Mode::Zip => compress_block(data, bs_opts),
        Mode::Unzip => decompress_block(data, bs_opts),
        Mode::Bwt => transform_block(data, bs_opts),
        Mode::Unbwt => untransform_block(data, bs_opts),
        Mode::Mtf => check_limit(data.len(), bs_opts).map(|_| mtf_encode(data)),
        Mode::Unmtf => check_limit(data.len(), bs_opts).map(|_| mtf_decode(data)),
    };
    if let Err(e) = &result {
        error!("{} failed: {}", bs_opts.op_mode, e);
    }
    result
}

/// BWT, then MTF on the last column, then frame.
pub fn compress_block(block: &[u8], bs_opts: &BsOpts) -> Result<Vec<u8>> {
    check_limit(block.len(), bs_opts)?;
    let (first, bwt) = bwt_encode(block);
    let ranks = mtf_encode(&bwt);
    debug!(
        "{} bytes in block, {} zero ranks after MTF.",
        block.len(),
        ranks.iter().filter(|&&r| r == 0).count()
    );
    write_frame(first, &ranks)
}

/// Inverse of [`compress_block`].
pub fn decompress_block(frame: &[u8], bs_opts: &BsOpts) -> Result<Vec<u8>> {
    check_limit(frame.len().saturating_sub(HEADER_BYTES), bs_opts)?;
    let (first, ranks) = read_frame(frame, None)?;
    let bwt = mtf_decode(&ranks);
    bwt_decode(first, &bwt)
}

/// BWT only, framed.
pub fn transform_block(block: &[u8], bs_opts: &BsOpts) -> Result<Vec<u8>> {
    check_limit(block.len(), bs_opts)?;
    let (first, bwt) = bwt_encode(block);
    write_frame(first, &bwt)
}

/// Inverse of [`transform_block`].
pub fn untransform_block(frame: &[u8], bs_opts: &BsOpts) -> Result<Vec<u8>> {
    check_limit(frame.len().saturating_sub(HEADER_BYTES), bs_opts)?;
    let (first, bwt) = read_frame(frame, None)?;
    bwt_decode(first, &bwt)
}

fn check_limit(len: usize, bs_opts: &BsOpts) -> Result<()> {
    if len > bs_opts.block_limit {
        return Err(BlockSortError::BlockTooLarge {
            len,
            limit: bs_opts.block_limit,
        });
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn opts(op_mode: Mode) -> BsOpts {
        BsOpts {
            op_mode,
            ..BsOpts::new()
        }
    }

    #[test]
    fn zip_abracadabra() {
        let frame = compress_block(b"ABRACADABRA!", &opts(Mode::Zip)).unwrap();
        // first = 3, then the MTF ranks of "ARD!RCAAAABB"
        assert_eq!(&frame[..4], &[0, 0, 0, 3]);
        assert_eq!(
            &frame[4..],
            &[65, 82, 69, 36, 2, 69, 4, 0, 0, 0, 69, 0]
        );
        assert_eq!(
            decompress_block(&frame, &opts(Mode::Unzip)).unwrap(),
            b"ABRACADABRA!".to_vec()
        );
    }

    #[test]
    fn dispatch_round_trips() {
        let text = b"she sells sea shells by the sea shore".to_vec();
        for (fwd, inv) in [
            (Mode::Zip, Mode::Unzip),
            (Mode::Bwt, Mode::Unbwt),
            (Mode::Mtf, Mode::Unmtf),
        ] {
            let packed = process_block(&text, &opts(fwd)).unwrap();
            assert_eq!(process_block(&packed, &opts(inv)).unwrap(), text);
        }
    }

    #[test]
    fn block_limit() {
        let bs_opts = BsOpts {
            block_limit: 8,
            ..opts(Mode::Zip)
        };
        assert_eq!(
            compress_block(b"123456789", &bs_opts),
            Err(BlockSortError::BlockTooLarge { len: 9, limit: 8 })
        );
        assert!(compress_block(b"12345678", &bs_opts).is_ok());
    }

    #[test]
    fn bad_frames() {
        let unzip = opts(Mode::Unzip);
        assert!(decompress_block(&[0, 0], &unzip).is_err());
        // first points past the end of the block
        assert_eq!(
            untransform_block(&[0, 0, 0, 9, b'a', b'b'], &unzip),
            Err(BlockSortError::FirstOutOfRange { first: 9, len: 2 })
        );
    }
}
