//! Burrows-Wheeler and Move-To-Front block transforms.
//!
//! These are the front end of a block-sorting compressor such as bzip2. A block of bytes is
//! permuted by the Burrows-Wheeler Transform so that symbols sharing a context sit together,
//! and the Move-To-Front transform then recodes it into ranks that are mostly small. An
//! entropy coder downstream compresses those ranks far better than the raw block.
//!
//! Every operation works on one in-memory block and owns its working arrays, so separate
//! blocks can be transformed on separate threads without any locking.
//!
//! ```
//! use blocksort::{bwt_decode, bwt_encode, mtf_decode, mtf_encode};
//!
//! let (first, bwt) = bwt_encode(b"ABRACADABRA!");
//! assert_eq!((first, &bwt[..]), (3, &b"ARD!RCAAAABB"[..]));
//!
//! let ranks = mtf_encode(&bwt);
//! assert_eq!(bwt_decode(first, &mtf_decode(&ranks)).unwrap(), b"ABRACADABRA!");
//! ```
//!
pub mod bitstream;
pub mod bwt_algorithms;
pub mod compression;
pub mod error;
pub mod tools;

pub use bwt_algorithms::bwt_sort::{bwt_decode, bwt_decode_exact, bwt_encode};
pub use bwt_algorithms::suffix_sort::CircularSuffixArray;
pub use compression::compress_block::{compress_block, decompress_block, process_block};
pub use compression::frame::{read_frame, write_frame};
pub use error::{BlockSortError, ErrorKind, Result};
pub use tools::mtf::{mtf_decode, mtf_encode, MoveToFront};
pub use tools::options::{BsOpts, Mode};
