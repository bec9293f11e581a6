//! The bwt_algorithms module holds the Burrows-Wheeler Transform and the sort it depends on.
//!
//! The BWT does not compress anything by itself. It permutes a block so that symbols sharing
//! a context end up next to each other, which turns into long runs of small ranks after the
//! Move-To-Front stage.
//!
//! - suffix_sort: sorts every circular suffix (rotation) of a block.
//! - bwt_sort: forward transform built on that order, and the linear time inverse.
//!
pub mod bwt_sort;
pub mod suffix_sort;
