use derive_more::{Display, Error};

/// The error raised when a reference-returning accessor names an alternative other than the live
/// one.
///
/// Only the panicking accessor forms ([`at`](super::Variant2::at),
/// [`expect`](super::Variant2::expect) and their `_mut` versions) surface this error; the
/// [`Option`]-returning forms report the same condition as [`None`] and the consuming forms return
/// the variant back unharmed.
#[derive(Debug, Display, Error, PartialEq, Eq)]
#[display("Requested alternative {requested} of a variant currently holding alternative {actual}!")]
pub struct BadVariantAccess {
    /// The alternative index the caller asked for.
    pub requested: usize,
    /// The index of the alternative that was actually live.
    pub actual: usize,
}
