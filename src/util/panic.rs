/// Asserts that the given block panics when run.
///
/// The block runs under [`catch_unwind`](std::panic::catch_unwind), so everything it touches has
/// to be constructed inside it; tests using this build their doomed variant in the block itself.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "Expected the block to panic, but it returned normally.")
    };
    ($run:block, $msg:literal) => {
        assert!(std::panic::catch_unwind(|| $run).is_err(), $msg);
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
