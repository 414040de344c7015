//! Traits for resolving an alternative by index or by type.
//!
//! [`Alternative`] is the type-list indexing utility: `<V as Alternative<1>>::Type` names the
//! second alternative of `V`, and its methods are the raw tag-checked accessors everything else is
//! built from. [`Alt`] resolves by type instead, using one of the marker types [`At0`]..[`At3`] as
//! a second key so that the impls for different positions never overlap. The marker is always
//! inferred in practice: for any type that appears exactly once in the alternative list there is
//! exactly one impl to choose. A type that isn't an alternative has no impl and a type listed
//! twice has two, so both misuses die at compile time, which is exactly where they should die.

/// Index-based resolution of a variant's alternative list.
///
/// Implemented by each variant type for each `I` in `[0, N)`, with [`Type`](Alternative::Type)
/// naming the alternative at that position.
pub trait Alternative<const I: usize> {
    /// The alternative type at index `I`.
    type Type;

    /// Returns a reference to alternative `I`, or [`None`] if the discriminant doesn't match.
    fn get(&self) -> Option<&Self::Type>;

    /// Returns a mutable reference to alternative `I`, or [`None`] if the discriminant doesn't
    /// match.
    fn get_mut(&mut self) -> Option<&mut Self::Type>;

    /// Moves alternative `I` out of the variant, or returns the variant unchanged if the
    /// discriminant doesn't match.
    fn take(self) -> Result<Self::Type, Self>
    where
        Self: Sized;
}

/// Type-based resolution of a variant's alternative list.
///
/// `I` is one of the index markers below and exists only to keep the per-position impls coherent;
/// callers leave it to inference (`v.get::<String, _>()`).
pub trait Alt<T, I> {
    /// The position of `T` in the alternative list.
    const INDEX: usize;

    /// Returns a reference to the `T` alternative, or [`None`] if it isn't live.
    fn get(&self) -> Option<&T>;

    /// Returns a mutable reference to the `T` alternative, or [`None`] if it isn't live.
    fn get_mut(&mut self) -> Option<&mut T>;

    /// Moves the `T` alternative out of the variant, or returns the variant unchanged if `T`
    /// isn't live.
    fn take(self) -> Result<T, Self>
    where
        Self: Sized;
}

/// Marker for the first alternative.
#[derive(Debug)]
pub struct At0;

/// Marker for the second alternative.
#[derive(Debug)]
pub struct At1;

/// Marker for the third alternative.
#[derive(Debug)]
pub struct At2;

/// Marker for the fourth alternative.
#[derive(Debug)]
pub struct At3;
