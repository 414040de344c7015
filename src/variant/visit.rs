//! Traits describing a visitor: one callable object able to receive every alternative of a
//! variant.
//!
//! A Rust closure has exactly one parameter list, so a single closure can never cover two
//! differently-typed alternatives. A visitor is instead a (usually zero-sized) struct with one
//! trait impl per alternative type, which is the closest Rust gets to an object with a templated
//! call operator. Whatever state the visitation needs travels in the visitor's fields, which is
//! why both traits take `&mut self`.
//!
//! The associated [`Output`](Visit::Output) carries the result type of each arm. Visiting a
//! variant requires every arm to name the *same* `Output`; a visitor whose arms disagree simply
//! doesn't satisfy the bounds on [`visit`](super::Variant2::visit), so an un-unifiable result type
//! is a compile-time error rather than anything the dispatch has to handle.

/// A visitation arm receiving a shared reference to an alternative of type `T`.
pub trait Visit<T> {
    /// The result of this arm, required to agree across all of a variant's alternatives.
    type Output;

    fn visit(&mut self, value: &T) -> Self::Output;
}

/// A visitation arm receiving a mutable reference to an alternative of type `T`.
pub trait VisitMut<T> {
    /// The result of this arm, required to agree across all of a variant's alternatives.
    type Output;

    fn visit_mut(&mut self, value: &mut T) -> Self::Output;
}
