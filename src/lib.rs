//! This crate is my attempt at writing the vocabulary types I keep wishing were in the standard
//! library already, starting with a tagged union.
//!
//! # Purpose
//! This repo / crate is a project that I'm working on as a learning experience, with no expectation
//! for it to be used in production. Rust's `enum` is a perfectly good sum type, but it is closed:
//! you declare the alternatives up front and name every arm. What I wanted to understand is the
//! other kind of sum type, the generic `variant<T0, T1, ...>` that some languages bolt on as a
//! library, where the alternatives are type parameters and the discriminant is managed by hand.
//! Writing one means doing everything the compiler normally does for an `enum` yourself: sizing
//! the storage, tracking which alternative is live, and routing construction, destruction and
//! visitation through the tag.
//!
//! # Method
//! The storage for each [`Variant2`](variant::Variant2) (and friends) is an untagged `union` of
//! [`ManuallyDrop`](std::mem::ManuallyDrop) fields next to a `u8` tag. The union gives the maximum
//! size and strictest alignment of the alternatives for free, and `ManuallyDrop` hands lifetime
//! control over to the tag: only the field the tag names is ever constructed, read or dropped.
//! Everything else - visitation through a function pointer table, by-type access, the
//! first-matching-alternative construction policy - is built on top of that invariant.
//!
//! # Error Handling
//! Accessors come in pairs on purpose. The `try_`/`get` forms return [`Option`] and never panic,
//! for callers who want to check. The `at`/`expect` forms return plain references and panic with a
//! strongly typed [`BadVariantAccess`](variant::BadVariantAccess) error when the requested
//! alternative isn't the live one, for callers who consider a mismatch a bug. Everything that can
//! be rejected at compile time - constructing from a type no alternative accepts, visiting with a
//! visitor whose arms don't agree on a result type, asking for a type that isn't an alternative -
//! is rejected at compile time, not checked at runtime.
//!
//! # Dependencies
//! This crate depends on some derive macros because they're helpful and remove the need for some
//! very repetitive programming. There is deliberately no `Vec`, no allocation and no I/O in here:
//! a variant is a pure value type.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod variant;

pub(crate) mod util;
