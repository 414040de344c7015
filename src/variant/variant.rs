use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, ManuallyDrop};

use crate::util::result::ResultExtension;
use crate::variant::alt::{Alt, Alternative, At0, At1, At2, At3};
use crate::variant::error::BadVariantAccess;
use crate::variant::visit::{Visit, VisitMut};

/// Generates one fixed-arity variant type: the storage union, the tagged struct and every
/// operation over them.
///
/// Rust has no variadic generics, so each arity is its own type, the same way the standard
/// library implements traits for each tuple length. The per-alternative inputs are, in order:
/// the discriminant value, the type parameter, the union field, the constructor name, the
/// by-type index marker, and the generic/argument names used by the `match_with` family.
///
/// The `@alternatives` arms emit the per-alternative [`Alternative`] and [`Alt`] impls by
/// recursing over the groups one at a time: those impls need the full generic parameter list in
/// their headers, and `macro_rules!` cannot transcribe one repetition inside another, so the list
/// is handed down whole to each recursion step instead.
macro_rules! define_variant {
    (@alternatives $name:ident, [$($ts:ident),+],) => {};

    (
        @alternatives
        $name:ident, [$($ts:ident),+],
        { $idx:tt, $alt_t:ident, $field:ident, $marker:ident }
        $($rest:tt)*
    ) => {
        impl<$($ts),+> Alternative<$idx> for $name<$($ts),+> {
            type Type = $alt_t;

            fn get(&self) -> Option<&$alt_t> {
                if self.tag == $idx {
                    // SAFETY: the tag confirms $field is the live alternative.
                    Some(unsafe { &*self.data.$field })
                } else {
                    None
                }
            }

            fn get_mut(&mut self) -> Option<&mut $alt_t> {
                if self.tag == $idx {
                    // SAFETY: the tag confirms $field is the live alternative.
                    Some(unsafe { &mut *self.data.$field })
                } else {
                    None
                }
            }

            fn take(self) -> Result<$alt_t, Self> {
                if self.tag == $idx {
                    let mut this = ManuallyDrop::new(self);
                    // SAFETY: the tag confirms $field is live, and the variant's Drop is
                    // suppressed so the value is moved out exactly once.
                    Ok(unsafe { ManuallyDrop::take(&mut this.data.$field) })
                } else {
                    Err(self)
                }
            }
        }

        impl<$($ts),+> Alt<$alt_t, $marker> for $name<$($ts),+> {
            const INDEX: usize = $idx;

            fn get(&self) -> Option<&$alt_t> {
                <Self as Alternative<$idx>>::get(self)
            }

            fn get_mut(&mut self) -> Option<&mut $alt_t> {
                <Self as Alternative<$idx>>::get_mut(self)
            }

            fn take(self) -> Result<$alt_t, Self> {
                <Self as Alternative<$idx>>::take(self)
            }
        }

        define_variant! { @alternatives $name, [$($ts),+], $($rest)* }
    };

    (
        $(#[$meta:meta])*
        $name:ident, $data:ident, $arity:tt, [$($ts:ident),+],
        default: $first_ctor:ident($first_t:ident),
        $({ $idx:tt, $alt_t:ident, $field:ident, $ctor:ident, $marker:ident, $fgen:ident, $farg:ident })+
    ) => {
        union $data<$($ts),+> {
            $($field: ManuallyDrop<$alt_t>,)+
        }

        $(#[$meta])*
        pub struct $name<$($ts),+> {
            data: $data<$($ts),+>,
            tag: u8,
        }

        impl<$($ts),+> $name<$($ts),+> {
            $(
                #[doc = concat!(
                    "Creates a variant holding alternative ", stringify!($idx), "."
                )]
                pub const fn $ctor(value: $alt_t) -> Self {
                    $name {
                        data: $data { $field: ManuallyDrop::new(value) },
                        tag: $idx,
                    }
                }
            )+

            /// Returns the discriminant: the position of the live alternative in the type list.
            pub const fn index(&self) -> usize {
                self.tag as usize
            }

            /// Returns the name of the live alternative's type, mostly for diagnostics.
            pub fn type_name(&self) -> &'static str {
                match self.tag {
                    $($idx => ::std::any::type_name::<$alt_t>(),)+
                    _ => unreachable!(),
                }
            }

            /// Returns a reference to the alternative at index `I`, or [`None`] if `I` isn't the
            /// live discriminant.
            pub fn try_at<const I: usize>(&self) -> Option<&<Self as Alternative<I>>::Type>
            where
                Self: Alternative<I>,
            {
                <Self as Alternative<I>>::get(self)
            }

            /// Returns a mutable reference to the alternative at index `I`, or [`None`] if `I`
            /// isn't the live discriminant.
            pub fn try_at_mut<const I: usize>(
                &mut self,
            ) -> Option<&mut <Self as Alternative<I>>::Type>
            where
                Self: Alternative<I>,
            {
                <Self as Alternative<I>>::get_mut(self)
            }

            /// Returns a reference to the alternative at index `I`.
            ///
            /// # Panics
            /// Panics with [`BadVariantAccess`] if `I` isn't the live discriminant. Callers who
            /// would rather check should use [`try_at`](Self::try_at).
            pub fn at<const I: usize>(&self) -> &<Self as Alternative<I>>::Type
            where
                Self: Alternative<I>,
            {
                match <Self as Alternative<I>>::get(self) {
                    Some(value) => value,
                    None => Err(BadVariantAccess {
                        requested: I,
                        actual: self.tag as usize,
                    }).throw(),
                }
            }

            /// Returns a mutable reference to the alternative at index `I`.
            ///
            /// # Panics
            /// Panics with [`BadVariantAccess`] if `I` isn't the live discriminant.
            pub fn at_mut<const I: usize>(&mut self) -> &mut <Self as Alternative<I>>::Type
            where
                Self: Alternative<I>,
            {
                let actual = self.tag as usize;
                match <Self as Alternative<I>>::get_mut(self) {
                    Some(value) => value,
                    None => Err(BadVariantAccess { requested: I, actual }).throw(),
                }
            }

            /// Moves the alternative at index `I` out of the variant. On a discriminant mismatch
            /// the variant is returned unchanged, live value and all.
            pub fn into_at<const I: usize>(self) -> Result<<Self as Alternative<I>>::Type, Self>
            where
                Self: Alternative<I>,
            {
                <Self as Alternative<I>>::take(self)
            }

            /// Returns a reference to the `T` alternative, or [`None`] if it isn't live.
            ///
            /// `T` must appear exactly once in the alternative list; anything else fails to
            /// compile. The marker parameter is inference-only: `v.get::<String, _>()`.
            pub fn get<T, I>(&self) -> Option<&T>
            where
                Self: Alt<T, I>,
            {
                <Self as Alt<T, I>>::get(self)
            }

            /// Returns a mutable reference to the `T` alternative, or [`None`] if it isn't live.
            pub fn get_mut<T, I>(&mut self) -> Option<&mut T>
            where
                Self: Alt<T, I>,
            {
                <Self as Alt<T, I>>::get_mut(self)
            }

            /// Returns a reference to the `T` alternative.
            ///
            /// # Panics
            /// Panics with [`BadVariantAccess`] if `T` isn't the live alternative. Callers who
            /// would rather check should use [`get`](Self::get).
            pub fn expect<T, I>(&self) -> &T
            where
                Self: Alt<T, I>,
            {
                match <Self as Alt<T, I>>::get(self) {
                    Some(value) => value,
                    None => Err(BadVariantAccess {
                        requested: <Self as Alt<T, I>>::INDEX,
                        actual: self.tag as usize,
                    }).throw(),
                }
            }

            /// Returns a mutable reference to the `T` alternative.
            ///
            /// # Panics
            /// Panics with [`BadVariantAccess`] if `T` isn't the live alternative.
            pub fn expect_mut<T, I>(&mut self) -> &mut T
            where
                Self: Alt<T, I>,
            {
                let actual = self.tag as usize;
                match <Self as Alt<T, I>>::get_mut(self) {
                    Some(value) => value,
                    None => Err(BadVariantAccess {
                        requested: <Self as Alt<T, I>>::INDEX,
                        actual,
                    }).throw(),
                }
            }

            /// Moves the `T` alternative out of the variant. On a mismatch the variant is
            /// returned unchanged.
            pub fn into_alt<T, I>(self) -> Result<T, Self>
            where
                Self: Alt<T, I>,
            {
                <Self as Alt<T, I>>::take(self)
            }

            /// Invokes the visitor's [`Visit`] impl for the live alternative, passing a shared
            /// reference.
            ///
            /// Dispatch indexes a per-instantiation table of function pointers by the
            /// discriminant: one indirect call, never a chain of type tests. The visitor must
            /// implement [`Visit`] for every alternative with one shared `Output`; a visitor
            /// whose arms disagree on the result type doesn't satisfy the bounds.
            pub fn visit<V, R>(&self, mut visitor: V) -> R
            where
                $(V: Visit<$alt_t, Output = R>,)+
            {
                let table: [fn(&Self, &mut V) -> R; $arity] = [
                    $(|variant, visitor| {
                        // SAFETY: this entry is only reached by indexing with the tag, so $field
                        // is the live alternative.
                        <V as Visit<$alt_t>>::visit(visitor, unsafe { &*variant.data.$field })
                    },)+
                ];
                let arm = table[self.tag as usize];
                arm(self, &mut visitor)
            }

            /// Invokes the visitor's [`VisitMut`] impl for the live alternative, passing a
            /// mutable reference.
            pub fn visit_mut<V, R>(&mut self, mut visitor: V) -> R
            where
                $(V: VisitMut<$alt_t, Output = R>,)+
            {
                let table: [fn(&mut Self, &mut V) -> R; $arity] = [
                    $(|variant, visitor| {
                        // SAFETY: this entry is only reached by indexing with the tag, so $field
                        // is the live alternative.
                        <V as VisitMut<$alt_t>>::visit_mut(visitor, unsafe {
                            &mut *variant.data.$field
                        })
                    },)+
                ];
                let arm = table[self.tag as usize];
                arm(self, &mut visitor)
            }

            /// Visits with one callable per alternative, in declaration order, passing the live
            /// value by shared reference to the matching callable.
            ///
            /// Every alternative must be covered and every callable must return the same type;
            /// a missing or mistyped arm fails to compile.
            pub fn match_with<R, $($fgen),+>(&self, $($farg: $fgen),+) -> R
            where
                $($fgen: FnOnce(&$alt_t) -> R,)+
            {
                match self.tag {
                    $(
                        // SAFETY: the tag names $field as the live alternative.
                        $idx => $farg(unsafe { &*self.data.$field }),
                    )+
                    _ => unreachable!(),
                }
            }

            /// Visits with one callable per alternative, passing the live value by mutable
            /// reference to the matching callable.
            pub fn match_with_mut<R, $($fgen),+>(&mut self, $($farg: $fgen),+) -> R
            where
                $($fgen: FnOnce(&mut $alt_t) -> R,)+
            {
                match self.tag {
                    $(
                        // SAFETY: the tag names $field as the live alternative.
                        $idx => $farg(unsafe { &mut *self.data.$field }),
                    )+
                    _ => unreachable!(),
                }
            }

            /// Consumes the variant, passing the live value by move to the matching callable.
            pub fn match_into<R, $($fgen),+>(self, $($farg: $fgen),+) -> R
            where
                $($fgen: FnOnce($alt_t) -> R,)+
            {
                let mut this = ManuallyDrop::new(self);
                match this.tag {
                    $(
                        // SAFETY: the tag names $field as the live alternative, and wrapping
                        // self in ManuallyDrop means its Drop will not run again on the moved-out
                        // field.
                        $idx => $farg(unsafe { ManuallyDrop::take(&mut this.data.$field) }),
                    )+
                    _ => unreachable!(),
                }
            }

            /// Exchanges the contents of two variants.
            ///
            /// When both hold the same alternative the two live values are swapped in place.
            /// Otherwise the variants are swapped wholesale, tags included; either way no value
            /// is ever read at a type other than its own.
            pub fn swap(&mut self, other: &mut Self) {
                if self.tag == other.tag {
                    match self.tag {
                        $(
                            // SAFETY: the tags match, so $field is live in both variants.
                            $idx => unsafe {
                                mem::swap(&mut *self.data.$field, &mut *other.data.$field);
                            },
                        )+
                        _ => unreachable!(),
                    }
                } else {
                    mem::swap(self, other);
                }
            }
        }

        define_variant! {
            @alternatives
            $name, [$($ts),+],
            $({ $idx, $alt_t, $field, $marker })+
        }

        impl<$($ts),+> Drop for $name<$($ts),+> {
            fn drop(&mut self) {
                match self.tag {
                    $(
                        // SAFETY: only the live alternative was ever constructed in storage, and
                        // it is dropped exactly once, here.
                        $idx => unsafe { ManuallyDrop::drop(&mut self.data.$field) },
                    )+
                    _ => {}
                }
            }
        }

        impl<$($ts: Clone),+> Clone for $name<$($ts),+> {
            fn clone(&self) -> Self {
                match self.tag {
                    $(
                        // SAFETY: the tag confirms $field is the live alternative.
                        $idx => Self::$ctor($alt_t::clone(unsafe { &*self.data.$field })),
                    )+
                    _ => unreachable!(),
                }
            }
        }

        impl<$($ts),+> Default for $name<$($ts),+>
        where
            $first_t: Default,
        {
            /// Defaults to a default-constructed first alternative; a variant has no empty state.
            fn default() -> Self {
                Self::$first_ctor($first_t::default())
            }
        }

        impl<$($ts: PartialEq),+> PartialEq for $name<$($ts),+> {
            /// Variants holding different alternatives are never equal, whatever the values.
            fn eq(&self, other: &Self) -> bool {
                if self.tag != other.tag {
                    return false;
                }
                match self.tag {
                    $(
                        // SAFETY: the tags are equal, so $field is live in both variants.
                        $idx => unsafe { *self.data.$field == *other.data.$field },
                    )+
                    _ => unreachable!(),
                }
            }
        }

        impl<$($ts: Eq),+> Eq for $name<$($ts),+> {}

        impl<$($ts: PartialOrd),+> PartialOrd for $name<$($ts),+> {
            /// A lower discriminant orders first regardless of value; equal discriminants fall
            /// through to the live values' ordering.
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                if self.tag != other.tag {
                    return self.tag.partial_cmp(&other.tag);
                }
                match self.tag {
                    $(
                        // SAFETY: the tags are equal, so $field is live in both variants.
                        $idx => unsafe {
                            (*self.data.$field).partial_cmp(&*other.data.$field)
                        },
                    )+
                    _ => unreachable!(),
                }
            }
        }

        impl<$($ts: Ord),+> Ord for $name<$($ts),+> {
            fn cmp(&self, other: &Self) -> Ordering {
                if self.tag != other.tag {
                    return self.tag.cmp(&other.tag);
                }
                match self.tag {
                    $(
                        // SAFETY: the tags are equal, so $field is live in both variants.
                        $idx => unsafe { (*self.data.$field).cmp(&*other.data.$field) },
                    )+
                    _ => unreachable!(),
                }
            }
        }

        impl<$($ts: Hash),+> Hash for $name<$($ts),+> {
            /// Hashes the discriminant, then the live value.
            fn hash<H: Hasher>(&self, state: &mut H) {
                state.write_u8(self.tag);
                match self.tag {
                    $(
                        // SAFETY: the tag confirms $field is the live alternative.
                        $idx => $alt_t::hash(unsafe { &*self.data.$field }, state),
                    )+
                    _ => unreachable!(),
                }
            }
        }

        impl<$($ts: Debug),+> Debug for $name<$($ts),+> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                let mut builder = f.debug_struct(stringify!($name));
                builder.field("index", &self.index());
                match self.tag {
                    $(
                        // SAFETY: the tag confirms $field is the live alternative.
                        $idx => builder.field("value", unsafe { &*self.data.$field }),
                    )+
                    _ => unreachable!(),
                };
                builder.finish()
            }
        }

        impl<$($ts: Display),+> Display for $name<$($ts),+> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                match self.tag {
                    $(
                        // SAFETY: the tag confirms $field is the live alternative.
                        $idx => write!(f, "{}", unsafe { &*self.data.$field }),
                    )+
                    _ => unreachable!(),
                }
            }
        }
    };
}

define_variant! {
    /// A tagged union over two alternatives.
    ///
    /// Storage is an untagged union of the two types - sized and aligned for the larger and
    /// stricter of them - plus a `u8` discriminant saying which field is live. Exactly one
    /// alternative is live at all times: construction always builds one, and there is no empty
    /// state to observe, not even after a failed [`into_at`](Variant2::into_at).
    Variant2, Data2, 2, [T0, T1],
    default: first(T0),
    { 0, T0, a, first, At0, F0, arm0 }
    { 1, T1, b, second, At1, F1, arm1 }
}

define_variant! {
    /// A tagged union over three alternatives. See [`Variant2`] for the storage discipline.
    Variant3, Data3, 3, [T0, T1, T2],
    default: first(T0),
    { 0, T0, a, first, At0, F0, arm0 }
    { 1, T1, b, second, At1, F1, arm1 }
    { 2, T2, c, third, At2, F2, arm2 }
}

define_variant! {
    /// A tagged union over four alternatives. See [`Variant2`] for the storage discipline.
    Variant4, Data4, 4, [T0, T1, T2, T3],
    default: first(T0),
    { 0, T0, a, first, At0, F0, arm0 }
    { 1, T1, b, second, At1, F1, arm1 }
    { 2, T2, c, third, At2, F2, arm2 }
    { 3, T3, d, fourth, At3, F3, arm3 }
}
