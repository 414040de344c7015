//! Construction of a variant from a plain value, resolving which alternative receives it.
//!
//! The resolution policy has two tiers:
//! 1. if the value's type *is* one of the alternatives, that alternative wins outright;
//! 2. otherwise the candidates are walked in declaration order and the first alternative with a
//!    matching [`From`] impl wins. Earliest-declared wins any tie; this is deliberate, so that the
//!    selected alternative never depends on anything but the declaration order. That includes a
//!    type listed twice: the exact tier resolves it to its first occurrence, unlike by-type
//!    access, where the duplicate is an ambiguity error.
//!
//! A value no alternative accepts must not compile, so the whole policy has to run inside trait
//! resolution. The trick used here is method resolution order: [`Inject`] is implemented on
//! [`Slot`] behind an increasing number of references, one nesting depth per (tier, position)
//! pair, with deeper nesting for higher-priority candidates. The [`inject!`] macro calls
//! `.inject()` through a tower of `&`s, and the compiler's autoref/deref method probing selects
//! the most-referenced applicable impl - i.e. the highest-priority viable alternative. No impl
//! applicable means no `inject` method exists, which is the required compile-time failure.
//!
//! The [`Cell`] inside [`Slot`] is what lets every impl take `&self` (a requirement of the method
//! probing) while still moving the value out exactly once.

use std::cell::Cell;
use std::marker::PhantomData;

use crate::variant::variant::{Variant2, Variant3, Variant4};

/// A single-use holder pairing a value with the variant type it is destined for.
///
/// Created by [`inject!`]; there is no reason to construct one directly.
pub struct Slot<V, T> {
    value: Cell<Option<T>>,
    variant: PhantomData<fn() -> V>,
}

impl<V, T> Slot<V, T> {
    pub const fn new(value: T) -> Slot<V, T> {
        Slot {
            value: Cell::new(Some(value)),
            variant: PhantomData,
        }
    }

    /// Moves the held value out.
    ///
    /// # Panics
    /// Panics if the value was already taken, which [`inject!`] never does.
    fn take(&self) -> T {
        match self.value.take() {
            Some(value) => value,
            None => panic!("Injection slot used twice!"),
        }
    }
}

/// The injection step performed once [`inject!`] has picked an alternative.
///
/// Each impl below ties one reference depth of [`Slot`] to one alternative of one variant type;
/// see the module documentation for how depth encodes priority.
pub trait Inject {
    /// The variant type being constructed.
    type Variant;

    fn inject(&self) -> Self::Variant;
}

/// Constructs a variant from a value, selecting the alternative by type.
///
/// An exact type match is preferred; failing that, the first alternative (in declaration order)
/// constructible from the value via [`From`] is selected. If no alternative qualifies, the call
/// fails to compile with a missing-method error.
///
/// # Examples
/// ```
/// use prestd::inject;
/// use prestd::variant::Variant3;
///
/// let text: Variant3<u64, String, f64> = inject!(Variant3<u64, String, f64>, "hello");
/// assert_eq!(text.index(), 1);
///
/// let real: Variant3<u64, String, f64> = inject!(Variant3<u64, String, f64>, 0.5_f64);
/// assert_eq!(real.index(), 2);
/// ```
#[macro_export]
macro_rules! inject {
    ($variant:ty, $value:expr) => {{
        use $crate::variant::Inject as _;
        let slot = $crate::variant::Slot::<$variant, _>::new($value);
        (&&&&&&&&&&slot).inject()
    }};
}

// Variant2: exact matches at depths 3 and 2, conversions at depths 1 and 0.

impl<T0, T1> Inject for &&&Slot<Variant2<T0, T1>, T0> {
    type Variant = Variant2<T0, T1>;

    fn inject(&self) -> Variant2<T0, T1> {
        Variant2::first(self.take())
    }
}

impl<T0, T1> Inject for &&Slot<Variant2<T0, T1>, T1> {
    type Variant = Variant2<T0, T1>;

    fn inject(&self) -> Variant2<T0, T1> {
        Variant2::second(self.take())
    }
}

impl<T0, T1, U> Inject for &Slot<Variant2<T0, T1>, U>
where
    T0: From<U>,
{
    type Variant = Variant2<T0, T1>;

    fn inject(&self) -> Variant2<T0, T1> {
        Variant2::first(T0::from(self.take()))
    }
}

impl<T0, T1, U> Inject for Slot<Variant2<T0, T1>, U>
where
    T1: From<U>,
{
    type Variant = Variant2<T0, T1>;

    fn inject(&self) -> Variant2<T0, T1> {
        Variant2::second(T1::from(self.take()))
    }
}

// Variant3: exact matches at depths 5..3, conversions at depths 2..0.

impl<T0, T1, T2> Inject for &&&&&Slot<Variant3<T0, T1, T2>, T0> {
    type Variant = Variant3<T0, T1, T2>;

    fn inject(&self) -> Variant3<T0, T1, T2> {
        Variant3::first(self.take())
    }
}

impl<T0, T1, T2> Inject for &&&&Slot<Variant3<T0, T1, T2>, T1> {
    type Variant = Variant3<T0, T1, T2>;

    fn inject(&self) -> Variant3<T0, T1, T2> {
        Variant3::second(self.take())
    }
}

impl<T0, T1, T2> Inject for &&&Slot<Variant3<T0, T1, T2>, T2> {
    type Variant = Variant3<T0, T1, T2>;

    fn inject(&self) -> Variant3<T0, T1, T2> {
        Variant3::third(self.take())
    }
}

impl<T0, T1, T2, U> Inject for &&Slot<Variant3<T0, T1, T2>, U>
where
    T0: From<U>,
{
    type Variant = Variant3<T0, T1, T2>;

    fn inject(&self) -> Variant3<T0, T1, T2> {
        Variant3::first(T0::from(self.take()))
    }
}

impl<T0, T1, T2, U> Inject for &Slot<Variant3<T0, T1, T2>, U>
where
    T1: From<U>,
{
    type Variant = Variant3<T0, T1, T2>;

    fn inject(&self) -> Variant3<T0, T1, T2> {
        Variant3::second(T1::from(self.take()))
    }
}

impl<T0, T1, T2, U> Inject for Slot<Variant3<T0, T1, T2>, U>
where
    T2: From<U>,
{
    type Variant = Variant3<T0, T1, T2>;

    fn inject(&self) -> Variant3<T0, T1, T2> {
        Variant3::third(T2::from(self.take()))
    }
}

// Variant4: exact matches at depths 7..4, conversions at depths 3..0.

impl<T0, T1, T2, T3> Inject for &&&&&&&Slot<Variant4<T0, T1, T2, T3>, T0> {
    type Variant = Variant4<T0, T1, T2, T3>;

    fn inject(&self) -> Variant4<T0, T1, T2, T3> {
        Variant4::first(self.take())
    }
}

impl<T0, T1, T2, T3> Inject for &&&&&&Slot<Variant4<T0, T1, T2, T3>, T1> {
    type Variant = Variant4<T0, T1, T2, T3>;

    fn inject(&self) -> Variant4<T0, T1, T2, T3> {
        Variant4::second(self.take())
    }
}

impl<T0, T1, T2, T3> Inject for &&&&&Slot<Variant4<T0, T1, T2, T3>, T2> {
    type Variant = Variant4<T0, T1, T2, T3>;

    fn inject(&self) -> Variant4<T0, T1, T2, T3> {
        Variant4::third(self.take())
    }
}

impl<T0, T1, T2, T3> Inject for &&&&Slot<Variant4<T0, T1, T2, T3>, T3> {
    type Variant = Variant4<T0, T1, T2, T3>;

    fn inject(&self) -> Variant4<T0, T1, T2, T3> {
        Variant4::fourth(self.take())
    }
}

impl<T0, T1, T2, T3, U> Inject for &&&Slot<Variant4<T0, T1, T2, T3>, U>
where
    T0: From<U>,
{
    type Variant = Variant4<T0, T1, T2, T3>;

    fn inject(&self) -> Variant4<T0, T1, T2, T3> {
        Variant4::first(T0::from(self.take()))
    }
}

impl<T0, T1, T2, T3, U> Inject for &&Slot<Variant4<T0, T1, T2, T3>, U>
where
    T1: From<U>,
{
    type Variant = Variant4<T0, T1, T2, T3>;

    fn inject(&self) -> Variant4<T0, T1, T2, T3> {
        Variant4::second(T1::from(self.take()))
    }
}

impl<T0, T1, T2, T3, U> Inject for &Slot<Variant4<T0, T1, T2, T3>, U>
where
    T2: From<U>,
{
    type Variant = Variant4<T0, T1, T2, T3>;

    fn inject(&self) -> Variant4<T0, T1, T2, T3> {
        Variant4::third(T2::from(self.take()))
    }
}

impl<T0, T1, T2, T3, U> Inject for Slot<Variant4<T0, T1, T2, T3>, U>
where
    T3: From<U>,
{
    type Variant = Variant4<T0, T1, T2, T3>;

    fn inject(&self) -> Variant4<T0, T1, T2, T3> {
        Variant4::fourth(T3::from(self.take()))
    }
}
