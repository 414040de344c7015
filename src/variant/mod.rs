//! A module containing the fixed-arity tagged unions [`Variant2`], [`Variant3`] and [`Variant4`],
//! plus the machinery they share.
//!
//! A variant holds exactly one value out of a fixed, ordered list of alternative types, together
//! with a discriminant recording which one. Unlike an [`Option`]-style type there is no empty
//! state: default construction builds the first alternative, and every other way of making one
//! builds some alternative. The declaration order of the alternatives is meaningful - it fixes
//! the discriminant values, the ordering tie-break, and which alternative wins a contested
//! [`inject!`](crate::inject).
//!
//! # Construction
//! ```
//! use prestd::inject;
//! use prestd::variant::Variant3;
//!
//! // By position.
//! let value = Variant3::<u64, String, f64>::second("hello".to_string());
//! assert_eq!(value.index(), 1);
//!
//! // By type, with the conversion policy from `inject!`'s documentation.
//! let value: Variant3<u64, String, f64> = inject!(Variant3<u64, String, f64>, "hello");
//! assert_eq!(value.index(), 1);
//!
//! // By default: the first alternative, default-constructed.
//! let value = Variant3::<u64, String, f64>::default();
//! assert_eq!(value.index(), 0);
//! ```
//!
//! # Access
//! Accessors come in a checked form returning [`Option`] and a panicking form returning plain
//! references, each addressable by index or by type:
//! ```
//! use prestd::variant::Variant2;
//!
//! let mut value = Variant2::<String, f64>::first("access".to_string());
//! assert_eq!(value.try_at::<0>().map(String::as_str), Some("access"));
//! assert_eq!(value.try_at::<1>(), None);
//! assert_eq!(value.get::<f64, _>(), None);
//! value.at_mut::<0>().push('!');
//! assert_eq!(value.expect::<String, _>(), "access!");
//! ```
//!
//! # Visitation
//! [`visit`](Variant2::visit) dispatches a [`Visit`]-implementing visitor through a function
//! pointer table indexed by the discriminant, and [`match_with`](Variant2::match_with) takes one
//! closure per alternative instead:
//! ```
//! use prestd::variant::Variant3;
//!
//! let value = Variant3::<u64, String, f64>::third(0.5);
//! let description = value.match_with(
//!     |count: &u64| format!("count {count}"),
//!     |text: &String| format!("text {text}"),
//!     |real: &f64| format!("real {real}"),
//! );
//! assert_eq!(description, "real 0.5");
//! ```

mod alt;
mod error;
mod inject;
mod variant;
mod visit;

pub use alt::*;
pub use error::*;
pub use inject::*;
pub use variant::*;
pub use visit::*;

mod tests;
