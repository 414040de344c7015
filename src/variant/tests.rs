#![cfg(test)]

use std::collections::HashMap;
use std::hash::{BuildHasher, RandomState};
use std::path::PathBuf;

use super::*;
use crate::inject;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

#[test]
fn test_positional_construction() {
    let integer = Variant3::<u64, String, Vec<String>>::first(64);
    let string = Variant3::<u64, String, Vec<String>>::second("value".to_string());
    let vector = Variant3::<u64, String, Vec<String>>::third(vec!["1".to_string()]);

    assert_eq!(integer.index(), 0);
    assert_eq!(string.index(), 1);
    assert_eq!(vector.index(), 2);

    assert_eq!(integer.try_at::<0>(), Some(&64));
    assert_eq!(string.try_at::<1>(), Some(&"value".to_string()));
    assert_eq!(vector.try_at::<2>(), Some(&vec!["1".to_string()]));
}

#[test]
fn test_default_constructs_first_alternative() {
    let variant = Variant3::<u64, String, Vec<String>>::default();
    assert_eq!(variant.index(), 0, "Default construction should select alternative 0.");
    assert_eq!(variant.at::<0>(), &0);
}

#[test]
fn test_inject_exact_match() {
    let string: Variant2<String, f64> = inject!(Variant2<String, f64>, "exact".to_string());
    assert_eq!(string.index(), 0);
    assert_eq!(string.at::<0>(), "exact");

    let real: Variant2<String, f64> = inject!(Variant2<String, f64>, 0.5_f64);
    assert_eq!(real.index(), 1);
    assert_eq!(real.at::<1>(), &0.5);

    let wide: Variant4<u8, u16, u32, u64> = inject!(Variant4<u8, u16, u32, u64>, 2_u32);
    assert_eq!(wide.index(), 2);
}

#[test]
fn test_inject_conversion() {
    // No alternative is &str itself, so the first one with a From impl wins.
    let variant: Variant3<u64, String, f64> = inject!(Variant3<u64, String, f64>, "borrowed");
    assert_eq!(variant.index(), 1);
    assert_eq!(variant.at::<1>(), "borrowed");

    let variant: Variant3<u64, String, f64> = inject!(Variant3<u64, String, f64>, 0.25_f32);
    assert_eq!(variant.index(), 2, "f64 is the only alternative constructible from f32.");
}

#[test]
fn test_inject_ambiguous_conversion_prefers_first() {
    // Both u64 and f64 are constructible from u8; declaration order breaks the tie.
    let variant: Variant3<u64, String, f64> = inject!(Variant3<u64, String, f64>, 8_u8);
    assert_eq!(variant.index(), 0, "The earliest constructible alternative should win.");

    // Same policy for two owned-string-ish alternatives fed a &str.
    let variant: Variant2<String, PathBuf> = inject!(Variant2<String, PathBuf>, "ambiguous");
    assert_eq!(variant.index(), 0, "The earliest constructible alternative should win.");
}

#[test]
fn test_inject_duplicate_type_resolves_to_first_occurrence() {
    // A duplicated alternative type is just another tie for injection, though by-type
    // accessors refuse it as ambiguous.
    let variant: Variant2<String, String> = inject!(Variant2<String, String>, "dup".to_string());
    assert_eq!(variant.index(), 0, "The earliest occurrence of a duplicated type should win.");
    assert_eq!(variant.at::<0>(), "dup");
    assert_eq!(variant.try_at::<1>(), None);
}

#[test]
fn test_inject_exact_match_beats_earlier_conversion() {
    // String is constructible from &str, but &str appears verbatim at index 1.
    let variant: Variant2<String, &str> = inject!(Variant2<String, &str>, "exact");
    assert_eq!(variant.index(), 1, "An exact type match should beat an earlier conversion.");
    assert_eq!(variant.at::<1>(), &"exact");
}

#[test]
fn test_clone_is_independent() {
    let original = Variant2::<String, u64>::first("original".to_string());
    let mut copy = original.clone();

    assert_eq!(copy, original, "A clone should compare equal to its source.");
    assert_eq!(copy.index(), original.index());

    copy.at_mut::<0>().push_str(" changed");
    assert_ne!(copy, original, "Mutating the clone should not affect the source.");
    assert_eq!(original.at::<0>(), "original");
}

#[test]
fn test_assignment_destroys_previous_value() {
    let counter = CountedDrop::new(0);
    let mut variant = Variant2::<CountedDrop, u64>::first(counter.clone());

    variant = Variant2::second(64);
    assert_eq!(counter.take(), 1, "Assignment should destroy the previously live alternative.");
    assert_eq!(variant.index(), 1);

    drop(variant);
    assert_eq!(counter.take(), 0, "The counted value was already destroyed by assignment.");
}

#[test]
fn test_swap_same_alternative() {
    let mut lhs = Variant2::<String, f64>::first("lhs".to_string());
    let mut rhs = Variant2::<String, f64>::first("rhs".to_string());

    lhs.swap(&mut rhs);

    assert_eq!(lhs.at::<0>(), "rhs");
    assert_eq!(rhs.at::<0>(), "lhs");
    assert_eq!(lhs.index(), 0, "A same-alternative swap should not touch the discriminant.");
    assert_eq!(rhs.index(), 0);
}

#[test]
fn test_swap_cross_alternative() {
    let mut real = Variant2::<String, f64>::second(0.5);
    let mut text = Variant2::<String, f64>::first("x".to_string());

    real.swap(&mut text);

    assert_eq!(real.index(), 0);
    assert_eq!(real.at::<0>(), "x");
    assert_eq!(text.index(), 1);
    assert_eq!(text.at::<1>(), &0.5);
}

/// A visitor producing one `String` from any alternative, exercising the dispatch table.
struct Describe;

impl Visit<u64> for Describe {
    type Output = String;

    fn visit(&mut self, value: &u64) -> String {
        value.to_string()
    }
}

impl Visit<String> for Describe {
    type Output = String;

    fn visit(&mut self, value: &String) -> String {
        value.clone()
    }
}

impl Visit<Vec<i32>> for Describe {
    type Output = String;

    fn visit(&mut self, value: &Vec<i32>) -> String {
        value.iter().sum::<i32>().to_string()
    }
}

#[test]
fn test_visit_dispatches_on_live_alternative() {
    let integer = Variant3::<u64, String, Vec<i32>>::first(64);
    let string = Variant3::<u64, String, Vec<i32>>::second("visit".to_string());
    let vector = Variant3::<u64, String, Vec<i32>>::third(vec![1, 2, 3]);

    assert_eq!(integer.visit(Describe), "64");
    assert_eq!(string.visit(Describe), "visit");
    assert_eq!(vector.visit(Describe), "6");
}

/// A mutating visitor, for the `&mut` dispatch path.
struct Embiggen;

impl VisitMut<u64> for Embiggen {
    type Output = ();

    fn visit_mut(&mut self, value: &mut u64) {
        *value *= 2;
    }
}

impl VisitMut<String> for Embiggen {
    type Output = ();

    fn visit_mut(&mut self, value: &mut String) {
        value.make_ascii_uppercase();
    }
}

#[test]
fn test_visit_mut_mutates_in_place() {
    let mut string = Variant2::<u64, String>::second("loud".to_string());
    string.visit_mut(Embiggen);
    assert_eq!(string.at::<1>(), "LOUD");

    let mut integer = Variant2::<u64, String>::first(32);
    integer.visit_mut(Embiggen);
    assert_eq!(integer.at::<0>(), &64);
}

#[test]
fn test_match_with_covers_each_alternative() {
    let vector = Variant3::<u64, String, Vec<String>>::third(vec!["1".to_string()]);
    let string = Variant3::<u64, String, Vec<String>>::second("match".to_string());
    let integer = Variant3::<u64, String, Vec<String>>::default();

    assert!(vector.match_with(|_: &u64| false, |_: &String| false, |_: &Vec<String>| true));
    assert!(string.match_with(|_: &u64| false, |_: &String| true, |_: &Vec<String>| false));
    assert!(integer.match_with(|_: &u64| true, |_: &String| false, |_: &Vec<String>| false));
}

#[test]
fn test_match_with_mut_and_into() {
    let mut variant = Variant2::<u64, String>::first(10);
    variant.match_with_mut(|count: &mut u64| *count += 1, |_: &mut String| ());
    assert_eq!(variant.at::<0>(), &11);

    let consumed = variant.match_into(|count: u64| count, |_: String| 0);
    assert_eq!(consumed, 11);
}

#[test]
fn test_wrong_alternative_access() {
    let variant = Variant3::<u64, String, Vec<String>>::second("get".to_string());

    assert_eq!(variant.try_at::<0>(), None, "The nullable form should report a mismatch as None.");
    assert_eq!(variant.try_at::<2>(), None);
    assert_eq!(variant.get::<u64, _>(), None);
    assert_eq!(variant.index(), 1, "A failed access should have no side effects.");
    assert_eq!(variant.at::<1>(), "get");

    assert_panics!({
        let variant = Variant3::<u64, String, Vec<String>>::second("get".to_string());
        variant.at::<0>();
    });
    assert_panics!({
        let variant = Variant3::<u64, String, Vec<String>>::second("get".to_string());
        variant.expect::<Vec<String>, _>();
    });
    assert_panics!({
        let mut variant = Variant3::<u64, String, Vec<String>>::second("get".to_string());
        variant.at_mut::<2>();
    });
}

#[test]
fn test_take_out_of_variant() {
    let variant = Variant2::<String, u64>::first("owned".to_string());
    let owned = match variant.into_at::<0>() {
        Ok(value) => value,
        Err(_) => panic!("The live alternative should move out."),
    };
    assert_eq!(owned, "owned");

    let variant = Variant2::<String, u64>::first("kept".to_string());
    let variant = match variant.into_at::<1>() {
        Ok(_) => panic!("A dead alternative should never move out."),
        Err(variant) => variant,
    };
    assert_eq!(variant.index(), 0, "A failed take should leave the variant untouched.");
    assert_eq!(variant.at::<0>(), "kept");

    let variant = Variant2::<String, u64>::second(64);
    assert_eq!(variant.into_alt::<u64, _>(), Ok(64));
}

#[test]
fn test_equality_requires_matching_discriminants() {
    let lhs = Variant2::<u32, u64>::first(5);
    let rhs = Variant2::<u32, u64>::second(5);
    assert_ne!(lhs, rhs, "Equal-looking values under different discriminants are not equal.");

    assert_eq!(
        Variant2::<String, f64>::first("eq".to_string()),
        Variant2::first("eq".to_string())
    );
    assert_ne!(
        Variant2::<String, f64>::first("eq".to_string()),
        Variant2::first("ne".to_string())
    );
}

#[test]
fn test_ordering() {
    let low = Variant2::<u64, String>::first(u64::MAX);
    let high = Variant2::<u64, String>::second(String::new());
    assert!(low < high, "A lower discriminant orders first regardless of value.");

    let small = Variant2::<u64, String>::first(1);
    let large = Variant2::<u64, String>::first(2);
    assert!(small < large, "Matching discriminants fall back to the value ordering.");
}

#[test]
fn test_hash_as_map_key() {
    let mut map = HashMap::new();
    map.insert(Variant2::<String, u64>::first("hash".to_string()), 9);
    map.insert(Variant2::<String, u64>::second(98), 12);

    assert_eq!(map.get(&Variant2::first("hash".to_string())), Some(&9));
    assert_eq!(map.get(&Variant2::second(98)), Some(&12));

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(Variant2::<String, u64>::second(5)),
        state.hash_one(Variant2::<String, u64>::second(5)),
        "Equal variants should produce the same hash."
    );
}

#[test]
fn test_drop_accounting() {
    let counter = CountedDrop::new(0);

    let variant = Variant2::<CountedDrop, u64>::first(counter.clone());
    drop(variant);
    assert_eq!(counter.take(), 1, "Dropping the variant should drop the live alternative.");

    let variant = Variant2::<CountedDrop, u64>::second(64);
    drop(variant);
    assert_eq!(counter.take(), 0, "Inactive alternatives were never constructed, so nothing drops.");

    let variant = Variant2::<CountedDrop, u64>::first(counter.clone());
    let kept = variant.match_into(|tracked| tracked, |_: u64| panic!("Wrong arm!"));
    assert_eq!(counter.take(), 0, "match_into should move the value out, not drop it.");
    drop(kept);
    assert_eq!(counter.take(), 1);

    let variant = Variant2::<CountedDrop, u64>::first(counter.clone());
    let clone = variant.clone();
    drop(variant);
    drop(clone);
    assert_eq!(counter.take(), 2, "A clone owns its own copy of the live alternative.");
}

#[test]
fn test_zst_alternative() {
    let unit = Variant2::<ZeroSizedType, u64>::first(ZeroSizedType);
    assert_eq!(unit.index(), 0);
    assert_eq!(unit.at::<0>(), &ZeroSizedType);

    let integer = Variant2::<ZeroSizedType, u64>::second(64);
    assert_eq!(integer.try_at::<0>(), None);
    assert_eq!(integer.at::<1>(), &64);
}

#[test]
fn test_type_name() {
    let variant = Variant2::<u64, String>::second("name".to_string());
    assert_eq!(variant.type_name(), std::any::type_name::<String>());

    let variant = Variant2::<u64, String>::first(0);
    assert_eq!(variant.type_name(), std::any::type_name::<u64>());
}

#[test]
fn test_debug_and_display() {
    let variant = Variant2::<u64, String>::second("show".to_string());
    assert_eq!(format!("{variant}"), "show");

    let debugged = format!("{variant:?}");
    assert!(debugged.contains("Variant2"));
    assert!(debugged.contains("index: 1"));
    assert!(debugged.contains("show"));
}

#[test]
fn test_variant4_end_to_end() {
    let variant = Variant4::<u8, u16, u32, String>::fourth("wide".to_string());
    assert_eq!(variant.index(), 3);
    assert_eq!(variant.expect::<String, _>(), "wide");

    let position = variant.match_with(
        |_: &u8| 0_usize,
        |_: &u16| 1,
        |_: &u32| 2,
        |_: &String| 3,
    );
    assert_eq!(position, 3);

    let converted: Variant4<u8, u16, u32, u64> = inject!(Variant4<u8, u16, u32, u64>, 2_u16);
    assert_eq!(converted.index(), 1, "An exact match should pick its own position.");
}
