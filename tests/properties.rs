//! Property-based tests: every flag set design behaves like a plain bitmask
//! restricted to its options.

use proptest::prelude::*;
use typeflags::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enumerant)]
enum Animal {
    Cat,
    Dog,
    Wolf = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enumerant)]
enum Plant {
    Fern,
}

repeated_flags! { type Repeated: Animal = [Animal::Cat, Animal::Dog, Animal::Wolf]; }
value_flags! { type Values = [Animal::Cat, Animal::Dog, _, Plant::Fern]; }
type Numbered = BitFlags<Animal, u8>;

mod tags {
    use typeflags::Tag;

    #[derive(Tag)]
    pub struct Cat;
    #[derive(Tag)]
    pub struct Dog;
    #[derive(Tag)]
    pub struct Fern;
}

type Tagged = TagFlags<type_list![tags::Cat, tags::Dog, Void, tags::Fern]>;

/// All four layouts above use bits 0, 1 and 3.
const OPTIONS: u8 = 0b1011;

/// Random subsets of the options.
fn subset() -> impl Strategy<Value = u8> {
    any::<u8>().prop_map(|bits| bits & OPTIONS)
}

proptest! {
    #[test]
    fn repeated_matches_the_bitmask(a in subset(), b in subset()) {
        let (x, y) = (Repeated::from_bits(a).unwrap(), Repeated::from_bits(b).unwrap());
        prop_assert_eq!((x | y).bits(), a | b);
        prop_assert_eq!((x & y).bits(), a & b);
        prop_assert_eq!((x ^ y).bits(), a ^ b);
        prop_assert_eq!(x.reset(y).bits(), a & !b);
        prop_assert_eq!((!x).bits(), !a & OPTIONS);
        prop_assert_eq!(x.all(), a == OPTIONS);
        prop_assert_eq!(x.none(), a == 0);
        prop_assert_eq!(x.any_of(y), a & b != 0);
        prop_assert_eq!(x.iter().count() as u32, a.count_ones());
    }

    #[test]
    fn values_match_the_bitmask(a in subset(), b in subset()) {
        let (x, y) = (Values::from_bits(a).unwrap(), Values::from_bits(b).unwrap());
        prop_assert_eq!((x | y).bits(), a | b);
        prop_assert_eq!(x.mask(y).bits(), a & b);
        prop_assert_eq!(x.flip(y).bits(), a ^ b);
        prop_assert_eq!(x.flip_all().bits(), !a & OPTIONS);
        prop_assert_eq!(x.all_of(y), a & b == b);
        prop_assert_eq!(x.contains(Plant::Fern), a & 0b1000 != 0);
        prop_assert_eq!(x.to_vec().len() as u32, a.count_ones());
    }

    #[test]
    fn tags_match_the_bitmask(a in subset(), b in subset()) {
        let (x, y) = (Tagged::from_bits(a).unwrap(), Tagged::from_bits(b).unwrap());
        prop_assert_eq!(x.set(y).bits(), a | b);
        prop_assert_eq!(x.reset(y).bits(), a & !b);
        prop_assert_eq!(x.flip_all().bits(), !a & OPTIONS);
        prop_assert_eq!(x.none_of(y), a & b == 0);
        prop_assert_eq!(x.contains(Flag::<tags::Dog>::new()), a & 0b10 != 0);
        prop_assert_eq!(x.names().len() as u32, a.count_ones());
    }

    #[test]
    fn numbered_matches_the_bitmask(a in subset(), b in subset()) {
        let (x, y) = (Numbered::from_bits(a).unwrap(), Numbered::from_bits(b).unwrap());
        prop_assert_eq!((x | y).bits(), a | b);
        prop_assert_eq!((x & y).bits(), a & b);
        prop_assert_eq!(x.flip(y).bits(), a ^ b);
        prop_assert_eq!(x.all(y), a & b == b);
        prop_assert_eq!(x.to_vec().len() as u32, a.count_ones());
    }

    #[test]
    fn raw_bits_outside_the_options_are_rejected(bits in any::<u8>()) {
        let stray = bits & !OPTIONS;
        let expected = (stray != 0).then(|| stray.trailing_zeros());
        let index = |result: Result<u32, FlagError>| match result {
            Ok(_) => None,
            Err(FlagError::OutOfRange { index, .. }) => Some(index),
            Err(other) => panic!("unexpected error {other}"),
        };
        prop_assert_eq!(index(Repeated::from_bits(bits).map(|_| 0)), expected);
        prop_assert_eq!(index(Values::from_bits(bits).map(|_| 0)), expected);
        prop_assert_eq!(index(Tagged::from_bits(bits).map(|_| 0)), expected);
        prop_assert_eq!(index(Numbered::from_bits(bits).map(|_| 0)), expected);
    }
}
