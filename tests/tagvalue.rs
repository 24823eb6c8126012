//! Tag-value flag sets: bit index = position in the value list.

use typeflags::prelude::*;
use typeflags::checked::FlagOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enumerant)]
enum Te {
    N1 = 1,
    N2,
    N3,
}

value_flags! { type Three = [Te::N1, Te::N2, Te::N3]; }
value_flags! { type Two = [Te::N1, Te::N2]; }

#[test]
fn static_checks_of_the_flag_set() {
    assert_eq!(Three::from(Te::N1) | Te::N2, flag_list!(Three; Te::N1, Te::N2));
    assert_eq!(Two::default() | Te::N1, flag_list!(Two; Te::N1));
    assert_eq!(
        Three::default().set(flag_list!(Three; Te::N1, Te::N3)) & flag_list!(Three; Te::N1, Te::N2),
        flag_list!(Three; Te::N1)
    );
    assert!(Three::default().flip(flag_list!(Three; Te::N2, Te::N3)).any_of(flag_list!(Three; Te::N1, Te::N2)));
    assert_eq!(Three::set_all() & Te::N2, flag_list!(Three; Te::N2));
    assert_eq!(<ThreeOptions as FlagOptions>::BIT_COUNT, 3);
    assert_eq!(Three::index_of(Te::N3), Some(2));
    assert_eq!(Two::index_of(Te::N3), None);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enumerant)]
enum Animal {
    Cat,
    Dog,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enumerant)]
enum AnimalWolf {
    Wolf,
}

value_flags! { pub type Animals = [Animal::Cat, Animal::Dog, _, AnimalWolf::Wolf]; }

#[test]
fn usage() {
    let cat = Animals::from(Animal::Cat);
    let a = cat | Animal::Dog;
    assert_eq!(a.to_string(), "Cat | Dog");
    assert_eq!(((a & Animal::Cat) | AnimalWolf::Wolf).to_string(), "Cat | Wolf");
    assert_eq!(((a & Animal::Cat) | AnimalWolf::Wolf).bits(), 0b1001);
    assert_eq!(Animals::reset_all().to_string(), "<None>");
}

#[test]
fn gaps_take_a_bit_but_are_never_set() {
    assert_eq!(Animals::index_of(AnimalWolf::Wolf), Some(3));
    assert_eq!(Animals::value_index(Value::NULL), None);
    assert_eq!(Animals::set_all().bits(), 0b1011);
    assert_eq!((!Animals::reset_all()).bits(), 0b1011);
    assert!(Animals::set_all().all());
    assert!(!Animals::set_all().contains_value(Value::NULL));
}

#[test]
fn values_are_told_apart_by_their_enum() {
    // Te::N2 and Animal::Dog differ only by type, AnimalWolf::Wolf shares Cat's discriminant.
    assert!(!Animals::set_all().contains(Te::N2));
    assert!(Animals::set_all().contains(AnimalWolf::Wolf));
    assert!(!Animals::from(Animal::Cat).contains(AnimalWolf::Wolf));
    assert_eq!(
        Animals::try_from_flag(Te::N1),
        Err(FlagError::NotAnOption { type_name: "Te", value: "N1" })
    );
}

#[test]
#[should_panic(expected = "`Te::N3` is not an option of this flag set")]
fn converting_a_non_option_panics() {
    let _ = Animals::from(Te::N3);
}

#[test]
fn queries_and_modifiers() {
    let a = Animals::from(Animal::Dog) | AnimalWolf::Wolf;
    assert!(a.any());
    assert!(!a.all());
    assert!(!a.none());
    assert!(Animals::reset_all().none());
    assert!(a.all_of(AnimalWolf::Wolf));
    assert!(a.none_of(Animal::Cat));
    assert_eq!(a.reset(Animal::Dog), Animals::from(AnimalWolf::Wolf));
    assert_eq!(a.flip_all(), Animals::from(Animal::Cat));
    assert_eq!(a.mask(Animal::Dog), Animals::from(Animal::Dog));

    let mut b = Animals::reset_all();
    b |= Animal::Cat;
    b ^= Animal::Cat;
    b |= AnimalWolf::Wolf;
    b &= AnimalWolf::Wolf;
    assert_eq!(b, Animals::from(AnimalWolf::Wolf));
}

#[test]
fn raw_bits_reject_gaps() {
    assert_eq!(Animals::from_bits(0b1001), Ok(Animals::from(Animal::Cat) | AnimalWolf::Wolf));
    assert_eq!(
        Animals::from_bits(0b0100),
        Err(FlagError::OutOfRange { index: 2, bit_count: 4 })
    );
    assert_eq!(
        Animals::from_bits(0b1_0000),
        Err(FlagError::OutOfRange { index: 4, bit_count: 4 })
    );
}

#[test]
fn each_visits_options_in_list_order() {
    let a = Animals::from(AnimalWolf::Wolf) | Animal::Cat;

    let mut all = Vec::new();
    a.each(|value, set| all.push((value.name(), set)));
    assert_eq!(all, vec![("Cat", true), ("Dog", false), ("Wolf", true)]);

    let mut set = Vec::new();
    a.each_set(|value| set.push(value));
    assert_eq!(set, vec![Animal::Cat.value(), AnimalWolf::Wolf.value()]);
    assert_eq!(a.to_vec(), set);

    let mut reset = Vec::new();
    a.each_reset(|value| reset.push(value));
    assert_eq!(reset, vec![Animal::Dog.value()]);
}

#[test]
fn checked_flags() {
    let wolf = flag!(Animals, AnimalWolf::Wolf);
    assert_eq!(wolf.index(), 3);
    assert_eq!(Animals::from(wolf), Animals::from(AnimalWolf::Wolf));
    assert_eq!(flag_list!(Animals; Animal::Dog, AnimalWolf::Wolf).bits(), 0b1010);
}

#[test]
fn debug_lists_the_values() {
    let a = Animals::from(Animal::Cat) | AnimalWolf::Wolf;
    assert_eq!(format!("{a:?}"), "ValueFlags(Cat | Wolf)");
}
