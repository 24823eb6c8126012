//! Tag-type flag sets: bit index = position in the type list.

use typeflags::prelude::*;
use typeflags::tagtype::TagOptions;

#[test]
fn set_all_masked_by_one_flag() {
    type Mixed = TagFlags<type_list![char, i32, f32]>;
    let anded = Mixed::set_all() & Flag::<i32>::new();
    assert_eq!(anded, Mixed::from(Flag::<i32>::new()));
}

mod animal {
    use typeflags::Tag;

    #[derive(Tag)]
    pub struct Cat;
    #[derive(Tag)]
    pub struct Dog;
    #[derive(Tag)]
    pub struct Wolf;
}

use animal::{Cat, Dog, Wolf};

type Animals = TagFlags<type_list![Cat, Dog, Void, Wolf]>;

#[test]
fn usage() {
    let dog = Flag::<Dog>::new();
    let a = Animals::from(Flag::<Cat>::new()) | dog;
    assert_eq!(Flag::<Cat>::new().to_string(), "Cat");
    assert_eq!(a.to_string(), "Cat | Dog");
    assert_eq!(((a & Flag::<Cat>::new()) | Flag::<Wolf>::new()).to_string(), "Cat | Wolf");
}

#[test]
fn gaps_take_a_bit_but_are_never_set() {
    assert_eq!(Animals::index_of::<Cat>(), 0);
    assert_eq!(Animals::index_of::<Dog>(), 1);
    assert_eq!(Animals::index_of::<Wolf>(), 3);
    assert_eq!(Animals::set_all().bits(), 0b1011);
    assert_eq!((!Animals::reset_all()).bits(), 0b1011);
    assert_eq!(<type_list![Cat, Dog, Void, Wolf] as TypeList>::LEN, 4);
    let storage: u8 = Animals::set_all().bits();
    assert_eq!(storage, 0b1011);
}

#[test]
fn queries_and_modifiers() {
    let a = Animals::from(Flag::<Cat>::new());
    assert!(a.contains(Flag::<Cat>::new()));
    assert!(!a.contains(Flag::<Wolf>::new()));
    assert!(a.any());
    assert!(!a.all());
    assert!(!a.none());
    assert!(a.all_of(Flag::<Cat>::new()));
    assert!(a.none_of(Flag::<Dog>::new()));
    assert!(a.any_of(FlagList::<type_list![Cat, Wolf]>::new()));

    let b = a.set(Flag::<Wolf>::new());
    assert_eq!(b, Animals::from_list::<type_list![Cat, Wolf]>());
    assert_eq!(b.reset(Flag::<Cat>::new()), Animals::from(Flag::<Wolf>::new()));
    assert_eq!(b.flip(Flag::<Dog>::new()), Animals::set_all());
    assert_eq!(b.mask(Flag::<Wolf>::new()), Animals::from(Flag::<Wolf>::new()));
    assert_eq!(b.flip_all(), Animals::from(Flag::<Dog>::new()));
}

#[test]
fn list_forms() {
    let a = Animals::reset_all().set_list::<type_list![Cat, Dog]>();
    assert!(a.all_list::<type_list![Cat, Dog]>());
    assert!(!a.all_list::<type_list![Cat, Wolf]>());
    assert!(a.any_list::<type_list![Dog, Wolf]>());
    assert!(a.none_list::<type_list![Wolf]>());
    assert_eq!(a.reset_list::<type_list![Cat]>(), Animals::from(Flag::<Dog>::new()));
    assert_eq!(a.flip_list::<type_list![Dog, Wolf]>(), Animals::from_list::<type_list![Cat, Wolf]>());
    assert_eq!(a.mask_list::<type_list![Dog, Wolf]>(), Animals::from(Flag::<Dog>::new()));
}

#[test]
fn assign_operators() {
    let mut a = Animals::reset_all();
    a |= Flag::<Cat>::new();
    a |= FlagList::<type_list![Dog, Wolf]>::new();
    assert!(a.all());
    a &= FlagList::<type_list![Cat, Wolf]>::new();
    a ^= Flag::<Cat>::new();
    assert_eq!(a, Animals::from(Flag::<Wolf>::new()));
}

struct Collect(Vec<(&'static str, bool)>);

impl FlagVisitor for Collect {
    fn visit<T: Tag>(&mut self, _flag: Flag<T>, is_set: bool) {
        self.0.push((T::NAME, is_set));
    }
}

#[test]
fn each_skips_gaps() {
    let a = Animals::from_list::<type_list![Cat, Wolf]>();
    let mut visitor = Collect(Vec::new());
    a.each(&mut visitor);
    assert_eq!(visitor.0, vec![("Cat", true), ("Dog", false), ("Wolf", true)]);

    let mut set = Vec::new();
    a.each_set(|name| set.push(name));
    assert_eq!(set, vec!["Cat", "Wolf"]);

    let mut reset = Vec::new();
    a.each_reset(|name| reset.push(name));
    assert_eq!(reset, vec!["Dog"]);
    assert_eq!(a.names(), vec!["Cat", "Wolf"]);
}

#[test]
fn raw_bits_reject_gaps() {
    assert_eq!(Animals::from_bits(0b0011), Ok(Animals::from_list::<type_list![Cat, Dog]>()));
    assert_eq!(
        Animals::from_bits(0b0100),
        Err(FlagError::OutOfRange { index: 2, bit_count: 4 })
    );
}

#[test]
fn display_and_debug() {
    assert_eq!(Animals::reset_all().to_string(), "<None>");
    assert_eq!(format!("{:?}", Animals::set_all()), "TagFlags(Cat | Dog | Wolf)");
    assert_eq!(format!("{:?}", Flag::<Wolf>::new()), "Flag<Wolf>");
}

#[test]
fn primitive_tags() {
    type Numbers = TagFlags<type_list![u8, u16, Void, u32, u64]>;
    let n = Numbers::from(Flag::<u8>::new()) | Flag::<u64>::new();
    assert_eq!(n.bits(), 0b10001);
    assert_eq!(n.to_string(), "u8 | u64");
}

#[test]
fn storage_grows_with_the_list() {
    type Wide = type_list![
        u8, u16, u32, u64, u128, i8, i16, i32, i64, i128
    ];
    let wide: <Wide as TagOptions>::Storage = TagFlags::<Wide>::set_all().bits();
    assert_eq!(wide, 0b11_1111_1111u16);
}
