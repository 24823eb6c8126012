//! Type lists, derived tags and enumerants.

use std::marker::PhantomData;

use typeflags::meta::tag::TagEq;
use typeflags::meta::type_list::{Concat, Filter, IndexOf, NOT_FOUND};
use typeflags::primitives::Bool;
use typeflags::prelude::*;

mod land {
    use typeflags::Tag;

    #[derive(Tag)]
    pub struct Cat;
    #[derive(Tag)]
    pub struct Dog;
}

mod sea {
    use typeflags::Tag;

    #[derive(Tag)]
    pub struct Cat;
}

type Pets = type_list![land::Cat, land::Dog];

#[test]
fn same_name_in_another_module_is_another_tag() {
    assert_eq!(<land::Cat as Tag>::NAME, <sea::Cat as Tag>::NAME);
    assert_ne!(<land::Cat as Tag>::KEY, <sea::Cat as Tag>::KEY);
    assert!(<<land::Cat as TagEq<land::Cat>>::Out as Bool>::VALUE);
    assert!(!<<land::Cat as TagEq<sea::Cat>>::Out as Bool>::VALUE);

    assert_eq!(<Pets as IndexOf<land::Cat>>::INDEX, 0);
    assert_eq!(<Pets as IndexOf<land::Dog>>::INDEX, 1);
    assert_eq!(<Pets as IndexOf<sea::Cat>>::INDEX, NOT_FOUND);
    assert!(<type_list![land::Cat, sea::Cat] as TypeList>::IS_SET);
}

#[test]
fn lengths_count_gaps() {
    assert_eq!(<type_list![] as TypeList>::LEN, 0);
    assert_eq!(<type_list![land::Cat, Void, Void, land::Dog] as TypeList>::LEN, 4);
    assert!(!<type_list![Void, Void] as TypeList>::IS_SET);
}

#[test]
fn filter_drops_every_gap() {
    type Gappy = type_list![Void, land::Cat, Void, land::Dog, Void];
    let _: PhantomData<<Gappy as Filter<Void>>::Out> = PhantomData::<Pets>;
    let _: PhantomData<<Pets as Filter<land::Cat>>::Out> = PhantomData::<type_list![land::Dog]>;
    assert_eq!(<<Gappy as Filter<Void>>::Out as TypeList>::LEN, 2);
}

#[test]
fn concat_appends() {
    type Joined = <Pets as Concat<type_list![sea::Cat]>>::Out;
    let _: PhantomData<Joined> = PhantomData::<type_list![land::Cat, land::Dog, sea::Cat]>;
    let _: PhantomData<<type_list![] as Concat<Pets>>::Out> = PhantomData::<Pets>;
}

#[test]
fn each_name_walks_in_order() {
    let mut seen = Vec::new();
    <type_list![land::Dog, Void, i32] as TypeList>::each_name(|index, name| seen.push((index, name)));
    assert_eq!(seen, vec![(0, "Dog"), (1, "void"), (2, "i32")]);
}

#[test]
fn tag_flags_keep_same_named_tags_apart() {
    type Mixed = TagFlags<type_list![land::Cat, sea::Cat]>;
    let flags = Mixed::from(Flag::<sea::Cat>::new());
    assert_eq!(flags.bits(), 0b10);
    assert!(!flags.contains(Flag::<land::Cat>::new()));
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enumerant)]
enum Level {
    Low = -2,
    Mid = 0,
    High = 5,
}

#[test]
fn enumerant_metadata() {
    assert_eq!(Level::TYPE_NAME, "Level");
    assert_eq!(Level::VARIANTS, &[Level::Low, Level::Mid, Level::High]);
    assert_eq!(Level::MIN_REPR, -2);
    assert_eq!(Level::MAX_REPR, 5);
    assert_eq!(Level::High.repr(), 5);
    assert_eq!(Level::Low.name(), "Low");
    assert_eq!(Level::from_repr(0), Some(Level::Mid));
    assert_eq!(Level::from_repr(1), None);
    assert_eq!(Level::VALUES.len(), 3);
    assert!(Level::VALUES.iter().all(|v| v.key() == Level::KEY));
}

#[test]
fn values_compare_by_type_and_discriminant() {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Enumerant)]
    enum Other {
        Low = -2,
    }

    assert_ne!(Level::Low.value(), Other::Low.value());
    assert_eq!(Level::Low.value(), Level::VALUES[0]);
    assert!(!Level::Low.value().same_type(Other::Low.value()));
    assert_eq!(format!("{:?}", Value::NULL), "Value::NULL");
    assert_eq!(Level::High.value().to_string(), "High");
}
