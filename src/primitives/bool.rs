//! Type-level boolean logic.
//!
//! Core types: `Present` (true), `Absent` (false), `Bool` trait.
//! Type lists use these to answer "is this tag the one we are looking for?"
//! without leaving the trait solver.

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;

    /// Type-level conditional: `If<Then, Else>`.
    type If<Then, Else>;
}

/// Type-level True.
#[derive(Debug, Clone, Copy, Default)]
pub struct Present;

/// Type-level False.
#[derive(Debug, Clone, Copy, Default)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
    type If<Then, Else> = Then;
}

impl Bool for Absent {
    const VALUE: bool = false;
    type If<Then, Else> = Else;
}

const _: () = {
    assert!(<Present as Bool>::VALUE);
    assert!(!<Absent as Bool>::VALUE);
};

const _: core::marker::PhantomData<<Present as Bool>::If<u8, u16>> = core::marker::PhantomData::<u8>;
const _: core::marker::PhantomData<<Absent as Bool>::If<u8, u16>> = core::marker::PhantomData::<u16>;
