//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Tag)]` | on unit struct | Define a flag name |
//! | `#[derive(Enumerant)]` | on enum | Define flag options |
//! | `type_list!` | function macro | Build a type list |

pub mod derive_enumerant;
pub mod derive_tag;
pub mod type_list;
