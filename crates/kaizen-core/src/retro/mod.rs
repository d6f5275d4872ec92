//! Retrospectives and their raw KPTA entries.

mod category;
mod kind;
mod kpta_item;
mod retrospective;

pub use category::KptaCategory;
pub use kind::RetroKind;
pub use kpta_item::KptaItem;
pub use retrospective::Retrospective;
