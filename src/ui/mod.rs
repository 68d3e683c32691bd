//! egui drawing of a [`Figure`](crate::figure::Figure).

pub mod panels;
pub mod plot;
