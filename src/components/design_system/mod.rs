//! Design System Components
//!
//! The reusable UI primitives the character form is built from.

mod button;
mod card;

pub use button::{Button, ButtonVariant};
pub use card::{Card, CardBody, CardHeader};

#[cfg(test)]
mod tests;
