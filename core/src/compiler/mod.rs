//! Compiles formula source into postfix programs.

pub mod shunting_yard;

pub use shunting_yard::{Program, compile};
