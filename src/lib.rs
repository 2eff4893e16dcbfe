// error_chain macro can recurse deeply
#![recursion_limit = "1024"]

#[macro_use]
extern crate error_chain;
#[macro_use(lazy_static)]
extern crate lazy_static;

pub mod alphabet;
pub mod args;
pub mod cache;
pub mod commands;
pub mod common;
pub mod constants;
pub mod digest;
pub mod enzyme;
pub mod errors;
pub mod logging;
pub mod motif;
pub mod progress;
pub mod specificity;
pub mod window;

pub use crate::cache::DigestCache;
pub use crate::digest::{Cleavage, Digester, Peptide};
pub use crate::specificity::Specificity;
