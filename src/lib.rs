#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![doc = include_str!("../README.md")]

extern crate alloc;

mod calendar;
mod codec;
mod error;
mod ext;
mod pack;
mod parse;
mod timelog;

pub use crate::calendar::{days_in_month, is_leap_year, DateTime};
pub use crate::codec::*;
pub use crate::error::Error;
pub use crate::pack::*;
pub use crate::timelog::TimeLog;

#[cfg(feature = "serde")]
mod serde;


#[cfg(test)]
fn random_data<T>(n: usize) -> alloc::vec::Vec<T>
where
    rand::distributions::Standard: rand::distributions::Distribution<T>,
{
    use rand::prelude::*;
    let mut rng = rand_chacha::ChaCha20Rng::from_seed(Default::default());
    (0..n).map(|_| rng.gen()).collect()
}
