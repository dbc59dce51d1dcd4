//! Which templates each stock image is combined with, and what the result is called.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use serde::Serialize;

use super::composite::OutputEncoding;

/// Pairing policy between stock images and templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Pairing {
    /// One output per (stock, template) combination
    AllPairs,
    /// One output per stock, with a uniformly random template
    RandomOne,
}

impl Pairing {
    /// Number of outputs a run over `stocks × templates` produces.
    pub fn expected_outputs(self, stocks: usize, templates: usize) -> usize {
        match self {
            Self::AllPairs => stocks * templates,
            Self::RandomOne if templates > 0 => stocks,
            Self::RandomOne => 0,
        }
    }
}

/// Selects templates for a stock image.
///
/// The random source is injectable so picks can be made reproducible.
pub struct TemplatePicker {
    rng: Box<dyn RngCore + Send>,
}

impl TemplatePicker {
    /// Wrap any random source.
    pub fn new(rng: Box<dyn RngCore + Send>) -> Self {
        Self { rng }
    }

    /// Seeded picker when `seed` is given, OS entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(Box::new(rng))
    }

    /// Templates to combine with the next stock image.
    pub fn select<'a, T>(&mut self, pairing: Pairing, templates: &'a [T]) -> Vec<&'a T> {
        match pairing {
            Pairing::AllPairs => templates.iter().collect(),
            Pairing::RandomOne => templates.choose(&mut self.rng).into_iter().collect(),
        }
    }
}

/// `{prefix}{stock}_{template}.{ext}`
pub fn output_file_name(
    prefix: &str,
    stock_stem: &str,
    template_stem: &str,
    encoding: OutputEncoding,
) -> String {
    format!(
        "{}{}_{}.{}",
        prefix,
        stock_stem,
        template_stem,
        encoding.extension()
    )
}
