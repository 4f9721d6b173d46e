use rand::Rng;
use std::fmt::{Display, Formatter};

use crate::error::{GenomeError, GenomeResult};

/// The number of symbols in the alphabet.
pub const ALPHABET_SIZE: usize = 4;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Nucleotide {
    A = 0,
    T = 1,
    C = 2,
    G = 3,
}

impl Nucleotide {
    /// Reads a nucleotide from an ASCII letter, ignoring case.
    /// The position is only used for the error report.
    pub fn from_u8(letter: u8, position: usize) -> GenomeResult<Nucleotide> {
        match letter.to_ascii_uppercase() {
            b'A' => Ok(Nucleotide::A),
            b'T' => Ok(Nucleotide::T),
            b'C' => Ok(Nucleotide::C),
            b'G' => Ok(Nucleotide::G),
            _ => Err(GenomeError::InvalidSymbol {
                symbol: letter as char,
                position,
            }),
        }
    }

    pub fn from_char(c: char, position: usize) -> GenomeResult<Nucleotide> {
        if c.is_ascii() {
            Nucleotide::from_u8(c as u8, position)
        } else {
            Err(GenomeError::InvalidSymbol { symbol: c, position })
        }
    }

    pub fn string(&self) -> &'static str {
        match self {
            Nucleotide::A => "A",
            Nucleotide::T => "T",
            Nucleotide::C => "C",
            Nucleotide::G => "G",
        }
    }

    /// Panics on indices outside the alphabet.
    pub(crate) fn from_index(index: usize) -> Nucleotide {
        match index {
            0 => Nucleotide::A,
            1 => Nucleotide::T,
            2 => Nucleotide::C,
            3 => Nucleotide::G,
            _ => panic!("Illegal nucleotide index: {}", index),
        }
    }

    /// Returns an iterator over the alphabet, in the order A, T, C, G.
    pub fn iter() -> impl Iterator<Item = &'static Nucleotide> + Clone {
        [Nucleotide::A, Nucleotide::T, Nucleotide::C, Nucleotide::G].iter()
    }

    /// Draws a nucleotide uniformly from the full alphabet.
    pub fn random(rng: &mut impl Rng) -> Nucleotide {
        Nucleotide::from_index(rng.gen_range(0..ALPHABET_SIZE))
    }

    /// Draws a nucleotide uniformly from the three symbols other than `self`.
    pub fn random_other(&self, rng: &mut impl Rng) -> Nucleotide {
        let offset = rng.gen_range(1..ALPHABET_SIZE);
        Nucleotide::from_index((*self as usize + offset) % ALPHABET_SIZE)
    }
}

impl Display for Nucleotide {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.string())
    }
}
