pub mod nucleotide;
pub mod seq;

pub use nucleotide::{Nucleotide, ALPHABET_SIZE};
pub use seq::{parse_all, random_seq, Sequence};
