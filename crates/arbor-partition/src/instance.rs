// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Problem instance model and text-file loader.
//!
//! The instance file format is plain text, one value per line:
//! - the first meaningful line is the known optimal max sum, or -1 if the
//!   optimum is unknown,
//! - the second is the number of parts `k` (at least 2),
//! - every further line is one item size, positive and in non-increasing
//!   order.
//!
//! Blank lines and lines starting with `#` are skipped anywhere in the file.

use num_traits::{PrimInt, Signed};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

/// An invariant violation in a constructed instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstanceError {
    /// An item size is zero or negative.
    NonPositiveSize { index: usize },
    /// An item size is larger than its predecessor.
    AscendingSizes { index: usize },
    /// Fewer than two parts.
    TooFewParts { parts: u32 },
}

impl std::fmt::Display for InstanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InstanceError::NonPositiveSize { index } => {
                write!(f, "item size at index {} must be positive", index)
            }
            InstanceError::AscendingSizes { index } => {
                write!(
                    f,
                    "item sizes must be non-increasing, violated at index {}",
                    index
                )
            }
            InstanceError::TooFewParts { parts } => {
                write!(f, "a partition needs at least 2 parts, got {}", parts)
            }
        }
    }
}

impl std::error::Error for InstanceError {}

/// The error type of the instance loader.
#[derive(Debug)]
pub enum InstanceLoadError {
    /// An I/O error occurred while reading the input.
    Io(std::io::Error),
    /// The input ended before the solution and part-count lines were read.
    UnexpectedEof,
    /// A token could not be parsed into the expected numeric type.
    Parse { token: String },
    /// The parsed values violate an instance invariant.
    Invalid(InstanceError),
}

impl std::fmt::Display for InstanceLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InstanceLoadError::Io(e) => write!(f, "I/O error: {e}"),
            InstanceLoadError::UnexpectedEof => {
                write!(f, "unexpected end of input while reading the instance")
            }
            InstanceLoadError::Parse { token } => {
                write!(f, "could not parse token '{}' as a number", token)
            }
            InstanceLoadError::Invalid(e) => write!(f, "invalid instance: {e}"),
        }
    }
}

impl std::error::Error for InstanceLoadError {}

impl From<std::io::Error> for InstanceLoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<InstanceError> for InstanceLoadError {
    fn from(e: InstanceError) -> Self {
        Self::Invalid(e)
    }
}

/// A validated multiway number partitioning instance.
///
/// Invariants: all sizes are positive and sorted in non-increasing order,
/// and there are at least two parts. An empty item list is legal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionInstance<T> {
    sizes: Vec<T>,
    parts: u32,
    known_best: Option<T>,
}

impl<T> PartitionInstance<T>
where
    T: PrimInt + Signed,
{
    /// Constructs a validated instance.
    ///
    /// `known_best` is the optimal max sum when the caller knows it; it is
    /// carried through for verdict reporting only and does not influence the
    /// search.
    pub fn new(sizes: Vec<T>, parts: u32, known_best: Option<T>) -> Result<Self, InstanceError> {
        if parts < 2 {
            return Err(InstanceError::TooFewParts { parts });
        }
        for (index, &size) in sizes.iter().enumerate() {
            if size <= T::zero() {
                return Err(InstanceError::NonPositiveSize { index });
            }
            if index > 0 && sizes[index - 1] < size {
                return Err(InstanceError::AscendingSizes { index });
            }
        }
        Ok(Self {
            sizes,
            parts,
            known_best,
        })
    }

    /// Number of items.
    #[inline]
    pub fn num_items(&self) -> usize {
        self.sizes.len()
    }

    /// Number of parts `k`.
    #[inline]
    pub fn part_count(&self) -> u32 {
        self.parts
    }

    /// Size of the item at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn size(&self, index: usize) -> T {
        self.sizes[index]
    }

    /// All item sizes, non-increasing.
    #[inline]
    pub fn sizes(&self) -> &[T] {
        &self.sizes
    }

    /// The known optimal max sum, if the instance file carried one.
    #[inline]
    pub fn known_best(&self) -> Option<T> {
        self.known_best
    }

    /// Sum of all item sizes.
    pub fn total(&self) -> T {
        self.sizes
            .iter()
            .fold(T::zero(), |sum, &size| sum + size)
    }
}

impl<T> PartitionInstance<T>
where
    T: PrimInt + Signed + FromStr,
{
    /// Loads an instance from a file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, InstanceLoadError> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    /// Loads an instance from a string.
    pub fn from_text(text: &str) -> Result<Self, InstanceLoadError> {
        Self::from_reader(text.as_bytes())
    }

    /// Loads an instance from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, InstanceLoadError> {
        let mut meaningful = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            // Only the first token of a line carries data.
            let token = trimmed
                .split_whitespace()
                .next()
                .expect("a non-empty trimmed line has a first token");
            meaningful.push(token.to_owned());
        }

        let mut tokens = meaningful.into_iter();
        let solution_token = tokens.next().ok_or(InstanceLoadError::UnexpectedEof)?;
        let solution = parse_token::<T>(&solution_token)?;
        let known_best = if solution < T::zero() - T::one() {
            return Err(InstanceLoadError::Parse {
                token: solution_token,
            });
        } else if solution == T::zero() - T::one() {
            None
        } else {
            Some(solution)
        };

        let parts_token = tokens.next().ok_or(InstanceLoadError::UnexpectedEof)?;
        let parts: u32 = parts_token
            .parse()
            .map_err(|_| InstanceLoadError::Parse { token: parts_token })?;

        let mut sizes = Vec::new();
        for token in tokens {
            sizes.push(parse_token::<T>(&token)?);
        }

        Ok(Self::new(sizes, parts, known_best)?)
    }
}

fn parse_token<T: FromStr>(token: &str) -> Result<T, InstanceLoadError> {
    token.parse().map_err(|_| InstanceLoadError::Parse {
        token: token.to_owned(),
    })
}
