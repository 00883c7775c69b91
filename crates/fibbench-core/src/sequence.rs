//! Sequence printer.
//!
//! Emits F(0)..F(N) as a `", "`-separated stream. The state carried from
//! term to term is the pair of most recent values plus a position counter,
//! so generation runs in constant space regardless of N.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::{CheckedAdd, One, Zero};

use crate::constants::{
    MAX_SEQUENCE_LENGTH_U128, MAX_SEQUENCE_LENGTH_U32, MAX_SEQUENCE_LENGTH_U64, SEPARATOR,
};
use crate::error::BenchError;

/// Integer representation used for sequence terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Width {
    U32,
    #[default]
    U64,
    U128,
    /// Arbitrary precision (`BigUint`).
    Big,
}

impl Width {
    /// All widths, narrowest first.
    pub const ALL: [Width; 4] = [Width::U32, Width::U64, Width::U128, Width::Big];

    /// Largest sequence length whose terms all fit, or `None` if unbounded.
    #[must_use]
    pub fn max_sequence_length(self) -> Option<u64> {
        match self {
            Width::U32 => Some(MAX_SEQUENCE_LENGTH_U32),
            Width::U64 => Some(MAX_SEQUENCE_LENGTH_U64),
            Width::U128 => Some(MAX_SEQUENCE_LENGTH_U128),
            Width::Big => None,
        }
    }

    /// Reject lengths that would overflow this width.
    pub fn check_length(self, length: u64) -> Result<(), BenchError> {
        match self.max_sequence_length() {
            Some(max) if length > max => Err(BenchError::Config(format!(
                "sequence length {length} exceeds the {self} limit of {max}; use a wider width"
            ))),
            _ => Ok(()),
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Width::U32 => "u32",
            Width::U64 => "u64",
            Width::U128 => "u128",
            Width::Big => "big",
        }
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Width {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "u32" => Ok(Width::U32),
            "u64" => Ok(Width::U64),
            "u128" => Ok(Width::U128),
            "big" | "bigint" => Ok(Width::Big),
            other => Err(BenchError::Config(format!("unknown width: {other}"))),
        }
    }
}

/// A numeric type that can hold sequence terms.
pub trait Term: Clone + fmt::Display + Zero + One + CheckedAdd {
    /// Width tag reported in overflow errors.
    const WIDTH: Width;
}

impl Term for u32 {
    const WIDTH: Width = Width::U32;
}

impl Term for u64 {
    const WIDTH: Width = Width::U64;
}

impl Term for u128 {
    const WIDTH: Width = Width::U128;
}

impl Term for BigUint {
    const WIDTH: Width = Width::Big;
}

/// Generation state: the two most recent values and the position counter.
///
/// Iterating yields terms until `processed == target`. A sum that does not
/// fit `T` is held as `None` and only reported if that term is reached.
///
/// # Example
/// ```
/// use fibbench_core::sequence::SequenceState;
/// let terms: Vec<u64> = SequenceState::<u64>::from_start(6)
///     .map(Result::unwrap)
///     .collect();
/// assert_eq!(terms, [0, 1, 1, 2, 3, 5, 8]);
/// ```
#[derive(Debug, Clone)]
pub struct SequenceState<T> {
    first: Option<T>,
    second: Option<T>,
    processed: u64,
    target: u64,
    finished: bool,
}

impl<T: Term> SequenceState<T> {
    #[must_use]
    pub fn new(first: T, second: T, processed: u64, target: u64) -> Self {
        Self {
            first: Some(first),
            second: Some(second),
            processed,
            target,
            finished: false,
        }
    }

    /// State positioned at F(0) with `target` terms to follow.
    #[must_use]
    pub fn from_start(target: u64) -> Self {
        Self::new(T::zero(), T::one(), 0, target)
    }

    /// Whether the last term has been yielded.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn processed(&self) -> u64 {
        self.processed
    }
}

impl<T: Term> Iterator for SequenceState<T> {
    type Item = Result<T, BenchError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let Some(value) = self.first.take() else {
            self.finished = true;
            return Some(Err(BenchError::Overflow {
                index: self.processed,
                width: T::WIDTH,
            }));
        };

        if self.processed < self.target {
            let next = self.second.as_ref().and_then(|b| value.checked_add(b));
            self.first = self.second.take();
            self.second = next;
            self.processed += 1;
        } else {
            self.finished = true;
        }

        Some(Ok(value))
    }
}

/// Print `first`, then continue with `(second, first + second)` until
/// `processed` reaches `target`. A separator follows every term but the last.
pub fn generate<T, W>(
    out: &mut W,
    first: T,
    second: T,
    processed: u64,
    target: u64,
) -> Result<(), BenchError>
where
    T: Term,
    W: Write + ?Sized,
{
    let mut state = SequenceState::new(first, second, processed, target);
    while let Some(term) = state.next() {
        write!(out, "{}", term?)?;
        if !state.is_finished() {
            out.write_all(SEPARATOR.as_bytes())?;
        }
    }
    Ok(())
}

/// Print F(0)..F(`length`) using `T` for the terms.
pub fn write_sequence<T, W>(out: &mut W, length: u64) -> Result<(), BenchError>
where
    T: Term,
    W: Write + ?Sized,
{
    generate(out, T::zero(), T::one(), 0, length)
}

/// Print F(0)..F(`length`) using the given width.
pub fn write_sequence_as<W>(out: &mut W, width: Width, length: u64) -> Result<(), BenchError>
where
    W: Write + ?Sized,
{
    match width {
        Width::U32 => write_sequence::<u32, W>(out, length),
        Width::U64 => write_sequence::<u64, W>(out, length),
        Width::U128 => write_sequence::<u128, W>(out, length),
        Width::Big => write_sequence::<BigUint, W>(out, length),
    }
}

/// Render F(0)..F(`length`) into a string.
pub fn sequence_string(width: Width, length: u64) -> Result<String, BenchError> {
    let mut buf = Vec::new();
    write_sequence_as(&mut buf, width, length)?;
    String::from_utf8(buf).map_err(|e| BenchError::Config(e.to_string()))
}
