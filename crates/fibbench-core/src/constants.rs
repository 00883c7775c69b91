//! Default benchmark parameters and width limits.

/// Default sequence length N (terms beyond the initial 0).
pub const DEFAULT_SEQUENCE_LENGTH: u64 = 45;

/// Default number of sequence generations per timed run.
pub const DEFAULT_EXECUTIONS: u64 = 10_000;

/// Separator written between consecutive terms.
pub const SEPARATOR: &str = ", ";

/// Response that ends an interactive session (compared case-insensitively).
pub const EXIT_SENTINEL: &str = "N";

/// Largest N whose terms all fit in a `u32`.
/// F(47) = 2,971,215,073; F(48) overflows.
pub const MAX_SEQUENCE_LENGTH_U32: u64 = 47;

/// Largest N whose terms all fit in a `u64`.
/// F(93) = 12,200,160,415,121,876,738; F(94) overflows.
pub const MAX_SEQUENCE_LENGTH_U64: u64 = 93;

/// Largest N whose terms all fit in a `u128`.
/// F(186) = 332,825,110,087,067,562,321,196,029,789,634,457,848.
pub const MAX_SEQUENCE_LENGTH_U128: u64 = 186;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error (I/O failure).
    pub const ERROR_GENERIC: i32 = 1;
    /// A term did not fit the selected integer width.
    pub const ERROR_OVERFLOW: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn last_fitting_index<T>(zero: T, one: T, add: impl Fn(T, T) -> Option<T>) -> u64
    where
        T: Copy,
    {
        let (mut a, mut b) = (zero, one);
        let mut index = 0;
        while let Some(next) = add(a, b) {
            a = b;
            b = next;
            index += 1;
        }
        // `b` holds F(index + 1), the last value that fit.
        index + 1
    }

    #[test]
    fn u32_limit_matches_checked_arithmetic() {
        assert_eq!(
            last_fitting_index(0u32, 1u32, u32::checked_add),
            MAX_SEQUENCE_LENGTH_U32
        );
    }

    #[test]
    fn u64_limit_matches_checked_arithmetic() {
        assert_eq!(
            last_fitting_index(0u64, 1u64, u64::checked_add),
            MAX_SEQUENCE_LENGTH_U64
        );
    }

    #[test]
    fn u128_limit_matches_checked_arithmetic() {
        assert_eq!(
            last_fitting_index(0u128, 1u128, u128::checked_add),
            MAX_SEQUENCE_LENGTH_U128
        );
    }

    #[test]
    fn defaults() {
        assert_eq!(DEFAULT_SEQUENCE_LENGTH, 45);
        assert_eq!(DEFAULT_EXECUTIONS, 10_000);
        assert!(DEFAULT_SEQUENCE_LENGTH <= MAX_SEQUENCE_LENGTH_U32);
    }
}
