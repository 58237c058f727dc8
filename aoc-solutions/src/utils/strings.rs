//! String helpers

use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

static INTS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-?\d+").unwrap());

/// All integers in a string, in order of appearance
///
/// ```
/// use aoc_solutions::utils::strings::ints;
///
/// let values: Vec<i64> = ints("Card 3: 1 -21 | 53").unwrap();
/// assert_eq!(values, vec![3, 1, -21, 53]);
/// ```
pub fn ints<T: FromStr>(s: &str) -> Result<Vec<T>, T::Err> {
    INTS.find_iter(s).map(|m| m.as_str().parse()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_no_ints() {
        assert_eq!(ints::<i32>("no numbers here"), Ok(vec![]));
    }

    #[test]
    fn test_dash_between_numbers() {
        // `3-4` reads as 3 and -4
        assert_eq!(ints::<i32>("x=3-4"), Ok(vec![3, -4]));
    }

    #[test]
    fn test_overflow_is_an_error() {
        assert!(ints::<u8>("300").is_err());
    }

    proptest! {
        #[test]
        fn prop_ints_recovers_values(values in prop::collection::vec(any::<i64>(), 0..10), sep in "[a-z :,|]{1,4}") {
            let text = values.iter().map(i64::to_string).collect::<Vec<_>>().join(&sep);
            prop_assert_eq!(ints::<i64>(&text).unwrap(), values);
        }
    }
}
