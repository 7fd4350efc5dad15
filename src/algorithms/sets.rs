//! Order-preserving set operations over sequences.
//!
//! Both operations keep the elements of the first sequence, duplicates
//! included, in their original order. Membership is by value.

use crate::ops::contains;
use crate::ops::every;
use crate::ops::filter;
use crate::ops::some;

/// Elements of the first sequence present in every other sequence.
pub fn intersection<T: PartialEq + Clone>(sequences: &[&[T]]) -> Vec<T> {
    let Some((first, rest)) = sequences.split_first() else {
        return Vec::new();
    };
    return filter(*first, |item| every(rest, |other| contains(*other, item)));
}

/// Elements of the first sequence present in none of the other sequences.
pub fn difference<T: PartialEq + Clone>(sequences: &[&[T]]) -> Vec<T> {
    let Some((first, rest)) = sequences.split_first() else {
        return Vec::new();
    };
    return filter(*first, |item| !some(rest, |other| contains(*other, item)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersection_of_two() {
        assert_eq!(intersection(&[&["a", "b"][..], &["b", "c"][..]]), vec!["b"]);
    }

    #[test]
    fn intersection_keeps_duplicates_of_first() {
        let result = intersection(&[&[1, 2, 2, 3][..], &[2, 3][..], &[3, 2, 9][..]]);
        assert_eq!(result, vec![2, 2, 3]);
    }

    #[test]
    fn intersection_of_one_is_itself() {
        assert_eq!(intersection(&[&[3, 1, 3][..]]), vec![3, 1, 3]);
        assert!(intersection::<i32>(&[]).is_empty());
    }

    #[test]
    fn difference_of_two() {
        assert_eq!(difference(&[&["a", "b"][..], &["b", "c"][..]]), vec!["a"]);
    }

    #[test]
    fn difference_against_many() {
        let result = difference(&[&[1, 2, 3, 4, 1][..], &[2, 30][..], &[4][..]]);
        assert_eq!(result, vec![1, 3, 1]);
        assert!(difference::<i32>(&[]).is_empty());
    }
}
