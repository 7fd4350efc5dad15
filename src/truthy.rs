//! Truthiness for predicate results.
//!
//! Predicates in this crate may return any truthy value instead of a plain
//! `bool`. [`truthy`] tests an element by itself and is the predicate to
//! pass to `every` and `some` when there is nothing else to test.

/// A value that reads as true or false in a test.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

/// Test a value by its own truthiness.
#[inline]
pub fn truthy<T: Truthy + ?Sized>(value: &T) -> bool {
    return value.is_truthy();
}

/// Return the argument unchanged.
#[inline]
pub fn identity<T>(value: T) -> T {
    return value;
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        return *self;
    }
}

impl Truthy for () {
    #[inline]
    fn is_truthy(&self) -> bool {
        return false;
    }
}

macro_rules! truthy_int {
    ($($t:ty),*) => {
        $(impl Truthy for $t {
            #[inline]
            fn is_truthy(&self) -> bool {
                return *self != 0;
            }
        })*
    };
}

truthy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    #[inline]
    fn is_truthy(&self) -> bool {
        return *self != 0.0 && !self.is_nan();
    }
}

impl Truthy for f64 {
    #[inline]
    fn is_truthy(&self) -> bool {
        return *self != 0.0 && !self.is_nan();
    }
}

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        return !self.is_empty();
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        return !self.is_empty();
    }
}

impl<T: Truthy> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        return self.as_ref().is_some_and(Truthy::is_truthy);
    }
}

// Containers are truthy even when empty.
impl<T> Truthy for [T] {
    #[inline]
    fn is_truthy(&self) -> bool {
        return true;
    }
}

impl<T> Truthy for Vec<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        return true;
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        return (**self).is_truthy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars() {
        assert!(true.is_truthy());
        assert!(!false.is_truthy());
        assert!(1i32.is_truthy());
        assert!(!0u8.is_truthy());
        assert!(!f64::NAN.is_truthy());
        assert!(0.5f32.is_truthy());
        assert!(!().is_truthy());
    }

    #[test]
    fn text_and_options() {
        assert!("x".is_truthy());
        assert!(!"".is_truthy());
        assert!(!String::new().is_truthy());
        assert!(Some(3i32).is_truthy());
        assert!(!Some(0i64).is_truthy());
        assert!(!None::<i32>.is_truthy());
    }

    #[test]
    fn identity_returns_its_argument() {
        assert_eq!(identity(7), 7);
        assert_eq!(identity("x"), "x");
        let words: Vec<&str> = ["a", "b"].iter().copied().map(identity).collect();
        assert_eq!(words, vec!["a", "b"]);
    }

    #[test]
    fn containers_are_always_truthy() {
        assert!(Vec::<i32>::new().is_truthy());
        assert!((&[0][..]).is_truthy());
    }
}
