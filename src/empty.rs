//! Emptiness predicate
//!
//! `empty(&value)` answers "is this value absent, zero or empty" for the
//! kinds of values that show up in loosely typed inputs: optional config
//! values, decoded JSON, request parameters.
//!
//! Dispatch happens through the [`Empty`] trait. Rules, first match wins:
//!
//! 1. absent values (`None`, JSON `null`, `()`) are empty
//! 2. strings and fixed-size arrays are empty when their length is 0
//! 3. maps and dynamic sequences are empty when their length is 0
//! 4. `bool` is empty when `false`
//! 5. numbers are empty when equal to zero
//! 6. optional and owning pointers are empty only when unset; a `Some` or a
//!    `Box` is never empty, whatever it points to
//! 7. anything else opts in with [`impl_empty_via_default!`] and is empty
//!    when it equals its type's `Default`

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

/// A value with a defined notion of "empty".
pub trait Empty {
    fn is_empty_value(&self) -> bool;
}

/// Whether `val` is absent, zero or empty.
pub fn empty<T: Empty + ?Sized>(val: &T) -> bool {
    val.is_empty_value()
}

/// Fallback rule: `val` deep-equals the default value of its type.
pub fn is_zero_value<T: Default + PartialEq>(val: &T) -> bool {
    *val == T::default()
}

/// Implement [`Empty`] for types whose empty state is their `Default`.
///
/// ```
/// use everybot_helpers::empty::empty;
///
/// #[derive(Default, PartialEq)]
/// struct Limits {
///     max: u32,
/// }
/// everybot_helpers::impl_empty_via_default!(Limits);
///
/// assert!(empty(&Limits { max: 0 }));
/// assert!(!empty(&Limits { max: 3 }));
/// ```
#[macro_export]
macro_rules! impl_empty_via_default {
    ($($t:ty),+ $(,)?) => {
        $(
            impl $crate::empty::Empty for $t {
                fn is_empty_value(&self) -> bool {
                    $crate::empty::is_zero_value(self)
                }
            }
        )+
    };
}

// Rule 1 and 6: optional values.
impl<T> Empty for Option<T> {
    fn is_empty_value(&self) -> bool {
        self.is_none()
    }
}

// Owning pointers can't be unset.
impl<T: ?Sized> Empty for Box<T> {
    fn is_empty_value(&self) -> bool {
        false
    }
}

impl<T: ?Sized> Empty for Rc<T> {
    fn is_empty_value(&self) -> bool {
        false
    }
}

impl<T: ?Sized> Empty for Arc<T> {
    fn is_empty_value(&self) -> bool {
        false
    }
}

// A borrow is transparent: check what it borrows.
impl<T: Empty + ?Sized> Empty for &T {
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

// Rule 2: strings and fixed arrays.
impl Empty for str {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl Empty for String {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl Empty for Cow<'_, str> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl Empty for OsStr {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl Empty for OsString {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl Empty for Path {
    fn is_empty_value(&self) -> bool {
        self.as_os_str().is_empty()
    }
}

impl Empty for PathBuf {
    fn is_empty_value(&self) -> bool {
        self.as_os_str().is_empty()
    }
}

impl<T, const N: usize> Empty for [T; N] {
    fn is_empty_value(&self) -> bool {
        N == 0
    }
}

// Rule 3: dynamic sequences and maps.
impl<T> Empty for [T] {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Empty for Vec<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Empty for VecDeque<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> Empty for HashMap<K, V, S> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Empty for BTreeMap<K, V> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T, S> Empty for HashSet<T, S> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Empty for BTreeSet<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

// Rule 4.
impl Empty for bool {
    fn is_empty_value(&self) -> bool {
        !*self
    }
}

// Rule 5.
macro_rules! impl_empty_for_numbers {
    ($zero:expr => $($t:ty),+) => {
        $(
            impl Empty for $t {
                fn is_empty_value(&self) -> bool {
                    *self == $zero
                }
            }
        )+
    };
}

impl_empty_for_numbers!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_empty_for_numbers!(0.0 => f32, f64);

impl Empty for char {
    fn is_empty_value(&self) -> bool {
        *self == '\0'
    }
}

impl Empty for serde_json::Value {
    fn is_empty_value(&self) -> bool {
        use serde_json::Value;

        match self {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
            Value::Bool(b) => !*b,
            Value::Number(n) => n.as_f64() == Some(0.0),
        }
    }
}

// Rule 7 for the std types we know about.
impl_empty_via_default!((), Duration);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_values_are_empty() {
        assert!(empty(&None::<i32>));
        assert!(empty(&None::<String>));
        assert!(empty(&()));
        assert!(empty(&serde_json::Value::Null));
    }

    #[test]
    fn test_strings() {
        assert!(empty(""));
        assert!(!empty("x"));
        assert!(empty(&String::new()));
        assert!(!empty(&String::from(" ")));
        assert!(empty(&Cow::Borrowed("")));
        assert!(empty(Path::new("")));
        assert!(!empty(&PathBuf::from("/tmp")));
    }

    #[test]
    fn test_fixed_arrays_use_length_not_contents() {
        assert!(empty(&[0u8; 0]));
        assert!(!empty(&[0u8; 4]));
    }

    #[test]
    fn test_sequences_and_maps() {
        assert!(empty(&Vec::<i32>::new()));
        assert!(!empty(&vec![1]));
        assert!(empty(&[1, 2, 3][..0]));
        assert!(empty(&HashMap::<String, i32>::new()));
        assert!(!empty(&BTreeMap::from([("k", 1)])));
        assert!(empty(&HashSet::<u8>::new()));
        assert!(empty(&VecDeque::<u8>::new()));
    }

    #[test]
    fn test_unset_container_is_empty() {
        let unset: Option<Vec<i32>> = None;
        assert!(empty(&unset));
    }

    #[test]
    fn test_booleans() {
        assert!(empty(&false));
        assert!(!empty(&true));
    }

    #[test]
    fn test_numbers() {
        assert!(empty(&0));
        assert!(!empty(&1));
        assert!(empty(&0u64));
        assert!(!empty(&-7i8));
        assert!(empty(&0.0f64));
        assert!(empty(&-0.0f32));
        assert!(!empty(&0.5f64));
        assert!(!empty(&f64::NAN));
        assert!(empty(&'\0'));
        assert!(!empty(&'a'));
    }

    #[test]
    fn test_set_pointer_is_never_empty() {
        assert!(!empty(&Some(0)));
        assert!(!empty(&Some(String::new())));
        assert!(!empty(&Box::new(0)));
        assert!(!empty(&Arc::new(Vec::<u8>::new())));
        assert!(!empty(&Rc::new(false)));
    }

    #[test]
    fn test_borrow_is_transparent() {
        let s: &str = "";
        assert!(empty(&s));
        let v = vec![1];
        let r = &v;
        assert!(!empty(&r));
    }

    #[test]
    fn test_json_values() {
        assert!(empty(&json!("")));
        assert!(!empty(&json!("a")));
        assert!(empty(&json!(0)));
        assert!(empty(&json!(0.0)));
        assert!(!empty(&json!(-1)));
        assert!(empty(&json!([])));
        assert!(!empty(&json!([null])));
        assert!(empty(&json!({})));
        assert!(!empty(&json!({"a": 1})));
        assert!(empty(&json!(false)));
    }

    #[derive(Default, PartialEq)]
    struct Settings {
        retries: u32,
        name: String,
    }

    crate::impl_empty_via_default!(Settings);

    #[test]
    fn test_default_fallback() {
        assert!(empty(&Settings::default()));
        assert!(!empty(&Settings {
            retries: 0,
            name: "bot".to_string(),
        }));
        assert!(empty(&Duration::ZERO));
        assert!(!empty(&Duration::from_millis(1)));
        assert!(is_zero_value(&(0, String::new())));
    }
}
