use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::ptr::NonNull;
use std::rc::Rc;
use std::sync::Arc;

/// Values that can be asked whether they are logically nil.
///
/// Nullable representations (`Option`, raw pointers, the unit value) answer
/// by inspecting themselves. Concrete values such as integers, strings and
/// owned collections are never nil: an empty `Vec` is still a value.
pub trait Nullable {
    fn is_nil(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    fn is_nil(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Nullable for *const T {
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Nullable for *mut T {
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

/// The unit value stands in for an absent, untyped slot.
impl Nullable for () {
    fn is_nil(&self) -> bool {
        true
    }
}

impl<T: ?Sized + Nullable> Nullable for &T {
    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }
}

impl<T: ?Sized + Nullable> Nullable for &mut T {
    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }
}

macro_rules! never_nil {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Nullable for $ty {
                fn is_nil(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_nil!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String,
);

macro_rules! never_nil_generic {
    ($($ty:ident),* $(,)?) => {
        $(
            impl<T: ?Sized> Nullable for $ty<T> {
                fn is_nil(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_nil_generic!(Box, Rc, Arc, NonNull);

impl<T> Nullable for Vec<T> {
    fn is_nil(&self) -> bool {
        false
    }
}

impl<T> Nullable for [T] {
    fn is_nil(&self) -> bool {
        false
    }
}

impl<T, const N: usize> Nullable for [T; N] {
    fn is_nil(&self) -> bool {
        false
    }
}

impl<K, V, S> Nullable for HashMap<K, V, S> {
    fn is_nil(&self) -> bool {
        false
    }
}

impl<K, V> Nullable for BTreeMap<K, V> {
    fn is_nil(&self) -> bool {
        false
    }
}

impl<T, S> Nullable for HashSet<T, S> {
    fn is_nil(&self) -> bool {
        false
    }
}

impl<T> Nullable for BTreeSet<T> {
    fn is_nil(&self) -> bool {
        false
    }
}

/// Result of running a callable under protected execution.
///
/// Normal completion is its own variant, so no panic message can be
/// mistaken for success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanicOutcome {
    /// The callable returned normally
    Completed,
    /// The callable panicked; holds the stringified payload
    Panicked(String),
}

impl PanicOutcome {
    pub fn is_panicked(&self) -> bool {
        matches!(self, PanicOutcome::Panicked(_))
    }

    /// The captured panic message, if the callable panicked
    pub fn message(&self) -> Option<&str> {
        match self {
            PanicOutcome::Completed => None,
            PanicOutcome::Panicked(message) => Some(message),
        }
    }
}
