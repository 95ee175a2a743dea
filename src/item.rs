use std::fmt::Debug;
use std::hash::Hash;
use std::rc::Rc;
use std::sync::Arc;

/// Token the prefix tree reserves for its synthetic root.
///
/// String-like items equal to this value are rejected at build time.
pub const ROOT_MARKER: &str = "root";

/// An element of a transaction.
///
/// `Ord` gives itemsets a canonical sorted form; frequency ties in the
/// prefix tree are broken by first appearance, not by `Ord`.
pub trait Item: Clone + Eq + Hash + Ord + Debug {
    fn is_root_marker(&self) -> bool {
        false
    }
}

impl Item for String {
    fn is_root_marker(&self) -> bool {
        self == ROOT_MARKER
    }
}

impl Item for &str {
    fn is_root_marker(&self) -> bool {
        *self == ROOT_MARKER
    }
}

impl Item for Box<str> {
    fn is_root_marker(&self) -> bool {
        &**self == ROOT_MARKER
    }
}

impl Item for Arc<str> {
    fn is_root_marker(&self) -> bool {
        &**self == ROOT_MARKER
    }
}

impl Item for Rc<str> {
    fn is_root_marker(&self) -> bool {
        &**self == ROOT_MARKER
    }
}

macro_rules! impl_unreserved_item {
    ($($ty:ty),* $(,)?) => {
        $(impl Item for $ty {})*
    };
}

impl_unreserved_item!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, char);
