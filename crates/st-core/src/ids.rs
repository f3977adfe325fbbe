//! Strongly typed identifier wrappers.
//!
//! Both IDs wrap the SQLite `INTEGER PRIMARY KEY` (an `i64` rowid), so they
//! bind directly as query parameters via `.0`.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The raw integer value.
            #[inline(always)]
            pub fn get(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(n: $inner) -> $name {
                $name(n)
            }
        }
    };
}

typed_id! {
    /// Row id of a user in the persistence store.
    pub struct UserId(i64);
}

typed_id! {
    /// Row id of one saved journey in the travel history.
    pub struct HistoryId(i64);
}

impl UserId {
    /// The user every store is seeded with (`default_user`).
    pub const DEFAULT: UserId = UserId(1);

    /// Username of [`UserId::DEFAULT`].
    pub const DEFAULT_NAME: &'static str = "default_user";
}

impl Default for UserId {
    #[inline(always)]
    fn default() -> Self {
        Self::DEFAULT
    }
}
