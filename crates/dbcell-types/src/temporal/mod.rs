//! Temporal value types
//!
//! Immutable, totally ordered date, time and timestamp values with a fixed
//! textual grammar:
//!
//! - [`CalendarDate`]: `YYYY-MM-DD`
//! - [`TimeOfDay`]: `HH:MM:SS[.nnnnnnnnn]` (`HH:MM` is accepted on input)
//! - [`DateTimeStamp`]: `YYYY-MM-DDTHH:MM:SS[.nnnnnnnnn]` (a space is accepted
//!   in place of `T`, and a bare date means midnight)

mod date;
mod datetime;
mod time;

pub use date::CalendarDate;
pub use datetime::DateTimeStamp;
pub use time::TimeOfDay;

/// Parse exactly `width` ASCII digits
fn fixed_digits(s: &str, width: usize) -> Option<u32> {
    if s.len() != width || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Implements serde support through the textual grammar
#[cfg(feature = "serde")]
macro_rules! serde_via_text {
    ($($ty:ty),*) => {
        $(
            impl serde::Serialize for $ty {
                fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.collect_str(self)
                }
            }

            impl<'de> serde::Deserialize<'de> for $ty {
                fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    let text = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
                    <$ty>::parse(&text).map_err(serde::de::Error::custom)
                }
            }
        )*
    };
}

#[cfg(feature = "serde")]
serde_via_text!(CalendarDate, TimeOfDay, DateTimeStamp);
