//! Per-type rendering routines.

use core::{
    ffi::CStr,
    fmt::{self, Formatter, Write},
};

mod private {
    pub trait Sealed {}
}

/// A value that can be logged.
///
/// Implemented for exactly the supported primitive types, each with its own rendering routine:
///
/// | Type | Rendering |
/// |---|---|
/// | `u8`, `u16`, `u32` | decimal, widened to `u32` |
/// | `u64` | decimal |
/// | `i8`, `i16`, `i32` | decimal, widened to `i32` |
/// | `i64` | decimal |
/// | `isize`, `usize` | decimal |
/// | `f32` | widened to `f64`, 6 fractional digits |
/// | `f64` | 12 fractional digits |
/// | `char` | the character |
/// | `bool` | `true` or `false` |
/// | `str`, `heapless::String<N>`, `CStr`, `String` (`alloc`) | verbatim |
///
/// References to a supported type render like the type itself.
///
/// The trait is sealed. Logging any other type fails to compile:
///
/// ```compile_fail
/// let sink = safelog::mock::Recorder::<1>::new();
///
/// safelog::info!(sink: sink, "T", "too wide", 1u128);
/// ```
///
/// ```compile_fail
/// struct Reading(u16);
///
/// let sink = safelog::mock::Recorder::<1>::new();
///
/// safelog::info!(sink: sink, "T", "reading", Reading(7));
/// ```
///
/// Non-finite floats render as `NaN`, `inf` and `-inf`. A [`CStr`] that is not valid UTF-8
/// renders with `U+FFFD` in place of the invalid sequences.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be logged",
    label = "unsupported value type",
    note = "supported types are u8, u16, u32, u64, i8, i16, i32, i64, isize, usize, f32, f64, char, bool and strings"
)]
pub trait LogValue: private::Sealed {
    /// Renders the value into `f`.
    fn fmt_value(&self, f: &mut Formatter<'_>) -> fmt::Result;
}

macro_rules! widened {
    ($native:ty => $($ty:ty),+) => {
        $(
            impl private::Sealed for $ty {}

            impl LogValue for $ty {
                #[inline]
                fn fmt_value(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", <$native>::from(*self))
                }
            }
        )+
    };
}

widened!(u32 => u8, u16, u32);
widened!(u64 => u64);
widened!(i32 => i8, i16, i32);
widened!(i64 => i64);
widened!(usize => usize);
widened!(isize => isize);

impl private::Sealed for f32 {}

impl LogValue for f32 {
    #[inline]
    fn fmt_value(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", f64::from(*self))
    }
}

impl private::Sealed for f64 {}

impl LogValue for f64 {
    #[inline]
    fn fmt_value(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:.12}", self)
    }
}

impl private::Sealed for char {}

impl LogValue for char {
    #[inline]
    fn fmt_value(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char(*self)
    }
}

impl private::Sealed for bool {}

impl LogValue for bool {
    #[inline]
    fn fmt_value(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(if *self { "true" } else { "false" })
    }
}

impl private::Sealed for str {}

impl LogValue for str {
    #[inline]
    fn fmt_value(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl<const N: usize> private::Sealed for heapless::String<N> {}

impl<const N: usize> LogValue for heapless::String<N> {
    #[inline]
    fn fmt_value(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "alloc")]
impl private::Sealed for alloc::string::String {}

#[cfg(feature = "alloc")]
impl LogValue for alloc::string::String {
    #[inline]
    fn fmt_value(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl private::Sealed for CStr {}

impl LogValue for CStr {
    fn fmt_value(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for chunk in self.to_bytes().utf8_chunks() {
            f.write_str(chunk.valid())?;

            if !chunk.invalid().is_empty() {
                f.write_char(char::REPLACEMENT_CHARACTER)?;
            }
        }

        Ok(())
    }
}

impl<T: LogValue + ?Sized> private::Sealed for &T {}

impl<T: LogValue + ?Sized> LogValue for &T {
    #[inline]
    fn fmt_value(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (**self).fmt_value(f)
    }
}

impl<T: LogValue + ?Sized> private::Sealed for &mut T {}

impl<T: LogValue + ?Sized> LogValue for &mut T {
    #[inline]
    fn fmt_value(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (**self).fmt_value(f)
    }
}
