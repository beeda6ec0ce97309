//! Numeric payloads that support `get_and_increment`.

/// A payload type that can act as an occurrence counter.
///
/// Implemented for the primitive integer and floating point types. Payload
/// types without an implementation cannot call
/// [`LanaiTrie::get_and_increment`](super::LanaiTrie::get_and_increment) at all.
pub trait Counter: Copy {
    /// Value stored for a key seen for the first time.
    const ONE: Self;

    /// Returns `self + 1`, or `None` if that is not representable.
    fn checked_increment(self) -> Option<Self>;
}

macro_rules! impl_int_counter {
    ($($t:ty),* $(,)?) => {
        $(
            impl Counter for $t {
                const ONE: Self = 1;

                #[inline]
                fn checked_increment(self) -> Option<Self> {
                    self.checked_add(1)
                }
            }
        )*
    };
}

macro_rules! impl_float_counter {
    ($($t:ty),* $(,)?) => {
        $(
            impl Counter for $t {
                const ONE: Self = 1.0;

                #[inline]
                fn checked_increment(self) -> Option<Self> {
                    let next = self + 1.0;
                    next.is_finite().then_some(next)
                }
            }
        )*
    };
}

impl_int_counter!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_float_counter!(f32, f64);
