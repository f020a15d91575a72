//! Truthiness of mask entries.

/// A value that can gate a write through a mask.
///
/// A mask position is structurally true when an entry is stored there and the
/// entry is truthy.
pub trait MaskValue {
    fn is_truthy(&self) -> bool;
}

impl MaskValue for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! numeric_mask_value {
    ($($t:ty),*) => {
        $(
            impl MaskValue for $t {
                fn is_truthy(&self) -> bool {
                    !num_traits::Zero::is_zero(self)
                }
            }
        )*
    };
}

numeric_mask_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
