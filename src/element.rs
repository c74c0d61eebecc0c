use std::fmt::Debug;

/// Fixed-size encoding of a value into an element slot.
///
/// Integers and floats use little-endian byte order, `bool` is one byte and
/// `char` is its scalar value as a little-endian `u32`.
pub trait Element: Sized + Debug + Clone + 'static {
    /// The fixed size in bytes of this type when stored.
    const SIZE: usize;

    /// Serialize this value. The returned buffer is exactly `SIZE` bytes.
    fn to_bytes(&self) -> Vec<u8>;

    /// Deserialize a value from a slot.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is not exactly `SIZE` bytes long.
    fn from_bytes(bytes: &[u8]) -> Self;
}

macro_rules! impl_element_for_numeric {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                const SIZE: usize = std::mem::size_of::<$t>();

                #[inline]
                fn to_bytes(&self) -> Vec<u8> {
                    self.to_le_bytes().to_vec()
                }

                #[inline]
                fn from_bytes(bytes: &[u8]) -> Self {
                    let mut raw = [0u8; std::mem::size_of::<$t>()];
                    raw.copy_from_slice(bytes);
                    <$t>::from_le_bytes(raw)
                }
            }
        )*
    };
}

impl_element_for_numeric!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

impl Element for bool {
    const SIZE: usize = 1;

    fn to_bytes(&self) -> Vec<u8> {
        vec![u8::from(*self)]
    }

    fn from_bytes(bytes: &[u8]) -> Self {
        u8::from_bytes(bytes) != 0
    }
}

impl Element for char {
    const SIZE: usize = 4;

    fn to_bytes(&self) -> Vec<u8> {
        u32::from(*self).to_le_bytes().to_vec()
    }

    /// Invalid scalar values decode as `char::REPLACEMENT_CHARACTER`.
    fn from_bytes(bytes: &[u8]) -> Self {
        char::from_u32(u32::from_bytes(bytes)).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}
