/// Anything that can enter the library as a number.
///
/// quire stores and computes everything in `f64`. Public constructors and
/// scalar-taking methods accept `impl Number` so callers can pass integers
/// or `f32` directly; the conversion happens once, at the boundary.
pub trait Number: Copy {
    fn to_f64(self) -> f64;
}

macro_rules! impl_number {
    ($($t:ty),* $(,)?) => {
        $(
            impl Number for $t {
                #[inline] fn to_f64(self) -> f64 { self as f64 }
            }
        )*
    };
}

impl_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
