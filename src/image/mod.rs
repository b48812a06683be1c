pub mod f32;
pub mod i32;
pub mod io;
pub mod traits;
pub mod u8;

pub use self::f32::ImageF32;
pub use self::i32::ImageI32;
pub use self::traits::{ImageView, ImageViewMut, Rows, RowsMut};
pub use self::u8::ImageU8;
