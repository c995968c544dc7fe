mod gray;

pub(crate) use gray::luma;
pub use gray::gray_from_rgba;
