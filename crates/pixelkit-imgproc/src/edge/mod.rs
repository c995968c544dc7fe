mod sobel;

pub use sobel::sobel;
