/// Uniform single-value RGB image.
pub fn uniform_rgb(width: usize, height: usize, value: u8) -> Vec<u8> {
    vec![value; width * height * 3]
}

/// RGB image whose columns follow `profile(x)` on every row and channel.
pub fn column_profile_rgb(width: usize, height: usize, profile: impl Fn(usize) -> u8) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = Vec::with_capacity(width * height * 3);
    for _ in 0..height {
        for x in 0..width {
            let v = profile(x);
            img.extend_from_slice(&[v, v, v]);
        }
    }
    img
}

/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard_u8(width: usize, height: usize, cell: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let cx = (x / cell) as i32;
            let cy = (y / cell) as i32;
            let sum = cx + cy;
            let val = if sum & 1 == 0 { 32u8 } else { 220u8 };
            img[y * width + x] = val;
        }
    }
    img
}
