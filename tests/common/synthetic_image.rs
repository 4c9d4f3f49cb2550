/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard_u8(width: usize, height: usize, cell: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let sum = x / cell + y / cell;
            img[y * width + x] = if sum & 1 == 0 { 32 } else { 220 };
        }
    }
    img
}

/// Bright disk of `radius` pixels centred in a dark frame.
pub fn disk_u8(width: usize, height: usize, radius: f32) -> Vec<u8> {
    let cx = (width as f32 - 1.0) * 0.5;
    let cy = (height as f32 - 1.0) * 0.5;
    let mut img = vec![40u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            if dx * dx + dy * dy <= radius * radius {
                img[y * width + x] = 210;
            }
        }
    }
    img
}

/// Dark left half, bright right half, boundary at column `split_x`.
pub fn vertical_step_u8(width: usize, height: usize, split_x: usize) -> Vec<u8> {
    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in split_x..width {
            img[y * width + x] = 200;
        }
    }
    img
}
