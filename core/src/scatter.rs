pub const HERO_SHAPE_SEED: u32 = 0x5EED_F011;
pub const HERO_SHAPE_COUNT: usize = 20;

const SALT_SIZE: u32 = 0x1000;
const SALT_TOP: u32 = 0x2000;
const SALT_LEFT: u32 = 0x3000;
const SALT_DRIFT_X: u32 = 0x4000;
const SALT_DRIFT_Y: u32 = 0x5000;
const SALT_SCALE: u32 = 0x6000;
const SALT_PERIOD: u32 = 0x7000;

pub fn splitmix32(mut value: u32) -> u32 {
    value = value.wrapping_add(0x9E37_79B9);
    let mut z = value;
    z = (z ^ (z >> 16)).wrapping_mul(0x85EB_CA6B);
    z = (z ^ (z >> 13)).wrapping_mul(0xC2B2_AE35);
    z ^ (z >> 16)
}

pub fn rand_unit(seed: u32, salt: u32) -> f32 {
    let mixed = splitmix32(seed ^ salt);
    let top = mixed >> 8;
    top as f32 / ((1u32 << 24) as f32)
}

pub fn rand_range(seed: u32, salt: u32, min: f32, max: f32) -> f32 {
    min + (max - min) * rand_unit(seed, salt)
}

/// Decorative bubble drifting behind the hero text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingShape {
    pub size_px: f32,
    pub top_pct: f32,
    pub left_pct: f32,
    pub drift_x_px: f32,
    pub drift_y_px: f32,
    pub peak_scale: f32,
    pub period_s: f32,
}

pub fn floating_shapes(seed: u32, count: usize) -> Vec<FloatingShape> {
    (0..count as u32)
        .map(|index| {
            let salt = index.wrapping_mul(0x27D4_EB2D);
            FloatingShape {
                size_px: rand_range(seed, salt ^ SALT_SIZE, 10.0, 30.0),
                top_pct: rand_range(seed, salt ^ SALT_TOP, 0.0, 100.0),
                left_pct: rand_range(seed, salt ^ SALT_LEFT, 0.0, 100.0),
                drift_x_px: rand_range(seed, salt ^ SALT_DRIFT_X, -50.0, 50.0),
                drift_y_px: rand_range(seed, salt ^ SALT_DRIFT_Y, -50.0, 50.0),
                peak_scale: rand_range(seed, salt ^ SALT_SCALE, 0.5, 1.5),
                period_s: rand_range(seed, salt ^ SALT_PERIOD, 10.0, 20.0),
            }
        })
        .collect()
}
