use super::constants::SPRITE_SIZE;

/// One color stop of the radial sprite gradient: `(offset, [r, g, b, a])` with
/// channels in 0..1 and offset as a fraction of the sprite radius.
pub type GradientStop = (f32, [f32; 4]);

/// White core, pale blue halo at 30% radius, transparent rim.
pub const STAR_GRADIENT: [GradientStop; 4] = [
    (0.0, [1.0, 1.0, 1.0, 1.0]),
    (0.1, [1.0, 1.0, 1.0, 0.9]),
    (0.3, [180.0 / 255.0, 220.0 / 255.0, 1.0, 0.5]),
    (1.0, [0.0, 0.0, 0.0, 0.0]),
];

/// Sample a stop list at `t`. Stops must be sorted by offset.
pub fn sample_gradient(stops: &[GradientStop], t: f32) -> [f32; 4] {
    let Some(first) = stops.first() else {
        return [0.0; 4];
    };
    if t <= first.0 {
        return first.1;
    }
    for pair in stops.windows(2) {
        let (o0, c0) = pair[0];
        let (o1, c1) = pair[1];
        if t <= o1 {
            let span = o1 - o0;
            let f = if span > 0.0 { (t - o0) / span } else { 1.0 };
            return std::array::from_fn(|k| c0[k] + (c1[k] - c0[k]) * f);
        }
    }
    stops[stops.len() - 1].1
}

/// Square RGBA8 raster stamped at every rendered point.
#[derive(Clone, Debug)]
pub struct SpriteImage {
    pub size: u32,
    pub rgba: Vec<u8>,
}

impl SpriteImage {
    #[inline]
    pub fn texel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.size + x) * 4) as usize;
        [self.rgba[i], self.rgba[i + 1], self.rgba[i + 2], self.rgba[i + 3]]
    }
}

/// Rasterize `stops` as a radial gradient centered in a `size` x `size` image,
/// sampling at texel centers. The gradient radius is half the image size.
pub fn radial_sprite(size: u32, stops: &[GradientStop]) -> SpriteImage {
    let mut rgba = Vec::with_capacity((size * size * 4) as usize);
    let center = size as f32 * 0.5;
    let radius = center.max(f32::EPSILON);
    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 + 0.5 - center;
            let dy = y as f32 + 0.5 - center;
            let t = (dx * dx + dy * dy).sqrt() / radius;
            let c = sample_gradient(stops, t);
            rgba.extend(c.iter().map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8));
        }
    }
    SpriteImage { size, rgba }
}

pub fn star_sprite() -> SpriteImage {
    radial_sprite(SPRITE_SIZE, &STAR_GRADIENT)
}
