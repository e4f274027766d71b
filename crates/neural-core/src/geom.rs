use glam::Vec2;
use rand::Rng;

/// Last known pointer position in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    pub pos: Vec2,
    pub radius: f32,
}

/// Displacement pushing `pos` away from `pointer` inside `radius`, scaled by
/// `(radius - d) / radius * strength`. A point sitting exactly on the pointer
/// has no defined direction and is pushed along -x.
#[inline]
pub fn repel(pos: Vec2, pointer: Vec2, radius: f32, strength: f32) -> Vec2 {
    if radius <= 0.0 {
        return Vec2::ZERO;
    }
    let away = pos - pointer;
    let dist = away.length();
    if !dist.is_finite() || dist >= radius {
        return Vec2::ZERO;
    }
    let force = (radius - dist) / radius;
    let dir = away.try_normalize().unwrap_or(Vec2::NEG_X);
    dir * force * strength
}

/// Velocity with both components uniform in `[-span/2, span/2)`.
#[inline]
pub fn drift_velocity<R: Rng + ?Sized>(rng: &mut R, span: f32) -> Vec2 {
    Vec2::new(
        (rng.gen::<f32>() - 0.5) * span,
        (rng.gen::<f32>() - 0.5) * span,
    )
}

/// Uniform point inside `[0, bounds)`.
#[inline]
pub fn random_point<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2) -> Vec2 {
    Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y)
}
