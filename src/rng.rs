//! Random source for spawn rolls.
//!
//! Tables never reach for a global generator; the caller hands one in. In game
//! code that is the ECS-wide `rltk::RandomNumberGenerator` resource, in tests it
//! can be a seeded generator or a scripted sequence.

use rltk::RandomNumberGenerator;

/// Anything that can produce uniform floats for a roll
pub trait SpawnRng {
    /// Uniform value in `[0, 1)`
    fn next_f32(&mut self) -> f32;

    /// Uniform value in `[0, max]`, clamped so float rounding can't push it past `max`
    fn roll_up_to(&mut self, max: f32) -> f32 {
        if max <= 0.0 {return 0.0;}
        (self.next_f32() * max).min(max)
    }
}

impl SpawnRng for RandomNumberGenerator {
    fn next_f32(&mut self) -> f32 {
        self.rand::<f32>()
    }
}

impl<R: SpawnRng + ?Sized> SpawnRng for &mut R {
    fn next_f32(&mut self) -> f32 {
        (**self).next_f32()
    }
}
