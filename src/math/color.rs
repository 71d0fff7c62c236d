use rand::Rng;

/// A RGBA `Color`. Each color component is a floating point value
/// with a range from 0 to 1.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Color { r, g, b, a }
    }

    /// Creates an opaque `Color` with each RGB component drawn uniformly from `[0, 1)`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Color::new(rng.gen(), rng.gen(), rng.gen(), 1.0)
    }
}

impl Color {
    pub fn white() -> Self {
        Color::new(1.0, 1.0, 1.0, 1.0)
    }

    pub fn gray() -> Self {
        Color::new(0.5, 0.5, 0.5, 1.0)
    }

    pub fn black() -> Self {
        Color::new(0.0, 0.0, 0.0, 1.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_is_opaque_and_in_range() {
        let mut rng = StdRng::from_seed([3; 32]);
        for _ in 0..64 {
            let c = Color::random(&mut rng);
            assert_eq!(c.a, 1.0);
            for &v in &[c.r, c.g, c.b] {
                assert!(v >= 0.0 && v < 1.0);
            }
        }
    }

    #[test]
    fn random_is_reproducible() {
        let a = Color::random(&mut StdRng::from_seed([5; 32]));
        let b = Color::random(&mut StdRng::from_seed([5; 32]));
        assert_eq!(a, b);
    }
}
