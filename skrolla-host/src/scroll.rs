use rand::prelude::*;

/// Source of a view's current scroll offset, as a fraction where `0` is scrolled to the top
/// and `1` to the bottom. A source belongs to a single panel, so the query takes no further
/// context.
pub trait ScrollSource {
    fn fraction(&mut self) -> f32;
}

/// Stand-in scroll source producing a uniformly random offset in `[0, 1)`.
///
/// The host environment this widget was written against offers no way to query the actual
/// scroll state of a view, so the shipped default fabricates one. Replace it with a real
/// [`ScrollSource`] implementation if the host ever grows such a query.
#[derive(Default)]
pub struct RandomScroll;

impl ScrollSource for RandomScroll {
    fn fraction(&mut self) -> f32 {
        rand::thread_rng().gen_range(0.0..1.0)
    }
}

/// Scroll source pinned to a fixed offset.
pub struct FixedScroll(pub f32);

impl ScrollSource for FixedScroll {
    fn fraction(&mut self) -> f32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_stays_in_range() {
        let mut source = RandomScroll;

        for _ in 0..1_000 {
            let fraction = source.fraction();
            assert!((0.0..1.0).contains(&fraction));
        }
    }

    #[test]
    fn fixed_returns_its_offset() {
        let mut source = FixedScroll(0.4);
        assert!((source.fraction() - 0.4).abs() < f32::EPSILON);
    }
}
