//! Read-only stretch and length metrics over a rope's current state.

use crate::float::Float;
use crate::rope::Rope;

/// Smallest and largest constraint stretch (current length / rest length).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stretch<F: Float> {
    pub min: F,
    pub max: F,
}

impl<F: Float> Stretch<F> {
    /// Every constraint sits within `tolerance` of its rest length.
    pub fn is_within(&self, tolerance: F) -> bool {
        (self.max - F::one()).abs() <= tolerance && (F::one() - self.min).abs() <= tolerance
    }
}

impl<F: Float> Rope<'_, F> {
    /// Sum of the current lengths of all constraints.
    pub fn total_length(&self) -> F {
        let vertices = self.vertices();
        self.constraints()
            .iter()
            .fold(F::zero(), |acc, c| acc + c.current_length(vertices))
    }

    /// Min and max stretch in one pass. A rope without constraints reports
    /// 1.0 for both.
    pub fn stretch(&self) -> Stretch<F> {
        let vertices = self.vertices();
        let mut ratios = self.constraints().iter().map(|c| c.stretch(vertices));
        let Some(first) = ratios.next() else {
            return Stretch { min: F::one(), max: F::one() };
        };
        ratios.fold(Stretch { min: first, max: first }, |s, r| Stretch {
            min: s.min.min(r),
            max: s.max.max(r),
        })
    }

    pub fn max_stretch(&self) -> F {
        self.stretch().max
    }

    pub fn min_stretch(&self) -> F {
        self.stretch().min
    }
}
