use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::Coefficient;

use super::Polynomial;

impl<F: Coefficient> Polynomial<F> {
    /// Generate a random [`Polynomial<F>`] with `n` coefficients sampled from `distribution`.
    #[inline]
    pub fn random_with_distribution<R, D>(n: usize, rng: &mut R, distribution: D) -> Self
    where
        R: Rng + ?Sized,
        D: Distribution<F>,
    {
        Self::from(distribution.sample_iter(rng).take(n).collect::<Vec<F>>())
    }
}

impl<F> Polynomial<F>
where
    F: Coefficient + rand_distr::uniform::SampleUniform,
{
    /// Generate a random [`Polynomial<F>`] with `n` coefficients uniform in `[-1, 1)`.
    #[inline]
    pub fn random<R>(n: usize, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self::random_with_distribution(n, rng, Uniform::new(-F::one(), F::one()))
    }
}
