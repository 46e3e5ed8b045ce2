use rand::Rng;

/// Supplies the uniform draws used by the generator.
///
/// Every random decision made while composing a line goes through this
/// trait, so a caller can replace the thread RNG with a seeded or scripted
/// source and get exact, repeatable outcomes.
///
/// Any [`rand::Rng`] is a `RandomSource`.
pub trait RandomSource {
	/// Uniform draw in `[0.0, 1.0)`.
	fn next_unit(&mut self) -> f64;

	/// Uniform index in `0..len`.
	///
	/// `len` must be strictly positive.
	fn next_index(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
	fn next_unit(&mut self) -> f64 {
		self.random::<f64>()
	}

	fn next_index(&mut self, len: usize) -> usize {
		self.random_range(0..len)
	}
}

/// Turns a probability value into a yes/no decision.
///
/// Draws `r` uniformly in `[0.0, 1.0)` and returns `p <= r`.
///
/// The sense is inverted with respect to the parameter name: `0.0` means
/// "always" and `1.0` means "(almost) never". Values outside `[0.0, 1.0]`
/// are accepted and saturate: any negative value always yields `true`,
/// anything above `1.0` always yields `false`.
pub fn decide<S: RandomSource + ?Sized>(p: f64, source: &mut S) -> bool {
	p <= source.next_unit()
}
