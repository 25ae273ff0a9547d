use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Random source used for plan assembly and exercise backfill.
///
/// Every randomized operation in the core takes `&mut impl rand::Rng`, so
/// tests and reproducible deployments pass a seeded generator while normal
/// requests get a fresh one seeded from OS entropy.
pub type PlanRng = ChaCha8Rng;

/// Build a generator, seeded when `seed` is set
pub fn plan_rng(seed: Option<u64>) -> PlanRng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}
