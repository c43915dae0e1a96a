/// Seed used when neither the CLI nor `config.toml` picks one.
pub const DEFAULT_SHUFFLE_SEED: u64 = 42;

const LCG_MULTIPLIER: u64 = 9301;
const LCG_INCREMENT: u64 = 49297;
const LCG_MODULUS: u64 = 233280;

/// Seeded Fisher–Yates shuffle 🔀
///
/// Walks from the last index down to 1, stepping a small linear congruential
/// generator once per index and swapping with `seed % (i + 1)`. The same seed
/// and input always produce the same order, so every redraw (and every run)
/// sees the grid in the same arrangement.
pub fn shuffle<T>(mut items: Vec<T>, seed: u64) -> Vec<T> {
    let mut state = seed;
    for i in (1..items.len()).rev() {
        state = next_state(state);
        let j = (state % (i as u64 + 1)) as usize;
        items.swap(i, j);
    }
    items
}

fn next_state(state: u64) -> u64 {
    // Exact for any seed below 2^32; larger seeds wrap instead of panicking.
    state
        .wrapping_mul(LCG_MULTIPLIER)
        .wrapping_add(LCG_INCREMENT)
        % LCG_MODULUS
}
