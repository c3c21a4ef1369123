use rand::Rng;

/// Fresh process seed, drawn once at startup
pub fn generate_seed() -> u32 {
    rand::rng().random()
}

pub fn expand_seed64(seed: u32) -> u64 {
    splitmix64(seed as u64)
}

fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}
