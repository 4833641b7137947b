//! Generate a deterministic sample restaurant CSV for manual testing.
//!
//! The output includes deliberately dirty rows (blank cuisines, costs with
//! thousands separators, non-numeric cells) so the cleaning pipeline has
//! something to chew on.

use anyhow::{Context, Result};

const OUTPUT: &str = "sample_restaurants.csv";
const N_ROWS: usize = 60;

const NAME_FIRST: &[&str] = &[
    "Spice", "Golden", "Royal", "Blue", "Urban", "Little", "Grand", "Coastal",
];
const NAME_SECOND: &[&str] = &[
    "Route", "Dragon", "Tandoor", "Lotus", "Kitchen", "Saigon", "Bistro", "Pearl",
];
const CUISINES: &[&str] = &[
    "North Indian",
    "North Indian, Chinese",
    "Chinese, Thai",
    "South Indian",
    "Italian, Continental",
    "Cafe, Bakery",
    "Thai, Vietnamese",
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform integer in `[0, n)`.
    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(20240817);
    let mut writer = csv::Writer::from_path(OUTPUT)
        .with_context(|| format!("creating {OUTPUT}"))?;

    writer.write_record([
        "Restaurant Name",
        "Cuisines",
        "Average Cost for two",
        "Aggregate rating",
        "Votes",
    ])?;

    for i in 0..N_ROWS {
        let name = format!(
            "{} {} {}",
            NAME_FIRST[rng.below(NAME_FIRST.len())],
            NAME_SECOND[rng.below(NAME_SECOND.len())],
            i + 1
        );

        // Roughly one row in ten has a blank cuisines cell.
        let cuisines = if rng.below(10) == 0 {
            String::new()
        } else {
            CUISINES[rng.below(CUISINES.len())].to_string()
        };

        let cost_value = 100 + rng.below(25) * 75;
        let cost = match rng.below(12) {
            0 => "N/A".to_string(),
            // Thousands separator, the way the source exports large values.
            1 => format!("{},{:03}", 1 + rng.below(3), rng.below(1000)),
            _ => cost_value.to_string(),
        };

        let rating = if rng.below(15) == 0 {
            String::new()
        } else {
            format!("{:.1}", 2.0 + rng.next_f64() * 3.0)
        };

        let votes = if rng.below(8) == 0 {
            String::new()
        } else {
            rng.below(2000).to_string()
        };

        writer.write_record([&name, &cuisines, &cost, &rating, &votes])?;
    }

    writer.flush().context("flushing output")?;
    println!("Wrote {N_ROWS} rows to {OUTPUT}");
    Ok(())
}
