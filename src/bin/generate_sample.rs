//! Writes a deterministic `sales_data.csv` for trying out the dashboard.
//! A few cells are intentionally malformed to exercise the lenient
//! coercion path (they should show up as 0 / 0.0 / blank dates).

use anyhow::{Context, Result};
use chrono::NaiveDate;

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

    /// Uniform integer in `[0, bound)`.
    fn below(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound
    }

    /// Uniform float in `[0, 1)`.
    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

const PRODUCTS: [(&str, f64); 5] = [
    ("Laptop", 850.0),
    ("Phone", 520.0),
    ("Tablet", 310.0),
    ("Monitor", 180.0),
    ("Keyboard", 45.0),
];

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_path("sales_data.csv")
        .context("creating sales_data.csv")?;

    writer.write_record(["Date", "Product", "Quantity", "Price"])?;

    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let mut n_rows = 0usize;

    for day_offset in 0..30 {
        let date = start + chrono::Days::new(day_offset);
        let n_sales = 2 + rng.below(4);
        for _ in 0..n_sales {
            let (product, base_price) = PRODUCTS[rng.below(PRODUCTS.len() as u64) as usize];
            let quantity = 1 + rng.below(8);
            let price = base_price * (0.9 + 0.2 * rng.unit());

            // Sprinkle in malformed cells roughly 5% of the time.
            let roll = rng.below(100);
            let (date_s, qty_s, price_s) = match roll {
                0..=1 => ("n/a".to_string(), quantity.to_string(), format!("{price:.2}")),
                2..=3 => (
                    date.format("%Y-%m-%d").to_string(),
                    "unknown".to_string(),
                    format!("{price:.2}"),
                ),
                4 => (
                    date.format("%Y-%m-%d").to_string(),
                    quantity.to_string(),
                    format!("${price:.2}"),
                ),
                _ => (
                    date.format("%Y-%m-%d").to_string(),
                    quantity.to_string(),
                    format!("{price:.2}"),
                ),
            };

            writer.write_record([date_s, product.to_string(), qty_s, price_s])?;
            n_rows += 1;
        }
    }

    writer.flush().context("flushing sales_data.csv")?;
    println!("Wrote {n_rows} rows to sales_data.csv");
    Ok(())
}
