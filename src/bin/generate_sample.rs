//! Writes a deterministic synthetic `satellite_data.csv` for trying out
//! the plotter without a real catalog export.

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

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

const EARTH_RADIUS_KM: f64 = 6371.0;

/// One synthetic orbital population: mean altitude, spread, and how
/// elliptical the orbits may get.
struct Population {
    object_type: &'static str,
    count: usize,
    mean_altitude_km: f64,
    altitude_spread_km: f64,
    max_apsis_split_km: f64,
}

const POPULATIONS: &[Population] = &[
    // LEO constellation payloads
    Population {
        object_type: "PAYLOAD",
        count: 220,
        mean_altitude_km: 650.0,
        altitude_spread_km: 180.0,
        max_apsis_split_km: 30.0,
    },
    // GEO belt
    Population {
        object_type: "PAYLOAD",
        count: 40,
        mean_altitude_km: 35_786.0,
        altitude_spread_km: 60.0,
        max_apsis_split_km: 20.0,
    },
    // navigation constellations in MEO
    Population {
        object_type: "PAYLOAD",
        count: 25,
        mean_altitude_km: 20_200.0,
        altitude_spread_km: 150.0,
        max_apsis_split_km: 40.0,
    },
    // spent upper stages, mildly elliptical
    Population {
        object_type: "ROCKET BODY",
        count: 90,
        mean_altitude_km: 800.0,
        altitude_spread_km: 300.0,
        max_apsis_split_km: 400.0,
    },
    // fragmentation cloud around 780 km
    Population {
        object_type: "DEBRIS",
        count: 400,
        mean_altitude_km: 780.0,
        altitude_spread_km: 120.0,
        max_apsis_split_km: 80.0,
    },
    // GTO leftovers classed as mission debris
    Population {
        object_type: "MISSION RELATED",
        count: 30,
        mean_altitude_km: 17_800.0,
        altitude_spread_km: 500.0,
        max_apsis_split_km: 30_000.0,
    },
];

fn main() {
    let mut rng = SimpleRng::new(42);

    let output_path = "satellite_data.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record([
            "NORAD_CAT_ID",
            "OBJECT_TYPE",
            "SEMIMAJOR_AXIS",
            "APOAPSIS",
            "PERIAPSIS",
        ])
        .expect("Failed to write header");

    let mut catalog_id: u32 = 10_000;
    let mut rows: usize = 0;

    for pop in POPULATIONS {
        for _ in 0..pop.count {
            let mean_altitude = rng
                .gauss(pop.mean_altitude_km, pop.altitude_spread_km)
                .max(250.0);
            let split = rng.next_f64() * pop.max_apsis_split_km;
            let apoapsis = mean_altitude + split / 2.0;
            let periapsis = (mean_altitude - split / 2.0).max(180.0);
            let semimajor_axis = EARTH_RADIUS_KM + (apoapsis + periapsis) / 2.0;

            // roughly one row in eight carries only the semimajor axis,
            // exercising the fallback derivation
            let record: [String; 5] = if rng.next_f64() < 0.125 {
                [
                    catalog_id.to_string(),
                    pop.object_type.to_string(),
                    format!("{semimajor_axis:.3}"),
                    String::new(),
                    String::new(),
                ]
            } else {
                [
                    catalog_id.to_string(),
                    pop.object_type.to_string(),
                    format!("{semimajor_axis:.3}"),
                    format!("{apoapsis:.3}"),
                    format!("{periapsis:.3}"),
                ]
            };
            writer.write_record(&record).expect("Failed to write record");
            catalog_id += 1;
            rows += 1;
        }
    }

    // a handful of uncataloged objects with no usable elements at all
    for _ in 0..6 {
        let id = catalog_id.to_string();
        writer
            .write_record([id.as_str(), "TBA", "", "", ""])
            .expect("Failed to write record");
        catalog_id += 1;
        rows += 1;
    }

    writer.flush().expect("Failed to flush output file");
    println!("Wrote {rows} catalog rows to {output_path}");
}
