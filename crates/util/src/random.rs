//! Seedable random value generation, for fuzz-style exercising of the
//! clone and equality algorithms.

use std::sync::{Arc, Mutex};

use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

use kitbag_values::{ElementKind, Value};

const PATTERN_SOURCES: &[(&str, &str)] = &[
    ("[a-z]+", ""),
    ("\\d{2,4}", "i"),
    ("foo|bar", "im"),
];

const BUFFER_KINDS: &[ElementKind] = &[
    ElementKind::U8,
    ElementKind::I16,
    ElementKind::I32,
    ElementKind::F32,
    ElementKind::F64,
];

/// A generator of arbitrary acyclic values.
///
/// Uses the xoshiro256** PRNG for reproducible sequences when seeded.
///
/// # Examples
///
/// ```
/// use kitbag_util::random::RandomValues;
///
/// let random = RandomValues::new(Some([7; 32]));
/// let again = RandomValues::new(Some([7; 32]));
///
/// // same seed, same sequence
/// assert_eq!(random.int(1, 1000), again.int(1, 1000));
/// ```
pub struct RandomValues {
    /// The seed used to initialize the PRNG.
    pub seed: [u8; 32],
    rng: Arc<Mutex<Xoshiro256StarStar>>,
}

impl RandomValues {
    /// Create a generator with an optional seed; unseeded generators draw
    /// their seed from the operating system.
    pub fn new(seed: Option<[u8; 32]>) -> RandomValues {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });

        RandomValues {
            seed,
            rng: Arc::new(Mutex::new(Xoshiro256StarStar::from_seed(seed))),
        }
    }

    /// A random integer in `[min, max]`.
    pub fn int(&self, min: i64, max: i64) -> i64 {
        let mut rng = self.rng.lock().unwrap();
        rng.gen_range(min..=max)
    }

    /// A random float in `[0, 1)`.
    pub fn float(&self) -> f64 {
        let mut rng = self.rng.lock().unwrap();
        rng.gen::<f64>()
    }

    /// True with probability `p`.
    pub fn chance(&self, p: f64) -> bool {
        self.float() < p
    }

    /// A random short ASCII string.
    pub fn string(&self, max_len: usize) -> String {
        let len = self.int(0, max_len as i64) as usize;
        (0..len)
            .map(|_| {
                let at = self.int(0, 61) as u32;
                let ch = match at {
                    0..=25 => b'a' + at as u8,
                    26..=51 => b'A' + (at - 26) as u8,
                    _ => b'0' + (at - 52) as u8,
                };
                ch as char
            })
            .collect()
    }

    /// An arbitrary value at most `depth` containers deep. At depth 0 only
    /// leaf values are produced. The result is always acyclic.
    pub fn value(&self, depth: usize) -> Value {
        if depth == 0 || self.chance(0.4) {
            return self.leaf();
        }
        match self.int(0, 4) {
            0 => {
                let len = self.int(0, 4) as usize;
                let array = Value::array_empty();
                {
                    let cell = array.as_array().expect("just constructed an array");
                    let mut inner = cell.borrow_mut();
                    for _ in 0..len {
                        if self.chance(0.1) {
                            inner.push_hole();
                        } else {
                            inner.push(self.value(depth - 1));
                        }
                    }
                }
                array
            }
            1 => {
                let len = self.int(0, 4) as usize;
                Value::record_from(
                    (0..len).map(|index| (format!("k{index}_{}", self.string(3)), self.value(depth - 1))),
                )
            }
            2 => {
                let len = self.int(0, 3) as usize;
                Value::map_from((0..len).map(|_| (self.leaf(), self.value(depth - 1))))
            }
            3 => {
                let len = self.int(0, 3) as usize;
                Value::set_from((0..len).map(|_| self.value(depth - 1)))
            }
            _ => {
                let kind = BUFFER_KINDS[self.int(0, BUFFER_KINDS.len() as i64 - 1) as usize];
                let len = self.int(0, 5) as usize;
                let elements: Vec<f64> = (0..len).map(|_| self.float() * 200.0 - 100.0).collect();
                Value::buffer_from(kind, &elements)
            }
        }
    }

    fn leaf(&self) -> Value {
        match self.int(0, 9) {
            0 => Value::Undefined,
            1 => Value::Null,
            2 => Value::Bool(self.chance(0.5)),
            3 => {
                if self.chance(0.05) {
                    Value::number(f64::NAN)
                } else {
                    Value::number(self.float() * 2000.0 - 1000.0)
                }
            }
            4 => Value::str(self.string(8)),
            5 => Value::bigint(self.int(i64::MIN / 2, i64::MAX / 2)),
            6 => Value::date(self.int(0, 4_000_000_000_000)),
            7 => {
                let (source, flags) =
                    PATTERN_SOURCES[self.int(0, PATTERN_SOURCES.len() as i64 - 1) as usize];
                Value::pattern(source, flags).expect("the built-in sources compile")
            }
            8 => Value::symbol(Some("token")),
            _ => Value::number(self.int(-100, 100) as f64),
        }
    }
}
