/// Element type of a fixed-width numeric buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    I8,
    U8,
    U8Clamped,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
}

impl ElementKind {
    /// Bytes per element.
    pub fn byte_width(self) -> usize {
        match self {
            ElementKind::I8 | ElementKind::U8 | ElementKind::U8Clamped => 1,
            ElementKind::I16 | ElementKind::U16 => 2,
            ElementKind::I32 | ElementKind::U32 | ElementKind::F32 => 4,
            ElementKind::I64 | ElementKind::U64 | ElementKind::F64 => 8,
        }
    }

    /// The conventional class name for buffers of this element kind.
    pub fn class_name(self) -> &'static str {
        match self {
            ElementKind::I8 => "Int8Array",
            ElementKind::U8 => "Uint8Array",
            ElementKind::U8Clamped => "Uint8ClampedArray",
            ElementKind::I16 => "Int16Array",
            ElementKind::U16 => "Uint16Array",
            ElementKind::I32 => "Int32Array",
            ElementKind::U32 => "Uint32Array",
            ElementKind::I64 => "BigInt64Array",
            ElementKind::U64 => "BigUint64Array",
            ElementKind::F32 => "Float32Array",
            ElementKind::F64 => "Float64Array",
        }
    }

    /// True for the floating-point element kinds.
    pub fn is_float(self) -> bool {
        matches!(self, ElementKind::F32 | ElementKind::F64)
    }
}

/// A homogeneous, fixed-element-width numeric array over raw little-endian
/// bytes. Element reads and writes go through `f64`, with the usual
/// narrowing conversions per element kind (truncate-and-wrap for the
/// integer kinds, clamp-and-round for `U8Clamped`).
///
/// # Examples
///
/// ```
/// use kitbag_values::{ElementKind, NumericBuffer};
///
/// let buffer = NumericBuffer::from_f64s(ElementKind::U8Clamped, &[3.0, 400.0]);
/// assert_eq!(buffer.get(0), Some(3.0));
/// assert_eq!(buffer.get(1), Some(255.0));
/// ```
#[derive(Debug, Clone)]
pub struct NumericBuffer {
    kind: ElementKind,
    data: Vec<u8>,
}

impl NumericBuffer {
    /// A zero-filled buffer of `len` elements.
    pub fn new(kind: ElementKind, len: usize) -> NumericBuffer {
        NumericBuffer {
            kind,
            data: vec![0; len * kind.byte_width()],
        }
    }

    /// Build a buffer by converting each `f64` to the element kind.
    pub fn from_f64s(kind: ElementKind, values: &[f64]) -> NumericBuffer {
        let mut buffer = NumericBuffer::new(kind, values.len());
        for (index, value) in values.iter().enumerate() {
            buffer.set(index, *value);
        }
        buffer
    }

    /// Rebuild a buffer from an element kind and its raw bytes.
    ///
    /// The byte length must be a multiple of the element width; trailing
    /// partial elements are truncated away.
    pub fn from_bytes(kind: ElementKind, bytes: Vec<u8>) -> NumericBuffer {
        let width = kind.byte_width();
        let mut data = bytes;
        data.truncate(data.len() - data.len() % width);
        NumericBuffer { kind, data }
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len() / self.kind.byte_width()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The raw little-endian bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Read the element at `index` widened to `f64`.
    ///
    /// 64-bit integer elements beyond 2^53 lose precision in the widening;
    /// use [`NumericBuffer::bytes`] when exactness matters.
    pub fn get(&self, index: usize) -> Option<f64> {
        let width = self.kind.byte_width();
        let at = index.checked_mul(width)?;
        let end = at.checked_add(width)?;
        let raw = self.data.get(at..end)?;
        Some(match self.kind {
            ElementKind::I8 => raw[0] as i8 as f64,
            ElementKind::U8 | ElementKind::U8Clamped => raw[0] as f64,
            ElementKind::I16 => i16::from_le_bytes([raw[0], raw[1]]) as f64,
            ElementKind::U16 => u16::from_le_bytes([raw[0], raw[1]]) as f64,
            ElementKind::I32 => i32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]) as f64,
            ElementKind::U32 => u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]) as f64,
            ElementKind::F32 => f32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]) as f64,
            ElementKind::I64 => i64::from_le_bytes(eight(raw)) as f64,
            ElementKind::U64 => u64::from_le_bytes(eight(raw)) as f64,
            ElementKind::F64 => f64::from_le_bytes(eight(raw)),
        })
    }

    /// Write `value` at `index`, converting to the element kind. Writes
    /// outside the buffer are ignored.
    pub fn set(&mut self, index: usize, value: f64) {
        let width = self.kind.byte_width();
        let Some(end) = index
            .checked_mul(width)
            .and_then(|at| at.checked_add(width))
        else {
            return;
        };
        if end > self.data.len() {
            return;
        }
        let at = end - width;
        let raw = &mut self.data[at..end];
        match self.kind {
            ElementKind::I8 | ElementKind::U8 => raw[0] = wrap_to_bits(value, 8) as u8,
            ElementKind::U8Clamped => raw[0] = clamp_to_u8(value),
            ElementKind::I16 | ElementKind::U16 => {
                raw.copy_from_slice(&(wrap_to_bits(value, 16) as u16).to_le_bytes());
            }
            ElementKind::I32 | ElementKind::U32 => {
                raw.copy_from_slice(&(wrap_to_bits(value, 32) as u32).to_le_bytes());
            }
            ElementKind::I64 => raw.copy_from_slice(&(value as i64).to_le_bytes()),
            ElementKind::U64 => raw.copy_from_slice(&(value as u64).to_le_bytes()),
            ElementKind::F32 => raw.copy_from_slice(&(value as f32).to_le_bytes()),
            ElementKind::F64 => raw.copy_from_slice(&value.to_le_bytes()),
        }
    }
}

fn eight(raw: &[u8]) -> [u8; 8] {
    [
        raw[0], raw[1], raw[2], raw[3], raw[4], raw[5], raw[6], raw[7],
    ]
}

// Truncate toward zero, then wrap modulo 2^bits. Non-finite values map to 0.
fn wrap_to_bits(value: f64, bits: u32) -> u64 {
    if !value.is_finite() {
        return 0;
    }
    let modulus = 2f64.powi(bits as i32);
    value.trunc().rem_euclid(modulus) as u64
}

fn clamp_to_u8(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, 255.0).round() as u8
}
