/// Display color of a transaction, a 24-bit RGB value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Swatch(u32);

impl Swatch {
    pub const MAX: u32 = 0xFF_FF_FF;

    /// Builds a swatch from the low 24 bits of `rgb`.
    pub fn from_rgb(rgb: u32) -> Self {
        Self(rgb & Self::MAX)
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        let [_, r, g, b] = self.0.to_be_bytes();
        (r, g, b)
    }
}

impl std::fmt::Display for Swatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}
