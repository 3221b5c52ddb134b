/// 32-bit color packed as `0xAARRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Argb(u32);

impl Argb {
    pub const TRANSPARENT: Argb = Argb(0);

    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Argb(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn from_u32(value: u32) -> Self {
        Argb(value)
    }

    pub const fn to_u32(self) -> u32 {
        self.0
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    pub const fn is_transparent(self) -> bool {
        self.alpha() == 0
    }

    pub const fn is_opaque(self) -> bool {
        self.alpha() == 0xFF
    }

    /// Bytes in RGBA order, as most encoders expect.
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.red(), self.green(), self.blue(), self.alpha()]
    }
}
