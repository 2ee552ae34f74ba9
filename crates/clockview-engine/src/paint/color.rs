/// Linear premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are expected to be multiplied by `a` (premultiplied alpha).
///
/// Opaque colors are identical in straight and premultiplied form, which is what
/// lets the named constants below be `const`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::opaque(0.0, 0.0, 0.0);
    pub const RED: Color = Color::opaque(1.0, 0.0, 0.0);

    /// Fully opaque color from `[0, 1]` components.
    #[inline]
    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a premultiplied color from straight sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Creates a color from a packed `0xAARRGGBB` value.
    ///
    /// This is the layout toolkits such as Android use for color ints, so host
    /// adapters can forward their resolved attribute values unchanged.
    #[inline]
    pub fn from_argb_u32(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self::from_srgb_u8(r, g, b, a)
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb_black_and_red() {
        assert_eq!(Color::from_argb_u32(0xFF00_0000), Color::BLACK);
        assert_eq!(Color::from_argb_u32(0xFFFF_0000), Color::RED);
    }

    #[test]
    fn argb_alpha_is_premultiplied() {
        let c = Color::from_argb_u32(0x80FF_0000);
        assert!((c.a - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.r, c.a);
        assert_eq!(c.g, 0.0);
    }

    #[test]
    fn straight_components_are_clamped() {
        let c = Color::from_straight(2.0, 0.5, -1.0, 0.5);
        assert_eq!(c, Color { r: 0.5, g: 0.25, b: 0.0, a: 0.5 });
    }
}
