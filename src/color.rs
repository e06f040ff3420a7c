// Particle colours: either a hue angle drawn with fixed saturation/lightness,
// or a plain RGB triple with channels in [0, 1)

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Color {
    Hue(f64),
    Rgb([f32; 3]),
}

impl Color {
    pub const SATURATION: f64 = 1.0;
    pub const LIGHTNESS: f64 = 0.6;

    // CSS fill style for the canvas renderer
    pub fn to_css(&self) -> String {
        match *self {
            Color::Hue(hue) => format!("hsl({},100%,60%)", hue),
            Color::Rgb([r, g, b]) => format!(
                "rgb({},{},{})",
                (r * 255.0).round() as u8,
                (g * 255.0).round() as u8,
                (b * 255.0).round() as u8
            ),
        }
    }

    // Linear channels for the GL renderers. Hues go through the same
    // hsl(h, 100%, 60%) mapping the canvas uses.
    pub fn to_rgb(&self) -> [f32; 3] {
        match *self {
            Color::Hue(hue) => hsl_to_rgb(hue, Color::SATURATION, Color::LIGHTNESS),
            Color::Rgb(rgb) => rgb,
        }
    }
}

pub fn hsl_to_rgb(hue_deg: f64, s: f64, l: f64) -> [f32; 3] {
    if s == 0.0 {
        return [l as f32; 3];
    }

    let h = hue_deg.rem_euclid(360.0) / 360.0;
    let hue_to_channel = |p: f64, q: f64, mut t: f64| {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            return p + (q - p) * 6.0 * t;
        }
        if t < 1.0 / 2.0 {
            return q;
        }
        if t < 2.0 / 3.0 {
            return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
        }
        p
    };

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    [
        hue_to_channel(p, q, h + 1.0 / 3.0) as f32,
        hue_to_channel(p, q, h) as f32,
        hue_to_channel(p, q, h - 1.0 / 3.0) as f32,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rgb_close(actual: [f32; 3], expected: [f32; 3]) {
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!((a - e).abs() < 1e-5, "{:?} != {:?}", actual, expected);
        }
    }

    #[test]
    fn hue_formats_as_css_hsl() {
        assert_eq!(Color::Hue(120.0).to_css(), "hsl(120,100%,60%)");
        assert_eq!(Color::Hue(42.5).to_css(), "hsl(42.5,100%,60%)");
    }

    #[test]
    fn rgb_formats_as_css_rgb() {
        assert_eq!(Color::Rgb([1.0, 0.0, 0.5]).to_css(), "rgb(255,0,128)");
    }

    #[test]
    fn primary_hues_convert() {
        assert_rgb_close(Color::Hue(0.0).to_rgb(), [1.0, 0.2, 0.2]);
        assert_rgb_close(Color::Hue(120.0).to_rgb(), [0.2, 1.0, 0.2]);
        assert_rgb_close(Color::Hue(240.0).to_rgb(), [0.2, 0.2, 1.0]);
        assert_rgb_close(Color::Hue(360.0).to_rgb(), Color::Hue(0.0).to_rgb());
    }

    #[test]
    fn grey_when_unsaturated() {
        assert_rgb_close(hsl_to_rgb(200.0, 0.0, 0.25), [0.25, 0.25, 0.25]);
    }
}
