//! Static named-colour palettes used to label [`RgbColour`] values.
//!
//! Two tables are searched in order: the eight basic primaries and
//! secondaries, then the standard web colour names. The first entry whose
//! channels match exactly supplies the name. Several web colours share
//! channels (`Aqua`/`Cyan`, `Gray`/`Grey`, ...); the earlier entry wins.

use crate::rgb::RgbColour;

/// Primary and secondary colours, searched first.
pub static BASIC_COLOURS: [RgbColour; 8] = [
    RgbColour::named("Red", 255, 0, 0),
    RgbColour::named("Green", 0, 255, 0),
    RgbColour::named("Blue", 0, 0, 255),
    RgbColour::named("Yellow", 255, 255, 0),
    RgbColour::named("Cyan", 0, 255, 255),
    RgbColour::named("Magenta", 255, 0, 255),
    RgbColour::named("White", 255, 255, 255),
    RgbColour::named("Black", 0, 0, 0),
];

/// Standard web colour names, searched after [`BASIC_COLOURS`].
pub static EXTENDED_COLOURS: [RgbColour; 148] = [
    RgbColour::named("AliceBlue", 240, 248, 255),
    RgbColour::named("AntiqueWhite", 250, 235, 215),
    RgbColour::named("Aqua", 0, 255, 255),
    RgbColour::named("Aquamarine", 127, 255, 212),
    RgbColour::named("Azure", 240, 255, 255),
    RgbColour::named("Beige", 245, 245, 220),
    RgbColour::named("Bisque", 255, 228, 196),
    RgbColour::named("Black", 0, 0, 0),
    RgbColour::named("BlanchedAlmond", 255, 235, 205),
    RgbColour::named("Blue", 0, 0, 255),
    RgbColour::named("BlueViolet", 138, 43, 226),
    RgbColour::named("Brown", 165, 42, 42),
    RgbColour::named("BurlyWood", 222, 184, 135),
    RgbColour::named("CadetBlue", 95, 158, 160),
    RgbColour::named("Chartreuse", 127, 255, 0),
    RgbColour::named("Chocolate", 210, 105, 30),
    RgbColour::named("Coral", 255, 127, 80),
    RgbColour::named("CornflowerBlue", 100, 149, 237),
    RgbColour::named("Cornsilk", 255, 248, 220),
    RgbColour::named("Crimson", 220, 20, 60),
    RgbColour::named("Cyan", 0, 255, 255),
    RgbColour::named("DarkBlue", 0, 0, 139),
    RgbColour::named("DarkCyan", 0, 139, 139),
    RgbColour::named("DarkGoldenRod", 184, 134, 11),
    RgbColour::named("DarkGray", 169, 169, 169),
    RgbColour::named("DarkGrey", 169, 169, 169),
    RgbColour::named("DarkGreen", 0, 100, 0),
    RgbColour::named("DarkKhaki", 189, 183, 107),
    RgbColour::named("DarkMagenta", 139, 0, 139),
    RgbColour::named("DarkOliveGreen", 85, 107, 47),
    RgbColour::named("DarkOrange", 255, 140, 0),
    RgbColour::named("DarkOrchid", 153, 50, 204),
    RgbColour::named("DarkRed", 139, 0, 0),
    RgbColour::named("DarkSalmon", 233, 150, 122),
    RgbColour::named("DarkSeaGreen", 143, 188, 143),
    RgbColour::named("DarkSlateBlue", 72, 61, 139),
    RgbColour::named("DarkSlateGray", 47, 79, 79),
    RgbColour::named("DarkSlateGrey", 47, 79, 79),
    RgbColour::named("DarkTurquoise", 0, 206, 209),
    RgbColour::named("DarkViolet", 148, 0, 211),
    RgbColour::named("DeepPink", 255, 20, 147),
    RgbColour::named("DeepSkyBlue", 0, 191, 255),
    RgbColour::named("DimGray", 105, 105, 105),
    RgbColour::named("DimGrey", 105, 105, 105),
    RgbColour::named("DodgerBlue", 30, 144, 255),
    RgbColour::named("FireBrick", 178, 34, 34),
    RgbColour::named("FloralWhite", 255, 250, 240),
    RgbColour::named("ForestGreen", 34, 139, 34),
    RgbColour::named("Fuchsia", 255, 0, 255),
    RgbColour::named("Gainsboro", 220, 220, 220),
    RgbColour::named("GhostWhite", 248, 248, 255),
    RgbColour::named("Gold", 255, 215, 0),
    RgbColour::named("GoldenRod", 218, 165, 32),
    RgbColour::named("Gray", 128, 128, 128),
    RgbColour::named("Grey", 128, 128, 128),
    RgbColour::named("Green", 0, 128, 0),
    RgbColour::named("GreenYellow", 173, 255, 47),
    RgbColour::named("HoneyDew", 240, 255, 240),
    RgbColour::named("HotPink", 255, 105, 180),
    RgbColour::named("IndianRed", 205, 92, 92),
    RgbColour::named("Indigo", 75, 0, 130),
    RgbColour::named("Ivory", 255, 255, 240),
    RgbColour::named("Khaki", 240, 230, 140),
    RgbColour::named("Lavender", 230, 230, 250),
    RgbColour::named("LavenderBlush", 255, 240, 245),
    RgbColour::named("LawnGreen", 124, 252, 0),
    RgbColour::named("LemonChiffon", 255, 250, 205),
    RgbColour::named("LightBlue", 173, 216, 230),
    RgbColour::named("LightCoral", 240, 128, 128),
    RgbColour::named("LightCyan", 224, 255, 255),
    RgbColour::named("LightGoldenRodYellow", 250, 250, 210),
    RgbColour::named("LightGray", 211, 211, 211),
    RgbColour::named("LightGrey", 211, 211, 211),
    RgbColour::named("LightGreen", 144, 238, 144),
    RgbColour::named("LightPink", 255, 182, 193),
    RgbColour::named("LightSalmon", 255, 160, 122),
    RgbColour::named("LightSeaGreen", 32, 178, 170),
    RgbColour::named("LightSkyBlue", 135, 206, 250),
    RgbColour::named("LightSlateGray", 119, 136, 153),
    RgbColour::named("LightSlateGrey", 119, 136, 153),
    RgbColour::named("LightSteelBlue", 176, 196, 222),
    RgbColour::named("LightYellow", 255, 255, 224),
    RgbColour::named("Lime", 0, 255, 0),
    RgbColour::named("LimeGreen", 50, 205, 50),
    RgbColour::named("Linen", 250, 240, 230),
    RgbColour::named("Magenta", 255, 0, 255),
    RgbColour::named("Maroon", 128, 0, 0),
    RgbColour::named("MediumAquaMarine", 102, 205, 170),
    RgbColour::named("MediumBlue", 0, 0, 205),
    RgbColour::named("MediumOrchid", 186, 85, 211),
    RgbColour::named("MediumPurple", 147, 112, 219),
    RgbColour::named("MediumSeaGreen", 60, 179, 113),
    RgbColour::named("MediumSlateBlue", 123, 104, 238),
    RgbColour::named("MediumSpringGreen", 0, 250, 154),
    RgbColour::named("MediumTurquoise", 72, 209, 204),
    RgbColour::named("MediumVioletRed", 199, 21, 133),
    RgbColour::named("MidnightBlue", 25, 25, 112),
    RgbColour::named("MintCream", 245, 255, 250),
    RgbColour::named("MistyRose", 255, 228, 225),
    RgbColour::named("Moccasin", 255, 228, 181),
    RgbColour::named("NavajoWhite", 255, 222, 173),
    RgbColour::named("Navy", 0, 0, 128),
    RgbColour::named("OldLace", 253, 245, 230),
    RgbColour::named("Olive", 128, 128, 0),
    RgbColour::named("OliveDrab", 107, 142, 35),
    RgbColour::named("Orange", 255, 165, 0),
    RgbColour::named("OrangeRed", 255, 69, 0),
    RgbColour::named("Orchid", 218, 112, 214),
    RgbColour::named("PaleGoldenRod", 238, 232, 170),
    RgbColour::named("PaleGreen", 152, 251, 152),
    RgbColour::named("PaleTurquoise", 175, 238, 238),
    RgbColour::named("PaleVioletRed", 219, 112, 147),
    RgbColour::named("PapayaWhip", 255, 239, 213),
    RgbColour::named("PeachPuff", 255, 218, 185),
    RgbColour::named("Peru", 205, 133, 63),
    RgbColour::named("Pink", 255, 192, 203),
    RgbColour::named("Plum", 221, 160, 221),
    RgbColour::named("PowderBlue", 176, 224, 230),
    RgbColour::named("Purple", 128, 0, 128),
    RgbColour::named("RebeccaPurple", 102, 51, 153),
    RgbColour::named("Red", 255, 0, 0),
    RgbColour::named("RosyBrown", 188, 143, 143),
    RgbColour::named("RoyalBlue", 65, 105, 225),
    RgbColour::named("SaddleBrown", 139, 69, 19),
    RgbColour::named("Salmon", 250, 128, 114),
    RgbColour::named("SandyBrown", 244, 164, 96),
    RgbColour::named("SeaGreen", 46, 139, 87),
    RgbColour::named("SeaShell", 255, 245, 238),
    RgbColour::named("Sienna", 160, 82, 45),
    RgbColour::named("Silver", 192, 192, 192),
    RgbColour::named("SkyBlue", 135, 206, 235),
    RgbColour::named("SlateBlue", 106, 90, 205),
    RgbColour::named("SlateGray", 112, 128, 144),
    RgbColour::named("SlateGrey", 112, 128, 144),
    RgbColour::named("Snow", 255, 250, 250),
    RgbColour::named("SpringGreen", 0, 255, 127),
    RgbColour::named("SteelBlue", 70, 130, 180),
    RgbColour::named("Tan", 210, 180, 140),
    RgbColour::named("Teal", 0, 128, 128),
    RgbColour::named("Thistle", 216, 191, 216),
    RgbColour::named("Tomato", 255, 99, 71),
    RgbColour::named("Turquoise", 64, 224, 208),
    RgbColour::named("Violet", 238, 130, 238),
    RgbColour::named("Wheat", 245, 222, 179),
    RgbColour::named("White", 255, 255, 255),
    RgbColour::named("WhiteSmoke", 245, 245, 245),
    RgbColour::named("Yellow", 255, 255, 0),
    RgbColour::named("YellowGreen", 154, 205, 50),
];

/// Finds the palette name for a colour's exact channel values.
///
/// Returns `None` when neither palette contains the colour.
pub fn find_name(colour: &RgbColour) -> Option<&'static str> {
    BASIC_COLOURS
        .iter()
        .chain(EXTENDED_COLOURS.iter())
        .find(|entry| entry == &colour)
        .and_then(RgbColour::given_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_palette_wins_over_extended() {
        // Green is (0,128,0) in the web palette but (0,255,0) in the basic one
        assert_eq!(find_name(&RgbColour::new(0, 255, 0)), Some("Green"));
        assert_eq!(find_name(&RgbColour::new(0, 128, 0)), Some("Green"));
        assert_eq!(find_name(&RgbColour::new(0, 255, 255)), Some("Cyan"));
    }

    #[test]
    fn first_duplicate_in_extended_wins() {
        assert_eq!(find_name(&RgbColour::new(128, 128, 128)), Some("Gray"));
        assert_eq!(find_name(&RgbColour::new(169, 169, 169)), Some("DarkGray"));
    }

    #[test]
    fn unmatched_colour_has_no_name() {
        assert_eq!(find_name(&RgbColour::new(1, 2, 3)), None);
    }

    #[test]
    fn every_entry_carries_a_name() {
        for entry in BASIC_COLOURS.iter().chain(EXTENDED_COLOURS.iter()) {
            assert!(entry.given_name().is_some());
        }
    }
}
