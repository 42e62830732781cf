//! CSS named colors and a [`ColorNameResolver`] backed by them.

use crate::color::Rgb8;
use crate::parse::{parse_hex, parse_rgb_function};
use crate::surface::ColorNameResolver;

/// Resolves color strings the way a browser's computed style would, without
/// a browser: named keywords plus hex and `rgb()` re-emitted canonically.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssNamedColors;

impl ColorNameResolver for CssNamedColors {
    fn resolve_named_color(&self, color: &str) -> Option<String> {
        let color = color.trim();
        named_color(color)
            .or_else(|| parse_hex(color).ok())
            .or_else(|| parse_rgb_function(color).ok())
            .map(Rgb8::to_css)
    }
}

/// Looks up one of the 148 CSS named colors (case insensitive).
///
/// `transparent` and `currentcolor` are not colors in this sense and
/// return `None`.
pub fn named_color(name: &str) -> Option<Rgb8> {
    match name.to_ascii_lowercase().as_str() {
        "aliceblue" => Some(Rgb8::new(240, 248, 255)),
        "antiquewhite" => Some(Rgb8::new(250, 235, 215)),
        "aqua" => Some(Rgb8::new(0, 255, 255)),
        "aquamarine" => Some(Rgb8::new(127, 255, 212)),
        "azure" => Some(Rgb8::new(240, 255, 255)),
        "beige" => Some(Rgb8::new(245, 245, 220)),
        "bisque" => Some(Rgb8::new(255, 228, 196)),
        "black" => Some(Rgb8::new(0, 0, 0)),
        "blanchedalmond" => Some(Rgb8::new(255, 235, 205)),
        "blue" => Some(Rgb8::new(0, 0, 255)),
        "blueviolet" => Some(Rgb8::new(138, 43, 226)),
        "brown" => Some(Rgb8::new(165, 42, 42)),
        "burlywood" => Some(Rgb8::new(222, 184, 135)),
        "cadetblue" => Some(Rgb8::new(95, 158, 160)),
        "chartreuse" => Some(Rgb8::new(127, 255, 0)),
        "chocolate" => Some(Rgb8::new(210, 105, 30)),
        "coral" => Some(Rgb8::new(255, 127, 80)),
        "cornflowerblue" => Some(Rgb8::new(100, 149, 237)),
        "cornsilk" => Some(Rgb8::new(255, 248, 220)),
        "crimson" => Some(Rgb8::new(220, 20, 60)),
        "cyan" => Some(Rgb8::new(0, 255, 255)),
        "darkblue" => Some(Rgb8::new(0, 0, 139)),
        "darkcyan" => Some(Rgb8::new(0, 139, 139)),
        "darkgoldenrod" => Some(Rgb8::new(184, 134, 11)),
        "darkgray" => Some(Rgb8::new(169, 169, 169)),
        "darkgrey" => Some(Rgb8::new(169, 169, 169)),
        "darkgreen" => Some(Rgb8::new(0, 100, 0)),
        "darkkhaki" => Some(Rgb8::new(189, 183, 107)),
        "darkmagenta" => Some(Rgb8::new(139, 0, 139)),
        "darkolivegreen" => Some(Rgb8::new(85, 107, 47)),
        "darkorange" => Some(Rgb8::new(255, 140, 0)),
        "darkorchid" => Some(Rgb8::new(153, 50, 204)),
        "darkred" => Some(Rgb8::new(139, 0, 0)),
        "darksalmon" => Some(Rgb8::new(233, 150, 122)),
        "darkseagreen" => Some(Rgb8::new(143, 188, 143)),
        "darkslateblue" => Some(Rgb8::new(72, 61, 139)),
        "darkslategray" => Some(Rgb8::new(47, 79, 79)),
        "darkslategrey" => Some(Rgb8::new(47, 79, 79)),
        "darkturquoise" => Some(Rgb8::new(0, 206, 209)),
        "darkviolet" => Some(Rgb8::new(148, 0, 211)),
        "deeppink" => Some(Rgb8::new(255, 20, 147)),
        "deepskyblue" => Some(Rgb8::new(0, 191, 255)),
        "dimgray" => Some(Rgb8::new(105, 105, 105)),
        "dimgrey" => Some(Rgb8::new(105, 105, 105)),
        "dodgerblue" => Some(Rgb8::new(30, 144, 255)),
        "firebrick" => Some(Rgb8::new(178, 34, 34)),
        "floralwhite" => Some(Rgb8::new(255, 250, 240)),
        "forestgreen" => Some(Rgb8::new(34, 139, 34)),
        "fuchsia" => Some(Rgb8::new(255, 0, 255)),
        "gainsboro" => Some(Rgb8::new(220, 220, 220)),
        "ghostwhite" => Some(Rgb8::new(248, 248, 255)),
        "gold" => Some(Rgb8::new(255, 215, 0)),
        "goldenrod" => Some(Rgb8::new(218, 165, 32)),
        "gray" => Some(Rgb8::new(128, 128, 128)),
        "grey" => Some(Rgb8::new(128, 128, 128)),
        "green" => Some(Rgb8::new(0, 128, 0)),
        "greenyellow" => Some(Rgb8::new(173, 255, 47)),
        "honeydew" => Some(Rgb8::new(240, 255, 240)),
        "hotpink" => Some(Rgb8::new(255, 105, 180)),
        "indianred" => Some(Rgb8::new(205, 92, 92)),
        "indigo" => Some(Rgb8::new(75, 0, 130)),
        "ivory" => Some(Rgb8::new(255, 255, 240)),
        "khaki" => Some(Rgb8::new(240, 230, 140)),
        "lavender" => Some(Rgb8::new(230, 230, 250)),
        "lavenderblush" => Some(Rgb8::new(255, 240, 245)),
        "lawngreen" => Some(Rgb8::new(124, 252, 0)),
        "lemonchiffon" => Some(Rgb8::new(255, 250, 205)),
        "lightblue" => Some(Rgb8::new(173, 216, 230)),
        "lightcoral" => Some(Rgb8::new(240, 128, 128)),
        "lightcyan" => Some(Rgb8::new(224, 255, 255)),
        "lightgoldenrodyellow" => Some(Rgb8::new(250, 250, 210)),
        "lightgray" => Some(Rgb8::new(211, 211, 211)),
        "lightgrey" => Some(Rgb8::new(211, 211, 211)),
        "lightgreen" => Some(Rgb8::new(144, 238, 144)),
        "lightpink" => Some(Rgb8::new(255, 182, 193)),
        "lightsalmon" => Some(Rgb8::new(255, 160, 122)),
        "lightseagreen" => Some(Rgb8::new(32, 178, 170)),
        "lightskyblue" => Some(Rgb8::new(135, 206, 250)),
        "lightslategray" => Some(Rgb8::new(119, 136, 153)),
        "lightslategrey" => Some(Rgb8::new(119, 136, 153)),
        "lightsteelblue" => Some(Rgb8::new(176, 196, 222)),
        "lightyellow" => Some(Rgb8::new(255, 255, 224)),
        "lime" => Some(Rgb8::new(0, 255, 0)),
        "limegreen" => Some(Rgb8::new(50, 205, 50)),
        "linen" => Some(Rgb8::new(250, 240, 230)),
        "magenta" => Some(Rgb8::new(255, 0, 255)),
        "maroon" => Some(Rgb8::new(128, 0, 0)),
        "mediumaquamarine" => Some(Rgb8::new(102, 205, 170)),
        "mediumblue" => Some(Rgb8::new(0, 0, 205)),
        "mediumorchid" => Some(Rgb8::new(186, 85, 211)),
        "mediumpurple" => Some(Rgb8::new(147, 112, 219)),
        "mediumseagreen" => Some(Rgb8::new(60, 179, 113)),
        "mediumslateblue" => Some(Rgb8::new(123, 104, 238)),
        "mediumspringgreen" => Some(Rgb8::new(0, 250, 154)),
        "mediumturquoise" => Some(Rgb8::new(72, 209, 204)),
        "mediumvioletred" => Some(Rgb8::new(199, 21, 133)),
        "midnightblue" => Some(Rgb8::new(25, 25, 112)),
        "mintcream" => Some(Rgb8::new(245, 255, 250)),
        "mistyrose" => Some(Rgb8::new(255, 228, 225)),
        "moccasin" => Some(Rgb8::new(255, 228, 181)),
        "navajowhite" => Some(Rgb8::new(255, 222, 173)),
        "navy" => Some(Rgb8::new(0, 0, 128)),
        "oldlace" => Some(Rgb8::new(253, 245, 230)),
        "olive" => Some(Rgb8::new(128, 128, 0)),
        "olivedrab" => Some(Rgb8::new(107, 142, 35)),
        "orange" => Some(Rgb8::new(255, 165, 0)),
        "orangered" => Some(Rgb8::new(255, 69, 0)),
        "orchid" => Some(Rgb8::new(218, 112, 214)),
        "palegoldenrod" => Some(Rgb8::new(238, 232, 170)),
        "palegreen" => Some(Rgb8::new(152, 251, 152)),
        "paleturquoise" => Some(Rgb8::new(175, 238, 238)),
        "palevioletred" => Some(Rgb8::new(219, 112, 147)),
        "papayawhip" => Some(Rgb8::new(255, 239, 213)),
        "peachpuff" => Some(Rgb8::new(255, 218, 185)),
        "peru" => Some(Rgb8::new(205, 133, 63)),
        "pink" => Some(Rgb8::new(255, 192, 203)),
        "plum" => Some(Rgb8::new(221, 160, 221)),
        "powderblue" => Some(Rgb8::new(176, 224, 230)),
        "purple" => Some(Rgb8::new(128, 0, 128)),
        "rebeccapurple" => Some(Rgb8::new(102, 51, 153)),
        "red" => Some(Rgb8::new(255, 0, 0)),
        "rosybrown" => Some(Rgb8::new(188, 143, 143)),
        "royalblue" => Some(Rgb8::new(65, 105, 225)),
        "saddlebrown" => Some(Rgb8::new(139, 69, 19)),
        "salmon" => Some(Rgb8::new(250, 128, 114)),
        "sandybrown" => Some(Rgb8::new(244, 164, 96)),
        "seagreen" => Some(Rgb8::new(46, 139, 87)),
        "seashell" => Some(Rgb8::new(255, 245, 238)),
        "sienna" => Some(Rgb8::new(160, 82, 45)),
        "silver" => Some(Rgb8::new(192, 192, 192)),
        "skyblue" => Some(Rgb8::new(135, 206, 235)),
        "slateblue" => Some(Rgb8::new(106, 90, 205)),
        "slategray" => Some(Rgb8::new(112, 128, 144)),
        "slategrey" => Some(Rgb8::new(112, 128, 144)),
        "snow" => Some(Rgb8::new(255, 250, 250)),
        "springgreen" => Some(Rgb8::new(0, 255, 127)),
        "steelblue" => Some(Rgb8::new(70, 130, 180)),
        "tan" => Some(Rgb8::new(210, 180, 140)),
        "teal" => Some(Rgb8::new(0, 128, 128)),
        "thistle" => Some(Rgb8::new(216, 191, 216)),
        "tomato" => Some(Rgb8::new(255, 99, 71)),
        "turquoise" => Some(Rgb8::new(64, 224, 208)),
        "violet" => Some(Rgb8::new(238, 130, 238)),
        "wheat" => Some(Rgb8::new(245, 222, 179)),
        "white" => Some(Rgb8::new(255, 255, 255)),
        "whitesmoke" => Some(Rgb8::new(245, 245, 245)),
        "yellow" => Some(Rgb8::new(255, 255, 0)),
        "yellowgreen" => Some(Rgb8::new(154, 205, 50)),
        _ => None,
    }
}
