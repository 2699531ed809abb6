//! Stat card icons
//!
//! Lucide-style stroke icons drawn inline as SVG. Every [`IconKey`] has a
//! glyph; the mapping is a plain `match`, so adding a key without a glyph
//! does not compile.

use bookingdash_core::IconKey;
use dioxus::prelude::*;

/// One SVG primitive in a 24x24 icon box.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Shape {
    Path(&'static str),
    Circle { cx: f32, cy: f32, r: f32 },
}

/// A named icon drawing.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Glyph {
    pub name: &'static str,
    pub shapes: &'static [Shape],
}

const CHART_LINE: Glyph = Glyph {
    name: "chart-line",
    shapes: &[
        Shape::Path("M3 3v16a2 2 0 0 0 2 2h16"),
        Shape::Path("m19 9-5 5-4-4-3 3"),
    ],
};

const SHOPPING_CART: Glyph = Glyph {
    name: "shopping-cart",
    shapes: &[
        Shape::Circle { cx: 8.0, cy: 21.0, r: 1.0 },
        Shape::Circle { cx: 19.0, cy: 21.0, r: 1.0 },
        Shape::Path("M2.05 2.05h2l2.66 12.42a2 2 0 0 0 2 1.58h9.78a2 2 0 0 0 1.95-1.57l1.65-7.43H5.12"),
    ],
};

const PACKAGE: Glyph = Glyph {
    name: "package",
    shapes: &[
        Shape::Path("M11 21.73a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73z"),
        Shape::Path("M12 22V12"),
        Shape::Path("m3.3 7 7.703 4.734a2 2 0 0 0 1.994 0L20.7 7"),
        Shape::Path("m7.5 4.27 9 5.15"),
    ],
};

const USERS: Glyph = Glyph {
    name: "users",
    shapes: &[
        Shape::Path("M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"),
        Shape::Circle { cx: 9.0, cy: 7.0, r: 4.0 },
        Shape::Path("M22 21v-2a4 4 0 0 0-3-3.87"),
        Shape::Path("M16 3.13a4 4 0 0 1 0 7.75"),
    ],
};

const SETTINGS: Glyph = Glyph {
    name: "settings",
    shapes: &[
        Shape::Path("M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z"),
        Shape::Circle { cx: 12.0, cy: 12.0, r: 3.0 },
    ],
};

/// The glyph drawn for `key`.
pub fn glyph(key: IconKey) -> Glyph {
    match key {
        IconKey::Dashboard => CHART_LINE,
        IconKey::Shopping => SHOPPING_CART,
        IconKey::Box => PACKAGE,
        IconKey::Users => USERS,
        IconKey::Cog => SETTINGS,
    }
}

/// Properties for the Icon component
#[derive(Clone, PartialEq, Props)]
pub struct IconProps {
    pub icon: IconKey,
    /// Edge length in pixels (default: 30)
    #[props(default = 30)]
    pub size: u32,
}

/// Renders the glyph for an [`IconKey`] in the current text color.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Icon { icon: IconKey::Users, size: 24 }
/// }
/// ```
#[component]
pub fn Icon(props: IconProps) -> Element {
    let glyph = glyph(props.icon);
    let size = props.size;

    rsx! {
        svg {
            class: "icon icon-{glyph.name}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {glyph.shapes.iter().map(render_shape)}
        }
    }
}

fn render_shape(shape: &Shape) -> Element {
    match *shape {
        Shape::Path(d) => rsx! {
            path { d: "{d}" }
        },
        Shape::Circle { cx, cy, r } => rsx! {
            circle { cx: "{cx}", cy: "{cy}", r: "{r}" }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_has_a_glyph() {
        for key in IconKey::ALL {
            assert!(!glyph(key).shapes.is_empty(), "{key} has no shapes");
        }
    }

    #[test]
    fn glyphs_are_distinct() {
        let names: Vec<&str> = IconKey::ALL.iter().map(|k| glyph(*k).name).collect();
        let mut unique = names.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn glyph_names() {
        assert_eq!(glyph(IconKey::Dashboard).name, "chart-line");
        assert_eq!(glyph(IconKey::Shopping).name, "shopping-cart");
        assert_eq!(glyph(IconKey::Box).name, "package");
        assert_eq!(glyph(IconKey::Users).name, "users");
        assert_eq!(glyph(IconKey::Cog).name, "settings");
    }
}
