//! Responsive layout classing.
//!
//! The stylesheet keys off classes on `<body>` rather than media queries so
//! the embedded web view and a plain browser behave the same.

/// The viewport class applied to `<body>`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    /// Returns the breakpoint for a viewport width in css pixels.
    pub fn from_width(width: u32) -> Self {
        match width {
            0..=479 => Self::Mobile,
            480..=767 => Self::Tablet,
            _ => Self::Desktop,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Self::Mobile => "mobile-view",
            Self::Tablet => "tablet-view",
            Self::Desktop => "desktop-view",
        }
    }
}

/// Returns `true` for a flat viewport where the vertical layout must
/// compress.
pub fn is_landscape(width: u32, height: u32) -> bool {
    width > height && height < 500
}

/// Reapplies the viewport classes on `<body>`. Called once at startup and on
/// every resize.
pub fn apply() {
    let window = gloo_utils::window();

    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0) as u32;
    let height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0) as u32;

    let body = match gloo_utils::document().body() {
        Some(body) => body,
        None => return,
    };

    let classes = body.class_list();

    for breakpoint in [Breakpoint::Mobile, Breakpoint::Tablet, Breakpoint::Desktop] {
        let _ = classes.remove_1(breakpoint.class());
    }
    let _ = classes.add_1(Breakpoint::from_width(width).class());

    if is_landscape(width, height) {
        let _ = classes.add_1("landscape");
    } else {
        let _ = classes.remove_1("landscape");
    }
}

#[cfg(test)]
mod tests {
    use super::{is_landscape, Breakpoint};

    #[test]
    fn test_breakpoint_boundaries() {
        assert_eq!(Breakpoint::from_width(0), Breakpoint::Mobile);
        assert_eq!(Breakpoint::from_width(479), Breakpoint::Mobile);
        assert_eq!(Breakpoint::from_width(480), Breakpoint::Tablet);
        assert_eq!(Breakpoint::from_width(767), Breakpoint::Tablet);
        assert_eq!(Breakpoint::from_width(768), Breakpoint::Desktop);
        assert_eq!(Breakpoint::from_width(1920), Breakpoint::Desktop);
    }

    #[test]
    fn test_landscape() {
        assert!(is_landscape(800, 400));
        assert!(is_landscape(600, 499));
        assert!(!is_landscape(400, 800));
        assert!(!is_landscape(800, 600));
        assert!(!is_landscape(400, 400));
    }
}
