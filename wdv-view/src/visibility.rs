//! Responsive visibility for the chart, the two maps and the mobile toggle.
//!
//! Wide viewports show the chart and the desktop map side by side. Narrow
//! viewports share one region between the chart and the mobile map, and the
//! user switches between them with the toggle.

/// Viewport width (px) at and above which the desktop layout applies.
pub const BREAKPOINT: u32 = 1024;

/// Where the mobile toggle control sits in its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAlignment {
    Start,
    End,
}

impl ToggleAlignment {
    pub fn as_str(self) -> &'static str {
        match self {
            ToggleAlignment::Start => "start",
            ToggleAlignment::End => "end",
        }
    }
}

/// Which surfaces are mounted for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    pub show_chart: bool,
    pub show_mobile_map: bool,
    /// Mounted on wide viewports whether or not data has loaded.
    pub show_desktop_map: bool,
    pub show_toggle: bool,
    pub toggle_alignment: ToggleAlignment,
}

impl Visibility {
    pub fn decide(width: u32, mobile_map_visible: bool, has_data: bool) -> Self {
        let narrow = is_narrow(width);
        // An empty mobile map is never shown; the flag itself is kept.
        let show_mobile_map = has_data && mobile_map_visible && narrow;
        Self {
            show_chart: has_data && !show_mobile_map,
            show_mobile_map,
            show_desktop_map: !narrow,
            show_toggle: has_data && narrow,
            toggle_alignment: if mobile_map_visible {
                ToggleAlignment::Start
            } else {
                ToggleAlignment::End
            },
        }
    }
}

pub fn is_narrow(width: u32) -> bool {
    width < BREAKPOINT
}

/// Owns the viewport width and the mobile map toggle flag.
///
/// The flag only changes through [`toggle_mobile_map`](Self::toggle_mobile_map);
/// crossing the breakpoint or data arriving leaves it alone, it simply has
/// no effect on wide viewports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponsiveController {
    width: u32,
    mobile_map_visible: bool,
}

impl ResponsiveController {
    pub fn new(width: u32) -> Self {
        Self {
            width,
            mobile_map_visible: false,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn is_narrow(&self) -> bool {
        is_narrow(self.width)
    }

    pub fn mobile_map_visible(&self) -> bool {
        self.mobile_map_visible
    }

    /// Returns `false` when the width is unchanged.
    pub fn resize(&mut self, width: u32) -> bool {
        if self.width == width {
            return false;
        }
        self.width = width;
        true
    }

    /// Flip the flag and return its new value.
    pub fn toggle_mobile_map(&mut self) -> bool {
        self.mobile_map_visible = !self.mobile_map_visible;
        self.mobile_map_visible
    }

    pub fn visibility(&self, has_data: bool) -> Visibility {
        Visibility::decide(self.width, self.mobile_map_visible, has_data)
    }
}
