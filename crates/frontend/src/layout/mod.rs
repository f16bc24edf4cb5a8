pub mod center;
pub mod global_context;
pub mod left;

use leptos::prelude::*;

/// Viewports narrower than this get the single-column mobile layout
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Mobile,
    Desktop,
}

impl LayoutMode {
    /// Single threshold, no hysteresis
    pub fn from_viewport_width(width: f64) -> Self {
        if width < MOBILE_BREAKPOINT_PX {
            LayoutMode::Mobile
        } else {
            LayoutMode::Desktop
        }
    }

    /// Current window width; desktop when it cannot be read
    pub fn from_window() -> Self {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .map(Self::from_viewport_width)
            .unwrap_or(LayoutMode::Desktop)
    }
}

/// Desktop split layout:
/// ```text
/// +-----------+------------------------------+
/// |  Sidebar  |           Content            |
/// |  (Left)   |          (Center)            |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <div class="app-body">
                <left::Left>
                    {left()}
                </left::Left>
                <center::Center>
                    {center()}
                </center::Center>
            </div>
        </div>
    }
}

/// Mobile layout: one scrolling column
#[component]
pub fn MobileShell(children: Children) -> impl IntoView {
    view! {
        <div data-zone="mobile" class="app-layout app-layout--mobile">
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_boundary() {
        assert_eq!(LayoutMode::from_viewport_width(767.0), LayoutMode::Mobile);
        assert_eq!(LayoutMode::from_viewport_width(768.0), LayoutMode::Desktop);
    }

    #[test]
    fn test_fractional_widths() {
        assert_eq!(LayoutMode::from_viewport_width(767.9), LayoutMode::Mobile);
        assert_eq!(LayoutMode::from_viewport_width(1440.0), LayoutMode::Desktop);
        assert_eq!(LayoutMode::from_viewport_width(0.0), LayoutMode::Mobile);
    }
}
