//! Scroll-reactive header geometry.
//!
//! On the home page the avatar starts large and shrinks into the navigation
//! bar as the visitor scrolls; the header itself stays sticky, slides out of
//! view when scrolling far down, and pins back to the top on the way up.
//! All of it is driven by CSS custom properties set on `<html>`.
//!
//! The browser recomputes these values on every `scroll`/`resize` event in
//! `static/header.js`. The functions here are the same math in Rust: they
//! render the initial (scroll 0) state into the page so the first paint is
//! correct before any script runs, and they pin the formulas down in tests.
//!
//! ```text
//! scroll:   0 ─────────────── threshold ───────────▶
//! scale:  max ───── linear ───── min ── clamped ──
//! offset:   0 ───── linear ───── offset_rem ──────
//! ```

use crate::config::HeaderConfig;

/// Clamp `n` into the range spanned by `a` and `b`, in either order.
pub fn clamp(n: f64, a: f64, b: f64) -> f64 {
    let lo = a.min(b);
    let hi = a.max(b);
    n.max(lo).min(hi)
}

/// Resolved header motion parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderMotion {
    pub max_scale: f64,
    pub min_scale: f64,
    pub offset_rem: f64,
    pub threshold: f64,
    pub up_delay: f64,
}

impl Default for HeaderMotion {
    fn default() -> Self {
        Self::from_config(&HeaderConfig::default())
    }
}

/// Avatar transform at one scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AvatarFrame {
    pub scale: f64,
    /// Horizontal translation in rem.
    pub offset_x: f64,
    /// Scale of the ring drawn around the collapsed avatar.
    pub border_scale: f64,
    pub border_offset_x: f64,
    /// Ring is only visible once fully collapsed.
    pub border_opacity: f64,
}

/// Measured header state fed in on each event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderInput {
    /// `window.scrollY`.
    pub scroll_y: f64,
    /// `document.body.scrollHeight - window.innerHeight`.
    pub max_scroll: f64,
    /// Header bounding-rect top.
    pub top: f64,
    /// Header bounding-rect height.
    pub height: f64,
    /// First computation after page load.
    pub initial: bool,
}

/// Height and bottom margin of the outer header box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderSize {
    pub height: f64,
    pub margin_bottom: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderFrame {
    /// Set `--header-position: sticky` (first computation only).
    pub sticky: bool,
    pub content_offset: f64,
    /// `None` keeps the previous size (header partially visible, not at top).
    pub size: Option<HeaderSize>,
    /// Inner container is `position: fixed` (pinned while scrolled).
    pub inner_fixed: bool,
}

/// One CSS custom property update. `None` removes the property.
pub type CssProperty = (&'static str, Option<String>);

impl HeaderMotion {
    pub fn from_config(config: &HeaderConfig) -> Self {
        Self {
            max_scale: config.avatar_max_scale,
            min_scale: config.avatar_min_scale,
            offset_rem: config.avatar_max_offset_rem,
            threshold: config.scroll_threshold,
            up_delay: config.up_delay,
        }
    }

    /// Avatar transform for a given `window.scrollY`.
    ///
    /// A non-positive threshold means the avatar is always collapsed.
    pub fn avatar_frame(&self, scroll_y: f64) -> AvatarFrame {
        let (scale, offset_x) = if self.threshold <= 0.0 {
            (self.min_scale, self.offset_rem)
        } else {
            // Distance left before the threshold: threshold at the top, 0 at it.
            let remaining = self.threshold - scroll_y;
            let scale = remaining * (self.max_scale - self.min_scale) / self.threshold
                + self.min_scale;
            let offset_x = remaining * (0.0 - self.offset_rem) / self.threshold + self.offset_rem;
            (
                clamp(scale, self.max_scale, self.min_scale),
                clamp(offset_x, 0.0, self.offset_rem),
            )
        };

        let border_scale = scale / self.min_scale;
        AvatarFrame {
            scale,
            offset_x,
            border_scale,
            border_offset_x: (offset_x - self.offset_rem) * border_scale,
            border_opacity: if scale == self.min_scale { 1.0 } else { 0.0 },
        }
    }

    /// Header box geometry for one measurement.
    pub fn header_frame(&self, input: HeaderInput) -> HeaderFrame {
        let scroll_y = clamp(input.scroll_y, 0.0, input.max_scroll.max(0.0));
        let height = input.height;

        let size = if input.initial || scroll_y < self.threshold {
            Some(HeaderSize {
                height: self.threshold + height,
                margin_bottom: -self.threshold,
            })
        } else if input.top + height < -self.up_delay {
            let offset = height.max(scroll_y - self.up_delay);
            Some(HeaderSize {
                height: offset,
                margin_bottom: height - offset,
            })
        } else if input.top == 0.0 {
            Some(HeaderSize {
                height: scroll_y + height,
                margin_bottom: -scroll_y,
            })
        } else {
            None
        };

        HeaderFrame {
            sticky: input.initial,
            content_offset: self.threshold,
            size,
            inner_fixed: input.top == 0.0 && scroll_y > 0.0 && scroll_y >= self.threshold,
        }
    }
}

/// CSS custom properties for an avatar frame.
pub fn avatar_properties(frame: &AvatarFrame) -> Vec<CssProperty> {
    vec![
        (
            "--avatar-image-transform",
            Some(format!(
                "translate3d({}rem, 0, 0) scale({})",
                frame.offset_x, frame.scale
            )),
        ),
        (
            "--avatar-border-transform",
            Some(format!(
                "translate3d({}rem, 0, 0) scale({})",
                frame.border_offset_x, frame.border_scale
            )),
        ),
        (
            "--avatar-border-opacity",
            Some(format!("{}", frame.border_opacity)),
        ),
    ]
}

/// CSS custom properties for a header frame.
pub fn header_properties(frame: &HeaderFrame) -> Vec<CssProperty> {
    let mut props = Vec::new();
    if frame.sticky {
        props.push(("--header-position", Some("sticky".to_string())));
    }
    props.push(("--content-offset", Some(format!("{}px", frame.content_offset))));
    if let Some(size) = frame.size {
        props.push(("--header-height", Some(format!("{}px", size.height))));
        props.push(("--header-mb", Some(format!("{}px", size.margin_bottom))));
    }
    if frame.inner_fixed {
        props.push(("--header-inner-position", Some("fixed".to_string())));
        props.push(("--header-top", None));
        props.push(("--avatar-top", None));
    } else {
        props.push(("--header-inner-position", None));
        props.push(("--header-top", Some("0px".to_string())));
        props.push(("--avatar-top", Some("0px".to_string())));
    }
    props
}

/// Inline `style` for `<html>` describing the page at scroll 0.
///
/// Header height is unknown until layout, so only values that do not depend
/// on measurement are included. Avatar properties are emitted on the home
/// page only, where the large avatar exists.
pub fn initial_style(motion: &HeaderMotion, home: bool) -> String {
    let mut props = vec![
        ("--header-position", Some("sticky".to_string())),
        ("--content-offset", Some(format!("{}px", motion.threshold))),
    ];
    if home {
        props.extend(avatar_properties(&motion.avatar_frame(0.0)));
    }
    props
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| format!("{name}: {v}")))
        .collect::<Vec<_>>()
        .join("; ")
}
