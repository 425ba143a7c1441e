// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design tokens for the portfolio page: black surfaces with a violet accent.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_portfolio::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let backdrop = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale (zinc)
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const ZINC_900: Color = Color::from_rgb(0.094, 0.094, 0.106);
    pub const ZINC_500: Color = Color::from_rgb(0.443, 0.443, 0.478);
    pub const ZINC_400: Color = Color::from_rgb(0.631, 0.631, 0.667);
    pub const ZINC_200: Color = Color::from_rgb(0.894, 0.894, 0.906);
    pub const ZINC_100: Color = Color::from_rgb(0.957, 0.957, 0.961);

    // Brand colors (violet scale)
    pub const VIOLET_400: Color = Color::from_rgb(0.655, 0.545, 0.980);
    pub const VIOLET_500: Color = Color::from_rgb(0.545, 0.361, 0.965);
    pub const VIOLET_600: Color = Color::from_rgb(0.486, 0.227, 0.929);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = VIOLET_500;
    pub const INFO_500: Color = VIOLET_400;
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const GLASS: f32 = 0.05;
    pub const TINT: f32 = 0.1;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.3;
    pub const OVERLAY_STRONG: f32 = 0.6;
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;

    pub const TEXTAREA_HEIGHT: f32 = 140.0;

    pub const CONTENT_MAX_WIDTH: f32 = 960.0;
    pub const TOAST_WIDTH: f32 = 448.0;
    pub const TOAST_PROGRESS_HEIGHT: f32 = 4.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    pub const DISPLAY: f32 = 44.0;

    pub const TITLE_LG: f32 = 30.0;

    pub const TITLE_MD: f32 = 20.0;

    pub const TITLE_SM: f32 = 18.0;

    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Borders and Radii
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
}

pub mod radius {
    pub const LG: f32 = 12.0;
    pub const XL: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadows
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 20.0 },
        blur_radius: 50.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::OVERLAY_STRONG > 0.0 && opacity::OVERLAY_STRONG < 1.0);
};
