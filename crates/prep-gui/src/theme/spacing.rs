//! Spacing constants for consistent layout throughout the application.
//!
//! All values are in pixels (f32).

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Extra small spacing - tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - small gaps, icon margins
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default padding, standard gaps
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - section padding, major gaps
pub const SPACING_LG: f32 = 24.0;

/// Extra large spacing - page margins
pub const SPACING_XL: f32 = 32.0;

// =============================================================================
// BORDER RADIUS
// =============================================================================

/// Small radius - buttons, inputs
pub const BORDER_RADIUS_SM: f32 = 4.0;

/// Full/pill radius - topic chips
pub const BORDER_RADIUS_FULL: f32 = 9999.0;

// =============================================================================
// BORDER WIDTHS
// =============================================================================

/// Thin border - subtle separators
pub const BORDER_WIDTH_THIN: f32 = 1.0;

/// Medium border - focus rings
pub const BORDER_WIDTH_MEDIUM: f32 = 2.0;

// =============================================================================
// COMPONENT SIZES
// =============================================================================

/// Width of the category sidebar
pub const SIDEBAR_WIDTH: f32 = 260.0;

/// Horizontal padding inside a view-toggle tab
pub const TAB_PADDING_X: f32 = 16.0;

/// Vertical padding inside a view-toggle tab
pub const TAB_PADDING_Y: f32 = 8.0;

/// Horizontal padding inside a topic chip
pub const CHIP_PADDING_X: f32 = 12.0;

/// Vertical padding inside a topic chip
pub const CHIP_PADDING_Y: f32 = 6.0;
