use std::ops::RangeInclusive;

/// Placeholder shown while no user content has been entered. Drop handling
/// compares the buffer against it by value to decide replace-vs-append.
pub const DEFAULT_TEXT: &str = "Ingresa o arrastra aquí cualquier texto";

/// Line appended to the buffer when a dropped payload cannot be read.
pub const DROP_ERROR_TEXT: &str = "Error al cargar el texto";

/// Fixed window size in points.
pub const WINDOW_SIZE: (f32, f32) = (450.0, 300.0);

/// Height of the top strip used to drag the window around.
pub const DRAG_STRIP_HEIGHT: f32 = 30.0;

/// Opacity slider range, in percent. The window never goes fully invisible.
pub const OPACITY_RANGE: RangeInclusive<u8> = 30..=100;

/// Font size slider range, in points.
pub const FONT_RANGE: RangeInclusive<u8> = 10..=40;

pub const DEFAULT_OPACITY_PCT: u8 = 90;
pub const DEFAULT_FONT_SIZE: u8 = 14;
