/// View layer
///
/// - Buttons, category picker, status line and time-travel slider (controls.rs)
/// - Picture grid (gallery.rs)
/// - Downloaded picture cache (previews.rs)

pub mod controls;
pub mod gallery;
pub mod previews;
