mod clock_face;
mod status_bar;

pub use clock_face::ClockFaceWidget;
pub use status_bar::StatusBarWidget;
