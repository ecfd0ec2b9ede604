/// A pixel position. `(0, 0)` is the top-left pixel of the frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}
