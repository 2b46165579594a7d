// Last known pointer position over the page. Kept up to date by the mouse
// listeners, but nothing in the field reacts to it yet.

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerState {
    pos: Option<[f64; 2]>,
    pub radius: f64,
}

impl PointerState {
    pub fn new(radius: f64) -> Self {
        PointerState { pos: None, radius }
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.pos = Some([x, y]);
    }

    pub fn leave(&mut self) {
        self.pos = None;
    }

    pub fn position(&self) -> Option<[f64; 2]> {
        self.pos
    }
}
