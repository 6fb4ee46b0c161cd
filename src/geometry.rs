/// Axis-aligned rectangle in screen pixels, y growing downwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn centerx(&self) -> i32 {
        self.x + self.width / 2
    }

    pub fn centery(&self) -> i32 {
        self.y + self.height / 2
    }

    pub fn center(&self) -> (i32, i32) {
        (self.centerx(), self.centery())
    }

    pub fn midtop(&self) -> (i32, i32) {
        (self.centerx(), self.top())
    }

    pub fn midbottom(&self) -> (i32, i32) {
        (self.centerx(), self.bottom())
    }

    pub fn set_center(&mut self, (cx, cy): (i32, i32)) {
        self.x = cx - self.width / 2;
        self.y = cy - self.height / 2;
    }

    pub fn set_midtop(&mut self, (cx, top): (i32, i32)) {
        self.x = cx - self.width / 2;
        self.y = top;
    }

    pub fn set_midbottom(&mut self, (cx, bottom): (i32, i32)) {
        self.x = cx - self.width / 2;
        self.y = bottom - self.height;
    }

    /// Strict overlap: rects that only share an edge do not collide.
    pub fn colliderect(&self, other: &Rect) -> bool {
        self.width > 0
            && self.height > 0
            && other.width > 0
            && other.height > 0
            && self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.left() && x < self.right() && y >= self.top() && y < self.bottom()
    }
}
