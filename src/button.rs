use crate::geometry::Rect;
use crate::settings::Settings;

/// A clickable, centred button on the title screen.
#[derive(Clone, Debug)]
pub struct Button {
    pub rect: Rect,
    pub msg: String,
    pub button_color: (u8, u8, u8),
    pub text_color: (u8, u8, u8),
}

impl Button {
    pub fn new(settings: &Settings, msg: &str) -> Self {
        let mut rect = Rect::new(0, 0, 200, 50);
        rect.set_center((settings.screen_width / 2, settings.screen_height / 2));
        Self {
            rect,
            msg: msg.to_string(),
            button_color: (0, 255, 0),
            text_color: (255, 255, 255),
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.rect.contains_point(x, y)
    }
}
