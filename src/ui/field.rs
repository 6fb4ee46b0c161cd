use std::collections::HashMap;

use ratatui::prelude::*;

use crate::assets::Image;
use crate::game::Game;
use crate::geometry::Rect as PixelRect;
use crate::sprites::Sprite;

const SHIP_COLOR: Color = Color::Rgb(40, 60, 160);
const ALIEN_COLOR: Color = Color::Rgb(50, 130, 50);

type DotMap = HashMap<(usize, usize), u8>;

pub fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

fn braille_bit(sub_x: usize, sub_y: usize) -> u8 {
    match (sub_x, sub_y) {
        (0, 0) => 0x01,
        (0, 1) => 0x02,
        (0, 2) => 0x04,
        (0, 3) => 0x40,
        (1, 0) => 0x08,
        (1, 1) => 0x10,
        (1, 2) => 0x20,
        (1, 3) => 0x80,
        _ => 0,
    }
}

fn set_dot(map: &mut DotMap, bx: i32, by: i32, bw: i32, bh: i32) {
    if bx < 0 || by < 0 || bx >= bw || by >= bh {
        return;
    }
    let cx = bx as usize / 2;
    let cy = by as usize / 4;
    *map.entry((cx, cy)).or_insert(0) |= braille_bit(bx as usize % 2, by as usize % 4);
}

fn write_layer(grid: &mut [Vec<(char, Style)>], map: &DotMap, color: Color, bg: Color) {
    for (&(cx, cy), &bits) in map {
        if cy < grid.len() && cx < grid[cy].len() && bits != 0 {
            let ch = char::from_u32(0x2800 + bits as u32).unwrap_or(' ');
            grid[cy][cx] = (ch, Style::default().fg(color).bg(bg));
        }
    }
}

/// Maps screen pixels onto braille dots.
struct Scale {
    sx: f32,
    sy: f32,
    bw: i32,
    bh: i32,
}

impl Scale {
    /// Dot-space span of a pixel rect, at least one dot in each direction.
    fn span(&self, rect: PixelRect) -> (i32, i32, i32, i32) {
        let x0 = (rect.left() as f32 * self.sx).floor() as i32;
        let y0 = (rect.top() as f32 * self.sy).floor() as i32;
        let x1 = ((rect.right() as f32 * self.sx).ceil() as i32).max(x0 + 1);
        let y1 = ((rect.bottom() as f32 * self.sy).ceil() as i32).max(y0 + 1);
        (x0, y0, x1, y1)
    }

    /// Stretch `image` over `rect`, or fill it solid with no image.
    fn stamp(&self, map: &mut DotMap, rect: PixelRect, image: Option<&Image>) {
        let (x0, y0, x1, y1) = self.span(rect);
        let (w, h) = ((x1 - x0) as f32, (y1 - y0) as f32);
        for by in y0..y1 {
            for bx in x0..x1 {
                let u = ((bx - x0) as f32 + 0.5) / w;
                let v = ((by - y0) as f32 + 0.5) / h;
                if image.map_or(true, |img| img.sample(u, v)) {
                    set_dot(map, bx, by, self.bw, self.bh);
                }
            }
        }
    }
}

/// The play field as `height` lines of `width` braille cells.
pub fn render_field(game: &Game, width: usize, height: usize) -> Vec<Line<'static>> {
    let settings = game.settings();
    let bw = (width * 2) as i32;
    let bh = (height * 4) as i32;
    let scale = Scale {
        sx: bw as f32 / settings.screen_width as f32,
        sy: bh as f32 / settings.screen_height as f32,
        bw,
        bh,
    };

    let bg = rgb(settings.bg_color);
    let mut grid: Vec<Vec<(char, Style)>> =
        vec![vec![(' ', Style::default().bg(bg)); width]; height];

    // ── Aliens ─────────────────────────────────────────────────────────
    let mut amap = DotMap::new();
    for alien in game.aliens() {
        scale.stamp(&mut amap, alien.rect(), Some(game.alien_image()));
    }
    write_layer(&mut grid, &amap, ALIEN_COLOR, bg);

    // ── Bullets ────────────────────────────────────────────────────────
    let mut bmap = DotMap::new();
    for bullet in game.bullets() {
        scale.stamp(&mut bmap, bullet.rect(), None);
    }
    write_layer(&mut grid, &bmap, rgb(settings.bullet_color), bg);

    // ── Ship ───────────────────────────────────────────────────────────
    let mut smap = DotMap::new();
    scale.stamp(&mut smap, game.ship().rect(), Some(game.ship_image()));
    write_layer(&mut grid, &smap, SHIP_COLOR, bg);

    grid.into_iter()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .into_iter()
                .map(|(ch, style)| Span::styled(String::from(ch), style))
                .collect();
            Line::from(spans)
        })
        .collect()
}

/// Pixel at the centre of cell `cell` when `cells` cells span `pixels`
/// pixels, floored.
pub fn cell_centre(cell: u16, cells: u16, pixels: i32) -> i32 {
    let n = i64::from(cells.max(1));
    ((2 * i64::from(cell) + 1) * i64::from(pixels) / (2 * n)) as i32
}

/// First and one-past-last cell whose centre lies in `[lo, hi)`. Never
/// empty while `cells > 0`.
fn cell_span(lo: i32, hi: i32, cells: u16, pixels: i32) -> (u16, u16) {
    if cells == 0 || pixels <= 0 {
        return (0, 0);
    }
    let n = i64::from(cells);
    let p = i64::from(pixels);
    // First c with (2c + 1) * p >= 2 * edge * n, i.e. centre at or past `edge`.
    let first = |edge: i32| {
        let num = 2 * i64::from(edge) * n - p;
        (-(-num).div_euclid(2 * p)).clamp(0, n)
    };
    let start = first(lo);
    let end = first(hi);
    if end > start {
        (start as u16, end as u16)
    } else {
        let start = start.min(n - 1);
        (start as u16, start as u16 + 1)
    }
}

/// Terminal cells whose centres fall inside a pixel rect drawn into `area`.
pub fn pixel_rect_to_area(game: &Game, rect: PixelRect, area: Rect) -> Rect {
    let settings = game.settings();
    let (x0, x1) = cell_span(rect.left(), rect.right(), area.width, settings.screen_width);
    let (y0, y1) = cell_span(rect.top(), rect.bottom(), area.height, settings.screen_height);
    Rect::new(area.x + x0, area.y + y0, x1 - x0, y1 - y0)
}
