#![allow(dead_code)]

use strain_difficulty::{HitObject, HitObjectKind, Pos, Slider};

pub fn circle(x: f32, y: f32, start_time: f64) -> HitObject {
    HitObject::new(Pos::new(x, y), start_time, HitObjectKind::Circle)
}

pub fn slider(x: f32, y: f32, start_time: f64, end: (f32, f32), repeats: usize) -> HitObject {
    let end_pos = Pos::new(end.0, end.1);
    let path_len = f64::from((end_pos - Pos::new(x, y)).length());

    HitObject::new(
        Pos::new(x, y),
        start_time,
        HitObjectKind::Slider(Slider {
            end_pos,
            path_len,
            repeats,
        }),
    )
}

pub fn spinner(start_time: f64) -> HitObject {
    HitObject::new(Pos::new(256.0, 192.0), start_time, HitObjectKind::Spinner)
}

/// Alternating jumps between two points, one object every `interval` ms.
pub fn jumps(count: u32, interval: f64, spacing: f32) -> Vec<HitObject> {
    (0..count)
        .map(|i| {
            let x = if i % 2 == 0 { 0.0 } else { spacing };

            circle(x, 0.0, f64::from(i) * interval)
        })
        .collect()
}
