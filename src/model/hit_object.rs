use std::cmp::Ordering;

pub use rosu_map::util::Pos;

/// All hitobject related data required for difficulty calculation.
#[derive(Clone, Debug, PartialEq)]
pub struct HitObject {
    pub pos: Pos,
    pub start_time: f64,
    pub kind: HitObjectKind,
}

impl HitObject {
    /// Create a new [`HitObject`].
    pub const fn new(pos: Pos, start_time: f64, kind: HitObjectKind) -> Self {
        Self {
            pos,
            start_time,
            kind,
        }
    }

    /// Whether the hitobject is a circle.
    pub const fn is_circle(&self) -> bool {
        matches!(&self.kind, HitObjectKind::Circle)
    }

    /// Whether the hitobject is a slider.
    pub const fn is_slider(&self) -> bool {
        matches!(&self.kind, HitObjectKind::Slider(_))
    }

    /// Whether the hitobject is a spinner.
    pub const fn is_spinner(&self) -> bool {
        matches!(&self.kind, HitObjectKind::Spinner)
    }

    /// Whether the hitobject is a hold note.
    pub const fn is_hold_note(&self) -> bool {
        matches!(&self.kind, HitObjectKind::Hold)
    }

    /// The position at which the cursor rests once the object is done.
    pub const fn end_pos(&self) -> Pos {
        match &self.kind {
            HitObjectKind::Slider(slider) => slider.end_pos,
            HitObjectKind::Circle
            | HitObjectKind::Spinner
            | HitObjectKind::Hold
            | HitObjectKind::Marker => self.pos,
        }
    }

    /// How much combo the object awards.
    ///
    /// Returns `None` if a slider has too many repeats to be counted.
    pub fn combo_weight(&self) -> Option<u32> {
        match &self.kind {
            HitObjectKind::Circle | HitObjectKind::Spinner | HitObjectKind::Hold => Some(1),
            // Head, one per repeat, and tail
            HitObjectKind::Slider(slider) => u32::try_from(slider.repeats).ok()?.checked_add(2),
            HitObjectKind::Marker => Some(0),
        }
    }
}

impl PartialOrd for HitObject {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.start_time.partial_cmp(&other.start_time)
    }
}

/// Additional data for a [`HitObject`].
///
/// Only what affects distances and combo is kept; durations play no role.
#[derive(Clone, Debug, PartialEq)]
pub enum HitObjectKind {
    Circle,
    Slider(Slider),
    Spinner,
    Hold,
    /// A timing marker that awards no combo and carries no strain.
    Marker,
}

/// A slider.
///
/// The path itself is not needed for difficulty calculation, only where it
/// ends and how long it is.
#[derive(Clone, Debug, PartialEq)]
pub struct Slider {
    pub end_pos: Pos,
    pub path_len: f64,
    pub repeats: usize,
}

impl Slider {
    /// The amount of spans of the slider.
    pub const fn span_count(&self) -> usize {
        self.repeats.saturating_add(1)
    }

    /// The distance travelled along the path across all spans.
    pub fn total_path_len(&self) -> f64 {
        self.path_len * self.span_count() as f64
    }
}
