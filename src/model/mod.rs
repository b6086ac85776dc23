/// Hitobject types consumed by the difficulty calculation.
pub mod hit_object;
