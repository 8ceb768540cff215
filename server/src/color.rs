use rand::Rng;

/// Uniformly random `#RRGGBB` color. Participants may end up with the same one.
pub fn random_color() -> String {
    let value: u32 = rand::rng().random_range(0..=0xFF_FFFF);
    format!("#{:06X}", value)
}
