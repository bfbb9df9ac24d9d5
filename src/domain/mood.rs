//! Mood catalog - fixed reference set of selectable moods

use serde::{Deserialize, Serialize};

/// A selectable mood tag with display data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mood {
    pub id: u32,
    pub name: String,
    pub icon: String,
}

impl Mood {
    pub fn new(id: u32, name: &str, icon: &str) -> Self {
        Mood {
            id,
            name: name.to_string(),
            icon: icon.to_string(),
        }
    }
}

// Catalog order is display order; ids are stable and never reused.
const CATALOG: &[(u32, &str, &str)] = &[
    (1, "Happy", "😊"),
    (2, "Loved", "🥰"),
    (3, "Stressed", "😫"),
    (4, "Sad", "😔"),
    (5, "Sleepless", "😴"),
    (6, "Money-minded", "💰"),
    (7, "Free", "🦋"),
    (8, "Tired", "😩"),
    (9, "Motivated", "💪"),
    (10, "Anxious", "😰"),
    (11, "Creative", "🎨"),
    (12, "Serene", "🧘"),
    (13, "Enthusiastic", "🔥"),
    (14, "Curious", "🤔"),
    (15, "Attentive", "👀"),
    (16, "Calm", "🙏"),
    (17, "Excited", "🎉"),
    (18, "Silly", "🤪"),
    (19, "Inspired", "💫"),
    (20, "Proud", "👑"),
    (21, "Fearful", "😨"),
    (22, "Impatient", "🕰️"),
    (23, "Joyful", "😃"),
    (24, "Worried", "😟"),
    (25, "Cheerful", "😁"),
    (26, "Ambitious", "🚀"),
    (27, "Emotional", "💖"),
    (28, "Rebellious", "🤘"),
    (29, "Peaceful", "🕊️"),
];

/// The full mood catalog in display order
pub fn catalog() -> Vec<Mood> {
    CATALOG
        .iter()
        .map(|(id, name, icon)| Mood::new(*id, name, icon))
        .collect()
}

/// Look up a mood by catalog id.
/// Callers must tolerate `None` (skip the mood) rather than fail the
/// whole operation.
pub fn find_by_id(id: u32) -> Option<Mood> {
    CATALOG
        .iter()
        .find(|(mood_id, _, _)| *mood_id == id)
        .map(|(id, name, icon)| Mood::new(*id, name, icon))
}
