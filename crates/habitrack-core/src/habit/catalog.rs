//! Static catalog of predefined habit definitions.
//!
//! The catalog is external collaborator data: the core never mutates it and
//! only reads a definition's `name` when creating a tracked habit.

use super::{HabitCategory, HabitDefinition};

const DEFINITIONS: &[HabitDefinition] = &[
    // Quitting / detox
    HabitDefinition { id: "quit-porn", name: "Quit Porn", category: HabitCategory::Quitting },
    HabitDefinition { id: "quit-vaping", name: "Quit Vaping", category: HabitCategory::Quitting },
    HabitDefinition { id: "quit-smoking", name: "Quit Smoking", category: HabitCategory::Quitting },
    HabitDefinition { id: "quit-alcohol", name: "Quit Alcohol", category: HabitCategory::Quitting },
    HabitDefinition { id: "quit-weed", name: "Quit Weed", category: HabitCategory::Quitting },
    HabitDefinition { id: "quit-caffeine", name: "Quit Caffeine", category: HabitCategory::Quitting },
    HabitDefinition { id: "quit-overspending", name: "Quit Overspending", category: HabitCategory::Quitting },
    HabitDefinition { id: "stop-social-media", name: "Stop Social Media", category: HabitCategory::Quitting },
    HabitDefinition { id: "addiction-counter", name: "General Addiction Counter", category: HabitCategory::Quitting },
    HabitDefinition { id: "detox-counter", name: "Detox Counter", category: HabitCategory::Quitting },
    // Health & fitness
    HabitDefinition { id: "fasting", name: "Fasting", category: HabitCategory::Health },
    HabitDefinition { id: "ranked-gym", name: "Ranked Gym", category: HabitCategory::Health },
    HabitDefinition { id: "weight-loss", name: "Weight Loss", category: HabitCategory::Health },
    HabitDefinition { id: "muscle-gain", name: "Muscle Gain", category: HabitCategory::Health },
    HabitDefinition { id: "healthy-eating", name: "Healthy Eating", category: HabitCategory::Health },
    HabitDefinition { id: "ranked-testo", name: "Ranked Testo Maxing", category: HabitCategory::Health },
    // Mental health
    HabitDefinition { id: "anxiety-relief", name: "Anxiety Relief", category: HabitCategory::Mental },
    HabitDefinition { id: "depression", name: "Manage Depression", category: HabitCategory::Mental },
    HabitDefinition { id: "mens-mental-health", name: "Men's Mental Health", category: HabitCategory::Mental },
    HabitDefinition { id: "mindfulness", name: "Mindfulness & Meditation", category: HabitCategory::Mental },
    HabitDefinition { id: "gratitude", name: "Gratitude Journal", category: HabitCategory::Mental },
    HabitDefinition { id: "self-love", name: "Self-Love & Confidence", category: HabitCategory::Mental },
    HabitDefinition { id: "stress-relief", name: "Stress Relief", category: HabitCategory::Mental },
    // Productivity
    HabitDefinition { id: "procrastination", name: "Beat Procrastination", category: HabitCategory::Productivity },
    HabitDefinition { id: "build-discipline", name: "Build Discipline", category: HabitCategory::Productivity },
    HabitDefinition { id: "focus-deep-work", name: "Focus & Deep Work", category: HabitCategory::Productivity },
    HabitDefinition { id: "study-habits", name: "Study Habits", category: HabitCategory::Productivity },
    // Lifestyle
    HabitDefinition { id: "pregnancy", name: "Pregnancy Tracker", category: HabitCategory::Lifestyle },
    HabitDefinition { id: "daily-motivation", name: "Daily Motivation", category: HabitCategory::Lifestyle },
    HabitDefinition { id: "morning-routine", name: "Morning Routine", category: HabitCategory::Lifestyle },
    HabitDefinition { id: "night-routine", name: "Night Routine", category: HabitCategory::Lifestyle },
    HabitDefinition { id: "relationship", name: "Relationship Goals", category: HabitCategory::Lifestyle },
];

/// All predefined definitions, in catalog order (grouped by category).
pub fn definitions() -> &'static [HabitDefinition] {
    DEFINITIONS
}

/// Look up a definition by its catalog id.
pub fn find(id: &str) -> Option<&'static HabitDefinition> {
    DEFINITIONS.iter().find(|d| d.id == id)
}

/// Definitions belonging to one category, in catalog order.
pub fn by_category(category: HabitCategory) -> impl Iterator<Item = &'static HabitDefinition> {
    DEFINITIONS.iter().filter(move |d| d.category == category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        let mut ids: Vec<_> = definitions().iter().map(|d| d.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), definitions().len());
    }

    #[test]
    fn every_category_has_definitions() {
        for category in HabitCategory::ALL {
            assert!(by_category(category).next().is_some(), "{category:?}");
        }
    }

    #[test]
    fn find_resolves_known_ids() {
        let def = find("quit-caffeine").unwrap();
        assert_eq!(def.name, "Quit Caffeine");
        assert_eq!(def.category, HabitCategory::Quitting);
        assert!(find("does-not-exist").is_none());
    }
}
