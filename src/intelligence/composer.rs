// ABOUTME: Deterministic exercise selection for each session skeleton slot
// ABOUTME: Equipment-gated strength and power banks plus sport-keyed conditioning with logged fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GRIT Athlete Performance

//! Session and exercise composition.
//!
//! Selection is fully deterministic: identical inputs always produce
//! identical exercise lists, which keeps plans reproducible and testable.
//! Warmup and cooldown are fixed generic pairs; the main set branches on
//! session kind, equipment access, and sport. Unrecognized sports never fail
//! generation: they take an explicit, logged fallback to a generic bank.

use tracing::debug;

use crate::models::{EquipmentTier, Exercise, FocusArea, SessionKind, Sport};

use super::periodization::SessionTemplate;

/// Warmup, main, and cooldown exercise lists for one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedExercises {
    /// Generic preparation work
    pub warmup: Vec<Exercise>,
    /// The main working set
    pub main: Vec<Exercise>,
    /// Generic recovery work
    pub cooldown: Vec<Exercise>,
}

/// Loading available for strength and power work
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GymAccess {
    /// Barbells and racks
    Barbell,
    /// Dumbbells and bands only
    Dumbbell,
    /// No equipment
    Bodyweight,
}

impl GymAccess {
    fn from_tiers(tiers: &[EquipmentTier]) -> Self {
        let best = tiers.iter().copied().max();
        match best {
            Some(tier) if tier.has_barbell() => Self::Barbell,
            Some(EquipmentTier::HomeGym) => Self::Dumbbell,
            _ => Self::Bodyweight,
        }
    }
}

/// Deterministic session/exercise composer
#[derive(Debug, Clone, Copy, Default)]
pub struct ExerciseComposer;

impl ExerciseComposer {
    /// Create a composer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Compose the exercise lists for one skeleton slot
    #[must_use]
    pub fn compose(
        &self,
        template: &SessionTemplate,
        sport: &Sport,
        position: Option<&str>,
        equipment: &[EquipmentTier],
    ) -> ComposedExercises {
        let access = GymAccess::from_tiers(equipment);
        let main = match template.kind {
            SessionKind::Strength => strength_main(template.focus, access),
            SessionKind::Conditioning => conditioning_main(sport),
            SessionKind::Skill => skill_main(sport, position),
            SessionKind::Power => power_main(access),
            SessionKind::Speed => speed_main(),
            SessionKind::Recovery => recovery_main(),
            SessionKind::Sport => sport_main(sport),
        };

        ComposedExercises {
            warmup: warmup(),
            main,
            cooldown: cooldown(),
        }
    }
}

/// Fixed, sport-agnostic warmup pair
fn warmup() -> Vec<Exercise> {
    vec![
        Exercise::new("Dynamic Stretching Series", 1, "5 minutes", 0),
        Exercise::new("Sport Movement Prep", 1, "5 minutes", 0)
            .with_notes("Build from easy to brisk"),
    ]
}

/// Fixed, sport-agnostic cooldown pair
fn cooldown() -> Vec<Exercise> {
    vec![
        Exercise::new("Static Stretching", 1, "5 minutes", 0),
        Exercise::new("Foam Rolling", 1, "5 minutes", 0)
            .with_notes("Slow passes over worked muscle groups"),
    ]
}

fn strength_main(focus: &[FocusArea], access: GymAccess) -> Vec<Exercise> {
    match access {
        GymAccess::Barbell => {
            // No focus match falls back to a chest + legs combination.
            let areas: &[FocusArea] = if focus.is_empty() {
                &[FocusArea::Chest, FocusArea::Legs]
            } else {
                focus
            };
            areas.iter().flat_map(|&area| barbell_bank(area)).collect()
        }
        GymAccess::Dumbbell => dumbbell_circuit(),
        GymAccess::Bodyweight => bodyweight_circuit(),
    }
}

/// Barbell/loaded exercise bank, two fixed movements per focus area
fn barbell_bank(area: FocusArea) -> Vec<Exercise> {
    match area {
        FocusArea::Chest => vec![
            Exercise::new("Barbell Bench Press", 4, "6-8", 180).with_weight("75-85% 1RM"),
            Exercise::new("Incline Dumbbell Press", 3, "8-10", 120).with_weight("70-75% 1RM"),
        ],
        FocusArea::Back => vec![
            Exercise::new("Barbell Row", 4, "6-8", 180).with_weight("75-80% 1RM"),
            Exercise::new("Weighted Pull-Up", 3, "6-10", 150)
                .with_weight("Bodyweight plus load as able"),
        ],
        FocusArea::Legs => vec![
            Exercise::new("Back Squat", 4, "5-8", 210).with_weight("75-85% 1RM"),
            Exercise::new("Romanian Deadlift", 3, "8-10", 150).with_weight("65-75% 1RM"),
        ],
        FocusArea::Shoulders => vec![
            Exercise::new("Overhead Press", 4, "6-8", 180).with_weight("70-80% 1RM"),
            Exercise::new("Dumbbell Lateral Raise", 3, "12-15", 90),
        ],
        FocusArea::Core => vec![
            Exercise::new("Weighted Plank", 3, "45-60 seconds", 90),
            Exercise::new("Hanging Leg Raise", 3, "10-15", 90),
        ],
    }
}

/// Dumbbell-only circuit for home gym setups
fn dumbbell_circuit() -> Vec<Exercise> {
    vec![
        Exercise::new("Goblet Squat", 4, "10-12", 90).with_weight("Heaviest dumbbell available"),
        Exercise::new("Dumbbell Bench Press", 4, "8-12", 90),
        Exercise::new("Single-Arm Dumbbell Row", 3, "10-12 per side", 75),
        Exercise::new("Dumbbell Romanian Deadlift", 3, "10-12", 90),
        Exercise::new("Dumbbell Shoulder Press", 3, "8-12", 75),
    ]
}

/// Calisthenics circuit when no equipment is available
fn bodyweight_circuit() -> Vec<Exercise> {
    vec![
        Exercise::new("Push-Up", 4, "12-20", 60),
        Exercise::new("Bulgarian Split Squat", 3, "10-15 per side", 75),
        Exercise::new("Inverted Row or Towel Row", 3, "8-15", 75),
        Exercise::new("Single-Leg Glute Bridge", 3, "12-15 per side", 60),
        Exercise::new("Pike Push-Up", 3, "8-12", 75),
        Exercise::new("Hollow Body Hold", 3, "30-45 seconds", 60),
    ]
}

/// Sport-keyed conditioning templates with a generic fallback
fn conditioning_main(sport: &Sport) -> Vec<Exercise> {
    match sport {
        Sport::Football => vec![
            Exercise::new("Sled Push Intervals", 6, "20 yards", 90)
                .with_notes("Drive phase mechanics under load"),
            Exercise::new("5-10-5 Pro Agility Shuttle", 6, "1 rep", 60),
            Exercise::new("Gassers", 4, "sideline to sideline x2", 120),
        ],
        Sport::Basketball => vec![
            Exercise::new("Full-Court Sprint Intervals", 8, "1 length", 45),
            Exercise::new("Defensive Slide Circuit", 4, "30 seconds", 60),
            Exercise::new("Suicide Runs", 4, "1 rep", 90),
        ],
        Sport::Soccer => vec![
            Exercise::new("Small-Sided Game Intervals", 4, "4 minutes", 120)
                .with_notes("High tempo, touch-limited"),
            Exercise::new("Box-to-Box Runs", 6, "1 rep", 75),
            Exercise::new("Repeated Sprint Ability", 2, "6 x 30 meters", 180),
        ],
        Sport::Other(name) => {
            // Never fail for an unrecognized sport; substitute the generic
            // bank and make the branch observable.
            debug!(sport = %name, "no sport-specific conditioning bank, using generic template");
            vec![
                Exercise::new("Interval Runs", 6, "400 meters", 90),
                Exercise::new("Agility Ladder Circuit", 4, "45 seconds", 60),
                Exercise::new("Medicine Ball Slams", 4, "10", 60),
            ]
        }
    }
}

/// Sport- and position-interpolated skill work
fn skill_main(sport: &Sport, position: Option<&str>) -> Vec<Exercise> {
    let position_block = position.map_or_else(
        || format!("{sport} Fundamentals"),
        |p| format!("{p} Position Work"),
    );
    vec![
        Exercise::new(format!("{sport} Technical Drills"), 4, "5 minutes", 60),
        Exercise::new(position_block, 3, "8 minutes", 90),
        Exercise::new("Decision-Making Drills", 3, "5 minutes", 60)
            .with_notes("Add defenders or constraints as skills stabilize"),
        Exercise::new("Film Study & Visualization", 1, "10 minutes", 0),
    ]
}

/// Power bank, gated on loaded versus unloaded work
fn power_main(access: GymAccess) -> Vec<Exercise> {
    match access {
        GymAccess::Barbell => vec![
            Exercise::new("Power Clean", 5, "3", 180).with_weight("70-80% 1RM"),
            Exercise::new("Trap Bar Jump", 4, "3", 150).with_weight("30-40% 1RM"),
            Exercise::new("Box Jump", 4, "5", 120),
            Exercise::new("Rotational Medicine Ball Throw", 4, "6 per side", 90),
        ],
        GymAccess::Dumbbell | GymAccess::Bodyweight => vec![
            Exercise::new("Box Jump or Tuck Jump", 5, "5", 120),
            Exercise::new("Broad Jump", 4, "4", 120),
            Exercise::new("Split Jump", 4, "6 per side", 90),
            Exercise::new("Plyometric Push-Up", 4, "6", 90),
            Exercise::new("Bounding", 3, "20 meters", 120),
        ],
    }
}

/// Fixed sprint/agility bank, equipment-independent
fn speed_main() -> Vec<Exercise> {
    vec![
        Exercise::new("Sprint Accelerations", 6, "20 meters", 90),
        Exercise::new("Flying Sprints", 4, "30 meters", 120),
        Exercise::new("Agility Ladder Patterns", 4, "30 seconds", 60),
        Exercise::new("Cone Cut Drills", 5, "1 rep", 75),
        Exercise::new("Resisted Sprints", 4, "15 meters", 120)
            .with_notes("Use a hill if no sled is available"),
    ]
}

/// Fixed low-intensity recovery bank
fn recovery_main() -> Vec<Exercise> {
    vec![
        Exercise::new("Yoga Flow", 1, "20 minutes", 0),
        Exercise::new("Foam Rolling Sequence", 1, "10 minutes", 0),
        Exercise::new("Easy Cardio", 1, "15 minutes", 0).with_notes("Zone 1, conversational"),
        Exercise::new("Mobility Circuit", 2, "8 per side", 45),
        Exercise::new("Breathing Work", 1, "5 minutes", 0).with_notes("Slow nasal breathing"),
    ]
}

/// Game-simulation work for `sport` sessions
fn sport_main(sport: &Sport) -> Vec<Exercise> {
    vec![
        Exercise::new(format!("{sport} Scrimmage"), 1, "20 minutes", 180)
            .with_notes("Full rules, game tempo"),
        Exercise::new("Situational Drills", 4, "4 minutes", 90)
            .with_notes("Rehearse late-game scenarios"),
        Exercise::new("Game-Tempo Conditioning", 3, "3 minutes", 120),
    ]
}
