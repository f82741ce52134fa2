//! Athlete profile and the sport catalog it is validated against.

use std::fmt;

use crate::domain::AppError;

pub const MIN_AGE: u8 = 10;
pub const MAX_AGE: u8 = 25;
pub const DEFAULT_AGE: u8 = 15;

/// Positions offered for sports without a dedicated list.
pub const GENERIC_POSITIONS: [&str; 4] = ["General Player", "Attacker", "Defender", "All-rounder"];

/// Sports offered by the profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sport {
    Football,
    Cricket,
    Basketball,
    Athletics,
    Volleyball,
    Tennis,
    Badminton,
    Swimming,
    Hockey,
}

impl Sport {
    /// All sports in form order.
    pub const ALL: [Sport; 9] = [
        Sport::Football,
        Sport::Cricket,
        Sport::Basketball,
        Sport::Athletics,
        Sport::Volleyball,
        Sport::Tennis,
        Sport::Badminton,
        Sport::Swimming,
        Sport::Hockey,
    ];

    /// Human-readable name used in prompts and history.
    pub fn display_name(&self) -> &'static str {
        match self {
            Sport::Football => "Football/Soccer",
            Sport::Cricket => "Cricket",
            Sport::Basketball => "Basketball",
            Sport::Athletics => "Athletics",
            Sport::Volleyball => "Volleyball",
            Sport::Tennis => "Tennis",
            Sport::Badminton => "Badminton",
            Sport::Swimming => "Swimming",
            Sport::Hockey => "Hockey",
        }
    }

    /// Parse a sport from its display name, case-insensitively.
    ///
    /// `football` and `soccer` are accepted as shorthands for Football/Soccer.
    pub fn from_name(name: &str) -> Result<Sport, AppError> {
        let normalized = name.trim().to_lowercase();
        if normalized == "football" || normalized == "soccer" {
            return Ok(Sport::Football);
        }
        Sport::ALL
            .into_iter()
            .find(|sport| sport.display_name().to_lowercase() == normalized)
            .ok_or_else(|| AppError::UnknownSport(name.to_string()))
    }

    /// Positions selectable for this sport.
    pub fn positions(&self) -> &'static [&'static str] {
        match self {
            Sport::Football => {
                &["Goalkeeper", "Defender", "Midfielder", "Forward/Striker", "Winger"]
            }
            Sport::Cricket => {
                &["Batsman", "Bowler (Fast)", "Bowler (Spin)", "All-rounder", "Wicket-keeper"]
            }
            Sport::Basketball => {
                &["Point Guard", "Shooting Guard", "Small Forward", "Power Forward", "Center"]
            }
            Sport::Athletics => {
                &["Sprinter", "Middle Distance", "Long Distance", "Jumper", "Thrower"]
            }
            Sport::Volleyball
            | Sport::Tennis
            | Sport::Badminton
            | Sport::Swimming
            | Sport::Hockey => &GENERIC_POSITIONS,
        }
    }

    /// Whether the sport has its own position list instead of the generic one.
    pub fn has_dedicated_positions(&self) -> bool {
        self.positions() != GENERIC_POSITIONS.as_slice()
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Gender options offered by the profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
    Unspecified,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Unspecified];

    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Unspecified => "Prefer not to say",
        }
    }

    pub fn from_name(name: &str) -> Result<Gender, AppError> {
        match name.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            "prefer not to say" | "unspecified" | "none" => Ok(Gender::Unspecified),
            _ => Err(AppError::invalid_input(
                "gender",
                format!("'{}' is not one of Male, Female, Prefer not to say", name),
            )),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Training experience brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
    Elite,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 4] = [
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Advanced,
        ExperienceLevel::Elite,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Beginner (0-1 years)",
            ExperienceLevel::Intermediate => "Intermediate (1-3 years)",
            ExperienceLevel::Advanced => "Advanced (3-5 years)",
            ExperienceLevel::Elite => "Elite (5+ years)",
        }
    }

    /// Parse either the bare level name or the full label with its year range.
    pub fn from_name(name: &str) -> Result<ExperienceLevel, AppError> {
        let normalized = name.trim().to_lowercase();
        ExperienceLevel::ALL
            .into_iter()
            .find(|level| {
                let label = level.display_name().to_lowercase();
                label == normalized || label.split(' ').next() == Some(normalized.as_str())
            })
            .ok_or_else(|| {
                AppError::invalid_input(
                    "experience",
                    format!("'{}' is not one of Beginner, Intermediate, Advanced, Elite", name),
                )
            })
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Attributes shared by every coaching request.
///
/// Construct through [`AthleteProfile::new`], which enforces the age range and
/// that the position belongs to the sport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AthleteProfile {
    sport: Sport,
    age: u8,
    gender: Gender,
    position: String,
    experience: ExperienceLevel,
}

impl AthleteProfile {
    pub fn new(
        sport: Sport,
        age: u8,
        gender: Gender,
        position: &str,
        experience: ExperienceLevel,
    ) -> Result<Self, AppError> {
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(AppError::AgeOutOfRange(age));
        }

        let position = sport
            .positions()
            .iter()
            .find(|candidate| candidate.eq_ignore_ascii_case(position.trim()))
            .ok_or_else(|| AppError::InvalidPosition {
                sport: sport.display_name().to_string(),
                position: position.to_string(),
                available: sport.positions().join(", "),
            })?;

        Ok(Self { sport, age, gender, position: position.to_string(), experience })
    }

    pub fn sport(&self) -> Sport {
        self.sport
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn experience(&self) -> ExperienceLevel {
        self.experience
    }
}
