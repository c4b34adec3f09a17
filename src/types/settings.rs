// src/types/settings.rs
//! The operator's per-run selections: how many ideas, in what format, for whom.

use super::ValidationError;
use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

/// Number of content ideas requested per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum IdeaCount {
    #[value(name = "8")]
    Eight,
    #[default]
    #[value(name = "12")]
    Twelve,
    #[value(name = "15")]
    Fifteen,
    #[value(name = "20")]
    Twenty,
}

impl IdeaCount {
    pub const ALLOWED: &'static [u32] = &[8, 12, 15, 20];

    pub fn get(self) -> usize {
        match self {
            Self::Eight => 8,
            Self::Twelve => 12,
            Self::Fifteen => 15,
            Self::Twenty => 20,
        }
    }
}

impl TryFrom<u32> for IdeaCount {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            8 => Ok(Self::Eight),
            12 => Ok(Self::Twelve),
            15 => Ok(Self::Fifteen),
            20 => Ok(Self::Twenty),
            _ => Err(ValidationError::UnsupportedCount {
                value,
                allowed: Self::ALLOWED,
            }),
        }
    }
}

impl FromStr for IdeaCount {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s.trim().parse().map_err(|_| ValidationError::UnknownChoice {
            field: "idea count",
            value: s.to_string(),
        })?;
        Self::try_from(value)
    }
}

impl fmt::Display for IdeaCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Shape the generated ideas should take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ContentFormat {
    #[default]
    SocialMediaPosts,
    PatientEducation,
    HealthTips,
    #[value(alias = "faq")]
    FaqAnswers,
}

impl ContentFormat {
    pub fn label(self) -> &'static str {
        match self {
            Self::SocialMediaPosts => "Social Media Posts",
            Self::PatientEducation => "Patient Education",
            Self::HealthTips => "Health Tips",
            Self::FaqAnswers => "FAQ Answers",
        }
    }
}

impl FromStr for ContentFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s, "content format")
    }
}

impl fmt::Display for ContentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Who the content is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Audience {
    #[default]
    GeneralPatients,
    YoungAdults,
    Parents,
    Seniors,
}

impl Audience {
    pub fn label(self) -> &'static str {
        match self {
            Self::GeneralPatients => "General Patients",
            Self::YoungAdults => "Young Adults",
            Self::Parents => "Parents",
            Self::Seniors => "Seniors",
        }
    }
}

impl FromStr for Audience {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s, "audience")
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts both the CLI value name and the display label ("Health Tips").
fn parse_choice<T: ValueEnum>(input: &str, field: &'static str) -> Result<T, ValidationError> {
    let normalized = input
        .trim()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    T::from_str(&normalized, true).map_err(|_| ValidationError::UnknownChoice {
        field,
        value: input.to_string(),
    })
}

/// Immutable selections for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub count: IdeaCount,
    pub format: ContentFormat,
    pub audience: Audience,
}

impl Settings {
    pub fn new(count: IdeaCount, format: ContentFormat, audience: Audience) -> Self {
        Self {
            count,
            format,
            audience,
        }
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ideas · {} · {}",
            self.count, self.format, self.audience
        )
    }
}
