// src/models/dimension.rs

use serde::{Deserialize, Serialize};

/// The six leadership dimensions scored by the assessment.
///
/// The set is closed: question weights can only reference these variants,
/// so an unknown dimension code is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// Strategic Leadership
    SL,
    /// Emotional Intelligence
    EI,
    /// Innovation
    IN,
    /// Performance Management
    PM,
    /// Communication
    CO,
    /// Ethics
    ET,
}

impl Dimension {
    /// Fixed display order, used for results and the chart axes.
    pub const ALL: [Dimension; 6] = [
        Dimension::SL,
        Dimension::EI,
        Dimension::IN,
        Dimension::PM,
        Dimension::CO,
        Dimension::ET,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Dimension::SL => "Strategic Leadership",
            Dimension::EI => "Emotional Intelligence",
            Dimension::IN => "Innovation",
            Dimension::PM => "Performance Management",
            Dimension::CO => "Communication",
            Dimension::ET => "Ethics",
        }
    }

    /// Canned development advice shown alongside the dimension's result.
    pub fn recommendation(self) -> &'static str {
        match self {
            Dimension::SL => {
                "Attend strategic planning workshops and read case studies on long-range leadership."
            }
            Dimension::EI => {
                "Practice mindfulness and self-awareness exercises, and train active listening."
            }
            Dimension::IN => {
                "Join brainstorming sessions and study successful innovation initiatives."
            }
            Dimension::PM => {
                "Learn project management methodologies and sharpen follow-up and evaluation skills."
            }
            Dimension::CO => {
                "Take courses in effective communication and practice delivering presentations."
            }
            Dimension::ET => {
                "Study professional ethics and work through ethical case analyses."
            }
        }
    }
}

/// DTO for listing the dimension catalog.
#[derive(Debug, Serialize)]
pub struct DimensionInfo {
    pub code: Dimension,
    pub name: &'static str,
}

impl From<Dimension> for DimensionInfo {
    fn from(code: Dimension) -> Self {
        Self {
            code,
            name: code.display_name(),
        }
    }
}
