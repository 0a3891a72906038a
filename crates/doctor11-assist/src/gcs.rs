use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::error::AssistError;

/// Inclusive range of a GCS component score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComponentRange {
    pub min: u8,
    pub max: u8,
}

impl ComponentRange {
    pub fn contains(&self, value: u8) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

pub const EYE_RANGE: ComponentRange = ComponentRange { min: 1, max: 4 };
pub const VERBAL_RANGE: ComponentRange = ComponentRange { min: 1, max: 5 };
pub const MOTOR_RANGE: ComponentRange = ComponentRange { min: 1, max: 6 };
pub const TOTAL_RANGE: ComponentRange = ComponentRange { min: 3, max: 15 };

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum GcsComponent {
    Eye,
    Verbal,
    Motor,
}

impl GcsComponent {
    /// Czech label used on the form.
    pub fn label(self) -> &'static str {
        match self {
            GcsComponent::Eye => "Oko",
            GcsComponent::Verbal => "Slovo",
            GcsComponent::Motor => "Pohyb",
        }
    }

    pub fn range(self) -> ComponentRange {
        match self {
            GcsComponent::Eye => EYE_RANGE,
            GcsComponent::Verbal => VERBAL_RANGE,
            GcsComponent::Motor => MOTOR_RANGE,
        }
    }
}

/// Glasgow Coma Scale components. Defaults to a fully conscious 4/5/6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct GcsComponents {
    pub eye: u8,
    pub verbal: u8,
    pub motor: u8,
}

impl Default for GcsComponents {
    fn default() -> Self {
        Self {
            eye: EYE_RANGE.max,
            verbal: VERBAL_RANGE.max,
            motor: MOTOR_RANGE.max,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct GcsViolation {
    pub component: GcsComponent,
    pub value: u8,
    pub expected_range: ComponentRange,
    pub message: String,
}

impl GcsComponents {
    pub fn total(&self) -> u8 {
        self.eye.saturating_add(self.verbal).saturating_add(self.motor)
    }

    /// Every component outside its range.
    pub fn validate(&self) -> Vec<GcsViolation> {
        [
            (GcsComponent::Eye, self.eye),
            (GcsComponent::Verbal, self.verbal),
            (GcsComponent::Motor, self.motor),
        ]
        .into_iter()
        .filter(|(component, value)| !component.range().contains(*value))
        .map(|(component, value)| {
            let range = component.range();
            GcsViolation {
                component,
                value,
                expected_range: range,
                message: format!(
                    "{} score {value} is outside range [{}, {}]",
                    component.label(),
                    range.min,
                    range.max
                ),
            }
        })
        .collect()
    }

    /// Total score, or the first range violation.
    pub fn checked_total(&self) -> Result<u8, AssistError> {
        match self.validate().into_iter().next() {
            Some(violation) => Err(violation.into()),
            None => Ok(self.total()),
        }
    }
}
