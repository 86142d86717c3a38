use serde::{Deserialize, Serialize};

// Signed so negative upstream counts reach `sanitize` instead of failing to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContributorSignalInput {
    #[serde(default, alias = "privilegedEventCount")]
    pub privileged_event_count: i64,
    #[serde(default, alias = "totalEventCount")]
    pub total_event_count: i64,
    #[serde(default, alias = "uniqueEventTypeCount")]
    pub unique_event_type_count: i64,
    #[serde(default, alias = "detectionMethodCount")]
    pub detection_method_count: i64,
    #[serde(default, alias = "daysSinceLastActivity")]
    pub days_since_last_activity: i64,
    #[serde(default, alias = "daysSinceFirstActivity")]
    pub days_since_first_activity: i64,
    #[serde(default, alias = "activitySpreadDays")]
    pub activity_spread_days: i64,
}

// privileged <= total, spread <= first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContributorSignals {
    pub privileged_event_count: u64,
    pub total_event_count: u64,
    pub unique_event_type_count: u64,
    pub detection_method_count: u64,
    pub days_since_last_activity: u64,
    pub days_since_first_activity: u64,
    pub activity_spread_days: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Adjustment {
    pub field: &'static str,
    pub from: i64,
    pub to: u64,
}

impl std::fmt::Display for Adjustment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} clamped from {} to {}", self.field, self.from, self.to)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitized {
    pub signals: ContributorSignals,
    pub adjustments: Vec<Adjustment>,
}

impl ContributorSignalInput {
    pub fn sanitize(&self) -> Sanitized {
        let mut adjustments = Vec::new();
        let mut non_negative = |field: &'static str, value: i64| -> u64 {
            if value < 0 {
                adjustments.push(Adjustment {
                    field,
                    from: value,
                    to: 0,
                });
                0
            } else {
                value as u64
            }
        };

        let total = non_negative("total_event_count", self.total_event_count);
        let privileged = non_negative("privileged_event_count", self.privileged_event_count);
        let unique_types = non_negative("unique_event_type_count", self.unique_event_type_count);
        let methods = non_negative("detection_method_count", self.detection_method_count);
        let last = non_negative("days_since_last_activity", self.days_since_last_activity);
        let first = non_negative("days_since_first_activity", self.days_since_first_activity);
        let spread = non_negative("activity_spread_days", self.activity_spread_days);

        let privileged = if privileged > total {
            adjustments.push(Adjustment {
                field: "privileged_event_count",
                from: self.privileged_event_count,
                to: total,
            });
            total
        } else {
            privileged
        };

        let spread = if spread > first {
            adjustments.push(Adjustment {
                field: "activity_spread_days",
                from: self.activity_spread_days,
                to: first,
            });
            first
        } else {
            spread
        };

        Sanitized {
            signals: ContributorSignals {
                privileged_event_count: privileged,
                total_event_count: total,
                unique_event_type_count: unique_types,
                detection_method_count: methods,
                days_since_last_activity: last,
                days_since_first_activity: first,
                activity_spread_days: spread,
            },
            adjustments,
        }
    }
}
