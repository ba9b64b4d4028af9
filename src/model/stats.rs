use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// A single telemetry counter, e.g. `command:ping` → 42.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CounterDto {
    pub name: String,
    pub count: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct StatsDto {
    pub total: i64,
    pub interactions: Vec<CounterDto>,
    pub errors: Vec<CounterDto>,
}
