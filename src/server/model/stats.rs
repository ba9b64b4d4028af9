use crate::model::stats::{CounterDto, StatsDto};

/// Interaction telemetry read back from the key-value store.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stats {
    /// Every dispatched command, component and modal interaction.
    pub total: i64,
    /// Per handler counts named `{kind}:{key}`, e.g. `command:ping`.
    pub interactions: Vec<(String, i64)>,
    /// Failed invocations per handler, named like `interactions`.
    pub errors: Vec<(String, i64)>,
}

impl Stats {
    pub fn into_dto(self) -> StatsDto {
        let to_dto = |(name, count): (String, i64)| CounterDto { name, count };

        StatsDto {
            total: self.total,
            interactions: self.interactions.into_iter().map(to_dto).collect(),
            errors: self.errors.into_iter().map(to_dto).collect(),
        }
    }
}
