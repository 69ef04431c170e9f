//! Per-skill outcomes and run aggregation

use crate::error::MigrateError;

/// Result of one migration attempt on one skill
#[derive(Debug)]
pub enum MigrationOutcome {
    /// The skill file was rewritten
    Migrated,
    /// Dry run: the skill would have been rewritten
    WouldMigrate,
    /// The idempotency marker is already present; nothing to do
    AlreadyMigrated,
    /// The skill could not be migrated
    Failed(MigrateError),
}

/// Aggregated tallies for one pass over the skill set
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub migrated: usize,
    pub skipped: usize,
    pub failed: usize,
    pub total: usize,
}

impl RunSummary {
    /// Fold one outcome into the tallies
    pub fn record(&mut self, outcome: &MigrationOutcome) {
        match outcome {
            MigrationOutcome::Migrated | MigrationOutcome::WouldMigrate => self.migrated += 1,
            MigrationOutcome::AlreadyMigrated => self.skipped += 1,
            MigrationOutcome::Failed(_) => self.failed += 1,
        }
        self.total += 1;
    }

    /// True when any skill in the pass failed
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_tallies() {
        let mut summary = RunSummary::default();
        summary.record(&MigrationOutcome::Migrated);
        summary.record(&MigrationOutcome::WouldMigrate);
        summary.record(&MigrationOutcome::AlreadyMigrated);
        summary.record(&MigrationOutcome::Failed(MigrateError::MissingFile));

        assert_eq!(summary.migrated, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.total, 4);
        assert!(summary.has_failures());
    }

    #[test]
    fn test_all_skipped_is_success() {
        let mut summary = RunSummary::default();
        summary.record(&MigrationOutcome::AlreadyMigrated);
        summary.record(&MigrationOutcome::AlreadyMigrated);
        assert!(!summary.has_failures());
    }
}
