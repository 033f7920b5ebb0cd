//! Deploy and destroy plans computed from the observed table state (pure).

use super::config::{GsiConfig, TableConfig};

/// Observed state of an existing table.
#[derive(Debug, Clone)]
pub struct TableState {
    pub status: TableStatus,
    pub gsis: Vec<GsiState>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    Active,
    Creating,
    Updating,
    Deleting,
}

#[derive(Debug, Clone)]
pub struct GsiState {
    pub name: String,
    pub status: GsiStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GsiStatus {
    Active,
    Creating,
    Updating,
    Deleting,
}

impl TableState {
    /// True once the table and all of its indexes accept traffic.
    pub fn is_ready(&self) -> bool {
        self.status == TableStatus::Active
            && self.gsis.iter().all(|g| g.status == GsiStatus::Active)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployPlan {
    CreateTable { config: TableConfig },
    /// The table exists but lacks some of the desired indexes.
    AddGsis {
        table_name: String,
        gsis_to_add: Vec<GsiConfig>,
    },
    NoChanges { table_name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestroyPlan {
    DeleteTable { table_name: String },
    AlreadyGone { table_name: String },
}

pub fn calculate_deploy_plan(current: Option<&TableState>, desired: &TableConfig) -> DeployPlan {
    let Some(state) = current else {
        return DeployPlan::CreateTable {
            config: desired.clone(),
        };
    };

    let gsis_to_add: Vec<GsiConfig> = desired
        .gsis
        .iter()
        .filter(|gsi| !state.gsis.iter().any(|g| g.name == gsi.name))
        .cloned()
        .collect();

    if gsis_to_add.is_empty() {
        DeployPlan::NoChanges {
            table_name: desired.table_name.clone(),
        }
    } else {
        DeployPlan::AddGsis {
            table_name: desired.table_name.clone(),
            gsis_to_add,
        }
    }
}

pub fn calculate_destroy_plan(current: Option<&TableState>, table_name: &str) -> DestroyPlan {
    let table_name = table_name.to_string();
    match current {
        Some(_) => DestroyPlan::DeleteTable { table_name },
        None => DestroyPlan::AlreadyGone { table_name },
    }
}

/// Renders a deploy plan as diff-style lines (`+`, `~`, `=`).
pub fn format_deploy_plan(plan: &DeployPlan) -> Vec<String> {
    match plan {
        DeployPlan::CreateTable { config } => {
            let mut lines = vec![
                format!("+ Create table: {}", config.table_name),
                format!("  Partition key: {} (S)", config.partition_key.name),
            ];
            if let Some(sk) = &config.sort_key {
                lines.push(format!("  Sort key: {} (S)", sk.name));
            }
            for gsi in &config.gsis {
                lines.extend(format_gsi(gsi, "+ GSI"));
            }
            lines.push("  Billing: PAY_PER_REQUEST".to_string());
            lines
        }
        DeployPlan::AddGsis {
            table_name,
            gsis_to_add,
        } => {
            let mut lines = vec![format!("~ Update table: {table_name}")];
            for gsi in gsis_to_add {
                lines.extend(format_gsi(gsi, "+ Add GSI"));
            }
            lines
        }
        DeployPlan::NoChanges { table_name } => {
            vec![format!("= Table '{table_name}' is up to date")]
        }
    }
}

fn format_gsi(gsi: &GsiConfig, label: &str) -> Vec<String> {
    let mut lines = vec![
        format!("  {label}: {} (projection ALL)", gsi.name),
        format!("    Partition key: {} (S)", gsi.partition_key.name),
    ];
    if let Some(sk) = &gsi.sort_key {
        lines.push(format!("    Sort key: {} (S)", sk.name));
    }
    lines
}

pub fn format_destroy_plan(plan: &DestroyPlan) -> Vec<String> {
    match plan {
        DestroyPlan::DeleteTable { table_name } => {
            vec![format!("- Delete table: {table_name} (ALL DATA WILL BE LOST)")]
        }
        DestroyPlan::AlreadyGone { table_name } => {
            vec![format!("= Table '{table_name}' does not exist")]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamodb::config::rank_table_config;

    fn state_with_gsis(names: &[&str]) -> TableState {
        TableState {
            status: TableStatus::Active,
            gsis: names
                .iter()
                .map(|name| GsiState {
                    name: name.to_string(),
                    status: GsiStatus::Active,
                })
                .collect(),
        }
    }

    #[test]
    fn test_missing_table_is_created() {
        let desired = rank_table_config();

        let plan = calculate_deploy_plan(None, &desired);

        assert_eq!(plan, DeployPlan::CreateTable { config: desired });
    }

    #[test]
    fn test_missing_index_is_added() {
        let desired = rank_table_config();
        let state = state_with_gsis(&[]);

        let plan = calculate_deploy_plan(Some(&state), &desired);

        let DeployPlan::AddGsis { gsis_to_add, .. } = plan else {
            panic!("expected AddGsis, got {plan:?}");
        };
        assert_eq!(gsis_to_add, desired.gsis);
    }

    #[test]
    fn test_complete_table_needs_no_changes() {
        let desired = rank_table_config();
        let state = state_with_gsis(&["gsi"]);

        let plan = calculate_deploy_plan(Some(&state), &desired);

        assert_eq!(
            plan,
            DeployPlan::NoChanges {
                table_name: "rank".to_string()
            }
        );
    }

    #[test]
    fn test_destroy_plan() {
        let state = state_with_gsis(&["gsi"]);

        assert!(matches!(
            calculate_destroy_plan(Some(&state), "rank"),
            DestroyPlan::DeleteTable { .. }
        ));
        assert!(matches!(
            calculate_destroy_plan(None, "rank"),
            DestroyPlan::AlreadyGone { .. }
        ));
    }

    #[test]
    fn test_create_plan_lists_keys_and_index() {
        let plan = calculate_deploy_plan(None, &rank_table_config());

        let lines = format_deploy_plan(&plan);

        assert_eq!(lines[0], "+ Create table: rank");
        assert!(lines.contains(&"  Partition key: id (S)".to_string()));
        assert!(lines.contains(&"  Sort key: typ (S)".to_string()));
        assert!(lines.contains(&"  + GSI: gsi (projection ALL)".to_string()));
        assert!(lines.contains(&"    Partition key: rankid (S)".to_string()));
    }

    #[test]
    fn test_table_with_creating_index_is_not_ready() {
        let mut state = state_with_gsis(&["gsi"]);
        assert!(state.is_ready());

        state.gsis[0].status = GsiStatus::Creating;
        assert!(!state.is_ready());
    }
}
