//! When a flow runs.

use appflow_derive::cfn_model;
use appflow_domain::{CfnInteger, CfnNumber, CfnString};

#[cfn_model]
pub struct TriggerConfig {
    pub trigger_type: TriggerType,
    /// Required when `trigger_type` is [`TriggerType::Scheduled`].
    pub trigger_properties: Option<ScheduledTriggerProperties>,
}

#[cfn_model]
pub enum TriggerType {
    Scheduled,
    Event,
    OnDemand,
}

/// Schedule of a `Scheduled` flow. Times are epoch seconds.
#[cfn_model]
pub struct ScheduledTriggerProperties {
    /// `rate(..)` or `cron(..)` expression.
    pub schedule_expression: CfnString,
    pub data_pull_mode: Option<DataPullMode>,
    pub first_execution_from: Option<CfnNumber>,
    /// Consecutive failed runs after which the flow is deactivated.
    pub flow_error_deactivation_threshold: Option<CfnInteger>,
    pub schedule_end_time: Option<CfnNumber>,
    pub schedule_offset: Option<CfnInteger>,
    pub schedule_start_time: Option<CfnNumber>,
    pub time_zone: Option<CfnString>,
}

#[cfn_model]
pub enum DataPullMode {
    Incremental,
    Complete,
}

impl TriggerConfig {
    /// An on-demand trigger.
    #[must_use]
    pub const fn on_demand() -> Self {
        Self { trigger_type: TriggerType::OnDemand, trigger_properties: None }
    }

    /// A scheduled trigger running on `expression`.
    #[must_use]
    pub fn scheduled(expression: impl Into<CfnString>) -> Self {
        Self {
            trigger_type: TriggerType::Scheduled,
            trigger_properties: Some(
                ScheduledTriggerProperties::builder().schedule_expression(expression).build(),
            ),
        }
    }
}
