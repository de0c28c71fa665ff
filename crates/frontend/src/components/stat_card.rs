//! Statistics card component.

use core_types::dashboard::Trend;
use yew::prelude::*;

/// Properties for StatCard component.
#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub value: AttrValue,
    pub label: AttrValue,
    /// Change since last period, e.g. "+12%"
    #[prop_or_default]
    pub change: Option<AttrValue>,
    #[prop_or(Trend::Flat)]
    pub trend: Trend,
}

/// Statistics card component.
#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let trend_class = match props.trend {
        Trend::Up => "stat-change up",
        Trend::Down => "stat-change down",
        Trend::Flat => "stat-change flat",
    };

    html! {
        <div class="card stat-card">
            <div class="stat-value">{ props.value.clone() }</div>
            <div class="stat-label">{ props.label.clone() }</div>
            if let Some(change) = &props.change {
                <div class={trend_class}>{ change.clone() }</div>
            }
        </div>
    }
}
