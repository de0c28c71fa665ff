//! Dashboard shell with mock data.

use core_types::dashboard::mock_summary;
use yew::prelude::*;

use crate::components::StatCard;

/// Dashboard page component.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let summary = use_memo((), |_| mock_summary());

    html! {
        <div>
            <h1>{"Dashboard"}</h1>
            <p class="text-secondary" style="margin-bottom: 2rem;">
                {"An overview of community activity"}
            </p>

            <div class="stats-grid">
                { for summary.cards.iter().map(|card| html! {
                    <StatCard
                        key={card.label.clone()}
                        value={card.value.clone()}
                        label={card.label.clone()}
                        change={Some(AttrValue::from(card.change.clone()))}
                        trend={card.trend}
                    />
                })}
            </div>

            <div class="card">
                <div class="card-header">
                    <h2 class="card-title">{"Recent Activity"}</h2>
                </div>
                <ul class="activity-list">
                    { for summary.activity.iter().map(|item| html! {
                        <li class="activity-item">
                            <span class="activity-actor">{ item.actor.clone() }</span>
                            {" "}
                            <span class="activity-action">{ item.action.clone() }</span>
                            <span class="activity-when">{ item.when.clone() }</span>
                        </li>
                    })}
                </ul>
            </div>
        </div>
    }
}
