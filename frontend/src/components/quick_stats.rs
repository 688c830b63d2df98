use crate::dashboard::view_model::QuickStat;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct QuickStatsProps {
    pub stats: Vec<QuickStat>,
}

#[function_component(QuickStats)]
pub fn quick_stats(props: &QuickStatsProps) -> Html {
    html! {
        <div class="quick-stats">
            {props.stats.iter().map(|stat| html! {
                <div class="quick-stat-item" key={stat.label}>
                    <div class="quick-stat-label">{stat.label}</div>
                    <div class="quick-stat-value">{&stat.value}</div>
                </div>
            }).collect::<Html>()}
        </div>
    }
}
