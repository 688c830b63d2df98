use crate::dashboard::view_model::MetricCard;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct StatCardProps {
    pub card: MetricCard,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let card = &props.card;
    let style = format!("--stat-color: {}", card.accent);

    html! {
        <div class="stat-card" style={style}>
            <div class="stat-header">
                <div class="stat-info">
                    <h3>{card.title}</h3>
                    <div class="stat-value">{&card.value}</div>
                </div>
                <div class={classes!("stat-icon", card.icon_class)}>{card.icon}</div>
            </div>
            <div class="stat-footer">{&card.footer}</div>
        </div>
    }
}
