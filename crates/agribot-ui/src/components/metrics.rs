//! Metric bars and per-version metric tables.

use yew::prelude::*;

use crate::core::metrics::VersionMetrics;
use crate::features::model::logic::{format_percent, to_percent};

#[derive(Properties, PartialEq)]
pub(crate) struct MetricBarProps {
    pub label: AttrValue,
    pub ratio: f64,
}

#[function_component(MetricBar)]
pub(crate) fn metric_bar(props: &MetricBarProps) -> Html {
    let width = format!("width: {:.1}%", to_percent(props.ratio).clamp(0.0, 100.0));
    html! {
        <div class="metric-bar">
            <div class="metric-label">
                <span>{props.label.clone()}</span>
                <span class="muted">{format_percent(props.ratio)}</span>
            </div>
            <div class="track"><div class="fill" style={width} /></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct VersionTableProps {
    pub rows: Vec<VersionMetrics>,
}

#[function_component(VersionTable)]
pub(crate) fn version_table(props: &VersionTableProps) -> Html {
    if props.rows.is_empty() {
        return html! { <p class="muted">{"No model metrics yet."}</p> };
    }
    html! {
        <table class="table compact">
            <thead>
                <tr><th>{"Version"}</th><th>{"Precision"}</th><th>{"Recall"}</th><th>{"F1"}</th></tr>
            </thead>
            <tbody>
                {for props.rows.iter().map(|row| html! {
                    <tr>
                        <td>{row.version.clone()}</td>
                        <td>{format_percent(row.precision)}</td>
                        <td>{format_percent(row.recall)}</td>
                        <td>{format_percent(row.f1)}</td>
                    </tr>
                })}
            </tbody>
        </table>
    }
}
