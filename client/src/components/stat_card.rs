//! Summary tile for the home dashboard.

use leptos::prelude::*;

/// Color family of a stat tile's icon badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Blue,
    Green,
    Orange,
    Purple,
}

impl Tone {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Blue => "stat-card__badge--blue",
            Self::Green => "stat-card__badge--green",
            Self::Orange => "stat-card__badge--orange",
            Self::Purple => "stat-card__badge--purple",
        }
    }
}

#[component]
pub fn StatCard(
    title: &'static str,
    value: &'static str,
    icon: &'static str,
    tone: Tone,
    #[prop(optional)] trend: Option<&'static str>,
    #[prop(optional)] trend_up: bool,
) -> impl IntoView {
    let badge_class = format!("stat-card__badge {}", tone.class());
    let trend_down = !trend_up;

    view! {
        <div class="stat-card">
            <div class="stat-card__header">
                <span class="stat-card__title">{title}</span>
                <span class=badge_class aria-hidden="true">{icon}</span>
            </div>
            <div class="stat-card__value">{value}</div>
            {trend.map(|trend| view! {
                <div class="stat-card__trend" class:stat-card__trend--up=trend_up class:stat-card__trend--down=trend_down>
                    <span aria-hidden="true">{if trend_up { "↗" } else { "↘" }}</span>
                    <span class="stat-card__trend-value">{trend}</span>
                    <span class="stat-card__trend-note">"dari bulan lalu"</span>
                </div>
            })}
        </div>
    }
}
