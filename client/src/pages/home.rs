//! Home dashboard with greeting and static warehouse statistics.
//!
//! The figures, activities and alerts are fixed sample data until the
//! backend exposes real ones.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::stat_card::{StatCard, Tone};
use crate::util::auth::SessionHandle;
use crate::util::clock;

/// One headline figure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatSummary {
    pub title: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
    pub trend: &'static str,
    pub trend_up: bool,
    pub tone: Tone,
}

pub const STATS: [StatSummary; 4] = [
    StatSummary { title: "Total Produk", value: "1,234", icon: "▣", trend: "+12.5%", trend_up: true, tone: Tone::Blue },
    StatSummary { title: "Pesanan Aktif", value: "85", icon: "🛒", trend: "+8.2%", trend_up: true, tone: Tone::Green },
    StatSummary { title: "Pengiriman", value: "156", icon: "🚚", trend: "-3.1%", trend_up: false, tone: Tone::Orange },
    StatSummary { title: "Pelanggan", value: "892", icon: "👥", trend: "+25.3%", trend_up: true, tone: Tone::Purple },
];

/// Recent activity feed entries: `(message, relative time, icon)`.
pub const ACTIVITIES: [(&str, &str, &str); 4] = [
    ("Pesanan baru #ORD-2847 diterima", "5 menit yang lalu", "🛒"),
    ("Stok produk \"Laptop ASUS\" diperbarui", "15 menit yang lalu", "▣"),
    ("Pengiriman #SHP-1923 dikonfirmasi", "1 jam yang lalu", "🚚"),
    ("Pelanggan baru \"PT Sentosa\" terdaftar", "2 jam yang lalu", "👥"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Success,
}

impl Severity {
    fn class(self) -> &'static str {
        match self {
            Self::Error => "alert-item--error",
            Self::Warning => "alert-item--warning",
            Self::Success => "alert-item--success",
        }
    }
}

pub const ALERTS: [(&str, Severity); 4] = [
    ("Stok produk \"ABC-123\" rendah (10 unit tersisa)", Severity::Error),
    ("3 pesanan menunggu konfirmasi pembayaran", Severity::Warning),
    ("Pengiriman tertunda untuk 2 pesanan hari ini", Severity::Warning),
    ("Laporan bulanan siap untuk diunduh", Severity::Success),
];

const SHORT_MONTHS: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des"];

/// Part of day used in the greeting, by local hour.
#[must_use]
pub fn greeting_period(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Pagi",
        12..=14 => "Siang",
        15..=17 => "Sore",
        _ => "Malam",
    }
}

/// `"19 Okt"` style date, month zero-based.
#[must_use]
pub fn format_short_date(day: u32, month: u32) -> String {
    let name = usize::try_from(month).ok().and_then(|m| SHORT_MONTHS.get(m)).unwrap_or(&"?");
    format!("{day} {name}")
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<SessionHandle>().auth;
    let (hour, day, month) = clock::local_date_parts();
    let greeting = format!("Selamat {},", greeting_period(hour));
    let today = format_short_date(day, month);

    let stats = STATS
        .into_iter()
        .map(|stat| {
            view! {
                <StatCard
                    title=stat.title
                    value=stat.value
                    icon=stat.icon
                    tone=stat.tone
                    trend=stat.trend
                    trend_up=stat.trend_up
                />
            }
        })
        .collect_view();

    let activities = ACTIVITIES
        .into_iter()
        .map(|(message, time, icon)| {
            view! {
                <li class="activity-item">
                    <span class="activity-item__icon" aria-hidden="true">{icon}</span>
                    <div class="activity-item__body">
                        <p class="activity-item__message">{message}</p>
                        <p class="activity-item__time">{time}</p>
                    </div>
                </li>
            }
        })
        .collect_view();

    let alerts = ALERTS
        .into_iter()
        .map(|(message, severity)| {
            let class = format!("alert-item {}", severity.class());
            view! { <li class=class>{message}</li> }
        })
        .collect_view();

    view! {
        <div class="home-page">
            <section class="welcome-banner">
                <p class="welcome-banner__greeting">{greeting}</p>
                <h1 class="welcome-banner__name">{move || auth.get().display_name()}</h1>
                <p class="welcome-banner__intro">
                    "Selamat datang di Kancra Warehouse Management System. Kelola inventaris dan operasi gudang Anda dengan efisien."
                </p>
                <div class="welcome-banner__chips">
                    <div class="welcome-banner__chip">
                        <span>"Status Sistem"</span>
                        <strong><span class="status-dot"></span>"Aktif"</strong>
                    </div>
                    <div class="welcome-banner__chip">
                        <span>"Last Login"</span>
                        <strong>{today}</strong>
                    </div>
                </div>
            </section>
            <section class="stats-grid">{stats}</section>
            <section class="home-page__panels">
                <div class="panel">
                    <header class="panel__header">
                        <h2>"Aktivitas Terbaru"</h2>
                        <span class="panel__tag">"Real-time"</span>
                    </header>
                    <ul class="panel__list">{activities}</ul>
                </div>
                <div class="panel">
                    <header class="panel__header">
                        <h2>"Peringatan & Notifikasi"</h2>
                        <span class="panel__tag panel__tag--warning">{format!("{} Baru", ALERTS.len())}</span>
                    </header>
                    <ul class="panel__list">{alerts}</ul>
                </div>
            </section>
        </div>
    }
}
