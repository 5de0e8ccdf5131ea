//! Work Sidebar Component
//!
//! Section menu of the staff and admin dashboards.

use leptos::prelude::*;

use crate::route::WorkSection;

fn section_icon(section: WorkSection) -> &'static str {
    match section {
        WorkSection::Dashboard => "📊",
        WorkSection::Services => "🩺",
        WorkSection::Staff => "👥",
        WorkSection::Appointments => "📅",
        WorkSection::Messages => "💬",
        WorkSection::Feedback => "⭐",
        WorkSection::Records => "📁",
        WorkSection::Settings => "⚙️",
    }
}

/// Menu entries plus the account settings entry in the footer
#[component]
pub fn WorkSidebar(menu: &'static [WorkSection], section: RwSignal<WorkSection>) -> impl IntoView {
    let nav_button = move |target: WorkSection| {
        view! {
            <button
                class={move || if section.get() == target { "nav-item active" } else { "nav-item" }}
                on:click=move |_| section.set(target)
            >
                <span class="nav-item-icon">{section_icon(target)}</span>
                {target.label()}
            </button>
        }
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar-header"><h3>"Main Menu"</h3></div>
            <nav class="sidebar-nav">
                {menu.iter().copied().map(nav_button).collect_view()}
            </nav>
            <div class="sidebar-separator"></div>
            <div class="sidebar-footer">
                <h4>"Others"</h4>
                {nav_button(WorkSection::Settings)}
            </div>
        </aside>
    }
}
