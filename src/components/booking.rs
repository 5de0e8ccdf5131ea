//! Booking Section
//!
//! Searchable service list; picking a service opens the booking dialog.

use chrono::Local;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{Notice, NoticeBanner};
use crate::config::BOOKING_CLOSE_DELAY_MS;
use crate::listing::{filter_services, format_price, to_sql_datetime, ServiceSort};
use crate::models::{MedicalService, NewAppointment};
use crate::validation::validate_appointment;

fn sort_value(sort: ServiceSort) -> &'static str {
    match sort {
        ServiceSort::Default => "default",
        ServiceSort::AToZ => "a-z",
        ServiceSort::ZToA => "z-a",
        ServiceSort::PriceLow => "price-low",
        ServiceSort::PriceHigh => "price-high",
    }
}

fn parse_sort(value: &str) -> ServiceSort {
    ServiceSort::ALL
        .into_iter()
        .find(|s| sort_value(*s) == value)
        .unwrap_or_default()
}

#[component]
pub fn Booking(patient_id: u32, services: RwSignal<Vec<MedicalService>>) -> impl IntoView {
    let (search, set_search) = signal(String::new());
    let (sort, set_sort) = signal(ServiceSort::Default);
    let selected = RwSignal::new(None::<MedicalService>);

    let visible = Memo::new(move |_| services.with(|s| filter_services(s, &search.get(), sort.get())));

    view! {
        <div class="booking-container">
            <div class="booking-header">
                <h1>"BOOK"</h1>
                <div class="booking-controls">
                    <input
                        type="text"
                        placeholder="Search services..."
                        prop:value=move || search.get()
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                    <select on:change=move |ev| set_sort.set(parse_sort(&event_target_value(&ev)))>
                        {ServiceSort::ALL.into_iter().map(|s| view! {
                            <option value=sort_value(s) selected=move || sort.get() == s>{s.label()}</option>
                        }).collect_view()}
                    </select>
                </div>
            </div>
            <div class="services-section">
                <h2>{move || format!("Available Services ({})", visible.with(Vec::len))}</h2>
                <Show
                    when=move || visible.with(|v| !v.is_empty())
                    fallback=|| view! { <p class="no-services">"No services found."</p> }
                >
                    <div class="services-list">
                        <For
                            each=move || visible.get()
                            key=|service: &MedicalService| service.service_id
                            let:service
                        >
                            {
                                let picked = service.clone();
                                view! {
                                    <div class="service-item" on:click=move |_| selected.set(Some(picked.clone()))>
                                        <span class="service-price">{format_price(service.price)}</span>
                                        <span class="service-name">{service.service_name.clone()}</span>
                                        <span class="service-description">{service.description.clone().unwrap_or_default()}</span>
                                    </div>
                                }
                            }
                        </For>
                    </div>
                </Show>
            </div>
            {move || selected.get().map(|service| view! {
                <BookingDialog patient_id=patient_id service=service on_close=Callback::new(move |_| selected.set(None)) />
            })}
        </div>
    }
}

#[component]
fn BookingDialog(patient_id: u32, service: MedicalService, on_close: Callback<()>) -> impl IntoView {
    let (preferred, set_preferred) = signal(String::new());
    let (symptom, set_symptom) = signal(String::new());
    let (notice, set_notice) = signal::<Option<Notice>>(None);
    let (loading, set_loading) = signal(false);
    let min_date_time = Local::now().format("%Y-%m-%dT%H:%M").to_string();
    let service_id = service.service_id;

    let book = move |_| {
        let when = preferred.get();
        let reason = symptom.get();
        if let Err(message) = validate_appointment(&when, &reason) {
            set_notice.set(Notice::error(message));
            return;
        }
        set_notice.set(None);
        set_loading.set(true);
        let body = NewAppointment {
            patient_id,
            service_id,
            preferred_date_time: to_sql_datetime(&when),
            symptom: reason,
        };
        spawn_local(async move {
            let result = api::book_appointment(&body).await;
            set_loading.set(false);
            match result {
                Ok(()) => {
                    log::info!("booked service {} for patient {}", service_id, patient_id);
                    set_notice.set(Notice::success("Appointment booked successfully!"));
                    TimeoutFuture::new(BOOKING_CLOSE_DELAY_MS).await;
                    on_close.run(());
                }
                Err(err) => set_notice.set(Notice::error(err.user_message("Failed to book appointment"))),
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="booking-modal" on:click=|ev| ev.stop_propagation()>
                <button class="modal-close" on:click=move |_| on_close.run(())>"×"</button>
                <div class="modal-header">
                    <h3>{format!("Book Appointment for {}", service.service_name)}</h3>
                </div>
                <div class="modal-body">
                    <NoticeBanner notice=notice />
                    <div class="form-group">
                        <label for="preferredDateTime">"Preferred Date & Time *"</label>
                        <input
                            id="preferredDateTime"
                            type="datetime-local"
                            min=min_date_time
                            prop:value=move || preferred.get()
                            on:input=move |ev| set_preferred.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="symptom">"Symptoms / Reason for Visit *"</label>
                        <textarea
                            id="symptom"
                            rows="4"
                            placeholder="Please describe your symptoms or reason for this appointment..."
                            prop:value=move || symptom.get()
                            on:input=move |ev| set_symptom.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="appointment-summary">
                        <h4>"Appointment Summary"</h4>
                        <p><strong>"Service: "</strong>{service.service_name.clone()}</p>
                        <p><strong>"Price: "</strong>{format_price(service.price)}</p>
                    </div>
                    <div class="modal-actions">
                        <button class="btn btn-secondary" on:click=move |_| on_close.run(())>"Cancel"</button>
                        <button class="btn btn-primary" disabled=move || loading.get() on:click=book>
                            {move || if loading.get() { "Booking..." } else { "Book Appointment" }}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
