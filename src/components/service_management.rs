//! Service Management Section
//!
//! Admin catalogue editor for medical services.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{DeleteConfirmButton, Notice, NoticeBanner};
use crate::listing::{filter_services, format_price, ServiceSort};
use crate::models::{MedicalService, ServiceInput};
use crate::store::{
    reload_services, store_remove_service, store_upsert_service, use_clinic_store, ClinicStateStoreFields,
};
use crate::validation::validate_service;

/// Service form; `service_id` is set while editing
#[derive(Debug, Clone, Default, PartialEq)]
struct ServiceDraft {
    service_id: Option<u32>,
    name: String,
    price: String,
    description: String,
}

impl ServiceDraft {
    fn edit(service: &MedicalService) -> Self {
        Self {
            service_id: Some(service.service_id),
            name: service.service_name.clone(),
            price: format!("{:.2}", service.price),
            description: service.description.clone().unwrap_or_default(),
        }
    }
}

#[component]
pub fn ServiceManagement() -> impl IntoView {
    let store = use_clinic_store();
    let (search, set_search) = signal(String::new());
    let (sort, set_sort) = signal(ServiceSort::AToZ);
    let (notice, set_notice) = signal::<Option<Notice>>(None);
    let draft = RwSignal::new(None::<ServiceDraft>);
    let (saving, set_saving) = signal(false);

    let visible = Memo::new(move |_| filter_services(&store.services().read(), &search.get(), sort.get()));

    let save = move |_| {
        let Some(current) = draft.get() else {
            return;
        };
        let price = match validate_service(&current.name, &current.price) {
            Ok(price) => price,
            Err(message) => {
                set_notice.set(Notice::error(message));
                return;
            }
        };
        let input = ServiceInput {
            service_name: current.name.trim().to_string(),
            price,
            description: current.description.trim().to_string(),
        };
        set_saving.set(true);
        spawn_local(async move {
            let result = match current.service_id {
                Some(id) => api::update_service(id, &input).await.map(|()| {
                    store_upsert_service(
                        &store,
                        MedicalService {
                            service_id: id,
                            service_name: input.service_name.clone(),
                            price: input.price,
                            description: Some(input.description.clone()).filter(|d| !d.is_empty()),
                        },
                    );
                    "Service updated successfully"
                }),
                None => match api::create_service(&input).await {
                    Ok(()) => {
                        reload_services(store).await;
                        Ok("Service created successfully")
                    }
                    Err(err) => Err(err),
                },
            };
            set_saving.set(false);
            match result {
                Ok(message) => {
                    set_notice.set(Notice::success(message));
                    draft.set(None);
                }
                Err(err) => {
                    let action = if current.service_id.is_some() { "update" } else { "create" };
                    set_notice.set(Notice::error(
                        err.user_message(&format!("Unable to {} service. Please try again later.", action)),
                    ));
                }
            }
        });
    };

    let remove = move |service_id: u32| {
        spawn_local(async move {
            match api::delete_service(service_id).await {
                Ok(()) => {
                    store_remove_service(&store, service_id);
                    set_notice.set(Notice::success("Service deleted successfully"));
                }
                Err(err) => set_notice.set(Notice::error(
                    err.user_message("Unable to delete service. Please try again later."),
                )),
            }
        });
    };

    let edit = move |apply: fn(&mut ServiceDraft, String)| {
        move |ev: web_sys::Event| {
            let value = event_target_value(&ev);
            draft.update(|d| {
                if let Some(d) = d {
                    apply(d, value);
                }
            });
        }
    };
    let draft_value = move |read: fn(&ServiceDraft) -> String| {
        move || draft.with(|d| d.as_ref().map(read).unwrap_or_default())
    };

    view! {
        <div class="service-management">
            <div class="section-header">
                <h1>"Medical Services"</h1>
                <button class="btn btn-primary" on:click=move |_| draft.set(Some(ServiceDraft::default()))>
                    "+ Add Service"
                </button>
            </div>
            <NoticeBanner notice=notice />
            <div class="section-controls">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search services..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    set_sort.set(ServiceSort::ALL.into_iter().find(|s| s.label() == value).unwrap_or_default());
                }>
                    {ServiceSort::ALL.into_iter().map(|s| view! {
                        <option value=s.label() selected=move || sort.get() == s>{s.label()}</option>
                    }).collect_view()}
                </select>
            </div>
            <table class="services-table">
                <thead>
                    <tr>
                        <th>"Service"</th>
                        <th>"Price"</th>
                        <th>"Description"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || visible.get()
                        key=|s: &MedicalService| (s.service_id, s.service_name.clone(), s.price.to_bits())
                        let:service
                    >
                        {
                            let id = service.service_id;
                            let picked = ServiceDraft::edit(&service);
                            view! {
                                <tr>
                                    <td>{service.service_name.clone()}</td>
                                    <td>{format_price(service.price)}</td>
                                    <td>{service.description.clone().unwrap_or_default()}</td>
                                    <td class="actions">
                                        <button class="btn btn-edit" on:click=move |_| draft.set(Some(picked.clone()))>"Edit"</button>
                                        <DeleteConfirmButton on_confirm=move |_| remove(id) />
                                    </td>
                                </tr>
                            }
                        }
                    </For>
                </tbody>
            </table>
            <Show when=move || visible.with(Vec::is_empty)>
                <p class="no-services">"No services found."</p>
            </Show>

            <Show when=move || draft.with(Option::is_some)>
                <div class="modal-overlay" on:click=move |_| draft.set(None)>
                    <div class="service-modal" on:click=|ev| ev.stop_propagation()>
                        <h3>
                            {move || if draft.with(|d| d.as_ref().is_some_and(|d| d.service_id.is_some())) {
                                "Edit Service"
                            } else {
                                "Add Service"
                            }}
                        </h3>
                        <div class="form-group">
                            <label>"Service Name *"</label>
                            <input type="text" prop:value=draft_value(|d| d.name.clone()) on:input=edit(|d, v| d.name = v) />
                        </div>
                        <div class="form-group">
                            <label>"Price *"</label>
                            <input
                                type="number"
                                min="0"
                                step="0.01"
                                prop:value=draft_value(|d| d.price.clone())
                                on:input=edit(|d, v| d.price = v)
                            />
                        </div>
                        <div class="form-group">
                            <label>"Description"</label>
                            <textarea
                                rows="3"
                                prop:value=draft_value(|d| d.description.clone())
                                on:input=edit(|d, v| d.description = v)
                            />
                        </div>
                        <div class="modal-actions">
                            <button class="btn btn-secondary" on:click=move |_| draft.set(None)>"Cancel"</button>
                            <button class="btn btn-primary" disabled=move || saving.get() on:click=save>
                                {move || if saving.get() { "Saving..." } else { "Save" }}
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_edit_draft_prefills_from_service() {
        let service = MedicalService {
            service_id: 4,
            service_name: "Consultation".to_string(),
            price: 500.0,
            description: None,
        };
        assert_eq!(
            ServiceDraft::edit(&service),
            ServiceDraft {
                service_id: Some(4),
                name: "Consultation".to_string(),
                price: "500.00".to_string(),
                description: String::new(),
            }
        );
    }
}
