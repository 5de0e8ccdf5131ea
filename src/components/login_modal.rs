//! Login Modal Component
//!
//! One sign-in dialog per role. The patient variant also carries the
//! forgot-password panel and links to the staff and admin dialogs.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::{self, ApiResult};
use crate::components::{FieldError, Notice, NoticeBanner};
use crate::config::LOGIN_REDIRECT_DELAY_MS;
use crate::context::{use_router, RouterContext};
use crate::models::{AdminSession, PatientSession, StaffSession};
use crate::route::{dashboard_for, Page};
use crate::session::Role;
use crate::validation::{validate_login, validate_reset_email, FieldErrors};

async fn sign_in_as<T: DeserializeOwned + Serialize>(
    router: RouterContext,
    role: Role,
    email: &str,
    password: &str,
    remember: bool,
) -> ApiResult<()> {
    let record: T = api::login(role, email, password).await?;
    router.sign_in(role, &record, remember);
    Ok(())
}

fn title(role: Role) -> &'static str {
    match role {
        Role::Patient => "PATIENT LOGIN",
        Role::Staff => "STAFF LOGIN",
        Role::Admin => "ADMIN LOGIN",
    }
}

fn register_page(role: Role) -> Option<(Page, &'static str)> {
    match role {
        Role::Patient => Some((Page::Register, "REGISTER")),
        Role::Staff => Some((Page::StaffRegister, "STAFF REGISTER")),
        Role::Admin => None,
    }
}

#[component]
pub fn LoginModal(role: Role) -> impl IntoView {
    let router = use_router();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (remember, set_remember) = signal(false);
    let (errors, set_errors) = signal(FieldErrors::new());
    let (notice, set_notice) = signal::<Option<Notice>>(None);
    let (loading, set_loading) = signal(false);
    let (show_forgot, set_show_forgot) = signal(false);

    let is_open = move || router.modals.get().is_open(role);
    let close = move || {
        set_show_forgot.set(false);
        router.close_login(role);
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email = username.get();
        let pass = password.get();
        if let Err(found) = validate_login(&email, &pass) {
            set_errors.set(found);
            set_notice.set(Notice::error("Please fill in all required fields"));
            return;
        }
        set_errors.set(FieldErrors::new());
        set_notice.set(None);
        set_loading.set(true);
        let remember = remember.get();

        spawn_local(async move {
            let result = match role {
                Role::Patient => sign_in_as::<PatientSession>(router, role, &email, &pass, remember).await,
                Role::Staff => sign_in_as::<StaffSession>(router, role, &email, &pass, remember).await,
                Role::Admin => sign_in_as::<AdminSession>(router, role, &email, &pass, remember).await,
            };
            set_loading.set(false);
            match result {
                Ok(()) => {
                    log::info!("{} signed in", role.session_key());
                    set_notice.set(Notice::success("Login successful!"));
                    TimeoutFuture::new(LOGIN_REDIRECT_DELAY_MS).await;
                    set_password.set(String::new());
                    set_notice.set(None);
                    router.close_login(role);
                    router.navigate(dashboard_for(role));
                }
                Err(err) => {
                    log::warn!("{} login failed: {}", role.session_key(), err);
                    set_notice.set(Notice::error(err.user_message("Login failed")));
                }
            }
        });
    };

    let on_input = move |field: &'static str, setter: WriteSignal<String>| {
        move |ev: web_sys::Event| {
            setter.set(event_target_value(&ev));
            if errors.with(|e| e.get(field).is_some()) {
                set_errors.update(|e| e.remove(field));
            }
        }
    };

    view! {
        <Show when=is_open>
            <div class="modal-overlay" on:click=move |_| close()>
                <div class="login-modal" on:click=|ev| ev.stop_propagation()>
                    <button class="modal-close" on:click=move |_| close()>"×"</button>
                    <div class="modal-header">
                        <h2>{move || if show_forgot.get() { "FIND YOUR ACCOUNT" } else { title(role) }}</h2>
                    </div>
                    <div class="modal-body">
                        <Show
                            when=move || !show_forgot.get()
                            fallback=move || view! {
                                <ForgotPasswordPanel
                                    initial_email=username.get_untracked()
                                    on_back=Callback::new(move |_| set_show_forgot.set(false))
                                />
                            }
                        >
                            <NoticeBanner notice=notice />
                            <form on:submit=submit>
                                <div class="form-group">
                                    <input
                                        type="text"
                                        placeholder=if role == Role::Admin { "Email" } else { "Username/Email" }
                                        class={move || if errors.with(|e| e.get("username").is_some()) { "error" } else { "" }}
                                        prop:value=move || username.get()
                                        on:input=on_input("username", set_username)
                                    />
                                    <FieldError message=Signal::derive(move || errors.with(|e| e.get("username").map(str::to_string))) />
                                </div>
                                <div class="form-group">
                                    <input
                                        type="password"
                                        placeholder="Password"
                                        class={move || if errors.with(|e| e.get("password").is_some()) { "error" } else { "" }}
                                        prop:value=move || password.get()
                                        on:input=on_input("password", set_password)
                                    />
                                    <FieldError message=Signal::derive(move || errors.with(|e| e.get("password").map(str::to_string))) />
                                </div>
                                <div class="form-options">
                                    <label class="remember-me">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || remember.get()
                                            on:change=move |ev| set_remember.set(event_target_checked(&ev))
                                        />
                                        "Remember me"
                                    </label>
                                    {(role == Role::Patient).then(|| view! {
                                        <button
                                            type="button"
                                            class="forgot-password"
                                            disabled=move || loading.get()
                                            on:click=move |_| set_show_forgot.set(true)
                                        >
                                            "Forgot Password?"
                                        </button>
                                    })}
                                </div>
                                <button type="submit" class="login-btn" disabled=move || loading.get()>
                                    {move || if loading.get() { "LOGGING IN..." } else { "LOGIN" }}
                                </button>
                                {register_page(role).map(|(page, label)| view! {
                                    <button
                                        type="button"
                                        class="register-btn"
                                        on:click=move |_| {
                                            router.close_login(role);
                                            router.navigate(page);
                                        }
                                    >
                                        {label}
                                    </button>
                                })}
                            </form>
                            <div class="modal-footer">
                                {match role {
                                    Role::Patient => view! {
                                        <div class="role-buttons">
                                            <button class="role-btn admin-btn" on:click=move |_| router.switch_login(Role::Patient, Role::Admin)>
                                                "ADMIN"
                                            </button>
                                            <button class="role-btn staff-btn" on:click=move |_| router.switch_login(Role::Patient, Role::Staff)>
                                                "STAFF"
                                            </button>
                                        </div>
                                    }.into_any(),
                                    _ => view! {
                                        <p class="staff-note">"Staff access only. Contact administrator for account issues."</p>
                                    }.into_any(),
                                }}
                            </div>
                        </Show>
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// Reset-link request. Outcomes use generic wording so the response never
/// reveals whether an account exists.
#[component]
fn ForgotPasswordPanel(initial_email: String, on_back: Callback<()>) -> impl IntoView {
    let (email, set_email) = signal(initial_email);
    let (status, set_status) = signal::<Option<Notice>>(None);
    let (sending, set_sending) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let address = email.get().trim().to_string();
        if let Err(message) = validate_reset_email(&address) {
            set_status.set(Notice::error(message));
            return;
        }
        set_status.set(None);
        set_sending.set(true);
        spawn_local(async move {
            let outcome = match api::send_reset_link(&address).await {
                Ok(()) => Notice::success("If the email exists, a reset link was sent."),
                Err(api::ApiError::Network(_)) => Notice::error("Network error. Try again."),
                Err(_) => Notice::error("Request failed. Try again."),
            };
            set_status.set(outcome);
            set_sending.set(false);
        });
    };

    view! {
        <form on:submit=submit novalidate>
            <NoticeBanner notice=status />
            <div class="form-group">
                <input
                    type="email"
                    placeholder="Enter your email"
                    prop:value=move || email.get()
                    disabled=move || sending.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
            </div>
            <button type="submit" class="login-btn" disabled=move || sending.get()>
                {move || if sending.get() { "SENDING..." } else { "SEND RESET LINK" }}
            </button>
            <button type="button" class="register-btn" disabled=move || sending.get() on:click=move |_| on_back.run(())>
                "BACK TO LOGIN"
            </button>
        </form>
    }
}
