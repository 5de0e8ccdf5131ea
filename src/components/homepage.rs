//! Homepage Component
//!
//! Public landing page with the clinic's services and contact details.

use leptos::prelude::*;

use crate::config::CLINIC_NAME;
use crate::context::use_router;
use crate::session::Role;

/// Services advertised on the landing page: (icon, title, description)
const FEATURED_SERVICES: &[(&str, &str, &str)] = &[
    ("🩺", "Medical Consultation", "Professional medical consultation services with experienced healthcare providers"),
    ("📋", "Medical Certificates & Prescriptions", "Issuance of medical certificates and prescriptions for various needs"),
    ("🔬", "Laboratory & Diagnostic Services", "Complete laboratory testing and diagnostic services for accurate health assessment"),
    ("💻", "Online & Home Consultation", "Convenient remote consultation services from the comfort of your home"),
    ("✂️", "Circumcision Services", "Safe and professional circumcision procedures with proper care"),
    ("💉", "Insulin & Drainage Procedures", "Expert insulin administration and drainage procedures"),
    ("👁️", "Cyst Removal", "Professional minor surgical procedures including cyst removal"),
    ("🩹", "Wound Care & Suturing", "Comprehensive wound care and professional suturing services"),
];

const CONTACTS: &[(&str, &str, &str)] = &[
    ("📞", "Phone", "0995 865 987"),
    ("✉️", "Email", "wahing@theclinic.com"),
    ("🌐", "Website", "www.wahing.com"),
];

fn scroll_to_section(id: &str) {
    if let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    {
        element.scroll_into_view();
    }
}

#[component]
pub fn Homepage() -> impl IntoView {
    let router = use_router();
    let open_login = move |_| router.open_login(Role::Patient);

    view! {
        <div class="homepage">
            <nav class="navbar">
                <div class="nav-container">
                    <div class="nav-logo">
                        <h2>{CLINIC_NAME}</h2>
                    </div>
                    <div class="nav-menu">
                        <button class="nav-link" on:click=move |_| scroll_to_section("about")>"About"</button>
                        <button class="nav-link" on:click=move |_| scroll_to_section("services")>"Services"</button>
                        <button class="nav-link" on:click=open_login>"Book Appointment"</button>
                        <button class="nav-link login-btn" on:click=open_login>"Log In"</button>
                    </div>
                </div>
            </nav>

            <section class="hero-section">
                <div class="hero-content">
                    <div class="hero-text">
                        <h1>"Medical services that you can trust"</h1>
                        <p>"Your health is our priority. Book and manage appointments with ease."</p>
                        <div class="clinic-hours">
                            <p><strong>"Clinic Hours:"</strong>" Mon-Sat, 8:00 AM - 5:00 PM"</p>
                        </div>
                        <div>
                            <button class="cta-button" on:click=move |_| scroll_to_section("services")>
                                "View Services"
                            </button>
                            <button class="cta-button secondary" on:click=open_login>"Book Now"</button>
                        </div>
                    </div>
                </div>
            </section>

            <section id="services" class="services-section">
                <div class="container">
                    <h2>"Available Services"</h2>
                    <p class="subtitle">"Comprehensive healthcare services designed to meet all your medical needs"</p>
                    <div class="services-grid">
                        {FEATURED_SERVICES.iter().map(|(icon, title, description)| view! {
                            <div class="service-card">
                                <div class="service-icon">{*icon}</div>
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            <section id="about" class="about-section">
                <div class="container about-text">
                    <h2>"About Wahing Medical Services"</h2>
                    <p>
                        "At Wahing Medical Services, we are dedicated to providing accessible and compassionate \
                         healthcare to the residents of Cordova, Cebu, and its neighboring communities."
                    </p>
                    <div class="mission-section">
                        <h3>"Our Mission"</h3>
                        <p>"To offer patient-centered healthcare services that prioritize the well-being and satisfaction of our community."</p>
                    </div>
                    <div class="location-section">
                        <h3>"Our Location"</h3>
                        <p>"Conveniently located in Gabi Road, Cordova, Cebu. Right in front of Phoenix fuel station."</p>
                    </div>
                </div>
            </section>

            <section class="contact-section-main">
                <div class="container">
                    <h2>"Get In Touch"</h2>
                    <p class="subtitle">"Ready to schedule your appointment? Contact us today."</p>
                    <div class="contact-grid">
                        {CONTACTS.iter().map(|(icon, label, value)| view! {
                            <div class="contact-item">
                                <div class="contact-icon">{*icon}</div>
                                <h3>{*label}</h3>
                                <p>{*value}</p>
                            </div>
                        }).collect_view()}
                    </div>
                    <div class="contact-cta">
                        <button class="cta-button" on:click=open_login>"Book Your Appointment"</button>
                    </div>
                </div>
            </section>

            <footer class="footer">
                <div class="container footer-content">
                    <h3>{CLINIC_NAME}</h3>
                    <p>"Providing quality healthcare services to the Cordova community"</p>
                    <div class="footer-links">
                        <button class="link-button" on:click=move |_| router.open_login(Role::Staff)>"Staff Login"</button>
                        <button class="link-button" on:click=move |_| router.open_login(Role::Admin)>"Admin Login"</button>
                    </div>
                </div>
            </footer>
        </div>
    }
}
