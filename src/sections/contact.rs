use leptos::prelude::*;

#[component]
pub fn Contact(email: String, resume_url: String) -> impl IntoView {
    let has_resume = !resume_url.is_empty();
    let resume = has_resume.then(move || {
        view! {
            <a class="btn" href=resume_url download="resume.pdf">"Download CV"</a>
        }
    });

    view! {
        <section id="contact" class="section contact-section">
            <h2 class="section-title">"Contact"</h2>
            <p class="contact-text">
                "My inbox is always open, whether it's a role, a project, or just a question about something I've built."
            </p>
            <div class="contact-actions">
                <a class="btn btn-primary" href=format!("mailto:{}", email)>"Contact Me"</a>
                {resume}
            </div>
        </section>
    }
}
