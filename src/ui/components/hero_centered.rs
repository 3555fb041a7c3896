//! Centered hero section with optional badge, email capture, and disclaimer.

use leptos::prelude::*;

/// Default prop values for [`HeroCentered`].
pub mod defaults {
    pub const BADGE: &str = "Announcing our next round of funding";
    pub const TITLE: &str = "Data to enrich your online business";
    pub const DESCRIPTION: &str = "Anim aute id magna aliqua ad ad non deserunt sunt. \
                                   Qui irure qui lorem cupidatat commodo. Elit sunt amet fugiat \
                                   veniam occaecat fugiat aliqua.";
    pub const CTA_TEXT: &str = "Get started";
    pub const SHOW_EMAIL_INPUT: bool = true;
    pub const EMAIL_PLACEHOLDER: &str = "Enter your email";
    pub const DISCLAIMER: &str = "";
}

/// Centered hero section.
///
/// The badge pill and the disclaimer line are rendered only when their prop
/// is a non-empty string; `show_email_input` toggles the email field in the
/// CTA row (the button always renders). The email draft is local component
/// state: initialized empty, mutated only by the input binding, never read
/// by anything else, and discarded on unmount.
#[component]
pub fn HeroCentered(
    /// Pill label above the heading. Empty string hides it.
    #[prop(into, default = defaults::BADGE.to_owned())]
    badge: String,
    /// Heading text.
    #[prop(into, default = defaults::TITLE.to_owned())]
    title: String,
    /// Body copy below the heading.
    #[prop(into, default = defaults::DESCRIPTION.to_owned())]
    description: String,
    /// Call-to-action button label.
    #[prop(into, default = defaults::CTA_TEXT.to_owned())]
    cta_text: String,
    /// Whether to render the email field next to the button.
    #[prop(default = defaults::SHOW_EMAIL_INPUT)]
    show_email_input: bool,
    /// Placeholder for the email field.
    #[prop(into, default = defaults::EMAIL_PLACEHOLDER.to_owned())]
    email_placeholder: String,
    /// Fine print below the CTA row. Empty string hides it.
    #[prop(into, default = defaults::DISCLAIMER.to_owned())]
    disclaimer: String,
) -> impl IntoView {
    // Draft text for the capture field; lives only as long as the instance.
    let email = RwSignal::new(String::new());

    view! {
        <section class="mx-auto flex max-w-2xl flex-col items-center px-6 py-20 text-center">
            {(!badge.is_empty())
                .then(|| {
                    view! {
                        <span class="mb-6 inline-flex items-center rounded-full border border-panelBorder bg-panel px-3 py-1 text-xs font-medium text-textMuted">
                            {badge}
                        </span>
                    }
                })}
            <h1 class="text-4xl font-bold tracking-tight md:text-6xl">{title}</h1>
            <p class="mt-6 text-lg text-textMuted">{description}</p>
            <div class="mt-8 flex w-full max-w-md items-center justify-center gap-3">
                {show_email_input.then(|| email_field(email_placeholder, email))}
                <button
                    type="button"
                    class="h-11 shrink-0 rounded-xl bg-primary px-5 text-sm font-semibold text-white hover:bg-primaryMuted transition-colors"
                >
                    {cta_text}
                </button>
            </div>
            {(!disclaimer.is_empty())
                .then(|| {
                    view! { <p class="mt-4 text-xs text-textMuted">{disclaimer}</p> }
                })}
        </section>
    }
}

/// The email capture field. The draft signal is rendered as the initial
/// `value` attribute and kept in sync on the client via `bind:value`;
/// keystrokes touch nothing but the draft.
fn email_field(placeholder: String, draft: RwSignal<String>) -> impl IntoView {
    view! {
        <input
            type="email"
            class="h-11 w-full rounded-xl border border-panelBorder bg-background px-4 text-sm text-textPrimary placeholder:text-textMuted focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-primary"
            placeholder=placeholder
            value=move || draft.get()
            bind:value=draft
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_defaults() -> String {
        view! { <HeroCentered/> }.to_html()
    }

    #[test]
    fn omitted_props_render_literal_defaults() {
        let html = render_defaults();
        assert!(html.contains(defaults::BADGE));
        assert!(html.contains(defaults::TITLE));
        assert!(html.contains("Anim aute id magna aliqua"));
        assert!(html.contains(defaults::CTA_TEXT));
        assert!(html.contains(defaults::EMAIL_PLACEHOLDER));
    }

    #[test]
    fn empty_badge_leaves_no_element_behind() {
        let html = view! { <HeroCentered badge=""/> }.to_html();
        assert!(!html.contains(defaults::BADGE));
        assert!(!html.contains("rounded-full"));
    }

    #[test]
    fn custom_badge_text_is_rendered() {
        let html = view! { <HeroCentered badge="Beta"/> }.to_html();
        assert!(html.contains("Beta"));
        assert!(html.contains("rounded-full"));
    }

    #[test]
    fn email_input_can_be_toggled_off() {
        let html = view! { <HeroCentered show_email_input=false/> }.to_html();
        assert!(!html.contains("type=\"email\""));
        assert!(html.contains(defaults::CTA_TEXT));
    }

    #[test]
    fn email_input_renders_with_placeholder_by_default() {
        let html = render_defaults();
        assert!(html.contains("type=\"email\""));
        assert!(html.contains("placeholder=\"Enter your email\""));
    }

    #[test]
    fn email_field_starts_empty_and_reflects_the_draft() {
        let draft = RwSignal::new(String::new());
        let html = email_field("Enter your email".to_owned(), draft).to_html();
        assert!(html.contains("value=\"\""));

        draft.set("a@b.com".to_owned());
        let html = email_field("Enter your email".to_owned(), draft).to_html();
        assert!(html.contains("value=\"a@b.com\""));
    }

    #[test]
    fn disclaimer_is_hidden_unless_set() {
        let html = render_defaults();
        assert!(!html.contains("mt-4 text-xs"));

        let html = view! { <HeroCentered disclaimer="No spam ever."/> }.to_html();
        assert!(html.contains("No spam ever."));
    }

    #[test]
    fn rendering_is_idempotent() {
        assert_eq!(render_defaults(), render_defaults());
    }
}
