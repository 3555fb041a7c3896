//! Two-column hero section with copy, a button pair, and a media panel.

use leptos::either::Either;
use leptos::prelude::*;

/// Default prop values for [`HeroSplit`].
pub mod defaults {
    pub const TITLE: &str = "Deploy to the cloud with confidence";
    pub const DESCRIPTION: &str = "Anim aute id magna aliqua ad ad non deserunt sunt. \
                                   Qui irure qui lorem cupidatat commodo. Elit sunt amet fugiat \
                                   veniam occaecat fugiat aliqua.";
    pub const PRIMARY_BTN_TEXT: &str = "Get started";
    pub const SECONDARY_BTN_TEXT: &str = "Live demo";
    pub const IMAGE_URL: &str = "";
    pub const IMAGE_PLACEHOLDER: &str = "[Image Placeholder]";
}

/// Split hero section.
///
/// Left column renders the heading, body copy, and two call-to-action
/// buttons; the right column renders an image when `image_url` is non-empty,
/// and a placeholder panel showing `image_placeholder` otherwise. Pure
/// function of its props: no validation, no side effects, identical props
/// produce identical markup.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <HeroSplit title="Ship faster" image_url="https://example.com/shot.png"/>
/// }
/// ```
#[component]
pub fn HeroSplit(
    /// Heading text. Also used as the image alt text.
    #[prop(into, default = defaults::TITLE.to_owned())]
    title: String,
    /// Body copy below the heading.
    #[prop(into, default = defaults::DESCRIPTION.to_owned())]
    description: String,
    /// Primary button label.
    #[prop(into, default = defaults::PRIMARY_BTN_TEXT.to_owned())]
    primary_btn_text: String,
    /// Secondary button label (rendered with a trailing arrow).
    #[prop(into, default = defaults::SECONDARY_BTN_TEXT.to_owned())]
    secondary_btn_text: String,
    /// Image source. Empty string means "no image".
    #[prop(into, default = defaults::IMAGE_URL.to_owned())]
    image_url: String,
    /// Text shown in the placeholder panel when no image is set.
    #[prop(into, default = defaults::IMAGE_PLACEHOLDER.to_owned())]
    image_placeholder: String,
) -> impl IntoView {
    let media = if image_url.is_empty() {
        Either::Left(view! {
            <div class="flex min-h-[320px] items-center justify-center rounded-2xl border border-dashed border-panelBorder bg-panel text-sm text-textMuted">
                {image_placeholder}
            </div>
        })
    } else {
        Either::Right(view! {
            <img
                class="min-h-[320px] w-full rounded-2xl object-cover"
                src=image_url
                alt=title.clone()
            />
        })
    };

    view! {
        <section class="container mx-auto grid max-w-5xl gap-10 px-6 py-16 md:grid-cols-2 md:items-center">
            <div class="max-w-xl">
                <h1 class="text-4xl font-bold tracking-tight md:text-5xl">{title}</h1>
                <p class="mt-6 text-lg text-textMuted">{description}</p>
                <div class="mt-8 flex items-center gap-5">
                    <button
                        type="button"
                        class="rounded-xl bg-primary px-5 py-3 text-sm font-semibold text-white hover:bg-primaryMuted transition-colors"
                    >
                        {primary_btn_text}
                    </button>
                    <button
                        type="button"
                        class="inline-flex items-center gap-1 text-sm font-semibold text-textPrimary hover:text-primary transition-colors"
                    >
                        {secondary_btn_text}
                        <span aria-hidden="true">"→"</span>
                    </button>
                </div>
            </div>
            <div>{media}</div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_defaults() -> String {
        view! { <HeroSplit/> }.to_html()
    }

    #[test]
    fn omitted_props_render_literal_defaults() {
        let html = render_defaults();
        assert!(html.contains(defaults::TITLE));
        assert!(html.contains("Anim aute id magna aliqua"));
        assert!(html.contains(defaults::PRIMARY_BTN_TEXT));
        assert!(html.contains(defaults::SECONDARY_BTN_TEXT));
    }

    #[test]
    fn empty_image_url_renders_placeholder_and_no_img() {
        let html = render_defaults();
        assert!(html.contains(defaults::IMAGE_PLACEHOLDER));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn image_url_renders_img_and_no_placeholder() {
        let html = view! { <HeroSplit image_url="https://x/y.png"/> }.to_html();
        assert!(html.contains("<img"));
        assert!(html.contains("https://x/y.png"));
        assert!(!html.contains(defaults::IMAGE_PLACEHOLDER));
    }

    #[test]
    fn image_alt_falls_back_to_title() {
        let html = view! { <HeroSplit title="Launch day" image_url="https://x/y.png"/> }.to_html();
        assert!(html.contains("alt=\"Launch day\""));
    }

    #[test]
    fn rendering_is_idempotent() {
        assert_eq!(render_defaults(), render_defaults());
    }

    #[test]
    fn custom_copy_replaces_defaults() {
        let html = view! {
            <HeroSplit title="Ship your next launch" primary_btn_text="Start free"/>
        }
        .to_html();
        assert!(html.contains("Ship your next launch"));
        assert!(html.contains("Start free"));
        assert!(!html.contains(defaults::TITLE));
    }
}
