//! Page chrome: document shell, catalog index, and preview wrapper.

use leptos::prelude::*;

use crate::catalog::{self, ComponentEntry};

/// Document shell shared by every page.
#[component]
pub fn Shell(
    /// Document title.
    #[prop(into)]
    title: String,
    /// Page body.
    children: Children,
) -> impl IntoView {
    view! {
        <!doctype html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{title}</title>
                <link rel="stylesheet" href="/static/app.css"/>
            </head>
            <body class="min-h-screen bg-background text-textPrimary antialiased">
                {children()}
            </body>
        </html>
    }
}

/// Catalog index: one card per registered component, with variant links.
#[component]
pub fn CatalogPage(
    /// Catalog display title (from configuration).
    #[prop(into)]
    title: String,
) -> impl IntoView {
    view! {
        <Shell title=title.clone()>
            <header class="border-b border-panelBorder">
                <div class="container mx-auto flex h-14 max-w-5xl items-center justify-between px-4">
                    <span class="text-lg font-semibold">{title}</span>
                    <a
                        href="/api/components"
                        class="text-sm text-textMuted hover:text-textPrimary transition-colors"
                    >
                        "JSON"
                    </a>
                </div>
            </header>
            <main class="container mx-auto max-w-5xl px-4 py-8">
                <div class="grid gap-4 md:grid-cols-2">
                    {catalog::entries().into_iter().map(entry_card).collect_view()}
                </div>
            </main>
        </Shell>
    }
}

fn entry_card(entry: &'static ComponentEntry) -> impl IntoView {
    view! {
        <div class="rounded-2xl border border-panelBorder bg-panel p-5">
            <p class="text-xs uppercase tracking-wide text-textMuted">{entry.category}</p>
            <h2 class="mt-1 text-lg font-semibold">
                <a href=entry.preview_path class="hover:text-primary transition-colors">
                    {entry.name}
                </a>
            </h2>
            <p class="mt-2 text-sm text-textMuted">{entry.description}</p>
            <nav class="mt-4 flex flex-wrap gap-2">{variant_links(entry)}</nav>
        </div>
    }
}

/// Preview wrapper: back link, component name, and variant navigation
/// around the rendered component.
#[component]
pub fn PreviewPage(
    /// Catalog entry being previewed.
    entry: &'static ComponentEntry,
    /// The rendered component.
    children: Children,
) -> impl IntoView {
    view! {
        <Shell title=entry.name.to_owned()>
            <header class="border-b border-panelBorder">
                <div class="container mx-auto flex h-14 max-w-5xl items-center justify-between gap-4 px-4">
                    <a
                        href="/"
                        class="text-sm text-textMuted hover:text-textPrimary transition-colors"
                    >
                        "← Catalog"
                    </a>
                    <span class="font-semibold">{entry.name}</span>
                    <nav class="flex flex-wrap gap-2">{variant_links(entry)}</nav>
                </div>
            </header>
            <main class="py-8">{children()}</main>
        </Shell>
    }
}

fn variant_links(entry: &'static ComponentEntry) -> impl IntoView {
    entry
        .variants
        .iter()
        .map(|variant| {
            view! {
                <a
                    href=entry.variant_href(variant)
                    class="rounded-full border border-panelBorder px-3 py-1 text-xs text-textMuted hover:text-textPrimary transition-colors"
                >
                    {variant.name}
                </a>
            }
        })
        .collect_view()
}
