//! Category cards with create, delete and default seeding.

#[cfg(test)]
#[path = "categories_test.rs"]
mod categories_test;

use leptos::prelude::*;

use crate::components::alert_banner::{AlertBanner, AlertTone};
use crate::components::confirm_modal::ConfirmModal;
use crate::components::loading::LoadingIndicator;
use crate::components::top_navbar::TopNavbar;
use crate::net::api::{self, ApiResult};
use crate::net::types::{Category, CategoryInput};
use crate::pages::current_user_id;
use crate::state::listing::Listing;
use crate::state::session::BrowserSession;
use crate::util::format;
use crate::util::routes::ProtectedRoute;
use crate::util::task;

/// Swatch colour for categories that never picked one.
pub const DEFAULT_COLOR: &str = "#6366f1";

/// Seeded defaults belong to every user and cannot be removed.
pub fn can_delete(category: &Category) -> bool {
    !category.is_default.unwrap_or(false)
}

/// Build a create request from the form fields.
pub fn category_input(name: &str, description: &str, color: &str, user_id: i64) -> Result<CategoryInput, &'static str> {
    let name = format::non_blank(name).ok_or("Category name is required")?;
    Ok(CategoryInput {
        name,
        description: format::non_blank(description),
        color_code: Some(format::non_blank(color).unwrap_or_else(|| DEFAULT_COLOR.to_owned())),
        user_id,
    })
}

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSession>>();
    let listing = RwSignal::new(Listing::<Category>::default());
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let color = RwSignal::new(DEFAULT_COLOR.to_owned());
    let show_form = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let notice = RwSignal::new(None::<String>);
    let pending_delete = RwSignal::new(None::<i64>);

    let reload = move || {
        let Some(user_id) = current_user_id(session) else {
            return;
        };
        listing.update(Listing::begin);
        task::spawn(async move {
            let fetched = api::list_categories(user_id).await;
            listing.update(|l| l.finish(fetched));
        });
    };
    reload();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(user_id) = current_user_id(session) else {
            return;
        };
        let input = match category_input(&name.get(), &description.get(), &color.get(), user_id) {
            Ok(input) => input,
            Err(message) => {
                notice.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        notice.set(None);
        task::spawn(async move {
            match api::create_category(&input).await {
                ApiResult::Success(created) => {
                    listing.update(|l| l.upsert(created.clone(), |c| c.id == created.id));
                    show_form.set(false);
                    name.set(String::new());
                    description.set(String::new());
                    color.set(DEFAULT_COLOR.to_owned());
                }
                ApiResult::Failure(failure) => notice.set(Some(format!("Error creating category: {failure}"))),
            }
            busy.set(false);
        });
    };

    let on_seed_defaults = move |_| {
        let Some(user_id) = current_user_id(session) else {
            return;
        };
        busy.set(true);
        task::spawn(async move {
            match api::create_default_categories(user_id).await {
                ApiResult::Success(()) => reload(),
                ApiResult::Failure(failure) => notice.set(Some(format!("Error creating defaults: {failure}"))),
            }
            busy.set(false);
        });
    };

    let on_confirm_delete = Callback::new(move |()| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        task::spawn(async move {
            match api::delete_category(id).await {
                ApiResult::Success(()) => listing.update(|l| l.remove_where(|c| c.id == id)),
                ApiResult::Failure(failure) => notice.set(Some(format!("Error deleting category: {failure}"))),
            }
        });
    });

    view! {
        <TopNavbar title=ProtectedRoute::Categories.title()>
            <button class="btn btn--primary" type="button" on:click=move |_| show_form.update(|open| *open = !*open)>
                {move || if show_form.get() { "Close" } else { "+ Add Category" }}
            </button>
        </TopNavbar>
        {move || notice.get().map(|message| view! {
            <AlertBanner tone=AlertTone::Danger message=message on_close=Callback::new(move |()| notice.set(None))/>
        })}
        <Show when=move || show_form.get()>
            <form class="card form-card" on:submit=on_submit>
                <h3 class="card__header">"Add New Category"</h3>
                <div class="form-grid">
                    <label class="form-label">
                        "Category Name *"
                        <input class="form-input" type="text" placeholder="e.g., Groceries"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))/>
                    </label>
                    <label class="form-label">
                        "Description"
                        <input class="form-input" type="text" placeholder="Optional description"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))/>
                    </label>
                    <label class="form-label">
                        "Color"
                        <input class="form-input form-input--color" type="color"
                            prop:value=move || color.get()
                            on:input=move |ev| color.set(event_target_value(&ev))/>
                    </label>
                </div>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>"Add Category"</button>
            </form>
        </Show>
        {move || {
            let (loading, error, rows) = listing.with(|l| (l.loading, l.error.clone(), l.items.clone()));
            if loading && rows.is_empty() {
                return view! { <LoadingIndicator/> }.into_any();
            }
            if let Some(error) = error {
                return view! { <section class="card"><p class="empty-state">{error}</p></section> }.into_any();
            }
            if rows.is_empty() {
                return view! {
                    <section class="card empty-state">
                        <h5>"No categories yet"</h5>
                        <p>"Create categories to organize your expenses"</p>
                        <button class="btn btn--outline" type="button" disabled=move || busy.get() on:click=on_seed_defaults>
                            "Create default categories"
                        </button>
                    </section>
                }.into_any();
            }
            view! {
                <div class="card-grid">
                    {rows.into_iter().map(|category| {
                        let id = category.id;
                        let deletable = can_delete(&category);
                        let swatch = format!("background: {}", category.color_code.clone().unwrap_or_else(|| DEFAULT_COLOR.to_owned()));
                        view! {
                            <div class="card category-card">
                                <div class="category-card__head">
                                    <span class="category-card__swatch" style=swatch></span>
                                    <div class="category-card__text">
                                        <h5>{category.name}</h5>
                                        <p class="text-muted">{category.description.unwrap_or_else(|| "No description".to_owned())}</p>
                                    </div>
                                    <Show when=move || deletable>
                                        <button class="btn btn--danger-outline btn--small" type="button" aria-label="Delete category"
                                            on:click=move |_| pending_delete.set(Some(id))>"Delete"</button>
                                    </Show>
                                </div>
                                <div class="category-card__foot">
                                    <span>{format!("{} expenses", category.expense_count.unwrap_or(0))}</span>
                                    <span class="fw-semibold">{format::amount(category.total_expense_amount.unwrap_or(0.0))}</span>
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>
            }.into_any()
        }}
        <ConfirmModal
            open=Signal::derive(move || pending_delete.get().is_some())
            title="Delete category"
            message=Signal::derive(|| "Are you sure you want to delete this category?".to_owned())
            on_confirm=on_confirm_delete
            on_cancel=Callback::new(move |()| pending_delete.set(None))
        />
    }
}
